use entrymap_common::{FileKind, Manifest, NormalizedManifestOptions, Output, OutputOptions};
use entrymap_error::BuildResult;
use entrymap_fs::FileSystem;
use entrymap_utils::{
  asset_path::{compose_asset_url, same_logical_output},
  indexmap::FxIndexSet,
};

use crate::integrity::IntegrityTracker;

/// Per-target state for folding one finalized bundle into the manifest.
pub struct MergeContext<'a, Fs> {
  pub fs: &'a Fs,
  pub options: &'a NormalizedManifestOptions,
  pub output_options: &'a OutputOptions,
  pub manifest: &'a mut Manifest,
  pub integrity: &'a mut IntegrityTracker,
}

/// Folds one output target's records into the manifest document.
///
/// Ownership is positional: an entry record switches the active entrypoint
/// name, and every following record belongs to it until the next entry
/// record. Records emitted before any entry land under the `""` bucket.
/// Source maps are dropped entirely.
pub fn merge_target<Fs: FileSystem>(
  ctx: &mut MergeContext<'_, Fs>,
  bundle: &[Output],
) -> BuildResult<()> {
  let root_dir = ctx.options.root_dir.as_deref().unwrap_or(ctx.output_options.dir.as_str());
  let format_key = ctx.output_options.format.wire_key();

  let mut active_name = "";
  for output in bundle {
    if let Some(name) = output.entry_name() {
      active_name = name.as_str();
    }

    let kind = FileKind::of(output.filename());
    if kind == FileKind::Map {
      continue;
    }

    let url = compose_asset_url(root_dir, output.filename());

    if ctx.options.integrity_hash {
      ctx.integrity.record(ctx.fs, &url, output)?;
    }

    let files = ctx.manifest.entrypoints.entry(active_name.to_string()).or_default();
    match kind {
      FileKind::Js => insert_unique(files.js.entry(format_key.to_string()).or_default(), url),
      FileKind::Css => insert_unique(&mut files.css, url),
      _ => insert_unique(&mut files.assets, url),
    }
  }

  Ok(())
}

/// Adds `url` to a bucket, replacing any member that identifies the same
/// logical output under a stale hashed name.
fn insert_unique(bucket: &mut FxIndexSet<String>, url: String) {
  if !bucket.contains(&url) {
    bucket.retain(|existing| !same_logical_output(existing, &url));
  }
  bucket.insert(url);
}
