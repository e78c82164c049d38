use std::path::Path;

use entrymap_common::{ManifestOptions, NormalizedManifestOptions};
use entrymap_error::BuildResult;
use sugar_path::SugarPath;

pub fn normalize_options(raw_options: ManifestOptions) -> BuildResult<NormalizedManifestOptions> {
  let out_file = match raw_options.out_file {
    Some(out_file) if !out_file.is_empty() => out_file,
    _ => Err(vec![anyhow::anyhow!("You must supply `out_file` to the manifest generator")])?,
  };

  let cwd =
    raw_options.cwd.unwrap_or_else(|| std::env::current_dir().expect("Failed to get current dir"));

  Ok(NormalizedManifestOptions {
    out_file: Path::new(&out_file).absolutize_with(&cwd),
    root_dir: raw_options.root_dir.map(|dir| dir.trim_end_matches('/').to_string()),
    integrity_hash: raw_options.integrity_hash.unwrap_or(false),
    integrity_strategy: raw_options.integrity_strategy.unwrap_or_default(),
    modify_file: raw_options.modify_file.unwrap_or(false),
    cwd,
  })
}
