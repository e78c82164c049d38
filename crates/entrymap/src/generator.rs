use arcstr::ArcStr;
use entrymap_common::{
  EntryPoint, InputOptions, Manifest, ManifestOptions, NormalizedManifestOptions, Output,
  OutputOptions,
};
use entrymap_error::BuildResult;
use entrymap_fs::{FileSystem, OsFileSystem};
use entrymap_utils::{entry_name::entrypoint_name, indexmap::FxIndexMap};

use crate::{
  integrity::IntegrityTracker,
  merge::{MergeContext, merge_target},
  persist,
  utils::normalize_options::normalize_options,
};

/// Accumulates an entrypoints manifest over the host bundler's write phase.
///
/// The generator is driven by two lifecycle hooks: `on_build_start` registers
/// the declared entry inputs, and `on_write_bundle` folds one finalized
/// output target into the manifest document and persists it. A build that
/// produces several targets calls the write hook once per target; every call
/// merges into the same document, so earlier targets are never erased.
pub struct ManifestGenerator<Fs: FileSystem = OsFileSystem> {
  fs: Fs,
  options: NormalizedManifestOptions,
  entry_points: FxIndexMap<String, EntryPoint>,
  manifest: Manifest,
  integrity: IntegrityTracker,
  warnings: Vec<anyhow::Error>,
  primed: bool,
}

impl ManifestGenerator {
  pub fn new(options: ManifestOptions) -> BuildResult<Self> {
    Self::with_fs(options, OsFileSystem)
  }
}

impl<Fs: FileSystem> ManifestGenerator<Fs> {
  pub fn with_fs(options: ManifestOptions, fs: Fs) -> BuildResult<Self> {
    let options = normalize_options(options)?;
    Ok(Self {
      integrity: IntegrityTracker::new(options.integrity_strategy),
      entry_points: FxIndexMap::default(),
      manifest: Manifest::default(),
      warnings: Vec::new(),
      primed: false,
      options,
      fs,
    })
  }

  /// Registers every declared entry input under its logical name. An explicit
  /// `InputItem::name` wins over derivation from the import path.
  pub fn on_build_start(&mut self, options: &InputOptions) {
    for item in &options.input {
      let name = match &item.name {
        Some(name) => ArcStr::from(name.as_str()),
        None => ArcStr::from(entrypoint_name(&item.import)),
      };
      self
        .entry_points
        .insert(item.import.clone(), EntryPoint { name, files: Default::default() });
    }
  }

  /// Folds one finalized output target into the manifest and flushes the
  /// document to `out_file`, so a failure later in the build still leaves the
  /// targets written so far on disk.
  pub fn on_write_bundle(&mut self, options: &OutputOptions, bundle: &[Output]) -> BuildResult<()> {
    if !self.primed {
      self.primed = true;
      if self.options.modify_file {
        self.manifest =
          persist::load_manifest(&self.fs, &self.options.out_file, &mut self.warnings);
        if self.options.integrity_hash {
          self.integrity.seed(&self.manifest.integrity);
        }
      }
    }

    let mut ctx = MergeContext {
      fs: &self.fs,
      options: &self.options,
      output_options: options,
      manifest: &mut self.manifest,
      integrity: &mut self.integrity,
    };
    merge_target(&mut ctx, bundle)?;

    if self.options.integrity_hash {
      self.integrity.apply(&mut self.manifest);
    }

    persist::save_manifest(&self.fs, &self.options.out_file, &self.manifest)
  }

  /// The manifest document as accumulated so far.
  pub fn manifest(&self) -> &Manifest {
    &self.manifest
  }

  /// Entry registry captured at build start, keyed by raw import path.
  pub fn entry_points(&self) -> &FxIndexMap<String, EntryPoint> {
    &self.entry_points
  }

  /// Drains the non-fatal problems hooks ran into, e.g. an unreadable
  /// previous manifest.
  pub fn take_warnings(&mut self) -> Vec<anyhow::Error> {
    std::mem::take(&mut self.warnings)
  }
}

#[cfg(test)]
mod tests {
  use std::path::{Path, PathBuf};

  use arcstr::ArcStr;
  use entrymap_common::{
    InputItem, InputOptions, ManifestOptions, Output, OutputAsset, OutputChunk, OutputFormat,
    OutputOptions,
  };
  use entrymap_fs::{FileSystem, MemoryFileSystem};
  use pretty_assertions::assert_eq;

  use super::ManifestGenerator;

  const OUT_FILE: &str = "/out/entrypoints.json";

  fn base_options() -> ManifestOptions {
    ManifestOptions {
      out_file: Some(OUT_FILE.to_string()),
      cwd: Some(PathBuf::from("/")),
      ..Default::default()
    }
  }

  fn generator(options: ManifestOptions) -> ManifestGenerator<MemoryFileSystem> {
    ManifestGenerator::with_fs(options, MemoryFileSystem::new()).unwrap()
  }

  fn entry_chunk(name: &str, filename: &str, code: &str) -> Output {
    Output::Chunk(Box::new(OutputChunk {
      name: ArcStr::from(name),
      filename: ArcStr::from(filename),
      resolved_filename: PathBuf::from(format!("/dist/{filename}")),
      code: code.to_string(),
      is_entry: true,
    }))
  }

  fn asset(filename: &str, source: &str) -> Output {
    Output::Asset(Box::new(OutputAsset {
      filename: ArcStr::from(filename),
      resolved_filename: PathBuf::from(format!("/dist/{filename}")),
      source: source.as_bytes().to_vec(),
    }))
  }

  fn es_target() -> OutputOptions {
    OutputOptions::default()
  }

  #[test]
  fn a_single_js_entry_produces_the_documented_wire_shape() {
    let mut generator = generator(base_options());
    generator.on_build_start(&InputOptions { input: vec!["src/app.ts".into()] });
    generator
      .on_write_bundle(&es_target(), &[entry_chunk("app", "app.js", "console.log(1)")])
      .unwrap();

    let written = generator.fs.read_to_string(Path::new(OUT_FILE)).unwrap();
    let expected = r#"{
  "entrypoints": {
    "app": {
      "js": {
        "es": [
          "dist/app.js"
        ]
      }
    }
  }
}
"#;
    assert_eq!(written, expected);
  }

  #[test]
  fn stylesheets_join_their_entrypoint_under_css() {
    let mut generator = generator(base_options());
    generator.on_build_start(&InputOptions { input: vec!["src/app.ts".into()] });
    generator
      .on_write_bundle(
        &es_target(),
        &[entry_chunk("app", "app.js", ""), asset("app.css", "body{margin:0}")],
      )
      .unwrap();

    let files = &generator.manifest().entrypoints["app"];
    assert!(files.js["es"].contains("dist/app.js"));
    assert!(files.css.contains("dist/app.css"));
  }

  #[test]
  fn build_start_registers_logical_names() {
    let mut generator = generator(base_options());
    generator.on_build_start(&InputOptions {
      input: vec![
        "src/app.ts".into(),
        "src/views/dashboard.js".to_string().into(),
        InputItem { name: Some("custom".to_string()), import: "src/extra/main.tsx".to_string() },
      ],
    });

    let entry_points = generator.entry_points();
    assert_eq!(entry_points["src/app.ts"].name, "app");
    assert_eq!(entry_points["src/views/dashboard.js"].name, "dashboard");
    assert_eq!(entry_points["src/extra/main.tsx"].name, "custom");
  }

  #[test]
  fn a_configured_root_dir_overrides_the_target_directory() {
    let mut generator = generator(ManifestOptions {
      root_dir: Some("https://cdn.example.com/static/".to_string()),
      ..base_options()
    });
    generator.on_write_bundle(&es_target(), &[entry_chunk("app", "app.js", "")]).unwrap();

    let urls = &generator.manifest().entrypoints["app"].js["es"];
    assert!(urls.contains("https://cdn.example.com/static/app.js"));
  }

  #[test]
  fn later_targets_merge_without_erasing_earlier_ones() {
    let mut generator = generator(ManifestOptions {
      integrity_hash: Some(true),
      ..base_options()
    });
    generator.on_build_start(&InputOptions { input: vec!["src/app.ts".into()] });

    generator
      .on_write_bundle(
        &OutputOptions { dir: "dist/es".to_string(), format: OutputFormat::Esm },
        &[entry_chunk("app", "app.js", "export {}")],
      )
      .unwrap();
    generator
      .on_write_bundle(
        &OutputOptions { dir: "dist/cjs".to_string(), format: OutputFormat::Cjs },
        &[entry_chunk("app", "app.js", "module.exports = {}")],
      )
      .unwrap();

    let manifest = generator.manifest();
    let files = &manifest.entrypoints["app"];
    assert!(files.js["es"].contains("dist/es/app.js"));
    assert!(files.js["cjs"].contains("dist/cjs/app.js"));
    assert_eq!(manifest.integrity.len(), 2);
  }

  #[test]
  fn integrity_digests_are_persisted_alongside_the_entrypoints() {
    let mut generator = generator(ManifestOptions {
      integrity_hash: Some(true),
      ..base_options()
    });
    generator
      .on_write_bundle(
        &es_target(),
        &[entry_chunk("app", "app.js", "console.log(1)"), asset("app.css", "body{margin:0}")],
      )
      .unwrap();

    let manifest = generator.manifest();
    assert_eq!(
      manifest.integrity.get("dist/app.js").map(String::as_str),
      Some("sha384-vuz+yO71bcb30P4dMUNzy6/D2y+6d/n0KcOnt5clJtTBxEDoKAqGay0stFlC8Dpr")
    );
    assert_eq!(
      manifest.integrity.get("dist/app.css").map(String::as_str),
      Some("sha384-624hJ8nEe/uDdupZe/6Ug/U4fU/QRVsiTGq3cDxFtyteEAMgXERWXujDDQlJgeyk")
    );
  }

  #[test]
  fn source_maps_never_reach_the_integrity_table() {
    let mut generator = generator(ManifestOptions {
      integrity_hash: Some(true),
      ..base_options()
    });
    generator
      .on_write_bundle(
        &es_target(),
        &[entry_chunk("app", "app.js", "console.log(1)"), asset("app.js.map", r#"{"version":3}"#)],
      )
      .unwrap();

    let manifest = generator.manifest();
    assert!(manifest.integrity.contains_key("dist/app.js"));
    assert!(!manifest.integrity.contains_key("dist/app.js.map"));
    assert_eq!(manifest.integrity.len(), 1);

    let written = generator.fs.read_to_string(Path::new(OUT_FILE)).unwrap();
    assert!(!written.contains("app.js.map"));
  }

  #[test]
  fn integrity_stays_off_unless_asked_for() {
    let mut generator = generator(base_options());
    generator.on_write_bundle(&es_target(), &[entry_chunk("app", "app.js", "x")]).unwrap();

    assert!(generator.manifest().integrity.is_empty());
    let written = generator.fs.read_to_string(Path::new(OUT_FILE)).unwrap();
    assert!(!written.contains("integrity"));
  }

  #[test]
  fn modify_file_merges_into_the_previous_document() {
    let fs = MemoryFileSystem::new();
    {
      let mut generator = ManifestGenerator::with_fs(base_options(), fs.clone()).unwrap();
      generator.on_write_bundle(&es_target(), &[entry_chunk("app", "app.js", "one")]).unwrap();
    }

    let mut generator = ManifestGenerator::with_fs(
      ManifestOptions { modify_file: Some(true), ..base_options() },
      fs.clone(),
    )
    .unwrap();
    generator
      .on_write_bundle(&es_target(), &[entry_chunk("admin", "admin.js", "two")])
      .unwrap();
    assert!(generator.take_warnings().is_empty());

    let entrypoints = &generator.manifest().entrypoints;
    assert!(entrypoints["app"].js["es"].contains("dist/app.js"));
    assert!(entrypoints["admin"].js["es"].contains("dist/admin.js"));
  }

  #[test]
  fn without_modify_file_the_previous_document_is_replaced() {
    let fs = MemoryFileSystem::new();
    {
      let mut generator = ManifestGenerator::with_fs(base_options(), fs.clone()).unwrap();
      generator.on_write_bundle(&es_target(), &[entry_chunk("app", "app.js", "one")]).unwrap();
    }

    let mut generator = ManifestGenerator::with_fs(base_options(), fs.clone()).unwrap();
    generator
      .on_write_bundle(&es_target(), &[entry_chunk("admin", "admin.js", "two")])
      .unwrap();

    let entrypoints = &generator.manifest().entrypoints;
    assert!(!entrypoints.contains_key("app"));
    assert!(entrypoints.contains_key("admin"));
  }

  #[test]
  fn a_rebuild_evicts_stale_hashed_names_and_digests_across_runs() {
    let fs = MemoryFileSystem::new();
    let options = ManifestOptions {
      integrity_hash: Some(true),
      modify_file: Some(true),
      ..base_options()
    };

    {
      let mut generator = ManifestGenerator::with_fs(options.clone(), fs.clone()).unwrap();
      generator
        .on_write_bundle(&es_target(), &[entry_chunk("app", "app.abc123.js", "old build")])
        .unwrap();
      // No document exists on the very first run.
      assert_eq!(generator.take_warnings().len(), 1);
    }

    let mut generator = ManifestGenerator::with_fs(options, fs.clone()).unwrap();
    generator
      .on_write_bundle(&es_target(), &[entry_chunk("app", "app.def456.js", "new build")])
      .unwrap();

    let manifest = generator.manifest();
    let urls = &manifest.entrypoints["app"].js["es"];
    assert!(urls.contains("dist/app.def456.js"));
    assert!(!urls.contains("dist/app.abc123.js"));
    assert_eq!(urls.len(), 1);

    assert!(manifest.integrity.contains_key("dist/app.def456.js"));
    assert!(!manifest.integrity.contains_key("dist/app.abc123.js"));
    assert_eq!(manifest.integrity.len(), 1);
  }

  #[test]
  fn reserializing_a_loaded_document_is_byte_identical() {
    let fs = MemoryFileSystem::new();
    {
      let mut generator = ManifestGenerator::with_fs(
        ManifestOptions { integrity_hash: Some(true), ..base_options() },
        fs.clone(),
      )
      .unwrap();
      generator
        .on_write_bundle(
          &es_target(),
          &[entry_chunk("app", "app.js", "console.log(1)"), asset("app.css", "body{margin:0}")],
        )
        .unwrap();
    }
    let before = fs.read_to_string(Path::new(OUT_FILE)).unwrap();

    let mut generator = ManifestGenerator::with_fs(
      ManifestOptions { integrity_hash: Some(true), modify_file: Some(true), ..base_options() },
      fs.clone(),
    )
    .unwrap();
    generator.on_write_bundle(&es_target(), &[]).unwrap();

    let after = fs.read_to_string(Path::new(OUT_FILE)).unwrap();
    assert_eq!(after, before);
  }

  #[test]
  fn an_unparseable_previous_document_demotes_to_a_warning() {
    let fs = MemoryFileSystem::new();
    fs.create_dir_all(Path::new("/out")).unwrap();
    fs.write(Path::new(OUT_FILE), b"{ definitely not json").unwrap();

    let mut generator = ManifestGenerator::with_fs(
      ManifestOptions { modify_file: Some(true), ..base_options() },
      fs,
    )
    .unwrap();
    generator.on_write_bundle(&es_target(), &[entry_chunk("app", "app.js", "")]).unwrap();

    let warnings = generator.take_warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].to_string().contains("parse"));
    assert!(generator.take_warnings().is_empty());
    assert!(generator.manifest().entrypoints.contains_key("app"));
  }
}
