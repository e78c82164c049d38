pub mod integrity_strategy;
pub mod normalized_manifest_options;

use std::path::PathBuf;

use crate::IntegrityStrategy;

/// Raw manifest-generator configuration. Every field is optional; option
/// normalization resolves defaults before the first hook runs.
#[derive(Debug, Default, Clone)]
pub struct ManifestOptions {
  /// Path the manifest document is written to. Required.
  pub out_file: Option<String>,
  /// URL prefix for recorded assets. Defaults to each target's output
  /// directory.
  pub root_dir: Option<String>,
  /// Record subresource integrity digests under `integrity`. Defaults to
  /// `false`.
  pub integrity_hash: Option<bool>,
  pub integrity_strategy: Option<IntegrityStrategy>,
  /// Load an existing document at `out_file` and merge into it instead of
  /// starting from scratch. Defaults to `false`.
  pub modify_file: Option<bool>,
  pub cwd: Option<PathBuf>,
}
