use std::path::PathBuf;

use crate::IntegrityStrategy;

/// [`ManifestOptions`](crate::ManifestOptions) with defaults applied and
/// `out_file` resolved against `cwd`.
#[derive(Debug)]
pub struct NormalizedManifestOptions {
  pub out_file: PathBuf,
  /// URL prefix with any trailing slash trimmed; `None` falls back to the
  /// output directory of the target being written.
  pub root_dir: Option<String>,
  pub integrity_hash: bool,
  pub integrity_strategy: IntegrityStrategy,
  pub modify_file: bool,
  pub cwd: PathBuf,
}
