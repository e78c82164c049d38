use std::path::PathBuf;

use arcstr::ArcStr;

/// A rendered JavaScript chunk the host reports having written.
#[derive(Debug, Clone)]
pub struct OutputChunk {
  /// Logical name the chunk was rendered for.
  pub name: ArcStr,
  /// Final (possibly content-hashed) filename, relative to the target's
  /// output directory.
  pub filename: ArcStr,
  /// Absolute path the file was written to.
  pub resolved_filename: PathBuf,
  pub code: String,
  pub is_entry: bool,
}
