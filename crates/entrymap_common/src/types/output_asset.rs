use std::path::PathBuf;

use arcstr::ArcStr;

/// An emitted non-chunk file: an extracted stylesheet, a source map, an image.
#[derive(Debug, Clone)]
pub struct OutputAsset {
  /// Final filename, relative to the target's output directory.
  pub filename: ArcStr,
  /// Absolute path the file was written to.
  pub resolved_filename: PathBuf,
  pub source: Vec<u8>,
}
