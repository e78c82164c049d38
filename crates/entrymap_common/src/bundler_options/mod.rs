pub mod input_item;
pub mod output_format;

use crate::{InputItem, OutputFormat};

/// Build-start notification: the inputs the host bundler was asked to build.
#[derive(Debug, Default, Clone)]
pub struct InputOptions {
  pub input: Vec<InputItem>,
}

/// The options of one finalized output target, reported at write time.
#[derive(Debug, Clone)]
pub struct OutputOptions {
  /// Output directory the target's files were written under, relative to the
  /// host's working directory.
  pub dir: String,
  pub format: OutputFormat,
}

impl Default for OutputOptions {
  fn default() -> Self {
    Self { dir: "dist".to_string(), format: OutputFormat::Esm }
  }
}
