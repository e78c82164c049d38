use arcstr::ArcStr;

use crate::EntrypointFiles;

/// Registry record for one declared entry input, captured at build start.
#[derive(Debug, Default)]
pub struct EntryPoint {
  /// Logical name the entry's outputs are attributed to.
  pub name: ArcStr,
  pub files: EntrypointFiles,
}
