use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
  Esm,
  Cjs,
}

impl OutputFormat {
  /// Key this format's files are stored under in the manifest's `js` table.
  #[inline]
  pub fn wire_key(&self) -> &'static str {
    match self {
      Self::Esm => "es",
      Self::Cjs => "cjs",
    }
  }
}

impl Display for OutputFormat {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.wire_key())
  }
}
