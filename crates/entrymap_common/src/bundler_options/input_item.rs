/// One declared entry input.
#[derive(Debug, Default, Clone)]
pub struct InputItem {
  /// Logical name the host assigned. When absent, the name is derived from
  /// the import path.
  pub name: Option<String>,
  pub import: String,
}

impl From<&str> for InputItem {
  fn from(value: &str) -> Self {
    Self { name: None, import: value.to_string() }
  }
}

impl From<String> for InputItem {
  fn from(value: String) -> Self {
    Self { name: None, import: value }
  }
}
