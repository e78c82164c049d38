use std::{
  fmt,
  ops::{Deref, DerefMut},
};

/// The set of fatal problems a hook run produced.
#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

impl BuildError {
  pub fn into_vec(self) -> Vec<anyhow::Error> {
    self.0
  }
}

impl fmt::Display for BuildError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (index, error) in self.0.iter().enumerate() {
      if index > 0 {
        writeln!(f)?;
      }
      write!(f, "{error}")?;
    }
    Ok(())
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(value: Vec<anyhow::Error>) -> Self {
    Self(value)
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(value: anyhow::Error) -> Self {
    Self(vec![value])
  }
}

#[test]
fn test_display_joins_messages() {
  let error = BuildError::from(vec![anyhow::anyhow!("first"), anyhow::anyhow!("second")]);
  assert_eq!(error.to_string(), "first\nsecond");
  assert_eq!(error.into_vec().len(), 2);
}
