use std::{io, path::Path};

/// The blocking file-system surface the manifest generator runs against.
///
/// Hooks must finish their reads and the manifest flush before returning to
/// the host, so every operation is synchronous.
pub trait FileSystem {
  fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

  fn read_to_string(&self, path: &Path) -> io::Result<String>;

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;

  fn create_dir_all(&self, path: &Path) -> io::Result<()>;

  fn exists(&self, path: &Path) -> bool;
}
