use std::{
  io::{self, Read, Write},
  path::Path,
};

use vfs::{MemoryFS, VfsPath};

use crate::FileSystem;

/// In-memory [`FileSystem`] backed by [`vfs::MemoryFS`], for tests that
/// exercise hashing and persistence without touching the real disk.
///
/// Clones share the same backing store, so one instance can span several
/// generator lifetimes the way a real directory spans process runs.
#[derive(Debug, Clone)]
pub struct MemoryFileSystem {
  root: VfsPath,
}

impl MemoryFileSystem {
  pub fn new() -> Self {
    Self { root: VfsPath::new(MemoryFS::new()) }
  }

  fn locate(&self, path: &Path) -> io::Result<VfsPath> {
    self.root.join(path.to_string_lossy().trim_start_matches('/')).map_err(into_io_error)
  }
}

impl Default for MemoryFileSystem {
  fn default() -> Self {
    Self::new()
  }
}

impl FileSystem for MemoryFileSystem {
  fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
    let mut content = Vec::new();
    self.locate(path)?.open_file().map_err(into_io_error)?.read_to_end(&mut content)?;
    Ok(content)
  }

  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    self.locate(path)?.read_to_string().map_err(into_io_error)
  }

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
    self.locate(path)?.create_file().map_err(into_io_error)?.write_all(content)
  }

  fn create_dir_all(&self, path: &Path) -> io::Result<()> {
    self.locate(path)?.create_dir_all().map_err(into_io_error)
  }

  fn exists(&self, path: &Path) -> bool {
    self.locate(path).and_then(|path| path.exists().map_err(into_io_error)).unwrap_or(false)
  }
}

fn into_io_error(error: vfs::VfsError) -> io::Error {
  io::Error::other(error.to_string())
}
