use std::path::Path;

use arcstr::ArcStr;

use crate::{OutputAsset, OutputChunk};

/// One file record of a finalized output target, in emission order.
#[derive(Debug, Clone)]
pub enum Output {
  Chunk(Box<OutputChunk>),
  Asset(Box<OutputAsset>),
}

impl Output {
  pub fn filename(&self) -> &str {
    match self {
      Self::Chunk(chunk) => &chunk.filename,
      Self::Asset(asset) => &asset.filename,
    }
  }

  /// Absolute path the host reports having written this record to.
  pub fn resolved_path(&self) -> &Path {
    match self {
      Self::Chunk(chunk) => &chunk.resolved_filename,
      Self::Asset(asset) => &asset.resolved_filename,
    }
  }

  /// The record's content as the host holds it in memory.
  pub fn bytes(&self) -> &[u8] {
    match self {
      Self::Chunk(chunk) => chunk.code.as_bytes(),
      Self::Asset(asset) => &asset.source,
    }
  }

  pub fn is_entry(&self) -> bool {
    match self {
      Self::Chunk(chunk) => chunk.is_entry,
      Self::Asset(_) => false,
    }
  }

  /// Logical name, present only on designated entry chunks.
  pub fn entry_name(&self) -> Option<&ArcStr> {
    match self {
      Self::Chunk(chunk) if chunk.is_entry => Some(&chunk.name),
      _ => None,
    }
  }
}
