use entrymap_common::{IntegrityStrategy, Manifest, Output};
use entrymap_error::BuildResult;
use entrymap_fs::FileSystem;
use entrymap_utils::{
  asset_path::same_logical_output, base64::to_standard_base64, indexmap::FxIndexMap,
};
use itertools::Itertools;
use sha2::{Digest, Sha384, Sha512};

/// Owns the subresource integrity digests accumulated over a build, one entry
/// per asset URL reachable through the manifest.
pub struct IntegrityTracker {
  strategy: IntegrityStrategy,
  hashes: FxIndexMap<String, String>,
}

impl IntegrityTracker {
  pub fn new(strategy: IntegrityStrategy) -> Self {
    Self { strategy, hashes: FxIndexMap::default() }
  }

  /// Adopts the digests of a previously persisted manifest, so files the
  /// current build does not touch keep theirs.
  pub fn seed(&mut self, existing: &FxIndexMap<String, String>) {
    self.hashes = existing.clone();
  }

  /// Digests one output record and stores it under `url`, evicting any digest
  /// recorded for an earlier build of the same logical file under a stale
  /// hashed name.
  pub fn record<Fs: FileSystem>(&mut self, fs: &Fs, url: &str, output: &Output) -> BuildResult<()> {
    let digest = match self.strategy {
      IntegrityStrategy::ContentSha384 => {
        format!("sha384-{}", to_standard_base64(Sha384::digest(output.bytes())))
      }
      IntegrityStrategy::FileSha512 => {
        let path = output.resolved_path();
        let content = fs.read(path).map_err(|error| {
          anyhow::anyhow!("Failed to read {} for integrity hashing: {error}", path.display())
        })?;
        format!("sha512-{}", to_standard_base64(Sha512::digest(&content)))
      }
    };

    let stale = self
      .hashes
      .keys()
      .filter(|existing| existing.as_str() != url && same_logical_output(existing, url))
      .cloned()
      .collect_vec();
    for key in stale {
      self.hashes.shift_remove(&key);
    }

    self.hashes.insert(url.to_string(), digest);
    Ok(())
  }

  /// Publishes the accumulated digests into the manifest document.
  pub fn apply(&self, manifest: &mut Manifest) {
    manifest.integrity = self.hashes.clone();
  }
}
