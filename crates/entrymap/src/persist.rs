use std::path::Path;

use entrymap_common::Manifest;
use entrymap_error::BuildResult;
use entrymap_fs::FileSystem;

/// Loads a previously written manifest document. A missing, unreadable or
/// unparseable document is demoted to a warning and the caller proceeds from
/// an empty one, so a broken file never wedges the build.
pub fn load_manifest<Fs: FileSystem>(
  fs: &Fs,
  path: &Path,
  warnings: &mut Vec<anyhow::Error>,
) -> Manifest {
  if !fs.exists(path) {
    warnings.push(anyhow::anyhow!(
      "Manifest {} does not exist yet, starting from an empty document",
      path.display()
    ));
    return Manifest::default();
  }

  let content = match fs.read_to_string(path) {
    Ok(content) => content,
    Err(error) => {
      warnings.push(anyhow::anyhow!("Failed to read manifest {}: {error}", path.display()));
      return Manifest::default();
    }
  };

  match serde_json::from_str(&content) {
    Ok(manifest) => manifest,
    Err(error) => {
      warnings.push(anyhow::anyhow!("Failed to parse manifest {}: {error}", path.display()));
      Manifest::default()
    }
  }
}

/// Serializes the manifest as 2-space-indented JSON with a trailing newline
/// and writes it to `path`, creating parent directories as needed.
pub fn save_manifest<Fs: FileSystem>(fs: &Fs, path: &Path, manifest: &Manifest) -> BuildResult<()> {
  if let Some(parent) = path.parent() {
    fs.create_dir_all(parent)
      .map_err(|error| anyhow::anyhow!("Failed to create {}: {error}", parent.display()))?;
  }

  let mut json = serde_json::to_string_pretty(manifest)
    .map_err(|error| anyhow::anyhow!("Failed to serialize manifest: {error}"))?;
  json.push('\n');

  fs.write(path, json.as_bytes())
    .map_err(|error| anyhow::anyhow!("Failed to write manifest {}: {error}", path.display()))?;

  Ok(())
}
