use entrymap_utils::indexmap::{FxIndexMap, FxIndexSet};
use serde::{Deserialize, Serialize};

/// The persisted entrypoints-manifest document.
///
/// All collections are insertion-ordered, so re-serializing a loaded document
/// yields the JSON it was loaded from.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
  #[serde(default)]
  pub entrypoints: FxIndexMap<String, EntrypointFiles>,
  /// Subresource integrity digests keyed by asset URL. Present only when
  /// integrity hashing is enabled.
  #[serde(default, skip_serializing_if = "FxIndexMap::is_empty")]
  pub integrity: FxIndexMap<String, String>,
}

/// Output files attributed to one entrypoint, bucketed by kind. Empty buckets
/// are omitted from the serialized document.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntrypointFiles {
  /// JavaScript URLs keyed by module format (`es`, `cjs`).
  #[serde(default, skip_serializing_if = "FxIndexMap::is_empty")]
  pub js: FxIndexMap<String, FxIndexSet<String>>,
  #[serde(default, skip_serializing_if = "FxIndexSet::is_empty")]
  pub css: FxIndexSet<String>,
  /// Deployable files that are neither JavaScript nor CSS (images, fonts).
  #[serde(default, skip_serializing_if = "FxIndexSet::is_empty")]
  pub assets: FxIndexSet<String>,
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::Manifest;

  fn sample() -> Manifest {
    serde_json::from_str(
      r#"{
        "entrypoints": {
          "app": {
            "js": { "es": ["dist/app.js"], "cjs": ["dist/app.cjs"] },
            "css": ["dist/app.css"],
            "assets": ["dist/logo.png"]
          },
          "admin": {
            "js": { "es": ["dist/admin.js"] }
          }
        },
        "integrity": {
          "dist/app.js": "sha384-xxx"
        }
      }"#,
    )
    .unwrap()
  }

  #[test]
  fn serialization_round_trips() {
    let manifest = sample();
    let json = serde_json::to_string_pretty(&manifest).unwrap();
    let reloaded: Manifest = serde_json::from_str(&json).unwrap();
    assert_eq!(reloaded, manifest);
  }

  #[test]
  fn reserialization_preserves_member_order() {
    let manifest = sample();
    let json = serde_json::to_string_pretty(&manifest).unwrap();
    let reloaded: Manifest = serde_json::from_str(&json).unwrap();
    assert_eq!(serde_json::to_string_pretty(&reloaded).unwrap(), json);
  }

  #[test]
  fn empty_buckets_are_omitted() {
    let mut manifest = Manifest::default();
    manifest.entrypoints.insert("app".to_string(), Default::default());

    let json = serde_json::to_string(&manifest).unwrap();
    assert_eq!(json, r#"{"entrypoints":{"app":{}}}"#);
  }

  #[test]
  fn absent_buckets_deserialize_to_empty_ones() {
    let manifest: Manifest = serde_json::from_str(r#"{"entrypoints":{"app":{}}}"#).unwrap();
    let files = &manifest.entrypoints["app"];
    assert!(files.js.is_empty());
    assert!(files.css.is_empty());
    assert!(files.assets.is_empty());
  }

  #[test]
  fn documents_without_an_entrypoints_key_deserialize_to_an_empty_manifest() {
    let manifest: Manifest =
      serde_json::from_str(r#"{"app":{"js":{"es":["dist/app.js"]}}}"#).unwrap();
    assert_eq!(manifest, Manifest::default());
  }
}
