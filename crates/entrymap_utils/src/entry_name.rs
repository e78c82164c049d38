use std::sync::LazyLock;

use regex::Regex;

static ENTRY_NAME_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)([a-z0-9-]+)\.(?:[mc]?[jt]s|[jt]sx)$").unwrap());

/// Derives the logical entrypoint name from an entry's import path.
///
/// The name is the trailing `[a-z0-9-]` run of the file stem, with a
/// recognized source extension (`js`, `jsx`, `ts`, `tsx`, `mjs`, `cjs`, `mts`,
/// `cts`) stripped. Paths that don't end in a source file are returned
/// unchanged, so callers always have something to key buckets by.
pub fn entrypoint_name(path: &str) -> &str {
  ENTRY_NAME_RE.captures(path).and_then(|captures| captures.get(1)).map_or(path, |m| m.as_str())
}

#[test]
fn test_entrypoint_name() {
  assert_eq!(entrypoint_name("src/app.ts"), "app");
  assert_eq!(entrypoint_name("src/admin-panel.tsx"), "admin-panel");
  assert_eq!(entrypoint_name("worker.mjs"), "worker");
  assert_eq!(entrypoint_name("SRC/APP.TS"), "APP");
  // Charset stops at `_`, matching only the trailing run of the stem.
  assert_eq!(entrypoint_name("src/my_app.ts"), "app");
}

#[test]
fn test_entrypoint_name_falls_back_to_the_path() {
  assert_eq!(entrypoint_name("README.md"), "README.md");
  assert_eq!(entrypoint_name("src/app.ts.bak"), "src/app.ts.bak");
  assert_eq!(entrypoint_name(""), "");
}
