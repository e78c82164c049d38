/// Joins a public root with a bundler-relative filename into the URL recorded
/// in the manifest. An empty root yields the bare filename.
pub fn compose_asset_url(root_dir: &str, filename: &str) -> String {
  let root_dir = root_dir.trim_end_matches('/');
  if root_dir.is_empty() {
    filename.to_string()
  } else {
    format!("{root_dir}/{filename}")
  }
}

/// Extension of the last path segment, `None` when it has no dot.
pub fn extension_of(path: &str) -> Option<&str> {
  let file_name = file_name_of(path);
  file_name.rfind('.').map(|index| &file_name[index + 1..])
}

/// Whether a dot-delimited stem segment looks like a cache-busting hash: at
/// least six `[0-9A-Za-z_-]` characters, at least one of them a digit.
pub fn is_hash_segment(segment: &str) -> bool {
  segment.len() >= 6
    && segment.bytes().any(|byte| byte.is_ascii_digit())
    && segment.bytes().all(|byte| byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-')
}

/// Whether two asset URLs identify the same logical output file, i.e. one is a
/// rebuild of the other under a fresh content hash.
///
/// URLs match when they live in the same directory, carry the same extension,
/// and their stems agree after hash segments are dropped: `app.abc123.js`
/// matches `app.def456.js`, while `app.es.1a2b3c4.js` and `app.cjs.9z8y7x6.js`
/// stay distinct. The leading stem segment is always significant.
pub fn same_logical_output(a: &str, b: &str) -> bool {
  if directory_of(a) != directory_of(b) || extension_of(a) != extension_of(b) {
    return false;
  }
  significant_segments(a).eq(significant_segments(b))
}

fn file_name_of(path: &str) -> &str {
  path.rfind('/').map_or(path, |index| &path[index + 1..])
}

fn directory_of(path: &str) -> &str {
  path.rfind('/').map_or("", |index| &path[..index])
}

fn significant_segments(path: &str) -> impl Iterator<Item = &str> {
  let file_name = file_name_of(path);
  let stem = file_name.rfind('.').map_or(file_name, |index| &file_name[..index]);
  stem
    .split('.')
    .enumerate()
    .filter_map(|(index, segment)| (index == 0 || !is_hash_segment(segment)).then_some(segment))
}

#[test]
fn test_compose_asset_url() {
  assert_eq!(compose_asset_url("dist", "app.js"), "dist/app.js");
  assert_eq!(compose_asset_url("dist/", "app.js"), "dist/app.js");
  assert_eq!(
    compose_asset_url("https://cdn.example.com/static", "app.js"),
    "https://cdn.example.com/static/app.js"
  );
  assert_eq!(compose_asset_url("", "app.js"), "app.js");
}

#[test]
fn test_extension_of() {
  assert_eq!(extension_of("dist/app.js"), Some("js"));
  assert_eq!(extension_of("app.abc123.css"), Some("css"));
  assert_eq!(extension_of("dist/LICENSE"), None);
  assert_eq!(extension_of("v1.2/chunk"), None);
}

#[test]
fn test_is_hash_segment() {
  assert!(is_hash_segment("abc123"));
  assert!(is_hash_segment("Aa1_b2-c3"));
  assert!(!is_hash_segment("es"));
  assert!(!is_hash_segment("legacy")); // no digit
  assert!(!is_hash_segment("a1b2c")); // too short
  assert!(!is_hash_segment("abc.123"));
}

#[test]
fn test_same_logical_output() {
  assert!(same_logical_output("dist/app.abc123.js", "dist/app.def456.js"));
  assert!(same_logical_output("dist/app.js", "dist/app.abc123.js"));
  assert!(same_logical_output("dist/theme.abc123.css", "dist/theme.def456.css"));
  assert!(!same_logical_output("dist/app.es.1a2b3c4.js", "dist/app.cjs.9z8y7x6.js"));
  assert!(!same_logical_output("dist/app.js", "dist/vendor.js"));
  assert!(!same_logical_output("dist/app.js", "dist/app.css"));
  assert!(!same_logical_output("es/app.js", "cjs/app.js"));
}
