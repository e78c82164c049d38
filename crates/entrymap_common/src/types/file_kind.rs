use entrymap_utils::asset_path::extension_of;

/// Classification of one output filename, by its last extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
  Js,
  Css,
  Map,
  Other,
}

impl FileKind {
  /// The extension match is case-sensitive; anything unrecognized, including
  /// extension-less names, is `Other`.
  pub fn of(filename: &str) -> FileKind {
    match extension_of(filename) {
      Some("js" | "mjs" | "cjs") => FileKind::Js,
      Some("css") => FileKind::Css,
      Some("map") => FileKind::Map,
      _ => FileKind::Other,
    }
  }
}

#[test]
fn test_file_kind_of() {
  assert_eq!(FileKind::of("app.js"), FileKind::Js);
  assert_eq!(FileKind::of("worker.mjs"), FileKind::Js);
  assert_eq!(FileKind::of("chunk.abc123.cjs"), FileKind::Js);
  assert_eq!(FileKind::of("theme.css"), FileKind::Css);
  assert_eq!(FileKind::of("app.js.map"), FileKind::Map);
  assert_eq!(FileKind::of("app.css.map"), FileKind::Map);
  assert_eq!(FileKind::of("logo.png"), FileKind::Other);
  assert_eq!(FileKind::of("font.woff2"), FileKind::Other);
  assert_eq!(FileKind::of("LICENSE"), FileKind::Other);
  assert_eq!(FileKind::of("APP.JS"), FileKind::Other);
}
