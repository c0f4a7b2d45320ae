use std::{ffi::OsStr, path::Path};

/// Extension of the last path segment, dot included. Mirrors `Path::extension`, so dot files
/// (`.env`) and paths ending with a separator have none and yield `""`.
pub fn extname(path: &str) -> &str {
  Path::new(path)
    .extension()
    .and_then(OsStr::to_str)
    .and_then(|ext| {
      let stem = path.strip_suffix(ext)?.strip_suffix('.')?;
      Some(&path[stem.len()..])
    })
    .unwrap_or_default()
}

#[test]
fn test_extname() {
  assert_eq!(extname("./util.js"), ".js");
  assert_eq!(extname("../types.d.ts"), ".ts");
  assert_eq!(extname("/abs/dir.v1/index.mjs"), ".mjs");
  assert_eq!(extname("index.JS"), ".JS");
  assert_eq!(extname("file."), ".");
}

#[test]
fn test_extname_without_extension() {
  assert_eq!(extname(""), "");
  assert_eq!(extname("lodash"), "");
  assert_eq!(extname(".env"), "");
  assert_eq!(extname("./dir.v1/file"), "");
  assert_eq!(extname("./dir.js/"), "");
  assert_eq!(extname(".."), "");
}
