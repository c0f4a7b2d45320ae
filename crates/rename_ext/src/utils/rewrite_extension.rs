use rename_ext_common::ExtensionMapping;
use rename_ext_utils::path_ext::extname;

/// Swaps the trailing extension of `path` according to `mappings`.
///
/// Returns `None` when `path` has no extension or the extension isn't a key of `mappings`.
/// Matching is exact and case-sensitive.
pub fn rewrite_extension(path: &str, mappings: &ExtensionMapping) -> Option<String> {
  let ext = extname(path);
  if ext.is_empty() {
    return None;
  }
  let to = mappings.get(ext)?;

  let stem = &path[..path.len() - ext.len()];
  let mut rewritten = String::with_capacity(stem.len() + to.len());
  rewritten.push_str(stem);
  rewritten.push_str(to);
  Some(rewritten)
}
