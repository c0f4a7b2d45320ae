use std::path::{Path, PathBuf};

use sugar_path::SugarPath;

/// Decides whether a module id takes part in a pass, based on include/exclude glob patterns.
///
/// - Relative patterns are resolved against `cwd`, patterns starting with `**` are left as-is.
/// - Ids are made absolute against `cwd` before matching.
/// - `exclude` wins over `include`. Without `include` patterns every id that isn't excluded
///   matches.
/// - Virtual ids (containing `\0`) never match.
#[derive(Debug, Clone)]
pub struct PathFilter {
  include: Vec<String>,
  exclude: Vec<String>,
  cwd: PathBuf,
}

impl PathFilter {
  pub fn new(include: &[String], exclude: &[String], cwd: PathBuf) -> Self {
    let resolve = |patterns: &[String]| {
      patterns.iter().map(|pattern| resolve_pattern(pattern, &cwd)).collect::<Vec<_>>()
    };
    Self { include: resolve(include), exclude: resolve(exclude), cwd }
  }

  pub fn is_match(&self, id: &str) -> bool {
    if id.contains('\0') {
      return false;
    }

    let path = Path::new(id).absolutize_with(self.cwd.as_path());
    let path = path.to_slash_lossy();
    let path: &str = &path;

    if self.exclude.iter().any(|pattern| fast_glob::glob_match(pattern, path)) {
      return false;
    }

    self.include.is_empty()
      || self.include.iter().any(|pattern| fast_glob::glob_match(pattern, path))
  }
}

fn resolve_pattern(pattern: &str, cwd: &Path) -> String {
  if pattern.starts_with("**") || Path::new(pattern).is_absolute() {
    return pattern.to_string();
  }
  cwd.join(pattern).normalize().to_slash_lossy().into_owned()
}
