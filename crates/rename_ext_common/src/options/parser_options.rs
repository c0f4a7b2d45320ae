use oxc::span::SourceType;
use serde::Deserialize;

/// Syntax extensions the parser accepts on top of standard ES modules.
///
/// Defaults to JSX on, TypeScript off, which covers the output of most bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ParserOptions {
  pub typescript: bool,
  pub jsx: bool,
}

impl Default for ParserOptions {
  fn default() -> Self {
    Self { typescript: false, jsx: true }
  }
}

impl ParserOptions {
  pub fn source_type(self) -> SourceType {
    SourceType::mjs().with_typescript(self.typescript).with_jsx(self.jsx)
  }
}

#[test]
fn test_source_type() {
  let source_type = ParserOptions::default().source_type();
  assert!(source_type.is_module());
  assert!(source_type.is_jsx());
  assert!(!source_type.is_typescript());

  let source_type = ParserOptions { typescript: true, jsx: false }.source_type();
  assert!(source_type.is_module());
  assert!(source_type.is_typescript());
}
