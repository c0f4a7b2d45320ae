pub mod extension_mapping;
pub mod normalized_rename_options;
pub mod parser_options;

use std::path::PathBuf;

use serde::Deserialize;

use crate::{ExtensionMapping, ParserOptions};

/// Options as users write them. Everything but `mappings` has a default, see
/// `NormalizedRenameOptions` for the resolved form.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RenameOptions {
  // --- Selection
  pub include: Option<Vec<String>>,
  pub exclude: Option<Vec<String>>,
  pub cwd: Option<PathBuf>,

  // --- Rewriting
  pub mappings: Option<ExtensionMapping>,
  pub source_map: Option<bool>,
  pub parser: Option<ParserOptions>,
}

#[test]
fn test_deserialize() {
  let options: RenameOptions = serde_json::from_str(
    r#"{
      "include": ["src/**"],
      "sourceMap": false,
      "mappings": { ".js": ".mjs" },
      "parser": { "typescript": true }
    }"#,
  )
  .unwrap();

  assert_eq!(options.include, Some(vec!["src/**".to_string()]));
  assert_eq!(options.exclude, None);
  assert_eq!(options.source_map, Some(false));
  assert_eq!(options.mappings, Some(ExtensionMapping::from_iter([(".js", ".mjs")])));
  assert_eq!(options.parser, Some(ParserOptions { typescript: true, jsx: true }));
}

#[test]
fn test_deserialize_rejects_unknown_fields() {
  assert!(serde_json::from_str::<RenameOptions>(r#"{ "mapping": { ".js": ".mjs" } }"#).is_err());
}
