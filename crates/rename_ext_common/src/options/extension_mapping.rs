use rename_ext_utils::indexmap::FxIndexMap;
use serde::Deserialize;

/// Input extension to output extension, both with their leading dot, e.g. `".js" => ".mjs"`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ExtensionMapping(FxIndexMap<String, String>);

impl ExtensionMapping {
  pub fn get(&self, extension: &str) -> Option<&str> {
    self.0.get(extension).map(String::as_str)
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.0.iter().map(|(from, to)| (from.as_str(), to.as_str()))
  }

  /// Every extension has to start with a dot and carry at least one more character.
  pub fn validate(&self) -> Result<(), String> {
    if self.is_empty() {
      return Err("`mappings` must contain at least one extension".to_string());
    }
    for (from, to) in self.iter() {
      for ext in [from, to] {
        if !ext.starts_with('.') || ext.len() < 2 {
          return Err(format!(
            "`mappings` entry {from:?} => {to:?} is invalid: {ext:?} is not an extension like \".js\""
          ));
        }
      }
    }
    Ok(())
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ExtensionMapping {
  fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
    Self(iter.into_iter().map(|(from, to)| (from.into(), to.into())).collect())
  }
}

#[test]
fn test_validate() {
  assert!(ExtensionMapping::from_iter([(".js", ".mjs")]).validate().is_ok());
  assert!(ExtensionMapping::from_iter([(".js", ".mjs"), (".ts", ".js")]).validate().is_ok());
  assert!(ExtensionMapping::default().validate().is_err());
  assert!(ExtensionMapping::from_iter([("js", ".mjs")]).validate().is_err());
  assert!(ExtensionMapping::from_iter([(".js", "mjs")]).validate().is_err());
  assert!(ExtensionMapping::from_iter([(".", ".mjs")]).validate().is_err());
}

#[test]
fn test_deserialize_keeps_order() {
  let mapping: ExtensionMapping =
    serde_json::from_str(r#"{ ".ts": ".js", ".mts": ".mjs", ".cts": ".cjs" }"#).unwrap();
  assert_eq!(
    mapping.iter().collect::<Vec<_>>(),
    vec![(".ts", ".js"), (".mts", ".mjs"), (".cts", ".cjs")]
  );
  assert_eq!(mapping.get(".mts"), Some(".mjs"));
  assert_eq!(mapping.get(".js"), None);
}
