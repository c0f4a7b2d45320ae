use std::ops::{Deref, DerefMut};

/// Causes a rename pass can fail with. They travel inside `anyhow::Error`, use
/// `downcast_ref::<RenameError>()` to inspect them.
#[derive(Debug, thiserror::Error)]
pub enum RenameError {
  #[error("Invalid options: {0}")]
  InvalidOptions(String),

  /// The parser handed out a specifier literal without a usable span.
  #[error("Malformed specifier position {start}..{end} in {file}")]
  MalformedSpecifierPosition { file: String, start: u32, end: u32 },

  #[error("Failed to parse {file}: {}", messages.join("; "))]
  ParseFailed { file: String, messages: Vec<String> },
}

#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  pub fn downcast_ref<E>(&self) -> impl Iterator<Item = &E>
  where
    E: std::fmt::Display + std::fmt::Debug + Send + Sync + 'static,
  {
    self.0.iter().filter_map(anyhow::Error::downcast_ref::<E>)
  }
}

impl std::fmt::Display for BuildError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for (idx, error) in self.0.iter().enumerate() {
      if idx > 0 {
        writeln!(f)?;
      }
      write!(f, "{error:#}")?;
    }
    Ok(())
  }
}

impl std::error::Error for BuildError {}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<RenameError> for BuildError {
  fn from(error: RenameError) -> Self {
    Self(vec![error.into()])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn build_error_keeps_typed_causes() {
  let err = BuildError::from(RenameError::MalformedSpecifierPosition {
    file: "index.js".to_string(),
    start: 0,
    end: 0,
  });
  assert_eq!(err.len(), 1);
  assert!(matches!(
    err.downcast_ref::<RenameError>().next(),
    Some(RenameError::MalformedSpecifierPosition { start: 0, end: 0, .. })
  ));
  assert_eq!(err.to_string(), "Malformed specifier position 0..0 in index.js");
}

#[test]
fn parse_failed_joins_messages() {
  let err = RenameError::ParseFailed {
    file: "a.js".to_string(),
    messages: vec!["Unexpected token".to_string(), "Expected `;`".to_string()],
  };
  assert_eq!(err.to_string(), "Failed to parse a.js: Unexpected token; Expected `;`");
}
