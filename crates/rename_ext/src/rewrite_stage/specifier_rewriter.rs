use oxc::{
  ast::{AstKind, ast::Program},
  ast_visit::Visit,
};
use rename_ext_common::{ExtensionMapping, ModuleSpecifierReference};
use rename_ext_error::{BuildError, BuildResult};

use super::{specifier_extractor::extract_specifier, text_patcher::TextPatcher};
use crate::utils::rewrite_extension::rewrite_extension;

/// Walks a chunk and records an overwrite for every specifier whose extension is mapped.
pub struct SpecifierRewriter<'me, 'text> {
  mappings: &'me ExtensionMapping,
  patcher: &'me mut TextPatcher<'text>,
  rewritten: usize,
  error: Option<BuildError>,
}

impl<'me, 'text> SpecifierRewriter<'me, 'text> {
  pub fn new(mappings: &'me ExtensionMapping, patcher: &'me mut TextPatcher<'text>) -> Self {
    Self { mappings, patcher, rewritten: 0, error: None }
  }

  /// Returns how many specifiers were rewritten. The first failed overwrite stops recording
  /// and is returned instead.
  pub fn rewrite(mut self, program: &Program) -> BuildResult<usize> {
    self.visit_program(program);
    match self.error {
      Some(error) => Err(error),
      None => Ok(self.rewritten),
    }
  }

  fn rewrite_reference(&mut self, reference: ModuleSpecifierReference) -> BuildResult<()> {
    let Some(rewritten) = rewrite_extension(reference.value, self.mappings) else {
      return Ok(());
    };

    // Always single quotes, whatever the literal was written with.
    self.patcher.overwrite(reference.start, reference.end, quote_specifier(&rewritten))?;

    tracing::trace!(from = reference.value, to = %rewritten, "rewrote specifier");
    self.rewritten += 1;
    Ok(())
  }
}

impl<'a> Visit<'a> for SpecifierRewriter<'_, '_> {
  fn enter_node(&mut self, kind: AstKind<'a>) {
    if self.error.is_some() {
      return;
    }
    if let Some(reference) = extract_specifier(kind) {
      if let Err(error) = self.rewrite_reference(reference) {
        self.error = Some(error);
      }
    }
  }
}

/// Wraps `value` in single quotes, escaping whatever would end the literal early.
fn quote_specifier(value: &str) -> String {
  let mut quoted = String::with_capacity(value.len() + 2);
  quoted.push('\'');
  for char in value.chars() {
    match char {
      '\\' => quoted.push_str("\\\\"),
      '\n' => quoted.push_str("\\n"),
      '\r' => quoted.push_str("\\r"),
      '\u{2028}' => quoted.push_str("\\u2028"),
      '\u{2029}' => quoted.push_str("\\u2029"),
      '\'' => quoted.push_str("\\'"),
      c => quoted.push(c),
    }
  }
  quoted.push('\'');
  quoted
}
