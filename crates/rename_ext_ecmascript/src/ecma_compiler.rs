use arcstr::ArcStr;
use oxc::{parser::Parser, span::SourceType};
use rename_ext_error::{BuildResult, RenameError};

use crate::ecma_ast::{EcmaAst, ProgramCell, ProgramDependent, ProgramOwner};

pub struct EcmaCompiler;

impl EcmaCompiler {
  /// `filename` is only used to label parse errors.
  pub fn parse(
    filename: &str,
    source: impl Into<ArcStr>,
    source_type: SourceType,
  ) -> BuildResult<EcmaAst> {
    let allocator = oxc::allocator::Allocator::default();
    let owner = ProgramOwner { source: source.into(), allocator };
    let program = ProgramCell::try_new(owner, |owner| {
      let ret = Parser::new(&owner.allocator, &owner.source, source_type).parse();
      if ret.errors.is_empty() && !ret.panicked {
        Ok(ProgramDependent { program: ret.program })
      } else {
        Err(RenameError::ParseFailed {
          file: filename.to_string(),
          messages: ret.errors.iter().map(ToString::to_string).collect(),
        })
      }
    })?;

    Ok(EcmaAst { program })
  }
}

#[test]
fn basic_test() {
  let ast = EcmaCompiler::parse("a.js", "import a from './a.js';", SourceType::mjs()).unwrap();
  assert_eq!(ast.program().body.len(), 1);
  assert_eq!(ast.source().as_str(), "import a from './a.js';");
}

#[test]
fn parse_errors_are_reported_with_the_file() {
  let err = EcmaCompiler::parse("broken.js", "import from;", SourceType::mjs()).unwrap_err();
  let Some(RenameError::ParseFailed { file, messages }) = err.downcast_ref::<RenameError>().next()
  else {
    panic!("expected a parse failure, got {err}");
  };
  assert_eq!(file, "broken.js");
  assert!(!messages.is_empty());
}

#[test]
fn typescript_needs_the_typescript_source_type() {
  let code = "import type { A } from './types.ts';\nexport const a: A = 1;";
  assert!(EcmaCompiler::parse("a.ts", code, SourceType::mjs()).is_err());
  assert!(EcmaCompiler::parse("a.ts", code, SourceType::ts()).is_ok());
}
