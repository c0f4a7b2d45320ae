mod ast_ext;
mod ecma_ast;
mod ecma_compiler;

pub use crate::{
  ast_ext::{ArgumentExt, ExpressionExt},
  ecma_ast::EcmaAst,
  ecma_compiler::EcmaCompiler,
};
