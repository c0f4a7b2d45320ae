use oxc::ast::AstKind;
use rename_ext_common::ModuleSpecifierReference;
use rename_ext_ecmascript::{ArgumentExt, ExpressionExt};

/// Finds the module specifier literal carried by `kind`, if it is one of:
///
/// - `import x from './a.js'` and `import './a.js'`
/// - `import('./a.js')`
/// - any call whose first argument is a string literal, which covers `require('./a.js')`
/// - `export { x } from './a.js'` and `export * from './a.js'`
///
/// The call form deliberately matches every callee, `foo('./a.js')` included. Only literals
/// with a mapped extension get rewritten later on, and narrowing the match would leave
/// `require` wrappers emitted by bundlers untouched.
pub fn extract_specifier<'a>(kind: AstKind<'a>) -> Option<ModuleSpecifierReference<'a>> {
  let literal = match kind {
    AstKind::ImportDeclaration(decl) => &decl.source,
    AstKind::ImportExpression(expr) => expr.source.as_string_literal()?,
    AstKind::CallExpression(expr) => expr.arguments.first()?.as_string_literal()?,
    AstKind::ExportNamedDeclaration(decl) => decl.source.as_ref()?,
    AstKind::ExportAllDeclaration(decl) => &decl.source,
    _ => return None,
  };

  Some(ModuleSpecifierReference {
    start: literal.span.start,
    end: literal.span.end,
    value: literal.value.as_str(),
  })
}
