use oxc::ast::ast;

pub trait ExpressionExt<'ast> {
  fn as_string_literal(&self) -> Option<&ast::StringLiteral<'ast>>;
}

impl<'ast> ExpressionExt<'ast> for ast::Expression<'ast> {
  fn as_string_literal(&self) -> Option<&ast::StringLiteral<'ast>> {
    let ast::Expression::StringLiteral(lit) = self else {
      return None;
    };
    Some(lit)
  }
}

pub trait ArgumentExt<'ast> {
  /// `foo('./a.js')` yields the literal, `foo(...args)` or `foo(`./${a}`)` don't.
  fn as_string_literal(&self) -> Option<&ast::StringLiteral<'ast>>;
}

impl<'ast> ArgumentExt<'ast> for ast::Argument<'ast> {
  fn as_string_literal(&self) -> Option<&ast::StringLiteral<'ast>> {
    let ast::Argument::StringLiteral(lit) = self else {
      return None;
    };
    Some(lit)
  }
}
