use std::fmt::Debug;

use arcstr::ArcStr;
use oxc::{allocator::Allocator, ast::ast::Program};
use self_cell::self_cell;

pub struct ProgramOwner {
  pub source: ArcStr,
  pub allocator: Allocator,
}

pub struct ProgramDependent<'cell> {
  pub program: Program<'cell>,
}

self_cell!(
  /// Keeps `Program<'ast>` together with the source and arena it borrows from, so a parsed
  /// chunk can be passed around without threading `'ast` through every caller.
  pub struct ProgramCell {
    owner: ProgramOwner,

    #[covariant]
    dependent: ProgramDependent,
  }
);

pub struct EcmaAst {
  pub program: ProgramCell,
}

impl EcmaAst {
  pub fn source(&self) -> &ArcStr {
    &self.program.borrow_owner().source
  }

  pub fn program(&self) -> &Program<'_> {
    &self.program.borrow_dependent().program
  }
}

impl Debug for EcmaAst {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("EcmaAst")
      .field("source", &self.source())
      .finish_non_exhaustive()
  }
}
