//! Syntax types for first-order logic terms, literals, and clauses.

mod clause;
mod literal;
mod term;

pub use clause::{Clause, ClauseId};
pub use literal::{Atom, Literal};
pub use term::{ExprKind, Term, Var};
