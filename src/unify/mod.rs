//! Unification: computing most general unifiers for first-order terms.

mod substitution;
mod unify;

pub use substitution::{Binding, Substitution};
pub use unify::{unify, unify_literals, unify_many, UnifyError, UnifyResult};
