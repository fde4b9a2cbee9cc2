//! folres: resolution refutation for first-order clauses.
//!
//! This crate decides, by saturation, whether a set of first-order clauses in
//! conjunctive normal form is contradictory. Clauses are read from a
//! line-oriented text format, resolved pairwise with most general unifiers,
//! and simplified by removing complementary literal pairs until either the
//! empty clause appears or no clause remains to be processed.

pub mod parser;
pub mod saturation;
pub mod session;
pub mod stats;
pub mod syntax;
pub mod unify;

pub use saturation::{ClauseLimit, Outcome};
pub use session::{solve, SolveError, Solver, SolverConfig};
pub use stats::Statistics;
