//! Clause store: the append-only list of input and kept clauses.

use crate::syntax::Clause;

/// Input clauses followed by every kept resolvent, in insertion order.
///
/// Entries are never modified or removed once pushed. The saturation loop
/// reads the store by index while appending to it, so clauses added during
/// a pass are visited by that same pass.
#[derive(Debug, Clone, Default)]
pub struct ClauseStore {
    clauses: Vec<Clause>,
}

impl ClauseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        ClauseStore {
            clauses: Vec::new(),
        }
    }

    pub fn from_clauses(clauses: Vec<Clause>) -> Self {
        ClauseStore { clauses }
    }

    /// Append a clause.
    pub fn push(&mut self, clause: Clause) {
        debug_assert!(
            self.clauses.last().map_or(true, |last| last.id < clause.id),
            "clause ids must increase"
        );
        self.clauses.push(clause);
    }

    pub fn get(&self, index: usize) -> Option<&Clause> {
        self.clauses.get(index)
    }

    /// Get the clauses in insertion order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}
