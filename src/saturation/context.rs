//! Per-run generation context: the source of clause ids.

use crate::syntax::ClauseId;

/// Hands out strictly increasing clause ids, starting at 1.
///
/// The same counter numbers parsed clauses and derived resolvents, and the
/// id of a resolvent is the scope its freshened variables live in. Each
/// solve owns one context, so independent runs never share ids.
#[derive(Debug, Clone, Default)]
pub struct GenerationContext {
    last_id: ClauseId,
}

impl GenerationContext {
    pub fn new() -> Self {
        GenerationContext { last_id: 0 }
    }

    /// Reserve the next clause id.
    pub fn next_clause_id(&mut self) -> ClauseId {
        self.last_id += 1;
        self.last_id
    }

    /// The most recently issued id, or 0 if none has been issued.
    pub fn last_clause_id(&self) -> ClauseId {
        self.last_id
    }
}
