//! Run statistics.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Counts and timing for one solve.
///
/// Serializes to the flat camelCase object callers consume, e.g.
/// `{"initialClauseCount":3,"keptClauseCount":4,"result":false,"timeTaken":34}`.
/// `result` is `true` when no contradiction was found, `false` when the
/// empty clause was derived, and `null` when the run was cut off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub initial_clause_count: usize,
    pub kept_clause_count: usize,
    pub result: Option<bool>,
    #[serde(rename = "timeTaken")]
    pub time_taken_ms: u64,
}

impl Statistics {
    /// Statistics for a run that was stopped before it produced an answer,
    /// with the resolvents it had kept by then.
    pub fn aborted(initial_clause_count: usize, kept_clause_count: usize, elapsed: Duration) -> Self {
        Statistics {
            initial_clause_count,
            kept_clause_count,
            result: None,
            time_taken_ms: millis(elapsed),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

pub(crate) fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = match self.result {
            Some(true) => "satisfiable (no contradiction found)",
            Some(false) => "unsatisfiable (empty clause derived)",
            None => "no result",
        };
        writeln!(f, "Result: {}", verdict)?;
        writeln!(f, "Initial clauses: {}", self.initial_clause_count)?;
        writeln!(f, "Kept clauses: {}", self.kept_clause_count)?;
        write!(f, "Time taken: {} ms", self.time_taken_ms)
    }
}
