//! Solver: end-to-end API from CNF text to statistics.

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use std::time::Instant;

use log::info;
use thiserror::Error;

use crate::parser::{parse_cnf, ParseError};
use crate::saturation::{ClauseLimit, ClauseStore, GenerationContext, Saturation};
use crate::stats::{millis, Statistics};
use crate::syntax::Clause;

/// Solver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolverConfig {
    /// Retention bound for self-resolved resolvents.
    pub max_predicates_in_new_clause: ClauseLimit,
}

/// Solver error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Turns CNF text into statistics under a fixed configuration.
///
/// A solver holds no per-problem state. Every call to [`Solver::prepare`]
/// or [`Solver::solve`] gets its own id counter and clause store.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Create a solver with the default (unlimited) configuration.
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Solver { config }
    }

    /// Access the current configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Update the configuration from a key/value pair.
    pub fn set_option(&mut self, key: &str, value: &str) -> Result<(), SolveError> {
        match key {
            "max_predicates" | "max_predicates_in_new_clause" => {
                let limit = value
                    .parse::<ClauseLimit>()
                    .map_err(|_| SolveError::InvalidValue {
                        key: key.to_string(),
                        value: value.to_string(),
                    })?;
                self.config.max_predicates_in_new_clause = limit;
                Ok(())
            }
            _ => Err(SolveError::UnknownOption(key.to_string())),
        }
    }

    /// Parse `cnf` into a problem ready to saturate.
    ///
    /// On a parse error nothing of the partially read input survives.
    pub fn prepare(&self, cnf: &str) -> Result<Problem, SolveError> {
        let started = Instant::now();
        let mut ctx = GenerationContext::new();
        let clauses = parse_cnf(cnf, &mut ctx)?;
        let initial_clause_count = clauses.len();
        info!("parsed {} clauses", initial_clause_count);

        let saturation = Saturation::new(
            ClauseStore::from_clauses(clauses),
            ctx,
            self.config.max_predicates_in_new_clause,
        );
        Ok(Problem {
            saturation,
            initial_clause_count,
            started,
        })
    }

    /// Parse and saturate `cnf`.
    pub fn solve(&self, cnf: &str) -> Result<Statistics, SolveError> {
        Ok(self.prepare(cnf)?.saturate())
    }
}

/// A parsed clause set that has not been saturated yet.
#[derive(Debug)]
pub struct Problem {
    saturation: Saturation,
    initial_clause_count: usize,
    started: Instant,
}

impl Problem {
    pub fn initial_clause_count(&self) -> usize {
        self.initial_clause_count
    }

    /// Live count of kept resolvents, for reporting a run cut off by a
    /// caller-side time limit.
    pub fn kept_counter(&self) -> Arc<AtomicUsize> {
        self.saturation.kept_counter()
    }

    /// The parsed input clauses.
    pub fn clauses(&self) -> &[Clause] {
        self.saturation.store().clauses()
    }

    /// Run saturation to completion and report.
    ///
    /// Timing covers parsing and saturation.
    pub fn saturate(mut self) -> Statistics {
        let outcome = self.saturation.run();
        let stats = Statistics {
            initial_clause_count: self.initial_clause_count,
            kept_clause_count: self.saturation.kept_clause_count(),
            result: Some(outcome.is_satisfiable()),
            time_taken_ms: millis(self.started.elapsed()),
        };
        info!(
            "finished: result={:?} kept={} time={}ms",
            stats.result, stats.kept_clause_count, stats.time_taken_ms
        );
        stats
    }
}

/// Parse and saturate `cnf` with the given retention limit.
pub fn solve(cnf: &str, limit: ClauseLimit) -> Result<Statistics, SolveError> {
    Solver::with_config(SolverConfig {
        max_predicates_in_new_clause: limit,
    })
    .solve(cnf)
}
