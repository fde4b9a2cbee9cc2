//! The saturation loop.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use log::{debug, info, trace};

use super::resolvent::{build_resolvent, self_resolve};
use super::{ClauseStore, GenerationContext};
use crate::syntax::Clause;
use crate::unify::{unify_many, UnifyResult};

/// Upper bound on the literal count of kept resolvents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClauseLimit {
    /// Keep every self-resolved resolvent.
    #[default]
    Unlimited,
    /// Keep a self-resolved resolvent only if it has fewer than `n` literals.
    Max(usize),
}

impl ClauseLimit {
    /// Interpret a raw integer setting; zero and negative values disable the limit.
    pub fn from_raw(raw: i64) -> Self {
        match usize::try_from(raw) {
            Ok(0) | Err(_) => ClauseLimit::Unlimited,
            Ok(n) => ClauseLimit::Max(n),
        }
    }

    /// Whether a resolvent with `literals` literals may be kept.
    pub fn admits(&self, literals: usize) -> bool {
        match self {
            ClauseLimit::Unlimited => true,
            ClauseLimit::Max(n) => literals < *n,
        }
    }
}

impl FromStr for ClauseLimit {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("unlimited") {
            return Ok(ClauseLimit::Unlimited);
        }
        s.parse::<i64>().map(ClauseLimit::from_raw)
    }
}

impl fmt::Display for ClauseLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClauseLimit::Unlimited => write!(f, "unlimited"),
            ClauseLimit::Max(n) => write!(f, "{}", n),
        }
    }
}

/// Final answer of a saturation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The store saturated without deriving the empty clause.
    Satisfiable,
    /// The empty clause was derived.
    Unsatisfiable,
}

impl Outcome {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, Outcome::Satisfiable)
    }
}

/// What one clause pair produced.
struct PairResult {
    kept: Vec<Clause>,
    refuted: bool,
}

/// Saturation state: the store, its id source, and the retention limit.
///
/// Each outer step takes the clause under the cursor and resolves it against
/// every other clause in the store, including clauses appended during that
/// same step. The run stops with [`Outcome::Unsatisfiable`] as soon as a
/// resolvent becomes empty, and with [`Outcome::Satisfiable`] once the
/// cursor reaches the last clause. Nothing bounds the number of steps: on
/// inputs whose resolvents keep growing, `run` does not return.
#[derive(Debug)]
pub struct Saturation {
    store: ClauseStore,
    ctx: GenerationContext,
    limit: ClauseLimit,
    kept: Arc<AtomicUsize>,
}

impl Saturation {
    /// Start from a store whose ids were issued by `ctx`.
    pub fn new(store: ClauseStore, ctx: GenerationContext, limit: ClauseLimit) -> Self {
        Saturation {
            store,
            ctx,
            limit,
            kept: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Run to completion.
    pub fn run(&mut self) -> Outcome {
        info!(
            "saturating {} clauses (max predicates in new clause: {})",
            self.store.len(),
            self.limit
        );

        let mut cursor = 0;
        while cursor + 1 < self.store.len() {
            let mut index = 0;
            while index < self.store.len() {
                let current = &self.store.clauses()[cursor];
                let other = &self.store.clauses()[index];
                index += 1;
                if current.same_as(other) {
                    continue;
                }

                let pair = resolve_pair(current, other, self.limit, &mut self.ctx);
                for clause in pair.kept {
                    debug!("      Resolution: {}", clause);
                    self.store.push(clause);
                    self.kept.fetch_add(1, Ordering::Relaxed);
                }
                if pair.refuted {
                    debug!("$F");
                    info!("empty clause derived; {} clauses kept", self.kept_clause_count());
                    return Outcome::Unsatisfiable;
                }
            }
            cursor += 1;
        }

        debug!("No more clauses to use");
        debug!("$T");
        info!(
            "saturated without contradiction; {} clauses kept",
            self.kept_clause_count()
        );
        Outcome::Satisfiable
    }

    /// Number of resolvents appended to the store so far.
    pub fn kept_clause_count(&self) -> usize {
        self.kept.load(Ordering::Relaxed)
    }

    /// Shared handle on the kept-clause count, readable while `run` is busy
    /// on another thread.
    pub fn kept_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.kept)
    }

    pub fn store(&self) -> &ClauseStore {
        &self.store
    }
}

/// Resolve every clashing literal pair of `current` against `other`.
///
/// Returns the self-resolved resolvents that pass the limit, in the order
/// they were built, and stops early when a resolvent comes out empty.
fn resolve_pair(
    current: &Clause,
    other: &Clause,
    limit: ClauseLimit,
    ctx: &mut GenerationContext,
) -> PairResult {
    debug!("Matching clauses:");
    debug!("  {}", current);
    debug!("  {}", other);

    let mut kept = Vec::new();
    for lit1 in &current.literals {
        for lit2 in &other.literals {
            if !lit1.clashes_with(lit2) {
                continue;
            }
            let subst = match unify_many(lit1.args(), lit2.args()) {
                UnifyResult::Success(subst) => subst,
                UnifyResult::Failure(reason) => {
                    trace!("    Substitutions: FALSE ({})", reason);
                    continue;
                }
            };
            trace!("    Substitutions: {}", subst);

            let mut resolvent = build_resolvent(current, other, &subst, ctx);
            let simplified = self_resolve(&mut resolvent);
            if resolvent.is_empty() {
                return PairResult {
                    kept,
                    refuted: true,
                };
            }
            if simplified && limit.admits(resolvent.len()) {
                kept.push(resolvent);
            }
        }
    }

    PairResult {
        kept,
        refuted: false,
    }
}
