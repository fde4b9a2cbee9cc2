//! Unification algorithm: Robinson's algorithm for computing MGU.

use thiserror::Error;

use super::Substitution;
use crate::syntax::{Literal, Term, Var};

/// Result of a unification attempt.
///
/// Failure is a distinct outcome and never an empty substitution; the empty
/// substitution is a successful unifier of already identical expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnifyResult {
    /// Unification succeeded with the given most general unifier.
    Success(Substitution),
    /// Unification failed.
    Failure(UnifyError),
}

impl UnifyResult {
    pub fn is_success(&self) -> bool {
        matches!(self, UnifyResult::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, UnifyResult::Failure(_))
    }

    /// The unifier, discarding the failure reason.
    pub fn ok(self) -> Option<Substitution> {
        match self {
            UnifyResult::Success(subst) => Some(subst),
            UnifyResult::Failure(_) => None,
        }
    }
}

/// Reasons why unification can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnifyError {
    /// Occurs check failed: variable would occur in its own binding.
    #[error("{var} occurs in {term}")]
    OccursCheck { var: Var, term: Term },
    /// Constant, function or predicate symbols don't match.
    #[error("symbol clash: {expected} vs {found}")]
    SymbolClash { expected: String, found: String },
    /// A constant met a function application.
    #[error("cannot unify constant with function: {left} vs {right}")]
    KindMismatch { left: Term, right: Term },
    /// Argument lists of different length.
    #[error("arity mismatch: {expected} vs {found} arguments")]
    ArityMismatch { expected: usize, found: usize },
}

/// Compute the most general unifier of two terms.
///
/// Uses Robinson's unification algorithm with occurs check. When exactly one
/// side is a variable it is bound to the other side; when both are distinct
/// variables the left one is bound to the right one.
pub fn unify(t1: &Term, t2: &Term) -> UnifyResult {
    match (t1, t2) {
        (Term::Const(a), Term::Const(b)) => {
            if a == b {
                UnifyResult::Success(Substitution::empty())
            } else {
                UnifyResult::Failure(UnifyError::SymbolClash {
                    expected: a.clone(),
                    found: b.clone(),
                })
            }
        }
        (Term::Var(a), Term::Var(b)) if a == b => UnifyResult::Success(Substitution::empty()),
        (Term::Var(var), other) | (other, Term::Var(var)) => bind(var, other),
        (Term::Const(_), Term::App(_, _)) | (Term::App(_, _), Term::Const(_)) => {
            UnifyResult::Failure(UnifyError::KindMismatch {
                left: t1.clone(),
                right: t2.clone(),
            })
        }
        (Term::App(f, f_args), Term::App(g, g_args)) => {
            if f != g {
                return UnifyResult::Failure(UnifyError::SymbolClash {
                    expected: f.clone(),
                    found: g.clone(),
                });
            }
            unify_many(f_args, g_args)
        }
    }
}

fn bind(var: &Var, term: &Term) -> UnifyResult {
    if term.occurs(var) {
        UnifyResult::Failure(UnifyError::OccursCheck {
            var: var.clone(),
            term: term.clone(),
        })
    } else {
        UnifyResult::Success(Substitution::singleton(var.clone(), term.clone()))
    }
}

/// Unify two argument lists element-wise.
///
/// The head pair is unified first and its unifier is applied to the
/// remaining elements of both lists before they are unified; the result is
/// the head unifier followed by the tail unifier. Lists of different length
/// never unify.
pub fn unify_many(left: &[Term], right: &[Term]) -> UnifyResult {
    if left.len() != right.len() {
        return UnifyResult::Failure(UnifyError::ArityMismatch {
            expected: left.len(),
            found: right.len(),
        });
    }

    let mut left = left.to_vec();
    let mut right = right.to_vec();
    let mut result = Substitution::empty();

    for i in 0..left.len() {
        let head = match unify(&left[i], &right[i]) {
            UnifyResult::Success(subst) => subst,
            failure => return failure,
        };
        if !head.is_empty() {
            for term in left[i + 1..].iter_mut().chain(right[i + 1..].iter_mut()) {
                *term = head.apply_to_term(term);
            }
        }
        result.extend(head);
    }

    UnifyResult::Success(result)
}

/// Compute the MGU of the argument lists of two literals.
///
/// Predicate names must match; signs are ignored, so resolution callers
/// check polarity themselves.
pub fn unify_literals(l1: &Literal, l2: &Literal) -> UnifyResult {
    if !l1.same_predicate(l2) {
        return UnifyResult::Failure(UnifyError::SymbolClash {
            expected: l1.predicate().to_string(),
            found: l2.predicate().to_string(),
        });
    }
    unify_many(l1.args(), l2.args())
}
