//! Substitution: an ordered sequence of variable bindings.

use std::fmt;

use crate::syntax::{Term, Var};

/// A single binding `var ↦ term`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Binding {
    pub var: Var,
    pub term: Term,
}

/// An ordered substitution σ = [X₁ ↦ t₁, ..., Xₙ ↦ tₙ].
///
/// Bindings are applied sequentially: X₁ ↦ t₁ is applied to the input, then
/// X₂ ↦ t₂ to that result, and so on. The composition order produced by
/// unification relies on this, so the bindings are kept as a list rather
/// than a map and an earlier binding may rewrite variables bound later.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Substitution {
    bindings: Vec<Binding>,
}

impl Substitution {
    /// Create an empty substitution (identity).
    pub fn empty() -> Self {
        Substitution {
            bindings: Vec::new(),
        }
    }

    /// Create a substitution with a single binding.
    pub fn singleton(var: Var, term: Term) -> Self {
        Substitution {
            bindings: vec![Binding { var, term }],
        }
    }

    /// Append a binding; it is applied after every existing one.
    pub fn bind(&mut self, var: Var, term: Term) {
        self.bindings.push(Binding { var, term });
    }

    /// Append all bindings of `tail` after the bindings of `self`.
    pub fn extend(&mut self, tail: Substitution) {
        self.bindings.extend(tail.bindings);
    }

    /// First binding for `var`, if any.
    pub fn lookup(&self, var: &Var) -> Option<&Term> {
        self.bindings
            .iter()
            .find(|b| &b.var == var)
            .map(|b| &b.term)
    }

    /// Apply this substitution to a term, one binding at a time.
    pub fn apply_to_term(&self, term: &Term) -> Term {
        self.bindings
            .iter()
            .fold(term.clone(), |acc, b| acc.replace_var(&b.var, &b.term))
    }

    /// Apply this substitution to every term of a list.
    pub fn apply_to_terms(&self, terms: &[Term]) -> Vec<Term> {
        terms.iter().map(|t| self.apply_to_term(t)).collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if this substitution is empty (has no bindings).
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, b) in self.bindings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}\\{}", b.term, b.var)?;
        }
        write!(f, "}}")
    }
}
