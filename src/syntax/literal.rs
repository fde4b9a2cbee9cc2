//! Literals: signed predicate applications.

use std::fmt;

use super::term::{write_args, ExprKind, Term};

/// An atom (predicate application).
///
/// Examples:
/// - `human(socrates)` - unary predicate
/// - `father(X, Y)` - binary predicate
/// - `raining()` - 0-ary predicate (proposition)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom {
    pub predicate: String,
    pub args: Vec<Term>,
}

impl Atom {
    pub fn new(predicate: impl Into<String>, args: Vec<Term>) -> Self {
        Atom {
            predicate: predicate.into(),
            args,
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.predicate)?;
        write_args(f, &self.args)?;
        write!(f, ")")
    }
}

/// A literal is a signed atom.
///
/// - Positive literal: `human(socrates)`
/// - Negative literal: `-human(socrates)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    /// True if positive, false if negated
    pub positive: bool,
    /// The underlying atom
    pub atom: Atom,
}

impl Literal {
    /// Create a positive literal.
    pub fn positive(atom: Atom) -> Self {
        Literal {
            positive: true,
            atom,
        }
    }

    /// Create a negative literal.
    pub fn negative(atom: Atom) -> Self {
        Literal {
            positive: false,
            atom,
        }
    }

    /// Create a positive literal from predicate and args.
    pub fn pos(predicate: impl Into<String>, args: Vec<Term>) -> Self {
        Literal::positive(Atom::new(predicate, args))
    }

    /// Create a negative literal from predicate and args.
    pub fn neg(predicate: impl Into<String>, args: Vec<Term>) -> Self {
        Literal::negative(Atom::new(predicate, args))
    }

    pub fn kind(&self) -> ExprKind {
        ExprKind::Predicate
    }

    pub fn is_predicate(&self) -> bool {
        self.kind() == ExprKind::Predicate
    }

    pub fn predicate(&self) -> &str {
        &self.atom.predicate
    }

    pub fn args(&self) -> &[Term] {
        &self.atom.args
    }

    /// Predicate names match. Arity is not compared here; a mismatch surfaces
    /// later as a unification failure.
    pub fn same_predicate(&self, other: &Literal) -> bool {
        self.atom.predicate == other.atom.predicate
    }

    /// Opposite signs and the same predicate name: a candidate pair for resolution.
    pub fn clashes_with(&self, other: &Literal) -> bool {
        self.positive != other.positive && self.same_predicate(other)
    }

    /// Exactly complementary: opposite signs, same name and identical arguments.
    pub fn is_complementary(&self, other: &Literal) -> bool {
        self.positive != other.positive && self.atom == other.atom
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.positive {
            write!(f, "-")?;
        }
        write!(f, "{}", self.atom)
    }
}
