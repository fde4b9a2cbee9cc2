//! Clauses: disjunctions of literals sharing one variable scope.

use std::fmt;

use super::literal::Literal;
use super::term::Var;

/// Unique, strictly increasing clause identifier. Also the suffix that
/// scopes a clause's variables.
pub type ClauseId = u64;

/// A clause is a disjunction of literals: `L1 | L2 | ... | Ln`.
///
/// Two clauses are the same clause only when their ids match; clauses with
/// identical literals but different ids are distinct entries of the store.
/// For that reason `Clause` does not implement `PartialEq`.
///
/// Examples (in the input syntax):
/// - Unit clause: `human(socrates)`
/// - Rule: `-human(X) | mortal(X)`
/// - Empty clause: no literals (contradiction)
#[derive(Debug, Clone)]
pub struct Clause {
    pub id: ClauseId,
    pub literals: Vec<Literal>,
}

impl Clause {
    /// Create a clause from a vector of literals.
    pub fn new(id: ClauseId, literals: Vec<Literal>) -> Self {
        Clause { id, literals }
    }

    /// Identity comparison by clause id.
    pub fn same_as(&self, other: &Clause) -> bool {
        self.id == other.id
    }

    /// Check if this is the empty clause.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Get the number of literals in this clause.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Collect the distinct variables in this clause, in order of first occurrence.
    pub fn variables(&self) -> Vec<Var> {
        let mut vars = Vec::new();
        for lit in &self.literals {
            for arg in &lit.atom.args {
                arg.collect_variables(&mut vars);
            }
        }
        vars
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Clause {}: ", self.id)?;
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, "|")?;
            }
            write!(f, "{}", lit)?;
        }
        Ok(())
    }
}
