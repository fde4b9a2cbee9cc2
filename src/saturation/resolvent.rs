//! Resolvent construction and self-resolution.

use std::collections::HashMap;

use super::GenerationContext;
use crate::syntax::{Atom, Clause, ClauseId, Literal, Term, Var};
use crate::unify::Substitution;

/// Renames the variables of a clause under construction into its own scope.
///
/// Each distinct source variable gets the next name in `A`, `B`, ..., `Z`,
/// `A1`, `B1`, ... and keeps it for the rest of the clause.
#[derive(Debug)]
pub struct Renamer {
    clause: ClauseId,
    names: HashMap<Var, Var>,
}

impl Renamer {
    pub fn new(clause: ClauseId) -> Self {
        Renamer {
            clause,
            names: HashMap::new(),
        }
    }

    pub fn rename(&mut self, term: &Term) -> Term {
        match term {
            Term::Var(var) => Term::Var(self.fresh(var)),
            Term::Const(_) => term.clone(),
            Term::App(name, args) => {
                Term::App(name.clone(), args.iter().map(|arg| self.rename(arg)).collect())
            }
        }
    }

    fn fresh(&mut self, var: &Var) -> Var {
        if let Some(renamed) = self.names.get(var) {
            return renamed.clone();
        }
        let renamed = Var::new(fresh_name(self.names.len()), self.clause);
        self.names.insert(var.clone(), renamed.clone());
        renamed
    }
}

fn fresh_name(index: usize) -> String {
    let letter = char::from(b'A' + (index % 26) as u8);
    match index / 26 {
        0 => letter.to_string(),
        round => format!("{}{}", letter, round),
    }
}

/// Build the candidate resolvent of two parents under `subst`.
///
/// The candidate holds every literal of `current` followed by every literal
/// of `other`, with the bindings of `subst` applied in order and all
/// variables moved into the scope of a freshly issued clause id. Nothing is
/// removed here; see [`self_resolve`].
pub fn build_resolvent(
    current: &Clause,
    other: &Clause,
    subst: &Substitution,
    ctx: &mut GenerationContext,
) -> Clause {
    let id = ctx.next_clause_id();
    let mut renamer = Renamer::new(id);

    let literals = current
        .literals
        .iter()
        .chain(&other.literals)
        .map(|lit| {
            let args = subst
                .apply_to_terms(lit.args())
                .iter()
                .map(|arg| renamer.rename(arg))
                .collect();
            Literal {
                positive: lit.positive,
                atom: Atom::new(lit.predicate(), args),
            }
        })
        .collect();

    Clause::new(id, literals)
}

/// Remove the first complementary pair of literals from `clause`.
///
/// Scans pairs `(i, j)` with `i < j` in order and removes both literals of
/// the first pair with opposite signs, the same predicate and identical
/// arguments. At most one pair is removed per call. Returns whether a pair
/// was removed.
pub fn self_resolve(clause: &mut Clause) -> bool {
    let n = clause.literals.len();
    for i in 0..n {
        for j in i + 1..n {
            if clause.literals[i].is_complementary(&clause.literals[j]) {
                clause.literals.remove(j);
                clause.literals.remove(i);
                return true;
            }
        }
    }
    false
}
