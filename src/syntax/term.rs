//! First-order terms: clause-scoped variables, constants and function applications.

use std::fmt;

use super::clause::ClauseId;

/// A variable in first-order logic.
///
/// Variables are written in upper case and are scoped to the clause that
/// introduced them: `X` in clause 3 and `X` in clause 4 are different
/// variables. This scoping keeps clauses standardized apart without a
/// renaming pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Var {
    name: String,
    clause: ClauseId,
}

impl Var {
    pub fn new(name: impl Into<String>, clause: ClauseId) -> Self {
        Var {
            name: name.into(),
            clause,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Id of the clause that owns this variable.
    pub fn clause(&self) -> ClauseId {
        self.clause
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.name, self.clause)
    }
}

/// The kind of an expression, for callers that need to branch on it
/// without matching on the concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    Predicate,
    Variable,
    Constant,
    Function,
}

/// A first-order term.
///
/// In the clause syntax:
/// - Variables: `X`, `PERSON` (upper case only)
/// - Constants: `john`, `nil` (lower case only)
/// - Applications: `f(a, X)`, `father(john)`
///
/// Equality is structural. Constants compare by name, applications by name
/// and pointwise arguments, variables by name and owning clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// A variable
    Var(Var),
    /// A constant
    Const(String),
    /// Function application: f(t1, ..., tn), n >= 1 for parsed input
    App(String, Vec<Term>),
}

impl Term {
    /// Create a variable term owned by `clause`.
    pub fn var(name: impl Into<String>, clause: ClauseId) -> Self {
        Term::Var(Var::new(name, clause))
    }

    /// Create a constant term.
    pub fn constant(name: impl Into<String>) -> Self {
        Term::Const(name.into())
    }

    /// Create a function application term.
    pub fn app(name: impl Into<String>, args: Vec<Term>) -> Self {
        Term::App(name.into(), args)
    }

    pub fn kind(&self) -> ExprKind {
        match self {
            Term::Var(_) => ExprKind::Variable,
            Term::Const(_) => ExprKind::Constant,
            Term::App(_, _) => ExprKind::Function,
        }
    }

    pub fn is_variable(&self) -> bool {
        self.kind() == ExprKind::Variable
    }

    pub fn is_constant(&self) -> bool {
        self.kind() == ExprKind::Constant
    }

    pub fn is_function(&self) -> bool {
        self.kind() == ExprKind::Function
    }

    /// Terms are never predicates; predicates live in [`crate::syntax::Atom`].
    pub fn is_predicate(&self) -> bool {
        self.kind() == ExprKind::Predicate
    }

    /// Collect the distinct variables of this term in order of first occurrence.
    pub fn variables(&self) -> Vec<Var> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars
    }

    pub(crate) fn collect_variables(&self, out: &mut Vec<Var>) {
        match self {
            Term::Var(var) => {
                if !out.contains(var) {
                    out.push(var.clone());
                }
            }
            Term::Const(_) => {}
            Term::App(_, args) => {
                for arg in args {
                    arg.collect_variables(out);
                }
            }
        }
    }

    /// Check if this term contains no variables (is ground).
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Var(_) => false,
            Term::Const(_) => true,
            Term::App(_, args) => args.iter().all(|arg| arg.is_ground()),
        }
    }

    /// Replace every occurrence of `var` with `replacement`, building a new tree.
    pub fn replace_var(&self, var: &Var, replacement: &Term) -> Term {
        match self {
            Term::Var(v) if v == var => replacement.clone(),
            Term::Var(_) | Term::Const(_) => self.clone(),
            Term::App(name, args) => Term::App(
                name.clone(),
                args.iter()
                    .map(|arg| arg.replace_var(var, replacement))
                    .collect(),
            ),
        }
    }

    /// Check if a variable occurs in this term (for occurs check in unification).
    pub fn occurs(&self, var: &Var) -> bool {
        match self {
            Term::Var(v) => v == var,
            Term::Const(_) => false,
            Term::App(_, args) => args.iter().any(|arg| arg.occurs(var)),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(var) => write!(f, "{}", var),
            Term::Const(name) => write!(f, "{}", name),
            Term::App(name, args) => {
                write!(f, "{}(", name)?;
                write_args(f, args)?;
                write!(f, ")")
            }
        }
    }
}

/// Write a comma separated argument list.
pub(crate) fn write_args(f: &mut fmt::Formatter<'_>, args: &[Term]) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", arg)?;
    }
    Ok(())
}
