//! Parser for the line-oriented CNF syntax.
//!
//! ```text
//! father(john,jim)
//! father(rob,john)
//! -father(X,Y) | -father(Y,Z) | grandfather(X,Z)
//! % comment
//! -grandfather(rob,jim)
//! ```
//!
//! Every non-blank line that does not start with `%` is one clause. Literals
//! are separated by `|`; a leading `-` negates a literal. Upper case terms
//! are variables, lower case terms are constants, and `name(args)` is a
//! function application.

use thiserror::Error;

use crate::saturation::GenerationContext;
use crate::syntax::{Atom, Clause, ClauseId, Literal, Term};

/// What went wrong on a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("Wrong clause format: predicate missing")]
    PredicateMissing,
    #[error("Predicate must contain parentheses")]
    MissingParentheses,
    #[error("Wrong clause format: predicate name missing")]
    PredicateNameMissing,
    #[error("There are more opening parentheses than closing parentheses")]
    UnclosedParenthesis,
    #[error("There are more closing parentheses than opening parentheses")]
    UnopenedParenthesis,
    #[error("Unexpected text after closing parenthesis: {0}")]
    TrailingText(String),
    #[error("Term expected")]
    TermExpected,
    #[error("Term may not contain underscore")]
    Underscore,
    #[error("Term must be only upper case (variable) or only lower case (value, function): {0}")]
    MixedCase(String),
    #[error("Function name missing")]
    FunctionNameMissing,
    #[error("Function name must be lower case: {0}")]
    FunctionNameNotLowercase(String),
}

/// Parse error with the 1-based line it occurred on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error on line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

/// Parse a CNF source into clauses, numbering them from `ctx`.
///
/// Blank lines and `%` comment lines are skipped but still counted for
/// error line numbers. The first error aborts parsing.
pub fn parse_cnf(source: &str, ctx: &mut GenerationContext) -> Result<Vec<Clause>, ParseError> {
    let mut clauses = Vec::new();

    for (index, raw) in source.split('\n').enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('%') {
            continue;
        }
        let clause = parse_clause(line, ctx).map_err(|kind| ParseError {
            line: index + 1,
            kind,
        })?;
        clauses.push(clause);
    }

    Ok(clauses)
}

/// Parse one clause (`lit | lit | ...`), taking its id from `ctx`.
pub fn parse_clause(raw: &str, ctx: &mut GenerationContext) -> Result<Clause, ParseErrorKind> {
    let id = ctx.next_clause_id();
    let literals = raw
        .split('|')
        .map(|part| parse_literal(part, id))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Clause::new(id, literals))
}

/// Parse one literal. Variables are scoped to `clause`.
pub fn parse_literal(raw: &str, clause: ClauseId) -> Result<Literal, ParseErrorKind> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ParseErrorKind::PredicateMissing);
    }

    let (open, close) = match (text.find('('), text.rfind(')')) {
        (Some(open), Some(close)) => (open, close),
        _ => return Err(ParseErrorKind::MissingParentheses),
    };
    if close < open {
        return Err(ParseErrorKind::UnopenedParenthesis);
    }

    let (positive, name_start) = match text.strip_prefix('-') {
        Some(_) => (false, 1),
        None => (true, 0),
    };
    let name = text[name_start..open].trim();
    if name.is_empty() {
        return Err(ParseErrorKind::PredicateNameMissing);
    }

    let trailing = text[close + 1..].trim();
    if !trailing.is_empty() {
        return Err(ParseErrorKind::TrailingText(trailing.to_string()));
    }

    let inner = &text[open + 1..close];
    let args = if inner.trim().is_empty() {
        Vec::new()
    } else {
        parse_arguments(inner, clause)?
    };

    let atom = Atom::new(name, args);
    if positive {
        Ok(Literal::positive(atom))
    } else {
        Ok(Literal::negative(atom))
    }
}

/// Parse one term. Whitespace inside the term is ignored.
pub fn parse_term(raw: &str, clause: ClauseId) -> Result<Term, ParseErrorKind> {
    let text: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if text.is_empty() {
        return Err(ParseErrorKind::TermExpected);
    }
    if text.contains('_') {
        return Err(ParseErrorKind::Underscore);
    }

    let open = match text.find('(') {
        Some(open) => open,
        None => return parse_atomic_term(text, clause),
    };

    let name = &text[..open];
    if name.is_empty() {
        return Err(ParseErrorKind::FunctionNameMissing);
    }
    if name.chars().any(char::is_uppercase) {
        return Err(ParseErrorKind::FunctionNameNotLowercase(name.to_string()));
    }

    let close = text
        .rfind(')')
        .ok_or(ParseErrorKind::UnclosedParenthesis)?;
    if close + 1 != text.len() {
        return Err(ParseErrorKind::TrailingText(text[close + 1..].to_string()));
    }

    let args = parse_arguments(&text[open + 1..close], clause)?;
    Ok(Term::app(name, args))
}

// Variable or constant.
fn parse_atomic_term(text: String, clause: ClauseId) -> Result<Term, ParseErrorKind> {
    if text.contains(')') {
        return Err(ParseErrorKind::UnopenedParenthesis);
    }

    let has_lower = text.chars().any(char::is_lowercase);
    let has_upper = text.chars().any(char::is_uppercase);
    match (has_lower, has_upper) {
        (true, true) => Err(ParseErrorKind::MixedCase(text)),
        (true, false) => Ok(Term::Const(text)),
        // No lower case letters at all: a variable, as in `X` or `ABC`.
        (false, _) => Ok(Term::var(text, clause)),
    }
}

fn parse_arguments(text: &str, clause: ClauseId) -> Result<Vec<Term>, ParseErrorKind> {
    split_top_level(text)?
        .into_iter()
        .map(|part| parse_term(part, clause))
        .collect()
}

/// Split on commas that are not nested inside parentheses.
fn split_top_level(text: &str) -> Result<Vec<&str>, ParseErrorKind> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(ParseErrorKind::UnopenedParenthesis)?;
            }
            ',' if depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth > 0 {
        return Err(ParseErrorKind::UnclosedParenthesis);
    }
    parts.push(&text[start..]);

    Ok(parts)
}
