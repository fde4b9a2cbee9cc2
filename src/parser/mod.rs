//! Parser for the CNF clause syntax.

mod parser;

pub use parser::{parse_clause, parse_cnf, parse_literal, parse_term, ParseError, ParseErrorKind};
