use std::error::Error;
use std::fmt;

use cfg_classify_ll::TableError;
use cfg_symbol::Symbol;

/// Returned when the input is not in the language.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyntaxError {
    /// Zero-indexed position of the offending input terminal. Equals the
    /// input length when the parser ran into the end of input.
    pub position: usize,
    /// The offending input symbol, or `None` at the end of input.
    pub found: Option<Symbol>,
    /// Lookaheads that would have been accepted. May hold the
    /// end-of-input marker.
    pub expected: Vec<Symbol>,
    /// Pending symbols at the time of failure, with the top of the stack
    /// last.
    pub stack: Vec<Symbol>,
    /// Human-readable reason, with symbol names.
    pub reason: String,
}

/// Returned by parsing straight from a grammar.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The grammar is not LL(1).
    Table(TableError),
    /// The input is not in the language.
    Syntax(SyntaxError),
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "syntax error at position {}: {}", self.position, self.reason)
    }
}

impl Error for SyntaxError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::Table(err) => err.fmt(f),
            ParseError::Syntax(err) => err.fmt(f),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseError::Table(err) => Some(err),
            ParseError::Syntax(err) => Some(err),
        }
    }
}

impl From<TableError> for ParseError {
    fn from(err: TableError) -> Self {
        ParseError::Table(err)
    }
}

impl From<SyntaxError> for ParseError {
    fn from(err: SyntaxError) -> Self {
        ParseError::Syntax(err)
    }
}
