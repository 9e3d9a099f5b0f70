use std::error::Error;
use std::fmt;

use cfg_grammar::RuleId;
use cfg_symbol::Symbol;

/// Returned when a grammar is not LL(1).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TableError {
    /// Two distinct rules predict the same nonterminal on the same lookahead.
    Conflict {
        /// The nonterminal of the cell.
        nonterminal: Symbol,
        /// The lookahead of the cell. May be the end-of-input marker.
        terminal: Symbol,
        /// The rule already in the cell.
        first: RuleId,
        /// The rule that would be written over it.
        second: RuleId,
        /// Human-readable description, with symbol names.
        reason: String,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TableError::Conflict { reason, .. } => write!(f, "grammar is not LL(1): {}", reason),
        }
    }
}

impl Error for TableError {}
