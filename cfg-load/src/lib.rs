//! Allows us to load context-free grammars from
//! a BNF string.

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod basic;
mod lexer;

use std::error::Error;
use std::fmt;

use cfg_grammar::GrammarError;

pub use crate::basic::CfgLoadExt;

/// Represents an error when loading a BNF string.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LoadError {
    /// Human-readable reason for the error.
    pub reason: String,
    /// Line where the error happened.
    ///
    /// One-indexed.
    pub line: u32,
    /// Column where the error happened.
    ///
    /// One-indexed.
    pub col: u32,
    /// Set when the text is well-formed, but the grammar it describes
    /// is not.
    pub grammar_error: Option<GrammarError>,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Parse error at line {} column {}: reason: {}",
            self.line, self.col, self.reason
        )
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.grammar_error.as_ref().map(|err| err as &(dyn Error + 'static))
    }
}
