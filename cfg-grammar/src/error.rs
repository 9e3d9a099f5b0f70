//! Errors raised while validating a grammar.

use std::error::Error;
use std::fmt;

use crate::cfg::RuleId;

/// Represents a malformed grammar.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GrammarError {
    /// A rule references a name that was never declared. `rule` is `None`
    /// when the offending name is the designated start symbol.
    UndeclaredSymbol {
        /// The undeclared name.
        name: String,
        /// The rule that mentions it.
        rule: Option<RuleId>,
    },
    /// No rule has the start symbol on its left-hand side.
    NoStartRule {
        /// Name of the start symbol.
        start: String,
    },
    /// No start symbol was designated.
    NoStartSymbol,
    /// A rule has a terminal on its left-hand side.
    TerminalLhs {
        /// Name of the terminal.
        name: String,
        /// The offending rule.
        rule: RuleId,
    },
    /// A name was declared both as a terminal and as a nonterminal.
    SymbolKindConflict {
        /// The doubly declared name.
        name: String,
    },
    /// A declared symbol uses the name of the empty or end-of-input marker.
    ReservedName {
        /// The reserved name.
        name: String,
    },
    /// The empty marker appears on a right-hand side next to other symbols.
    MisplacedEmpty {
        /// The offending rule.
        rule: RuleId,
    },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GrammarError::UndeclaredSymbol {
                name,
                rule: Some(rule),
            } => write!(f, "rule #{} references undeclared symbol `{}`", rule.usize(), name),
            GrammarError::UndeclaredSymbol { name, rule: None } => {
                write!(f, "start symbol `{}` is not a declared nonterminal", name)
            }
            GrammarError::NoStartRule { start } => {
                write!(f, "no rule has the start symbol `{}` on its left-hand side", start)
            }
            GrammarError::NoStartSymbol => write!(f, "no start symbol was designated"),
            GrammarError::TerminalLhs { name, rule } => write!(
                f,
                "rule #{} has the terminal `{}` on its left-hand side",
                rule.usize(),
                name
            ),
            GrammarError::SymbolKindConflict { name } => write!(
                f,
                "symbol `{}` is declared both as a terminal and a nonterminal",
                name
            ),
            GrammarError::ReservedName { name } => {
                write!(f, "`{}` is reserved and cannot be declared", name)
            }
            GrammarError::MisplacedEmpty { rule } => write!(
                f,
                "rule #{} mixes the empty marker with other symbols",
                rule.usize()
            ),
        }
    }
}

impl Error for GrammarError {}
