//! Grammars are built with the builder pattern.

use std::collections::BTreeSet;

use log::debug;

use crate::cfg::{END_OF_INPUT, EPSILON};
use crate::error::GrammarError;
use crate::local_prelude::*;

/// Collects symbol declarations and rules, then validates them into a [`Cfg`].
#[derive(Clone, Debug, Default)]
pub struct CfgBuilder {
    terminals: Vec<String>,
    nonterminals: Vec<String>,
    start: Option<String>,
    rules: Vec<(String, Vec<String>)>,
    infer_kinds: bool,
}

/// The rule builder.
pub struct RuleBuilder<'a> {
    lhs: String,
    builder: &'a mut CfgBuilder,
}

impl CfgBuilder {
    /// Creates a builder that requires every symbol to be declared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder that infers symbol kinds from the rules.
    pub fn inferred() -> Self {
        CfgBuilder {
            infer_kinds: true,
            ..Self::default()
        }
    }

    /// Declares terminal symbols.
    pub fn terminals<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.terminals
            .extend(names.into_iter().map(|name| name.as_ref().to_string()));
        self
    }

    /// Declares nonterminal symbols.
    pub fn nonterminals<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.nonterminals
            .extend(names.into_iter().map(|name| name.as_ref().to_string()));
        self
    }

    /// Designates the start symbol.
    pub fn start(&mut self, name: &str) -> &mut Self {
        self.start = Some(name.to_string());
        self
    }

    /// Starts building a new rule.
    pub fn rule(&mut self, lhs: &str) -> RuleBuilder<'_> {
        RuleBuilder {
            lhs: lhs.to_string(),
            builder: self,
        }
    }

    /// Validates declarations and rules, and builds the grammar.
    pub fn build(&self) -> Result<Cfg, GrammarError> {
        let (nonterminals, terminals) = if self.infer_kinds {
            self.infer_symbols()
        } else {
            (self.nonterminals.clone(), self.terminals.clone())
        };
        // Drop duplicate declarations, keeping the first occurence.
        let nonterminals = dedup_in_order(nonterminals);
        let terminals = dedup_in_order(terminals);

        let mut declared_nonterminals = BTreeSet::new();
        for name in &nonterminals {
            check_reserved(name)?;
            declared_nonterminals.insert(name.as_str());
        }
        let mut declared_terminals = BTreeSet::new();
        for name in &terminals {
            check_reserved(name)?;
            if declared_nonterminals.contains(name.as_str()) {
                return Err(GrammarError::SymbolKindConflict { name: name.clone() });
            }
            declared_terminals.insert(name.as_str());
        }
        let start = self.start.as_deref().ok_or(GrammarError::NoStartSymbol)?;
        if !declared_nonterminals.contains(start) {
            return Err(if declared_terminals.contains(start) || self.infer_kinds {
                GrammarError::NoStartRule {
                    start: start.to_string(),
                }
            } else {
                GrammarError::UndeclaredSymbol {
                    name: start.to_string(),
                    rule: None,
                }
            });
        }

        for (i, (lhs, rhs)) in self.rules.iter().enumerate() {
            let rule = RuleId::new(i);
            if declared_terminals.contains(lhs.as_str()) {
                return Err(GrammarError::TerminalLhs {
                    name: lhs.clone(),
                    rule,
                });
            }
            if !declared_nonterminals.contains(lhs.as_str()) {
                return Err(GrammarError::UndeclaredSymbol {
                    name: lhs.clone(),
                    rule: Some(rule),
                });
            }
            for name in rhs {
                if name == EPSILON {
                    if rhs.len() != 1 {
                        return Err(GrammarError::MisplacedEmpty { rule });
                    }
                } else if !declared_terminals.contains(name.as_str())
                    && !declared_nonterminals.contains(name.as_str())
                {
                    return Err(GrammarError::UndeclaredSymbol {
                        name: name.clone(),
                        rule: Some(rule),
                    });
                }
            }
        }

        if !self.rules.iter().any(|(lhs, _)| lhs == start) {
            return Err(GrammarError::NoStartRule {
                start: start.to_string(),
            });
        }

        let cfg = Cfg::from_parts(&nonterminals, &terminals, start, &self.rules);
        debug!(
            "built grammar with {} rules, {} nonterminals and {} terminals",
            cfg.num_rules(),
            nonterminals.len(),
            terminals.len()
        );
        Ok(cfg)
    }

    /// Every left-hand symbol is a nonterminal. Every other right-hand symbol is a terminal.
    fn infer_symbols(&self) -> (Vec<String>, Vec<String>) {
        let nonterminals: Vec<String> = self.rules.iter().map(|(lhs, _)| lhs.clone()).collect();
        let known: BTreeSet<&str> = nonterminals.iter().map(|name| name.as_str()).collect();
        let terminals = self
            .rules
            .iter()
            .flat_map(|(_, rhs)| rhs.iter())
            .filter(|name| name.as_str() != EPSILON && !known.contains(name.as_str()))
            .cloned()
            .collect();
        (nonterminals, terminals)
    }
}

impl<'a> RuleBuilder<'a> {
    /// Starts building a new rule with the given LHS.
    pub fn rule(mut self, lhs: &str) -> Self {
        self.lhs = lhs.to_string();
        self
    }

    /// Adds a rule alternative to the grammar. An empty list of symbols,
    /// or a list holding just `ε`, is an epsilon production.
    pub fn rhs<I, S>(mut self, syms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rhs = syms
            .into_iter()
            .map(|sym| sym.as_ref().to_string())
            .collect();
        self.builder.rules.push((self.lhs.clone(), rhs));
        self
    }
}

fn check_reserved(name: &str) -> Result<(), GrammarError> {
    if name == EPSILON || name == END_OF_INPUT {
        Err(GrammarError::ReservedName {
            name: name.to_string(),
        })
    } else {
        Ok(())
    }
}

fn dedup_in_order(names: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
