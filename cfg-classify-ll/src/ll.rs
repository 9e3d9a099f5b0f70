//! The Ll grammar class.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use cfg_grammar::{Cfg, CfgRule, RuleId, SymbolBitSet};
use cfg_predict_sets::{CfgSetsExt, FirstSets, FollowSets};
use cfg_symbol::Symbol;
use log::{debug, trace, warn};

use crate::error::TableError;

/// LL(1) parse table.
///
/// Holds at most one rule per cell. The grammar, along with its FIRST
/// and FOLLOW sets, is kept for diagnostics.
#[derive(Debug)]
pub struct LlParseTable<'a> {
    map: BTreeMap<LlParseTableKey, RuleId>,
    grammar: &'a Cfg,
    first: FirstSets,
    follow: FollowSets,
}

/// A cell of the parse table.
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct LlParseTableKey {
    /// The nonterminal to expand.
    pub nonterminal: Symbol,
    /// The lookahead terminal, or the end-of-input marker.
    pub terminal: Symbol,
}

/// Container for classifying nonterminals as LL(1) or context-free.
#[derive(Debug, Eq, PartialEq)]
pub struct LlClassification {
    classes: BTreeMap<Symbol, LlNonterminalClass>,
}

/// A nonterminal class.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LlNonterminalClass {
    /// LL(1) class.
    Ll1,
    /// Context-free class.
    ContextFree,
}

impl<'a> LlParseTable<'a> {
    /// Creates an LL(1) parse table.
    ///
    /// Fails on the first cell that would receive a second, distinct rule.
    pub fn new(grammar: &'a Cfg) -> Result<Self, TableError> {
        let first = grammar.first_sets();
        let follow = grammar.follow_sets_with_first(&first);
        let mut map: BTreeMap<LlParseTableKey, RuleId> = BTreeMap::new();
        for_each_entry(grammar, &first, &follow, |key, rule_id| {
            match map.entry(key) {
                Entry::Vacant(vacant) => {
                    trace!(
                        "M[{}, {}] = {}",
                        grammar.name(key.nonterminal),
                        grammar.name(key.terminal),
                        grammar.stringify_rule(grammar.rule(rule_id))
                    );
                    vacant.insert(rule_id);
                    Ok(())
                }
                Entry::Occupied(occupied) if *occupied.get() == rule_id => Ok(()),
                Entry::Occupied(occupied) => Err(conflict(grammar, key, *occupied.get(), rule_id)),
            }
        })?;
        debug!("built LL(1) parse table with {} entries", map.len());
        Ok(LlParseTable {
            map,
            grammar,
            first,
            follow,
        })
    }

    /// Classifies nonterminals as LL(1) or context-free. Never fails.
    ///
    /// A nonterminal is context-free when one of its cells holds more than
    /// one rule, or when any of its rules mentions a context-free
    /// nonterminal.
    pub fn classify(grammar: &Cfg) -> LlClassification {
        let first = grammar.first_sets();
        let follow = grammar.follow_sets_with_first(&first);
        let mut cells: BTreeMap<LlParseTableKey, Vec<RuleId>> = BTreeMap::new();
        let visited = for_each_entry(grammar, &first, &follow, |key, rule_id| {
            let entry = cells.entry(key).or_default();
            if !entry.contains(&rule_id) {
                entry.push(rule_id);
            }
            Ok(())
        });
        debug_assert!(visited.is_ok());

        let mut result = LlClassification {
            classes: BTreeMap::new(),
        };
        for (key, rules) in &cells {
            if rules.len() > 1 {
                warn!(
                    "nonterminal {} has {} alternatives on lookahead {}",
                    grammar.name(key.nonterminal),
                    rules.len(),
                    grammar.name(key.terminal)
                );
                result
                    .classes
                    .insert(key.nonterminal, LlNonterminalClass::ContextFree);
            } else {
                result
                    .classes
                    .entry(key.nonterminal)
                    .or_insert(LlNonterminalClass::Ll1);
            }
        }
        let mut property = SymbolBitSet::for_grammar(grammar);
        for (&nonterminal, &class) in result.classes.iter() {
            if let LlNonterminalClass::ContextFree = class {
                property.set(nonterminal, true);
            }
        }
        grammar.rhs_closure_for_any(&mut property);
        for (&nonterminal, class) in result.classes.iter_mut() {
            if property[nonterminal] {
                *class = LlNonterminalClass::ContextFree;
            }
        }
        result
    }

    /// Returns the rule predicted for the given nonterminal and lookahead.
    pub fn get(&self, nonterminal: Symbol, terminal: Symbol) -> Option<RuleId> {
        self.map
            .get(&LlParseTableKey {
                nonterminal,
                terminal,
            })
            .copied()
    }

    /// Same as `get`, but returns the rule itself.
    pub fn get_rule(&self, nonterminal: Symbol, terminal: Symbol) -> Option<&'a CfgRule> {
        let grammar = self.grammar;
        self.get(nonterminal, terminal).map(|id| grammar.rule(id))
    }

    /// Lookaheads for which the given nonterminal has a rule.
    pub fn expected(&self, nonterminal: Symbol) -> Vec<Symbol> {
        self.map
            .keys()
            .filter(|key| key.nonterminal == nonterminal)
            .map(|key| key.terminal)
            .collect()
    }

    /// Iterates over filled cells.
    pub fn iter(&self) -> impl Iterator<Item = (LlParseTableKey, RuleId)> + '_ {
        self.map.iter().map(|(&key, &rule_id)| (key, rule_id))
    }

    /// Number of filled cells.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no cell is filled.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The grammar this table was built from.
    pub fn grammar(&self) -> &'a Cfg {
        self.grammar
    }

    /// FIRST sets of the grammar.
    pub fn first_sets(&self) -> &FirstSets {
        &self.first
    }

    /// FOLLOW sets of the grammar.
    pub fn follow_sets(&self) -> &FollowSets {
        &self.follow
    }
}

impl LlClassification {
    /// Access classes.
    pub fn classes(&self) -> &BTreeMap<Symbol, LlNonterminalClass> {
        &self.classes
    }

    /// Whether every classified nonterminal is LL(1).
    pub fn is_ll1(&self) -> bool {
        self.classes
            .values()
            .all(|&class| class == LlNonterminalClass::Ll1)
    }
}

/// Visits every cell entry once per (rule, lookahead) pair.
///
/// LlParseTable[A,a] contains the rule A → w if and only if
/// a is in FIRST(w) or
/// ε is in FIRST(w) and a is in FOLLOW(A), where `$` counts as a terminal.
fn for_each_entry<F>(
    grammar: &Cfg,
    first: &FirstSets,
    follow: &FollowSets,
    mut visit: F,
) -> Result<(), TableError>
where
    F: FnMut(LlParseTableKey, RuleId) -> Result<(), TableError>,
{
    for (rule_id, rule) in grammar.rules_with_ids() {
        let rhs_first_set = first.first_set_for_string(&rule.rhs[..]);
        let mut lookahead = rhs_first_set.list.clone();
        if rhs_first_set.has_none() {
            let lhs_follow_set = follow.follow_of(rule.lhs);
            lookahead.extend(lhs_follow_set.iter().copied());
            if lhs_follow_set.has_none() {
                lookahead.push(grammar.end_of_input());
            }
        }
        for terminal in lookahead {
            let key = LlParseTableKey {
                nonterminal: rule.lhs,
                terminal,
            };
            visit(key, rule_id)?;
        }
    }
    Ok(())
}

fn conflict(grammar: &Cfg, key: LlParseTableKey, first: RuleId, second: RuleId) -> TableError {
    TableError::Conflict {
        nonterminal: key.nonterminal,
        terminal: key.terminal,
        first,
        second,
        reason: format!(
            "on ({}, {}) both `{}` and `{}` apply",
            grammar.name(key.nonterminal),
            grammar.name(key.terminal),
            grammar.stringify_rule(grammar.rule(first)),
            grammar.stringify_rule(grammar.rule(second)),
        ),
    }
}
