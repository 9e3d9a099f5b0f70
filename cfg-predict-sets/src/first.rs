//! FIRST sets.

use std::collections::BTreeMap;

use cfg_grammar::{Cfg, SymbolBitSet};
use cfg_symbol::Symbol;
use log::{debug, trace};

use crate::sets::{PerSymbolSetVal, PerSymbolSets, PredictSets};

/// FIRST sets of all nonterminals.
#[derive(Clone, Debug)]
pub struct FirstSets {
    pub(crate) map: PerSymbolSets,
    /// Terminals and the end-of-input marker.
    terminal_set: SymbolBitSet,
    epsilon: Symbol,
}

impl FirstSets {
    /// Compute all FIRST sets of the grammar.
    ///
    /// We define a binary relation FIRST(N, S), in which N is related to S
    /// if the grammar has a production of the form `N ⸬= α S β`, where
    /// α is a nullable string of symbols.
    ///
    /// We compute the transitive closure of this relation by iterating
    /// over all rules until a full pass changes nothing.
    pub fn new(grammar: &Cfg) -> Self {
        let mut terminal_set = grammar.terminal_set().clone();
        terminal_set.set(grammar.end_of_input(), true);
        let mut this = FirstSets {
            map: grammar
                .nonterminals()
                .map(|nonterminal| (nonterminal, PerSymbolSetVal::new()))
                .collect::<BTreeMap<_, _>>(),
            terminal_set,
            epsilon: grammar.epsilon(),
        };

        let mut passes = 1;
        while this.update(grammar) {
            passes += 1;
        }
        debug!("FIRST sets converged after {} passes", passes);
        this
    }

    /// Runs a single pass over all rules. Returns whether any set changed.
    ///
    /// Once the sets are computed, further passes never change them.
    pub fn update(&mut self, grammar: &Cfg) -> bool {
        let mut changed = false;
        for rule in grammar.rules() {
            changed |= self.process_rule(rule.lhs, &rule.rhs[..]);
        }
        trace!("FIRST pass done, changed: {}", changed);
        changed
    }

    fn process_rule(&mut self, lhs: Symbol, rhs: &[Symbol]) -> bool {
        let lookahead = self.first_set_for_string(rhs);
        self.map
            .entry(lhs)
            .or_insert_with(PerSymbolSetVal::new)
            .union(&lookahead)
    }

    /// Calculates a FIRST set for a string of symbols.
    ///
    /// The result has `has_none` set when every symbol of the string is
    /// nullable, which includes the empty string.
    pub fn first_set_for_string(&self, string: &[Symbol]) -> PerSymbolSetVal {
        let mut result = PerSymbolSetVal::new();
        for &sym in string {
            if sym == self.epsilon {
                continue;
            }
            if self.terminal_set[sym] {
                result.insert(sym);
                return result;
            }
            match self.map.get(&sym) {
                None => {
                    // A nonterminal with no productions derives nothing.
                    return result;
                }
                Some(first_set) => {
                    result.union_terminals(first_set);
                    if !first_set.has_none {
                        // Successfully found a FIRST symbol.
                        return result;
                    }
                }
            }
        }
        result.has_none = true;
        result
    }

    /// Returns FIRST of any symbol. FIRST of a terminal is the terminal
    /// itself, and FIRST of the empty marker holds just the empty marker.
    pub fn first_of(&self, sym: Symbol) -> PerSymbolSetVal {
        self.first_set_for_string(&[sym])
    }

    /// Whether the given nonterminal derives the empty string.
    pub fn is_nullable(&self, sym: Symbol) -> bool {
        self.map.get(&sym).map_or(false, |set| set.has_none)
    }
}

impl PredictSets for FirstSets {
    /// Returns a reference to FIRST sets.
    fn predict_sets(&self) -> &PerSymbolSets {
        &self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(cfg: &Cfg, has_none: bool, names: &[&str]) -> PerSymbolSetVal {
        let mut list: Vec<Symbol> = names.iter().map(|name| cfg.sym(name).unwrap()).collect();
        list.sort();
        PerSymbolSetVal { has_none, list }
    }

    #[test]
    fn test_simple_first_sets() {
        let cfg = Cfg::from_rules(
            "start",
            [
                ("start", vec!["a", "x", "b"]),
                ("start", vec!["c"]),
                ("b", vec!["a", "a"]),
                ("b", vec!["a", "c"]),
                ("c", vec!["x"]),
                ("c", vec!["y"]),
                ("a", vec![]),
            ],
        )
        .unwrap();

        let sets = FirstSets::new(&cfg);

        let mut map = BTreeMap::new();
        map.insert(cfg.sym("start").unwrap(), set(&cfg, false, &["x", "y"]));
        map.insert(cfg.sym("a").unwrap(), set(&cfg, true, &[]));
        map.insert(cfg.sym("b").unwrap(), set(&cfg, true, &["x", "y"]));
        map.insert(cfg.sym("c").unwrap(), set(&cfg, false, &["x", "y"]));

        assert_eq!(sets.predict_sets(), &map);
    }

    #[test]
    fn test_sequence_first_set_skips_nullable_prefix() {
        let cfg = Cfg::from_rules(
            "S",
            [
                ("S", vec!["N", "M", "z"]),
                ("N", vec!["n"]),
                ("N", vec![]),
                ("M", vec!["m"]),
                ("M", vec![]),
            ],
        )
        .unwrap();
        let sets = FirstSets::new(&cfg);
        let s = cfg.sym("S").unwrap();
        assert_eq!(sets.predict_sets()[&s], set(&cfg, false, &["n", "m", "z"]));
        let n = cfg.sym("N").unwrap();
        let m = cfg.sym("M").unwrap();
        assert_eq!(sets.first_set_for_string(&[n, m]), set(&cfg, true, &["n", "m"]));
        assert_eq!(sets.first_set_for_string(&[]), set(&cfg, true, &[]));
    }

    #[test]
    fn test_first_of_markers_and_terminals() {
        let cfg = Cfg::from_rules("S", [("S", vec!["a"])]).unwrap();
        let sets = FirstSets::new(&cfg);
        let a = cfg.sym("a").unwrap();
        assert_eq!(sets.first_of(a), PerSymbolSetVal::single(a));
        assert_eq!(sets.first_of(cfg.epsilon()), set(&cfg, true, &[]));
        assert!(!sets.is_nullable(cfg.start_sym()));
    }
}
