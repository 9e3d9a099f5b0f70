//! FOLLOW sets.

use std::collections::BTreeMap;

use cfg_grammar::Cfg;
use cfg_symbol::Symbol;
use log::{debug, trace};

use crate::first::FirstSets;
use crate::sets::{PerSymbolSetVal, PerSymbolSets, PredictSets};

/// FOLLOW sets.
#[derive(Clone, Debug)]
pub struct FollowSets {
    /// Mapping from nonterminals to FOLLOW sets.
    map: PerSymbolSets,
}

impl FollowSets {
    /// Compute all FOLLOW sets of the grammar.
    ///
    /// Every set starts empty, except for the start symbol's, which holds
    /// the end-of-input marker. Rules are then scanned right to left until
    /// a full pass over the grammar changes nothing. Mutually dependent
    /// sets need no special handling.
    pub fn new(grammar: &Cfg, first_sets: &FirstSets) -> Self {
        let mut this = FollowSets {
            map: grammar
                .nonterminals()
                .map(|nonterminal| (nonterminal, PerSymbolSetVal::new()))
                .collect::<BTreeMap<_, _>>(),
        };
        if let Some(follow_set) = this.map.get_mut(&grammar.start_sym()) {
            follow_set.has_none = true;
        }

        let mut passes = 1;
        while this.update(grammar, first_sets) {
            passes += 1;
        }
        debug!("FOLLOW sets converged after {} passes", passes);
        this
    }

    /// Runs a single pass over all rules. Returns whether any set changed.
    ///
    /// Once the sets are computed, further passes never change them.
    pub fn update(&mut self, grammar: &Cfg, first_sets: &FirstSets) -> bool {
        let mut changed = false;
        for rule in grammar.rules() {
            // What may follow the current position in the rule.
            let mut follow_set = self.map.get(&rule.lhs).cloned().unwrap_or_default();

            for &sym in rule.rhs.iter().rev() {
                if grammar.is_terminal(sym) {
                    follow_set.clear();
                    follow_set.insert(sym);
                } else {
                    if let Some(followed) = self.map.get_mut(&sym) {
                        changed |= followed.union(&follow_set);
                    }

                    let first_set = first_sets.first_of(sym);
                    if !first_set.has_none {
                        follow_set.clear();
                    }
                    follow_set.union_terminals(&first_set);
                }
            }
        }
        trace!("FOLLOW pass done, changed: {}", changed);
        changed
    }

    /// Returns FOLLOW of any symbol. FOLLOW of a terminal is the terminal
    /// itself.
    pub fn follow_of(&self, sym: Symbol) -> PerSymbolSetVal {
        match self.map.get(&sym) {
            Some(follow_set) => follow_set.clone(),
            None => PerSymbolSetVal::single(sym),
        }
    }
}

impl PredictSets for FollowSets {
    /// Returns a reference to FOLLOW sets.
    fn predict_sets(&self) -> &PerSymbolSets {
        &self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CfgSetsExt;

    fn set(cfg: &Cfg, has_none: bool, names: &[&str]) -> PerSymbolSetVal {
        let mut list: Vec<Symbol> = names.iter().map(|name| cfg.sym(name).unwrap()).collect();
        list.sort();
        PerSymbolSetVal { has_none, list }
    }

    #[test]
    fn test_simple_follow_sets() {
        let cfg = Cfg::from_rules(
            "S",
            [
                ("S", vec!["a", "A", "B", "b"]),
                ("A", vec!["a", "A", "c"]),
                ("A", vec![]),
                ("B", vec!["b", "B"]),
                ("B", vec!["c"]),
            ],
        )
        .unwrap();
        let follow = cfg.follow_sets();
        let sym = |name| cfg.sym(name).unwrap();
        assert_eq!(follow.follow_of(sym("S")), set(&cfg, true, &[]));
        assert_eq!(follow.follow_of(sym("A")), set(&cfg, false, &["b", "c"]));
        assert_eq!(follow.follow_of(sym("B")), set(&cfg, false, &["b"]));
        assert_eq!(follow.follow_of(sym("a")), set(&cfg, false, &["a"]));
    }

    #[test]
    fn test_mutually_dependent_follow_sets() {
        let cfg = Cfg::from_rules(
            "S",
            [
                ("S", vec!["A", "z"]),
                ("A", vec!["x", "B"]),
                ("A", vec![]),
                ("B", vec!["y", "A"]),
            ],
        )
        .unwrap();
        let first = cfg.first_sets();
        let mut follow = cfg.follow_sets_with_first(&first);
        let sym = |name| cfg.sym(name).unwrap();
        assert_eq!(follow.follow_of(sym("A")), set(&cfg, false, &["z"]));
        assert_eq!(follow.follow_of(sym("B")), set(&cfg, false, &["z"]));
        assert!(!follow.update(&cfg, &first));
    }

    #[test]
    fn test_nullable_tail_passes_follow_of_lhs() {
        let cfg = Cfg::from_rules(
            "S",
            [("S", vec!["X", "Y"]), ("X", vec!["x"]), ("Y", vec![]), ("Y", vec!["y"])],
        )
        .unwrap();
        let follow = cfg.follow_sets();
        let sym = |name| cfg.sym(name).unwrap();
        assert_eq!(follow.follow_of(sym("X")), set(&cfg, true, &["y"]));
        assert_eq!(follow.follow_of(sym("Y")), set(&cfg, true, &[]));
    }
}
