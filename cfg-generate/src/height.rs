//! Calculation of the minimal height of derivation trees.

use cfg_grammar::{Cfg, RuleId};
use cfg_symbol::Symbol;
use log::debug;

/// Minimal height of a derivation tree rooted at each symbol. Terminals
/// have height 0. A nonterminal that derives no terminal string has none.
#[derive(Clone, Debug)]
pub struct MinimalHeight {
    heights: Vec<Option<u32>>,
}

impl MinimalHeight {
    /// Computes heights by iterating over all rules until a full pass
    /// lowers nothing.
    pub fn new(grammar: &Cfg) -> Self {
        let mut heights = vec![None; grammar.num_syms()];
        for terminal in grammar.terminals() {
            heights[terminal.usize()] = Some(0);
        }
        let mut this = MinimalHeight { heights };
        let mut changed = true;
        let mut passes = 0;
        while changed {
            changed = false;
            passes += 1;
            for (rule_id, rule) in grammar.rules_with_ids() {
                if let Some(height) = this.rule_height(grammar, rule_id) {
                    changed |= set_min(&mut this.heights[rule.lhs.usize()], height);
                }
            }
        }
        debug!("minimal heights converged after {} passes", passes);
        this
    }

    /// Height of the given symbol, or `None` if it is unproductive.
    pub fn height(&self, sym: Symbol) -> Option<u32> {
        self.heights.get(sym.usize()).copied().flatten()
    }

    /// Height of a derivation tree that applies the given rule at its
    /// root, or `None` if the rule mentions an unproductive symbol.
    pub fn rule_height(&self, grammar: &Cfg, rule_id: RuleId) -> Option<u32> {
        let mut max = 0;
        for &sym in &grammar.rule(rule_id).rhs {
            max = max.max(self.height(sym)?);
        }
        Some(max + 1)
    }
}

/// Updates a value with a minimum of two values.
fn set_min(current: &mut Option<u32>, new: u32) -> bool {
    if current.map_or(true, |current| new < current) {
        *current = Some(new);
        true
    } else {
        false
    }
}
