//! Where each symbol occurs in the grammar's rules.

use std::collections::BTreeMap;

use crate::local_prelude::*;

/// Maps every symbol to the rules it occurs in.
#[derive(Clone, Debug, Default)]
pub struct OccurenceMap {
    occurences: BTreeMap<Symbol, Occurences>,
    empty_occurences: Occurences,
}

/// Two `Vec`s of rule IDs.
#[derive(Clone, Debug, Default)]
pub struct Occurences {
    lhs: Vec<RuleId>,
    rhs: Vec<RuleId>,
}

impl OccurenceMap {
    /// Indexes the given rules by position.
    pub fn from_rules<'a>(rules: impl Iterator<Item = &'a CfgRule>) -> Self {
        let mut occurences = BTreeMap::new();
        for (i, rule) in rules.enumerate() {
            let id = RuleId::new(i);
            occurences
                .entry(rule.lhs)
                .or_insert_with(Occurences::default)
                .lhs
                .push(id);
            let mut rhs_syms = rule.rhs.to_vec();
            rhs_syms.sort();
            rhs_syms.dedup();
            for rhs_sym in rhs_syms {
                occurences
                    .entry(rhs_sym)
                    .or_insert_with(Occurences::default)
                    .rhs
                    .push(id);
            }
        }
        OccurenceMap {
            occurences,
            empty_occurences: Occurences::default(),
        }
    }

    /// Returns occurences of the given symbol.
    pub fn get(&self, sym: Symbol) -> &Occurences {
        self.occurences.get(&sym).unwrap_or(&self.empty_occurences)
    }
}

impl Occurences {
    /// Rules with the symbol on their left-hand side.
    pub fn lhs(&self) -> &[RuleId] {
        &self.lhs[..]
    }

    /// Rules with the symbol on their right-hand side, each listed once.
    pub fn rhs(&self) -> &[RuleId] {
        &self.rhs[..]
    }
}
