//! The representation of FIRST and FOLLOW sets.

use std::collections::BTreeMap;
use std::ops;

use cfg_symbol::Symbol;

/// A FIRST or FOLLOW set of a single symbol.
///
/// `has_none` marks the pseudo-terminal that has no symbol of its own in
/// the list: the empty marker for FIRST sets, the end-of-input marker for
/// FOLLOW sets.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PerSymbolSetVal {
    /// Whether the set contains the pseudo-terminal.
    pub has_none: bool,
    /// Sorted terminals, without duplicates.
    pub list: Vec<Symbol>,
}

/// The representation of FIRST and FOLLOW sets.
pub type PerSymbolSets = BTreeMap<Symbol, PerSymbolSetVal>;

/// Access to a mapping from symbols to their sets.
pub trait PredictSets {
    /// Returns a reference to the sets.
    fn predict_sets(&self) -> &PerSymbolSets;
}

impl PerSymbolSetVal {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set with a single terminal.
    pub fn single(sym: Symbol) -> Self {
        PerSymbolSetVal {
            has_none: false,
            list: vec![sym],
        }
    }

    /// Whether the set contains the pseudo-terminal.
    pub fn has_none(&self) -> bool {
        self.has_none
    }

    /// Inserts a terminal. Returns whether the set changed.
    pub fn insert(&mut self, sym: Symbol) -> bool {
        match self.list.binary_search(&sym) {
            Ok(_) => false,
            Err(idx) => {
                self.list.insert(idx, sym);
                true
            }
        }
    }

    /// Adds every terminal of `other` to this set, and the pseudo-terminal
    /// too if `other` has it. Returns whether the set changed.
    pub fn union(&mut self, other: &PerSymbolSetVal) -> bool {
        let prev_cardinality = self.len();
        self.union_terminals(other);
        self.has_none |= other.has_none;
        prev_cardinality != self.len()
    }

    /// Adds every terminal of `other` to this set, leaving the
    /// pseudo-terminal alone.
    pub fn union_terminals(&mut self, other: &PerSymbolSetVal) {
        self.list.extend(other.list.iter().copied());
        self.list.sort_unstable();
        self.list.dedup();
    }

    /// Removes everything.
    pub fn clear(&mut self) {
        self.list.clear();
        self.has_none = false;
    }

    /// Number of members, counting the pseudo-terminal.
    pub fn len(&self) -> usize {
        self.list.len() + self.has_none as usize
    }

    /// Whether the set has no members at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ops::Deref for PerSymbolSetVal {
    type Target = [Symbol];

    fn deref(&self) -> &[Symbol] {
        &self.list[..]
    }
}
