//! Sets of symbols, such as the set of terminals.

use std::{iter, ops};

use bit_vec::BitVec;

use crate::local_prelude::*;

/// A set of symbols in the form of a bit vector.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

/// An iterator over a symbol set.
pub struct Iter<'a> {
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
}

impl SymbolBitSet {
    /// Constructs a `SymbolBitSet` with room for `num_syms` symbols.
    pub fn from_elem(num_syms: usize, elem: bool) -> Self {
        SymbolBitSet {
            bit_vec: BitVec::from_elem(num_syms, elem),
        }
    }

    /// Constructs an empty set sized for the grammar's symbols.
    pub fn for_grammar(grammar: &Cfg) -> Self {
        Self::from_elem(grammar.num_syms(), false)
    }

    /// Adds or removes a symbol.
    pub fn set(&mut self, index: Symbol, elem: bool) {
        self.bit_vec.set(index.usize(), elem);
    }

    /// Iterates over symbols in the set.
    pub fn iter(&self) -> Iter {
        Iter {
            iter: self.bit_vec.iter().enumerate(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Symbol;
    fn next(&mut self) -> Option<Self::Item> {
        for (id, is_present) in &mut self.iter {
            if is_present {
                return Some(Symbol::from(id as u32));
            }
        }
        None
    }
}

static TRUE: bool = true;
static FALSE: bool = false;

impl ops::Index<Symbol> for SymbolBitSet {
    type Output = bool;

    fn index(&self, index: Symbol) -> &Self::Output {
        if self.bit_vec.get(index.usize()).unwrap_or(false) {
            &TRUE
        } else {
            &FALSE
        }
    }
}
