//! Library for manipulations on context-free grammars. A grammar is built once with
//! [`CfgBuilder`] or [`Cfg::from_rules`], validated, and never mutated afterwards.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, allow(missing_docs))]

pub mod builder;
pub mod cfg;
pub mod error;
pub mod occurence_map;
pub mod symbol_bit_set;

pub use crate::builder::{CfgBuilder, RuleBuilder};
pub use crate::cfg::{Cfg, CfgRule, RuleId, SymbolKind, END_OF_INPUT, EPSILON};
pub use crate::error::GrammarError;
pub use crate::symbol_bit_set::SymbolBitSet;
pub use cfg_symbol::{Symbol, SymbolName, SymbolSource};

pub(crate) mod local_prelude {
    pub use crate::cfg::{Cfg, CfgRule, RuleId};
    pub use crate::symbol_bit_set::SymbolBitSet;
    pub use cfg_symbol::{Symbol, SymbolSource};
}
