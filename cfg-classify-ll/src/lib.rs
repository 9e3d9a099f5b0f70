//! The LL(1) grammar class: predictive parse tables and classification
//! of nonterminals.

#![deny(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod ll;

pub use self::error::TableError;
pub use self::ll::{LlClassification, LlNonterminalClass, LlParseTable, LlParseTableKey};
