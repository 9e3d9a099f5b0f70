//! Context-free grammars, their FIRST and FOLLOW sets, LL(1) parse tables
//! and a table-driven parser that builds parse trees.

pub use cfg_classify_ll as classify_ll;
#[cfg(feature = "generate")]
pub use cfg_generate as generate;
pub use cfg_grammar::*;
pub use cfg_ll_parser as ll_parser;
#[cfg(feature = "load")]
pub use cfg_load as load;
pub use cfg_predict_sets as predict_sets;
