//! Table-driven LL(1) parsing into concrete parse trees.

#![deny(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod ext;
mod parser;
pub mod tree;

pub use self::error::{ParseError, SyntaxError};
pub use self::ext::CfgParseExt;
pub use self::parser::LlParser;
pub use self::tree::{NodeId, ParseTree};
