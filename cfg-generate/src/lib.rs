//! Generates random sentences of a grammar.

#![deny(unsafe_code)]
#![deny(missing_docs)]

mod height;
mod random;

pub use self::height::MinimalHeight;
pub use self::random::{Limits, RandomDerivation, RandomGenError};
