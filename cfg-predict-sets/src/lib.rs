//! Predict sets: FIRST and FOLLOW set computation.

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod cfg_sets_ext;
pub mod first;
pub mod follow;
pub mod sets;

pub use self::cfg_sets_ext::CfgSetsExt;
pub use self::first::FirstSets;
pub use self::follow::FollowSets;
pub use self::sets::{PerSymbolSetVal, PerSymbolSets, PredictSets};
