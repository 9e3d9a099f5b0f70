//! Generate random strings from a grammar.

use std::error::Error;
use std::fmt;

use cfg_grammar::{Cfg, RuleId};
use cfg_symbol::Symbol;
use log::{debug, trace};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::height::MinimalHeight;

/// Returned when we fail to generate a random output.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RandomGenError {
    /// We produced a number of terminal symbols above the
    /// given limit.
    LimitExceeded,
    /// The start symbol derives no string of terminals.
    Unproductive,
}

/// Limits for generation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Limits {
    /// How many terminals we are allowed to produce.
    pub terminals: u64,
    /// Depth of the derivation tree past which we always pick the
    /// alternative that terminates soonest.
    pub depth: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            terminals: 1000,
            depth: 16,
        }
    }
}

/// Extension trait that allows generation.
pub trait RandomDerivation {
    /// Generates terminal symbols derivable from the start symbol, driven
    /// by the given **rng**. Respects provided limits.
    ///
    /// Performs a leftmost derivation. Each nonterminal is expanded with
    /// an alternative chosen at random among those that can terminate.
    ///
    /// # Errors
    ///
    /// Returns an error when limits are exceeded, or when the start symbol
    /// derives no string of terminals.
    fn random<R: Rng>(&self, rng: &mut R, limits: Limits) -> Result<Vec<Symbol>, RandomGenError>;

    /// Same as `fn random`, but initializes a thread rng
    /// and uses it to produce output.
    fn with_thread_rng(&self, limits: Limits) -> Result<Vec<Symbol>, RandomGenError> {
        let mut thread_rng: ThreadRng = rand::thread_rng();
        self.random(&mut thread_rng, limits)
    }
}

impl RandomDerivation for Cfg {
    fn random<R: Rng>(&self, rng: &mut R, limits: Limits) -> Result<Vec<Symbol>, RandomGenError> {
        let heights = MinimalHeight::new(self);
        if heights.height(self.start_sym()).is_none() {
            return Err(RandomGenError::Unproductive);
        }
        // Only alternatives that can terminate, for every nonterminal.
        let productive: Vec<Vec<(RuleId, u32)>> = self
            .sym_source()
            .symbols()
            .map(|sym| {
                self.rules_for(sym)
                    .filter_map(|(id, _)| heights.rule_height(self, id).map(|h| (id, h)))
                    .collect()
            })
            .collect();

        let mut work = vec![(self.start_sym(), 0)];
        let mut result = vec![];
        while let Some((sym, depth)) = work.pop() {
            if self.is_terminal(sym) {
                result.push(sym);
                if result.len() as u64 > limits.terminals {
                    return Err(RandomGenError::LimitExceeded);
                }
                continue;
            }
            let alternatives = &productive[sym.usize()];
            let rule_id = if depth < limits.depth {
                alternatives[rng.gen_range(0..alternatives.len())].0
            } else {
                let shortest = alternatives.iter().map(|&(_, height)| height).min();
                let candidates: Vec<RuleId> = alternatives
                    .iter()
                    .filter(|&&(_, height)| Some(height) == shortest)
                    .map(|&(id, _)| id)
                    .collect();
                candidates[rng.gen_range(0..candidates.len())]
            };
            let rule = self.rule(rule_id);
            trace!("expand {} at depth {}", self.stringify_rule(rule), depth);
            work.extend(rule.rhs.iter().rev().map(|&sym| (sym, depth + 1)));
        }
        debug!("generated {} terminals", result.len());
        Ok(result)
    }
}

impl fmt::Display for RandomGenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RandomGenError::LimitExceeded => write!(f, "terminal limit exceeded"),
            RandomGenError::Unproductive => write!(f, "the start symbol derives no terminal string"),
        }
    }
}

impl Error for RandomGenError {}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_simplest_random_generation() {
        let cfg = Cfg::from_rules("lhs", [("lhs", ["rhs"])]).unwrap();
        let rhs = cfg.sym("rhs").unwrap();
        let limits = Limits {
            terminals: 1,
            depth: 4,
        };
        assert_eq!(cfg.with_thread_rng(limits), Ok(vec![rhs]));
    }

    #[test]
    fn test_depth_limit_terminates() {
        let cfg = Cfg::from_rules(
            "S",
            [("S", vec!["(", "S", "S", ")"]), ("S", vec!["x"])],
        )
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        let limits = Limits {
            terminals: u64::MAX,
            depth: 3,
        };
        for _ in 0..50 {
            let sentence = cfg.random(&mut rng, limits).unwrap();
            // A tree of depth at most 4 has at most 8 leaves named `x`.
            let x = cfg.sym("x").unwrap();
            assert!(sentence.iter().filter(|&&sym| sym == x).count() <= 8);
        }
    }

    #[test]
    fn test_limit_exceeded() {
        let cfg = Cfg::from_rules("S", [("S", ["a", "a", "a"])]).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        let limits = Limits {
            terminals: 2,
            depth: 4,
        };
        assert_eq!(cfg.random(&mut rng, limits), Err(RandomGenError::LimitExceeded));
    }

    #[test]
    fn test_unproductive() {
        let cfg = Cfg::from_rules("S", [("S", ["S", "a"])]).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(
            cfg.random(&mut rng, Limits::default()),
            Err(RandomGenError::Unproductive)
        );
    }
}
