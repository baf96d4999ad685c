//! Trial selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::Candidate;

/// A strategy for choosing the next password to try
pub trait Strategy {
    /// Select the next trial among the surviving candidates
    ///
    /// Returns `None` if there are no survivors.
    fn select_trial<'a>(&self, survivors: &[&'a Candidate]) -> Option<&'a Candidate>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// First survivor in list order (default)
    First(FirstCandidate),
    /// Smallest worst-case split
    Minimax(MinimaxStrategy),
    /// Random survivor
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_trial<'a>(&self, survivors: &[&'a Candidate]) -> Option<&'a Candidate> {
        match self {
            Self::First(s) => s.select_trial(survivors),
            Self::Minimax(s) => s.select_trial(survivors),
            Self::Random(s) => s.select_trial(survivors),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "first", "minimax", "random".
    /// Defaults to first if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "minimax" => Self::Minimax(MinimaxStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::First(FirstCandidate),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::First(_) => "first",
            Self::Minimax(_) => "minimax",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::First(FirstCandidate)
    }
}

/// Try the first surviving candidate
///
/// Not optimal, but deterministic: the trial sequence depends only on list order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl Strategy for FirstCandidate {
    fn select_trial<'a>(&self, survivors: &[&'a Candidate]) -> Option<&'a Candidate> {
        survivors.first().copied()
    }
}

/// Pure minimax strategy
///
/// Always selects the survivor that minimizes worst-case remaining candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_trial<'a>(&self, survivors: &[&'a Candidate]) -> Option<&'a Candidate> {
        super::minimax::select_best_trial(survivors).map(|(best, _)| best)
    }
}

/// Random strategy
///
/// Picks any survivor uniformly at random.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_trial<'a>(&self, survivors: &[&'a Candidate]) -> Option<&'a Candidate> {
        use rand::prelude::IndexedRandom;

        survivors.choose(&mut rand::rng()).copied()
    }
}
