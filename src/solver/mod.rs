//! Password solving algorithms
//!
//! Trial selection strategies and the autoplay driver built on the elimination engine.

mod autoplay;
pub mod minimax;
pub mod strategy;

pub use autoplay::{AutoplayReport, Outcome, Solver, TrialStep};
pub use strategy::{FirstCandidate, MinimaxStrategy, RandomStrategy, Strategy, StrategyType};
