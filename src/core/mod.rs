//! Core domain types for the terminal password puzzle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod candidate;
mod score;

pub use candidate::{Candidate, CandidateError};
pub use score::{IncompatibleLength, match_score, try_match_score};
