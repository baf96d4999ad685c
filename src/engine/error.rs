//! Engine error and anomaly types

use crate::core::{Candidate, IncompatibleLength};
use std::fmt;

/// Recoverable failures reported by a [`Session`](super::Session)
///
/// None of these abort a session; it keeps its last accepted state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The candidate is already in the session; insertion skipped
    DuplicateCandidate(Candidate),
    /// The candidate is not in the session
    NotFound(Candidate),
    /// A score larger than the candidate length was offered
    ScoreOutOfRange {
        candidate: Candidate,
        score: usize,
    },
    /// The candidate length differs from the session length
    IncompatibleLength(IncompatibleLength),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCandidate(candidate) => {
                write!(f, "Password {candidate} already present in list")
            }
            Self::NotFound(candidate) => write!(f, "Password {candidate} is not in the list"),
            Self::ScoreOutOfRange { candidate, score } => write!(
                f,
                "Score {score} is out of range for {candidate} (max {})",
                candidate.len()
            ),
            Self::IncompatibleLength(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<IncompatibleLength> for EngineError {
    fn from(e: IncompatibleLength) -> Self {
        Self::IncompatibleLength(e)
    }
}

/// A trial was re-scored with a different value than before
///
/// The new score has already replaced the old one; this is surfaced so the
/// caller can warn about the correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictingFeedback {
    pub candidate: Candidate,
    pub previous: usize,
    pub current: usize,
}

impl fmt::Display for ConflictingFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Password {} already tried, number of good positions was {}, now set to {}",
            self.candidate, self.previous, self.current
        )
    }
}
