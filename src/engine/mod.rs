//! Elimination engine
//!
//! Holds the candidate passwords with their recorded feedback and computes which
//! candidates remain consistent with every trial.

mod error;
mod session;

pub use error::{ConflictingFeedback, EngineError};
pub use session::{Recorded, Session, SessionState};
