//! Secret solving command
//!
//! Autoplays a fresh session against a known secret and returns the trial path.

use crate::core::Candidate;
use crate::engine::Session;
use crate::solver::{AutoplayReport, Solver, Strategy};
use anyhow::{Context, Result};

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: String,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self { secret }
    }
}

/// Solve a specific secret against `pool` using the given solver
///
/// The secret does not have to be in the pool; the report then tells whether the
/// solver was fooled.
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid password (empty or non-letters)
/// - The secret length differs from the pool passwords
pub fn solve_secret<S: Strategy>(
    config: &SolveConfig,
    solver: &Solver<S>,
    pool: &[Candidate],
) -> Result<AutoplayReport> {
    let secret = Candidate::new(config.secret.as_str())
        .with_context(|| format!("Invalid secret '{}'", config.secret))?;

    let mut session = Session::from_candidates(pool.iter().cloned());
    let report = solver
        .autoplay(&mut session, &secret)
        .with_context(|| format!("Cannot autoplay against {secret}"))?;

    Ok(report)
}
