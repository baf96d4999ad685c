//! Autoplay driver
//!
//! Plays a session against a known secret, standing in for the terminal. Used to
//! exercise the elimination algorithm and to measure strategies.

use super::strategy::{FirstCandidate, Strategy};
use crate::core::{Candidate, match_score};
use crate::engine::{EngineError, Session};

/// Main password solver
///
/// Coordinates trial selection and scoring using a given strategy.
pub struct Solver<S: Strategy> {
    strategy: S,
}

/// How an autoplay run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A single candidate remains, or a trial matched in every position
    Solved(Candidate),
    /// The feedback ruled out every candidate
    NoSolution,
    /// The strategy declined to pick among the remaining candidates
    Undecided(Vec<Candidate>),
}

/// A single trial in an autoplay run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialStep {
    pub trial: Candidate,
    pub score: usize,
    pub survivors_before: usize,
    pub survivors_after: usize,
}

/// Result of an autoplay run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayReport {
    pub secret: Candidate,
    pub steps: Vec<TrialStep>,
    pub outcome: Outcome,
}

impl AutoplayReport {
    /// The run ended on the secret itself
    ///
    /// A secret outside the candidate list can end on some other lone survivor.
    #[must_use]
    pub fn found_secret(&self) -> bool {
        matches!(&self.outcome, Outcome::Solved(found) if *found == self.secret)
    }

    #[must_use]
    pub fn trial_count(&self) -> usize {
        self.steps.len()
    }
}

impl<S: Strategy> Solver<S> {
    pub const fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Suggest the next password to try
    ///
    /// Returns `None` once the session is solved or has no consistent candidate.
    pub fn next_trial(&self, session: &Session) -> Option<Candidate> {
        let survivors = session.surviving_candidates();
        if survivors.len() <= 1 {
            return None;
        }

        self.strategy.select_trial(&survivors).cloned()
    }

    /// Play `session` against `secret` until a single candidate remains
    ///
    /// Each round picks a trial among the survivors, scores it against the secret
    /// and records the score. Trials are always untested survivors, so the run
    /// takes at most one trial per candidate. Existing trials in the session are
    /// kept and narrowing continues from them.
    ///
    /// # Errors
    /// Returns `EngineError::IncompatibleLength` if the secret length differs from
    /// the session candidates.
    pub fn autoplay(
        &self,
        session: &mut Session,
        secret: &Candidate,
    ) -> Result<AutoplayReport, EngineError> {
        session.ensure_compatible(secret)?;

        let mut steps = Vec::new();

        loop {
            let survivors = session.surviving_candidates();
            let survivors_before = survivors.len();

            let trial = match survivors.as_slice() {
                [] => return Ok(report(secret, steps, Outcome::NoSolution)),
                [only] => {
                    let outcome = Outcome::Solved((*only).clone());
                    return Ok(report(secret, steps, outcome));
                }
                _ => match self.strategy.select_trial(&survivors) {
                    Some(trial) => trial.clone(),
                    None => {
                        let remaining = survivors.iter().map(|&c| c.clone()).collect();
                        return Ok(report(secret, steps, Outcome::Undecided(remaining)));
                    }
                },
            };

            let score = match_score(&trial, secret);
            let recorded = session.record_score(&trial, score)?;

            steps.push(TrialStep {
                trial: trial.clone(),
                score,
                survivors_before,
                survivors_after: session.surviving_candidates().len(),
            });

            if recorded.solved {
                return Ok(report(secret, steps, Outcome::Solved(trial)));
            }
        }
    }
}

fn report(secret: &Candidate, steps: Vec<TrialStep>, outcome: Outcome) -> AutoplayReport {
    AutoplayReport {
        secret: secret.clone(),
        steps,
        outcome,
    }
}

impl Session {
    /// Autoplay against `secret`, always trying the first surviving candidate
    ///
    /// # Errors
    /// Returns `EngineError::IncompatibleLength` if the secret length differs from
    /// the session candidates.
    ///
    /// # Examples
    /// ```
    /// use terminal_hacker::core::Candidate;
    /// use terminal_hacker::engine::Session;
    /// use terminal_hacker::solver::Outcome;
    ///
    /// let words = ["DRIED", "FREED", "GREED", "CARED", "CREED", "FLUID"];
    /// let mut session = Session::from_candidates(words.map(|w| Candidate::new(w).unwrap()));
    ///
    /// let secret = Candidate::new("FREED").unwrap();
    /// let report = session.autoplay(&secret).unwrap();
    /// assert_eq!(report.outcome, Outcome::Solved(secret));
    /// assert!(report.trial_count() <= words.len());
    /// ```
    pub fn autoplay(&mut self, secret: &Candidate) -> Result<AutoplayReport, EngineError> {
        Solver::new(FirstCandidate).autoplay(self, secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IncompatibleLength;
    use crate::solver::{MinimaxStrategy, RandomStrategy, StrategyType};
    use crate::wordlists::{SAMPLE_PASSWORDS, loader::candidates_from_slice};

    fn c(s: &str) -> Candidate {
        Candidate::new(s).unwrap()
    }

    fn sample_session() -> Session {
        Session::from_candidates(candidates_from_slice(SAMPLE_PASSWORDS))
    }

    fn trail(report: &AutoplayReport) -> Vec<(&str, usize)> {
        report
            .steps
            .iter()
            .map(|s| (s.trial.text(), s.score))
            .collect()
    }

    #[test]
    fn autoplay_fries() {
        let mut session = sample_session();
        let report = session.autoplay(&c("FRIES")).unwrap();

        assert_eq!(trail(&report), [("DRIED", 3), ("FREED", 3)]);
        assert_eq!(report.steps[0].survivors_before, 13);
        assert_eq!(report.steps[0].survivors_after, 4);
        assert_eq!(report.steps[1].survivors_after, 1);
        assert!(report.found_secret());
    }

    #[test]
    fn autoplay_after_reset_creed() {
        let mut session = sample_session();
        session.autoplay(&c("FRIES")).unwrap();
        session.reset_trials();

        let report = session.autoplay(&c("CREED")).unwrap();
        assert_eq!(trail(&report), [("DRIED", 3), ("FREED", 4), ("GREED", 4)]);
        assert_eq!(report.outcome, Outcome::Solved(c("CREED")));
    }

    #[test]
    fn autoplay_short_list_freed() {
        let words = ["DRIED", "FREED", "GREED", "CARED", "CREED", "FLUID"];
        let mut session = Session::from_candidates(words.map(c));
        let report = session.autoplay(&c("FREED")).unwrap();

        assert_eq!(trail(&report), [("DRIED", 3), ("FREED", 5)]);
        assert!(report.found_secret());
        assert!(report.trial_count() <= words.len());
    }

    #[test]
    fn autoplay_exact_first_trial() {
        let mut session = Session::from_candidates([c("AB"), c("AC")]);
        let report = session.autoplay(&c("AB")).unwrap();

        assert_eq!(trail(&report), [("AB", 2)]);
        assert_eq!(report.outcome, Outcome::Solved(c("AB")));
    }

    #[test]
    fn autoplay_converges_for_every_secret() {
        let pool = candidates_from_slice(SAMPLE_PASSWORDS);

        for strategy in ["first", "minimax", "random"] {
            let solver = Solver::new(StrategyType::from_name(strategy));
            for secret in &pool {
                let mut session = Session::from_candidates(pool.iter().cloned());
                let report = solver.autoplay(&mut session, secret).unwrap();

                assert!(report.found_secret(), "{strategy} missed {secret}");
                assert!(report.trial_count() <= pool.len());
            }
        }
    }

    #[test]
    fn minimax_opens_with_best_split() {
        let session = sample_session();
        let trial = Solver::new(MinimaxStrategy).next_trial(&session).unwrap();
        assert_eq!(trial.text(), "CARED");
    }

    #[test]
    fn secret_outside_pool_can_be_eliminated() {
        let mut session = sample_session();
        let report = session.autoplay(&c("BLAND")).unwrap();

        assert_eq!(trail(&report), [("DRIED", 1), ("TRULY", 0)]);
        assert_eq!(report.outcome, Outcome::NoSolution);
        assert!(!report.found_secret());
    }

    #[test]
    fn secret_outside_pool_can_end_on_lookalike() {
        let mut session = sample_session();
        let report = session.autoplay(&c("TRIED")).unwrap();

        assert_eq!(report.outcome, Outcome::Solved(c("CRIED")));
        assert!(!report.found_secret());
    }

    #[test]
    fn autoplay_empty_session() {
        let mut session = Session::new();
        let report = session.autoplay(&c("XYZ")).unwrap();

        assert!(report.steps.is_empty());
        assert_eq!(report.outcome, Outcome::NoSolution);
    }

    #[test]
    fn autoplay_rejects_length_mismatch() {
        let mut session = sample_session();
        let result = Solver::new(RandomStrategy).autoplay(&mut session, &c("FOO"));

        assert_eq!(
            result,
            Err(EngineError::IncompatibleLength(IncompatibleLength {
                expected: 5,
                found: 3
            }))
        );
        assert_eq!(session.trial_count(), 0);
    }

    #[test]
    fn next_trial_none_when_solved() {
        let mut session = Session::from_candidates([c("FOO"), c("BAR"), c("FOR")]);
        let solver = Solver::new(FirstCandidate);
        assert_eq!(solver.next_trial(&session), Some(c("FOO")));

        session.record_score(&c("FOO"), 2).unwrap();
        assert_eq!(solver.next_trial(&session), None);
    }

    #[test]
    fn undecided_when_strategy_declines() {
        struct Never;
        impl Strategy for Never {
            fn select_trial<'a>(&self, _: &[&'a Candidate]) -> Option<&'a Candidate> {
                None
            }
        }

        let mut session = Session::from_candidates([c("FOO"), c("BAR")]);
        let report = Solver::new(Never).autoplay(&mut session, &c("FOO")).unwrap();
        assert_eq!(report.outcome, Outcome::Undecided(vec![c("FOO"), c("BAR")]));
    }
}
