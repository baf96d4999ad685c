//! Password session: the candidate list and the feedback recorded against it

use super::error::{ConflictingFeedback, EngineError};
use crate::core::{Candidate, IncompatibleLength, match_score};
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone)]
struct Entry {
    candidate: Candidate,
    score: Option<usize>,
    // Trial order; meaningful only while `score` is set
    tried_at: u64,
}

/// Where a session stands in the solving process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No candidates
    Empty,
    /// Candidates present, nothing tried yet
    Populated,
    /// At least one trial recorded and several candidates still consistent
    Narrowing,
    /// Exactly one consistent candidate
    Solved,
    /// The recorded feedback rules out every candidate
    NoSolution,
}

/// Outcome of recording a trial score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    /// The score equals the candidate length: this trial is the password
    pub solved: bool,
    /// Set when a different score had already been recorded for this candidate
    pub conflict: Option<ConflictingFeedback>,
}

/// Ordered set of password candidates with their match scores
///
/// Insertion order is kept so that display and autoplay trial choice are reproducible.
#[derive(Debug, Clone, Default)]
pub struct Session {
    entries: Vec<Entry>,
    index: FxHashMap<Candidate, usize>,
    next_trial: u64,
}

impl Session {
    /// Create an empty session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session holding `candidates` in order
    ///
    /// Repeated candidates keep their first position. Lengths are not checked.
    /// Lists read with [`load_from_file`](crate::wordlists::loader::load_from_file)
    /// arrive already deduplicated, with the repeats reported there.
    #[must_use]
    pub fn from_candidates(candidates: impl IntoIterator<Item = Candidate>) -> Self {
        let mut session = Self::new();
        for candidate in candidates {
            if !session.contains(&candidate) {
                session.push_untested(candidate);
            }
        }
        session
    }

    /// Number of candidates in the session
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shared candidate length, taken from the first entry (0 when empty)
    #[must_use]
    pub fn candidate_length(&self) -> usize {
        self.entries.first().map_or(0, |e| e.candidate.len())
    }

    #[must_use]
    pub fn contains(&self, candidate: &Candidate) -> bool {
        self.index.contains_key(candidate)
    }

    /// Check that `candidate` may join this session
    ///
    /// `add` does not check lengths itself. Callers adding user input must run this
    /// first, since scoring assumes all candidates share one length.
    ///
    /// # Errors
    /// Returns `EngineError::IncompatibleLength` if the session is non-empty and the
    /// lengths differ.
    pub fn ensure_compatible(&self, candidate: &Candidate) -> Result<(), EngineError> {
        let expected = self.candidate_length();
        if expected != 0 && candidate.len() != expected {
            return Err(IncompatibleLength {
                expected,
                found: candidate.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Add an untested candidate at the end of the list
    ///
    /// # Errors
    /// Returns `EngineError::DuplicateCandidate` if it is already present; the
    /// session is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use terminal_hacker::core::Candidate;
    /// use terminal_hacker::engine::{EngineError, Session};
    ///
    /// let mut session = Session::new();
    /// let dried = Candidate::new("DRIED").unwrap();
    /// session.add(dried.clone()).unwrap();
    ///
    /// assert_eq!(session.add(dried.clone()), Err(EngineError::DuplicateCandidate(dried)));
    /// assert_eq!(session.len(), 1);
    /// ```
    pub fn add(&mut self, candidate: Candidate) -> Result<(), EngineError> {
        if self.contains(&candidate) {
            return Err(EngineError::DuplicateCandidate(candidate));
        }

        self.push_untested(candidate);
        Ok(())
    }

    fn push_untested(&mut self, candidate: Candidate) {
        self.index.insert(candidate.clone(), self.entries.len());
        self.entries.push(Entry {
            candidate,
            score: None,
            tried_at: 0,
        });
    }

    /// Remove a candidate, returning its recorded score
    ///
    /// # Errors
    /// Returns `EngineError::NotFound` if the candidate is not in the session.
    pub fn remove(&mut self, candidate: &Candidate) -> Result<Option<usize>, EngineError> {
        let Some(position) = self.index.remove(candidate) else {
            return Err(EngineError::NotFound(candidate.clone()));
        };

        let entry = self.entries.remove(position);
        for shifted in &self.entries[position..] {
            if let Some(i) = self.index.get_mut(&shifted.candidate) {
                *i -= 1;
            }
        }

        Ok(entry.score)
    }

    /// Drop every candidate
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
        self.next_trial = 0;
    }

    /// Record the number of good positions reported for `candidate`
    ///
    /// Last write wins. Re-scoring a trial with a different value is reported
    /// through [`Recorded::conflict`] but still applied.
    ///
    /// # Errors
    /// - `EngineError::NotFound` if the candidate is not in the session
    /// - `EngineError::ScoreOutOfRange` if `score` exceeds the candidate length
    pub fn record_score(
        &mut self,
        candidate: &Candidate,
        score: usize,
    ) -> Result<Recorded, EngineError> {
        let &position = self
            .index
            .get(candidate)
            .ok_or_else(|| EngineError::NotFound(candidate.clone()))?;

        if score > candidate.len() {
            return Err(EngineError::ScoreOutOfRange {
                candidate: candidate.clone(),
                score,
            });
        }

        let entry = &mut self.entries[position];
        let conflict = match entry.score {
            Some(previous) if previous != score => Some(ConflictingFeedback {
                candidate: candidate.clone(),
                previous,
                current: score,
            }),
            _ => None,
        };

        if entry.score.is_none() {
            entry.tried_at = self.next_trial;
            self.next_trial += 1;
        }
        entry.score = Some(score);

        Ok(Recorded {
            solved: score == candidate.len(),
            conflict,
        })
    }

    /// Recorded score for a candidate
    ///
    /// `None` if the candidate is not in the session, `Some(None)` if untested.
    #[must_use]
    pub fn score_of(&self, candidate: &Candidate) -> Option<Option<usize>> {
        self.index.get(candidate).map(|&i| self.entries[i].score)
    }

    /// Iterate candidates and scores in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (&Candidate, Option<usize>)> {
        self.entries.iter().map(|e| (&e.candidate, e.score))
    }

    /// Tried candidates with their scores, in the order they were first tried
    #[must_use]
    pub fn trials(&self) -> Vec<(&Candidate, usize)> {
        let mut tried: Vec<&Entry> = self.entries.iter().filter(|e| e.score.is_some()).collect();
        tried.sort_by_key(|e| e.tried_at);

        tried
            .into_iter()
            .filter_map(|e| e.score.map(|score| (&e.candidate, score)))
            .collect()
    }

    #[must_use]
    pub fn trial_count(&self) -> usize {
        self.entries.iter().filter(|e| e.score.is_some()).count()
    }

    /// Every other candidate sharing exactly `n` positions with `trial`
    ///
    /// # Panics
    /// Panics if `trial` differs in length from a session candidate.
    #[must_use]
    pub fn candidates_matching(&self, trial: &Candidate, n: usize) -> Vec<&Candidate> {
        self.entries
            .iter()
            .map(|e| &e.candidate)
            .filter(|&candidate| candidate != trial && match_score(trial, candidate) == n)
            .collect()
    }

    /// Candidates consistent with every recorded trial
    ///
    /// Untested candidates seed the result and each trial filters it, in trial
    /// order. A trial scored at full length is the password and is returned alone.
    /// Tried candidates never come back otherwise.
    ///
    /// Inconsistent feedback yields an empty list.
    ///
    /// # Examples
    /// ```
    /// use terminal_hacker::core::Candidate;
    /// use terminal_hacker::engine::Session;
    ///
    /// let words = ["DRIED", "FREED", "CRIED", "FLUID"];
    /// let mut session = Session::from_candidates(words.map(|w| Candidate::new(w).unwrap()));
    ///
    /// session.record_score(&Candidate::new("DRIED").unwrap(), 4).unwrap();
    /// let survivors: Vec<&str> = session.surviving_candidates().iter().map(|c| c.text()).collect();
    /// assert_eq!(survivors, ["CRIED"]);
    /// ```
    #[must_use]
    pub fn surviving_candidates(&self) -> Vec<&Candidate> {
        let mut working: Vec<&Candidate> = self
            .entries
            .iter()
            .filter(|e| e.score.is_none())
            .map(|e| &e.candidate)
            .collect();

        for (trial, score) in self.trials() {
            if score == trial.len() {
                return vec![trial];
            }

            let consistent: FxHashSet<&Candidate> =
                self.candidates_matching(trial, score).into_iter().collect();
            working.retain(|candidate| consistent.contains(candidate));
        }

        working
    }

    /// Forget every recorded score, keeping the candidates
    pub fn reset_trials(&mut self) {
        for entry in &mut self.entries {
            entry.score = None;
            entry.tried_at = 0;
        }
        self.next_trial = 0;
    }

    /// Classify the session from its survivors and trials
    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.is_empty() {
            return SessionState::Empty;
        }

        match self.surviving_candidates().len() {
            0 => SessionState::NoSolution,
            1 => SessionState::Solved,
            _ if self.trial_count() == 0 => SessionState::Populated,
            _ => SessionState::Narrowing,
        }
    }
}
