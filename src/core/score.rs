//! Positional match scoring
//!
//! The terminal reports feedback as "N/len correct": the count of positions where
//! the tried password and the hidden password hold the same letter. Letters in
//! the wrong position earn nothing, unlike Wordle's yellows.

use super::Candidate;
use std::fmt;

/// Two candidates of different lengths were compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncompatibleLength {
    pub expected: usize,
    pub found: usize,
}

impl fmt::Display for IncompatibleLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Password length mismatch: expected {} letters, got {}",
            self.expected, self.found
        )
    }
}

impl std::error::Error for IncompatibleLength {}

/// Count positions where `a` and `b` hold identical symbols
///
/// # Errors
/// Returns `IncompatibleLength` if the candidates differ in length.
///
/// # Examples
/// ```
/// use terminal_hacker::core::{Candidate, try_match_score};
///
/// let a = Candidate::new("DRIED").unwrap();
/// let b = Candidate::new("FREED").unwrap();
/// assert_eq!(try_match_score(&a, &b), Ok(3));
///
/// let short = Candidate::new("FOO").unwrap();
/// assert!(try_match_score(&a, &short).is_err());
/// ```
pub fn try_match_score(a: &Candidate, b: &Candidate) -> Result<usize, IncompatibleLength> {
    if a.len() != b.len() {
        return Err(IncompatibleLength {
            expected: a.len(),
            found: b.len(),
        });
    }

    Ok(a
        .symbols()
        .iter()
        .zip(b.symbols())
        .filter(|(x, y)| x == y)
        .count())
}

/// Count positions where `a` and `b` hold identical symbols
///
/// Comparing candidates of different lengths is a caller bug, not a runtime state.
///
/// # Panics
/// Panics if `a` and `b` differ in length.
#[must_use]
pub fn match_score(a: &Candidate, b: &Candidate) -> usize {
    match try_match_score(a, b) {
        Ok(score) => score,
        Err(e) => panic!("match_score({a}, {b}): {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> Candidate {
        Candidate::new(s).unwrap()
    }

    #[test]
    fn score_reflexive() {
        for word in ["DRIED", "TRULY", "AB", "Q", "TERMINALS"] {
            let w = c(word);
            assert_eq!(match_score(&w, &w), w.len());
        }
    }

    #[test]
    fn score_symmetric() {
        let words = ["DRIED", "FREED", "GREED", "CARED", "FLUID", "TRUTH"];
        for a in words {
            for b in words {
                assert_eq!(match_score(&c(a), &c(b)), match_score(&c(b), &c(a)));
            }
        }
    }

    #[test]
    fn score_counts_positions_only() {
        // Same letters, no shared positions
        assert_eq!(match_score(&c("ABC"), &c("CAB")), 0);
        // R, E and D line up; the leading D does not
        assert_eq!(match_score(&c("DRIED"), &c("FREED")), 3);
        assert_eq!(match_score(&c("DRIED"), &c("CRIED")), 4);
        assert_eq!(match_score(&c("DRIED"), &c("FLUID")), 1);
    }

    #[test]
    fn try_score_reports_lengths() {
        let err = try_match_score(&c("DRIED"), &c("FOO")).unwrap_err();
        assert_eq!(err.expected, 5);
        assert_eq!(err.found, 3);
        assert_eq!(
            err.to_string(),
            "Password length mismatch: expected 5 letters, got 3"
        );
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn score_panics_on_length_mismatch() {
        let _ = match_score(&c("DRIED"), &c("FOO"));
    }
}
