//! Terminal password candidate representation
//!
//! A Candidate stores one password from the terminal screen as normalized uppercase ASCII.

use std::fmt;

/// A fixed-length password candidate
///
/// Stored uppercase so that user input in any case refers to the same candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Candidate {
    text: String,
}

/// Error type for invalid candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for CandidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Password must contain at least one letter"),
            Self::NonAscii => write!(f, "Password must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Password contains invalid characters"),
        }
    }
}

impl std::error::Error for CandidateError {}

impl Candidate {
    /// Create a new Candidate from a string
    ///
    /// # Errors
    /// Returns `CandidateError` if:
    /// - The string is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use terminal_hacker::core::Candidate;
    ///
    /// let candidate = Candidate::new("dried").unwrap();
    /// assert_eq!(candidate.text(), "DRIED");
    ///
    /// assert!(Candidate::new("").is_err());
    /// assert!(Candidate::new("dr1ed").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, CandidateError> {
        let mut text: String = text.into();

        if text.is_empty() {
            return Err(CandidateError::Empty);
        }

        // Checked before case mapping: Unicode uppercasing can turn "ß" into "SS"
        if !text.is_ascii() {
            return Err(CandidateError::NonAscii);
        }

        text.make_ascii_uppercase();

        if !text.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(CandidateError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the candidate as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the candidate symbols as bytes
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of symbols in the candidate
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a validated candidate, provided for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Candidate {
    type Err = CandidateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_creation_valid() {
        let candidate = Candidate::new("FREED").unwrap();
        assert_eq!(candidate.text(), "FREED");
        assert_eq!(candidate.symbols(), b"FREED");
        assert_eq!(candidate.len(), 5);
        assert!(!candidate.is_empty());
    }

    #[test]
    fn candidate_creation_lowercase_normalized() {
        let candidate = Candidate::new("freed").unwrap();
        assert_eq!(candidate.text(), "FREED");

        let mixed = Candidate::new("FrEeD").unwrap();
        assert_eq!(mixed, candidate);
    }

    #[test]
    fn candidate_any_length_accepted() {
        assert_eq!(Candidate::new("ab").unwrap().len(), 2);
        assert_eq!(Candidate::new("terminals").unwrap().len(), 9);
    }

    #[test]
    fn candidate_creation_empty() {
        assert_eq!(Candidate::new(""), Err(CandidateError::Empty));
    }

    #[test]
    fn candidate_creation_invalid_characters() {
        assert_eq!(Candidate::new("DR1ED"), Err(CandidateError::InvalidCharacters));
        assert_eq!(Candidate::new("DRI D"), Err(CandidateError::InvalidCharacters));
        assert_eq!(Candidate::new("DRIE!"), Err(CandidateError::InvalidCharacters));
        assert_eq!(Candidate::new("DRIÉD"), Err(CandidateError::NonAscii));
    }

    #[test]
    fn candidate_rejects_letters_that_uppercase_to_ascii() {
        assert_eq!(Candidate::new("straße"), Err(CandidateError::NonAscii));
        assert_eq!(Candidate::new("\u{FB01}nd"), Err(CandidateError::NonAscii));
        assert_eq!(Candidate::new("ı"), Err(CandidateError::NonAscii));
    }

    #[test]
    fn candidate_display_and_parse() {
        let candidate: Candidate = "third".parse().unwrap();
        assert_eq!(format!("{candidate}"), "THIRD");
        assert!("th1rd".parse::<Candidate>().is_err());
    }
}
