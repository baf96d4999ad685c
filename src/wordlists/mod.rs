//! Password lists
//!
//! Provides the embedded sample list and loading of custom lists.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE_PASSWORDS, SAMPLE_PASSWORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_matches_const() {
        assert_eq!(SAMPLE_PASSWORDS.len(), SAMPLE_PASSWORDS_COUNT);
        assert_eq!(SAMPLE_PASSWORDS_COUNT, 13);
    }

    #[test]
    fn sample_words_share_length() {
        for &word in SAMPLE_PASSWORDS {
            assert_eq!(word.len(), 5, "Password '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Password '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn sample_words_unique() {
        let unique: std::collections::HashSet<_> = SAMPLE_PASSWORDS.iter().collect();
        assert_eq!(unique.len(), SAMPLE_PASSWORDS.len());
    }
}
