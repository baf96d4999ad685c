//! Password list loading utilities
//!
//! Provides functions to load password lists from files or use the embedded list.

use crate::core::Candidate;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Candidates read from a list, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedList {
    pub candidates: Vec<Candidate>,
    /// Repeated entries, once per extra occurrence
    pub duplicates: Vec<Candidate>,
}

/// Load candidates from a file, one per line
///
/// Blank and invalid lines are skipped. The first valid line fixes the password
/// length and lines of any other length are skipped too. Repeats keep their first
/// position and are listed in `duplicates`.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use terminal_hacker::wordlists::loader::load_from_file;
///
/// let list = load_from_file("data/passwords.txt").unwrap();
/// println!("Loaded {} passwords", list.candidates.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<LoadedList> {
    let content = fs::read_to_string(path)?;
    Ok(candidates_from_lines(content.lines()))
}

/// Convert an embedded string slice to candidates
///
/// # Examples
/// ```
/// use terminal_hacker::wordlists::loader::candidates_from_slice;
/// use terminal_hacker::wordlists::SAMPLE_PASSWORDS;
///
/// let candidates = candidates_from_slice(SAMPLE_PASSWORDS);
/// assert_eq!(candidates.len(), SAMPLE_PASSWORDS.len());
/// ```
#[must_use]
pub fn candidates_from_slice(slice: &[&str]) -> Vec<Candidate> {
    candidates_from_lines(slice.iter().copied()).candidates
}

fn candidates_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> LoadedList {
    let mut length = None;
    let mut seen = FxHashSet::default();
    let mut list = LoadedList::default();

    for candidate in lines
        .filter_map(|line| Candidate::new(line.trim()).ok())
        .filter(|candidate| *length.get_or_insert(candidate.len()) == candidate.len())
    {
        if seen.insert(candidate.clone()) {
            list.candidates.push(candidate);
        } else {
            list.duplicates.push(candidate);
        }
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_from_slice_converts_valid_words() {
        let input = &["dried", "freed", "GREED"];
        let candidates = candidates_from_slice(input);

        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0].text(), "DRIED");
        assert_eq!(candidates[1].text(), "FREED");
        assert_eq!(candidates[2].text(), "GREED");
    }

    #[test]
    fn candidates_from_slice_skips_invalid_and_blank() {
        let input = &["", "dr1ed", "  freed  ", "fl id", "trail"];
        let candidates = candidates_from_slice(input);

        let texts: Vec<&str> = candidates.iter().map(Candidate::text).collect();
        assert_eq!(texts, ["FREED", "TRAIL"]);
    }

    #[test]
    fn first_valid_length_wins() {
        let input = &["oops!", "foo", "dried", "bar", "terminal"];
        let candidates = candidates_from_slice(input);

        let texts: Vec<&str> = candidates.iter().map(Candidate::text).collect();
        assert_eq!(texts, ["FOO", "BAR"]);
    }

    #[test]
    fn repeated_lines_are_reported() {
        let list = candidates_from_lines(["dried", "FREED", "Dried", "greed", "DRIED"].into_iter());

        let texts: Vec<&str> = list.candidates.iter().map(Candidate::text).collect();
        assert_eq!(texts, ["DRIED", "FREED", "GREED"]);
        let repeats: Vec<&str> = list.duplicates.iter().map(Candidate::text).collect();
        assert_eq!(repeats, ["DRIED", "DRIED"]);
    }

    #[test]
    fn load_from_file_reports_repeats() {
        let path = std::env::temp_dir().join(format!(
            "terminal_hacker_repeats_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "trail\nthird\n\ntrail\n").unwrap();

        let list = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(list.candidates.len(), 2);
        assert_eq!(list.duplicates, [Candidate::new("TRAIL").unwrap()]);
    }

    #[test]
    fn candidates_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(candidates_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("data/definitely-not-here.txt").is_err());
    }
}
