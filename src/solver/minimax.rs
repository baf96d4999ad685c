//! Minimax trial selection
//!
//! Picks the survivor whose worst-case feedback leaves the fewest candidates.

use crate::core::{Candidate, match_score};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a trial
///
/// Groups `survivors` by the score they would report against `trial` and returns
/// the largest group. The trial scores against itself too, so a survivor trial
/// always has a singleton "exact" group.
///
/// # Examples
/// ```
/// use terminal_hacker::core::Candidate;
/// use terminal_hacker::solver::minimax::calculate_max_remaining;
///
/// let words: Vec<Candidate> = ["FOO", "BAR", "FOR"]
///     .iter()
///     .map(|w| Candidate::new(*w).unwrap())
///     .collect();
/// let survivors: Vec<&Candidate> = words.iter().collect();
///
/// // FOO: exact(FOO), 0(BAR), 2(FOR)
/// assert_eq!(calculate_max_remaining(&words[0], &survivors), 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(trial: &Candidate, survivors: &[&Candidate]) -> usize {
    group_by_score(trial, survivors)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

fn group_by_score(trial: &Candidate, survivors: &[&Candidate]) -> FxHashMap<usize, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in survivors {
        *counts.entry(match_score(trial, candidate)).or_insert(0) += 1;
    }

    counts
}

/// Select the survivor with the smallest worst case
///
/// Ties go to the earliest survivor, so the choice is reproducible.
/// Returns the chosen trial with its worst-case remaining count, or `None` if
/// there are no survivors.
#[must_use]
pub fn select_best_trial<'a>(survivors: &[&'a Candidate]) -> Option<(&'a Candidate, usize)> {
    survivors
        .par_iter()
        .enumerate()
        .map(|(i, &trial)| (i, trial, calculate_max_remaining(trial, survivors)))
        .min_by_key(|&(i, _, max_remaining)| (max_remaining, i))
        .map(|(_, trial, max_remaining)| (trial, max_remaining))
}
