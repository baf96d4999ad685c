//! Test all secrets - comprehensive solver evaluation
//!
//! Autoplays every password of a pool as the secret and generates statistics.

use crate::core::Candidate;
use crate::engine::Session;
use crate::output::formatters::create_progress_bar;
use crate::solver::{Outcome, Solver, Strategy};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a test-all run
pub struct TestAllConfig {
    /// Only test the first `limit` passwords
    pub limit: Option<usize>,
    pub show_progress: bool,
}

impl Default for TestAllConfig {
    fn default() -> Self {
        Self {
            limit: None,
            show_progress: true,
        }
    }
}

/// Result from autoplaying a single secret
#[derive(Debug, Clone)]
pub struct SecretTestResult {
    pub secret: String,
    pub trials: Vec<String>,
    pub found: bool,
    /// Why the secret was missed, when it was
    pub failure: Option<String>,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_secrets: usize,
    pub solved: usize,
    /// Missed secrets with the reason for each
    pub failed: Vec<(String, String)>,
    pub trial_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_trials: f64,
    pub max_trials: usize,
    pub min_trials: usize,
    pub hardest: Vec<(String, usize)>,
}

/// Autoplay every pool password (or the first `limit`) as the secret
///
/// Each secret gets its own fresh session; sessions run in parallel.
pub fn run_test_all<S: Strategy + Sync>(
    solver: &Solver<S>,
    pool: &[Candidate],
    config: &TestAllConfig,
) -> TestAllStatistics {
    let secrets = &pool[..config.limit.unwrap_or(pool.len()).min(pool.len())];

    let pb = if config.show_progress {
        println!("🎯 Testing {} secrets...", secrets.len());
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let total_start = Instant::now();

    let results: Vec<SecretTestResult> = secrets
        .par_iter()
        .map(|secret| {
            let result = test_secret(solver, pool, secret);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&results, total_start.elapsed())
}

fn test_secret<S: Strategy>(
    solver: &Solver<S>,
    pool: &[Candidate],
    secret: &Candidate,
) -> SecretTestResult {
    let mut session = Session::from_candidates(pool.iter().cloned());

    match solver.autoplay(&mut session, secret) {
        Ok(report) => {
            let failure = match &report.outcome {
                _ if report.found_secret() => None,
                Outcome::Solved(other) => Some(format!("converged on {other}")),
                Outcome::NoSolution => Some("no consistent candidate".to_string()),
                Outcome::Undecided(remaining) => {
                    Some(format!("stopped with {} candidates left", remaining.len()))
                }
            };
            SecretTestResult {
                secret: secret.text().to_string(),
                trials: report
                    .steps
                    .iter()
                    .map(|step| step.trial.text().to_string())
                    .collect(),
                found: failure.is_none(),
                failure,
            }
        }
        Err(e) => SecretTestResult {
            secret: secret.text().to_string(),
            trials: Vec::new(),
            found: false,
            failure: Some(e.to_string()),
        },
    }
}

fn summarize(results: &[SecretTestResult], total_time: Duration) -> TestAllStatistics {
    let mut trial_distribution = BTreeMap::new();
    for result in results.iter().filter(|r| r.found) {
        *trial_distribution.entry(result.trials.len()).or_insert(0) += 1;
    }

    let solved_counts: Vec<usize> = results
        .iter()
        .filter(|r| r.found)
        .map(|r| r.trials.len())
        .collect();
    let solved = solved_counts.len();

    let average_trials = if solved > 0 {
        solved_counts.iter().sum::<usize>() as f64 / solved as f64
    } else {
        0.0
    };

    let failed = results
        .iter()
        .filter(|r| !r.found)
        .map(|r| {
            let reason = r.failure.clone().unwrap_or_default();
            (r.secret.clone(), reason)
        })
        .collect();

    let mut hardest: Vec<(String, usize)> = results
        .iter()
        .filter(|r| r.found)
        .map(|r| (r.secret.clone(), r.trials.len()))
        .collect();
    hardest.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest.truncate(5);

    TestAllStatistics {
        total_secrets: results.len(),
        solved,
        failed,
        trial_distribution,
        total_time,
        average_trials,
        max_trials: solved_counts.iter().max().copied().unwrap_or(0),
        min_trials: solved_counts.iter().min().copied().unwrap_or(0),
        hardest,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(60));
    println!(" Test Results ");
    println!("{}", "═".repeat(60));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Secrets tested:      {}", stats.total_secrets);
    if stats.total_secrets > 0 {
        println!(
            "  Solved:              {} {}",
            stats.solved,
            format!(
                "({:.1}%)",
                stats.solved as f64 / stats.total_secrets as f64 * 100.0
            )
            .green()
        );
    }
    if !stats.failed.is_empty() {
        println!("  Missed:              {}", stats.failed.len().to_string().red());
        for (secret, reason) in &stats.failed {
            println!("    {} {}", secret.red(), format!("({reason})").dimmed());
        }
    }
    println!(
        "  Average trials:      {}",
        format!("{:.3}", stats.average_trials).bright_yellow().bold()
    );
    println!(
        "  Best / worst:        {} / {}",
        stats.min_trials, stats.max_trials
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Trial Distribution".bright_cyan().bold());
    let max_count = stats.trial_distribution.values().max().copied().unwrap_or(1);
    for (trials, count) in &stats.trial_distribution {
        let bar = create_progress_bar(*count as f64, max_count as f64, 40);
        let percentage = *count as f64 / stats.solved.max(1) as f64 * 100.0;
        println!(
            "  {trials:2} trials: {} {count:4} ({percentage:5.1}%)",
            bar.green()
        );
    }

    if !stats.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, trials) in &stats.hardest {
            println!("  {} ({trials} trials)", secret.yellow());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FirstCandidate, MinimaxStrategy};
    use crate::wordlists::{SAMPLE_PASSWORDS, loader::candidates_from_slice};

    fn quiet(limit: Option<usize>) -> TestAllConfig {
        TestAllConfig {
            limit,
            show_progress: false,
        }
    }

    #[test]
    fn test_all_solves_every_secret() {
        let pool = candidates_from_slice(SAMPLE_PASSWORDS);
        let stats = run_test_all(&Solver::new(FirstCandidate), &pool, &quiet(None));

        assert_eq!(stats.total_secrets, 13);
        assert_eq!(stats.solved, 13);
        assert!(stats.failed.is_empty());
        assert_eq!(stats.min_trials, 1);
        assert_eq!(stats.max_trials, 3);
    }

    #[test]
    fn distribution_sums_to_solved() {
        let pool = candidates_from_slice(SAMPLE_PASSWORDS);
        let stats = run_test_all(&Solver::new(MinimaxStrategy), &pool, &quiet(None));

        assert_eq!(stats.trial_distribution.values().sum::<usize>(), stats.solved);
        assert!(stats.average_trials >= stats.min_trials as f64);
        assert!(stats.average_trials <= stats.max_trials as f64);
    }

    #[test]
    fn limit_restricts_secrets() {
        let pool = candidates_from_slice(SAMPLE_PASSWORDS);
        let stats = run_test_all(&Solver::new(FirstCandidate), &pool, &quiet(Some(4)));
        assert_eq!(stats.total_secrets, 4);

        let stats = run_test_all(&Solver::new(FirstCandidate), &pool, &quiet(Some(100)));
        assert_eq!(stats.total_secrets, 13);
    }

    #[test]
    fn missed_secret_keeps_reason() {
        let pool = [
            Candidate::new("DRIED").unwrap(),
            Candidate::new("FOO").unwrap(),
        ];
        let stats = run_test_all(&Solver::new(FirstCandidate), &pool, &quiet(None));

        assert_eq!(stats.solved, 1);
        assert_eq!(stats.failed.len(), 1);
        let (secret, reason) = &stats.failed[0];
        assert_eq!(secret, "FOO");
        assert_eq!(reason, "Password length mismatch: expected 5 letters, got 3");
    }

    #[test]
    fn empty_pool() {
        let stats = run_test_all(&Solver::new(FirstCandidate), &[], &quiet(None));

        assert_eq!(stats.total_secrets, 0);
        assert_eq!(stats.solved, 0);
        assert!(stats.average_trials.abs() < f64::EPSILON);
    }

    #[test]
    fn hardest_sorted_descending() {
        let pool = candidates_from_slice(SAMPLE_PASSWORDS);
        let stats = run_test_all(&Solver::new(FirstCandidate), &pool, &quiet(None));

        assert!(stats.hardest.windows(2).all(|w| w[0].1 >= w[1].1));
        assert_eq!(stats.hardest[0].1, 3);
    }
}
