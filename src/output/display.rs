//! Display functions for command results

use crate::commands::simple::{Message, MessageStyle};
use crate::core::Candidate;
use crate::solver::{AutoplayReport, Outcome};
use colored::Colorize;

/// Print controller messages, colored by style
pub fn print_messages(messages: &[Message]) {
    for message in messages {
        match message.style {
            MessageStyle::Info => println!("{}", message.text),
            MessageStyle::Success => println!("{}", message.text.green().bold()),
            MessageStyle::Warning => eprintln!("{}", message.text.yellow()),
            MessageStyle::Error => eprintln!("{}", message.text.red()),
        }
    }
}

/// Print the result of autoplaying a secret
pub fn print_autoplay_report(report: &AutoplayReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", report.secret.text().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in report.steps.iter().enumerate() {
        println!(
            "\nTrial {}: {} {}/{}",
            i + 1,
            step.trial,
            step.score,
            step.trial.len()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.survivors_before, step.survivors_after
            );
        }
    }

    println!();
    match &report.outcome {
        Outcome::Solved(found) if report.found_secret() => println!(
            "{}",
            format!("✅ {found} found in {} trials", report.trial_count())
                .green()
                .bold()
        ),
        Outcome::Solved(found) => println!(
            "{}",
            format!("⚠️  Converged on {found}, not the secret").yellow().bold()
        ),
        Outcome::NoSolution => println!(
            "{}",
            format!("❌ No candidate is consistent with {}", report.secret)
                .red()
                .bold()
        ),
        Outcome::Undecided(remaining) => println!(
            "{}",
            format!("❌ Stopped with {} candidates left", remaining.len())
                .red()
                .bold()
        ),
    }
}

/// Print the password pool
pub fn print_pool(pool: &[Candidate]) {
    let length = pool.first().map_or(0, Candidate::len);
    println!(
        "{} passwords of {length} letters:",
        pool.len().to_string().bright_cyan().bold()
    );
    for candidate in pool {
        println!("  • {candidate}");
    }
}

/// Warn about list entries that were dropped as repeats
pub fn print_skipped_duplicates(duplicates: &[Candidate]) {
    if duplicates.is_empty() {
        return;
    }
    let names: Vec<&str> = duplicates.iter().map(Candidate::text).collect();
    eprintln!(
        "{}",
        format!(
            "⚠️  Skipped {} repeated password(s): {}",
            duplicates.len(),
            names.join(", ")
        )
        .yellow()
    );
}
