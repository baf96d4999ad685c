//! Terminal Hacker - CLI
//!
//! Interactive and batch front end for the terminal password solver.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use terminal_hacker::{
    commands::{
        Controller, SolveConfig, TestAllConfig, print_test_all_statistics, run_simple,
        run_test_all, solve_secret,
    },
    core::Candidate,
    engine::Session,
    output::{print_autoplay_report, print_pool, print_skipped_duplicates},
    solver::{Solver, StrategyType},
    wordlists::{
        SAMPLE_PASSWORDS,
        loader::{candidates_from_slice, load_from_file},
    },
};

#[derive(Parser)]
#[command(
    name = "terminal_hacker",
    about = "Solver for the Fallout terminal password puzzle",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: first (default), minimax, random
    #[arg(short, long, global = true, default_value = "first")]
    strategy: String,

    /// Wordlist: 'sample' (default, 13 passwords), 'none' (start empty), or path to file
    #[arg(short = 'w', long, global = true, default_value = "sample")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Play,

    /// Autoplay the list against a known secret
    Solve {
        /// The secret password
        secret: String,

        /// Show candidate counts for each trial
        #[arg(short, long)]
        verbose: bool,
    },

    /// Autoplay every password of the list as the secret
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print the password list
    List,
}

/// Load the password list based on the -w flag
fn load_pool(wordlist: &str) -> Result<Vec<Candidate>> {
    match wordlist {
        "sample" => Ok(candidates_from_slice(SAMPLE_PASSWORDS)),
        "none" => Ok(Vec::new()),
        path => {
            let list =
                load_from_file(path).with_context(|| format!("Failed to load wordlist {path}"))?;
            print_skipped_duplicates(&list.duplicates);
            Ok(list.candidates)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pool = load_pool(&cli.wordlist)?;
    let solver = Solver::new(StrategyType::from_name(&cli.strategy));

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let session = Session::from_candidates(pool);
            run_simple(&mut Controller::with_session(solver, session))
        }
        Commands::Solve { secret, verbose } => {
            if pool.is_empty() {
                bail!("The password list is empty");
            }
            let report = solve_secret(&SolveConfig::new(secret), &solver, &pool)?;
            print_autoplay_report(&report, verbose);
            Ok(())
        }
        Commands::TestAll { limit } => {
            println!("Strategy: {}", solver.strategy().name());
            let config = TestAllConfig {
                limit,
                ..TestAllConfig::default()
            };
            let stats = run_test_all(&solver, &pool, &config);
            print_test_all_statistics(&stats);
            Ok(())
        }
        Commands::List => {
            print_pool(&pool);
            Ok(())
        }
    }
}
