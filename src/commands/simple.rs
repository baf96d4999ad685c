//! Simple interactive CLI mode
//!
//! Line-based controller: the user types the passwords shown on the terminal and
//! the "N/len correct" feedback of each attempt, and gets the remaining candidates back.

use crate::core::Candidate;
use crate::engine::{EngineError, Session, SessionState};
use crate::output::display::print_messages;
use crate::output::formatters::score_label;
use crate::solver::{Outcome, Solver, Strategy};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// A parsed controller command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Vec<String>),
    Remove(String),
    Try { password: String, score: usize },
    Reset,
    Clear,
    List,
    Suggest,
    Auto(String),
    Help,
    Quit,
}

/// Parse one input line
///
/// # Errors
/// Returns a usage message if the line is not a known command.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err("Type 'help' for the list of commands".to_string());
    };
    let args: Vec<&str> = words.collect();

    match (verb.to_lowercase().as_str(), args.as_slice()) {
        ("add" | "a", [_, ..]) => Ok(Command::Add(args.iter().map(ToString::to_string).collect())),
        ("rm" | "remove" | "del", [password]) => Ok(Command::Remove((*password).to_string())),
        ("try" | "t", [password, score]) => score
            .parse()
            .map(|score| Command::Try {
                password: (*password).to_string(),
                score,
            })
            .map_err(|_| format!("Invalid number of good positions: {score}")),
        ("reset", []) => Ok(Command::Reset),
        ("clear", []) => Ok(Command::Clear),
        ("list" | "ls" | "l", []) => Ok(Command::List),
        ("suggest" | "s", []) => Ok(Command::Suggest),
        ("auto", [secret]) => Ok(Command::Auto((*secret).to_string())),
        ("help" | "h" | "?", []) => Ok(Command::Help),
        ("quit" | "q" | "exit", []) => Ok(Command::Quit),
        ("add" | "a", []) => Err("Usage: add WORD [WORD...]".to_string()),
        ("rm" | "remove" | "del", _) => Err("Usage: rm WORD".to_string()),
        ("try" | "t", _) => Err("Usage: try WORD N".to_string()),
        ("auto", _) => Err("Usage: auto SECRET".to_string()),
        _ => Err(format!("Unknown command '{line}'. Type 'help'")),
    }
}

/// A line of controller output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

impl Message {
    fn new(text: impl Into<String>, style: MessageStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Interactive controller owning one session
pub struct Controller<S: Strategy> {
    session: Session,
    solver: Solver<S>,
    should_quit: bool,
}

impl<S: Strategy> Controller<S> {
    pub fn new(solver: Solver<S>) -> Self {
        Self::with_session(solver, Session::new())
    }

    pub const fn with_session(solver: Solver<S>, session: Session) -> Self {
        Self {
            session,
            solver,
            should_quit: false,
        }
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply a command and describe what happened
    pub fn execute(&mut self, command: Command) -> Vec<Message> {
        match command {
            Command::Add(words) => self.add(&words),
            Command::Remove(word) => self.remove(&word),
            Command::Try { password, score } => self.try_password(&password, score),
            Command::Reset => {
                self.session.reset_trials();
                vec![Message::new("Trials cleared", MessageStyle::Info)]
            }
            Command::Clear => {
                self.session.clear();
                vec![Message::new("Password list cleared", MessageStyle::Info)]
            }
            Command::List => self.list(),
            Command::Suggest => self.status(),
            Command::Auto(secret) => self.auto(&secret),
            Command::Help => help(),
            Command::Quit => {
                self.should_quit = true;
                vec![Message::new("👋 Bye!", MessageStyle::Info)]
            }
        }
    }

    fn add(&mut self, words: &[String]) -> Vec<Message> {
        let mut messages = Vec::new();
        let mut added = 0;

        for word in words {
            let result = Candidate::new(word.as_str())
                .map_err(|e| format!("{}: {e}", word.to_uppercase()))
                .and_then(|candidate| {
                    self.session
                        .ensure_compatible(&candidate)
                        .map_err(|e| format!("{candidate}: {e}"))?;
                    Ok(candidate)
                });

            match result {
                Ok(candidate) => match self.session.add(candidate) {
                    Ok(()) => added += 1,
                    Err(e) => messages.push(Message::new(e.to_string(), MessageStyle::Warning)),
                },
                Err(e) => messages.push(Message::new(e, MessageStyle::Error)),
            }
        }

        if added > 0 {
            messages.push(Message::new(
                format!("Added {added} password(s), {} in list", self.session.len()),
                MessageStyle::Info,
            ));
        }
        messages
    }

    fn remove(&mut self, word: &str) -> Vec<Message> {
        let candidate = match Candidate::new(word) {
            Ok(candidate) => candidate,
            Err(e) => return vec![Message::new(e.to_string(), MessageStyle::Error)],
        };

        match self.session.remove(&candidate) {
            Ok(_) => vec![Message::new(format!("Removed {candidate}"), MessageStyle::Info)],
            Err(e) => vec![Message::new(e.to_string(), MessageStyle::Warning)],
        }
    }

    fn try_password(&mut self, word: &str, score: usize) -> Vec<Message> {
        let candidate = match Candidate::new(word) {
            Ok(candidate) => candidate,
            Err(e) => return vec![Message::new(e.to_string(), MessageStyle::Error)],
        };

        let recorded = match self.session.record_score(&candidate, score) {
            Ok(recorded) => recorded,
            Err(e @ EngineError::NotFound(_)) => {
                return vec![Message::new(
                    format!("{e}; add it first"),
                    MessageStyle::Error,
                )];
            }
            Err(e) => return vec![Message::new(e.to_string(), MessageStyle::Error)],
        };

        let mut messages = Vec::new();
        if let Some(conflict) = recorded.conflict {
            messages.push(Message::new(conflict.to_string(), MessageStyle::Warning));
        }
        if recorded.solved {
            messages.push(Message::new(
                format!("🎉 Password is {candidate}"),
                MessageStyle::Success,
            ));
            return messages;
        }

        messages.extend(self.status());
        messages
    }

    /// Describe the session: solved, inconsistent, or the next suggested trial
    fn status(&self) -> Vec<Message> {
        let survivors = self.session.surviving_candidates();

        match self.session.state() {
            SessionState::Empty => vec![Message::new(
                "No passwords yet. Use 'add WORD...'",
                MessageStyle::Info,
            )],
            SessionState::Solved => vec![Message::new(
                format!("🎉 Password is {}", survivors[0]),
                MessageStyle::Success,
            )],
            SessionState::NoSolution => vec![Message::new(
                "❌ No consistent candidate. Check the feedback, or 'reset' the trials",
                MessageStyle::Error,
            )],
            SessionState::Populated | SessionState::Narrowing => {
                let mut messages = vec![Message::new(
                    format!(
                        "{} candidates remaining: {}",
                        survivors.len(),
                        join(&survivors)
                    ),
                    MessageStyle::Info,
                )];
                if let Some(next) = self.solver.next_trial(&self.session) {
                    messages.push(Message::new(
                        format!("Suggested trial: {next}"),
                        MessageStyle::Info,
                    ));
                }
                messages
            }
        }
    }

    fn list(&self) -> Vec<Message> {
        if self.session.is_empty() {
            return self.status();
        }

        let survivors = self.session.surviving_candidates();
        let length = self.session.candidate_length();

        self.session
            .entries()
            .map(|(candidate, score)| {
                let text = format!("  {candidate}  {}/{length}", score_label(score));
                if survivors.contains(&candidate) {
                    Message::new(text, MessageStyle::Success)
                } else {
                    Message::new(text, MessageStyle::Info)
                }
            })
            .collect()
    }

    fn auto(&mut self, secret: &str) -> Vec<Message> {
        let secret = match Candidate::new(secret) {
            Ok(secret) => secret,
            Err(e) => return vec![Message::new(e.to_string(), MessageStyle::Error)],
        };

        let report = match self.solver.autoplay(&mut self.session, &secret) {
            Ok(report) => report,
            Err(e) => return vec![Message::new(e.to_string(), MessageStyle::Error)],
        };

        let mut messages: Vec<Message> = report
            .steps
            .iter()
            .map(|step| {
                Message::new(
                    format!(
                        "Test {} from {} candidates: {}/{}",
                        step.trial,
                        step.survivors_before,
                        step.score,
                        step.trial.len()
                    ),
                    MessageStyle::Info,
                )
            })
            .collect();

        messages.push(match report.outcome {
            Outcome::Solved(found) => Message::new(
                format!("🎉 Password is {found}"),
                MessageStyle::Success,
            ),
            Outcome::NoSolution => Message::new(
                format!("❌ {secret} is not consistent with the list"),
                MessageStyle::Error,
            ),
            Outcome::Undecided(remaining) => Message::new(
                format!("Stopped with {} candidates", remaining.len()),
                MessageStyle::Warning,
            ),
        });
        messages
    }
}

fn join(candidates: &[&Candidate]) -> String {
    candidates
        .iter()
        .map(|c| c.text())
        .collect::<Vec<_>>()
        .join(" ")
}

fn help() -> Vec<Message> {
    [
        "add WORD [WORD...]  add passwords shown on the terminal",
        "rm WORD             remove a password",
        "try WORD N          record that WORD had N letters in the right place",
        "suggest             show remaining candidates and the next trial",
        "list                show every password with its score (?? = untested)",
        "reset               forget all trials, keep the passwords",
        "clear               forget everything",
        "auto SECRET         let the solver play against SECRET",
        "quit                exit",
    ]
    .into_iter()
    .map(|line| Message::new(line, MessageStyle::Info))
    .collect()
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: Strategy>(controller: &mut Controller<S>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Terminal Hacker - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Enter the passwords shown on the terminal, then the likeness of each attempt.");
    println!("Type 'help' for the list of commands.\n");

    print_messages(&controller.execute(Command::Suggest));

    let stdin = io::stdin();
    let mut input = String::new();

    while !controller.should_quit() {
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        input.clear();
        let read = stdin
            .lock()
            .read_line(&mut input)
            .context("Failed to read input")?;
        if read == 0 {
            break;
        }
        if input.trim().is_empty() {
            continue;
        }

        match parse_command(&input) {
            Ok(command) => print_messages(&controller.execute(command)),
            Err(usage) => print_messages(&[Message::new(usage, MessageStyle::Error)]),
        }
    }

    Ok(())
}
