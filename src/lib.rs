//! Terminal Hacker
//!
//! Solver for the password puzzle on Fallout terminals: a list of same-length
//! passwords, one of which is the secret, and "N correct" feedback counting the
//! letters of a tried password that sit in the right place.
//!
//! # Quick Start
//!
//! ```rust
//! use terminal_hacker::core::Candidate;
//! use terminal_hacker::engine::Session;
//!
//! let mut session = Session::new();
//! for word in ["FOO", "BAR", "FOR"] {
//!     session.add(Candidate::new(word).unwrap()).unwrap();
//! }
//!
//! // The terminal answered "2/3 correct" for FOO
//! session.record_score(&Candidate::new("FOO").unwrap(), 2).unwrap();
//! assert_eq!(session.surviving_candidates()[0].text(), "FOR");
//! ```

// Core domain types
pub mod core;

// Elimination engine
pub mod engine;

// Trial selection and autoplay
pub mod solver;

// Password lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
