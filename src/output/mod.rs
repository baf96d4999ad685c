//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_autoplay_report, print_messages, print_pool, print_skipped_duplicates,
};
