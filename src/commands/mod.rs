//! Command implementations

pub mod simple;
pub mod solve;
pub mod test_all;

pub use simple::{Command, Controller, parse_command, run_simple};
pub use solve::{SolveConfig, solve_secret};
pub use test_all::{TestAllConfig, TestAllStatistics, print_test_all_statistics, run_test_all};
