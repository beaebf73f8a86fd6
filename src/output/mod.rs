//! Terminal output formatting
//!
//! Colored rendering of guesses, keyboard and game results for the line mode.

pub mod display;
pub mod formatters;

pub use display::{print_score, write_board, write_outcome, write_rejection};
