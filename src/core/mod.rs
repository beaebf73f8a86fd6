//! Core domain types for Wordle
//!
//! Words, feedback scoring and keyboard aggregation. Everything here is pure:
//! no I/O, no randomness, no shared state.

mod feedback;
mod keyboard;
mod mark;
mod word;

pub use feedback::{Feedback, FeedbackEntry, score};
pub use keyboard::{KEYBOARD_ROWS, KeyboardState};
pub use mark::Mark;
pub use word::{Word, WordError};

/// Letters per word
pub const WORD_LENGTH: usize = 5;
