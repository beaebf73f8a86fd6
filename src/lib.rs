//! Wordle in the terminal
//!
//! Guess a secret five-letter word in six tries, with exact duplicate-letter
//! feedback and a keyboard that remembers the best result for every letter.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_play::core::{Feedback, KeyboardState, Mark, Word};
//!
//! let secret = Word::new("allot").unwrap();
//! let guess = Word::new("llama").unwrap();
//!
//! let feedback = Feedback::score(&guess, &secret);
//! assert_eq!(feedback.to_emoji(), "🟨🟩🟨⬜⬜");
//!
//! let mut keyboard = KeyboardState::new();
//! keyboard.upgrade(&feedback);
//! assert_eq!(keyboard.mark('L'), Mark::Hit);
//! ```

// Core domain types
pub mod core;

// Session control
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
