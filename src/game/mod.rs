//! Session control
//!
//! Validates guesses, feeds them through the core and tracks win/loss.

mod session;

pub use session::{GameStatus, GuessError, MAX_ATTEMPTS, Session, Turn};
