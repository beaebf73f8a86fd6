//! One-shot scoring command
//!
//! Scores a single guess against a given secret without starting a game.

use crate::core::{Feedback, Word, WordError};

/// Result of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// Both words only need to be well-formed; the dictionary is not consulted.
///
/// # Errors
///
/// Returns `WordError` if either word is not exactly five ASCII letters.
pub fn score_words(guess: &str, secret: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess.trim())?;
    let secret = Word::new(secret.trim())?;
    let feedback = Feedback::score(&guess, &secret);

    Ok(ScoreResult {
        guess,
        secret,
        feedback,
    })
}
