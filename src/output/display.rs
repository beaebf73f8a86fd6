//! Display functions for game state

use super::formatters::{format_attempts, format_feedback, format_keyboard};
use crate::core::{Feedback, Word};
use crate::game::{GameStatus, GuessError, Session};
use colored::Colorize;
use std::io::{self, Write};

/// Print guess history, keyboard and attempt counter
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_board<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(40).cyan())?;
    if !session.turns().is_empty() {
        writeln!(out, "{}", "Your guesses:".bright_cyan().bold())?;
        for (i, turn) in session.turns().iter().enumerate() {
            writeln!(
                out,
                "  {} {}",
                format!("{}.", i + 1).bright_black(),
                format_feedback(&turn.feedback)
            )?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{}", format_keyboard(session.keyboard()))?;
    writeln!(out, "\n{}", format_attempts(session.attempts()))?;
    Ok(())
}

/// Print the end-of-game banner, revealing the secret on a loss
///
/// Does nothing while the game is still running.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_outcome<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    match session.status() {
        GameStatus::Playing => {}
        GameStatus::Won => {
            let guesses = session.attempts();
            writeln!(
                out,
                "\n{}",
                format!(
                    "🎉 You win! Solved in {guesses} {}.",
                    if guesses == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            )?;
        }
        GameStatus::Lost => {
            writeln!(out, "\n{}", "❌ You lost!".red().bold())?;
            if let Some(secret) = session.revealed_secret() {
                writeln!(
                    out,
                    "The word was: {}",
                    secret.text().to_uppercase().bright_yellow().bold()
                )?;
            }
        }
    }
    Ok(())
}

/// Print a rejected guess as a warning
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_rejection<W: Write>(out: &mut W, error: &GuessError) -> io::Result<()> {
    let text = match error {
        GuessError::Malformed { .. } => "🚫 Please enter a valid 5-letter word.".to_string(),
        GuessError::NotInDictionary(word) => {
            format!("🧐 {} is not a valid word in the list.", word.text().to_uppercase())
        }
        GuessError::GameOver(_) => "The game is over. Type 'new' to play again.".to_string(),
    };
    writeln!(out, "{}", text.yellow())
}

/// Print the feedback for a single scored guess
pub fn print_score(guess: &Word, secret: &Word, feedback: &Feedback) {
    println!(
        "{} vs {}",
        guess.text().to_uppercase().bright_white().bold(),
        secret.text().to_uppercase().bright_white().bold()
    );
    println!("{}", format_feedback(feedback));
}
