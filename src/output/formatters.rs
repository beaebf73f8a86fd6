//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyboardState, Mark};
use crate::game::MAX_ATTEMPTS;
use colored::{ColoredString, Colorize};

/// Color a single tile: green hit, yellow present, gray miss
#[must_use]
pub fn colored_tile(letter: char, mark: Mark) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match mark {
        Mark::Hit => tile.black().on_green().bold(),
        Mark::Present => tile.black().on_yellow().bold(),
        Mark::Miss => tile.white().on_bright_black(),
        Mark::Unknown => tile.normal(),
    }
}

/// One guess as colored tiles followed by its emoji row
#[must_use]
pub fn format_feedback(feedback: &Feedback) -> String {
    let tiles: String = feedback
        .iter()
        .map(|entry| colored_tile(entry.letter_char(), entry.mark).to_string())
        .collect();
    format!("{tiles}  {}", feedback.to_emoji())
}

/// Keyboard rows, each row shifted right like a physical keyboard
#[must_use]
pub fn format_keyboard(keyboard: &KeyboardState) -> String {
    keyboard
        .rows()
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .iter()
                .map(|&(key, mark)| colored_tile(key, mark).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Attempt counter such as "Attempts: 2/6 [██░░░░]"
#[must_use]
pub fn format_attempts(attempts: usize) -> String {
    format!(
        "Attempts: {attempts}/{MAX_ATTEMPTS} [{}]",
        create_progress_bar(attempts, MAX_ATTEMPTS, MAX_ATTEMPTS)
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
