//! Per-letter feedback marks
//!
//! Variants are declared from weakest to strongest, so the derived ordering is
//! `Unknown < Miss < Present < Hit`. The keyboard relies on that order to keep
//! the best mark seen for each letter.

use std::fmt;

/// Feedback for one letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mark {
    /// Letter not guessed yet. Only the keyboard uses it.
    #[default]
    Unknown,
    /// Letter not in the secret, or every occurrence already claimed
    Miss,
    /// Letter in the secret at another position
    Present,
    /// Letter in the secret at this position
    Hit,
}

impl Mark {
    /// Emoji square shown next to a guess
    ///
    /// `Unknown` never appears in a guess row and renders as a black square.
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Miss => '⬜',
            Self::Unknown => '⬛',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Miss => "miss",
            Self::Present => "present",
            Self::Hit => "hit",
        };
        f.write_str(name)
    }
}
