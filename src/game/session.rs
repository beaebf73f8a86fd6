//! One play-through of Wordle
//!
//! A `Session` owns the secret, the accepted guesses and the keyboard. Guesses
//! are validated before anything is scored, so a rejected guess leaves the
//! session untouched.

use crate::core::{Feedback, KeyboardState, Word, WordError};
use crate::wordlists::Dictionary;
use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Guesses allowed per session
pub const MAX_ATTEMPTS: usize = 6;

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// Why a guess was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// Not five ASCII letters
    #[error("'{input}' is not a valid 5-letter word: {source}")]
    Malformed {
        input: String,
        #[source]
        source: WordError,
    },
    /// Well-formed but unknown
    #[error("'{0}' is not in the word list")]
    NotInDictionary(Word),
    /// The session already ended
    #[error("the game is over ({0}); start a new game to keep playing")]
    GameOver(GameStatus),
}

/// An accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Game state for one secret word
#[derive(Debug, Clone)]
pub struct Session {
    secret: Word,
    turns: Vec<Turn>,
    keyboard: KeyboardState,
    status: GameStatus,
}

impl Session {
    /// Start a session with a known secret
    #[must_use]
    pub fn new(secret: Word) -> Self {
        log::debug!("New session, secret '{secret}'");
        Self {
            secret,
            turns: Vec::with_capacity(MAX_ATTEMPTS),
            keyboard: KeyboardState::new(),
            status: GameStatus::Playing,
        }
    }

    /// Start a session with a secret drawn from `dictionary`
    pub fn start<R: Rng + ?Sized>(dictionary: &Dictionary, rng: &mut R) -> Self {
        Self::new(dictionary.choose_secret(rng).clone())
    }

    /// Throw away the current game and start over with a fresh secret
    pub fn restart<R: Rng + ?Sized>(&mut self, dictionary: &Dictionary, rng: &mut R) {
        *self = Self::start(dictionary, rng);
    }

    /// Validate raw player input and play it
    ///
    /// Input is trimmed and lowercased first.
    ///
    /// # Errors
    ///
    /// Returns `GuessError::GameOver` once the game has ended,
    /// `GuessError::Malformed` for anything other than five ASCII letters and
    /// `GuessError::NotInDictionary` for unknown words. None of these change
    /// the session.
    ///
    /// # Examples
    /// ```
    /// use wordle_play::core::{Mark, Word};
    /// use wordle_play::game::{GameStatus, GuessError, Session};
    /// use wordle_play::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["crane", "slate"].map(|w| Word::new(w).unwrap())).unwrap();
    /// let mut session = Session::new(Word::new("crane").unwrap());
    ///
    /// assert!(matches!(session.submit("xyz", &dictionary), Err(GuessError::Malformed { .. })));
    /// assert!(matches!(session.submit("irate", &dictionary), Err(GuessError::NotInDictionary(_))));
    ///
    /// let turn = session.submit("SLATE", &dictionary).unwrap();
    /// assert_eq!(turn.feedback.marks()[2], Mark::Hit);
    /// assert_eq!(session.attempts(), 1);
    /// assert_eq!(session.status(), GameStatus::Playing);
    /// ```
    pub fn submit(&mut self, input: &str, dictionary: &Dictionary) -> Result<&Turn, GuessError> {
        self.ensure_playing()?;

        let input = input.trim().to_lowercase();
        let guess = Word::new(input.as_str()).map_err(|source| {
            log::debug!("Rejected malformed guess '{input}': {source}");
            GuessError::Malformed {
                input: input.clone(),
                source,
            }
        })?;

        if !dictionary.contains(&guess) {
            log::debug!("Rejected unknown word '{guess}'");
            return Err(GuessError::NotInDictionary(guess));
        }

        self.play(guess)
    }

    /// Play an already validated word, skipping the dictionary check
    ///
    /// # Errors
    ///
    /// Returns `GuessError::GameOver` once the game has ended.
    pub fn play(&mut self, guess: Word) -> Result<&Turn, GuessError> {
        self.ensure_playing()?;

        let feedback = Feedback::score(&guess, &self.secret);
        self.keyboard.upgrade(&feedback);

        let solved = guess == self.secret;
        log::debug!(
            "Guess {}/{MAX_ATTEMPTS}: {guess} {}",
            self.turns.len() + 1,
            feedback.to_emoji()
        );
        self.turns.push(Turn { guess, feedback });

        if solved {
            self.status = GameStatus::Won;
        } else if self.turns.len() >= MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
        }
        if self.status != GameStatus::Playing {
            log::info!("Game {} after {} guesses", self.status, self.turns.len());
        }

        Ok(&self.turns[self.turns.len() - 1])
    }

    fn ensure_playing(&self) -> Result<(), GuessError> {
        if self.status == GameStatus::Playing {
            Ok(())
        } else {
            Err(GuessError::GameOver(self.status))
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// The secret, but only once the player has lost
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        (self.status == GameStatus::Lost).then_some(&self.secret)
    }

    /// Accepted guesses, oldest first
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.turns.len())
    }
}
