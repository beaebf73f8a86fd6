//! Word lists for Wordle
//!
//! The dictionary is the single word source of a game: secrets are drawn from
//! it and guesses must be members of it.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::path::Path;
use thiserror::Error;

/// Errors raised while building a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
    #[error("word list contains no five-letter words")]
    Empty,
}

/// Non-empty set of playable words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary, dropping duplicates but keeping first-seen order
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if `words` is empty.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, DictionaryError> {
        let mut lookup = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| lookup.insert(word.clone()))
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { words, lookup })
    }

    /// Dictionary compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if the embedded list has no valid word,
    /// which the build script already rules out.
    pub fn embedded() -> Result<Self, DictionaryError> {
        let dictionary = Self::new(loader::words_from_slice(WORDS))?;
        log::info!("Loaded {} embedded words", dictionary.len());
        Ok(dictionary)
    }

    /// Dictionary read from a word list file
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Io` if the file cannot be read and
    /// `DictionaryError::Empty` if it holds no valid word.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let dictionary = Self::new(loader::load_from_file(path)?)?;
        log::info!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Check whether `word` may be guessed
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    /// Draw a secret word uniformly at random
    pub fn choose_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    /// All words in load order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true: construction rejects empty word lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::new(loader::words_from_slice(words)).unwrap()
    }

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_dictionary_loads() {
        let dictionary = Dictionary::embedded().unwrap();
        assert!(!dictionary.is_empty());
        assert!(dictionary.contains(&Word::new("crane").unwrap()));
    }

    #[test]
    fn empty_dictionary_is_rejected() {
        assert!(matches!(
            Dictionary::new(Vec::new()),
            Err(DictionaryError::Empty)
        ));
    }

    #[test]
    fn duplicates_collapse() {
        let dictionary = dictionary(&["crane", "slate", "CRANE", "crane"]);
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.words()[0].text(), "crane");
        assert_eq!(dictionary.words()[1].text(), "slate");
    }

    #[test]
    fn membership() {
        let dictionary = dictionary(&["crane", "slate"]);
        assert!(dictionary.contains(&Word::new("slate").unwrap()));
        assert!(!dictionary.contains(&Word::new("irate").unwrap()));
    }

    #[test]
    fn secret_comes_from_dictionary() {
        let dictionary = dictionary(&["crane", "slate", "irate"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(dictionary.contains(dictionary.choose_secret(&mut rng)));
        }
    }

    #[test]
    fn secret_choice_reaches_every_word() {
        let dictionary = dictionary(&["crane", "slate", "irate"]);
        let mut rng = StdRng::seed_from_u64(42);
        let seen: FxHashSet<&Word> = (0..200)
            .map(|_| dictionary.choose_secret(&mut rng))
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn same_seed_same_secret() {
        let dictionary = Dictionary::embedded().unwrap();
        let a = dictionary.choose_secret(&mut StdRng::seed_from_u64(1)).clone();
        let b = dictionary.choose_secret(&mut StdRng::seed_from_u64(1)).clone();
        assert_eq!(a, b);
    }

    #[test]
    fn file_without_words_is_empty_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            Dictionary::from_file(file.path()),
            Err(DictionaryError::Empty)
        ));
    }
}
