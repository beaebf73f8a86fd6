//! Feedback calculation for a guess against the secret word
//!
//! Scoring is two-pass so duplicate letters come out right:
//! 1. Exact matches become `Hit` and use up one occurrence of their letter.
//! 2. Every other position becomes `Present` if an unused occurrence of its
//!    letter is left (using it up), otherwise `Miss`.
//!
//! Occurrences are tracked as per-letter counts, so a letter never collects
//! more `Hit`/`Present` marks than it has occurrences in the secret.

use super::word::letter_index;
use super::{Mark, WORD_LENGTH, Word};

/// Feedback for a single position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackEntry {
    pub position: usize,
    pub letter: u8,
    pub mark: Mark,
}

impl FeedbackEntry {
    /// Letter as a lowercase char
    #[inline]
    #[must_use]
    pub const fn letter_char(&self) -> char {
        self.letter as char
    }
}

/// Feedback for a whole guess, one entry per position in guess order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([FeedbackEntry; WORD_LENGTH]);

impl Feedback {
    /// Score `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use wordle_play::core::{Feedback, Mark, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// let feedback = Feedback::score(&guess, &secret);
    ///
    /// // C R miss, A hit, N miss, E hit
    /// assert_eq!(
    ///     feedback.marks(),
    ///     [Mark::Miss, Mark::Miss, Mark::Hit, Mark::Miss, Mark::Hit]
    /// );
    /// assert_eq!(feedback.to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        let mut marks = [Mark::Miss; WORD_LENGTH];
        let mut remaining = secret.letter_counts();

        for (i, mark) in marks.iter_mut().enumerate() {
            if guess.char_at(i) == secret.char_at(i) {
                *mark = Mark::Hit;
                remaining[letter_index(guess.char_at(i))] -= 1;
            }
        }

        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Hit {
                continue;
            }
            let count = &mut remaining[letter_index(guess.char_at(i))];
            if *count > 0 {
                *mark = Mark::Present;
                *count -= 1;
            }
        }

        Self(std::array::from_fn(|i| FeedbackEntry {
            position: i,
            letter: guess.char_at(i),
            mark: marks[i],
        }))
    }

    /// All entries in guess order
    #[inline]
    #[must_use]
    pub const fn entries(&self) -> &[FeedbackEntry; WORD_LENGTH] {
        &self.0
    }

    /// Iterate over the entries in guess order
    pub fn iter(&self) -> impl Iterator<Item = &FeedbackEntry> {
        self.0.iter()
    }

    /// Marks only, in guess order
    #[must_use]
    pub fn marks(&self) -> [Mark; WORD_LENGTH] {
        self.0.map(|entry| entry.mark)
    }

    /// Number of positions carrying `mark`
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|entry| entry.mark == mark).count()
    }

    /// True when every position is a hit
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|entry| entry.mark == Mark::Hit)
    }

    /// Emoji row such as "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|entry| entry.mark.emoji()).collect()
    }
}

impl<'a> IntoIterator for &'a Feedback {
    type Item = &'a FeedbackEntry;
    type IntoIter = std::slice::Iter<'a, FeedbackEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Score `guess` against `secret`. Shorthand for [`Feedback::score`].
#[must_use]
pub fn score(guess: &Word, secret: &Word) -> Feedback {
    Feedback::score(guess, secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark::{Hit, Miss, Present};

    fn marks(guess: &str, secret: &str) -> [Mark; WORD_LENGTH] {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        Feedback::score(&guess, &secret).marks()
    }

    #[test]
    fn exact_match_is_all_hits() {
        assert_eq!(marks("apple", "apple"), [Hit; 5]);
    }

    #[test]
    fn no_overlap_is_all_misses() {
        assert_eq!(marks("nkrzx", "apple"), [Miss; 5]);
    }

    #[test]
    fn duplicate_guess_letters_are_capped_by_secret_counts() {
        // allot has two l's and one a: l(1) is exact, l(0) takes the other l,
        // a(2) takes the only a, a(4) finds none left.
        assert_eq!(
            marks("llama", "allot"),
            [Present, Hit, Present, Miss, Miss]
        );
    }

    #[test]
    fn hit_claims_occurrence_before_earlier_present() {
        // The second o is exact and must win the single o of "robin".
        assert_eq!(marks("ooxxx", "robin"), [Miss, Hit, Miss, Miss, Miss]);
    }

    #[test]
    fn duplicate_letters_two_presents() {
        // SPEED vs ERASE: both e's find an occurrence, s is present
        assert_eq!(
            marks("speed", "erase"),
            [Present, Miss, Present, Present, Miss]
        );
    }

    #[test]
    fn duplicate_letters_present_and_hit() {
        // ROBOT vs FLOOR
        assert_eq!(marks("robot", "floor"), [Present, Present, Miss, Hit, Miss]);
    }

    #[test]
    fn entries_follow_guess_positions() {
        let guess = Word::new("crane").unwrap();
        let secret = Word::new("slate").unwrap();
        let feedback = Feedback::score(&guess, &secret);

        for (i, entry) in feedback.iter().enumerate() {
            assert_eq!(entry.position, i);
            assert_eq!(entry.letter, guess.char_at(i));
        }
        assert_eq!(feedback.entries()[2].letter_char(), 'a');
    }

    #[test]
    fn counts_and_solved() {
        let guess = Word::new("crane").unwrap();
        let feedback = Feedback::score(&guess, &guess);
        assert!(feedback.is_solved());
        assert_eq!(feedback.count(Hit), 5);

        let other = Word::new("slate").unwrap();
        let feedback = Feedback::score(&guess, &other);
        assert!(!feedback.is_solved());
        assert_eq!(feedback.count(Hit), 2);
        assert_eq!(feedback.count(Present), 0);
        assert_eq!(feedback.count(Miss), 3);
    }

    #[test]
    fn emoji_row() {
        let guess = Word::new("robot").unwrap();
        let secret = Word::new("floor").unwrap();
        assert_eq!(Feedback::score(&guess, &secret).to_emoji(), "🟨🟨⬜🟩⬜");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn word() -> impl Strategy<Value = Word> {
            "[a-z]{5}".prop_map(|s| Word::new(s).unwrap())
        }

        proptest! {
            #[test]
            fn every_position_gets_exactly_one_mark(guess in word(), secret in word()) {
                let feedback = score(&guess, &secret);
                let total = feedback.count(Hit) + feedback.count(Present) + feedback.count(Miss);
                prop_assert_eq!(total, WORD_LENGTH);
            }

            #[test]
            fn hit_iff_same_letter_at_position(guess in word(), secret in word()) {
                let feedback = score(&guess, &secret);
                for entry in &feedback {
                    let same = guess.char_at(entry.position) == secret.char_at(entry.position);
                    prop_assert_eq!(entry.mark == Hit, same);
                }
            }

            #[test]
            fn marked_letters_never_exceed_secret_occurrences(guess in word(), secret in word()) {
                let feedback = score(&guess, &secret);
                let available = secret.letter_counts();
                let mut used = [0u8; 26];
                for entry in feedback.iter().filter(|e| e.mark != Miss) {
                    used[letter_index(entry.letter)] += 1;
                }
                for (u, a) in used.iter().zip(available.iter()) {
                    prop_assert!(u <= a);
                }
            }

            #[test]
            fn guessing_the_secret_solves(secret in word()) {
                prop_assert!(score(&secret, &secret).is_solved());
            }
        }
    }
}
