//! On-screen keyboard state
//!
//! Keeps the best mark seen for every letter over a whole session. Marks only
//! move up (`Unknown < Miss < Present < Hit`), so replaying feedback in any
//! order, or twice, gives the same state.

use super::word::letter_index;
use super::{Feedback, Mark};

/// QWERTY rows used when drawing the keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Best known mark per letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    marks: [Mark; 26],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess's feedback into the keyboard
    ///
    /// # Examples
    /// ```
    /// use wordle_play::core::{Feedback, KeyboardState, Mark, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let mut keyboard = KeyboardState::new();
    /// keyboard.upgrade(&Feedback::score(&Word::new("slate").unwrap(), &secret));
    ///
    /// assert_eq!(keyboard.mark('A'), Mark::Hit);
    /// assert_eq!(keyboard.mark('s'), Mark::Miss);
    /// assert_eq!(keyboard.mark('q'), Mark::Unknown);
    /// ```
    pub fn upgrade(&mut self, feedback: &Feedback) {
        for entry in feedback {
            let slot = &mut self.marks[letter_index(entry.letter)];
            if entry.mark > *slot {
                *slot = entry.mark;
            }
        }
    }

    /// Best mark for `letter`, either case
    ///
    /// Anything that is not an ASCII letter is `Unknown`.
    #[must_use]
    pub fn mark(&self, letter: char) -> Mark {
        if letter.is_ascii_alphabetic() {
            self.marks[letter_index(letter.to_ascii_lowercase() as u8)]
        } else {
            Mark::Unknown
        }
    }

    /// Every letter `A..=Z` with its mark
    pub fn iter(&self) -> impl Iterator<Item = (char, Mark)> + '_ {
        (b'A'..=b'Z').zip(self.marks.iter()).map(|(key, &mark)| (key as char, mark))
    }

    /// Keys in keyboard layout order, one vector per row
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<(char, Mark)>> {
        KEYBOARD_ROWS
            .iter()
            .map(|row| row.chars().map(|key| (key, self.mark(key))).collect())
            .collect()
    }

    /// True before any feedback has been folded in
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.iter().all(|&mark| mark == Mark::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn feedback(guess: &str, secret: &str) -> Feedback {
        Feedback::score(&Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    #[test]
    fn starts_unknown() {
        let keyboard = KeyboardState::new();
        assert!(keyboard.is_empty());
        assert!(keyboard.iter().all(|(_, mark)| mark == Mark::Unknown));
        assert_eq!(keyboard.iter().count(), 26);
    }

    #[test]
    fn miss_never_downgrades_hit() {
        let mut keyboard = KeyboardState::new();
        keyboard.upgrade(&feedback("abbey", "about"));
        assert_eq!(keyboard.mark('A'), Mark::Hit);

        let later = feedback("crane", "slots");
        assert_eq!(later.entries()[2].mark, Mark::Miss);
        keyboard.upgrade(&later);
        assert_eq!(keyboard.mark('a'), Mark::Hit);
        assert_eq!(keyboard.mark('c'), Mark::Miss);
    }

    #[test]
    fn miss_upgrades_to_present() {
        let mut keyboard = KeyboardState::new();
        keyboard.upgrade(&feedback("sssss", "crane"));
        assert_eq!(keyboard.mark('s'), Mark::Miss);

        keyboard.upgrade(&feedback("tests", "crane"));
        assert_eq!(keyboard.mark('e'), Mark::Present);
        assert_eq!(keyboard.mark('s'), Mark::Miss);
    }

    #[test]
    fn duplicate_letter_keeps_best_mark_within_one_guess() {
        // "llama" vs "allot": l is both Present and Hit, a is Present and Miss
        let mut keyboard = KeyboardState::new();
        keyboard.upgrade(&feedback("llama", "allot"));
        assert_eq!(keyboard.mark('L'), Mark::Hit);
        assert_eq!(keyboard.mark('A'), Mark::Present);
        assert_eq!(keyboard.mark('M'), Mark::Miss);
    }

    #[test]
    fn idempotent() {
        let f = feedback("crane", "slate");
        let mut once = KeyboardState::new();
        once.upgrade(&f);
        let mut twice = once;
        twice.upgrade(&f);
        assert_eq!(once, twice);
    }

    #[test]
    fn order_independent() {
        let f1 = feedback("crane", "stare");
        let f2 = feedback("tares", "stare");

        let mut forward = KeyboardState::new();
        forward.upgrade(&f1);
        forward.upgrade(&f2);

        let mut backward = KeyboardState::new();
        backward.upgrade(&f2);
        backward.upgrade(&f1);

        assert_eq!(forward, backward);
    }

    #[test]
    fn non_letters_are_unknown() {
        let mut keyboard = KeyboardState::new();
        keyboard.upgrade(&feedback("crane", "crane"));
        assert_eq!(keyboard.mark('1'), Mark::Unknown);
        assert_eq!(keyboard.mark('é'), Mark::Unknown);
    }

    #[test]
    fn rows_follow_layout() {
        let mut keyboard = KeyboardState::new();
        keyboard.upgrade(&feedback("quiet", "quite"));
        let rows = keyboard.rows();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 10);
        assert_eq!(rows[1].len(), 9);
        assert_eq!(rows[2].len(), 7);
        assert_eq!(rows[0][0], ('Q', Mark::Hit));
        assert_eq!(rows[0][2], ('E', Mark::Present));
        assert_eq!(rows[1][0], ('A', Mark::Unknown));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn word() -> impl Strategy<Value = Word> {
            "[a-z]{5}".prop_map(|s| Word::new(s).unwrap())
        }

        proptest! {
            #[test]
            fn replay_order_does_not_matter(
                secret in word(),
                guesses in proptest::collection::vec(word(), 1..6),
            ) {
                let feedbacks: Vec<Feedback> =
                    guesses.iter().map(|g| Feedback::score(g, &secret)).collect();

                let mut forward = KeyboardState::new();
                feedbacks.iter().for_each(|f| forward.upgrade(f));

                let mut backward = KeyboardState::new();
                feedbacks.iter().rev().for_each(|f| backward.upgrade(f));

                prop_assert_eq!(forward, backward);
            }

            #[test]
            fn stored_mark_is_maximum_observed(
                secret in word(),
                guesses in proptest::collection::vec(word(), 1..6),
            ) {
                let mut keyboard = KeyboardState::new();
                let mut best = [Mark::Unknown; 26];
                for guess in &guesses {
                    let f = Feedback::score(guess, &secret);
                    keyboard.upgrade(&f);
                    for entry in &f {
                        let i = usize::from(entry.letter - b'a');
                        best[i] = best[i].max(entry.mark);
                    }
                }
                for (i, expected) in best.iter().enumerate() {
                    let letter = char::from(b'a' + i as u8);
                    prop_assert_eq!(keyboard.mark(letter), *expected);
                }
            }
        }
    }
}
