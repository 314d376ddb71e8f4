//! Per-letter feedback for a committed guess
//!
//! Each position of a guess is classified as:
//! - `Correct` = letter in the right position
//! - `Present` = letter in the secret, wrong position
//! - `Absent`  = letter not in the secret (or all its occurrences already used)

use super::word::{WORD_LENGTH, Word};

/// Feedback for a single letter position
///
/// Ordered so that `max` yields the most informative state, which is what the
/// keyboard shows for a letter guessed several times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterState {
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// Emoji square used when printing boards
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, one state per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation([LetterState; WORD_LENGTH]);

impl Evaluation {
    /// All positions correct
    pub const PERFECT: Self = Self([LetterState::Correct; WORD_LENGTH]);

    /// Evaluate `guess` against `secret`
    ///
    /// Implements the standard multiset matching, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches and remove them from the available pool
    /// 2. Second pass: Mark present-but-misplaced letters from what remains
    ///
    /// Reserving exact matches first is required: a single left-to-right pass
    /// would spend a repeated letter on a misplaced position and then miss
    /// the exact one.
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::{Evaluation, LetterState, Word};
    ///
    /// let guess = Word::new("planes").unwrap();
    /// let secret = Word::new("planet").unwrap();
    /// let evaluation = Evaluation::calculate(&guess, &secret);
    ///
    /// assert_eq!(evaluation.states()[5], LetterState::Absent);
    /// assert_eq!(evaluation.count_correct(), 5);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut result = [LetterState::Absent; WORD_LENGTH];
        let mut remaining = secret.char_counts();

        // First pass: exact position matches
        for (i, state) in result.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == secret.char_at(i) {
                *state = LetterState::Correct;
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, limited by what the first pass left
        for (i, state) in result.iter_mut().enumerate() {
            if *state == LetterState::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess.char_at(i))
                && *count > 0
            {
                *state = LetterState::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-position states, in guess order
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterState::Correct)
    }

    /// Count the number of present-but-misplaced positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterState::Present)
    }

    fn count(&self, wanted: LetterState) -> usize {
        self.0.iter().filter(|&&state| state == wanted).count()
    }

    /// Convert to an emoji string like "🟩🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|state| state.emoji()).collect()
    }
}
