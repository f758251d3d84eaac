//! Guess evaluation
//!
//! Scores a guess against the target word, one `LetterState` per column.

use super::{COLS, LetterState, Word};

/// Feedback for one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterState; COLS]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterState::Correct; COLS]);

    /// Score `guess` against `target`
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (greens) and remove them from the pool
    /// 2. Second pass: Left to right, mark present-but-wrong-position (yellows)
    ///    while the pool still holds that letter, otherwise incorrect
    ///
    /// # Examples
    /// ```
    /// use wordle_unlimited::core::{Feedback, LetterState, Word};
    ///
    /// let guess = Word::new("llama").unwrap();
    /// let target = Word::new("allow").unwrap();
    ///
    /// assert_eq!(
    ///     Feedback::evaluate(&guess, &target).states(),
    ///     &[
    ///         LetterState::WrongPosition,
    ///         LetterState::Correct,
    ///         LetterState::WrongPosition,
    ///         LetterState::Incorrect,
    ///         LetterState::Incorrect,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterState::Incorrect; COLS];
        let mut target_available = target.char_counts();

        // First pass: Mark greens (exact position matches)
        // Allow: Index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..COLS {
            if guess.char_at(i) == target.char_at(i) {
                result[i] = LetterState::Correct;

                if let Some(count) = target_available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: Mark yellows from whatever the greens left over
        #[allow(clippy::needless_range_loop)]
        for i in 0..COLS {
            if result[i] == LetterState::Correct {
                continue;
            }
            if let Some(count) = target_available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = LetterState::WrongPosition;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-column states
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; COLS] {
        &self.0
    }

    /// Check if every column is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterState::Correct)
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_wrong_position(&self) -> usize {
        self.count(LetterState::WrongPosition)
    }

    fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Convert feedback to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_unlimited::core::Feedback;
    ///
    /// assert_eq!(Feedback::PERFECT.to_emoji(), "🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.glyph()).collect()
    }
}
