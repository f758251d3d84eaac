//! Per-letter feedback state

/// Feedback assigned to a single cell
///
/// Variants are ordered by strength so the best hint a letter has received
/// is simply the maximum over its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LetterState {
    /// Not scored yet
    #[default]
    None,
    /// Letter is not in the target
    Incorrect,
    /// Letter is in the target at another position
    WrongPosition,
    /// Letter is at the right position
    Correct,
}

impl LetterState {
    /// Share glyph for this state
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::WrongPosition => '🟨',
            Self::Incorrect => '🟥',
            Self::None => '⬜',
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        !matches!(self, Self::None)
    }
}
