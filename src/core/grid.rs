//! Guess grid, rows, cells and cursor
//!
//! Rows are plain values: every edit produces a new `Row` which replaces the
//! old one wholesale, so no two rows ever share mutable storage.

use super::{COLS, Feedback, LetterState, ROWS, Word};

/// One letter slot of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    letter: Option<char>,
    state: LetterState,
}

impl Cell {
    pub const EMPTY: Self = Self {
        letter: None,
        state: LetterState::None,
    };

    /// Uppercase letter held by this cell, if any
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<char> {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> LetterState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none()
    }
}

/// One guess attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Row([Cell; COLS]);

impl Row {
    pub const EMPTY: Self = Self([Cell::EMPTY; COLS]);

    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[Cell; COLS] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn cell(&self, col: usize) -> &Cell {
        &self.0[col]
    }

    /// Every cell holds a letter
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0.iter().all(|cell| !cell.is_empty())
    }

    /// The row has been through evaluation and is frozen
    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.0.iter().any(|cell| cell.state.is_scored())
    }

    /// Every cell was scored correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|cell| cell.state == LetterState::Correct)
    }

    /// Letters typed so far, uppercase, empty cells skipped
    #[must_use]
    pub fn text(&self) -> String {
        self.0.iter().filter_map(|cell| cell.letter).collect()
    }

    /// The row's letters as a lowercase word, once the row is full
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        if !self.is_full() {
            return None;
        }
        Word::new(self.text()).ok()
    }

    /// Copy of this row with `letter` written at `col`
    #[must_use]
    pub(crate) fn with_letter(mut self, col: usize, letter: Option<char>) -> Self {
        self.0[col].letter = letter;
        self
    }

    /// Copy of this row carrying the given feedback
    #[must_use]
    pub(crate) fn scored(mut self, feedback: &Feedback) -> Self {
        for (cell, &state) in self.0.iter_mut().zip(feedback.states()) {
            cell.state = state;
        }
        self
    }
}

/// Fixed 6×5 grid of guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Grid([Row; ROWS]);

impl Grid {
    pub const EMPTY: Self = Self([Row::EMPTY; ROWS]);

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[Row; ROWS] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn row(&self, row: usize) -> &Row {
        &self.0[row]
    }

    /// Rows that have been scored, top to bottom
    pub fn scored_rows(&self) -> impl Iterator<Item = &Row> {
        self.0.iter().take_while(|row| row.is_scored())
    }

    /// Best state each letter has received anywhere in the grid
    ///
    /// Returns `LetterState::None` for letters never scored.
    #[must_use]
    pub fn letter_state(&self, letter: char) -> LetterState {
        let letter = letter.to_ascii_uppercase();
        self.0
            .iter()
            .flat_map(|row| row.cells())
            .filter(|cell| cell.letter == Some(letter))
            .map(Cell::state)
            .max()
            .unwrap_or_default()
    }

    pub(crate) fn replace_row(&mut self, row: usize, value: Row) {
        self.0[row] = value;
    }
}

/// The next editable cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    row: usize,
    col: usize,
}

impl Cursor {
    pub const START: Self = Self { row: 0, col: 0 };

    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    #[inline]
    #[must_use]
    pub const fn is_last_col(&self) -> bool {
        self.col == COLS - 1
    }

    #[inline]
    #[must_use]
    pub const fn is_last_row(&self) -> bool {
        self.row == ROWS - 1
    }

    /// Same row, column clamped into the grid
    #[must_use]
    pub(crate) fn at_col(self, col: usize) -> Self {
        Self {
            row: self.row,
            col: col.min(COLS - 1),
        }
    }

    /// Start of the following row, or unchanged on the last row
    #[must_use]
    pub(crate) fn next_row(self) -> Self {
        if self.is_last_row() {
            self
        } else {
            Self {
                row: self.row + 1,
                col: 0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_of(word: &str) -> Row {
        word.chars()
            .enumerate()
            .fold(Row::EMPTY, |row, (col, ch)| row.with_letter(col, Some(ch)))
    }

    #[test]
    fn empty_grid_has_no_scored_rows() {
        let grid = Grid::EMPTY;
        assert_eq!(grid.scored_rows().count(), 0);
        assert!(grid.rows().iter().all(|row| *row == Row::EMPTY));
    }

    #[test]
    fn row_word_requires_full_row() {
        let partial = Row::EMPTY.with_letter(0, Some('C'));
        assert!(!partial.is_full());
        assert_eq!(partial.word(), None);

        let full = row_of("CRANE");
        assert!(full.is_full());
        assert_eq!(full.word(), Some(Word::new("crane").unwrap()));
        assert_eq!(full.text(), "CRANE");
    }

    #[test]
    fn editing_a_copy_leaves_original_untouched() {
        let original = row_of("CRANE");
        let edited = original.with_letter(2, None);

        assert_eq!(original.text(), "CRANE");
        assert_eq!(edited.text(), "CRNE");
    }

    #[test]
    fn scored_row_carries_feedback() {
        let row = row_of("CRANE").scored(&Feedback::PERFECT);
        assert!(row.is_scored());
        assert!(row.is_solved());
        assert!(!row_of("CRANE").is_scored());
    }

    #[test]
    fn letter_state_picks_best_hint() {
        let guess = Word::new("llama").unwrap();
        let target = Word::new("allow").unwrap();
        let mut grid = Grid::EMPTY;
        grid.replace_row(0, row_of("LLAMA").scored(&Feedback::evaluate(&guess, &target)));

        assert_eq!(grid.letter_state('l'), LetterState::Correct);
        assert_eq!(grid.letter_state('A'), LetterState::WrongPosition);
        assert_eq!(grid.letter_state('M'), LetterState::Incorrect);
        assert_eq!(grid.letter_state('Z'), LetterState::None);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let cursor = Cursor::START.at_col(COLS + 3);
        assert_eq!(cursor.col(), COLS - 1);

        let mut cursor = Cursor::START;
        for _ in 0..ROWS * 2 {
            cursor = cursor.next_row();
        }
        assert_eq!(cursor.row(), ROWS - 1);
        assert!(cursor.is_last_row());
    }
}
