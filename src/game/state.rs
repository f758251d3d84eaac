//! Game state: grid, cursor, target and outcome

use crate::core::{COLS, Cursor, Feedback, Grid, LetterState, ROWS, Row, Word};
use crate::dictionary::Dictionary;
use log::{debug, info};
use rand::Rng;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Result of `GameState::submit_guess`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The active row still has empty cells; nothing changed
    Incomplete,
    /// The game is already over; nothing changed
    Locked,
    /// Not in the dictionary; the row was cleared and the cursor rewound
    Rejected,
    /// Scored, game continues on the next row
    Scored(Feedback),
    /// Scored all correct
    Won(Feedback),
    /// Scored on the last row without a match
    Lost(Feedback),
}

/// One game of Wordle
///
/// Owns the grid, cursor and secret word. Cell letters are edited through the
/// crate-internal primitives used by `InputController`; cell states only change
/// through `submit_guess`.
#[derive(Debug, Clone)]
pub struct GameState<'a> {
    dictionary: &'a Dictionary,
    grid: Grid,
    cursor: Cursor,
    target: Word,
    outcome: Option<Outcome>,
}

impl<'a> GameState<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, target: Word) -> Self {
        info!("New game started");
        Self {
            dictionary,
            grid: Grid::EMPTY,
            cursor: Cursor::START,
            target,
            outcome: None,
        }
    }

    /// Start a game against a random target
    pub fn random<R: Rng + ?Sized>(dictionary: &'a Dictionary, rng: &mut R) -> Self {
        let target = dictionary.random_target(rng).clone();
        Self::new(dictionary, target)
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Copy of the grid for renderers
    #[inline]
    #[must_use]
    pub const fn snapshot(&self) -> Grid {
        self.grid
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The last scored row is all correct
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.outcome == Some(Outcome::Won)
    }

    /// Every row was used without a match
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.outcome == Some(Outcome::Lost)
    }

    /// No more input is accepted
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.outcome.is_some()
    }

    /// Number of rows scored so far
    #[must_use]
    pub fn scored_rows(&self) -> usize {
        self.grid.scored_rows().count()
    }

    /// 1-based row on which the game ended, once it has
    #[must_use]
    pub fn score(&self) -> Option<usize> {
        self.outcome.map(|_| self.cursor.row() + 1)
    }

    /// Best feedback a letter has received so far, for keyboard hints
    #[must_use]
    pub fn letter_state(&self, letter: char) -> LetterState {
        self.grid.letter_state(letter)
    }

    /// Score the active row
    ///
    /// Words missing from the dictionary clear the row and rewind the cursor
    /// to its first column. Accepted words are scored, frozen, and either end
    /// the game or move the cursor to the next row.
    pub fn submit_guess(&mut self) -> SubmitOutcome {
        if self.is_locked() {
            return SubmitOutcome::Locked;
        }

        let row_index = self.cursor.row();
        let row = *self.grid.row(row_index);
        let Some(guess) = row.word() else {
            return SubmitOutcome::Incomplete;
        };

        if !self.dictionary.contains(guess.text()) {
            debug!("Rejected guess {} on row {row_index}", row.text());
            self.grid.replace_row(row_index, Row::EMPTY);
            self.cursor = self.cursor.at_col(0);
            return SubmitOutcome::Rejected;
        }

        let feedback = Feedback::evaluate(&guess, &self.target);
        self.grid.replace_row(row_index, row.scored(&feedback));
        debug!("Scored row {row_index}: {}", feedback.to_emoji());

        if feedback.is_perfect() {
            self.outcome = Some(Outcome::Won);
            info!("Game won on row {}", row_index + 1);
            SubmitOutcome::Won(feedback)
        } else if self.cursor.is_last_row() {
            self.outcome = Some(Outcome::Lost);
            info!("Game lost after {ROWS} guesses");
            SubmitOutcome::Lost(feedback)
        } else {
            self.cursor = self.cursor.next_row();
            SubmitOutcome::Scored(feedback)
        }
    }

    /// Start over with a new secret word
    pub fn reset(&mut self, target: Word) {
        info!("Game reset");
        self.grid = Grid::EMPTY;
        self.cursor = Cursor::START;
        self.target = target;
        self.outcome = None;
    }

    /// Start over against a random target
    pub fn new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let target = self.dictionary.random_target(rng).clone();
        self.reset(target);
    }

    /// Letter at the cursor cell
    pub(crate) fn current_letter(&self) -> Option<char> {
        self.grid
            .row(self.cursor.row())
            .cell(self.cursor.col())
            .letter()
    }

    /// Write or clear a letter on the active row
    ///
    /// Ignored once the game is over or for columns outside the grid.
    pub(crate) fn set_letter(&mut self, col: usize, letter: Option<char>) {
        if self.is_locked() || col >= COLS {
            return;
        }
        let row_index = self.cursor.row();
        let row = self.grid.row(row_index).with_letter(col, letter);
        self.grid.replace_row(row_index, row);
    }

    /// Move the cursor within the active row, clamped to the grid
    pub(crate) fn move_to_col(&mut self, col: usize) {
        self.cursor = self.cursor.at_col(col);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;

    fn dictionary() -> Dictionary {
        Dictionary::new(
            words_from_slice(&["slate", "llama", "audio", "robot", "speed", "irate"]),
            words_from_slice(&["crane", "allow"]),
        )
        .unwrap()
    }

    fn type_word(game: &mut GameState, word: &str) {
        for (col, ch) in word.chars().enumerate() {
            game.set_letter(col, Some(ch.to_ascii_uppercase()));
        }
        game.move_to_col(COLS - 1);
    }

    #[test]
    fn exact_guess_wins_on_first_row() {
        let dictionary = dictionary();
        let mut game = GameState::new(&dictionary, Word::new("crane").unwrap());

        type_word(&mut game, "crane");
        assert_eq!(game.submit_guess(), SubmitOutcome::Won(Feedback::PERFECT));

        assert!(game.is_completed());
        assert!(game.is_locked());
        assert_eq!(game.score(), Some(1));
        assert!(game.grid().row(0).is_solved());
    }

    #[test]
    fn unknown_word_clears_row_and_keeps_row_index() {
        let dictionary = dictionary();
        let mut game = GameState::new(&dictionary, Word::new("crane").unwrap());

        type_word(&mut game, "slate");
        game.submit_guess();
        let scored = *game.grid().row(0);

        type_word(&mut game, "xxxxx");
        assert_eq!(game.submit_guess(), SubmitOutcome::Rejected);

        assert_eq!(game.cursor().row(), 1);
        assert_eq!(game.cursor().col(), 0);
        assert_eq!(*game.grid().row(1), Row::EMPTY);
        assert_eq!(*game.grid().row(0), scored);
        assert_eq!(game.target().text(), "crane");
        assert!(!game.is_completed());
    }

    #[test]
    fn incomplete_row_is_not_submitted() {
        let dictionary = dictionary();
        let mut game = GameState::new(&dictionary, Word::new("crane").unwrap());

        game.set_letter(0, Some('C'));
        assert_eq!(game.submit_guess(), SubmitOutcome::Incomplete);
        assert_eq!(game.grid().row(0).text(), "C");
    }

    #[test]
    fn scored_guess_advances_to_next_row() {
        let dictionary = dictionary();
        let mut game = GameState::new(&dictionary, Word::new("allow").unwrap());

        type_word(&mut game, "llama");
        let SubmitOutcome::Scored(feedback) = game.submit_guess() else {
            panic!("expected a scored row");
        };
        assert_eq!(feedback.count_correct(), 1);
        assert_eq!(game.cursor(), Cursor::START.next_row());
        assert_eq!(game.scored_rows(), 1);
        assert_eq!(game.score(), None);
    }

    #[test]
    fn six_misses_lose_the_game() {
        let dictionary = dictionary();
        let mut game = GameState::new(&dictionary, Word::new("crane").unwrap());

        for turn in 0..ROWS {
            type_word(&mut game, "audio");
            let outcome = game.submit_guess();
            if turn < ROWS - 1 {
                assert!(matches!(outcome, SubmitOutcome::Scored(_)));
            } else {
                assert!(matches!(outcome, SubmitOutcome::Lost(_)));
            }
        }

        assert!(game.is_exhausted());
        assert!(!game.is_completed());
        assert_eq!(game.score(), Some(ROWS));
        assert_eq!(game.cursor().row(), ROWS - 1);
        assert_eq!(game.submit_guess(), SubmitOutcome::Locked);
    }

    #[test]
    fn scored_rows_are_frozen_after_game_ends() {
        let dictionary = dictionary();
        let mut game = GameState::new(&dictionary, Word::new("crane").unwrap());

        type_word(&mut game, "crane");
        game.submit_guess();
        let before = game.snapshot();

        game.set_letter(0, None);
        game.set_letter(1, Some('Z'));
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn reset_restores_initial_state() {
        let dictionary = dictionary();
        let mut game = GameState::new(&dictionary, Word::new("crane").unwrap());

        type_word(&mut game, "crane");
        game.submit_guess();
        game.reset(Word::new("allow").unwrap());

        assert_eq!(game.snapshot(), Grid::EMPTY);
        assert_eq!(game.cursor(), Cursor::START);
        assert_eq!(game.outcome(), None);
        assert_eq!(game.target().text(), "allow");
    }

    #[test]
    fn new_game_draws_from_targets() {
        let dictionary = dictionary();
        let mut rng = rand::rng();
        let mut game = GameState::random(&dictionary, &mut rng);
        assert!(dictionary.is_target(game.target()));

        game.new_game(&mut rng);
        assert!(dictionary.is_target(game.target()));
        assert_eq!(game.scored_rows(), 0);
    }

    #[test]
    fn keyboard_hints_track_best_state() {
        let dictionary = dictionary();
        let mut game = GameState::new(&dictionary, Word::new("allow").unwrap());

        type_word(&mut game, "llama");
        game.submit_guess();

        assert_eq!(game.letter_state('L'), LetterState::Correct);
        assert_eq!(game.letter_state('a'), LetterState::WrongPosition);
        assert_eq!(game.letter_state('M'), LetterState::Incorrect);
        assert_eq!(game.letter_state('Q'), LetterState::None);
    }
}
