//! Input state machine
//!
//! Every device (terminal keys, line input, test drivers) is reduced to three
//! events: a letter, backspace, and enter. The controller applies them to the
//! active row while the game accepts input and ignores them otherwise.

use super::state::{GameState, SubmitOutcome};
use crate::core::Word;
use rand::Rng;

/// A single user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Letter(char),
    Backspace,
    Enter,
}

/// Whether the controller currently takes input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStatus {
    /// No dictionary yet; every event is a no-op
    NotReady,
    AcceptingInput,
    /// Game won or exhausted; waiting for a reset
    Locked,
}

/// What an event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Nothing changed
    Ignored,
    /// A letter was written or cleared
    Edited,
    /// Enter reached the game
    Submitted(SubmitOutcome),
}

/// Translates user events into game mutations
#[derive(Debug, Default)]
pub struct InputController<'a> {
    game: Option<GameState<'a>>,
}

impl<'a> InputController<'a> {
    /// A controller with no game behind it
    ///
    /// Reports `InputStatus::NotReady` until `ready` is called.
    #[must_use]
    pub const fn uninitialized() -> Self {
        Self { game: None }
    }

    #[must_use]
    pub const fn new(game: GameState<'a>) -> Self {
        Self { game: Some(game) }
    }

    /// Attach a game once the dictionary is available
    pub fn ready(&mut self, game: GameState<'a>) {
        self.game = Some(game);
    }

    #[must_use]
    pub const fn game(&self) -> Option<&GameState<'a>> {
        self.game.as_ref()
    }

    #[must_use]
    pub fn status(&self) -> InputStatus {
        match &self.game {
            None => InputStatus::NotReady,
            Some(game) if game.is_locked() => InputStatus::Locked,
            Some(_) => InputStatus::AcceptingInput,
        }
    }

    /// Apply one event
    pub fn handle(&mut self, input: Input) -> InputOutcome {
        match input {
            Input::Letter(ch) => self.letter(ch),
            Input::Backspace => self.backspace(),
            Input::Enter => self.enter(),
        }
    }

    /// Type a letter into the cursor cell
    ///
    /// Only single ASCII letters are accepted, and only into an empty cell.
    /// The cursor advances unless it is already on the last column.
    pub fn letter(&mut self, ch: char) -> InputOutcome {
        let Some(game) = self.accepting() else {
            return InputOutcome::Ignored;
        };
        if !ch.is_ascii_alphabetic() || game.current_letter().is_some() {
            return InputOutcome::Ignored;
        }

        let cursor = game.cursor();
        game.set_letter(cursor.col(), Some(ch.to_ascii_uppercase()));
        if !cursor.is_last_col() {
            game.move_to_col(cursor.col() + 1);
        }
        InputOutcome::Edited
    }

    /// Clear the cursor cell, or step back and clear the previous one
    pub fn backspace(&mut self) -> InputOutcome {
        let Some(game) = self.accepting() else {
            return InputOutcome::Ignored;
        };

        let cursor = game.cursor();
        if game.current_letter().is_some() {
            game.set_letter(cursor.col(), None);
        } else if cursor.col() > 0 {
            game.set_letter(cursor.col() - 1, None);
            game.move_to_col(cursor.col() - 1);
        } else {
            return InputOutcome::Ignored;
        }
        InputOutcome::Edited
    }

    /// Submit the row once its last cell is filled
    pub fn enter(&mut self) -> InputOutcome {
        let Some(game) = self.accepting() else {
            return InputOutcome::Ignored;
        };

        let cursor = game.cursor();
        if !cursor.is_last_col() || game.current_letter().is_none() {
            return InputOutcome::Ignored;
        }
        InputOutcome::Submitted(game.submit_guess())
    }

    /// Restart with `target`; no-op before the game is ready
    pub fn reset(&mut self, target: Word) {
        if let Some(game) = self.game.as_mut() {
            game.reset(target);
        }
    }

    /// Restart against a random target; no-op before the game is ready
    pub fn new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Some(game) = self.game.as_mut() {
            game.new_game(rng);
        }
    }

    fn accepting(&mut self) -> Option<&mut GameState<'a>> {
        self.game.as_mut().filter(|game| !game.is_locked())
    }
}
