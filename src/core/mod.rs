//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types: words, the guess grid,
//! and the pure guess evaluator. Nothing here performs I/O.

mod feedback;
mod grid;
mod state;
mod word;

pub use feedback::Feedback;
pub use grid::{Cell, Cursor, Grid, Row};
pub use state::LetterState;
pub use word::{Word, WordError};

/// Number of guesses per game
pub const ROWS: usize = 6;

/// Letters per word
pub const COLS: usize = 5;
