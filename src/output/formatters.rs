//! Formatting utilities for results and sharing

use crate::challenge::challenge_link;
use crate::core::{Grid, ROWS};
use crate::game::GameState;

/// Default title used in the result header
pub const DEFAULT_TITLE: &str = "Wordle Unlimited";

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Shareable result text
///
/// A `"<title> <score>/6"` header and a blank line, then one glyph line per row
/// up to `score`. Rows past `score` are omitted.
///
/// # Examples
/// ```
/// use wordle_unlimited::core::Grid;
/// use wordle_unlimited::output::formatters::result_string;
///
/// assert_eq!(result_string("Wordle", &Grid::EMPTY, 1), "Wordle 1/6\n\n⬜⬜⬜⬜⬜\n");
/// ```
#[must_use]
pub fn result_string(title: &str, grid: &Grid, score: usize) -> String {
    let mut result = format!("{title} {score}/{ROWS}\n\n");
    for row in grid.rows().iter().take(score) {
        result.extend(row.cells().iter().map(|cell| cell.state().glyph()));
        result.push('\n');
    }
    result
}

/// Result text for a game, scored up to the row it ended on
///
/// Games still in progress report the rows scored so far.
#[must_use]
pub fn game_result(title: &str, game: &GameState) -> String {
    let score = game.score().unwrap_or_else(|| game.scored_rows());
    result_string(title, game.grid(), score)
}

/// Result text followed by a challenge link for the same word
#[must_use]
pub fn share_message(title: &str, game: &GameState, base_url: &str) -> String {
    format!(
        "{}\nTry and beat my score: {}",
        game_result(title, game),
        challenge_link(base_url, game.target().text())
    )
}
