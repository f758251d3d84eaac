//! Colored terminal printing for the line-mode game and one-shot commands

use super::formatters::{KEYBOARD_ROWS, share_message};
use crate::commands::{ChallengeInfo, ScoreResult};
use crate::core::{Cell, Grid, LetterState};
use crate::game::{GameState, Outcome};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

fn paint(text: &str, state: LetterState) -> ColoredString {
    match state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::WrongPosition => text.black().on_yellow().bold(),
        LetterState::Incorrect => text.white().on_bright_black(),
        LetterState::None => text.bright_white().bold(),
    }
}

fn paint_cell(cell: &Cell) -> ColoredString {
    let letter = cell.letter().map_or_else(|| "·".to_string(), String::from);
    paint(&format!(" {letter} "), cell.state())
}

/// Write every row of the grid, empty cells as dots
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn write_grid(out: &mut impl Write, grid: &Grid) -> io::Result<()> {
    for row in grid.rows() {
        let line: Vec<String> = row.cells().iter().map(|c| paint_cell(c).to_string()).collect();
        writeln!(out, "   {}", line.join(" "))?;
    }
    Ok(())
}

/// Write the keyboard with the best hint each letter has received
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn write_keyboard(out: &mut impl Write, game: &GameState) -> io::Result<()> {
    for (i, keys) in KEYBOARD_ROWS.iter().enumerate() {
        let line: Vec<String> = keys
            .chars()
            .map(|key| paint(&key.to_string(), game.letter_state(key)).to_string())
            .collect();
        writeln!(out, "   {}{}", " ".repeat(i), line.join(" "))?;
    }
    Ok(())
}

/// Write the end-of-game summary
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn write_completion(
    out: &mut impl Write,
    game: &GameState,
    title: &str,
    base_url: &str,
) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    match game.outcome() {
        Some(Outcome::Won) => writeln!(out, "{}", "🎉 You got it!".green().bold())?,
        Some(Outcome::Lost) => writeln!(out, "{}", "Better luck next time!".red().bold())?,
        None => {}
    }
    writeln!(
        out,
        "The word was {}",
        game.target().text().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(out, "\n{}\n", share_message(title, game, base_url))
}

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{}  →  {}",
        result.guess.to_uppercase().bright_white().bold(),
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("   {}", result.feedback.to_emoji());
    println!(
        "   {} correct, {} misplaced",
        result.feedback.count_correct().to_string().green(),
        result.feedback.count_wrong_position().to_string().yellow()
    );
}

/// Print a challenge token and its link
pub fn print_challenge(info: &ChallengeInfo) {
    println!("Word:  {}", info.word.to_uppercase().bright_yellow().bold());
    println!("Token: {}", info.token);
    println!("Link:  {}", info.link.cyan());
}
