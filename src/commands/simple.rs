//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: one guess per line.

use crate::config::Settings;
use crate::core::{COLS, ROWS};
use crate::game::{Input, InputController, InputOutcome, InputStatus, SubmitOutcome};
use crate::output::{share_message, write_completion, write_grid, write_keyboard};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What one line of input asked for
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineCommand {
    Quit,
    NewGame,
    Share,
    Guess(String),
}

fn parse_line(line: &str) -> LineCommand {
    match line.trim().to_lowercase().as_str() {
        "/quit" | "/q" | "/exit" => LineCommand::Quit,
        "/new" | "/n" => LineCommand::NewGame,
        "/share" | "/s" => LineCommand::Share,
        guess => LineCommand::Guess(guess.to_string()),
    }
}

/// Feed a whole word through the controller and press enter
///
/// Any letters left on the active row are cleared first so the row holds
/// exactly `word`.
fn submit_word(controller: &mut InputController, word: &str) -> InputOutcome {
    while controller.handle(Input::Backspace) == InputOutcome::Edited {}
    for ch in word.chars() {
        controller.handle(Input::Letter(ch));
    }
    let outcome = controller.handle(Input::Enter);
    if outcome == InputOutcome::Ignored {
        while controller.handle(Input::Backspace) == InputOutcome::Edited {}
    }
    outcome
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if the controller has no game yet or if there's an I/O
/// error reading user input.
pub fn run_simple<R: Rng + ?Sized>(
    controller: &mut InputController,
    settings: &Settings,
    rng: &mut R,
) -> Result<(), String> {
    let stdin = io::stdin();
    run_with_io(controller, settings, rng, &mut stdin.lock(), &mut io::stdout())
}

fn run_with_io<R: Rng + ?Sized>(
    controller: &mut InputController,
    settings: &Settings,
    rng: &mut R,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<(), String> {
    if controller.status() == InputStatus::NotReady {
        return Err("Word list not loaded".to_string());
    }
    play_lines(controller, settings, rng, input, output).map_err(|e| e.to_string())
}

fn play_lines<R: Rng + ?Sized>(
    controller: &mut InputController,
    settings: &Settings,
    rng: &mut R,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                 {:<44} ║", settings.title)?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Guess the {COLS}-letter word in {ROWS} tries.")?;
    writeln!(
        output,
        "Commands: '/quit' to exit, '/new' for a new game, '/share' for your result\n"
    )?;

    loop {
        let Some(game) = controller.game() else {
            return Ok(());
        };
        write_grid(output, game.grid())?;
        writeln!(output)?;
        write_keyboard(output, game)?;

        if game.is_locked() {
            write_completion(output, game, &settings.title, &settings.base_url)?;
            match read_line(input, output, "Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    controller.new_game(rng);
                    writeln!(output, "\n🔄 New game started!\n")?;
                    continue;
                }
                _ => {
                    writeln!(output, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
            }
        }

        let prompt = format!("\nGuess {}/{ROWS}", game.cursor().row() + 1);
        let Some(line) = read_line(input, output, &prompt)? else {
            return Ok(());
        };

        match parse_line(&line) {
            LineCommand::Quit => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            LineCommand::NewGame => {
                controller.new_game(rng);
                writeln!(output, "\n🔄 New game started!\n")?;
            }
            LineCommand::Share => {
                if let Some(game) = controller.game() {
                    let message = share_message(&settings.title, game, &settings.base_url);
                    writeln!(output, "\n{message}\n")?;
                }
            }
            LineCommand::Guess(word) => {
                if word.chars().count() != COLS {
                    let error = format!("❌ Word must be exactly {COLS} letters!");
                    writeln!(output, "{}", error.red())?;
                    continue;
                }
                match submit_word(controller, &word) {
                    InputOutcome::Submitted(SubmitOutcome::Rejected) => {
                        let error = format!("❌ '{}' is not in the word list", word.to_uppercase());
                        writeln!(output, "{}", error.red())?;
                    }
                    InputOutcome::Ignored => {
                        writeln!(output, "{}", "❌ Letters A-Z only!".red())?;
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Prompt and read one trimmed line; `None` on end of input
fn read_line(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
