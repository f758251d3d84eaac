//! TUI application state and logic

use crate::config::Settings;
use crate::core::ROWS;
use crate::game::{GameState, Input, InputController, InputOutcome, InputStatus, SubmitOutcome};
use crate::output::share_message;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub controller: InputController<'a>,
    pub settings: Settings,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub show_summary: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; ROWS + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: GameState<'a>, settings: Settings) -> Self {
        let mut app = Self {
            controller: InputController::new(game),
            settings,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            show_summary: false,
        };
        app.add_message("Welcome! Type a word and press Enter.", MessageStyle::Info);
        app.add_message("Ctrl+N: new game | Ctrl+C: quit", MessageStyle::Info);
        app
    }

    #[must_use]
    pub fn game(&self) -> Option<&GameState<'a>> {
        self.controller.game()
    }

    #[must_use]
    pub fn status(&self) -> InputStatus {
        self.controller.status()
    }

    /// Share text for the current game
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        self.game()
            .map(|game| share_message(&self.settings.title, game, &self.settings.base_url))
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.controller.new_game(rng);
        self.show_summary = false;
        self.messages.clear();
        self.add_message("New game started! Good luck.", MessageStyle::Info);
    }

    /// Route one key press
    pub fn handle_key<R: Rng + ?Sized>(&mut self, key: KeyEvent, rng: &mut R) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(rng),
            _ if self.status() == InputStatus::Locked => self.handle_locked_key(key.code, rng),
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                self.apply(Input::Letter(c));
            }
            KeyCode::Backspace => {
                self.apply(Input::Backspace);
            }
            KeyCode::Enter => {
                self.apply(Input::Enter);
            }
            KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_locked_key<R: Rng + ?Sized>(&mut self, code: KeyCode, rng: &mut R) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') | KeyCode::Enter => self.new_game(rng),
            KeyCode::Esc => self.show_summary = !self.show_summary,
            _ => {}
        }
    }

    /// Feed an event to the controller and report what happened
    pub fn apply(&mut self, input: Input) -> InputOutcome {
        let outcome = self.controller.handle(input);
        debug!("{input:?} -> {outcome:?}");

        if let InputOutcome::Submitted(submitted) = outcome {
            self.on_submit(submitted);
        }
        outcome
    }

    fn on_submit(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Rejected => {
                self.add_message("Not in word list!", MessageStyle::Error);
            }
            SubmitOutcome::Won(_) => {
                let guess_count = self.game().and_then(GameState::score).unwrap_or(ROWS);
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.stats.guess_distribution[guess_count.min(ROWS)] += 1;

                let celebration = match guess_count {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.finish();
            }
            SubmitOutcome::Lost(_) => {
                self.stats.total_games += 1;
                let word = self
                    .game()
                    .map(|game| game.target().text().to_uppercase())
                    .unwrap_or_default();
                self.add_message(
                    &format!("Better luck next time! The word was {word}"),
                    MessageStyle::Error,
                );
                self.finish();
            }
            SubmitOutcome::Scored(_) | SubmitOutcome::Incomplete | SubmitOutcome::Locked => {}
        }
    }

    fn finish(&mut self) {
        self.show_summary = true;
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng + ?Sized>(app: App, rng: &mut R) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, rng);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, R: Rng + ?Sized>(
    terminal: &mut Terminal<B>,
    mut app: App,
    rng: &mut R,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key, rng);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::dictionary::Dictionary;
    use crate::dictionary::loader::words_from_slice;

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&["slate"]), words_from_slice(&["crane"])).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), &mut rand::rng());
    }

    fn type_word(app: &mut App, word: &str) {
        for ch in word.chars() {
            press(app, KeyCode::Char(ch));
        }
        press(app, KeyCode::Enter);
    }

    fn app(dictionary: &Dictionary) -> App<'_> {
        let game = GameState::new(dictionary, Word::new("crane").unwrap());
        App::new(game, Settings::default())
    }

    #[test]
    fn typing_fills_the_active_row() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.game().unwrap().grid().row(0).text(), "S");
    }

    #[test]
    fn rejected_word_reports_error() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);

        type_word(&mut app, "qqqqq");
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(app.status(), InputStatus::AcceptingInput);
    }

    #[test]
    fn win_updates_stats_and_opens_summary() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);

        type_word(&mut app, "slate");
        type_word(&mut app, "crane");

        assert_eq!(app.status(), InputStatus::Locked);
        assert!(app.show_summary);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!(app.share_text().unwrap().starts_with("Wordle Unlimited 2/6"));

        // Letters do nothing while locked; 'n' starts over
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.status(), InputStatus::AcceptingInput);
        assert!(!app.show_summary);
    }

    #[test]
    fn loss_is_counted() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);

        for _ in 0..ROWS {
            type_word(&mut app, "slate");
        }
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text.contains("CRANE")));
    }

    #[test]
    fn modified_letters_are_not_typed() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        let mut rng = rand::rng();

        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT), &mut rng);
        app.handle_key(
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
            &mut rng,
        );
        assert_eq!(app.game().unwrap().grid().row(0).text(), "");

        app.handle_key(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT), &mut rng);
        assert_eq!(app.game().unwrap().grid().row(0).text(), "C");
    }

    #[test]
    fn ctrl_c_quits() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        app.handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut rand::rng(),
        );
        assert!(app.should_quit);
    }
}
