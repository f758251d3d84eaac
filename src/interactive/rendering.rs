//! TUI rendering with ratatui
//!
//! Board, keyboard and end-of-game summary for the play screen.

use super::app::{App, MessageStyle};
use crate::core::{COLS, Cell, LetterState, ROWS};
use crate::game::{GameState, InputStatus, Outcome};
use crate::output::formatters::{KEYBOARD_ROWS, share_message};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board and keyboard
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[1]);

    render_play_panel(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);

    if let Some(game) = app.game().filter(|_| app.show_summary) {
        render_summary(f, app, game);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("🟩 {}", app.settings.title.to_uppercase()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn state_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        LetterState::WrongPosition => Style::new().fg(Color::Black).bg(Color::Yellow),
        LetterState::Incorrect => Style::new().fg(Color::White).bg(Color::DarkGray),
        LetterState::None => Style::new().fg(Color::White),
    }
}

fn cell_span(cell: &Cell, active: bool) -> Span<'static> {
    let letter = cell.letter().unwrap_or(if active { '_' } else { '·' });
    Span::styled(
        format!(" {letter} "),
        state_style(cell.state()).add_modifier(Modifier::BOLD),
    )
}

fn board_lines(game: &GameState) -> Vec<Line<'static>> {
    let cursor = game.cursor();
    let mut lines = Vec::with_capacity(ROWS * 2);

    for (r, row) in game.grid().rows().iter().enumerate() {
        let active = !game.is_locked() && r == cursor.row();
        let mut spans = Vec::with_capacity(COLS * 2);
        for cell in row.cells() {
            spans.push(cell_span(cell, active));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines
}

fn keyboard_lines(game: &GameState) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|keys| {
            let spans: Vec<Span> = keys
                .chars()
                .flat_map(|key| {
                    [
                        Span::styled(format!(" {key} "), state_style(game.letter_state(key))),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_play_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(14),   // Board
            Constraint::Length(5), // Keyboard
        ])
        .split(area);

    let Some(game) = app.game() else {
        let paragraph = Paragraph::new("Loading word list...").block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        f.render_widget(paragraph, area);
        return;
    };

    let board = Paragraph::new(board_lines(game))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, chunks[0]);

    let keyboard = Paragraph::new(keyboard_lines(game))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

/// Centered popup with the result and challenge link
fn render_summary(f: &mut Frame, app: &App, game: &GameState) {
    let area = centered_rect(60, 70, f.area());

    let (title, color) = match game.outcome() {
        Some(Outcome::Won) => (" 🎉 CONGRATULATIONS! 🎉 ", Color::Green),
        _ => (" GAME OVER ", Color::Red),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw("The word was "),
            Span::styled(
                game.target().text().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];
    lines.extend(
        share_message(&app.settings.title, game, &app.settings.base_url)
            .lines()
            .map(|line| Line::from(line.to_string())),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "n: New Game | q: Quit | Esc: Hide",
        Style::default().fg(Color::DarkGray),
    )));

    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = match app.status() {
        InputStatus::NotReady => "Mode: Loading".to_string(),
        InputStatus::AcceptingInput => app.game().map_or_else(String::new, |game| {
            format!("Guess {}/{ROWS}", game.cursor().row() + 1)
        }),
        InputStatus::Locked => "Mode: Finished".to_string(),
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.status() == InputStatus::Locked {
        "q: Quit | n: New Game | Esc: Toggle Summary"
    } else {
        "A-Z: Type | Enter: Submit | Ctrl+N: New Game | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
