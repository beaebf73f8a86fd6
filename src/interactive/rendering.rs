//! TUI rendering with ratatui
//!
//! Board, keyboard and attempt gauge for the game screen.

use super::app::{App, MessageStyle};
use crate::core::{KeyboardState, Mark, WORD_LENGTH};
use crate::game::{GameStatus, MAX_ATTEMPTS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                       // Header
            Constraint::Length(MAX_ATTEMPTS as u16 + 2), // Board
            Constraint::Length(5),                       // Keyboard
            Constraint::Length(3),                       // Attempts
            Constraint::Min(3),                          // Messages
            Constraint::Length(3),                       // Input
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app.session.keyboard(), chunks[2]);
    render_attempts(f, app, chunks[3]);
    render_messages(f, app, chunks[4]);
    render_input(f, app, chunks[5]);
}

/// Tile style for a mark: green hit, yellow present, gray miss
#[must_use]
pub fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::Hit => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Mark::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Mark::Miss => Style::default().fg(Color::White).bg(Color::DarkGray),
        Mark::Unknown => Style::default().fg(Color::White),
    }
}

fn tile(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔠 WORDLE")
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let turns = app.session.turns();
    let current_row = (!app.session.is_over()).then_some(turns.len());

    let lines: Vec<Line> = (0..MAX_ATTEMPTS)
        .map(|row| {
            if let Some(turn) = turns.get(row) {
                let mut spans: Vec<Span> = turn
                    .feedback
                    .iter()
                    .map(|entry| tile(entry.letter_char(), mark_style(entry.mark)))
                    .collect();
                spans.push(Span::raw(format!("  {}", turn.feedback.to_emoji())));
                Line::from(spans)
            } else if current_row == Some(row) {
                let typed = app.input_buffer.chars().map(Some);
                let blanks =
                    std::iter::repeat_n(None, WORD_LENGTH.saturating_sub(app.input_buffer.len()));
                Line::from(
                    typed
                        .chain(blanks)
                        .map(|c| match c {
                            Some(letter) => tile(letter, Style::default().fg(Color::Yellow)),
                            None => tile('_', Style::default().fg(Color::DarkGray)),
                        })
                        .collect::<Vec<_>>(),
                )
            } else {
                let empty = tile('·', Style::default().fg(Color::DarkGray));
                Line::from(std::iter::repeat_n(empty, WORD_LENGTH).collect::<Vec<_>>())
            }
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Your Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardState, area: Rect) {
    let lines: Vec<Line> = keyboard
        .rows()
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(key, mark)| tile(key, mark_style(mark)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" ⌨️ Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let attempts = app.session.attempts();
    let (title, color) = match app.session.status() {
        GameStatus::Playing => (" Playing ", Color::Cyan),
        GameStatus::Won => (" 🎉 You Win! ", Color::Green),
        GameStatus::Lost => (" ❌ You Lost! ", Color::Red),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent((attempts * 100 / MAX_ATTEMPTS) as u16)
        .label(format!("Attempts: {attempts}/{MAX_ATTEMPTS}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = if app.session.is_over() {
        (" Enter or 'n': new game | Esc: quit ", Color::Green)
    } else {
        (" Type your guess | Enter: submit | Esc: quit ", Color::Yellow)
    };

    let input = Paragraph::new(app.input_buffer.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}
