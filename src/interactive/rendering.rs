//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{GameState, LetterFeedback, MAX_ROWS};
use crate::output::display::GREETING;
use crate::output::formatters::{TILE_FG, feedback_background};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Greeting
            Constraint::Length(MAX_ROWS as u16 + 2), // Board
            Constraint::Length(1),                   // Status line
            Constraint::Min(0),                      // Message
            Constraint::Length(1),                   // Key help
        ])
        .split(f.area());

    render_greeting(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_status(f, app, chunks[2]);
    render_message(f, app, chunks[3]);
    render_help(f, app, chunks[4]);
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Style of a letter tile; `None` is the idle style of the row being typed
#[must_use]
pub fn tile_style(feedback: Option<LetterFeedback>) -> Style {
    let style = Style::default()
        .fg(rgb(TILE_FG))
        .add_modifier(Modifier::BOLD);

    match feedback {
        Some(kind) => style.bg(rgb(feedback_background(kind))),
        None => style,
    }
}

fn render_greeting(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = GREETING.iter().map(|&text| Line::from(text)).collect();
    let greeting = Paragraph::new(lines)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(greeting, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;

    let lines: Vec<Line> = game
        .rows_to_render()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let feedback = game.evaluate_row(i);
            let spans: Vec<Span> = row
                .chars()
                .enumerate()
                .map(|(j, letter)| {
                    let kind = feedback.as_ref().and_then(|fb| fb.letters().get(j).copied());
                    Span::styled(format!(" {letter} "), tile_style(kind))
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(board, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let state = app.game.state();
    let Some(text) = state.status_line() else {
        return;
    };

    let color = if state == GameState::Won {
        Color::Green
    } else {
        Color::Red
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(status, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    if let Some(ref msg) = app.message {
        let style = match msg.style {
            MessageStyle::Info => Style::default().fg(Color::White),
            MessageStyle::Error => Style::default().fg(Color::Red),
        };
        let message = Paragraph::new(msg.text.as_str())
            .style(style)
            .alignment(Alignment::Center);
        f.render_widget(message, area);
    }
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.game.state().is_terminal() {
        format!("{}: Quit", app.game.dismiss_key())
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit".to_string()
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
