//! TUI application state and event loop

use super::events::map_key;
use crate::core::{Control, Game, GameState, Input};
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
#[derive(Debug, Clone)]
pub struct App {
    pub game: Game,
    pub message: Option<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Error,
}

impl App {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            message: None,
            should_quit: false,
        }
    }

    /// Feed one input to the game and update UI-only state
    pub fn handle_input(&mut self, input: Input) {
        let short_submit = input == Input::Submit
            && self.game.state() == GameState::Playing
            && !self.game.board().is_current_full();

        if self.game.handle(input) == Control::Exit {
            self.should_quit = true;
            return;
        }

        self.message = None;
        if short_submit {
            self.set_message("Not enough letters", MessageStyle::Error);
        } else if self.game.state() == GameState::Lost {
            let text = format!("The word was {}", self.game.target());
            self.set_message(&text, MessageStyle::Info);
        }
    }

    pub fn set_message(&mut self, text: &str, style: MessageStyle) {
        self.message = Some(Message {
            text: text.to_string(),
            style,
        });
    }
}

/// Run the TUI application
///
/// Returns the app as it was when the player left, so the caller can print a
/// summary after the terminal is restored.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<App> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Draw, wait for an event, apply it; repeat until the player leaves
///
/// # Errors
///
/// Returns an error if drawing fails or `next_event` reports one.
pub fn run_app<B, F>(terminal: &mut Terminal<B>, mut app: App, mut next_event: F) -> Result<App>
where
    B: ratatui::backend::Backend,
    F: FnMut() -> io::Result<Event>,
{
    info!("game started");

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()?
            && let Some(input) = map_key(key)
        {
            app.handle_input(input);
        }

        if app.should_quit {
            break;
        }
    }

    info!("leaving in state {:?}", app.game.state());
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn keys(script: &str) -> Vec<Event> {
        script
            .chars()
            .map(|c| {
                let code = match c {
                    '\n' => KeyCode::Enter,
                    '<' => KeyCode::Backspace,
                    '~' => KeyCode::Esc,
                    c => KeyCode::Char(c),
                };
                Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
            })
            .collect()
    }

    fn drive(events: Vec<Event>) -> Result<App> {
        let mut terminal = Terminal::new(TestBackend::new(40, 16))?;
        let mut events = events.into_iter();
        run_app(&mut terminal, App::new(Game::default()), move || {
            events
                .next()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more events"))
        })
    }

    #[test]
    fn win_then_dismiss() {
        let app = drive(keys("skole\nxq")).unwrap();

        assert!(app.should_quit);
        assert_eq!(app.game.state(), GameState::Won);
        assert_eq!(app.game.board().current_row(), "SKOLE");
    }

    #[test]
    fn q_while_playing_is_a_letter() {
        let app = drive(keys("q<skole\nq")).unwrap();
        assert_eq!(app.game.state(), GameState::Won);
    }

    #[test]
    fn escape_quits_mid_game() {
        let app = drive(keys("cra~")).unwrap();

        assert!(app.should_quit);
        assert_eq!(app.game.state(), GameState::Playing);
        assert_eq!(app.game.board().current_row(), "CRA");
    }

    #[test]
    fn lose_then_dismiss() {
        let app = drive(keys(&format!("{}q", "crane\n".repeat(6)))).unwrap();

        assert_eq!(app.game.state(), GameState::Lost);
        assert_eq!(
            app.message.as_ref().map(|m| m.text.as_str()),
            Some("The word was SKOLE")
        );
    }

    #[test]
    fn non_key_events_are_skipped() {
        let mut events = vec![Event::FocusGained, Event::Resize(40, 16)];
        events.extend(keys("~"));

        assert!(drive(events).unwrap().should_quit);
    }

    #[test]
    fn event_source_error_is_propagated() {
        assert!(drive(keys("sko")).is_err());
    }

    #[test]
    fn short_submit_sets_message() {
        let mut app = App::new(Game::default());
        for c in "sko".chars() {
            app.handle_input(Input::Letter(c));
        }
        app.handle_input(Input::Submit);

        assert_eq!(
            app.message,
            Some(Message {
                text: "Not enough letters".to_string(),
                style: MessageStyle::Error,
            })
        );

        app.handle_input(Input::Letter('l'));
        assert!(app.message.is_none());
    }
}
