//! Key event mapping
//!
//! Translates crossterm key events into game inputs.

use crate::core::Input;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

/// Map a key event to a game input
///
/// Only key presses are considered (Windows also reports releases).
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    debug!("key event: {:?} with modifiers {:?}", key.code, key.modifiers);
    match (key.modifiers, key.code) {
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => Some(Input::Quit),
        (_, KeyCode::Esc) => Some(Input::Quit),
        (_, KeyCode::Enter) => Some(Input::Submit),
        (_, KeyCode::Backspace | KeyCode::Delete) => Some(Input::Backspace),
        (m, KeyCode::Char(c)) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Some(Input::Letter(c))
        }
        _ => None,
    }
}
