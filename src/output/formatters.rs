//! Formatting utilities for terminal output

use crate::core::LetterFeedback;
use colored::{ColoredString, Colorize};

/// Tile foreground, shared by every style
pub const TILE_FG: (u8, u8, u8) = (0xFA, 0xFA, 0xFA);
/// Background for a letter in its correct position
pub const CORRECT_BG: (u8, u8, u8) = (0x53, 0x8D, 0x4E);
/// Background for a letter present elsewhere in the target
pub const PRESENT_BG: (u8, u8, u8) = (0xB5, 0x9F, 0x3B);
/// Background for a letter missing from the target
pub const ABSENT_BG: (u8, u8, u8) = (0x3A, 0x3A, 0x3C);

/// Background colour for a feedback category
#[must_use]
pub const fn feedback_background(feedback: LetterFeedback) -> (u8, u8, u8) {
    match feedback {
        LetterFeedback::Correct => CORRECT_BG,
        LetterFeedback::Present => PRESENT_BG,
        LetterFeedback::Absent => ABSENT_BG,
    }
}

/// Render one letter as a padded tile
///
/// `None` is the idle style used for the row still being typed.
#[must_use]
pub fn tile(letter: char, feedback: Option<LetterFeedback>) -> ColoredString {
    let (r, g, b) = TILE_FG;
    let text = format!(" {letter} ").truecolor(r, g, b).bold();

    match feedback {
        Some(kind) => {
            let (r, g, b) = feedback_background(kind);
            text.on_truecolor(r, g, b)
        }
        None => text,
    }
}
