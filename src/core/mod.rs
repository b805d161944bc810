//! Core domain types for the game
//!
//! This module contains the board, the target word, feedback scoring and the
//! game state machine. Nothing here touches the terminal.

mod board;
mod feedback;
mod game;
mod word;

pub use board::{Board, LAST_ROW, MAX_ROWS};
pub use feedback::{Feedback, LetterFeedback};
pub use game::{Control, DEFAULT_DISMISS_KEY, Game, GameState, Input, next_state};
pub use word::{DEFAULT_TARGET, WORD_LENGTH, Word, WordError};
