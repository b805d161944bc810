//! Skole Wordle
//!
//! A terminal word-guessing game: six tries to find a fixed five-letter word.
//!
//! # Quick Start
//!
//! ```rust
//! use skole_wordle::core::{Game, GameState, Input};
//!
//! let mut game = Game::default();
//! for c in "skole".chars() {
//!     game.handle(Input::Letter(c));
//! }
//! game.handle(Input::Submit);
//! assert_eq!(game.state(), GameState::Won);
//! ```

// Core domain types
pub mod core;

// Game settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
