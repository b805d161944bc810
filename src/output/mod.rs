//! Terminal output formatting
//!
//! Text rendering of the board for the line-based mode.

pub mod display;
pub mod formatters;

pub use display::{render_board, render_row};
