//! Interactive TUI built on ratatui and crossterm

pub mod app;
pub mod events;
pub mod rendering;

pub use app::{App, run_app, run_tui};
