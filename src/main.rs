//! Skole Wordle - CLI
//!
//! Guess the five-letter word in six tries, in a TUI or line by line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use skole_wordle::{
    commands::run_simple,
    config::GameConfig,
    core::{DEFAULT_DISMISS_KEY, DEFAULT_TARGET, Game},
    interactive::{App, run_tui},
};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "skole_wordle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word to guess (5 letters)
    #[arg(short, long, global = true, default_value = DEFAULT_TARGET)]
    target: String,

    /// Key that leaves the game once it is won or lost
    #[arg(short, long, global = true, default_value_t = DEFAULT_DISMISS_KEY)]
    dismiss_key: char,

    /// Write debug logs to this file (stdout belongs to the game)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (one guess per line, no TUI)
    Simple,
}

fn init_logging(path: &Path) -> Result<()> {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let log_file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    WriteLogger::init(LevelFilter::Debug, log_config, log_file)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = GameConfig::from_args(&cli.target, cli.dismiss_key)
        .with_context(|| format!("invalid target word '{}'", cli.target))?;
    log::info!("starting with dismiss key {:?}", config.dismiss_key);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(config.new_game()),
        Commands::Simple => run_simple_command(config.new_game()),
    }
}

fn run_play_command(game: Game) -> Result<()> {
    let app = run_tui(App::new(game)).context("terminal error")?;

    // The alternate screen is gone; leave the result on the normal screen
    let game = &app.game;
    if let Some(status) = game.state().status_line() {
        println!("{status}");
        for line in game.summary() {
            println!("{line}");
        }
    }
    Ok(())
}

fn run_simple_command(game: Game) -> Result<()> {
    let stdin = io::stdin();
    run_simple(game, stdin.lock(), io::stdout())?;
    Ok(())
}
