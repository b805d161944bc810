//! Simple line-based mode
//!
//! Text-based game without the TUI: each line typed is one guess.

use crate::core::{Game, GameState, Input, WORD_LENGTH};
use crate::output::render_board;
use colored::Colorize;
use log::debug;
use std::io::{self, BufRead, Write};

/// Run the game reading one guess per line from `input`
///
/// The board is re-printed after every guess. Returns the final state, which
/// is still `Playing` if the player quit or input ran out.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    mut game: Game,
    mut input: R,
    mut output: W,
) -> io::Result<GameState> {
    write!(output, "{}", render_board(&game))?;
    writeln!(
        output,
        "Type a {WORD_LENGTH}-letter guess and press Enter ('quit' to exit)."
    )?;

    loop {
        let Some(line) = get_user_input(&mut input, &mut output, "Guess")? else {
            debug!("input closed");
            return Ok(game.state());
        };

        match line.to_lowercase().as_str() {
            "quit" | "exit" => {
                game.handle(Input::Quit);
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(game.state());
            }
            guess => {
                if guess.len() != WORD_LENGTH || !guess.chars().all(|c| c.is_ascii_alphabetic())
                {
                    writeln!(
                        output,
                        "{}",
                        format!("❌ Guess must be exactly {WORD_LENGTH} letters").red()
                    )?;
                    continue;
                }

                for c in guess.chars() {
                    game.handle(Input::Letter(c));
                }
                game.handle(Input::Submit);
            }
        }

        writeln!(output)?;
        write!(output, "{}", render_board(&game))?;

        if game.state().is_terminal() {
            if game.state() == GameState::Lost {
                writeln!(output, "The word was {}", game.target().text().bold())?;
            }
            writeln!(output)?;
            for line in game.summary() {
                writeln!(output, "  {line}")?;
            }
            return Ok(game.state());
        }
    }
}

/// Get user input with a prompt, `None` on end of input
fn get_user_input<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
