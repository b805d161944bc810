//! Plain-text board rendering
//!
//! Produces the full textual view of a game: greeting, one line per row up
//! to the active one, and the trailing status line.

use super::formatters::tile;
use crate::core::{Game, LetterFeedback};

/// Greeting shown above the board
pub const GREETING: [&str; 2] = ["Welcome to wordle game.", "Try to guess the right word!"];

/// Render one row; finalized rows are coloured, the active row is idle
#[must_use]
pub fn render_row(game: &Game, index: usize) -> String {
    let Some(row) = game.rows_to_render().get(index) else {
        return String::new();
    };
    let feedback = game.evaluate_row(index);

    row.chars()
        .enumerate()
        .map(|(i, letter)| {
            let kind: Option<LetterFeedback> =
                feedback.as_ref().and_then(|f| f.letters().get(i).copied());
            tile(letter, kind).to_string()
        })
        .collect()
}

/// Render the complete board as text
#[must_use]
pub fn render_board(game: &Game) -> String {
    let mut out = String::new();

    for line in GREETING {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');

    for index in 0..game.rows_to_render().len() {
        out.push_str(&render_row(game, index));
        out.push('\n');
    }

    if let Some(status) = game.state().status_line() {
        out.push_str(status);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Input;

    fn play(game: &mut Game, keys: &str) {
        for c in keys.chars() {
            let input = if c == '\n' {
                Input::Submit
            } else {
                Input::Letter(c)
            };
            game.handle(input);
        }
    }

    #[test]
    fn fresh_board_shows_greeting_and_empty_row() {
        colored::control::set_override(false);
        let game = Game::default();

        assert_eq!(
            render_board(&game),
            "Welcome to wordle game.\nTry to guess the right word!\n\n\n"
        );
    }

    #[test]
    fn rows_render_up_to_active_row() {
        colored::control::set_override(false);
        let mut game = Game::default();
        play(&mut game, "crane\nsk");

        let text = render_board(&game);
        assert!(text.ends_with(" C  R  A  N  E \n S  K \n"));
        assert!(!text.contains("You win!"));
    }

    #[test]
    fn status_line_after_win() {
        colored::control::set_override(false);
        let mut game = Game::default();
        play(&mut game, "skole\n");

        assert!(render_board(&game).ends_with(" S  K  O  L  E \nYou win!\n"));
    }

    #[test]
    fn status_line_after_loss() {
        colored::control::set_override(false);
        let mut game = Game::default();
        play(&mut game, &"crane\n".repeat(6));

        let text = render_board(&game);
        assert!(text.ends_with("Game over!\n"));
        assert_eq!(text.matches(" C  R  A  N  E ").count(), 6);
    }

    #[test]
    fn render_row_out_of_range_is_empty() {
        let game = Game::default();
        assert_eq!(render_row(&game, 3), "");
    }
}
