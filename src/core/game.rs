//! Game controller
//!
//! Owns the target word and the board, interprets one [`Input`] at a time and
//! carries the outcome as an explicit [`GameState`].
//!
//! ```text
//! Playing --submit(row == target)-------------> Won
//! Playing --submit(row != target, row == 5)---> Lost
//! Playing --submit(row != target, row < 5)----> Playing (next row)
//! ```

use super::board::{Board, LAST_ROW};
use super::feedback::Feedback;
use super::word::Word;
use log::{debug, info};

/// Key that ends the program once the game is over
pub const DEFAULT_DISMISS_KEY: char = 'q';

/// Outcome of the game so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameState {
    /// `Won` and `Lost` never change again
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Trailing line shown under the board
    #[must_use]
    pub const fn status_line(self) -> Option<&'static str> {
        match self {
            Self::Playing => None,
            Self::Won => Some("You win!"),
            Self::Lost => Some("Game over!"),
        }
    }
}

/// Decide the state after submitting `row` as guess number `row_index`
///
/// The win check runs first, so a correct guess on the final row wins.
///
/// # Examples
/// ```
/// use skole_wordle::core::{GameState, Word, next_state};
///
/// let target = Word::new("skole").unwrap();
/// assert_eq!(next_state("SKOLE", 5, &target), GameState::Won);
/// assert_eq!(next_state("CRANE", 5, &target), GameState::Lost);
/// assert_eq!(next_state("CRANE", 2, &target), GameState::Playing);
/// ```
#[must_use]
pub fn next_state(row: &str, row_index: usize, target: &Word) -> GameState {
    if target.matches(row) {
        GameState::Won
    } else if row_index >= LAST_ROW {
        GameState::Lost
    } else {
        GameState::Playing
    }
}

/// A discrete input delivered by a front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A printable key
    Letter(char),
    Backspace,
    Submit,
    /// Ctrl-C / Esc: leave immediately in any state
    Quit,
}

/// What the front end should do after an input was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// A single game against a fixed target
#[derive(Debug, Clone)]
pub struct Game {
    target: Word,
    board: Board,
    state: GameState,
    dismiss_key: char,
}

impl Game {
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self::with_dismiss_key(target, DEFAULT_DISMISS_KEY)
    }

    #[must_use]
    pub fn with_dismiss_key(target: Word, dismiss_key: char) -> Self {
        Self {
            target,
            board: Board::new(),
            state: GameState::Playing,
            dismiss_key,
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[inline]
    #[must_use]
    pub const fn dismiss_key(&self) -> char {
        self.dismiss_key
    }

    /// Interpret one input
    ///
    /// While playing, letters fill the active row (uppercased, ASCII letters
    /// only), backspace removes one and submit runs the transition. After the
    /// game is over only the dismiss key and quit are honoured.
    pub fn handle(&mut self, input: Input) -> Control {
        debug!("input {input:?} in state {:?}", self.state);

        if input == Input::Quit {
            info!("quit requested");
            return Control::Exit;
        }

        if self.state.is_terminal() {
            return match input {
                Input::Letter(c) if c.eq_ignore_ascii_case(&self.dismiss_key) => {
                    info!("dismissed after {:?}", self.state);
                    Control::Exit
                }
                _ => Control::Continue,
            };
        }

        match input {
            Input::Letter(c) if c.is_ascii_alphabetic() => {
                self.board.append_letter(c.to_ascii_uppercase());
            }
            Input::Backspace => {
                self.board.remove_last_letter();
            }
            Input::Submit => {
                self.submit();
            }
            Input::Letter(_) | Input::Quit => {}
        }

        Control::Continue
    }

    /// Submit the active row and return the resulting state
    ///
    /// Rows shorter than five letters are not submitted. Once terminal the
    /// state is returned unchanged.
    pub fn submit(&mut self) -> GameState {
        if self.state.is_terminal() || !self.board.is_current_full() {
            return self.state;
        }

        let row = self.board.current_index();
        self.state = next_state(self.board.current_row(), row, &self.target);

        match self.state {
            GameState::Playing => {
                self.board.advance();
                debug!("row {row} submitted, now on row {}", row + 1);
            }
            GameState::Won => info!("won on row {row}"),
            GameState::Lost => info!("lost, target was {}", self.target),
        }

        self.state
    }

    /// Feedback for a finalized row, `None` for the active or later rows
    #[must_use]
    pub fn evaluate_row(&self, index: usize) -> Option<Feedback> {
        self.board
            .finalized_rows()
            .get(index)
            .map(|row| Feedback::calculate(row, &self.target))
    }

    /// Rows to draw: every finalized row plus the active one
    #[must_use]
    pub fn rows_to_render(&self) -> &[String] {
        &self.board.rows()[..=self.board.current_index()]
    }

    /// Emoji feedback for every finalized row, plus the winning row once won
    #[must_use]
    pub fn summary(&self) -> Vec<String> {
        let mut lines: Vec<String> = (0..self.board.current_index())
            .filter_map(|i| self.evaluate_row(i))
            .map(|f| f.to_emoji())
            .collect();

        if self.state.is_terminal() {
            lines.push(Feedback::calculate(self.board.current_row(), &self.target).to_emoji());
        }

        lines
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Word::default())
    }
}
