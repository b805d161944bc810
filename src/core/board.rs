//! Guess board
//!
//! Six rows of up to five letters and the index of the row being edited.
//! Rows before the active one are finalized guesses, rows after it are empty.

use super::word::WORD_LENGTH;

/// Number of guesses a player gets
pub const MAX_ROWS: usize = 6;

/// Index of the last row a player can submit
pub const LAST_ROW: usize = MAX_ROWS - 1;

/// The grid of guess rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [String; MAX_ROWS],
    current: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with the first row active
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: std::array::from_fn(|_| String::with_capacity(WORD_LENGTH)),
            current: 0,
        }
    }

    /// Append a letter to the active row
    ///
    /// Returns `false` and leaves the row untouched once it holds five letters.
    pub fn append_letter(&mut self, letter: char) -> bool {
        if self.is_current_full() {
            return false;
        }
        self.rows[self.current].push(letter);
        true
    }

    /// Remove the last letter of the active row
    ///
    /// Returns `false` if the row is already empty.
    pub fn remove_last_letter(&mut self) -> bool {
        self.rows[self.current].pop().is_some()
    }

    /// Letters typed into the active row so far
    #[inline]
    #[must_use]
    pub fn current_row(&self) -> &str {
        &self.rows[self.current]
    }

    /// Index of the active row (0-5)
    #[inline]
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    #[must_use]
    pub fn is_current_full(&self) -> bool {
        self.rows[self.current].len() >= WORD_LENGTH
    }

    /// All six rows, including the empty ones below the active row
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Rows strictly before the active one
    #[inline]
    #[must_use]
    pub fn finalized_rows(&self) -> &[String] {
        &self.rows[..self.current]
    }

    /// Move editing to the next row
    ///
    /// Returns `false` when the active row is already the last one.
    pub fn advance(&mut self) -> bool {
        if self.current < LAST_ROW {
            self.current += 1;
            true
        } else {
            false
        }
    }
}
