//! Target word representation
//!
//! A Word stores a 5-letter uppercase word along with a letter index for
//! membership checks during feedback evaluation.

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every word and every finalized row
pub const WORD_LENGTH: usize = 5;

/// The word the reference game is played against
pub const DEFAULT_TARGET: &str = "SKOLE";

/// A 5-letter word with letter position tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
    char_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use skole_wordle::core::Word;
    ///
    /// let word = Word::new("skole").unwrap();
    /// assert_eq!(word.text(), "SKOLE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sk0le").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_uppercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_uppercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self::from_letters(text, chars))
    }

    fn from_letters(text: String, chars: [u8; WORD_LENGTH]) -> Self {
        // Build position map for fast lookup
        let mut char_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Self {
            text,
            chars,
            char_positions,
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Check whether a row of typed letters spells this word
    #[inline]
    #[must_use]
    pub fn matches(&self, row: &str) -> bool {
        self.text == row
    }
}

impl Default for Word {
    fn default() -> Self {
        Self::from_letters(DEFAULT_TARGET.to_string(), *b"SKOLE")
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
