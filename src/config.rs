//! Game configuration
//!
//! Collected from command-line flags in `main.rs`; nothing is read from the
//! environment or from disk.

use crate::core::{DEFAULT_DISMISS_KEY, Game, Word, WordError};

/// Settings for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub target: Word,
    pub dismiss_key: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target: Word::default(),
            dismiss_key: DEFAULT_DISMISS_KEY,
        }
    }
}

impl GameConfig {
    /// Build a config from raw flag values
    ///
    /// # Errors
    ///
    /// Returns `WordError` if `target` is not a 5-letter ASCII word.
    pub fn from_args(target: &str, dismiss_key: char) -> Result<Self, WordError> {
        Ok(Self {
            target: Word::new(target)?,
            dismiss_key,
        })
    }

    /// Start a fresh game with these settings
    #[must_use]
    pub fn new_game(&self) -> Game {
        Game::with_dismiss_key(self.target.clone(), self.dismiss_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DEFAULT_TARGET, GameState};

    #[test]
    fn default_config_plays_skole() {
        let config = GameConfig::default();
        assert_eq!(config.target.text(), DEFAULT_TARGET);
        assert_eq!(config.dismiss_key, 'q');
    }

    #[test]
    fn from_args_normalizes_target() {
        let config = GameConfig::from_args("crane", 'x').unwrap();
        assert_eq!(config.target.text(), "CRANE");

        let game = config.new_game();
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.dismiss_key(), 'x');
        assert_eq!(game.target().text(), "CRANE");
    }

    #[test]
    fn from_args_rejects_bad_target() {
        assert_eq!(
            GameConfig::from_args("cranes", 'q'),
            Err(WordError::InvalidLength(6))
        );
    }
}
