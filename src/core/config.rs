//! Notebook configuration.
//!
//! The store is configured at startup with:
//! - the clue catalog (which clues exist and their categories)
//! - roster limits
//! - game id format and an optional RNG seed
//!
//! Configs deserialize from any serde format; missing fields take defaults.

use serde::{Deserialize, Serialize};

use super::clue::ClueCatalog;
use super::game::MIN_PLAYERS;

/// Default game id alphabet: no 0/O or 1/I look-alikes.
pub const DEFAULT_GAME_ID_ALPHABET: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Default game id length.
pub const DEFAULT_GAME_ID_LENGTH: usize = 6;

/// Configuration for a [`Notebook`](crate::store::Notebook).
///
/// ## Example
///
/// ```
/// use cluedo_notes::core::NotebookConfig;
///
/// let config = NotebookConfig::new().with_seed(42).with_min_players(3);
/// assert_eq!(config.min_players, 3);
/// assert_eq!(config.game_id_length, 6);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct NotebookConfig {
    /// Closed universe of clues.
    pub catalog: ClueCatalog,

    /// Smallest accepted roster. Never below two.
    pub min_players: usize,

    pub game_id_length: usize,

    pub game_id_alphabet: String,

    /// Fixed RNG seed for reproducible ids. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for NotebookConfig {
    fn default() -> Self {
        Self {
            catalog: ClueCatalog::classic(),
            min_players: MIN_PLAYERS,
            game_id_length: DEFAULT_GAME_ID_LENGTH,
            game_id_alphabet: DEFAULT_GAME_ID_ALPHABET.to_string(),
            seed: None,
        }
    }
}

impl NotebookConfig {
    /// Create a config with the classic catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: ClueCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Set the smallest accepted roster (clamped to at least two).
    #[must_use]
    pub fn with_min_players(mut self, min: usize) -> Self {
        self.min_players = min.max(MIN_PLAYERS);
        self
    }

    #[must_use]
    pub fn with_game_ids(mut self, alphabet: impl Into<String>, length: usize) -> Self {
        self.game_id_alphabet = alphabet.into();
        self.game_id_length = length;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NotebookConfig::default();
        assert_eq!(config.catalog.len(), 21);
        assert_eq!(config.min_players, 2);
        assert_eq!(config.game_id_alphabet, DEFAULT_GAME_ID_ALPHABET);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_min_players_clamped() {
        let config = NotebookConfig::new().with_min_players(1);
        assert_eq!(config.min_players, 2);
    }

    #[test]
    fn test_partial_config_deserializes() {
        let config: NotebookConfig =
            serde_json::from_str(r#"{"min_players": 4, "seed": 9}"#).unwrap();
        assert_eq!(config.min_players, 4);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.game_id_length, 6);
        assert_eq!(config.catalog.len(), 21);
    }
}
