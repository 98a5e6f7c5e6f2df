//! Repository interface.
//!
//! The notebook service never touches global state: it is handed a
//! repository and works on snapshots loaded from it. Implementations decide
//! where games live (memory, files, browser storage behind FFI, ...).

use crate::core::{Game, GameId};

/// Persistence for games and the directory of known player names.
pub trait GameRepository {
    /// Load a snapshot of a game.
    fn load(&self, id: &GameId) -> Option<Game>;

    /// Insert or replace a game.
    fn save(&mut self, game: Game);

    /// Remove a game. Returns false if it did not exist.
    fn delete(&mut self, id: &GameId) -> bool;

    /// Ids of all stored games.
    fn ids(&self) -> Vec<GameId>;

    /// Player names seen in any game, in first-seen order.
    fn known_players(&self) -> Vec<String>;

    /// Add a name to the directory. Returns false if it was already known.
    fn remember_player(&mut self, name: &str) -> bool;

    // === Convenience Methods ===

    /// Check if a game exists.
    fn contains(&self, id: &GameId) -> bool {
        self.load(id).is_some()
    }

    /// Load every stored game.
    fn all(&self) -> Vec<Game> {
        self.ids().iter().filter_map(|id| self.load(id)).collect()
    }
}
