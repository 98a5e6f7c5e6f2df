//! In-memory repository.

use rustc_hash::FxHashMap;

use super::repository::GameRepository;
use crate::core::{Game, GameId};

/// Repository backed by a hash map.
///
/// Loads are cheap: the turn log and mark grids inside a `Game` are
/// persistent structures, so a snapshot clone shares their storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryRepository {
    games: FxHashMap<GameId, Game>,
    players: Vec<String>,
}

impl MemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl GameRepository for MemoryRepository {
    fn load(&self, id: &GameId) -> Option<Game> {
        self.games.get(id).cloned()
    }

    fn save(&mut self, game: Game) {
        self.games.insert(game.id.clone(), game);
    }

    fn delete(&mut self, id: &GameId) -> bool {
        self.games.remove(id).is_some()
    }

    fn ids(&self) -> Vec<GameId> {
        let mut ids: Vec<GameId> = self.games.keys().cloned().collect();
        ids.sort();
        ids
    }

    fn known_players(&self) -> Vec<String> {
        self.players.clone()
    }

    fn remember_player(&mut self, name: &str) -> bool {
        if self.players.iter().any(|p| p == name) {
            return false;
        }
        self.players.push(name.to_string());
        true
    }

    fn contains(&self, id: &GameId) -> bool {
        self.games.contains_key(id)
    }
}
