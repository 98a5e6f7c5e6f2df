//! JSON snapshots of repository contents.
//!
//! A snapshot holds every game plus the known-player directory, as nested
//! key-value documents. Restoring validates each game's roster.

use serde::{Deserialize, Serialize};

use super::error::StoreResult;
use super::repository::GameRepository;
use crate::core::Game;

/// Serializable repository contents.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub games: Vec<Game>,
    pub players: Vec<String>,
}

impl Snapshot {
    /// Capture a repository.
    pub fn capture<R: GameRepository + ?Sized>(repo: &R) -> Self {
        Self {
            games: repo.all(),
            players: repo.known_players(),
        }
    }

    /// Write every game and player name into a repository.
    pub fn restore_into<R: GameRepository + ?Sized>(self, repo: &mut R) -> StoreResult<()> {
        for game in &self.games {
            game.validate()?;
        }
        for name in &self.players {
            repo.remember_player(name);
        }
        for game in self.games {
            repo.save(game);
        }
        Ok(())
    }

    pub fn to_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
