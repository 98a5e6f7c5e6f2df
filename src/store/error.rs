//! # Store Errors

use thiserror::Error;

use crate::core::{ClueId, ClueSetError, EngineError, GameId};
use crate::draft::{describe_conflicts, Conflict};

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Notebook store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("cannot find game {0}")]
    GameNotFound(GameId),

    #[error("initial clues of game {0} are not set")]
    InitialCluesPending(GameId),

    #[error("initial clues of game {0} are already set")]
    InitialCluesSet(GameId),

    #[error("game {0} is already solved")]
    GameSolved(GameId),

    #[error("players of game {0} cannot be reordered once play has started")]
    RosterLocked(GameId),

    #[error("player name is taken {0}")]
    DuplicatePlayerName(String),

    #[error("seat {0} does not exist")]
    NoSuchSeat(usize),

    // Turn admission
    #[error("{}", describe_conflicts(.0))]
    Conflicts(Vec<Conflict>),

    #[error("unknown clue {0}")]
    UnknownClue(ClueId),

    #[error("invalid clue set: {0}")]
    InvalidClues(#[from] ClueSetError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    // Persistence
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
