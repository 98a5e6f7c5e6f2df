//! Engine errors.
//!
//! These signal malformed input: a turn or roster the caller should have
//! rejected at its own input layer. Logical contradictions between turns are
//! not errors; they are reported as conflicts by the draft merger.

use thiserror::Error;

use super::clue::ClueId;
use super::player::PlayerId;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Malformed-reference errors raised by the inference engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("cannot find player id {0}")]
    UnknownPlayer(PlayerId),

    #[error("cannot find disprove player id {0}")]
    UnknownDisprover(PlayerId),

    #[error("player {0} cannot disprove their own suggestion")]
    SelfDisproof(PlayerId),

    #[error("disproved clue {0} is not one of the suggested clues")]
    DisprovedClueNotSuggested(ClueId),

    // Roster errors
    #[error("a game needs at least {min} players, got {actual}")]
    TooFewPlayers { min: usize, actual: usize },

    #[error("player id {0} appears more than once")]
    DuplicatePlayer(PlayerId),

    #[error("player id {0} is reserved for the case file")]
    ReservedPlayerId(PlayerId),
}
