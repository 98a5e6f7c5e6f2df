//! Core types: players, clues, marks, turns, games, configuration.
//!
//! This module holds the plain data the engine reads. Nothing here performs
//! inference; see `grid` and `draft` for that.

pub mod player;
pub mod clue;
pub mod mark;
pub mod turn;
pub mod game;
pub mod config;
pub mod rng;
pub mod error;

pub use player::{Player, PlayerId, Rotation, CASE_FILE_ID};
pub use clue::{Category, ClueCatalog, ClueDefinition, ClueId, ClueSetError};
pub use mark::{glyph_for, Mark, EMPTY_GLYPH};
pub use turn::{ClueSet, Disproof, Turn, TurnId, TurnKind};
pub use game::{Game, GameId, MIN_PLAYERS};
pub use config::NotebookConfig;
pub use rng::IdGenerator;
pub use error::{EngineError, EngineResult};
