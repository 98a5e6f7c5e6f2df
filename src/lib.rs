//! # cluedo-notes
//!
//! Inference engine for a Clue/Cluedo detective notebook.
//!
//! The notebook owner records turns (suggestions, disproofs, accusations) and
//! the engine derives, for every clue and holder (each player plus the case
//! file), whether the holder certainly has the clue, certainly lacks it, or
//! is unknown.
//!
//! ## Design Principles
//!
//! 1. **Replay Is Truth**: The grid is a pure function of the game record.
//!    Nothing is cached; every read replays the turn log in timestamp order.
//!
//! 2. **One Transition**: Full replay and single-turn drafts share the same
//!    per-turn step, so appending a conflict-free turn and replaying agree.
//!
//! 3. **Conflicts Are Data**: Merging a draft reports contradictions with
//!    fixed facts instead of failing. The store decides what to do with them.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Grids and turn logs use `im-rs`, so game
//!   snapshots are O(1) clones and grids iterate in a stable order.
//!
//! - **Injected Storage**: `Notebook` works against a `GameRepository`; there
//!   is no global state.
//!
//! ## Modules
//!
//! - `core`: Players, clues, marks, turns, games, configuration, ids
//! - `grid`: Sparse knowledge grid and full replay
//! - `draft`: Single-turn drafts and conflict detection
//! - `notes`: Manual annotations and note tables
//! - `store`: Repository trait, JSON snapshots, the `Notebook` service

pub mod core;
pub mod grid;
pub mod draft;
pub mod notes;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    Category, ClueCatalog, ClueDefinition, ClueId,
    Player, PlayerId, CASE_FILE_ID,
    Mark, Disproof, Turn, TurnId, TurnKind,
    Game, GameId, NotebookConfig,
    EngineError, EngineResult,
};

pub use crate::grid::{compute_full_grid, Grid};

pub use crate::draft::{compute_draft, merge_draft, Conflict, MergeOutcome};

pub use crate::notes::{toggle_manual_mark, NoteTable, ToggleOutcome};

pub use crate::store::{
    GameRepository, MemoryRepository, Snapshot,
    Notebook, GameSummary, StoreError, StoreResult,
};
