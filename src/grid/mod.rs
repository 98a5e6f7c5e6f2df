//! Knowledge grid and the mark engine.
//!
//! - `Grid`: sparse clue × holder → mark mapping
//! - `compute_full_grid`: full replay of a game's log

pub mod sparse;
pub mod engine;

pub use sparse::{Grid, Row};
pub use engine::{compute_full_grid, seed_grid};
pub(crate) use engine::apply_turn;
