//! Per-turn drafts.

use crate::core::{EngineResult, Game, Turn};
use crate::grid::{apply_turn, Grid};

/// Cells implied by `turn` alone, without replaying the rest of the log.
///
/// Uses the same inference as a full replay, so merging every turn's draft
/// in order reproduces [`compute_full_grid`](crate::grid::compute_full_grid)
/// for a conflict-free log.
pub fn compute_draft(turn: &Turn, game: &Game) -> EngineResult<Grid> {
    let mut draft = Grid::new();
    apply_turn(&mut draft, turn, game)?;
    Ok(draft)
}
