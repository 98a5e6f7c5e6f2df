//! Manual marks layered over the computed grid.
//!
//! The notebook owner may annotate any cell the engine has not fixed. Once
//! inference produces `Yes` or `No` for a cell, manual toggling is blocked
//! and the fixed fact is what gets displayed.

use crate::core::{ClueId, Mark, PlayerId};
use crate::grid::Grid;

/// Result of a manual toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The overlay cell moved one step along the cycle.
    Changed { from: Option<Mark>, to: Option<Mark> },
    /// The cell is a fixed fact; nothing changed.
    Blocked(Mark),
}

/// Toggle a manual mark unless the engine has fixed the cell.
///
/// Cycles `empty → flagged → yes → no → empty`.
///
/// ```
/// use cluedo_notes::core::Mark;
/// use cluedo_notes::grid::Grid;
/// use cluedo_notes::notes::{toggle_manual_mark, ToggleOutcome};
///
/// let mut fixed = Grid::new();
/// fixed.set("Rope".into(), "A".into(), Mark::No);
/// let mut manual = Grid::new();
///
/// let outcome = toggle_manual_mark(&mut manual, &fixed, &"Rope".into(), &"A".into());
/// assert_eq!(outcome, ToggleOutcome::Blocked(Mark::No));
/// assert!(manual.is_empty());
/// ```
pub fn toggle_manual_mark(
    manual: &mut Grid,
    fixed: &Grid,
    clue: &ClueId,
    player: &PlayerId,
) -> ToggleOutcome {
    if let Some(mark) = fixed.get(clue, player).filter(|m| m.is_fixed()) {
        return ToggleOutcome::Blocked(mark);
    }

    let from = manual.get(clue, player);
    let to = Mark::next_manual(from);
    manual.put(clue.clone(), player.clone(), to);
    ToggleOutcome::Changed { from, to }
}

/// Flag the disprover's cells for the suggested clues.
///
/// Only cells that are neither fixed nor already annotated are touched.
/// Returns the number of cells flagged.
pub fn flag_disproved_clues(
    manual: &mut Grid,
    fixed: &Grid,
    disprover: &PlayerId,
    clues: &[ClueId],
) -> usize {
    let mut flagged = 0;
    for clue in clues {
        if fixed.get(clue, disprover).is_some() || manual.get(clue, disprover).is_some() {
            continue;
        }
        manual.set(clue.clone(), disprover.clone(), Mark::Flagged);
        flagged += 1;
    }
    flagged
}

/// The mark a cell displays: the computed fact if any, else the annotation.
#[must_use]
pub fn effective_mark(
    fixed: &Grid,
    manual: &Grid,
    clue: &ClueId,
    player: &PlayerId,
) -> Option<Mark> {
    fixed.get(clue, player).or_else(|| manual.get(clue, player))
}
