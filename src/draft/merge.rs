//! Merging drafts into a grid.
//!
//! A merge never overwrites a fixed fact with a different value. Each such
//! attempt is recorded as a [`Conflict`] instead. Soft and empty cells are
//! always overwritten by the draft.

use serde::{Deserialize, Serialize};

use crate::core::{ClueId, Mark, PlayerId};
use crate::grid::Grid;

/// A draft cell contradicting an established fixed fact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub clue: ClueId,
    pub player: PlayerId,
    /// The fixed fact already in the grid.
    pub existing_value: Mark,
}

impl std::fmt::Display for Conflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.clue, self.player, self.existing_value.glyph())
    }
}

/// Result of [`merge_draft`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Full copy of the input grid with every non-conflicting draft cell applied.
    pub grid: Grid,
    pub conflicts: Vec<Conflict>,
}

impl MergeOutcome {
    /// Check if the drafted turn may be committed.
    #[must_use]
    pub fn is_admissible(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// Merge `draft` into a copy of `current`.
///
/// Neither input is mutated. Conflicts are listed in (clue, holder) order.
///
/// ## Example
///
/// ```
/// use cluedo_notes::core::Mark;
/// use cluedo_notes::draft::merge_draft;
/// use cluedo_notes::grid::Grid;
///
/// let mut current = Grid::new();
/// current.set("Rope".into(), "B".into(), Mark::No);
///
/// let mut draft = Grid::new();
/// draft.set("Rope".into(), "B".into(), Mark::Yes);
/// draft.set("Hall".into(), "B".into(), Mark::No);
///
/// let outcome = merge_draft(&current, &draft);
/// assert_eq!(outcome.conflicts.len(), 1);
/// assert_eq!(outcome.conflicts[0].to_string(), "Rope B ❌");
/// assert_eq!(outcome.grid.get(&"Rope".into(), &"B".into()), Some(Mark::No));
/// assert_eq!(outcome.grid.get(&"Hall".into(), &"B".into()), Some(Mark::No));
/// ```
#[must_use]
pub fn merge_draft(current: &Grid, draft: &Grid) -> MergeOutcome {
    let mut grid = current.clone();
    let mut conflicts = Vec::new();

    for (clue, player, mark) in draft.cells() {
        match current.get(clue, player) {
            Some(existing) if existing.is_fixed() && existing != mark => {
                conflicts.push(Conflict {
                    clue: clue.clone(),
                    player: player.clone(),
                    existing_value: existing,
                });
            }
            _ => grid.set(clue.clone(), player.clone(), mark),
        }
    }

    MergeOutcome { grid, conflicts }
}

/// Render conflicts for display: `Conflicts: [a], [b]`.
#[must_use]
pub fn describe_conflicts(conflicts: &[Conflict]) -> String {
    let parts: Vec<String> = conflicts.iter().map(|c| format!("[{c}]")).collect();
    format!("Conflicts: {}", parts.join(", "))
}
