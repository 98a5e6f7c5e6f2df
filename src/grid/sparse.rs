//! Sparse clue × holder grid.
//!
//! The same type carries three things:
//! - the computed knowledge grid (only `Yes`/`No`)
//! - a draft (cells implied by a single turn)
//! - the manual-mark overlay (any mark)
//!
//! Backed by nested `im::OrdMap`s: cloning is O(1), and iteration order is
//! deterministic, which keeps conflict lists and serialized documents stable.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::core::{ClueId, Mark, PlayerId};

/// Marks of one clue row, keyed by holder.
pub type Row = OrdMap<PlayerId, Mark>;

/// Sparse mapping clue → holder → mark. Absent cells are empty.
///
/// ## Example
///
/// ```
/// use cluedo_notes::core::{Mark, PlayerId};
/// use cluedo_notes::grid::Grid;
///
/// let mut grid = Grid::new();
/// grid.set("Rope".into(), "Alice".into(), Mark::No);
///
/// assert_eq!(grid.get(&"Rope".into(), &"Alice".into()), Some(Mark::No));
/// assert_eq!(grid.get(&"Rope".into(), &PlayerId::case_file()), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: OrdMap<ClueId, Row>,
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark at a cell, if any.
    #[must_use]
    pub fn get(&self, clue: &ClueId, holder: &PlayerId) -> Option<Mark> {
        self.cells.get(clue).and_then(|row| row.get(holder)).copied()
    }

    /// Check if a cell holds a fixed fact.
    #[must_use]
    pub fn is_fixed(&self, clue: &ClueId, holder: &PlayerId) -> bool {
        self.get(clue, holder).is_some_and(Mark::is_fixed)
    }

    /// Write a cell, creating its row if needed.
    pub fn set(&mut self, clue: ClueId, holder: PlayerId, mark: Mark) {
        self.cells
            .entry(clue)
            .or_insert_with(OrdMap::new)
            .insert(holder, mark);
    }

    /// Write or clear a cell.
    pub fn put(&mut self, clue: ClueId, holder: PlayerId, mark: Option<Mark>) {
        match mark {
            Some(mark) => self.set(clue, holder, mark),
            None => {
                self.clear(&clue, &holder);
            }
        }
    }

    /// Empty a cell. Returns the previous mark.
    pub fn clear(&mut self, clue: &ClueId, holder: &PlayerId) -> Option<Mark> {
        let row = self.cells.get_mut(clue)?;
        let previous = row.remove(holder);
        if row.is_empty() {
            self.cells.remove(clue);
        }
        previous
    }

    /// Mark `clue` as held by `holder` and by nobody else among `holders`.
    pub fn mark_held_by<'a>(
        &mut self,
        clue: &ClueId,
        holder: &PlayerId,
        holders: impl IntoIterator<Item = &'a PlayerId>,
    ) {
        for other in holders {
            let mark = if other == holder { Mark::Yes } else { Mark::No };
            self.set(clue.clone(), other.clone(), mark);
        }
    }

    /// Row of a clue.
    #[must_use]
    pub fn row(&self, clue: &ClueId) -> Option<&Row> {
        self.cells.get(clue)
    }

    /// Iterate over all non-empty cells in (clue, holder) order.
    pub fn cells(&self) -> impl Iterator<Item = (&ClueId, &PlayerId, Mark)> {
        self.cells
            .iter()
            .flat_map(|(clue, row)| row.iter().map(move |(holder, mark)| (clue, holder, *mark)))
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.values().map(|row| row.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
