//! Renderable note table.
//!
//! One row per clue, one column per holder (case file first, then players in
//! seating order). Each cell carries the mark to display and whether it is a
//! fixed fact the owner can no longer toggle. A turn's draft can be
//! highlighted to show what that turn contributed.

use crate::core::{glyph_for, ClueDefinition, ClueId, Game, Mark, PlayerId};
use crate::grid::Grid;

use super::manual::effective_mark;

/// Header label of the case-file column.
pub const CASE_FILE_LABEL: &str = "Answer";

/// One displayed cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteCell {
    pub holder: PlayerId,
    pub mark: Option<Mark>,
    /// Computed by the engine; manual toggling is disabled.
    pub fixed: bool,
    pub highlighted: bool,
}

/// One clue row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteRow {
    pub clue: ClueId,
    pub label: String,
    pub cells: Vec<NoteCell>,
}

impl NoteRow {
    /// Check if this clue is known to be in the case file.
    #[must_use]
    pub fn is_answer(&self) -> bool {
        self.cells
            .iter()
            .any(|c| c.holder.is_case_file() && c.mark == Some(Mark::Yes))
    }

    /// Cell of one holder.
    #[must_use]
    pub fn cell(&self, holder: &PlayerId) -> Option<&NoteCell> {
        self.cells.iter().find(|c| &c.holder == holder)
    }
}

/// Note table for a game.
///
/// ## Example
///
/// ```
/// use chrono::Utc;
/// use cluedo_notes::core::{ClueCatalog, Game, GameId, Mark, Player};
/// use cluedo_notes::grid::compute_full_grid;
/// use cluedo_notes::notes::NoteTable;
///
/// let players = ["A", "B"].into_iter().map(Player::named).collect();
/// let mut game = Game::new(GameId::new("G"), players, Utc::now()).unwrap();
/// game.set_self_clues(vec!["Rope".into()]);
///
/// let grid = compute_full_grid(&game).unwrap();
/// let catalog = ClueCatalog::classic();
/// let table = NoteTable::build(&game, &grid, catalog.iter());
///
/// let rope = table.row(&"Rope".into()).unwrap();
/// assert_eq!(rope.cell(&"A".into()).unwrap().mark, Some(Mark::Yes));
/// assert!(rope.cell(&"A".into()).unwrap().fixed);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteTable {
    /// Column headers, case file first.
    pub columns: Vec<String>,
    pub rows: Vec<NoteRow>,
}

impl NoteTable {
    /// Build the table for the given clues, in the given order.
    pub fn build<'a>(
        game: &Game,
        grid: &Grid,
        clues: impl IntoIterator<Item = &'a ClueDefinition>,
    ) -> Self {
        let holders: Vec<PlayerId> = game.holders().collect();
        let columns = std::iter::once(CASE_FILE_LABEL.to_string())
            .chain(game.players().iter().map(|p| p.name.clone()))
            .collect();

        let manual = game.manual_marks();
        let rows = clues
            .into_iter()
            .map(|def| NoteRow {
                clue: def.id.clone(),
                label: def.short.clone(),
                cells: holders
                    .iter()
                    .map(|holder| NoteCell {
                        holder: holder.clone(),
                        mark: effective_mark(grid, manual, &def.id, holder),
                        fixed: grid.is_fixed(&def.id, holder),
                        highlighted: false,
                    })
                    .collect(),
            })
            .collect();

        Self { columns, rows }
    }

    /// Highlight every cell a draft touches.
    #[must_use]
    pub fn with_highlight(mut self, draft: &Grid) -> Self {
        for row in &mut self.rows {
            for cell in &mut row.cells {
                cell.highlighted = draft.get(&row.clue, &cell.holder).is_some();
            }
        }
        self
    }

    /// Row of one clue.
    #[must_use]
    pub fn row(&self, clue: &ClueId) -> Option<&NoteRow> {
        self.rows.iter().find(|r| &r.clue == clue)
    }

    /// Clues known to be in the case file.
    pub fn answers(&self) -> impl Iterator<Item = &ClueId> {
        self.rows.iter().filter(|r| r.is_answer()).map(|r| &r.clue)
    }
}

impl std::fmt::Display for NoteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0);

        write!(f, "{:width$}", "")?;
        for column in &self.columns {
            write!(f, " {column}")?;
        }
        writeln!(f)?;

        for row in &self.rows {
            write!(f, "{:<width$}", row.label)?;
            for cell in &row.cells {
                let glyph = glyph_for(cell.mark);
                if cell.highlighted {
                    write!(f, " *{glyph}")?;
                } else {
                    write!(f, " {glyph}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
