//! Cell marks.
//!
//! A cell of the knowledge grid is either empty (`None`) or holds a [`Mark`].
//! `Yes` and `No` are fixed facts produced by inference; `Flagged` is a soft
//! annotation the notebook owner toggles by hand.

use serde::{Deserialize, Serialize};

/// Glyph shown for an empty cell.
pub const EMPTY_GLYPH: &str = "⬜️";

/// Knowledge about one (clue, holder) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The holder has the clue (or, for the case file, the clue is the answer).
    #[serde(rename = "yes")]
    Yes,
    /// The holder does not have the clue.
    #[serde(rename = "no")]
    No,
    /// Suspected but unconfirmed.
    #[serde(rename = "?")]
    Flagged,
}

impl Mark {
    /// Check if this mark is a fixed fact (`Yes` or `No`).
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        matches!(self, Mark::Yes | Mark::No)
    }

    /// Display glyph for this mark.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Mark::Yes => "✅",
            Mark::No => "❌",
            Mark::Flagged => "❓",
        }
    }

    /// Next state of a manually toggled cell.
    ///
    /// Cycles `empty → flagged → yes → no → empty`.
    ///
    /// ```
    /// use cluedo_notes::core::Mark;
    ///
    /// assert_eq!(Mark::next_manual(None), Some(Mark::Flagged));
    /// assert_eq!(Mark::next_manual(Some(Mark::No)), None);
    /// ```
    #[must_use]
    pub const fn next_manual(current: Option<Mark>) -> Option<Mark> {
        match current {
            None => Some(Mark::Flagged),
            Some(Mark::Flagged) => Some(Mark::Yes),
            Some(Mark::Yes) => Some(Mark::No),
            Some(Mark::No) => None,
        }
    }
}

/// Display glyph for a possibly-empty cell.
#[must_use]
pub fn glyph_for(mark: Option<Mark>) -> &'static str {
    mark.map_or(EMPTY_GLYPH, Mark::glyph)
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}
