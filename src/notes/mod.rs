//! Manual annotations and the rendered note table.
//!
//! - `manual`: guarded toggling, disprover flagging, effective marks
//! - `table`: per-clue rows ready for display

pub mod manual;
pub mod table;

pub use manual::{effective_mark, flag_disproved_clues, toggle_manual_mark, ToggleOutcome};
pub use table::{NoteCell, NoteRow, NoteTable, CASE_FILE_LABEL};
