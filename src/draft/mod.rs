//! Draft and conflict resolver.
//!
//! Before a turn is committed, its draft (the cells it implies on its own)
//! is merged into the current grid. Any draft cell that contradicts a fixed
//! fact is a [`Conflict`]; a turn is admissible only when there are none.
//!
//! ```text
//! turn ──compute_draft──▶ draft ──merge_draft(grid)──▶ { grid', conflicts }
//! ```

pub mod compute;
pub mod merge;

pub use compute::compute_draft;
pub use merge::{describe_conflicts, merge_draft, Conflict, MergeOutcome};
