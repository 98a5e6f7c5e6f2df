//! Persistence and the notebook service.
//!
//! - `repository`: storage trait for games and known player names
//! - `memory`: hash-map backed repository
//! - `snapshot`: JSON documents of repository contents
//! - `service`: `Notebook`, the validated entry point for every mutation

pub mod error;
pub mod repository;
pub mod memory;
pub mod snapshot;
pub mod service;

pub use error::{StoreError, StoreResult};
pub use repository::GameRepository;
pub use memory::MemoryRepository;
pub use snapshot::Snapshot;
pub use service::{GameSummary, Notebook};
