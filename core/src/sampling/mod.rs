//! Periodic world-state sampling
//!
//! A background thread polls the game-state provider at a fixed cadence,
//! refreshes the roster, and appends a snapshot per entity whenever it moved
//! far enough or any status field changed.

mod sampler;
mod snapshot;
mod store;


pub use sampler::{SamplingLoop, TickReport};
pub use snapshot::{EntityStatus, Position, WorldStateSnapshot};
pub use store::{RecordOutcome, SnapshotStore};
