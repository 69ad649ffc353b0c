//! Per-entity action state machine
//!
//! Pairs activations with their completions, feeds counters into
//! [`MatchStatistics`](crate::stats::MatchStatistics), and emits exactly one
//! log record per handled event.

mod action;
mod state_machine;


pub use action::{ActionKind, Completion, PendingAction};
pub use state_machine::{ActionTracker, TrackerSinks};
