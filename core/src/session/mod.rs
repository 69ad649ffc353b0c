//! Observer session lifecycle
//!
//! [`MatchSessionController`] owns one session's state and drives the other
//! components: entering observer mode resets and starts everything, leaving it
//! stops sampling and (optionally) exports.

mod controller;
mod match_info;
mod naming;

#[cfg(test)]
mod controller_tests;

pub use controller::{MatchSessionController, SessionTransition};
pub use match_info::MatchInfo;
pub use naming::default_export_name;
