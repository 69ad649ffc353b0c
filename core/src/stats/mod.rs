//! Match-wide statistics
//!
//! [`MatchStatistics`] is the session-scoped aggregate: the entity roster with
//! its cumulative combat counters, the guild directory, and per-team damage.
//! It is shared between the event thread and the sampling thread.

pub mod build_template;
mod counters;
mod entity;
mod guild;
pub mod skill_order;
mod statistics;

#[cfg(test)]
mod statistics_tests;

pub use counters::{CombatCounters, Counter};
pub use entity::{EncodedText, EntityIdentity, EntityRecord, EntityRole, profession_acronym};
pub use guild::{CapeDesign, Guild};
pub use statistics::MatchStatistics;

use crate::TeamId;

/// The other side of a two-team match. Team ids other than 1 and 2 have no
/// opponent.
pub const fn opposing_team(team_id: TeamId) -> Option<TeamId> {
    match team_id {
        1 => Some(2),
        2 => Some(1),
        _ => None,
    }
}
