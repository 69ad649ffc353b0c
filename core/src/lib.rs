//! Observer-mode match telemetry
//!
//! Turns the game client's server-to-client notifications into a structured
//! match record: per-entity combat counters, a categorized event log, periodic
//! world-state samples, and a compressed export bundle written when the match
//! ends.

pub mod capture;
pub mod context;
pub mod export;
pub mod packets;
pub mod provider;
pub mod sampling;
pub mod session;
pub mod stats;
pub mod timing;
pub mod tracker;

mod sync;

/// Game-assigned numeric identity of any agent in the instance.
pub type EntityId = u32;
/// Party / team identifier (1 or 2 in a two-team match, 0 when unknown).
pub type TeamId = u32;
pub type SkillId = u32;
pub type GuildId = u16;

// Re-exports for convenience
pub use capture::{CaptureLog, LiveFeed, LiveLine, LogCategory, LogEntry, LogRecord};
pub use context::{ConfigError, ObserverConfig, ObserverConfigExt};
pub use export::{ArtifactOutcome, ArtifactStatus, ExportCodec, ExportError, ExportReport};
pub use packets::{DamageKind, EventDispatcher, Milestone, MilestoneKind, ObservedEvent, RawNotification};
pub use provider::{
    AgentPosition, GameStateProvider, LiveStatus, SkillCatalog, SkillInfo, StatusNotifier,
    TracingNotifier,
};
pub use sampling::{SamplingLoop, SnapshotStore, WorldStateSnapshot};
pub use session::{MatchInfo, MatchSessionController, SessionTransition};
pub use stats::{
    CombatCounters, Counter, EncodedText, EntityIdentity, EntityRecord, EntityRole, Guild,
    MatchStatistics,
};
pub use tracker::{ActionKind, ActionTracker, Completion, PendingAction};
