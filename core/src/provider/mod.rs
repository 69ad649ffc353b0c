//! Collaborators the observer polls or reports to
//!
//! The observer never reads game memory itself. Roster, positions and live
//! status come from a [`GameStateProvider`], skill metadata from a
//! [`SkillCatalog`], and user-facing messages go out through a
//! [`StatusNotifier`].

mod memory;

pub use memory::{MemoryProvider, RecordingNotifier, StaticSkillCatalog};

use serde::{Deserialize, Serialize};

use crate::stats::{EntityIdentity, Guild};
use crate::{EntityId, GuildId, SkillId};

// ─────────────────────────────────────────────────────────────────────────────
// Game State
// ─────────────────────────────────────────────────────────────────────────────

/// Where an entity stands and faces, as read once per sampling tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentPosition {
    pub entity_id: EntityId,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
    #[serde(default)]
    pub rotation: f32,
    #[serde(default)]
    pub weapon_id: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionFlags {
    pub has_condition: bool,
    pub deep_wound: bool,
    pub bleeding: bool,
    pub crippled: bool,
    pub blind: bool,
    pub poison: bool,
    pub hexed: bool,
    pub degen_hexed: bool,
}

impl ConditionFlags {
    pub const fn as_array(&self) -> [bool; 8] {
        [
            self.has_condition,
            self.deep_wound,
            self.bleeding,
            self.crippled,
            self.blind,
            self.poison,
            self.hexed,
            self.degen_hexed,
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuffFlags {
    pub enchanted: bool,
    pub weapon_spelled: bool,
}

/// Status flags of one living agent at the moment it was read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveStatus {
    pub is_alive: bool,
    pub is_dead: bool,
    /// 0.0 ..= 1.0
    pub health_pct: f32,
    pub is_knocked: bool,
    pub max_hp: u32,
    pub conditions: ConditionFlags,
    pub buffs: BuffFlags,
    pub is_holding: bool,
    pub is_casting: bool,
    /// Skill currently being cast, 0 when idle
    pub skill_id: SkillId,
}

impl Default for LiveStatus {
    fn default() -> Self {
        Self {
            is_alive: true,
            is_dead: false,
            health_pct: 1.0,
            is_knocked: false,
            max_hp: 0,
            conditions: ConditionFlags::default(),
            buffs: BuffFlags::default(),
            is_holding: false,
            is_casting: false,
            skill_id: 0,
        }
    }
}

/// Read-only view of the running game, polled by the sampling thread.
pub trait GameStateProvider: Send + Sync {
    /// Milliseconds since the current instance loaded. `None` while no
    /// instance is loaded.
    fn instance_time_ms(&self) -> Option<u32>;

    /// Every agent currently known to the client.
    fn entities(&self) -> Vec<AgentPosition>;

    /// Party composition: one identity per member of either team.
    fn party_members(&self) -> Vec<EntityIdentity>;

    fn guild(&self, guild_id: GuildId) -> Option<Guild>;

    fn live_status(&self, entity_id: EntityId) -> Option<LiveStatus>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Skills
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillInfo {
    pub profession: u8,
    /// Type category (hex, spell, stance, ...) as numbered by the game
    pub skill_type: u8,
    #[serde(default)]
    pub is_elite: bool,
}

impl SkillInfo {
    /// Placeholder for ids the catalog does not know.
    pub const UNKNOWN: SkillInfo = SkillInfo::new(0, u8::MAX, false);

    pub const fn new(profession: u8, skill_type: u8, is_elite: bool) -> Self {
        Self {
            profession,
            skill_type,
            is_elite,
        }
    }
}

pub trait SkillCatalog: Send + Sync {
    fn skill_info(&self, skill_id: SkillId) -> Option<SkillInfo>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Status
// ─────────────────────────────────────────────────────────────────────────────

/// Receives one human-readable line per user-visible operation.
pub trait StatusNotifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Forwards status lines to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl StatusNotifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(target: "observer::status", "{message}");
    }
}
