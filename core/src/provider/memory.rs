use std::collections::BTreeMap;
use std::sync::{Mutex, RwLock};

use hashbrown::HashMap;

use super::{AgentPosition, GameStateProvider, LiveStatus, SkillCatalog, SkillInfo, StatusNotifier};
use crate::stats::{EntityIdentity, Guild};
use crate::sync::{lock, read, write};
use crate::{EntityId, GuildId, SkillId};

// ─────────────────────────────────────────────────────────────────────────────
// MemoryProvider
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
struct WorldState {
    instance_time_ms: Option<u32>,
    positions: BTreeMap<EntityId, AgentPosition>,
    statuses: HashMap<EntityId, LiveStatus>,
    party: Vec<EntityIdentity>,
    guilds: HashMap<GuildId, Guild>,
}

/// In-memory game state, driven by replays and tests.
#[derive(Default)]
pub struct MemoryProvider {
    state: RwLock<WorldState>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_instance_time(&self, ms: Option<u32>) {
        write(&self.state).instance_time_ms = ms;
    }

    pub fn set_party(&self, party: Vec<EntityIdentity>) {
        write(&self.state).party = party;
    }

    pub fn insert_guild(&self, guild: Guild) {
        write(&self.state).guilds.insert(guild.guild_id, guild);
    }

    /// Place (or move) an agent, optionally replacing its live status.
    pub fn set_agent(&self, position: AgentPosition, status: Option<LiveStatus>) {
        let mut state = write(&self.state);
        if let Some(status) = status {
            state.statuses.insert(position.entity_id, status);
        }
        state.positions.insert(position.entity_id, position);
    }

    pub fn remove_agent(&self, entity_id: EntityId) {
        let mut state = write(&self.state);
        state.positions.remove(&entity_id);
        state.statuses.remove(&entity_id);
    }
}

impl GameStateProvider for MemoryProvider {
    fn instance_time_ms(&self) -> Option<u32> {
        read(&self.state).instance_time_ms
    }

    fn entities(&self) -> Vec<AgentPosition> {
        read(&self.state).positions.values().copied().collect()
    }

    fn party_members(&self) -> Vec<EntityIdentity> {
        read(&self.state).party.clone()
    }

    fn guild(&self, guild_id: GuildId) -> Option<Guild> {
        read(&self.state).guilds.get(&guild_id).cloned()
    }

    fn live_status(&self, entity_id: EntityId) -> Option<LiveStatus> {
        read(&self.state).statuses.get(&entity_id).copied()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// StaticSkillCatalog
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Clone)]
pub struct StaticSkillCatalog {
    skills: HashMap<SkillId, SkillInfo>,
}

impl StaticSkillCatalog {
    pub fn insert(&mut self, skill_id: SkillId, info: SkillInfo) {
        self.skills.insert(skill_id, info);
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl FromIterator<(SkillId, SkillInfo)> for StaticSkillCatalog {
    fn from_iter<I: IntoIterator<Item = (SkillId, SkillInfo)>>(iter: I) -> Self {
        Self {
            skills: iter.into_iter().collect(),
        }
    }
}

impl SkillCatalog for StaticSkillCatalog {
    fn skill_info(&self, skill_id: SkillId) -> Option<SkillInfo> {
        self.skills.get(&skill_id).copied()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RecordingNotifier
// ─────────────────────────────────────────────────────────────────────────────

/// Keeps every status line, for callers that print a transcript afterwards.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        lock(&self.messages).clone()
    }
}

impl StatusNotifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        tracing::debug!(target: "observer::status", "{message}");
        lock(&self.messages).push(message.to_string());
    }
}
