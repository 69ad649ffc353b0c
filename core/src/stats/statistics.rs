use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use hashbrown::HashMap;

use super::{CombatCounters, Counter, EntityIdentity, EntityRecord, Guild, build_template, skill_order};
use crate::provider::SkillCatalog;
use crate::sync::{read, write};
use crate::{EntityId, GuildId, SkillId, TeamId};

/// Thread-safe aggregate of everything counted during one observed match.
///
/// The entity roster, guild directory and team damage live behind three
/// separate locks. No method holds more than one of them at a time, and every
/// read hands out copies.
pub struct MatchStatistics {
    entities: RwLock<HashMap<EntityId, EntityRecord>>,
    guilds: RwLock<HashMap<GuildId, Guild>>,
    team_damage: RwLock<HashMap<TeamId, i64>>,
    catalog: Arc<dyn SkillCatalog>,
}

impl MatchStatistics {
    pub fn new(catalog: Arc<dyn SkillCatalog>) -> Self {
        Self {
            entities: RwLock::new(HashMap::new()),
            guilds: RwLock::new(HashMap::new()),
            team_damage: RwLock::new(HashMap::new()),
            catalog,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Entity roster
    // ─────────────────────────────────────────────────────────────────────────

    /// Insert a new roster row, or replace the identity of an existing one
    /// while keeping its counters and skill usage untouched.
    pub fn upsert_identity(&self, identity: EntityIdentity) {
        let mut entities = write(&self.entities);
        match entities.get_mut(&identity.entity_id) {
            Some(record) => {
                if record.identity.primary != identity.primary
                    || record.identity.secondary != identity.secondary
                {
                    record.build_template =
                        build_template::encode(identity.primary, identity.secondary, &record.used_skills);
                }
                record.identity = identity;
            }
            None => {
                let build_template = build_template::encode(identity.primary, identity.secondary, &[]);
                entities.insert(
                    identity.entity_id,
                    EntityRecord {
                        identity,
                        counters: CombatCounters::default(),
                        used_skills: Vec::new(),
                        build_template,
                    },
                );
            }
        }
    }

    /// Bump one counter. Returns false (and does nothing) for entities not on
    /// the roster.
    pub fn increment(&self, entity_id: EntityId, counter: Counter) -> bool {
        let mut entities = write(&self.entities);
        let Some(record) = entities.get_mut(&entity_id) else {
            return false;
        };
        record.counters.increment(counter);
        true
    }

    pub fn add_damage(&self, entity_id: EntityId, delta: i64) -> bool {
        let mut entities = write(&self.entities);
        let Some(record) = entities.get_mut(&entity_id) else {
            return false;
        };
        record.counters.add_damage(delta);
        true
    }

    /// Record a skill as used and re-sort the entity's skill list. Skill id 0
    /// is the basic-attack sentinel and never recorded.
    pub fn add_skill_used(&self, entity_id: EntityId, skill_id: SkillId) -> bool {
        if skill_id == 0 {
            return false;
        }
        let mut entities = write(&self.entities);
        let Some(record) = entities.get_mut(&entity_id) else {
            return false;
        };
        if record.used_skills.contains(&skill_id) {
            return true;
        }
        record.used_skills.push(skill_id);

        let (primary, secondary) = (record.identity.primary, record.identity.secondary);
        skill_order::order_skills(&mut record.used_skills, primary, secondary, self.catalog.as_ref());
        record.build_template = build_template::encode(primary, secondary, &record.used_skills);
        true
    }

    pub fn identity(&self, entity_id: EntityId) -> Option<EntityIdentity> {
        read(&self.entities).get(&entity_id).map(|r| r.identity.clone())
    }

    pub fn entity(&self, entity_id: EntityId) -> Option<EntityRecord> {
        read(&self.entities).get(&entity_id).cloned()
    }

    pub fn entity_count(&self) -> usize {
        read(&self.entities).len()
    }

    /// Deep copy of the roster, ordered by entity id.
    pub fn snapshot_entities(&self) -> BTreeMap<EntityId, EntityRecord> {
        read(&self.entities)
            .iter()
            .map(|(id, record)| (*id, record.clone()))
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Guild directory
    // ─────────────────────────────────────────────────────────────────────────

    pub fn has_guild(&self, guild_id: GuildId) -> bool {
        read(&self.guilds).contains_key(&guild_id)
    }

    /// Cache a resolved guild. The first resolution wins for the session.
    pub fn insert_guild(&self, guild: Guild) -> bool {
        let mut guilds = write(&self.guilds);
        if guilds.contains_key(&guild.guild_id) {
            return false;
        }
        guilds.insert(guild.guild_id, guild);
        true
    }

    pub fn snapshot_guilds(&self) -> BTreeMap<GuildId, Guild> {
        read(&self.guilds)
            .iter()
            .map(|(id, guild)| (*id, guild.clone()))
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Team damage
    // ─────────────────────────────────────────────────────────────────────────

    /// Accumulate a signed delta for a team, flooring the total at zero.
    pub fn add_team_damage(&self, team_id: TeamId, delta: i64) {
        let mut totals = write(&self.team_damage);
        let total = totals.entry(team_id).or_insert(0);
        *total = total.saturating_add(delta).max(0);
    }

    pub fn team_damage(&self, team_id: TeamId) -> i64 {
        read(&self.team_damage).get(&team_id).copied().unwrap_or(0)
    }

    pub fn snapshot_team_damage(&self) -> BTreeMap<TeamId, i64> {
        read(&self.team_damage)
            .iter()
            .map(|(team, total)| (*team, *total))
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────

    /// Empty all three partitions. Each is cleared under its own lock.
    pub fn reset(&self) {
        write(&self.entities).clear();
        write(&self.guilds).clear();
        write(&self.team_damage).clear();
    }
}
