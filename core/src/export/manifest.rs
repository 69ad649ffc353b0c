//! `infos.json`: match metadata, team totals, roster and guilds.
//!
//! Every map in the document is a `BTreeMap` so the output is byte-stable for
//! the same match state.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use super::compress::{ensure_dir, write_atomic};
use super::text::display_text;
use super::{ArtifactOutcome, ExportError};
use crate::session::MatchInfo;
use crate::stats::{CapeDesign, CombatCounters, EntityRecord, Guild, MatchStatistics, opposing_team};
use crate::{EntityId, GuildId, SkillId, TeamId};

pub const ARTIFACT: &str = "Infos";
pub const MANIFEST_FILE: &str = "infos.json";

#[derive(Debug, Clone, Serialize)]
pub struct ManifestEntity {
    pub id: EntityId,
    pub name: String,
    pub primary: u8,
    pub secondary: u8,
    pub professions: String,
    pub level: u32,
    pub player_number: u32,
    pub guild_id: GuildId,
    pub is_guild_lord: bool,
    pub max_hp: u32,
    pub build_template: String,
    pub used_skills: Vec<SkillId>,
    pub stats: CombatCounters,
}

impl From<&EntityRecord> for ManifestEntity {
    fn from(record: &EntityRecord) -> Self {
        let identity = &record.identity;
        Self {
            id: identity.entity_id,
            name: display_text(identity.encoded_name.units()),
            primary: identity.primary,
            secondary: identity.secondary,
            professions: identity.professions_label(),
            level: identity.level,
            player_number: identity.player_number,
            guild_id: identity.guild_id,
            is_guild_lord: identity.is_guild_lord,
            max_hp: identity.max_hp,
            build_template: record.build_template.clone(),
            used_skills: record.used_skills.clone(),
            stats: record.counters.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ManifestGuild {
    pub id: GuildId,
    pub name: String,
    pub tag: String,
    pub rank: u32,
    pub rating: u32,
    pub features: u32,
    pub faction: u32,
    pub faction_points: u32,
    pub qualifier_points: u32,
    pub cape: CapeDesign,
}

impl From<&Guild> for ManifestGuild {
    fn from(guild: &Guild) -> Self {
        Self {
            id: guild.guild_id,
            name: display_text(guild.name.units()),
            tag: display_text(guild.tag.units()),
            rank: guild.rank,
            rating: guild.rating,
            features: guild.features,
            faction: guild.faction,
            faction_points: guild.faction_points,
            qualifier_points: guild.qualifier_points,
            cape: guild.cape,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub map_id: u32,
    pub match_end_time_ms: Option<u32>,
    pub match_end_time_formatted: Option<String>,
    pub match_duration_ms: Option<u32>,
    pub match_duration_raw_ms: Option<u32>,
    pub winner_party_id: Option<TeamId>,
    pub team_kills: BTreeMap<TeamId, u32>,
    pub team_damage: BTreeMap<TeamId, i64>,
    /// team → role group → entities ordered by player number
    pub parties: BTreeMap<TeamId, BTreeMap<&'static str, Vec<ManifestEntity>>>,
    pub guilds: BTreeMap<GuildId, ManifestGuild>,
}

impl Manifest {
    pub fn build(info: &MatchInfo, stats: &MatchStatistics) -> Self {
        let entities = stats.snapshot_entities();

        // both sides always present
        let mut team_kills: BTreeMap<TeamId, u32> = BTreeMap::from([(1, 0), (2, 0)]);
        for record in entities.values() {
            if let Some(killer) = opposing_team(record.identity.team_id) {
                *team_kills.entry(killer).or_insert(0) += record.counters.deaths;
            }
        }

        let mut team_damage: BTreeMap<TeamId, i64> = BTreeMap::from([(1, 0), (2, 0)]);
        team_damage.extend(stats.snapshot_team_damage());

        let mut parties: BTreeMap<TeamId, BTreeMap<&'static str, Vec<ManifestEntity>>> = BTreeMap::new();
        for record in entities.values() {
            parties
                .entry(record.identity.team_id)
                .or_default()
                .entry(record.identity.role.group_key())
                .or_default()
                .push(ManifestEntity::from(record));
        }
        for group in parties.values_mut().flat_map(|roles| roles.values_mut()) {
            group.sort_by_key(|e| (e.player_number, e.id));
        }

        let guilds = stats
            .snapshot_guilds()
            .iter()
            .map(|(id, guild)| (*id, ManifestGuild::from(guild)))
            .collect();

        Self {
            map_id: info.map_id,
            match_end_time_ms: info.end_time_ms,
            match_end_time_formatted: info.end_time_formatted(),
            match_duration_ms: info.duration_adjusted_ms(),
            match_duration_raw_ms: info.duration_raw_ms(),
            winner_party_id: info.winner_team,
            team_kills,
            team_damage,
            parties,
            guilds,
        }
    }

    pub fn to_json(&self, path: &Path) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self).map_err(|source| ExportError::SerializeManifest {
            path: path.to_path_buf(),
            source,
        })
    }
}

pub fn write_manifest(session_dir: &Path, info: &MatchInfo, stats: &MatchStatistics) -> ArtifactOutcome {
    let path = session_dir.join(MANIFEST_FILE);
    let result = ensure_dir(session_dir)
        .and_then(|()| Manifest::build(info, stats).to_json(&path))
        .and_then(|json| write_atomic(&path, json.as_bytes()));

    let mut outcome = ArtifactOutcome::new(ARTIFACT);
    outcome.record(path, result);
    outcome
}
