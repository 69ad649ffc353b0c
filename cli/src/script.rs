//! Replay scripts: a recorded match as plain JSON
//!
//! A script carries the roster, guilds and skill metadata up front, followed
//! by frames. Each frame advances the instance clock, moves agents, and
//! delivers the notifications the client received at that moment.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use observer_core::provider::{MemoryProvider, StaticSkillCatalog};
use observer_core::{AgentPosition, EntityIdentity, Guild, LiveStatus, RawNotification, SkillId, SkillInfo};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("failed to read replay script {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse replay script {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub map_id: u32,
    #[serde(default)]
    pub skills: BTreeMap<SkillId, SkillInfo>,
    #[serde(default)]
    pub party: Vec<EntityIdentity>,
    #[serde(default)]
    pub guilds: Vec<Guild>,
    #[serde(default)]
    pub frames: Vec<Frame>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Frame {
    pub time_ms: u32,
    #[serde(default)]
    pub agents: Vec<AgentFrame>,
    #[serde(default)]
    pub notifications: Vec<RawNotification>,
    /// Instance load reported at this frame, before its notifications
    #[serde(default)]
    pub instance_load: Option<InstanceLoad>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgentFrame {
    pub position: AgentPosition,
    #[serde(default)]
    pub status: Option<LiveStatus>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct InstanceLoad {
    pub map_id: u32,
    pub is_observer: bool,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = std::fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ScriptError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn catalog(&self) -> StaticSkillCatalog {
        self.skills.iter().map(|(id, info)| (*id, *info)).collect()
    }

    /// Provider seeded with the static parts of the script.
    pub fn provider(&self) -> MemoryProvider {
        let provider = MemoryProvider::new();
        provider.set_party(self.party.clone());
        for guild in &self.guilds {
            provider.insert_guild(guild.clone());
        }
        provider
    }
}

impl Frame {
    /// Advance the provider to this frame's clock and agent positions.
    pub fn apply(&self, provider: &MemoryProvider) {
        provider.set_instance_time(Some(self.time_ms));
        for agent in &self.agents {
            provider.set_agent(agent.position, agent.status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SCRIPT: &str = r#"{
        "map_id": 172,
        "skills": { "50": { "profession": 1, "skill_type": 3 } },
        "party": [
            { "entity_id": 100, "team_id": 1, "role": "player", "primary": 1, "secondary": 2 }
        ],
        "frames": [
            {
                "time_ms": 1000,
                "agents": [ { "position": { "entity_id": 100, "x": 1.0, "y": 2.0 } } ],
                "notifications": [
                    { "shape": "generic_value", "value_id": 1, "agent_id": 100, "value": 50 }
                ]
            },
            { "time_ms": 1200, "instance_load": { "map_id": 172, "is_observer": false } }
        ]
    }"#;

    #[test]
    fn parses_frames_and_skills() {
        let script = Script::parse(SCRIPT).unwrap();
        assert_eq!(script.map_id, 172);
        assert_eq!(script.catalog().len(), 1);
        assert_eq!(script.party.len(), 1);
        assert_eq!(script.frames.len(), 2);
        assert_eq!(script.frames[0].notifications.len(), 1);
        assert!(script.frames[0].instance_load.is_none());

        let load = script.frames[1].instance_load.unwrap();
        assert!(!load.is_observer);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Script::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ScriptError::Read { .. }));
    }

    #[test]
    fn load_reports_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = Script::load(file.path()).unwrap_err();
        assert!(matches!(err, ScriptError::Parse { .. }));
    }

    #[test]
    fn frame_moves_agents_and_clock() {
        use observer_core::GameStateProvider;

        let script = Script::parse(SCRIPT).unwrap();
        let provider = script.provider();
        script.frames[0].apply(&provider);
        assert_eq!(provider.instance_time_ms(), Some(1000));
        assert_eq!(provider.entities().len(), 1);
        assert_eq!(provider.party_members().len(), 1);
    }
}
