use phf::phf_map;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{EntityId, GuildId, SkillId, TeamId};

use super::CombatCounters;

// ─────────────────────────────────────────────────────────────────────────────
// Encoded Text
// ─────────────────────────────────────────────────────────────────────────────

/// Display text as the game client stores it: UTF-16 code units that may carry
/// markup markers and unpaired surrogates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EncodedText(pub Vec<u16>);

impl EncodedText {
    pub fn units(&self) -> &[u16] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Printable form with markup and unrepresentable units removed.
    pub fn to_display_string(&self) -> String {
        crate::export::text::sanitize_encoded(&self.0)
    }
}

impl From<&str> for EncodedText {
    fn from(value: &str) -> Self {
        Self(value.encode_utf16().collect())
    }
}

/// Scripts may spell names as plain strings or as raw code units.
#[derive(Deserialize)]
#[serde(untagged)]
enum EncodedTextRepr {
    Text(String),
    Units(Vec<u16>),
}

impl<'de> Deserialize<'de> for EncodedText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match EncodedTextRepr::deserialize(deserializer)? {
            EncodedTextRepr::Text(text) => Self::from(text.as_str()),
            EncodedTextRepr::Units(units) => Self(units),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Identity
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityRole {
    Player,
    AiAlly,
    #[default]
    Other,
}

impl EntityRole {
    /// Role-group key used in the export manifest.
    pub const fn group_key(self) -> &'static str {
        match self {
            EntityRole::Player => "PLAYER",
            EntityRole::AiAlly => "AI_ALLY",
            EntityRole::Other => "OTHER",
        }
    }
}

static PROFESSION_ACRONYMS: phf::Map<u8, &'static str> = phf_map! {
    1u8 => "W",
    2u8 => "R",
    3u8 => "Mo",
    4u8 => "N",
    5u8 => "Me",
    6u8 => "E",
    7u8 => "A",
    8u8 => "Rt",
    9u8 => "P",
    10u8 => "D",
};

/// Short profession name, `"X"` for none or unknown.
pub fn profession_acronym(profession: u8) -> &'static str {
    PROFESSION_ACRONYMS.get(&profession).copied().unwrap_or("X")
}

/// Roster-derived identity of an entity. Refreshed on every roster poll.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityIdentity {
    pub entity_id: EntityId,
    #[serde(default)]
    pub team_id: TeamId,
    #[serde(default)]
    pub role: EntityRole,
    #[serde(default)]
    pub primary: u8,
    #[serde(default)]
    pub secondary: u8,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub guild_id: GuildId,
    #[serde(default)]
    pub player_number: u32,
    #[serde(default)]
    pub encoded_name: EncodedText,
    /// Zero when the client has not reported it yet
    #[serde(default)]
    pub max_hp: u32,
    #[serde(default)]
    pub is_guild_lord: bool,
}

impl EntityIdentity {
    pub fn professions_label(&self) -> String {
        format!(
            "{}/{}",
            profession_acronym(self.primary),
            profession_acronym(self.secondary)
        )
    }
}

/// Roster row: identity plus everything accumulated over the session.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRecord {
    pub identity: EntityIdentity,
    pub counters: CombatCounters,
    /// Unique skill ids in display order
    pub used_skills: Vec<SkillId>,
    pub build_template: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_text_accepts_strings_and_units() {
        let from_text: EncodedText = serde_json::from_str("\"Abc\"").unwrap();
        let from_units: EncodedText = serde_json::from_str("[65, 98, 99]").unwrap();
        assert_eq!(from_text, from_units);
        assert_eq!(from_text.to_display_string(), "Abc");
    }

    #[test]
    fn acronyms_fall_back_for_unknown_professions() {
        assert_eq!(profession_acronym(3), "Mo");
        assert_eq!(profession_acronym(0), "X");
        assert_eq!(profession_acronym(42), "X");
    }
}
