use serde::{Deserialize, Serialize};

use super::EncodedText;
use crate::GuildId;

/// Cape colours and shape. Opaque to the observer, exported verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapeDesign {
    pub background_color: u32,
    pub detail_color: u32,
    pub emblem_color: u32,
    pub shape: u32,
    pub detail: u32,
    pub emblem: u32,
    pub trim: u32,
}

/// Guild directory entry. Resolved once per session and never updated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Guild {
    pub guild_id: GuildId,
    #[serde(default)]
    pub name: EncodedText,
    #[serde(default)]
    pub tag: EncodedText,
    #[serde(default)]
    pub rank: u32,
    #[serde(default)]
    pub rating: u32,
    #[serde(default)]
    pub features: u32,
    /// 0 = Kurzick, 1 = Luxon
    #[serde(default)]
    pub faction: u32,
    #[serde(default)]
    pub faction_points: u32,
    #[serde(default)]
    pub qualifier_points: u32,
    #[serde(default)]
    pub cape: CapeDesign,
}
