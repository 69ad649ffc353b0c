use std::fmt;

use serde::Serialize;

use crate::{EntityId, SkillId, TeamId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DamageKind {
    Normal,
    Critical,
    ArmorIgnoring,
}

impl DamageKind {
    pub const fn label(self) -> &'static str {
        match self {
            DamageKind::Normal => "Normal",
            DamageKind::Critical => "Critical",
            DamageKind::ArmorIgnoring => "Armor-Ignoring",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MilestoneKind {
    BaseUnderAttack,
    GuildLordUnderAttack,
    ShrineCaptured,
    TowerCaptured,
    PartyDefeated,
    MoraleBoost,
    Victory,
    FlawlessVictory,
    /// Message type the observer does not know
    Unknown(u8),
}

impl MilestoneKind {
    pub const fn is_victory(self) -> bool {
        matches!(self, MilestoneKind::Victory | MilestoneKind::FlawlessVictory)
    }
}

impl fmt::Display for MilestoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MilestoneKind::BaseUnderAttack => f.write_str("Base Under Attack"),
            MilestoneKind::GuildLordUnderAttack => f.write_str("Guild Lord Under Attack"),
            MilestoneKind::ShrineCaptured => f.write_str("Captured Shrine"),
            MilestoneKind::TowerCaptured => f.write_str("Captured Tower"),
            MilestoneKind::PartyDefeated => f.write_str("Party Defeated"),
            MilestoneKind::MoraleBoost => f.write_str("Morale Boost"),
            MilestoneKind::Victory => f.write_str("Victory"),
            MilestoneKind::FlawlessVictory => f.write_str("Flawless Victory"),
            MilestoneKind::Unknown(message_type) => write!(f, "Unknown Message (type {message_type})"),
        }
    }
}

/// A match-level announcement attributed to one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub kind: MilestoneKind,
    /// 1 or 2, 0 when the message value names neither party
    pub team_id: TeamId,
    pub raw_value: u32,
}

/// Classified domain event, actor and recipient in canonical order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObservedEvent {
    SkillActivated {
        actor: EntityId,
        target: EntityId,
        skill_id: SkillId,
    },
    SkillFinished {
        actor: EntityId,
    },
    SkillStopped {
        actor: EntityId,
    },
    AttackSkillActivated {
        actor: EntityId,
        target: EntityId,
        skill_id: SkillId,
    },
    AttackSkillFinished {
        actor: EntityId,
    },
    AttackSkillStopped {
        actor: EntityId,
    },
    BasicAttackStarted {
        actor: EntityId,
        target: EntityId,
    },
    BasicAttackFinished {
        actor: EntityId,
    },
    BasicAttackStopped {
        actor: EntityId,
    },
    InstantSkillUsed {
        actor: EntityId,
        skill_id: SkillId,
    },
    Interrupted {
        actor: EntityId,
    },
    Damage {
        source: EntityId,
        target: EntityId,
        /// Fraction of the target's max health; negative for damage
        fraction: f32,
        kind: DamageKind,
    },
    Knockdown {
        cause: EntityId,
        target: EntityId,
    },
    EntityMoved {
        entity_id: EntityId,
        x: f32,
        y: f32,
        plane: u32,
    },
    Milestone(Milestone),
}
