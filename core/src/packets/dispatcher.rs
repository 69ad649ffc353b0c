use phf::phf_map;

use super::value_id::{self, jumbo_party};
use super::{CanonicalValue, DamageKind, Milestone, MilestoneKind, ObservedEvent, Payload, RawNotification};
use crate::TeamId;

// keyed by `value_id::jumbo_type`
static MILESTONE_KINDS: phf::Map<u8, MilestoneKind> = phf_map! {
    0u8 => MilestoneKind::BaseUnderAttack,
    1u8 => MilestoneKind::GuildLordUnderAttack,
    3u8 => MilestoneKind::ShrineCaptured,
    5u8 => MilestoneKind::TowerCaptured,
    6u8 => MilestoneKind::PartyDefeated,
    9u8 => MilestoneKind::MoraleBoost,
    16u8 => MilestoneKind::Victory,
    17u8 => MilestoneKind::FlawlessVictory,
};

/// Classifies raw notifications. Stateless: the same input always yields the
/// same event, and nothing outside the returned value is touched.
#[derive(Debug, Default, Clone, Copy)]
pub struct EventDispatcher;

impl EventDispatcher {
    pub const fn new() -> Self {
        Self
    }

    /// `None` means the notification carries nothing the observer tracks
    /// (unknown value id, or a payload of the wrong numeric type).
    pub fn classify(&self, raw: &RawNotification) -> Option<ObservedEvent> {
        match *raw {
            RawNotification::AgentMovement {
                agent_id,
                x,
                y,
                plane,
            } => Some(ObservedEvent::EntityMoved {
                entity_id: agent_id,
                x,
                y,
                plane,
            }),
            RawNotification::JumboMessage {
                message_type,
                value,
            } => Some(ObservedEvent::Milestone(classify_milestone(message_type, value))),
            _ => raw.canonical().and_then(|canonical| classify_value(&canonical)),
        }
    }
}

fn classify_value(c: &CanonicalValue) -> Option<ObservedEvent> {
    let (actor, recipient) = (c.actor, c.recipient);
    let event = match (c.value_id, c.payload) {
        (value_id::SKILL_ACTIVATED, Payload::Int(skill_id)) => ObservedEvent::SkillActivated {
            actor,
            target: recipient,
            skill_id,
        },
        (value_id::SKILL_FINISHED, Payload::Int(_)) => ObservedEvent::SkillFinished { actor },
        (value_id::SKILL_STOPPED, Payload::Int(_)) => ObservedEvent::SkillStopped { actor },

        (value_id::ATTACK_SKILL_ACTIVATED, Payload::Int(skill_id)) => {
            ObservedEvent::AttackSkillActivated {
                actor,
                target: recipient,
                skill_id,
            }
        }
        (value_id::ATTACK_SKILL_FINISHED, Payload::Int(_)) => {
            ObservedEvent::AttackSkillFinished { actor }
        }
        (value_id::ATTACK_SKILL_STOPPED, Payload::Int(_)) => ObservedEvent::AttackSkillStopped { actor },

        (value_id::ATTACK_STARTED, Payload::Int(_)) => ObservedEvent::BasicAttackStarted {
            actor,
            target: recipient,
        },
        (value_id::MELEE_ATTACK_FINISHED, Payload::Int(_)) => {
            ObservedEvent::BasicAttackFinished { actor }
        }
        (value_id::ATTACK_STOPPED, Payload::Int(_)) => ObservedEvent::BasicAttackStopped { actor },

        (value_id::INSTANT_SKILL_ACTIVATED, Payload::Int(skill_id)) => {
            ObservedEvent::InstantSkillUsed { actor, skill_id }
        }
        (value_id::INTERRUPTED, Payload::Int(_)) => ObservedEvent::Interrupted { actor },

        (value_id::DAMAGE, Payload::Float(fraction)) => damage(c, fraction, DamageKind::Normal),
        (value_id::CRITICAL, Payload::Float(fraction)) => damage(c, fraction, DamageKind::Critical),
        (value_id::ARMOR_IGNORING, Payload::Float(fraction)) => {
            damage(c, fraction, DamageKind::ArmorIgnoring)
        }
        (value_id::KNOCKED_DOWN, Payload::Float(_)) => ObservedEvent::Knockdown {
            cause: actor,
            target: recipient,
        },

        _ => return None,
    };
    Some(event)
}

const fn damage(c: &CanonicalValue, fraction: f32, kind: DamageKind) -> ObservedEvent {
    ObservedEvent::Damage {
        source: c.actor,
        target: c.recipient,
        fraction,
        kind,
    }
}

fn party_team(value: u32) -> TeamId {
    match value {
        jumbo_party::PARTY_ONE => 1,
        jumbo_party::PARTY_TWO => 2,
        _ => 0,
    }
}

fn classify_milestone(message_type: u8, value: u32) -> Milestone {
    let kind = MILESTONE_KINDS
        .get(&message_type)
        .copied()
        .unwrap_or(MilestoneKind::Unknown(message_type));
    Milestone {
        kind,
        team_id: party_team(value),
        raw_value: value,
    }
}
