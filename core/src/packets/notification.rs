use serde::{Deserialize, Serialize};

use crate::EntityId;

/// A notification as delivered by the client, before classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum RawNotification {
    /// Untargeted integer value
    GenericValue {
        value_id: u32,
        agent_id: EntityId,
        value: u32,
    },
    /// Targeted integer value. The client puts the recipient in `caster_id`
    /// and the acting agent in `target_id`.
    GenericValueTarget {
        value_id: u32,
        caster_id: EntityId,
        target_id: EntityId,
        value: u32,
    },
    /// Float value applied to `target_id`, caused by `cause_id`
    GenericModifier {
        value_id: u32,
        target_id: EntityId,
        cause_id: EntityId,
        value: f32,
    },
    /// Untargeted float value
    GenericFloat {
        value_id: u32,
        agent_id: EntityId,
        value: f32,
    },
    AgentMovement {
        agent_id: EntityId,
        x: f32,
        y: f32,
        #[serde(default)]
        plane: u32,
    },
    JumboMessage {
        message_type: u8,
        value: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload {
    Int(u32),
    Float(f32),
}

/// A generic-value notification with actor and recipient in canonical order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalValue {
    pub value_id: u32,
    pub actor: EntityId,
    /// 0 when `no_target` is set
    pub recipient: EntityId,
    pub payload: Payload,
    pub no_target: bool,
}

impl RawNotification {
    /// The generic value id, for the shapes that carry one.
    pub const fn value_id(&self) -> Option<u32> {
        match *self {
            RawNotification::GenericValue { value_id, .. }
            | RawNotification::GenericValueTarget { value_id, .. }
            | RawNotification::GenericModifier { value_id, .. }
            | RawNotification::GenericFloat { value_id, .. } => Some(value_id),
            RawNotification::AgentMovement { .. } | RawNotification::JumboMessage { .. } => None,
        }
    }

    /// Normalize a generic-value shape. Movement and jumbo messages have no
    /// canonical value form.
    pub const fn canonical(&self) -> Option<CanonicalValue> {
        let canonical = match *self {
            RawNotification::GenericValue {
                value_id,
                agent_id,
                value,
            } => CanonicalValue {
                value_id,
                actor: agent_id,
                recipient: 0,
                payload: Payload::Int(value),
                no_target: true,
            },
            RawNotification::GenericValueTarget {
                value_id,
                caster_id,
                target_id,
                value,
            } => CanonicalValue {
                value_id,
                actor: target_id,
                recipient: caster_id,
                payload: Payload::Int(value),
                no_target: false,
            },
            RawNotification::GenericModifier {
                value_id,
                target_id,
                cause_id,
                value,
            } => CanonicalValue {
                value_id,
                actor: cause_id,
                recipient: target_id,
                payload: Payload::Float(value),
                no_target: false,
            },
            RawNotification::GenericFloat {
                value_id,
                agent_id,
                value,
            } => CanonicalValue {
                value_id,
                actor: agent_id,
                recipient: 0,
                payload: Payload::Float(value),
                no_target: true,
            },
            RawNotification::AgentMovement { .. } | RawNotification::JumboMessage { .. } => {
                return None;
            }
        };
        Some(canonical)
    }

    /// Actor and recipient in canonical order, zero where absent.
    pub fn participants(&self) -> (EntityId, EntityId) {
        match self {
            RawNotification::AgentMovement { agent_id, .. } => (*agent_id, 0),
            RawNotification::JumboMessage { .. } => (0, 0),
            _ => self
                .canonical()
                .map(|c| (c.actor, c.recipient))
                .unwrap_or((0, 0)),
        }
    }
}
