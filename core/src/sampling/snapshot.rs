use crate::provider::{AgentPosition, LiveStatus};
use crate::EntityId;
use crate::timing::timestamp_prefix;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub fn distance_squared(&self, other: &Position) -> f32 {
        let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
        dx * dx + dy * dy + dz * dz
    }
}

/// Every non-position field of a snapshot. Compared for exact equality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityStatus {
    pub rotation: f32,
    pub weapon_id: u32,
    pub live: LiveStatus,
}

impl EntityStatus {
    /// Exact equality, with floats compared bit for bit so a NaN reading
    /// matches itself.
    pub fn same_as(&self, other: &EntityStatus) -> bool {
        let (a, b) = (&self.live, &other.live);
        self.rotation.to_bits() == other.rotation.to_bits()
            && self.weapon_id == other.weapon_id
            && a.health_pct.to_bits() == b.health_pct.to_bits()
            && LiveStatus { health_pct: 0.0, ..*a } == LiveStatus { health_pct: 0.0, ..*b }
    }
}

/// Position and status of one entity at one instant. Never mutated once
/// stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldStateSnapshot {
    pub timestamp_ms: u32,
    pub entity_id: EntityId,
    pub position: Position,
    pub status: EntityStatus,
}

impl WorldStateSnapshot {
    pub fn capture(timestamp_ms: u32, agent: &AgentPosition, live: LiveStatus) -> Self {
        Self {
            timestamp_ms,
            entity_id: agent.entity_id,
            position: Position {
                x: agent.x,
                y: agent.y,
                z: agent.z,
            },
            status: EntityStatus {
                rotation: agent.rotation,
                weapon_id: agent.weapon_id,
                live,
            },
        }
    }

    /// Whether `self` adds information over the last stored snapshot: it
    /// moved at least the threshold distance, or any other field changed.
    pub fn differs_from(&self, last: &WorldStateSnapshot, threshold_squared: f32) -> bool {
        self.position.distance_squared(&last.position) >= threshold_squared
            || !self.status.same_as(&last.status)
    }

    /// `[mm:ss.mmm] x;y;z;rotation;weapon;alive;dead;health;knocked;max_hp;<conditions>;<buffs>;holding;casting;skill`
    pub fn export_line(&self) -> String {
        let live = &self.status.live;
        let flag = |set: bool| if set { "1" } else { "0" };

        let mut fields: Vec<String> = vec![
            format!("{:.2}", self.position.x),
            format!("{:.2}", self.position.y),
            format!("{:.2}", self.position.z),
            format!("{:.3}", self.status.rotation),
            self.status.weapon_id.to_string(),
            flag(live.is_alive).to_string(),
            flag(live.is_dead).to_string(),
            format!("{:.3}", live.health_pct),
            flag(live.is_knocked).to_string(),
            live.max_hp.to_string(),
        ];
        fields.extend(live.conditions.as_array().into_iter().map(|c| flag(c).to_string()));
        fields.push(flag(live.buffs.enchanted).to_string());
        fields.push(flag(live.buffs.weapon_spelled).to_string());
        fields.push(flag(live.is_holding).to_string());
        fields.push(flag(live.is_casting).to_string());
        fields.push(live.skill_id.to_string());

        format!("{} {}", timestamp_prefix(self.timestamp_ms), fields.join(";"))
    }
}
