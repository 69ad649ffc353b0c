use std::fmt;

use observer_types::LiveFeedToggles;

use crate::packets::{DamageKind, Milestone};
use crate::timing::timestamp_prefix;
use crate::tracker::{ActionKind, Completion, PendingAction};
use crate::{EntityId, SkillId};

// ─────────────────────────────────────────────────────────────────────────────
// Category
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogCategory {
    Skill,
    AttackSkill,
    BasicAttack,
    Combat,
    AgentMovement,
    MatchMilestone,
    Unrecognized,
}

impl LogCategory {
    pub const ALL: [LogCategory; 7] = [
        LogCategory::Skill,
        LogCategory::AttackSkill,
        LogCategory::BasicAttack,
        LogCategory::Combat,
        LogCategory::AgentMovement,
        LogCategory::MatchMilestone,
        LogCategory::Unrecognized,
    ];

    /// Marker shown in front of live-feed lines.
    pub const fn marker(self) -> &'static str {
        match self {
            LogCategory::Skill => "[SKL]",
            LogCategory::AttackSkill => "[ASK]",
            LogCategory::BasicAttack => "[ATK]",
            LogCategory::Combat => "[CMB]",
            LogCategory::AgentMovement => "[AGT]",
            LogCategory::MatchMilestone => "[JMB]",
            LogCategory::Unrecognized => "[UNK]",
        }
    }

    /// Export file stem, `<stem>_events.txt.gz`.
    pub const fn file_stem(self) -> &'static str {
        match self {
            LogCategory::Skill => "skill",
            LogCategory::AttackSkill => "attack_skill",
            LogCategory::BasicAttack => "basic_attack",
            LogCategory::Combat => "combat",
            LogCategory::AgentMovement => "agent_movement",
            LogCategory::MatchMilestone => "match_milestone",
            LogCategory::Unrecognized => "unrecognized",
        }
    }

    pub const fn is_enabled(self, toggles: &LiveFeedToggles) -> bool {
        toggles.enabled
            && match self {
                LogCategory::Skill => toggles.skill,
                LogCategory::AttackSkill => toggles.attack_skill,
                LogCategory::BasicAttack => toggles.basic_attack,
                LogCategory::Combat => toggles.combat,
                LogCategory::AgentMovement => toggles.agent_movement,
                LogCategory::MatchMilestone => toggles.match_milestone,
                LogCategory::Unrecognized => toggles.unrecognized,
            }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Record
// ─────────────────────────────────────────────────────────────────────────────

/// What happened, in structured form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogRecord {
    Activated {
        kind: ActionKind,
        actor: EntityId,
        target: EntityId,
        skill_id: SkillId,
    },
    /// A completion, stop or interrupt. `pending` is `None` when no matching
    /// activation was seen.
    Completed {
        kind: ActionKind,
        completion: Completion,
        actor: EntityId,
        pending: Option<PendingAction>,
    },
    InstantSkill {
        actor: EntityId,
        skill_id: SkillId,
    },
    Damage {
        source: EntityId,
        target: EntityId,
        fraction: f32,
        kind: DamageKind,
        /// Health points, when the target's max health was known
        points: Option<i64>,
    },
    Knockdown {
        cause: EntityId,
        target: EntityId,
    },
    Moved {
        entity_id: EntityId,
        x: f32,
        y: f32,
        plane: u32,
    },
    Milestone(Milestone),
    Unrecognized {
        value_id: Option<u32>,
        actor: EntityId,
        recipient: EntityId,
    },
}

impl LogRecord {
    pub const fn category(&self) -> LogCategory {
        match self {
            LogRecord::Activated { kind, .. } | LogRecord::Completed { kind, .. } => kind.category(),
            LogRecord::InstantSkill { .. } => LogCategory::Skill,
            LogRecord::Damage { .. } | LogRecord::Knockdown { .. } => LogCategory::Combat,
            LogRecord::Moved { .. } => LogCategory::AgentMovement,
            LogRecord::Milestone(_) => LogCategory::MatchMilestone,
            LogRecord::Unrecognized { .. } => LogCategory::Unrecognized,
        }
    }
}

fn completion_label(kind: ActionKind, completion: Completion) -> &'static str {
    match (kind, completion) {
        (_, Completion::Interrupted) => "Interrupted",
        (ActionKind::Skill, Completion::Finished) => "Skill Finished",
        (ActionKind::Skill, Completion::Stopped) => "Skill Stopped",
        (ActionKind::AttackSkill, Completion::Finished) => "Attack Skill Finished",
        (ActionKind::AttackSkill, Completion::Stopped) => "Attack Skill Stopped",
        (ActionKind::BasicAttack, Completion::Finished) => "Attack Finished",
        (ActionKind::BasicAttack, Completion::Stopped) => "Attack Stopped",
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LogRecord::Activated {
                kind: ActionKind::BasicAttack,
                actor,
                target,
                ..
            } => write!(f, "Attack Started: by {actor} on {target}"),
            LogRecord::Activated {
                kind,
                actor,
                target,
                skill_id,
            } => {
                let label = match kind {
                    ActionKind::AttackSkill => "Attack Skill Activated",
                    _ => "Skill Activated",
                };
                write!(f, "{label}: ID {skill_id} by {actor} on {target}")
            }
            LogRecord::Completed {
                kind,
                completion,
                actor,
                pending,
            } => {
                let label = completion_label(kind, completion);
                match pending {
                    Some(PendingAction {
                        skill_id: 0,
                        target_id,
                        ..
                    }) => write!(f, "{label}: by {actor} on {target_id}"),
                    Some(PendingAction {
                        skill_id,
                        target_id,
                        ..
                    }) => write!(f, "{label}: ID {skill_id} by {actor} on {target_id}"),
                    None => write!(f, "{label}: (Unknown) by {actor}"),
                }
            }
            LogRecord::InstantSkill { actor, skill_id } => {
                write!(f, "Instant Skill Used: ID {skill_id} by {actor}")
            }
            LogRecord::Damage {
                source,
                target,
                fraction,
                kind,
                points,
            } => {
                write!(
                    f,
                    "Damage ({}): {fraction:.6} from {source} to {target}",
                    kind.label()
                )?;
                if let Some(points) = points {
                    write!(f, " [{points} hp]")?;
                }
                Ok(())
            }
            LogRecord::Knockdown { cause, target } => {
                write!(f, "Knockdown: Target {target} (Cause Agent: {cause})")
            }
            LogRecord::Moved {
                entity_id,
                x,
                y,
                plane,
            } => write!(f, "Agent Moved: {entity_id} to ({x:.1}, {y:.1}) plane {plane}"),
            LogRecord::Milestone(milestone) => {
                write!(f, "{}: Team {}", milestone.kind, milestone.team_id)
            }
            LogRecord::Unrecognized {
                value_id,
                actor,
                recipient,
            } => match value_id {
                Some(id) => write!(f, "Unrecognized Value {id}: {actor} -> {recipient}"),
                None => write!(f, "Unrecognized Notification: {actor} -> {recipient}"),
            },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entry
// ─────────────────────────────────────────────────────────────────────────────

/// One log record stamped with the instance time it was observed at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogEntry {
    pub timestamp_ms: u32,
    pub record: LogRecord,
}

impl LogEntry {
    pub const fn new(timestamp_ms: u32, record: LogRecord) -> Self {
        Self {
            timestamp_ms,
            record,
        }
    }

    pub const fn category(&self) -> LogCategory {
        self.record.category()
    }

    /// Export form: `[mm:ss.mmm] text`, no category marker.
    pub fn export_line(&self) -> String {
        format!("{} {}", timestamp_prefix(self.timestamp_ms), self.record)
    }

    /// Live form: `[mm:ss.mmm] [MRK] text`.
    pub fn marked_line(&self) -> String {
        format!(
            "{} {} {}",
            timestamp_prefix(self.timestamp_ms),
            self.category().marker(),
            self.record
        )
    }
}
