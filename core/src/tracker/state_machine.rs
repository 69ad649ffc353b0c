use hashbrown::HashMap;

use super::{ActionKind, Completion, PendingAction};
use crate::capture::{CaptureLog, LiveFeed, LogEntry, LogRecord};
use crate::packets::{DamageKind, ObservedEvent};
use crate::stats::{Counter, MatchStatistics, opposing_team};
use crate::{EntityId, SkillId};

/// Everything a handled event writes to.
pub struct TrackerSinks<'a> {
    pub stats: &'a MatchStatistics,
    pub log: &'a CaptureLog,
    pub feed: &'a mut LiveFeed,
}

/// Pending-action table keyed by entity.
///
/// Driven only from the event-delivery thread, so the table itself is not
/// locked. A multi-threaded delivery model would need one lock per entity.
#[derive(Debug, Default)]
pub struct ActionTracker {
    pending: HashMap<EntityId, PendingAction>,
}

impl ActionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self, entity_id: EntityId) -> Option<&PendingAction> {
        self.pending.get(&entity_id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Apply one event: update pending state and counters, then append and
    /// mirror its log record. Returns the appended entry.
    pub fn handle(&mut self, event: ObservedEvent, timestamp_ms: u32, sinks: &mut TrackerSinks<'_>) -> LogEntry {
        let stats = sinks.stats;
        let record = match event {
            // ─── Activations ────────────────────────────────────────────────
            ObservedEvent::SkillActivated {
                actor,
                target,
                skill_id,
            } => self.activate(stats, ActionKind::Skill, actor, target, skill_id),
            ObservedEvent::AttackSkillActivated {
                actor,
                target,
                skill_id,
            } => self.activate(stats, ActionKind::AttackSkill, actor, target, skill_id),
            ObservedEvent::BasicAttackStarted { actor, target } => {
                self.activate(stats, ActionKind::BasicAttack, actor, target, 0)
            }

            // ─── Completions ────────────────────────────────────────────────
            ObservedEvent::SkillFinished { actor } => {
                self.complete(stats, ActionKind::Skill, Completion::Finished, actor)
            }
            ObservedEvent::SkillStopped { actor } => {
                self.complete(stats, ActionKind::Skill, Completion::Stopped, actor)
            }
            ObservedEvent::AttackSkillFinished { actor } => {
                self.complete(stats, ActionKind::AttackSkill, Completion::Finished, actor)
            }
            ObservedEvent::AttackSkillStopped { actor } => {
                self.complete(stats, ActionKind::AttackSkill, Completion::Stopped, actor)
            }
            ObservedEvent::BasicAttackFinished { actor } => {
                self.complete(stats, ActionKind::BasicAttack, Completion::Finished, actor)
            }
            ObservedEvent::BasicAttackStopped { actor } => {
                self.complete(stats, ActionKind::BasicAttack, Completion::Stopped, actor)
            }
            ObservedEvent::Interrupted { actor } => self.interrupt(stats, actor),

            // ─── Outside the state machine ──────────────────────────────────
            ObservedEvent::InstantSkillUsed { actor, skill_id } => {
                stats.increment(actor, Counter::InstantSkillsUsed);
                stats.add_skill_used(actor, skill_id);
                LogRecord::InstantSkill { actor, skill_id }
            }
            ObservedEvent::Damage {
                source,
                target,
                fraction,
                kind,
            } => record_damage(stats, source, target, fraction, kind),
            ObservedEvent::Knockdown { cause, target } => {
                stats.increment(target, Counter::KnockdownsReceived);
                LogRecord::Knockdown { cause, target }
            }
            ObservedEvent::EntityMoved {
                entity_id,
                x,
                y,
                plane,
            } => LogRecord::Moved {
                entity_id,
                x,
                y,
                plane,
            },
            ObservedEvent::Milestone(milestone) => LogRecord::Milestone(milestone),
        };

        let entry = LogEntry::new(timestamp_ms, record);
        sinks.log.push(entry);
        sinks.feed.mirror(&entry);
        entry
    }

    fn activate(
        &mut self,
        stats: &MatchStatistics,
        kind: ActionKind,
        actor: EntityId,
        target: EntityId,
        skill_id: SkillId,
    ) -> LogRecord {
        let action = PendingAction::new(kind, skill_id, target);
        if let Some(superseded) = self.pending.insert(actor, action) {
            let cancelled = if superseded.is_basic_attack() {
                Counter::CancelledAttacks
            } else {
                Counter::CancelledSkills
            };
            stats.increment(actor, cancelled);
            tracing::trace!(entity_id = actor, ?superseded, "pending action superseded");
        }

        stats.increment(actor, kind.started_counter());
        stats.add_skill_used(actor, skill_id);

        LogRecord::Activated {
            kind,
            actor,
            target,
            skill_id,
        }
    }

    fn complete(
        &mut self,
        stats: &MatchStatistics,
        kind: ActionKind,
        completion: Completion,
        actor: EntityId,
    ) -> LogRecord {
        let pending = self.pending.remove(&actor);
        if let Some(counter) = kind.completion_counter(completion) {
            stats.increment(actor, counter);
        }
        if pending.is_none() {
            tracing::trace!(entity_id = actor, ?kind, ?completion, "completion without activation");
        }
        LogRecord::Completed {
            kind,
            completion,
            actor,
            pending,
        }
    }

    fn interrupt(&mut self, stats: &MatchStatistics, actor: EntityId) -> LogRecord {
        let pending = self.pending.remove(&actor);
        stats.increment(actor, Counter::Interrupted);
        if pending.is_some_and(|p| !p.is_basic_attack()) {
            stats.increment(actor, Counter::SkillsInterrupted);
        }
        LogRecord::Completed {
            kind: pending.map_or(ActionKind::Skill, |p| p.kind),
            completion: Completion::Interrupted,
            actor,
            pending,
        }
    }
}

/// Convert a health fraction to points using the target's roster max health,
/// credit the source, and credit the opposing team when a guild lord is hit.
fn record_damage(
    stats: &MatchStatistics,
    source: EntityId,
    target: EntityId,
    fraction: f32,
    kind: DamageKind,
) -> LogRecord {
    if kind == DamageKind::Critical {
        stats.increment(source, Counter::CritsDealt);
        stats.increment(target, Counter::CritsReceived);
    }

    // non-finite payloads are logged without point accounting
    let recipient = stats
        .identity(target)
        .filter(|identity| identity.max_hp > 0 && fraction.is_finite());
    let points = recipient
        .as_ref()
        .map(|identity| (f64::from(fraction) * f64::from(identity.max_hp)).round() as i64);

    if let (Some(points), Some(identity)) = (points, recipient.as_ref()) {
        let delta = points.saturating_neg();
        stats.add_damage(source, delta);
        if identity.is_guild_lord
            && let Some(team) = opposing_team(identity.team_id)
        {
            stats.add_team_damage(team, delta);
        }
    }

    LogRecord::Damage {
        source,
        target,
        fraction,
        kind,
        points,
    }
}
