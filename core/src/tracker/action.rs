use crate::capture::LogCategory;
use crate::stats::Counter;
use crate::{EntityId, SkillId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Skill,
    AttackSkill,
    BasicAttack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Completion {
    Finished,
    Stopped,
    Interrupted,
}

impl ActionKind {
    pub const fn category(self) -> LogCategory {
        match self {
            ActionKind::Skill => LogCategory::Skill,
            ActionKind::AttackSkill => LogCategory::AttackSkill,
            ActionKind::BasicAttack => LogCategory::BasicAttack,
        }
    }

    pub(crate) const fn started_counter(self) -> Counter {
        match self {
            ActionKind::Skill => Counter::SkillsStarted,
            ActionKind::AttackSkill => Counter::AttackSkillsStarted,
            ActionKind::BasicAttack => Counter::AttacksStarted,
        }
    }

    /// Counter for a finish or stop. Interrupts are counted separately.
    pub(crate) const fn completion_counter(self, completion: Completion) -> Option<Counter> {
        match (self, completion) {
            (_, Completion::Interrupted) => None,
            (ActionKind::Skill, Completion::Finished) => Some(Counter::SkillsFinished),
            (ActionKind::Skill, Completion::Stopped) => Some(Counter::SkillsStopped),
            (ActionKind::AttackSkill, Completion::Finished) => Some(Counter::AttackSkillsFinished),
            (ActionKind::AttackSkill, Completion::Stopped) => Some(Counter::AttackSkillsStopped),
            (ActionKind::BasicAttack, Completion::Finished) => Some(Counter::AttacksFinished),
            (ActionKind::BasicAttack, Completion::Stopped) => Some(Counter::AttacksStopped),
        }
    }
}

/// The one in-flight action of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAction {
    pub kind: ActionKind,
    /// 0 for a basic attack
    pub skill_id: SkillId,
    pub target_id: EntityId,
}

impl PendingAction {
    pub const fn new(kind: ActionKind, skill_id: SkillId, target_id: EntityId) -> Self {
        Self {
            kind,
            skill_id,
            target_id,
        }
    }

    pub const fn is_basic_attack(&self) -> bool {
        self.skill_id == 0
    }
}
