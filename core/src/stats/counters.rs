use serde::Serialize;

/// One cumulative per-entity counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    AttacksStarted,
    AttacksFinished,
    AttacksStopped,
    AttackSkillsStarted,
    AttackSkillsFinished,
    AttackSkillsStopped,
    SkillsStarted,
    SkillsFinished,
    SkillsStopped,
    InstantSkillsUsed,
    Interrupted,
    /// Interrupted while a skill (not a basic attack) was pending
    SkillsInterrupted,
    /// A pending basic attack replaced by a new activation
    CancelledAttacks,
    /// A pending skill replaced by a new activation
    CancelledSkills,
    CritsDealt,
    CritsReceived,
    KnockdownsReceived,
    Deaths,
}

impl Counter {
    pub const ALL: [Counter; 18] = [
        Counter::AttacksStarted,
        Counter::AttacksFinished,
        Counter::AttacksStopped,
        Counter::AttackSkillsStarted,
        Counter::AttackSkillsFinished,
        Counter::AttackSkillsStopped,
        Counter::SkillsStarted,
        Counter::SkillsFinished,
        Counter::SkillsStopped,
        Counter::InstantSkillsUsed,
        Counter::Interrupted,
        Counter::SkillsInterrupted,
        Counter::CancelledAttacks,
        Counter::CancelledSkills,
        Counter::CritsDealt,
        Counter::CritsReceived,
        Counter::KnockdownsReceived,
        Counter::Deaths,
    ];
}

/// Cumulative combat counters for one entity.
///
/// Counts only ever grow; `damage` is a signed running total floored at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CombatCounters {
    pub damage: i64,

    // Basic attacks
    pub attacks_started: u32,
    pub attacks_finished: u32,
    pub attacks_stopped: u32,

    // Attack skills
    pub attack_skills_started: u32,
    pub attack_skills_finished: u32,
    pub attack_skills_stopped: u32,

    // Skills
    pub skills_started: u32,
    pub skills_finished: u32,
    pub skills_stopped: u32,
    pub instant_skills_used: u32,

    // Disruption
    pub interrupted: u32,
    pub skills_interrupted: u32,
    pub cancelled_attacks: u32,
    pub cancelled_skills: u32,
    pub knockdowns_received: u32,

    pub crits_dealt: u32,
    pub crits_received: u32,
    pub deaths: u32,
}

impl CombatCounters {
    fn slot_mut(&mut self, counter: Counter) -> &mut u32 {
        match counter {
            Counter::AttacksStarted => &mut self.attacks_started,
            Counter::AttacksFinished => &mut self.attacks_finished,
            Counter::AttacksStopped => &mut self.attacks_stopped,
            Counter::AttackSkillsStarted => &mut self.attack_skills_started,
            Counter::AttackSkillsFinished => &mut self.attack_skills_finished,
            Counter::AttackSkillsStopped => &mut self.attack_skills_stopped,
            Counter::SkillsStarted => &mut self.skills_started,
            Counter::SkillsFinished => &mut self.skills_finished,
            Counter::SkillsStopped => &mut self.skills_stopped,
            Counter::InstantSkillsUsed => &mut self.instant_skills_used,
            Counter::Interrupted => &mut self.interrupted,
            Counter::SkillsInterrupted => &mut self.skills_interrupted,
            Counter::CancelledAttacks => &mut self.cancelled_attacks,
            Counter::CancelledSkills => &mut self.cancelled_skills,
            Counter::CritsDealt => &mut self.crits_dealt,
            Counter::CritsReceived => &mut self.crits_received,
            Counter::KnockdownsReceived => &mut self.knockdowns_received,
            Counter::Deaths => &mut self.deaths,
        }
    }

    pub fn get(&self, counter: Counter) -> u32 {
        match counter {
            Counter::AttacksStarted => self.attacks_started,
            Counter::AttacksFinished => self.attacks_finished,
            Counter::AttacksStopped => self.attacks_stopped,
            Counter::AttackSkillsStarted => self.attack_skills_started,
            Counter::AttackSkillsFinished => self.attack_skills_finished,
            Counter::AttackSkillsStopped => self.attack_skills_stopped,
            Counter::SkillsStarted => self.skills_started,
            Counter::SkillsFinished => self.skills_finished,
            Counter::SkillsStopped => self.skills_stopped,
            Counter::InstantSkillsUsed => self.instant_skills_used,
            Counter::Interrupted => self.interrupted,
            Counter::SkillsInterrupted => self.skills_interrupted,
            Counter::CancelledAttacks => self.cancelled_attacks,
            Counter::CancelledSkills => self.cancelled_skills,
            Counter::CritsDealt => self.crits_dealt,
            Counter::CritsReceived => self.crits_received,
            Counter::KnockdownsReceived => self.knockdowns_received,
            Counter::Deaths => self.deaths,
        }
    }

    pub fn increment(&mut self, counter: Counter) {
        let slot = self.slot_mut(counter);
        *slot = slot.saturating_add(1);
    }

    /// Accumulate a signed damage delta, flooring the total at zero.
    pub fn add_damage(&mut self, delta: i64) {
        self.damage = self.damage.saturating_add(delta).max(0);
    }
}
