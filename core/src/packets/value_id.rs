//! Numeric discriminants used on the wire.

// generic value ids, common ones only
pub const MELEE_ATTACK_FINISHED: u32 = 1;
pub const ATTACK_STOPPED: u32 = 3;
pub const ATTACK_STARTED: u32 = 4;
pub const DAMAGE: u32 = 16;
pub const CRITICAL: u32 = 17;
pub const INTERRUPTED: u32 = 35;
pub const KNOCKED_DOWN: u32 = 37;
pub const ATTACK_SKILL_FINISHED: u32 = 46;
pub const INSTANT_SKILL_ACTIVATED: u32 = 48;
pub const ATTACK_SKILL_STOPPED: u32 = 49;
pub const ATTACK_SKILL_ACTIVATED: u32 = 50;
pub const ARMOR_IGNORING: u32 = 55;
pub const SKILL_FINISHED: u32 = 58;
pub const SKILL_STOPPED: u32 = 59;
pub const SKILL_ACTIVATED: u32 = 60;

pub mod jumbo_type {
    pub const BASE_UNDER_ATTACK: u8 = 0;
    pub const GUILD_LORD_UNDER_ATTACK: u8 = 1;
    pub const CAPTURED_SHRINE: u8 = 3;
    pub const CAPTURED_TOWER: u8 = 5;
    pub const PARTY_DEFEATED: u8 = 6;
    pub const MORALE_BOOST: u8 = 9;
    pub const VICTORY: u8 = 16;
    pub const FLAWLESS_VICTORY: u8 = 17;
}

// jumbo message values identifying the side
pub mod jumbo_party {
    pub const PARTY_ONE: u32 = 6579558;
    pub const PARTY_TWO: u32 = 1635021873;
}
