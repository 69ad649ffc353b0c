//! Skill template codes as the game client shares them in chat.
//!
//! The bit stream is written least-significant bit first and mapped six bits
//! at a time onto a base64 alphabet.

use crate::SkillId;

const TEMPLATE_TYPE: u32 = 14;
const TEMPLATE_VERSION: u32 = 0;
const SKILL_SLOTS: usize = 8;
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

#[derive(Default)]
struct BitWriter {
    bits: Vec<bool>,
}

impl BitWriter {
    fn push(&mut self, value: u32, width: u32) {
        for bit in 0..width {
            self.bits.push((value >> bit) & 1 == 1);
        }
    }

    fn into_base64(self) -> String {
        self.bits
            .chunks(6)
            .map(|chunk| {
                let index = chunk
                    .iter()
                    .enumerate()
                    .fold(0usize, |acc, (i, &set)| acc | (usize::from(set) << i));
                ALPHABET[index] as char
            })
            .collect()
    }
}

fn bit_length(value: u32) -> u32 {
    u32::BITS - value.leading_zeros()
}

/// Encode professions and up to eight skills. Missing slots are written as
/// empty (id 0); anything past the eighth skill is ignored.
pub fn encode(primary: u8, secondary: u8, skills: &[SkillId]) -> String {
    let slots: Vec<SkillId> = skills
        .iter()
        .copied()
        .chain(std::iter::repeat(0))
        .take(SKILL_SLOTS)
        .collect();

    let widest = slots.iter().copied().max().unwrap_or(0);
    let skill_bits = bit_length(widest).clamp(8, 23);

    let mut writer = BitWriter::default();
    writer.push(TEMPLATE_TYPE, 4);
    writer.push(TEMPLATE_VERSION, 4);
    // profession code 0 => 4 bits per profession
    writer.push(0, 2);
    writer.push(u32::from(primary), 4);
    writer.push(u32::from(secondary), 4);
    // no attributes: count 0, attribute-id code 0
    writer.push(0, 4);
    writer.push(0, 4);
    writer.push(skill_bits - 8, 4);
    for skill in slots {
        writer.push(skill, skill_bits);
    }
    writer.push(0, 1);

    writer.into_base64()
}
