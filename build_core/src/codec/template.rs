//! DecodedBuildTemplate - Raw fields of a build template

use super::{MAX_SKILL_IDS, SPECIALIZATION_SLOTS};
use crate::types::{Profession, SkillSlot};
use serde::{Deserialize, Serialize};

/// Trait choices for one specialization, one 2-bit value per tier
/// (adept, master, grandmaster). 0 means no choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraitChoices(pub [u8; 3]);

impl TraitChoices {
    /// Unpack a trait byte, least significant pair first.
    /// The top two bits are reserved and ignored.
    pub fn from_byte(byte: u8) -> Self {
        TraitChoices([byte & 0b11, (byte >> 2) & 0b11, (byte >> 4) & 0b11])
    }

    /// Pack back into a trait byte
    pub fn to_byte(self) -> u8 {
        let [c1, c2, c3] = self.0;
        (c1 & 0b11) | ((c2 & 0b11) << 2) | ((c3 & 0b11) << 4)
    }

    pub fn adept(self) -> u8 {
        self.0[0]
    }

    pub fn master(self) -> u8 {
        self.0[1]
    }

    pub fn grandmaster(self) -> u8 {
        self.0[2]
    }
}

/// Result of decoding one build template chat code.
///
/// IDs are not resolved to names; see [`crate::analysis::GameDataLookup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedBuildTemplate {
    /// Raw profession code (1-9 for known professions)
    pub profession_code: u8,
    /// Specialization ids, 0 for an unused slot
    pub specialization_ids: [u8; SPECIALIZATION_SLOTS],
    /// Trait choices per specialization slot
    pub trait_choices: [TraitChoices; SPECIALIZATION_SLOTS],
    /// Skill palette ids in wire order, at most 10
    pub skill_palette_ids: Vec<u16>,
    /// Bytes following the skill palette (pets, legends)
    #[serde(default)]
    pub profession_payload: Vec<u8>,
}

impl DecodedBuildTemplate {
    /// Create a template with the given profession and nothing else selected
    pub fn new(profession_code: u8) -> Self {
        DecodedBuildTemplate {
            profession_code,
            specialization_ids: [0; SPECIALIZATION_SLOTS],
            trait_choices: [TraitChoices::default(); SPECIALIZATION_SLOTS],
            skill_palette_ids: Vec::new(),
            profession_payload: Vec::new(),
        }
    }

    /// Set a specialization slot (0-2). Out of range slots are ignored.
    pub fn with_specialization(mut self, slot: usize, spec_id: u8, traits: TraitChoices) -> Self {
        if slot < SPECIALIZATION_SLOTS {
            self.specialization_ids[slot] = spec_id;
            self.trait_choices[slot] = traits;
        }
        self
    }

    /// Set the skill palette, truncated to 10 entries
    pub fn with_skills(mut self, skills: impl IntoIterator<Item = u16>) -> Self {
        self.skill_palette_ids = skills.into_iter().take(MAX_SKILL_IDS).collect();
        self
    }

    /// Resolve the profession code
    pub fn profession(&self) -> Option<Profession> {
        Profession::from_code(self.profession_code)
    }

    /// Occupied specialization slots as (slot, spec id, traits)
    pub fn active_specializations(&self) -> impl Iterator<Item = (usize, u8, TraitChoices)> + '_ {
        self.specialization_ids
            .iter()
            .zip(self.trait_choices.iter())
            .enumerate()
            .filter(|(_, (id, _))| **id != 0)
            .map(|(slot, (id, traits))| (slot, *id, *traits))
    }

    /// Skill id in a palette slot; `None` if the payload ended before it or the slot is empty
    pub fn skill_in(&self, slot: SkillSlot) -> Option<u16> {
        self.skill_palette_ids
            .get(slot.index())
            .copied()
            .filter(|id| *id != 0)
    }
}
