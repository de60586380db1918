//! Core types shared across the codec, gear tables and simulator

use serde::{Deserialize, Serialize};
use std::fmt;

/// Game profession, identified on the wire by a single byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profession {
    Guardian,
    Warrior,
    Engineer,
    Ranger,
    Thief,
    Elementalist,
    Mesmer,
    Necromancer,
    Revenant,
}

impl Profession {
    /// Get all professions in wire-code order
    pub fn all() -> &'static [Profession] {
        &[
            Profession::Guardian,
            Profession::Warrior,
            Profession::Engineer,
            Profession::Ranger,
            Profession::Thief,
            Profession::Elementalist,
            Profession::Mesmer,
            Profession::Necromancer,
            Profession::Revenant,
        ]
    }

    /// Resolve a wire profession code (1-9)
    pub fn from_code(code: u8) -> Option<Profession> {
        match code {
            1..=9 => Some(Self::all()[(code - 1) as usize]),
            _ => None,
        }
    }

    /// Wire code for this profession
    pub fn code(self) -> u8 {
        Self::all()
            .iter()
            .position(|p| *p == self)
            .map(|i| i as u8 + 1)
            .unwrap_or(0)
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Profession::Guardian => "Guardian",
            Profession::Warrior => "Warrior",
            Profession::Engineer => "Engineer",
            Profession::Ranger => "Ranger",
            Profession::Thief => "Thief",
            Profession::Elementalist => "Elementalist",
            Profession::Mesmer => "Mesmer",
            Profession::Necromancer => "Necromancer",
            Profession::Revenant => "Revenant",
        }
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The nine attributes a gear prefix can distribute points into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Power,
    Precision,
    Ferocity,
    Toughness,
    Vitality,
    ConditionDamage,
    Expertise,
    Concentration,
    HealingPower,
}

impl StatKind {
    /// Get all stat kinds
    pub fn all() -> &'static [StatKind] {
        &[
            StatKind::Power,
            StatKind::Precision,
            StatKind::Ferocity,
            StatKind::Toughness,
            StatKind::Vitality,
            StatKind::ConditionDamage,
            StatKind::Expertise,
            StatKind::Concentration,
            StatKind::HealingPower,
        ]
    }

    /// Key used in TOML tables and JSON payloads
    pub fn key(self) -> &'static str {
        match self {
            StatKind::Power => "power",
            StatKind::Precision => "precision",
            StatKind::Ferocity => "ferocity",
            StatKind::Toughness => "toughness",
            StatKind::Vitality => "vitality",
            StatKind::ConditionDamage => "condition_damage",
            StatKind::Expertise => "expertise",
            StatKind::Concentration => "concentration",
            StatKind::HealingPower => "healing_power",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Position of a skill ID in the template's skill palette.
///
/// The palette interleaves terrestrial and aquatic variants of each slot.
/// Revenants reuse the aquatic positions for their second legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillSlot {
    Heal,
    AquaticHeal,
    Utility1,
    AquaticUtility1,
    Utility2,
    AquaticUtility2,
    Utility3,
    AquaticUtility3,
    Elite,
    AquaticElite,
}

impl SkillSlot {
    /// Get all slots in wire order
    pub fn all() -> &'static [SkillSlot] {
        &[
            SkillSlot::Heal,
            SkillSlot::AquaticHeal,
            SkillSlot::Utility1,
            SkillSlot::AquaticUtility1,
            SkillSlot::Utility2,
            SkillSlot::AquaticUtility2,
            SkillSlot::Utility3,
            SkillSlot::AquaticUtility3,
            SkillSlot::Elite,
            SkillSlot::AquaticElite,
        ]
    }

    /// Index into the palette
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_aquatic(self) -> bool {
        self.index() % 2 == 1
    }
}
