//! GearPrefix - Named stat distribution

use crate::types::StatKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Points a prefix puts into each of the nine stats.
///
/// All fields are required when deserializing, so a table entry that
/// forgets a stat fails to load instead of silently reading as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatProfile {
    pub power: i32,
    pub precision: i32,
    pub ferocity: i32,
    pub toughness: i32,
    pub vitality: i32,
    pub condition_damage: i32,
    pub expertise: i32,
    pub concentration: i32,
    pub healing_power: i32,
}

impl StatProfile {
    /// Get the points for a stat
    pub fn get(&self, stat: StatKind) -> i32 {
        match stat {
            StatKind::Power => self.power,
            StatKind::Precision => self.precision,
            StatKind::Ferocity => self.ferocity,
            StatKind::Toughness => self.toughness,
            StatKind::Vitality => self.vitality,
            StatKind::ConditionDamage => self.condition_damage,
            StatKind::Expertise => self.expertise,
            StatKind::Concentration => self.concentration,
            StatKind::HealingPower => self.healing_power,
        }
    }

    /// All nine (stat, points) pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, i32)> + '_ {
        StatKind::all().iter().map(move |stat| (*stat, self.get(*stat)))
    }

    /// Mapping form, always containing all nine keys
    pub fn to_map(&self) -> BTreeMap<StatKind, i32> {
        self.iter().collect()
    }
}

/// A named gear prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearPrefix {
    pub name: String,
    pub stats: StatProfile,
}

impl GearPrefix {
    pub fn new(name: impl Into<String>, stats: StatProfile) -> Self {
        GearPrefix {
            name: name.into(),
            stats,
        }
    }
}
