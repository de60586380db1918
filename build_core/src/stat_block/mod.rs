//! BaseStats - Typed attribute record and modifier application

mod modifier;
mod stat_value;

pub use modifier::{Modifier, ModifierKind};
pub use stat_value::StatValue;

use crate::config::StatConstants;
use crate::damage::InvalidInputError;
use crate::gear::StatProfile;
use crate::types::StatKind;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Real-valued attributes of a character
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseStats {
    // === Offense ===
    pub power: f64,
    pub precision: f64,
    pub ferocity: f64,
    pub condition_damage: f64,
    pub expertise: f64,

    // === Defense ===
    pub toughness: f64,
    pub vitality: f64,

    // === Support ===
    pub concentration: f64,
    pub healing_power: f64,
}

impl BaseStats {
    /// All attributes at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an attribute
    pub fn get(&self, stat: StatKind) -> f64 {
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

    fn slot_mut(&mut self, stat: StatKind) -> &mut f64 {
        match stat {
            StatKind::Power => &mut self.power,
            StatKind::Precision => &mut self.precision,
            StatKind::Ferocity => &mut self.ferocity,
            StatKind::Toughness => &mut self.toughness,
            StatKind::Vitality => &mut self.vitality,
            StatKind::ConditionDamage => &mut self.condition_damage,
            StatKind::Expertise => &mut self.expertise,
            StatKind::Concentration => &mut self.concentration,
            StatKind::HealingPower => &mut self.healing_power,
        }
    }

    /// Set an attribute
    pub fn set(&mut self, stat: StatKind, value: f64) {
        *self.slot_mut(stat) = value;
    }

    /// Builder-style setter
    pub fn with(mut self, stat: StatKind, value: f64) -> Self {
        self.set(stat, value);
        self
    }

    /// Build from a stat map. Every stat must be present, finite and non-negative.
    pub fn from_map(map: &HashMap<StatKind, f64>) -> Result<Self, InvalidInputError> {
        let mut stats = BaseStats::new();
        for stat in StatKind::all() {
            let value = *map.get(stat).ok_or(InvalidInputError::MissingStat(*stat))?;
            stats.set(*stat, value);
        }
        stats.validate()?;
        Ok(stats)
    }

    /// Attributes from a full set of one gear prefix
    pub fn from_prefix(profile: &StatProfile, constants: &StatConstants) -> Self {
        let mut stats = BaseStats {
            power: constants.base_attribute,
            precision: constants.base_attribute,
            toughness: constants.base_attribute,
            vitality: constants.base_attribute,
            ..BaseStats::default()
        };
        for (stat, points) in profile.iter() {
            *stats.slot_mut(stat) += f64::from(points) * constants.points_scale;
        }
        stats
    }

    /// Reject NaN, infinite or negative attributes
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        for stat in StatKind::all() {
            let value = self.get(*stat);
            if !value.is_finite() || value < 0.0 {
                return Err(InvalidInputError::InvalidStat { stat: *stat, value });
            }
        }
        Ok(())
    }

    /// Apply modifiers in order and return the effective attributes.
    ///
    /// Both the attributes and every modifier value must be finite.
    pub fn with_modifiers(&self, modifiers: &[Modifier]) -> Result<BaseStats, InvalidInputError> {
        self.validate()?;
        for modifier in modifiers {
            modifier.validate()?;
        }
        if modifiers.is_empty() {
            return Ok(*self);
        }

        let mut values: BTreeMap<StatKind, StatValue> = StatKind::all()
            .iter()
            .map(|stat| (*stat, StatValue::with_base(self.get(*stat))))
            .collect();

        for modifier in modifiers {
            if let Some(value) = values.get_mut(&modifier.stat) {
                value.apply(modifier);
            }
        }

        let mut result = BaseStats::new();
        for (stat, value) in values {
            result.set(stat, value.compute());
        }
        result.validate()?;
        Ok(result)
    }

    /// Mapping form with all nine keys
    pub fn to_map(&self) -> BTreeMap<StatKind, f64> {
        StatKind::all()
            .iter()
            .map(|stat| (*stat, self.get(*stat)))
            .collect()
    }
}
