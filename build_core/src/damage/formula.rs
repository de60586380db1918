//! Single-hit damage and heal formulas
//!
//! These are the only place damage and heal numbers are computed. Results
//! are not rounded.

use super::InvalidInputError;
use serde::{Deserialize, Serialize};

/// Armor of the standard heavy armor benchmark target
pub const STANDARD_TARGET_ARMOR: f64 = 2597.0;

/// Benchmark target armor classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorClass {
    Light,
    Medium,
    Heavy,
}

impl ArmorClass {
    pub fn armor(self) -> f64 {
        match self {
            ArmorClass::Light => 1910.0,
            ArmorClass::Medium => 2271.0,
            ArmorClass::Heavy => STANDARD_TARGET_ARMOR,
        }
    }
}

/// Damage of one hit: `power × weapon_strength × coefficient / armor`
///
/// # Arguments
/// * `power` - Attacker power, not negative
/// * `weapon_strength` - Weapon strength, positive
/// * `coefficient` - Skill coefficient, not negative (0 for utility skills)
/// * `armor` - Target armor, positive
pub fn calculate_damage(
    power: f64,
    weapon_strength: f64,
    coefficient: f64,
    armor: f64,
) -> Result<f64, InvalidInputError> {
    if !is_positive(armor) {
        return Err(InvalidInputError::NonPositiveArmor(armor));
    }
    if !is_non_negative(power) {
        return Err(InvalidInputError::NegativePower(power));
    }
    if !is_positive(weapon_strength) {
        return Err(InvalidInputError::NonPositiveWeaponStrength(weapon_strength));
    }
    if !is_non_negative(coefficient) {
        return Err(InvalidInputError::NegativeCoefficient(coefficient));
    }

    Ok(power * weapon_strength * coefficient / armor)
}

/// Finite and greater than zero
pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Finite and not below zero
pub(crate) fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Heal of one cast: `base_heal + healing_power × coefficient`
pub fn calculate_heal(base_heal: f64, healing_power: f64, coefficient: f64) -> f64 {
    base_heal + healing_power * coefficient
}
