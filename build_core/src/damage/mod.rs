//! Damage formula and numeric precondition errors

mod formula;

pub(crate) use formula::{is_non_negative, is_positive};
pub use formula::{calculate_damage, calculate_heal, ArmorClass, STANDARD_TARGET_ARMOR};

use crate::types::StatKind;
use thiserror::Error;

/// A numeric precondition was violated by the caller
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    #[error("Armor must be positive, got {0}")]
    NonPositiveArmor(f64),
    #[error("Power must not be negative, got {0}")]
    NegativePower(f64),
    #[error("Weapon strength must be positive, got {0}")]
    NonPositiveWeaponStrength(f64),
    #[error("Coefficient must not be negative, got {0}")]
    NegativeCoefficient(f64),
    #[error("Simulation duration must be positive, got {0}")]
    NonPositiveDuration(f64),
    #[error("Rotation has no skills")]
    EmptySkillSet,
    #[error("Skill '{0}' appears more than once")]
    DuplicateSkill(String),
    #[error("Skill '{skill}': {reason}")]
    InvalidSkill { skill: String, reason: String },
    #[error("Missing stat '{0}'")]
    MissingStat(StatKind),
    #[error("Stat '{stat}' must be finite and non-negative, got {value}")]
    InvalidStat { stat: StatKind, value: f64 },
    #[error("Modifier on '{stat}' must be finite, got {value}")]
    InvalidModifier { stat: StatKind, value: f64 },
}
