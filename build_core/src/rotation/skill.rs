//! RotationSkill - Simulation-relevant attributes of one skill

use crate::damage::{is_non_negative, is_positive, InvalidInputError};
use serde::{Deserialize, Serialize};

/// A skill the simulated actor can cast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationSkill {
    /// Unique within one simulation
    pub name: String,
    /// Multiplier on the damage formula, 0 for utility and heal skills
    #[serde(default)]
    pub damage_coefficient: f64,
    /// Multiplier on healing power
    #[serde(default)]
    pub heal_coefficient: f64,
    /// Flat heal per cast
    #[serde(default)]
    pub base_heal: f64,
    /// Seconds the cast occupies the actor
    pub cast_time: f64,
    /// Seconds after the cast ends before the skill is available again
    #[serde(default)]
    pub cooldown: f64,
    /// Lower value wins when several skills are available
    #[serde(default)]
    pub priority: i32,
}

impl RotationSkill {
    /// Create a skill with no effect, no cooldown and priority 0
    pub fn new(name: impl Into<String>, cast_time: f64) -> Self {
        RotationSkill {
            name: name.into(),
            damage_coefficient: 0.0,
            heal_coefficient: 0.0,
            base_heal: 0.0,
            cast_time,
            cooldown: 0.0,
            priority: 0,
        }
    }

    pub fn with_damage(mut self, coefficient: f64) -> Self {
        self.damage_coefficient = coefficient;
        self
    }

    pub fn with_heal(mut self, base_heal: f64, coefficient: f64) -> Self {
        self.base_heal = base_heal;
        self.heal_coefficient = coefficient;
        self
    }

    pub fn with_cooldown(mut self, cooldown: f64) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Check the numeric attributes
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        let invalid = |reason: String| InvalidInputError::InvalidSkill {
            skill: self.name.clone(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty".to_string()));
        }
        if !is_positive(self.cast_time) {
            return Err(invalid(format!("cast_time must be positive, got {}", self.cast_time)));
        }
        for (field, value) in [
            ("cooldown", self.cooldown),
            ("damage_coefficient", self.damage_coefficient),
            ("heal_coefficient", self.heal_coefficient),
            ("base_heal", self.base_heal),
        ] {
            if !is_non_negative(value) {
                return Err(invalid(format!("{} must be finite and not negative, got {}", field, value)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let skill = RotationSkill::new("Whirling Wrath", 0.75)
            .with_damage(2.4)
            .with_cooldown(8.0)
            .with_priority(1);

        assert_eq!(skill.name, "Whirling Wrath");
        assert!((skill.damage_coefficient - 2.4).abs() < f64::EPSILON);
        assert!((skill.cooldown - 8.0).abs() < f64::EPSILON);
        assert_eq!(skill.priority, 1);
        assert!(skill.validate().is_ok());
    }

    #[test]
    fn test_zero_cast_time_rejected() {
        let skill = RotationSkill::new("Instant", 0.0);
        assert!(matches!(
            skill.validate(),
            Err(InvalidInputError::InvalidSkill { .. })
        ));
    }

    #[test]
    fn test_negative_fields_rejected() {
        assert!(RotationSkill::new("a", 1.0).with_cooldown(-1.0).validate().is_err());
        assert!(RotationSkill::new("b", 1.0).with_damage(-0.1).validate().is_err());
        assert!(RotationSkill::new("c", 1.0).with_heal(-5.0, 0.0).validate().is_err());
        assert!(RotationSkill::new("d", f64::INFINITY).validate().is_err());
        assert!(RotationSkill::new("  ", 1.0).validate().is_err());
    }
}
