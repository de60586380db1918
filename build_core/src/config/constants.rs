//! Engine constants configuration

use super::ConfigError;
use crate::damage::is_positive;
use serde::{Deserialize, Serialize};

/// Tunable engine constants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConstants {
    #[serde(default)]
    pub target: TargetConstants,
    #[serde(default)]
    pub simulation: SimulationConstants,
    #[serde(default)]
    pub stats: StatConstants,
}

impl EngineConstants {
    /// Reject values the formulas cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.target.armor) {
            return Err(ConfigError::ValidationError(format!(
                "target.armor must be positive, got {}",
                self.target.armor
            )));
        }
        if !is_positive(self.simulation.duration) {
            return Err(ConfigError::ValidationError(format!(
                "simulation.duration must be positive, got {}",
                self.simulation.duration
            )));
        }
        if !is_positive(self.simulation.weapon_strength) {
            return Err(ConfigError::ValidationError(format!(
                "simulation.weapon_strength must be positive, got {}",
                self.simulation.weapon_strength
            )));
        }
        if self.stats.points_scale < 0.0 || self.stats.base_attribute < 0.0 {
            return Err(ConfigError::ValidationError(
                "stats values must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConstants {
    /// Armor of the benchmark target (heavy armor golem)
    #[serde(default = "default_target_armor")]
    pub armor: f64,
}

impl Default for TargetConstants {
    fn default() -> Self {
        TargetConstants {
            armor: default_target_armor(),
        }
    }
}

fn default_target_armor() -> f64 {
    2597.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConstants {
    /// Default rotation length in seconds
    #[serde(default = "default_duration")]
    pub duration: f64,
    /// Default weapon strength when the caller has none
    #[serde(default = "default_weapon_strength")]
    pub weapon_strength: f64,
}

impl Default for SimulationConstants {
    fn default() -> Self {
        SimulationConstants {
            duration: default_duration(),
            weapon_strength: default_weapon_strength(),
        }
    }
}

fn default_duration() -> f64 {
    60.0
}
fn default_weapon_strength() -> f64 {
    1000.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatConstants {
    /// Base value of power, precision, toughness and vitality before gear
    #[serde(default = "default_base_attribute")]
    pub base_attribute: f64,
    /// Attribute points granted per prefix table point
    #[serde(default = "default_points_scale")]
    pub points_scale: f64,
}

impl Default for StatConstants {
    fn default() -> Self {
        StatConstants {
            base_attribute: default_base_attribute(),
            points_scale: default_points_scale(),
        }
    }
}

fn default_base_attribute() -> f64 {
    1000.0
}
fn default_points_scale() -> f64 {
    300.0
}

/// Constants shipped with the crate
pub fn default_constants() -> EngineConstants {
    let toml = include_str!("../../config/constants.toml");
    super::parse_toml::<EngineConstants>(toml)
        .and_then(|constants| constants.validate().map(|_| constants))
        .unwrap_or_else(|e| {
            log::error!("Embedded constants.toml is invalid, using defaults: {}", e);
            EngineConstants::default()
        })
}
