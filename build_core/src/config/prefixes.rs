//! Gear prefix table loading

use super::ConfigError;
use crate::gear::GearPrefix;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Container for the prefix table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefixTable {
    #[serde(rename = "prefixes")]
    pub prefixes: Vec<GearPrefix>,
}

impl PrefixTable {
    /// Check names are present and unique (case-insensitively) and no value is negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for prefix in &self.prefixes {
            let key = prefix.name.trim().to_ascii_lowercase();
            if key.is_empty() {
                return Err(ConfigError::ValidationError(
                    "prefix with empty name".to_string(),
                ));
            }
            if !seen.insert(key) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate prefix '{}'",
                    prefix.name
                )));
            }
            if let Some((stat, value)) = prefix.stats.iter().find(|(_, v)| *v < 0) {
                return Err(ConfigError::ValidationError(format!(
                    "prefix '{}' has negative {}: {}",
                    prefix.name, stat, value
                )));
            }
        }
        Ok(())
    }
}

/// Parse and validate a prefix table from a TOML string
pub fn parse_prefix_table(content: &str) -> Result<PrefixTable, ConfigError> {
    let table: PrefixTable = super::parse_toml(content)?;
    table.validate()?;
    Ok(table)
}

/// The prefix table shipped with the crate
pub fn default_prefix_table() -> Result<PrefixTable, ConfigError> {
    parse_prefix_table(include_str!("../../config/prefixes.toml"))
}
