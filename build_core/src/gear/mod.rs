//! Gear prefix registry
//!
//! The registry is built from the embedded prefix table on first use and is
//! read-only afterwards. Lookups are ASCII case-insensitive.

mod prefix;
mod roles;

pub use prefix::{GearPrefix, StatProfile};
pub use roles::{rank_prefixes, suggest_prefixes, Role};

use crate::config::{default_prefix_table, PrefixTable};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;
use thiserror::Error;

/// Requested prefix is not in the registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown gear prefix: '{0}'")]
pub struct UnknownPrefixError(pub String);

static REGISTRY: OnceLock<PrefixRegistry> = OnceLock::new();

/// Immutable table of gear prefixes keyed by lowercase name
#[derive(Debug, Clone, Default)]
pub struct PrefixRegistry {
    entries: BTreeMap<String, GearPrefix>,
}

impl PrefixRegistry {
    /// Build a registry from an already validated table
    pub fn from_table(table: PrefixTable) -> Self {
        let entries = table
            .prefixes
            .into_iter()
            .map(|prefix| (normalize(&prefix.name), prefix))
            .collect();
        PrefixRegistry { entries }
    }

    /// Look up a prefix by name
    pub fn get(&self, name: &str) -> Result<&GearPrefix, UnknownPrefixError> {
        self.entries
            .get(&normalize(name))
            .ok_or_else(|| UnknownPrefixError(name.to_string()))
    }

    /// Canonical names of all prefixes
    pub fn names(&self) -> BTreeSet<&str> {
        self.entries.values().map(|p| p.name.as_str()).collect()
    }

    /// Iterate prefixes in name order
    pub fn iter(&self) -> impl Iterator<Item = &GearPrefix> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// The process-wide registry
pub fn registry() -> &'static PrefixRegistry {
    REGISTRY.get_or_init(|| match default_prefix_table() {
        Ok(table) => {
            let registry = PrefixRegistry::from_table(table);
            log::debug!("Loaded {} gear prefixes", registry.len());
            registry
        }
        Err(e) => {
            log::error!("Embedded prefix table failed to load: {}", e);
            PrefixRegistry::default()
        }
    })
}

/// Stat points for a named prefix
pub fn get_prefix_stats(name: &str) -> Result<StatProfile, UnknownPrefixError> {
    registry().get(name).map(|prefix| prefix.stats)
}

/// Full registry entry for a named prefix
pub fn get_prefix(name: &str) -> Result<&'static GearPrefix, UnknownPrefixError> {
    registry().get(name)
}

/// Names of all registered prefixes
pub fn list_prefixes() -> BTreeSet<&'static str> {
    registry().names()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StatKind;

    #[test]
    fn test_registry_populated() {
        assert!(list_prefixes().len() >= 30);
        assert!(list_prefixes().contains("Berserker"));
        assert!(list_prefixes().contains("Minstrel"));
    }

    #[test]
    fn test_every_prefix_has_all_stats() {
        for name in list_prefixes() {
            let map = get_prefix_stats(name).unwrap().to_map();
            for stat in StatKind::all() {
                assert!(map.contains_key(stat), "{} missing {}", name, stat);
            }
        }
    }

    #[test]
    fn test_berserker_stats() {
        let stats = get_prefix_stats("Berserker").unwrap();
        assert_eq!(stats.power, 3);
        assert_eq!(stats.precision, 2);
        assert_eq!(stats.ferocity, 2);
        assert_eq!(stats.healing_power, 0);
    }

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!(get_prefix_stats("minstrel"), get_prefix_stats("Minstrel"));
        assert_eq!(get_prefix(" VIPER ").unwrap().name, "Viper");
    }

    #[test]
    fn test_unknown_prefix() {
        let err = get_prefix_stats("Ascended").unwrap_err();
        assert_eq!(err, UnknownPrefixError("Ascended".to_string()));
        assert!(err.to_string().contains("Ascended"));
    }

    #[test]
    fn test_celestial_spreads_everywhere() {
        let celestial = get_prefix_stats("Celestial").unwrap();
        assert!(celestial.iter().all(|(_, v)| v > 0));
    }
}
