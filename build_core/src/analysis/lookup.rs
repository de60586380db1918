//! GameDataLookup - Resolution of raw template ids to game data

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata for a specialization id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecializationInfo {
    pub name: String,
    #[serde(default)]
    pub elite: bool,
}

/// Metadata for a skill palette id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillInfo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// External game data service.
///
/// A missing record is not an error; the id is reported unresolved.
pub trait GameDataLookup {
    fn specialization(&self, id: u8) -> Option<SpecializationInfo>;
    fn skill(&self, id: u16) -> Option<SkillInfo>;
}

/// Lookup that resolves nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl GameDataLookup for NoLookup {
    fn specialization(&self, _id: u8) -> Option<SpecializationInfo> {
        None
    }

    fn skill(&self, _id: u16) -> Option<SkillInfo> {
        None
    }
}

/// In-memory lookup, e.g. from a cached game data export
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapLookup {
    #[serde(default)]
    pub specializations: HashMap<u8, SpecializationInfo>,
    #[serde(default)]
    pub skills: HashMap<u16, SkillInfo>,
}

impl MapLookup {
    /// Parse from JSON of the form `{"specializations": {"31": {...}}, "skills": {...}}`
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn with_specialization(mut self, id: u8, name: &str, elite: bool) -> Self {
        self.specializations.insert(
            id,
            SpecializationInfo {
                name: name.to_string(),
                elite,
            },
        );
        self
    }

    pub fn with_skill(mut self, id: u16, name: &str) -> Self {
        self.skills.insert(
            id,
            SkillInfo {
                name: name.to_string(),
                description: None,
            },
        );
        self
    }
}

impl GameDataLookup for MapLookup {
    fn specialization(&self, id: u8) -> Option<SpecializationInfo> {
        self.specializations.get(&id).cloned()
    }

    fn skill(&self, id: u16) -> Option<SkillInfo> {
        self.skills.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_lookup() {
        assert!(NoLookup.specialization(31).is_none());
        assert!(NoLookup.skill(5503).is_none());
    }

    #[test]
    fn test_map_lookup_from_json() {
        let json = r#"{
            "specializations": {"48": {"name": "Tempest", "elite": true}},
            "skills": {"5503": {"name": "Signet of Restoration"}}
        }"#;

        let lookup = MapLookup::from_json(json).unwrap();
        assert_eq!(lookup.specialization(48).unwrap().name, "Tempest");
        assert!(lookup.specialization(48).unwrap().elite);
        assert_eq!(lookup.skill(5503).unwrap().name, "Signet of Restoration");
        assert!(lookup.skill(1).is_none());
    }
}
