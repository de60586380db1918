//! BuildReport - Structured analysis payload for downstream services

use crate::codec::{DecodedBuildTemplate, TraitChoices};
use crate::gear::GearPrefix;
use crate::rotation::SimulationResult;
use crate::stat_block::BaseStats;
use crate::types::{Profession, SkillSlot};
use serde::{Deserialize, Serialize};

/// A specialization slot with its name if the lookup knew it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSpecialization {
    pub slot: usize,
    pub id: u8,
    pub name: Option<String>,
    pub elite: bool,
    pub traits: TraitChoices,
}

/// A skill palette entry with its name if the lookup knew it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSkill {
    pub slot: SkillSlot,
    pub id: u16,
    pub name: Option<String>,
    /// Underwater palette entry
    pub aquatic: bool,
}

/// Everything the engine knows about a build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildReport {
    pub template: DecodedBuildTemplate,
    pub profession: Option<Profession>,
    pub specializations: Vec<ResolvedSpecialization>,
    pub skills: Vec<ResolvedSkill>,
    pub gear: Option<GearPrefix>,
    /// Attributes after gear and modifiers
    pub effective_stats: BaseStats,
    pub simulation: Option<SimulationResult>,
}

impl BuildReport {
    /// Pretty JSON for the analysis service or storage layer
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Ids the lookup could not resolve
    pub fn unresolved_ids(&self) -> (Vec<u8>, Vec<u16>) {
        let specs = self
            .specializations
            .iter()
            .filter(|s| s.name.is_none())
            .map(|s| s.id)
            .collect();
        let skills = self
            .skills
            .iter()
            .filter(|s| s.name.is_none())
            .map(|s| s.id)
            .collect();
        (specs, skills)
    }

    /// Elite specialization name, if any slot resolved to one
    pub fn elite_specialization(&self) -> Option<&str> {
        self.specializations
            .iter()
            .find(|s| s.elite)
            .and_then(|s| s.name.as_deref())
    }
}
