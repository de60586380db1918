//! Build analysis - Glue between the codec, gear tables and simulator
//!
//! Produces a [`BuildReport`] for the external analysis service. Name
//! resolution goes through a caller-supplied [`GameDataLookup`].

mod lookup;
mod report;

pub use lookup::{GameDataLookup, MapLookup, NoLookup, SkillInfo, SpecializationInfo};
pub use report::{BuildReport, ResolvedSkill, ResolvedSpecialization};

use crate::codec::{decode, DecodeError};
use crate::config::EngineConstants;
use crate::damage::InvalidInputError;
use crate::gear::{get_prefix, StatProfile, UnknownPrefixError};
use crate::rotation::{simulate_rotation, CombatContext, RotationSkill};
use crate::stat_block::{BaseStats, Modifier};
use crate::types::SkillSlot;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Any failure while analysing a build
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    UnknownPrefix(#[from] UnknownPrefixError),
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    #[error("Invalid engine constants: {0}")]
    Config(String),
}

/// What to analyse
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub chat_code: String,
    /// Gear prefix worn on every piece
    #[serde(default)]
    pub gear_prefix: Option<String>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    /// Rotation to simulate; no simulation when empty
    #[serde(default)]
    pub rotation: Vec<RotationSkill>,
    #[serde(default)]
    pub context: Option<CombatContext>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub weapon_strength: Option<f64>,
}

impl AnalysisRequest {
    pub fn new(chat_code: impl Into<String>) -> Self {
        AnalysisRequest {
            chat_code: chat_code.into(),
            gear_prefix: None,
            modifiers: Vec::new(),
            rotation: Vec::new(),
            context: None,
            duration: None,
            weapon_strength: None,
        }
    }

    pub fn with_gear(mut self, prefix: impl Into<String>) -> Self {
        self.gear_prefix = Some(prefix.into());
        self
    }

    pub fn with_modifiers(mut self, modifiers: Vec<Modifier>) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec<RotationSkill>, duration: f64) -> Self {
        self.rotation = rotation;
        self.duration = Some(duration);
        self
    }
}

/// Decode, resolve, gear and simulate a build
pub fn analyze_build(
    request: &AnalysisRequest,
    constants: &EngineConstants,
    lookup: &dyn GameDataLookup,
) -> Result<BuildReport, BuildError> {
    constants
        .validate()
        .map_err(|e| BuildError::Config(e.to_string()))?;
    let template = decode(&request.chat_code)?;

    let profession = template.profession();
    if profession.is_none() {
        log::warn!("Unknown profession code {}", template.profession_code);
    }

    let specializations = template
        .active_specializations()
        .map(|(slot, id, traits)| {
            let info = lookup.specialization(id);
            if info.is_none() {
                log::warn!("Unresolved specialization id {}", id);
            }
            ResolvedSpecialization {
                slot,
                id,
                elite: info.as_ref().map(|i| i.elite).unwrap_or(false),
                name: info.map(|i| i.name),
                traits,
            }
        })
        .collect();

    let skills = SkillSlot::all()
        .iter()
        .filter_map(|slot| template.skill_in(*slot).map(|id| (*slot, id)))
        .map(|(slot, id)| {
            let name = lookup.skill(id).map(|info| info.name);
            if name.is_none() {
                log::warn!("Unresolved skill id {} in {:?}", id, slot);
            }
            ResolvedSkill {
                slot,
                id,
                name,
                aquatic: slot.is_aquatic(),
            }
        })
        .collect();

    let gear = match &request.gear_prefix {
        Some(name) => Some(get_prefix(name)?.clone()),
        None => None,
    };
    let profile = gear.as_ref().map(|g| g.stats).unwrap_or_default();
    let base_stats = BaseStats::from_prefix(&profile, &constants.stats);
    let effective_stats = base_stats.with_modifiers(&request.modifiers)?;

    let simulation = if request.rotation.is_empty() {
        None
    } else {
        let context = request
            .context
            .clone()
            .unwrap_or_else(|| CombatContext::from_constants(constants));
        Some(simulate_rotation(
            &base_stats,
            &request.modifiers,
            &context,
            &request.rotation,
            request.duration.unwrap_or(constants.simulation.duration),
            request
                .weapon_strength
                .unwrap_or(constants.simulation.weapon_strength),
        )?)
    };

    Ok(BuildReport {
        template,
        profession,
        specializations,
        skills,
        gear,
        effective_stats,
        simulation,
    })
}

/// Attributes of a character wearing a full set of the named prefix
pub fn stats_for_prefix(name: &str, constants: &EngineConstants) -> Result<BaseStats, BuildError> {
    constants
        .validate()
        .map_err(|e| BuildError::Config(e.to_string()))?;
    let profile: StatProfile = get_prefix(name)?.stats;
    let stats = BaseStats::from_prefix(&profile, &constants.stats);
    stats.validate()?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{encode, DecodedBuildTemplate, TraitChoices};
    use crate::types::{Profession, StatKind};

    fn guardian_code() -> String {
        let template = DecodedBuildTemplate::new(1)
            .with_specialization(0, 16, TraitChoices([1, 3, 2]))
            .with_specialization(1, 42, TraitChoices([2, 2, 1]))
            .with_specialization(2, 27, TraitChoices([1, 2, 2]))
            .with_skills([9083, 0, 9153, 0, 9175, 0, 9168, 0, 30461, 0]);
        encode(&template)
    }

    fn lookup() -> MapLookup {
        MapLookup::default()
            .with_specialization(16, "Zeal", false)
            .with_specialization(42, "Radiance", false)
            .with_specialization(27, "Dragonhunter", true)
            .with_skill(9083, "Receive the Light!")
    }

    #[test]
    fn test_report_without_rotation() {
        let request = AnalysisRequest::new(guardian_code()).with_gear("Berserker");
        let report = analyze_build(&request, &EngineConstants::default(), &lookup()).unwrap();

        assert_eq!(report.profession, Some(Profession::Guardian));
        assert_eq!(report.specializations.len(), 3);
        assert_eq!(report.elite_specialization(), Some("Dragonhunter"));
        assert_eq!(report.skills.len(), 5);
        assert_eq!(report.skills[0].name.as_deref(), Some("Receive the Light!"));
        assert!(report.skills.iter().all(|s| !s.aquatic));
        assert!((report.effective_stats.power - 1900.0).abs() < f64::EPSILON);
        assert!(report.simulation.is_none());

        let (specs, skills) = report.unresolved_ids();
        assert!(specs.is_empty());
        assert_eq!(skills, vec![9153, 9175, 9168, 30461]);
    }

    #[test]
    fn test_report_with_rotation() {
        let rotation = vec![
            RotationSkill::new("Spear of Justice", 0.5).with_damage(1.0).with_cooldown(12.0),
            RotationSkill::new("Auto", 1.0).with_damage(0.7).with_priority(5),
        ];
        let request = AnalysisRequest::new(guardian_code())
            .with_gear("Berserker")
            .with_modifiers(vec![Modifier::flat(StatKind::Power, 100.0)])
            .with_rotation(rotation, 30.0);

        let report = analyze_build(&request, &EngineConstants::default(), &NoLookup).unwrap();
        let simulation = report.simulation.as_ref().unwrap();
        assert!(simulation.dps > 0.0);
        assert!((simulation.duration - 30.0).abs() < f64::EPSILON);
        assert!((report.effective_stats.power - 2000.0).abs() < f64::EPSILON);

        let json = report.to_json().unwrap();
        assert!(json.contains("\"dps\""));
        assert!(json.contains("Spear of Justice"));
    }

    #[test]
    fn test_errors_map_to_build_error() {
        let constants = EngineConstants::default();

        let err = analyze_build(&AnalysisRequest::new(""), &constants, &NoLookup).unwrap_err();
        assert_eq!(err, BuildError::Decode(DecodeError::Empty));

        let request = AnalysisRequest::new(guardian_code()).with_gear("Nonexistent");
        let err = analyze_build(&request, &constants, &NoLookup).unwrap_err();
        assert!(matches!(err, BuildError::UnknownPrefix(_)));

        let request = AnalysisRequest::new(guardian_code())
            .with_rotation(vec![RotationSkill::new("Auto", 1.0)], -5.0);
        let err = analyze_build(&request, &constants, &NoLookup).unwrap_err();
        assert!(matches!(
            err,
            BuildError::InvalidInput(InvalidInputError::NonPositiveDuration(_))
        ));
    }

    #[test]
    fn test_aquatic_skills_flagged() {
        let template = DecodedBuildTemplate::new(1).with_skills([9083, 9084]);
        let request = AnalysisRequest::new(encode(&template));
        let report = analyze_build(&request, &EngineConstants::default(), &NoLookup).unwrap();

        assert_eq!(report.skills.len(), 2);
        assert!(!report.skills[0].aquatic);
        assert!(report.skills[1].aquatic);
        assert_eq!(report.skills[1].slot, SkillSlot::AquaticHeal);
        assert!(report.to_json().unwrap().contains("\"aquatic\": true"));
    }

    #[test]
    fn test_invalid_constants_rejected() {
        let mut constants = EngineConstants::default();
        constants.stats.points_scale = -1000.0;

        let request = AnalysisRequest::new(guardian_code()).with_gear("Berserker");
        let err = analyze_build(&request, &constants, &NoLookup).unwrap_err();
        assert!(matches!(err, BuildError::Config(_)));
        assert!(matches!(
            stats_for_prefix("Berserker", &constants),
            Err(BuildError::Config(_))
        ));

        let mut constants = EngineConstants::default();
        constants.target.armor = 0.0;
        let err = analyze_build(&AnalysisRequest::new(guardian_code()), &constants, &NoLookup)
            .unwrap_err();
        assert!(matches!(err, BuildError::Config(_)));
    }

    #[test]
    fn test_non_finite_modifier_without_rotation() {
        let request = AnalysisRequest::new(guardian_code())
            .with_gear("Berserker")
            .with_modifiers(vec![Modifier::increased(StatKind::Power, f64::NAN)]);
        let err = analyze_build(&request, &EngineConstants::default(), &NoLookup).unwrap_err();
        assert!(matches!(
            err,
            BuildError::InvalidInput(InvalidInputError::InvalidModifier { .. })
        ));
    }

    #[test]
    fn test_effective_stats_never_negative() {
        let request = AnalysisRequest::new(guardian_code())
            .with_gear("Berserker")
            .with_modifiers(vec![Modifier::flat(StatKind::Power, -5000.0)]);
        let report = analyze_build(&request, &EngineConstants::default(), &NoLookup).unwrap();
        assert!(report.effective_stats.validate().is_ok());
        assert!((report.effective_stats.power - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_for_prefix() {
        let stats = stats_for_prefix("Minstrel", &EngineConstants::default()).unwrap();
        assert!((stats.healing_power - 900.0).abs() < f64::EPSILON);
        assert!((stats.toughness - 1900.0).abs() < f64::EPSILON);
        assert!(stats_for_prefix("nope", &EngineConstants::default()).is_err());
    }
}
