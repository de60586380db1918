//! build_core - Build template codec and combat simulation engine
//!
//! This library provides:
//! - Chat-code codec: decode/encode build template codes
//! - Gear prefixes: static stat distribution tables and role suggestions
//! - Damage formula: single-hit damage and heal numbers
//! - Rotation simulation: event-driven DPS/HPS over a fixed duration
//! - Build analysis: a structured report for downstream services

pub mod analysis;
pub mod codec;
pub mod config;
pub mod damage;
pub mod gear;
pub mod prelude;
pub mod rotation;
pub mod stat_block;
pub mod types;

// Re-export core types for convenience
pub use analysis::{analyze_build, AnalysisRequest, BuildError, BuildReport, GameDataLookup};
pub use codec::{decode, encode, DecodeError, DecodedBuildTemplate, TraitChoices};
pub use config::{ConfigError, EngineConstants};
pub use damage::{calculate_damage, calculate_heal, InvalidInputError};
pub use gear::{get_prefix_stats, list_prefixes, GearPrefix, StatProfile, UnknownPrefixError};
pub use rotation::{simulate_rotation, CombatContext, RotationSkill, SimulationResult, SkillTally};
pub use stat_block::{BaseStats, Modifier, ModifierKind};
pub use types::{Profession, SkillSlot, StatKind};
