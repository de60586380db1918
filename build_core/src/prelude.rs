//! Prelude module for convenient imports
//!
//! ```rust
//! use build_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Profession, SkillSlot, StatKind};

// Codec
pub use crate::codec::{decode, encode, DecodedBuildTemplate, TraitChoices};

// Gear
pub use crate::gear::{get_prefix_stats, list_prefixes, suggest_prefixes, GearPrefix, Role, StatProfile};

// Stats and damage
pub use crate::damage::{calculate_damage, calculate_heal, ArmorClass};
pub use crate::stat_block::{BaseStats, Modifier, ModifierKind};

// Simulation
pub use crate::rotation::{simulate_rotation, CombatContext, RotationSkill, SimulationResult};

// Errors
pub use crate::analysis::BuildError;
pub use crate::codec::DecodeError;
pub use crate::damage::InvalidInputError;
pub use crate::gear::UnknownPrefixError;
