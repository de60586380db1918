//! Rotation simulation - Skill priority casting over a fixed duration

mod result;
mod simulator;
mod skill;

pub use result::{CastRecord, SimulationResult, SkillTally};
pub use simulator::{simulate_rotation, CombatContext};
pub use skill::RotationSkill;
