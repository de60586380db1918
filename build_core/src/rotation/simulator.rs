//! Event-driven rotation simulation

use super::{CastRecord, RotationSkill, SimulationResult};
use crate::config::EngineConstants;
use crate::damage::{
    calculate_damage, calculate_heal, is_positive, ArmorClass, InvalidInputError,
    STANDARD_TARGET_ARMOR,
};
use crate::stat_block::{BaseStats, Modifier};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The target being attacked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatContext {
    /// Target armor, positive
    pub target_armor: f64,
    /// Display label for reports
    #[serde(default)]
    pub label: String,
}

impl CombatContext {
    pub fn new(target_armor: f64) -> Self {
        CombatContext {
            target_armor,
            label: String::new(),
        }
    }

    /// Heavy armor benchmark target
    pub fn standard() -> Self {
        CombatContext {
            target_armor: STANDARD_TARGET_ARMOR,
            label: "standard target".to_string(),
        }
    }

    /// Benchmark target of an armor class
    pub fn against(class: ArmorClass) -> Self {
        CombatContext {
            target_armor: class.armor(),
            label: format!("{:?} armor target", class).to_lowercase(),
        }
    }

    /// Target configured in engine constants
    pub fn from_constants(constants: &EngineConstants) -> Self {
        CombatContext {
            target_armor: constants.target.armor,
            label: "configured target".to_string(),
        }
    }
}

impl Default for CombatContext {
    fn default() -> Self {
        Self::standard()
    }
}

/// Actor state; transitions Idle -> Casting -> Idle ... -> Terminated
#[derive(Debug, Clone, Copy, PartialEq)]
enum ActorState {
    Idle,
    Casting { skill: usize, start: f64, end: f64 },
    Terminated,
}

/// Mutable state of one run
struct Actor<'a> {
    skills: &'a [RotationSkill],
    /// Earliest time each skill can start again
    ready_at: Vec<f64>,
    time: f64,
    state: ActorState,
}

impl<'a> Actor<'a> {
    fn new(skills: &'a [RotationSkill]) -> Self {
        Actor {
            skills,
            ready_at: vec![0.0; skills.len()],
            time: 0.0,
            state: ActorState::Idle,
        }
    }

    /// Lowest priority value among available skills, earliest listed on ties
    fn choose(&self) -> Option<usize> {
        self.skills
            .iter()
            .enumerate()
            .filter(|(i, _)| self.ready_at[*i] <= self.time)
            .min_by_key(|(i, skill)| (skill.priority, *i))
            .map(|(i, _)| i)
    }

    fn next_ready_time(&self) -> f64 {
        self.ready_at.iter().copied().fold(f64::INFINITY, f64::min)
    }
}

/// Simulate a single actor casting `skills` for `duration` seconds.
///
/// A cast that starts before `duration` is counted in full even when it ends
/// after it. Cooldowns run from the end of a cast. DPS and HPS use the
/// nominal `duration`.
pub fn simulate_rotation(
    base_stats: &BaseStats,
    modifiers: &[Modifier],
    context: &CombatContext,
    skills: &[RotationSkill],
    duration: f64,
    weapon_strength: f64,
) -> Result<SimulationResult, InvalidInputError> {
    if !is_positive(duration) {
        return Err(InvalidInputError::NonPositiveDuration(duration));
    }
    if !is_positive(weapon_strength) {
        return Err(InvalidInputError::NonPositiveWeaponStrength(weapon_strength));
    }
    if !is_positive(context.target_armor) {
        return Err(InvalidInputError::NonPositiveArmor(context.target_armor));
    }
    if skills.is_empty() {
        return Err(InvalidInputError::EmptySkillSet);
    }

    let mut names = HashSet::new();
    for skill in skills {
        skill.validate()?;
        if !names.insert(skill.name.as_str()) {
            return Err(InvalidInputError::DuplicateSkill(skill.name.clone()));
        }
    }

    let stats = base_stats.with_modifiers(modifiers)?;

    let mut result = SimulationResult::new(duration, skills.iter().map(|s| s.name.as_str()));
    let mut actor = Actor::new(skills);

    loop {
        match actor.state {
            ActorState::Idle => {
                if actor.time >= duration {
                    actor.state = ActorState::Terminated;
                    continue;
                }
                match actor.choose() {
                    Some(index) => {
                        let start = actor.time;
                        actor.state = ActorState::Casting {
                            skill: index,
                            start,
                            end: start + skills[index].cast_time,
                        };
                    }
                    None => {
                        // Nothing ready: jump to the next cooldown expiry
                        actor.time = actor.next_ready_time();
                    }
                }
            }
            ActorState::Casting { skill, start, end } => {
                let cast = &skills[skill];
                let damage = calculate_damage(
                    stats.power,
                    weapon_strength,
                    cast.damage_coefficient,
                    context.target_armor,
                )?;
                let heal = calculate_heal(cast.base_heal, stats.healing_power, cast.heal_coefficient);

                log::trace!(
                    "{:>8.3}s cast '{}' -> {:.1} damage, {:.1} heal",
                    start,
                    cast.name,
                    damage,
                    heal
                );

                result.record(CastRecord {
                    skill: cast.name.clone(),
                    start,
                    end,
                    damage,
                    heal,
                });

                actor.time = end;
                actor.ready_at[skill] = end + cast.cooldown;
                actor.state = ActorState::Idle;
            }
            ActorState::Terminated => break,
        }
    }

    let result = result.finish();
    log::debug!(
        "Simulated {} skills over {:.1}s against armor {}: {}",
        skills.len(),
        duration,
        context.target_armor,
        result.summary()
    );

    Ok(result)
}
