//! Role-based prefix suggestion, derived purely from the prefix table

use super::{registry, GearPrefix, PrefixRegistry};
use crate::types::StatKind;
use serde::{Deserialize, Serialize};

/// Combat role a build is geared for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    PowerDps,
    ConditionDps,
    Healer,
    Tank,
    BoonSupport,
}

impl Role {
    pub fn all() -> &'static [Role] {
        &[
            Role::PowerDps,
            Role::ConditionDps,
            Role::Healer,
            Role::Tank,
            Role::BoonSupport,
        ]
    }

    /// How much one point of a stat is worth to this role
    pub fn weight(self, stat: StatKind) -> i32 {
        use StatKind::*;
        match (self, stat) {
            (Role::PowerDps, Power) => 3,
            (Role::PowerDps, Precision) | (Role::PowerDps, Ferocity) => 2,

            (Role::ConditionDps, ConditionDamage) => 3,
            (Role::ConditionDps, Expertise) => 2,
            (Role::ConditionDps, Precision) | (Role::ConditionDps, Power) => 1,

            (Role::Healer, HealingPower) => 3,
            (Role::Healer, Concentration) => 2,
            (Role::Healer, Vitality) | (Role::Healer, Toughness) => 1,

            (Role::Tank, Toughness) => 3,
            (Role::Tank, Vitality) => 2,
            (Role::Tank, HealingPower) => 1,

            (Role::BoonSupport, Concentration) => 3,
            (Role::BoonSupport, HealingPower)
            | (Role::BoonSupport, Toughness)
            | (Role::BoonSupport, Vitality)
            | (Role::BoonSupport, Power) => 1,

            _ => 0,
        }
    }

    /// Weighted score of a prefix for this role
    pub fn score(self, prefix: &GearPrefix) -> i32 {
        prefix
            .stats
            .iter()
            .map(|(stat, points)| self.weight(stat) * points)
            .sum()
    }
}

/// Rank a registry's prefixes for a role, best first.
/// Prefixes contributing nothing to the role are left out.
pub fn rank_prefixes(registry: &PrefixRegistry, role: Role) -> Vec<&GearPrefix> {
    let mut scored: Vec<(i32, &GearPrefix)> = registry
        .iter()
        .map(|prefix| (role.score(prefix), prefix))
        .filter(|(score, _)| *score > 0)
        .collect();

    // Stable: equal scores keep registry (name) order
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, prefix)| prefix).collect()
}

/// Suggest prefixes from the process-wide registry for a role
pub fn suggest_prefixes(role: Role) -> Vec<&'static GearPrefix> {
    rank_prefixes(registry(), role)
}
