//! SimulationResult - Outcome of one rotation run

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate output of one rotation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Nominal duration the rates are computed over
    pub duration: f64,

    // === Totals ===
    pub total_damage: f64,
    pub total_heal: f64,
    pub dps: f64,
    pub hps: f64,

    // === Breakdown ===
    /// Per skill tallies, keyed by skill name
    pub per_skill: BTreeMap<String, SkillTally>,
    /// Every resolved cast in order
    #[serde(default)]
    pub timeline: Vec<CastRecord>,
}

/// Totals for one skill
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillTally {
    pub casts: u32,
    pub total_damage: f64,
    pub total_heal: f64,
}

/// One resolved cast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastRecord {
    pub skill: String,
    /// Cast start in seconds
    pub start: f64,
    /// Cast end in seconds, may be past the duration
    pub end: f64,
    pub damage: f64,
    pub heal: f64,
}

impl SimulationResult {
    /// Start an empty result with a zero tally for every skill
    pub(crate) fn new<'a>(duration: f64, skill_names: impl IntoIterator<Item = &'a str>) -> Self {
        SimulationResult {
            duration,
            per_skill: skill_names
                .into_iter()
                .map(|name| (name.to_string(), SkillTally::default()))
                .collect(),
            ..Default::default()
        }
    }

    /// Record a resolved cast
    pub(crate) fn record(&mut self, cast: CastRecord) {
        let tally = self.per_skill.entry(cast.skill.clone()).or_default();
        tally.casts += 1;
        tally.total_damage += cast.damage;
        tally.total_heal += cast.heal;
        self.timeline.push(cast);
    }

    /// Derive totals from the per skill tallies and rates from the nominal duration
    pub(crate) fn finish(mut self) -> Self {
        self.total_damage = self.per_skill.values().map(|t| t.total_damage).sum();
        self.total_heal = self.per_skill.values().map(|t| t.total_heal).sum();
        self.dps = self.total_damage / self.duration;
        self.hps = self.total_heal / self.duration;
        self
    }

    /// Number of casts of a skill (0 if unknown)
    pub fn casts_of(&self, skill: &str) -> u32 {
        self.per_skill.get(skill).map(|t| t.casts).unwrap_or(0)
    }

    /// Total number of casts
    pub fn total_casts(&self) -> u32 {
        self.per_skill.values().map(|t| t.casts).sum()
    }

    /// Fraction of total damage dealt by a skill
    pub fn damage_share(&self, skill: &str) -> f64 {
        if self.total_damage <= 0.0 {
            return 0.0;
        }
        self.per_skill
            .get(skill)
            .map(|t| t.total_damage / self.total_damage)
            .unwrap_or(0.0)
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if self.total_damage > 0.0 {
            parts.push(format!("{:.0} DPS", self.dps));
            let top = self
                .per_skill
                .iter()
                .filter(|(_, t)| t.total_damage > 0.0)
                .max_by(|a, b| a.1.total_damage.total_cmp(&b.1.total_damage));
            if let Some((name, _)) = top {
                parts.push(format!("top {} {:.0}%", name, self.damage_share(name) * 100.0));
            }
        }
        if self.total_heal > 0.0 {
            parts.push(format!("{:.0} HPS", self.hps));
        }
        parts.push(format!("{} casts over {:.1}s", self.total_casts(), self.duration));

        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cast(skill: &str, start: f64, damage: f64, heal: f64) -> CastRecord {
        CastRecord {
            skill: skill.to_string(),
            start,
            end: start + 1.0,
            damage,
            heal,
        }
    }

    #[test]
    fn test_totals_match_tallies() {
        let mut result = SimulationResult::new(10.0, ["a", "b"]);
        result.record(cast("a", 0.0, 100.0, 0.0));
        result.record(cast("b", 1.0, 50.0, 25.0));
        result.record(cast("a", 2.0, 100.0, 0.0));
        let result = result.finish();

        assert!((result.total_damage - 250.0).abs() < f64::EPSILON);
        assert!((result.total_heal - 25.0).abs() < f64::EPSILON);
        assert!((result.dps - 25.0).abs() < f64::EPSILON);
        assert!((result.hps - 2.5).abs() < f64::EPSILON);
        assert_eq!(result.casts_of("a"), 2);
        assert_eq!(result.total_casts(), 3);
        assert_eq!(result.timeline.len(), 3);
    }

    #[test]
    fn test_uncast_skill_listed() {
        let result = SimulationResult::new(5.0, ["idle"]).finish();
        assert_eq!(result.per_skill["idle"].casts, 0);
        assert_eq!(result.casts_of("missing"), 0);
    }

    #[test]
    fn test_damage_share() {
        let mut result = SimulationResult::new(10.0, ["a", "b"]);
        result.record(cast("a", 0.0, 300.0, 0.0));
        result.record(cast("b", 1.0, 100.0, 0.0));
        let result = result.finish();

        assert!((result.damage_share("a") - 0.75).abs() < f64::EPSILON);
        assert!((result.damage_share("c") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary() {
        let mut result = SimulationResult::new(10.0, ["a"]);
        result.record(cast("a", 0.0, 1000.0, 0.0));
        let summary = result.finish().summary();
        assert!(summary.contains("100 DPS"));
        assert!(summary.contains("top a 100%"));
        assert!(!summary.contains("HPS"));
        assert!(summary.contains("1 casts"));
    }
}
