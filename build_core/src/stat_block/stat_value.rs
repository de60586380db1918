//! StatValue - Flat → Increased → More accumulation for one attribute

use super::{Modifier, ModifierKind};
use serde::{Deserialize, Serialize};

/// One attribute with its pending modifiers.
///
/// Final value is `(base + flat) × (1 + increased) × Π(1 + more)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    /// Base value before modifiers
    pub base: f64,
    /// Sum of all flat additions
    pub flat: f64,
    /// Sum of all increased fractions (0.10 = 10%)
    pub increased: f64,
    /// Each more fraction multiplies the result separately
    pub more: Vec<f64>,
}

impl StatValue {
    /// Create a new StatValue with the given base
    pub fn with_base(base: f64) -> Self {
        StatValue {
            base,
            ..Default::default()
        }
    }

    /// Record a modifier
    pub fn apply(&mut self, modifier: &Modifier) {
        match modifier.kind {
            ModifierKind::Flat => self.flat += modifier.value,
            ModifierKind::Increased => self.increased += modifier.value,
            ModifierKind::More => self.more.push(modifier.value),
        }
    }

    /// Final value, never below zero
    pub fn compute(&self) -> f64 {
        let more_mult: f64 = self.more.iter().map(|m| 1.0 + m).product();
        ((self.base + self.flat) * (1.0 + self.increased) * more_mult).max(0.0)
    }
}
