//! Modifier - A single adjustment to one attribute

use crate::damage::InvalidInputError;
use crate::types::StatKind;
use serde::{Deserialize, Serialize};

/// How a modifier combines with the attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKind {
    /// Added to the base value
    Flat,
    /// Summed with other increased modifiers, then applied once
    Increased,
    /// Applied as its own multiplier
    More,
}

/// Attribute modifier from a buff, trait or food
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    pub stat: StatKind,
    pub kind: ModifierKind,
    /// Flat amount, or a fraction for increased/more (0.10 = 10%)
    pub value: f64,
}

impl Modifier {
    pub fn flat(stat: StatKind, value: f64) -> Self {
        Modifier {
            stat,
            kind: ModifierKind::Flat,
            value,
        }
    }

    pub fn increased(stat: StatKind, value: f64) -> Self {
        Modifier {
            stat,
            kind: ModifierKind::Increased,
            value,
        }
    }

    pub fn more(stat: StatKind, value: f64) -> Self {
        Modifier {
            stat,
            kind: ModifierKind::More,
            value,
        }
    }

    /// Reject NaN and infinite values
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        if !self.value.is_finite() {
            return Err(InvalidInputError::InvalidModifier {
                stat: self.stat,
                value: self.value,
            });
        }
        Ok(())
    }
}
