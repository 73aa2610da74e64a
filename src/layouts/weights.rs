//! Compatibility score weights for relationship-style layouts.
//!
//! Weights are data attached to a layout. `analysis::ScoreEngine` applies
//! them; a layout without weights produces no score.

use serde::{Deserialize, Serialize};

use crate::cards::Suit;

/// One weighted contribution to the score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PositionWeight {
    /// Added once per upright card.
    PerUpright { bonus: i32 },
    /// Added when two positions share an orientation.
    SharedOrientation { a: usize, b: usize, bonus: i32 },
    /// `bonus` when the position is upright, minus `penalty` when reversed.
    UprightAt { position: usize, bonus: i32, penalty: i32 },
    /// Added once per card of the suit.
    PerSuit { suit: Suit, bonus: i32 },
    /// Added once per major-arcana card.
    PerMajor { bonus: i32 },
}

impl PositionWeight {
    /// Short label for logging.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            PositionWeight::PerUpright { .. } => "per upright",
            PositionWeight::SharedOrientation { .. } => "shared orientation",
            PositionWeight::UprightAt { .. } => "upright at position",
            PositionWeight::PerSuit { .. } => "per suit",
            PositionWeight::PerMajor { .. } => "per major",
        }
    }
}

/// Base score plus weighted rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub base: i32,
    pub rules: Vec<PositionWeight>,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            base: 50,
            rules: Vec::new(),
        }
    }
}

impl ScoreWeights {
    #[must_use]
    pub fn new(base: i32) -> Self {
        Self {
            base,
            rules: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_rule(mut self, rule: PositionWeight) -> Self {
        self.rules.push(rule);
        self
    }

    /// Weights for the eleven-card relationship layout.
    ///
    /// Positions 0 and 1 are the seeker and partner; 10 is the outcome.
    #[must_use]
    pub fn relationship() -> Self {
        Self::new(50)
            .with_rule(PositionWeight::PerUpright { bonus: 5 })
            .with_rule(PositionWeight::SharedOrientation { a: 0, b: 1, bonus: 10 })
            .with_rule(PositionWeight::UprightAt {
                position: 10,
                bonus: 15,
                penalty: 5,
            })
            .with_rule(PositionWeight::PerSuit {
                suit: Suit::Cups,
                bonus: 3,
            })
            .with_rule(PositionWeight::PerMajor { bonus: 2 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_weights() {
        let weights = ScoreWeights::relationship();
        assert_eq!(weights.base, 50);
        assert_eq!(weights.rules.len(), 5);
    }

    #[test]
    fn test_weight_json() {
        let json = r#"{ "base": 40, "rules": [
            { "kind": "per_suit", "suit": "wands", "bonus": 4 },
            { "kind": "upright_at", "position": 2, "bonus": 10, "penalty": 3 }
        ] }"#;
        let weights: ScoreWeights = serde_json::from_str(json).unwrap();
        assert_eq!(weights.base, 40);
        assert_eq!(
            weights.rules[0],
            PositionWeight::PerSuit {
                suit: Suit::Wands,
                bonus: 4
            }
        );
        assert_eq!(weights.rules[1].label(), "upright at position");
    }
}
