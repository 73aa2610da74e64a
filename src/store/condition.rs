//! Pattern conditions.
//!
//! Conditions are data, so pattern tables can be authored in JSON without
//! touching code. Evaluation lives in `analysis::pattern`.

use serde::{Deserialize, Serialize};

use crate::cards::{Arcana, Element, Suit};
use crate::core::Orientation;

/// Inclusive count range. A missing `max` means unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    #[serde(default)]
    pub min: usize,
    #[serde(default)]
    pub max: Option<usize>,
}

impl CountRange {
    #[must_use]
    pub const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    #[must_use]
    pub const fn at_most(max: usize) -> Self {
        Self { min: 0, max: Some(max) }
    }

    #[must_use]
    pub const fn between(min: usize, max: usize) -> Self {
        Self { min, max: Some(max) }
    }

    #[must_use]
    pub fn contains(&self, value: usize) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }
}

/// Which attribute two positions are compared on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionAspect {
    Arcana,
    Orientation,
    Suit,
    /// Arcana or orientation: positions differ if either differs.
    Either,
}

/// A structural condition over a whole draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCondition {
    // === Aggregate Counts ===

    /// Number of major-arcana cards.
    Majors(CountRange),

    /// Number of minor-arcana cards.
    Minors(CountRange),

    /// Number of upright cards.
    Upright(CountRange),

    /// Number of reversed cards.
    Reversed(CountRange),

    /// Upright cards as a whole percentage of the draw.
    UprightPercent(CountRange),

    /// Number of cards of a suit.
    Suit { suit: Suit, range: CountRange },

    /// Number of cards of an element.
    Element { element: Element, range: CountRange },

    // === Position Checks ===

    /// Two positions agree on the aspect.
    PositionsMatch { a: usize, b: usize, aspect: PositionAspect },

    /// Two positions differ on the aspect.
    PositionsDiffer { a: usize, b: usize, aspect: PositionAspect },

    /// A position holds a card in the orientation.
    PositionOrientation { position: usize, orientation: Orientation },

    /// A position holds a card of the arcana.
    PositionArcana { position: usize, arcana: Arcana },

    // === Combinators ===

    /// All conditions must be true.
    All(Vec<PatternCondition>),

    /// At least one condition must be true.
    Any(Vec<PatternCondition>),

    /// Condition must be false.
    Not(Box<PatternCondition>),

    // === Special ===

    /// Always matches.
    Always,

    /// Never matches (disabled pattern).
    Never,
}

impl PatternCondition {
    /// At least `min` major-arcana cards.
    #[must_use]
    pub const fn majors_at_least(min: usize) -> Self {
        Self::Majors(CountRange::at_least(min))
    }

    /// At least `min` upright cards.
    #[must_use]
    pub const fn upright_at_least(min: usize) -> Self {
        Self::Upright(CountRange::at_least(min))
    }

    /// At least `min` reversed cards.
    #[must_use]
    pub const fn reversed_at_least(min: usize) -> Self {
        Self::Reversed(CountRange::at_least(min))
    }

    /// At least `min` cards of a suit.
    #[must_use]
    pub const fn suit_at_least(suit: Suit, min: usize) -> Self {
        Self::Suit {
            suit,
            range: CountRange::at_least(min),
        }
    }

    /// Create an AND condition.
    pub fn all(conditions: impl IntoIterator<Item = PatternCondition>) -> Self {
        Self::All(conditions.into_iter().collect())
    }

    /// Create an OR condition.
    pub fn any(conditions: impl IntoIterator<Item = PatternCondition>) -> Self {
        Self::Any(conditions.into_iter().collect())
    }

    /// Negate this condition.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Add another condition with AND.
    #[must_use]
    pub fn and(self, other: PatternCondition) -> Self {
        match self {
            Self::All(mut conditions) => {
                conditions.push(other);
                Self::All(conditions)
            }
            _ => Self::All(vec![self, other]),
        }
    }

    /// Number of leaf predicates. Used as the specificity tie-break.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::All(conditions) | Self::Any(conditions) => {
                conditions.iter().map(Self::leaf_count).sum()
            }
            Self::Not(inner) => inner.leaf_count(),
            Self::Always | Self::Never => 0,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_range() {
        assert!(CountRange::at_least(3).contains(3));
        assert!(!CountRange::at_least(3).contains(2));
        assert!(CountRange::at_most(2).contains(0));
        assert!(!CountRange::at_most(2).contains(3));
        assert!(CountRange::between(1, 2).contains(2));
    }

    #[test]
    fn test_leaf_count() {
        assert_eq!(PatternCondition::Always.leaf_count(), 0);
        assert_eq!(PatternCondition::majors_at_least(5).leaf_count(), 1);

        let nested = PatternCondition::majors_at_least(2)
            .and(PatternCondition::upright_at_least(3))
            .and(PatternCondition::any([
                PatternCondition::suit_at_least(Suit::Cups, 2),
                PatternCondition::reversed_at_least(1).negate(),
            ]));
        assert_eq!(nested.leaf_count(), 4);
    }

    #[test]
    fn test_and_flattens() {
        let cond = PatternCondition::majors_at_least(1)
            .and(PatternCondition::upright_at_least(1))
            .and(PatternCondition::Always);
        match cond {
            PatternCondition::All(parts) => assert_eq!(parts.len(), 3),
            other => panic!("expected All, got {:?}", other),
        }
    }

    #[test]
    fn test_condition_json() {
        let json = r#"{ "all": [
            { "majors": { "min": 3 } },
            { "positions_differ": { "a": 6, "b": 7, "aspect": "either" } }
        ] }"#;
        let cond: PatternCondition = serde_json::from_str(json).unwrap();
        assert_eq!(
            cond,
            PatternCondition::all([
                PatternCondition::majors_at_least(3),
                PatternCondition::PositionsDiffer {
                    a: 6,
                    b: 7,
                    aspect: PositionAspect::Either
                },
            ])
        );
    }
}
