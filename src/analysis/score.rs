//! Compatibility score.
//!
//! The score starts at the weights' base and each rule adds its
//! contribution. The running total may go anywhere; only the final value
//! is clamped into 0..=100.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layouts::{PositionWeight, ScoreWeights};

use super::draw::DrawView;

/// Qualitative band for a score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Promising,
    Mixed,
    NeedsEffort,
}

impl ScoreBand {
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreBand::Excellent,
            60..=79 => ScoreBand::Promising,
            40..=59 => ScoreBand::Mixed,
            _ => ScoreBand::NeedsEffort,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Promising => "Promising",
            ScoreBand::Mixed => "Mixed",
            ScoreBand::NeedsEffort => "Needs Effort",
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            ScoreBand::Excellent => {
                "The two of you are deeply in tune. Keep nurturing what you share."
            }
            ScoreBand::Promising => {
                "There is real potential here. Patience and honest talk will carry it further."
            }
            ScoreBand::Mixed => {
                "Strengths and frictions sit side by side. Name them openly and work through them together."
            }
            ScoreBand::NeedsEffort => {
                "This bond asks for effort from both sides. Start with understanding before expectations."
            }
        }
    }
}

/// One rule's contribution to a score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreContribution {
    pub rule: String,
    pub points: i32,
}

/// A computed score with its band and breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: u8,
    pub band: ScoreBand,
    pub contributions: Vec<ScoreContribution>,
}

/// Score engine.
pub struct ScoreEngine;

impl ScoreEngine {
    /// Score in 0..=100.
    #[must_use]
    pub fn score(view: &DrawView<'_>, weights: &ScoreWeights) -> u8 {
        Self::report(view, weights).score
    }

    /// Score with band and per-rule breakdown.
    #[must_use]
    pub fn report(view: &DrawView<'_>, weights: &ScoreWeights) -> ScoreReport {
        let contributions: Vec<ScoreContribution> = weights
            .rules
            .iter()
            .map(|rule| ScoreContribution {
                rule: rule.label().to_string(),
                points: contribution(view, rule),
            })
            .collect();

        let raw = contributions
            .iter()
            .fold(i64::from(weights.base), |acc, c| acc + i64::from(c.points));
        let score = raw.clamp(0, 100) as u8;
        debug!(raw, score, "compatibility score");

        ScoreReport {
            score,
            band: ScoreBand::from_score(score),
            contributions,
        }
    }
}

fn contribution(view: &DrawView<'_>, rule: &PositionWeight) -> i32 {
    let counts = view.counts();
    let times = |n: usize, bonus: i32| i32::try_from(n).unwrap_or(i32::MAX).saturating_mul(bonus);

    match *rule {
        PositionWeight::PerUpright { bonus } => times(counts.upright, bonus),
        PositionWeight::SharedOrientation { a, b, bonus } => {
            match (view.at(a), view.at(b)) {
                (Some(x), Some(y)) if x.drawn.orientation == y.drawn.orientation => bonus,
                _ => 0,
            }
        }
        PositionWeight::UprightAt {
            position,
            bonus,
            penalty,
        } => match view.at(position) {
            Some(slot) if slot.is_upright() => bonus,
            Some(_) => penalty.saturating_neg(),
            None => 0,
        },
        PositionWeight::PerSuit { suit, bonus } => times(counts.suit(suit), bonus),
        PositionWeight::PerMajor { bonus } => times(counts.majors, bonus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardCatalog, DrawnCard};
    use crate::layouts::LayoutRegistry;

    fn cup_score(cards: &[DrawnCard]) -> ScoreReport {
        let catalog = CardCatalog::standard();
        let layouts = LayoutRegistry::builtin();
        let layout = layouts.get("cup_of_relationship").unwrap();
        let view = DrawView::new(cards, &catalog, layout);
        ScoreEngine::report(&view, layout.score_weights.as_ref().unwrap())
    }

    #[test]
    fn test_all_upright_relationship_is_excellent() {
        // Ace..Jack of Wands, all upright
        let cards: Vec<DrawnCard> = (0..11u32)
            .map(|i| DrawnCard::upright(22 + i, i as usize))
            .collect();
        let report = cup_score(&cards);
        // 50 + 55 + 10 + 15
        assert_eq!(report.score, 100);
        assert_eq!(report.band, ScoreBand::Excellent);
    }

    #[test]
    fn test_mixed_relationship() {
        // Ace..Jack of Swords; seeker and outcome reversed, partner upright
        let cards: Vec<DrawnCard> = (0..11u32)
            .map(|i| {
                let pos = i as usize;
                if matches!(pos, 0 | 10) {
                    DrawnCard::reversed(50 + i, pos)
                } else {
                    DrawnCard::upright(50 + i, pos)
                }
            })
            .collect();
        let report = cup_score(&cards);
        // 50 + 9*5 + 0 - 5 = 90
        assert_eq!(report.score, 90);

        let points: Vec<i32> = report.contributions.iter().map(|c| c.points).collect();
        assert_eq!(points, vec![45, 0, -5, 0, 0]);
    }

    #[test]
    fn test_clamped_at_zero() {
        let catalog = CardCatalog::standard();
        let layouts = LayoutRegistry::builtin();
        let layout = layouts.get("three_card_timeline").unwrap();
        let cards = [DrawnCard::reversed(0, 0), DrawnCard::reversed(1, 1)];
        let view = DrawView::new(&cards, &catalog, layout);
        let weights = ScoreWeights::new(10).with_rule(PositionWeight::UprightAt {
            position: 0,
            bonus: 5,
            penalty: 40,
        });
        assert_eq!(ScoreEngine::score(&view, &weights), 0);
    }

    #[test]
    fn test_extreme_weights_saturate() {
        let catalog = CardCatalog::standard();
        let layouts = LayoutRegistry::builtin();
        let layout = layouts.get("three_card_timeline").unwrap();
        let cards = [DrawnCard::reversed(0, 0), DrawnCard::upright(1, 1)];
        let view = DrawView::new(&cards, &catalog, layout);
        let weights = ScoreWeights::new(0)
            .with_rule(PositionWeight::UprightAt {
                position: 0,
                bonus: 0,
                penalty: i32::MIN,
            })
            .with_rule(PositionWeight::PerUpright { bonus: i32::MIN });

        let report = ScoreEngine::report(&view, &weights);
        let points: Vec<i32> = report.contributions.iter().map(|c| c.points).collect();
        assert_eq!(points, vec![i32::MAX, i32::MIN]);
        assert_eq!(report.score, 0);
    }

    #[test]
    fn test_missing_position_contributes_nothing() {
        let report = cup_score(&[DrawnCard::upright(36, 0)]);
        // 50 + 5 + 3 (one Cup)
        assert_eq!(report.score, 58);
        assert_eq!(report.band, ScoreBand::Mixed);
    }

    #[test]
    fn test_bands() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Promising);
        assert_eq!(ScoreBand::from_score(40), ScoreBand::Mixed);
        assert_eq!(ScoreBand::from_score(39), ScoreBand::NeedsEffort);
    }
}
