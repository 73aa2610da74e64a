//! Pattern matcher.
//!
//! Patterns are tried in descending priority and the first whose condition
//! holds wins. Equal priorities are broken by specificity (more leaf
//! predicates first) and then by table order. When no configured pattern
//! matches, a built-in ladder guarantees a result for any non-empty draw.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{Arcana, Suit};
use crate::store::{Pattern, PatternCondition, PositionAspect};

use super::draw::{DrawSlot, DrawView};

/// Where a matched pattern came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternSource {
    Table,
    DefaultLadder,
}

/// Supporting evidence for a match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEvidence {
    pub total: usize,
    pub major_count: usize,
    pub upright_count: usize,
    pub reversed_count: usize,
    pub dominant_suit: Option<Suit>,
    /// Positions named by the condition's position checks, in order.
    pub positions: Vec<usize>,
    /// Names of positions holding upright major arcana.
    pub strongest_positions: Vec<String>,
}

/// The winning pattern. The message is still an unrendered template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchedPattern {
    pub id: String,
    pub name: String,
    pub template: String,
    pub keywords: Vec<String>,
    pub source: PatternSource,
    pub evidence: PatternEvidence,
}

impl MatchedPattern {
    /// Attach the rendered message.
    #[must_use]
    pub fn into_outcome(self, message: String) -> PatternOutcome {
        PatternOutcome {
            id: self.id,
            name: self.name,
            message,
            keywords: self.keywords,
            source: self.source,
            evidence: self.evidence,
        }
    }
}

/// A matched pattern with its rendered message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternOutcome {
    pub id: String,
    pub name: String,
    pub message: String,
    pub keywords: Vec<String>,
    pub source: PatternSource,
    pub evidence: PatternEvidence,
}

/// Evaluator for pattern conditions.
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// Check if a condition holds for a draw.
    #[must_use]
    pub fn evaluate(condition: &PatternCondition, view: &DrawView<'_>) -> bool {
        let counts = view.counts();
        match condition {
            PatternCondition::Majors(range) => range.contains(counts.majors),

            PatternCondition::Minors(range) => range.contains(counts.minors),

            PatternCondition::Upright(range) => range.contains(counts.upright),

            PatternCondition::Reversed(range) => range.contains(counts.reversed),

            PatternCondition::UprightPercent(range) => range.contains(counts.upright_percent()),

            PatternCondition::Suit { suit, range } => range.contains(counts.suit(*suit)),

            PatternCondition::Element { element, range } => {
                range.contains(counts.element(*element))
            }

            PatternCondition::PositionsMatch { a, b, aspect } => {
                match (view.at(*a), view.at(*b)) {
                    (Some(x), Some(y)) => !differs(x, y, *aspect),
                    _ => false,
                }
            }

            PatternCondition::PositionsDiffer { a, b, aspect } => {
                match (view.at(*a), view.at(*b)) {
                    (Some(x), Some(y)) => differs(x, y, *aspect),
                    _ => false,
                }
            }

            PatternCondition::PositionOrientation {
                position,
                orientation,
            } => view
                .at(*position)
                .is_some_and(|s| s.drawn.orientation == *orientation),

            PatternCondition::PositionArcana { position, arcana } => {
                view.at(*position).is_some_and(|s| match arcana {
                    Arcana::Major => s.card.is_some_and(|c| c.is_major()),
                    Arcana::Minor => s.card.is_some_and(|c| !c.is_major()),
                })
            }

            PatternCondition::All(conditions) => {
                conditions.iter().all(|c| Self::evaluate(c, view))
            }

            PatternCondition::Any(conditions) => {
                conditions.iter().any(|c| Self::evaluate(c, view))
            }

            PatternCondition::Not(inner) => !Self::evaluate(inner, view),

            PatternCondition::Always => true,

            PatternCondition::Never => false,
        }
    }
}

fn differs(a: &DrawSlot<'_>, b: &DrawSlot<'_>, aspect: PositionAspect) -> bool {
    let arcana = |s: &DrawSlot<'_>| s.card.map(|c| c.arcana);
    match aspect {
        PositionAspect::Arcana => arcana(a) != arcana(b),
        PositionAspect::Orientation => a.drawn.orientation != b.drawn.orientation,
        PositionAspect::Suit => a.suit() != b.suit(),
        PositionAspect::Either => {
            arcana(a) != arcana(b) || a.drawn.orientation != b.drawn.orientation
        }
    }
}

fn collect_positions(condition: &PatternCondition, out: &mut Vec<usize>) {
    match condition {
        PatternCondition::PositionsMatch { a, b, .. }
        | PatternCondition::PositionsDiffer { a, b, .. } => {
            out.push(*a);
            out.push(*b);
        }
        PatternCondition::PositionOrientation { position, .. }
        | PatternCondition::PositionArcana { position, .. } => out.push(*position),
        PatternCondition::All(conditions) | PatternCondition::Any(conditions) => {
            for c in conditions {
                collect_positions(c, out);
            }
        }
        PatternCondition::Not(inner) => collect_positions(inner, out),
        _ => {}
    }
}

/// Pattern matcher.
pub struct PatternMatcher;

impl PatternMatcher {
    /// Best matching pattern, or `None` for an empty draw.
    #[must_use]
    pub fn match_draw<'p>(
        view: &DrawView<'_>,
        patterns: impl IntoIterator<Item = &'p Pattern>,
    ) -> Option<MatchedPattern> {
        if view.is_empty() {
            return None;
        }

        let mut ordered: Vec<&Pattern> = patterns.into_iter().collect();
        // Stable: equal keys keep table order.
        ordered.sort_by(|x, y| {
            y.priority
                .cmp(&x.priority)
                .then_with(|| y.condition.leaf_count().cmp(&x.condition.leaf_count()))
        });

        if let Some(pattern) = ordered
            .into_iter()
            .find(|p| ConditionEvaluator::evaluate(&p.condition, view))
        {
            debug!(pattern = %pattern.id, priority = pattern.priority, "pattern matched");
            let mut positions = Vec::new();
            collect_positions(&pattern.condition, &mut positions);
            return Some(MatchedPattern {
                id: pattern.id.clone(),
                name: pattern.name.clone(),
                template: pattern.template.clone(),
                keywords: pattern.keywords.clone(),
                source: PatternSource::Table,
                evidence: evidence(view, positions),
            });
        }

        let fallback = default_ladder(view);
        debug!(pattern = fallback.id, "default pattern ladder used");
        Some(MatchedPattern {
            id: fallback.id.to_string(),
            name: fallback.name.to_string(),
            template: fallback.template.to_string(),
            keywords: vec![fallback.keyword.to_string()],
            source: PatternSource::DefaultLadder,
            evidence: evidence(view, Vec::new()),
        })
    }
}

fn evidence(view: &DrawView<'_>, positions: Vec<usize>) -> PatternEvidence {
    let counts = view.counts();
    PatternEvidence {
        total: counts.total,
        major_count: counts.majors,
        upright_count: counts.upright,
        reversed_count: counts.reversed,
        dominant_suit: view.dominant_suit(),
        positions,
        strongest_positions: view
            .strongest_positions()
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

/// One rung of the built-in ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LadderRung {
    pub id: &'static str,
    pub name: &'static str,
    pub keyword: &'static str,
    pub template: &'static str,
}

pub const FATEFUL_TURNING_POINT: LadderRung = LadderRung {
    id: "fateful_turning_point",
    name: "Fateful Turning Point",
    keyword: "fateful change",
    template: "{{name}}, {{major_count}} major arcana appeared. \
               Larger forces are at work and this is a turning point; \
               the choices you make now will echo for a long time.",
};

pub const POSITIVE_GROWTH: LadderRung = LadderRung {
    id: "positive_growth",
    name: "Positive Growth",
    keyword: "positive flow",
    template: "{{name}}, {{upright_count}} cards stand upright. \
               The energy is open and supportive; keep moving in the direction you have chosen.",
};

pub const CHALLENGING_TRANSFORMATION: LadderRung = LadderRung {
    id: "challenging_transformation",
    name: "Challenging but Transformative",
    keyword: "inner reflection",
    template: "{{name}}, {{reversed_count}} cards are reversed. \
               This is a demanding time, but the resistance you meet is reshaping you for the better.",
};

pub const BALANCE_AND_INTEGRATION: LadderRung = LadderRung {
    id: "balance_and_integration",
    name: "Balance and Integration",
    keyword: "balance",
    template: "{{name}}, the cards hold light and shadow in balance. \
               Integrate what is working with what still needs attention.",
};

/// The built-in ladder. The challenging rung compares against the draw
/// size, so a single upright card is never classified as challenging.
#[must_use]
pub fn default_ladder(view: &DrawView<'_>) -> LadderRung {
    let c = view.counts();
    if c.majors >= 5 {
        FATEFUL_TURNING_POINT
    } else if c.upright >= 7 {
        POSITIVE_GROWTH
    } else if c.upright * 10 <= c.total * 3 {
        CHALLENGING_TRANSFORMATION
    } else {
        BALANCE_AND_INTEGRATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardCatalog, DrawnCard};
    use crate::core::Orientation;
    use crate::layouts::LayoutRegistry;
    use crate::store::CountRange;

    fn with_view<R>(layout: &str, cards: &[DrawnCard], f: impl FnOnce(&DrawView<'_>) -> R) -> R {
        let catalog = CardCatalog::standard();
        let layouts = LayoutRegistry::builtin();
        let view = DrawView::new(cards, &catalog, layouts.get(layout).unwrap());
        f(&view)
    }

    fn celtic(reversed_at: &[usize], majors: bool) -> Vec<DrawnCard> {
        (0..10usize)
            .map(|i| {
                let id = if majors { i as u32 } else { 50 + i as u32 };
                if reversed_at.contains(&i) {
                    DrawnCard::reversed(id, i)
                } else {
                    DrawnCard::upright(id, i)
                }
            })
            .collect()
    }

    #[test]
    fn test_single_fool_is_balance() {
        let matched = with_view("one_card", &[DrawnCard::upright(0, 0)], |v| {
            PatternMatcher::match_draw(v, &[])
        })
        .unwrap();
        assert_eq!(matched.name, "Balance and Integration");
        assert_eq!(matched.source, PatternSource::DefaultLadder);
        assert_eq!(matched.evidence.major_count, 1);
    }

    #[test]
    fn test_single_reversed_is_challenging() {
        let matched = with_view("one_card", &[DrawnCard::reversed(0, 0)], |v| {
            PatternMatcher::match_draw(v, &[])
        })
        .unwrap();
        assert_eq!(matched.id, "challenging_transformation");
    }

    #[test]
    fn test_ladder_order() {
        let majors = celtic(&[], true);
        assert_eq!(
            with_view("celtic_cross", &majors, default_ladder),
            FATEFUL_TURNING_POINT
        );

        let minors_up = celtic(&[0, 1, 2], false);
        assert_eq!(
            with_view("celtic_cross", &minors_up, default_ladder),
            POSITIVE_GROWTH
        );

        let minors_down = celtic(&[0, 1, 2, 3, 4, 5, 6], false);
        assert_eq!(
            with_view("celtic_cross", &minors_down, default_ladder),
            CHALLENGING_TRANSFORMATION
        );

        let mixed = celtic(&[0, 1, 2, 3, 4], false);
        assert_eq!(
            with_view("celtic_cross", &mixed, default_ladder),
            BALANCE_AND_INTEGRATION
        );
    }

    #[test]
    fn test_empty_draw_is_none() {
        assert!(with_view("one_card", &[], |v| PatternMatcher::match_draw(v, &[])).is_none());
    }

    #[test]
    fn test_priority_first_match_wins() {
        let patterns = vec![
            Pattern::new("low", "Low", 1, PatternCondition::Always, "low"),
            Pattern::new("high", "High", 10, PatternCondition::majors_at_least(1), "high"),
            Pattern::new("never", "Never", 99, PatternCondition::Never, "never"),
        ];
        let matched = with_view("one_card", &[DrawnCard::upright(0, 0)], |v| {
            PatternMatcher::match_draw(v, &patterns)
        })
        .unwrap();
        assert_eq!(matched.id, "high");
        assert_eq!(matched.source, PatternSource::Table);
    }

    #[test]
    fn test_equal_priority_prefers_specific_then_table_order() {
        let patterns = vec![
            Pattern::new("broad", "Broad", 5, PatternCondition::Always, ""),
            Pattern::new(
                "narrow",
                "Narrow",
                5,
                PatternCondition::majors_at_least(1).and(PatternCondition::upright_at_least(1)),
                "",
            ),
            Pattern::new(
                "narrow_twin",
                "Narrow Twin",
                5,
                PatternCondition::majors_at_least(1).and(PatternCondition::upright_at_least(1)),
                "",
            ),
        ];
        let matched = with_view("one_card", &[DrawnCard::upright(0, 0)], |v| {
            PatternMatcher::match_draw(v, &patterns)
        })
        .unwrap();
        assert_eq!(matched.id, "narrow");
    }

    #[test]
    fn test_position_conditions() {
        let cards = celtic(&[7], false);
        let differ = PatternCondition::PositionsDiffer {
            a: 6,
            b: 7,
            aspect: PositionAspect::Either,
        };
        let same_suit = PatternCondition::PositionsMatch {
            a: 6,
            b: 7,
            aspect: PositionAspect::Suit,
        };
        let missing = PatternCondition::PositionsDiffer {
            a: 6,
            b: 42,
            aspect: PositionAspect::Orientation,
        };
        let reversed_seven = PatternCondition::PositionOrientation {
            position: 7,
            orientation: Orientation::Reversed,
        };

        with_view("celtic_cross", &cards, |v| {
            assert!(ConditionEvaluator::evaluate(&differ, v));
            assert!(ConditionEvaluator::evaluate(&same_suit, v));
            assert!(!ConditionEvaluator::evaluate(&missing, v));
            assert!(ConditionEvaluator::evaluate(&reversed_seven, v));
        });

        let patterns = vec![Pattern::new("mirror", "Mirror", 3, differ, "")];
        let matched = with_view("celtic_cross", &cards, |v| {
            PatternMatcher::match_draw(v, &patterns)
        })
        .unwrap();
        assert_eq!(matched.evidence.positions, vec![6, 7]);
    }

    #[test]
    fn test_count_conditions() {
        // All Swords: Ace..Ten
        let cards = celtic(&[0, 1], false);
        with_view("celtic_cross", &cards, |v| {
            assert!(ConditionEvaluator::evaluate(
                &PatternCondition::suit_at_least(Suit::Swords, 10),
                v
            ));
            assert!(ConditionEvaluator::evaluate(
                &PatternCondition::UprightPercent(CountRange::between(80, 80)),
                v
            ));
            assert!(ConditionEvaluator::evaluate(
                &PatternCondition::Minors(CountRange::at_least(10)),
                v
            ));
            assert!(!ConditionEvaluator::evaluate(
                &PatternCondition::Reversed(CountRange::at_most(1)),
                v
            ));
            assert!(ConditionEvaluator::evaluate(
                &PatternCondition::PositionArcana {
                    position: 0,
                    arcana: Arcana::Minor
                },
                v
            ));
        });
    }
}
