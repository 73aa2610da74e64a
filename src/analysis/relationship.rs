//! Relationship analyzer.
//!
//! Runs a fixed list of named probes over a draw. Pair and timeline probes
//! address positions by role, so one probe list serves every layout: a
//! probe whose roles the layout lacks (or whose positions are missing from
//! the draw) is skipped. Findings come out in probe-declaration order, and
//! that order is meaningful: the narrative reads the first findings as the
//! most salient.

use crate::cards::Element;
use crate::layouts::PositionRole as Role;

use super::draw::{DrawSlot, DrawView};

/// Harmony / tension wording for a pair probe. `{a}` and `{b}` are
/// replaced by the card names.
#[derive(Clone, Copy, Debug)]
pub struct PairText {
    pub label: &'static str,
    pub harmony: &'static str,
    pub tension: &'static str,
}

/// A named relationship probe.
#[derive(Clone, Copy, Debug)]
pub enum Probe {
    /// Two positions; the first role found in each list is used.
    Pair {
        a: &'static [Role],
        b: &'static [Role],
        text: PairText,
    },
    /// Past, present and future.
    Timeline,
    /// Element distribution over the whole draw.
    ElementalBalance,
    /// Runs of consecutive card numbers over the whole draw.
    NumericSequence,
}

/// The standard probe list, in declaration order.
pub const STANDARD_PROBES: &[Probe] = &[
    Probe::Timeline,
    Probe::Pair {
        a: &[Role::Inner],
        b: &[Role::Challenge],
        text: PairText {
            label: "Inner vs. outer",
            harmony: "Your inner state ({a}) and your outer circumstances ({b}) point the same way; what you feel and what you face are aligned.",
            tension: "Your inner state ({a}) and your outer circumstances ({b}) pull apart; the gap between what you feel and what you face is a source of growth.",
        },
    },
    Probe::Pair {
        a: &[Role::SelfView],
        b: &[Role::OtherView],
        text: PairText {
            label: "Self vs. others",
            harmony: "How you see yourself ({a}) matches how others see you ({b}); you come across as you intend.",
            tension: "There is a difference between self-perception and others' perception: you see yourself through {a}, while others see {b}.",
        },
    },
    Probe::Pair {
        a: &[Role::Expectation],
        b: &[Role::Outcome],
        text: PairText {
            label: "Expectation vs. outcome",
            harmony: "What you expect ({a}) is in tune with the likely outcome ({b}); your instincts about where this leads are sound.",
            tension: "What you expect ({a}) differs from the likely outcome ({b}); stay flexible, as the result may surprise you.",
        },
    },
    Probe::Pair {
        a: &[Role::Foundation],
        b: &[Role::Outcome],
        text: PairText {
            label: "Foundation vs. outcome",
            harmony: "The root of the matter ({a}) carries through to the outcome ({b}); build on what is already solid.",
            tension: "The root of the matter ({a}) and the outcome ({b}) diverge; the ending will depend on reworking the foundation.",
        },
    },
    Probe::Pair {
        a: &[Role::Me],
        b: &[Role::Partner],
        text: PairText {
            label: "You and your partner",
            harmony: "You ({a}) and your partner ({b}) are in a similar place right now; that shared footing is a strength.",
            tension: "You ({a}) and your partner ({b}) are in different places right now; patience and honest conversation will close the gap.",
        },
    },
    Probe::Pair {
        a: &[Role::MyThoughts],
        b: &[Role::PartnerThoughts],
        text: PairText {
            label: "Current thoughts",
            harmony: "Your thoughts ({a}) and your partner's thoughts ({b}) about the relationship line up.",
            tension: "Your thoughts ({a}) and your partner's thoughts ({b}) about the relationship differ; ask rather than assume.",
        },
    },
    Probe::Pair {
        a: &[Role::MyFuture],
        b: &[Role::PartnerFuture],
        text: PairText {
            label: "Future feelings",
            harmony: "Your future feelings ({a}) and your partner's ({b}) are heading the same way.",
            tension: "Your future feelings ({a}) and your partner's ({b}) may drift apart unless you both tend the bond.",
        },
    },
    Probe::Pair {
        a: &[Role::ConsciousDesire],
        b: &[Role::UnconsciousDesire],
        text: PairText {
            label: "Want vs. need",
            harmony: "What you want ({a}) and what you truly need ({b}) agree; you can pursue it wholeheartedly.",
            tension: "What you want ({a}) and what you truly need ({b}) are not the same; listen to the deeper need.",
        },
    },
    Probe::Pair {
        a: &[Role::HiddenInfluence],
        b: &[Role::Outcome],
        text: PairText {
            label: "Hidden influence",
            harmony: "The hidden influence ({a}) quietly supports the outcome ({b}).",
            tension: "The hidden influence ({a}) works against the outcome ({b}); bring it into the light.",
        },
    },
    Probe::ElementalBalance,
    Probe::NumericSequence,
];

/// Relationship analyzer over a probe list.
pub struct RelationshipAnalyzer {
    probes: &'static [Probe],
}

impl Default for RelationshipAnalyzer {
    fn default() -> Self {
        Self {
            probes: STANDARD_PROBES,
        }
    }
}

impl RelationshipAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer over a custom probe list.
    #[must_use]
    pub fn with_probes(probes: &'static [Probe]) -> Self {
        Self { probes }
    }

    /// Run every probe and collect findings in declaration order.
    #[must_use]
    pub fn analyze(&self, view: &DrawView<'_>) -> Vec<String> {
        let mut findings = Vec::new();
        for probe in self.probes {
            match probe {
                Probe::Pair { a, b, text } => pair_probe(view, a, b, text, &mut findings),
                Probe::Timeline => timeline_probe(view, &mut findings),
                Probe::ElementalBalance => elemental_probe(view, &mut findings),
                Probe::NumericSequence => numeric_probe(view, &mut findings),
            }
        }
        findings
    }
}

fn pair_probe(
    view: &DrawView<'_>,
    a: &[Role],
    b: &[Role],
    text: &PairText,
    out: &mut Vec<String>,
) {
    let (Some(first), Some(second)) = (view.by_any_role(a), view.by_any_role(b)) else {
        return;
    };
    if first.drawn.position == second.drawn.position {
        return;
    }

    let template = if first.drawn.orientation == second.drawn.orientation {
        text.harmony
    } else {
        text.tension
    };
    let body = template
        .replace("{a}", first.card_name())
        .replace("{b}", second.card_name());
    out.push(format!("{}: {}", text.label, body));

    if let Some(remark) = sequential_remark(first, second) {
        out.push(remark);
    }
}

fn timeline_probe(view: &DrawView<'_>, out: &mut Vec<String>) {
    let (Some(past), Some(present), Some(future)) = (
        view.by_role(Role::Past),
        view.by_any_role(&[Role::Present, Role::Inner]),
        view.by_role(Role::Future),
    ) else {
        return;
    };

    let flow = match (past.is_upright(), present.is_upright(), future.is_upright()) {
        (true, true, true) => {
            "The flow is smooth: past, present and future all support one another."
        }
        (true, true, false) => {
            "Things have gone well so far, but the future card is reversed; watch for obstacles ahead."
        }
        (true, false, true) => {
            "A strong past and a promising future frame a difficult present; this phase will pass."
        }
        (true, false, false) => {
            "Past strengths are being tested; the present and the future call for renewed effort."
        }
        (false, true, true) => {
            "Past difficulties have been overcome, and the present and future are opening up."
        }
        (false, true, false) => {
            "You have recovered from past trouble, but guard against a setback ahead."
        }
        (false, false, true) => {
            "Old hardship still weighs on the present, yet the future turns upright: relief is coming."
        }
        (false, false, false) => {
            "The whole timeline is reversed; this is a season for patience, reflection and inner work."
        }
    };
    out.push(format!(
        "Timeline: {flow} ({} \u{2192} {} \u{2192} {})",
        past.card_name(),
        present.card_name(),
        future.card_name()
    ));

    if let Some(remark) = sequential_remark(past, present) {
        out.push(remark);
    }
    if let Some(remark) = sequential_remark(present, future) {
        out.push(remark);
    }
}

fn elemental_probe(view: &DrawView<'_>, out: &mut Vec<String>) {
    let counts = view.counts();
    if counts.elements.iter().all(|&n| n == 0) {
        return;
    }

    for element in Element::ALL {
        let count = counts.element(element);
        let dominant = Element::ALL
            .iter()
            .filter(|other| **other != element)
            .all(|other| count >= counts.element(*other) + 3);
        if dominant {
            out.push(format!(
                "Elemental balance: {} dominates with {} cards; {} are at the forefront.",
                element,
                count,
                element.theme()
            ));
        }
    }

    for element in Element::ALL {
        if counts.element(element) == 0 {
            out.push(format!(
                "Elemental balance: {} is absent; {} may need conscious attention.",
                element,
                element.theme()
            ));
        }
    }
}

fn numeric_probe(view: &DrawView<'_>, out: &mut Vec<String>) {
    for run in consecutive_runs(view.slots().iter().filter_map(DrawSlot::number)) {
        let listed = run
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        out.push(format!(
            "Numeric sequence: cards numbered {listed} form a consecutive run, a sign of step-by-step progress."
        ));
    }
}

/// Runs of length >= 2 over the distinct sorted values.
#[must_use]
pub fn consecutive_runs(values: impl IntoIterator<Item = u8>) -> Vec<Vec<u8>> {
    let mut sorted: Vec<u8> = values.into_iter().collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut runs = Vec::new();
    let mut current: Vec<u8> = Vec::new();
    for value in sorted {
        match current.last() {
            Some(&last) if u16::from(last) + 1 == u16::from(value) => current.push(value),
            _ => {
                if current.len() >= 2 {
                    runs.push(std::mem::take(&mut current));
                }
                current.clear();
                current.push(value);
            }
        }
    }
    if current.len() >= 2 {
        runs.push(current);
    }
    runs
}

/// Remark for two major arcana with adjacent numbers.
fn sequential_remark(a: &DrawSlot<'_>, b: &DrawSlot<'_>) -> Option<String> {
    if !(a.is_major() && b.is_major()) {
        return None;
    }
    let (x, y) = (a.number()?, b.number()?);
    (x.abs_diff(y) == 1).then(|| {
        format!(
            "{} and {} are consecutive major arcana, a sequential journey from one stage to the next.",
            a.card_name(),
            b.card_name()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardCatalog, DrawnCard};
    use crate::layouts::LayoutRegistry;

    fn analyze(layout_id: &str, cards: &[DrawnCard]) -> Vec<String> {
        let catalog = CardCatalog::standard();
        let layouts = LayoutRegistry::builtin();
        let layout = layouts.get(layout_id).unwrap();
        let view = DrawView::new(cards, &catalog, layout);
        RelationshipAnalyzer::new().analyze(&view)
    }

    #[test]
    fn test_self_other_tension() {
        let mut cards: Vec<DrawnCard> = (0..10).map(|i| DrawnCard::upright(30 + i, i as usize)).collect();
        cards[7] = DrawnCard::reversed(37, 7);

        let findings = analyze("celtic_cross", &cards);
        assert!(findings
            .iter()
            .any(|f| f.contains("difference between self-perception and others' perception")));
    }

    #[test]
    fn test_self_other_harmony() {
        let cards: Vec<DrawnCard> = (0..10).map(|i| DrawnCard::upright(30 + i, i as usize)).collect();
        let findings = analyze("celtic_cross", &cards);
        assert!(findings.iter().any(|f| f.starts_with("Self vs. others")));
        assert!(!findings
            .iter()
            .any(|f| f.contains("difference between self-perception")));
    }

    #[test]
    fn test_timeline_truth_table() {
        let findings = analyze(
            "three_card_timeline",
            &[
                DrawnCard::reversed(40, 0),
                DrawnCard::reversed(52, 1),
                DrawnCard::upright(70, 2),
            ],
        );
        assert!(findings[0].starts_with("Timeline: Old hardship"));
    }

    #[test]
    fn test_timeline_sequential_journey() {
        // The Empress, The Emperor, The Hierophant
        let findings = analyze(
            "three_card_timeline",
            &[
                DrawnCard::upright(3, 0),
                DrawnCard::upright(4, 1),
                DrawnCard::upright(5, 2),
            ],
        );
        let journeys = findings.iter().filter(|f| f.contains("sequential journey")).count();
        assert_eq!(journeys, 2);
        assert!(findings.iter().any(|f| f.contains("numbered 3, 4, 5")));
    }

    #[test]
    fn test_probes_skip_missing_roles() {
        let findings = analyze("one_card", &[DrawnCard::upright(0, 0)]);
        assert!(findings.iter().all(|f| f.starts_with("Elemental balance")));
    }

    #[test]
    fn test_missing_position_skips_pair() {
        // Celtic cross with position 7 absent.
        let cards: Vec<DrawnCard> = (0..10)
            .filter(|i| *i != 7)
            .map(|i| DrawnCard::upright(30 + i, i as usize))
            .collect();
        let findings = analyze("celtic_cross", &cards);
        assert!(!findings.iter().any(|f| f.starts_with("Self vs. others")));
    }

    #[test]
    fn test_elemental_dominance_and_absence() {
        // Four Wands (Fire) and one Cup (Water)
        let findings = analyze(
            "seven_star",
            &[
                DrawnCard::upright(22, 0),
                DrawnCard::upright(24, 1),
                DrawnCard::upright(26, 2),
                DrawnCard::upright(28, 3),
                DrawnCard::upright(40, 4),
            ],
        );
        assert!(findings.iter().any(|f| f.contains("Fire dominates with 4 cards")));
        assert!(findings.iter().any(|f| f.contains("Air is absent")));
        assert!(findings.iter().any(|f| f.contains("Earth is absent")));
        assert!(!findings.iter().any(|f| f.contains("Water is absent")));
    }

    #[test]
    fn test_no_dominance_below_margin() {
        let findings = analyze(
            "three_card_timeline",
            &[
                DrawnCard::upright(22, 0),
                DrawnCard::upright(24, 1),
                DrawnCard::upright(40, 2),
            ],
        );
        assert!(!findings.iter().any(|f| f.contains("dominates")));
    }

    #[test]
    fn test_consecutive_runs() {
        assert_eq!(consecutive_runs([5, 3, 4, 9, 11, 10, 1]), vec![vec![3, 4, 5], vec![9, 10, 11]]);
        assert_eq!(consecutive_runs([2, 2, 3]), vec![vec![2, 3]]);
        assert!(consecutive_runs([1, 3, 5]).is_empty());
        assert!(consecutive_runs([]).is_empty());
    }

    #[test]
    fn test_deterministic_order() {
        let cards: Vec<DrawnCard> = (0..11).map(|i| DrawnCard::reversed(i, i as usize)).collect();
        let a = analyze("cup_of_relationship", &cards);
        let b = analyze("cup_of_relationship", &cards);
        assert_eq!(a, b);
        assert!(a[0].starts_with("Foundation vs. outcome"));
        assert!(a[1].starts_with("You and your partner"));
    }
}
