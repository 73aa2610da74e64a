//! Advice planner.
//!
//! Collects action suggestions for the cards in a layout's key positions,
//! keeps the top three per timeframe by priority, and fills any empty
//! timeframe with a suggestion built from the draw and topic.

use serde::{Deserialize, Serialize};

use crate::core::Topic;
use crate::layouts::PositionRole;
use crate::store::{ContentSnapshot, Timeframe};

use super::draw::{DrawSlot, DrawView};

/// Suggestions kept per timeframe.
pub const MAX_PER_TIMEFRAME: usize = 3;

/// Priority given to generated suggestions.
const DYNAMIC_PRIORITY: i32 = 5;

/// Roles whose cards drive the advice, in lookup order.
const KEY_ROLES: [PositionRole; 5] = [
    PositionRole::Present,
    PositionRole::Challenge,
    PositionRole::Advice,
    PositionRole::Outcome,
    PositionRole::Me,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdviceSource {
    Table,
    Generated,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceItem {
    pub timeframe: Timeframe,
    pub text: String,
    pub priority: i32,
    pub source: AdviceSource,
}

/// Suggestions grouped by timeframe. No group is ever empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvicePlan {
    pub immediate: Vec<AdviceItem>,
    pub this_week: Vec<AdviceItem>,
    pub long_term: Vec<AdviceItem>,
}

impl AdvicePlan {
    #[must_use]
    pub fn for_timeframe(&self, timeframe: Timeframe) -> &[AdviceItem] {
        match timeframe {
            Timeframe::Immediate => &self.immediate,
            Timeframe::ThisWeek => &self.this_week,
            Timeframe::LongTerm => &self.long_term,
        }
    }

    fn slot_mut(&mut self, timeframe: Timeframe) -> &mut Vec<AdviceItem> {
        match timeframe {
            Timeframe::Immediate => &mut self.immediate,
            Timeframe::ThisWeek => &mut self.this_week,
            Timeframe::LongTerm => &mut self.long_term,
        }
    }

    /// Every item in timeframe order.
    pub fn iter(&self) -> impl Iterator<Item = &AdviceItem> {
        self.immediate
            .iter()
            .chain(&self.this_week)
            .chain(&self.long_term)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.immediate.len() + self.this_week.len() + self.long_term.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds an `AdvicePlan` for a draw.
pub struct AdvicePlanner<'a> {
    snapshot: &'a ContentSnapshot,
}

impl<'a> AdvicePlanner<'a> {
    #[must_use]
    pub fn new(snapshot: &'a ContentSnapshot) -> Self {
        Self { snapshot }
    }

    #[must_use]
    pub fn plan(&self, view: &DrawView<'_>, topic: Topic) -> AdvicePlan {
        let mut plan = AdvicePlan::default();

        let mut seen: Vec<usize> = Vec::new();
        for role in KEY_ROLES {
            let Some(slot) = view.by_role(role) else {
                continue;
            };
            if seen.contains(&slot.drawn.position) {
                continue;
            }
            seen.push(slot.drawn.position);

            for row in self
                .snapshot
                .actions_for(slot.drawn.card_id, slot.drawn.orientation)
            {
                plan.slot_mut(row.timeframe).push(AdviceItem {
                    timeframe: row.timeframe,
                    text: row.text.clone(),
                    priority: row.priority,
                    source: AdviceSource::Table,
                });
            }
        }

        for timeframe in Timeframe::ALL {
            let items = plan.slot_mut(timeframe);
            // Stable: equal priorities keep key-position order.
            items.sort_by(|a, b| b.priority.cmp(&a.priority));
            items.truncate(MAX_PER_TIMEFRAME);
            if items.is_empty() {
                items.push(AdviceItem {
                    timeframe,
                    text: generated_advice(view, topic, timeframe),
                    priority: DYNAMIC_PRIORITY,
                    source: AdviceSource::Generated,
                });
            }
        }

        plan
    }
}

fn generated_advice(view: &DrawView<'_>, topic: Topic, timeframe: Timeframe) -> String {
    match timeframe {
        Timeframe::Immediate => {
            let challenge = view.by_any_role(&[PositionRole::Challenge, PositionRole::External]);
            match challenge {
                Some(slot) if !slot.is_upright() && slot.card.is_some() => format!(
                    "Acknowledge the difficulty {} points to today, \
                     and take even one small step forward.",
                    slot.card_name()
                ),
                _ => match present_slot(view) {
                    Some(slot) => format!(
                        "Use the energy of {} right now and start on something concrete.",
                        slot.card_name()
                    ),
                    None => "Take a quiet moment today to notice what you need.".to_string(),
                },
            }
        }
        Timeframe::ThisWeek => format!(
            "This week, put steady effort into {}.",
            weekly_focus(topic)
        ),
        Timeframe::LongTerm => format!(
            "Over the long run, set a step-by-step plan toward {}.",
            long_term_goal(topic)
        ),
    }
}

fn present_slot<'v, 'a>(view: &'v DrawView<'a>) -> Option<&'v DrawSlot<'a>> {
    view.by_any_role(&[
        PositionRole::Present,
        PositionRole::Inner,
        PositionRole::Me,
        PositionRole::Advice,
    ])
    .or_else(|| view.slots().first())
}

fn weekly_focus(topic: Topic) -> &'static str {
    match topic {
        Topic::Love => "a deep conversation with your partner",
        Topic::Career => "moving your most important project forward",
        Topic::Money => "reviewing your spending patterns",
        Topic::Health => "small daily habits that restore your energy",
        Topic::General => "finding your inner balance",
    }
}

fn long_term_goal(topic: Topic) -> &'static str {
    match topic {
        Topic::Love => "building trust and intimacy",
        Topic::Career => "deeper expertise and recognition",
        Topic::Money => "financial stability and growth",
        Topic::Health => "lasting vitality",
        Topic::General => "steady growth and development",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardCatalog, CardId, DrawnCard};
    use crate::core::Orientation;
    use crate::layouts::LayoutRegistry;
    use crate::store::ActionSuggestionRow;

    fn plan(layout: &str, cards: &[DrawnCard], snapshot: &ContentSnapshot, topic: Topic) -> AdvicePlan {
        let catalog = CardCatalog::standard();
        let layouts = LayoutRegistry::builtin();
        let view = DrawView::new(cards, &catalog, layouts.get(layout).unwrap());
        AdvicePlanner::new(snapshot).plan(&view, topic)
    }

    fn celtic_draw() -> Vec<DrawnCard> {
        (0..10usize).map(|i| DrawnCard::upright(i as u32, i)).collect()
    }

    #[test]
    fn test_empty_snapshot_generates_every_timeframe() {
        let result = plan("celtic_cross", &celtic_draw(), &ContentSnapshot::empty(), Topic::Love);
        for timeframe in Timeframe::ALL {
            let items = result.for_timeframe(timeframe);
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].source, AdviceSource::Generated);
        }
        assert!(result.this_week[0].text.contains("your partner"));
    }

    #[test]
    fn test_reversed_challenge_drives_immediate() {
        let mut cards = celtic_draw();
        cards[1] = DrawnCard::reversed(1, 1);
        let result = plan("celtic_cross", &cards, &ContentSnapshot::empty(), Topic::General);
        assert!(result.immediate[0].text.contains("The Magician"));
        assert!(result.immediate[0].text.starts_with("Acknowledge"));
    }

    #[test]
    fn test_table_rows_top_three_by_priority() {
        // Celtic cross challenge is position 1 (The Magician)
        let mut snapshot = ContentSnapshot::empty();
        for priority in [1, 9, 4, 7] {
            snapshot = snapshot.with_action(
                ActionSuggestionRow::new(CardId::new(1), Timeframe::Immediate, format!("p{priority}"))
                    .with_priority(priority),
            );
        }
        snapshot = snapshot.with_action(
            ActionSuggestionRow::new(CardId::new(1), Timeframe::LongTerm, "reversed only")
                .with_orientation(Orientation::Reversed),
        );

        let result = plan("celtic_cross", &celtic_draw(), &snapshot, Topic::General);
        let texts: Vec<&str> = result.immediate.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["p9", "p7", "p4"]);
        assert_eq!(result.long_term[0].source, AdviceSource::Generated);
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_non_key_positions_ignored() {
        // Position 3 of the celtic cross is the past
        let snapshot = ContentSnapshot::empty().with_action(ActionSuggestionRow::new(
            CardId::new(3),
            Timeframe::ThisWeek,
            "from the past",
        ));
        let result = plan("celtic_cross", &celtic_draw(), &snapshot, Topic::General);
        assert_eq!(result.this_week[0].source, AdviceSource::Generated);
    }

    #[test]
    fn test_empty_draw() {
        let result = plan("one_card", &[], &ContentSnapshot::empty(), Topic::General);
        assert_eq!(result.len(), 3);
        assert!(result.immediate[0].text.contains("quiet moment"));
    }
}
