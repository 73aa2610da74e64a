//! Position interpreter.
//!
//! Maps one drawn card to a position-scoped meaning. Lookup order:
//!
//! 1. A verbatim override from the content snapshot
//! 2. A synthesized sentence: role phrase, primary keyword, topic context
//!
//! Unknown cards and positions outside the layout degrade to generic
//! phrases; interpretation never fails.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardCatalog, CardId, DrawnCard, Suit};
use crate::core::{Orientation, Topic};
use crate::layouts::Layout;
use crate::store::{ContentSnapshot, OverrideKey};

use super::draw::DrawSlot;

/// Position interpreter bound to a catalog and content snapshot.
pub struct PositionInterpreter<'a> {
    catalog: &'a CardCatalog,
    snapshot: &'a ContentSnapshot,
}

impl<'a> PositionInterpreter<'a> {
    #[must_use]
    pub fn new(catalog: &'a CardCatalog, snapshot: &'a ContentSnapshot) -> Self {
        Self { catalog, snapshot }
    }

    /// Meaning of one card in its position.
    #[must_use]
    pub fn interpret(&self, card: &DrawnCard, layout: &Layout, topic: Topic) -> String {
        let position = layout.position(card.position);

        let key = OverrideKey {
            layout: layout.id.clone(),
            card_id: card.card_id,
            position: card.position,
            orientation: card.orientation,
            topic,
        };
        if let Some(text) = self.snapshot.override_text(&key) {
            return text.to_string();
        }

        let Some(def) = self.catalog.get(card.card_id) else {
            let lead = position.map_or("At this point in the spread", |p| p.role.phrase());
            return format!(
                "{lead}, an unfamiliar card marks a period of transition. \
                 Stay open while the picture becomes clearer."
            );
        };

        let keyword = def
            .primary_keyword(card.orientation)
            .unwrap_or(match card.orientation {
                Orientation::Upright => "steady progress",
                Orientation::Reversed => "a pause for reflection",
            });

        let Some(position) = position else {
            return format!(
                "Outside the positions of this spread, {} ({}) still speaks of {}.",
                def.name, card.orientation, keyword
            );
        };

        format!(
            "{}, {} ({}) brings {}. {}",
            position.role.phrase(),
            def.name,
            card.orientation,
            keyword,
            topic_context(topic, keyword, card.orientation)
        )
    }

    /// Full reading for one slot of a resolved draw.
    #[must_use]
    pub fn read(&self, slot: &DrawSlot<'_>, layout: &Layout, topic: Topic) -> PositionReading {
        PositionReading {
            position: slot.drawn.position,
            position_name: slot.position_name().to_string(),
            card_id: slot.drawn.card_id,
            card_name: slot.card_name().to_string(),
            orientation: slot.drawn.orientation,
            meaning: self.interpret(&slot.drawn, layout, topic),
            energy: slot
                .card
                .map(|c| card_energy(c, slot.drawn.orientation, topic))
                .unwrap_or_else(|| "an energy of transition".to_string()),
        }
    }
}

/// One card's reading in its position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionReading {
    pub position: usize,
    pub position_name: String,
    pub card_id: CardId,
    pub card_name: String,
    pub orientation: Orientation,
    pub meaning: String,
    pub energy: String,
}

/// Topic phrase for a keyword, falling back to the topic's generic phrase.
#[must_use]
pub fn topic_context(topic: Topic, keyword: &str, orientation: Orientation) -> &'static str {
    let specific = match topic {
        Topic::Love => LOVE_CONTEXT,
        Topic::Career => CAREER_CONTEXT,
        Topic::Money => MONEY_CONTEXT,
        Topic::Health => HEALTH_CONTEXT,
        Topic::General => GENERAL_CONTEXT,
    };
    specific
        .iter()
        .find(|(k, _)| *k == keyword)
        .map(|(_, phrase)| *phrase)
        .unwrap_or_else(|| generic_context(topic, orientation))
}

fn generic_context(topic: Topic, orientation: Orientation) -> &'static str {
    match (topic, orientation) {
        (Topic::General, Orientation::Upright) => "Let this energy move you forward.",
        (Topic::General, Orientation::Reversed) => "Notice where this energy is blocked and why.",
        (Topic::Love, Orientation::Upright) => "Let it shape how you open your heart.",
        (Topic::Love, Orientation::Reversed) => "Look honestly at what it asks of your relationship.",
        (Topic::Career, Orientation::Upright) => "Put it to work in your professional choices.",
        (Topic::Career, Orientation::Reversed) => "Check whether it is holding your work back.",
        (Topic::Money, Orientation::Upright) => "Let it guide how you handle your resources.",
        (Topic::Money, Orientation::Reversed) => "Be careful with spending while this is active.",
        (Topic::Health, Orientation::Upright) => "Let it support your body and your routines.",
        (Topic::Health, Orientation::Reversed) => "Listen to what your body is telling you.",
    }
}

type ContextTable = &'static [(&'static str, &'static str)];

const GENERAL_CONTEXT: ContextTable = &[
    ("new beginnings", "A fresh chapter is opening; step into it with an open mind."),
    ("change", "Things are moving; flow with the change rather than against it."),
    ("transformation", "Something is ending so that something truer can begin."),
    ("completion", "A cycle is closing; honour what it taught you."),
    ("intuition", "Your inner voice already knows the way."),
];

const LOVE_CONTEXT: ContextTable = &[
    ("new beginnings", "A new encounter or a fresh start in love may be close."),
    ("love", "A meaningful bond is at the center of things."),
    ("new feelings", "New feelings are stirring; let them breathe."),
    ("partnership", "Mutual understanding is growing between you."),
    ("recklessness", "Do not rush into a relationship on feeling alone."),
    ("heartbreak", "Old hurt needs tending before the heart can open again."),
    ("attachment", "Make sure closeness does not turn into possession."),
];

const CAREER_CONTEXT: ContextTable = &[
    ("new beginnings", "A good moment for a new job or project; do not be afraid to start."),
    ("willpower", "You have what it takes to move your work forward."),
    ("authority", "Leadership and structure will serve you at work."),
    ("teamwork", "Collaboration is the fastest route to results."),
    ("burden", "You are carrying too much; delegate where you can."),
];

const MONEY_CONTEXT: ContextTable = &[
    ("new beginnings", "A new opportunity may appear, but judge it carefully."),
    ("new opportunity", "A new source of income is within reach."),
    ("abundance", "Resources are flowing; manage them with care."),
    ("greed", "Holding too tightly may cost more than it saves."),
    ("recklessness", "Avoid impulsive investments for now."),
];

const HEALTH_CONTEXT: ContextTable = &[
    ("new beginnings", "A good time to start a healthier routine."),
    ("balance", "Balance between rest and effort is the key to wellbeing."),
    ("rest", "Your body is asking for rest and recovery."),
    ("anxiety", "Worry is weighing on you; find ways to calm the mind."),
    ("vitality", "Your energy is strong; use it well."),
];

/// Topic-aware energy phrase for a card ("the energy of new beginnings").
#[must_use]
pub fn card_energy(card: &Card, orientation: Orientation, topic: Topic) -> String {
    let core = if card.is_major() {
        let number = usize::from(card.number.unwrap_or(0));
        let table = match topic {
            Topic::Love => &LOVE_MAJOR_ENERGY,
            Topic::Career => &CAREER_MAJOR_ENERGY,
            _ => &MAJOR_ENERGY,
        };
        table.get(number).copied().unwrap_or("a powerful energy").to_string()
    } else {
        let quality = card.suit.map_or("a special", |suit| suit_quality(suit, topic));
        let stage = card
            .number
            .and_then(|n| NUMBER_STAGE.get(usize::from(n).wrapping_sub(1)).copied())
            .unwrap_or("process");
        format!("{quality} energy of {stage}")
    };

    match orientation {
        Orientation::Upright => core,
        Orientation::Reversed => format!("a blocked form of {core}"),
    }
}

fn suit_quality(suit: Suit, topic: Topic) -> &'static str {
    match (topic, suit) {
        (Topic::Love, Suit::Wands) => "a passionate",
        (Topic::Love, Suit::Cups) => "a tender",
        (Topic::Love, Suit::Swords) => "a clear-headed",
        (Topic::Love, Suit::Pentacles) => "a grounded",
        (_, Suit::Wands) => "the creative",
        (_, Suit::Cups) => "the emotional",
        (_, Suit::Swords) => "the decisive",
        (_, Suit::Pentacles) => "the practical",
    }
}

const NUMBER_STAGE: [&str; 14] = [
    "beginning", "balance", "growth", "stability", "challenge", "harmony", "reflection",
    "progress", "fulfillment", "cycles", "exploration", "devotion", "transformation", "mastery",
];

const MAJOR_ENERGY: [&str; 22] = [
    "the energy of new beginnings",
    "the energy of creation and will",
    "the energy of intuition and mystery",
    "the energy of abundance and creation",
    "the energy of authority and structure",
    "the energy of tradition and wisdom",
    "the energy of love and choice",
    "the energy of will and momentum",
    "inner strength",
    "the energy of inner search",
    "the turning of fate",
    "the energy of balance and fairness",
    "the energy of sacrifice and new perspective",
    "the energy of change and rebirth",
    "the energy of harmony and moderation",
    "the energy of matter and desire",
    "the energy of upheaval and release",
    "the energy of hope and inspiration",
    "the energy of illusion and intuition",
    "the energy of success and vitality",
    "the energy of renewal and judgement",
    "the energy of completion and integration",
];

const LOVE_MAJOR_ENERGY: [&str; 22] = [
    "the chance of a new encounter",
    "charm and confidence",
    "a deep exchange of feeling",
    "abundant love",
    "a stable relationship",
    "a sincere promise",
    "a fated love",
    "a relationship moving forward",
    "love from within",
    "a search for the true heart",
    "the cycle of connection",
    "balance in the relationship",
    "sacrifice for love",
    "a relationship in change",
    "harmonious love",
    "a powerful attraction",
    "a sudden shift in the relationship",
    "hopeful love",
    "emotional confusion",
    "a happy relationship",
    "a reassessment of the relationship",
    "complete love",
];

const CAREER_MAJOR_ENERGY: [&str; 22] = [
    "a fresh professional start",
    "skill and initiative",
    "quiet expertise",
    "productive growth",
    "leadership and structure",
    "mentorship and established paths",
    "an important career choice",
    "drive toward a goal",
    "steady resilience at work",
    "focused independent study",
    "a turning point in your career",
    "fair dealings and contracts",
    "a necessary pause at work",
    "the end of one role and the start of another",
    "measured, sustainable progress",
    "ambition that needs watching",
    "a sudden restructuring",
    "renewed professional hope",
    "uncertainty about direction",
    "recognition and success",
    "a professional calling",
    "a goal fully achieved",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::layouts::LayoutRegistry;
    use crate::store::PositionOverride;

    #[test]
    fn test_fool_contains_keyword() {
        let catalog = CardCatalog::standard();
        let layouts = LayoutRegistry::builtin();
        let snapshot = ContentSnapshot::empty();
        let interpreter = PositionInterpreter::new(&catalog, &snapshot);

        let text = interpreter.interpret(
            &DrawnCard::upright(0, 0),
            layouts.get("one_card").unwrap(),
            Topic::General,
        );
        assert!(text.contains("new beginnings"), "{text}");
        assert!(text.starts_with("As guidance for you"), "{text}");
    }

    #[test]
    fn test_override_used_verbatim() {
        let catalog = CardCatalog::standard();
        let layouts = LayoutRegistry::builtin();
        let layout = layouts.get("three_card_timeline").unwrap();
        let snapshot = ContentSnapshot::empty().with_override(PositionOverride {
            layout: layout.id.clone(),
            card_id: CardId::new(13),
            position: 2,
            orientation: Orientation::Reversed,
            topic: Topic::Career,
            text: "Hold on until spring.".into(),
        });
        let interpreter = PositionInterpreter::new(&catalog, &snapshot);

        assert_eq!(
            interpreter.interpret(&DrawnCard::reversed(13, 2), layout, Topic::Career),
            "Hold on until spring."
        );
        // Different topic falls back to synthesis.
        assert_ne!(
            interpreter.interpret(&DrawnCard::reversed(13, 2), layout, Topic::Love),
            "Hold on until spring."
        );
    }

    #[test]
    fn test_unknown_card_is_transition() {
        let catalog = CardCatalog::standard();
        let layouts = LayoutRegistry::builtin();
        let snapshot = ContentSnapshot::empty();
        let interpreter = PositionInterpreter::new(&catalog, &snapshot);

        let text = interpreter.interpret(
            &DrawnCard::upright(4242, 0),
            layouts.get("one_card").unwrap(),
            Topic::General,
        );
        assert!(text.contains("transition"));
    }

    #[test]
    fn test_out_of_range_position() {
        let catalog = CardCatalog::standard();
        let layouts = LayoutRegistry::builtin();
        let snapshot = ContentSnapshot::empty();
        let interpreter = PositionInterpreter::new(&catalog, &snapshot);

        let text = interpreter.interpret(
            &DrawnCard::upright(19, 5),
            layouts.get("one_card").unwrap(),
            Topic::General,
        );
        assert!(text.starts_with("Outside the positions"));
        assert!(text.contains("The Sun"));
    }

    #[test]
    fn test_read_slot() {
        use crate::analysis::DrawView;

        let catalog = CardCatalog::standard();
        let layouts = LayoutRegistry::builtin();
        let layout = layouts.get("three_card_timeline").unwrap();
        let snapshot = ContentSnapshot::empty();
        let interpreter = PositionInterpreter::new(&catalog, &snapshot);
        let cards = [DrawnCard::reversed(19, 1)];
        let view = DrawView::new(&cards, &catalog, layout);

        let reading = interpreter.read(&view.slots()[0], layout, Topic::General);
        assert_eq!(reading.position_name, "Present");
        assert_eq!(reading.card_name, "The Sun");
        assert_eq!(reading.energy, "a blocked form of the energy of success and vitality");
        assert!(reading.meaning.contains("The Sun (reversed)"), "{}", reading.meaning);
    }

    #[test]
    fn test_topic_context_fallback() {
        assert_eq!(
            topic_context(Topic::Love, "new beginnings", Orientation::Upright),
            "A new encounter or a fresh start in love may be close."
        );
        assert_eq!(
            topic_context(Topic::Love, "no such keyword", Orientation::Reversed),
            "Look honestly at what it asks of your relationship."
        );
    }

    #[test]
    fn test_card_energy() {
        let catalog = CardCatalog::standard();
        let fool = catalog.get(CardId::new(0)).unwrap();
        assert_eq!(
            card_energy(fool, Orientation::Upright, Topic::General),
            "the energy of new beginnings"
        );
        assert_eq!(
            card_energy(fool, Orientation::Upright, Topic::Love),
            "the chance of a new encounter"
        );

        let three_cups = catalog.get(CardId::new(38)).unwrap();
        assert_eq!(
            card_energy(three_cups, Orientation::Reversed, Topic::Money),
            "a blocked form of the emotional energy of growth"
        );
    }
}
