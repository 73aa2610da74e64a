//! Reading keywords.

use crate::core::Topic;

use super::draw::DrawView;

pub const MAX_KEYWORDS: usize = 7;

/// Up to seven unique keywords for a draw.
///
/// Order: each card's first keyword for its orientation (position order),
/// then whole-draw keywords, then the topic keyword.
#[must_use]
pub fn extract_keywords(view: &DrawView<'_>, topic: Topic) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    let mut push = |keyword: &str| {
        if !keyword.is_empty() && !keywords.iter().any(|k| k == keyword) {
            keywords.push(keyword.to_string());
        }
    };

    for slot in view.slots() {
        if let Some(keyword) = slot.keyword() {
            push(keyword);
        }
    }

    let counts = view.counts();
    if counts.majors >= 5 {
        push("fateful change");
    }
    if counts.upright >= 7 {
        push("positive flow");
    } else if counts.total >= 4 && counts.upright <= 3 {
        push("inner reflection");
    }

    if let Some(keyword) = topic_keyword(topic) {
        push(keyword);
    }

    keywords.truncate(MAX_KEYWORDS);
    keywords
}

#[must_use]
pub const fn topic_keyword(topic: Topic) -> Option<&'static str> {
    match topic {
        Topic::Love => Some("love"),
        Topic::Career => Some("success"),
        Topic::Money => Some("abundance"),
        Topic::Health => Some("healing"),
        Topic::General => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardCatalog, DrawnCard};
    use crate::layouts::LayoutRegistry;

    fn keywords(layout: &str, cards: &[DrawnCard], topic: Topic) -> Vec<String> {
        let catalog = CardCatalog::standard();
        let layouts = LayoutRegistry::builtin();
        let view = DrawView::new(cards, &catalog, layouts.get(layout).unwrap());
        extract_keywords(&view, topic)
    }

    #[test]
    fn test_single_card_with_topic() {
        let result = keywords("one_card", &[DrawnCard::upright(0, 0)], Topic::Love);
        assert_eq!(result, vec!["new beginnings", "love"]);
    }

    #[test]
    fn test_capped_at_seven() {
        let cards: Vec<DrawnCard> = (0..10usize)
            .map(|i| DrawnCard::upright(i as u32, i))
            .collect();
        let result = keywords("celtic_cross", &cards, Topic::Career);
        assert_eq!(result.len(), MAX_KEYWORDS);
        assert_eq!(result[0], "new beginnings");
    }

    #[test]
    fn test_inner_reflection_needs_four_cards() {
        let three = [
            DrawnCard::reversed(0, 0),
            DrawnCard::reversed(1, 1),
            DrawnCard::reversed(2, 2),
        ];
        let result = keywords("three_card_timeline", &three, Topic::General);
        assert!(!result.iter().any(|k| k == "inner reflection"));

        let four: Vec<DrawnCard> = (0..4usize).map(|i| DrawnCard::reversed(50, i)).collect();
        let result = keywords("seven_star", &four, Topic::General);
        assert_eq!(result.len(), 2);
        assert!(result.iter().any(|k| k == "inner reflection"));
    }

    #[test]
    fn test_unique() {
        let cards = [DrawnCard::upright(0, 0), DrawnCard::upright(0, 1)];
        let result = keywords("three_card_timeline", &cards, Topic::General);
        assert_eq!(result, vec!["new beginnings"]);
    }
}
