//! Shareable plain-text summary of a reading.

use serde::{Deserialize, Serialize};

use crate::cards::CardCatalog;
use crate::core::{ShareConfig, Topic};
use crate::store::SectionKind;

use super::result::InterpretationResult;

const ELLIPSIS: char = '…';

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareSummary {
    pub layout_name: String,
    pub topic: Topic,
    /// First cards as "Name (orientation)".
    pub cards: Vec<String>,
    /// Cards drawn beyond those listed.
    pub more: usize,
    pub excerpt: String,
}

impl ShareSummary {
    /// Project a result into a summary. Card names come from the catalog
    /// when the card is known there.
    #[must_use]
    pub fn from_result(
        result: &InterpretationResult,
        catalog: &CardCatalog,
        config: &ShareConfig,
    ) -> Self {
        let cards = result
            .positions
            .iter()
            .take(config.max_cards)
            .map(|p| {
                let name = catalog
                    .get(p.card_id)
                    .map_or(p.card_name.as_str(), |c| c.name.as_str());
                format!("{} ({})", name, p.orientation)
            })
            .collect::<Vec<_>>();
        let more = result.positions.len().saturating_sub(cards.len());

        let source = result
            .narrative
            .section(SectionKind::Opening)
            .map(|s| s.text.clone())
            .unwrap_or_else(|| result.narrative.plain_text());

        Self {
            layout_name: result.layout_name.clone(),
            topic: result.topic,
            cards,
            more,
            excerpt: truncate_chars(&source, config.max_chars),
        }
    }

    /// "A, B, C and K more".
    #[must_use]
    pub fn cards_line(&self) -> String {
        let listed = self.cards.join(", ");
        if self.more > 0 {
            format!("{listed} and {} more", self.more)
        } else {
            listed
        }
    }

    /// Message ready to paste into a chat or post.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = format!("{} · {}\n{}", self.layout_name, self.topic.reading_name(), self.cards_line());
        if !self.excerpt.is_empty() {
            text.push_str("\n\n");
            text.push_str(&self.excerpt);
        }
        text
    }
}

/// Keep at most `max` characters, appending an ellipsis when cut.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max) {
        Some((cut, _)) => {
            let mut out = text[..cut].trim_end().to_string();
            out.push(ELLIPSIS);
            out
        }
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AdvicePlan, PositionReading};
    use crate::cards::CardId;
    use crate::core::Orientation;
    use crate::layouts::LayoutId;
    use crate::narrative::{Narrative, NarrativeSection, SectionOrigin};
    use crate::store::Energy;

    fn result_with(cards: &[u32], opening: &str) -> InterpretationResult {
        InterpretationResult {
            layout: LayoutId::new("celtic_cross"),
            layout_name: "Celtic Cross".into(),
            topic: Topic::Love,
            seeker_name: "you".into(),
            question: None,
            energy: Energy::Neutral,
            positions: cards
                .iter()
                .enumerate()
                .map(|(i, id)| PositionReading {
                    position: i,
                    position_name: format!("P{i}"),
                    card_id: CardId::new(*id),
                    card_name: "placeholder".into(),
                    orientation: Orientation::Upright,
                    meaning: String::new(),
                    energy: String::new(),
                })
                .collect(),
            relationships: vec![],
            pattern: None,
            synergies: vec![],
            score: None,
            advice: AdvicePlan::default(),
            keywords: vec![],
            narrative: Narrative {
                sections: vec![NarrativeSection {
                    kind: SectionKind::Opening,
                    title: "Core Message".into(),
                    text: opening.into(),
                    origin: SectionOrigin::Procedural,
                }],
            },
        }
    }

    #[test]
    fn test_cards_and_more() {
        let catalog = CardCatalog::standard();
        let result = result_with(&[0, 19, 13, 1, 2], "Short.");
        let summary = ShareSummary::from_result(&result, &catalog, &ShareConfig::default());

        assert_eq!(
            summary.cards_line(),
            "The Fool (upright), The Sun (upright), Death (upright) and 2 more"
        );
        assert_eq!(summary.excerpt, "Short.");
    }

    #[test]
    fn test_unknown_card_keeps_result_name() {
        let catalog = CardCatalog::standard();
        let result = result_with(&[999], "Short.");
        let summary = ShareSummary::from_result(&result, &catalog, &ShareConfig::default());
        assert_eq!(summary.cards, vec!["placeholder (upright)"]);
        assert_eq!(summary.more, 0);
    }

    #[test]
    fn test_excerpt_truncated_on_char_boundary() {
        let catalog = CardCatalog::standard();
        let opening = "새로운 시작의 에너지가 당신을 감싸고 있습니다. 두려워하지 말고 나아가세요.";
        let result = result_with(&[0], opening);
        let config = ShareConfig {
            max_cards: 3,
            max_chars: 10,
        };
        let summary = ShareSummary::from_result(&result, &catalog, &config);

        assert!(summary.excerpt.ends_with('…'));
        assert!(summary.excerpt.chars().count() <= 11);
        assert!(opening.starts_with(summary.excerpt.trim_end_matches('…')));
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("abcd", 3), "abc…");
        assert_eq!(truncate_chars("ab cd", 3), "ab…");
        assert_eq!(truncate_chars("", 3), "");
    }
}
