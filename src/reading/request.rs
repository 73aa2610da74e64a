//! Reading requests and assembly-time validation.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, DrawnCard};
use crate::core::{ReadingError, Topic};
use crate::layouts::{Layout, LayoutId};

/// One reading to interpret.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingRequest {
    pub layout: LayoutId,
    #[serde(default)]
    pub topic: Topic,
    pub cards: Vec<DrawnCard>,
    #[serde(default)]
    pub seeker_name: Option<String>,
    #[serde(default)]
    pub custom_question: Option<String>,
}

impl ReadingRequest {
    #[must_use]
    pub fn new(layout: impl Into<String>, topic: Topic, cards: Vec<DrawnCard>) -> Self {
        Self {
            layout: LayoutId::new(layout),
            topic,
            cards,
            seeker_name: None,
            custom_question: None,
        }
    }

    #[must_use]
    pub fn with_seeker_name(mut self, name: impl Into<String>) -> Self {
        self.seeker_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_custom_question(mut self, question: impl Into<String>) -> Self {
        self.custom_question = Some(question.into());
        self
    }

    /// Seeker name if set and not blank.
    #[must_use]
    pub fn seeker_name(&self) -> Option<&str> {
        non_blank(self.seeker_name.as_deref())
    }

    /// Custom question if set and not blank.
    #[must_use]
    pub fn custom_question(&self) -> Option<&str> {
        non_blank(self.custom_question.as_deref())
    }

    /// Check that the draw fills the layout exactly once per position with
    /// distinct catalog cards.
    ///
    /// Callers run this when assembling a reading. Interpretation itself
    /// accepts any draw and degrades the affected positions.
    pub fn validate(&self, layout: &Layout, catalog: &CardCatalog) -> Result<(), ReadingError> {
        let size = layout.size();
        let mut positions = FxHashSet::default();
        let mut cards = FxHashSet::default();

        for card in &self.cards {
            if card.position >= size {
                return Err(ReadingError::PositionOutOfRange {
                    layout: layout.id.to_string(),
                    position: card.position,
                    size,
                });
            }
            if !positions.insert(card.position) {
                return Err(ReadingError::DuplicatePosition(card.position));
            }
            if !catalog.contains(card.card_id) {
                return Err(ReadingError::UnknownCard(card.card_id));
            }
            if !cards.insert(card.card_id) {
                return Err(ReadingError::DuplicateCard(card.card_id));
            }
        }

        match (0..size).find(|p| !positions.contains(p)) {
            Some(missing) => Err(ReadingError::MissingPosition(missing)),
            None => Ok(()),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
