//! Card catalog for definition lookup.
//!
//! The `CardCatalog` is loaded once at startup and shared read-only
//! (usually behind an `Arc`) by every reading.

use rustc_hash::FxHashMap;

use super::deck;
use super::definition::{Card, CardId};
use crate::core::{EngineError, Result};

/// Catalog of card definitions keyed by id.
///
/// ## Example
///
/// ```
/// use tarot_engine::cards::{CardCatalog, CardId};
///
/// let catalog = CardCatalog::standard();
/// assert_eq!(catalog.len(), 78);
/// assert_eq!(catalog.get(CardId::new(0)).unwrap().name, "The Fool");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, Card>,
    /// Ids in ascending order, for deterministic iteration.
    order: Vec<CardId>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard 78-card deck.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for card in deck::standard_cards() {
            // Standard ids are unique by construction.
            let id = card.id;
            catalog.order.push(id);
            catalog.cards.insert(id, card);
        }
        catalog.order.sort_unstable();
        catalog
    }

    /// Load a catalog from a JSON array of cards.
    pub fn from_json(json: &str) -> Result<Self> {
        let cards: Vec<Card> =
            serde_json::from_str(json).map_err(|e| EngineError::json("card catalog", e))?;
        let mut catalog = Self::new();
        for card in cards {
            catalog.register(card)?;
        }
        Ok(catalog)
    }

    /// Register a card definition.
    pub fn register(&mut self, card: Card) -> Result<()> {
        if self.cards.contains_key(&card.id) {
            return Err(EngineError::DuplicateCard(card.id));
        }
        let pos = self.order.partition_point(|id| *id < card.id);
        self.order.insert(pos, card.id);
        self.cards.insert(card.id, card);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All ids in ascending order.
    #[must_use]
    pub fn ids(&self) -> &[CardId] {
        &self.order
    }

    /// Iterate over cards in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.order.iter().filter_map(move |id| self.cards.get(id))
    }

    /// Find a card by canonical or localized name (case-insensitive).
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Card> {
        let needle = name.trim();
        self.iter().find(|c| {
            c.name.eq_ignore_ascii_case(needle) || c.localized_name == needle
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Arcana, Suit};

    #[test]
    fn test_standard_deck_shape() {
        let catalog = CardCatalog::standard();
        assert_eq!(catalog.len(), 78);
        assert_eq!(catalog.iter().filter(|c| c.is_major()).count(), 22);
        for suit in Suit::ALL {
            assert_eq!(catalog.iter().filter(|c| c.suit == Some(suit)).count(), 14);
        }
    }

    #[test]
    fn test_standard_ids() {
        let catalog = CardCatalog::standard();
        assert_eq!(catalog.get(CardId::new(21)).unwrap().name, "The World");
        assert_eq!(catalog.get(CardId::new(22)).unwrap().name, "Ace of Wands");
        assert_eq!(catalog.get(CardId::new(36)).unwrap().name, "Ace of Cups");
        assert_eq!(catalog.get(CardId::new(50)).unwrap().name, "Ace of Swords");
        assert_eq!(catalog.get(CardId::new(77)).unwrap().name, "King of Pentacles");
    }

    #[test]
    fn test_every_card_has_keywords() {
        let catalog = CardCatalog::standard();
        for card in catalog.iter() {
            assert!(!card.keywords.upright.is_empty(), "{} upright", card.name);
            assert!(!card.keywords.reversed.is_empty(), "{} reversed", card.name);
            assert!(card.element().is_some(), "{} element", card.name);
        }
    }

    #[test]
    fn test_iteration_is_ordered() {
        let catalog = CardCatalog::standard();
        let ids: Vec<u32> = catalog.iter().map(|c| c.id.raw()).collect();
        let expected: Vec<u32> = (0..78).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_register_duplicate() {
        let mut catalog = CardCatalog::new();
        let fool = Card::major(CardId::new(0), 0, "The Fool", "바보");
        catalog.register(fool.clone()).unwrap();

        let err = catalog.register(fool).unwrap_err();
        assert!(matches!(err, EngineError::DuplicateCard(id) if id == CardId::new(0)));
    }

    #[test]
    fn test_register_keeps_order() {
        let mut catalog = CardCatalog::new();
        catalog.register(Card::major(CardId::new(5), 5, "The Hierophant", "교황")).unwrap();
        catalog.register(Card::major(CardId::new(1), 1, "The Magician", "마법사")).unwrap();
        assert_eq!(catalog.ids(), &[CardId::new(1), CardId::new(5)]);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            { "id": 0, "name": "The Fool", "localized_name": "바보", "arcana": "major",
              "number": 0, "element": "air",
              "keywords": { "upright": ["new beginnings"], "reversed": ["recklessness"] } },
            { "id": 36, "name": "Ace of Cups", "localized_name": "컵의 에이스",
              "arcana": "minor", "suit": "cups", "number": 1 }
        ]"#;

        let catalog = CardCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        let ace = catalog.get(CardId::new(36)).unwrap();
        assert_eq!(ace.arcana, Arcana::Minor);
        assert!(ace.keywords.upright.is_empty());
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let json = r#"[
            { "id": 1, "name": "A", "localized_name": "A", "arcana": "major" },
            { "id": 1, "name": "B", "localized_name": "B", "arcana": "major" }
        ]"#;
        assert!(matches!(
            CardCatalog::from_json(json),
            Err(EngineError::DuplicateCard(_))
        ));
    }

    #[test]
    fn test_find_by_name() {
        let catalog = CardCatalog::standard();
        assert_eq!(catalog.find_by_name("the sun").unwrap().id, CardId::new(19));
        assert_eq!(catalog.find_by_name("바보").unwrap().id, CardId::new(0));
        assert!(catalog.find_by_name("The Joker").is_none());
    }
}
