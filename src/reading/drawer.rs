//! Seeded spread drawing.

use tracing::warn;

use crate::cards::{CardCatalog, CardId, DrawnCard};
use crate::core::{DrawRng, Orientation};
use crate::layouts::Layout;

/// Draws distinct cards for every position of a layout.
pub struct SpreadDrawer<'a> {
    catalog: &'a CardCatalog,
    reversal_chance: f64,
}

impl<'a> SpreadDrawer<'a> {
    #[must_use]
    pub fn new(catalog: &'a CardCatalog) -> Self {
        Self {
            catalog,
            reversal_chance: 0.5,
        }
    }

    #[must_use]
    pub fn with_reversal_chance(mut self, chance: f64) -> Self {
        self.reversal_chance = chance;
        self
    }

    /// Draw one card per position. The deck order and the orientations come
    /// from separate streams of `rng`, so the same seed always gives the
    /// same cards regardless of the reversal chance.
    #[must_use]
    pub fn draw(&self, layout: &Layout, rng: &DrawRng) -> Vec<DrawnCard> {
        let mut deck_rng = rng.for_context("deck");
        let mut flip_rng = rng.for_context("orientation");

        let mut deck: Vec<CardId> = self.catalog.ids().to_vec();
        deck_rng.shuffle(&mut deck);

        if deck.len() < layout.size() {
            warn!(
                layout = %layout.id,
                needed = layout.size(),
                available = deck.len(),
                "catalog too small to fill layout"
            );
        }

        deck.into_iter()
            .take(layout.size())
            .enumerate()
            .map(|(position, card_id)| {
                let orientation = if flip_rng.gen_bool(self.reversal_chance) {
                    Orientation::Reversed
                } else {
                    Orientation::Upright
                };
                DrawnCard::new(card_id, orientation, position)
            })
            .collect()
    }

    /// Draw with a fresh RNG from a seed.
    #[must_use]
    pub fn draw_seeded(&self, layout: &Layout, seed: u64) -> Vec<DrawnCard> {
        self.draw(layout, &DrawRng::new(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::layouts::LayoutRegistry;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_same_seed_same_draw() {
        let catalog = CardCatalog::standard();
        let layouts = LayoutRegistry::builtin();
        let layout = layouts.get("celtic_cross").unwrap();
        let drawer = SpreadDrawer::new(&catalog);

        assert_eq!(drawer.draw_seeded(layout, 42), drawer.draw_seeded(layout, 42));
        assert_ne!(drawer.draw_seeded(layout, 42), drawer.draw_seeded(layout, 43));
    }

    #[test]
    fn test_draw_fills_layout_with_distinct_cards() {
        let catalog = CardCatalog::standard();
        let layouts = LayoutRegistry::builtin();
        let layout = layouts.get("cup_of_relationship").unwrap();
        let cards = SpreadDrawer::new(&catalog).draw_seeded(layout, 7);

        assert_eq!(cards.len(), 11);
        let ids: FxHashSet<CardId> = cards.iter().map(|c| c.card_id).collect();
        assert_eq!(ids.len(), 11);
        for (i, card) in cards.iter().enumerate() {
            assert_eq!(card.position, i);
        }
    }

    #[test]
    fn test_reversal_chance_extremes() {
        let catalog = CardCatalog::standard();
        let layouts = LayoutRegistry::builtin();
        let layout = layouts.get("seven_star").unwrap();

        let upright = SpreadDrawer::new(&catalog)
            .with_reversal_chance(0.0)
            .draw_seeded(layout, 1);
        assert!(upright.iter().all(DrawnCard::is_upright));

        let reversed = SpreadDrawer::new(&catalog)
            .with_reversal_chance(1.0)
            .draw_seeded(layout, 1);
        assert!(reversed.iter().all(|c| !c.is_upright()));

        let ids = |cards: &[DrawnCard]| cards.iter().map(|c| c.card_id).collect::<Vec<_>>();
        assert_eq!(ids(&upright), ids(&reversed));
    }

    #[test]
    fn test_small_catalog() {
        let mut catalog = CardCatalog::new();
        catalog
            .register(Card::major(CardId::new(0), 0, "The Fool", "바보"))
            .unwrap();
        let layouts = LayoutRegistry::builtin();
        let cards = SpreadDrawer::new(&catalog).draw_seeded(layouts.get("three_card_timeline").unwrap(), 3);
        assert_eq!(cards.len(), 1);
    }
}
