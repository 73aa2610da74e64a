//! Drawn cards - one card placed in one layout position.
//!
//! A `DrawnCard` is created once per reading and never mutated. It only
//! references the catalog by id, so a draw can name a card the catalog does
//! not know; the analyzers degrade such positions instead of failing.

use serde::{Deserialize, Serialize};

use super::definition::CardId;
use crate::core::Orientation;

/// A card placed in a spread position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawnCard {
    pub card_id: CardId,
    pub orientation: Orientation,
    /// 0-based index into the layout's position list.
    pub position: usize,
}

impl DrawnCard {
    #[must_use]
    pub const fn new(card_id: CardId, orientation: Orientation, position: usize) -> Self {
        Self {
            card_id,
            orientation,
            position,
        }
    }

    /// Upright card at a position.
    #[must_use]
    pub const fn upright(card_id: u32, position: usize) -> Self {
        Self::new(CardId::new(card_id), Orientation::Upright, position)
    }

    /// Reversed card at a position.
    #[must_use]
    pub const fn reversed(card_id: u32, position: usize) -> Self {
        Self::new(CardId::new(card_id), Orientation::Reversed, position)
    }

    #[must_use]
    pub const fn is_upright(&self) -> bool {
        self.orientation.is_upright()
    }
}
