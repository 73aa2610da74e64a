//! Resolved view of a draw.
//!
//! `DrawView` joins each `DrawnCard` with its catalog entry and layout
//! position once, and precomputes the aggregate counts every analyzer
//! needs. Unknown cards and out-of-range positions are kept in the view
//! with `None` in place of the missing piece.

use smallvec::SmallVec;

use crate::cards::{Card, CardCatalog, DrawnCard, Element, Suit};
use crate::layouts::{Layout, PositionDefinition, PositionRole};
use crate::store::Energy;

/// One drawn card with its resolved catalog entry and position.
#[derive(Clone, Copy, Debug)]
pub struct DrawSlot<'a> {
    pub drawn: DrawnCard,
    pub card: Option<&'a Card>,
    pub position: Option<&'a PositionDefinition>,
}

impl<'a> DrawSlot<'a> {
    #[must_use]
    pub fn is_major(&self) -> bool {
        self.card.is_some_and(Card::is_major)
    }

    #[must_use]
    pub fn is_upright(&self) -> bool {
        self.drawn.is_upright()
    }

    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        self.card.and_then(|c| c.suit)
    }

    #[must_use]
    pub fn number(&self) -> Option<u8> {
        self.card.and_then(|c| c.number)
    }

    #[must_use]
    pub fn role(&self) -> Option<PositionRole> {
        self.position.map(|p| p.role)
    }

    /// Card name, or a placeholder for an unknown card.
    #[must_use]
    pub fn card_name(&self) -> &'a str {
        self.card.map_or("an unknown card", |c| c.name.as_str())
    }

    /// Position name, or a placeholder outside the layout.
    #[must_use]
    pub fn position_name(&self) -> &'a str {
        self.position.map_or("an unplaced position", |p| p.name.as_str())
    }

    /// Primary keyword for the drawn orientation.
    #[must_use]
    pub fn keyword(&self) -> Option<&'a str> {
        self.card.and_then(|c| c.primary_keyword(self.drawn.orientation))
    }
}

/// Aggregate counts over a draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawCounts {
    pub total: usize,
    pub majors: usize,
    pub minors: usize,
    pub upright: usize,
    pub reversed: usize,
    /// Indexed by `Suit::index`.
    pub suits: [usize; 4],
    /// Indexed by `Element::index`.
    pub elements: [usize; 4],
}

impl DrawCounts {
    #[must_use]
    pub fn suit(&self, suit: Suit) -> usize {
        self.suits[suit.index()]
    }

    #[must_use]
    pub fn element(&self, element: Element) -> usize {
        self.elements[element.index()]
    }

    /// Upright cards as a whole percentage; 0 for an empty draw.
    #[must_use]
    pub fn upright_percent(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.upright * 100 / self.total
        }
    }
}

/// A draw resolved against a catalog and layout.
#[derive(Clone, Debug)]
pub struct DrawView<'a> {
    layout: &'a Layout,
    slots: SmallVec<[DrawSlot<'a>; 11]>,
    counts: DrawCounts,
}

impl<'a> DrawView<'a> {
    /// Resolve a draw. Slots are ordered by position index (stable).
    #[must_use]
    pub fn new(cards: &[DrawnCard], catalog: &'a CardCatalog, layout: &'a Layout) -> Self {
        let mut slots: SmallVec<[DrawSlot<'a>; 11]> = cards
            .iter()
            .map(|drawn| DrawSlot {
                drawn: *drawn,
                card: catalog.get(drawn.card_id),
                position: layout.position(drawn.position),
            })
            .collect();
        slots.sort_by_key(|s| s.drawn.position);

        let mut counts = DrawCounts {
            total: slots.len(),
            ..DrawCounts::default()
        };
        for slot in &slots {
            if slot.is_upright() {
                counts.upright += 1;
            } else {
                counts.reversed += 1;
            }
            if let Some(card) = slot.card {
                if card.is_major() {
                    counts.majors += 1;
                } else {
                    counts.minors += 1;
                }
                if let Some(suit) = card.suit {
                    counts.suits[suit.index()] += 1;
                }
                if let Some(element) = card.element() {
                    counts.elements[element.index()] += 1;
                }
            }
        }

        Self {
            layout,
            slots,
            counts,
        }
    }

    #[must_use]
    pub fn layout(&self) -> &'a Layout {
        self.layout
    }

    #[must_use]
    pub fn slots(&self) -> &[DrawSlot<'a>] {
        &self.slots
    }

    #[must_use]
    pub fn counts(&self) -> &DrawCounts {
        &self.counts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// First slot at a position index.
    #[must_use]
    pub fn at(&self, position: usize) -> Option<&DrawSlot<'a>> {
        self.slots.iter().find(|s| s.drawn.position == position)
    }

    /// Slot at the first layout position with the role.
    #[must_use]
    pub fn by_role(&self, role: PositionRole) -> Option<&DrawSlot<'a>> {
        self.layout.find_role(role).and_then(|i| self.at(i))
    }

    /// Slot at the first layout position matching any of the roles.
    #[must_use]
    pub fn by_any_role(&self, roles: &[PositionRole]) -> Option<&DrawSlot<'a>> {
        roles.iter().find_map(|role| self.by_role(*role))
    }

    /// The suit with the strictly highest count, if any.
    #[must_use]
    pub fn dominant_suit(&self) -> Option<Suit> {
        let mut best: Option<(Suit, usize)> = None;
        let mut tied = false;
        for suit in Suit::ALL {
            let count = self.counts.suit(suit);
            match best {
                Some((_, top)) if count == top => tied = true,
                Some((_, top)) if count < top => {}
                _ if count > 0 => {
                    best = Some((suit, count));
                    tied = false;
                }
                _ => {}
            }
        }
        if tied {
            None
        } else {
            best.map(|(suit, _)| suit)
        }
    }

    /// Names of positions holding upright major arcana, in position order.
    #[must_use]
    pub fn strongest_positions(&self) -> Vec<&'a str> {
        self.slots
            .iter()
            .filter(|s| s.is_major() && s.is_upright())
            .filter_map(|s| s.position.map(|p| p.name.as_str()))
            .collect()
    }

    /// Overall energy used to pick templates.
    #[must_use]
    pub fn energy(&self) -> Energy {
        let c = &self.counts;
        if c.total == 0 {
            Energy::Neutral
        } else if c.upright * 10 >= c.total * 6 {
            Energy::Positive
        } else if c.reversed * 2 >= c.total {
            Energy::Challenging
        } else {
            Energy::Neutral
        }
    }
}
