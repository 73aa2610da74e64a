//! Card definitions - static card data.
//!
//! `Card` holds the immutable properties of one tarot card. The
//! orientation a card was drawn in belongs to `DrawnCard`, not here.

use serde::{Deserialize, Serialize};

use super::attributes::{Arcana, Element, Suit};
use crate::core::Orientation;

/// Unique identifier for a card in the catalog.
///
/// Stable across the system: the standard deck numbers majors 0..=21,
/// then Wands, Cups, Swords and Pentacles in blocks of 14.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Keyword lists keyed by orientation. The first entry is the primary one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keywords {
    #[serde(default)]
    pub upright: Vec<String>,
    #[serde(default)]
    pub reversed: Vec<String>,
}

impl Keywords {
    #[must_use]
    pub fn for_orientation(&self, orientation: Orientation) -> &[String] {
        match orientation {
            Orientation::Upright => &self.upright,
            Orientation::Reversed => &self.reversed,
        }
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use tarot_engine::cards::{Card, CardId, Suit};
/// use tarot_engine::core::Orientation;
///
/// let card = Card::minor(CardId::new(38), Suit::Cups, 3)
///     .with_keywords(Orientation::Upright, ["celebration", "friendship"]);
///
/// assert_eq!(card.name, "Three of Cups");
/// assert_eq!(card.primary_keyword(Orientation::Upright), Some("celebration"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    /// Canonical (English) name.
    pub name: String,

    /// Display name in the host application's language.
    pub localized_name: String,

    pub arcana: Arcana,

    #[serde(default)]
    pub suit: Option<Suit>,

    /// Majors 0..=21; minors 1..=14 with 11..=14 the court cards.
    #[serde(default)]
    pub number: Option<u8>,

    /// Explicit element. Minors inherit their suit's element when unset.
    #[serde(default)]
    pub element: Option<Element>,

    #[serde(default)]
    pub keywords: Keywords,
}

impl Card {
    /// Create a major-arcana card.
    #[must_use]
    pub fn major(
        id: CardId,
        number: u8,
        name: impl Into<String>,
        localized_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            localized_name: localized_name.into(),
            arcana: Arcana::Major,
            suit: None,
            number: Some(number),
            element: None,
            keywords: Keywords::default(),
        }
    }

    /// Create a minor-arcana card; names are composed from suit and rank.
    #[must_use]
    pub fn minor(id: CardId, suit: Suit, number: u8) -> Self {
        Self {
            id,
            name: format!("{} of {}", rank_name(number), suit.name()),
            localized_name: format!("{}의 {}", suit.localized_name(), localized_rank(number)),
            arcana: Arcana::Minor,
            suit: Some(suit),
            number: Some(number),
            element: None,
            keywords: Keywords::default(),
        }
    }

    /// Set the element (builder pattern).
    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    /// Replace the keyword list for one orientation (builder pattern).
    #[must_use]
    pub fn with_keywords<I, S>(mut self, orientation: Orientation, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = keywords.into_iter().map(Into::into).collect();
        match orientation {
            Orientation::Upright => self.keywords.upright = list,
            Orientation::Reversed => self.keywords.reversed = list,
        }
        self
    }

    #[must_use]
    pub const fn is_major(&self) -> bool {
        self.arcana.is_major()
    }

    /// Effective element: explicit, else the suit's.
    #[must_use]
    pub fn element(&self) -> Option<Element> {
        self.element.or_else(|| self.suit.map(Suit::element))
    }

    #[must_use]
    pub fn keywords(&self, orientation: Orientation) -> &[String] {
        self.keywords.for_orientation(orientation)
    }

    /// First keyword for the orientation, if any.
    #[must_use]
    pub fn primary_keyword(&self, orientation: Orientation) -> Option<&str> {
        self.keywords(orientation).first().map(String::as_str)
    }
}

/// English rank name for minor numbers 1..=14.
#[must_use]
pub fn rank_name(number: u8) -> &'static str {
    match number {
        1 => "Ace",
        2 => "Two",
        3 => "Three",
        4 => "Four",
        5 => "Five",
        6 => "Six",
        7 => "Seven",
        8 => "Eight",
        9 => "Nine",
        10 => "Ten",
        11 => "Page",
        12 => "Knight",
        13 => "Queen",
        14 => "King",
        _ => "Unknown",
    }
}

fn localized_rank(number: u8) -> String {
    match number {
        1 => "에이스".to_string(),
        11 => "시종".to_string(),
        12 => "기사".to_string(),
        13 => "여왕".to_string(),
        14 => "왕".to_string(),
        n => n.to_string(),
    }
}
