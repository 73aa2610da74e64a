//! Card classification: arcana, suit, element.
//!
//! All three are closed sets. Court cards and pips share `Suit`; only
//! majors carry a per-card element, minors take theirs from the suit.

use serde::{Deserialize, Serialize};

/// Major or minor arcana.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arcana {
    Major,
    Minor,
}

impl Arcana {
    #[must_use]
    pub const fn is_major(self) -> bool {
        matches!(self, Arcana::Major)
    }
}

/// The four minor-arcana suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Pentacles,
}

impl Suit {
    /// All suits in standard deck order.
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

    /// Classical element of the suit.
    #[must_use]
    pub const fn element(self) -> Element {
        match self {
            Suit::Wands => Element::Fire,
            Suit::Cups => Element::Water,
            Suit::Swords => Element::Air,
            Suit::Pentacles => Element::Earth,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Wands => "Wands",
            Suit::Cups => "Cups",
            Suit::Swords => "Swords",
            Suit::Pentacles => "Pentacles",
        }
    }

    /// Korean suit name used for localized card names.
    #[must_use]
    pub const fn localized_name(self) -> &'static str {
        match self {
            Suit::Wands => "완드",
            Suit::Cups => "컵",
            Suit::Swords => "소드",
            Suit::Pentacles => "펜타클",
        }
    }

    /// Position of the suit in `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classical elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Air,
    Earth,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Water, Element::Air, Element::Earth];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Air => "Air",
            Element::Earth => "Earth",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// What an abundance of this element says about a reading.
    #[must_use]
    pub const fn theme(self) -> &'static str {
        match self {
            Element::Fire => "passion, drive and initiative",
            Element::Water => "emotion, intuition and connection",
            Element::Air => "thought, communication and conflict",
            Element::Earth => "material matters, stability and the body",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_elements() {
        assert_eq!(Suit::Wands.element(), Element::Fire);
        assert_eq!(Suit::Cups.element(), Element::Water);
        assert_eq!(Suit::Swords.element(), Element::Air);
        assert_eq!(Suit::Pentacles.element(), Element::Earth);
    }

    #[test]
    fn test_indices_match_order() {
        for (i, suit) in Suit::ALL.iter().enumerate() {
            assert_eq!(suit.index(), i);
        }
        for (i, element) in Element::ALL.iter().enumerate() {
            assert_eq!(element.index(), i);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Suit::Pentacles).unwrap(), "\"pentacles\"");
        let arcana: Arcana = serde_json::from_str("\"major\"").unwrap();
        assert!(arcana.is_major());
    }
}
