//! Reading topics and card orientation.
//!
//! A `Topic` is the subject-matter lens applied to meanings and templates.
//! Unknown topic strings collapse to `Topic::General` so callers never have
//! to handle a parse failure.

use serde::{Deserialize, Serialize};

/// Subject-matter lens for a reading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    /// Whole-life reading (fallback for unknown topics).
    #[default]
    General,
    /// Love and relationships.
    Love,
    /// Work and vocation.
    Career,
    /// Finances.
    Money,
    /// Health and wellbeing.
    Health,
}

impl Topic {
    /// All topics in declaration order.
    pub const ALL: [Topic; 5] = [
        Topic::General,
        Topic::Love,
        Topic::Career,
        Topic::Money,
        Topic::Health,
    ];

    /// Parse a topic key. Unknown keys fall back to `General`.
    #[must_use]
    pub fn parse(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "love" => Topic::Love,
            "career" => Topic::Career,
            "money" => Topic::Money,
            "health" => Topic::Health,
            _ => Topic::General,
        }
    }

    /// Stable string key (matches the serde representation).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Topic::General => "general",
            Topic::Love => "love",
            Topic::Career => "career",
            Topic::Money => "money",
            Topic::Health => "health",
        }
    }

    /// Human-readable reading name ("love reading").
    #[must_use]
    pub const fn reading_name(self) -> &'static str {
        match self {
            Topic::General => "overall reading",
            Topic::Love => "love reading",
            Topic::Career => "career reading",
            Topic::Money => "money reading",
            Topic::Health => "health reading",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Upright or reversed state of a drawn card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Upright,
    Reversed,
}

impl Orientation {
    #[must_use]
    pub const fn is_upright(self) -> bool {
        matches!(self, Orientation::Upright)
    }

    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Orientation::Reversed)
    }

    /// The opposite orientation.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Orientation::Upright => Orientation::Reversed,
            Orientation::Reversed => Orientation::Upright,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Orientation::Upright => "upright",
            Orientation::Reversed => "reversed",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
