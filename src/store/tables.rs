//! Content table rows.
//!
//! Every row type except position overrides carries a `Scope`; a row with
//! an empty scope applies to every layout and topic.

use serde::{Deserialize, Serialize};

use super::condition::PatternCondition;
use crate::cards::{Arcana, CardId, Suit};
use crate::core::{Orientation, Topic};
use crate::layouts::LayoutId;

/// Layout/topic filter for a row. `None` matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    #[serde(default)]
    pub layout: Option<LayoutId>,
    #[serde(default)]
    pub topic: Option<Topic>,
}

impl Scope {
    #[must_use]
    pub fn layout(id: impl Into<String>) -> Self {
        Self {
            layout: Some(LayoutId::new(id)),
            topic: None,
        }
    }

    #[must_use]
    pub fn topic(topic: Topic) -> Self {
        Self {
            layout: None,
            topic: Some(topic),
        }
    }

    #[must_use]
    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.topic = Some(topic);
        self
    }

    #[must_use]
    pub fn matches(&self, layout: &LayoutId, topic: Topic) -> bool {
        self.layout.as_ref().map_or(true, |l| l == layout)
            && self.topic.map_or(true, |t| t == topic)
    }

    /// Rows scoped to a topic rank above topic-agnostic ones.
    #[must_use]
    pub fn specificity(&self) -> u8 {
        u8::from(self.layout.is_some()) + u8::from(self.topic.is_some())
    }
}

/// Verbatim meaning for one card in one position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionOverride {
    pub layout: LayoutId,
    pub card_id: CardId,
    pub position: usize,
    pub orientation: Orientation,
    pub topic: Topic,
    pub text: String,
}

/// Lookup key for a position override.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OverrideKey {
    pub layout: LayoutId,
    pub card_id: CardId,
    pub position: usize,
    pub orientation: Orientation,
    pub topic: Topic,
}

impl From<&PositionOverride> for OverrideKey {
    fn from(row: &PositionOverride) -> Self {
        Self {
            layout: row.layout.clone(),
            card_id: row.card_id,
            position: row.position,
            orientation: row.orientation,
            topic: row.topic,
        }
    }
}

/// A prioritized structural rule with a message template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Higher wins.
    pub priority: i32,
    pub condition: PatternCondition,
    /// Message template; see `text::template` for placeholders.
    pub template: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub scope: Scope,
}

impl Pattern {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        priority: i32,
        condition: PatternCondition,
        template: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            priority,
            condition,
            template: template.into(),
            keywords: Vec::new(),
            scope: Scope::default(),
        }
    }

    #[must_use]
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// What a synergy rule matches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynergyKind {
    /// Two cards of the same suit. `None` matches any suit.
    SameSuit { suit: Option<Suit> },
    /// Two specific major-arcana cards, in either order.
    MajorPair { a: CardId, b: CardId },
    /// Two cards in opposite orientations.
    OppositeOrientation,
    /// At least `min` cards of the arcana in the whole draw.
    ArcanaCount { arcana: Arcana, min: usize },
}

/// A synergy table row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynergyRule {
    pub id: String,
    pub kind: SynergyKind,
    pub strength: i32,
    pub description: String,
    #[serde(default)]
    pub scope: Scope,
}

impl SynergyRule {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        kind: SynergyKind,
        strength: i32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            strength,
            description: description.into(),
            scope: Scope::default(),
        }
    }
}

/// Narrative sections, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Opening,
    Analysis,
    Highlights,
    Advice,
    Closing,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Opening,
        SectionKind::Analysis,
        SectionKind::Highlights,
        SectionKind::Advice,
        SectionKind::Closing,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            SectionKind::Opening => "Core Message",
            SectionKind::Analysis => "Deep Analysis",
            SectionKind::Highlights => "Relationships and Synergies",
            SectionKind::Advice => "Action Advice",
            SectionKind::Closing => "Closing",
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            SectionKind::Opening => "opening",
            SectionKind::Analysis => "analysis",
            SectionKind::Highlights => "highlights",
            SectionKind::Advice => "advice",
            SectionKind::Closing => "closing",
        }
    }
}

/// Overall energy of a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Energy {
    /// At least 60% upright.
    Positive,
    Neutral,
    /// At least half reversed.
    Challenging,
}

/// Energy filter on a template row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyCondition {
    #[default]
    Any,
    Positive,
    Neutral,
    Challenging,
}

impl EnergyCondition {
    #[must_use]
    pub const fn accepts(self, energy: Energy) -> bool {
        matches!(
            (self, energy),
            (EnergyCondition::Any, _)
                | (EnergyCondition::Positive, Energy::Positive)
                | (EnergyCondition::Neutral, Energy::Neutral)
                | (EnergyCondition::Challenging, Energy::Challenging)
        )
    }

    /// Energy-specific rows rank above `Any`.
    #[must_use]
    pub const fn is_specific(self) -> bool {
        !matches!(self, EnergyCondition::Any)
    }
}

/// A section template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRow {
    pub id: String,
    pub section: SectionKind,
    #[serde(default)]
    pub energy: EnergyCondition,
    #[serde(default)]
    pub priority: i32,
    pub text: String,
    #[serde(default)]
    pub scope: Scope,
}

impl TemplateRow {
    #[must_use]
    pub fn new(id: impl Into<String>, section: SectionKind, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            section,
            energy: EnergyCondition::Any,
            priority: 0,
            text: text.into(),
            scope: Scope::default(),
        }
    }

    #[must_use]
    pub fn with_energy(mut self, energy: EnergyCondition) -> Self {
        self.energy = energy;
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }
}

/// When an action suggestion should be acted on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    Immediate,
    ThisWeek,
    LongTerm,
}

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [Timeframe::Immediate, Timeframe::ThisWeek, Timeframe::LongTerm];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Timeframe::Immediate => "Right now",
            Timeframe::ThisWeek => "This week",
            Timeframe::LongTerm => "In the long run",
        }
    }
}

/// An action suggestion keyed by card, orientation and topic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSuggestionRow {
    pub card_id: CardId,
    /// `None` applies to both orientations.
    #[serde(default)]
    pub orientation: Option<Orientation>,
    pub timeframe: Timeframe,
    #[serde(default)]
    pub priority: i32,
    pub text: String,
    #[serde(default)]
    pub scope: Scope,
}

impl ActionSuggestionRow {
    #[must_use]
    pub fn new(card_id: CardId, timeframe: Timeframe, text: impl Into<String>) -> Self {
        Self {
            card_id,
            orientation: None,
            timeframe,
            priority: 0,
            text: text.into(),
            scope: Scope::default(),
        }
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    #[must_use]
    pub fn applies_to(&self, orientation: Orientation) -> bool {
        self.orientation.map_or(true, |o| o == orientation)
    }
}
