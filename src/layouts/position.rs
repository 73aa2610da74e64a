//! Position definitions and their semantic roles.
//!
//! Roles let analyzers address positions by meaning ("self-view",
//! "outcome") instead of by index, so a single probe set serves every
//! layout. A role the layout lacks simply disables the probes that need it.

use serde::{Deserialize, Serialize};

/// Semantic role of a spread position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionRole {
    Advice,
    Past,
    Present,
    Future,
    /// Inner present state (Celtic Cross heart).
    Inner,
    /// Outer present influence crossing the heart.
    Challenge,
    Foundation,
    /// How the seeker presents outwardly.
    Appearance,
    SelfView,
    OtherView,
    Expectation,
    Outcome,
    HiddenInfluence,
    ConsciousDesire,
    UnconsciousDesire,
    Me,
    Partner,
    External,
    MyThoughts,
    PartnerThoughts,
    MyFuture,
    PartnerFuture,
}

impl PositionRole {
    /// Opening phrase used when synthesizing a position meaning.
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            PositionRole::Advice => "As guidance for you",
            PositionRole::Past => "Looking at the past",
            PositionRole::Present => "In the present moment",
            PositionRole::Future => "Looking ahead",
            PositionRole::Inner => "In your inner state",
            PositionRole::Challenge => "In the outer challenge you face",
            PositionRole::Foundation => "At the root of the situation",
            PositionRole::Appearance => "In the face you show the world",
            PositionRole::SelfView => "In how you see yourself",
            PositionRole::OtherView => "In how others see you",
            PositionRole::Expectation => "In your hopes and expectations",
            PositionRole::Outcome => "In the likely outcome",
            PositionRole::HiddenInfluence => "Among the hidden influences",
            PositionRole::ConsciousDesire => "In what you consciously want",
            PositionRole::UnconsciousDesire => "In what you truly need",
            PositionRole::Me => "In your own state",
            PositionRole::Partner => "In your partner's state",
            PositionRole::External => "Among the outside influences",
            PositionRole::MyThoughts => "In your current thoughts",
            PositionRole::PartnerThoughts => "In your partner's current thoughts",
            PositionRole::MyFuture => "In your future feelings",
            PositionRole::PartnerFuture => "In your partner's future feelings",
        }
    }

    /// Short noun used in findings ("the past", "the outcome").
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            PositionRole::Advice => "the advice",
            PositionRole::Past => "the past",
            PositionRole::Present => "the present",
            PositionRole::Future => "the future",
            PositionRole::Inner => "your inner state",
            PositionRole::Challenge => "the outer situation",
            PositionRole::Foundation => "the foundation",
            PositionRole::Appearance => "your outward appearance",
            PositionRole::SelfView => "your self-image",
            PositionRole::OtherView => "how others see you",
            PositionRole::Expectation => "your expectations",
            PositionRole::Outcome => "the outcome",
            PositionRole::HiddenInfluence => "the hidden influence",
            PositionRole::ConsciousDesire => "your conscious desire",
            PositionRole::UnconsciousDesire => "your unconscious desire",
            PositionRole::Me => "you",
            PositionRole::Partner => "your partner",
            PositionRole::External => "outside circumstances",
            PositionRole::MyThoughts => "your thoughts",
            PositionRole::PartnerThoughts => "your partner's thoughts",
            PositionRole::MyFuture => "your future feelings",
            PositionRole::PartnerFuture => "your partner's future feelings",
        }
    }

    /// Roles that describe where things stand now.
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(
            self,
            PositionRole::Present | PositionRole::Inner | PositionRole::Me | PositionRole::Advice
        )
    }
}

/// One position in a layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub role: PositionRole,
    /// Optional guiding question shown with this position.
    #[serde(default)]
    pub question: Option<String>,
}

impl PositionDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, role: PositionRole) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            role,
            question: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serde() {
        let json = serde_json::to_string(&PositionRole::SelfView).unwrap();
        assert_eq!(json, "\"self_view\"");
        let role: PositionRole = serde_json::from_str("\"partner_future\"").unwrap();
        assert_eq!(role, PositionRole::PartnerFuture);
    }

    #[test]
    fn test_definition_builder() {
        let pos = PositionDefinition::new("Outcome", PositionRole::Outcome)
            .with_description("Where things are heading")
            .with_question("What is the most likely result?");

        assert_eq!(pos.role, PositionRole::Outcome);
        assert!(pos.question.is_some());
        assert!(PositionRole::Inner.is_present());
        assert!(!PositionRole::Outcome.is_present());
    }
}
