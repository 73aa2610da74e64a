//! Layout definitions.
//!
//! A `Layout` is an ordered list of positions plus the per-topic guiding
//! questions for the spread. Layouts are plain data: everything
//! layout-specific the analyzers need is reachable through position roles.

use serde::{Deserialize, Serialize};

use super::position::{PositionDefinition, PositionRole};
use super::weights::ScoreWeights;
use crate::core::Topic;

/// String key identifying a layout (`celtic_cross`, `one_card`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayoutId(pub String);

impl LayoutId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LayoutId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for LayoutId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Guiding question for one topic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicQuestion {
    pub topic: Topic,
    pub question: String,
    #[serde(default)]
    pub sub_questions: Vec<String>,
}

/// A spread layout.
///
/// ## Example
///
/// ```
/// use tarot_engine::layouts::{Layout, PositionDefinition, PositionRole};
/// use tarot_engine::core::Topic;
///
/// let layout = Layout::new("two_paths", "Two Paths")
///     .with_position(PositionDefinition::new("Path A", PositionRole::Present))
///     .with_position(PositionDefinition::new("Path B", PositionRole::Future))
///     .with_question(Topic::General, "Which way should I go?");
///
/// assert_eq!(layout.size(), 2);
/// assert_eq!(layout.find_role(PositionRole::Future), Some(1));
/// assert_eq!(layout.question_for(Topic::Love), Some("Which way should I go?"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub id: LayoutId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub positions: Vec<PositionDefinition>,
    #[serde(default)]
    pub questions: Vec<TopicQuestion>,
    /// Topics the layout is offered for. Empty means all.
    #[serde(default)]
    pub topics: Vec<Topic>,
    /// Present only for layouts that produce a compatibility score.
    #[serde(default)]
    pub score_weights: Option<ScoreWeights>,
}

impl Layout {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: LayoutId::new(id),
            name: name.into(),
            description: String::new(),
            positions: Vec::new(),
            questions: Vec::new(),
            topics: Vec::new(),
            score_weights: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: PositionDefinition) -> Self {
        self.positions.push(position);
        self
    }

    #[must_use]
    pub fn with_question(mut self, topic: Topic, question: impl Into<String>) -> Self {
        self.questions.push(TopicQuestion {
            topic,
            question: question.into(),
            sub_questions: Vec::new(),
        });
        self
    }

    /// Add a guiding question with follow-up sub-questions.
    #[must_use]
    pub fn with_questions<I, S>(mut self, topic: Topic, question: impl Into<String>, subs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.questions.push(TopicQuestion {
            topic,
            question: question.into(),
            sub_questions: subs.into_iter().map(Into::into).collect(),
        });
        self
    }

    #[must_use]
    pub fn with_topics(mut self, topics: impl IntoIterator<Item = Topic>) -> Self {
        self.topics = topics.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_score_weights(mut self, weights: ScoreWeights) -> Self {
        self.score_weights = Some(weights);
        self
    }

    /// Number of positions.
    #[must_use]
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn position(&self, index: usize) -> Option<&PositionDefinition> {
        self.positions.get(index)
    }

    /// Index of the first position with the role.
    #[must_use]
    pub fn find_role(&self, role: PositionRole) -> Option<usize> {
        self.positions.iter().position(|p| p.role == role)
    }

    /// Index of the first position matching any of the roles, tried in order.
    #[must_use]
    pub fn find_any_role(&self, roles: &[PositionRole]) -> Option<usize> {
        roles.iter().find_map(|role| self.find_role(*role))
    }

    #[must_use]
    pub fn supports(&self, topic: Topic) -> bool {
        self.topics.is_empty() || self.topics.contains(&topic)
    }

    /// Guiding question for a topic, falling back to the general question.
    #[must_use]
    pub fn question_for(&self, topic: Topic) -> Option<&str> {
        self.topic_question(topic)
            .or_else(|| self.topic_question(Topic::General))
            .or_else(|| self.questions.first())
            .map(|q| q.question.as_str())
    }

    fn topic_question(&self, topic: Topic) -> Option<&TopicQuestion> {
        self.questions.iter().find(|q| q.topic == topic)
    }
}
