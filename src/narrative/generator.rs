//! Remote text generation.
//!
//! A `TextGenerator` turns a prompt into free-form text. It may be slow,
//! fail, or return nothing useful; the assembler treats every such outcome
//! as "keep the local text".

use std::time::Duration;

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::SectionKind;
use crate::text::ReadingFacts;

/// Failures from a text generator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("text generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("text generator unavailable: {0}")]
    Unavailable(String),

    #[error("text generator returned malformed output: {0}")]
    Malformed(String),

    #[error("text generation failed: {0}")]
    Failed(String),
}

/// What a prompt asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptScope {
    Section(SectionKind),
    WholeDocument,
}

/// A generation request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub scope: PromptScope,
    /// Role and tone instructions.
    pub system: String,
    /// The reading itself.
    pub user: String,
}

/// Source of remote text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a prompt.
    async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError>;

    /// Name used in logs.
    fn name(&self) -> &str {
        "remote"
    }
}

const SYSTEM: &str = "You are a warm, grounded tarot reader. Speak directly to the seeker. \
Stay faithful to the cards, positions and findings provided; do not invent cards. \
Offer perspective and practical encouragement rather than fixed predictions.";

/// Builds prompts from reading facts.
#[derive(Clone, Debug, Default)]
pub struct PromptBuilder {
    custom_question: Option<String>,
}

impl PromptBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Question typed by the seeker. Takes precedence over the layout's
    /// guiding question.
    #[must_use]
    pub fn with_custom_question(mut self, question: Option<String>) -> Self {
        self.custom_question = question.filter(|q| !q.trim().is_empty());
        self
    }

    /// Prompt for one section. The local draft is included so the
    /// generator can refine rather than start from nothing.
    #[must_use]
    pub fn section(&self, kind: SectionKind, facts: &ReadingFacts<'_>, draft: &str) -> Prompt {
        let mut user = self.context(facts);
        user.push_str(&format!(
            "\nWrite the \"{}\" section of the reading in 2-4 short paragraphs.\n",
            kind.title()
        ));
        user.push_str(section_focus(kind));
        user.push_str("\n\nDraft to improve:\n");
        user.push_str(draft);
        user.push('\n');

        Prompt {
            scope: PromptScope::Section(kind),
            system: SYSTEM.to_string(),
            user,
        }
    }

    /// Prompt for the whole narrative. The reply is expected as a JSON
    /// object keyed by section.
    #[must_use]
    pub fn whole_document(&self, facts: &ReadingFacts<'_>) -> Prompt {
        let mut user = self.context(facts);
        user.push_str("\nWrite the full reading. Return ONLY a JSON object with these keys:\n");
        for kind in SectionKind::ALL {
            user.push_str(&format!("- \"{}\": {}\n", kind.key(), kind.title()));
        }
        user.push_str("Example format: {\"opening\": \"...\", \"analysis\": \"...\"}\n");

        Prompt {
            scope: PromptScope::WholeDocument,
            system: SYSTEM.to_string(),
            user,
        }
    }

    fn context(&self, facts: &ReadingFacts<'_>) -> String {
        let mut text = format!(
            "Seeker: {}\nSpread: {}\nTopic: {}\n",
            facts.seeker_name, facts.layout_name, facts.topic
        );

        let question = self.custom_question.as_deref().or(facts.question);
        if let Some(question) = question {
            text.push_str(&format!("Question: {question}\n"));
        }

        text.push_str("\nCards:\n");
        for p in facts.positions {
            text.push_str(&format!(
                "- {} ({}): {} {}, {}\n",
                p.position_name, p.position, p.card_name, p.orientation, p.energy
            ));
        }

        if let Some(pattern) = facts.pattern {
            text.push_str(&format!("\nOverall pattern: {}. {}\n", pattern.name, pattern.message));
        }

        if !facts.relationships.is_empty() {
            text.push_str("\nRelationships between positions:\n");
            for finding in facts.relationships {
                text.push_str(&format!("- {finding}\n"));
            }
        }

        if !facts.synergies.is_empty() {
            text.push_str("\nNotable combinations:\n");
            for synergy in facts.synergies {
                text.push_str(&format!("- {}\n", synergy.description));
            }
        }

        if let Some(score) = facts.score {
            text.push_str(&format!(
                "\nCompatibility score: {}/100 ({})\n",
                score.score,
                score.band.label()
            ));
        }
        text
    }
}

fn section_focus(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Opening => "Give the core message of the whole spread.",
        SectionKind::Analysis => "Walk through each position and what its card means there.",
        SectionKind::Highlights => "Explain how the cards relate and reinforce each other.",
        SectionKind::Advice => "Give concrete actions for now, this week and the long run.",
        SectionKind::Closing => "Close with encouragement and the keywords to remember.",
    }
}

/// Parse a whole-document reply into per-section text.
///
/// Accepts a JSON object, optionally surrounded by other text. Missing or
/// blank sections are simply absent from the result.
pub fn parse_document(reply: &str) -> Result<FxHashMap<SectionKind, String>, GenerationError> {
    let (Some(start), Some(end)) = (reply.find('{'), reply.rfind('}')) else {
        return Err(GenerationError::Malformed("no JSON object in reply".into()));
    };
    if end < start {
        return Err(GenerationError::Malformed("no JSON object in reply".into()));
    }

    let parsed: FxHashMap<String, serde_json::Value> = serde_json::from_str(&reply[start..=end])
        .map_err(|e| GenerationError::Malformed(e.to_string()))?;

    let mut sections = FxHashMap::default();
    for kind in SectionKind::ALL {
        if let Some(serde_json::Value::String(text)) = parsed.get(kind.key()) {
            if !text.trim().is_empty() {
                sections.insert(kind, text.trim().to_string());
            }
        }
    }
    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AdvicePlan;
    use crate::core::Topic;
    use crate::store::Energy;

    fn facts(advice: &AdvicePlan) -> ReadingFacts<'_> {
        ReadingFacts {
            seeker_name: "Mina",
            topic: Topic::Career,
            layout_name: "Seven Star Spread",
            question: Some("Where is my work heading?"),
            energy: Energy::Neutral,
            positions: &[],
            relationships: &[],
            pattern: None,
            synergies: &[],
            advice,
            score: None,
            keywords: &[],
        }
    }

    #[test]
    fn test_custom_question_wins() {
        let advice = AdvicePlan::default();
        let facts = facts(&advice);

        let guided = PromptBuilder::new().section(SectionKind::Opening, &facts, "draft");
        assert!(guided.user.contains("Question: Where is my work heading?"));

        let custom = PromptBuilder::new()
            .with_custom_question(Some("Should I take the offer?".into()))
            .section(SectionKind::Opening, &facts, "draft");
        assert!(custom.user.contains("Question: Should I take the offer?"));
        assert!(custom.user.contains("Draft to improve:\ndraft"));
        assert_eq!(custom.scope, PromptScope::Section(SectionKind::Opening));
    }

    #[test]
    fn test_blank_custom_question_ignored() {
        let advice = AdvicePlan::default();
        let prompt = PromptBuilder::new()
            .with_custom_question(Some("   ".into()))
            .whole_document(&facts(&advice));
        assert!(prompt.user.contains("Question: Where is my work heading?"));
        assert!(prompt.user.contains("\"closing\""));
    }

    #[test]
    fn test_parse_document() {
        let reply = "Here you go:\n{\"opening\": \"Hello.\", \"advice\": \"  \", \"closing\": \"Bye.\"}";
        let sections = parse_document(reply).unwrap();
        assert_eq!(sections.get(&SectionKind::Opening).map(String::as_str), Some("Hello."));
        assert_eq!(sections.get(&SectionKind::Closing).map(String::as_str), Some("Bye."));
        assert!(!sections.contains_key(&SectionKind::Advice));
    }

    #[test]
    fn test_parse_document_malformed() {
        assert!(matches!(parse_document("no json"), Err(GenerationError::Malformed(_))));
        assert!(matches!(parse_document("} {"), Err(GenerationError::Malformed(_))));
        assert!(matches!(parse_document("{not json}"), Err(GenerationError::Malformed(_))));
    }
}
