//! Procedural section writer.
//!
//! Produces every narrative section from the analysis results alone. It is
//! the last fallback, so its output is never empty, even for an empty draw.

use crate::analysis::{AdvicePlan, PatternOutcome, PositionReading, ScoreReport, SynergyFinding};
use crate::core::Topic;
use crate::store::{Energy, SectionKind, Timeframe};

use super::phrases;
use super::template::TemplateVars;

/// Everything the narrative is written from.
#[derive(Clone, Copy, Debug)]
pub struct ReadingFacts<'a> {
    pub seeker_name: &'a str,
    pub topic: Topic,
    pub layout_name: &'a str,
    pub question: Option<&'a str>,
    pub energy: Energy,
    pub positions: &'a [PositionReading],
    pub relationships: &'a [String],
    pub pattern: Option<&'a PatternOutcome>,
    pub synergies: &'a [SynergyFinding],
    pub advice: &'a AdvicePlan,
    pub score: Option<&'a ScoreReport>,
    pub keywords: &'a [String],
}

impl<'a> ReadingFacts<'a> {
    /// Variables available to section templates.
    #[must_use]
    pub fn vars(&self) -> TemplateVars {
        let cards: Vec<&str> = self.positions.iter().map(|p| p.card_name.as_str()).collect();
        let mut vars = TemplateVars::new()
            .with("name", self.seeker_name)
            .with("topic", self.topic)
            .with("reading_name", self.topic.reading_name())
            .with("layout_name", self.layout_name)
            .with("card_count", self.positions.len())
            .with("cards", cards.join(", "))
            .with("keywords", self.keywords.join(", "))
            .with("energy_summary", phrases::energy_summary(self.energy, self.topic))
            .with("closing", phrases::closing(self.topic, self.energy));

        if let Some(question) = self.question {
            vars.set("question", question);
        }
        if let Some(pattern) = self.pattern {
            vars.set("pattern_name", &pattern.name);
            vars.set("pattern_message", &pattern.message);
        }
        if let Some(finding) = self.relationships.first() {
            vars.set("first_relationship", finding);
        }
        if let Some(synergy) = self.synergies.first() {
            vars.set("top_synergy", &synergy.description);
        }
        if let Some(item) = self.advice.immediate.first() {
            vars.set("first_advice", &item.text);
        }
        if let Some(score) = self.score {
            vars.set("score", score.score);
            vars.set("score_band", score.band.label());
        }
        vars
    }
}

/// Write one section from the facts.
#[must_use]
pub fn procedural_section(kind: SectionKind, facts: &ReadingFacts<'_>) -> String {
    let text = match kind {
        SectionKind::Opening => opening(facts),
        SectionKind::Analysis => analysis(facts),
        SectionKind::Highlights => highlights(facts),
        SectionKind::Advice => advice(facts),
        SectionKind::Closing => closing(facts),
    };
    if text.trim().is_empty() {
        phrases::EMPTY_DRAW.to_string()
    } else {
        text
    }
}

fn opening(facts: &ReadingFacts<'_>) -> String {
    let mut lines = vec![format!(
        "{}, this is your {} with the {}.",
        facts.seeker_name,
        facts.topic.reading_name(),
        facts.layout_name
    )];
    if let Some(question) = facts.question {
        lines.push(format!("The question at its heart: {question}"));
    }
    match facts.pattern {
        Some(pattern) => lines.push(pattern.message.clone()),
        None => lines.push(phrases::EMPTY_DRAW.to_string()),
    }
    lines.push(phrases::energy_summary(facts.energy, facts.topic).to_string());
    lines.join(" ")
}

fn analysis(facts: &ReadingFacts<'_>) -> String {
    if facts.positions.is_empty() {
        return phrases::EMPTY_DRAW.to_string();
    }
    facts
        .positions
        .iter()
        .map(|p| {
            format!(
                "{}: {} ({}), {}. {}",
                p.position_name, p.card_name, p.orientation, p.energy, p.meaning
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn highlights(facts: &ReadingFacts<'_>) -> String {
    let mut lines: Vec<String> = facts.relationships.to_vec();
    lines.extend(facts.synergies.iter().map(|s| s.description.clone()));
    if let Some(score) = facts.score {
        lines.push(format!(
            "Compatibility: {}/100 ({}). {}",
            score.score,
            score.band.label(),
            score.band.message()
        ));
    }
    if lines.is_empty() {
        phrases::NO_HIGHLIGHTS.to_string()
    } else {
        lines.join("\n")
    }
}

fn advice(facts: &ReadingFacts<'_>) -> String {
    let lines: Vec<String> = Timeframe::ALL
        .iter()
        .flat_map(|timeframe| {
            facts
                .advice
                .for_timeframe(*timeframe)
                .iter()
                .map(move |item| format!("{}: {}", timeframe.label(), item.text))
        })
        .collect();
    if lines.is_empty() {
        format!(
            "{}, take one small step today that honors what the cards have shown.",
            facts.seeker_name
        )
    } else {
        lines.join("\n")
    }
}

fn closing(facts: &ReadingFacts<'_>) -> String {
    let mut text = phrases::closing(facts.topic, facts.energy).to_string();
    if !facts.keywords.is_empty() {
        text.push_str(" Keywords to carry with you: ");
        text.push_str(&facts.keywords.join(", "));
        text.push('.');
    }
    text
}
