//! Interpretation result.
//!
//! Everything a caller persists or displays for one reading. The byte
//! encoding is bincode over the serde representation, so every type here
//! sticks to plain structs, unit enums, `Vec` and `Option`.

use serde::{Deserialize, Serialize};

use crate::analysis::{AdvicePlan, PatternOutcome, PositionReading, ScoreReport, SynergyFinding};
use crate::cards::CardId;
use crate::core::{Result, Topic};
use crate::layouts::LayoutId;
use crate::store::{Energy, SectionKind};

/// Where a section's text came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionOrigin {
    /// A content-table template.
    Template,
    /// The procedural writer.
    Procedural,
    /// The remote text generator.
    Remote,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeSection {
    pub kind: SectionKind,
    pub title: String,
    pub text: String,
    pub origin: SectionOrigin,
}

/// The assembled narrative, one section per `SectionKind` in order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub sections: Vec<NarrativeSection>,
}

impl Narrative {
    #[must_use]
    pub fn section(&self, kind: SectionKind) -> Option<&NarrativeSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// All sections as one document with headings.
    #[must_use]
    pub fn full_text(&self) -> String {
        self.sections
            .iter()
            .map(|s| format!("## {}\n\n{}", s.title, s.text))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Section bodies only, separated by blank lines.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Complete interpretation of one reading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretationResult {
    pub layout: LayoutId,
    pub layout_name: String,
    pub topic: Topic,
    pub seeker_name: String,
    /// Custom question if given, else the layout's guiding question.
    pub question: Option<String>,
    pub energy: Energy,
    pub positions: Vec<PositionReading>,
    pub relationships: Vec<String>,
    pub pattern: Option<PatternOutcome>,
    pub synergies: Vec<SynergyFinding>,
    pub score: Option<ScoreReport>,
    pub advice: AdvicePlan,
    pub keywords: Vec<String>,
    pub narrative: Narrative,
}

impl InterpretationResult {
    /// Stable byte encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Drawn card ids in position order.
    #[must_use]
    pub fn card_ids(&self) -> Vec<CardId> {
        self.positions.iter().map(|p| p.card_id).collect()
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.positions.len()
    }
}
