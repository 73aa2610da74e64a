//! Per-reading content snapshot.
//!
//! A snapshot holds the rows of every table already filtered to one
//! layout and topic. It is backed by `im` collections, so cloning is O(1)
//! and a reading never observes a table being replaced underneath it.

use im::{HashMap, Vector};

use super::tables::{
    ActionSuggestionRow, Energy, OverrideKey, Pattern, PositionOverride, SectionKind, SynergyRule,
    TemplateRow,
};
use crate::cards::CardId;
use crate::core::Orientation;

/// Content rows visible to one reading.
#[derive(Clone, Debug, Default)]
pub struct ContentSnapshot {
    overrides: HashMap<OverrideKey, String>,
    patterns: Vector<Pattern>,
    synergies: Vector<SynergyRule>,
    templates: Vector<TemplateRow>,
    actions: Vector<ActionSuggestionRow>,
}

impl ContentSnapshot {
    /// Snapshot with no rows; every lookup falls through to local text.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_override(mut self, row: PositionOverride) -> Self {
        self.overrides.insert(OverrideKey::from(&row), row.text);
        self
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.patterns.push_back(pattern);
        self
    }

    #[must_use]
    pub fn with_synergy(mut self, rule: SynergyRule) -> Self {
        self.synergies.push_back(rule);
        self
    }

    #[must_use]
    pub fn with_template(mut self, template: TemplateRow) -> Self {
        self.templates.push_back(template);
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: ActionSuggestionRow) -> Self {
        self.actions.push_back(action);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
            && self.patterns.is_empty()
            && self.synergies.is_empty()
            && self.templates.is_empty()
            && self.actions.is_empty()
    }

    #[must_use]
    pub fn override_text(&self, key: &OverrideKey) -> Option<&str> {
        self.overrides.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn patterns(&self) -> &Vector<Pattern> {
        &self.patterns
    }

    #[must_use]
    pub fn synergies(&self) -> &Vector<SynergyRule> {
        &self.synergies
    }

    #[must_use]
    pub fn templates(&self) -> &Vector<TemplateRow> {
        &self.templates
    }

    /// Best template for a section and energy.
    ///
    /// Energy-specific rows beat `Any`, then narrower scopes, then higher
    /// priority. Remaining ties keep table order.
    #[must_use]
    pub fn template_for(&self, section: SectionKind, energy: Energy) -> Option<&TemplateRow> {
        let mut best: Option<&TemplateRow> = None;
        for row in self
            .templates
            .iter()
            .filter(|t| t.section == section && t.energy.accepts(energy))
        {
            let better = best.map_or(true, |b| template_rank(row) > template_rank(b));
            if better {
                best = Some(row);
            }
        }
        best
    }

    /// Action suggestions for one card in one orientation, in table order.
    pub fn actions_for(
        &self,
        card_id: CardId,
        orientation: Orientation,
    ) -> impl Iterator<Item = &ActionSuggestionRow> {
        self.actions
            .iter()
            .filter(move |a| a.card_id == card_id && a.applies_to(orientation))
    }
}

fn template_rank(row: &TemplateRow) -> (bool, u8, i32) {
    (row.energy.is_specific(), row.scope.specificity(), row.priority)
}
