//! Reading engine.
//!
//! Ties the catalog, layouts, content store and optional text generator
//! together. One call to `interpret` produces one `InterpretationResult`:
//!
//! 1. Resolve the layout (the only hard failure)
//! 2. Load the content snapshot, bounded by the store timeout
//! 3. Run every analyzer over the resolved draw
//! 4. Assemble the narrative
//!
//! The engine holds no per-reading state, so one instance can serve any
//! number of concurrent readings.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::analysis::{
    extract_keywords, AdvicePlanner, DrawView, PatternMatcher, PositionInterpreter,
    RelationshipAnalyzer, ScoreEngine, SynergyAnalyzer,
};
use crate::cards::{CardCatalog, DrawnCard};
use crate::core::{DrawRng, EngineConfig, Result};
use crate::layouts::LayoutRegistry;
use crate::narrative::{
    InterpretationResult, NarrativeAssembler, PromptBuilder, ShareSummary, TextGenerator,
};
use crate::store::{ContentQuery, ContentSnapshot, ContentStore, InMemoryStore, StoreError};
use crate::text::{ReadingFacts, TemplateRenderer, TemplateVars};

use super::drawer::SpreadDrawer;
use super::request::ReadingRequest;

/// Top-level interpretation engine.
pub struct ReadingEngine {
    catalog: Arc<CardCatalog>,
    layouts: Arc<LayoutRegistry>,
    store: Arc<dyn ContentStore>,
    generator: Option<Arc<dyn TextGenerator>>,
    config: Arc<EngineConfig>,
    relationships: RelationshipAnalyzer,
}

impl ReadingEngine {
    #[must_use]
    pub fn new(
        catalog: Arc<CardCatalog>,
        layouts: Arc<LayoutRegistry>,
        store: Arc<dyn ContentStore>,
    ) -> Self {
        Self {
            catalog,
            layouts,
            store,
            generator: None,
            config: Arc::new(EngineConfig::default()),
            relationships: RelationshipAnalyzer::default(),
        }
    }

    /// Standard deck, built-in layouts and the standard synergy table.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            Arc::new(CardCatalog::standard()),
            Arc::new(LayoutRegistry::builtin()),
            Arc::new(InMemoryStore::standard()),
        )
    }

    #[must_use]
    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    #[must_use]
    pub fn with_relationship_analyzer(mut self, analyzer: RelationshipAnalyzer) -> Self {
        self.relationships = analyzer;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn layouts(&self) -> &LayoutRegistry {
        &self.layouts
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Draw a full spread for a layout from a seed.
    pub fn draw(&self, layout_id: &str, seed: u64) -> Result<Vec<DrawnCard>> {
        let layout = self.layouts.require(layout_id)?;
        Ok(SpreadDrawer::new(&self.catalog)
            .with_reversal_chance(self.config.reversal_chance)
            .draw(layout, &DrawRng::new(seed)))
    }

    /// Content snapshot for a query. Store failures and timeouts give an
    /// empty snapshot.
    pub async fn load_snapshot(&self, query: &ContentQuery) -> ContentSnapshot {
        let timeout = self.config.store_timeout();
        let error = match tokio::time::timeout(timeout, self.store.load(query)).await {
            Ok(Ok(snapshot)) => return snapshot,
            Ok(Err(e)) => e,
            Err(_) => StoreError::Timeout(timeout),
        };
        warn!(
            layout = %query.layout,
            topic = %query.topic,
            error = %error,
            "content store failed, continuing with an empty snapshot"
        );
        ContentSnapshot::empty()
    }

    /// Interpret one reading.
    ///
    /// # Errors
    ///
    /// Only `EngineError::UnknownLayout`. Every other problem degrades the
    /// affected part of the result.
    pub async fn interpret(&self, request: &ReadingRequest) -> Result<InterpretationResult> {
        let layout = self.layouts.require(request.layout.as_str())?;
        let topic = request.topic;

        if !layout.supports(topic) {
            warn!(layout = %layout.id, topic = %topic, "topic not listed for layout");
        }
        if let Err(e) = request.validate(layout, &self.catalog) {
            warn!(layout = %layout.id, error = %e, "interpreting an incomplete or irregular draw");
        }

        let snapshot = self
            .load_snapshot(&ContentQuery {
                layout: layout.id.clone(),
                topic,
            })
            .await;

        let view = DrawView::new(&request.cards, &self.catalog, layout);
        let seeker_name = request
            .seeker_name()
            .unwrap_or(&self.config.default_seeker_name);
        let question = request
            .custom_question()
            .or_else(|| layout.question_for(topic))
            .map(str::to_string);

        let interpreter = PositionInterpreter::new(&self.catalog, &snapshot);
        let positions: Vec<_> = view
            .slots()
            .iter()
            .map(|slot| interpreter.read(slot, layout, topic))
            .collect();

        let relationships = self.relationships.analyze(&view);

        let pattern = PatternMatcher::match_draw(&view, snapshot.patterns()).map(|matched| {
            let vars = TemplateVars::for_pattern(&matched, seeker_name);
            let message = TemplateRenderer::fill(&matched.template, &vars);
            matched.into_outcome(message)
        });

        let synergies =
            SynergyAnalyzer::find_synergies(&view, snapshot.synergies(), self.config.max_synergies);

        let score = layout
            .score_weights
            .as_ref()
            .map(|weights| ScoreEngine::report(&view, weights));

        let advice = AdvicePlanner::new(&snapshot).plan(&view, topic);
        let keywords = extract_keywords(&view, topic);
        let energy = view.energy();
        debug!(
            pattern = pattern.as_ref().map_or("none", |p| p.id.as_str()),
            synergies = synergies.len(),
            relationships = relationships.len(),
            ?energy,
            "analysis complete"
        );

        let facts = ReadingFacts {
            seeker_name,
            topic,
            layout_name: &layout.name,
            question: question.as_deref(),
            energy,
            positions: &positions,
            relationships: &relationships,
            pattern: pattern.as_ref(),
            synergies: &synergies,
            advice: &advice,
            score: score.as_ref(),
            keywords: &keywords,
        };

        let narrative = NarrativeAssembler::new(&snapshot)
            .with_generator(self.generator.clone())
            .with_mode(self.config.generation_mode)
            .with_timeout(self.config.generation_timeout())
            .with_prompts(
                PromptBuilder::new().with_custom_question(request.custom_question.clone()),
            )
            .assemble(&facts)
            .await;

        info!(
            layout = %layout.id,
            topic = %topic,
            cards = positions.len(),
            "reading interpreted"
        );

        Ok(InterpretationResult {
            layout: layout.id.clone(),
            layout_name: layout.name.clone(),
            topic,
            seeker_name: seeker_name.to_string(),
            question,
            energy,
            positions,
            relationships,
            pattern,
            synergies,
            score,
            advice,
            keywords,
            narrative,
        })
    }

    /// Shareable summary using the configured limits.
    #[must_use]
    pub fn share_summary(&self, result: &InterpretationResult) -> ShareSummary {
        ShareSummary::from_result(result, &self.catalog, &self.config.share)
    }
}
