//! Narrative assembler.
//!
//! ## Section Resolution
//!
//! Each section is first written locally:
//!
//! 1. The best template row for the section and the draw's energy
//! 2. Otherwise the procedural writer (never empty)
//!
//! When a `TextGenerator` is configured, remote text then replaces local
//! sections. In `PerSection` mode every section gets its own call, all
//! issued concurrently and each bounded by the generation timeout; a failed
//! call leaves only its own section untouched. In `WholeDocument` mode a
//! single call returns every section at once.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::core::GenerationMode;
use crate::store::{ContentSnapshot, SectionKind};
use crate::text::{procedural_section, ReadingFacts, TemplateRenderer, TemplateVars};

use super::generator::{parse_document, GenerationError, Prompt, PromptBuilder, TextGenerator};
use super::result::{Narrative, NarrativeSection, SectionOrigin};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// Assembles the narrative for one reading.
pub struct NarrativeAssembler<'a> {
    snapshot: &'a ContentSnapshot,
    generator: Option<Arc<dyn TextGenerator>>,
    mode: GenerationMode,
    timeout: Duration,
    prompts: PromptBuilder,
}

impl<'a> NarrativeAssembler<'a> {
    #[must_use]
    pub fn new(snapshot: &'a ContentSnapshot) -> Self {
        Self {
            snapshot,
            generator: None,
            mode: GenerationMode::default(),
            timeout: DEFAULT_TIMEOUT,
            prompts: PromptBuilder::new(),
        }
    }

    #[must_use]
    pub fn with_generator(mut self, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        self.generator = generator;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: GenerationMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_prompts(mut self, prompts: PromptBuilder) -> Self {
        self.prompts = prompts;
        self
    }

    /// Sections written without the remote generator.
    #[must_use]
    pub fn local_sections(&self, facts: &ReadingFacts<'_>) -> Vec<NarrativeSection> {
        let vars = facts.vars();
        SectionKind::ALL
            .iter()
            .map(|&kind| self.local_section(kind, facts, &vars))
            .collect()
    }

    fn local_section(
        &self,
        kind: SectionKind,
        facts: &ReadingFacts<'_>,
        vars: &TemplateVars,
    ) -> NarrativeSection {
        if let Some(row) = self.snapshot.template_for(kind, facts.energy) {
            let text = TemplateRenderer::fill(&row.text, vars);
            if !text.is_empty() {
                debug!(section = kind.key(), template = %row.id, "section from template");
                return section(kind, text, SectionOrigin::Template);
            }
            debug!(section = kind.key(), template = %row.id, "template rendered empty");
        }
        debug!(section = kind.key(), "section from procedural writer");
        section(kind, procedural_section(kind, facts), SectionOrigin::Procedural)
    }

    /// Assemble all sections in order.
    pub async fn assemble(&self, facts: &ReadingFacts<'_>) -> Narrative {
        let mut sections = self.local_sections(facts);

        if let Some(generator) = &self.generator {
            let vars = facts.vars();
            match self.mode {
                GenerationMode::PerSection => {
                    self.remote_per_section(generator.as_ref(), facts, &vars, &mut sections)
                        .await;
                }
                GenerationMode::WholeDocument => {
                    self.remote_whole_document(generator.as_ref(), facts, &vars, &mut sections)
                        .await;
                }
            }
        }

        Narrative { sections }
    }

    async fn remote_per_section(
        &self,
        generator: &dyn TextGenerator,
        facts: &ReadingFacts<'_>,
        vars: &TemplateVars,
        sections: &mut [NarrativeSection],
    ) {
        let prompts: Vec<Prompt> = sections
            .iter()
            .map(|s| self.prompts.section(s.kind, facts, &s.text))
            .collect();

        let replies = join_all(prompts.iter().map(|p| self.call(generator, p))).await;

        // Each reply writes only its own slot.
        for (slot, reply) in sections.iter_mut().zip(replies) {
            match reply {
                Ok(text) => {
                    let text = TemplateRenderer::fill(&text, vars);
                    if text.is_empty() {
                        warn!(
                            generator = generator.name(),
                            section = slot.kind.key(),
                            "remote section empty after rendering, keeping local text"
                        );
                        continue;
                    }
                    debug!(section = slot.kind.key(), "section from remote generator");
                    slot.text = text;
                    slot.origin = SectionOrigin::Remote;
                }
                Err(e) => {
                    warn!(
                        generator = generator.name(),
                        section = slot.kind.key(),
                        error = %e,
                        "remote generation failed, keeping local text"
                    );
                }
            }
        }
    }

    async fn remote_whole_document(
        &self,
        generator: &dyn TextGenerator,
        facts: &ReadingFacts<'_>,
        vars: &TemplateVars,
        sections: &mut [NarrativeSection],
    ) {
        let prompt = self.prompts.whole_document(facts);
        let parsed = match self.call(generator, &prompt).await {
            Ok(reply) => parse_document(&reply),
            Err(e) => Err(e),
        };

        match parsed {
            Ok(mut remote) => {
                for slot in sections.iter_mut() {
                    let Some(text) = remote.remove(&slot.kind) else {
                        continue;
                    };
                    let text = TemplateRenderer::fill(&text, vars);
                    if !text.is_empty() {
                        debug!(section = slot.kind.key(), "section from remote document");
                        slot.text = text;
                        slot.origin = SectionOrigin::Remote;
                    }
                }
            }
            Err(e) => {
                warn!(
                    generator = generator.name(),
                    error = %e,
                    "remote document generation failed, keeping local sections"
                );
            }
        }
    }

    /// One bounded call. Blank replies count as failures.
    async fn call(
        &self,
        generator: &dyn TextGenerator,
        prompt: &Prompt,
    ) -> Result<String, GenerationError> {
        match tokio::time::timeout(self.timeout, generator.generate(prompt)).await {
            Ok(Ok(text)) if text.trim().is_empty() => {
                Err(GenerationError::Malformed("empty reply".into()))
            }
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(GenerationError::Timeout(self.timeout)),
        }
    }
}

fn section(kind: SectionKind, text: String, origin: SectionOrigin) -> NarrativeSection {
    NarrativeSection {
        kind,
        title: kind.title().to_string(),
        text,
        origin,
    }
}
