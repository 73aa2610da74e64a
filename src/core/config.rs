//! Engine configuration.
//!
//! Hosts configure the engine once at startup. Every field has a working
//! default, so `EngineConfig::default()` is a complete configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// How remote text generation is spliced into the narrative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// One call per narrative section; each success replaces its section.
    #[default]
    PerSection,
    /// One call for the whole narrative; local sections are kept on failure.
    WholeDocument,
}

/// Limits for the plain-text shareable summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Card names listed before "and N more".
    pub max_cards: usize,
    /// Narrative characters kept before the ellipsis.
    pub max_chars: usize,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            max_cards: 3,
            max_chars: 50,
        }
    }
}

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound for loading a content snapshot (milliseconds).
    pub store_timeout_ms: u64,

    /// Upper bound for each remote generation call (milliseconds).
    pub generation_timeout_ms: u64,

    /// Per-section or whole-document remote generation.
    pub generation_mode: GenerationMode,

    /// Synergy findings kept after ranking.
    pub max_synergies: usize,

    /// Probability that a drawn card lands reversed.
    pub reversal_chance: f64,

    /// Name used in templates when the request carries none.
    pub default_seeker_name: String,

    /// Shareable summary limits.
    pub share: ShareConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            store_timeout_ms: 2_000,
            generation_timeout_ms: 8_000,
            generation_mode: GenerationMode::PerSection,
            max_synergies: 3,
            reversal_chance: 0.5,
            default_seeker_name: "you".to_string(),
            share: ShareConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::json("engine config", e))
    }

    #[must_use]
    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }

    #[must_use]
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_millis(self.generation_timeout_ms)
    }

    /// Set the store timeout.
    #[must_use]
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// Set the per-call generation timeout.
    #[must_use]
    pub fn with_generation_timeout(mut self, timeout: Duration) -> Self {
        self.generation_timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// Set the generation mode.
    #[must_use]
    pub fn with_generation_mode(mut self, mode: GenerationMode) -> Self {
        self.generation_mode = mode;
        self
    }

    /// Set how many synergy findings are kept.
    #[must_use]
    pub fn with_max_synergies(mut self, max: usize) -> Self {
        self.max_synergies = max;
        self
    }

    /// Set the reversal probability used when drawing.
    #[must_use]
    pub fn with_reversal_chance(mut self, chance: f64) -> Self {
        self.reversal_chance = chance;
        self
    }

    /// Set the fallback seeker name.
    #[must_use]
    pub fn with_seeker_name(mut self, name: impl Into<String>) -> Self {
        self.default_seeker_name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_synergies, 3);
        assert_eq!(config.generation_mode, GenerationMode::PerSection);
        assert_eq!(config.share.max_cards, 3);
        assert_eq!(config.generation_timeout(), Duration::from_secs(8));
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::default()
            .with_generation_timeout(Duration::from_millis(250))
            .with_generation_mode(GenerationMode::WholeDocument)
            .with_max_synergies(5)
            .with_seeker_name("Mina");

        assert_eq!(config.generation_timeout_ms, 250);
        assert_eq!(config.generation_mode, GenerationMode::WholeDocument);
        assert_eq!(config.max_synergies, 5);
        assert_eq!(config.default_seeker_name, "Mina");
    }

    #[test]
    fn test_from_json_partial() {
        let config =
            EngineConfig::from_json(r#"{ "generation_mode": "whole_document", "share": { "max_chars": 80 } }"#)
                .unwrap();

        assert_eq!(config.generation_mode, GenerationMode::WholeDocument);
        assert_eq!(config.share.max_chars, 80);
        assert_eq!(config.share.max_cards, 3);
        assert_eq!(config.store_timeout_ms, 2_000);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(EngineConfig::from_json("{ not json").is_err());
    }
}
