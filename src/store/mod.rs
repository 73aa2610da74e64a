//! External content tables: overrides, patterns, synergies, templates,
//! action suggestions.
//!
//! ## Key Types
//!
//! - `ContentStore`: async source of per-reading snapshots
//! - `ContentSnapshot`: rows filtered to one layout and topic
//! - `InMemoryStore`: `ContentStore` over in-process tables
//!
//! An empty filtered result is a normal outcome. Every consumer of a
//! snapshot has a local fallback for a missing row.

pub mod condition;
pub mod memory;
pub mod snapshot;
pub mod tables;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use condition::{CountRange, PatternCondition, PositionAspect};
pub use memory::{ContentTables, InMemoryStore};
pub use snapshot::ContentSnapshot;
pub use tables::{
    ActionSuggestionRow, Energy, EnergyCondition, OverrideKey, Pattern, PositionOverride, Scope,
    SectionKind, SynergyKind, SynergyRule, TemplateRow, Timeframe,
};

use crate::core::Topic;
use crate::layouts::LayoutId;

/// What a reading asks the store for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContentQuery {
    pub layout: LayoutId,
    pub topic: Topic,
}

impl ContentQuery {
    #[must_use]
    pub fn new(layout: impl Into<String>, topic: Topic) -> Self {
        Self {
            layout: LayoutId::new(layout),
            topic,
        }
    }
}

/// Failures loading content. The engine logs these and continues with an
/// empty snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("content store unavailable: {0}")]
    Unavailable(String),

    #[error("content store returned malformed data: {0}")]
    Malformed(String),

    #[error("content store timed out after {0:?}")]
    Timeout(Duration),
}

/// Source of content snapshots.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Load every row visible to the query's layout and topic.
    async fn load(&self, query: &ContentQuery) -> Result<ContentSnapshot, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Timeout(Duration::from_millis(20));
        assert_eq!(err.to_string(), "content store timed out after 20ms");
    }

    #[test]
    fn test_query_new() {
        let query = ContentQuery::new("seven_star", Topic::Career);
        assert_eq!(query.layout.as_str(), "seven_star");
        assert_eq!(query.topic, Topic::Career);
    }
}
