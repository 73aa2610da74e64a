//! In-memory content store.
//!
//! Tables are held as `im` vectors behind an `RwLock`. Readers clone the
//! tables under the read lock (O(1)) and filter outside it, so a writer
//! replacing a table never blocks a reading for long and never exposes a
//! half-written table.

use std::sync::RwLock;

use async_trait::async_trait;
use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::snapshot::ContentSnapshot;
use super::tables::{ActionSuggestionRow, Pattern, PositionOverride, SynergyRule, TemplateRow};
use super::{ContentQuery, ContentStore, StoreError};
use crate::cards::{Arcana, CardId};
use crate::core::{EngineError, Result};

/// All content tables.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentTables {
    pub overrides: Vector<PositionOverride>,
    pub patterns: Vector<Pattern>,
    pub synergies: Vector<SynergyRule>,
    pub templates: Vector<TemplateRow>,
    pub actions: Vector<ActionSuggestionRow>,
}

impl ContentTables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables holding the standard synergy rules and nothing else.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            synergies: standard_synergies().into_iter().collect(),
            ..Self::default()
        }
    }

    /// Parse tables from JSON. Missing tables are empty.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::json("content tables", e))
    }

    /// Rows visible to one layout and topic.
    #[must_use]
    pub fn select(&self, query: &ContentQuery) -> ContentSnapshot {
        let layout = &query.layout;
        let topic = query.topic;
        let mut snapshot = ContentSnapshot::empty();

        for row in self
            .overrides
            .iter()
            .filter(|o| &o.layout == layout && o.topic == topic)
        {
            snapshot = snapshot.with_override(row.clone());
        }
        for row in self.patterns.iter().filter(|p| p.scope.matches(layout, topic)) {
            snapshot = snapshot.with_pattern(row.clone());
        }
        for row in self.synergies.iter().filter(|s| s.scope.matches(layout, topic)) {
            snapshot = snapshot.with_synergy(row.clone());
        }
        for row in self.templates.iter().filter(|t| t.scope.matches(layout, topic)) {
            snapshot = snapshot.with_template(row.clone());
        }
        for row in self.actions.iter().filter(|a| a.scope.matches(layout, topic)) {
            snapshot = snapshot.with_action(row.clone());
        }

        snapshot
    }
}

/// Content store backed by in-process tables.
///
/// ## Example
///
/// ```
/// use tarot_engine::store::{InMemoryStore, ContentStore, ContentQuery};
/// use tarot_engine::core::Topic;
///
/// # tokio_test_block(async {
/// let store = InMemoryStore::standard();
/// let snapshot = store
///     .load(&ContentQuery::new("celtic_cross", Topic::Love))
///     .await
///     .unwrap();
/// assert!(!snapshot.synergies().is_empty());
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<ContentTables>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new(tables: ContentTables) -> Self {
        Self {
            tables: RwLock::new(tables),
        }
    }

    /// Store preloaded with the standard synergy rules.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(ContentTables::standard())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(ContentTables::from_json(json)?))
    }

    /// Current tables (O(1) clone).
    pub fn tables(&self) -> std::result::Result<ContentTables, StoreError> {
        self.tables
            .read()
            .map(|t| t.clone())
            .map_err(|_| StoreError::Unavailable("content tables lock poisoned".into()))
    }

    /// Swap in new tables. Readings already running keep their snapshot.
    pub fn replace(&self, tables: ContentTables) -> std::result::Result<(), StoreError> {
        let mut guard = self
            .tables
            .write()
            .map_err(|_| StoreError::Unavailable("content tables lock poisoned".into()))?;
        *guard = tables;
        Ok(())
    }

    /// Apply an edit to a copy of the tables, then swap it in.
    pub fn update<F>(&self, edit: F) -> std::result::Result<(), StoreError>
    where
        F: FnOnce(&mut ContentTables),
    {
        let mut guard = self
            .tables
            .write()
            .map_err(|_| StoreError::Unavailable("content tables lock poisoned".into()))?;
        let mut next = guard.clone();
        edit(&mut next);
        *guard = next;
        Ok(())
    }
}

#[async_trait]
impl ContentStore for InMemoryStore {
    async fn load(&self, query: &ContentQuery) -> std::result::Result<ContentSnapshot, StoreError> {
        let tables = self.tables()?;
        let snapshot = tables.select(query);
        debug!(
            layout = %query.layout,
            topic = %query.topic,
            patterns = snapshot.patterns().len(),
            synergies = snapshot.synergies().len(),
            "content snapshot loaded"
        );
        Ok(snapshot)
    }
}

fn standard_synergies() -> Vec<SynergyRule> {
    use super::tables::SynergyKind::{ArcanaCount, MajorPair, OppositeOrientation, SameSuit};
    use crate::cards::Suit;

    let pair = |a: u32, b: u32| MajorPair {
        a: CardId::new(a),
        b: CardId::new(b),
    };

    vec![
        SynergyRule::new(
            "fool_world",
            pair(0, 21),
            9,
            "A full cycle: a bold beginning already carries the seed of completion.",
        ),
        SynergyRule::new(
            "death_judgement",
            pair(13, 20),
            9,
            "Complete transformation and a new start. Close the old chapter and step forward.",
        ),
        SynergyRule::new(
            "lovers_devil",
            pair(6, 15),
            8,
            "Two sides of a bond: pure love and attachment need to be balanced.",
        ),
        SynergyRule::new(
            "sun_moon",
            pair(19, 18),
            8,
            "Conscious and unconscious in harmony. Use intuition and logic together.",
        ),
        SynergyRule::new(
            "death_tower",
            pair(13, 16),
            8,
            "Sudden, sweeping change. What is worn out falls so something new can be built.",
        ),
        SynergyRule::new(
            "star_sun",
            pair(17, 19),
            8,
            "Hope meets joy. A wish is close to becoming real.",
        ),
        SynergyRule::new(
            "hermit_priestess",
            pair(9, 2),
            7,
            "Deep inner wisdom and spiritual insight come to the surface.",
        ),
        SynergyRule::new(
            "many_majors",
            ArcanaCount {
                arcana: Arcana::Major,
                min: 3,
            },
            6,
            "Several major arcana: larger forces are shaping this situation.",
        ),
        SynergyRule::new(
            "cups_pair",
            SameSuit { suit: Some(Suit::Cups) },
            5,
            "Cups reinforce each other: a time of deep, rich feeling. Trust your intuition.",
        ),
        SynergyRule::new(
            "wands_pair",
            SameSuit { suit: Some(Suit::Wands) },
            5,
            "Wands reinforce each other: passion and creative drive run high. Act on them.",
        ),
        SynergyRule::new(
            "swords_pair",
            SameSuit { suit: Some(Suit::Swords) },
            5,
            "Swords reinforce each other: clear thinking and decisive judgement are needed.",
        ),
        SynergyRule::new(
            "pentacles_pair",
            SameSuit { suit: Some(Suit::Pentacles) },
            5,
            "Pentacles reinforce each other: practical, material progress is within reach.",
        ),
        SynergyRule::new(
            "same_suit",
            SameSuit { suit: None },
            3,
            "Cards of one suit echo a shared theme.",
        ),
        SynergyRule::new(
            "opposite_orientation",
            OppositeOrientation,
            2,
            "Upright and reversed cards pull in different directions; look for the balance point.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Orientation, Topic};
    use crate::layouts::LayoutId;
    use crate::store::{Scope, SectionKind, SynergyKind};

    #[tokio::test]
    async fn test_load_filters_by_scope() {
        let mut tables = ContentTables::standard();
        tables.templates.push_back(
            TemplateRow::new("love_open", SectionKind::Opening, "For love")
                .with_scope(Scope::topic(Topic::Love)),
        );
        tables.templates.push_back(
            TemplateRow::new("celtic_open", SectionKind::Opening, "For celtic")
                .with_scope(Scope::layout("celtic_cross")),
        );
        let store = InMemoryStore::new(tables);

        let love_one = store
            .load(&ContentQuery::new("one_card", Topic::Love))
            .await
            .unwrap();
        let career_celtic = store
            .load(&ContentQuery::new("celtic_cross", Topic::Career))
            .await
            .unwrap();

        let energy = crate::store::Energy::Neutral;
        assert_eq!(
            love_one.template_for(SectionKind::Opening, energy).unwrap().id,
            "love_open"
        );
        assert_eq!(
            career_celtic.template_for(SectionKind::Opening, energy).unwrap().id,
            "celtic_open"
        );
    }

    #[tokio::test]
    async fn test_overrides_require_exact_layout_and_topic() {
        let mut tables = ContentTables::new();
        tables.overrides.push_back(PositionOverride {
            layout: LayoutId::new("one_card"),
            card_id: CardId::new(0),
            position: 0,
            orientation: Orientation::Upright,
            topic: Topic::Love,
            text: "Love leap".into(),
        });
        let store = InMemoryStore::new(tables);

        let general = store
            .load(&ContentQuery::new("one_card", Topic::General))
            .await
            .unwrap();
        assert!(general.is_empty());

        let love = store
            .load(&ContentQuery::new("one_card", Topic::Love))
            .await
            .unwrap();
        assert!(!love.is_empty());
    }

    #[tokio::test]
    async fn test_replace_does_not_touch_existing_snapshot() {
        let store = InMemoryStore::standard();
        let query = ContentQuery::new("three_card_timeline", Topic::General);
        let before = store.load(&query).await.unwrap();

        store.replace(ContentTables::new()).unwrap();
        let after = store.load(&query).await.unwrap();

        assert!(!before.synergies().is_empty());
        assert!(after.synergies().is_empty());
    }

    #[test]
    fn test_update_appends() {
        let store = InMemoryStore::default();
        store
            .update(|t| {
                t.synergies.push_back(SynergyRule::new(
                    "custom",
                    SynergyKind::OppositeOrientation,
                    1,
                    "custom",
                ))
            })
            .unwrap();
        assert_eq!(store.tables().unwrap().synergies.len(), 1);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "patterns": [{
                "id": "mirror", "name": "Mirror", "priority": 10,
                "condition": { "positions_differ": { "a": 6, "b": 7, "aspect": "orientation" } },
                "template": "{{name}}: your self-image and reputation diverge.",
                "scope": { "layout": "celtic_cross" }
            }]
        }"#;
        let tables = ContentTables::from_json(json).unwrap();
        assert_eq!(tables.patterns.len(), 1);
        assert!(tables.synergies.is_empty());
        assert!(ContentTables::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_standard_synergies_unique_ids() {
        let rules = standard_synergies();
        let mut ids: Vec<&str> = rules.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), rules.len());
    }
}
