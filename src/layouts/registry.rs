//! Layout registry keyed by layout id.

use rustc_hash::FxHashMap;

use super::builtin;
use super::layout::{Layout, LayoutId};
use crate::core::{EngineError, Result};

/// Registry of spread layouts.
///
/// ## Example
///
/// ```
/// use tarot_engine::layouts::LayoutRegistry;
///
/// let layouts = LayoutRegistry::builtin();
/// assert_eq!(layouts.get("celtic_cross").unwrap().size(), 10);
/// assert!(layouts.get("tree_of_life").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct LayoutRegistry {
    layouts: FxHashMap<LayoutId, Layout>,
}

impl LayoutRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the five built-in spreads.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for layout in builtin::all() {
            registry.layouts.insert(layout.id.clone(), layout);
        }
        registry
    }

    /// Register a layout. Ids must be unique.
    pub fn register(&mut self, layout: Layout) -> Result<()> {
        if self.layouts.contains_key(&layout.id) {
            return Err(EngineError::DuplicateLayout(layout.id.0));
        }
        self.layouts.insert(layout.id.clone(), layout);
        Ok(())
    }

    /// Register every layout in a JSON array.
    pub fn extend_from_json(&mut self, json: &str) -> Result<()> {
        let layouts: Vec<Layout> =
            serde_json::from_str(json).map_err(|e| EngineError::json("layouts", e))?;
        for layout in layouts {
            self.register(layout)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Layout> {
        self.layouts.get(&LayoutId::new(id))
    }

    /// Look up a layout, failing with `UnknownLayout`.
    pub fn require(&self, id: &str) -> Result<&Layout> {
        self.get(id)
            .ok_or_else(|| EngineError::UnknownLayout(id.to_string()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Layout ids in sorted order.
    #[must_use]
    pub fn ids(&self) -> Vec<&LayoutId> {
        let mut ids: Vec<&LayoutId> = self.layouts.keys().collect();
        ids.sort();
        ids
    }

    /// Layouts in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Layout> {
        self.ids().into_iter().filter_map(move |id| self.layouts.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::{PositionDefinition, PositionRole};

    #[test]
    fn test_builtin() {
        let registry = LayoutRegistry::builtin();
        assert_eq!(registry.len(), 5);
        assert!(registry.get("one_card").is_some());
        assert!(registry.get("cup_of_relationship").is_some());
    }

    #[test]
    fn test_require_unknown() {
        let registry = LayoutRegistry::builtin();
        let err = registry.require("horseshoe").unwrap_err();
        assert!(matches!(err, EngineError::UnknownLayout(ref id) if id == "horseshoe"));
    }

    #[test]
    fn test_register_duplicate() {
        let mut registry = LayoutRegistry::builtin();
        let dup = Layout::new("one_card", "Again")
            .with_position(PositionDefinition::new("Advice", PositionRole::Advice));
        assert!(matches!(
            registry.register(dup),
            Err(EngineError::DuplicateLayout(_))
        ));
    }

    #[test]
    fn test_extend_from_json() {
        let mut registry = LayoutRegistry::new();
        registry
            .extend_from_json(
                r#"[{ "id": "two_card", "name": "Two Card",
                      "positions": [
                        { "name": "Situation", "role": "present" },
                        { "name": "Outcome", "role": "outcome" }
                      ] }]"#,
            )
            .unwrap();

        let layout = registry.get("two_card").unwrap();
        assert_eq!(layout.size(), 2);
        assert!(layout.score_weights.is_none());
    }

    #[test]
    fn test_iter_sorted() {
        let registry = LayoutRegistry::builtin();
        let ids: Vec<&str> = registry.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "celtic_cross",
                "cup_of_relationship",
                "one_card",
                "seven_star",
                "three_card_timeline"
            ]
        );
    }
}
