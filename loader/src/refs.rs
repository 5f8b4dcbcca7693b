//! Reference registry: named handles to created entities.
//!
//! Labels are opaque strings composed of the loader's reference prefix
//! and the item's reference name. Later loads use them to link entities
//! together. Last registration for a label wins.

use seedling_core::Entity;
use std::collections::HashMap;

/// Process-local mapping from reference label to entity.
#[derive(Debug, Clone, Default)]
pub struct ReferenceRegistry {
    entries: HashMap<String, Entity>,
}

impl ReferenceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity under a label, replacing any earlier entry.
    pub fn register(&mut self, label: impl Into<String>, entity: Entity) {
        self.entries.insert(label.into(), entity);
    }

    /// Get the entity registered under a label.
    pub fn get(&self, label: &str) -> Option<&Entity> {
        self.entries.get(label)
    }

    /// Check whether a label is registered.
    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    /// Number of registered labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no label is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered labels.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }
}
