//! Dispatch overrides: explicit mutator names and singular-mode properties.

use std::collections::{HashMap, HashSet};

/// Declared exceptions to the naming convention.
///
/// A mutator entry replaces the convention-derived name for a property
/// regardless of arity. A singular entry forces one mutator call with the
/// whole value even when the value is a list.
#[derive(Debug, Clone, Default)]
pub struct DispatchOverrides {
    mutators: HashMap<String, String>,
    singular: HashSet<String>,
}

impl DispatchOverrides {
    /// Create an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a property to an explicit mutator name.
    pub fn mutator(mut self, property: impl Into<String>, name: impl Into<String>) -> Self {
        self.mutators.insert(property.into(), name.into());
        self
    }

    /// Force singular mode for a property.
    pub fn singular(mut self, property: impl Into<String>) -> Self {
        self.singular.insert(property.into());
        self
    }

    /// Explicit mutator name for a property, if any.
    pub fn mutator_for(&self, property: &str) -> Option<&str> {
        self.mutators.get(property).map(|s| s.as_str())
    }

    /// Whether a property is forced into singular mode.
    pub fn is_singular(&self, property: &str) -> bool {
        self.singular.contains(property)
    }

    /// Returns true if no override is declared.
    pub fn is_empty(&self) -> bool {
        self.mutators.is_empty() && self.singular.is_empty()
    }
}
