//! Schema definition types.

use seedling_core::{adder_name, setter_name, EntityTypeId};
use std::collections::HashMap;

/// How a mutator applies its argument to the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutatorKind {
    /// Replace the target property with the argument.
    Assign,
    /// Push the argument onto the target list property.
    Append,
}

/// Mutator declaration within an entity type.
///
/// The `name` is the callable the dispatcher resolves against; `property`
/// is the storage key the invocation writes.
#[derive(Debug, Clone)]
pub struct MutatorDef {
    /// Callable name, e.g. `setName` or `addPrice`.
    pub name: String,
    /// Property the mutator writes.
    pub property: String,
    /// Assign or append semantics.
    pub kind: MutatorKind,
}

impl MutatorDef {
    /// Declare a conventional setter: `set("name")` declares `setName`
    /// assigning property `name`.
    pub fn set(property: impl Into<String>) -> Self {
        let property = property.into();
        Self {
            name: setter_name(&property),
            property,
            kind: MutatorKind::Assign,
        }
    }

    /// Declare a conventional adder: `add("price")` declares `addPrice`
    /// appending to property `price`.
    pub fn add(property: impl Into<String>) -> Self {
        let property = property.into();
        Self {
            name: adder_name(&property),
            property,
            kind: MutatorKind::Append,
        }
    }

    /// Declare a mutator with an irregular callable name.
    pub fn custom(
        name: impl Into<String>,
        property: impl Into<String>,
        kind: MutatorKind,
    ) -> Self {
        Self {
            name: name.into(),
            property: property.into(),
            kind,
        }
    }
}

/// Entity type definition.
#[derive(Debug, Clone)]
pub struct EntityDef {
    /// Unique identifier.
    pub id: EntityTypeId,
    /// Entity type name, possibly module-qualified (`entities::Event`).
    pub name: String,
    /// Declared mutator interface, keyed by callable name.
    pub mutators: HashMap<String, MutatorDef>,
}

impl EntityDef {
    pub fn new(id: EntityTypeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            mutators: HashMap::new(),
        }
    }

    /// Get a mutator declaration by callable name.
    pub fn get_mutator(&self, name: &str) -> Option<&MutatorDef> {
        self.mutators.get(name)
    }

    /// Check if this entity type declares a mutator.
    pub fn has_mutator(&self, name: &str) -> bool {
        self.mutators.contains_key(name)
    }

    /// All declared mutator names.
    pub fn mutator_names(&self) -> impl Iterator<Item = &str> {
        self.mutators.keys().map(|s| s.as_str())
    }

    /// Short (unqualified) entity name: last `::` segment.
    pub fn short_name(&self) -> &str {
        self.name.rsplit("::").next().unwrap_or(&self.name)
    }
}
