//! RegistryBuilder for constructing an immutable Registry.

use crate::{EntityDef, MutatorDef, Registry};
use seedling_core::EntityTypeId;
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during registry construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate entity type name: {0}")]
    DuplicateEntityName(String),
}

/// Builder for constructing an immutable Registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// Next entity type ID to allocate.
    next_entity_id: u32,

    /// Entity types being built.
    entities: HashMap<EntityTypeId, EntityDef>,
    /// Entity type name to ID mapping.
    entity_names: HashMap<String, EntityTypeId>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity type definition.
    pub fn add_entity(&mut self, name: impl Into<String>) -> EntityBuilder<'_> {
        let name = name.into();
        let id = EntityTypeId::new(self.next_entity_id);
        self.next_entity_id += 1;

        EntityBuilder {
            builder: self,
            id,
            name,
            mutators: HashMap::new(),
        }
    }

    /// Build the immutable Registry.
    pub fn build(self) -> Registry {
        Registry::new(self.entities, self.entity_names)
    }
}

/// Builder for an entity type definition.
pub struct EntityBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    id: EntityTypeId,
    name: String,
    mutators: HashMap<String, MutatorDef>,
}

impl<'a> EntityBuilder<'a> {
    /// Declare a mutator. Re-declaring a callable name replaces the
    /// earlier declaration.
    pub fn mutator(mut self, mutator: MutatorDef) -> Self {
        self.mutators.insert(mutator.name.clone(), mutator);
        self
    }

    /// Finish building this entity type.
    pub fn done(self) -> Result<EntityTypeId, RegistryError> {
        // Check for duplicate name
        if self.builder.entity_names.contains_key(&self.name) {
            return Err(RegistryError::DuplicateEntityName(self.name));
        }

        let entity_def = EntityDef {
            id: self.id,
            name: self.name.clone(),
            mutators: self.mutators,
        };

        self.builder.entity_names.insert(self.name, self.id);
        self.builder.entities.insert(self.id, entity_def);

        Ok(self.id)
    }
}
