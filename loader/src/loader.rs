//! The Autoloader - batch entity population with deferred commit.

use seedling_core::{Entity, PropertyMap, REFERENCE_KEY};
use seedling_dispatch::{DispatchOverrides, Dispatcher};
use seedling_registry::Registry;

use crate::error::{LoaderError, LoaderResult};
use crate::gateway::PersistenceGateway;
use crate::naming::NamingConvention;
use crate::refs::ReferenceRegistry;

/// Loads entities from an array of flat property maps.
///
/// The target entity type and reference prefix are guessed from the
/// loader's own name unless overridden; both are resolved once per load
/// call and held fixed for all of its items. One loader instance must not
/// run concurrent load calls.
pub struct Autoloader<'r> {
    registry: &'r Registry,
    naming: NamingConvention,
    loader_name: String,
    entity_type: Option<String>,
    reference_prefix: Option<String>,
    references: ReferenceRegistry,
}

impl<'r> Autoloader<'r> {
    /// Create a loader resolving entity types against `registry`.
    ///
    /// `loader_name` feeds the naming convention, e.g.
    /// `fixtures::LoadEventData` targets `entities::Event` with reference
    /// prefix `event_`.
    pub fn new(registry: &'r Registry, loader_name: impl Into<String>) -> Self {
        Self {
            registry,
            naming: NamingConvention::new(),
            loader_name: loader_name.into(),
            entity_type: None,
            reference_prefix: None,
            references: ReferenceRegistry::new(),
        }
    }

    /// Replace the naming convention.
    pub fn with_naming(mut self, naming: NamingConvention) -> Self {
        self.naming = naming;
        self
    }

    /// Set the entity type explicitly, bypassing the naming convention.
    pub fn with_entity_type(mut self, name: impl Into<String>) -> Self {
        self.entity_type = Some(name.into());
        self
    }

    /// Set the reference prefix explicitly.
    pub fn with_reference_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.reference_prefix = Some(prefix.into());
        self
    }

    /// Seed the loader with an existing reference registry, typically one
    /// extracted from an earlier loader with [`Autoloader::into_references`].
    pub fn with_references(mut self, references: ReferenceRegistry) -> Self {
        self.references = references;
        self
    }

    /// References registered so far.
    pub fn references(&self) -> &ReferenceRegistry {
        &self.references
    }

    /// Extract the reference registry for a later loader.
    pub fn into_references(self) -> ReferenceRegistry {
        self.references
    }

    /// The entity type this loader targets: the explicit override when
    /// set, else the convention-derived name.
    pub fn resolved_entity_type(&self) -> String {
        match &self.entity_type {
            Some(explicit) => explicit.clone(),
            None => self.naming.entity_type(&self.loader_name),
        }
    }

    /// The reference prefix: the explicit override when set, else the
    /// lower-cased short entity name with a trailing separator.
    pub fn resolved_reference_prefix(&self) -> String {
        match &self.reference_prefix {
            Some(explicit) => explicit.clone(),
            None => NamingConvention::reference_prefix(&self.resolved_entity_type()),
        }
    }

    /// Load a batch with no dispatch overrides.
    pub fn run_load<G: PersistenceGateway>(
        &mut self,
        items: &[PropertyMap],
        gateway: &mut G,
    ) -> LoaderResult<usize> {
        self.run_load_with(items, gateway, &DispatchOverrides::default())
    }

    /// Load a batch: one entity per item, staged in input order, committed
    /// once at the end when at least one entity was staged.
    ///
    /// Returns the number of entities staged. A dispatch or gateway
    /// failure aborts the remaining items; entities already staged remain
    /// staged and uncommitted.
    pub fn run_load_with<G: PersistenceGateway>(
        &mut self,
        items: &[PropertyMap],
        gateway: &mut G,
        overrides: &DispatchOverrides,
    ) -> LoaderResult<usize> {
        let type_name = self.resolved_entity_type();
        let entity_def = self.registry.get_entity_by_name(&type_name).ok_or_else(|| {
            if self.entity_type.is_some() {
                LoaderError::explicit_entity_type(&type_name)
            } else {
                LoaderError::guessed_entity_type(&type_name, &self.loader_name)
            }
        })?;
        let prefix = self.resolved_reference_prefix();

        let mut dispatcher = Dispatcher::new(entity_def, overrides);
        let mut staged = 0usize;

        for item in items {
            let mut entity = Entity::new(entity_def.id);
            dispatcher.apply(&mut entity, item)?;

            if let Some(reference) = item.get(REFERENCE_KEY) {
                let name = reference.as_str().ok_or_else(|| {
                    LoaderError::invalid_reference_name(&entity_def.name, reference.type_name())
                })?;
                self.references
                    .register(format!("{}{}", prefix, name), entity.clone());
            }

            gateway.stage(entity)?;
            staged += 1;
        }

        if staged > 0 {
            gateway.commit()?;
        }

        Ok(staged)
    }
}
