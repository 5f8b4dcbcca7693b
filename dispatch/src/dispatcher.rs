//! Property dispatcher - resolves and invokes mutators for one item spec.
//!
//! Dispatch is two-phased: every property of the item is resolved against
//! the entity type's declared mutator interface first, then the resolved
//! mutators are invoked. A resolution failure therefore leaves the entity
//! untouched.

use seedling_core::{Entity, PropertyMap, Value, REFERENCE_KEY};
use seedling_registry::{EntityDef, MutatorDef, MutatorKind};
use std::collections::HashMap;

use crate::convention::{plural_mutator, singular_mutator};
use crate::error::{DispatchError, DispatchResult};
use crate::overrides::DispatchOverrides;

/// Dispatches item-spec properties to entity mutators.
///
/// One dispatcher serves one load call: resolved names are memoized per
/// (property, arity) across items of the same entity type.
pub struct Dispatcher<'a> {
    entity_def: &'a EntityDef,
    overrides: &'a DispatchOverrides,
    /// Memoized name derivations, keyed by (property, plural-mode).
    resolved: HashMap<(String, bool), String>,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher for one entity type and one override set.
    pub fn new(entity_def: &'a EntityDef, overrides: &'a DispatchOverrides) -> Self {
        Self {
            entity_def,
            overrides,
            resolved: HashMap::new(),
        }
    }

    /// Dispatch every non-reserved property of `item` onto `entity`.
    ///
    /// Plural mode (list value, no singular override) invokes the mutator
    /// once per element in list order; singular mode invokes it once with
    /// the whole value.
    pub fn apply(&mut self, entity: &mut Entity, item: &PropertyMap) -> DispatchResult<()> {
        // Sorted key order keeps error selection and invocation deterministic.
        let mut properties: Vec<&String> = item
            .keys()
            .filter(|key| key.as_str() != REFERENCE_KEY)
            .collect();
        properties.sort();

        // Resolve phase: fail fast before any mutation is applied.
        let mut plan: Vec<(&'a MutatorDef, Vec<Value>)> = Vec::with_capacity(properties.len());
        for property in properties {
            let value = &item[property];
            let plural = value.is_list() && !self.overrides.is_singular(property);
            let mutator = self.resolve(property, plural)?;

            let arguments = match value.as_list() {
                Some(elements) if plural => elements.to_vec(),
                _ => vec![value.clone()],
            };
            plan.push((mutator, arguments));
        }

        // Invoke phase.
        for (mutator, arguments) in plan {
            for argument in arguments {
                match mutator.kind {
                    MutatorKind::Assign => entity.set(&mutator.property, argument),
                    MutatorKind::Append => entity.append(&mutator.property, argument),
                }
            }
        }

        Ok(())
    }

    /// Resolve a property to a declared mutator.
    ///
    /// Precedence: explicit override, then the convention for the arity
    /// mode. The derived name must exist in the entity type's declared
    /// mutator set.
    fn resolve(&mut self, property: &str, plural: bool) -> DispatchResult<&'a MutatorDef> {
        let cache_key = (property.to_string(), plural);
        let name = match self.resolved.get(&cache_key) {
            Some(name) => name.clone(),
            None => {
                let name = match self.overrides.mutator_for(property) {
                    Some(explicit) => explicit.to_string(),
                    None if plural => plural_mutator(property),
                    None => singular_mutator(property),
                };
                self.resolved.insert(cache_key, name.clone());
                name
            }
        };

        let entity_def = self.entity_def;
        entity_def
            .get_mutator(&name)
            .ok_or_else(|| DispatchError::missing_mutator(&entity_def.name, &name))
    }
}
