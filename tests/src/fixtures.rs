//! Shared registries and gateways for integration scenarios.

use seedling_core::Entity;
use seedling_loader::{GatewayError, GatewayResult, MemoryGateway, PersistenceGateway};
use seedling_registry::{MutatorDef, MutatorKind, Registry, RegistryBuilder};

/// A registry mirroring the classic test-entity fixture: scalar name,
/// plural roles/prices, an irregular currency adder, a custom friend
/// setter, and list-valued pets.
pub fn test_entity_registry() -> Registry {
    let mut builder = RegistryBuilder::new();
    builder
        .add_entity("entities::TestEntity")
        .mutator(MutatorDef::set("name"))
        .mutator(MutatorDef::set("pets"))
        .mutator(MutatorDef::add("role"))
        .mutator(MutatorDef::add("price"))
        .mutator(MutatorDef::add("currency"))
        .mutator(MutatorDef::custom(
            "customNewFriendSetter",
            "friends",
            MutatorKind::Append,
        ))
        .done()
        .unwrap();
    builder.build()
}

/// A two-type catalog registry for cross-entity reference scenarios.
pub fn catalog_registry() -> Registry {
    let mut builder = RegistryBuilder::new();
    builder
        .add_entity("entities::Product")
        .mutator(MutatorDef::set("name"))
        .mutator(MutatorDef::add("price"))
        .mutator(MutatorDef::add("tag"))
        .done()
        .unwrap();
    builder
        .add_entity("entities::Order")
        .mutator(MutatorDef::set("number"))
        .mutator(MutatorDef::set("product"))
        .done()
        .unwrap();
    builder.build()
}

/// Gateway that fails on demand, for abort-semantics scenarios.
///
/// Wraps a [`MemoryGateway`] so scenarios can still inspect what was
/// staged before the injected failure.
#[derive(Debug, Default)]
pub struct FailingGateway {
    inner: MemoryGateway,
    fail_stage_at: Option<usize>,
    fail_commit: bool,
    stages: usize,
}

impl FailingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the nth stage call (zero-based).
    pub fn fail_stage_at(mut self, index: usize) -> Self {
        self.fail_stage_at = Some(index);
        self
    }

    /// Fail every commit call.
    pub fn fail_commit(mut self) -> Self {
        self.fail_commit = true;
        self
    }

    pub fn staged(&self) -> &[Entity] {
        self.inner.staged()
    }

    pub fn committed(&self) -> &[Entity] {
        self.inner.committed()
    }

    pub fn commit_count(&self) -> usize {
        self.inner.commit_count()
    }
}

impl PersistenceGateway for FailingGateway {
    fn stage(&mut self, entity: Entity) -> GatewayResult<()> {
        let index = self.stages;
        self.stages += 1;
        if self.fail_stage_at == Some(index) {
            return Err(GatewayError::new(format!("stage {} refused", index)));
        }
        self.inner.stage(entity)
    }

    fn commit(&mut self) -> GatewayResult<()> {
        if self.fail_commit {
            return Err(GatewayError::new("commit refused"));
        }
        self.inner.commit()
    }
}
