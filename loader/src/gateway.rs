//! Persistence gateway contract.
//!
//! The two-phase write pattern: `stage` marks an entity for write,
//! `commit` durably writes everything staged since the last commit. The
//! gateway's own transaction discipline governs durability; the loader
//! performs no retries and no rollback.

use seedling_core::Entity;
use thiserror::Error;

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failure surfaced by a persistence gateway.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct GatewayError {
    message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The persistence collaborator consumed by the loader.
pub trait PersistenceGateway {
    /// Mark an entity for write.
    fn stage(&mut self, entity: Entity) -> GatewayResult<()>;

    /// Durably write all entities staged since the last commit.
    fn commit(&mut self) -> GatewayResult<()>;
}

/// In-memory gateway.
///
/// Staged entities move to the committed set on commit. Useful as a test
/// double and for dry-running fixture definitions.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    staged: Vec<Entity>,
    committed: Vec<Entity>,
    commits: usize,
}

impl MemoryGateway {
    /// Create an empty gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entities staged but not yet committed.
    pub fn staged(&self) -> &[Entity] {
        &self.staged
    }

    /// Entities made durable by a commit.
    pub fn committed(&self) -> &[Entity] {
        &self.committed
    }

    /// Number of commits performed.
    pub fn commit_count(&self) -> usize {
        self.commits
    }
}

impl PersistenceGateway for MemoryGateway {
    fn stage(&mut self, entity: Entity) -> GatewayResult<()> {
        self.staged.push(entity);
        Ok(())
    }

    fn commit(&mut self) -> GatewayResult<()> {
        self.committed.append(&mut self.staged);
        self.commits += 1;
        Ok(())
    }
}
