//! Dispatch error types.

use thiserror::Error;

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Errors that can occur during property dispatch.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Unknown mutator: {mutator} on entity type {entity_type}")]
    MissingMutator {
        entity_type: String,
        mutator: String,
    },
}

impl DispatchError {
    pub fn missing_mutator(entity_type: impl Into<String>, mutator: impl Into<String>) -> Self {
        Self::MissingMutator {
            entity_type: entity_type.into(),
            mutator: mutator.into(),
        }
    }
}
