//! Loader error types.

use seedling_dispatch::DispatchError;
use thiserror::Error;

use crate::gateway::GatewayError;

/// Result type for loader operations.
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Errors that can occur during a load call.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// An explicitly configured entity type is not registered.
    #[error("Entity type {name:?} is not registered. Maybe you misspelled it in your with_entity_type() call")]
    ExplicitEntityType { name: String },

    /// A convention-guessed entity type is not registered.
    #[error("Entity type {name:?} guessed from loader {loader:?} is not registered. You might have to set the entity type with with_entity_type()")]
    GuessedEntityType { name: String, loader: String },

    /// A user-supplied naming-convention pattern failed to compile.
    #[error("Invalid naming pattern {pattern:?}: {message}")]
    InvalidNamingPattern { pattern: String, message: String },

    /// The reserved reference key carried a non-string value.
    #[error("Reference name on entity type {entity_type} must be a string, got {actual}")]
    InvalidReferenceName { entity_type: String, actual: String },

    /// Property dispatch failure.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// Failure surfaced unchanged from the persistence gateway.
    #[error("persistence gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

impl LoaderError {
    pub fn explicit_entity_type(name: impl Into<String>) -> Self {
        Self::ExplicitEntityType { name: name.into() }
    }

    pub fn guessed_entity_type(name: impl Into<String>, loader: impl Into<String>) -> Self {
        Self::GuessedEntityType {
            name: name.into(),
            loader: loader.into(),
        }
    }

    pub fn invalid_naming_pattern(
        pattern: impl Into<String>,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::InvalidNamingPattern {
            pattern: pattern.into(),
            message: message.to_string(),
        }
    }

    pub fn invalid_reference_name(
        entity_type: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidReferenceName {
            entity_type: entity_type.into(),
            actual: actual.into(),
        }
    }
}
