//! Seedling Registry
//!
//! The capability registry: which entity types exist and which mutators
//! each of them declares.
//!
//! Responsibilities:
//! - Declare entity types and their mutator interfaces
//! - Validate declarations at build time (duplicate names)
//! - Provide immutable runtime lookup for the dispatcher and loader
//!
//! # Module Structure
//!
//! - `types` - MutatorDef/EntityDef definition types
//! - `builder` - RegistryBuilder for constructing an immutable Registry
//! - `registry` - The Registry lookup surface

mod builder;
mod registry;
mod types;

pub use builder::{EntityBuilder, RegistryBuilder, RegistryError};
pub use registry::Registry;
pub use types::{EntityDef, MutatorDef, MutatorKind};
