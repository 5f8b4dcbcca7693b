//! Seedling Dispatch
//!
//! Convention-based property-to-mutator dispatch.
//!
//! Responsibilities:
//! - Derive default mutator names (`set`/`add` + capitalized property)
//! - Apply explicit mutator-name and singular-mode overrides
//! - Resolve every property against the entity type's declared mutator
//!   interface before any mutation is applied
//! - Invoke resolved mutators, once per element in plural mode
//!
//! # Module Structure
//!
//! - `convention` - default naming rules, including the depluralization heuristic
//! - `overrides` - DispatchOverrides (explicit mutator names, singular set)
//! - `dispatcher` - the two-phase resolve-then-invoke Dispatcher
//! - `error` - error types for dispatch failures

mod convention;
mod dispatcher;
mod error;
mod overrides;

pub use convention::{plural_mutator, singular_mutator};
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, DispatchResult};
pub use overrides::DispatchOverrides;
