//! Default mutator naming rules.

use seedling_core::{adder_name, setter_name};

/// Default mutator name in singular mode: `event` becomes `setEvent`.
pub fn singular_mutator(property: &str) -> String {
    setter_name(property)
}

/// Default mutator name in plural mode: `prices` becomes `addPrice`.
///
/// Depluralization strips exactly one trailing character, assuming an
/// English plural ending in a single character. Irregular plurals
/// (`categories` would become `addCategorie`) need a mutator override.
pub fn plural_mutator(property: &str) -> String {
    adder_name(depluralize(property))
}

fn depluralize(property: &str) -> &str {
    match property.char_indices().last() {
        Some((idx, _)) => &property[..idx],
        None => property,
    }
}
