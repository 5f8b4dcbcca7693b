//! Mutator-name derivation helpers.
//!
//! Shared vocabulary for the set/add naming convention: the registry uses
//! these to derive declared mutator names, the dispatcher to derive the
//! names it attempts to resolve.

/// Derive a setter name: `name` becomes `setName`.
pub fn setter_name(property: &str) -> String {
    format!("set{}", capitalize(property))
}

/// Derive an adder name: `price` becomes `addPrice`.
pub fn adder_name(stem: &str) -> String {
    format!("add{}", capitalize(stem))
}

/// Capitalize the first character of a name.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
