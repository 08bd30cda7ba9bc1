//! Identifiers accepted by the analysis collaborator.

/// Tube shape descriptors.
///
/// Renderers test these by substring (`"Circular"`), so every circular
/// variant must contain that word.
pub const SHAPES: [&str; 3] = ["Rectangular", "Circular Inline", "Circular Staggered"];

/// Tube materials.
pub const MATERIALS: [&str; 5] = ["Stainless Steel", "Aluminum", "Copper", "Brass", "Titanium"];

/// Working fluids.
pub const FLUIDS: [&str; 5] = ["Air", "Water", "Diesel", "Oil", "Gasoline"];

/// Returns `true` if `name` is one of `known`, compared exactly.
#[must_use]
pub fn contains(known: &[&str], name: &str) -> bool {
    known.iter().any(|candidate| *candidate == name)
}
