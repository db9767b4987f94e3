// ============================================================================
// Catalog Domain - Static Menu of Sellable Items
// ============================================================================
//
// - Value objects (ItemId, CatalogItem)
// - Errors (CatalogError)
// - Catalog (validated, read-only item list)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
#[allow(clippy::module_inception)]
pub mod catalog;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use catalog::*;
