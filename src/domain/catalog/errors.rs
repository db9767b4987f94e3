use rust_decimal::Decimal;

use super::value_objects::ItemId;

// ============================================================================
// Catalog Validation Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog has no items")]
    Empty,

    #[error("Catalog item id must be positive, got {0}")]
    InvalidId(ItemId),

    #[error("Duplicate catalog item id: {0}")]
    DuplicateId(ItemId),

    #[error("Catalog item {0} has an empty name")]
    EmptyName(ItemId),

    #[error("Catalog item {id} has a negative price: {price}")]
    NegativePrice { id: ItemId, price: Decimal },

    #[error("Invalid catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}
