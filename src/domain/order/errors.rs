use crate::domain::catalog::ItemId;

// ============================================================================
// Ledger Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("No catalog item with id {0}")]
    UnknownItem(ItemId),

    #[error("Order was not completed")]
    NotCompleted,
}
