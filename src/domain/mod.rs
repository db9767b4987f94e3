// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// - catalog: the read-only menu
// - order:   the ledger for the order being rung up, and its session
//
// ============================================================================

pub mod catalog;
pub mod order;
