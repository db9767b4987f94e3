// ============================================================================
// Order Domain - The Till's Order Ledger
// ============================================================================
//
// This module contains ALL order-specific code:
// - Value objects (OrderLine, Payment, CompletedOrder, OrderState)
// - Events (ItemAdded, LineRemoved, OrderCompleted, etc.)
// - Commands (AddItem, RemoveItem, RecordPayment, CompleteOrder)
// - Errors (LedgerError enum)
// - Aggregate (OrderLedger with the business rules)
// - Command Handler (LedgerSession)
//
// ============================================================================

pub mod value_objects;
pub mod events;
pub mod commands;
pub mod errors;
pub mod aggregate;
pub mod command_handler;

// Re-export for convenience
pub use value_objects::*;
pub use events::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
pub use command_handler::*;
