// ============================================================================
// Notify Module
// ============================================================================
//
// Optional outbound hook run after an order is completed. Delivery happens
// on a spawned task; its outcome never reaches the ledger.
//
// ============================================================================

mod notifier;
mod dispatch;

pub use notifier::{CompletionNotice, LogNotifier, NoopNotifier, NotifyError, OrderNotifier};
pub use dispatch::{deliver, spawn_notification};
