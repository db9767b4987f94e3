use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;
use uuid::Uuid;
use chrono::{DateTime, Utc};

use crate::domain::order::CompletedOrder;
use crate::utils::IsTransient;

// ============================================================================
// Order Notifier - best-effort hook after a completion
// ============================================================================

/// What an order-recording service is told about a completed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionNotice {
    pub order_id: Uuid,
    /// `Name(qty)` entries joined by `_`
    pub summary: String,
    pub total: Decimal,
    pub completed_at: DateTime<Utc>,
}

impl From<&CompletedOrder> for CompletionNotice {
    fn from(order: &CompletedOrder) -> Self {
        Self {
            order_id: order.id,
            summary: order.summary(),
            total: order.total,
            completed_at: order.completed_at,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Order recording service unavailable: {0}")]
    Unavailable(String),

    #[error("Order recording service rejected the notice: {0}")]
    Rejected(String),

    #[error("Failed to encode notice: {0}")]
    Encode(#[from] serde_json::Error),
}

impl IsTransient for NotifyError {
    fn is_transient(&self) -> bool {
        matches!(self, NotifyError::Unavailable(_))
    }
}

/// Receives one notice per completed order.
///
/// Implementations must not assume the call is awaited by the till; the
/// ledger has already moved on by the time `notify` runs.
#[async_trait]
pub trait OrderNotifier: Send + Sync {
    async fn notify(&self, notice: &CompletionNotice) -> Result<(), NotifyError>;

    fn name(&self) -> &'static str;
}

/// Drops every notice
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

#[async_trait]
impl OrderNotifier for NoopNotifier {
    async fn notify(&self, _notice: &CompletionNotice) -> Result<(), NotifyError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}

/// Writes each notice as a JSON log line
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl OrderNotifier for LogNotifier {
    async fn notify(&self, notice: &CompletionNotice) -> Result<(), NotifyError> {
        let payload = serde_json::to_string(notice)?;

        tracing::info!(
            order_id = %notice.order_id,
            payload = %payload,
            "Order recorded"
        );

        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
