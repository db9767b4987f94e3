use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::metrics::Metrics;
use crate::utils::{retry_on_transient, RetryConfig, RetryResult};
use super::notifier::{CompletionNotice, OrderNotifier};

// ============================================================================
// Fire-and-forget notice delivery
// ============================================================================

/// Deliver a notice, retrying transient failures. Never returns an error:
/// the outcome is logged and counted, and `true` means it was delivered.
pub async fn deliver(
    notifier: Arc<dyn OrderNotifier>,
    notice: CompletionNotice,
    retry: RetryConfig,
    metrics: Option<Arc<Metrics>>,
) -> bool {
    let result = retry_on_transient(&retry, |_attempt| notifier.notify(&notice)).await;
    let attempts = result.attempts();

    let outcome = match result {
        RetryResult::Success { .. } => {
            tracing::debug!(
                notifier = notifier.name(),
                order_id = %notice.order_id,
                attempts,
                "Completion notice delivered"
            );
            "delivered"
        }
        RetryResult::Exhausted { error, .. } | RetryResult::PermanentFailure { error, .. } => {
            tracing::warn!(
                notifier = notifier.name(),
                order_id = %notice.order_id,
                attempts,
                error = %error,
                "Completion notice dropped"
            );
            "failed"
        }
    };

    if let Some(metrics) = &metrics {
        metrics.record_notification(outcome, attempts);
    }

    outcome == "delivered"
}

/// Spawn delivery on the current tokio runtime. Outside a runtime the
/// notice is skipped and `None` is returned.
pub fn spawn_notification(
    notifier: Arc<dyn OrderNotifier>,
    notice: CompletionNotice,
    retry: RetryConfig,
    metrics: Option<Arc<Metrics>>,
) -> Option<JoinHandle<bool>> {
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => Some(handle.spawn(deliver(notifier, notice, retry, metrics))),
        Err(_) => {
            tracing::debug!(
                order_id = %notice.order_id,
                "No async runtime, completion notice skipped"
            );
            if let Some(metrics) = &metrics {
                metrics.record_notification("skipped", 0);
            }
            None
        }
    }
}
