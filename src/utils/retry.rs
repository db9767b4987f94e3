use std::time::Duration;
use tokio::time::sleep;

// ============================================================================
// Exponential Backoff Retry Strategy
// ============================================================================
//
// Retries an async operation while its error is transient. Permanent errors
// stop immediately; transient ones stop once `max_attempts` is reached.
//
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first call
    pub max_attempts: u32,
    /// Delay before the second attempt
    pub initial_delay: Duration,
    /// Upper bound for any single delay
    pub max_delay: Duration,
    /// Multiplier for exponential backoff
    pub multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(5),
            multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// Delay to wait after `current`, capped at `max_delay`
    pub fn next_delay(&self, current: Duration) -> Duration {
        let scaled = Duration::from_millis(((current.as_millis() as f64) * self.multiplier) as u64);
        scaled.min(self.max_delay)
    }
}

/// Result of a retried operation, with the number of calls made
#[derive(Debug)]
pub enum RetryResult<T, E> {
    /// Operation succeeded
    Success { value: T, attempts: u32 },
    /// Every attempt failed with a transient error
    Exhausted { error: E, attempts: u32 },
    /// A permanent error stopped the retries
    PermanentFailure { error: E, attempts: u32 },
}

impl<T, E> RetryResult<T, E> {
    pub fn attempts(&self) -> u32 {
        match self {
            RetryResult::Success { attempts, .. }
            | RetryResult::Exhausted { attempts, .. }
            | RetryResult::PermanentFailure { attempts, .. } => *attempts,
        }
    }
}

/// Check if an error is transient (should retry) or permanent (should not retry)
pub trait IsTransient {
    fn is_transient(&self) -> bool;
}

/// Retry with transient error checking
pub async fn retry_on_transient<F, Fut, T, E>(
    config: &RetryConfig,
    mut operation: F,
) -> RetryResult<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: std::fmt::Display + IsTransient,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 0;
    let mut delay = config.initial_delay;

    loop {
        attempt += 1;

        match operation(attempt).await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::info!(attempt, "Operation succeeded after retry");
                }
                return RetryResult::Success { value, attempts: attempt };
            }
            Err(error) if !error.is_transient() => {
                tracing::error!(
                    attempt,
                    error = %error,
                    "Permanent failure detected, not retrying"
                );
                return RetryResult::PermanentFailure { error, attempts: attempt };
            }
            Err(error) if attempt >= max_attempts => {
                tracing::error!(
                    attempt,
                    error = %error,
                    "Operation failed after all retries"
                );
                return RetryResult::Exhausted { error, attempts: attempt };
            }
            Err(error) => {
                tracing::warn!(
                    attempt,
                    error = %error,
                    delay_ms = delay.as_millis() as u64,
                    "Transient failure, retrying after delay"
                );

                sleep(delay).await;
                delay = config.next_delay(delay);
            }
        }
    }
}
