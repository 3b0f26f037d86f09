//! Bounded retry with exponential backoff for the network stages.
//!
//! The token exchange and the event fetch are the only suspension points
//! in a query. Both get a bounded retry budget; errors that are not
//! transient (bad credentials, malformed responses) abort immediately.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{StatusError, StatusResult};

/// Retry budget for a single network call.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one.
    pub max_attempts: u32,
    /// Backoff before the second attempt.
    pub initial_backoff: Duration,
    /// Maximum backoff between attempts.
    pub max_backoff: Duration,
    /// Backoff multiplier per consecutive failure.
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(10),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries (single attempt).
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Default::default()
        }
    }

    /// Builder: set the attempt budget.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Builder: set backoff parameters.
    #[must_use]
    pub fn with_backoff(mut self, initial: Duration, max: Duration, multiplier: f64) -> Self {
        self.initial_backoff = initial;
        self.max_backoff = max;
        self.backoff_multiplier = multiplier;
        self
    }

    /// Calculates the backoff delay after the given number of consecutive
    /// failures.
    pub fn backoff_delay(&self, consecutive_failures: u32) -> Duration {
        if consecutive_failures == 0 {
            return Duration::ZERO;
        }

        let base = self.initial_backoff.as_secs_f64();
        let multiplier = self
            .backoff_multiplier
            .powi(consecutive_failures as i32 - 1);
        let delay = base * multiplier;
        let max = self.max_backoff.as_secs_f64();

        Duration::from_secs_f64(delay.min(max))
    }
}

/// Runs `op` under the given policy.
///
/// Retries only errors marked retryable; any other error, or exhausting
/// the attempt budget, propagates the last error unchanged.
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> StatusResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = StatusResult<T>>,
{
    let mut failures = 0u32;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && failures + 1 < policy.max_attempts => {
                failures += 1;
                let delay = policy.backoff_delay(failures);
                warn!(
                    attempt = failures,
                    max_attempts = policy.max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "transient failure, backing off before retry"
                );
                tokio::time::sleep(delay).await;
            }
            Err(err) => {
                debug!(error = %err, "giving up");
                return Err(err);
            }
        }
    }
}
