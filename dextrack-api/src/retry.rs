//! Bounded retry with linear backoff around a [`Fetcher`].

use std::time::Duration;

use serde_json::Value;

use dextrack_lib::ApiSettings;

use crate::error::FetchError;
use crate::fetch::Fetcher;

/// How many times to try a request and how long to wait between tries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Zero is treated as one.
    pub max_attempts: u32,
    /// Per-attempt timeout
    pub timeout: Duration,
    /// The wait after attempt `i` (0-indexed) is `backoff_base * (i + 1)`
    pub backoff_base: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            timeout: Duration::from_millis(10_000),
            backoff_base: Duration::from_millis(1_000),
        }
    }
}

impl RetryPolicy {
    pub fn from_settings(api: &ApiSettings) -> Self {
        Self {
            max_attempts: api.max_attempts,
            timeout: Duration::from_millis(api.timeout_ms),
            backoff_base: Duration::from_millis(api.backoff_ms),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Delay before the attempt following attempt `attempt` (0-indexed).
    /// Saturates at `Duration::MAX`.
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.backoff_base
            .checked_mul(attempt.saturating_add(1))
            .unwrap_or(Duration::MAX)
    }

    fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Sum of all waits when every attempt fails.
    pub fn total_backoff(&self) -> Duration {
        (0..self.attempts() - 1).fold(Duration::ZERO, |total, i| {
            total.saturating_add(self.backoff_for(i))
        })
    }
}

/// Fetch `url`, retrying every kind of failure until the attempt budget is
/// spent. Attempts run strictly one after another.
///
/// Returns the first success, or the error from the final attempt.
pub async fn fetch_with_retry<F: Fetcher + ?Sized>(
    fetcher: &F,
    url: &str,
    policy: &RetryPolicy,
) -> Result<Value, FetchError> {
    let attempts = policy.attempts();
    let mut attempt = 0;
    loop {
        match fetcher.fetch(url, policy.timeout).await {
            Ok(value) => return Ok(value),
            Err(e) if attempt + 1 >= attempts => {
                log::debug!("Giving up on {url} after {attempts} attempt(s): {e}");
                return Err(e);
            }
            Err(e) => {
                let delay = policy.backoff_for(attempt);
                log::warn!(
                    "Attempt {}/{} for {url} failed: {e}; retrying in {}ms",
                    attempt + 1,
                    attempts,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/retry_tests.rs"]
mod tests;
