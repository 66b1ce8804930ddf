//! Request-generation tokens for "latest request wins" result handling.
//!
//! Each user-triggered operation (a search, a navigation) takes a token
//! from a shared [`RequestGeneration`] before it starts. When the result
//! arrives it is applied only if no newer operation has begun since;
//! otherwise it is discarded instead of overwriting a fresher view.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter shared by all operations that update the same view.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    current: AtomicU64,
}

/// Identifies one operation. Only the most recently issued token is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new operation, making every earlier token stale.
    pub fn begin(&self) -> RequestToken {
        RequestToken(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current.load(Ordering::SeqCst) == token.0
    }

    /// Pass `value` through if `token` is still current, otherwise drop it.
    pub fn accept<T>(&self, token: RequestToken, value: T) -> Option<T> {
        if self.is_current(token) {
            Some(value)
        } else {
            log::debug!(
                "Discarding stale result (token {}, current {})",
                token.0,
                self.current.load(Ordering::SeqCst)
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_token_is_current() {
        let generation = RequestGeneration::new();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(second > first);
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn stale_results_are_discarded() {
        let generation = RequestGeneration::new();
        let slow_search = generation.begin();
        let fast_search = generation.begin();

        // The newer request finishes first and is applied...
        assert_eq!(generation.accept(fast_search, "pika"), Some("pika"));
        // ...and the older one arriving later is dropped.
        assert_eq!(generation.accept(slow_search, "p"), None);
    }
}
