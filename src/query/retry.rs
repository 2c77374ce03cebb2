//! Retry Policy
//!
//! Exponential backoff applied by the fetch binding before an error is
//! surfaced to the page.

use std::time::Duration;

use crate::constants::{
    RETRY_INITIAL_DELAY_MS, RETRY_MAX_ATTEMPTS, RETRY_MAX_DELAY_MS, RETRY_MULTIPLIER,
};

/// Retry configuration for failed fetches
#[derive(Clone, Debug, PartialEq)]
pub struct RetryPolicy {
    /// Retries after the first failed attempt (0 = fail immediately)
    pub max_retries: u32,
    /// Delay before the first retry
    pub initial_delay: Duration,
    /// Upper bound for any single delay
    pub max_delay: Duration,
    /// Multiplier for exponential backoff
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: RETRY_MAX_ATTEMPTS,
            initial_delay: Duration::from_millis(RETRY_INITIAL_DELAY_MS),
            max_delay: Duration::from_millis(RETRY_MAX_DELAY_MS),
            multiplier: RETRY_MULTIPLIER,
        }
    }
}

impl RetryPolicy {
    /// Default backoff with a custom retry count
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::default()
        }
    }

    /// Delay before retry number `retry` (zero-based), or `None` when exhausted
    pub fn delay_for(&self, retry: u32) -> Option<Duration> {
        if retry >= self.max_retries {
            return None;
        }
        let factor = self.multiplier.powi(retry as i32);
        let delay_ms = self.initial_delay.as_millis() as f64 * factor;
        let capped = delay_ms.min(self.max_delay.as_millis() as f64);
        Some(Duration::from_millis(capped as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_backoff_doubles() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for(0), Some(Duration::from_millis(1000)));
        assert_eq!(policy.delay_for(1), Some(Duration::from_millis(2000)));
        assert_eq!(policy.delay_for(2), Some(Duration::from_millis(4000)));
        assert_eq!(policy.delay_for(3), None);
    }

    #[test]
    fn delay_is_capped() {
        let policy = RetryPolicy::with_max_retries(10);
        assert_eq!(policy.delay_for(9), Some(Duration::from_millis(30000)));
    }

    #[test]
    fn zero_retries_never_retry() {
        assert_eq!(RetryPolicy::with_max_retries(0).delay_for(0), None);
    }
}
