//! Bounded retry policy for external OCR calls.
//!
//! Nothing inside the geometric pipeline retries; detection runs against a
//! remote or model-backed engine whose failures are worth one more attempt
//! only when they are classified as transient. The policy keys its schedule
//! on the [`EngineError`] variant: rate-limit rejections back off
//! exponentially, transient server faults wait a fixed interval, and fatal
//! errors are returned immediately.

use crate::core::constants::{
    DEFAULT_MAX_RETRIES, DEFAULT_RATE_LIMIT_BASE_DELAY_SECS, DEFAULT_TRANSIENT_DELAY_SECS,
};
use crate::core::errors::EngineError;
use std::time::Duration;

/// A bounded retry schedule for engine invocations.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of retries after the initial attempt.
    pub max_retries: u32,
    /// Base delay for exponential backoff on rate limits (doubled per
    /// attempt).
    pub rate_limit_base_delay: Duration,
    /// Fixed delay before retrying a transient server failure.
    pub transient_delay: Duration,
}

impl RetryPolicy {
    /// Creates the default policy (3 retries, 5s rate-limit base, 20s
    /// transient delay).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of retries.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the exponential backoff base delay for rate limits.
    pub fn with_rate_limit_base_delay(mut self, delay: Duration) -> Self {
        self.rate_limit_base_delay = delay;
        self
    }

    /// Sets the fixed delay for transient server failures.
    pub fn with_transient_delay(mut self, delay: Duration) -> Self {
        self.transient_delay = delay;
        self
    }

    /// Computes the wait before retry number `attempt` (zero-based) for the
    /// given failure, or `None` when the failure is not retryable.
    pub fn delay_for(&self, attempt: u32, error: &EngineError) -> Option<Duration> {
        match error {
            EngineError::RateLimited { .. } => {
                let factor = 2u32.saturating_pow(attempt);
                Some(self.rate_limit_base_delay.saturating_mul(factor))
            }
            EngineError::TransientServer { .. } => Some(self.transient_delay),
            EngineError::Fatal { .. } => None,
        }
    }

    /// Runs `op`, retrying per the schedule until it succeeds, a fatal error
    /// occurs, or the retry budget is exhausted.
    ///
    /// Blocking: waits with `std::thread::sleep`, matching the synchronous
    /// engine seam.
    pub fn run<T>(
        &self,
        mut op: impl FnMut() -> Result<T, EngineError>,
    ) -> Result<T, EngineError> {
        let mut attempt = 0;
        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(error) => {
                    let delay = if attempt < self.max_retries {
                        self.delay_for(attempt, &error)
                    } else {
                        None
                    };
                    match delay {
                        Some(delay) => {
                            tracing::warn!(
                                target: "engine",
                                attempt = attempt + 1,
                                max_retries = self.max_retries,
                                delay_ms = delay.as_millis() as u64,
                                error = %error,
                                "OCR call failed; retrying"
                            );
                            std::thread::sleep(delay);
                            attempt += 1;
                        }
                        None => return Err(error),
                    }
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            rate_limit_base_delay: Duration::from_secs(DEFAULT_RATE_LIMIT_BASE_DELAY_SECS),
            transient_delay: Duration::from_secs(DEFAULT_TRANSIENT_DELAY_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A policy with zero delays so tests never sleep.
    fn instant_policy() -> RetryPolicy {
        RetryPolicy::new()
            .with_rate_limit_base_delay(Duration::ZERO)
            .with_transient_delay(Duration::ZERO)
    }

    #[test]
    fn test_rate_limit_backoff_doubles() {
        let policy = RetryPolicy::new().with_rate_limit_base_delay(Duration::from_secs(5));
        let err = EngineError::RateLimited {
            message: "429".into(),
        };
        assert_eq!(policy.delay_for(0, &err), Some(Duration::from_secs(5)));
        assert_eq!(policy.delay_for(1, &err), Some(Duration::from_secs(10)));
        assert_eq!(policy.delay_for(2, &err), Some(Duration::from_secs(20)));
    }

    #[test]
    fn test_transient_delay_is_fixed() {
        let policy = RetryPolicy::new().with_transient_delay(Duration::from_secs(20));
        let err = EngineError::TransientServer {
            message: "500".into(),
        };
        assert_eq!(policy.delay_for(0, &err), Some(Duration::from_secs(20)));
        assert_eq!(policy.delay_for(2, &err), Some(Duration::from_secs(20)));
    }

    #[test]
    fn test_fatal_is_never_retried() {
        let policy = instant_policy();
        let mut calls = 0;
        let result: Result<(), _> = policy.run(|| {
            calls += 1;
            Err(EngineError::fatal("bad key"))
        });
        assert!(result.is_err());
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_retry_until_success() {
        let policy = instant_policy();
        let mut calls = 0;
        let result = policy.run(|| {
            calls += 1;
            if calls < 3 {
                Err(EngineError::TransientServer {
                    message: "500".into(),
                })
            } else {
                Ok(42)
            }
        });
        assert_eq!(result.expect("succeeds on third call"), 42);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_retry_budget_is_bounded() {
        let policy = instant_policy().with_max_retries(2);
        let mut calls = 0;
        let result: Result<(), _> = policy.run(|| {
            calls += 1;
            Err(EngineError::RateLimited {
                message: "429".into(),
            })
        });
        assert!(result.is_err());
        // Initial attempt plus two retries.
        assert_eq!(calls, 3);
    }
}
