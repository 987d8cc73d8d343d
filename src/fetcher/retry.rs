use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::app::{JobcrawlError, Result};
use crate::config::RetrySettings;

/// Bounded exponential backoff around a fallible async operation.
///
/// After failed attempt `k` (1-based) the caller sleeps for
/// `min(max_wait, max(min_wait, multiplier * 2^(k - 1)))` seconds before
/// trying again, until `max_attempts` attempts have been made.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    min_wait: Duration,
    max_wait: Duration,
    multiplier: f64,
    max_attempts: u32,
}

impl RetryPolicy {
    pub fn new(min_wait: Duration, max_wait: Duration, multiplier: f64, max_attempts: u32) -> Self {
        Self {
            min_wait,
            max_wait: max_wait.max(min_wait),
            multiplier,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn from_settings(settings: &RetrySettings) -> Self {
        Self::new(
            secs(settings.min_wait_secs),
            secs(settings.max_wait_secs),
            settings.multiplier,
            settings.max_attempts,
        )
    }

    /// Retry `max_attempts` times without waiting in between.
    pub fn immediate(max_attempts: u32) -> Self {
        Self::new(Duration::ZERO, Duration::ZERO, 0.0, max_attempts)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Backoff after the given failed attempt.
    pub fn wait_for(&self, attempt: u32) -> Duration {
        let exponent = i32::try_from(attempt.saturating_sub(1)).unwrap_or(i32::MAX);
        let raw = self.multiplier * 2f64.powi(exponent);
        let clamped = raw
            .max(self.min_wait.as_secs_f64())
            .min(self.max_wait.as_secs_f64());
        Duration::try_from_secs_f64(clamped).unwrap_or(self.max_wait)
    }

    /// Run `operation` until it succeeds or the attempts are used up.
    ///
    /// Exhaustion returns [`JobcrawlError::RetriesExhausted`] wrapping the
    /// last error.
    pub async fn run<T, F, Fut>(&self, label: &str, mut operation: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 1;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt >= self.max_attempts => {
                    return Err(JobcrawlError::RetriesExhausted {
                        label: label.to_string(),
                        attempts: attempt,
                        source: Box::new(e),
                    });
                }
                Err(e) => {
                    let wait = self.wait_for(attempt);
                    warn!(
                        "{} failed (attempt {}/{}): {}; retrying in {:?}",
                        label, attempt, self.max_attempts, e, wait
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_settings(&RetrySettings::default())
    }
}

fn secs(value: f64) -> Duration {
    Duration::try_from_secs_f64(value).unwrap_or(Duration::ZERO)
}
