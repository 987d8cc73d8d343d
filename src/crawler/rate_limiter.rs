use std::time::Duration;

use tracing::debug;

/// Fixed pause between vacancy page fetches to spare the origin server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimiter {
    delay: Duration,
}

impl RateLimiter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sleep for the configured delay.
    pub async fn wait(&self) {
        if self.delay.is_zero() {
            return;
        }
        debug!("Sleeping {:?} before the next request", self.delay);
        tokio::time::sleep(self.delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_wait_sleeps_for_delay() {
        let limiter = RateLimiter::new(Duration::from_millis(30));
        let started = Instant::now();
        limiter.wait().await;
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_zero_delay_returns_immediately() {
        let limiter = RateLimiter::new(Duration::ZERO);
        let started = Instant::now();
        limiter.wait().await;
        assert!(started.elapsed() < Duration::from_millis(30));
    }
}
