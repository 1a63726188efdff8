//! Retry mechanism with a fixed delay

use super::types::RetryConfig;
use tracing::{debug, warn};

/// Sequential retry loop with an attempt counter and a fixed pause
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    /// Create a new retry policy
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Execute `f` until it succeeds or the attempt budget is spent.
    ///
    /// The closure receives the 1-based attempt number. The last error is
    /// returned once every attempt has failed. No pause follows the final attempt.
    pub async fn call<F, Fut, R, E>(&self, mut f: F) -> std::result::Result<R, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: std::future::Future<Output = std::result::Result<R, E>>,
        E: std::fmt::Display,
    {
        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;

            match f(attempt).await {
                Ok(result) => {
                    if attempt > 1 {
                        debug!("Retry succeeded on attempt {}", attempt);
                    }
                    return Ok(result);
                }
                Err(error) => {
                    if attempt >= max_attempts {
                        warn!("Giving up after {} attempts: {}", attempt, error);
                        return Err(error);
                    }

                    debug!(
                        "Attempt {}/{} failed: {}, retrying in {:?}",
                        attempt, max_attempts, error, self.config.delay
                    );
                    tokio::time::sleep(self.config.delay).await;
                }
            }
        }
    }
}
