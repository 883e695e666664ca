// ABOUTME: Bounded retry with exponential backoff and optional jitter.
// ABOUTME: delay_for computes per-attempt sleeps; execute retries a closure until success or exhaustion.

use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::{error, warn};

/// Retry policy knobs. Defaults: 3 attempts, 1s initial delay doubling per
/// attempt, capped at 60s, with uniform +/-50% jitter.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub exponential_base: f64,
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
            exponential_base: 2.0,
            jitter: true,
        }
    }
}

/// Executes fallible operations under a [`RetryConfig`].
#[derive(Debug, Clone, Default)]
pub struct RetryStrategy {
    config: RetryConfig,
}

impl RetryStrategy {
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Backoff delay after the given 1-based attempt:
    /// `min(initial * base^(attempt-1) * jitter, max_delay)`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1) as i32;
        let base = self
            .config
            .initial_delay
            .as_secs_f64()
            * self.config.exponential_base.powi(exponent);

        let factor = if self.config.jitter {
            rand::rng().random_range(0.5..1.5)
        } else {
            1.0
        };

        Duration::from_secs_f64((base * factor).min(self.config.max_delay.as_secs_f64()))
    }

    /// Calls `f` until it succeeds or `max_attempts` is exhausted, sleeping
    /// the backoff delay between attempts. The final attempt's error is
    /// returned to the caller.
    pub fn execute<T, E, F>(&self, mut f: F) -> Result<T, E>
    where
        E: std::fmt::Display,
        F: FnMut() -> Result<T, E>,
    {
        let max = self.config.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match f() {
                Ok(value) => return Ok(value),
                Err(err) => {
                    if attempt >= max {
                        error!(attempts = max, %err, "all retry attempts failed");
                        return Err(err);
                    }
                    let delay = self.delay_for(attempt);
                    warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        %err,
                        "attempt failed, retrying"
                    );
                    thread::sleep(delay);
                    attempt += 1;
                }
            }
        }
    }
}
