// ABOUTME: Per-key minimum-interval rate limiter with blocking waits.
// ABOUTME: Keys are independent; waiting on one source never delays another.

use std::collections::HashMap;
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

/// Enforces a minimum interval between calls sharing a key.
///
/// One key per source (or per domain) keeps sources independent: the map
/// stores the last call time per key and `wait_if_needed` sleeps only when
/// the same key comes back too soon.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_request: HashMap<String, Instant>,
}

impl RateLimiter {
    /// Creates a limiter allowing `requests_per_second` calls per key.
    /// A non-positive rate disables waiting entirely.
    pub fn new(requests_per_second: f64) -> Self {
        let min_interval = if requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / requests_per_second)
        } else {
            Duration::ZERO
        };
        Self {
            min_interval,
            last_request: HashMap::new(),
        }
    }

    /// Blocks until the minimum interval since the last call with `key` has
    /// passed. Returns the time actually waited (zero when none was needed).
    pub fn wait_if_needed(&mut self, key: &str) -> Duration {
        if self.min_interval.is_zero() {
            return Duration::ZERO;
        }

        let now = Instant::now();
        if let Some(&last) = self.last_request.get(key) {
            let elapsed = now.duration_since(last);
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                debug!(key, wait_ms = wait.as_millis() as u64, "rate limiting");
                thread::sleep(wait);
                self.last_request.insert(key.to_string(), Instant::now());
                return wait;
            }
        }

        self.last_request.insert(key.to_string(), now);
        Duration::ZERO
    }

    /// The enforced minimum interval between same-key calls.
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_never_waits() {
        let mut limiter = RateLimiter::new(10.0);
        assert_eq!(limiter.wait_if_needed("a"), Duration::ZERO);
    }

    #[test]
    fn same_key_calls_are_spaced() {
        let mut limiter = RateLimiter::new(50.0); // 20ms interval
        let start = Instant::now();
        limiter.wait_if_needed("a");
        let waited = limiter.wait_if_needed("a");
        assert!(waited > Duration::ZERO);
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn different_keys_do_not_block_each_other() {
        let mut limiter = RateLimiter::new(2.0); // 500ms interval
        limiter.wait_if_needed("a");
        let start = Instant::now();
        let waited = limiter.wait_if_needed("b");
        assert_eq!(waited, Duration::ZERO);
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn zero_rate_disables_waiting() {
        let mut limiter = RateLimiter::new(0.0);
        assert_eq!(limiter.wait_if_needed("a"), Duration::ZERO);
        assert_eq!(limiter.wait_if_needed("a"), Duration::ZERO);
    }

    #[test]
    fn spaced_calls_do_not_wait() {
        let mut limiter = RateLimiter::new(100.0); // 10ms interval
        limiter.wait_if_needed("a");
        thread::sleep(Duration::from_millis(15));
        assert_eq!(limiter.wait_if_needed("a"), Duration::ZERO);
    }
}
