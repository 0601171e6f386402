//! Token-bucket rate limiting for flow-controlled generation.

use std::time::{Duration, Instant};

use parking_lot::Mutex;

struct Bucket {
    tokens: f64,
    last_refill: Instant,
}

/// A token bucket refilled continuously at `rate` tokens per second, with
/// a burst capacity of one second's worth.
pub struct RateLimiter {
    rate: f64,
    capacity: f64,
    bucket: Mutex<Bucket>,
}

impl RateLimiter {
    /// Create a limiter for `rate` rows per second.
    #[must_use]
    pub fn new(rate: u64) -> Self {
        let rate = rate.max(1) as f64;
        Self {
            rate,
            capacity: rate,
            bucket: Mutex::new(Bucket { tokens: rate, last_refill: Instant::now() }),
        }
    }

    /// Take `n` tokens, sleeping until the bucket holds them.
    pub fn acquire(&self, n: u64) {
        let n = n as f64;
        loop {
            let wait = {
                let mut bucket = self.bucket.lock();
                let elapsed = bucket.last_refill.elapsed().as_secs_f64();
                bucket.tokens = (bucket.tokens + elapsed * self.rate).min(self.capacity);
                bucket.last_refill = Instant::now();
                if bucket.tokens >= n {
                    bucket.tokens -= n;
                    return;
                }
                (n - bucket.tokens) / self.rate
            };
            std::thread::sleep(Duration::from_secs_f64(wait.min(0.1)));
        }
    }

    /// Take `n` tokens without waiting; false if the bucket is short.
    pub fn try_acquire(&self, n: u64) -> bool {
        let n = n as f64;
        let mut bucket = self.bucket.lock();
        let elapsed = bucket.last_refill.elapsed().as_secs_f64();
        bucket.tokens = (bucket.tokens + elapsed * self.rate).min(self.capacity);
        bucket.last_refill = Instant::now();
        if bucket.tokens >= n {
            bucket.tokens -= n;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_capacity_is_immediate() {
        let limiter = RateLimiter::new(1000);
        let start = Instant::now();
        limiter.acquire(1000);
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn test_acquire_beyond_burst_waits() {
        let limiter = RateLimiter::new(1000);
        limiter.acquire(1000);
        let start = Instant::now();
        // The bucket is empty; 100 more tokens need ~100 ms.
        limiter.acquire(100);
        let waited = start.elapsed();
        assert!(waited >= Duration::from_millis(60), "waited only {waited:?}");
    }

    #[test]
    fn test_try_acquire() {
        let limiter = RateLimiter::new(10);
        assert!(limiter.try_acquire(10));
        assert!(!limiter.try_acquire(10));
    }
}
