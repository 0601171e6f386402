//! A count-down latch for consumer startup coordination.

use std::time::Duration;

use parking_lot::{Condvar, Mutex};

/// Waiters block until the count reaches zero (or a stop predicate fires).
pub struct Latch {
    count: Mutex<usize>,
    cond: Condvar,
}

impl Latch {
    /// Create with an initial count.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { count: Mutex::new(count), cond: Condvar::new() }
    }

    /// Decrement; releases all waiters when the count hits zero.
    pub fn count_down(&self) {
        let mut count = self.count.lock();
        if *count > 0 {
            *count -= 1;
            if *count == 0 {
                self.cond.notify_all();
            }
        }
    }

    /// Block until the count reaches zero.
    pub fn wait(&self) {
        let mut count = self.count.lock();
        while *count > 0 {
            self.cond.wait(&mut count);
        }
    }

    /// Block until the count reaches zero or `stop` returns true.
    ///
    /// The predicate is re-checked on a short tick so an external stop
    /// flag releases waiters even without a notification.
    pub fn wait_or(&self, stop: impl Fn() -> bool) {
        let mut count = self.count.lock();
        while *count > 0 && !stop() {
            self.cond.wait_for(&mut count, Duration::from_millis(100));
        }
    }

    /// Wake all waiters so they re-evaluate their stop predicate.
    pub fn interrupt(&self) {
        self.cond.notify_all();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_wait_releases_at_zero() {
        let latch = Arc::new(Latch::new(2));
        let l = Arc::clone(&latch);
        let waiter = std::thread::spawn(move || l.wait());
        latch.count_down();
        latch.count_down();
        waiter.join().unwrap();
    }

    #[test]
    fn test_zero_count_does_not_block() {
        Latch::new(0).wait();
    }

    #[test]
    fn test_extra_count_down_is_ignored() {
        let latch = Latch::new(1);
        latch.count_down();
        latch.count_down();
        latch.wait();
    }

    #[test]
    fn test_wait_or_observes_stop() {
        let latch = Arc::new(Latch::new(1));
        let stop = Arc::new(AtomicBool::new(false));
        let (l, s) = (Arc::clone(&latch), Arc::clone(&stop));
        let waiter = std::thread::spawn(move || l.wait_or(|| s.load(Ordering::Acquire)));
        stop.store(true, Ordering::Release);
        latch.interrupt();
        waiter.join().unwrap();
    }
}
