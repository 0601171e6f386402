//! The sink connector pool.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::connector::SinkConnector;
use crate::error::SinkError;
use crate::target::PoolOptions;

type Factory = Box<dyn Fn() -> Result<Box<dyn SinkConnector>, SinkError> + Send + Sync>;

struct PoolState {
    idle: VecDeque<Box<dyn SinkConnector>>,
    total: usize,
    shutting_down: bool,
}

struct PoolInner {
    state: Mutex<PoolState>,
    available: Condvar,
    factory: Factory,
    opts: PoolOptions,
}

/// Reusable physical connectors with bounded acquisition.
///
/// `min_size` connectors are created eagerly; the pool grows lazily to
/// `max_size`. An acquire past capacity waits up to `timeout` ms and then
/// fails with [`SinkError::Timeout`]. Invalid connectors found on acquire
/// are closed and replaced.
pub struct ConnectorPool {
    inner: Arc<PoolInner>,
}

impl ConnectorPool {
    /// Build the pool and eagerly connect `min_size` connectors.
    ///
    /// Eager connection failures are logged and tolerated; the pool
    /// retries lazily on demand.
    pub fn new<F>(opts: PoolOptions, factory: F) -> Self
    where
        F: Fn() -> Result<Box<dyn SinkConnector>, SinkError> + Send + Sync + 'static,
    {
        let pool = Self {
            inner: Arc::new(PoolInner {
                state: Mutex::new(PoolState {
                    idle: VecDeque::new(),
                    total: 0,
                    shutting_down: false,
                }),
                available: Condvar::new(),
                factory: Box::new(factory),
                opts,
            }),
        };
        for _ in 0..pool.inner.opts.min_size.min(pool.inner.opts.max_size) {
            match pool.create_connected() {
                Ok(conn) => {
                    let mut state = pool.inner.state.lock();
                    state.idle.push_back(conn);
                    state.total += 1;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "eager connector creation failed");
                    break;
                }
            }
        }
        pool
    }

    fn create_connected(&self) -> Result<Box<dyn SinkConnector>, SinkError> {
        let mut conn = (self.inner.factory)()?;
        conn.connect()?;
        Ok(conn)
    }

    /// Take a connector, creating or replacing as needed.
    pub fn acquire(&self) -> Result<PooledConnector, SinkError> {
        let deadline = Instant::now() + Duration::from_millis(self.inner.opts.timeout);
        let mut state = self.inner.state.lock();
        loop {
            if state.shutting_down {
                return Err(SinkError::PoolShutdown);
            }

            if let Some(conn) = state.idle.pop_front() {
                if conn.is_valid() {
                    drop(state);
                    return Ok(self.wrap(conn));
                }
                // Replace a dead connector outside the lock.
                drop(state);
                let mut dead = conn;
                dead.close();
                match self.create_connected() {
                    Ok(fresh) => return Ok(self.wrap(fresh)),
                    Err(e) => {
                        self.inner.state.lock().total -= 1;
                        return Err(e);
                    }
                }
            }

            if state.total < self.inner.opts.max_size {
                state.total += 1;
                drop(state);
                match self.create_connected() {
                    Ok(fresh) => return Ok(self.wrap(fresh)),
                    Err(e) => {
                        self.inner.state.lock().total -= 1;
                        return Err(e);
                    }
                }
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(SinkError::Timeout);
            }
            self.inner.available.wait_for(&mut state, remaining);
            if state.idle.is_empty()
                && state.total >= self.inner.opts.max_size
                && Instant::now() >= deadline
            {
                return Err(SinkError::Timeout);
            }
        }
    }

    fn wrap(&self, conn: Box<dyn SinkConnector>) -> PooledConnector {
        PooledConnector { conn: Some(conn), pool: Arc::clone(&self.inner) }
    }

    /// Close every idle connector and refuse further acquires.
    pub fn shutdown(&self) {
        let drained: Vec<_> = {
            let mut state = self.inner.state.lock();
            state.shutting_down = true;
            state.total = state.total.saturating_sub(state.idle.len());
            state.idle.drain(..).collect()
        };
        self.inner.available.notify_all();
        for mut conn in drained {
            conn.close();
        }
    }

    /// `(total, idle)` connector counts.
    #[must_use]
    pub fn stats(&self) -> (usize, usize) {
        let state = self.inner.state.lock();
        (state.total, state.idle.len())
    }
}

/// A borrowed connector; returns to the pool on drop after
/// `reset_state()`.
pub struct PooledConnector {
    conn: Option<Box<dyn SinkConnector>>,
    pool: Arc<PoolInner>,
}

impl PooledConnector {
    /// The underlying connector.
    pub fn connector(&mut self) -> &mut dyn SinkConnector {
        #[allow(clippy::unwrap_used)] // Some until drop by construction
        let conn = self.conn.as_mut().unwrap();
        conn.as_mut()
    }
}

impl Drop for PooledConnector {
    fn drop(&mut self) {
        if let Some(mut conn) = self.conn.take() {
            conn.reset_state();
            let mut state = self.pool.state.lock();
            if state.shutting_down {
                state.total = state.total.saturating_sub(1);
                drop(state);
                conn.close();
                return;
            }
            state.idle.push_back(conn);
            drop(state);
            self.pool.available.notify_one();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::testkit::{MockConnector, MockLog};

    fn pool_with(opts: PoolOptions) -> (ConnectorPool, MockLog) {
        let log = MockLog::default();
        let factory_log = log.clone();
        let pool =
            ConnectorPool::new(opts, move || Ok(Box::new(MockConnector::new(factory_log.clone()))));
        (pool, log)
    }

    #[test]
    fn test_min_size_created_eagerly() {
        let (pool, _log) =
            pool_with(PoolOptions { enabled: true, min_size: 2, max_size: 4, timeout: 100 });
        assert_eq!(pool.stats(), (2, 2));
    }

    #[test]
    fn test_acquire_timeout_and_recovery() {
        let (pool, _log) =
            pool_with(PoolOptions { enabled: true, min_size: 0, max_size: 1, timeout: 100 });

        let held = pool.acquire().unwrap();
        let start = Instant::now();
        let second = pool.acquire();
        let waited = start.elapsed();
        assert!(matches!(second, Err(SinkError::Timeout)));
        assert!(
            waited >= Duration::from_millis(70) && waited <= Duration::from_millis(300),
            "waited {waited:?}"
        );

        drop(held);
        assert!(pool.acquire().is_ok());
    }

    #[test]
    fn test_reset_called_on_return() {
        let (pool, log) =
            pool_with(PoolOptions { enabled: true, min_size: 1, max_size: 1, timeout: 100 });
        let conn = pool.acquire().unwrap();
        drop(conn);
        assert_eq!(log.reset_count(), 1);
    }

    #[test]
    fn test_invalid_connector_replaced() {
        let (pool, log) =
            pool_with(PoolOptions { enabled: true, min_size: 1, max_size: 1, timeout: 100 });
        log.invalidate_all();
        // The idle connector fails its validity check and is replaced.
        let mut conn = pool.acquire().unwrap();
        assert!(conn.connector().is_valid());
        assert_eq!(log.close_count(), 1);
        drop(conn);
        assert_eq!(pool.stats(), (1, 1));
    }

    #[test]
    fn test_shutdown_refuses_acquire() {
        let (pool, _log) =
            pool_with(PoolOptions { enabled: true, min_size: 1, max_size: 2, timeout: 50 });
        pool.shutdown();
        assert!(matches!(pool.acquire(), Err(SinkError::PoolShutdown)));
        assert_eq!(pool.stats(), (0, 0));
    }

    #[test]
    fn test_waiter_wakes_on_return() {
        let (pool, _log) =
            pool_with(PoolOptions { enabled: true, min_size: 0, max_size: 1, timeout: 2000 });
        let held = pool.acquire().unwrap();
        let pool = std::sync::Arc::new(pool);
        let p = std::sync::Arc::clone(&pool);
        let waiter = std::thread::spawn(move || p.acquire().map(|_| ()));
        std::thread::sleep(Duration::from_millis(50));
        drop(held);
        waiter.join().unwrap().unwrap();
    }
}
