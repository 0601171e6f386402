//! Mock connector for driving writers and pools in tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;

use tsbench_format::Message;

use crate::connector::{SinkConnector, StmtExec};
use crate::error::SinkError;

#[derive(Default)]
struct MockLogInner {
    sql: Mutex<Vec<String>>,
    prepared: Mutex<Vec<String>>,
    messages: Mutex<Vec<Message>>,
    stmt_rows: AtomicUsize,
    connect_count: AtomicUsize,
    reset_count: AtomicUsize,
    close_count: AtomicUsize,
    fail_next: AtomicUsize,
    fail_fatal: AtomicBool,
    valids: Mutex<Vec<Arc<AtomicBool>>>,
}

/// Shared observation log for every [`MockConnector`] created from it.
#[derive(Clone, Default)]
pub struct MockLog(Arc<MockLogInner>);

impl MockLog {
    /// SQL statements executed so far.
    #[must_use]
    pub fn executed_sql(&self) -> Vec<String> {
        self.0.sql.lock().clone()
    }

    /// Statements passed to `prepare`.
    #[must_use]
    pub fn prepared_sql(&self) -> Vec<String> {
        self.0.prepared.lock().clone()
    }

    /// Messages published so far.
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.0.messages.lock().clone()
    }

    /// Rows received through `execute_stmt`.
    #[must_use]
    pub fn stmt_rows(&self) -> usize {
        self.0.stmt_rows.load(Ordering::Acquire)
    }

    /// Connector `connect` calls.
    #[must_use]
    pub fn connect_count(&self) -> usize {
        self.0.connect_count.load(Ordering::Acquire)
    }

    /// Connector `reset_state` calls.
    #[must_use]
    pub fn reset_count(&self) -> usize {
        self.0.reset_count.load(Ordering::Acquire)
    }

    /// Connector `close` calls.
    #[must_use]
    pub fn close_count(&self) -> usize {
        self.0.close_count.load(Ordering::Acquire)
    }

    /// Make the next `n` executes fail with a transient error.
    pub fn fail_next(&self, n: usize) {
        self.0.fail_next.store(n, Ordering::Release);
    }

    /// Make every execute fail with a fatal error.
    pub fn fail_fatal(&self, enabled: bool) {
        self.0.fail_fatal.store(enabled, Ordering::Release);
    }

    /// Mark every existing connector invalid; new ones stay valid.
    pub fn invalidate_all(&self) {
        for valid in self.0.valids.lock().iter() {
            valid.store(false, Ordering::Release);
        }
    }

    fn check_failure(&self, context: &str) -> Result<(), SinkError> {
        if self.0.fail_fatal.load(Ordering::Acquire) {
            return Err(SinkError::Execute {
                code: 500,
                message: "mock fatal failure".to_owned(),
                sql: context.to_owned(),
            });
        }
        let remaining = self.0.fail_next.load(Ordering::Acquire);
        if remaining > 0 {
            self.0.fail_next.store(remaining - 1, Ordering::Release);
            return Err(SinkError::Transient { context: context.to_owned() });
        }
        Ok(())
    }
}

/// An in-memory connector recording everything it executes.
pub struct MockConnector {
    log: MockLog,
    valid: Arc<AtomicBool>,
}

impl MockConnector {
    /// Create and register with the shared log.
    #[must_use]
    pub fn new(log: MockLog) -> Self {
        let valid = Arc::new(AtomicBool::new(true));
        log.0.valids.lock().push(Arc::clone(&valid));
        Self { log, valid }
    }
}

impl SinkConnector for MockConnector {
    fn connect(&mut self) -> Result<(), SinkError> {
        self.log.0.connect_count.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }

    fn prepare(&mut self, sql: &str) -> Result<(), SinkError> {
        self.log.0.prepared.lock().push(sql.to_owned());
        Ok(())
    }

    fn execute_sql(&mut self, sql: &str) -> Result<(), SinkError> {
        self.log.check_failure(sql)?;
        self.log.0.sql.lock().push(sql.to_owned());
        Ok(())
    }

    fn execute_stmt(&mut self, exec: &StmtExec<'_>) -> Result<(), SinkError> {
        self.log.check_failure("stmt")?;
        self.log.0.stmt_rows.fetch_add(exec.block.total_rows(), Ordering::AcqRel);
        Ok(())
    }

    fn execute_messages(&mut self, messages: &[Message]) -> Result<(), SinkError> {
        self.log.check_failure("messages")?;
        self.log.0.messages.lock().extend_from_slice(messages);
        Ok(())
    }

    fn close(&mut self) {
        self.log.0.close_count.fetch_add(1, Ordering::AcqRel);
        self.valid.store(false, Ordering::Release);
    }

    fn is_valid(&self) -> bool {
        self.valid.load(Ordering::Acquire)
    }

    fn reset_state(&mut self) {
        self.log.0.reset_count.fetch_add(1, Ordering::AcqRel);
    }
}
