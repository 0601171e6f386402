//! Shared run state threaded through scheduler and actions.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tsbench_format::FormatterRegistry;

use crate::config::WorkflowConfig;

/// Everything an action needs: the resolved configuration, the formatter
/// registry built at startup, and the global stop flag.
pub struct RunContext {
    /// The resolved workflow configuration.
    pub config: WorkflowConfig,
    /// Formatter registry (read-only after startup).
    pub registry: FormatterRegistry,
    /// Canonical cancellation channel; set by signal handlers and by
    /// writers failing under the exit policy.
    pub stop: Arc<AtomicBool>,
    /// Set when checkpoint recovery is active; inhibits DROP statements
    /// in DDL actions.
    pub inhibit_drop: AtomicBool,
}

impl RunContext {
    /// Build with a fresh stop flag and the built-in registry.
    #[must_use]
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            registry: FormatterRegistry::with_builtins(),
            stop: Arc::new(AtomicBool::new(false)),
            inhibit_drop: AtomicBool::new(false),
        }
    }

    /// Whether the run was asked to stop.
    #[must_use]
    pub fn stopped(&self) -> bool {
        self.stop.load(Ordering::Acquire)
    }

    /// Ask the run to stop.
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Release);
    }
}
