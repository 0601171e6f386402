//! The sink writer loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tsbench_engine::{DataPipeline, FetchResult};
use tsbench_format::{FormatResult, InsertData, InsertPayload};
use tsbench_types::ColumnSchema;

use crate::connector::StmtExec;
use crate::error::SinkError;
use crate::pool::ConnectorPool;

/// What to do when a batch exhausts its retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnFailure {
    /// Set the global stop flag and surface the error.
    #[default]
    Exit,
    /// Log, drop the batch and continue.
    Skip,
}

/// Inter-batch pacing shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacingStrategy {
    /// Sleep `base ± random(deviation)` between batches.
    Fixed {
        /// Base sleep, milliseconds.
        base_ms: u64,
        /// Max random deviation, milliseconds.
        deviation_ms: u64,
    },
    /// Keep a start-to-start cadence within `[min, max]` milliseconds.
    FirstToFirst {
        /// Minimum cadence.
        min_ms: u64,
        /// Maximum cadence.
        max_ms: u64,
    },
    /// Sleep within `[min, max]` milliseconds between a batch's end and
    /// the next batch's start.
    LastToFirst {
        /// Minimum sleep.
        min_ms: u64,
        /// Maximum sleep.
        max_ms: u64,
    },
}

/// Pacing configuration.
#[derive(Debug, Clone, Copy)]
pub struct PacingConfig {
    /// The strategy applied between batches.
    pub strategy: PacingStrategy,
}

/// Writer behavior knobs.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Retries per batch beyond the first attempt.
    pub max_retries: usize,
    /// Sleep between retries, milliseconds.
    pub retry_interval_ms: u64,
    /// Policy once retries are exhausted.
    pub on_failure: OnFailure,
    /// Optional inter-batch pacing.
    pub pacing: Option<PacingConfig>,
    /// Prepared SQL for stmt payloads, from the formatter's `prepare`.
    pub prepared_sql: Option<String>,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_interval_ms: 1000,
            on_failure: OnFailure::Exit,
            pacing: None,
            prepared_sql: None,
        }
    }
}

/// Counters a writer reports when it exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriterStats {
    /// Rows successfully written.
    pub rows_written: u64,
    /// Batches successfully written.
    pub batches: u64,
    /// Execute retries performed.
    pub retries: u64,
    /// Batches dropped under the skip policy.
    pub skipped_batches: u64,
}

struct Pacer {
    strategy: PacingStrategy,
    rng: StdRng,
    last_start: Option<Instant>,
}

impl Pacer {
    fn new(strategy: PacingStrategy) -> Self {
        Self { strategy, rng: StdRng::from_os_rng(), last_start: None }
    }

    /// Sleep according to the strategy; called right before each batch.
    fn pause(&mut self) {
        match self.strategy {
            PacingStrategy::Fixed { base_ms, deviation_ms } => {
                if self.last_start.is_some() {
                    let deviation = if deviation_ms == 0 {
                        0
                    } else {
                        self.rng.random_range(0..=deviation_ms * 2)
                    };
                    let sleep_ms = (base_ms + deviation).saturating_sub(deviation_ms);
                    std::thread::sleep(Duration::from_millis(sleep_ms));
                }
                self.last_start = Some(Instant::now());
            }
            PacingStrategy::FirstToFirst { min_ms, max_ms } => {
                if let Some(last) = self.last_start {
                    let target = Duration::from_millis(self.range(min_ms, max_ms));
                    let elapsed = last.elapsed();
                    if elapsed < target {
                        std::thread::sleep(target - elapsed);
                    }
                }
                self.last_start = Some(Instant::now());
            }
            PacingStrategy::LastToFirst { min_ms, max_ms } => {
                if self.last_start.is_some() {
                    std::thread::sleep(Duration::from_millis(self.range(min_ms, max_ms)));
                }
                self.last_start = Some(Instant::now());
            }
        }
    }

    fn range(&mut self, min: u64, max: u64) -> u64 {
        if max <= min { min } else { self.rng.random_range(min..=max) }
    }
}

/// Callback committing `(table, last_timestamp)` watermarks.
pub type CheckpointHook = Box<dyn Fn(&[(String, i64)]) + Send>;

/// Drains one pipeline consumer slot into a sink.
pub struct SinkWriter {
    consumer_id: usize,
    pipeline: Arc<DataPipeline<FormatResult>>,
    connectors: Arc<ConnectorPool>,
    config: WriterConfig,
    stop: Arc<AtomicBool>,
    columns: Arc<Vec<ColumnSchema>>,
    tags: Arc<Vec<ColumnSchema>>,
    checkpoint: Option<CheckpointHook>,
    pacer: Option<Pacer>,
    stats: WriterStats,
}

impl SinkWriter {
    /// Wire a writer to its pipeline slot and connector pool.
    #[must_use]
    pub fn new(
        consumer_id: usize,
        pipeline: Arc<DataPipeline<FormatResult>>,
        connectors: Arc<ConnectorPool>,
        config: WriterConfig,
        stop: Arc<AtomicBool>,
        columns: Arc<Vec<ColumnSchema>>,
        tags: Arc<Vec<ColumnSchema>>,
    ) -> Self {
        let pacer = config.pacing.map(|p| Pacer::new(p.strategy));
        Self {
            consumer_id,
            pipeline,
            connectors,
            config,
            stop,
            columns,
            tags,
            checkpoint: None,
            pacer,
            stats: WriterStats::default(),
        }
    }

    /// Attach a checkpoint commit hook.
    #[must_use]
    pub fn with_checkpoint(mut self, hook: CheckpointHook) -> Self {
        self.checkpoint = Some(hook);
        self
    }

    /// Run until the pipeline terminates or a fatal failure under the
    /// exit policy.
    pub fn run(mut self) -> Result<WriterStats, SinkError> {
        loop {
            if self.stop.load(Ordering::Acquire) {
                tracing::debug!(writer = self.consumer_id, "stop flag observed");
                break;
            }
            let fetched = self
                .pipeline
                .fetch_data(self.consumer_id)
                .map_err(|e| SinkError::Config(e.to_string()))?;
            match fetched {
                FetchResult::Timeout => continue,
                FetchResult::Terminated => break,
                FetchResult::Data(result) => self.write(result)?,
            }
        }
        Ok(self.stats)
    }

    fn write(&mut self, result: FormatResult) -> Result<(), SinkError> {
        match result {
            FormatResult::Ignored => Ok(()),
            FormatResult::StatementList(statements) => {
                for sql in &statements {
                    self.execute_with_retry(|conn, _, _| conn.execute_sql(sql), 0)?;
                }
                Ok(())
            }
            FormatResult::Insert(data) => self.write_batch(data),
        }
    }

    fn write_batch(&mut self, data: InsertData) -> Result<(), SinkError> {
        if let Some(pacer) = &mut self.pacer {
            pacer.pause();
        }

        let rows = data.total_rows as u64;
        let prepared = self.config.prepared_sql.clone();
        let outcome = self.execute_with_retry(
            |conn, columns, tags| match &data.payload {
                InsertPayload::Sql(sql) => conn.execute_sql(sql),
                InsertPayload::Stmt(batch) => {
                    if let Some(sql) = &prepared {
                        conn.prepare(sql)?;
                    }
                    conn.execute_stmt(&StmtExec {
                        batch: *batch,
                        block: data.block(),
                        columns,
                        tags,
                    })
                }
                InsertPayload::Messages(batches) => {
                    for batch in batches {
                        conn.execute_messages(batch)?;
                    }
                    Ok(())
                }
            },
            rows,
        )?;

        if outcome {
            self.stats.rows_written += rows;
            self.stats.batches += 1;
            if let Some(hook) = &self.checkpoint {
                hook(&data.table_watermarks());
            }
        }
        // `data` drops here, releasing the block in every path.
        Ok(())
    }

    /// Run one execute closure under the retry policy.
    ///
    /// Returns `Ok(true)` on success and `Ok(false)` when the batch was
    /// dropped under the skip policy.
    fn execute_with_retry<F>(&mut self, mut op: F, rows: u64) -> Result<bool, SinkError>
    where
        F: FnMut(
            &mut dyn crate::connector::SinkConnector,
            &[ColumnSchema],
            &[ColumnSchema],
        ) -> Result<(), SinkError>,
    {
        let mut attempt = 0usize;
        let error = loop {
            let result = self
                .connectors
                .acquire()
                .and_then(|mut pooled| op(&mut *pooled.connector(), &self.columns, &self.tags));
            match result {
                Ok(()) => return Ok(true),
                Err(e) if e.is_transient() && attempt < self.config.max_retries => {
                    attempt += 1;
                    self.stats.retries += 1;
                    tracing::warn!(
                        writer = self.consumer_id,
                        attempt,
                        max = self.config.max_retries,
                        error = %e,
                        "sink execute failed, retrying"
                    );
                    std::thread::sleep(Duration::from_millis(self.config.retry_interval_ms));
                }
                Err(e) => break e,
            }
        };

        match self.config.on_failure {
            OnFailure::Exit => {
                tracing::error!(
                    writer = self.consumer_id,
                    error = %error,
                    "sink write failed, stopping the run"
                );
                self.stop.store(true, Ordering::Release);
                self.pipeline.terminate();
                Err(error)
            }
            OnFailure::Skip => {
                tracing::error!(
                    writer = self.consumer_id,
                    rows,
                    error = %error,
                    "sink write failed, skipping batch"
                );
                self.stats.skipped_batches += 1;
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::target::PoolOptions;
    use crate::testkit::{MockConnector, MockLog};
    use parking_lot::Mutex;
    use std::sync::Arc;
    use tsbench_engine::{BlockGuard, MemoryPool, PoolConfig};
    use tsbench_gen::RowWriter;
    use tsbench_types::Value;

    fn columns() -> Vec<ColumnSchema> {
        vec![ColumnSchema::new("v", "int").unwrap()]
    }

    fn block_pool() -> Arc<MemoryPool> {
        Arc::new(MemoryPool::new(
            PoolConfig {
                block_count: 4,
                max_tables_per_block: 1,
                max_rows_per_table: 4,
                tables_reuse_data: false,
                num_cached_blocks: 0,
            },
            &columns(),
        ))
    }

    fn filled_block(pool: &MemoryPool, rows: usize) -> BlockGuard {
        let mut guard = pool.acquire_block().unwrap();
        guard.begin_table(0, Arc::from("t1")).unwrap();
        {
            let mut slot = guard.table_mut(0).unwrap();
            for r in 0..rows {
                slot.set_timestamp(r, 1000 + r as i64);
                slot.write_cell(r, 0, &Value::Int(r as i32)).unwrap();
                slot.commit_row();
            }
        }
        guard.bump_used_tables();
        guard.set_window(1000, 1000 + rows as i64 - 1, rows);
        guard
    }

    fn sql_batch(pool: &MemoryPool, rows: usize) -> FormatResult {
        FormatResult::Insert(InsertData::new(
            filled_block(pool, rows),
            InsertPayload::Sql(format!("INSERT INTO `db`.`t1` VALUES ({rows});")),
        ))
    }

    struct Rig {
        pipeline: Arc<DataPipeline<FormatResult>>,
        connectors: Arc<ConnectorPool>,
        log: MockLog,
        stop: Arc<AtomicBool>,
    }

    fn rig() -> Rig {
        let log = MockLog::default();
        let factory_log = log.clone();
        let connectors = Arc::new(ConnectorPool::new(
            PoolOptions { enabled: true, min_size: 1, max_size: 2, timeout: 200 },
            move || Ok(Box::new(MockConnector::new(factory_log.clone()))),
        ));
        Rig {
            pipeline: Arc::new(DataPipeline::new(false, 1, 1, 8)),
            connectors,
            log,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    fn writer(rig: &Rig, config: WriterConfig) -> SinkWriter {
        SinkWriter::new(
            0,
            Arc::clone(&rig.pipeline),
            Arc::clone(&rig.connectors),
            config,
            Arc::clone(&rig.stop),
            Arc::new(columns()),
            Arc::new(Vec::new()),
        )
    }

    #[test]
    fn test_writes_batches_and_releases_blocks() {
        let rig = rig();
        let blocks = block_pool();
        rig.pipeline.push_data(0, sql_batch(&blocks, 2)).unwrap();
        rig.pipeline.push_data(0, sql_batch(&blocks, 3)).unwrap();
        rig.pipeline.terminate();

        let stats = writer(&rig, WriterConfig::default()).run().unwrap();
        assert_eq!(stats.batches, 2);
        assert_eq!(stats.rows_written, 5);
        assert_eq!(rig.log.executed_sql().len(), 2);
        let (total, available, active) = blocks.stats();
        assert_eq!((total, available, active), (4, 4, 0));
    }

    #[test]
    fn test_transient_failures_retried() {
        let rig = rig();
        let blocks = block_pool();
        rig.log.fail_next(2);
        rig.pipeline.push_data(0, sql_batch(&blocks, 1)).unwrap();
        rig.pipeline.terminate();

        let config = WriterConfig { max_retries: 3, retry_interval_ms: 1, ..WriterConfig::default() };
        let stats = writer(&rig, config).run().unwrap();
        assert_eq!(stats.batches, 1);
        assert_eq!(stats.retries, 2);
    }

    #[test]
    fn test_exhausted_retries_exit_policy() {
        let rig = rig();
        let blocks = block_pool();
        rig.log.fail_next(100);
        rig.pipeline.push_data(0, sql_batch(&blocks, 1)).unwrap();

        let config = WriterConfig {
            max_retries: 2,
            retry_interval_ms: 1,
            on_failure: OnFailure::Exit,
            ..WriterConfig::default()
        };
        let result = writer(&rig, config).run();
        assert!(result.is_err());
        assert!(rig.stop.load(Ordering::Acquire));
        // The failed batch's block still went back to the pool.
        let (_, available, active) = blocks.stats();
        assert_eq!((available, active), (4, 0));
        // Pipeline is terminated for everyone else.
        assert!(rig.pipeline.push_data(0, FormatResult::Ignored).is_err());
    }

    #[test]
    fn test_exhausted_retries_skip_policy() {
        let rig = rig();
        let blocks = block_pool();
        rig.log.fail_fatal(true);
        rig.pipeline.push_data(0, sql_batch(&blocks, 1)).unwrap();
        rig.pipeline.push_data(0, sql_batch(&blocks, 2)).unwrap();
        rig.pipeline.terminate();

        let config = WriterConfig {
            max_retries: 1,
            retry_interval_ms: 1,
            on_failure: OnFailure::Skip,
            ..WriterConfig::default()
        };
        let stats = writer(&rig, config).run().unwrap();
        assert_eq!(stats.batches, 0);
        assert_eq!(stats.skipped_batches, 2);
    }

    #[test]
    fn test_statement_list_executes_each() {
        let rig = rig();
        rig.pipeline
            .push_data(
                0,
                FormatResult::StatementList(vec![
                    "CREATE DATABASE IF NOT EXISTS `db`;".to_owned(),
                    "USE `db`;".to_owned(),
                ]),
            )
            .unwrap();
        rig.pipeline.terminate();

        writer(&rig, WriterConfig::default()).run().unwrap();
        assert_eq!(rig.log.executed_sql().len(), 2);
    }

    #[test]
    fn test_checkpoint_hook_sees_watermarks() {
        let rig = rig();
        let blocks = block_pool();
        rig.pipeline.push_data(0, sql_batch(&blocks, 3)).unwrap();
        rig.pipeline.terminate();

        let seen: Arc<Mutex<Vec<(String, i64)>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let w = writer(&rig, WriterConfig::default())
            .with_checkpoint(Box::new(move |marks| sink.lock().extend_from_slice(marks)));
        w.run().unwrap();
        assert_eq!(seen.lock().clone(), vec![("t1".to_owned(), 1002)]);
    }

    #[test]
    fn test_fixed_pacing_spaces_batches() {
        let rig = rig();
        let blocks = block_pool();
        rig.pipeline.push_data(0, sql_batch(&blocks, 1)).unwrap();
        rig.pipeline.push_data(0, sql_batch(&blocks, 1)).unwrap();
        rig.pipeline.terminate();

        let config = WriterConfig {
            pacing: Some(PacingConfig {
                strategy: PacingStrategy::Fixed { base_ms: 60, deviation_ms: 0 },
            }),
            ..WriterConfig::default()
        };
        let start = Instant::now();
        writer(&rig, config).run().unwrap();
        assert!(start.elapsed() >= Duration::from_millis(60));
    }
}
