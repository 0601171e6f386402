//! The insert orchestrator: wires pool, generators, formatters, pipeline
//! and writers for one insert step.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

use tsbench_engine::{
    DataPipeline, EngineError, GenerationSpec, Latch, MemoryPool, PoolConfig as BlockPoolConfig,
    TableDataManager,
};
use tsbench_format::{
    FormatConfig, FormatResult, InsertFormatter, MsgContent, MsgOptions, StmtOptions,
};
use tsbench_gen::{ColumnGenerator, DisorderInterval, RowGenerator, parse_time_expr};
use tsbench_sink::{
    ConnectorFactory, ConnectorPool, OnFailure, PacingConfig, PacingStrategy, PoolOptions,
    Protocol, SinkConnector, SinkError, SinkTarget, SinkWriter, WriterConfig,
};
use tsbench_types::{ColumnSchema, GeneratorSpec};

use crate::checkpoint::{self, CheckpointStore};
use crate::config::{InsertStepConfig, TimeIntervalEntry};
use crate::context::RunContext;
use crate::error::CliError;

/// Overridable connector factory, for tests driving a mock sink.
pub type ConnectorBuilder =
    Arc<dyn Fn(usize) -> Result<Box<dyn SinkConnector>, SinkError> + Send + Sync>;

/// Runs one insert step end to end.
pub struct InsertOrchestrator<'a> {
    context: &'a RunContext,
    step: InsertStepConfig,
    target: SinkTarget,
    format_key: String,
    connector_builder: Option<ConnectorBuilder>,
}

impl<'a> InsertOrchestrator<'a> {
    /// Wire an orchestrator for one step.
    #[must_use]
    pub fn new(
        context: &'a RunContext,
        step: InsertStepConfig,
        target: SinkTarget,
        format_key: String,
    ) -> Self {
        Self { context, step, target, format_key, connector_builder: None }
    }

    /// Replace the sink connector factory (test seam).
    #[must_use]
    pub fn with_connector_builder(mut self, builder: ConnectorBuilder) -> Self {
        self.connector_builder = Some(builder);
        self
    }

    fn checkpoint_path(&self) -> PathBuf {
        match &self.step.checkpoint.path {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(format!("{}.ckpt", self.context.config.schema.name)),
        }
    }

    fn message_content(&self) -> Result<MsgContent, CliError> {
        match self.step.format.as_str() {
            // `sql` is the config default; message sinks take it as json.
            "json" | "sql" => Ok(MsgContent::Json),
            "influx" => Ok(MsgContent::Influx),
            "stmt" => Ok(MsgContent::Json),
            other => Err(CliError::config(
                "with.format",
                format!("invalid message format {other:?} (json or influx)"),
            )),
        }
    }

    fn format_config(&self) -> Result<FormatConfig, CliError> {
        let database = match &self.target {
            SinkTarget::Tdengine(t) => t.database.clone(),
            _ => self.context.config.schema.name.clone(),
        };
        let websocket = match &self.target {
            SinkTarget::Tdengine(t) => t.protocol == Protocol::WebSocket,
            _ => false,
        };
        Ok(FormatConfig {
            database,
            super_table: self.context.config.schema.name.clone(),
            stmt: StmtOptions {
                version: self.step.stmt.version.clone(),
                auto_create_table: self.step.stmt.auto_create_table,
                websocket,
            },
            msg: MsgOptions {
                content: self.message_content()?,
                topic: self
                    .step
                    .topic
                    .clone()
                    .unwrap_or_else(|| format!("{}/{{table}}", self.context.config.schema.name)),
                tbname_key: self.step.tbname_key.clone(),
                key_pattern: self.step.key_pattern.clone(),
                key_serializer: self.step.key_serializer.clone(),
                records_per_message: self.step.records_per_message,
                compression: self.step.compression.clone(),
                encoding: self.step.encoding.clone(),
            },
        })
    }

    fn disorder_intervals(&self, precision: &str) -> Result<Vec<DisorderInterval>, CliError> {
        self.step
            .generation
            .disorder
            .iter()
            .map(|entry| {
                let parse = |value: &serde_yaml::Value| -> Result<i64, CliError> {
                    match value {
                        serde_yaml::Value::Number(n) => n.as_i64().ok_or_else(|| {
                            CliError::config("with.generation.disorder", "bad bound")
                        }),
                        serde_yaml::Value::String(s) => {
                            parse_time_expr(s, precision).map_err(CliError::from)
                        }
                        _ => Err(CliError::config(
                            "with.generation.disorder",
                            "time bounds must be integers or now() expressions",
                        )),
                    }
                };
                Ok(DisorderInterval {
                    time_start: parse(&entry.time_start)?,
                    time_end: parse(&entry.time_end)?,
                    ratio: entry.ratio,
                    latency_range_ms: entry.latency_range,
                })
            })
            .collect()
    }

    fn pacing(entry: &TimeIntervalEntry) -> Option<PacingConfig> {
        if !entry.enabled {
            return None;
        }
        let strategy = match entry.interval_strategy.as_deref() {
            Some("fixed") => {
                let fixed = entry.fixed_interval.clone().unwrap_or_default();
                PacingStrategy::Fixed {
                    base_ms: fixed.base_interval,
                    deviation_ms: fixed.random_deviation,
                }
            }
            Some("first_to_first") => {
                let dynamic = entry.dynamic_interval.clone().unwrap_or_default();
                PacingStrategy::FirstToFirst {
                    min_ms: dynamic.min_interval,
                    max_ms: dynamic.max_interval,
                }
            }
            Some("last_to_first") => {
                let dynamic = entry.dynamic_interval.clone().unwrap_or_default();
                PacingStrategy::LastToFirst {
                    min_ms: dynamic.min_interval,
                    max_ms: dynamic.max_interval,
                }
            }
            _ => return None,
        };
        Some(PacingConfig { strategy })
    }

    /// Execute the step.
    pub fn run(self) -> Result<(), CliError> {
        let schema = &self.context.config.schema;
        let (ts_col, columns) = schema.split_columns()?;
        let tags = schema.tag_columns()?;
        let table_names = schema.table_names()?;
        if table_names.is_empty() {
            tracing::info!("empty table list; nothing to insert");
            return Ok(());
        }

        if self.step.thread_affinity || self.step.thread_realtime {
            tracing::warn!(
                "thread_affinity/thread_realtime requested; best-effort only on this build"
            );
        }

        let generation = &self.step.generation;
        let producer_count = generation.generate_threads.max(1).min(table_names.len());
        let consumer_count = self.step.insert_threads.max(1);

        // Checkpoint recovery: load committed watermarks before anything
        // else so generators can skip replayed rows.
        let checkpoint_path = self.checkpoint_path();
        let (recovered, store) = if self.step.checkpoint.enabled {
            let map = checkpoint::load(&checkpoint_path)?;
            let recovered = !map.is_empty();
            if recovered {
                tracing::info!(
                    path = %checkpoint_path.display(),
                    tables = map.len(),
                    "checkpoint recovery active"
                );
                self.context.inhibit_drop.store(true, Ordering::Release);
            }
            let store = Arc::new(CheckpointStore::open(
                &checkpoint_path,
                self.step.checkpoint.interval_sec.max(1),
            )?);
            (map, Some(store))
        } else {
            (Default::default(), None)
        };
        let is_recover = !recovered.is_empty();

        // Pool sizing: a block fits max(interlace, rows_per_batch) rows
        // per table slot across one producer's active tables.
        let rows_cap = if generation.interlace > 0 {
            generation.interlace as usize
        } else if generation.rows_per_batch > 0 {
            generation.rows_per_batch.min(generation.rows_per_table.max(1) as usize)
        } else {
            generation.rows_per_table.max(1) as usize
        }
        .clamp(1, 1_000_000);
        let tables_per_producer = table_names.len().div_ceil(producer_count);
        let block_count = if generation.memory_blocks > 0 {
            generation.memory_blocks
        } else {
            (self.step.queue_capacity * consumer_count + producer_count + consumer_count)
                .clamp(4, 256)
        };

        let pool = Arc::new(MemoryPool::new(
            BlockPoolConfig {
                block_count,
                max_tables_per_block: tables_per_producer.min(1024).max(1),
                max_rows_per_table: rows_cap,
                tables_reuse_data: generation.tables_reuse_data,
                num_cached_blocks: generation.num_cached_blocks,
            },
            &columns,
        ));

        // Tag tuples are registered once per table and shared.
        if !tags.is_empty() {
            let mut tag_generators = tags
                .iter()
                .map(ColumnGenerator::new)
                .collect::<Result<Vec<_>, _>>()?;
            for (index, name) in table_names.iter().enumerate() {
                let values =
                    tag_generators.iter_mut().map(|g| g.next(index as u64, 0)).collect();
                pool.register_table_tags(name, values);
            }
        }

        let precision = match &ts_col.generator {
            GeneratorSpec::Timestamp(spec) => spec.precision.clone(),
            _ => "ms".to_owned(),
        };
        let disorder = self.disorder_intervals(&precision)?;

        // Split the table list across producers; sets stay disjoint so
        // per-table timestamps remain globally monotonic.
        let mut managers = Vec::with_capacity(producer_count);
        for producer in 0..producer_count {
            let mut tables = Vec::new();
            for name in table_names.iter().skip(producer).step_by(producer_count) {
                let mut generator = RowGenerator::new(&ts_col, &columns)?;
                if !disorder.is_empty() {
                    generator = generator.with_disorder(disorder.clone());
                }
                if let Some(last) = recovered.get(name) {
                    generator = generator.with_skip_until(*last);
                }
                tables.push((Arc::from(name.as_str()), generator));
            }
            managers.push(TableDataManager::new(
                Arc::clone(&pool),
                GenerationSpec {
                    rows_per_table: generation.rows_per_table,
                    rows_per_batch: generation.rows_per_batch,
                    interlace_rows: generation.interlace,
                    rate_limit: generation.flow_control,
                },
                tables,
            )?);
        }

        // One formatter per producer; init once and share the prepared SQL.
        let format_config = self.format_config()?;
        let mut formatters: Vec<Box<dyn InsertFormatter>> = Vec::with_capacity(producer_count);
        let mut prepared_sql = None;
        for index in 0..producer_count {
            let mut formatter = self.context.registry.create(&self.format_key, &format_config)?;
            let prepared = formatter.prepare(&columns, &tags)?;
            if index == 0 {
                prepared_sql = prepared.sql;
                if let Some(sql) = &prepared_sql {
                    tracing::debug!(sql = %sql, "prepared statement");
                }
            }
            formatters.push(formatter);
        }

        // Connector pool shared by all writers.
        let pool_options = match &self.target {
            SinkTarget::Tdengine(t) if t.pool.enabled => t.pool.clone(),
            _ => PoolOptions {
                enabled: true,
                min_size: 0,
                max_size: consumer_count.max(1),
                timeout: 5000,
            },
        };
        let connectors = {
            let counter = AtomicUsize::new(0);
            let builder: ConnectorBuilder = match &self.connector_builder {
                Some(builder) => Arc::clone(builder),
                None => {
                    let target = self.target.clone();
                    Arc::new(move |writer_id| ConnectorFactory::create(&target, writer_id))
                }
            };
            Arc::new(ConnectorPool::new(pool_options, move || {
                builder(counter.fetch_add(1, Ordering::AcqRel))
            }))
        };

        let pipeline: Arc<DataPipeline<FormatResult>> = Arc::new(DataPipeline::new(
            self.step.shared_queue,
            producer_count,
            consumer_count,
            self.step.queue_capacity.max(1),
        ));

        let on_failure = match self.step.failure_handling.on_failure.as_str() {
            "skip" => OnFailure::Skip,
            _ => OnFailure::Exit,
        };
        let writer_config = WriterConfig {
            max_retries: self.step.failure_handling.max_retries,
            retry_interval_ms: self.step.failure_handling.retry_interval_ms,
            on_failure,
            pacing: Self::pacing(&self.step.time_interval),
            prepared_sql,
        };

        let stop = Arc::clone(&self.context.stop);
        let columns = Arc::new(columns);
        let tags = Arc::new(tags);
        let first_error: Mutex<Option<CliError>> = Mutex::new(None);
        let producers_done = AtomicUsize::new(0);
        let warmup_target = if self.step.queue_warmup_ratio > 0.0 {
            ((self.step.queue_capacity * consumer_count) as f64 * self.step.queue_warmup_ratio)
                .ceil() as usize
        } else {
            0
        };
        let startup = Arc::new(Latch::new(usize::from(warmup_target > 0)));

        tracing::info!(
            sink = %self.target.describe(),
            tables = table_names.len(),
            producers = producer_count,
            writers = consumer_count,
            rows_per_table = generation.rows_per_table,
            "insert step started"
        );

        let mut total_rows = 0u64;
        std::thread::scope(|scope| {
            let mut producer_handles = Vec::with_capacity(producer_count);
            for (producer_id, (mut manager, formatter)) in
                managers.into_iter().zip(formatters).enumerate()
            {
                let pipeline = Arc::clone(&pipeline);
                let stop = Arc::clone(&stop);
                let columns = Arc::clone(&columns);
                let tags = Arc::clone(&tags);
                let producers_done = &producers_done;
                let first_error = &first_error;
                producer_handles.push(scope.spawn(move || {
                    let result = produce_loop(
                        producer_id,
                        &mut manager,
                        formatter.as_ref(),
                        &pipeline,
                        &stop,
                        &columns,
                        &tags,
                        is_recover,
                    );
                    producers_done.fetch_add(1, Ordering::AcqRel);
                    if let Err(e) = result {
                        tracing::error!(producer = producer_id, error = %e, "producer failed");
                        stop.store(true, Ordering::Release);
                        pipeline.terminate();
                        let mut slot = first_error.lock();
                        if slot.is_none() {
                            *slot = Some(e);
                        }
                    }
                    manager.total_rows_generated()
                }));
            }

            let mut writer_handles = Vec::with_capacity(consumer_count);
            for consumer_id in 0..consumer_count {
                let writer = SinkWriter::new(
                    consumer_id,
                    Arc::clone(&pipeline),
                    Arc::clone(&connectors),
                    writer_config.clone(),
                    Arc::clone(&stop),
                    Arc::clone(&columns),
                    Arc::clone(&tags),
                );
                let writer = match &store {
                    Some(store) => {
                        let store = Arc::clone(store);
                        writer.with_checkpoint(Box::new(move |marks| store.commit(marks)))
                    }
                    None => writer,
                };
                let startup = Arc::clone(&startup);
                let stop = Arc::clone(&stop);
                writer_handles.push(scope.spawn(move || {
                    startup.wait_or(|| stop.load(Ordering::Acquire));
                    writer.run()
                }));
            }

            // Warm the pipeline before releasing writers.
            if warmup_target > 0 {
                while pipeline.total_queued() < warmup_target
                    && producers_done.load(Ordering::Acquire) < producer_count
                    && !stop.load(Ordering::Acquire)
                {
                    std::thread::sleep(Duration::from_millis(10));
                }
                startup.count_down();
            }

            for handle in producer_handles {
                match handle.join() {
                    Ok(rows) => total_rows += rows,
                    Err(_) => {
                        let mut slot = first_error.lock();
                        if slot.is_none() {
                            *slot = Some(CliError::ThreadPanic("producer".to_owned()));
                        }
                    }
                }
            }
            // All producers finished; let writers drain and exit.
            pipeline.terminate();

            for handle in writer_handles {
                match handle.join() {
                    Ok(Ok(stats)) => {
                        tracing::debug!(
                            batches = stats.batches,
                            rows = stats.rows_written,
                            retries = stats.retries,
                            skipped = stats.skipped_batches,
                            "writer finished"
                        );
                    }
                    Ok(Err(e)) => {
                        let mut slot = first_error.lock();
                        if slot.is_none() {
                            *slot = Some(e.into());
                        }
                    }
                    Err(_) => {
                        let mut slot = first_error.lock();
                        if slot.is_none() {
                            *slot = Some(CliError::ThreadPanic("writer".to_owned()));
                        }
                    }
                }
            }
        });

        pool.close();
        connectors.shutdown();
        if let Some(store) = &store {
            store.flush();
        }

        match first_error.into_inner() {
            Some(e) => Err(e),
            None => {
                tracing::info!(rows = total_rows, "insert step finished");
                Ok(())
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn produce_loop(
    producer_id: usize,
    manager: &mut TableDataManager,
    formatter: &dyn InsertFormatter,
    pipeline: &DataPipeline<FormatResult>,
    stop: &std::sync::atomic::AtomicBool,
    columns: &[ColumnSchema],
    tags: &[ColumnSchema],
    is_recover: bool,
) -> Result<(), CliError> {
    loop {
        if stop.load(Ordering::Acquire) {
            return Ok(());
        }
        match manager.next_batch() {
            Ok(Some(block)) => {
                let result = formatter.format(block, columns, tags, is_recover)?;
                match pipeline.push_data(producer_id, result) {
                    Ok(()) => {}
                    Err(tsbench_engine::PipelineError::Terminated) => return Ok(()),
                    Err(e) => return Err(CliError::config("pipeline", e.to_string())),
                }
            }
            Ok(None) => return Ok(()),
            Err(EngineError::PoolClosed) => return Ok(()),
            Err(e) => return Err(e.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{CheckpointEntry, GenerationEntry, WorkflowConfig};
    use tsbench_sink::TdengineTarget;
    use tsbench_sink::testkit::{MockConnector, MockLog};

    fn context(tables: u64) -> RunContext {
        let yaml = format!(
            r#"
schema:
  name: meters
  tbname: {{ prefix: d, from: 0, count: {tables} }}
  columns:
    - {{ name: ts, type: timestamp, start: "1000", precision: ms, step: 10 }}
    - {{ name: v, type: int, gen_type: order, min: 0, max: 1000000 }}
  tags:
    - {{ name: groupid, type: int, gen_type: order, min: 1, max: 100 }}
jobs:
  j: {{ steps: [ {{ uses: tdengine/insert-data }} ] }}
"#
        );
        RunContext::new(WorkflowConfig::from_yaml(&yaml, "test.yaml").unwrap())
    }

    fn mock_builder(log: &MockLog) -> ConnectorBuilder {
        let log = log.clone();
        Arc::new(move |_| Ok(Box::new(MockConnector::new(log.clone()))))
    }

    fn step(rows_per_table: u64) -> InsertStepConfig {
        InsertStepConfig {
            format: "stmt".to_owned(),
            generation: GenerationEntry {
                rows_per_table,
                rows_per_batch: 4,
                generate_threads: 2,
                ..GenerationEntry::default()
            },
            insert_threads: 2,
            queue_capacity: 4,
            ..InsertStepConfig::default()
        }
    }

    fn run(context: &RunContext, step: InsertStepConfig, log: &MockLog) -> Result<(), CliError> {
        InsertOrchestrator::new(
            context,
            step,
            SinkTarget::Tdengine(TdengineTarget::default()),
            "insert.stmt".to_owned(),
        )
        .with_connector_builder(mock_builder(log))
        .run()
    }

    #[test]
    fn test_end_to_end_exact_row_counts() {
        let context = context(4);
        let log = MockLog::default();
        run(&context, step(10), &log).unwrap();
        // 4 tables × 10 rows, no duplicates, no losses.
        assert_eq!(log.stmt_rows(), 40);
        // The formatter's prepared SQL reached the connector.
        assert!(
            log.prepared_sql()
                .iter()
                .any(|sql| sql.contains("INSERT INTO `tsbench`.`meters`"))
        );
    }

    #[test]
    fn test_empty_table_list_is_a_noop() {
        let context = context(0);
        let log = MockLog::default();
        run(&context, step(10), &log).unwrap();
        assert_eq!(log.stmt_rows(), 0);
        assert_eq!(log.connect_count(), 0);
    }

    #[test]
    fn test_fatal_sink_error_stops_run() {
        let context = context(2);
        let log = MockLog::default();
        log.fail_fatal(true);
        let mut config = step(10);
        config.failure_handling.retry_interval_ms = 1;
        let result = run(&context, config, &log);
        assert!(result.is_err());
        assert!(context.stopped());
    }

    #[test]
    fn test_skip_policy_completes_run() {
        let context = context(2);
        let log = MockLog::default();
        log.fail_fatal(true);
        let mut config = step(6);
        config.failure_handling.on_failure = "skip".to_owned();
        config.failure_handling.retry_interval_ms = 1;
        run(&context, config, &log).unwrap();
        assert!(!context.stopped());
        assert_eq!(log.stmt_rows(), 0);
    }

    #[test]
    fn test_checkpoint_recovery_skips_committed_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("insert.ckpt");
        // d0 committed through ts=1040 (rows 0..=4 of the 1000+10k series).
        std::fs::write(&path, "{\"table\":\"d0\",\"last_ts\":1040}\n").unwrap();

        let context = context(2);
        let log = MockLog::default();
        let mut config = step(10);
        config.checkpoint = CheckpointEntry {
            enabled: true,
            interval_sec: 1,
            path: Some(path.display().to_string()),
        };
        run(&context, config, &log).unwrap();

        // d0 replays only rows 1050..1090 (5), d1 all 10.
        assert_eq!(log.stmt_rows(), 15);
        assert!(context.inhibit_drop.load(Ordering::Acquire));

        // New watermarks were committed on top.
        let map = checkpoint::load(&path).unwrap();
        assert_eq!(map.get("d0"), Some(&1090));
        assert_eq!(map.get("d1"), Some(&1090));
    }

    #[test]
    fn test_warmup_and_shared_queue_modes() {
        let context = context(3);
        let log = MockLog::default();
        let mut config = step(8);
        config.shared_queue = true;
        config.queue_warmup_ratio = 0.5;
        run(&context, config, &log).unwrap();
        assert_eq!(log.stmt_rows(), 24);
    }
}
