//! Scheduling of row generators into pool blocks.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tsbench_gen::{RowGenerator, RowOutcome};

use crate::error::EngineError;
use crate::limiter::RateLimiter;
use crate::pool::{BlockGuard, MemoryPool};

/// The slice of the insert configuration the manager schedules by.
#[derive(Debug, Clone)]
pub struct GenerationSpec {
    /// Row quota per table.
    pub rows_per_table: u64,
    /// Max rows per batch block; 0 means unlimited.
    pub rows_per_batch: usize,
    /// Rows per table per round-robin turn; 0 disables interlace mode.
    pub interlace_rows: u64,
    /// Generation rate limit in rows per second; 0 disables flow control.
    pub rate_limit: u64,
}

/// One table's generation progress.
pub struct TableState {
    /// Table name.
    pub name: Arc<str>,
    /// The table's row generator.
    pub generator: RowGenerator,
    /// Rows generated so far (written + dropped).
    pub rows_generated: u64,
    /// Rows taken in the current interlace turn.
    pub interlace_counter: u64,
    /// Quota reached or generator exhausted.
    pub completed: bool,
}

/// Round-robins tables into pool blocks until every quota is met.
///
/// One manager serves one producer thread; the tables it holds are
/// disjoint from every other producer's, which is what keeps per-table
/// timestamps globally monotonic.
pub struct TableDataManager {
    pool: Arc<MemoryPool>,
    spec: GenerationSpec,
    states: Vec<TableState>,
    cursor: usize,
    active: usize,
    interlace_rows: u64,
    limiter: Option<RateLimiter>,
    total_generated: AtomicU64,
}

impl TableDataManager {
    /// Build over a table set; one generator per table.
    pub fn new(
        pool: Arc<MemoryPool>,
        spec: GenerationSpec,
        tables: Vec<(Arc<str>, RowGenerator)>,
    ) -> Result<Self, EngineError> {
        if tables.is_empty() {
            return Err(EngineError::EmptyTableList);
        }
        let interlace_rows = if spec.interlace_rows == 0 { u64::MAX } else { spec.interlace_rows };
        let limiter = (spec.rate_limit > 0).then(|| RateLimiter::new(spec.rate_limit));
        let states = tables
            .into_iter()
            .map(|(name, generator)| TableState {
                name,
                generator,
                rows_generated: 0,
                interlace_counter: 0,
                completed: false,
            })
            .collect::<Vec<_>>();
        Ok(Self {
            active: states.len(),
            pool,
            spec,
            states,
            cursor: 0,
            interlace_rows,
            limiter,
            total_generated: AtomicU64::new(0),
        })
    }

    /// Whether any table still owes rows.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.active > 0
    }

    /// Rows generated across all tables so far.
    #[must_use]
    pub fn total_rows_generated(&self) -> u64 {
        self.total_generated.load(Ordering::Relaxed)
    }

    /// Per-table progress, for checkpointing and stats.
    #[must_use]
    pub fn table_states(&self) -> &[TableState] {
        &self.states
    }

    /// Fill the next batch block.
    ///
    /// Returns `None` when no active table produced a row; the block goes
    /// straight back to the pool in that case.
    pub fn next_batch(&mut self) -> Result<Option<BlockGuard>, EngineError> {
        let batch_budget =
            if self.spec.rows_per_batch == 0 { usize::MAX } else { self.spec.rows_per_batch };

        let mut block = self.pool.acquire_block()?;
        let mut start_time = i64::MAX;
        let mut end_time = i64::MIN;
        let mut total_rows = 0usize;
        let mut table_loops = 0usize;
        let max_loops = self.states.len();

        while total_rows < batch_budget
            && self.active > 0
            && table_loops < max_loops
            && block.used_tables() < block.table_count()
        {
            let Some(idx) = self.next_active_table() else { break };
            let slot = block.used_tables();
            block.begin_table(slot, Arc::clone(&self.states[idx].name))?;

            let state = &mut self.states[idx];
            let quota_left = self.spec.rows_per_table.saturating_sub(state.rows_generated);
            let turn_left = self.interlace_rows.saturating_sub(state.interlace_counter);
            let rows_to_generate = turn_left
                .min(quota_left)
                .max(1)
                .min((batch_budget - total_rows) as u64)
                .min(block.max_rows() as u64);

            let mut wrote_in_table = 0u64;
            let mut exhausted = false;
            {
                let mut view = block.table_mut(slot)?;
                let mut produced = 0u64;
                while produced < rows_to_generate {
                    let row = view.used_rows();
                    if row >= view.max_rows() {
                        break;
                    }
                    match state.generator.generate_row_into(&mut view, row)? {
                        RowOutcome::Wrote(ts) => {
                            view.commit_row();
                            start_time = start_time.min(ts);
                            end_time = end_time.max(ts);
                            total_rows += 1;
                            wrote_in_table += 1;
                            state.rows_generated += 1;
                            state.interlace_counter += 1;
                            produced += 1;
                        }
                        RowOutcome::Dropped => {
                            state.rows_generated += 1;
                            state.interlace_counter += 1;
                            produced += 1;
                        }
                        RowOutcome::Skipped => continue,
                        RowOutcome::Exhausted => {
                            exhausted = true;
                            break;
                        }
                    }
                }
            }

            if let Some(limiter) = &self.limiter {
                if wrote_in_table > 0 {
                    limiter.acquire(wrote_in_table);
                }
            }
            if wrote_in_table > 0 {
                block.bump_used_tables();
            }

            let state = &mut self.states[idx];
            if !state.completed
                && (exhausted || state.rows_generated >= self.spec.rows_per_table)
            {
                state.completed = true;
                self.active = self.active.saturating_sub(1);
            }
            if state.completed || state.interlace_counter >= self.interlace_rows {
                self.advance_cursor();
            }
            table_loops += 1;
        }

        if total_rows == 0 {
            block.release();
            return Ok(None);
        }

        block.set_window(start_time, end_time, total_rows);
        self.total_generated.fetch_add(total_rows as u64, Ordering::Relaxed);
        Ok(Some(block))
    }

    fn next_active_table(&mut self) -> Option<usize> {
        let len = self.states.len();
        for _ in 0..len {
            let idx = self.cursor;
            let state = &self.states[idx];
            if !state.completed
                && state.rows_generated < self.spec.rows_per_table
                && state.generator.has_more()
            {
                return Some(idx);
            }
            self.cursor = (self.cursor + 1) % len;
        }
        None
    }

    fn advance_cursor(&mut self) {
        self.states[self.cursor].interlace_counter = 0;
        self.cursor = (self.cursor + 1) % self.states.len();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::pool::PoolConfig;
    use tsbench_types::schema::TimestampSpec;
    use tsbench_types::{ColumnSchema, GeneratorSpec, Value};

    fn columns() -> Vec<ColumnSchema> {
        vec![
            ColumnSchema::with_gen("seq", "int", GeneratorSpec::Order { min: 0, max: 1000 })
                .unwrap(),
        ]
    }

    fn ts_col() -> ColumnSchema {
        ColumnSchema::with_gen(
            "ts",
            "timestamp",
            GeneratorSpec::Timestamp(TimestampSpec {
                start: "1000".into(),
                precision: "ms".into(),
                step: "10".into(),
            }),
        )
        .unwrap()
    }

    fn manager(spec: GenerationSpec, table_names: &[&str], pool_tables: usize) -> TableDataManager {
        let cols = columns();
        let pool = Arc::new(MemoryPool::new(
            PoolConfig {
                block_count: 4,
                max_tables_per_block: pool_tables,
                max_rows_per_table: 8,
                tables_reuse_data: false,
                num_cached_blocks: 0,
            },
            &cols,
        ));
        let tables = table_names
            .iter()
            .map(|n| (Arc::from(*n), RowGenerator::new(&ts_col(), &cols).unwrap()))
            .collect();
        TableDataManager::new(pool, spec, tables).unwrap()
    }

    #[test]
    fn test_interlace_round_robin() {
        // Two tables, four rows each, two rows per turn: each batch holds
        // one turn of each table, twice over.
        let mut m = manager(
            GenerationSpec { rows_per_table: 4, rows_per_batch: 4, interlace_rows: 2, rate_limit: 0 },
            &["table1", "table2"],
            2,
        );

        let batch1 = m.next_batch().unwrap().unwrap();
        assert_eq!(batch1.used_tables(), 2);
        let t1 = batch1.table(0).unwrap();
        assert_eq!(t1.name(), "table1");
        assert_eq!(t1.timestamps(), &[1000, 1010]);
        let t2 = batch1.table(1).unwrap();
        assert_eq!(t2.name(), "table2");
        assert_eq!(t2.timestamps(), &[1000, 1010]);
        drop((t1, t2));
        drop(batch1);

        let batch2 = m.next_batch().unwrap().unwrap();
        let t1 = batch2.table(0).unwrap();
        assert_eq!(t1.name(), "table1");
        assert_eq!(t1.timestamps(), &[1020, 1030]);
        let t2 = batch2.table(1).unwrap();
        assert_eq!(t2.timestamps(), &[1020, 1030]);
        drop((t1, t2));
        drop(batch2);

        assert!(m.next_batch().unwrap().is_none());
        assert!(!m.has_more());
        assert_eq!(m.total_rows_generated(), 8);
    }

    #[test]
    fn test_quota_is_exact() {
        let mut m = manager(
            GenerationSpec { rows_per_table: 7, rows_per_batch: 3, interlace_rows: 0, rate_limit: 0 },
            &["t1"],
            1,
        );
        let mut rows = 0;
        let mut timestamps = Vec::new();
        while let Some(block) = m.next_batch().unwrap() {
            let t = block.table(0).unwrap();
            timestamps.extend_from_slice(t.timestamps());
            rows += block.total_rows();
        }
        assert_eq!(rows, 7);
        // No duplicates, no gaps, strictly increasing.
        assert_eq!(timestamps, vec![1000, 1010, 1020, 1030, 1040, 1050, 1060]);
    }

    #[test]
    fn test_order_values_continue_across_batches() {
        let mut m = manager(
            GenerationSpec { rows_per_table: 6, rows_per_batch: 4, interlace_rows: 0, rate_limit: 0 },
            &["t1"],
            1,
        );
        let mut values = Vec::new();
        while let Some(block) = m.next_batch().unwrap() {
            let t = block.table(0).unwrap();
            for row in 0..t.used_rows() {
                values.push(t.cell(row, 0).unwrap());
            }
        }
        assert_eq!(
            values,
            (0..6).map(Value::Int).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_block_window_metadata() {
        let mut m = manager(
            GenerationSpec { rows_per_table: 3, rows_per_batch: 0, interlace_rows: 0, rate_limit: 0 },
            &["t1"],
            1,
        );
        let block = m.next_batch().unwrap().unwrap();
        assert_eq!(block.start_time(), 1000);
        assert_eq!(block.end_time(), 1020);
        assert_eq!(block.total_rows(), 3);
    }

    #[test]
    fn test_exhausted_manager_returns_none_and_releases() {
        let mut m = manager(
            GenerationSpec { rows_per_table: 1, rows_per_batch: 0, interlace_rows: 0, rate_limit: 0 },
            &["t1"],
            1,
        );
        let (total, _, _) = m.pool.stats();
        let block = m.next_batch().unwrap().unwrap();
        drop(block);
        assert!(m.next_batch().unwrap().is_none());
        let (t, available, active) = m.pool.stats();
        assert_eq!((t, available, active), (total, total, 0));
    }
}
