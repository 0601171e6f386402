//! The column-oriented block memory pool.
//!
//! All storage is allocated once at pool construction and recycled for the
//! whole run. A block holds up to `max_tables_per_block` table slots of
//! `max_rows_per_table` rows each: one contiguous timestamp array (stride
//! `max_rows_per_table` per slot), one contiguous region per fixed column,
//! and per variable column a contiguous data region plus parallel
//! length/offset arrays and a monotonic write offset. Per-row null flags
//! accompany every column.
//!
//! Blocks travel by value: [`MemoryPool::acquire_block`] blocks on the
//! free queue and hands out a [`BlockGuard`] whose drop returns the block
//! (and, in cached-region mode, its detached data region) exactly once.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, bounded};
use parking_lot::RwLock;

use tsbench_gen::RowWriter;
use tsbench_types::{ColumnHandler, ColumnSchema, TypeError, Value, build_handlers};

use crate::error::EngineError;

/// How often a blocked acquire re-checks the closed flag.
const ACQUIRE_POLL: Duration = Duration::from_millis(100);

/// Pool sizing parameters.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Number of blocks to pre-allocate.
    pub block_count: usize,
    /// Table slots per block.
    pub max_tables_per_block: usize,
    /// Row capacity per table slot.
    pub max_rows_per_table: usize,
    /// Map every table slot onto one shared data region. Intended for
    /// workloads that fill one table per block; slots then alias storage.
    pub tables_reuse_data: bool,
    /// When non-zero, decouple data regions from blocks: only this many
    /// regions exist and blocks borrow one for the acquire→release span.
    pub num_cached_blocks: usize,
}

/// A shared tag tuple registered per table name.
#[derive(Debug, Clone, PartialEq)]
pub struct TagSet {
    /// Tag values, one per tag column.
    pub values: Vec<Value>,
}

/// One column's storage for one table slot.
#[derive(Debug)]
pub struct ColumnStore {
    is_fixed: bool,
    element_size: usize,
    max_length: usize,
    fixed_data: Vec<u8>,
    var_data: Vec<u8>,
    lengths: Vec<i32>,
    var_offsets: Vec<usize>,
    current_offset: usize,
    is_null: Vec<u8>,
}

impl ColumnStore {
    fn new(handler: &ColumnHandler, max_rows: usize) -> Self {
        let meta = handler.meta();
        if handler.is_fixed() {
            Self {
                is_fixed: true,
                element_size: meta.size,
                max_length: meta.size,
                fixed_data: vec![0; max_rows * meta.size],
                var_data: Vec::new(),
                lengths: Vec::new(),
                var_offsets: Vec::new(),
                current_offset: 0,
                is_null: vec![0; max_rows],
            }
        } else {
            Self {
                is_fixed: false,
                element_size: 0,
                max_length: meta.max_length,
                fixed_data: Vec::new(),
                var_data: vec![0; max_rows * meta.max_length],
                lengths: vec![0; max_rows],
                var_offsets: vec![0; max_rows],
                current_offset: 0,
                is_null: vec![0; max_rows],
            }
        }
    }

    fn reset(&mut self) {
        // Data bytes are left in place; they are overwritten on reuse.
        self.current_offset = 0;
    }

    /// Whether this column is fixed-width.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.is_fixed
    }

    /// Fixed element size in bytes.
    #[must_use]
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Variable slot capacity in bytes.
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Fixed data for the first `rows` rows.
    #[must_use]
    pub fn fixed_bytes(&self, rows: usize) -> &[u8] {
        &self.fixed_data[..rows * self.element_size]
    }

    /// One row's bytes out of the variable region.
    #[must_use]
    pub fn var_bytes(&self, row: usize) -> &[u8] {
        let start = self.var_offsets[row];
        &self.var_data[start..start + self.lengths[row] as usize]
    }

    /// Byte lengths of the first `rows` variable values.
    #[must_use]
    pub fn lengths(&self, rows: usize) -> &[i32] {
        &self.lengths[..rows]
    }

    /// Null flags of the first `rows` rows.
    #[must_use]
    pub fn nulls(&self, rows: usize) -> &[u8] {
        &self.is_null[..rows]
    }
}

#[derive(Debug)]
struct DataRegion {
    /// `[storage_slot][column]`
    slots: Vec<Vec<ColumnStore>>,
}

impl DataRegion {
    fn new(handlers: &[ColumnHandler], storage_slots: usize, max_rows: usize) -> Self {
        let slots = (0..storage_slots)
            .map(|_| handlers.iter().map(|h| ColumnStore::new(h, max_rows)).collect())
            .collect();
        Self { slots }
    }

    fn reset(&mut self) {
        for slot in &mut self.slots {
            for col in slot {
                col.reset();
            }
        }
    }
}

#[derive(Debug)]
struct TableMeta {
    name: Arc<str>,
    used_rows: usize,
    tags: Option<Arc<TagSet>>,
}

impl Default for TableMeta {
    fn default() -> Self {
        Self { name: Arc::from(""), used_rows: 0, tags: None }
    }
}

/// One pre-allocated batch buffer.
#[derive(Debug)]
pub struct MemoryBlock {
    timestamps: Vec<i64>,
    tables: Vec<TableMeta>,
    used_tables: usize,
    start_time: i64,
    end_time: i64,
    total_rows: usize,
    region: Option<DataRegion>,
    max_rows: usize,
    reuse_data: bool,
}

impl MemoryBlock {
    fn new(config: &PoolConfig, region: Option<DataRegion>) -> Self {
        let mut tables = Vec::with_capacity(config.max_tables_per_block);
        tables.resize_with(config.max_tables_per_block, TableMeta::default);
        Self {
            timestamps: vec![0; config.max_tables_per_block * config.max_rows_per_table],
            tables,
            used_tables: 0,
            start_time: i64::MAX,
            end_time: i64::MIN,
            total_rows: 0,
            region,
            max_rows: config.max_rows_per_table,
            reuse_data: config.tables_reuse_data,
        }
    }

    fn storage_index(&self, slot: usize) -> usize {
        if self.reuse_data { 0 } else { slot }
    }

    fn reset(&mut self) {
        self.used_tables = 0;
        self.start_time = i64::MAX;
        self.end_time = i64::MIN;
        self.total_rows = 0;
        for meta in &mut self.tables {
            meta.used_rows = 0;
            meta.tags = None;
        }
        if let Some(region) = &mut self.region {
            region.reset();
        }
    }
}

/// Mutable view of one table slot; the row generator's write target.
pub struct TableSlotMut<'a> {
    meta: &'a mut TableMeta,
    timestamps: &'a mut [i64],
    columns: &'a mut [ColumnStore],
    handlers: &'a [ColumnHandler],
}

impl TableSlotMut<'_> {
    /// Rows committed so far.
    #[must_use]
    pub fn used_rows(&self) -> usize {
        self.meta.used_rows
    }

    /// Row capacity of the slot.
    #[must_use]
    pub fn max_rows(&self) -> usize {
        self.timestamps.len()
    }

    /// Commit the row most recently written at index [`Self::used_rows`].
    pub fn commit_row(&mut self) {
        self.meta.used_rows += 1;
    }
}

impl RowWriter for TableSlotMut<'_> {
    fn set_timestamp(&mut self, row: usize, ts: i64) {
        self.timestamps[row] = ts;
    }

    fn write_cell(&mut self, row: usize, col: usize, value: &Value) -> Result<(), TypeError> {
        let store = &mut self.columns[col];
        let handler = &self.handlers[col];
        store.is_null[row] = 0;
        if store.is_fixed {
            let start = row * store.element_size;
            handler.write_fixed(value, &mut store.fixed_data[start..start + store.element_size])
        } else {
            let start = store.current_offset.min(store.var_data.len());
            let end = (start + store.max_length).min(store.var_data.len());
            let written = handler.write_var(value, &mut store.var_data[start..end])?;
            store.lengths[row] = written as i32;
            store.var_offsets[row] = start;
            store.current_offset += written;
            Ok(())
        }
    }

    fn set_null(&mut self, row: usize, col: usize) {
        self.columns[col].is_null[row] = 1;
    }
}

/// Read view of one filled table slot; the formatter's input.
pub struct TableSlot<'a> {
    meta: &'a TableMeta,
    timestamps: &'a [i64],
    columns: &'a [ColumnStore],
    handlers: &'a [ColumnHandler],
}

impl TableSlot<'_> {
    /// Table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.meta.name
    }

    /// Rows written into the slot.
    #[must_use]
    pub fn used_rows(&self) -> usize {
        self.meta.used_rows
    }

    /// The slot's shared tag tuple, if one was registered.
    #[must_use]
    pub fn tags(&self) -> Option<&TagSet> {
        self.meta.tags.as_deref()
    }

    /// Timestamps of the written rows.
    #[must_use]
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps[..self.meta.used_rows]
    }

    /// Number of data columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Raw storage of one column.
    #[must_use]
    pub fn store(&self, col: usize) -> &ColumnStore {
        &self.columns[col]
    }

    /// Whether a cell is NULL.
    #[must_use]
    pub fn is_null(&self, row: usize, col: usize) -> bool {
        self.columns[col].is_null[row] != 0
    }

    /// Read one cell back out of column storage.
    pub fn cell(&self, row: usize, col: usize) -> Result<Value, EngineError> {
        if row >= self.meta.used_rows {
            return Err(EngineError::RowOutOfRange { row, capacity: self.meta.used_rows });
        }
        let store = &self.columns[col];
        if store.is_null[row] != 0 {
            return Ok(Value::Null);
        }
        let handler = &self.handlers[col];
        if store.is_fixed {
            let start = row * store.element_size;
            Ok(handler.read_fixed(&store.fixed_data[start..start + store.element_size]))
        } else {
            Ok(handler.read_var(store.var_bytes(row)))
        }
    }
}

struct PoolShared {
    handlers: Vec<ColumnHandler>,
    free_tx: Sender<MemoryBlock>,
    free_rx: Receiver<MemoryBlock>,
    region_tx: Option<Sender<DataRegion>>,
    region_rx: Option<Receiver<DataRegion>>,
    tags: RwLock<std::collections::HashMap<String, Arc<TagSet>>>,
    block_count: usize,
    active: AtomicUsize,
    closed: AtomicBool,
}

/// The block pool.
pub struct MemoryPool {
    shared: Arc<PoolShared>,
}

impl MemoryPool {
    /// Allocate every block (and, in cached mode, every data region) up
    /// front. Allocation failure aborts the process; there is no partial
    /// construction.
    #[must_use]
    pub fn new(config: PoolConfig, columns: &[ColumnSchema]) -> Self {
        let handlers = build_handlers(columns);
        let storage_slots =
            if config.tables_reuse_data { 1 } else { config.max_tables_per_block };

        let (free_tx, free_rx) = bounded(config.block_count);
        let cached = config.num_cached_blocks.min(config.block_count);
        let (region_tx, region_rx) = if cached > 0 {
            let (tx, rx) = bounded(cached);
            for _ in 0..cached {
                let region =
                    DataRegion::new(&handlers, storage_slots, config.max_rows_per_table);
                // Channel capacity equals the region count.
                let _ = tx.send(region);
            }
            (Some(tx), Some(rx))
        } else {
            (None, None)
        };

        for _ in 0..config.block_count {
            let region = if cached > 0 {
                None
            } else {
                Some(DataRegion::new(&handlers, storage_slots, config.max_rows_per_table))
            };
            // Channel capacity equals the block count.
            let _ = free_tx.send(MemoryBlock::new(&config, region));
        }

        tracing::debug!(
            blocks = config.block_count,
            tables_per_block = config.max_tables_per_block,
            rows_per_table = config.max_rows_per_table,
            cached_regions = cached,
            "memory pool allocated"
        );

        Self {
            shared: Arc::new(PoolShared {
                handlers,
                free_tx,
                free_rx,
                region_tx,
                region_rx,
                tags: RwLock::new(std::collections::HashMap::new()),
                block_count: config.block_count,
                active: AtomicUsize::new(0),
                closed: AtomicBool::new(false),
            }),
        }
    }

    /// The per-column converter table.
    #[must_use]
    pub fn handlers(&self) -> &[ColumnHandler] {
        &self.shared.handlers
    }

    /// Take a free block, blocking until one is available.
    ///
    /// Returns [`EngineError::PoolClosed`] once [`Self::close`] was called,
    /// so blocked producers can exit.
    pub fn acquire_block(&self) -> Result<BlockGuard, EngineError> {
        loop {
            if self.shared.closed.load(Ordering::Acquire) {
                return Err(EngineError::PoolClosed);
            }
            match self.shared.free_rx.recv_timeout(ACQUIRE_POLL) {
                Ok(mut block) => {
                    block.reset();
                    if block.region.is_none() {
                        if let Some(rx) = &self.shared.region_rx {
                            match rx.recv_timeout(ACQUIRE_POLL) {
                                Ok(mut region) => {
                                    region.reset();
                                    block.region = Some(region);
                                }
                                Err(_) => {
                                    // No region free yet; requeue and retry.
                                    let _ = self.shared.free_tx.send(block);
                                    continue;
                                }
                            }
                        }
                    }
                    self.shared.active.fetch_add(1, Ordering::AcqRel);
                    return Ok(BlockGuard { block: Some(block), shared: Arc::clone(&self.shared) });
                }
                Err(_) => continue,
            }
        }
    }

    /// Mark the pool closed; subsequent (and blocked) acquires fail with
    /// [`EngineError::PoolClosed`]. Idempotent.
    pub fn close(&self) {
        self.shared.closed.store(true, Ordering::Release);
    }

    /// Register (or replace) the shared tag tuple for a table.
    pub fn register_table_tags(&self, table: &str, values: Vec<Value>) -> Arc<TagSet> {
        let set = Arc::new(TagSet { values });
        self.shared.tags.write().insert(table.to_owned(), Arc::clone(&set));
        set
    }

    /// Look up a table's registered tag tuple.
    #[must_use]
    pub fn table_tags(&self, table: &str) -> Option<Arc<TagSet>> {
        self.shared.tags.read().get(table).cloned()
    }

    /// `(total, available, active)` block counts.
    #[must_use]
    pub fn stats(&self) -> (usize, usize, usize) {
        (
            self.shared.block_count,
            self.shared.free_rx.len(),
            self.shared.active.load(Ordering::Acquire),
        )
    }
}

/// Exclusive ownership of one in-flight block.
///
/// Dropping the guard returns the block to the pool exactly once; in
/// cached-region mode the data region detaches first so another block can
/// borrow it.
pub struct BlockGuard {
    block: Option<MemoryBlock>,
    shared: Arc<PoolShared>,
}

impl BlockGuard {
    fn block(&self) -> &MemoryBlock {
        #[allow(clippy::unwrap_used)] // Some until drop by construction
        let block = self.block.as_ref().unwrap();
        block
    }

    fn block_mut(&mut self) -> &mut MemoryBlock {
        #[allow(clippy::unwrap_used)] // Some until drop by construction
        let block = self.block.as_mut().unwrap();
        block
    }

    /// Table slots per block.
    #[must_use]
    pub fn table_count(&self) -> usize {
        self.block().tables.len()
    }

    /// Row capacity per table slot.
    #[must_use]
    pub fn max_rows(&self) -> usize {
        self.block().max_rows
    }

    /// Table slots holding data.
    #[must_use]
    pub fn used_tables(&self) -> usize {
        self.block().used_tables
    }

    /// Mark one more table slot as used.
    pub fn bump_used_tables(&mut self) {
        self.block_mut().used_tables += 1;
    }

    /// Smallest timestamp in the block.
    #[must_use]
    pub fn start_time(&self) -> i64 {
        self.block().start_time
    }

    /// Largest timestamp in the block.
    #[must_use]
    pub fn end_time(&self) -> i64 {
        self.block().end_time
    }

    /// Total rows across all used tables.
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.block().total_rows
    }

    /// Record the block's time window and row total after filling.
    pub fn set_window(&mut self, start_time: i64, end_time: i64, total_rows: usize) {
        let block = self.block_mut();
        block.start_time = start_time;
        block.end_time = end_time;
        block.total_rows = total_rows;
    }

    /// Assign a table name (and its registered tags) to a slot before
    /// writing rows into it.
    pub fn begin_table(&mut self, slot: usize, name: Arc<str>) -> Result<(), EngineError> {
        let tags = self.shared.tags.read().get(name.as_ref()).cloned();
        let block = self.block_mut();
        let capacity = block.tables.len();
        let meta = block
            .tables
            .get_mut(slot)
            .ok_or(EngineError::SlotOutOfRange { slot, capacity })?;
        meta.name = name;
        meta.used_rows = 0;
        meta.tags = tags;
        if block.reuse_data {
            // Aliased slots restart at offset zero, like separate slots do.
            if let Some(region) = &mut block.region {
                for col in &mut region.slots[0] {
                    col.reset();
                }
            }
        }
        Ok(())
    }

    /// Mutable view of a table slot for row generation.
    pub fn table_mut(&mut self, slot: usize) -> Result<TableSlotMut<'_>, EngineError> {
        let handlers = &self.shared.handlers;
        #[allow(clippy::unwrap_used)] // Some until drop by construction
        let block = self.block.as_mut().unwrap();
        let capacity = block.tables.len();
        if slot >= capacity {
            return Err(EngineError::SlotOutOfRange { slot, capacity });
        }
        let storage = block.storage_index(slot);
        let max_rows = block.max_rows;
        let ts_start = slot * max_rows;
        #[allow(clippy::unwrap_used)] // region attached while guard is live
        let region = block.region.as_mut().unwrap();
        Ok(TableSlotMut {
            meta: &mut block.tables[slot],
            timestamps: &mut block.timestamps[ts_start..ts_start + max_rows],
            columns: &mut region.slots[storage],
            handlers,
        })
    }

    /// Read view of a filled table slot.
    pub fn table(&self, slot: usize) -> Result<TableSlot<'_>, EngineError> {
        let handlers = &self.shared.handlers;
        let block = self.block();
        let capacity = block.tables.len();
        if slot >= capacity {
            return Err(EngineError::SlotOutOfRange { slot, capacity });
        }
        let storage = block.storage_index(slot);
        let max_rows = block.max_rows;
        let ts_start = slot * max_rows;
        #[allow(clippy::unwrap_used)] // region attached while guard is live
        let region = block.region.as_ref().unwrap();
        Ok(TableSlot {
            meta: &block.tables[slot],
            timestamps: &block.timestamps[ts_start..ts_start + max_rows],
            columns: &region.slots[storage],
            handlers,
        })
    }

    /// The converter table, for serializers walking the raw storage.
    #[must_use]
    pub fn handlers(&self) -> &[ColumnHandler] {
        &self.shared.handlers
    }

    /// Return the block to the pool now instead of at scope end.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for BlockGuard {
    fn drop(&mut self) {
        if let Some(mut block) = self.block.take() {
            if let Some(tx) = &self.shared.region_tx {
                if let Some(region) = block.region.take() {
                    // Capacity equals the region count.
                    let _ = tx.send(region);
                }
            }
            self.shared.active.fetch_sub(1, Ordering::AcqRel);
            // Capacity equals the block count.
            let _ = self.shared.free_tx.send(block);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn columns() -> Vec<ColumnSchema> {
        vec![
            ColumnSchema::new("f1", "float").unwrap(),
            ColumnSchema::new("note", "varchar(8)").unwrap(),
        ]
    }

    fn pool(block_count: usize) -> MemoryPool {
        MemoryPool::new(
            PoolConfig {
                block_count,
                max_tables_per_block: 2,
                max_rows_per_table: 4,
                tables_reuse_data: false,
                num_cached_blocks: 0,
            },
            &columns(),
        )
    }

    fn fill_row(slot: &mut TableSlotMut<'_>, ts: i64, f: f32, s: &str) {
        let row = slot.used_rows();
        slot.set_timestamp(row, ts);
        slot.write_cell(row, 0, &Value::Float(f)).unwrap();
        slot.write_cell(row, 1, &Value::VarChar(s.into())).unwrap();
        slot.commit_row();
    }

    #[test]
    fn test_acquire_release_accounting() {
        let pool = pool(2);
        assert_eq!(pool.stats(), (2, 2, 0));
        let a = pool.acquire_block().unwrap();
        let b = pool.acquire_block().unwrap();
        assert_eq!(pool.stats(), (2, 0, 2));
        drop(a);
        assert_eq!(pool.stats(), (2, 1, 1));
        b.release();
        assert_eq!(pool.stats(), (2, 2, 0));
    }

    #[test]
    fn test_write_and_read_back() {
        let pool = pool(1);
        let mut guard = pool.acquire_block().unwrap();
        guard.begin_table(0, Arc::from("t1")).unwrap();
        {
            let mut slot = guard.table_mut(0).unwrap();
            fill_row(&mut slot, 1000, 1.5, "aa");
            fill_row(&mut slot, 1010, 2.5, "bbb");
        }
        guard.bump_used_tables();

        let slot = guard.table(0).unwrap();
        assert_eq!(slot.name(), "t1");
        assert_eq!(slot.used_rows(), 2);
        assert_eq!(slot.timestamps(), &[1000, 1010]);
        assert_eq!(slot.cell(0, 0).unwrap(), Value::Float(1.5));
        assert_eq!(slot.cell(1, 1).unwrap(), Value::VarChar("bbb".into()));
        // Variable offsets are packed back to back.
        assert_eq!(slot.store(1).lengths(2), &[2, 3]);
        assert_eq!(slot.store(1).var_bytes(1), b"bbb");
    }

    #[test]
    fn test_reset_between_uses() {
        let pool = pool(1);
        {
            let mut guard = pool.acquire_block().unwrap();
            guard.begin_table(0, Arc::from("t1")).unwrap();
            let mut slot = guard.table_mut(0).unwrap();
            fill_row(&mut slot, 1, 1.0, "xxxx");
        }
        let mut guard = pool.acquire_block().unwrap();
        guard.begin_table(0, Arc::from("t2")).unwrap();
        let mut slot = guard.table_mut(0).unwrap();
        assert_eq!(slot.used_rows(), 0);
        fill_row(&mut slot, 2, 2.0, "y");
        drop(slot);
        let read = guard.table(0).unwrap();
        // The variable offset restarted at zero after reset.
        assert_eq!(read.store(1).var_bytes(0), b"y");
    }

    #[test]
    fn test_null_flags() {
        let pool = pool(1);
        let mut guard = pool.acquire_block().unwrap();
        guard.begin_table(0, Arc::from("t1")).unwrap();
        {
            let mut slot = guard.table_mut(0).unwrap();
            slot.set_timestamp(0, 5);
            slot.write_cell(0, 0, &Value::Float(1.0)).unwrap();
            slot.set_null(0, 1);
            slot.commit_row();
        }
        let slot = guard.table(0).unwrap();
        assert!(!slot.is_null(0, 0));
        assert!(slot.is_null(0, 1));
        assert_eq!(slot.cell(0, 1).unwrap(), Value::Null);
    }

    #[test]
    fn test_close_unblocks_acquire() {
        let pool = pool(1);
        let _held = pool.acquire_block().unwrap();
        pool.close();
        assert!(matches!(pool.acquire_block(), Err(EngineError::PoolClosed)));
    }

    #[test]
    fn test_cached_regions_are_shared() {
        let pool = MemoryPool::new(
            PoolConfig {
                block_count: 3,
                max_tables_per_block: 1,
                max_rows_per_table: 2,
                tables_reuse_data: false,
                num_cached_blocks: 1,
            },
            &columns(),
        );
        // Only one region exists: with one block holding it, the next
        // acquire must wait until the first is released.
        let first = pool.acquire_block().unwrap();
        let handle = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(150));
            drop(first);
        });
        let second = pool.acquire_block().unwrap();
        assert_eq!(second.table_count(), 1);
        handle.join().unwrap();
    }

    #[test]
    fn test_tables_reuse_data_maps_to_slot_zero() {
        let pool = MemoryPool::new(
            PoolConfig {
                block_count: 1,
                max_tables_per_block: 4,
                max_rows_per_table: 2,
                tables_reuse_data: true,
                num_cached_blocks: 0,
            },
            &columns(),
        );
        let mut guard = pool.acquire_block().unwrap();
        guard.begin_table(0, Arc::from("a")).unwrap();
        {
            let mut slot = guard.table_mut(0).unwrap();
            fill_row(&mut slot, 1, 1.0, "aa");
        }
        // Slot 1 aliases the same storage region.
        guard.begin_table(1, Arc::from("b")).unwrap();
        {
            let mut slot = guard.table_mut(1).unwrap();
            fill_row(&mut slot, 2, 2.0, "bb");
        }
        let read = guard.table(0).unwrap();
        assert_eq!(read.cell(0, 0).unwrap(), Value::Float(2.0));
    }

    #[test]
    fn test_tag_registry() {
        let pool = pool(1);
        pool.register_table_tags("t1", vec![Value::Int(7)]);
        let mut guard = pool.acquire_block().unwrap();
        guard.begin_table(0, Arc::from("t1")).unwrap();
        let slot = guard.table(0).unwrap();
        assert_eq!(slot.tags().unwrap().values, vec![Value::Int(7)]);
        assert!(pool.table_tags("missing").is_none());
    }
}
