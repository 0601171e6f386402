//! Engine error types.

use thiserror::Error;

/// Errors raised by the pool, manager and pipeline.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The pool was closed while a producer waited for a block.
    ///
    /// This is the termination sentinel: producers observing it exit.
    #[error("memory pool closed")]
    PoolClosed,

    /// A table slot index outside the block's capacity was addressed.
    #[error("table slot {slot} out of range (block holds {capacity})")]
    SlotOutOfRange {
        /// Requested slot.
        slot: usize,
        /// Slots per block.
        capacity: usize,
    },

    /// A row index outside the table slot's capacity was addressed.
    #[error("row {row} out of range (table holds {capacity})")]
    RowOutOfRange {
        /// Requested row.
        row: usize,
        /// Rows per table.
        capacity: usize,
    },

    /// A generator failed; configuration or contract bug.
    #[error(transparent)]
    Gen(#[from] tsbench_gen::GenError),

    /// The manager was initialized with no tables.
    #[error("table data manager initialized with an empty table list")]
    EmptyTableList,
}
