//! The sink-bound artifact a formatter produces.

use tsbench_engine::BlockGuard;

/// How prepared-statement inserts address tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertMode {
    /// `INSERT INTO ? VALUES(...)` — one bind per table per batch.
    SubTable,
    /// `INSERT INTO db.stb(tbname,ts,...) VALUES(...)` — one prepare,
    /// many tables per batch.
    SuperTable,
    /// `INSERT INTO ? USING db.stb TAGS(...) VALUES(...)` — binds tags
    /// alongside rows.
    AutoCreateTable,
}

/// One sink message: routing data plus an opaque payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Topic (MQTT) or destination topic (Kafka).
    pub topic: String,
    /// Partition key bytes (Kafka); empty for MQTT.
    pub key: Vec<u8>,
    /// Serialized payload.
    pub payload: Vec<u8>,
}

/// Messages published together in one sink call.
pub type MessageBatch = Vec<Message>;

/// Prepared-statement batch descriptor.
///
/// The bind data itself stays in the block; the sink serializes the wire
/// body straight from block storage when it executes the batch.
#[derive(Debug, Clone, Copy)]
pub struct StmtBatch {
    /// Insert mode decided at prepare time.
    pub mode: InsertMode,
    /// Set when replaying after checkpoint recovery.
    pub is_recover: bool,
}

/// Typed payload of an insert batch.
pub enum InsertPayload {
    /// SQL INSERT text.
    Sql(String),
    /// Prepared-statement bind batch over the block.
    Stmt(StmtBatch),
    /// Message batches for MQTT/Kafka.
    Messages(Vec<MessageBatch>),
}

/// An insert batch in flight: payload plus the block it came from.
///
/// The block is released when this value drops, exactly once.
pub struct InsertData {
    /// Smallest timestamp in the batch.
    pub start_time: i64,
    /// Largest timestamp in the batch.
    pub end_time: i64,
    /// Rows in the batch.
    pub total_rows: usize,
    /// The sink payload.
    pub payload: InsertPayload,
    block: BlockGuard,
}

impl InsertData {
    /// Wrap a filled block with its payload.
    #[must_use]
    pub fn new(block: BlockGuard, payload: InsertPayload) -> Self {
        Self {
            start_time: block.start_time(),
            end_time: block.end_time(),
            total_rows: block.total_rows(),
            payload,
            block,
        }
    }

    /// The underlying block, for payloads serialized at execute time.
    #[must_use]
    pub fn block(&self) -> &BlockGuard {
        &self.block
    }

    /// Largest timestamp per table, for checkpoint commits.
    #[must_use]
    pub fn table_watermarks(&self) -> Vec<(String, i64)> {
        let mut out = Vec::with_capacity(self.block.used_tables());
        for slot in 0..self.block.used_tables() {
            if let Ok(table) = self.block.table(slot) {
                if let Some(last) = table.timestamps().last() {
                    out.push((table.name().to_owned(), *last));
                }
            }
        }
        out
    }
}

/// What a formatter hands to the pipeline.
pub enum FormatResult {
    /// Nothing to write (empty block).
    Ignored,
    /// DDL statements.
    StatementList(Vec<String>),
    /// An insert batch owning its block.
    Insert(InsertData),
}

impl FormatResult {
    /// Rows carried by this result.
    #[must_use]
    pub fn total_rows(&self) -> usize {
        match self {
            Self::Insert(data) => data.total_rows,
            _ => 0,
        }
    }
}
