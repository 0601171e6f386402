//! Serialization of a block's bind view into the stmt2 wire body.
//!
//! The websocket stmt2 execute frame carries, little-endian:
//!
//! ```text
//! u16 version (=2)
//! u32 table count
//! per table:
//!   u16 name length, name bytes
//!   u32 row count
//!   u32 column count (timestamp + data columns [+ tags])
//!   per column:
//!     u8 wire type, u8 flags (bit 0: fixed-width), u32 row count
//!     row-count null bytes
//!     fixed:    u32 data length, element bytes
//!     variable: row-count i32 lengths, u32 data length, value bytes
//! ```
//!
//! In auto-create-table mode every tag is appended as a one-row fixed or
//! variable column after the data columns.

use bytes::{BufMut, BytesMut};

use tsbench_engine::TableSlot;
use tsbench_format::InsertMode;
use tsbench_types::tag::wire;
use tsbench_types::{ColumnHandler, ColumnSchema, Value, build_handlers};

use crate::connector::StmtExec;
use crate::error::SinkError;

/// Current bind payload version.
pub const BINDV_VERSION: u16 = 2;

/// Serialize one execute's bind data.
pub fn serialize(exec: &StmtExec<'_>) -> Result<Vec<u8>, SinkError> {
    let block = exec.block;
    let mut buf = BytesMut::new();
    buf.put_u16_le(BINDV_VERSION);
    buf.put_u32_le(block.used_tables() as u32);

    let tag_handlers = (exec.batch.mode == InsertMode::AutoCreateTable)
        .then(|| build_handlers(exec.tags));

    for slot in 0..block.used_tables() {
        let table = block.table(slot).map_err(|e| SinkError::Protocol(e.to_string()))?;
        put_table(&mut buf, &table, exec, tag_handlers.as_deref())?;
    }
    Ok(buf.to_vec())
}

fn put_table(
    buf: &mut BytesMut,
    table: &TableSlot<'_>,
    exec: &StmtExec<'_>,
    tag_handlers: Option<&[ColumnHandler]>,
) -> Result<(), SinkError> {
    let rows = table.used_rows();
    let tag_count = tag_handlers.map_or(0, |_| exec.tags.len());

    let name = table.name().as_bytes();
    buf.put_u16_le(name.len() as u16);
    buf.put_slice(name);
    buf.put_u32_le(rows as u32);
    buf.put_u32_le((1 + table.column_count() + tag_count) as u32);

    // Timestamp column.
    buf.put_u8(wire::TIMESTAMP);
    buf.put_u8(1);
    buf.put_u32_le(rows as u32);
    buf.put_bytes(0, rows);
    buf.put_u32_le((rows * 8) as u32);
    for ts in table.timestamps() {
        buf.put_i64_le(*ts);
    }

    // Data columns straight out of block storage.
    for (col, schema) in exec.columns.iter().enumerate() {
        let store = table.store(col);
        buf.put_u8(schema.wire_type());
        buf.put_u8(u8::from(store.is_fixed()));
        buf.put_u32_le(rows as u32);
        buf.put_slice(store.nulls(rows));
        if store.is_fixed() {
            let data = store.fixed_bytes(rows);
            buf.put_u32_le(data.len() as u32);
            buf.put_slice(data);
        } else {
            let mut total = 0u32;
            for len in store.lengths(rows) {
                buf.put_i32_le(*len);
                total += *len as u32;
            }
            buf.put_u32_le(total);
            for row in 0..rows {
                buf.put_slice(store.var_bytes(row));
            }
        }
    }

    // Tags, one row each, in auto-create-table mode.
    if let Some(handlers) = tag_handlers {
        let tag_set = table.tags().ok_or_else(|| {
            SinkError::Protocol(format!("table {} carries no tags to bind", table.name()))
        })?;
        for ((schema, handler), value) in
            exec.tags.iter().zip(handlers).zip(&tag_set.values)
        {
            put_tag(buf, schema, handler, value)
                .map_err(|e| SinkError::Protocol(e.to_string()))?;
        }
    }
    Ok(())
}

fn put_tag(
    buf: &mut BytesMut,
    schema: &ColumnSchema,
    handler: &ColumnHandler,
    value: &Value,
) -> Result<(), tsbench_types::TypeError> {
    buf.put_u8(schema.wire_type());
    buf.put_u8(u8::from(handler.is_fixed()));
    buf.put_u32_le(1);
    buf.put_u8(u8::from(value.is_null()));
    if value.is_null() {
        buf.put_u32_le(0);
        return Ok(());
    }
    if handler.is_fixed() {
        let size = handler.meta().size;
        let mut cell = vec![0u8; size];
        handler.write_fixed(value, &mut cell)?;
        buf.put_u32_le(size as u32);
        buf.put_slice(&cell);
    } else {
        let mut cell = vec![0u8; handler.meta().max_length.max(1)];
        let written = handler.write_var(value, &mut cell)?;
        buf.put_i32_le(written as i32);
        buf.put_u32_le(written as u32);
        buf.put_slice(&cell[..written]);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tsbench_engine::{BlockGuard, MemoryPool, PoolConfig};
    use tsbench_format::StmtBatch;
    use tsbench_gen::RowWriter;

    fn columns() -> Vec<ColumnSchema> {
        vec![
            ColumnSchema::new("v", "int").unwrap(),
            ColumnSchema::new("s", "varchar(8)").unwrap(),
        ]
    }

    fn filled_pool() -> (MemoryPool, BlockGuard) {
        let cols = columns();
        let pool = MemoryPool::new(
            PoolConfig {
                block_count: 1,
                max_tables_per_block: 1,
                max_rows_per_table: 4,
                tables_reuse_data: false,
                num_cached_blocks: 0,
            },
            &cols,
        );
        let mut guard = pool.acquire_block().unwrap();
        guard.begin_table(0, Arc::from("t1")).unwrap();
        {
            let mut slot = guard.table_mut(0).unwrap();
            for r in 0..2usize {
                slot.set_timestamp(r, 100 + r as i64);
                slot.write_cell(r, 0, &Value::Int(r as i32)).unwrap();
                slot.write_cell(r, 1, &Value::VarChar("ab".into())).unwrap();
                slot.commit_row();
            }
        }
        guard.bump_used_tables();
        guard.set_window(100, 101, 2);
        (pool, guard)
    }

    #[test]
    fn test_wire_layout() {
        let cols = columns();
        let (_pool, guard) = filled_pool();
        let exec = StmtExec {
            batch: StmtBatch { mode: InsertMode::SuperTable, is_recover: false },
            block: &guard,
            columns: &cols,
            tags: &[],
        };
        let bytes = serialize(&exec).unwrap();

        // version, table count
        assert_eq!(&bytes[0..2], &2u16.to_le_bytes());
        assert_eq!(&bytes[2..6], &1u32.to_le_bytes());
        // name
        assert_eq!(&bytes[6..8], &2u16.to_le_bytes());
        assert_eq!(&bytes[8..10], b"t1");
        // rows, columns (ts + 2 data)
        assert_eq!(&bytes[10..14], &2u32.to_le_bytes());
        assert_eq!(&bytes[14..18], &3u32.to_le_bytes());
        // timestamp column header
        assert_eq!(bytes[18], wire::TIMESTAMP);
        assert_eq!(bytes[19], 1);
        // first timestamp value sits after header + nulls + length
        let ts_data = &bytes[30..38];
        assert_eq!(ts_data, &100i64.to_le_bytes());
    }

    #[test]
    fn test_tags_appended_in_auto_create_mode() {
        let cols = columns();
        let tags = vec![ColumnSchema::new("groupid", "int").unwrap()];
        let (_pool, guard) = {
            let cols = columns();
            let pool = MemoryPool::new(
                PoolConfig {
                    block_count: 1,
                    max_tables_per_block: 1,
                    max_rows_per_table: 4,
                    tables_reuse_data: false,
                    num_cached_blocks: 0,
                },
                &cols,
            );
            pool.register_table_tags("t1", vec![Value::Int(9)]);
            let mut guard = pool.acquire_block().unwrap();
            guard.begin_table(0, Arc::from("t1")).unwrap();
            {
                let mut slot = guard.table_mut(0).unwrap();
                slot.set_timestamp(0, 1);
                slot.write_cell(0, 0, &Value::Int(1)).unwrap();
                slot.write_cell(0, 1, &Value::VarChar("x".into())).unwrap();
                slot.commit_row();
            }
            guard.bump_used_tables();
            guard.set_window(1, 1, 1);
            (pool, guard)
        };

        let exec = StmtExec {
            batch: StmtBatch { mode: InsertMode::AutoCreateTable, is_recover: false },
            block: &guard,
            columns: &cols,
            tags: &tags,
        };
        let bytes = serialize(&exec).unwrap();
        // Column count includes the tag: ts + 2 data + 1 tag.
        assert_eq!(&bytes[14..18], &4u32.to_le_bytes());
        // The tag value (9 LE) appears in the tail.
        let tail = &bytes[bytes.len() - 4..];
        assert_eq!(tail, &9i32.to_le_bytes());
    }

    #[test]
    fn test_missing_tags_in_auto_create_mode_is_protocol_error() {
        let cols = columns();
        let tags = vec![ColumnSchema::new("groupid", "int").unwrap()];
        let (_pool, guard) = filled_pool();
        let exec = StmtExec {
            batch: StmtBatch { mode: InsertMode::AutoCreateTable, is_recover: false },
            block: &guard,
            columns: &cols,
            tags: &tags,
        };
        assert!(matches!(serialize(&exec), Err(SinkError::Protocol(_))));
    }
}
