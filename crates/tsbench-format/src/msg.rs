//! Block → message batches (MQTT / Kafka).

use std::io::Write;

use tsbench_engine::BlockGuard;
use tsbench_types::ColumnSchema;

use crate::error::FormatError;
use crate::pattern::{KeyGenerator, PatternGenerator};
use crate::registry::{InsertFormatter, MsgContent, MsgOptions, Prepared};
use crate::result::{FormatResult, InsertData, InsertMode, InsertPayload, Message};
use crate::row_serializer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Compression {
    None,
    Gzip,
    Zstd,
}

impl Compression {
    fn parse(name: &str) -> Result<Self, FormatError> {
        match name {
            "" | "none" => Ok(Self::None),
            "gzip" => Ok(Self::Gzip),
            "zstd" => Ok(Self::Zstd),
            other => Err(FormatError::UnsupportedCompression(other.to_owned())),
        }
    }

    fn apply(self, payload: Vec<u8>) -> Result<Vec<u8>, FormatError> {
        match self {
            Self::None => Ok(payload),
            Self::Gzip => {
                let mut encoder =
                    flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
                encoder.write_all(&payload)?;
                Ok(encoder.finish()?)
            }
            Self::Zstd => Ok(zstd::encode_all(payload.as_slice(), 0)?),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Utf8,
    Gbk,
    Gb18030,
    Big5,
}

impl Encoding {
    fn parse(name: &str) -> Result<Self, FormatError> {
        match name {
            "" | "NONE" | "UTF-8" => Ok(Self::Utf8),
            "GBK" => Ok(Self::Gbk),
            "GB18030" => Ok(Self::Gb18030),
            "BIG5" => Ok(Self::Big5),
            other => Err(FormatError::UnsupportedEncoding(other.to_owned())),
        }
    }

    fn apply(self, payload: String) -> Vec<u8> {
        let encoding = match self {
            Self::Utf8 => return payload.into_bytes(),
            Self::Gbk => encoding_rs::GBK,
            Self::Gb18030 => encoding_rs::GB18030,
            Self::Big5 => encoding_rs::BIG5,
        };
        let (encoded, _, _) = encoding.encode(&payload);
        encoded.into_owned()
    }
}

/// Serializes rows to JSON or influx line protocol and groups them into
/// routed messages.
#[derive(Debug)]
pub struct MsgFormatter {
    opts: MsgOptions,
    with_keys: bool,
    compression: Compression,
    encoding: Encoding,
    topic: Option<PatternGenerator>,
    key: Option<KeyGenerator>,
}

impl MsgFormatter {
    /// Create from message options; `with_keys` enables the Kafka
    /// partition-key path.
    pub fn new(opts: &MsgOptions, with_keys: bool) -> Result<Self, FormatError> {
        Ok(Self {
            opts: opts.clone(),
            with_keys,
            compression: Compression::parse(&opts.compression)?,
            encoding: Encoding::parse(&opts.encoding)?,
            topic: None,
            key: None,
        })
    }
}

impl InsertFormatter for MsgFormatter {
    fn prepare(
        &mut self,
        columns: &[ColumnSchema],
        tags: &[ColumnSchema],
    ) -> Result<Prepared, FormatError> {
        self.topic = Some(PatternGenerator::new(&self.opts.topic, columns, tags));
        if self.with_keys {
            if let Some(pattern) = &self.opts.key_pattern {
                self.key = Some(KeyGenerator::new(
                    pattern,
                    &self.opts.key_serializer,
                    columns,
                    tags,
                )?);
            }
        }
        Ok(Prepared { sql: None, mode: InsertMode::SubTable })
    }

    fn format(
        &self,
        block: BlockGuard,
        columns: &[ColumnSchema],
        tags: &[ColumnSchema],
        _is_recover: bool,
    ) -> Result<FormatResult, FormatError> {
        if block.total_rows() == 0 {
            return Ok(FormatResult::Ignored);
        }
        let Some(topic_gen) = &self.topic else {
            // prepare() was skipped; a bare default still routes somewhere.
            return Err(FormatError::UnknownFormatter("msg formatter not prepared".to_owned()));
        };

        let per_message = self.opts.records_per_message.max(1);
        let mut messages = Vec::new();

        for slot in 0..block.used_tables() {
            let table = block.table(slot)?;
            let mut row = 0;
            while row < table.used_rows() {
                let take = per_message.min(table.used_rows() - row);
                let topic = topic_gen.generate(&table, row);
                let key = match &self.key {
                    Some(key_gen) => key_gen.generate(&table, row)?,
                    None => Vec::new(),
                };

                let body = match self.opts.content {
                    MsgContent::Json => {
                        if take == 1 {
                            let map = row_serializer::to_json(
                                columns,
                                tags,
                                &table,
                                row,
                                &self.opts.tbname_key,
                            )?;
                            serde_json::Value::Object(map).to_string()
                        } else {
                            let rows = (row..row + take)
                                .map(|r| {
                                    row_serializer::to_json(
                                        columns,
                                        tags,
                                        &table,
                                        r,
                                        &self.opts.tbname_key,
                                    )
                                    .map(serde_json::Value::Object)
                                })
                                .collect::<Result<Vec<_>, _>>()?;
                            serde_json::Value::Array(rows).to_string()
                        }
                    }
                    MsgContent::Influx => {
                        let mut lines = String::new();
                        for r in row..row + take {
                            if r > row {
                                lines.push('\n');
                            }
                            row_serializer::to_influx(columns, tags, &table, r, &mut lines)?;
                        }
                        lines
                    }
                };

                let payload = self.compression.apply(self.encoding.apply(body))?;
                messages.push(Message { topic, key, payload });
                row += take;
            }
        }

        Ok(FormatResult::Insert(InsertData::new(
            block,
            InsertPayload::Messages(vec![messages]),
        )))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tsbench_engine::{MemoryPool, PoolConfig};
    use tsbench_gen::RowWriter;
    use tsbench_types::Value;

    fn columns() -> Vec<ColumnSchema> {
        vec![
            ColumnSchema::new("temp", "float").unwrap(),
            ColumnSchema::new("sensor", "int").unwrap(),
        ]
    }

    fn filled_block(pool: &MemoryPool, rows: usize) -> BlockGuard {
        let mut guard = pool.acquire_block().unwrap();
        guard.begin_table(0, Arc::from("t1")).unwrap();
        {
            let mut slot = guard.table_mut(0).unwrap();
            for r in 0..rows {
                slot.set_timestamp(r, 1000 + r as i64);
                slot.write_cell(r, 0, &Value::Float(20.0 + r as f32)).unwrap();
                slot.write_cell(r, 1, &Value::Int(r as i32)).unwrap();
                slot.commit_row();
            }
        }
        guard.bump_used_tables();
        guard.set_window(1000, 1000 + rows as i64 - 1, rows);
        guard
    }

    fn pool() -> MemoryPool {
        MemoryPool::new(
            PoolConfig {
                block_count: 4,
                max_tables_per_block: 1,
                max_rows_per_table: 16,
                tables_reuse_data: false,
                num_cached_blocks: 0,
            },
            &columns(),
        )
    }

    fn messages_of(result: FormatResult) -> Vec<Message> {
        match result {
            FormatResult::Insert(data) => match &data.payload {
                InsertPayload::Messages(batches) => batches.concat(),
                _ => panic!("expected message payload"),
            },
            _ => panic!("expected insert result"),
        }
    }

    #[test]
    fn test_one_message_per_row() {
        let pool = pool();
        let mut formatter = MsgFormatter::new(&MsgOptions::default(), false).unwrap();
        formatter.prepare(&columns(), &[]).unwrap();

        let result = formatter.format(filled_block(&pool, 3), &columns(), &[], false).unwrap();
        let messages = messages_of(result);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].topic, "tsbench/t1");
        let body: serde_json::Value = serde_json::from_slice(&messages[0].payload).unwrap();
        assert_eq!(body["table"], "t1");
        assert_eq!(body["ts"], 1000);
        assert_eq!(body["sensor"], 0);
    }

    #[test]
    fn test_records_per_message_grouping() {
        let pool = pool();
        let opts = MsgOptions { records_per_message: 2, ..MsgOptions::default() };
        let mut formatter = MsgFormatter::new(&opts, false).unwrap();
        formatter.prepare(&columns(), &[]).unwrap();

        let result = formatter.format(filled_block(&pool, 5), &columns(), &[], false).unwrap();
        let messages = messages_of(result);
        // 2 + 2 + 1: one trailing message at end-of-block.
        assert_eq!(messages.len(), 3);
        let body: serde_json::Value = serde_json::from_slice(&messages[0].payload).unwrap();
        assert_eq!(body.as_array().unwrap().len(), 2);
        let last: serde_json::Value = serde_json::from_slice(&messages[2].payload).unwrap();
        assert_eq!(last.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_records_per_message_larger_than_block() {
        let pool = pool();
        let opts = MsgOptions { records_per_message: 100, ..MsgOptions::default() };
        let mut formatter = MsgFormatter::new(&opts, false).unwrap();
        formatter.prepare(&columns(), &[]).unwrap();

        let result = formatter.format(filled_block(&pool, 4), &columns(), &[], false).unwrap();
        let messages = messages_of(result);
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_kafka_keys_attached() {
        let pool = pool();
        let opts = MsgOptions {
            key_pattern: Some("{sensor}".to_owned()),
            key_serializer: "int32".to_owned(),
            ..MsgOptions::default()
        };
        let mut formatter = MsgFormatter::new(&opts, true).unwrap();
        formatter.prepare(&columns(), &[]).unwrap();

        let result = formatter.format(filled_block(&pool, 2), &columns(), &[], false).unwrap();
        let messages = messages_of(result);
        assert_eq!(messages[0].key, vec![0, 0, 0, 0]);
        assert_eq!(messages[1].key, vec![0, 0, 0, 1]);
    }

    #[test]
    fn test_influx_content() {
        let pool = pool();
        let opts = MsgOptions { content: MsgContent::Influx, ..MsgOptions::default() };
        let mut formatter = MsgFormatter::new(&opts, false).unwrap();
        formatter.prepare(&columns(), &[]).unwrap();

        let result = formatter.format(filled_block(&pool, 1), &columns(), &[], false).unwrap();
        let messages = messages_of(result);
        assert_eq!(
            String::from_utf8(messages[0].payload.clone()).unwrap(),
            "t1 temp=20,sensor=0i 1000"
        );
    }

    #[test]
    fn test_zstd_roundtrip() {
        let pool = pool();
        let opts = MsgOptions { compression: "zstd".to_owned(), ..MsgOptions::default() };
        let mut formatter = MsgFormatter::new(&opts, false).unwrap();
        formatter.prepare(&columns(), &[]).unwrap();

        let result = formatter.format(filled_block(&pool, 1), &columns(), &[], false).unwrap();
        let messages = messages_of(result);
        let decoded = zstd::decode_all(messages[0].payload.as_slice()).unwrap();
        let body: serde_json::Value = serde_json::from_slice(&decoded).unwrap();
        assert_eq!(body["ts"], 1000);
    }

    #[test]
    fn test_unsupported_compression_rejected() {
        let opts = MsgOptions { compression: "lz4".to_owned(), ..MsgOptions::default() };
        assert!(matches!(
            MsgFormatter::new(&opts, false),
            Err(FormatError::UnsupportedCompression(_))
        ));
    }
}
