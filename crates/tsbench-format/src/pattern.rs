//! Topic and key pattern templating.
//!
//! Patterns interpolate `{placeholder}` tokens against one block row:
//! `{table}` and `{ts}` are built in, any other name resolves to a data
//! column or tag of that name.

use std::sync::LazyLock;

use regex::Regex;

use tsbench_engine::TableSlot;
use tsbench_types::ColumnSchema;

use crate::error::FormatError;

#[allow(clippy::unwrap_used)] // literal pattern
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Text(String),
    Placeholder(String),
}

/// A compiled `{placeholder}` template.
#[derive(Debug, Clone)]
pub struct PatternGenerator {
    tokens: Vec<Token>,
    /// Column name → data column index.
    col_indices: Vec<(String, usize)>,
    /// Tag name → tag index.
    tag_indices: Vec<(String, usize)>,
}

impl PatternGenerator {
    /// Compile a pattern against the column and tag schemas.
    #[must_use]
    pub fn new(pattern: &str, columns: &[ColumnSchema], tags: &[ColumnSchema]) -> Self {
        let mut tokens = Vec::new();
        let mut last = 0;
        for caps in TOKEN_RE.captures_iter(pattern) {
            #[allow(clippy::unwrap_used)] // group 0 always present
            let whole = caps.get(0).unwrap();
            if whole.start() > last {
                tokens.push(Token::Text(pattern[last..whole.start()].to_owned()));
            }
            tokens.push(Token::Placeholder(caps[1].to_owned()));
            last = whole.end();
        }
        if last < pattern.len() {
            tokens.push(Token::Text(pattern[last..].to_owned()));
        }

        let col_indices =
            columns.iter().enumerate().map(|(i, c)| (c.name.clone(), i)).collect();
        let tag_indices = tags.iter().enumerate().map(|(i, t)| (t.name.clone(), i)).collect();
        Self { tokens, col_indices, tag_indices }
    }

    /// Number of parsed tokens.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the pattern is exactly one placeholder.
    #[must_use]
    pub fn is_single_placeholder(&self) -> bool {
        matches!(self.tokens.as_slice(), [Token::Placeholder(_)])
    }

    /// Render the pattern against one row.
    #[must_use]
    pub fn generate(&self, table: &TableSlot<'_>, row: usize) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            match token {
                Token::Text(text) => out.push_str(text),
                Token::Placeholder(name) => out.push_str(&self.resolve(name, table, row)),
            }
        }
        out
    }

    fn resolve(&self, name: &str, table: &TableSlot<'_>, row: usize) -> String {
        if name == "table" {
            return table.name().to_owned();
        }
        if name == "ts" {
            return table
                .timestamps()
                .get(row)
                .map(ToString::to_string)
                .unwrap_or_else(|| "INVALID_TS".to_owned());
        }
        if let Some((_, col)) = self.col_indices.iter().find(|(n, _)| n == name) {
            return match table.cell(row, *col) {
                Ok(value) => value.render(),
                Err(_) => format!("{{ERROR:{name}}}"),
            };
        }
        if let Some((_, tag)) = self.tag_indices.iter().find(|(n, _)| n == name) {
            if let Some(tags) = table.tags() {
                if let Some(value) = tags.values.get(*tag) {
                    return value.render();
                }
            }
        }
        format!("{{COL_NOT_FOUND:{name}}}")
    }
}

/// Fixed-width big-endian integer serializers for message keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySerializer {
    /// Raw UTF-8 of the rendered pattern.
    StringUtf8,
    /// 1-byte signed.
    Int8,
    /// 1-byte unsigned.
    UInt8,
    /// 2-byte signed, big-endian.
    Int16,
    /// 2-byte unsigned, big-endian.
    UInt16,
    /// 4-byte signed, big-endian.
    Int32,
    /// 4-byte unsigned, big-endian.
    UInt32,
    /// 8-byte signed, big-endian.
    Int64,
    /// 8-byte unsigned, big-endian.
    UInt64,
}

impl KeySerializer {
    /// Parse a serializer name from configuration.
    pub fn parse(name: &str) -> Result<Self, FormatError> {
        Ok(match name {
            "string-utf8" => Self::StringUtf8,
            "int8" => Self::Int8,
            "uint8" => Self::UInt8,
            "int16" => Self::Int16,
            "uint16" => Self::UInt16,
            "int32" => Self::Int32,
            "uint32" => Self::UInt32,
            "int64" => Self::Int64,
            "uint64" => Self::UInt64,
            other => return Err(FormatError::UnknownKeySerializer(other.to_owned())),
        })
    }

    const fn name(self) -> &'static str {
        match self {
            Self::StringUtf8 => "string-utf8",
            Self::Int8 => "int8",
            Self::UInt8 => "uint8",
            Self::Int16 => "int16",
            Self::UInt16 => "uint16",
            Self::Int32 => "int32",
            Self::UInt32 => "uint32",
            Self::Int64 => "int64",
            Self::UInt64 => "uint64",
        }
    }
}

/// Generates message key bytes from a pattern and serializer.
#[derive(Debug, Clone)]
pub struct KeyGenerator {
    pattern: PatternGenerator,
    serializer: KeySerializer,
}

impl KeyGenerator {
    /// Compile; integer serializers require a single-placeholder pattern.
    pub fn new(
        pattern: &str,
        serializer: &str,
        columns: &[ColumnSchema],
        tags: &[ColumnSchema],
    ) -> Result<Self, FormatError> {
        let serializer = KeySerializer::parse(serializer)?;
        let compiled = PatternGenerator::new(pattern, columns, tags);
        if serializer != KeySerializer::StringUtf8 && !compiled.is_single_placeholder() {
            return Err(FormatError::PatternNotSingleToken(pattern.to_owned()));
        }
        Ok(Self { pattern: compiled, serializer })
    }

    /// Key bytes for one row.
    pub fn generate(&self, table: &TableSlot<'_>, row: usize) -> Result<Vec<u8>, FormatError> {
        let rendered = self.pattern.generate(table, row);
        let out_of_range = |serializer: KeySerializer| FormatError::KeyValueOutOfRange {
            value: rendered.clone(),
            serializer: serializer.name(),
        };
        Ok(match self.serializer {
            KeySerializer::StringUtf8 => rendered.into_bytes(),
            KeySerializer::Int8 => rendered
                .parse::<i8>()
                .map_err(|_| out_of_range(self.serializer))?
                .to_be_bytes()
                .to_vec(),
            KeySerializer::UInt8 => rendered
                .parse::<u8>()
                .map_err(|_| out_of_range(self.serializer))?
                .to_be_bytes()
                .to_vec(),
            KeySerializer::Int16 => rendered
                .parse::<i16>()
                .map_err(|_| out_of_range(self.serializer))?
                .to_be_bytes()
                .to_vec(),
            KeySerializer::UInt16 => rendered
                .parse::<u16>()
                .map_err(|_| out_of_range(self.serializer))?
                .to_be_bytes()
                .to_vec(),
            KeySerializer::Int32 => rendered
                .parse::<i32>()
                .map_err(|_| out_of_range(self.serializer))?
                .to_be_bytes()
                .to_vec(),
            KeySerializer::UInt32 => rendered
                .parse::<u32>()
                .map_err(|_| out_of_range(self.serializer))?
                .to_be_bytes()
                .to_vec(),
            KeySerializer::Int64 => rendered
                .parse::<i64>()
                .map_err(|_| out_of_range(self.serializer))?
                .to_be_bytes()
                .to_vec(),
            KeySerializer::UInt64 => rendered
                .parse::<u64>()
                .map_err(|_| out_of_range(self.serializer))?
                .to_be_bytes()
                .to_vec(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tsbench_engine::{BlockGuard, MemoryPool, PoolConfig};
    use tsbench_gen::RowWriter;
    use tsbench_types::Value;

    fn block_with(columns: &[ColumnSchema], ts: i64, cells: Vec<Value>) -> (MemoryPool, BlockGuard) {
        let pool = MemoryPool::new(
            PoolConfig {
                block_count: 1,
                max_tables_per_block: 1,
                max_rows_per_table: 2,
                tables_reuse_data: false,
                num_cached_blocks: 0,
            },
            columns,
        );
        let mut guard = pool.acquire_block().unwrap();
        guard.begin_table(0, Arc::from("sensors")).unwrap();
        {
            let mut slot = guard.table_mut(0).unwrap();
            slot.set_timestamp(0, ts);
            for (col, cell) in cells.iter().enumerate() {
                slot.write_cell(0, col, cell).unwrap();
            }
            slot.commit_row();
        }
        guard.bump_used_tables();
        (pool, guard)
    }

    #[test]
    fn test_pattern_interpolation() {
        let columns = vec![ColumnSchema::new("device", "varchar(16)").unwrap()];
        let (_pool, guard) =
            block_with(&columns, 777, vec![Value::VarChar("dev-9".into())]);
        let slot = guard.table(0).unwrap();

        let pattern = PatternGenerator::new("data/{table}/{device}/{ts}", &columns, &[]);
        assert_eq!(pattern.generate(&slot, 0), "data/sensors/dev-9/777");
    }

    #[test]
    fn test_pattern_unknown_placeholder() {
        let columns = vec![ColumnSchema::new("device", "varchar(16)").unwrap()];
        let (_pool, guard) = block_with(&columns, 1, vec![Value::VarChar("d".into())]);
        let slot = guard.table(0).unwrap();
        let pattern = PatternGenerator::new("{nope}", &columns, &[]);
        assert_eq!(pattern.generate(&slot, 0), "{COL_NOT_FOUND:nope}");
    }

    #[test]
    fn test_int64_key_big_endian() {
        let columns = vec![ColumnSchema::new("id", "bigint").unwrap()];
        let (_pool, guard) =
            block_with(&columns, 1, vec![Value::BigInt(123_456_789_012_345)]);
        let slot = guard.table(0).unwrap();

        let key = KeyGenerator::new("{id}", "int64", &columns, &[]).unwrap();
        assert_eq!(
            key.generate(&slot, 0).unwrap(),
            vec![0x00, 0x00, 0x70, 0x48, 0x16, 0xF4, 0xD0, 0xB9]
        );
    }

    #[test]
    fn test_integer_serializer_rejects_multi_token_pattern() {
        let columns = vec![ColumnSchema::new("id", "bigint").unwrap()];
        assert!(matches!(
            KeyGenerator::new("key-{id}", "int32", &columns, &[]),
            Err(FormatError::PatternNotSingleToken(_))
        ));
        // The string serializer accepts the same pattern.
        assert!(KeyGenerator::new("key-{id}", "string-utf8", &columns, &[]).is_ok());
    }

    #[test]
    fn test_unknown_serializer() {
        assert!(matches!(
            KeyGenerator::new("{id}", "int128", &[], &[]),
            Err(FormatError::UnknownKeySerializer(_))
        ));
    }

    #[test]
    fn test_string_key_bytes() {
        let columns = vec![ColumnSchema::new("id", "int").unwrap()];
        let (_pool, guard) = block_with(&columns, 42, vec![Value::Int(5)]);
        let slot = guard.table(0).unwrap();
        let key = KeyGenerator::new("{table}-{id}", "string-utf8", &columns, &[]).unwrap();
        assert_eq!(key.generate(&slot, 0).unwrap(), b"sensors-5".to_vec());
    }

    #[test]
    fn test_key_value_out_of_range() {
        let columns = vec![ColumnSchema::new("id", "bigint").unwrap()];
        let (_pool, guard) = block_with(&columns, 1, vec![Value::BigInt(70_000)]);
        let slot = guard.table(0).unwrap();
        let key = KeyGenerator::new("{id}", "int16", &columns, &[]).unwrap();
        assert!(matches!(
            key.generate(&slot, 0),
            Err(FormatError::KeyValueOutOfRange { .. })
        ));
    }
}
