//! Block → SQL INSERT text.

use tsbench_engine::BlockGuard;
use tsbench_types::{ColumnSchema, TypeTag, Value, utf16};

use crate::error::FormatError;
use crate::registry::{InsertFormatter, Prepared};
use crate::result::{FormatResult, InsertData, InsertMode, InsertPayload};

/// Formats a whole block as one multi-table INSERT statement.
#[derive(Debug)]
pub struct SqlInsertFormatter {
    database: String,
}

impl SqlInsertFormatter {
    /// Create for a target database.
    #[must_use]
    pub fn new(database: &str) -> Self {
        Self { database: database.to_owned() }
    }
}

impl InsertFormatter for SqlInsertFormatter {
    fn prepare(
        &mut self,
        _columns: &[ColumnSchema],
        _tags: &[ColumnSchema],
    ) -> Result<Prepared, FormatError> {
        Ok(Prepared { sql: None, mode: InsertMode::SubTable })
    }

    fn format(
        &self,
        block: BlockGuard,
        columns: &[ColumnSchema],
        _tags: &[ColumnSchema],
        _is_recover: bool,
    ) -> Result<FormatResult, FormatError> {
        if block.total_rows() == 0 {
            return Ok(FormatResult::Ignored);
        }

        let mut out = String::from("INSERT INTO");
        for slot in 0..block.used_tables() {
            let table = block.table(slot)?;
            if table.used_rows() == 0 {
                continue;
            }
            out.push_str(&format!(" `{}`.`{}` VALUES ", self.database, table.name()));
            for row in 0..table.used_rows() {
                out.push('(');
                out.push_str(&table.timestamps()[row].to_string());
                for (col, schema) in columns.iter().enumerate() {
                    out.push(',');
                    write_sql_value(&mut out, schema, &table.cell(row, col)?)?;
                }
                out.push(')');
            }
        }
        out.push(';');

        Ok(FormatResult::Insert(InsertData::new(block, InsertPayload::Sql(out))))
    }
}

fn write_sql_value(
    out: &mut String,
    schema: &ColumnSchema,
    value: &Value,
) -> Result<(), FormatError> {
    if value.is_null() {
        out.push_str("NULL");
        return Ok(());
    }
    match schema.tag {
        TypeTag::VarBinary | TypeTag::Geometry => {
            return Err(FormatError::UnsupportedSqlType(schema.type_str.clone()));
        }
        TypeTag::NChar => {
            out.push('\'');
            let utf8 = match value {
                Value::NChar(units) => utf16::to_utf8(units),
                other => other.render(),
            };
            push_escaped(out, &utf8);
            out.push('\'');
        }
        tag if tag.needs_quotes() => {
            out.push('\'');
            push_escaped(out, &value.render());
            out.push('\'');
        }
        _ => out.push_str(&value.render()),
    }
    Ok(())
}

/// Single quotes double inside quoted values.
fn push_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tsbench_engine::{MemoryPool, PoolConfig};
    use tsbench_gen::RowWriter;

    fn formatted(
        columns: &[ColumnSchema],
        table: &str,
        rows: &[(i64, Vec<Value>)],
    ) -> Result<FormatResult, FormatError> {
        let pool = MemoryPool::new(
            PoolConfig {
                block_count: 1,
                max_tables_per_block: 1,
                max_rows_per_table: 8,
                tables_reuse_data: false,
                num_cached_blocks: 0,
            },
            columns,
        );
        let mut guard = pool.acquire_block().unwrap();
        guard.begin_table(0, Arc::from(table)).unwrap();
        let mut start = i64::MAX;
        let mut end = i64::MIN;
        {
            let mut slot = guard.table_mut(0).unwrap();
            for (ts, cells) in rows {
                let row = slot.used_rows();
                slot.set_timestamp(row, *ts);
                for (col, cell) in cells.iter().enumerate() {
                    if cell.is_null() {
                        slot.set_null(row, col);
                    } else {
                        slot.write_cell(row, col, cell).unwrap();
                    }
                }
                slot.commit_row();
                start = start.min(*ts);
                end = end.max(*ts);
            }
        }
        guard.bump_used_tables();
        guard.set_window(start, end, rows.len());

        let mut formatter = SqlInsertFormatter::new("db");
        formatter.prepare(columns, &[]).unwrap();
        formatter.format(guard, columns, &[], false)
    }

    fn sql_of(result: FormatResult) -> String {
        match result {
            FormatResult::Insert(data) => match &data.payload {
                InsertPayload::Sql(sql) => sql.clone(),
                _ => panic!("expected sql payload"),
            },
            _ => panic!("expected insert result"),
        }
    }

    #[test]
    fn test_single_table_two_rows() {
        let columns = vec![
            ColumnSchema::new("f1", "float").unwrap(),
            ColumnSchema::new("i1", "int").unwrap(),
        ];
        let result = formatted(
            &columns,
            "table1",
            &[
                (1_500_000_000_000, vec![Value::Float(3.14), Value::Int(42)]),
                (1_500_000_000_001, vec![Value::Float(2.71), Value::Int(43)]),
            ],
        )
        .unwrap();
        assert_eq!(
            sql_of(result),
            "INSERT INTO `db`.`table1` VALUES (1500000000000,3.14,42)(1500000000001,2.71,43);"
        );
    }

    #[test]
    fn test_quoting_and_null() {
        let columns = vec![
            ColumnSchema::new("name", "varchar(20)").unwrap(),
            ColumnSchema::new("v", "int").unwrap(),
        ];
        let result = formatted(
            &columns,
            "t",
            &[
                (1, vec![Value::VarChar("it's".into()), Value::Null]),
                (2, vec![Value::VarChar("ok".into()), Value::Int(5)]),
            ],
        )
        .unwrap();
        assert_eq!(
            sql_of(result),
            "INSERT INTO `db`.`t` VALUES (1,'it''s',NULL)(2,'ok',5);"
        );
    }

    #[test]
    fn test_nchar_decodes_to_utf8() {
        let columns = vec![ColumnSchema::new("label", "nchar(8)").unwrap()];
        let units: Vec<u16> = "你好".encode_utf16().collect();
        let result = formatted(&columns, "t", &[(9, vec![Value::NChar(units)])]).unwrap();
        assert_eq!(sql_of(result), "INSERT INTO `db`.`t` VALUES (9,'你好');");
    }

    #[test]
    fn test_bool_renders_keyword() {
        let columns = vec![ColumnSchema::new("ok", "bool").unwrap()];
        let result = formatted(
            &columns,
            "t",
            &[(1, vec![Value::Bool(true)]), (2, vec![Value::Bool(false)])],
        )
        .unwrap();
        assert_eq!(sql_of(result), "INSERT INTO `db`.`t` VALUES (1,true)(2,false);");
    }

    #[test]
    fn test_forbidden_types_rejected() {
        let columns = vec![ColumnSchema::new("raw", "varbinary(8)").unwrap()];
        let result = formatted(&columns, "t", &[(1, vec![Value::VarBinary(vec![1, 2])])]);
        assert!(matches!(result, Err(FormatError::UnsupportedSqlType(_))));
    }

    #[test]
    fn test_empty_block_ignored() {
        let columns = vec![ColumnSchema::new("v", "int").unwrap()];
        let result = formatted(&columns, "t", &[]).unwrap();
        assert!(matches!(result, FormatResult::Ignored));
    }
}
