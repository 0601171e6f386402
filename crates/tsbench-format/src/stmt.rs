//! Block → prepared-statement bind batch.

use tsbench_engine::BlockGuard;
use tsbench_types::ColumnSchema;

use crate::error::FormatError;
use crate::registry::{FormatConfig, InsertFormatter, Prepared};
use crate::result::{FormatResult, InsertData, InsertMode, InsertPayload, StmtBatch};

/// Decides the insert mode, builds the prepared SQL, and wraps blocks
/// into stmt-v2 bind batches. The bind data never leaves the block; the
/// sink serializes the wire body from block storage at execute time.
#[derive(Debug)]
pub struct StmtInsertFormatter {
    database: String,
    super_table: String,
    version: String,
    auto_create_table: bool,
    websocket: bool,
    mode: InsertMode,
}

impl StmtInsertFormatter {
    /// Create from the format configuration.
    #[must_use]
    pub fn new(config: &FormatConfig) -> Self {
        Self {
            database: config.database.clone(),
            super_table: config.super_table.clone(),
            version: config.stmt.version.clone(),
            auto_create_table: config.stmt.auto_create_table,
            websocket: config.stmt.websocket,
            mode: InsertMode::SubTable,
        }
    }
}

impl InsertFormatter for StmtInsertFormatter {
    fn prepare(
        &mut self,
        columns: &[ColumnSchema],
        tags: &[ColumnSchema],
    ) -> Result<Prepared, FormatError> {
        self.mode = if self.auto_create_table {
            InsertMode::AutoCreateTable
        } else if self.websocket {
            InsertMode::SuperTable
        } else {
            InsertMode::SubTable
        };

        let mut sql = String::new();
        match self.mode {
            InsertMode::SubTable => {
                sql.push_str("INSERT INTO ? VALUES(?");
                for _ in columns {
                    sql.push_str(",?");
                }
                sql.push(')');
            }
            InsertMode::SuperTable => {
                sql.push_str(&format!(
                    "INSERT INTO `{}`.`{}`(tbname,ts",
                    self.database, self.super_table
                ));
                for column in columns {
                    sql.push(',');
                    sql.push_str(&column.name);
                }
                sql.push_str(") VALUES(?,?");
                for _ in columns {
                    sql.push_str(",?");
                }
                sql.push(')');
            }
            InsertMode::AutoCreateTable => {
                sql.push_str(&format!(
                    "INSERT INTO ? USING `{}`.`{}` TAGS (",
                    self.database, self.super_table
                ));
                for (i, _) in tags.iter().enumerate() {
                    if i > 0 {
                        sql.push(',');
                    }
                    sql.push('?');
                }
                sql.push_str(") VALUES(?");
                for _ in columns {
                    sql.push_str(",?");
                }
                sql.push(')');
            }
        }

        Ok(Prepared { sql: Some(sql), mode: self.mode })
    }

    fn format(
        &self,
        block: BlockGuard,
        _columns: &[ColumnSchema],
        _tags: &[ColumnSchema],
        is_recover: bool,
    ) -> Result<FormatResult, FormatError> {
        if self.version != "v2" {
            return Err(FormatError::UnsupportedStmtVersion(self.version.clone()));
        }
        if block.total_rows() == 0 {
            return Ok(FormatResult::Ignored);
        }
        Ok(FormatResult::Insert(InsertData::new(
            block,
            InsertPayload::Stmt(StmtBatch { mode: self.mode, is_recover }),
        )))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::registry::StmtOptions;

    fn config(auto: bool, websocket: bool) -> FormatConfig {
        FormatConfig {
            database: "db".to_owned(),
            super_table: "stb".to_owned(),
            stmt: StmtOptions {
                version: "v2".to_owned(),
                auto_create_table: auto,
                websocket,
            },
            ..FormatConfig::default()
        }
    }

    fn columns() -> Vec<ColumnSchema> {
        vec![
            ColumnSchema::new("current", "float").unwrap(),
            ColumnSchema::new("voltage", "int").unwrap(),
        ]
    }

    fn tags() -> Vec<ColumnSchema> {
        vec![
            ColumnSchema::new("groupid", "int").unwrap(),
            ColumnSchema::new("location", "varchar(24)").unwrap(),
        ]
    }

    #[test]
    fn test_sub_table_prepare() {
        let mut f = StmtInsertFormatter::new(&config(false, false));
        let prepared = f.prepare(&columns(), &tags()).unwrap();
        assert_eq!(prepared.mode, InsertMode::SubTable);
        assert_eq!(prepared.sql.as_deref(), Some("INSERT INTO ? VALUES(?,?,?)"));
    }

    #[test]
    fn test_super_table_prepare() {
        let mut f = StmtInsertFormatter::new(&config(false, true));
        let prepared = f.prepare(&columns(), &tags()).unwrap();
        assert_eq!(prepared.mode, InsertMode::SuperTable);
        assert_eq!(
            prepared.sql.as_deref(),
            Some("INSERT INTO `db`.`stb`(tbname,ts,current,voltage) VALUES(?,?,?,?)")
        );
    }

    #[test]
    fn test_auto_create_table_prepare() {
        let mut f = StmtInsertFormatter::new(&config(true, true));
        let prepared = f.prepare(&columns(), &tags()).unwrap();
        assert_eq!(prepared.mode, InsertMode::AutoCreateTable);
        assert_eq!(
            prepared.sql.as_deref(),
            Some("INSERT INTO ? USING `db`.`stb` TAGS (?,?) VALUES(?,?,?)")
        );
    }

    #[test]
    fn test_version_enforced() {
        let mut bad = config(false, true);
        bad.stmt.version = "v1".to_owned();
        let mut f = StmtInsertFormatter::new(&bad);
        f.prepare(&columns(), &tags()).unwrap();

        let pool = tsbench_engine::MemoryPool::new(
            tsbench_engine::PoolConfig {
                block_count: 1,
                max_tables_per_block: 1,
                max_rows_per_table: 1,
                tables_reuse_data: false,
                num_cached_blocks: 0,
            },
            &columns(),
        );
        let block = pool.acquire_block().unwrap();
        assert!(matches!(
            f.format(block, &columns(), &tags(), false),
            Err(FormatError::UnsupportedStmtVersion(v)) if v == "v1"
        ));
    }
}
