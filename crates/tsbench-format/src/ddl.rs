//! CREATE DATABASE / STABLE / TABLE statement builders.

use tsbench_engine::TagSet;
use tsbench_types::{ColumnSchema, TypeTag, Value};

use crate::result::FormatResult;

/// Statements that create (and optionally drop) a database.
#[must_use]
pub fn create_database(
    name: &str,
    drop_if_exists: bool,
    precision: Option<&str>,
    props: Option<&str>,
) -> FormatResult {
    let mut statements = Vec::new();
    if drop_if_exists {
        statements.push(format!("DROP DATABASE IF EXISTS `{name}`;"));
    }
    let mut create = format!("CREATE DATABASE IF NOT EXISTS `{name}`");
    if let Some(precision) = precision {
        create.push_str(&format!(" PRECISION '{precision}'"));
    }
    if let Some(props) = props {
        create.push(' ');
        create.push_str(props);
    }
    create.push(';');
    statements.push(create);
    FormatResult::StatementList(statements)
}

/// The CREATE STABLE statement for a super table.
#[must_use]
pub fn create_super_table(
    database: &str,
    name: &str,
    columns: &[ColumnSchema],
    tags: &[ColumnSchema],
) -> FormatResult {
    let mut sql = format!("CREATE STABLE IF NOT EXISTS `{database}`.`{name}` (ts TIMESTAMP");
    for column in columns {
        sql.push_str(&format!(", {} {}", column.name, render_type(column)));
        if let Some(props) = &column.props {
            sql.push(' ');
            sql.push_str(props);
        }
        if column.primary_key {
            sql.push_str(" PRIMARY KEY");
        }
    }
    sql.push(')');
    if !tags.is_empty() {
        sql.push_str(" TAGS (");
        for (i, tag) in tags.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str(&format!("{} {}", tag.name, render_type(tag)));
        }
        sql.push(')');
    }
    sql.push(';');
    FormatResult::StatementList(vec![sql])
}

/// Batched CREATE TABLE ... USING ... TAGS statements for child tables.
///
/// `batch` bounds how many tables one statement creates; the last
/// statement may be shorter.
#[must_use]
pub fn create_child_tables(
    database: &str,
    super_table: &str,
    tables: &[(String, TagSet)],
    batch: usize,
) -> FormatResult {
    let batch = batch.max(1);
    let mut statements = Vec::with_capacity(tables.len().div_ceil(batch));
    for chunk in tables.chunks(batch) {
        let mut sql = String::from("CREATE TABLE IF NOT EXISTS");
        for (name, tags) in chunk {
            sql.push_str(&format!(" `{database}`.`{name}` USING `{database}`.`{super_table}` TAGS ("));
            for (i, value) in tags.values.iter().enumerate() {
                if i > 0 {
                    sql.push(',');
                }
                sql.push_str(&render_tag_literal(value));
            }
            sql.push(')');
        }
        sql.push(';');
        statements.push(sql);
    }
    FormatResult::StatementList(statements)
}

/// The declared type as DDL text, normalized upper-case.
fn render_type(column: &ColumnSchema) -> String {
    match column.tag {
        TypeTag::Decimal => format!(
            "DECIMAL({},{})",
            column.precision.unwrap_or(10),
            column.scale.unwrap_or(0)
        ),
        tag if tag.is_var_length() && tag != TypeTag::Json => {
            format!("{}({})", tag.name().to_uppercase(), column.len.unwrap_or(0))
        }
        tag => tag.name().to_uppercase(),
    }
}

fn render_tag_literal(value: &Value) -> String {
    match value {
        Value::VarChar(_) | Value::NChar(_) | Value::Json(_) | Value::Geometry(_) => {
            let mut out = String::from("'");
            for c in value.render().chars() {
                if c == '\'' {
                    out.push('\'');
                }
                out.push(c);
            }
            out.push('\'');
            out
        }
        other => other.render(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn statements(result: FormatResult) -> Vec<String> {
        match result {
            FormatResult::StatementList(s) => s,
            _ => panic!("expected statement list"),
        }
    }

    #[test]
    fn test_create_database() {
        let stmts = statements(create_database("benchdb", true, Some("ms"), None));
        assert_eq!(
            stmts,
            vec![
                "DROP DATABASE IF EXISTS `benchdb`;",
                "CREATE DATABASE IF NOT EXISTS `benchdb` PRECISION 'ms';",
            ]
        );
    }

    #[test]
    fn test_create_database_keeps_existing() {
        let stmts = statements(create_database("benchdb", false, None, Some("KEEP 3650")));
        assert_eq!(stmts, vec!["CREATE DATABASE IF NOT EXISTS `benchdb` KEEP 3650;"]);
    }

    #[test]
    fn test_create_super_table() {
        let columns = vec![
            ColumnSchema::new("current", "float").unwrap(),
            ColumnSchema::new("name", "varchar(16)").unwrap(),
        ];
        let tags = vec![ColumnSchema::new("groupid", "int").unwrap()];
        let stmts = statements(create_super_table("db", "meters", &columns, &tags));
        assert_eq!(
            stmts,
            vec![
                "CREATE STABLE IF NOT EXISTS `db`.`meters` (ts TIMESTAMP, current FLOAT, \
                 name VARCHAR(16)) TAGS (groupid INT);"
            ]
        );
    }

    #[test]
    fn test_create_child_tables_batching() {
        let tables: Vec<(String, TagSet)> = (0..3)
            .map(|i| (format!("d{i}"), TagSet { values: vec![Value::Int(i)] }))
            .collect();
        let stmts = statements(create_child_tables("db", "meters", &tables, 2));
        assert_eq!(stmts.len(), 2);
        assert_eq!(
            stmts[0],
            "CREATE TABLE IF NOT EXISTS `db`.`d0` USING `db`.`meters` TAGS (0) \
             `db`.`d1` USING `db`.`meters` TAGS (1);"
        );
        assert_eq!(
            stmts[1],
            "CREATE TABLE IF NOT EXISTS `db`.`d2` USING `db`.`meters` TAGS (2);"
        );
    }

    #[test]
    fn test_string_tags_quoted() {
        let tables =
            vec![("d0".to_owned(), TagSet { values: vec![Value::VarChar("it's".into())] })];
        let stmts = statements(create_child_tables("db", "meters", &tables, 1));
        assert_eq!(
            stmts[0],
            "CREATE TABLE IF NOT EXISTS `db`.`d0` USING `db`.`meters` TAGS ('it''s');"
        );
    }
}
