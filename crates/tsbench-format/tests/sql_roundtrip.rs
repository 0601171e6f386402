//! Round-trip of the SQL insert serialization: values written into a
//! block and rendered as INSERT text parse back to the originals for
//! every non-forbidden column type.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use tsbench_engine::{BlockGuard, MemoryPool, PoolConfig};
use tsbench_format::{
    FormatResult, InsertFormatter, InsertPayload, sql::SqlInsertFormatter,
};
use tsbench_gen::RowWriter;
use tsbench_types::{ColumnSchema, DecimalValue, TypeTag, Value, utf16};

fn columns() -> Vec<ColumnSchema> {
    vec![
        ColumnSchema::new("c_bool", "bool").unwrap(),
        ColumnSchema::new("c_i8", "tinyint").unwrap(),
        ColumnSchema::new("c_u8", "tinyint unsigned").unwrap(),
        ColumnSchema::new("c_i16", "smallint").unwrap(),
        ColumnSchema::new("c_i32", "int").unwrap(),
        ColumnSchema::new("c_i64", "bigint").unwrap(),
        ColumnSchema::new("c_u64", "bigint unsigned").unwrap(),
        ColumnSchema::new("c_f32", "float").unwrap(),
        ColumnSchema::new("c_f64", "double").unwrap(),
        ColumnSchema::new("c_dec", "decimal(10,2)").unwrap(),
        ColumnSchema::new("c_str", "varchar(32)").unwrap(),
        ColumnSchema::new("c_nchar", "nchar(16)").unwrap(),
        ColumnSchema::new("c_json", "json").unwrap(),
    ]
}

fn sample_rows() -> Vec<(i64, Vec<Value>)> {
    vec![
        (
            1_500_000_000_000,
            vec![
                Value::Bool(true),
                Value::TinyInt(-12),
                Value::UTinyInt(200),
                Value::SmallInt(-30_000),
                Value::Int(123_456),
                Value::BigInt(-9_000_000_000),
                Value::UBigInt(18_000_000_000),
                Value::Float(3.14),
                Value::Double(-2.718281828),
                Value::Decimal(DecimalValue { repr: "12.34".into(), precision: 10, scale: 2 }),
                Value::VarChar("plain".into()),
                Value::NChar("你好ab".encode_utf16().collect()),
                Value::Json("{\"k\":1}".into()),
            ],
        ),
        (
            1_500_000_000_001,
            vec![
                Value::Bool(false),
                Value::TinyInt(7),
                Value::UTinyInt(0),
                Value::SmallInt(42),
                Value::Int(-1),
                Value::BigInt(0),
                Value::UBigInt(1),
                Value::Float(0.5),
                Value::Double(1e10),
                Value::Decimal(DecimalValue { repr: "-0.05".into(), precision: 10, scale: 2 }),
                Value::VarChar("it's quoted".into()),
                Value::NChar("x".encode_utf16().collect()),
                Value::Json("{}".into()),
            ],
        ),
    ]
}

fn fill(columns: &[ColumnSchema], rows: &[(i64, Vec<Value>)]) -> (MemoryPool, BlockGuard) {
    let pool = MemoryPool::new(
        PoolConfig {
            block_count: 1,
            max_tables_per_block: 1,
            max_rows_per_table: rows.len().max(1),
            tables_reuse_data: false,
            num_cached_blocks: 0,
        },
        columns,
    );
    let mut guard = pool.acquire_block().unwrap();
    guard.begin_table(0, Arc::from("t1")).unwrap();
    {
        let mut slot = guard.table_mut(0).unwrap();
        for (ts, cells) in rows {
            let row = slot.used_rows();
            slot.set_timestamp(row, *ts);
            for (col, cell) in cells.iter().enumerate() {
                slot.write_cell(row, col, cell).unwrap();
            }
            slot.commit_row();
        }
    }
    guard.bump_used_tables();
    guard.set_window(rows[0].0, rows[rows.len() - 1].0, rows.len());
    (pool, guard)
}

/// Split one `(v1,v2,...)` tuple into raw literals, respecting quotes.
fn split_tuple(tuple: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = tuple.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\'' if in_quotes && chars.peek() == Some(&'\'') => {
                // Escaped quote inside a string literal.
                current.push('\'');
                chars.next();
            }
            '\'' => {
                in_quotes = !in_quotes;
                current.push('\'');
            }
            ',' if !in_quotes => {
                out.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    out.push(current);
    out
}

/// Parse one rendered literal back as the column's value type.
fn parse_literal(schema: &ColumnSchema, literal: &str) -> Value {
    if literal == "NULL" {
        return Value::Null;
    }
    if schema.tag.needs_quotes() {
        let inner = literal.strip_prefix('\'').unwrap().strip_suffix('\'').unwrap();
        let text = inner.replace("''", "'");
        return match schema.tag {
            TypeTag::NChar => Value::NChar(utf16::from_utf8(text.as_bytes())),
            TypeTag::Json => Value::Json(text),
            _ => Value::VarChar(text),
        };
    }
    match schema.tag {
        TypeTag::Bool => Value::Bool(literal == "true"),
        TypeTag::TinyInt => Value::TinyInt(literal.parse().unwrap()),
        TypeTag::UTinyInt => Value::UTinyInt(literal.parse().unwrap()),
        TypeTag::SmallInt => Value::SmallInt(literal.parse().unwrap()),
        TypeTag::USmallInt => Value::USmallInt(literal.parse().unwrap()),
        TypeTag::Int => Value::Int(literal.parse().unwrap()),
        TypeTag::UInt => Value::UInt(literal.parse().unwrap()),
        TypeTag::BigInt => Value::BigInt(literal.parse().unwrap()),
        TypeTag::UBigInt => Value::UBigInt(literal.parse().unwrap()),
        TypeTag::Float => Value::Float(literal.parse().unwrap()),
        TypeTag::Double => Value::Double(literal.parse().unwrap()),
        TypeTag::Decimal => Value::Decimal(DecimalValue {
            repr: literal.to_owned(),
            precision: schema.precision.unwrap_or(0),
            scale: schema.scale.unwrap_or(0),
        }),
        _ => panic!("unexpected unquoted type {:?}", schema.tag),
    }
}

#[test]
fn sql_values_round_trip() {
    let columns = columns();
    let rows = sample_rows();
    let (_pool, guard) = fill(&columns, &rows);

    let mut formatter = SqlInsertFormatter::new("db");
    formatter.prepare(&columns, &[]).unwrap();
    let FormatResult::Insert(data) = formatter.format(guard, &columns, &[], false).unwrap()
    else {
        panic!("expected insert result");
    };
    let InsertPayload::Sql(sql) = &data.payload else { panic!("expected sql payload") };

    // Dialect-aware parse: strip the statement frame, then the tuples.
    let body = sql
        .strip_prefix("INSERT INTO `db`.`t1` VALUES ")
        .and_then(|s| s.strip_suffix(';'))
        .unwrap();
    let tuples: Vec<&str> = body
        .strip_prefix('(')
        .unwrap()
        .strip_suffix(')')
        .unwrap()
        .split(")(")
        .collect();
    assert_eq!(tuples.len(), rows.len());

    for (tuple, (expected_ts, expected_cells)) in tuples.iter().zip(&rows) {
        let literals = split_tuple(tuple);
        assert_eq!(literals.len(), 1 + columns.len());
        assert_eq!(literals[0].parse::<i64>().unwrap(), *expected_ts);
        for ((literal, schema), expected) in
            literals[1..].iter().zip(&columns).zip(expected_cells)
        {
            let parsed = parse_literal(schema, literal);
            assert_eq!(&parsed, expected, "column {} did not round-trip", schema.name);
        }
    }
}

#[test]
fn null_cells_round_trip() {
    let columns = vec![
        ColumnSchema::new("a", "int").unwrap(),
        ColumnSchema::new("b", "varchar(8)").unwrap(),
    ];
    let pool = MemoryPool::new(
        PoolConfig {
            block_count: 1,
            max_tables_per_block: 1,
            max_rows_per_table: 1,
            tables_reuse_data: false,
            num_cached_blocks: 0,
        },
        &columns,
    );
    let mut guard = pool.acquire_block().unwrap();
    guard.begin_table(0, Arc::from("t1")).unwrap();
    {
        let mut slot = guard.table_mut(0).unwrap();
        slot.set_timestamp(0, 9);
        slot.set_null(0, 0);
        slot.write_cell(0, 1, &Value::VarChar("x".into())).unwrap();
        slot.commit_row();
    }
    guard.bump_used_tables();
    guard.set_window(9, 9, 1);

    let mut formatter = SqlInsertFormatter::new("db");
    formatter.prepare(&columns, &[]).unwrap();
    let FormatResult::Insert(data) = formatter.format(guard, &columns, &[], false).unwrap()
    else {
        panic!("expected insert result");
    };
    let InsertPayload::Sql(sql) = &data.payload else { panic!("expected sql payload") };
    assert_eq!(sql, "INSERT INTO `db`.`t1` VALUES (9,NULL,'x');");
}
