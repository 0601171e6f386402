//! Row → JSON / influx line protocol serialization.

use serde_json::{Map, Number, Value as Json};

use tsbench_engine::{EngineError, TableSlot};
use tsbench_types::{ColumnSchema, Value};

/// Serialize one row as an ordered JSON object.
///
/// Key order: the table-name key (when `tbname_key` is non-empty), `ts`,
/// data columns in schema order, then tag columns.
pub fn to_json(
    columns: &[ColumnSchema],
    tags: &[ColumnSchema],
    table: &TableSlot<'_>,
    row: usize,
    tbname_key: &str,
) -> Result<Map<String, Json>, EngineError> {
    if row >= table.used_rows() {
        return Err(EngineError::RowOutOfRange { row, capacity: table.used_rows() });
    }
    let mut out = Map::new();
    if !tbname_key.is_empty() {
        out.insert(tbname_key.to_owned(), Json::String(table.name().to_owned()));
    }
    out.insert("ts".to_owned(), Json::Number(table.timestamps()[row].into()));
    for (col, schema) in columns.iter().enumerate() {
        out.insert(schema.name.clone(), json_value(&table.cell(row, col)?));
    }
    if let Some(tag_set) = table.tags() {
        for (schema, value) in tags.iter().zip(&tag_set.values) {
            out.insert(schema.name.clone(), json_value(value));
        }
    }
    Ok(out)
}

fn json_value(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Bool(v) => Json::Bool(*v),
        Value::TinyInt(v) => Json::Number((*v).into()),
        Value::UTinyInt(v) => Json::Number((*v).into()),
        Value::SmallInt(v) => Json::Number((*v).into()),
        Value::USmallInt(v) => Json::Number((*v).into()),
        Value::Int(v) => Json::Number((*v).into()),
        Value::UInt(v) => Json::Number((*v).into()),
        Value::BigInt(v) => Json::Number((*v).into()),
        Value::UBigInt(v) => Json::Number((*v).into()),
        Value::Float(v) => Number::from_f64(f64::from(*v)).map_or(Json::Null, Json::Number),
        Value::Double(v) => Number::from_f64(*v).map_or(Json::Null, Json::Number),
        // Exact decimals travel as strings.
        Value::Decimal(v) => Json::String(v.repr.clone()),
        other => Json::String(other.render()),
    }
}

/// Append one row as an influx line-protocol line.
///
/// Escaping: measurement escapes space and comma; tag keys/values and
/// field keys escape space, comma and equals; string field values are
/// quoted with backslash escapes on quote and backslash. Integer fields
/// get the `i` suffix, booleans render `true`/`false`, NULL fields are
/// omitted.
pub fn to_influx(
    columns: &[ColumnSchema],
    tags: &[ColumnSchema],
    table: &TableSlot<'_>,
    row: usize,
    out: &mut String,
) -> Result<(), EngineError> {
    if row >= table.used_rows() {
        return Err(EngineError::RowOutOfRange { row, capacity: table.used_rows() });
    }

    escape_measurement(table.name(), out);
    if let Some(tag_set) = table.tags() {
        for (schema, value) in tags.iter().zip(&tag_set.values) {
            out.push(',');
            escape_key(&schema.name, out);
            out.push('=');
            escape_key(&value.render(), out);
        }
    }

    out.push(' ');
    let mut first = true;
    for (col, schema) in columns.iter().enumerate() {
        let value = table.cell(row, col)?;
        if value.is_null() {
            continue;
        }
        if !first {
            out.push(',');
        }
        first = false;
        escape_key(&schema.name, out);
        out.push('=');
        influx_field_value(&value, out);
    }

    out.push(' ');
    out.push_str(&table.timestamps()[row].to_string());
    Ok(())
}

fn influx_field_value(value: &Value, out: &mut String) {
    match value {
        Value::Bool(v) => out.push_str(if *v { "true" } else { "false" }),
        Value::Float(v) => out.push_str(&v.to_string()),
        Value::Double(v) => out.push_str(&v.to_string()),
        Value::Decimal(v) => out.push_str(&v.repr),
        v if v.as_i64().is_some() || matches!(v, Value::UBigInt(_)) => {
            out.push_str(&v.render());
            out.push('i');
        }
        other => {
            out.push('"');
            for c in other.render().chars() {
                if c == '"' || c == '\\' {
                    out.push('\\');
                }
                out.push(c);
            }
            out.push('"');
        }
    }
}

fn escape_measurement(s: &str, out: &mut String) {
    for c in s.chars() {
        if c == ' ' || c == ',' {
            out.push('\\');
        }
        out.push(c);
    }
}

fn escape_key(s: &str, out: &mut String) {
    for c in s.chars() {
        if c == ' ' || c == ',' || c == '=' {
            out.push('\\');
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

    fn make_pool(columns: &[ColumnSchema]) -> MemoryPool {
        MemoryPool::new(
            PoolConfig {
                block_count: 1,
                max_tables_per_block: 1,
                max_rows_per_table: 4,
                tables_reuse_data: false,
                num_cached_blocks: 0,
            },
            columns,
        )
    }

    fn fill(
        pool: &MemoryPool,
        table: &str,
        rows: &[(i64, Vec<Value>)],
    ) -> tsbench_engine::BlockGuard {
        let mut guard = pool.acquire_block().unwrap();
        guard.begin_table(0, Arc::from(table)).unwrap();
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
            }
        }
        guard.bump_used_tables();
        guard
    }

    #[test]
    fn test_influx_basic_line() {
        // Measurement `weather`, tags region/sensor_id, field temp, as in
        // the weather-sensor fixture.
        let columns = vec![ColumnSchema::new("temp", "float").unwrap()];
        let tags = vec![
            ColumnSchema::new("region", "varchar(10)").unwrap(),
            ColumnSchema::new("sensor_id", "int").unwrap(),
        ];
        let pool = make_pool(&columns);
        pool.register_table_tags(
            "weather",
            vec![Value::VarChar("us-west".into()), Value::Int(1001)],
        );
        let guard = fill(&pool, "weather", &[(1_609_459_200_000, vec![Value::Float(25.5)])]);
        let slot = guard.table(0).unwrap();

        let mut line = String::new();
        to_influx(&columns, &tags, &slot, 0, &mut line).unwrap();
        assert_eq!(line, "weather,region=us-west,sensor_id=1001 temp=25.5 1609459200000");
    }

    #[test]
    fn test_influx_escaping() {
        let columns = vec![ColumnSchema::new("f", "float").unwrap()];
        let tags = vec![
            ColumnSchema::new("region name", "varchar(20)").unwrap(),
            ColumnSchema::new("k=a,b", "varchar(20)").unwrap(),
        ];
        let pool = make_pool(&columns);
        pool.register_table_tags(
            "weather station",
            vec![Value::VarChar("north east".into()), Value::VarChar("a=b,c".into())],
        );
        let guard = fill(&pool, "weather station", &[(999, vec![Value::Float(1.0)])]);
        let slot = guard.table(0).unwrap();

        let mut line = String::new();
        to_influx(&columns, &tags, &slot, 0, &mut line).unwrap();
        assert_eq!(
            line,
            "weather\\ station,region\\ name=north\\ east,k\\=a\\,b=a\\=b\\,c f=1 999"
        );
    }

    #[test]
    fn test_influx_field_types() {
        let columns = vec![
            ColumnSchema::new("f_float", "float").unwrap(),
            ColumnSchema::new("f_double", "double").unwrap(),
            ColumnSchema::new("f_int", "int").unwrap(),
            ColumnSchema::new("f_bool", "bool").unwrap(),
            ColumnSchema::new("f_str", "varchar(20)").unwrap(),
        ];
        let pool = make_pool(&columns);
        let guard = fill(
            &pool,
            "m",
            &[(
                123_456_789,
                vec![
                    Value::Float(1.5),
                    Value::Double(2.75),
                    Value::Int(42),
                    Value::Bool(true),
                    Value::VarChar("a\"b\\c".into()),
                ],
            )],
        );
        let slot = guard.table(0).unwrap();

        let mut line = String::new();
        to_influx(&columns, &[], &slot, 0, &mut line).unwrap();
        assert_eq!(
            line,
            "m f_float=1.5,f_double=2.75,f_int=42i,f_bool=true,f_str=\"a\\\"b\\\\c\" 123456789"
        );
    }

    #[test]
    fn test_influx_skips_null_fields() {
        let columns = vec![
            ColumnSchema::new("a", "int").unwrap(),
            ColumnSchema::new("b", "int").unwrap(),
        ];
        let pool = make_pool(&columns);
        let guard = fill(&pool, "m", &[(7, vec![Value::Null, Value::Int(2)])]);
        let slot = guard.table(0).unwrap();

        let mut line = String::new();
        to_influx(&columns, &[], &slot, 0, &mut line).unwrap();
        assert_eq!(line, "m b=2i 7");
    }

    #[test]
    fn test_json_row_ordering() {
        let columns = vec![
            ColumnSchema::new("temp", "float").unwrap(),
            ColumnSchema::new("humidity", "int").unwrap(),
            ColumnSchema::new("location", "varchar(20)").unwrap(),
        ];
        let pool = make_pool(&columns);
        let guard = fill(
            &pool,
            "weather",
            &[(
                1_609_459_200_000,
                vec![Value::Float(25.5), Value::Int(60), Value::VarChar("factory-1".into())],
            )],
        );
        let slot = guard.table(0).unwrap();

        let map = to_json(&columns, &[], &slot, 0, "tb_name").unwrap();
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, ["tb_name", "ts", "temp", "humidity", "location"]);
        assert_eq!(map["tb_name"], Json::String("weather".into()));
        assert_eq!(map["ts"], Json::Number(1_609_459_200_000i64.into()));
        assert_eq!(map["humidity"], Json::Number(60.into()));
        assert_eq!(map["location"], Json::String("factory-1".into()));
    }

    #[test]
    fn test_json_omits_tbname_key_when_empty() {
        let columns = vec![ColumnSchema::new("value", "double").unwrap()];
        let pool = make_pool(&columns);
        let guard = fill(&pool, "t1", &[(1_609_459_201_000, vec![Value::Double(123.456)])]);
        let slot = guard.table(0).unwrap();

        let map = to_json(&columns, &[], &slot, 0, "").unwrap();
        assert!(!map.contains_key("tb_name"));
        assert_eq!(map["ts"], Json::Number(1_609_459_201_000i64.into()));
    }

    #[test]
    fn test_row_out_of_range() {
        let columns = vec![ColumnSchema::new("c1", "int").unwrap()];
        let pool = make_pool(&columns);
        let guard = fill(&pool, "t1", &[(1, vec![Value::Int(100)])]);
        let slot = guard.table(0).unwrap();
        assert!(matches!(
            to_json(&columns, &[], &slot, 1, ""),
            Err(EngineError::RowOutOfRange { .. })
        ));
        let mut line = String::new();
        assert!(to_influx(&columns, &[], &slot, 1, &mut line).is_err());
    }
}
