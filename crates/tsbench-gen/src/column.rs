//! Per-column value producers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution as _, Normal};

use tsbench_types::schema::Distribution;
use tsbench_types::{ColumnSchema, DecimalValue, GeneratorSpec, TypeTag, Value, utf16};

use crate::error::GenError;
use crate::expr::Expression;

/// ASCII corpus for random varchar/binary content.
const ASCII_CORPUS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Common CJK characters for `chinese: true` string columns.
const CJK_CORPUS: &str = "的一是了我不人在他有这上们来到时大地为子中你说生国年着就那和要她出也得里后自以会家可下而过天去能对小多然于心学么之都好看起发当没成只如事把还用第样道想作种开美总从无情己面最女但现前些所同日手又行意动";

enum Kind {
    Random {
        distribution: Distribution,
        min: f64,
        max: f64,
        bool_values: Vec<bool>,
        corpus: Vec<char>,
    },
    Order {
        min: i64,
        max: i64,
        next: i64,
    },
    Expression(Expression),
    List {
        values: Vec<Value>,
        next: usize,
    },
}

/// One column's value producer.
pub struct ColumnGenerator {
    schema: ColumnSchema,
    kind: Kind,
    rng: StdRng,
}

impl ColumnGenerator {
    /// Build the producer a column schema asks for.
    pub fn new(schema: &ColumnSchema) -> Result<Self, GenError> {
        let kind = match &schema.generator {
            GeneratorSpec::Random { distribution, min, max, values, chinese, corpus } => {
                let bool_values = if schema.tag == TypeTag::Bool {
                    parse_bool_values(schema, values)?
                } else {
                    Vec::new()
                };
                let corpus: Vec<char> = match corpus {
                    Some(c) if !c.is_empty() => c.chars().collect(),
                    _ if *chinese => CJK_CORPUS.chars().collect(),
                    _ => ASCII_CORPUS.chars().collect(),
                };
                Kind::Random {
                    distribution: *distribution,
                    min: min.unwrap_or_else(|| schema.default_min()),
                    max: max.unwrap_or_else(|| schema.default_max()),
                    bool_values,
                    corpus,
                }
            }
            GeneratorSpec::Order { min, max } => {
                if !schema.tag.is_integer() {
                    return Err(GenError::OrderNotInteger {
                        column: schema.name.clone(),
                        type_name: schema.tag.name(),
                    });
                }
                if min > max {
                    return Err(GenError::EmptyOrderRange { min: *min, max: *max });
                }
                Kind::Order { min: *min, max: *max, next: *min }
            }
            GeneratorSpec::Expression { formula } => Kind::Expression(Expression::parse(formula)?),
            GeneratorSpec::FromList { values } => {
                if values.is_empty() {
                    return Err(GenError::EmptyValues(schema.name.clone()));
                }
                let parsed = values
                    .iter()
                    .map(|v| parse_literal(schema, v))
                    .collect::<Result<Vec<_>, _>>()?;
                Kind::List { values: parsed, next: 0 }
            }
            GeneratorSpec::FromCsv { path, column } => {
                let values = read_csv_column(path, *column)?;
                let parsed = values
                    .iter()
                    .map(|v| parse_literal(schema, v))
                    .collect::<Result<Vec<_>, _>>()?;
                Kind::List { values: parsed, next: 0 }
            }
            GeneratorSpec::Timestamp(_) => {
                // Timestamp columns are produced by the row generator's
                // timestamp series, never by a column producer.
                return Err(GenError::InvalidTimeExpr(schema.name.clone()));
            }
        };
        Ok(Self { schema: schema.clone(), kind, rng: StdRng::from_os_rng() })
    }

    /// The schema this producer was built from.
    #[must_use]
    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }

    /// Produce the value for one cell.
    ///
    /// `row_index` and `ts` bind `_i` / `_t` for expression columns; the
    /// other strategies ignore them.
    pub fn next(&mut self, row_index: u64, ts: i64) -> Value {
        match &mut self.kind {
            Kind::Random { distribution, min, max, bool_values, corpus } => {
                random_value(&self.schema, &mut self.rng, *distribution, *min, *max, bool_values, corpus)
            }
            Kind::Order { min, max, next } => {
                let current = *next;
                *next = if current >= *max { *min } else { current + 1 };
                int_value(self.schema.tag, current)
            }
            Kind::Expression(expr) => value_from_f64(&self.schema, expr.eval(row_index, ts)),
            Kind::List { values, next } => {
                let v = values[*next].clone();
                *next = (*next + 1) % values.len();
                v
            }
        }
    }
}

fn parse_bool_values(schema: &ColumnSchema, values: &[String]) -> Result<Vec<bool>, GenError> {
    values
        .iter()
        .map(|v| match v.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(GenError::Value(tsbench_types::TypeError::InvalidValue {
                value: v.clone(),
                type_name: schema.tag.name(),
            })),
        })
        .collect()
}

fn read_csv_column(path: &str, column: usize) -> Result<Vec<String>, GenError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| GenError::Csv { path: path.to_owned(), source })?;
    let mut out = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| GenError::Csv { path: path.to_owned(), source })?;
        if let Some(field) = record.get(column) {
            let field = field.trim();
            if !field.is_empty() {
                out.push(field.to_owned());
            }
        }
    }
    if out.is_empty() {
        return Err(GenError::CsvEmpty { path: path.to_owned(), column });
    }
    tracing::debug!(path, column, values = out.len(), "csv value source loaded");
    Ok(out)
}

fn random_value(
    schema: &ColumnSchema,
    rng: &mut StdRng,
    distribution: Distribution,
    min: f64,
    max: f64,
    bool_values: &[bool],
    corpus: &[char],
) -> Value {
    match schema.tag {
        TypeTag::Bool => {
            if bool_values.is_empty() {
                Value::Bool(rng.random::<f64>() >= 0.5)
            } else {
                Value::Bool(bool_values[rng.random_range(0..bool_values.len())])
            }
        }
        TypeTag::NChar => {
            let len = schema.len.unwrap_or(1).max(1);
            let n = rng.random_range(1..=len);
            let s: String = (0..n).map(|_| corpus[rng.random_range(0..corpus.len())]).collect();
            Value::NChar(utf16::from_utf8(s.as_bytes()))
        }
        TypeTag::VarChar | TypeTag::Binary => {
            let len = schema.len.unwrap_or(1).max(1);
            let mut s = String::new();
            while s.len() < len {
                let c = corpus[rng.random_range(0..corpus.len())];
                if s.len() + c.len_utf8() > len {
                    break;
                }
                s.push(c);
            }
            if s.is_empty() {
                s.push('x');
            }
            Value::VarChar(s)
        }
        TypeTag::Json => {
            let len = schema.len.unwrap_or(8).min(8).max(1);
            let n: u32 = rng.random_range(0..10u32.saturating_pow(len as u32 - 1));
            Value::Json(format!("{{\"k\":{n}}}"))
        }
        TypeTag::VarBinary => {
            let len = schema.len.unwrap_or(1).max(1);
            let n = rng.random_range(1..=len);
            Value::VarBinary((0..n).map(|_| rng.random::<u8>()).collect())
        }
        TypeTag::Geometry => {
            let x = draw(rng, distribution, min, max);
            let y = draw(rng, distribution, min, max);
            Value::Geometry(format!("POINT({} {})", x.trunc(), y.trunc()))
        }
        _ => value_from_f64_with(schema, draw(rng, distribution, min, max)),
    }
}

fn draw(rng: &mut StdRng, distribution: Distribution, min: f64, max: f64) -> f64 {
    if max <= min {
        return min;
    }
    match distribution {
        Distribution::Uniform => rng.random_range(min..=max),
        Distribution::Normal => {
            let mean = (min + max) / 2.0;
            let std = (max - min) / 6.0;
            match Normal::new(mean, std) {
                Ok(normal) => normal.sample(rng).clamp(min, max),
                Err(_) => mean,
            }
        }
    }
}

fn int_value(tag: TypeTag, v: i64) -> Value {
    match tag {
        TypeTag::TinyInt => Value::TinyInt(v as i8),
        TypeTag::UTinyInt => Value::UTinyInt(v as u8),
        TypeTag::SmallInt => Value::SmallInt(v as i16),
        TypeTag::USmallInt => Value::USmallInt(v as u16),
        TypeTag::Int => Value::Int(v as i32),
        TypeTag::UInt => Value::UInt(v as u32),
        TypeTag::BigInt => Value::BigInt(v),
        TypeTag::UBigInt => Value::UBigInt(v as u64),
        // Callers guarantee an integer tag.
        _ => Value::BigInt(v),
    }
}

fn value_from_f64_with(schema: &ColumnSchema, v: f64) -> Value {
    match schema.tag {
        TypeTag::Float => Value::Float(v as f32),
        TypeTag::Double => Value::Double(v),
        TypeTag::Decimal => {
            let scale = schema.scale.unwrap_or(0) as usize;
            Value::Decimal(DecimalValue {
                repr: format!("{v:.scale$}"),
                precision: schema.precision.unwrap_or(0),
                scale: schema.scale.unwrap_or(0),
            })
        }
        TypeTag::Bool => Value::Bool(v >= 0.5),
        _ => int_value(schema.tag, v as i64),
    }
}

/// Convert an expression result into the column's value type.
fn value_from_f64(schema: &ColumnSchema, v: f64) -> Value {
    match schema.tag {
        TypeTag::VarChar | TypeTag::Binary => Value::VarChar(v.to_string()),
        TypeTag::NChar => Value::NChar(utf16::from_utf8(v.to_string().as_bytes())),
        TypeTag::Json => Value::Json(format!("{{\"v\":{v}}}")),
        _ => value_from_f64_with(schema, v),
    }
}

/// Parse a literal list entry as the column's value type.
fn parse_literal(schema: &ColumnSchema, literal: &str) -> Result<Value, GenError> {
    let invalid = || {
        GenError::Value(tsbench_types::TypeError::InvalidValue {
            value: literal.to_owned(),
            type_name: schema.tag.name(),
        })
    };
    Ok(match schema.tag {
        TypeTag::Bool => match literal.to_ascii_lowercase().as_str() {
            "true" | "1" => Value::Bool(true),
            "false" | "0" => Value::Bool(false),
            _ => return Err(invalid()),
        },
        TypeTag::Float => Value::Float(literal.parse().map_err(|_| invalid())?),
        TypeTag::Double => Value::Double(literal.parse().map_err(|_| invalid())?),
        TypeTag::Decimal => {
            let d = DecimalValue {
                repr: literal.to_owned(),
                precision: schema.precision.unwrap_or(0),
                scale: schema.scale.unwrap_or(0),
            };
            d.to_scaled_i128().map_err(GenError::Value)?;
            Value::Decimal(d)
        }
        TypeTag::NChar => Value::NChar(utf16::from_utf8(literal.as_bytes())),
        TypeTag::VarChar | TypeTag::Binary => Value::VarChar(literal.to_owned()),
        TypeTag::Json => Value::Json(literal.to_owned()),
        TypeTag::VarBinary => Value::VarBinary(literal.as_bytes().to_vec()),
        TypeTag::Geometry => Value::Geometry(literal.to_owned()),
        t if t.is_integer() => {
            let v: i64 = literal.parse().map_err(|_| invalid())?;
            int_value(t, v)
        }
        _ => return Err(invalid()),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tsbench_types::GeneratorSpec;

    fn schema(type_str: &str, generator: GeneratorSpec) -> ColumnSchema {
        ColumnSchema::with_gen("c", type_str, generator).unwrap()
    }

    #[test]
    fn test_order_cycles_inclusive() {
        let s = schema("int", GeneratorSpec::Order { min: 1, max: 3 });
        let mut g = ColumnGenerator::new(&s).unwrap();
        let seq: Vec<Value> = (0..7).map(|i| g.next(i, 0)).collect();
        assert_eq!(
            seq,
            vec![
                Value::Int(1),
                Value::Int(2),
                Value::Int(3),
                Value::Int(1),
                Value::Int(2),
                Value::Int(3),
                Value::Int(1),
            ]
        );
    }

    #[test]
    fn test_order_rejects_non_integer() {
        let s = schema("float", GeneratorSpec::Order { min: 0, max: 3 });
        assert!(matches!(ColumnGenerator::new(&s), Err(GenError::OrderNotInteger { .. })));
    }

    #[test]
    fn test_order_rejects_empty_range() {
        let s = schema("int", GeneratorSpec::Order { min: 5, max: 2 });
        assert!(matches!(ColumnGenerator::new(&s), Err(GenError::EmptyOrderRange { .. })));
    }

    #[test]
    fn test_random_respects_bounds() {
        let s = schema(
            "int",
            GeneratorSpec::Random {
                distribution: Distribution::Uniform,
                min: Some(10.0),
                max: Some(20.0),
                values: Vec::new(),
                chinese: false,
                corpus: None,
            },
        );
        let mut g = ColumnGenerator::new(&s).unwrap();
        for i in 0..200 {
            let Value::Int(v) = g.next(i, 0) else { panic!("expected int") };
            assert!((10..=20).contains(&v));
        }
    }

    #[test]
    fn test_random_varchar_within_len() {
        let s = schema("varchar(8)", GeneratorSpec::default());
        let mut g = ColumnGenerator::new(&s).unwrap();
        for i in 0..50 {
            let Value::VarChar(v) = g.next(i, 0) else { panic!("expected varchar") };
            assert!(!v.is_empty() && v.len() <= 8);
        }
    }

    #[test]
    fn test_expression_binds_row_and_ts() {
        let s = schema("double", GeneratorSpec::Expression { formula: "_i * 2 + _t".into() });
        let mut g = ColumnGenerator::new(&s).unwrap();
        assert_eq!(g.next(3, 100), Value::Double(106.0));
        assert_eq!(g.next(4, 100), Value::Double(108.0));
    }

    #[test]
    fn test_fromlist_cycles_parsed_values() {
        let s = schema(
            "smallint",
            GeneratorSpec::FromList { values: vec!["7".into(), "-2".into()] },
        );
        let mut g = ColumnGenerator::new(&s).unwrap();
        assert_eq!(g.next(0, 0), Value::SmallInt(7));
        assert_eq!(g.next(1, 0), Value::SmallInt(-2));
        assert_eq!(g.next(2, 0), Value::SmallInt(7));
    }

    #[test]
    fn test_fromlist_rejects_bad_literal() {
        let s = schema("int", GeneratorSpec::FromList { values: vec!["seven".into()] });
        assert!(ColumnGenerator::new(&s).is_err());
    }

    #[test]
    fn test_bool_values_list() {
        let s = schema(
            "bool",
            GeneratorSpec::Random {
                distribution: Distribution::Uniform,
                min: None,
                max: None,
                values: vec!["true".into()],
                chinese: false,
                corpus: None,
            },
        );
        let mut g = ColumnGenerator::new(&s).unwrap();
        for i in 0..20 {
            assert_eq!(g.next(i, 0), Value::Bool(true));
        }
    }

    #[test]
    fn test_decimal_random_scale() {
        let s = schema(
            "decimal(10,2)",
            GeneratorSpec::Random {
                distribution: Distribution::Uniform,
                min: Some(0.0),
                max: Some(10.0),
                values: Vec::new(),
                chinese: false,
                corpus: None,
            },
        );
        let mut g = ColumnGenerator::new(&s).unwrap();
        let Value::Decimal(d) = g.next(0, 0) else { panic!("expected decimal") };
        let frac = d.repr.split('.').nth(1).unwrap();
        assert_eq!(frac.len(), 2);
    }
}
