//! Declarative column schema parsed from type strings.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::TypeError;
use crate::tag::TypeTag;

#[allow(clippy::unwrap_used)] // literal pattern
static VARLEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(varchar|binary|nchar|varbinary|geometry)\s*\(\s*(\d+)\s*\)$").unwrap()
});
#[allow(clippy::unwrap_used)] // literal pattern
static DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^decimal\s*\(\s*(\d+)\s*(?:,\s*(\d+)\s*)?\)$").unwrap()
});

/// Default length for `json` columns declared without one.
const JSON_DEFAULT_LEN: usize = 200;

/// Value distribution for random generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    /// Uniform over `[min, max]`.
    #[default]
    Uniform,
    /// Normal centered on the midpoint of `[min, max]`, clamped to it.
    Normal,
}

/// Timestamp column configuration: where the series starts, at which
/// precision it is stored, and how far apart consecutive rows are.
///
/// `start` may be an integer literal, `now()`, or `now()±N<unit>`; `step`
/// is `N` or `N<unit>` with unit ∈ ns/us/ms/s/m/h/d. Parsing happens in
/// the generator crate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimestampSpec {
    /// Series start expression.
    #[serde(default = "TimestampSpec::default_start")]
    pub start: String,
    /// Storage precision: `ms`, `us` or `ns`.
    #[serde(default = "TimestampSpec::default_precision")]
    pub precision: String,
    /// Step between consecutive rows of one table.
    #[serde(default = "TimestampSpec::default_step")]
    pub step: String,
}

impl TimestampSpec {
    fn default_start() -> String {
        "now".to_owned()
    }

    fn default_precision() -> String {
        "ms".to_owned()
    }

    fn default_step() -> String {
        "1".to_owned()
    }
}

impl Default for TimestampSpec {
    fn default() -> Self {
        Self {
            start: Self::default_start(),
            precision: Self::default_precision(),
            step: Self::default_step(),
        }
    }
}

/// How a column's values are produced.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorSpec {
    /// Random values per distribution, bounded by `[min, max]`.
    Random {
        /// Distribution shape.
        distribution: Distribution,
        /// Lower bound; per-type default when absent.
        min: Option<f64>,
        /// Upper bound; per-type default when absent.
        max: Option<f64>,
        /// Explicit value list (required for `bool` columns with values).
        values: Vec<String>,
        /// Draw string content from a CJK corpus.
        chinese: bool,
        /// Explicit byte corpus for string/binary columns.
        corpus: Option<String>,
    },
    /// Cycle `[min, max]` inclusive; integer columns only.
    Order {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
    /// Arithmetic expression over `_i` (row index) and `_t` (timestamp).
    Expression {
        /// The formula source text.
        formula: String,
    },
    /// Cycle a user-supplied value list.
    FromList {
        /// Literal values, parsed per column type.
        values: Vec<String>,
    },
    /// Cycle a column read from a CSV file at init.
    FromCsv {
        /// File path.
        path: String,
        /// Zero-based column index within the file.
        column: usize,
    },
    /// Monotonic timestamp series; only valid for the first column.
    Timestamp(TimestampSpec),
}

impl Default for GeneratorSpec {
    fn default() -> Self {
        Self::Random {
            distribution: Distribution::Uniform,
            min: None,
            max: None,
            values: Vec::new(),
            chinese: false,
            corpus: None,
        }
    }
}

/// One configured column (or tag) of a table schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSchema {
    /// Column name.
    pub name: String,
    /// Original type string, e.g. `varchar(20)`.
    pub type_str: String,
    /// Parsed type tag.
    pub tag: TypeTag,
    /// Declared max length for variable-length types.
    pub len: Option<usize>,
    /// Serialized capacity in bytes (4·len for nchar, len otherwise).
    pub cap: Option<usize>,
    /// Decimal precision.
    pub precision: Option<u32>,
    /// Decimal scale.
    pub scale: Option<u32>,
    /// How many physical columns this config expands to.
    pub count: usize,
    /// Marked as a primary key column.
    pub primary_key: bool,
    /// Extra column properties passed through to DDL.
    pub props: Option<String>,
    /// Probability a cell is NULL.
    pub null_ratio: Option<f32>,
    /// Probability a whole row is dropped.
    pub none_ratio: Option<f32>,
    /// Value production strategy.
    pub generator: GeneratorSpec,
}

impl ColumnSchema {
    /// Parse a column from its name and type string.
    pub fn new(name: impl Into<String>, type_str: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        let type_str = type_str.into();
        let lower = type_str.trim().to_ascii_lowercase();

        let (tag, len, cap, precision, scale) = if let Some(caps) = VARLEN_RE.captures(&lower) {
            let tag = TypeTag::parse(&caps[1])?;
            let len: usize = caps[2]
                .parse()
                .map_err(|_| TypeError::MissingLength(lower.clone()))?;
            let cap = if tag == TypeTag::NChar { len * 4 } else { len };
            (tag, Some(len), Some(cap), None, None)
        } else if let Some(caps) = DECIMAL_RE.captures(&lower) {
            let precision: u32 = caps[1]
                .parse()
                .map_err(|_| TypeError::MissingPrecision(lower.clone()))?;
            let scale: u32 = caps
                .get(2)
                .map(|m| m.as_str().parse())
                .transpose()
                .map_err(|_| TypeError::MissingPrecision(lower.clone()))?
                .unwrap_or(0);
            if precision == 0 || precision > 38 || scale > precision {
                return Err(TypeError::InvalidPrecision { precision, scale });
            }
            (TypeTag::Decimal, None, None, Some(precision), Some(scale))
        } else {
            let tag = TypeTag::parse(&lower)?;
            match tag {
                TypeTag::Decimal => return Err(TypeError::MissingPrecision(lower)),
                t if t.is_var_length() && t != TypeTag::Json => {
                    return Err(TypeError::MissingLength(lower));
                }
                TypeTag::Json => {
                    (tag, Some(JSON_DEFAULT_LEN), Some(JSON_DEFAULT_LEN), None, None)
                }
                _ => (tag, None, None, None, None),
            }
        };

        Ok(Self {
            name,
            type_str,
            tag,
            len,
            cap,
            precision,
            scale,
            count: 1,
            primary_key: false,
            props: None,
            null_ratio: None,
            none_ratio: None,
            generator: GeneratorSpec::default(),
        })
    }

    /// Parse a column and attach a generator spec.
    pub fn with_gen(
        name: impl Into<String>,
        type_str: impl Into<String>,
        generator: GeneratorSpec,
    ) -> Result<Self, TypeError> {
        let mut col = Self::new(name, type_str)?;
        col.generator = generator;
        Ok(col)
    }

    /// Fixed storage width in bytes; `None` for variable-length columns.
    #[must_use]
    pub fn fixed_size(&self) -> Option<usize> {
        self.tag.fixed_size(self.precision)
    }

    /// Max byte length of the variable region slot for this column.
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.cap.unwrap_or(0)
    }

    /// Wire type code for binds.
    #[must_use]
    pub fn wire_type(&self) -> u8 {
        self.tag.wire_type(self.precision)
    }

    /// Default lower bound for random generation.
    ///
    /// Narrow integers span their full range; wider numeric types default
    /// to the 16-bit range to keep generated magnitudes readable.
    #[must_use]
    pub fn default_min(&self) -> f64 {
        match self.tag {
            TypeTag::Bool => 0.0,
            TypeTag::TinyInt => f64::from(i8::MIN),
            TypeTag::UTinyInt | TypeTag::USmallInt | TypeTag::UInt | TypeTag::UBigInt => 0.0,
            TypeTag::SmallInt
            | TypeTag::Int
            | TypeTag::BigInt
            | TypeTag::Float
            | TypeTag::Double
            | TypeTag::Decimal => f64::from(i16::MIN),
            _ => 0.0,
        }
    }

    /// Default upper bound for random generation; see [`Self::default_min`].
    #[must_use]
    pub fn default_max(&self) -> f64 {
        match self.tag {
            TypeTag::Bool => 1.0,
            TypeTag::TinyInt => f64::from(i8::MAX),
            TypeTag::UTinyInt => f64::from(u8::MAX),
            TypeTag::SmallInt
            | TypeTag::Int
            | TypeTag::BigInt
            | TypeTag::Float
            | TypeTag::Double
            | TypeTag::Decimal => f64::from(i16::MAX),
            TypeTag::USmallInt | TypeTag::UInt | TypeTag::UBigInt => f64::from(u16::MAX),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_varchar() {
        let col = ColumnSchema::new("location", "VARCHAR(20)").unwrap();
        assert_eq!(col.tag, TypeTag::VarChar);
        assert_eq!(col.len, Some(20));
        assert_eq!(col.cap, Some(20));
        assert!(col.fixed_size().is_none());
    }

    #[test]
    fn test_parse_nchar_capacity() {
        let col = ColumnSchema::new("label", "nchar(16)").unwrap();
        assert_eq!(col.tag, TypeTag::NChar);
        assert_eq!(col.len, Some(16));
        assert_eq!(col.cap, Some(64));
    }

    #[test]
    fn test_parse_decimal() {
        let col = ColumnSchema::new("amount", "decimal(10,2)").unwrap();
        assert_eq!(col.tag, TypeTag::Decimal);
        assert_eq!(col.precision, Some(10));
        assert_eq!(col.scale, Some(2));
        assert_eq!(col.fixed_size(), Some(8));

        let wide = ColumnSchema::new("amount", "decimal(30,4)").unwrap();
        assert_eq!(wide.fixed_size(), Some(16));
    }

    #[test]
    fn test_parse_decimal_single_arg() {
        let col = ColumnSchema::new("amount", "decimal(12)").unwrap();
        assert_eq!(col.precision, Some(12));
        assert_eq!(col.scale, Some(0));
    }

    #[test]
    fn test_json_default_len() {
        let col = ColumnSchema::new("meta", "json").unwrap();
        assert_eq!(col.len, Some(200));
    }

    #[test]
    fn test_varlen_without_length_rejected() {
        assert!(matches!(
            ColumnSchema::new("s", "varchar"),
            Err(TypeError::MissingLength(_))
        ));
        assert!(matches!(
            ColumnSchema::new("g", "geometry"),
            Err(TypeError::MissingLength(_))
        ));
    }

    #[test]
    fn test_decimal_without_precision_rejected() {
        assert!(matches!(
            ColumnSchema::new("d", "decimal"),
            Err(TypeError::MissingPrecision(_))
        ));
    }

    #[test]
    fn test_invalid_precision_rejected() {
        assert!(ColumnSchema::new("d", "decimal(40,2)").is_err());
        assert!(ColumnSchema::new("d", "decimal(5,9)").is_err());
    }

    #[test]
    fn test_timestamp_maps_to_bigint() {
        let col = ColumnSchema::new("ts", "TIMESTAMP").unwrap();
        assert_eq!(col.tag, TypeTag::BigInt);
        assert_eq!(col.fixed_size(), Some(8));
    }
}
