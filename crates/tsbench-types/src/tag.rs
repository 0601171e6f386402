//! The closed column type table.

use crate::error::TypeError;

/// Wire type codes of the target TSDB's closed type table.
///
/// These are the `buffer_type` values carried in prepared-statement binds
/// and the stmt2 wire body.
pub mod wire {
    /// BOOL wire code.
    pub const BOOL: u8 = 1;
    /// TINYINT wire code.
    pub const TINYINT: u8 = 2;
    /// SMALLINT wire code.
    pub const SMALLINT: u8 = 3;
    /// INT wire code.
    pub const INT: u8 = 4;
    /// BIGINT wire code.
    pub const BIGINT: u8 = 5;
    /// FLOAT wire code.
    pub const FLOAT: u8 = 6;
    /// DOUBLE wire code.
    pub const DOUBLE: u8 = 7;
    /// VARCHAR (and BINARY) wire code.
    pub const VARCHAR: u8 = 8;
    /// TIMESTAMP wire code.
    pub const TIMESTAMP: u8 = 9;
    /// NCHAR wire code.
    pub const NCHAR: u8 = 10;
    /// TINYINT UNSIGNED wire code.
    pub const UTINYINT: u8 = 11;
    /// SMALLINT UNSIGNED wire code.
    pub const USMALLINT: u8 = 12;
    /// INT UNSIGNED wire code.
    pub const UINT: u8 = 13;
    /// BIGINT UNSIGNED wire code.
    pub const UBIGINT: u8 = 14;
    /// JSON wire code.
    pub const JSON: u8 = 15;
    /// VARBINARY wire code.
    pub const VARBINARY: u8 = 16;
    /// DECIMAL (128-bit) wire code.
    pub const DECIMAL: u8 = 17;
    /// GEOMETRY wire code.
    pub const GEOMETRY: u8 = 20;
    /// DECIMAL64 wire code.
    pub const DECIMAL64: u8 = 21;
}

/// Closed set of column types the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Boolean.
    Bool,
    /// 8-bit signed integer.
    TinyInt,
    /// 8-bit unsigned integer.
    UTinyInt,
    /// 16-bit signed integer.
    SmallInt,
    /// 16-bit unsigned integer.
    USmallInt,
    /// 32-bit signed integer.
    Int,
    /// 32-bit unsigned integer.
    UInt,
    /// 64-bit signed integer. `timestamp` columns store as this tag.
    BigInt,
    /// 64-bit unsigned integer.
    UBigInt,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// Exact decimal with declared precision and scale.
    Decimal,
    /// UTF-16 character data.
    NChar,
    /// UTF-8 character data (`varchar`).
    VarChar,
    /// UTF-8 character data (`binary`, stored like varchar).
    Binary,
    /// Opaque JSON text.
    Json,
    /// Raw bytes.
    VarBinary,
    /// WKT geometry text.
    Geometry,
}

impl TypeTag {
    /// Parse a bare (parameterless) type name, case already lowered.
    pub fn parse(name: &str) -> Result<Self, TypeError> {
        Ok(match name {
            "bool" => Self::Bool,
            "tinyint" => Self::TinyInt,
            "tinyint unsigned" => Self::UTinyInt,
            "smallint" => Self::SmallInt,
            "smallint unsigned" => Self::USmallInt,
            "int" => Self::Int,
            "int unsigned" => Self::UInt,
            "bigint" | "timestamp" => Self::BigInt,
            "bigint unsigned" => Self::UBigInt,
            "float" => Self::Float,
            "double" => Self::Double,
            "decimal" => Self::Decimal,
            "nchar" => Self::NChar,
            "varchar" => Self::VarChar,
            "binary" => Self::Binary,
            "json" => Self::Json,
            "varbinary" => Self::VarBinary,
            "geometry" => Self::Geometry,
            other => return Err(TypeError::UnsupportedType(other.to_owned())),
        })
    }

    /// Whether values of this type live in the variable-length region.
    #[must_use]
    pub const fn is_var_length(&self) -> bool {
        matches!(
            self,
            Self::NChar
                | Self::VarChar
                | Self::Binary
                | Self::Json
                | Self::VarBinary
                | Self::Geometry
        )
    }

    /// Fixed storage width in bytes, or `None` for variable-length types.
    ///
    /// Decimal width depends on the declared precision: up to 18 digits fit
    /// a 64-bit scaled integer, wider values take 128 bits.
    #[must_use]
    pub const fn fixed_size(&self, precision: Option<u32>) -> Option<usize> {
        match self {
            Self::Bool | Self::TinyInt | Self::UTinyInt => Some(1),
            Self::SmallInt | Self::USmallInt => Some(2),
            Self::Int | Self::UInt | Self::Float => Some(4),
            Self::BigInt | Self::UBigInt | Self::Double => Some(8),
            Self::Decimal => match precision {
                Some(p) if p <= 18 => Some(8),
                _ => Some(16),
            },
            _ => None,
        }
    }

    /// Wire type code for prepared-statement binds.
    #[must_use]
    pub const fn wire_type(&self, precision: Option<u32>) -> u8 {
        match self {
            Self::Bool => wire::BOOL,
            Self::TinyInt => wire::TINYINT,
            Self::UTinyInt => wire::UTINYINT,
            Self::SmallInt => wire::SMALLINT,
            Self::USmallInt => wire::USMALLINT,
            Self::Int => wire::INT,
            Self::UInt => wire::UINT,
            Self::BigInt => wire::BIGINT,
            Self::UBigInt => wire::UBIGINT,
            Self::Float => wire::FLOAT,
            Self::Double => wire::DOUBLE,
            Self::Decimal => match precision {
                Some(p) if p <= 18 => wire::DECIMAL64,
                _ => wire::DECIMAL,
            },
            Self::NChar => wire::NCHAR,
            Self::VarChar | Self::Binary => wire::VARCHAR,
            Self::Json => wire::JSON,
            Self::VarBinary => wire::VARBINARY,
            Self::Geometry => wire::GEOMETRY,
        }
    }

    /// Whether SQL rendering wraps values of this type in single quotes.
    #[must_use]
    pub const fn needs_quotes(&self) -> bool {
        matches!(self, Self::NChar | Self::VarChar | Self::Binary | Self::Json)
    }

    /// Whether this is a numeric type (integers, floats, decimal).
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.is_integer() | matches!(self, Self::Float | Self::Double | Self::Decimal)
    }

    /// Whether this is an integer type.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::TinyInt
                | Self::UTinyInt
                | Self::SmallInt
                | Self::USmallInt
                | Self::Int
                | Self::UInt
                | Self::BigInt
                | Self::UBigInt
        )
    }

    /// Canonical lowercase name of the type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::TinyInt => "tinyint",
            Self::UTinyInt => "tinyint unsigned",
            Self::SmallInt => "smallint",
            Self::USmallInt => "smallint unsigned",
            Self::Int => "int",
            Self::UInt => "int unsigned",
            Self::BigInt => "bigint",
            Self::UBigInt => "bigint unsigned",
            Self::Float => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::NChar => "nchar",
            Self::VarChar => "varchar",
            Self::Binary => "binary",
            Self::Json => "json",
            Self::VarBinary => "varbinary",
            Self::Geometry => "geometry",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!(TypeTag::parse("bool").unwrap(), TypeTag::Bool);
        assert_eq!(TypeTag::parse("bigint unsigned").unwrap(), TypeTag::UBigInt);
        assert_eq!(TypeTag::parse("timestamp").unwrap(), TypeTag::BigInt);
        assert!(TypeTag::parse("blob").is_err());
    }

    #[test]
    fn test_var_length_classification() {
        assert!(TypeTag::NChar.is_var_length());
        assert!(TypeTag::VarBinary.is_var_length());
        assert!(!TypeTag::Double.is_var_length());
        assert!(!TypeTag::Decimal.is_var_length());
    }

    #[test]
    fn test_fixed_sizes() {
        assert_eq!(TypeTag::Bool.fixed_size(None), Some(1));
        assert_eq!(TypeTag::Float.fixed_size(None), Some(4));
        assert_eq!(TypeTag::Decimal.fixed_size(Some(10)), Some(8));
        assert_eq!(TypeTag::Decimal.fixed_size(Some(19)), Some(16));
        assert_eq!(TypeTag::VarChar.fixed_size(None), None);
    }

    #[test]
    fn test_wire_types() {
        assert_eq!(TypeTag::BigInt.wire_type(None), wire::BIGINT);
        assert_eq!(TypeTag::Binary.wire_type(None), wire::VARCHAR);
        assert_eq!(TypeTag::Decimal.wire_type(Some(12)), wire::DECIMAL64);
        assert_eq!(TypeTag::Decimal.wire_type(Some(30)), wire::DECIMAL);
    }

    #[test]
    fn test_quote_classification() {
        assert!(TypeTag::VarChar.needs_quotes());
        assert!(TypeTag::Json.needs_quotes());
        assert!(!TypeTag::VarBinary.needs_quotes());
        assert!(!TypeTag::Geometry.needs_quotes());
        assert!(!TypeTag::Int.needs_quotes());
    }
}
