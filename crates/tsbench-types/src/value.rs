//! The tagged column value.

use crate::tag::TypeTag;
use crate::utf16;

/// An exact decimal value kept as its string rendering plus the declared
/// precision and scale of the column it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalValue {
    /// Decimal literal, e.g. `"12.34"`.
    pub repr: String,
    /// Declared precision (total digits).
    pub precision: u32,
    /// Declared scale (fractional digits).
    pub scale: u32,
}

impl DecimalValue {
    /// The value as a scaled integer: `repr · 10^scale`, rounded at the
    /// declared scale.
    ///
    /// Used for the fixed binary representation in pool blocks and binds.
    pub fn to_scaled_i128(&self) -> Result<i128, crate::TypeError> {
        let mut value = rust_decimal::Decimal::from_str_exact(self.repr.trim())
            .map_err(|_| crate::TypeError::InvalidDecimal(self.repr.clone()))?;
        value.rescale(self.scale);
        Ok(value.mantissa())
    }
}

/// One cell of generated data.
///
/// The variant set mirrors [`TypeTag`]; a separate `Null` variant carries
/// cells whose null flag is set when values are read back out of a block.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL.
    Null,
    /// Boolean.
    Bool(bool),
    /// 8-bit signed integer.
    TinyInt(i8),
    /// 8-bit unsigned integer.
    UTinyInt(u8),
    /// 16-bit signed integer.
    SmallInt(i16),
    /// 16-bit unsigned integer.
    USmallInt(u16),
    /// 32-bit signed integer.
    Int(i32),
    /// 32-bit unsigned integer.
    UInt(u32),
    /// 64-bit signed integer.
    BigInt(i64),
    /// 64-bit unsigned integer.
    UBigInt(u64),
    /// 32-bit float.
    Float(f32),
    /// 64-bit float.
    Double(f64),
    /// Exact decimal.
    Decimal(DecimalValue),
    /// UTF-16 character data.
    NChar(Vec<u16>),
    /// UTF-8 character data (varchar / binary).
    VarChar(String),
    /// Opaque JSON text.
    Json(String),
    /// Raw bytes.
    VarBinary(Vec<u8>),
    /// WKT geometry text.
    Geometry(String),
}

impl Value {
    /// Whether this is the NULL value.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The value as `i64` for the integer family, widening as needed.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::TinyInt(v) => Some(i64::from(*v)),
            Self::SmallInt(v) => Some(i64::from(*v)),
            Self::Int(v) => Some(i64::from(*v)),
            Self::BigInt(v) => Some(*v),
            Self::UTinyInt(v) => Some(i64::from(*v)),
            Self::USmallInt(v) => Some(i64::from(*v)),
            Self::UInt(v) => Some(i64::from(*v)),
            Self::UBigInt(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// The value as `f64` for the numeric family.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(f64::from(*v)),
            Self::Double(v) => Some(*v),
            other => other.as_i64().map(|v| v as f64),
        }
    }

    /// The value's type name, used in mismatch errors.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => TypeTag::Bool.name(),
            Self::TinyInt(_) => TypeTag::TinyInt.name(),
            Self::UTinyInt(_) => TypeTag::UTinyInt.name(),
            Self::SmallInt(_) => TypeTag::SmallInt.name(),
            Self::USmallInt(_) => TypeTag::USmallInt.name(),
            Self::Int(_) => TypeTag::Int.name(),
            Self::UInt(_) => TypeTag::UInt.name(),
            Self::BigInt(_) => TypeTag::BigInt.name(),
            Self::UBigInt(_) => TypeTag::UBigInt.name(),
            Self::Float(_) => TypeTag::Float.name(),
            Self::Double(_) => TypeTag::Double.name(),
            Self::Decimal(_) => TypeTag::Decimal.name(),
            Self::NChar(_) => TypeTag::NChar.name(),
            Self::VarChar(_) => TypeTag::VarChar.name(),
            Self::Json(_) => TypeTag::Json.name(),
            Self::VarBinary(_) => TypeTag::VarBinary.name(),
            Self::Geometry(_) => TypeTag::Geometry.name(),
        }
    }

    /// Stable textual rendering, used by error messages and pattern
    /// generators. NChar decodes to UTF-8, binary renders lossily.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Null => "NULL".to_owned(),
            Self::Bool(v) => v.to_string(),
            Self::TinyInt(v) => v.to_string(),
            Self::UTinyInt(v) => v.to_string(),
            Self::SmallInt(v) => v.to_string(),
            Self::USmallInt(v) => v.to_string(),
            Self::Int(v) => v.to_string(),
            Self::UInt(v) => v.to_string(),
            Self::BigInt(v) => v.to_string(),
            Self::UBigInt(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::Double(v) => v.to_string(),
            Self::Decimal(v) => v.repr.clone(),
            Self::NChar(v) => utf16::to_utf8(v),
            Self::VarChar(v) | Self::Json(v) | Self::Geometry(v) => v.clone(),
            Self::VarBinary(v) => String::from_utf8_lossy(v).into_owned(),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::BigInt(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::VarChar(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::VarChar(v.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_scaled() {
        let d = DecimalValue { repr: "12.34".into(), precision: 10, scale: 2 };
        assert_eq!(d.to_scaled_i128().unwrap(), 1234);

        let d = DecimalValue { repr: "-0.5".into(), precision: 10, scale: 2 };
        assert_eq!(d.to_scaled_i128().unwrap(), -50);

        let d = DecimalValue { repr: "7".into(), precision: 10, scale: 3 };
        assert_eq!(d.to_scaled_i128().unwrap(), 7000);

        // Extra fractional digits round at the declared scale.
        let d = DecimalValue { repr: "1.2399".into(), precision: 10, scale: 2 };
        assert_eq!(d.to_scaled_i128().unwrap(), 124);
    }

    #[test]
    fn test_decimal_invalid() {
        let d = DecimalValue { repr: "abc".into(), precision: 10, scale: 2 };
        assert!(d.to_scaled_i128().is_err());
    }

    #[test]
    fn test_as_i64_widening() {
        assert_eq!(Value::TinyInt(-3).as_i64(), Some(-3));
        assert_eq!(Value::UBigInt(u64::MAX).as_i64(), None);
        assert_eq!(Value::VarChar("x".into()).as_i64(), None);
    }

    #[test]
    fn test_render() {
        assert_eq!(Value::Bool(true).render(), "true");
        assert_eq!(Value::Float(25.5).render(), "25.5");
        assert_eq!(Value::NChar(vec![0x4F60, 0x597D]).render(), "你好");
        assert_eq!(Value::Null.render(), "NULL");
    }
}
