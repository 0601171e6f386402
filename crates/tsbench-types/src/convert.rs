//! Per-column value ⇄ bytes converters.
//!
//! A [`ColumnHandler`] is built once per column (at pool construction) and
//! holds plain function pointers for the hot path, so no value matching
//! happens per row. Fixed-width values are stored little-endian; variable
//! values byte-truncate at the declared capacity boundary.

use crate::error::TypeError;
use crate::schema::ColumnSchema;
use crate::tag::TypeTag;
use crate::utf16;
use crate::value::{DecimalValue, Value};

/// Immutable per-column facts the converter functions need.
#[derive(Debug, Clone)]
pub struct HandlerMeta {
    /// Column type tag.
    pub tag: TypeTag,
    /// Fixed element size in bytes (0 for variable columns).
    pub size: usize,
    /// Variable capacity in bytes (0 for fixed columns).
    pub max_length: usize,
    /// Decimal precision.
    pub precision: u32,
    /// Decimal scale.
    pub scale: u32,
}

type FixedWriter = fn(&Value, &mut [u8], &HandlerMeta) -> Result<(), TypeError>;
type VarWriter = fn(&Value, &mut [u8], &HandlerMeta) -> Result<usize, TypeError>;
type FixedReader = fn(&[u8], &HandlerMeta) -> Value;
type VarReader = fn(&[u8], &HandlerMeta) -> Value;

/// Converter record for one column.
#[derive(Debug, Clone)]
pub struct ColumnHandler {
    meta: HandlerMeta,
    write_fixed: FixedWriter,
    write_var: VarWriter,
    read_fixed: FixedReader,
    read_var: VarReader,
}

impl ColumnHandler {
    /// Build the handler for a column schema.
    #[must_use]
    pub fn new(col: &ColumnSchema) -> Self {
        let meta = HandlerMeta {
            tag: col.tag,
            size: col.fixed_size().unwrap_or(0),
            max_length: col.max_length(),
            precision: col.precision.unwrap_or(0),
            scale: col.scale.unwrap_or(0),
        };
        let (write_fixed, write_var, read_fixed, read_var): (
            FixedWriter,
            VarWriter,
            FixedReader,
            VarReader,
        ) = match col.tag {
            TypeTag::Bool => (w_bool, w_not_var, r_bool, r_not_var),
            TypeTag::TinyInt => (w_i8, w_not_var, r_i8, r_not_var),
            TypeTag::UTinyInt => (w_u8, w_not_var, r_u8, r_not_var),
            TypeTag::SmallInt => (w_i16, w_not_var, r_i16, r_not_var),
            TypeTag::USmallInt => (w_u16, w_not_var, r_u16, r_not_var),
            TypeTag::Int => (w_i32, w_not_var, r_i32, r_not_var),
            TypeTag::UInt => (w_u32, w_not_var, r_u32, r_not_var),
            TypeTag::BigInt => (w_i64, w_not_var, r_i64, r_not_var),
            TypeTag::UBigInt => (w_u64, w_not_var, r_u64, r_not_var),
            TypeTag::Float => (w_f32, w_not_var, r_f32, r_not_var),
            TypeTag::Double => (w_f64, w_not_var, r_f64, r_not_var),
            TypeTag::Decimal => (w_decimal, w_not_var, r_decimal, r_not_var),
            TypeTag::NChar => (w_not_fixed, w_nchar, r_not_fixed, r_nchar),
            TypeTag::VarChar | TypeTag::Binary => (w_not_fixed, w_string, r_not_fixed, r_string),
            TypeTag::Json => (w_not_fixed, w_json, r_not_fixed, r_json),
            TypeTag::VarBinary => (w_not_fixed, w_bytes, r_not_fixed, r_bytes),
            TypeTag::Geometry => (w_not_fixed, w_geometry, r_not_fixed, r_geometry),
        };
        Self { meta, write_fixed, write_var, read_fixed, read_var }
    }

    /// Per-column facts.
    #[must_use]
    pub fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    /// Whether the column is fixed-width.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        !self.meta.tag.is_var_length()
    }

    /// Copy a fixed-width value's bytes into `dest` (exactly element size).
    pub fn write_fixed(&self, value: &Value, dest: &mut [u8]) -> Result<(), TypeError> {
        if dest.len() < self.meta.size {
            return Err(TypeError::BufferTooSmall {
                needed: self.meta.size,
                available: dest.len(),
            });
        }
        (self.write_fixed)(value, dest, &self.meta)
    }

    /// Serialize a variable-length value into `dest`, truncating at its
    /// end; returns the number of bytes written.
    pub fn write_var(&self, value: &Value, dest: &mut [u8]) -> Result<usize, TypeError> {
        (self.write_var)(value, dest, &self.meta)
    }

    /// Read a fixed-width value back out of its element bytes.
    #[must_use]
    pub fn read_fixed(&self, src: &[u8]) -> Value {
        (self.read_fixed)(src, &self.meta)
    }

    /// Read a variable-length value back out of its slot bytes.
    #[must_use]
    pub fn read_var(&self, src: &[u8]) -> Value {
        (self.read_var)(src, &self.meta)
    }

    /// Stable textual rendering of a value of this column's type.
    #[must_use]
    pub fn render(&self, value: &Value) -> String {
        value.render()
    }
}

/// Build the handler table for a column set.
#[must_use]
pub fn build_handlers(columns: &[ColumnSchema]) -> Vec<ColumnHandler> {
    columns.iter().map(ColumnHandler::new).collect()
}

fn mismatch(meta: &HandlerMeta, value: &Value) -> TypeError {
    TypeError::TypeMismatch { expected: meta.tag.name(), actual: value.type_name() }
}

macro_rules! fixed_int {
    ($w:ident, $r:ident, $variant:ident, $ty:ty) => {
        fn $w(value: &Value, dest: &mut [u8], meta: &HandlerMeta) -> Result<(), TypeError> {
            match value {
                Value::$variant(v) => {
                    dest[..size_of::<$ty>()].copy_from_slice(&v.to_le_bytes());
                    Ok(())
                }
                other => Err(mismatch(meta, other)),
            }
        }

        fn $r(src: &[u8], _meta: &HandlerMeta) -> Value {
            let mut buf = [0u8; size_of::<$ty>()];
            buf.copy_from_slice(&src[..size_of::<$ty>()]);
            Value::$variant(<$ty>::from_le_bytes(buf))
        }
    };
}

fixed_int!(w_i8, r_i8, TinyInt, i8);
fixed_int!(w_u8, r_u8, UTinyInt, u8);
fixed_int!(w_i16, r_i16, SmallInt, i16);
fixed_int!(w_u16, r_u16, USmallInt, u16);
fixed_int!(w_i32, r_i32, Int, i32);
fixed_int!(w_u32, r_u32, UInt, u32);
fixed_int!(w_i64, r_i64, BigInt, i64);
fixed_int!(w_u64, r_u64, UBigInt, u64);
fixed_int!(w_f32, r_f32, Float, f32);
fixed_int!(w_f64, r_f64, Double, f64);

fn w_bool(value: &Value, dest: &mut [u8], meta: &HandlerMeta) -> Result<(), TypeError> {
    match value {
        Value::Bool(v) => {
            dest[0] = u8::from(*v);
            Ok(())
        }
        other => Err(mismatch(meta, other)),
    }
}

fn r_bool(src: &[u8], _meta: &HandlerMeta) -> Value {
    Value::Bool(src[0] != 0)
}

fn w_decimal(value: &Value, dest: &mut [u8], meta: &HandlerMeta) -> Result<(), TypeError> {
    match value {
        Value::Decimal(v) => {
            let scaled = v.to_scaled_i128()?;
            if meta.size == 8 {
                let narrow = i64::try_from(scaled)
                    .map_err(|_| TypeError::InvalidDecimal(v.repr.clone()))?;
                dest[..8].copy_from_slice(&narrow.to_le_bytes());
            } else {
                dest[..16].copy_from_slice(&scaled.to_le_bytes());
            }
            Ok(())
        }
        other => Err(mismatch(meta, other)),
    }
}

fn r_decimal(src: &[u8], meta: &HandlerMeta) -> Value {
    let scaled = if meta.size == 8 {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&src[..8]);
        i128::from(i64::from_le_bytes(buf))
    } else {
        let mut buf = [0u8; 16];
        buf.copy_from_slice(&src[..16]);
        i128::from_le_bytes(buf)
    };
    Value::Decimal(DecimalValue {
        repr: render_scaled(scaled, meta.scale),
        precision: meta.precision,
        scale: meta.scale,
    })
}

/// Render a scaled integer back into a decimal literal.
fn render_scaled(scaled: i128, scale: u32) -> String {
    if scale == 0 {
        return scaled.to_string();
    }
    let sign = if scaled < 0 { "-" } else { "" };
    let digits = scaled.unsigned_abs().to_string();
    let scale = scale as usize;
    if digits.len() > scale {
        let (int_part, frac_part) = digits.split_at(digits.len() - scale);
        format!("{sign}{int_part}.{frac_part}")
    } else {
        format!("{sign}0.{digits:0>scale$}")
    }
}

fn copy_truncated(bytes: &[u8], dest: &mut [u8]) -> usize {
    let len = bytes.len().min(dest.len());
    dest[..len].copy_from_slice(&bytes[..len]);
    len
}

fn w_string(value: &Value, dest: &mut [u8], meta: &HandlerMeta) -> Result<usize, TypeError> {
    match value {
        Value::VarChar(v) => Ok(copy_truncated(v.as_bytes(), dest)),
        other => Err(mismatch(meta, other)),
    }
}

fn r_string(src: &[u8], _meta: &HandlerMeta) -> Value {
    Value::VarChar(String::from_utf8_lossy(src).into_owned())
}

fn w_nchar(value: &Value, dest: &mut [u8], meta: &HandlerMeta) -> Result<usize, TypeError> {
    match value {
        Value::NChar(units) => {
            // Truncate at a code-unit boundary.
            let max_units = dest.len() / 2;
            let take = units.len().min(max_units);
            Ok(copy_truncated(&utf16::to_le_bytes(&units[..take]), dest))
        }
        other => Err(mismatch(meta, other)),
    }
}

fn r_nchar(src: &[u8], _meta: &HandlerMeta) -> Value {
    Value::NChar(utf16::from_le_bytes(src))
}

fn w_json(value: &Value, dest: &mut [u8], meta: &HandlerMeta) -> Result<usize, TypeError> {
    match value {
        Value::Json(v) => Ok(copy_truncated(v.as_bytes(), dest)),
        other => Err(mismatch(meta, other)),
    }
}

fn r_json(src: &[u8], _meta: &HandlerMeta) -> Value {
    Value::Json(String::from_utf8_lossy(src).into_owned())
}

fn w_bytes(value: &Value, dest: &mut [u8], meta: &HandlerMeta) -> Result<usize, TypeError> {
    match value {
        Value::VarBinary(v) => Ok(copy_truncated(v, dest)),
        other => Err(mismatch(meta, other)),
    }
}

fn r_bytes(src: &[u8], _meta: &HandlerMeta) -> Value {
    Value::VarBinary(src.to_vec())
}

fn w_geometry(value: &Value, dest: &mut [u8], meta: &HandlerMeta) -> Result<usize, TypeError> {
    match value {
        Value::Geometry(v) => Ok(copy_truncated(v.as_bytes(), dest)),
        other => Err(mismatch(meta, other)),
    }
}

fn r_geometry(src: &[u8], _meta: &HandlerMeta) -> Value {
    Value::Geometry(String::from_utf8_lossy(src).into_owned())
}

fn w_not_var(value: &Value, _dest: &mut [u8], meta: &HandlerMeta) -> Result<usize, TypeError> {
    Err(mismatch(meta, value))
}

fn w_not_fixed(value: &Value, _dest: &mut [u8], meta: &HandlerMeta) -> Result<(), TypeError> {
    Err(mismatch(meta, value))
}

fn r_not_var(_src: &[u8], _meta: &HandlerMeta) -> Value {
    Value::Null
}

fn r_not_fixed(_src: &[u8], _meta: &HandlerMeta) -> Value {
    Value::Null
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::schema::ColumnSchema;

    fn handler(type_str: &str) -> ColumnHandler {
        ColumnHandler::new(&ColumnSchema::new("c", type_str).unwrap())
    }

    #[test]
    fn test_fixed_int_roundtrip() {
        let h = handler("int");
        let mut buf = [0u8; 4];
        h.write_fixed(&Value::Int(-42), &mut buf).unwrap();
        assert_eq!(h.read_fixed(&buf), Value::Int(-42));
    }

    #[test]
    fn test_fixed_float_roundtrip() {
        let h = handler("float");
        let mut buf = [0u8; 4];
        h.write_fixed(&Value::Float(3.14), &mut buf).unwrap();
        assert_eq!(h.read_fixed(&buf), Value::Float(3.14));
    }

    #[test]
    fn test_fixed_mismatch() {
        let h = handler("int");
        let mut buf = [0u8; 4];
        let err = h.write_fixed(&Value::Float(1.0), &mut buf).unwrap_err();
        assert!(matches!(err, TypeError::TypeMismatch { .. }));
    }

    #[test]
    fn test_fixed_buffer_too_small() {
        let h = handler("bigint");
        let mut buf = [0u8; 4];
        assert!(matches!(
            h.write_fixed(&Value::BigInt(1), &mut buf),
            Err(TypeError::BufferTooSmall { needed: 8, available: 4 })
        ));
    }

    #[test]
    fn test_var_string_truncation() {
        let h = handler("varchar(4)");
        let mut buf = [0u8; 4];
        let n = h.write_var(&Value::VarChar("hello".into()), &mut buf).unwrap();
        assert_eq!(n, 4);
        assert_eq!(h.read_var(&buf[..n]), Value::VarChar("hell".into()));
    }

    #[test]
    fn test_var_binary_with_nul_bytes() {
        let h = handler("varbinary(8)");
        let mut buf = [0u8; 8];
        let data = vec![0u8, 1, 0, 255];
        let n = h.write_var(&Value::VarBinary(data.clone()), &mut buf).unwrap();
        assert_eq!(n, 4);
        assert_eq!(h.read_var(&buf[..n]), Value::VarBinary(data));
    }

    #[test]
    fn test_nchar_roundtrip_and_boundary() {
        let h = handler("nchar(8)");
        let units: Vec<u16> = "你好ab".encode_utf16().collect();
        let mut buf = [0u8; 32];
        let n = h.write_var(&Value::NChar(units.clone()), &mut buf).unwrap();
        assert_eq!(n, 8);
        assert_eq!(h.read_var(&buf[..n]), Value::NChar(units));

        // Truncation never splits a code unit.
        let mut small = [0u8; 5];
        let n = h.write_var(&Value::NChar(vec![0x4F60, 0x597D, 0x41]), &mut small).unwrap();
        assert_eq!(n, 4);
    }

    #[test]
    fn test_decimal64_roundtrip() {
        let h = handler("decimal(10,2)");
        let mut buf = [0u8; 8];
        let v = Value::Decimal(DecimalValue { repr: "12.34".into(), precision: 10, scale: 2 });
        h.write_fixed(&v, &mut buf).unwrap();
        assert_eq!(
            h.read_fixed(&buf),
            Value::Decimal(DecimalValue { repr: "12.34".into(), precision: 10, scale: 2 })
        );
    }

    #[test]
    fn test_decimal128_roundtrip() {
        let h = handler("decimal(30,4)");
        let mut buf = [0u8; 16];
        let v = Value::Decimal(DecimalValue {
            repr: "-123456789012345678.9012".into(),
            precision: 30,
            scale: 4,
        });
        h.write_fixed(&v, &mut buf).unwrap();
        let Value::Decimal(back) = h.read_fixed(&buf) else {
            panic!("expected decimal")
        };
        assert_eq!(back.repr, "-123456789012345678.9012");
    }

    #[test]
    fn test_render_scaled_small_magnitude() {
        assert_eq!(render_scaled(5, 2), "0.05");
        assert_eq!(render_scaled(-5, 2), "-0.05");
        assert_eq!(render_scaled(1234, 2), "12.34");
        assert_eq!(render_scaled(7, 0), "7");
    }
}
