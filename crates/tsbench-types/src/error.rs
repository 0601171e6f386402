//! Type conversion error types.

use thiserror::Error;

/// Errors that can occur while parsing schema types or converting values.
#[derive(Debug, Error)]
pub enum TypeError {
    /// The schema named a type outside the closed type table.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// A variable-length type was declared without a length.
    #[error("variable length type must specify a length: {0}")]
    MissingLength(String),

    /// A decimal type was declared without precision and scale.
    #[error("decimal type must specify precision and scale: {0}")]
    MissingPrecision(String),

    /// Declared precision or scale is outside the supported range.
    #[error("invalid decimal precision/scale ({precision},{scale})")]
    InvalidPrecision {
        /// Declared precision.
        precision: u32,
        /// Declared scale.
        scale: u32,
    },

    /// A value's tag did not match the column it was written to.
    #[error("type mismatch: column is {expected}, value is {actual}")]
    TypeMismatch {
        /// The column's type name.
        expected: &'static str,
        /// The value's type name.
        actual: &'static str,
    },

    /// A fixed-width destination was smaller than the value.
    #[error("buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall {
        /// Bytes needed.
        needed: usize,
        /// Bytes available.
        available: usize,
    },

    /// A decimal literal could not be parsed.
    #[error("invalid decimal literal: {0}")]
    InvalidDecimal(String),

    /// A list value could not be parsed as the column type.
    #[error("invalid value {value:?} for column type {type_name}")]
    InvalidValue {
        /// The offending literal.
        value: String,
        /// The column type it was parsed against.
        type_name: &'static str,
    },
}
