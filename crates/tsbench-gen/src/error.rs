//! Generator error types.

use thiserror::Error;

/// Errors raised while building or running generators.
///
/// All of these surface at init time except [`GenError::Write`], which
/// indicates a value/column mismatch and is a bug in the generator table.
#[derive(Debug, Error)]
pub enum GenError {
    /// A formula failed to parse.
    #[error("invalid expression {formula:?}: {reason}")]
    InvalidFormula {
        /// The formula source text.
        formula: String,
        /// What went wrong.
        reason: String,
    },

    /// A timestamp start/step expression failed to parse.
    #[error("invalid time expression {0:?}")]
    InvalidTimeExpr(String),

    /// An unknown timestamp precision was configured.
    #[error("invalid timestamp precision {0:?} (expected ms, us or ns)")]
    InvalidPrecision(String),

    /// `gen_type: order` was configured on a non-integer column.
    #[error("order generator requires an integer column, got {type_name} for {column}")]
    OrderNotInteger {
        /// Column name.
        column: String,
        /// Its configured type.
        type_name: &'static str,
    },

    /// An order range with `min > max`.
    #[error("order generator range is empty: [{min}, {max}]")]
    EmptyOrderRange {
        /// Configured minimum.
        min: i64,
        /// Configured maximum.
        max: i64,
    },

    /// A fromlist generator with no values.
    #[error("values list for column {0} is empty")]
    EmptyValues(String),

    /// A literal could not be parsed as the column type.
    #[error(transparent)]
    Value(#[from] tsbench_types::TypeError),

    /// A CSV source failed to open or read.
    #[error("csv source {path}: {source}")]
    Csv {
        /// File path.
        path: String,
        /// Underlying error.
        #[source]
        source: csv::Error,
    },

    /// A CSV source had no usable rows for the requested column.
    #[error("csv source {path} has no values in column {column}")]
    CsvEmpty {
        /// File path.
        path: String,
        /// Requested column index.
        column: usize,
    },

    /// A generated value could not be written into the block.
    #[error("row write failed: {0}")]
    Write(tsbench_types::TypeError),
}
