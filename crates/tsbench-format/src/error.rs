//! Formatter error types.

use thiserror::Error;

/// Errors raised while building formatters or formatting blocks.
#[derive(Debug, Error)]
pub enum FormatError {
    /// No factory is registered under the dispatch key.
    #[error("unsupported formatter type: {0}")]
    UnknownFormatter(String),

    /// A column type SQL text cannot carry.
    #[error("unsupported column type for SQL insert: {0}")]
    UnsupportedSqlType(String),

    /// Unknown prepared-statement payload version.
    #[error("unsupported stmt version: {0}")]
    UnsupportedStmtVersion(String),

    /// An integer key serializer was configured with a multi-token pattern.
    #[error(
        "integer key serializer requires the pattern to be a single \
         placeholder like '{{column}}', got {0:?}"
    )]
    PatternNotSingleToken(String),

    /// Unknown key serializer name.
    #[error("unsupported key serializer: {0}")]
    UnknownKeySerializer(String),

    /// A key value that cannot be serialized as the configured integer.
    #[error("key value {value:?} does not fit serializer {serializer}")]
    KeyValueOutOfRange {
        /// Rendered key value.
        value: String,
        /// Serializer name.
        serializer: &'static str,
    },

    /// Unknown or unsupported payload compression.
    #[error("unsupported compression: {0}")]
    UnsupportedCompression(String),

    /// Unknown payload encoding.
    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// Compression failed.
    #[error("compression failed: {0}")]
    Compression(#[from] std::io::Error),

    /// A block read went out of range; contract bug.
    #[error(transparent)]
    Engine(#[from] tsbench_engine::EngineError),
}
