//! Top-level error type for the binary.

use thiserror::Error;

/// Everything that can take a run down.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad workflow configuration; carries the YAML context of the key.
    #[error("configuration error at {context}: {message}")]
    Config {
        /// YAML path or section of the offending key.
        context: String,
        /// What is wrong.
        message: String,
    },

    /// The workflow file could not be read.
    #[error("cannot read config file {path}: {source}")]
    ConfigFile {
        /// File path.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The workflow file failed to parse.
    #[error("invalid config file {path}: {source}")]
    ConfigParse {
        /// File path.
        path: String,
        /// Underlying error.
        #[source]
        source: serde_yaml::Error,
    },

    /// A schema type failed to parse.
    #[error(transparent)]
    Type(#[from] tsbench_types::TypeError),

    /// A generator failed to build or run.
    #[error(transparent)]
    Gen(#[from] tsbench_gen::GenError),

    /// Pool, manager or pipeline failure.
    #[error(transparent)]
    Engine(#[from] tsbench_engine::EngineError),

    /// Formatter failure.
    #[error(transparent)]
    Format(#[from] tsbench_format::FormatError),

    /// Sink failure.
    #[error(transparent)]
    Sink(#[from] tsbench_sink::SinkError),

    /// Checkpoint file failure.
    #[error("checkpoint error on {path}: {source}")]
    Checkpoint {
        /// Checkpoint file path.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A worker thread panicked; contract bug.
    #[error("worker thread panicked: {0}")]
    ThreadPanic(String),

    /// The run was cancelled by a signal.
    #[error("interrupted")]
    Interrupted,
}

impl CliError {
    /// Build a configuration error with its YAML context.
    pub fn config(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config { context: context.into(), message: message.into() }
    }
}
