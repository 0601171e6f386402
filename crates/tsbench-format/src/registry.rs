//! Formatter dispatch.
//!
//! One registry is built at startup (see
//! [`FormatterRegistry::with_builtins`]) and threaded through the insert
//! orchestrator; keys are `<domain>.<format>` strings such as
//! `insert.sql` or `insert.kafka`.

use std::collections::HashMap;

use tsbench_engine::BlockGuard;
use tsbench_types::ColumnSchema;

use crate::error::FormatError;
use crate::msg::MsgFormatter;
use crate::result::{FormatResult, InsertMode};
use crate::sql::SqlInsertFormatter;
use crate::stmt::StmtInsertFormatter;

/// Options for prepared-statement formatting.
#[derive(Debug, Clone)]
pub struct StmtOptions {
    /// Bind payload version; only `v2` is supported.
    pub version: String,
    /// Bind tag values and let the sink create tables on the fly.
    pub auto_create_table: bool,
    /// The sink speaks the websocket protocol (selects super-table mode).
    pub websocket: bool,
}

impl Default for StmtOptions {
    fn default() -> Self {
        Self { version: "v2".to_owned(), auto_create_table: false, websocket: true }
    }
}

/// What a message payload carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MsgContent {
    /// One JSON object per row.
    #[default]
    Json,
    /// Influx line protocol.
    Influx,
}

/// Options for message (MQTT/Kafka) formatting.
#[derive(Debug, Clone)]
pub struct MsgOptions {
    /// Payload content type.
    pub content: MsgContent,
    /// Topic pattern with `{placeholder}` tokens.
    pub topic: String,
    /// JSON key carrying the table name; empty omits it.
    pub tbname_key: String,
    /// Kafka partition key pattern; `None` sends unkeyed messages.
    pub key_pattern: Option<String>,
    /// Key serializer name (`string-utf8`, `int8` … `uint64`).
    pub key_serializer: String,
    /// Rows grouped into one message payload.
    pub records_per_message: usize,
    /// Payload compression: `none`, `gzip` or `zstd`.
    pub compression: String,
    /// Payload encoding: `UTF-8`, `GBK`, `GB18030` or `BIG5`.
    pub encoding: String,
}

impl Default for MsgOptions {
    fn default() -> Self {
        Self {
            content: MsgContent::Json,
            topic: "tsbench/{table}".to_owned(),
            tbname_key: "table".to_owned(),
            key_pattern: None,
            key_serializer: "string-utf8".to_owned(),
            records_per_message: 1,
            compression: "none".to_owned(),
            encoding: "UTF-8".to_owned(),
        }
    }
}

/// Everything a formatter factory needs to know.
#[derive(Debug, Clone, Default)]
pub struct FormatConfig {
    /// Target database name.
    pub database: String,
    /// Super table (schema) name.
    pub super_table: String,
    /// Prepared-statement options.
    pub stmt: StmtOptions,
    /// Message options.
    pub msg: MsgOptions,
}

/// What `prepare` hands back to the orchestrator.
#[derive(Debug, Clone)]
pub struct Prepared {
    /// SQL to pre-prepare at the sink, if the format uses one.
    pub sql: Option<String>,
    /// Insert mode the formatter decided on.
    pub mode: InsertMode,
}

/// An insert-data formatter.
///
/// `prepare` runs once per writer set and fixes the insert mode;
/// `format` is then called per block and must stay read-only.
pub trait InsertFormatter: Send + std::fmt::Debug {
    /// Decide the insert mode and build the prepared SQL.
    fn prepare(
        &mut self,
        columns: &[ColumnSchema],
        tags: &[ColumnSchema],
    ) -> Result<Prepared, FormatError>;

    /// Turn a filled block into a sink payload.
    fn format(
        &self,
        block: BlockGuard,
        columns: &[ColumnSchema],
        tags: &[ColumnSchema],
        is_recover: bool,
    ) -> Result<FormatResult, FormatError>;
}

type Factory =
    Box<dyn Fn(&FormatConfig) -> Result<Box<dyn InsertFormatter>, FormatError> + Send + Sync>;

/// Maps `<domain>.<format>` keys to formatter factories.
pub struct FormatterRegistry {
    creators: HashMap<String, Factory>,
}

impl FormatterRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { creators: HashMap::new() }
    }

    /// The registry with the built-in insert formatters registered.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("insert.sql", |config| {
            Ok(Box::new(SqlInsertFormatter::new(&config.database)))
        });
        registry.register("insert.stmt", |config| {
            Ok(Box::new(StmtInsertFormatter::new(config)))
        });
        registry.register("insert.mqtt", |config| {
            Ok(Box::new(MsgFormatter::new(&config.msg, false)?))
        });
        registry.register("insert.kafka", |config| {
            Ok(Box::new(MsgFormatter::new(&config.msg, true)?))
        });
        registry
    }

    /// Register a factory under a dispatch key.
    pub fn register<F>(&mut self, key: &str, factory: F)
    where
        F: Fn(&FormatConfig) -> Result<Box<dyn InsertFormatter>, FormatError>
            + Send
            + Sync
            + 'static,
    {
        self.creators.insert(key.to_owned(), Box::new(factory));
    }

    /// Instantiate the formatter registered under `key`.
    pub fn create(
        &self,
        key: &str,
        config: &FormatConfig,
    ) -> Result<Box<dyn InsertFormatter>, FormatError> {
        match self.creators.get(key) {
            Some(factory) => {
                tracing::debug!(key, "formatter created");
                factory(config)
            }
            None => Err(FormatError::UnknownFormatter(key.to_owned())),
        }
    }

    /// Registered dispatch keys.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.creators.keys().map(String::as_str).collect()
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_keys() {
        let registry = FormatterRegistry::with_builtins();
        let mut keys = registry.keys();
        keys.sort_unstable();
        assert_eq!(keys, ["insert.kafka", "insert.mqtt", "insert.sql", "insert.stmt"]);
    }

    #[test]
    fn test_unknown_key() {
        let registry = FormatterRegistry::with_builtins();
        let err = registry.create("insert.xml", &FormatConfig::default()).unwrap_err();
        assert!(matches!(err, FormatError::UnknownFormatter(k) if k == "insert.xml"));
    }

    #[test]
    fn test_create_builtin() {
        let registry = FormatterRegistry::with_builtins();
        assert!(registry.create("insert.sql", &FormatConfig::default()).is_ok());
        assert!(registry.create("insert.mqtt", &FormatConfig::default()).is_ok());
    }
}
