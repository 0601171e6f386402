//! Workflow configuration: YAML parsing, overrides, validation.
//!
//! Top level: `tdengine`, `mqtt`, `kafka`, `schema`, `concurrency`,
//! `jobs`. Every mapping rejects unknown keys with an error naming the
//! key and its YAML context; required fields are rejected on absence.

use std::collections::BTreeMap;

use serde::Deserialize;

use tsbench_types::schema::{Distribution, TimestampSpec};
use tsbench_types::{ColumnSchema, GeneratorSpec};

use tsbench_sink::{KafkaTarget, MqttTarget, TdengineTarget};

use crate::error::CliError;

/// The whole workflow file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkflowConfig {
    /// TSDB sink endpoint.
    #[serde(default)]
    pub tdengine: TdengineTarget,
    /// MQTT sink endpoint.
    #[serde(default)]
    pub mqtt: MqttTarget,
    /// Kafka sink endpoint.
    #[serde(default)]
    pub kafka: KafkaTarget,
    /// Table schema shared by the steps.
    pub schema: SchemaConfig,
    /// Scheduler worker threads.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    /// Jobs by name.
    pub jobs: BTreeMap<String, JobConfig>,
}

fn default_concurrency() -> usize {
    1
}

/// One job: dependencies plus ordered steps.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobConfig {
    /// Jobs that must complete first.
    #[serde(default)]
    pub needs: Vec<String>,
    /// Steps executed in order.
    pub steps: Vec<StepConfig>,
}

/// One workflow step.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepConfig {
    /// Registered action name, e.g. `tdengine/insert-data`.
    pub uses: String,
    /// Action-specific configuration.
    #[serde(default)]
    pub with: serde_yaml::Value,
}

/// Table naming: a generated `prefix{from..from+count}` range or a CSV
/// column.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableNameConfig {
    /// Name prefix.
    #[serde(default = "default_table_prefix")]
    pub prefix: String,
    /// First suffix.
    #[serde(default)]
    pub from: u64,
    /// How many tables.
    #[serde(default = "default_table_count")]
    pub count: u64,
    /// Read names from this CSV file instead.
    #[serde(default)]
    pub csv: Option<String>,
    /// Zero-based CSV column holding the names.
    #[serde(default)]
    pub csv_column: usize,
}

fn default_table_prefix() -> String {
    "d".to_owned()
}

fn default_table_count() -> u64 {
    8
}

impl Default for TableNameConfig {
    fn default() -> Self {
        Self {
            prefix: default_table_prefix(),
            from: 0,
            count: default_table_count(),
            csv: None,
            csv_column: 0,
        }
    }
}

/// The declared table schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaConfig {
    /// Super table name.
    pub name: String,
    /// Child table naming.
    #[serde(default)]
    pub tbname: TableNameConfig,
    /// Data columns; a leading timestamp column is inserted when absent.
    pub columns: Vec<ColumnEntry>,
    /// Tag columns.
    #[serde(default)]
    pub tags: Vec<ColumnEntry>,
}

/// One declared column.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnEntry {
    /// Column name.
    pub name: String,
    /// Type string, e.g. `varchar(20)`.
    #[serde(rename = "type")]
    pub type_str: String,
    /// Generation strategy: `random`, `order`, `expression`, `fromlist`
    /// or `csv`.
    #[serde(default)]
    pub gen_type: Option<String>,
    /// Distribution for `random`.
    #[serde(default)]
    pub distribution: Option<String>,
    /// Lower bound (`random`) / range start (`order`).
    #[serde(default)]
    pub min: Option<f64>,
    /// Upper bound (`random`) / range end (`order`).
    #[serde(default)]
    pub max: Option<f64>,
    /// Value list for `fromlist` (and bool `random`).
    #[serde(default)]
    pub values: Option<Vec<serde_yaml::Value>>,
    /// Formula for `expression`.
    #[serde(default)]
    pub expr: Option<String>,
    /// Draw string content from the CJK corpus.
    #[serde(default)]
    pub chinese: bool,
    /// Explicit string corpus.
    #[serde(default)]
    pub corpus: Option<String>,
    /// CSV file for `csv`.
    #[serde(default)]
    pub csv: Option<String>,
    /// Zero-based CSV column for `csv`.
    #[serde(default)]
    pub csv_column: usize,
    /// Physical columns this entry expands to.
    #[serde(default = "default_count")]
    pub count: usize,
    /// Primary-key marker.
    #[serde(default)]
    pub primary_key: bool,
    /// Extra DDL properties.
    #[serde(default)]
    pub props: Option<String>,
    /// Probability a cell is NULL.
    #[serde(default)]
    pub null_ratio: Option<f32>,
    /// Probability a row is dropped.
    #[serde(default)]
    pub none_ratio: Option<f32>,
    /// Timestamp series start (timestamp column only).
    #[serde(default)]
    pub start: Option<String>,
    /// Timestamp precision (timestamp column only).
    #[serde(default)]
    pub precision: Option<String>,
    /// Timestamp step (timestamp column only).
    #[serde(default)]
    pub step: Option<String>,
}

fn default_count() -> usize {
    1
}

impl ColumnEntry {
    fn context(&self) -> String {
        format!("schema column {}", self.name)
    }

    fn yaml_values_as_strings(&self) -> Vec<String> {
        self.values
            .iter()
            .flatten()
            .map(|v| match v {
                serde_yaml::Value::String(s) => s.clone(),
                serde_yaml::Value::Bool(b) => b.to_string(),
                serde_yaml::Value::Number(n) => n.to_string(),
                other => serde_yaml::to_string(other).unwrap_or_default().trim().to_owned(),
            })
            .collect()
    }

    /// Build the parsed schema column (without `count` expansion).
    pub fn to_schema(&self) -> Result<ColumnSchema, CliError> {
        let is_timestamp = self.type_str.trim().eq_ignore_ascii_case("timestamp");
        let generator = match self.gen_type.as_deref() {
            _ if is_timestamp => GeneratorSpec::Timestamp(TimestampSpec {
                start: self.start.clone().unwrap_or_else(|| "now".to_owned()),
                precision: self.precision.clone().unwrap_or_else(|| "ms".to_owned()),
                step: self.step.clone().unwrap_or_else(|| "1".to_owned()),
            }),
            None | Some("random") => GeneratorSpec::Random {
                distribution: match self.distribution.as_deref() {
                    None | Some("uniform") => Distribution::Uniform,
                    Some("normal") => Distribution::Normal,
                    Some(other) => {
                        return Err(CliError::config(
                            self.context(),
                            format!("unknown distribution {other:?}"),
                        ));
                    }
                },
                min: self.min,
                max: self.max,
                values: self.yaml_values_as_strings(),
                chinese: self.chinese,
                corpus: self.corpus.clone(),
            },
            Some("order") => GeneratorSpec::Order {
                min: self.min.unwrap_or(0.0) as i64,
                max: self.max.unwrap_or(f64::from(i16::MAX)) as i64,
            },
            Some("expression") => GeneratorSpec::Expression {
                formula: self.expr.clone().ok_or_else(|| {
                    CliError::config(self.context(), "gen_type 'expression' requires 'expr'")
                })?,
            },
            Some("fromlist") => {
                let values = self.yaml_values_as_strings();
                if values.is_empty() {
                    return Err(CliError::config(
                        self.context(),
                        "gen_type 'fromlist' requires a non-empty 'values' list",
                    ));
                }
                GeneratorSpec::FromList { values }
            }
            Some("csv") => GeneratorSpec::FromCsv {
                path: self.csv.clone().ok_or_else(|| {
                    CliError::config(self.context(), "gen_type 'csv' requires 'csv'")
                })?,
                column: self.csv_column,
            },
            Some(other) => {
                return Err(CliError::config(
                    self.context(),
                    format!("unknown gen_type {other:?}"),
                ));
            }
        };

        let mut column = ColumnSchema::with_gen(&self.name, &self.type_str, generator)
            .map_err(|e| CliError::config(self.context(), e.to_string()))?;
        column.count = self.count.max(1);
        column.primary_key = self.primary_key;
        column.props = self.props.clone();
        column.null_ratio = self.null_ratio;
        column.none_ratio = self.none_ratio;
        Ok(column)
    }
}

/// Expand entries into physical columns, honoring `count`.
pub fn expand_columns(entries: &[ColumnEntry]) -> Result<Vec<ColumnSchema>, CliError> {
    let mut out = Vec::new();
    for entry in entries {
        let base = entry.to_schema()?;
        if base.count <= 1 {
            out.push(base);
        } else {
            for i in 1..=base.count {
                let mut col = base.clone();
                col.name = format!("{}{}", base.name, i);
                col.count = 1;
                out.push(col);
            }
        }
    }
    Ok(out)
}

impl SchemaConfig {
    /// `(timestamp column, data columns)`; a default timestamp column is
    /// inserted when the declaration omits one.
    pub fn split_columns(&self) -> Result<(ColumnSchema, Vec<ColumnSchema>), CliError> {
        let mut entries = self.columns.clone();
        let has_ts = entries
            .first()
            .is_some_and(|c| c.type_str.trim().eq_ignore_ascii_case("timestamp"));
        if !has_ts {
            entries.insert(
                0,
                ColumnEntry {
                    name: "ts".to_owned(),
                    type_str: "timestamp".to_owned(),
                    gen_type: None,
                    distribution: None,
                    min: None,
                    max: None,
                    values: None,
                    expr: None,
                    chinese: false,
                    corpus: None,
                    csv: None,
                    csv_column: 0,
                    count: 1,
                    primary_key: false,
                    props: None,
                    null_ratio: None,
                    none_ratio: None,
                    start: None,
                    precision: None,
                    step: None,
                },
            );
        }
        let ts = entries[0].to_schema()?;
        let data = expand_columns(&entries[1..])?;
        Ok((ts, data))
    }

    /// Expanded tag columns.
    pub fn tag_columns(&self) -> Result<Vec<ColumnSchema>, CliError> {
        expand_columns(&self.tags)
    }

    /// Resolve the child table names.
    pub fn table_names(&self) -> Result<Vec<String>, CliError> {
        if let Some(path) = &self.tbname.csv {
            let mut reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_path(path)
                .map_err(|e| {
                    CliError::config("schema.tbname.csv", format!("{path}: {e}"))
                })?;
            let mut names = Vec::new();
            for record in reader.records() {
                let record = record.map_err(|e| {
                    CliError::config("schema.tbname.csv", format!("{path}: {e}"))
                })?;
                if let Some(field) = record.get(self.tbname.csv_column) {
                    let field = field.trim();
                    if !field.is_empty() {
                        names.push(field.to_owned());
                    }
                }
            }
            return Ok(names);
        }
        Ok((self.tbname.from..self.tbname.from + self.tbname.count)
            .map(|i| format!("{}{}", self.tbname.prefix, i))
            .collect())
    }
}

/// Flow-control and batching knobs of an insert step.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct GenerationEntry {
    /// Row quota per table.
    pub rows_per_table: u64,
    /// Rows per batch block; 0 is unlimited.
    pub rows_per_batch: usize,
    /// Rows per table per round-robin turn; 0 disables interlace mode.
    pub interlace: u64,
    /// Rows per second across the step's producers; 0 disables.
    pub flow_control: u64,
    /// Producer thread count.
    pub generate_threads: usize,
    /// Share one data region across a block's table slots.
    pub tables_reuse_data: bool,
    /// Detached data regions; 0 gives every block its own.
    pub num_cached_blocks: usize,
    /// Pool block override; 0 derives from queue sizing.
    pub memory_blocks: usize,
    /// Out-of-order injection windows.
    pub disorder: Vec<DisorderEntry>,
}

impl Default for GenerationEntry {
    fn default() -> Self {
        Self {
            rows_per_table: 10_000,
            rows_per_batch: 10_000,
            interlace: 0,
            flow_control: 0,
            generate_threads: 1,
            tables_reuse_data: false,
            num_cached_blocks: 0,
            memory_blocks: 0,
            disorder: Vec::new(),
        }
    }
}

/// One out-of-order injection window.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisorderEntry {
    /// Window start, in the timestamp column's precision or `now()±...`.
    pub time_start: serde_yaml::Value,
    /// Window end.
    pub time_end: serde_yaml::Value,
    /// Probability a row in the window is disordered.
    pub ratio: f64,
    /// Max backward offset, milliseconds.
    pub latency_range: i64,
}

/// Failure handling of an insert step.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct FailureEntry {
    /// Retries per batch.
    pub max_retries: usize,
    /// Sleep between retries, milliseconds.
    pub retry_interval_ms: u64,
    /// `exit` or `skip`.
    pub on_failure: String,
}

impl Default for FailureEntry {
    fn default() -> Self {
        Self { max_retries: 3, retry_interval_ms: 1000, on_failure: "exit".to_owned() }
    }
}

/// Inter-batch pacing of an insert step.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TimeIntervalEntry {
    /// Master switch.
    pub enabled: bool,
    /// `fixed`, `first_to_first` or `last_to_first`.
    pub interval_strategy: Option<String>,
    /// Fixed strategy parameters.
    pub fixed_interval: Option<FixedIntervalEntry>,
    /// Dynamic strategy parameters.
    pub dynamic_interval: Option<DynamicIntervalEntry>,
}

/// `fixed` pacing parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct FixedIntervalEntry {
    /// Base sleep, milliseconds.
    pub base_interval: u64,
    /// Random deviation bound, milliseconds.
    pub random_deviation: u64,
}

impl Default for FixedIntervalEntry {
    fn default() -> Self {
        Self { base_interval: 1000, random_deviation: 0 }
    }
}

/// `first_to_first` / `last_to_first` pacing parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct DynamicIntervalEntry {
    /// Minimum interval, milliseconds.
    pub min_interval: u64,
    /// Maximum interval, milliseconds.
    pub max_interval: u64,
}

impl Default for DynamicIntervalEntry {
    fn default() -> Self {
        Self { min_interval: 0, max_interval: 1000 }
    }
}

/// Checkpointing of an insert step.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CheckpointEntry {
    /// Master switch.
    pub enabled: bool,
    /// Commit interval, seconds.
    pub interval_sec: u64,
    /// File path; defaults to `<database>.<stable>.ckpt`.
    pub path: Option<String>,
}

/// Prepared-statement options of an insert step.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct StmtEntry {
    /// Bind payload version.
    pub version: String,
    /// Bind tags and auto-create tables.
    pub auto_create_table: bool,
}

impl Default for StmtEntry {
    fn default() -> Self {
        Self { version: "v2".to_owned(), auto_create_table: false }
    }
}

/// The `with:` block of an insert-data / publish / produce step.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct InsertStepConfig {
    /// Payload format: `sql` or `stmt` (TSDB), `json` or `influx`
    /// (MQTT/Kafka).
    pub format: String,
    /// Prepared-statement options.
    pub stmt: StmtEntry,
    /// Topic pattern for message sinks.
    pub topic: Option<String>,
    /// Rows grouped into one message payload.
    pub records_per_message: usize,
    /// Kafka key pattern.
    pub key_pattern: Option<String>,
    /// Kafka key serializer.
    pub key_serializer: String,
    /// Message payload compression.
    pub compression: String,
    /// Message payload encoding.
    pub encoding: String,
    /// JSON key carrying the table name.
    pub tbname_key: String,
    /// Generation knobs.
    pub generation: GenerationEntry,
    /// Writer thread count.
    pub insert_threads: usize,
    /// Pipeline queue capacity per consumer.
    pub queue_capacity: usize,
    /// Hold writers until the queue is this full (0 disables warmup).
    pub queue_warmup_ratio: f64,
    /// One shared MPMC queue instead of per-consumer queues.
    pub shared_queue: bool,
    /// Pin producer/consumer threads to cores (best effort).
    pub thread_affinity: bool,
    /// Request real-time scheduling (best effort).
    pub thread_realtime: bool,
    /// Retry and failure policy.
    pub failure_handling: FailureEntry,
    /// Inter-batch pacing.
    pub time_interval: TimeIntervalEntry,
    /// Checkpointing.
    pub checkpoint: CheckpointEntry,
}

impl Default for InsertStepConfig {
    fn default() -> Self {
        Self {
            format: "sql".to_owned(),
            stmt: StmtEntry::default(),
            topic: None,
            records_per_message: 1,
            key_pattern: None,
            key_serializer: "string-utf8".to_owned(),
            compression: "none".to_owned(),
            encoding: "UTF-8".to_owned(),
            tbname_key: "table".to_owned(),
            generation: GenerationEntry::default(),
            insert_threads: 1,
            queue_capacity: 100,
            queue_warmup_ratio: 0.0,
            shared_queue: false,
            thread_affinity: false,
            thread_realtime: false,
            failure_handling: FailureEntry::default(),
            time_interval: TimeIntervalEntry::default(),
            checkpoint: CheckpointEntry::default(),
        }
    }
}

impl InsertStepConfig {
    /// Cross-field validation.
    pub fn validate(&self, context: &str) -> Result<(), CliError> {
        if self.generation.interlace > 0
            && self.generation.rows_per_batch > 0
            && self.generation.interlace as usize > self.generation.rows_per_batch
        {
            return Err(CliError::config(
                format!("{context}.generation"),
                format!(
                    "interlace ({}) must not exceed rows_per_batch ({})",
                    self.generation.interlace, self.generation.rows_per_batch
                ),
            ));
        }
        match self.failure_handling.on_failure.as_str() {
            "exit" | "skip" => {}
            other => {
                return Err(CliError::config(
                    format!("{context}.failure_handling.on_failure"),
                    format!("invalid value {other:?} (expected 'exit' or 'skip')"),
                ));
            }
        }
        if self.time_interval.enabled {
            match self.time_interval.interval_strategy.as_deref() {
                Some("fixed" | "first_to_first" | "last_to_first") => {}
                Some(other) => {
                    return Err(CliError::config(
                        format!("{context}.time_interval.interval_strategy"),
                        format!("invalid value {other:?}"),
                    ));
                }
                None => {
                    return Err(CliError::config(
                        format!("{context}.time_interval"),
                        "enabled but no interval_strategy given",
                    ));
                }
            }
        }
        if !(0.0..=1.0).contains(&self.queue_warmup_ratio) {
            return Err(CliError::config(
                format!("{context}.queue_warmup_ratio"),
                "must lie in [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Decode a step's `with:` block, naming the step on error.
///
/// An absent block decodes like an empty mapping, so every option falls
/// back to its default.
pub fn decode_step<T: serde::de::DeserializeOwned>(
    step: &StepConfig,
    context: &str,
) -> Result<T, CliError> {
    let value = if step.with.is_null() {
        serde_yaml::Value::Mapping(serde_yaml::Mapping::new())
    } else {
        step.with.clone()
    };
    serde_yaml::from_value(value)
        .map_err(|e| CliError::config(format!("{context}.with"), e.to_string()))
}

impl WorkflowConfig {
    /// Parse from YAML text.
    pub fn from_yaml(text: &str, path: &str) -> Result<Self, CliError> {
        let mut config: Self = serde_yaml::from_str(text)
            .map_err(|source| CliError::ConfigParse { path: path.to_owned(), source })?;
        config.tdengine.resolve_dsn()?;
        config.validate()?;
        Ok(config)
    }

    /// Structural validation: job graph sanity and step action names.
    pub fn validate(&self) -> Result<(), CliError> {
        for (name, job) in &self.jobs {
            for dependency in &job.needs {
                if !self.jobs.contains_key(dependency) {
                    return Err(CliError::config(
                        format!("jobs.{name}.needs"),
                        format!("unknown job {dependency:?}"),
                    ));
                }
            }
            if job.steps.is_empty() {
                return Err(CliError::config(format!("jobs.{name}.steps"), "no steps"));
            }
        }
        Ok(())
    }

    /// Apply `TAOS_HOST` / `TAOS_PORT` / `TAOS_USER` / `TAOS_PASSWORD`.
    pub fn apply_env(&mut self) -> Result<(), CliError> {
        if let Ok(host) = std::env::var("TAOS_HOST") {
            if !host.is_empty() {
                self.tdengine.host = host.clone();
                self.mqtt.host = host;
            }
        }
        if let Ok(port) = std::env::var("TAOS_PORT") {
            if !port.is_empty() {
                self.tdengine.port = port.parse().map_err(|_| {
                    CliError::config("env.TAOS_PORT", format!("invalid port {port:?}"))
                })?;
            }
        }
        if let Ok(user) = std::env::var("TAOS_USER") {
            if !user.is_empty() {
                self.tdengine.user = user.clone();
                self.mqtt.user = user;
            }
        }
        if let Ok(password) = std::env::var("TAOS_PASSWORD") {
            if !password.is_empty() {
                self.tdengine.password = password.clone();
                self.mqtt.password = password;
            }
        }
        Ok(())
    }

    /// Apply command-line overrides; highest precedence.
    pub fn apply_cli(
        &mut self,
        host: Option<&str>,
        port: Option<u16>,
        user: Option<&str>,
        password: Option<&str>,
    ) {
        if let Some(host) = host {
            self.tdengine.host = host.to_owned();
            self.mqtt.host = host.to_owned();
        }
        if let Some(port) = port {
            self.tdengine.port = port;
        }
        if let Some(user) = user {
            self.tdengine.user = user.to_owned();
            self.mqtt.user = user.to_owned();
        }
        if let Some(password) = password {
            self.tdengine.password = password.to_owned();
            self.mqtt.password = password.to_owned();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tsbench_types::TypeTag;

    const MINIMAL: &str = r#"
schema:
  name: meters
  columns:
    - { name: current, type: float }
jobs:
  insert:
    steps:
      - uses: tdengine/insert-data
"#;

    #[test]
    fn test_minimal_config_parses() {
        let config = WorkflowConfig::from_yaml(MINIMAL, "test.yaml").unwrap();
        assert_eq!(config.schema.name, "meters");
        assert_eq!(config.concurrency, 1);
        assert_eq!(config.jobs.len(), 1);
    }

    #[test]
    fn test_unknown_key_rejected_with_context() {
        let bad = r#"
schema:
  name: meters
  columns:
    - { name: c, type: int, colour: blue }
jobs:
  j: { steps: [ { uses: x } ] }
"#;
        let err = WorkflowConfig::from_yaml(bad, "test.yaml").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("test.yaml"));
        assert!(message.contains("colour"), "error should name the key: {message}");
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let bad = r#"
schema:
  columns: [ { name: c, type: int } ]
jobs:
  j: { steps: [ { uses: x } ] }
"#;
        let err = WorkflowConfig::from_yaml(bad, "test.yaml").unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_unknown_dependency_rejected() {
        let bad = r#"
schema:
  name: m
  columns: [ { name: c, type: int } ]
jobs:
  a: { needs: [ghost], steps: [ { uses: x } ] }
"#;
        let err = WorkflowConfig::from_yaml(bad, "test.yaml").unwrap_err();
        assert!(err.to_string().contains("ghost"));
        assert!(err.to_string().contains("jobs.a.needs"));
    }

    #[test]
    fn test_implicit_timestamp_column() {
        let config = WorkflowConfig::from_yaml(MINIMAL, "test.yaml").unwrap();
        let (ts, data) = config.schema.split_columns().unwrap();
        assert_eq!(ts.name, "ts");
        assert!(matches!(ts.generator, GeneratorSpec::Timestamp(_)));
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].name, "current");
    }

    #[test]
    fn test_explicit_timestamp_with_series() {
        let yaml = r#"
schema:
  name: m
  columns:
    - { name: ts, type: timestamp, start: "1500000000000", precision: ms, step: 10 }
    - { name: v, type: int, gen_type: order, min: 0, max: 100 }
jobs:
  j: { steps: [ { uses: x } ] }
"#;
        let config = WorkflowConfig::from_yaml(yaml, "t.yaml").unwrap();
        let (ts, data) = config.schema.split_columns().unwrap();
        let GeneratorSpec::Timestamp(spec) = &ts.generator else { panic!("expected timestamp") };
        assert_eq!(spec.start, "1500000000000");
        assert_eq!(spec.step, "10");
        assert!(matches!(data[0].generator, GeneratorSpec::Order { min: 0, max: 100 }));
    }

    #[test]
    fn test_count_expansion() {
        let entries = vec![ColumnEntry {
            name: "v".to_owned(),
            type_str: "int".to_owned(),
            gen_type: None,
            distribution: None,
            min: None,
            max: None,
            values: None,
            expr: None,
            chinese: false,
            corpus: None,
            csv: None,
            csv_column: 0,
            count: 3,
            primary_key: false,
            props: None,
            null_ratio: None,
            none_ratio: None,
            start: None,
            precision: None,
            step: None,
        }];
        let expanded = expand_columns(&entries).unwrap();
        let names: Vec<&str> = expanded.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["v1", "v2", "v3"]);
        assert!(expanded.iter().all(|c| c.tag == TypeTag::Int));
    }

    #[test]
    fn test_table_name_generation() {
        let schema = SchemaConfig {
            name: "m".to_owned(),
            tbname: TableNameConfig {
                prefix: "dev".to_owned(),
                from: 5,
                count: 3,
                csv: None,
                csv_column: 0,
            },
            columns: Vec::new(),
            tags: Vec::new(),
        };
        assert_eq!(schema.table_names().unwrap(), ["dev5", "dev6", "dev7"]);
    }

    #[test]
    fn test_interlace_exceeding_batch_rejected() {
        let step = InsertStepConfig {
            generation: GenerationEntry {
                interlace: 50,
                rows_per_batch: 10,
                ..GenerationEntry::default()
            },
            ..InsertStepConfig::default()
        };
        let err = step.validate("jobs.insert.steps[0]").unwrap_err();
        assert!(err.to_string().contains("interlace"));
    }

    #[test]
    fn test_on_failure_validated() {
        let step = InsertStepConfig {
            failure_handling: FailureEntry {
                on_failure: "retry-forever".to_owned(),
                ..FailureEntry::default()
            },
            ..InsertStepConfig::default()
        };
        assert!(step.validate("ctx").is_err());
    }

    #[test]
    fn test_expression_requires_formula() {
        let entry = ColumnEntry {
            name: "e".to_owned(),
            type_str: "double".to_owned(),
            gen_type: Some("expression".to_owned()),
            distribution: None,
            min: None,
            max: None,
            values: None,
            expr: None,
            chinese: false,
            corpus: None,
            csv: None,
            csv_column: 0,
            count: 1,
            primary_key: false,
            props: None,
            null_ratio: None,
            none_ratio: None,
            start: None,
            precision: None,
            step: None,
        };
        let err = entry.to_schema().unwrap_err();
        assert!(err.to_string().contains("expr"));
    }

    #[test]
    fn test_decode_insert_step_rejects_unknown_key() {
        let step = StepConfig {
            uses: "tdengine/insert-data".to_owned(),
            with: serde_yaml::from_str("{ format: sql, turbo: true }").unwrap(),
        };
        let err = decode_step::<InsertStepConfig>(&step, "jobs.insert.steps[0]").unwrap_err();
        assert!(err.to_string().contains("turbo"));
        assert!(err.to_string().contains("jobs.insert.steps[0].with"));
    }

    #[test]
    fn test_cli_overrides_env() {
        let mut config = WorkflowConfig::from_yaml(MINIMAL, "t.yaml").unwrap();
        config.tdengine.host = "from-yaml".to_owned();
        config.apply_cli(Some("from-cli"), Some(7777), None, None);
        assert_eq!(config.tdengine.host, "from-cli");
        assert_eq!(config.tdengine.port, 7777);
        // Untouched fields keep their YAML values.
        assert_eq!(config.tdengine.user, "root");
    }
}
