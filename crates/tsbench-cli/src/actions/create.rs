//! DDL actions: database, super table, child tables.

use std::sync::atomic::Ordering;

use serde::Deserialize;

use tsbench_engine::TagSet;
use tsbench_format::{FormatResult, ddl};
use tsbench_gen::ColumnGenerator;
use tsbench_sink::{ConnectorFactory, SinkTarget};

use crate::config::{StepConfig, decode_step};
use crate::context::RunContext;
use crate::error::CliError;

/// `with:` of `tdengine/create-database`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
struct CreateDatabaseWith {
    name: Option<String>,
    drop_if_exists: Option<bool>,
    precision: Option<String>,
    props: Option<String>,
}

/// `with:` of `tdengine/create-super-table`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
struct CreateSuperTableWith {
    database: Option<String>,
}

/// `with:` of `tdengine/create-child-table`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
struct CreateChildTableWith {
    database: Option<String>,
    batch: usize,
}

impl Default for CreateChildTableWith {
    fn default() -> Self {
        Self { database: None, batch: 1000 }
    }
}

/// Execute a statement list against the TSDB.
fn run_statements(context: &RunContext, result: FormatResult) -> Result<(), CliError> {
    let FormatResult::StatementList(statements) = result else {
        return Ok(());
    };
    let target = SinkTarget::Tdengine(context.config.tdengine.clone());
    let mut connector = ConnectorFactory::create(&target, 0)?;
    connector.connect()?;
    for sql in &statements {
        tracing::debug!(sql = %sql, "ddl");
        connector.execute_sql(sql)?;
    }
    connector.close();
    Ok(())
}

pub(super) fn create_database(
    context: &RunContext,
    step: &StepConfig,
    step_context: &str,
) -> Result<(), CliError> {
    let with: CreateDatabaseWith = decode_step(step, step_context)?;
    let name = with.name.unwrap_or_else(|| context.config.tdengine.database.clone());
    let mut drop_if_exists =
        with.drop_if_exists.unwrap_or(context.config.tdengine.drop_if_exists);
    if drop_if_exists && context.inhibit_drop.load(Ordering::Acquire) {
        tracing::warn!(
            database = %name,
            "checkpoint recovery active; DROP DATABASE suppressed"
        );
        drop_if_exists = false;
    }
    let result =
        ddl::create_database(&name, drop_if_exists, with.precision.as_deref(), with.props.as_deref());
    run_statements(context, result)
}

pub(super) fn create_super_table(
    context: &RunContext,
    step: &StepConfig,
    step_context: &str,
) -> Result<(), CliError> {
    let with: CreateSuperTableWith = decode_step(step, step_context)?;
    let database = with.database.unwrap_or_else(|| context.config.tdengine.database.clone());
    let schema = &context.config.schema;
    let (_, columns) = schema.split_columns()?;
    let tags = schema.tag_columns()?;
    let result = ddl::create_super_table(&database, &schema.name, &columns, &tags);
    run_statements(context, result)
}

pub(super) fn create_child_tables(
    context: &RunContext,
    step: &StepConfig,
    step_context: &str,
) -> Result<(), CliError> {
    let with: CreateChildTableWith = decode_step(step, step_context)?;
    let database = with.database.unwrap_or_else(|| context.config.tdengine.database.clone());
    let schema = &context.config.schema;
    let tag_schemas = schema.tag_columns()?;
    let names = schema.table_names()?;

    let mut generators = tag_schemas
        .iter()
        .map(ColumnGenerator::new)
        .collect::<Result<Vec<_>, _>>()?;
    let tables: Vec<(String, TagSet)> = names
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            let values =
                generators.iter_mut().map(|g| g.next(index as u64, 0)).collect();
            (name, TagSet { values })
        })
        .collect();

    let result = ddl::create_child_tables(&database, &schema.name, &tables, with.batch);
    run_statements(context, result)
}
