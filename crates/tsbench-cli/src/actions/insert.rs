//! Insert-pipeline actions for the three sinks.

use tsbench_sink::SinkTarget;

use crate::config::{InsertStepConfig, StepConfig, decode_step};
use crate::context::RunContext;
use crate::error::CliError;
use crate::orchestrator::InsertOrchestrator;

fn run(
    context: &RunContext,
    step: &StepConfig,
    step_context: &str,
    target: SinkTarget,
    format_key: &str,
) -> Result<(), CliError> {
    let with: InsertStepConfig = decode_step(step, step_context)?;
    with.validate(step_context)?;
    InsertOrchestrator::new(context, with, target, format_key.to_owned()).run()
}

pub(super) fn insert_data(
    context: &RunContext,
    step: &StepConfig,
    step_context: &str,
) -> Result<(), CliError> {
    let with: InsertStepConfig = decode_step(step, step_context)?;
    let key = match with.format.as_str() {
        "sql" => "insert.sql",
        "stmt" => "insert.stmt",
        other => {
            return Err(CliError::config(
                format!("{step_context}.with.format"),
                format!("invalid format {other:?} for tdengine/insert-data (sql or stmt)"),
            ));
        }
    };
    run(
        context,
        step,
        step_context,
        SinkTarget::Tdengine(context.config.tdengine.clone()),
        key,
    )
}

pub(super) fn mqtt_publish(
    context: &RunContext,
    step: &StepConfig,
    step_context: &str,
) -> Result<(), CliError> {
    run(
        context,
        step,
        step_context,
        SinkTarget::Mqtt(context.config.mqtt.clone()),
        "insert.mqtt",
    )
}

pub(super) fn kafka_produce(
    context: &RunContext,
    step: &StepConfig,
    step_context: &str,
) -> Result<(), CliError> {
    run(
        context,
        step,
        step_context,
        SinkTarget::Kafka(context.config.kafka.clone()),
        "insert.kafka",
    )
}
