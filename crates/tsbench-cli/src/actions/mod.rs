//! Registered workflow actions.
//!
//! Each step's `uses:` names an action; the registry is built once at
//! startup. Shipped actions:
//!
//! | Action | Effect |
//! |--------|--------|
//! | `tdengine/create-database` | CREATE (and optionally DROP) DATABASE |
//! | `tdengine/create-super-table` | CREATE STABLE from the schema |
//! | `tdengine/create-child-table` | batched CREATE TABLE ... USING |
//! | `tdengine/insert-data` | the insert pipeline (sql/stmt) |
//! | `mqtt/publish` | the insert pipeline towards MQTT |
//! | `kafka/produce` | the insert pipeline towards Kafka |
//! | `tdengine/query-data` | parsed but inert |
//! | `tdengine/subscribe-data` | parsed but inert |

mod create;
mod insert;

use std::collections::HashMap;

use crate::config::StepConfig;
use crate::context::RunContext;
use crate::error::CliError;

type ActionFn =
    Box<dyn Fn(&RunContext, &StepConfig, &str) -> Result<(), CliError> + Send + Sync>;

/// Maps action names to their implementations.
pub struct ActionRegistry {
    actions: HashMap<String, ActionFn>,
}

impl ActionRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { actions: HashMap::new() }
    }

    /// The registry with every shipped action registered.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("tdengine/create-database", create::create_database);
        registry.register("tdengine/create-super-table", create::create_super_table);
        registry.register("tdengine/create-child-table", create::create_child_tables);
        registry.register("tdengine/insert-data", insert::insert_data);
        registry.register("mqtt/publish", insert::mqtt_publish);
        registry.register("kafka/produce", insert::kafka_produce);
        registry.register("tdengine/query-data", |_, _, context| {
            tracing::info!(step = context, "query-data is configured but carries no workload");
            Ok(())
        });
        registry.register("tdengine/subscribe-data", |_, _, context| {
            tracing::info!(step = context, "subscribe-data is configured but carries no workload");
            Ok(())
        });
        registry
    }

    /// Register an action under its name.
    pub fn register<F>(&mut self, name: &str, action: F)
    where
        F: Fn(&RunContext, &StepConfig, &str) -> Result<(), CliError> + Send + Sync + 'static,
    {
        self.actions.insert(name.to_owned(), Box::new(action));
    }

    /// Execute one step through its registered action.
    pub fn execute(
        &self,
        context: &RunContext,
        step: &StepConfig,
        step_context: &str,
    ) -> Result<(), CliError> {
        let action = self.actions.get(&step.uses).ok_or_else(|| {
            CliError::config(
                format!("{step_context}.uses"),
                format!("unknown action {:?}", step.uses),
            )
        })?;
        tracing::debug!(step = step_context, action = %step.uses, "step started");
        action(context, step, step_context)
    }

    /// Registered action names.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.actions.keys().map(String::as_str).collect()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_action_names() {
        let registry = ActionRegistry::with_builtins();
        let mut names = registry.names();
        names.sort_unstable();
        assert_eq!(
            names,
            [
                "kafka/produce",
                "mqtt/publish",
                "tdengine/create-child-table",
                "tdengine/create-database",
                "tdengine/create-super-table",
                "tdengine/insert-data",
                "tdengine/query-data",
                "tdengine/subscribe-data",
            ]
        );
    }
}
