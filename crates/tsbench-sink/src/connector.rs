//! The sink connector capability set.

use tsbench_engine::BlockGuard;
use tsbench_format::{Message, StmtBatch};
use tsbench_types::ColumnSchema;

use crate::error::SinkError;
use crate::kafka::KafkaConnector;
use crate::mqtt::MqttConnector;
use crate::target::{Protocol, SinkTarget};
use crate::tdengine::WsConnector;

/// One prepared-statement execute: the bind batch plus the block and
/// schemas the wire body is serialized from.
pub struct StmtExec<'a> {
    /// Batch descriptor from the formatter.
    pub batch: StmtBatch,
    /// The block carrying the bind data.
    pub block: &'a BlockGuard,
    /// Data column schemas.
    pub columns: &'a [ColumnSchema],
    /// Tag column schemas (bound in auto-create-table mode).
    pub tags: &'a [ColumnSchema],
}

/// A physical connection to one sink.
///
/// Capabilities default to [`SinkError::Unsupported`]; each concrete
/// connector implements the ones its sink can execute.
pub trait SinkConnector: Send {
    /// Establish the connection.
    fn connect(&mut self) -> Result<(), SinkError>;

    /// Pre-prepare a statement for later [`Self::execute_stmt`] calls.
    fn prepare(&mut self, _sql: &str) -> Result<(), SinkError> {
        Err(SinkError::Unsupported("prepare"))
    }

    /// Execute SQL text.
    fn execute_sql(&mut self, _sql: &str) -> Result<(), SinkError> {
        Err(SinkError::Unsupported("execute_sql"))
    }

    /// Execute a prepared-statement bind batch.
    fn execute_stmt(&mut self, _exec: &StmtExec<'_>) -> Result<(), SinkError> {
        Err(SinkError::Unsupported("execute_stmt"))
    }

    /// Publish a message batch.
    fn execute_messages(&mut self, _messages: &[Message]) -> Result<(), SinkError> {
        Err(SinkError::Unsupported("execute_messages"))
    }

    /// Tear the connection down. Infallible by contract; failures are
    /// logged by implementations.
    fn close(&mut self);

    /// Whether the connection can still execute.
    fn is_valid(&self) -> bool;

    /// Clear per-use state before the connector returns to the pool.
    fn reset_state(&mut self);
}

/// Builds connectors for a sink target.
pub struct ConnectorFactory;

impl ConnectorFactory {
    /// Create an unconnected connector for the target.
    ///
    /// The `native` and `restful` TSDB protocols are accepted by the DSN
    /// parser but rejected here: only the websocket transport ships.
    pub fn create(target: &SinkTarget, writer_id: usize) -> Result<Box<dyn SinkConnector>, SinkError> {
        match target {
            SinkTarget::Tdengine(config) => match config.protocol {
                Protocol::WebSocket => Ok(Box::new(WsConnector::new(config.clone()))),
                Protocol::Native => Err(SinkError::Config(
                    "the native protocol requires the vendor client; use a taos+ws dsn"
                        .to_owned(),
                )),
                Protocol::Restful => Err(SinkError::Config(
                    "the restful protocol is not implemented; use a taos+ws dsn".to_owned(),
                )),
            },
            SinkTarget::Mqtt(config) => {
                config.validate()?;
                Ok(Box::new(MqttConnector::new(config.clone(), writer_id)))
            }
            SinkTarget::Kafka(config) => Ok(Box::new(KafkaConnector::new(config.clone(), writer_id))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::target::TdengineTarget;

    #[test]
    fn test_factory_rejects_deferred_protocols() {
        for protocol in [Protocol::Native, Protocol::Restful] {
            let target =
                SinkTarget::Tdengine(TdengineTarget { protocol, ..TdengineTarget::default() });
            assert!(matches!(
                ConnectorFactory::create(&target, 0),
                Err(SinkError::Config(_))
            ));
        }
    }

    #[test]
    fn test_factory_builds_websocket() {
        let target = SinkTarget::Tdengine(TdengineTarget::default());
        assert!(ConnectorFactory::create(&target, 0).is_ok());
    }
}
