//! Kafka producer connector.

use std::time::Duration;

use rdkafka::ClientConfig;
use rdkafka::producer::{BaseProducer, BaseRecord, Producer};

use tsbench_format::Message;

use crate::connector::SinkConnector;
use crate::error::SinkError;
use crate::target::KafkaTarget;

/// One producer session against the cluster.
pub struct KafkaConnector {
    config: KafkaTarget,
    writer_id: usize,
    producer: Option<BaseProducer>,
}

impl KafkaConnector {
    /// Create unconnected; `writer_id` disambiguates the client id.
    #[must_use]
    pub fn new(config: KafkaTarget, writer_id: usize) -> Self {
        Self { config, writer_id, producer: None }
    }
}

impl SinkConnector for KafkaConnector {
    fn connect(&mut self) -> Result<(), SinkError> {
        let producer: BaseProducer = ClientConfig::new()
            .set("bootstrap.servers", &self.config.brokers)
            .set("acks", &self.config.acks)
            .set("compression.type", &self.config.compression)
            .set("linger.ms", self.config.linger_ms.to_string())
            .set("client.id", format!("{}-{}", self.config.client_id, self.writer_id))
            .create()?;
        self.producer = Some(producer);
        tracing::debug!(brokers = %self.config.brokers, "kafka producer created");
        Ok(())
    }

    fn execute_messages(&mut self, messages: &[Message]) -> Result<(), SinkError> {
        let Some(producer) = self.producer.as_ref() else {
            return Err(SinkError::Connect {
                endpoint: self.config.brokers.clone(),
                reason: "not connected".to_owned(),
            });
        };

        for message in messages {
            let mut record: BaseRecord<'_, Vec<u8>, Vec<u8>> =
                BaseRecord::to(&message.topic).payload(&message.payload);
            if !message.key.is_empty() {
                record = record.key(&message.key);
            }
            let mut pending = record;
            loop {
                match producer.send(pending) {
                    Ok(()) => break,
                    Err((
                        rdkafka::error::KafkaError::MessageProduction(
                            rdkafka::types::RDKafkaErrorCode::QueueFull,
                        ),
                        record,
                    )) => {
                        // Drain deliveries and retry the same record.
                        producer.poll(Duration::from_millis(100));
                        pending = record;
                    }
                    Err((e, _)) => return Err(e.into()),
                }
            }
            producer.poll(Duration::ZERO);
        }

        producer
            .flush(Duration::from_millis(self.config.flush_timeout_ms))
            .map_err(SinkError::from)
    }

    fn close(&mut self) {
        if let Some(producer) = self.producer.take() {
            let _ = producer.flush(Duration::from_secs(5));
        }
    }

    fn is_valid(&self) -> bool {
        self.producer.is_some()
    }

    fn reset_state(&mut self) {}
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_without_connect_fails() {
        let mut conn = KafkaConnector::new(KafkaTarget::default(), 0);
        let err = conn
            .execute_messages(&[Message {
                topic: "t".to_owned(),
                key: Vec::new(),
                payload: b"{}".to_vec(),
            }])
            .unwrap_err();
        assert!(matches!(err, SinkError::Connect { .. }));
    }

    #[test]
    fn test_unconnected_is_invalid() {
        assert!(!KafkaConnector::new(KafkaTarget::default(), 0).is_valid());
    }
}
