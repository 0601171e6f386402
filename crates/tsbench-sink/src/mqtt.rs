//! MQTT broker connector.

use std::time::{Duration, Instant};

use rumqttc::{Client, Connection, Event, MqttOptions, Outgoing, Packet, QoS};

use tsbench_format::Message;

use crate::connector::SinkConnector;
use crate::error::SinkError;
use crate::target::MqttTarget;

/// Wait bound for the broker's CONNACK.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Wait bound for publish acknowledgements per batch.
const ACK_TIMEOUT: Duration = Duration::from_secs(30);

/// One client session against the broker.
///
/// The sync client queues publishes; the connection object is pumped
/// after each batch until the broker acknowledged every message (QoS > 0)
/// or the writes left the socket (QoS 0), which is what gives the writer
/// its at-least-once guarantee.
pub struct MqttConnector {
    config: MqttTarget,
    writer_id: usize,
    session: Option<(Client, Connection)>,
    valid: bool,
}

impl MqttConnector {
    /// Create unconnected; `writer_id` disambiguates the client id.
    #[must_use]
    pub fn new(config: MqttTarget, writer_id: usize) -> Self {
        Self { config, writer_id, session: None, valid: false }
    }

    fn qos(&self) -> QoS {
        match self.config.qos {
            0 => QoS::AtMostOnce,
            1 => QoS::AtLeastOnce,
            _ => QoS::ExactlyOnce,
        }
    }

    fn pump_until(
        &mut self,
        expected_outgoing: usize,
        expected_acks: usize,
    ) -> Result<(), SinkError> {
        let deadline = Instant::now() + ACK_TIMEOUT;
        let mut outgoing = 0usize;
        let mut acks = 0usize;
        let Some((_, connection)) = self.session.as_mut() else {
            return Err(SinkError::Mqtt("not connected".to_owned()));
        };
        while outgoing < expected_outgoing || acks < expected_acks {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(SinkError::Transient {
                    context: format!(
                        "mqtt acks timed out ({acks}/{expected_acks} acked, \
                         {outgoing}/{expected_outgoing} sent)"
                    ),
                });
            }
            match connection.recv_timeout(remaining) {
                Ok(Ok(Event::Outgoing(Outgoing::Publish(_)))) => outgoing += 1,
                Ok(Ok(Event::Incoming(Packet::PubAck(_) | Packet::PubComp(_)))) => acks += 1,
                Ok(Ok(_)) => {}
                Ok(Err(e)) => {
                    self.valid = false;
                    return Err(SinkError::Mqtt(e.to_string()));
                }
                Err(_) => {
                    return Err(SinkError::Transient {
                        context: "mqtt connection stalled".to_owned(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl SinkConnector for MqttConnector {
    fn connect(&mut self) -> Result<(), SinkError> {
        let client_id = format!("{}-{}", self.config.client_id, self.writer_id);
        let mut options = MqttOptions::new(client_id, &self.config.host, self.config.port);
        options.set_keep_alive(Duration::from_secs(self.config.keep_alive.max(5)));
        if !self.config.user.is_empty() {
            options.set_credentials(&self.config.user, &self.config.password);
        }

        let (client, mut connection) = Client::new(options, 128);
        let deadline = Instant::now() + CONNECT_TIMEOUT;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(SinkError::Connect {
                    endpoint: format!("{}:{}", self.config.host, self.config.port),
                    reason: "timed out waiting for CONNACK".to_owned(),
                });
            }
            match connection.recv_timeout(remaining) {
                Ok(Ok(Event::Incoming(Packet::ConnAck(_)))) => break,
                Ok(Ok(_)) => {}
                Ok(Err(e)) => {
                    return Err(SinkError::Connect {
                        endpoint: format!("{}:{}", self.config.host, self.config.port),
                        reason: e.to_string(),
                    });
                }
                Err(_) => {
                    return Err(SinkError::Connect {
                        endpoint: format!("{}:{}", self.config.host, self.config.port),
                        reason: "timed out waiting for CONNACK".to_owned(),
                    });
                }
            }
        }
        self.session = Some((client, connection));
        self.valid = true;
        tracing::debug!(host = %self.config.host, port = self.config.port, "mqtt connected");
        Ok(())
    }

    fn execute_messages(&mut self, messages: &[Message]) -> Result<(), SinkError> {
        let qos = self.qos();
        let retain = self.config.retain;
        {
            let Some((client, _)) = self.session.as_mut() else {
                return Err(SinkError::Mqtt("not connected".to_owned()));
            };
            for message in messages {
                client
                    .publish(&message.topic, qos, retain, message.payload.clone())
                    .map_err(|e| SinkError::Mqtt(e.to_string()))?;
            }
        }
        let expected_acks = if qos == QoS::AtMostOnce { 0 } else { messages.len() };
        self.pump_until(messages.len(), expected_acks)
    }

    fn close(&mut self) {
        if let Some((client, _)) = self.session.as_mut() {
            let _ = client.disconnect();
        }
        self.session = None;
        self.valid = false;
    }

    fn is_valid(&self) -> bool {
        self.valid && self.session.is_some()
    }

    fn reset_state(&mut self) {}
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_qos_mapping() {
        for (value, expected) in [
            (0, QoS::AtMostOnce),
            (1, QoS::AtLeastOnce),
            (2, QoS::ExactlyOnce),
        ] {
            let conn =
                MqttConnector::new(MqttTarget { qos: value, ..MqttTarget::default() }, 0);
            assert_eq!(conn.qos(), expected);
        }
    }

    #[test]
    fn test_publish_without_connect_fails() {
        let mut conn = MqttConnector::new(MqttTarget::default(), 0);
        let err = conn
            .execute_messages(&[Message {
                topic: "t".to_owned(),
                key: Vec::new(),
                payload: b"{}".to_vec(),
            }])
            .unwrap_err();
        assert!(matches!(err, SinkError::Mqtt(_)));
    }

    #[test]
    fn test_unconnected_is_invalid() {
        assert!(!MqttConnector::new(MqttTarget::default(), 0).is_valid());
    }
}
