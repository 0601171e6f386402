//! Sink error taxonomy.
//!
//! The writer's retry loop keys off [`SinkError::is_transient`]: transient
//! failures are retried per policy, everything else surfaces immediately.

use thiserror::Error;

/// Errors raised by connectors, the connector pool and writers.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Bad sink configuration (DSN, protocol, options).
    #[error("sink configuration error: {0}")]
    Config(String),

    /// The sink could not be reached.
    #[error("connect failed to {endpoint}: {reason}")]
    Connect {
        /// Sink endpoint.
        endpoint: String,
        /// Failure detail.
        reason: String,
    },

    /// Waiting for a pooled connector timed out.
    #[error("timeout waiting for a sink connector")]
    Timeout,

    /// The pool is shutting down.
    #[error("connector pool is shutting down")]
    PoolShutdown,

    /// The connector does not implement this capability.
    #[error("connector does not support {0}")]
    Unsupported(&'static str),

    /// A recoverable execute failure (network blip, sink busy).
    #[error("transient sink error: {context}")]
    Transient {
        /// What was being executed, truncated.
        context: String,
    },

    /// A non-recoverable execute failure (schema mismatch, auth).
    #[error("sink error {code}: {message} (sql: {sql})")]
    Execute {
        /// Sink error code.
        code: i32,
        /// Sink message.
        message: String,
        /// Offending statement, truncated.
        sql: String,
    },

    /// Malformed frame or unexpected response from the sink.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Websocket transport failure.
    #[error("websocket error: {0}")]
    WebSocket(Box<tungstenite::Error>),

    /// MQTT client failure.
    #[error("mqtt error: {0}")]
    Mqtt(String),

    /// Kafka producer failure.
    #[error("kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    /// Local I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<tungstenite::Error> for SinkError {
    fn from(e: tungstenite::Error) -> Self {
        Self::WebSocket(Box::new(e))
    }
}

impl SinkError {
    /// Whether a retry may succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transient { .. }
            | Self::Timeout
            | Self::Connect { .. }
            | Self::Io(_)
            | Self::WebSocket(_)
            | Self::Mqtt(_) => true,
            Self::Kafka(e) => matches!(
                e,
                rdkafka::error::KafkaError::MessageProduction(
                    rdkafka::types::RDKafkaErrorCode::QueueFull
                        | rdkafka::types::RDKafkaErrorCode::BrokerTransportFailure
                        | rdkafka::types::RDKafkaErrorCode::RequestTimedOut
                )
            ),
            _ => false,
        }
    }

    /// Whether retrying can never succeed.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::Unsupported(_) | Self::Execute { .. } | Self::Protocol(_)
        )
    }
}

/// Truncate a statement for error messages.
#[must_use]
pub fn truncate_sql(sql: &str) -> String {
    const LIMIT: usize = 200;
    if sql.len() <= LIMIT {
        sql.to_owned()
    } else {
        let mut cut = LIMIT;
        while !sql.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &sql[..cut])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(SinkError::Timeout.is_transient());
        assert!(SinkError::Transient { context: "busy".into() }.is_transient());
        assert!(
            SinkError::Connect { endpoint: "h:1".into(), reason: "refused".into() }
                .is_transient()
        );
        assert!(!SinkError::Config("bad dsn".into()).is_transient());
        assert!(
            !SinkError::Execute { code: 9826, message: "auth".into(), sql: String::new() }
                .is_transient()
        );
    }

    #[test]
    fn test_terminal_classification() {
        assert!(SinkError::Config("x".into()).is_terminal());
        assert!(SinkError::Unsupported("prepare").is_terminal());
        assert!(!SinkError::Timeout.is_terminal());
    }

    #[test]
    fn test_truncate_sql() {
        assert_eq!(truncate_sql("short"), "short");
        let long = "x".repeat(500);
        let truncated = truncate_sql(&long);
        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));
    }
}
