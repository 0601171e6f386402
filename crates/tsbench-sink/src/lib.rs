//! # tsbench-sink
//!
//! The write side of the ingestion pipeline: a capability-based
//! [`SinkConnector`] trait, concrete connectors for the TSDB websocket
//! protocol, MQTT and Kafka, a [`ConnectorPool`] with validity checking
//! and acquisition timeout, and the [`SinkWriter`] loop that drains the
//! data pipeline with retry, pacing and at-least-once semantics.
//!
//! [`testkit`] hosts the mock connector the workspace's tests drive
//! writers and pools with.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod bindv;
pub mod connector;
pub mod error;
pub mod kafka;
pub mod mqtt;
pub mod pool;
pub mod target;
pub mod tdengine;
pub mod testkit;
pub mod writer;

pub use connector::{ConnectorFactory, SinkConnector, StmtExec};
pub use error::SinkError;
pub use pool::{ConnectorPool, PooledConnector};
pub use target::{KafkaTarget, MqttTarget, PoolOptions, Protocol, SinkTarget, TdengineTarget};
pub use writer::{OnFailure, PacingConfig, PacingStrategy, SinkWriter, WriterConfig, WriterStats};
