//! # tsbench-format
//!
//! Transforms filled pool blocks into sink-specific payloads.
//!
//! A [`FormatterRegistry`] built at startup maps dispatch keys
//! `<domain>.<format>` (`insert.sql`, `insert.stmt`, `insert.mqtt`,
//! `insert.kafka`) to formatter factories. Every insert formatter turns a
//! [`BlockGuard`](tsbench_engine::BlockGuard) into a [`FormatResult`]
//! carrying ownership of the block; dropping the result releases the
//! block exactly once.
//!
//! DDL statement builders (CREATE DATABASE / STABLE / TABLE) live in
//! [`ddl`] and emit [`FormatResult::StatementList`].

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod ddl;
pub mod error;
pub mod msg;
pub mod pattern;
pub mod registry;
pub mod result;
pub mod row_serializer;
pub mod sql;
pub mod stmt;

pub use error::FormatError;
pub use pattern::{KeyGenerator, KeySerializer, PatternGenerator};
pub use registry::{
    FormatConfig, FormatterRegistry, InsertFormatter, MsgContent, MsgOptions, Prepared,
    StmtOptions,
};
pub use result::{FormatResult, InsertData, InsertMode, InsertPayload, Message, MessageBatch, StmtBatch};
