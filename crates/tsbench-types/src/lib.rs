//! # tsbench-types
//!
//! Column type system for the tsbench data generator.
//!
//! This crate defines the closed set of column types the engine can
//! generate and serialize, the tagged [`Value`] sum type carrying one cell,
//! the [`ColumnSchema`] parsed from declarative schema strings such as
//! `varchar(20)` or `decimal(10,2)`, and the per-column byte converters
//! that move values in and out of pre-allocated column regions.
//!
//! ## Type table
//!
//! | Schema type | Rust carrier | Storage |
//! |-------------|--------------|---------|
//! | `bool` | `bool` | fixed, 1 byte |
//! | `tinyint` / `tinyint unsigned` | `i8` / `u8` | fixed, 1 byte |
//! | `smallint` / `smallint unsigned` | `i16` / `u16` | fixed, 2 bytes |
//! | `int` / `int unsigned` | `i32` / `u32` | fixed, 4 bytes |
//! | `bigint` / `bigint unsigned` | `i64` / `u64` | fixed, 8 bytes |
//! | `timestamp` | `i64` | fixed, 8 bytes |
//! | `float` / `double` | `f32` / `f64` | fixed, 4 / 8 bytes |
//! | `decimal(p,s)` | scaled integer | fixed, 8 or 16 bytes |
//! | `nchar(n)` | UTF-16 code units | variable |
//! | `varchar(n)` / `binary(n)` | UTF-8 bytes | variable |
//! | `json` | opaque text | variable |
//! | `varbinary(n)` | raw bytes | variable |
//! | `geometry(n)` | WKT text | variable |

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod convert;
pub mod error;
pub mod schema;
pub mod tag;
pub mod utf16;
pub mod value;

pub use convert::{ColumnHandler, build_handlers};
pub use error::TypeError;
pub use schema::{ColumnSchema, GeneratorSpec, TimestampSpec};
pub use tag::TypeTag;
pub use value::{DecimalValue, Value};
