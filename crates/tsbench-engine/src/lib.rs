//! # tsbench-engine
//!
//! The generation side of the ingestion pipeline: a pre-allocated
//! column-oriented [`MemoryPool`], the [`TableDataManager`] that schedules
//! row generators into pool blocks, and the [`DataPipeline`] that bridges
//! producer threads to sink writers with backpressure.
//!
//! Ownership of a block moves with it: producers take a [`BlockGuard`]
//! from the pool, fill it, and hand it into a `FormatResult`; whoever
//! drops the guard returns the block to the free queue exactly once.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod latch;
pub mod limiter;
pub mod manager;
pub mod pipeline;
pub mod pool;

pub use error::EngineError;
pub use latch::Latch;
pub use limiter::RateLimiter;
pub use manager::{GenerationSpec, TableDataManager, TableState};
pub use pipeline::{DataPipeline, FetchResult, PipelineError};
pub use pool::{BlockGuard, MemoryBlock, MemoryPool, PoolConfig, TableSlot, TableSlotMut, TagSet};
