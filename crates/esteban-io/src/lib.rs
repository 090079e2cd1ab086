// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # esteban-io
//!
//! Sensory input for the behaviour coordination engine: read-only access
//! to the gesture and hand-position streams that the recognizer process
//! appends to the shared queue service.
//!
//! The engine only ever samples the most recent entry of each stream,
//! non-destructively. Nothing in this crate writes to the queue.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod gesture;
pub mod position;
pub mod redis_bus;
pub mod stream;

pub use gesture::GestureLabel;
pub use position::{decode_position_record, HandPosition};
pub use redis_bus::RedisSensoryBus;
pub use stream::SensoryStream;

/// Sensory read errors
#[derive(Debug, thiserror::Error)]
pub enum SensoryError {
    /// The queue service could not be reached or the read failed
    #[error("queue read failed: {0}")]
    Queue(#[from] redis::RedisError),

    /// A hand position record did not match the producer's wire format
    #[error("malformed hand position record: {0:?}")]
    MalformedSample(String),
}

/// Result type for sensory operations
pub type SensoryResult<T> = Result<T, SensoryError>;
