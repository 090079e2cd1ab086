// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # esteban-actuators
//!
//! HTTP clients for the actuator services the behaviour engine drives:
//! the peripheral service (pan/tilt servos and buzzer) and the camera
//! service (capture trigger).
//!
//! Every outbound request carries a bounded timeout so a hung actuator
//! can never stall a behaviour loop indefinitely. Failures are reported
//! to the caller and never retried here.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod camera;
pub mod peripheral;
pub mod traits;

pub use camera::CameraClient;
pub use peripheral::PeripheralClient;
pub use traits::{CameraActuator, FeedbackActuator, MotorActuator, MotorAxis, MoveAck};

/// Actuator call errors
#[derive(Debug, thiserror::Error)]
pub enum ActuatorError {
    /// The HTTP client itself could not be constructed
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The request never produced a response (connection refused, timeout, ...)
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-2xx status
    #[error("{endpoint} returned status {status}")]
    Rejected {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    /// The service answered 2xx but the body could not be decoded
    #[error("{endpoint} returned an unreadable response: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Result type for actuator operations
pub type ActuatorResult<T> = Result<T, ActuatorError>;
