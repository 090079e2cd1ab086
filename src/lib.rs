// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Esteban — gesture-driven behaviour coordination
//!
//! Umbrella crate re-exporting the Esteban workspace components. The
//! `esteban-brain` binary in this package wires them together: it reads
//! the recognizer's gesture and hand-position streams from the shared
//! queue service and drives the camera and servo/buzzer actuator
//! services through debounced, rate-limited behaviours.
//!
//! ## Components
//!
//! - [`config`] — TOML configuration with env/CLI overrides
//! - [`observability`] — console + rotating file logging
//! - [`io`] — sensory stream reader and wire codec
//! - [`actuators`] — actuator HTTP clients
//! - [`behaviour`] — cooldown gate, behaviours, engine

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use esteban_actuators as actuators;
pub use esteban_behaviour as behaviour;
pub use esteban_config as config;
pub use esteban_io as io;
pub use esteban_observability as observability;

/// Commonly used items in one import
pub mod prelude {
    pub use esteban_actuators::{
        CameraActuator, CameraClient, FeedbackActuator, MotorActuator, MotorAxis, PeripheralClient,
    };
    pub use esteban_behaviour::{
        Behaviour, BehaviourEngine, CooldownGate, TrackingBehaviour, TriggerBehaviour,
    };
    pub use esteban_config::{load_config, validate_config, EstebanConfig};
    pub use esteban_io::{GestureLabel, HandPosition, RedisSensoryBus, SensoryStream};
}
