// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # esteban-behaviour
//!
//! The behaviour coordination engine: watches the recognized gesture and
//! hand-position streams and turns them into debounced single-shot actions
//! and a continuous proportional tracking loop over the two servo axes.
//!
//! Each behaviour runs as an independent, indefinitely-running task. A
//! behaviour owns its own cooldown state, samples sensory data through
//! [`esteban_io::SensoryStream`], and commands actuators through the
//! [`esteban_actuators`] traits. Actuator and queue failures are logged
//! and the loop resumes on the next sample; nothing a behaviour does can
//! crash the engine.
//!
//! This is a best-effort, continuously self-correcting controller: there
//! is no exactly-once delivery of gesture events, no persisted history,
//! and no ordering guarantee across behaviours.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod behaviour;
pub mod cooldown;
pub mod engine;
pub mod tracking;
pub mod trigger;

pub use behaviour::Behaviour;
pub use cooldown::CooldownGate;
pub use engine::BehaviourEngine;
pub use tracking::TrackingBehaviour;
pub use trigger::TriggerBehaviour;
