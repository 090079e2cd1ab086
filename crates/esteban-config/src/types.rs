// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines all configuration structs that map to sections in
//! `esteban_configuration.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EstebanConfig {
    pub system: SystemConfig,
    pub queue: QueueConfig,
    pub actuators: ActuatorsConfig,
    pub behaviours: BehavioursConfig,
}

/// System-level configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SystemConfig {
    pub log_level: String,
    pub log_dir: PathBuf,
    /// Keep the N most recent timestamped log run folders
    pub log_retention_runs: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: PathBuf::from("./logs"),
            log_retention_runs: 10,
        }
    }
}

/// Sensory queue service connection and stream keys
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct QueueConfig {
    pub host: String,
    pub port: u16,
    pub db: i64,
    /// List key the gesture recognizer appends labels to
    pub gesture_stream: String,
    /// List key the gesture recognizer appends hand position records to
    pub hand_position_stream: String,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 6379,
            db: 0,
            gesture_stream: "gesture_queue".to_string(),
            hand_position_stream: "hand_position_queue".to_string(),
        }
    }
}

impl QueueConfig {
    /// Connection URL for the queue service
    pub fn url(&self) -> String {
        format!("redis://{}:{}/{}", self.host, self.port, self.db)
    }
}

/// Actuator service endpoints and request policy
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ActuatorsConfig {
    pub host: String,
    /// Camera service port (capture trigger)
    pub camera_port: u16,
    /// Peripheral service port (servos + buzzer)
    pub peripheral_port: u16,
    /// Bound on every outbound actuator request
    pub request_timeout_ms: u64,
}

impl Default for ActuatorsConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            camera_port: 8001,
            peripheral_port: 8003,
            request_timeout_ms: 2000,
        }
    }
}

impl ActuatorsConfig {
    pub fn camera_url(&self) -> String {
        format!("http://{}:{}", self.host, self.camera_port)
    }

    pub fn peripheral_url(&self) -> String {
        format!("http://{}:{}", self.host, self.peripheral_port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// All service ports as name/value pairs for conflict detection
    pub fn all_ports(&self) -> Vec<(&str, u16)> {
        vec![
            ("actuators.camera_port", self.camera_port),
            ("actuators.peripheral_port", self.peripheral_port),
        ]
    }
}

/// Behaviour engine configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BehavioursConfig {
    /// Detection loop cadence shared by all behaviours
    pub poll_interval_ms: u64,
    pub capture: CaptureBehaviourConfig,
    pub tracking: TrackingBehaviourConfig,
}

impl Default for BehavioursConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 100,
            capture: CaptureBehaviourConfig::default(),
            tracking: TrackingBehaviourConfig::default(),
        }
    }
}

impl BehavioursConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Single-shot photo capture behaviour
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CaptureBehaviourConfig {
    /// Gesture label that fires the capture sequence
    pub gesture: String,
    pub cooldown_secs: f64,
    /// Pacing delay between the buzzer signal and the capture request.
    /// Not a synchronization guarantee — the buzzer is fire-and-forget.
    pub settle_delay_ms: u64,
}

impl Default for CaptureBehaviourConfig {
    fn default() -> Self {
        Self {
            gesture: "Thumb_Up".to_string(),
            cooldown_secs: 5.0,
            settle_delay_ms: 2000,
        }
    }
}

impl CaptureBehaviourConfig {
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs_f64(self.cooldown_secs)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

/// Closed-loop hand tracking behaviour
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackingBehaviourConfig {
    /// Gesture label that holds the tracking loop open
    pub gesture: String,
    pub cooldown_secs: f64,
    /// Pacing between corrective motor steps
    pub adjust_interval_ms: u64,
    /// Proportional gain: step = trunc(error * max_step)
    pub max_step: i32,
    pub target_x: f64,
    pub target_y: f64,
}

impl Default for TrackingBehaviourConfig {
    fn default() -> Self {
        Self {
            gesture: "Open_Palm".to_string(),
            cooldown_secs: 5.0,
            adjust_interval_ms: 500,
            max_step: 10,
            target_x: 0.5,
            target_y: 0.5,
        }
    }
}

impl TrackingBehaviourConfig {
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs_f64(self.cooldown_secs)
    }

    pub fn adjust_interval(&self) -> Duration {
        Duration::from_millis(self.adjust_interval_ms)
    }
}
