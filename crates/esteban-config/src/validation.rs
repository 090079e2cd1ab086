// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! This module provides validation logic to ensure configuration values are
//! consistent, within valid ranges, and don't conflict with each other.
//! Validation runs at startup, before any behaviour task is launched; a
//! failure here is fatal.

use crate::{ConfigError, ConfigResult, EstebanConfig};

/// Validation errors that can occur during config validation
#[derive(Debug, Clone)]
pub enum ConfigValidationError {
    InvalidPortRange { port_name: String, port: u16 },
    PortConflict { port1: String, port2: String, port: u16 },
    MissingRequired { field: String },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPortRange { port_name, port } => {
                write!(
                    f,
                    "Port {} = {} is outside valid range (1024-65535)",
                    port_name, port
                )
            }
            Self::PortConflict { port1, port2, port } => {
                write!(
                    f,
                    "Port conflict: {} and {} both use port {}",
                    port1, port2, port
                )
            }
            Self::MissingRequired { field } => {
                write!(f, "Missing required configuration: {}", field)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// Checks for:
/// - Actuator port ranges and conflicts
/// - Non-empty gesture labels
/// - Loop cadence and gain values the control loops can actually run with
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` with all violations if validation fails
pub fn validate_config(config: &EstebanConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    validate_ports(config, &mut errors);
    validate_labels(config, &mut errors);
    validate_cadence(config, &mut errors);
    validate_tracking(config, &mut errors);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

/// Validate actuator service ports (range and conflicts)
fn validate_ports(config: &EstebanConfig, errors: &mut Vec<ConfigValidationError>) {
    let ports = config.actuators.all_ports();

    for (port_name, port) in &ports {
        if *port < 1024 {
            errors.push(ConfigValidationError::InvalidPortRange {
                port_name: port_name.to_string(),
                port: *port,
            });
        }
    }

    for i in 0..ports.len() {
        for j in (i + 1)..ports.len() {
            if ports[i].1 == ports[j].1 {
                errors.push(ConfigValidationError::PortConflict {
                    port1: ports[i].0.to_string(),
                    port2: ports[j].0.to_string(),
                    port: ports[i].1,
                });
            }
        }
    }
}

/// Validate gesture labels and queue stream keys are present
fn validate_labels(config: &EstebanConfig, errors: &mut Vec<ConfigValidationError>) {
    if config.behaviours.capture.gesture.trim().is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "behaviours.capture.gesture".to_string(),
        });
    }
    if config.behaviours.tracking.gesture.trim().is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "behaviours.tracking.gesture".to_string(),
        });
    }
    if config.queue.gesture_stream.trim().is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "queue.gesture_stream".to_string(),
        });
    }
    if config.queue.hand_position_stream.trim().is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "queue.hand_position_stream".to_string(),
        });
    }
}

/// Validate loop timing values
fn validate_cadence(config: &EstebanConfig, errors: &mut Vec<ConfigValidationError>) {
    if config.behaviours.poll_interval_ms == 0 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "behaviours.poll_interval_ms".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    if config.behaviours.tracking.adjust_interval_ms == 0 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "behaviours.tracking.adjust_interval_ms".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    if config.actuators.request_timeout_ms == 0 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "actuators.request_timeout_ms".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    if config.behaviours.capture.cooldown_secs < 0.0
        || !config.behaviours.capture.cooldown_secs.is_finite()
    {
        errors.push(ConfigValidationError::InvalidValue {
            field: "behaviours.capture.cooldown_secs".to_string(),
            reason: "must be a non-negative finite number".to_string(),
        });
    }
    if config.behaviours.tracking.cooldown_secs < 0.0
        || !config.behaviours.tracking.cooldown_secs.is_finite()
    {
        errors.push(ConfigValidationError::InvalidValue {
            field: "behaviours.tracking.cooldown_secs".to_string(),
            reason: "must be a non-negative finite number".to_string(),
        });
    }
}

/// Validate the tracking control loop parameters
fn validate_tracking(config: &EstebanConfig, errors: &mut Vec<ConfigValidationError>) {
    let tracking = &config.behaviours.tracking;

    if tracking.max_step < 1 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "behaviours.tracking.max_step".to_string(),
            reason: "proportional gain must be at least 1".to_string(),
        });
    }

    for (field, value) in [
        ("behaviours.tracking.target_x", tracking.target_x),
        ("behaviours.tracking.target_y", tracking.target_y),
    ] {
        if !(0.0..=1.0).contains(&value) || !value.is_finite() {
            errors.push(ConfigValidationError::InvalidValue {
                field: field.to_string(),
                reason: "normalized target must lie within [0, 1]".to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EstebanConfig;

    #[test]
    fn test_default_config_is_valid() {
        let config = EstebanConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let mut config = EstebanConfig::default();
        config.behaviours.poll_interval_ms = 0;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("poll_interval_ms"));
    }

    #[test]
    fn test_zero_gain_rejected() {
        let mut config = EstebanConfig::default();
        config.behaviours.tracking.max_step = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_out_of_range_target_rejected() {
        let mut config = EstebanConfig::default();
        config.behaviours.tracking.target_x = 1.5;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("target_x"));
    }

    #[test]
    fn test_empty_gesture_label_rejected() {
        let mut config = EstebanConfig::default();
        config.behaviours.capture.gesture = "  ".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("behaviours.capture.gesture"));
    }

    #[test]
    fn test_port_conflict_rejected() {
        let mut config = EstebanConfig::default();
        config.actuators.camera_port = 8003;
        config.actuators.peripheral_port = 8003;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("Port conflict"));
    }

    #[test]
    fn test_all_violations_reported_together() {
        let mut config = EstebanConfig::default();
        config.behaviours.poll_interval_ms = 0;
        config.behaviours.tracking.max_step = -3;
        let message = validate_config(&config).unwrap_err().to_string();
        assert!(message.contains("poll_interval_ms"));
        assert!(message.contains("max_step"));
    }
}
