// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Actuator traits (transport-agnostic).
//!
//! Behaviours command actuators through these seams; tests substitute
//! recording fakes.

use crate::ActuatorResult;
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;

/// The two servo axes of the camera mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotorAxis {
    Horizontal,
    Vertical,
}

impl MotorAxis {
    /// Service endpoint path for this axis
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Horizontal => "move_horizontal",
            Self::Vertical => "move_vertical",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl fmt::Display for MotorAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Acknowledgement of a servo step
///
/// The service reports the axis-specific field name on the wire; both map
/// onto `new_angle` here.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveAck {
    pub status: String,
    #[serde(
        default,
        alias = "new_horizontal_angle",
        alias = "new_vertical_angle"
    )]
    pub new_angle: Option<f64>,
}

/// Relative stepping of the camera mount servos
#[async_trait]
pub trait MotorActuator: Send + Sync {
    /// Step one axis by a signed number of degrees.
    ///
    /// One call per axis per control-loop iteration; the caller decides
    /// which axes need correcting and skips zero steps.
    async fn move_axis(&self, axis: MotorAxis, step: i32) -> ActuatorResult<MoveAck>;
}

/// Audible feedback channel (fire-and-forget)
#[async_trait]
pub trait FeedbackActuator: Send + Sync {
    /// Chirp the buzzer to announce that a capture sequence has started.
    ///
    /// Best-effort: callers log a failure and carry on.
    async fn announce_trigger(&self) -> ActuatorResult<()>;
}

/// Still capture trigger
#[async_trait]
pub trait CameraActuator: Send + Sync {
    /// Ask the camera service to take a photo now
    async fn take_photo(&self) -> ActuatorResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_endpoints() {
        assert_eq!(MotorAxis::Horizontal.endpoint(), "move_horizontal");
        assert_eq!(MotorAxis::Vertical.endpoint(), "move_vertical");
    }

    #[test]
    fn test_move_ack_accepts_both_axis_fields() {
        let horizontal: MoveAck =
            serde_json::from_str(r#"{"status": "success", "new_horizontal_angle": 92.5}"#).unwrap();
        assert_eq!(horizontal.new_angle, Some(92.5));

        let vertical: MoveAck =
            serde_json::from_str(r#"{"status": "success", "new_vertical_angle": 45.0}"#).unwrap();
        assert_eq!(vertical.new_angle, Some(45.0));
    }

    #[test]
    fn test_move_ack_tolerates_missing_angle() {
        let ack: MoveAck = serde_json::from_str(r#"{"status": "success"}"#).unwrap();
        assert_eq!(ack.new_angle, None);
    }
}
