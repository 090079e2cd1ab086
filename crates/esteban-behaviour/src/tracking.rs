// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Closed-loop tracking behaviour: proportional servo control toward a
//! target hand position while the tracking gesture is held.

use crate::behaviour::{pace, Behaviour};
use crate::cooldown::CooldownGate;
use async_trait::async_trait;
use esteban_actuators::{MotorActuator, MotorAxis};
use esteban_config::TrackingBehaviourConfig;
use esteban_io::{GestureLabel, HandPosition, SensoryStream};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Convert a per-axis position error into a discrete servo step.
///
/// Truncation toward zero, not rounding: errors below `1/max_step` yield
/// a zero step, so sensor jitter around the target cannot chatter the
/// servos.
fn step_toward(error: f64, max_step: i32) -> i32 {
    (error * f64::from(max_step)) as i32
}

/// Steers the camera mount so the tracked hand sits at the target point.
///
/// While the tracking gesture is held, the loop samples the latest hand
/// position, converts the per-axis error into steps, and commands only
/// the axes that need correcting. The loop is a continuous servo: it
/// exits when the gesture ends, never when the error reaches zero.
pub struct TrackingBehaviour {
    stream: Arc<dyn SensoryStream>,
    motors: Arc<dyn MotorActuator>,
    tracking_label: GestureLabel,
    gate: CooldownGate,
    poll_interval: Duration,
    adjust_interval: Duration,
    max_step: i32,
    target: (f64, f64),
}

impl TrackingBehaviour {
    pub fn new(
        stream: Arc<dyn SensoryStream>,
        motors: Arc<dyn MotorActuator>,
        config: &TrackingBehaviourConfig,
        poll_interval: Duration,
    ) -> Self {
        Self {
            stream,
            motors,
            tracking_label: GestureLabel::from_wire(&config.gesture),
            gate: CooldownGate::new(config.cooldown()),
            poll_interval,
            adjust_interval: config.adjust_interval(),
            max_step: config.max_step,
            target: (config.target_x, config.target_y),
        }
    }

    /// The inner tracking loop. Runs until the gesture ends or shutdown.
    async fn track(&self, shutdown: &mut watch::Receiver<bool>) {
        info!(
            "{} gesture detected, starting hand position adjustments",
            self.tracking_label
        );

        loop {
            match self.stream.latest_hand_position().await {
                Ok(Some(HandPosition::Found { x, y })) => self.adjust(x, y).await,
                // A missing or unreadable sample skips this correction,
                // it never ends the session
                Ok(Some(HandPosition::NotFound)) | Ok(None) => {
                    debug!("No usable hand position this tick");
                }
                Err(e) => warn!("Hand position sample unusable: {}", e),
            }

            if !pace(self.adjust_interval, shutdown).await {
                return;
            }

            match self.stream.latest_gesture().await {
                Ok(Some(label)) if label == self.tracking_label => {}
                Ok(_) => {
                    info!(
                        "{} gesture no longer detected, stopping adjustments",
                        self.tracking_label
                    );
                    break;
                }
                // A failed read is not evidence the gesture ended
                Err(e) => warn!("Gesture sample unavailable: {}", e),
            }
        }
    }

    /// One proportional correction toward the target
    async fn adjust(&self, x: f64, y: f64) {
        let step_x = step_toward(self.target.0 - x, self.max_step);
        let step_y = step_toward(self.target.1 - y, self.max_step);

        if step_x == 0 && step_y == 0 {
            return;
        }

        info!("Adjusting position: move X by {}, move Y by {}", step_x, step_y);

        if step_x != 0 {
            if let Err(e) = self.motors.move_axis(MotorAxis::Horizontal, step_x).await {
                warn!("Failed to step {} motor: {}", MotorAxis::Horizontal, e);
            }
        }
        if step_y != 0 {
            if let Err(e) = self.motors.move_axis(MotorAxis::Vertical, step_y).await {
                warn!("Failed to step {} motor: {}", MotorAxis::Vertical, e);
            }
        }
    }
}

#[async_trait]
impl Behaviour for TrackingBehaviour {
    fn name(&self) -> &'static str {
        "tracking"
    }

    async fn run(mut self: Box<Self>, mut shutdown: watch::Receiver<bool>) {
        debug!("Tracking behaviour polling for {}", self.tracking_label);

        loop {
            match self.stream.latest_gesture().await {
                Ok(Some(label)) if label == self.tracking_label => {
                    if self.gate.try_fire() {
                        self.track(&mut shutdown).await;
                    }
                }
                Ok(_) => {}
                Err(e) => warn!("Gesture sample unavailable: {}", e),
            }

            if !pace(self.poll_interval, &mut shutdown).await {
                break;
            }
        }

        debug!("Tracking behaviour stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_conversion_truncates_toward_zero() {
        assert_eq!(step_toward(0.07, 10), 0);
        assert_eq!(step_toward(0.15, 10), 1);
        assert_eq!(step_toward(-0.25, 10), -2);
        assert_eq!(step_toward(0.0, 10), 0);
    }

    #[test]
    fn test_step_conversion_scales_with_gain() {
        assert_eq!(step_toward(0.15, 20), 3);
        assert_eq!(step_toward(0.5, 10), 5);
        assert_eq!(step_toward(-0.5, 10), -5);
    }

    #[test]
    fn test_sub_threshold_error_suppressed() {
        // Anything below 1/max_step collapses to zero on both sides
        assert_eq!(step_toward(0.099, 10), 0);
        assert_eq!(step_toward(-0.099, 10), 0);
    }
}
