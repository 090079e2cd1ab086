// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Single-shot trigger behaviour: gesture match fires a capture sequence.

use crate::behaviour::{pace, Behaviour};
use crate::cooldown::CooldownGate;
use async_trait::async_trait;
use esteban_actuators::{CameraActuator, FeedbackActuator};
use esteban_config::CaptureBehaviourConfig;
use esteban_io::{GestureLabel, SensoryStream};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

/// Fires the photo capture sequence when the trigger gesture appears.
///
/// The reaction is a fixed sequence: buzzer cue, settle delay, capture
/// request. Every failure along the way is logged and swallowed; the
/// detection loop resumes polling immediately. The cooldown gate keeps a
/// gesture held across many polls from re-firing within one window.
pub struct TriggerBehaviour {
    stream: Arc<dyn SensoryStream>,
    feedback: Arc<dyn FeedbackActuator>,
    camera: Arc<dyn CameraActuator>,
    trigger_label: GestureLabel,
    gate: CooldownGate,
    poll_interval: Duration,
    settle_delay: Duration,
}

impl TriggerBehaviour {
    pub fn new(
        stream: Arc<dyn SensoryStream>,
        feedback: Arc<dyn FeedbackActuator>,
        camera: Arc<dyn CameraActuator>,
        config: &CaptureBehaviourConfig,
        poll_interval: Duration,
    ) -> Self {
        Self {
            stream,
            feedback,
            camera,
            trigger_label: GestureLabel::from_wire(&config.gesture),
            gate: CooldownGate::new(config.cooldown()),
            poll_interval,
            settle_delay: config.settle_delay(),
        }
    }

    async fn react(&self, shutdown: &mut watch::Receiver<bool>) {
        info!("{} gesture detected, starting capture sequence", self.trigger_label);

        // Best-effort cue; the capture proceeds either way
        if let Err(e) = self.feedback.announce_trigger().await {
            warn!("Capture feedback signal failed: {}", e);
        }

        // Pacing between cue and shutter, not a completion handshake
        if !pace(self.settle_delay, shutdown).await {
            return;
        }

        match self.camera.take_photo().await {
            Ok(()) => info!("Photo taken successfully"),
            Err(e) => error!("Failed to take photo: {}", e),
        }
    }
}

#[async_trait]
impl Behaviour for TriggerBehaviour {
    fn name(&self) -> &'static str {
        "capture"
    }

    async fn run(mut self: Box<Self>, mut shutdown: watch::Receiver<bool>) {
        debug!("Capture behaviour polling for {}", self.trigger_label);

        loop {
            match self.stream.latest_gesture().await {
                Ok(Some(label)) if label == self.trigger_label => {
                    if self.gate.try_fire() {
                        self.react(&mut shutdown).await;
                    }
                }
                Ok(_) => {}
                Err(e) => warn!("Gesture sample unavailable: {}", e),
            }

            if !pace(self.poll_interval, &mut shutdown).await {
                break;
            }
        }

        debug!("Capture behaviour stopped");
    }
}
