// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Shared fixtures for behaviour tests: scripted sensory streams and
//! recording actuator fakes.

#![allow(dead_code)]

use async_trait::async_trait;
use esteban_actuators::{
    ActuatorError, ActuatorResult, CameraActuator, FeedbackActuator, MotorActuator, MotorAxis,
    MoveAck,
};
use esteban_behaviour::Behaviour;
use esteban_io::{GestureLabel, HandPosition, SensoryResult, SensoryStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// A finite sample script; once exhausted, the last entry is served
/// forever (the queue keeps returning its tail entry between appends).
struct Script<T> {
    samples: Vec<Option<T>>,
    cursor: usize,
}

impl<T: Clone> Script<T> {
    fn new(samples: Vec<Option<T>>) -> Self {
        Self { samples, cursor: 0 }
    }

    fn next(&mut self) -> Option<T> {
        if self.samples.is_empty() {
            return None;
        }
        let index = self.cursor.min(self.samples.len() - 1);
        if self.cursor < self.samples.len() {
            self.cursor += 1;
        }
        self.samples[index].clone()
    }
}

/// Sensory stream serving pre-scripted samples in read order
pub struct ScriptedSensory {
    gestures: Mutex<Script<GestureLabel>>,
    positions: Mutex<Script<HandPosition>>,
}

impl ScriptedSensory {
    pub fn new(
        gestures: Vec<Option<GestureLabel>>,
        positions: Vec<Option<HandPosition>>,
    ) -> Self {
        Self {
            gestures: Mutex::new(Script::new(gestures)),
            positions: Mutex::new(Script::new(positions)),
        }
    }

    /// Stream that always serves the same gesture and position
    pub fn steady(gesture: Option<GestureLabel>, position: Option<HandPosition>) -> Self {
        Self::new(vec![gesture], vec![position])
    }
}

#[async_trait]
impl SensoryStream for ScriptedSensory {
    async fn latest_gesture(&self) -> SensoryResult<Option<GestureLabel>> {
        Ok(self.gestures.lock().unwrap().next())
    }

    async fn latest_hand_position(&self) -> SensoryResult<Option<HandPosition>> {
        Ok(self.positions.lock().unwrap().next())
    }
}

/// Everything the behaviours asked the actuators to do, in call order
#[derive(Debug, Clone, PartialEq)]
pub enum ActuatorEvent {
    Feedback,
    Capture,
    Move(MotorAxis, i32),
}

/// Actuator fake recording every attempt; failures are injectable per
/// channel and still recorded (the attempt is what the tests reason about)
#[derive(Default)]
pub struct RecordingActuators {
    events: Mutex<Vec<ActuatorEvent>>,
    pub fail_feedback: AtomicBool,
    pub fail_capture: AtomicBool,
    pub fail_motors: AtomicBool,
}

impl RecordingActuators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ActuatorEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn moves(&self) -> Vec<(MotorAxis, i32)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ActuatorEvent::Move(axis, step) => Some((axis, step)),
                _ => None,
            })
            .collect()
    }

    pub fn captures(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, ActuatorEvent::Capture))
            .count()
    }

    pub fn feedback_signals(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, ActuatorEvent::Feedback))
            .count()
    }

    fn rejected(endpoint: &str) -> ActuatorError {
        ActuatorError::Rejected {
            endpoint: endpoint.to_string(),
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[async_trait]
impl MotorActuator for RecordingActuators {
    async fn move_axis(&self, axis: MotorAxis, step: i32) -> ActuatorResult<MoveAck> {
        self.events
            .lock()
            .unwrap()
            .push(ActuatorEvent::Move(axis, step));
        if self.fail_motors.load(Ordering::Relaxed) {
            return Err(Self::rejected(axis.endpoint()));
        }
        Ok(MoveAck {
            status: "success".to_string(),
            new_angle: Some(90.0),
        })
    }
}

#[async_trait]
impl FeedbackActuator for RecordingActuators {
    async fn announce_trigger(&self) -> ActuatorResult<()> {
        self.events.lock().unwrap().push(ActuatorEvent::Feedback);
        if self.fail_feedback.load(Ordering::Relaxed) {
            return Err(Self::rejected("ok_triggered"));
        }
        Ok(())
    }
}

#[async_trait]
impl CameraActuator for RecordingActuators {
    async fn take_photo(&self) -> ActuatorResult<()> {
        self.events.lock().unwrap().push(ActuatorEvent::Capture);
        if self.fail_capture.load(Ordering::Relaxed) {
            return Err(Self::rejected("take_photo"));
        }
        Ok(())
    }
}

/// Spawn a behaviour on its own task, returning the shutdown handle pair
pub fn spawn_behaviour<B: Behaviour>(behaviour: B) -> (watch::Sender<bool>, JoinHandle<()>) {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let handle = tokio::spawn(Box::new(behaviour).run(shutdown_rx));
    (shutdown_tx, handle)
}
