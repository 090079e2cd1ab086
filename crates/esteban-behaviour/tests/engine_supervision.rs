// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Engine supervision tests: independent task spawning, shutdown joining,
//! and tolerance of misbehaving tasks.

mod support;

use async_trait::async_trait;
use esteban_behaviour::{Behaviour, BehaviourEngine, TrackingBehaviour, TriggerBehaviour};
use esteban_config::BehavioursConfig;
use esteban_io::GestureLabel;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use support::{RecordingActuators, ScriptedSensory};

fn full_engine(actuators: Arc<RecordingActuators>) -> BehaviourEngine {
    let config = BehavioursConfig::default();
    let stream = Arc::new(ScriptedSensory::steady(Some(GestureLabel::NoGesture), None));

    let mut engine = BehaviourEngine::new();
    engine.register(Box::new(TriggerBehaviour::new(
        stream.clone(),
        actuators.clone(),
        actuators.clone(),
        &config.capture,
        config.poll_interval(),
    )));
    engine.register(Box::new(TrackingBehaviour::new(
        stream,
        actuators,
        &config.tracking,
        config.poll_interval(),
    )));
    engine
}

#[tokio::test(start_paused = true)]
async fn engine_starts_and_joins_all_behaviours() {
    let actuators = Arc::new(RecordingActuators::new());
    let mut engine = full_engine(actuators.clone());
    assert_eq!(engine.pending_count(), 2);

    engine.start();
    assert_eq!(engine.pending_count(), 0);
    assert_eq!(engine.task_count(), 2);

    tokio::time::sleep(Duration::from_millis(500)).await;
    engine.shutdown().await;

    // No trigger gesture ever appeared
    assert!(actuators.events().is_empty());
}

/// A behaviour whose loop returns immediately (a bug in a real behaviour)
struct ReturnsEarly;

#[async_trait]
impl Behaviour for ReturnsEarly {
    fn name(&self) -> &'static str {
        "returns-early"
    }

    async fn run(self: Box<Self>, _shutdown: watch::Receiver<bool>) {}
}

/// A behaviour that panics outright
struct Panics;

#[async_trait]
impl Behaviour for Panics {
    fn name(&self) -> &'static str {
        "panics"
    }

    async fn run(self: Box<Self>, _shutdown: watch::Receiver<bool>) {
        panic!("deliberate test panic");
    }
}

#[tokio::test(start_paused = true)]
async fn engine_shutdown_tolerates_early_exit_and_panic() {
    let actuators = Arc::new(RecordingActuators::new());
    let mut engine = full_engine(actuators);
    engine.register(Box::new(ReturnsEarly));
    engine.register(Box::new(Panics));

    engine.start();
    assert_eq!(engine.task_count(), 4);

    tokio::time::sleep(Duration::from_millis(300)).await;
    // Joining must complete even though two tasks died long before shutdown
    engine.shutdown().await;
}
