// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Esteban brain service.
//!
//! Loads configuration, connects the sensory queue and actuator clients,
//! and runs the behaviour engine until the process receives Ctrl-C.

use anyhow::Context;
use esteban_actuators::{CameraClient, PeripheralClient};
use esteban_behaviour::{BehaviourEngine, TrackingBehaviour, TriggerBehaviour};
use esteban_config::{load_config, validate_config};
use esteban_io::RedisSensoryBus;
use esteban_observability::{init_logging, parse_debug_flags};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Parse `--config <path>` plus `--key=value` configuration overrides.
///
/// `--debug-*` flags are left for the observability layer to interpret.
fn parse_cli_args() -> (Option<PathBuf>, HashMap<String, String>) {
    let mut config_path = None;
    let mut overrides = HashMap::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            config_path = args.next().map(PathBuf::from);
            continue;
        }
        if let Some(stripped) = arg.strip_prefix("--") {
            if stripped.starts_with("debug-") {
                continue;
            }
            if let Some((key, value)) = stripped.split_once('=') {
                overrides.insert(key.replace('-', "_"), value.to_string());
            }
        }
    }

    (config_path, overrides)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config_path, overrides) = parse_cli_args();

    let config = load_config(config_path.as_deref(), Some(&overrides))
        .context("Failed to load configuration")?;
    validate_config(&config).context("Invalid configuration")?;

    let debug_flags = parse_debug_flags();
    let logging = init_logging(
        &debug_flags,
        &config.system.log_level,
        Some(config.system.log_dir.clone()),
        Some(config.system.log_retention_runs),
    )
    .context("Failed to initialize logging")?;

    info!(
        "Esteban brain v{} starting; logging to {}",
        esteban::VERSION,
        logging.log_dir().display()
    );

    let stream = Arc::new(
        RedisSensoryBus::connect(&config.queue)
            .await
            .context("Failed to connect to the sensory queue")?,
    );

    let timeout = config.actuators.request_timeout();
    let peripherals = Arc::new(PeripheralClient::new(
        config.actuators.peripheral_url(),
        timeout,
    )?);
    let camera = Arc::new(CameraClient::new(config.actuators.camera_url(), timeout)?);

    let mut engine = BehaviourEngine::new();
    engine.register(Box::new(TriggerBehaviour::new(
        stream.clone(),
        peripherals.clone(),
        camera,
        &config.behaviours.capture,
        config.behaviours.poll_interval(),
    )));
    engine.register(Box::new(TrackingBehaviour::new(
        stream,
        peripherals,
        &config.behaviours.tracking,
        config.behaviours.poll_interval(),
    )));

    engine.start();
    info!("Behaviour engine running; press Ctrl-C to stop");

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;

    engine.shutdown().await;
    info!("Esteban brain stopped");

    Ok(())
}
