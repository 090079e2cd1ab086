// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! This module implements the 3-tier configuration loading system:
//! 1. TOML file (base defaults)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{ConfigError, ConfigResult, EstebanConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Find the Esteban configuration file
///
/// Search order:
/// 1. `ESTEBAN_CONFIG_PATH` environment variable
/// 2. Current working directory: `./esteban_configuration.toml`
/// 3. Ancestor directories (searches up to 5 levels)
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    // 1. Check environment variable first
    if let Ok(env_path) = env::var("ESTEBAN_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        } else {
            return Err(ConfigError::FileNotFound(format!(
                "Config file specified by ESTEBAN_CONFIG_PATH not found: {}",
                path.display()
            )));
        }
    }

    // 2. Search in common locations
    let mut search_paths = Vec::new();

    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join("esteban_configuration.toml"));

        let mut current = cwd.clone();
        for _ in 0..5 {
            if let Some(parent) = current.parent() {
                search_paths.push(parent.join("esteban_configuration.toml"));
                current = parent.to_path_buf();
            }
        }
    }

    for path in &search_paths {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "Esteban configuration file 'esteban_configuration.toml' not found in any of these locations:\n{}\n\nSet ESTEBAN_CONFIG_PATH environment variable to specify custom location.",
        search_list
    )))
}

/// Load configuration from TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Returns
///
/// Complete `EstebanConfig` with all overrides applied
///
/// # Errors
///
/// Returns error if config file is not found or contains invalid TOML
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<EstebanConfig> {
    let config_file = if let Some(path) = config_path {
        path.to_path_buf()
    } else {
        find_config_file()?
    };

    let content = fs::read_to_string(&config_file)?;

    let mut config: EstebanConfig = toml::from_str(&content)?;

    // Apply overrides in order
    apply_environment_overrides(&mut config);

    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    Ok(config)
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `ESTEBAN_QUEUE_HOST` -> `queue.host`
/// - `ESTEBAN_QUEUE_PORT` -> `queue.port`
/// - `ESTEBAN_QUEUE_DB` -> `queue.db`
/// - `ESTEBAN_ACTUATOR_HOST` -> `actuators.host`
/// - `ESTEBAN_CAMERA_PORT` -> `actuators.camera_port`
/// - `ESTEBAN_PERIPHERAL_PORT` -> `actuators.peripheral_port`
/// - `ESTEBAN_LOG_LEVEL` -> `system.log_level`
/// - `ESTEBAN_LOG_DIR` -> `system.log_dir`
pub fn apply_environment_overrides(config: &mut EstebanConfig) {
    // Queue settings
    if let Ok(value) = env::var("ESTEBAN_QUEUE_HOST") {
        config.queue.host = value;
    }
    if let Ok(value) = env::var("ESTEBAN_QUEUE_PORT") {
        if let Ok(port) = value.parse::<u16>() {
            config.queue.port = port;
        }
    }
    if let Ok(value) = env::var("ESTEBAN_QUEUE_DB") {
        if let Ok(db) = value.parse::<i64>() {
            config.queue.db = db;
        }
    }

    // Actuator settings
    if let Ok(value) = env::var("ESTEBAN_ACTUATOR_HOST") {
        config.actuators.host = value;
    }
    if let Ok(value) = env::var("ESTEBAN_CAMERA_PORT") {
        if let Ok(port) = value.parse::<u16>() {
            config.actuators.camera_port = port;
        }
    }
    if let Ok(value) = env::var("ESTEBAN_PERIPHERAL_PORT") {
        if let Ok(port) = value.parse::<u16>() {
            config.actuators.peripheral_port = port;
        }
    }

    // System settings
    if let Ok(value) = env::var("ESTEBAN_LOG_LEVEL") {
        config.system.log_level = value;
    }
    if let Ok(value) = env::var("ESTEBAN_LOG_DIR") {
        config.system.log_dir = PathBuf::from(value);
    }
}

/// Apply CLI argument overrides to configuration
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - HashMap of CLI arguments (e.g., `{"queue_host": "192.168.1.1", "log_level": "debug"}`)
pub fn apply_cli_overrides(config: &mut EstebanConfig, cli_args: &HashMap<String, String>) {
    // Queue settings
    if let Some(value) = cli_args.get("queue_host") {
        config.queue.host = value.clone();
    }
    if let Some(value) = cli_args.get("queue_port") {
        if let Ok(port) = value.parse::<u16>() {
            config.queue.port = port;
        }
    }

    // Actuator settings
    if let Some(value) = cli_args.get("actuator_host") {
        config.actuators.host = value.clone();
    }
    if let Some(value) = cli_args.get("camera_port") {
        if let Ok(port) = value.parse::<u16>() {
            config.actuators.camera_port = port;
        }
    }
    if let Some(value) = cli_args.get("peripheral_port") {
        if let Ok(port) = value.parse::<u16>() {
            config.actuators.peripheral_port = port;
        }
    }

    // System settings
    if let Some(value) = cli_args.get("log_level") {
        config.system.log_level = value.clone();
    }
    if let Some(value) = cli_args.get("log_dir") {
        config.system.log_dir = PathBuf::from(value);
    }

    // Behaviour cadence
    if let Some(value) = cli_args.get("poll_interval_ms") {
        if let Ok(interval) = value.parse::<u64>() {
            config.behaviours.poll_interval_ms = interval;
        }
    }
}
