// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # esteban-observability
//!
//! Logging infrastructure for the Esteban behaviour coordination service.
//!
//! Provides console output plus rotating JSON file logs in timestamped run
//! folders, with per-crate debug flag support. The file logs are what the
//! operator inspects after the fact; the robot itself has no screen.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod init;

// Re-export commonly used items
pub use cli::*;
pub use init::*;

/// Known Esteban crate names for debug flags
pub const KNOWN_CRATES: &[&str] = &[
    "esteban-config",
    "esteban-io",
    "esteban-actuators",
    "esteban-behaviour",
];
