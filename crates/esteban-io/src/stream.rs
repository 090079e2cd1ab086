// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Sensory stream trait.
//!
//! Behaviours sample sensory data through this seam and never name the
//! queue technology; tests substitute scripted in-memory streams.

use crate::{GestureLabel, HandPosition, SensoryResult};
use async_trait::async_trait;

/// Read-only access to the most recent sensory samples (transport-agnostic)
#[async_trait]
pub trait SensoryStream: Send + Sync {
    /// Most recently appended gesture label, if any has ever been produced.
    ///
    /// Reads are non-destructive; two callers at different instants may
    /// observe different "latest" values.
    async fn latest_gesture(&self) -> SensoryResult<Option<GestureLabel>>;

    /// Most recently appended hand position, if any has ever been produced.
    ///
    /// Returns `Err(SensoryError::MalformedSample)` when the latest record
    /// exists but cannot be decoded.
    async fn latest_hand_position(&self) -> SensoryResult<Option<HandPosition>>;
}
