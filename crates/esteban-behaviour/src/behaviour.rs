// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Behaviour capability trait.

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::watch;

/// A unit of coordination: a detection condition plus a reaction.
///
/// `run` is the behaviour's detection loop. It takes ownership of the
/// behaviour, so all mutable per-behaviour state (notably the cooldown
/// gate) lives on exactly one task for the process lifetime. The loop
/// returns only when `shutdown` is signalled.
#[async_trait]
pub trait Behaviour: Send + 'static {
    fn name(&self) -> &'static str;

    async fn run(self: Box<Self>, shutdown: watch::Receiver<bool>);
}

/// Sleep for `period`, waking early on shutdown.
///
/// Returns `false` when shutdown was signalled (or the engine dropped the
/// channel); callers exit their loop on `false`.
pub(crate) async fn pace(period: Duration, shutdown: &mut watch::Receiver<bool>) -> bool {
    // The change may already have been observed by an earlier pace on
    // this receiver; the current value is what decides.
    if *shutdown.borrow() {
        return false;
    }
    tokio::select! {
        _ = tokio::time::sleep(period) => true,
        _ = shutdown.changed() => false,
    }
}
