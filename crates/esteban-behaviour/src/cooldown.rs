// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Per-behaviour debounce primitive.

use std::time::{Duration, Instant};

/// Debounce gate enforcing a minimum interval between successive firings.
///
/// Each behaviour owns exactly one gate; the gate is mutated only by its
/// owning task, so no synchronization is involved. A sustained gesture
/// held across many polls passes the gate once per cooldown window.
#[derive(Debug)]
pub struct CooldownGate {
    cooldown: Duration,
    last_triggered: Option<Instant>,
}

impl CooldownGate {
    /// Create a gate that has never fired; the first `try_fire` call admits.
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_triggered: None,
        }
    }

    /// Admit and record a firing iff the cooldown window has elapsed.
    pub fn try_fire(&mut self) -> bool {
        self.try_fire_at(Instant::now())
    }

    /// Clock-injectable form of [`CooldownGate::try_fire`].
    ///
    /// Returns `true` and records `now` as the trigger time iff at least
    /// the cooldown duration has passed since the last admitted call.
    /// Denied calls leave the gate unchanged. A zero cooldown admits
    /// every call.
    pub fn try_fire_at(&mut self, now: Instant) -> bool {
        let admit = match self.last_triggered {
            Some(last) => now.saturating_duration_since(last) >= self.cooldown,
            None => true,
        };
        if admit {
            self.last_triggered = Some(now);
        }
        admit
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_admits() {
        let mut gate = CooldownGate::new(Duration::from_secs(5));
        assert!(gate.try_fire_at(Instant::now()));
    }

    #[test]
    fn test_cooldown_monotonicity() {
        let mut gate = CooldownGate::new(Duration::from_secs(5));
        let t0 = Instant::now();
        assert!(gate.try_fire_at(t0));

        // Inside the window: denied
        assert!(!gate.try_fire_at(t0 + Duration::from_secs(4)));
        // Exactly at the boundary: admitted
        assert!(gate.try_fire_at(t0 + Duration::from_secs(5)));
    }

    #[test]
    fn test_denied_call_does_not_extend_window() {
        let mut gate = CooldownGate::new(Duration::from_secs(5));
        let t0 = Instant::now();
        assert!(gate.try_fire_at(t0));

        // Repeated denials must not push the next admission out
        assert!(!gate.try_fire_at(t0 + Duration::from_secs(1)));
        assert!(!gate.try_fire_at(t0 + Duration::from_secs(2)));
        assert!(gate.try_fire_at(t0 + Duration::from_secs(5)));
    }

    #[test]
    fn test_zero_cooldown_always_admits() {
        let mut gate = CooldownGate::new(Duration::ZERO);
        let t0 = Instant::now();
        assert!(gate.try_fire_at(t0));
        assert!(gate.try_fire_at(t0));
        assert!(gate.try_fire_at(t0 + Duration::from_millis(1)));
    }
}
