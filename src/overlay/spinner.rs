// SPDX-License-Identifier: MPL-2.0
//! Loading spinner animation.
//!
//! The spinner runs in fixed-length cycles, each sweeping 0° to 360°. It does
//! not loop unconditionally: at every cycle boundary the caller's loading
//! predicate is re-checked and the spinner stops once it no longer holds.

use crate::config::{LOADER_CYCLE_MS, LOADER_MAX_ROTATION_DEG};
use std::time::{Duration, Instant};

/// Cancellable repeating rotation.
#[derive(Debug, Clone, Default)]
pub struct Spinner {
    /// Start of the current cycle, `None` when stopped.
    cycle_started_at: Option<Instant>,
    rotation_deg: f32,
    cycles_completed: u32,
}

impl Spinner {
    fn cycle() -> Duration {
        Duration::from_millis(LOADER_CYCLE_MS)
    }

    /// Starts a new animation. No-op if already running.
    pub fn start(&mut self, now: Instant) {
        if self.cycle_started_at.is_none() {
            self.cycle_started_at = Some(now);
            self.rotation_deg = 0.0;
            self.cycles_completed = 0;
        }
    }

    /// Stops the animation immediately. Returns whether it was running.
    pub fn stop(&mut self) -> bool {
        self.rotation_deg = 0.0;
        self.cycle_started_at.take().is_some()
    }

    /// Advances the rotation to `now`.
    ///
    /// `still_loading` is consulted only when a cycle completes; returns
    /// whether the spinner is still running afterwards.
    pub fn tick(&mut self, now: Instant, still_loading: bool) -> bool {
        let Some(started) = self.cycle_started_at else {
            return false;
        };
        let cycle = Self::cycle();
        let mut elapsed = now.saturating_duration_since(started);

        if elapsed >= cycle {
            if !still_loading {
                self.stop();
                return false;
            }
            let whole = (elapsed.as_millis() / cycle.as_millis()) as u32;
            let next_start = started + cycle * whole;
            self.cycle_started_at = Some(next_start);
            self.cycles_completed = self.cycles_completed.saturating_add(whole);
            elapsed = now.saturating_duration_since(next_start);
        }

        self.rotation_deg =
            LOADER_MAX_ROTATION_DEG * (elapsed.as_secs_f32() / cycle.as_secs_f32());
        true
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.cycle_started_at.is_some()
    }

    /// Current rotation in degrees, `None` while stopped.
    #[must_use]
    pub fn rotation_deg(&self) -> Option<f32> {
        self.cycle_started_at.map(|_| self.rotation_deg)
    }

    #[must_use]
    pub fn cycles_completed(&self) -> u32 {
        self.cycles_completed
    }
}
