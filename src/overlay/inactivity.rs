// SPDX-License-Identifier: MPL-2.0
//! Inactivity timer that auto-hides visible controls.
//!
//! The timer is a single optional deadline checked against the host clock on
//! every tick. Cancelling clears the deadline, so a tick that arrives after a
//! cancel has nothing left to fire.

use crate::config::{
    DEFAULT_INACTIVITY_DELAY_MS, MAX_INACTIVITY_DELAY_MS, MIN_INACTIVITY_DELAY_MS,
};
use std::time::{Duration, Instant};

/// Delay before visible controls auto-hide.
///
/// Any configured value is used as given, as long as it is positive and no
/// longer than a day.
///
/// # Example
///
/// ```
/// use playback_overlay::overlay::InactivityDelay;
///
/// let delay = InactivityDelay::from_millis(5_000);
/// assert_eq!(delay.as_millis(), 5_000);
///
/// // Short delays are honoured, zero is not
/// assert_eq!(InactivityDelay::from_millis(10).as_millis(), 10);
/// assert_eq!(InactivityDelay::from_millis(0).as_millis(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InactivityDelay(u64);

impl InactivityDelay {
    /// Creates a new delay. Out-of-range values are clamped with a warning.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        let clamped = millis.clamp(MIN_INACTIVITY_DELAY_MS, MAX_INACTIVITY_DELAY_MS);
        if clamped != millis {
            tracing::warn!(
                requested_ms = millis,
                used_ms = clamped,
                "Inactivity delay out of range"
            );
        }
        Self(clamped)
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for InactivityDelay {
    fn default() -> Self {
        Self(DEFAULT_INACTIVITY_DELAY_MS)
    }
}

/// Single-shot, resettable countdown.
#[derive(Debug, Clone, Default)]
pub struct InactivityTimer {
    delay: InactivityDelay,
    deadline: Option<Instant>,
}

impl InactivityTimer {
    #[must_use]
    pub fn new(delay: InactivityDelay) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Starts the countdown from `now`, replacing any pending deadline.
    pub fn arm(&mut self, now: Instant) -> Instant {
        let deadline = now + self.delay.as_duration();
        self.deadline = Some(deadline);
        deadline
    }

    /// Drops the pending deadline. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// `cancel()` followed by `arm(now)`.
    pub fn rearm(&mut self, now: Instant) -> Instant {
        self.cancel();
        self.arm(now)
    }

    /// Fires when the deadline has passed. Fires at most once per arm.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[must_use]
    pub fn delay(&self) -> InactivityDelay {
        self.delay
    }
}
