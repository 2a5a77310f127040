// SPDX-License-Identifier: MPL-2.0
//! Playback rate domain type.
//!
//! Surfaces reject non-positive rates, so the wrapper keeps the value within
//! 0.1x - 8.0x.

use crate::config::{DEFAULT_PLAYBACK_RATE, MAX_PLAYBACK_RATE, MIN_PLAYBACK_RATE};

/// Playback rate, guaranteed to be within valid range (0.1x - 8.0x).
///
/// # Example
///
/// ```
/// use playback_overlay::overlay::PlaybackRate;
///
/// let rate = PlaybackRate::new(2.0);
/// assert_eq!(rate.value(), 2.0);
///
/// // Values outside range are clamped
/// assert_eq!(PlaybackRate::new(0.0).value(), 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    /// Creates a new playback rate, clamping to valid range.
    ///
    /// NaN falls back to normal speed. Adjusted values are logged.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        if rate.is_nan() {
            tracing::debug!("NaN playback rate, using normal speed");
            return Self::default();
        }
        let clamped = rate.clamp(MIN_PLAYBACK_RATE, MAX_PLAYBACK_RATE);
        if clamped != rate {
            tracing::debug!(requested = rate, used = clamped, "Playback rate clamped");
        }
        Self(clamped)
    }

    /// Returns the rate value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self(DEFAULT_PLAYBACK_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_abs_diff_eq!(PlaybackRate::new(0.01).value(), MIN_PLAYBACK_RATE);
        assert_abs_diff_eq!(PlaybackRate::new(-3.0).value(), MIN_PLAYBACK_RATE);
        assert_abs_diff_eq!(PlaybackRate::new(100.0).value(), MAX_PLAYBACK_RATE);
        assert_abs_diff_eq!(PlaybackRate::new(1.25).value(), 1.25);
    }

    #[test]
    fn default_is_normal_speed() {
        assert_abs_diff_eq!(PlaybackRate::default().value(), 1.0);
    }

    #[test]
    fn nan_falls_back_to_default() {
        assert_eq!(PlaybackRate::new(f64::NAN), PlaybackRate::default());
    }
}
