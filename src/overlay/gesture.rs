// SPDX-License-Identifier: MPL-2.0
//! Single vs double tap disambiguation.

use crate::config::DOUBLE_TAP_WINDOW_MS;
use std::time::{Duration, Instant};

/// Semantic tap produced from a raw tap timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tap {
    Single,
    Double,
}

/// Classifies raw taps by their distance to the previous tap.
///
/// A double tap is only reported when fullscreen toggling is enabled; with it
/// disabled every tap degrades to [`Tap::Single`] so the controls toggle still
/// happens.
#[derive(Debug, Clone)]
pub struct TapClassifier {
    last_tap: Option<Instant>,
    double_tap_enabled: bool,
    window: Duration,
}

impl TapClassifier {
    #[must_use]
    pub fn new(fullscreen_toggle_enabled: bool) -> Self {
        Self {
            last_tap: None,
            double_tap_enabled: fullscreen_toggle_enabled,
            window: Duration::from_millis(DOUBLE_TAP_WINDOW_MS),
        }
    }

    /// Classifies a tap at `now` and records it as the latest tap.
    pub fn classify(&mut self, now: Instant) -> Tap {
        let within_window = self
            .last_tap
            .is_some_and(|last| now.saturating_duration_since(last) < self.window);
        self.last_tap = Some(now);

        if within_window && self.double_tap_enabled {
            Tap::Double
        } else {
            Tap::Single
        }
    }

    #[must_use]
    pub fn last_tap(&self) -> Option<Instant> {
        self.last_tap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn first_tap_is_single() {
        let mut taps = TapClassifier::new(true);
        assert_eq!(taps.classify(Instant::now()), Tap::Single);
    }

    #[test]
    fn quick_second_tap_is_double() {
        let start = Instant::now();
        let mut taps = TapClassifier::new(true);
        taps.classify(start);
        assert_eq!(taps.classify(start + ms(299)), Tap::Double);
    }

    #[test]
    fn window_boundary_is_exclusive() {
        let start = Instant::now();
        let mut taps = TapClassifier::new(true);
        taps.classify(start);
        assert_eq!(taps.classify(start + ms(300)), Tap::Single);
    }

    #[test]
    fn double_degrades_to_single_when_fullscreen_disabled() {
        let start = Instant::now();
        let mut taps = TapClassifier::new(false);
        taps.classify(start);
        assert_eq!(taps.classify(start + ms(50)), Tap::Single);
    }

    #[test]
    fn slow_taps_are_always_single() {
        let start = Instant::now();
        let mut taps = TapClassifier::new(true);
        for i in 0..20 {
            let gap = 300 + i * 37;
            let at = start + ms(i * 1_000 + gap);
            assert_eq!(taps.classify(at), Tap::Single);
        }
    }

    #[test]
    fn timestamp_is_recorded_for_every_tap() {
        let start = Instant::now();
        let mut taps = TapClassifier::new(true);
        taps.classify(start);
        taps.classify(start + ms(100));
        assert_eq!(taps.last_tap(), Some(start + ms(100)));

        // A third quick tap pairs with the second one
        assert_eq!(taps.classify(start + ms(200)), Tap::Double);
    }
}
