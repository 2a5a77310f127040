// SPDX-License-Identifier: MPL-2.0
//! Timer display formatting.

use super::TimerMode;

/// Formats a duration as `MM:SS`, or `HH:MM:SS` once it reaches an hour.
///
/// Fractional seconds are truncated; negative and non-finite input formats
/// as zero.
///
/// ```
/// use playback_overlay::overlay::time_format::format_time;
///
/// assert_eq!(format_time(65.0), "01:05");
/// assert_eq!(format_time(3661.0), "01:01:01");
/// ```
#[must_use]
pub fn format_time(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() {
        seconds.max(0.0).floor() as u64
    } else {
        0
    };
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Text shown by the timer control.
///
/// `Remaining` shows `duration - current` (never below zero) with a leading `-`.
#[must_use]
pub fn timer_text(current_time: f64, duration: f64, mode: TimerMode) -> String {
    match mode {
        TimerMode::Elapsed => format_time(current_time),
        TimerMode::Remaining => {
            let remaining = (duration - current_time).max(0.0);
            format!("-{}", format_time(remaining))
        }
    }
}
