// SPDX-License-Identifier: MPL-2.0
//! Composite playback state owned by the controller.
//!
//! Visibility, playback, fullscreen and health are orthogonal flags; together
//! they decide what the presenter renders.

use super::{PlaybackRate, Volume};
use crate::config::Config;

/// How the surface fits the media into its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeMode {
    Contain,
    Cover,
}

/// Whether the timer shows elapsed or remaining time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerMode {
    Elapsed,
    #[default]
    Remaining,
}

impl TimerMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            TimerMode::Elapsed => TimerMode::Remaining,
            TimerMode::Remaining => TimerMode::Elapsed,
        }
    }
}

/// Source health as reported by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Health {
    #[default]
    Ok,
    Loading,
    /// Sticky until the next load starts.
    Error,
}

/// Playback state.
///
/// Fields are read through accessors; only the controller and the drag-sync
/// guard write them.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub(crate) paused: bool,
    pub(crate) muted: bool,
    pub(crate) volume: Volume,
    pub(crate) rate: PlaybackRate,
    pub(crate) is_fullscreen: bool,
    pub(crate) fullscreen_toggle_enabled: bool,
    pub(crate) timer_mode: TimerMode,
    pub(crate) controls_visible: bool,
    pub(crate) seeking: bool,
    pub(crate) health: Health,
    pub(crate) current_time: f64,
    pub(crate) duration: f64,
}

impl PlaybackState {
    /// Seeds the state from configuration. Controls start visible.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            paused: config.playback.paused,
            muted: config.playback.muted,
            volume: Volume::new(config.playback.volume),
            rate: PlaybackRate::new(config.playback.rate),
            is_fullscreen: config.controls.fullscreen,
            fullscreen_toggle_enabled: config.controls.fullscreen_toggle,
            timer_mode: if config.controls.show_time_remaining {
                TimerMode::Remaining
            } else {
                TimerMode::Elapsed
            },
            controls_visible: true,
            seeking: false,
            health: Health::Ok,
            current_time: 0.0,
            duration: 0.0,
        }
    }

    #[must_use]
    pub fn resize_mode(&self) -> ResizeMode {
        if self.is_fullscreen {
            ResizeMode::Cover
        } else {
            ResizeMode::Contain
        }
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    #[must_use]
    pub fn rate(&self) -> PlaybackRate {
        self.rate
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    #[must_use]
    pub fn fullscreen_toggle_enabled(&self) -> bool {
        self.fullscreen_toggle_enabled
    }

    #[must_use]
    pub fn timer_mode(&self) -> TimerMode {
        self.timer_mode
    }

    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    #[must_use]
    pub fn is_seeking(&self) -> bool {
        self.seeking
    }

    #[must_use]
    pub fn health(&self) -> Health {
        self.health
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.health == Health::Loading
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.health == Health::Error
    }

    #[must_use]
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Source duration in seconds, 0 until the surface reports it.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Clamps a position to `[0, duration]`, or to `>= 0` while duration is unknown.
    pub(crate) fn clamp_position(&self, time: f64) -> f64 {
        if !time.is_finite() {
            return 0.0;
        }
        let time = time.max(0.0);
        if self.duration > 0.0 {
            time.min(self.duration)
        } else {
            time
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
