// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and a recording playback surface.
//!
//! Re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::surface::{Command, PlaybackSurface};

/// Default epsilon for f64 comparisons.
pub const F64_EPSILON: f64 = 1e-10;

/// Surface that records every command it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<Command>,
}

impl PlaybackSurface for RecordingSurface {
    fn play(&mut self) {
        self.commands.push(Command::Play);
    }

    fn pause(&mut self) {
        self.commands.push(Command::Pause);
    }

    fn seek(&mut self, time_secs: f64) {
        self.commands.push(Command::Seek(time_secs));
    }

    fn set_volume(&mut self, volume: f32) {
        self.commands.push(Command::SetVolume(volume));
    }

    fn set_muted(&mut self, muted: bool) {
        self.commands.push(Command::SetMuted(muted));
    }

    fn set_rate(&mut self, rate: f64) {
        self.commands.push(Command::SetRate(rate));
    }
}
