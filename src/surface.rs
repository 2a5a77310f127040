// SPDX-License-Identifier: MPL-2.0
//! Playback surface boundary.
//!
//! The surface decodes and renders media; the overlay only talks to it through
//! the [`PlaybackSurface`] commands and listens to its [`SurfaceEvent`]s.
//! [`SimulatedSurface`] is a clock-driven stand-in used by the demo app and
//! the integration tests.

use crate::error::PlaybackError;

/// Imperative commands the overlay sends to the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Play,
    Pause,
    /// Seek to an absolute position in seconds.
    Seek(f64),
    /// Volume in `0.0..=1.0`.
    SetVolume(f32),
    SetMuted(bool),
    /// Playback rate, strictly positive.
    SetRate(f64),
}

impl Command {
    /// `Pause` when `paused`, `Play` otherwise.
    #[must_use]
    pub fn paused(paused: bool) -> Self {
        if paused {
            Command::Pause
        } else {
            Command::Play
        }
    }
}

/// Capability exposed by a playback surface.
pub trait PlaybackSurface {
    fn play(&mut self);
    fn pause(&mut self);
    fn seek(&mut self, time_secs: f64);
    fn set_volume(&mut self, volume: f32);
    fn set_muted(&mut self, muted: bool);
    fn set_rate(&mut self, rate: f64);

    /// Dispatches a [`Command`] to the matching method.
    fn apply(&mut self, command: Command) {
        match command {
            Command::Play => self.play(),
            Command::Pause => self.pause(),
            Command::Seek(time) => self.seek(time),
            Command::SetVolume(volume) => self.set_volume(volume),
            Command::SetMuted(muted) => self.set_muted(muted),
            Command::SetRate(rate) => self.set_rate(rate),
        }
    }
}

/// Payload of a load-complete event. Surfaces may omit the duration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoadInfo {
    pub duration: Option<f64>,
}

/// Payload of a progress event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProgressInfo {
    pub current_time: Option<f64>,
}

/// Lifecycle and progress events emitted by the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    LoadStart,
    Loaded(LoadInfo),
    Progress(ProgressInfo),
    Error(PlaybackError),
    End,
}

/// A surface that plays a source of known duration against an external clock.
///
/// It does no decoding: [`SimulatedSurface::advance`] moves the position by
/// `elapsed * rate` while playing and reports progress and end-of-stream the
/// way a real surface would.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedSurface {
    duration: f64,
    position: f64,
    playing: bool,
    volume: f32,
    muted: bool,
    rate: f64,
    repeat: bool,
    ended: bool,
}

impl SimulatedSurface {
    #[must_use]
    pub fn new(duration: f64, repeat: bool) -> Self {
        Self {
            duration: duration.max(0.0),
            position: 0.0,
            playing: false,
            volume: 1.0,
            muted: false,
            rate: 1.0,
            repeat,
            ended: false,
        }
    }

    /// Events a freshly mounted surface emits once its source is ready.
    #[must_use]
    pub fn load_events(&self) -> [SurfaceEvent; 2] {
        [
            SurfaceEvent::LoadStart,
            SurfaceEvent::Loaded(LoadInfo {
                duration: Some(self.duration),
            }),
        ]
    }

    /// Advances playback by `elapsed_secs` of wall time.
    ///
    /// Returns the events produced during that step: a progress report while
    /// playing, followed by `End` when the source runs out.
    pub fn advance(&mut self, elapsed_secs: f64) -> Vec<SurfaceEvent> {
        if !self.playing || self.ended {
            return Vec::new();
        }

        self.position += elapsed_secs.max(0.0) * self.rate;
        let mut events = Vec::with_capacity(2);

        if self.position >= self.duration {
            if self.repeat && self.duration > 0.0 {
                self.position %= self.duration;
            } else {
                self.position = self.duration;
                self.ended = true;
                self.playing = false;
            }
        }

        events.push(SurfaceEvent::Progress(ProgressInfo {
            current_time: Some(self.position),
        }));
        if self.ended {
            events.push(SurfaceEvent::End);
        }
        events
    }

    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn volume(&self) -> f32 {
        self.volume
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl PlaybackSurface for SimulatedSurface {
    fn play(&mut self) {
        if self.ended {
            self.position = 0.0;
            self.ended = false;
        }
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn seek(&mut self, time_secs: f64) {
        self.position = time_secs.clamp(0.0, self.duration);
        self.ended = false;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn set_rate(&mut self, rate: f64) {
        if rate > 0.0 {
            self.rate = rate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn paused_helper_maps_to_play_or_pause() {
        assert_eq!(Command::paused(true), Command::Pause);
        assert_eq!(Command::paused(false), Command::Play);
    }

    #[test]
    fn apply_dispatches_every_command() {
        let mut surface = SimulatedSurface::new(60.0, false);
        surface.apply(Command::Play);
        surface.apply(Command::Seek(12.0));
        surface.apply(Command::SetVolume(0.3));
        surface.apply(Command::SetMuted(true));
        surface.apply(Command::SetRate(2.0));

        assert!(surface.is_playing());
        assert_abs_diff_eq!(surface.position(), 12.0);
        assert_abs_diff_eq!(surface.volume(), 0.3);
        assert!(surface.is_muted());
        assert_abs_diff_eq!(surface.rate(), 2.0);

        surface.apply(Command::Pause);
        assert!(!surface.is_playing());
    }

    #[test]
    fn advance_does_nothing_while_paused() {
        let mut surface = SimulatedSurface::new(60.0, false);
        assert!(surface.advance(1.0).is_empty());
        assert_abs_diff_eq!(surface.position(), 0.0);
    }

    #[test]
    fn advance_reports_progress_scaled_by_rate() {
        let mut surface = SimulatedSurface::new(60.0, false);
        surface.play();
        surface.set_rate(2.0);

        let events = surface.advance(1.5);
        assert_eq!(
            events,
            vec![SurfaceEvent::Progress(ProgressInfo {
                current_time: Some(3.0)
            })]
        );
    }

    #[test]
    fn advance_past_duration_ends_playback() {
        let mut surface = SimulatedSurface::new(2.0, false);
        surface.play();

        let events = surface.advance(5.0);
        assert_eq!(events.last(), Some(&SurfaceEvent::End));
        assert!(!surface.is_playing());
        assert_abs_diff_eq!(surface.position(), 2.0);

        // Ended surfaces stay quiet until played again
        assert!(surface.advance(1.0).is_empty());
    }

    #[test]
    fn repeat_wraps_instead_of_ending() {
        let mut surface = SimulatedSurface::new(4.0, true);
        surface.play();

        let events = surface.advance(5.0);
        assert!(!events.contains(&SurfaceEvent::End));
        assert!(surface.is_playing());
        assert_abs_diff_eq!(surface.position(), 1.0);
    }

    #[test]
    fn seek_is_clamped_to_duration() {
        let mut surface = SimulatedSurface::new(10.0, false);
        surface.seek(42.0);
        assert_abs_diff_eq!(surface.position(), 10.0);
        surface.seek(-3.0);
        assert_abs_diff_eq!(surface.position(), 0.0);
    }

    #[test]
    fn non_positive_rate_is_ignored() {
        let mut surface = SimulatedSurface::new(10.0, false);
        surface.set_rate(0.0);
        assert_abs_diff_eq!(surface.rate(), 1.0);
    }

    #[test]
    fn load_events_report_duration() {
        let surface = SimulatedSurface::new(90.0, false);
        let [start, loaded] = surface.load_events();
        assert_eq!(start, SurfaceEvent::LoadStart);
        assert_eq!(
            loaded,
            SurfaceEvent::Loaded(LoadInfo {
                duration: Some(90.0)
            })
        );
    }
}
