// SPDX-License-Identifier: MPL-2.0
//! Playback control state machine.
//!
//! [`Controller`] owns the [`PlaybackState`] together with the inactivity
//! timer, tap classifier and loading spinner. Every input, whether a user
//! gesture, a clock tick or a surface event, goes through
//! [`Controller::handle`], which updates the state and returns the
//! [`Effect`]s the host has to carry out.

use super::drag_sync;
use super::gesture::{Tap, TapClassifier};
use super::hooks::{ErrorResponse, Hooks, ResolvedHooks};
use super::inactivity::{InactivityDelay, InactivityTimer};
use super::spinner::Spinner;
use super::state::{Health, PlaybackState};
use super::PlaybackRate;
use crate::config::Config;
use crate::error::PlaybackError;
use crate::surface::{Command, LoadInfo, SurfaceEvent};
use std::time::Instant;

/// Target of the control bars' show/hide transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

/// Inputs accepted by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Raw tap on the playback area.
    Tap,
    /// Clock tick, drives the inactivity timer and the spinner.
    Tick,
    TogglePlayPause,
    /// Fullscreen button.
    ToggleFullscreen,
    /// Switch the timer between elapsed and remaining time.
    ToggleTimer,
    Back,
    SeekDragStarted,
    SeekDragged(f64),
    /// Commits the position set by the last drag step.
    SeekReleased,
    VolumeDragged(f32),
    /// Commits the volume set by the last drag step.
    VolumeReleased,
    /// Programmatic seek, in seconds.
    SeekTo(f64),
    /// Embedder mute, independent of the volume slider.
    SetMuted(bool),
    SetRate(f64),
    /// Event reported by the playback surface.
    Surface(SurfaceEvent),
}

/// Side effects for the host, in the order they were produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Forward a command to the playback surface.
    Surface(Command),
    /// Start the show or hide transition of the control bars.
    Animate(Visibility),
    /// Fullscreen was switched on or off.
    Fullscreen(bool),
    /// The inactivity timer was armed.
    TimerArmed { deadline: Instant },
    /// The inactivity timer was cancelled.
    TimerCancelled,
}

/// Overlay controller.
#[derive(Debug)]
pub struct Controller {
    state: PlaybackState,
    timer: InactivityTimer,
    taps: TapClassifier,
    spinner: Spinner,
    hooks: ResolvedHooks,
    title: String,
    repeat: bool,
    play_in_background: bool,
    play_when_inactive: bool,
    last_error: Option<PlaybackError>,
    shut_down: bool,
}

impl Controller {
    /// Builds a controller seeded from `config`.
    ///
    /// Controls start visible; the inactivity timer is first armed when the
    /// surface reports its source loaded or the user interacts.
    #[must_use]
    pub fn new(config: &Config, hooks: Hooks) -> Self {
        let state = PlaybackState::from_config(config);
        Self {
            timer: InactivityTimer::new(InactivityDelay::from_millis(
                config.controls.inactivity_delay_ms,
            )),
            taps: TapClassifier::new(state.fullscreen_toggle_enabled()),
            spinner: Spinner::default(),
            hooks: hooks.resolve(),
            title: config.controls.title.clone(),
            repeat: config.playback.repeat,
            play_in_background: config.playback.play_in_background,
            play_when_inactive: config.playback.play_when_inactive,
            last_error: None,
            shut_down: false,
            state,
        }
    }

    /// Handles one input at time `now`.
    pub fn handle(&mut self, msg: Message, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.shut_down {
            tracing::debug!(?msg, "Ignoring message after shutdown");
            return effects;
        }

        match msg {
            Message::Tap => match self.taps.classify(now) {
                Tap::Single => self.toggle_controls(now, &mut effects),
                Tap::Double => {
                    self.toggle_fullscreen(&mut effects);
                    self.toggle_controls(now, &mut effects);
                }
            },
            Message::Tick => self.tick(now, &mut effects),
            Message::TogglePlayPause => {
                self.state.paused = !self.state.paused;
                effects.push(Effect::Surface(Command::paused(self.state.paused)));
                self.touch(now, &mut effects);
            }
            Message::ToggleFullscreen => {
                if self.state.fullscreen_toggle_enabled {
                    self.toggle_fullscreen(&mut effects);
                } else {
                    tracing::debug!("Fullscreen toggling is disabled");
                }
                self.touch(now, &mut effects);
            }
            Message::ToggleTimer => {
                self.state.timer_mode = self.state.timer_mode.toggled();
                self.touch(now, &mut effects);
            }
            Message::Back => {
                self.hooks.back();
                self.touch(now, &mut effects);
            }
            Message::SeekDragStarted => {
                drag_sync::begin_seek(&mut self.state);
                self.touch(now, &mut effects);
            }
            Message::SeekDragged(value) => {
                let command = drag_sync::update_seek(&mut self.state, value);
                effects.push(Effect::Surface(command));
                self.touch(now, &mut effects);
            }
            Message::SeekReleased => {
                let value = self.state.current_time;
                let command = drag_sync::end_seek(&mut self.state, value);
                effects.push(Effect::Surface(command));
                self.touch(now, &mut effects);
            }
            Message::VolumeDragged(value) => {
                let commands = drag_sync::update_volume(&mut self.state, value);
                effects.extend(commands.map(Effect::Surface));
                self.touch(now, &mut effects);
            }
            Message::VolumeReleased => {
                let value = self.state.volume.value();
                let commands = drag_sync::end_volume(&mut self.state, value);
                effects.extend(commands.map(Effect::Surface));
                self.touch(now, &mut effects);
            }
            Message::SeekTo(time) => {
                self.state.current_time = self.state.clamp_position(time);
                effects.push(Effect::Surface(Command::Seek(self.state.current_time)));
                self.touch(now, &mut effects);
            }
            Message::SetMuted(muted) => {
                self.state.muted = muted;
                effects.push(Effect::Surface(Command::SetMuted(muted)));
                self.touch(now, &mut effects);
            }
            Message::SetRate(rate) => {
                self.state.rate = PlaybackRate::new(rate);
                effects.push(Effect::Surface(Command::SetRate(self.state.rate.value())));
                self.touch(now, &mut effects);
            }
            Message::Surface(event) => self.on_surface_event(event, now, &mut effects),
        }

        effects
    }

    /// Cancels the timer and stops the spinner. Later messages are ignored.
    ///
    /// Also runs on drop.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.timer.cancel();
        self.spinner.stop();
        self.shut_down = true;
        tracing::debug!("Overlay controller shut down");
    }

    fn tick(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        if self.timer.poll(now) && self.state.controls_visible {
            tracing::debug!("Hiding controls after inactivity");
            self.state.controls_visible = false;
            effects.push(Effect::Animate(Visibility::Hidden));
        }
        self.spinner.tick(now, self.state.is_loading());
    }

    fn on_surface_event(&mut self, event: SurfaceEvent, now: Instant, effects: &mut Vec<Effect>) {
        match event {
            SurfaceEvent::LoadStart => {
                tracing::debug!("Source loading");
                self.state.health = Health::Loading;
                self.last_error = None;
                self.spinner.start(now);
            }
            SurfaceEvent::Loaded(LoadInfo { duration }) => {
                if self.state.health != Health::Error {
                    self.state.health = Health::Ok;
                }
                self.state.duration = duration
                    .filter(|d| d.is_finite() && *d >= 0.0)
                    .unwrap_or(0.0);
                self.state.current_time = self.state.clamp_position(self.state.current_time);
                tracing::debug!(duration = self.state.duration, "Source loaded");
                if self.state.controls_visible {
                    self.rearm_timer(now, effects);
                }
            }
            SurfaceEvent::Progress(progress) => {
                drag_sync::apply_progress(&mut self.state, progress.current_time);
            }
            SurfaceEvent::Error(error) => match self.hooks.error(&error) {
                ErrorResponse::ShowIndicator => {
                    tracing::warn!(%error, "Playback failed");
                    self.state.health = Health::Error;
                    self.spinner.stop();
                    self.last_error = Some(error);
                }
                ErrorResponse::Ignore => {
                    tracing::debug!(%error, "Playback error ignored by hook");
                    if self.state.health == Health::Loading {
                        self.state.health = Health::Ok;
                    }
                }
            },
            SurfaceEvent::End => self.hooks.end(),
        }
    }

    fn toggle_controls(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        if self.state.controls_visible {
            self.hide_controls(effects);
        } else {
            self.show_controls(now, effects);
        }
    }

    fn show_controls(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        self.state.controls_visible = true;
        effects.push(Effect::Animate(Visibility::Shown));
        self.rearm_timer(now, effects);
    }

    fn hide_controls(&mut self, effects: &mut Vec<Effect>) {
        self.timer.cancel();
        effects.push(Effect::TimerCancelled);
        self.state.controls_visible = false;
        effects.push(Effect::Animate(Visibility::Hidden));
    }

    fn toggle_fullscreen(&mut self, effects: &mut Vec<Effect>) {
        self.state.is_fullscreen = !self.state.is_fullscreen;
        effects.push(Effect::Fullscreen(self.state.is_fullscreen));
    }

    /// Any control interaction extends the visibility window.
    fn touch(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        if self.state.controls_visible {
            self.rearm_timer(now, effects);
        }
    }

    fn rearm_timer(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        self.timer.cancel();
        effects.push(Effect::TimerCancelled);
        let deadline = self.timer.arm(now);
        effects.push(Effect::TimerArmed { deadline });
    }

    #[must_use]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    #[must_use]
    pub fn timer_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    #[must_use]
    pub fn is_timer_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Spinner rotation in degrees, only while loading.
    #[must_use]
    pub fn loader_rotation(&self) -> Option<f32> {
        if self.state.is_loading() {
            self.spinner.rotation_deg()
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_spinner_running(&self) -> bool {
        self.spinner.is_running()
    }

    /// Whether the host has to keep sending [`Message::Tick`].
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.timer.is_pending() || self.spinner.is_running()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn repeat(&self) -> bool {
        self.repeat
    }

    #[must_use]
    pub fn play_in_background(&self) -> bool {
        self.play_in_background
    }

    #[must_use]
    pub fn play_when_inactive(&self) -> bool {
        self.play_when_inactive
    }

    /// Error shown by the indicator, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&PlaybackError> {
        self.last_error.as_ref()
    }

    #[must_use]
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.shutdown();
    }
}
