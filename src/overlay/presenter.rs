// SPDX-License-Identifier: MPL-2.0
//! Projection of controller state into what the renderer draws.
//!
//! Nothing here decides anything: [`OverlayView`] and [`SurfaceProps`] are
//! plain values computed from the [`Controller`], and [`forward`] hands the
//! surface commands over in order.

use super::controller::{Controller, Effect};
use super::state::ResizeMode;
use super::time_format::timer_text;
use crate::config::{HIDDEN_CONTROLS_OFFSET, SHOWN_CONTROLS_OFFSET};
use crate::surface::PlaybackSurface;

/// Animated properties of a control bar.
///
/// The iced renderer in this crate only reads `opacity`; `offset` is the
/// slide distance for hosts that animate the transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTarget {
    /// Vertical offset in layout units.
    pub offset: f32,
    pub opacity: f32,
}

impl AnimationTarget {
    pub const SHOWN: Self = Self {
        offset: SHOWN_CONTROLS_OFFSET,
        opacity: 1.0,
    };

    pub const HIDDEN: Self = Self {
        offset: HIDDEN_CONTROLS_OFFSET,
        opacity: 0.0,
    };

    #[must_use]
    pub fn for_visibility(visible: bool) -> Self {
        if visible {
            Self::SHOWN
        } else {
            Self::HIDDEN
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayPauseIcon {
    Play,
    Pause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIcon {
    Muted,
    Unmuted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenIcon {
    /// Enter fullscreen.
    Expand,
    /// Leave fullscreen.
    Shrink,
}

/// Everything the renderer needs to draw the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub controls_visible: bool,
    pub top_bar: AnimationTarget,
    pub bottom_bar: AnimationTarget,
    /// Shows the action the button performs: `Play` while paused.
    pub play_pause: PlayPauseIcon,
    /// Chosen by the slider value, not by the mute flag.
    pub volume_icon: VolumeIcon,
    /// `None` when fullscreen toggling is disabled.
    pub fullscreen: Option<FullscreenIcon>,
    pub timer: String,
    /// `None` when the title is empty.
    pub title: Option<String>,
    pub seek_value: f64,
    pub seek_max: f64,
    pub volume: f32,
    /// Spinner rotation in degrees, only while loading.
    pub loader_rotation: Option<f32>,
    /// Message key of the error indicator, only in the error state.
    pub error_key: Option<&'static str>,
}

impl OverlayView {
    #[must_use]
    pub fn project(controller: &Controller) -> Self {
        let state = controller.state();
        let bars = AnimationTarget::for_visibility(state.controls_visible());

        let error_key = state.has_error().then(|| {
            controller
                .last_error()
                .map_or("error-video-unavailable", |error| error.i18n_key())
        });

        Self {
            controls_visible: state.controls_visible(),
            top_bar: bars,
            bottom_bar: bars,
            play_pause: if state.is_paused() {
                PlayPauseIcon::Play
            } else {
                PlayPauseIcon::Pause
            },
            volume_icon: if state.volume().is_silent() {
                VolumeIcon::Muted
            } else {
                VolumeIcon::Unmuted
            },
            fullscreen: state.fullscreen_toggle_enabled().then(|| {
                if state.is_fullscreen() {
                    FullscreenIcon::Shrink
                } else {
                    FullscreenIcon::Expand
                }
            }),
            timer: timer_text(state.current_time(), state.duration(), state.timer_mode()),
            title: Some(controller.title())
                .filter(|title| !title.is_empty())
                .map(str::to_owned),
            seek_value: state.current_time(),
            seek_max: state.duration(),
            volume: state.volume().value(),
            loader_rotation: controller.loader_rotation(),
            error_key,
        }
    }
}

/// Declarative properties the surface is rendered with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceProps {
    pub resize_mode: ResizeMode,
    pub paused: bool,
    pub muted: bool,
    pub volume: f32,
    pub rate: f64,
    pub repeat: bool,
    pub play_in_background: bool,
    pub play_when_inactive: bool,
}

impl SurfaceProps {
    #[must_use]
    pub fn project(controller: &Controller) -> Self {
        let state = controller.state();
        Self {
            resize_mode: state.resize_mode(),
            paused: state.is_paused(),
            muted: state.is_muted(),
            volume: state.volume().value(),
            rate: state.rate().value(),
            repeat: controller.repeat(),
            play_in_background: controller.play_in_background(),
            play_when_inactive: controller.play_when_inactive(),
        }
    }
}

/// Applies every surface command among `effects`, in order.
///
/// Returns how many commands were forwarded.
pub fn forward<'a, S>(effects: impl IntoIterator<Item = &'a Effect>, surface: &mut S) -> usize
where
    S: PlaybackSurface + ?Sized,
{
    let mut forwarded = 0;
    for effect in effects {
        if let Effect::Surface(command) = effect {
            surface.apply(*command);
            forwarded += 1;
        }
    }
    forwarded
}
