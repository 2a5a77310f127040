// SPDX-License-Identifier: MPL-2.0
//! Headless overlay core.
//!
//! This module decides when the transport controls are visible, classifies
//! taps, auto-hides the controls after inactivity and keeps slider drags from
//! fighting the surface's progress feed. It has no UI dependency: the host
//! feeds [`Message`]s with a clock reading and carries out the returned
//! [`Effect`]s.

pub mod controller;
pub mod drag_sync;
pub mod gesture;
pub mod hooks;
pub mod inactivity;
pub mod presenter;
mod rate;
pub mod spinner;
pub mod state;
pub mod time_format;
mod volume;

pub use controller::{Controller, Effect, Message, Visibility};
pub use gesture::{Tap, TapClassifier};
pub use hooks::{ErrorResponse, Hooks, Navigator};
pub use inactivity::{InactivityDelay, InactivityTimer};
pub use presenter::{
    forward, AnimationTarget, FullscreenIcon, OverlayView, PlayPauseIcon, SurfaceProps,
    VolumeIcon,
};
pub use rate::PlaybackRate;
pub use state::{Health, PlaybackState, ResizeMode, TimerMode};
pub use volume::Volume;
