// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::overlay;
use iced::window;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Input for the overlay controller.
    Overlay(overlay::Message),
    /// The simulated source finished loading.
    SourceReady,
    /// Periodic tick driving the surface clock, inactivity timer and spinner.
    Tick(Instant),
    /// Any window event; records the window id for fullscreen switching.
    WindowSeen(window::Id),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Title shown in the top bar, overriding `controls.title`.
    pub title: Option<String>,
    /// Duration of the simulated source in seconds.
    pub duration: Option<f64>,
    /// Makes the simulated source fail with this message instead of loading.
    pub error: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PLAYBACK_OVERLAY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
