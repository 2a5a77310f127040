// SPDX-License-Identifier: MPL-2.0
//! `playback_overlay` is a transport-controls overlay for a video surface,
//! built with the Iced GUI framework.
//!
//! The [`overlay`] module holds the toolkit-independent controller: playback
//! state, tap classification, the inactivity timer and the effects sent to a
//! [`surface::PlaybackSurface`]. [`ui`] renders its view model with Iced and
//! [`app`] wires both into a runnable demo backed by a simulated surface.

#![doc(html_root_url = "https://docs.rs/playback_overlay/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod overlay;
pub mod surface;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
