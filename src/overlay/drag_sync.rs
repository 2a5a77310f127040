// SPDX-License-Identifier: MPL-2.0
//! Drag ownership for the seek and volume sliders.
//!
//! While a seek drag is active the drag is the only writer of `current_time`;
//! progress events from the surface are dropped until the drag ends. Volume
//! has no lock because the surface never reports volume back.

use super::{PlaybackState, Volume};
use crate::surface::Command;

/// Marks the start of a seek drag.
pub fn begin_seek(state: &mut PlaybackState) {
    state.seeking = true;
}

/// Moves the seek handle and previews the position on the surface.
///
/// Starts the drag if it was not already started.
pub fn update_seek(state: &mut PlaybackState, value: f64) -> Command {
    state.seeking = true;
    state.current_time = state.clamp_position(value);
    Command::Seek(state.current_time)
}

/// Commits the final seek position and releases the lock.
pub fn end_seek(state: &mut PlaybackState, value: f64) -> Command {
    state.current_time = state.clamp_position(value);
    state.seeking = false;
    Command::Seek(state.current_time)
}

/// Applies a progress report unless a seek drag owns the position.
///
/// A missing value counts as 0. Returns whether the report was applied.
pub fn apply_progress(state: &mut PlaybackState, current_time: Option<f64>) -> bool {
    if state.seeking {
        return false;
    }
    state.current_time = state.clamp_position(current_time.unwrap_or(0.0));
    true
}

/// Moves the volume handle. `muted` follows the slider: silent means muted.
pub fn update_volume(state: &mut PlaybackState, value: f32) -> [Command; 2] {
    state.volume = Volume::new(value);
    state.muted = state.volume.is_silent();
    [
        Command::SetVolume(state.volume.value()),
        Command::SetMuted(state.muted),
    ]
}

/// Commits the final volume. Same derivation as [`update_volume`].
pub fn end_volume(state: &mut PlaybackState, value: f32) -> [Command; 2] {
    update_volume(state, value)
}
