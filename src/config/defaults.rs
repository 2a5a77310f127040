// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Inactivity**: Controls auto-hide delay
//! - **Gestures**: Double-tap window
//! - **Volume**: Playback volume bounds
//! - **Playback Rate**: Rate bounds
//! - **Animation**: Show/hide targets and loader cycle

// ==========================================================================
// Inactivity Defaults
// ==========================================================================

/// Default delay before visible controls auto-hide (in milliseconds).
pub const DEFAULT_INACTIVITY_DELAY_MS: u64 = 15_000;

/// Minimum inactivity delay (in milliseconds). A zero delay is not a delay.
pub const MIN_INACTIVITY_DELAY_MS: u64 = 1;

/// Maximum inactivity delay (in milliseconds), one day. Keeps deadlines
/// representable as `Instant`.
pub const MAX_INACTIVITY_DELAY_MS: u64 = 86_400_000;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Two taps closer than this are a double tap (in milliseconds).
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 1.0;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

// ==========================================================================
// Playback Rate Defaults
// ==========================================================================

/// Default playback rate (1.0 = normal speed).
pub const DEFAULT_PLAYBACK_RATE: f64 = 1.0;

/// Minimum playback rate. Rates must stay strictly positive.
pub const MIN_PLAYBACK_RATE: f64 = 0.1;

/// Maximum playback rate.
pub const MAX_PLAYBACK_RATE: f64 = 8.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Offset of the control bars when hidden (layout units, off-screen).
pub const HIDDEN_CONTROLS_OFFSET: f32 = -100.0;

/// Offset of the control bars when shown.
pub const SHOWN_CONTROLS_OFFSET: f32 = 0.0;

/// Duration of one full loader revolution (in milliseconds).
pub const LOADER_CYCLE_MS: u64 = 1_500;

/// Loader rotation at the end of a cycle (degrees).
pub const LOADER_MAX_ROTATION_DEG: f32 = 360.0;
