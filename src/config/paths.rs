// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to [`config_dir_with_override`] (CLI, tests)
//! 2. **Environment variable** `PLAYBACK_OVERLAY_CONFIG_DIR`
//! 3. **Platform default** - via `dirs` crate, with the app name appended

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "PlaybackOverlay";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PLAYBACK_OVERLAY_CONFIG_DIR";

/// Returns the config directory path with an optional override.
///
/// Returns `None` if the platform config directory cannot be determined.
#[must_use]
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
