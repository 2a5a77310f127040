// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the overlay renderer.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files are embedded from `assets/i18n/`.
//!
//! # Locale resolution
//!
//! 1. `--lang` command-line flag
//! 2. `general.language` in `settings.toml`
//! 3. System locale
//! 4. `en-US`

pub mod fluent;

pub use fluent::I18n;
