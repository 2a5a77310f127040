// SPDX-License-Identifier: MPL-2.0
//! Iced renderer for the overlay.
//!
//! - [`controls`] - Transport controls stacked over the playback surface
//! - [`widgets`] - Custom Iced widgets (loading spinner)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod controls;
pub mod design_tokens;
pub mod widgets;
