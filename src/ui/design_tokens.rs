// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the overlay renderer.
//!
//! Colors, opacities and sizes used by [`crate::ui::controls`] and the loading
//! spinner. Bars sit on a dark translucent background over arbitrary video,
//! so text is always light.
//!
//! ```
//! use playback_overlay::ui::design_tokens::{opacity, palette};
//! use iced::Color;
//!
//! let bar_background = Color {
//!     a: opacity::BAR_BACKGROUND,
//!     ..palette::BLACK
//! };
//! assert!(bar_background.a < 1.0);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    /// Surface placeholder background.
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    /// Secondary text on dark backgrounds.
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    /// Loader arc.
    pub const ACCENT: Color = Color::from_rgb(0.4, 0.7, 1.0);
    /// Error indicator text.
    pub const ERROR: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

pub mod opacity {
    /// Below this a bar is not laid out at all.
    pub const HIDDEN: f32 = 0.0;
    /// Bar background at full visibility.
    pub const BAR_BACKGROUND: f32 = 0.7;
    /// Track drawn behind the loader arc.
    pub const LOADER_TRACK: f32 = 0.25;
}

/// 4px grid.
pub mod spacing {
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const VOLUME_SLIDER_WIDTH: f32 = 80.0;
    /// Fits `-hh:mm:ss` at caption size.
    pub const TIMER_WIDTH: f32 = 72.0;
    pub const LOADER_DIAMETER: f32 = 48.0;
    pub const LOADER_STROKE: f32 = 3.0;
}

pub mod typography {
    /// Media title in the top bar.
    pub const TITLE: f32 = 20.0;
    /// Error indicator.
    pub const INDICATOR: f32 = 16.0;
    /// Button labels.
    pub const BODY: f32 = 14.0;
    /// Timer and surface placeholder.
    pub const CAPTION: f32 = 12.0;
}

const _: () = {
    assert!(opacity::HIDDEN == 0.0);
    assert!(opacity::BAR_BACKGROUND > opacity::LOADER_TRACK);
    assert!(opacity::BAR_BACKGROUND <= 1.0);
    assert!(spacing::XS < spacing::SM && spacing::SM < spacing::MD);
    assert!(typography::TITLE > typography::INDICATOR);
    assert!(typography::INDICATOR > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
    assert!(sizing::LOADER_DIAMETER > 4.0 * sizing::LOADER_STROKE);
};
