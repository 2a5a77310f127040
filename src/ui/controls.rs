// SPDX-License-Identifier: MPL-2.0
//! Transport controls drawn over the playback surface.
//!
//! Renders an [`OverlayView`] as a stack: the surface with a tap area at the
//! bottom, then the top bar (back, title), the bottom bar (play/pause, seek
//! slider, timer, volume, fullscreen) and the loading or error indicator.
//!
//! Bars snap in and out: only [`AnimationTarget::opacity`] is used, and a
//! hidden bar is not laid out.
//! Every decision was already taken by the presenter; this module only maps
//! view values to widgets and widget events to overlay messages.

use crate::i18n::fluent::I18n;
use crate::overlay::{
    AnimationTarget, FullscreenIcon, Message, OverlayView, PlayPauseIcon, VolumeIcon,
};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, container, mouse_area, row, slider, text, Space, Stack, Text};
use iced::{Alignment, Background, Color, Element, Length, Theme};

/// Slider step in seconds (1ms precision).
const SLIDER_STEP_SECS: f64 = 0.001;

/// Slider step for volume.
const VOLUME_STEP: f32 = 0.01;

/// View context for rendering the overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Renders the overlay on top of `surface`.
pub fn view<'a>(
    ctx: ViewContext<'a>,
    overlay: &OverlayView,
    surface: Element<'a, Message>,
) -> Element<'a, Message> {
    let tap_area = mouse_area(container(surface).width(Length::Fill).height(Length::Fill))
        .on_release(Message::Tap);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(tap_area);

    // Hidden bars are not laid out
    if overlay.top_bar.opacity > opacity::HIDDEN {
        layers = layers.push(
            container(top_bar(&ctx, overlay))
                .width(Length::Fill)
                .align_top(Length::Fill),
        );
    }
    if overlay.bottom_bar.opacity > opacity::HIDDEN {
        layers = layers.push(
            container(bottom_bar(&ctx, overlay))
                .width(Length::Fill)
                .align_bottom(Length::Fill),
        );
    }

    if let Some(indicator) = status_indicator(&ctx, overlay) {
        layers = layers.push(container(indicator).center(Length::Fill));
    }

    layers.into()
}

fn top_bar<'a>(ctx: &ViewContext<'a>, overlay: &OverlayView) -> Element<'a, Message> {
    let back = control_button(ctx.i18n.tr("button-back"), Message::Back);

    let title: Element<'a, Message> = match &overlay.title {
        Some(title) => Text::new(title.clone())
            .size(typography::TITLE)
            .color(palette::WHITE)
            .into(),
        None => Space::new().width(Length::Fill).into(),
    };

    let content = row![back, title]
        .spacing(spacing::SM)
        .padding(spacing::XS)
        .align_y(Alignment::Center);

    bar(content.into(), overlay.top_bar)
}

fn bottom_bar<'a>(ctx: &ViewContext<'a>, overlay: &OverlayView) -> Element<'a, Message> {
    let play_pause_label = match overlay.play_pause {
        PlayPauseIcon::Play => ctx.i18n.tr("button-play"),
        PlayPauseIcon::Pause => ctx.i18n.tr("button-pause"),
    };
    let play_pause = control_button(play_pause_label, Message::TogglePlayPause);

    // Never let the range collapse while the duration is unknown
    let seek_max = overlay
        .seek_max
        .max(overlay.seek_value)
        .max(SLIDER_STEP_SECS);
    let seekbar = slider(0.0..=seek_max, overlay.seek_value, Message::SeekDragged)
        .on_release(Message::SeekReleased)
        .width(Length::Fill)
        .step(SLIDER_STEP_SECS);

    let timer = button(
        text(overlay.timer.clone())
            .size(typography::CAPTION)
            .width(Length::Fixed(sizing::TIMER_WIDTH)),
    )
    .on_press(Message::ToggleTimer)
    .padding(spacing::XS)
    .style(button::text);

    // Indicator only: muting goes through the slider
    let volume_label = match overlay.volume_icon {
        VolumeIcon::Muted => ctx.i18n.tr("label-volume-muted"),
        VolumeIcon::Unmuted => ctx.i18n.tr("label-volume"),
    };
    let volume_indicator = text(volume_label).size(typography::CAPTION);

    let volume = slider(0.0..=1.0, overlay.volume, Message::VolumeDragged)
        .on_release(Message::VolumeReleased)
        .width(Length::Fixed(sizing::VOLUME_SLIDER_WIDTH))
        .step(VOLUME_STEP);

    let mut content = row![play_pause, seekbar, timer, volume_indicator, volume]
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .align_y(Alignment::Center);

    if let Some(icon) = overlay.fullscreen {
        let label = match icon {
            FullscreenIcon::Expand => ctx.i18n.tr("button-fullscreen-enter"),
            FullscreenIcon::Shrink => ctx.i18n.tr("button-fullscreen-exit"),
        };
        content = content.push(control_button(label, Message::ToggleFullscreen));
    }

    bar(content.into(), overlay.bottom_bar)
}

fn status_indicator<'a>(
    ctx: &ViewContext<'a>,
    overlay: &OverlayView,
) -> Option<Element<'a, Message>> {
    if let Some(key) = overlay.error_key {
        return Some(
            Text::new(ctx.i18n.tr(key))
                .size(typography::INDICATOR)
                .color(palette::ERROR)
                .into(),
        );
    }
    overlay
        .loader_rotation
        .map(|rotation| AnimatedSpinner::new(palette::ACCENT, rotation).into_element())
}

fn control_button<'a>(label: String, on_press: Message) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .on_press(on_press)
        .padding(spacing::XS)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .into()
}

/// Semi-transparent bar background, faded by the target opacity.
fn bar<'a>(content: Element<'a, Message>, target: AnimationTarget) -> Element<'a, Message> {
    let background = Color {
        a: opacity::BAR_BACKGROUND * target.opacity,
        ..palette::BLACK
    };
    container(content)
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(palette::WHITE),
            ..container::Style::default()
        })
        .into()
}
