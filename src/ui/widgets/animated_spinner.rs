// SPDX-License-Identifier: MPL-2.0
//! Loading indicator drawn on a Canvas.
//!
//! The widget holds no clock: it draws a half-circle arc at whatever rotation
//! the controller's spinner reports, over a faint full-circle track.

use crate::ui::design_tokens::{opacity, sizing};
use iced::widget::canvas::{self, path::Arc, Cache, Canvas, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, PI};

pub struct AnimatedSpinner {
    cache: Cache,
    /// Arc start, in radians, measured from 12 o'clock.
    rotation: f32,
    color: Color,
    diameter: f32,
}

impl AnimatedSpinner {
    /// Spinner rotated by `rotation_deg` degrees.
    #[must_use]
    pub fn new(color: Color, rotation_deg: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation: rotation_deg.to_radians(),
            color,
            diameter: sizing::LOADER_DIAMETER,
        }
    }

    #[must_use]
    pub fn with_diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter;
        self
    }

    #[must_use]
    pub fn rotation_radians(&self) -> f32 {
        self.rotation
    }

    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        let diameter = self.diameter;
        Canvas::new(self)
            .width(Length::Fixed(diameter))
            .height(Length::Fixed(diameter))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let center = frame.center();
            let radius = frame.width().min(frame.height()) / 2.0 - sizing::LOADER_STROKE;

            let track = Color {
                a: opacity::LOADER_TRACK,
                ..self.color
            };
            frame.stroke(
                &Path::circle(center, radius),
                Stroke::default()
                    .with_width(sizing::LOADER_STROKE)
                    .with_color(track),
            );

            let start = self.rotation - FRAC_PI_2;
            let arc = Path::new(|builder| {
                builder.arc(Arc {
                    center,
                    radius,
                    start_angle: Radians(start),
                    end_angle: Radians(start + PI),
                });
            });
            frame.stroke(
                &arc,
                Stroke::default()
                    .with_width(sizing::LOADER_STROKE)
                    .with_color(self.color)
                    .with_line_cap(canvas::LineCap::Round),
            );
        });

        vec![geometry]
    }
}
