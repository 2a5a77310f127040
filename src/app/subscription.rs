// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for window events and the overlay clock.

use super::Message;
use crate::overlay;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Event, Subscription};
use std::time::Duration;

/// Tick period while something time-driven is active.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes window events and the few keyboard shortcuts the demo supports.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        Event::Window(_) => Some(Message::WindowSeen(window_id)),
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
            if status == event::Status::Ignored =>
        {
            match key {
                Key::Named(Named::Space) => {
                    Some(Message::Overlay(overlay::Message::TogglePlayPause))
                }
                Key::Named(Named::Escape) => Some(Message::Overlay(overlay::Message::Back)),
                Key::Character(c) if c.as_str() == "f" => {
                    Some(Message::Overlay(overlay::Message::ToggleFullscreen))
                }
                _ => None,
            }
        }
        _ => None,
    })
}

/// Creates a periodic tick subscription for the inactivity timer, the loading
/// spinner and the simulated playback clock.
pub fn create_tick_subscription(timers_active: bool, is_playing: bool) -> Subscription<Message> {
    if timers_active || is_playing {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
