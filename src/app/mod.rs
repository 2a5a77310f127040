// SPDX-License-Identifier: MPL-2.0
//! Demo application wiring the overlay controller to a simulated surface.
//!
//! `App` owns the [`Controller`], a [`SimulatedSurface`] standing in for a
//! real decoder and the localization bundle. Overlay messages get the current
//! clock reading here; the effects they produce are forwarded to the surface
//! or turned into window tasks.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config;
use crate::error::PlaybackError;
use crate::i18n::fluent::I18n;
use crate::overlay::{self, forward, Controller, Effect, Hooks, OverlayView, SurfaceProps};
use crate::surface::{PlaybackSurface, SimulatedSurface, SurfaceEvent};
use crate::ui::controls::{self, ViewContext};
use crate::ui::design_tokens::{palette, typography};
use iced::widget::{container, Text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::cell::Cell;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 540;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Duration of the simulated source when none is given.
pub const DEFAULT_SOURCE_DURATION_SECS: f64 = 95.0;

/// Time the simulated source takes to load.
const SIMULATED_LOAD_DELAY: Duration = Duration::from_millis(1_200);

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    controller: Controller,
    surface: SimulatedSurface,
    /// Failure the simulated source reports instead of loading.
    simulated_error: Option<String>,
    window_id: Option<window::Id>,
    last_tick: Option<Instant>,
    /// Set by the back hook; the app exits on the next update.
    exit_requested: Rc<Cell<bool>>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("controller", &self.controller)
            .field("surface", &self.surface)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot; the flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration, applies CLI overrides and starts loading the
    /// simulated source.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
        if let Some(title) = flags.title {
            config.controls.title = title;
        }

        let i18n = I18n::new(flags.lang, &config);
        if let Some(key) = config_warning {
            tracing::warn!(message = %i18n.tr(&key), "Configuration not applied");
        }

        let duration = flags
            .duration
            .filter(|d| d.is_finite() && *d > 0.0)
            .unwrap_or(DEFAULT_SOURCE_DURATION_SECS);

        let exit_requested = Rc::new(Cell::new(false));
        let controller = Controller::new(&config, demo_hooks(Rc::clone(&exit_requested)));
        let surface = SimulatedSurface::new(duration, config.playback.repeat);

        let mut app = App {
            i18n,
            controller,
            surface,
            simulated_error: flags.error,
            window_id: None,
            last_tick: None,
            exit_requested,
        };

        // The surface announces the load right away and finishes it later
        app.dispatch(overlay::Message::Surface(SurfaceEvent::LoadStart), Instant::now());
        let load = Task::perform(
            async { tokio::time::sleep(SIMULATED_LOAD_DELAY).await },
            |()| Message::SourceReady,
        );

        (app, load)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.controller.title() {
            "" => app_name,
            title => format!("{title} - {app_name}"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.controller.needs_tick(),
                self.surface.is_playing(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Overlay(msg) => self.dispatch(msg, Instant::now()),
            Message::SourceReady => self.finish_load(Instant::now()),
            Message::Tick(now) => self.tick(now),
            Message::WindowSeen(id) => {
                let first_sighting = self.window_id.replace(id).is_none();
                // Fullscreen seeded from config can only be applied once the window exists
                if first_sighting && self.controller.state().is_fullscreen() {
                    self.set_fullscreen(true)
                } else {
                    Task::none()
                }
            }
        };

        if self.exit_requested.get() {
            self.controller.shutdown();
            return iced::exit();
        }
        task
    }

    /// Feeds one message to the controller and carries out its effects.
    fn dispatch(&mut self, msg: overlay::Message, now: Instant) -> Task<Message> {
        let effects = self.controller.handle(msg, now);
        forward(&effects, &mut self.surface);

        let mut tasks = Vec::new();
        for effect in &effects {
            match effect {
                Effect::Fullscreen(on) => tasks.push(self.set_fullscreen(*on)),
                Effect::TimerArmed { deadline } => {
                    let in_ms = deadline.saturating_duration_since(now).as_millis();
                    tracing::trace!(in_ms, "Inactivity timer armed");
                }
                // Bars are redrawn from the view; surface commands went through `forward`
                Effect::Animate(_) | Effect::TimerCancelled | Effect::Surface(_) => {}
            }
        }
        Task::batch(tasks)
    }

    fn finish_load(&mut self, now: Instant) -> Task<Message> {
        if let Some(message) = self.simulated_error.take() {
            let error = PlaybackError::from_message(&message);
            return self.dispatch(overlay::Message::Surface(SurfaceEvent::Error(error)), now);
        }

        let [_, loaded] = self.surface.load_events();
        let task = self.dispatch(overlay::Message::Surface(loaded), now);
        self.sync_surface_props();
        self.last_tick = Some(now);
        task
    }

    /// Seeds the surface with the declarative props once the source is ready.
    fn sync_surface_props(&mut self) {
        let props = SurfaceProps::project(&self.controller);
        self.surface.set_volume(props.volume);
        self.surface.set_muted(props.muted);
        self.surface.set_rate(props.rate);
        if props.paused {
            self.surface.pause();
        } else {
            self.surface.play();
        }
    }

    fn tick(&mut self, now: Instant) -> Task<Message> {
        let elapsed = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_tick = Some(now);

        let mut tasks = Vec::new();
        for event in self.surface.advance(elapsed.as_secs_f64()) {
            tasks.push(self.dispatch(overlay::Message::Surface(event), now));
        }
        tasks.push(self.dispatch(overlay::Message::Tick, now));
        Task::batch(tasks)
    }

    fn set_fullscreen(&self, fullscreen: bool) -> Task<Message> {
        let Some(window_id) = self.window_id else {
            tracing::debug!("No window yet, fullscreen change deferred to state only");
            return Task::none();
        };
        let mode = if fullscreen {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        };
        window::set_mode(window_id, mode)
    }

    fn view(&self) -> Element<'_, Message> {
        let overlay_view = OverlayView::project(&self.controller);
        let ctx = ViewContext { i18n: &self.i18n };
        controls::view(ctx, &overlay_view, self.surface_view()).map(Message::Overlay)
    }

    /// Stand-in for the rendered video frame.
    fn surface_view<'a>(&self) -> Element<'a, overlay::Message> {
        let props = SurfaceProps::project(&self.controller);
        let label = format!(
            "{:?} · {:.1}x{}",
            props.resize_mode,
            props.rate,
            if props.repeat { " · loop" } else { "" }
        );
        container(
            Text::new(label)
                .size(typography::CAPTION)
                .color(palette::GRAY_200),
        )
        .center(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(palette::GRAY_900)),
            ..container::Style::default()
        })
        .into()
    }
}

/// Hooks used by the demo: the back button closes the window.
fn demo_hooks(exit_requested: Rc<Cell<bool>>) -> Hooks {
    Hooks::default()
        .with_on_back(move || exit_requested.set(true))
        .with_on_end(|| tracing::info!("Playback reached the end of the source"))
}
