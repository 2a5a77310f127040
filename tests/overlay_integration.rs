// SPDX-License-Identifier: MPL-2.0
//! End-to-end runs of the overlay controller against a simulated surface.

use approx::assert_abs_diff_eq;
use playback_overlay::config::Config;
use playback_overlay::error::PlaybackError;
use playback_overlay::overlay::{
    forward, Controller, Effect, ErrorResponse, Health, Hooks, Message, Navigator, OverlayView,
    PlayPauseIcon, Visibility,
};
use playback_overlay::surface::{
    LoadInfo, PlaybackSurface, ProgressInfo, SimulatedSurface, SurfaceEvent,
};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

fn count(effects: &[Effect], wanted: fn(&Effect) -> bool) -> usize {
    effects.iter().filter(|effect| wanted(effect)).count()
}

fn loaded(duration: f64) -> Message {
    Message::Surface(SurfaceEvent::Loaded(LoadInfo {
        duration: Some(duration),
    }))
}

fn progress(time: f64) -> Message {
    Message::Surface(SurfaceEvent::Progress(ProgressInfo {
        current_time: Some(time),
    }))
}

#[test]
fn load_sequence_reaches_ok_and_arms_timer() {
    let mut controller = Controller::new(&Config::default(), Hooks::default());
    let t0 = Instant::now();

    controller.handle(Message::Surface(SurfaceEvent::LoadStart), t0);
    assert_eq!(controller.state().health(), Health::Loading);
    assert!(controller.is_spinner_running());

    let effects = controller.handle(loaded(120.0), t0);
    assert_eq!(controller.state().health(), Health::Ok);
    assert_abs_diff_eq!(controller.state().duration(), 120.0);
    assert!(controller.is_timer_pending());
    assert_eq!(
        count(&effects, |e| matches!(e, Effect::TimerArmed { .. })),
        1
    );
}

#[test]
fn tap_after_auto_hide_shows_controls_and_rearms_once() {
    let mut controller = Controller::new(&Config::default(), Hooks::default());
    let t0 = Instant::now();
    controller.handle(Message::Surface(SurfaceEvent::LoadStart), t0);
    controller.handle(loaded(120.0), t0);

    let effects = controller.handle(Message::Tick, t0 + Duration::from_secs(16));
    assert!(!controller.state().controls_visible());
    assert_eq!(effects, vec![Effect::Animate(Visibility::Hidden)]);

    let effects = controller.handle(Message::Tap, t0 + Duration::from_secs(20));
    assert!(controller.state().controls_visible());
    assert_eq!(count(&effects, |e| matches!(e, Effect::TimerCancelled)), 1);
    assert_eq!(
        count(&effects, |e| matches!(e, Effect::TimerArmed { .. })),
        1
    );
    assert_eq!(effects[0], Effect::Animate(Visibility::Shown));
}

#[test]
fn error_after_load_start_shows_indicator() {
    let mut controller = Controller::new(&Config::default(), Hooks::default());
    let t0 = Instant::now();
    controller.handle(Message::Surface(SurfaceEvent::LoadStart), t0);
    controller.handle(
        Message::Surface(SurfaceEvent::Error(PlaybackError::CorruptedFile)),
        t0 + Duration::from_millis(200),
    );

    assert_eq!(controller.state().health(), Health::Error);
    assert!(!controller.is_spinner_running());
    let view = OverlayView::project(&controller);
    assert_eq!(view.error_key, Some("error-video-corrupted"));
    assert_eq!(view.loader_rotation, None);
}

#[test]
fn seek_drag_owns_position_until_release() {
    let mut controller = Controller::new(&Config::default(), Hooks::default());
    let t0 = Instant::now();
    controller.handle(loaded(120.0), t0);
    controller.handle(progress(10.0), t0);

    controller.handle(Message::SeekDragStarted, t0);
    controller.handle(Message::SeekDragged(42.0), t0);
    for time in [11.0, 12.0, 13.0] {
        controller.handle(progress(time), t0);
        assert_abs_diff_eq!(controller.state().current_time(), 42.0);
    }

    controller.handle(Message::SeekDragged(57.25), t0);
    controller.handle(Message::SeekReleased, t0);
    assert_abs_diff_eq!(controller.state().current_time(), 57.25);
    assert!(!controller.state().is_seeking());

    controller.handle(progress(58.0), t0);
    assert_abs_diff_eq!(controller.state().current_time(), 58.0);
}

#[test]
fn muted_tracks_volume_through_drag() {
    let mut controller = Controller::new(&Config::default(), Hooks::default());
    let t0 = Instant::now();
    for step in 0..=20 {
        let volume = step as f32 / 20.0;
        controller.handle(Message::VolumeDragged(volume), t0);
        assert_eq!(
            controller.state().is_muted(),
            controller.state().volume().value() <= 0.0
        );
    }
}

#[test]
fn simulated_surface_follows_controller_commands() {
    let mut controller = Controller::new(&Config::default(), Hooks::default());
    let mut surface = SimulatedSurface::new(60.0, false);
    let t0 = Instant::now();

    for event in surface.load_events() {
        let effects = controller.handle(Message::Surface(event), t0);
        forward(&effects, &mut surface);
    }
    surface.play();

    for event in surface.advance(5.0) {
        controller.handle(Message::Surface(event), t0);
    }
    assert_abs_diff_eq!(controller.state().current_time(), 5.0);

    let effects = controller.handle(Message::TogglePlayPause, t0);
    assert_eq!(forward(&effects, &mut surface), 1);
    assert!(!surface.is_playing());
    assert_eq!(OverlayView::project(&controller).play_pause, PlayPauseIcon::Play);

    let effects = controller.handle(Message::SeekTo(30.0), t0);
    forward(&effects, &mut surface);
    assert_abs_diff_eq!(surface.position(), 30.0);

    let effects = controller.handle(Message::SetRate(2.0), t0);
    forward(&effects, &mut surface);
    assert_abs_diff_eq!(surface.rate(), 2.0);
}

#[test]
fn end_of_source_runs_end_hook() {
    let ended = Rc::new(Cell::new(0));
    let hooks = {
        let ended = Rc::clone(&ended);
        Hooks::default().with_on_end(move || ended.set(ended.get() + 1))
    };
    let mut controller = Controller::new(&Config::default(), hooks);
    let mut surface = SimulatedSurface::new(3.0, false);
    let t0 = Instant::now();

    for event in surface.load_events() {
        controller.handle(Message::Surface(event), t0);
    }
    surface.play();
    for event in surface.advance(4.0) {
        controller.handle(Message::Surface(event), t0);
    }

    assert_eq!(ended.get(), 1);
    assert_abs_diff_eq!(controller.state().current_time(), 3.0);
}

#[test]
fn error_hook_can_suppress_indicator() {
    let hooks = Hooks::default().with_on_error(|error| match error {
        PlaybackError::Network(_) => ErrorResponse::Ignore,
        _ => ErrorResponse::ShowIndicator,
    });
    let mut controller = Controller::new(&Config::default(), hooks);
    let t0 = Instant::now();

    controller.handle(Message::Surface(SurfaceEvent::LoadStart), t0);
    controller.handle(
        Message::Surface(SurfaceEvent::Error(PlaybackError::Network(
            "connection reset".into(),
        ))),
        t0,
    );
    assert!(!controller.state().has_error());
    assert_eq!(OverlayView::project(&controller).error_key, None);
}

struct CountingNavigator(Rc<Cell<u32>>);

impl Navigator for CountingNavigator {
    fn pop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn back_falls_back_to_navigator() {
    let pops = Rc::new(Cell::new(0));
    let hooks = Hooks::default().with_navigator(CountingNavigator(Rc::clone(&pops)));
    let mut controller = Controller::new(&Config::default(), hooks);

    controller.handle(Message::Back, Instant::now());
    assert_eq!(pops.get(), 1);
}

#[test]
fn double_tap_toggles_fullscreen_and_controls() {
    let mut controller = Controller::new(&Config::default(), Hooks::default());
    let t0 = Instant::now();

    controller.handle(Message::Tap, t0);
    assert!(!controller.state().controls_visible());

    let effects = controller.handle(Message::Tap, t0 + Duration::from_millis(120));
    assert!(controller.state().is_fullscreen());
    assert!(controller.state().controls_visible());
    assert_eq!(effects[0], Effect::Fullscreen(true));
}

#[test]
fn messages_after_shutdown_are_ignored() {
    let mut controller = Controller::new(&Config::default(), Hooks::default());
    let t0 = Instant::now();
    controller.handle(loaded(10.0), t0);
    controller.shutdown();

    assert!(!controller.is_timer_pending());
    assert!(controller.handle(Message::TogglePlayPause, t0).is_empty());
    assert!(!controller.state().is_paused());
}

#[test]
fn short_configured_delay_is_honoured() {
    let mut config = Config::default();
    config.controls.inactivity_delay_ms = 500;
    let mut controller = Controller::new(&config, Hooks::default());
    let t0 = Instant::now();

    controller.handle(Message::TogglePlayPause, t0);
    assert_eq!(
        controller.timer_deadline(),
        Some(t0 + Duration::from_millis(500))
    );

    controller.handle(Message::Tick, t0 + Duration::from_millis(600));
    assert!(!controller.state().controls_visible());
}
