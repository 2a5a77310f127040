// SPDX-License-Identifier: MPL-2.0
use playback_overlay::config::{self, Config, DEFAULT_INACTIVITY_DELAY_MS};
use playback_overlay::i18n::fluent::I18n;
use playback_overlay::overlay::{Controller, Hooks, OverlayView, TimerMode};
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    config::save_to_path(&config, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    config.general.language = Some("fr".to_string());
    config::save_to_path(&config, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("button-back"), "Retour");
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[controls]\nshow_time_remaining = false\ntitle = \"Trailer\"\n",
    )
    .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.controls.inactivity_delay_ms, DEFAULT_INACTIVITY_DELAY_MS);
    assert!(config.controls.fullscreen_toggle);

    let controller = Controller::new(&config, Hooks::default());
    assert_eq!(controller.state().timer_mode(), TimerMode::Elapsed);
    let view = OverlayView::project(&controller);
    assert_eq!(view.title.as_deref(), Some("Trailer"));
    assert_eq!(view.timer, "00:00");
}

#[test]
fn test_invalid_file_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[controls\nbroken")
        .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn test_disabled_fullscreen_toggle_hides_button() {
    let mut config = Config::default();
    config.controls.fullscreen_toggle = false;
    let controller = Controller::new(&config, Hooks::default());
    assert_eq!(OverlayView::project(&controller).fullscreen, None);
}
