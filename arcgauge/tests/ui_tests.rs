//! UI tests using iced_test Simulator.
//!
//! These tests render the host screen headlessly and check the gauge labels
//! and the text field.

use std::time::{Duration, Instant};

use iced_test::simulator;

use arcgauge::view::host::{HostState, host_view};
use arcgauge::view::theme;
use arcgauge::{ArcGauge, Message};
use arcgauge_common::{AppConfig, GaugeConfig, ThemeChoice};

fn host(config: GaugeConfig) -> HostState {
    let palette = theme::colors(&theme::iced_theme(ThemeChoice::Dark)).gauge_palette();
    let colors = config.resolve_colors(&palette);
    HostState::new(config, colors)
}

/// Apply an edit and let the animation finish.
fn settled(mut state: HostState, text: &str) -> HostState {
    state.edit(text);
    state.advance(Instant::now() + Duration::from_secs(2));
    state
}

/// Test that the initial screen shows a zero readout and the caption.
#[test]
fn test_host_initial() {
    let state = host(GaugeConfig::default());
    let mut ui = simulator(host_view(&state));

    assert!(ui.find("Remaining").is_ok());
    assert!(ui.find("0 GB").is_ok());
}

/// Test that a settled value shows in the readout.
#[test]
fn test_host_shows_value() {
    let state = settled(host(GaugeConfig::default()), "25");
    let mut ui = simulator(host_view(&state));

    assert!(ui.find("25 GB").is_ok());
}

/// Test that values over the maximum read as the maximum.
#[test]
fn test_host_clamps_over_max() {
    let state = settled(host(GaugeConfig::default()), "150");
    let mut ui = simulator(host_view(&state));

    assert!(ui.find("100 GB").is_ok());
    assert!(ui.find("150 GB").is_err());
}

/// Test that the readout is mid-way while animating.
#[test]
fn test_host_mid_animation() {
    let mut state = host(GaugeConfig::default());
    state.edit("80");
    state.advance(Instant::now() + Duration::from_millis(507));

    let mut ui = simulator(host_view(&state));

    assert!(ui.find("40 GB").is_ok());
}

/// Test custom caption and truncated suffix.
#[test]
fn test_host_custom_labels() {
    let config = GaugeConfig {
        small_text: "Used".to_string(),
        big_text_suffix: "MiB".to_string(),
        max_value: 512,
        ..GaugeConfig::default()
    };
    let state = settled(host(config), "300");
    let mut ui = simulator(host_view(&state));

    assert!(ui.find("Used").is_ok());
    assert!(ui.find("300 Mi").is_ok());
}

/// Test that typing into the field reaches the gauge through `update`.
#[test]
fn test_typing_updates_gauge() {
    let mut app = ArcGauge::new(AppConfig::default(), false);

    let messages: Vec<Message> = {
        let mut ui = simulator(app.view());

        // Focus the field, which shows "0", and type after it.
        let _ = ui.click("0");
        let _ = ui.typewrite("7");

        ui.into_messages().collect()
    };

    assert!(
        messages
            .iter()
            .any(|message| matches!(message, Message::InputChanged(text) if text == "07")),
        "unexpected messages: {:?}",
        messages
    );

    for message in messages {
        let _ = app.update(message);
    }
    assert_eq!(app.host().value(), 7);
    assert_eq!(app.host().input(), "7");

    let _ = app.update(Message::Frame(Instant::now() + Duration::from_secs(2)));
    let mut ui = simulator(app.view());
    assert!(ui.find("7 GB").is_ok());
}

/// Test that large values read back exactly once settled.
#[test]
fn test_host_large_value() {
    let config = GaugeConfig {
        max_value: 20_000_000,
        ..GaugeConfig::default()
    };
    let state = settled(host(config), "16777217");
    let mut ui = simulator(host_view(&state));

    assert!(ui.find("16777217 GB").is_ok());
}
