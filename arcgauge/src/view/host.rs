//! Host screen: one gauge above the numeric field that drives it.

use arcgauge_common::{GaugeColors, GaugeConfig, GaugeFrame, GaugeState, parse_input};
use iced::widget::{column, container, text_input};
use iced::{Alignment, Element, Length};
use std::time::Instant;

use crate::message::Message;
use crate::view::components::Gauge;

/// State of the host screen.
#[derive(Debug, Clone)]
pub struct HostState {
    /// Gauge configuration.
    pub config: GaugeConfig,
    /// Gauge colors resolved against the active theme.
    pub colors: GaugeColors,
    /// Current value, as last accepted from the field.
    value: i64,
    /// Text shown in the field, always `value` formatted.
    input: String,
    /// Animation state behind the gauge.
    gauge: GaugeState,
}

impl HostState {
    /// Create the host with the value at zero.
    pub fn new(config: GaugeConfig, colors: GaugeColors) -> Self {
        let gauge = GaugeState::new(&config, colors);
        Self {
            config,
            colors,
            value: 0,
            input: "0".to_string(),
            gauge,
        }
    }

    /// Current value.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Text currently shown in the field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Apply an edit of the text field.
    ///
    /// Empty text sets zero. Text that is not an integer is rejected and the
    /// field keeps showing the previous value. Returns whether the edit was
    /// accepted.
    pub fn edit(&mut self, text: &str) -> bool {
        match parse_input(text) {
            Some(value) => {
                self.set_value(value);
                true
            }
            None => {
                tracing::debug!(input = %text, value = self.value, "Ignoring non-numeric input");
                false
            }
        }
    }

    /// Set the value directly.
    pub fn set_value(&mut self, value: i64) {
        self.value = value;
        self.input = value.to_string();
        self.gauge.set_value(value);
    }

    /// Advance the gauge animation to `now`.
    ///
    /// Returns `true` if the animation finished during this step.
    pub fn advance(&mut self, now: Instant) -> bool {
        let was_animating = self.gauge.is_animating();
        self.gauge.tick(now);
        was_animating && !self.gauge.is_animating()
    }

    /// Whether the gauge still needs frames.
    pub fn is_animating(&self) -> bool {
        self.gauge.is_animating()
    }

    /// The gauge as of the last advance.
    pub fn frame(&self) -> GaugeFrame {
        self.gauge.frame()
    }
}

/// Render the host screen.
pub fn host_view(state: &HostState) -> Element<'_, Message> {
    let gauge = Gauge::new(&state.config, &state.colors, &state.frame()).view();

    let input = text_input("0", &state.input)
        .on_input(Message::InputChanged)
        .padding(8)
        .width(Length::Fixed(state.config.canvas_size * 0.8));

    let content = column![gauge, input]
        .spacing(20)
        .padding(20)
        .align_x(Alignment::Center);

    container(content).center_x(Length::Fill).into()
}
