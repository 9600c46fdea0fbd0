//! ArcGauge Iced application.

use arcgauge_common::{AppConfig, ThemeChoice};
use iced::{Element, Subscription, Task, Theme};
use rand::Rng;

use crate::message::Message;
use crate::subscription::{demo_subscription, frame_subscription};
use crate::view::host::{HostState, host_view};
use crate::view::theme;

/// The main ArcGauge application.
pub struct ArcGauge {
    /// Host screen state.
    host: HostState,
    /// Selected theme.
    theme: ThemeChoice,
    /// Whether demo mode feeds random values.
    demo: bool,
}

impl ArcGauge {
    /// Create the application from a loaded configuration.
    pub fn new(config: AppConfig, demo: bool) -> Self {
        let palette = theme::colors(&theme::iced_theme(config.theme)).gauge_palette();
        let colors = config.gauge.resolve_colors(&palette);

        Self {
            host: HostState::new(config.gauge, colors),
            theme: config.theme,
            demo,
        }
    }

    /// Boot the ArcGauge application (called by iced::application).
    pub fn boot(config: AppConfig, demo: bool) -> (Self, Task<Message>) {
        (Self::new(config, demo), Task::none())
    }

    /// Host screen state.
    pub fn host(&self) -> &HostState {
        &self.host
    }

    /// Handle incoming messages.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(text) => {
                self.host.edit(&text);
            }

            Message::Frame(now) => {
                if self.host.advance(now) {
                    tracing::trace!(value = self.host.value(), "Gauge animation settled");
                }
            }

            Message::DemoTick => {
                let max = self.host.config.max_value;
                let value = rand::rng().random_range(0..=max.saturating_add(max / 2));
                tracing::debug!(value, "Demo value");
                self.host.set_value(value);
            }
        }

        Task::none()
    }

    /// Frames while animating, plus the demo timer when enabled.
    pub fn subscription(&self) -> Subscription<Message> {
        let frames = if self.host.is_animating() {
            frame_subscription()
        } else {
            Subscription::none()
        };

        let demo = if self.demo {
            demo_subscription()
        } else {
            Subscription::none()
        };

        Subscription::batch([frames, demo])
    }

    /// Render the view.
    pub fn view(&self) -> Element<'_, Message> {
        host_view(&self.host)
    }

    /// Get the application theme.
    pub fn theme(&self) -> Theme {
        theme::iced_theme(self.theme)
    }
}
