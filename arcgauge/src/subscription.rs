use std::time::Duration;

use iced::Subscription;

use crate::message::Message;

/// Interval between random values in demo mode.
pub const DEMO_INTERVAL: Duration = Duration::from_secs(2);

/// Create a subscription that fires once per drawn frame.
///
/// Only subscribe while an animation is running; an idle gauge needs no
/// redraws.
pub fn frame_subscription() -> Subscription<Message> {
    iced::window::frames().map(Message::Frame)
}

/// Create a demo subscription that periodically asks for a new value.
pub fn demo_subscription() -> Subscription<Message> {
    iced::time::every(DEMO_INTERVAL).map(|_| Message::DemoTick)
}
