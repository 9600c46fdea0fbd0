use std::time::Instant;

/// Messages for the ArcGauge application.
#[derive(Debug, Clone)]
pub enum Message {
    /// User edited the numeric text field.
    InputChanged(String),

    /// A window frame is about to be drawn.
    Frame(Instant),

    /// Demo mode wants a new random value.
    DemoTick,
}
