use thiserror::Error;

/// Common error type for ArcGauge components.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid color '{input}': {reason}")]
    Color { input: String, reason: String },
}

impl Error {
    pub(crate) fn color(input: &str, reason: impl Into<String>) -> Self {
        Error::Color {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias using ArcGauge's Error.
pub type Result<T> = std::result::Result<T, Error>;
