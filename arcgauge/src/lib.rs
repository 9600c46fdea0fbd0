//! ArcGauge - animated circular gauge driven by a numeric input.
//!
//! This library exposes the core components for testing.

pub mod app;
pub mod args;
pub mod message;
pub mod subscription;
pub mod view;

// Re-export commonly used types
pub use app::ArcGauge;
pub use message::Message;
