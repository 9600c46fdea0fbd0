//! View components for the ArcGauge application.

pub mod components;
pub mod host;
pub mod theme;
