//! ArcGauge Common Library
//!
//! The renderer-independent half of the ArcGauge widget. It only uses
//! `iced_core` value types, never widgets or a renderer:
//!
//! - [`value`] - Clamping, sweep mapping, readout text and input parsing
//! - [`state`] - Animated gauge state, built on `iced_anim`
//! - [`scene`] - Pure render function producing arcs and labels
//! - [`color`] - Hex color strings for configuration files
//! - [`config`] - Configuration loading (JSON5 format)
//! - [`error`] - Error types

pub mod color;
pub mod config;
pub mod error;
pub mod scene;
pub mod state;
pub mod value;

// Re-export commonly used types at the crate root
pub use iced_core::Color;
pub use color::parse_color;
pub use config::{
    AppConfig, GaugeColors, GaugeConfig, LogFormat, LoggingConfig, Palette, ThemeChoice,
    load_config, parse_config,
};
pub use error::{Error, Result};
pub use scene::{ArcShape, Label, Point, Scene, render};
pub use state::{GaugeFrame, GaugeState};
pub use value::{FULL_SWEEP, START_ANGLE, clamp_value, parse_input, readout_text, sweep_for};

/// Initialize tracing with the given configuration.
///
/// Supports two output formats:
/// - `LogFormat::Text` (default): Human-readable text format
/// - `LogFormat::Json`: Structured JSON format for log aggregation systems
///
/// `RUST_LOG` takes precedence over `config.level` when set.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(fmt::layer())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(fmt::layer().json())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
    }

    Ok(())
}
