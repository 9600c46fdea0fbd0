use iced_core::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{Error, Result};

/// Configuration bundle for one gauge.
///
/// Colors left as `None` resolve against the active [`Palette`], see
/// [`GaugeConfig::resolve_colors`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeConfig {
    /// Side of the square area the gauge occupies.
    pub canvas_size: f32,
    /// Value that maps to a full 240° sweep.
    pub max_value: i64,
    #[serde(with = "crate::color::hex")]
    pub background_color: Option<Color>,
    pub background_stroke_width: f32,
    #[serde(with = "crate::color::hex")]
    pub foreground_color: Option<Color>,
    pub foreground_stroke_width: f32,
    pub big_text_size: f32,
    #[serde(with = "crate::color::hex")]
    pub big_text_color: Option<Color>,
    /// Unit shown after the readout. Only the first two characters are used.
    pub big_text_suffix: String,
    /// Caption shown above the readout.
    pub small_text: String,
    pub small_text_size: f32,
    #[serde(with = "crate::color::hex")]
    pub small_text_color: Option<Color>,
    /// Length of every value transition in milliseconds.
    pub animation_ms: u64,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            canvas_size: 300.0,
            max_value: 100,
            background_color: None,
            background_stroke_width: 36.0,
            foreground_color: None,
            foreground_stroke_width: 36.0,
            big_text_size: 28.0,
            big_text_color: None,
            big_text_suffix: "GB".to_string(),
            small_text: "Remaining".to_string(),
            small_text_size: 14.0,
            small_text_color: None,
            animation_ms: 1000,
        }
    }
}

impl GaugeConfig {
    /// Duration of a value transition.
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    /// Check that sizes and the maximum are usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_value <= 0 {
            return Err(Error::Config(format!(
                "max_value must be positive, got {}",
                self.max_value
            )));
        }

        let sizes = [
            ("canvas_size", self.canvas_size),
            ("background_stroke_width", self.background_stroke_width),
            ("foreground_stroke_width", self.foreground_stroke_width),
            ("big_text_size", self.big_text_size),
            ("small_text_size", self.small_text_size),
        ];

        for (name, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::Config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Fill unset colors from the theme palette.
    pub fn resolve_colors(&self, palette: &Palette) -> GaugeColors {
        let dimmed = with_alpha(palette.on_surface, 0.3);

        GaugeColors {
            background_arc: self
                .background_color
                .unwrap_or_else(|| with_alpha(palette.on_surface, 0.1)),
            foreground_arc: self.foreground_color.unwrap_or(palette.primary),
            big_text: self.big_text_color.unwrap_or(palette.on_surface),
            big_text_dimmed: dimmed,
            small_text: self.small_text_color.unwrap_or(dimmed),
        }
    }
}

/// `color` with its alpha replaced.
fn with_alpha(color: Color, a: f32) -> Color {
    Color { a, ..color }
}

/// Theme colors the gauge falls back to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Color of content drawn on the background surface.
    pub on_surface: Color,
    /// Accent color.
    pub primary: Color,
}

/// Concrete colors for every part of the gauge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeColors {
    pub background_arc: Color,
    pub foreground_arc: Color,
    pub big_text: Color,
    /// Readout color while the value is zero.
    pub big_text_dimmed: Color,
    pub small_text: Color,
}

/// Light or dark application theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl FromStr for ThemeChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(ThemeChoice::Dark),
            "light" => Ok(ThemeChoice::Light),
            other => Err(Error::Config(format!(
                "Unknown theme '{}', expected 'dark' or 'light'",
                other
            ))),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text format (default).
    #[default]
    Text,
    /// Structured JSON format.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format: "text" or "json".
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Gauge appearance and range.
    #[serde(default)]
    pub gauge: GaugeConfig,

    /// Application theme.
    #[serde(default)]
    pub theme: ThemeChoice,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Load a configuration file in JSON5 format.
pub fn load_config<T: for<'de> Deserialize<'de>>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    json5::from_str(&content).map_err(|e| {
        Error::Config(format!(
            "Failed to parse config file '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Load a configuration from a JSON5 string.
pub fn parse_config<T: for<'de> Deserialize<'de>>(content: &str) -> Result<T> {
    json5::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette {
            on_surface: Color::WHITE,
            primary: Color::from_rgb(0.4, 0.3, 0.6),
        }
    }

    #[test]
    fn test_parse_app_config() {
        let json5 = r##"
        {
            gauge: {
                max_value: 512,
                foreground_color: "#ff8000",
                big_text_suffix: "MB",
                small_text: "Free",
                animation_ms: 250,
            },
            theme: "light",
            logging: {
                level: "debug",
            },
        }
        "##;

        let config: AppConfig = parse_config(json5).unwrap();

        assert_eq!(config.gauge.max_value, 512);
        assert_eq!(
            config.gauge.foreground_color.map(Color::into_rgba8),
            Some([255, 128, 0, 255])
        );
        assert_eq!(config.gauge.big_text_suffix, "MB");
        assert_eq!(config.gauge.small_text, "Free");
        assert_eq!(config.gauge.animation_duration(), Duration::from_millis(250));
        assert_eq!(config.gauge.canvas_size, 300.0);
        assert_eq!(config.theme, ThemeChoice::Light);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_default_config() {
        let config: AppConfig = parse_config("{}").unwrap();

        assert_eq!(config.gauge, GaugeConfig::default());
        assert_eq!(config.gauge.max_value, 100);
        assert_eq!(config.gauge.big_text_suffix, "GB");
        assert_eq!(config.gauge.small_text, "Remaining");
        assert_eq!(config.gauge.animation_duration(), Duration::from_secs(1));
        assert_eq!(config.theme, ThemeChoice::Dark);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_json_logging_format() {
        let json5 = r#"{ logging: { level: "debug", format: "json" } }"#;
        let config: AppConfig = parse_config(json5).unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_color_rejected() {
        let json5 = r#"{ gauge: { background_color: "red" } }"#;
        assert!(parse_config::<AppConfig>(json5).is_err());
    }

    #[test]
    fn test_colors_written_as_hex() {
        let config = GaugeConfig {
            foreground_color: Some(Color::from_rgb8(0xff, 0x80, 0x00)),
            ..GaugeConfig::default()
        };

        let text = json5::to_string(&config).unwrap();
        assert!(text.contains("#ff8000"), "{}", text);

        let parsed: GaugeConfig = parse_config(&text).unwrap();
        assert_eq!(parsed.foreground_color, config.foreground_color);
        assert_eq!(parsed.background_color, None);
    }

    #[test]
    fn test_validate() {
        assert!(GaugeConfig::default().validate().is_ok());

        let config = GaugeConfig {
            max_value: 0,
            ..GaugeConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GaugeConfig {
            foreground_stroke_width: -1.0,
            ..GaugeConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GaugeConfig {
            big_text_size: f32::NAN,
            ..GaugeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_colors_from_palette() {
        let colors = GaugeConfig::default().resolve_colors(&palette());

        assert_eq!(colors.background_arc, with_alpha(Color::WHITE, 0.1));
        assert_eq!(colors.foreground_arc, palette().primary);
        assert_eq!(colors.big_text, Color::WHITE);
        assert_eq!(colors.big_text_dimmed, with_alpha(Color::WHITE, 0.3));
        assert_eq!(colors.small_text, with_alpha(Color::WHITE, 0.3));
    }

    #[test]
    fn test_resolve_colors_prefers_config() {
        let red = Color::from_rgb(1.0, 0.0, 0.0);
        let config = GaugeConfig {
            foreground_color: Some(red),
            big_text_color: Some(red),
            ..GaugeConfig::default()
        };
        let colors = config.resolve_colors(&palette());

        assert_eq!(colors.foreground_arc, red);
        assert_eq!(colors.big_text, red);
        // The dimmed readout always follows the theme.
        assert_eq!(colors.big_text_dimmed, with_alpha(Color::WHITE, 0.3));
    }

    #[test]
    fn test_theme_choice_from_str() {
        assert_eq!("dark".parse::<ThemeChoice>().unwrap(), ThemeChoice::Dark);
        assert_eq!("Light".parse::<ThemeChoice>().unwrap(), ThemeChoice::Light);
        assert!("sepia".parse::<ThemeChoice>().is_err());
    }
}
