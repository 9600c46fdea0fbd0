//! CLI argument parsing.

use std::path::PathBuf;

use arcgauge_common::{AppConfig, Result, ThemeChoice, load_config};
use clap::Parser;

/// Command line arguments.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "arcgauge", about = "Animated circular gauge driven by a numeric input")]
pub struct Args {
    /// Path to configuration file (JSON5).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Override the theme (dark, light).
    #[arg(long)]
    pub theme: Option<ThemeChoice>,

    /// Override the gauge's maximum value.
    #[arg(long)]
    pub max: Option<i64>,

    /// Feed the gauge random values.
    #[arg(long)]
    pub demo: bool,
}

impl Args {
    /// Default configuration path, `<config dir>/arcgauge/config.json5`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("arcgauge").join("config.json5"))
    }

    /// Load the configuration and apply command line overrides.
    ///
    /// An explicit `--config` must exist. Without it the default path is
    /// used if present, otherwise built-in defaults.
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => load_config(&path)?,
                _ => AppConfig::default(),
            },
        };

        self.apply_overrides(&mut config);
        config.gauge.validate()?;

        Ok(config)
    }

    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(max) = self.max {
            config.gauge.max_value = max;
        }
    }
}
