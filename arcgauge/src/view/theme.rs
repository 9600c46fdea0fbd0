//! Theme-aware colors for ArcGauge.
//!
//! Bridges the iced theme and the toolkit-independent [`Palette`] the gauge
//! resolves its default colors against.

use arcgauge_common::{Palette, ThemeChoice};
use iced::{Color, Theme};

/// Get colors from the theme's extended palette.
pub struct ThemeColors<'a> {
    theme: &'a Theme,
}

impl<'a> ThemeColors<'a> {
    /// Create a new ThemeColors from a theme reference.
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn palette(&self) -> &iced::theme::palette::Extended {
        self.theme.extended_palette()
    }

    /// Primary text color, drawn on the background.
    pub fn text(&self) -> Color {
        self.palette().background.base.text
    }

    /// Primary accent color.
    pub fn primary(&self) -> Color {
        self.palette().primary.base.color
    }

    /// The gauge's fallback palette for this theme.
    pub fn gauge_palette(&self) -> Palette {
        Palette {
            on_surface: self.text(),
            primary: self.primary(),
        }
    }
}

/// Convenience function to get theme colors.
pub fn colors(theme: &Theme) -> ThemeColors<'_> {
    ThemeColors::new(theme)
}

/// The iced theme for a configured theme choice.
pub fn iced_theme(choice: ThemeChoice) -> Theme {
    match choice {
        ThemeChoice::Dark => Theme::Dark,
        ThemeChoice::Light => Theme::Light,
    }
}
