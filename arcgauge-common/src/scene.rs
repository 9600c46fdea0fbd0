//! Renderer-independent description of a gauge frame.
//!
//! [`render`] is a pure function from configuration and a sampled
//! [`GaugeFrame`] to a [`Scene`]. A renderer draws the arcs in
//! [`Scene::arcs`] order and then centers the two labels, caption on top.

use iced_core::Color;

use crate::config::{GaugeColors, GaugeConfig};
use crate::state::GaugeFrame;
use crate::value::{FULL_SWEEP, START_ANGLE, readout_text};

/// Ratio between the widget's bounds and the square the arcs are drawn in.
pub const ARC_AREA_RATIO: f32 = 1.25;

/// A point in widget-local coordinates, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// An open, round-capped circular arc stroke.
///
/// Angles are in degrees, measured clockwise from three o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcShape {
    pub center: Point,
    pub radius: f32,
    pub start_angle: f32,
    pub sweep: f32,
    pub stroke_width: f32,
    pub color: Color,
}

impl ArcShape {
    /// Angle where the arc stops.
    pub fn end_angle(&self) -> f32 {
        self.start_angle + self.sweep
    }

    /// Whether there is anything to stroke.
    pub fn is_visible(&self) -> bool {
        self.sweep > 0.0 && self.radius > 0.0
    }
}

/// A line of centered text.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub size: f32,
    pub color: Color,
    pub bold: bool,
}

/// Two arcs and two labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Full 240° track.
    pub background: ArcShape,
    /// Progress arc, drawn over the track.
    pub foreground: ArcShape,
    /// Secondary caption above the readout.
    pub caption: Label,
    /// Bold value and suffix.
    pub readout: Label,
}

impl Scene {
    /// Arcs in draw order.
    pub fn arcs(&self) -> [&ArcShape; 2] {
        [&self.background, &self.foreground]
    }
}

/// Describe one frame of the gauge inside a `width` x `height` area.
pub fn render(
    config: &GaugeConfig,
    colors: &GaugeColors,
    frame: &GaugeFrame,
    width: f32,
    height: f32,
) -> Scene {
    let side = width.min(height).max(0.0) / ARC_AREA_RATIO;
    let center = Point {
        x: width / 2.0,
        y: height / 2.0,
    };
    let radius = side / 2.0;

    let background = ArcShape {
        center,
        radius,
        start_angle: START_ANGLE,
        sweep: FULL_SWEEP,
        stroke_width: config.background_stroke_width,
        color: colors.background_arc,
    };

    let foreground = ArcShape {
        sweep: frame.sweep.clamp(0.0, FULL_SWEEP),
        stroke_width: config.foreground_stroke_width,
        color: colors.foreground_arc,
        ..background
    };

    Scene {
        background,
        foreground,
        caption: Label {
            text: config.small_text.clone(),
            size: config.small_text_size,
            color: colors.small_text,
            bold: false,
        },
        readout: Label {
            text: readout_text(frame.readout, &config.big_text_suffix),
            size: config.big_text_size,
            color: frame.label_color,
            bold: true,
        },
    }
}
