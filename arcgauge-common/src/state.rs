//! Animated gauge state.

use std::time::Instant;

use iced_anim::{Animated, Easing};
use iced_core::Color;

use crate::config::{GaugeColors, GaugeConfig};
use crate::value::{clamp_value, sweep_for};

/// Everything the gauge needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeFrame {
    /// Value as last set, before clamping.
    pub raw: i64,
    /// Value bounded to `0..=max`.
    pub clamped: i64,
    /// Integer currently shown in the readout.
    pub readout: i64,
    /// Current foreground sweep in degrees.
    pub sweep: f32,
    /// Current readout color.
    pub label_color: Color,
}

/// State behind one gauge: the latest value and three animations that chase it.
///
/// The readout, the sweep and the label color are retargeted together whenever
/// the clamped value changes and move linearly in parallel over the configured
/// duration. Time only moves when [`GaugeState::tick`] is called.
#[derive(Debug, Clone)]
pub struct GaugeState {
    max: i64,
    raw: i64,
    clamped: i64,
    colors: GaugeColors,
    readout: Animated<f32>,
    sweep: Animated<f32>,
    label_color: Animated<Color>,
}

impl GaugeState {
    /// Create a gauge resting at zero.
    pub fn new(config: &GaugeConfig, colors: GaugeColors) -> Self {
        let easing = Easing::LINEAR.with_duration(config.animation_duration());

        Self {
            max: config.max_value,
            raw: 0,
            clamped: 0,
            colors,
            readout: Animated::transition(0.0, easing),
            sweep: Animated::transition(0.0, easing),
            label_color: Animated::transition(colors.big_text_dimmed, easing),
        }
    }

    /// Set a new raw value.
    ///
    /// Returns `true` if the clamped value changed and an animation started.
    /// An animation already in flight continues from where it currently is.
    pub fn set_value(&mut self, raw: i64) -> bool {
        self.raw = raw;

        let clamped = clamp_value(raw, self.max);
        if clamped == self.clamped {
            return false;
        }

        tracing::debug!(raw, clamped, previous = self.clamped, "Gauge value changed");
        self.clamped = clamped;

        let target_color = if clamped == 0 {
            self.colors.big_text_dimmed
        } else {
            self.colors.big_text
        };

        self.readout.set_target(clamped as f32);
        self.sweep.set_target(sweep_for(clamped as f32, self.max));
        self.label_color.set_target(target_color);

        // A zero-length transition would never make progress.
        if self.readout.duration().is_zero() {
            self.readout.settle();
            self.sweep.settle();
            self.label_color.settle();
        }

        true
    }

    /// Advance every animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.readout.tick(now);
        self.sweep.tick(now);
        self.label_color.tick(now);
    }

    /// Raw value as last set.
    pub fn raw(&self) -> i64 {
        self.raw
    }

    /// Whether any animation still runs.
    pub fn is_animating(&self) -> bool {
        self.readout.is_animating() || self.sweep.is_animating() || self.label_color.is_animating()
    }

    /// The gauge as of the last tick.
    ///
    /// The readout truncates the animated value toward zero. Once the readout
    /// animation is over it is the clamped value itself, so integers too large
    /// for an `f32` still read back exactly.
    pub fn frame(&self) -> GaugeFrame {
        let readout = if self.readout.is_animating() {
            *self.readout.value() as i64
        } else {
            self.clamped
        };

        GaugeFrame {
            raw: self.raw,
            clamped: self.clamped,
            readout,
            sweep: *self.sweep.value(),
            label_color: *self.label_color.value(),
        }
    }
}
