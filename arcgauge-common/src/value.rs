//! Mapping from a raw gauge value to what the gauge shows.

/// Angle where both arcs begin, in degrees clockwise from three o'clock.
pub const START_ANGLE: f32 = 150.0;

/// Sweep of a full gauge, in degrees.
pub const FULL_SWEEP: f32 = 240.0;

/// Bound `value` to `0..=max`.
///
/// Values above `max` show as `max` and negative values show as zero.
pub fn clamp_value(value: i64, max: i64) -> i64 {
    value.min(max).max(0)
}

/// `value` as a percentage of `max`. Zero when `max` is not positive.
pub fn percentage(value: f32, max: i64) -> f32 {
    if max <= 0 {
        return 0.0;
    }
    value / max as f32 * 100.0
}

/// Arc sweep in degrees for `value` out of `max`, always within `0..=240`.
pub fn sweep_for(value: f32, max: i64) -> f32 {
    (percentage(value, max) / 100.0 * FULL_SWEEP).clamp(0.0, FULL_SWEEP)
}

/// Numeric readout: the value followed by at most two characters of suffix.
pub fn readout_text(value: i64, suffix: &str) -> String {
    let suffix: String = suffix.chars().take(2).collect();
    format!("{} {}", value, suffix)
}

/// Parse the host's text field.
///
/// Empty or blank text means zero. Returns `None` for anything that is not a
/// whole base-10 integer, in which case the edit should be ignored.
pub fn parse_input(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse().ok()
}
