//! Hex color strings in configuration files.
//!
//! Colors are plain [`iced_core::Color`] values. Configuration files write
//! them as hex strings (`#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`), which
//! [`hex`] converts with serde's `with` attribute.

use iced_core::Color;

use crate::error::{Error, Result};

/// Parse a `#`-prefixed hex color.
pub fn parse_color(input: &str) -> Result<Color> {
    let trimmed = input.trim();

    if !trimmed.starts_with('#') {
        return Err(Error::color(input, "expected a leading '#'"));
    }
    if !trimmed.is_ascii() {
        return Err(Error::color(input, "expected hex digits"));
    }

    trimmed
        .parse::<Color>()
        .map_err(|e| Error::color(input, e.to_string()))
}

/// Serde adapter for optional colors stored as hex strings.
pub mod hex {
    use iced_core::Color;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match color {
            Some(color) => serializer.serialize_some(&color.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|text| super::parse_color(&text).map_err(serde::de::Error::custom))
            .transpose()
    }
}
