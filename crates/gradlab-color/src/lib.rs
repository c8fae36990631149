//! Gradient Lab Color
//!
//! RGB8 color type plus HSL/HSV conversions and WCAG contrast math.
//! Hue is kept in `[0, 360)` and saturation/lightness/value in `[0, 100]`
//! after every operation, so downstream code never sees out-of-range values.

mod convert;
pub mod contrast;

pub use contrast::{AA_CONTRAST, contrast_ratio, meets_aa, relative_luminance};
pub use convert::{Hsl, Hsv, lerp_hue, normalize_hue};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Color parsing error
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color: {0:?}")]
    InvalidColor(String),
}

/// Color (RGB, 8 bits per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex color with an optional `#` prefix (e.g. "#ff0000").
    ///
    /// Shorthand and alpha forms are rejected: the wire contract is 6-digit only.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidColor(hex.to_string()));
        }
        let r = u8::from_str_radix(&digits[0..2], 16)
            .map_err(|_| ColorError::InvalidColor(hex.to_string()))?;
        let g = u8::from_str_radix(&digits[2..4], 16)
            .map_err(|_| ColorError::InvalidColor(hex.to_string()))?;
        let b = u8::from_str_radix(&digits[4..6], 16)
            .map_err(|_| ColorError::InvalidColor(hex.to_string()))?;
        Ok(Color::rgb(r, g, b))
    }

    /// Format as uppercase `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// On the wire a color is its hex string, matching the request/response shape
// the transport layer speaks.
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
