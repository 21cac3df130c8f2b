use serde::{Deserialize, Serialize};

use crate::api::error::SimError;

/// RGB fill color, components in 0.0..=1.0.
/// Serialized as a CSS hex string so configs read like `"#fff"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb`.
    pub fn from_hex(hex: &str) -> Result<Self, SimError> {
        let invalid = || SimError::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        let (r, g, b) = match digits.len() {
            3 => {
                // #abc expands to #aabbcc
                let nibble = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                (nibble(0)?, nibble(1)?, nibble(2)?)
            }
            6 => (
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            ),
            _ => return Err(invalid()),
        };

        Ok(Self::from_rgb8(r, g, b))
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// CSS `#rrggbb`, usable directly as a canvas fill style.
    pub fn to_css(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl TryFrom<String> for Color {
    type Error = SimError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hex_expands() {
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::from_hex("#000").unwrap(), Color::BLACK);
        assert_eq!(Color::from_hex("#f80").unwrap().to_css(), "#ff8800");
    }

    #[test]
    fn long_hex_round_trips_through_css() {
        let c = Color::from_hex("#1a2B3c").unwrap();
        assert_eq!(c.to_rgb8(), [0x1a, 0x2b, 0x3c]);
        assert_eq!(c.to_css(), "#1a2b3c");
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["fff", "#ff", "#ggg", "#12345", "", "#+12"] {
            assert!(
                matches!(Color::from_hex(bad), Err(SimError::InvalidColor(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn deserializes_from_json_string() {
        let c: Color = serde_json::from_str("\"#000\"").unwrap();
        assert_eq!(c, Color::BLACK);
        assert!(serde_json::from_str::<Color>("\"black\"").is_err());
        assert_eq!(serde_json::to_string(&Color::WHITE).unwrap(), "\"#ffffff\"");
    }
}
