//! Color handling for presentation attributes
//!
//! Colors cross the host boundary as "#RRGGBB" strings (the form the
//! drawing layer and the persisted settings store use), so the type
//! serializes to and from hex.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An RGB color (components 0.0 to 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a color from RGB components
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from hex string (e.g., "#4682B4" or "4682B4")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()? as f32 / 255.0;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()? as f32 / 255.0;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()? as f32 / 255.0;

        Some(Self::rgb(r, g, b))
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8
        )
    }

    /// Common colors
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
    pub fn steel_blue() -> Self {
        Self::rgb(70.0 / 255.0, 130.0 / 255.0, 180.0 / 255.0)
    }
    pub fn firebrick() -> Self {
        Self::rgb(178.0 / 255.0, 34.0 / 255.0, 34.0 / 255.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        Color::from_hex(&hex)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid color string: {}", hex)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex("#FF0000").unwrap();
        assert!((color.r - 1.0).abs() < 1e-6);
        assert!(color.g.abs() < 1e-6);
        assert!(color.b.abs() < 1e-6);

        // leading '#' is optional
        assert_eq!(Color::from_hex("4682B4"), Color::from_hex("#4682B4"));
    }

    #[test]
    fn test_color_from_hex_invalid() {
        assert!(Color::from_hex("#FFF").is_none());
        assert!(Color::from_hex("not a color").is_none());
    }

    #[test]
    fn test_color_hex_round_trip() {
        let color = Color::steel_blue();
        assert_eq!(Color::from_hex(&color.to_hex()), Some(color));
    }

    #[test]
    fn test_color_serde_as_hex_string() {
        let json = serde_json::to_string(&Color::from_hex("#B22222").unwrap()).unwrap();
        assert_eq!(json, "\"#B22222\"");

        let color: Color = serde_json::from_str("\"#4682B4\"").unwrap();
        assert_eq!(color, Color::steel_blue());
    }
}
