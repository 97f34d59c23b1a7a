//! Theme models
//!
//! Themes control how a venue's public menu renders. Colors serialize as
//! "#rrggbb" strings so themes stay hand-editable in JSON.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use validator::Validate;

use crate::ids::{OrganizationId, ThemeId};
use crate::types::MediaReference;

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Error returned when a hex color string fails to parse
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color must be in #rrggbb format")]
    Format,
    #[error("color contains invalid hex digits")]
    Digit,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a "#rrggbb" string; shorthand "#rgb" is not accepted
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let hex = s.strip_prefix('#').ok_or(ColorParseError::Format)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorParseError::Format);
        }
        let channel = |range| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError::Digit)
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// WCAG relative luminance, 0.0 (black) to 1.0 (white)
    pub fn relative_luminance(&self) -> f64 {
        fn linearize(value: u8) -> f64 {
            let channel = value as f64 / 255.0;
            if channel <= 0.03928 {
                channel / 12.92
            } else {
                ((channel + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(de::Error::custom)
    }
}

/// WCAG contrast ratio between two colors, 1.0 to 21.0
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG AA threshold for body text (4.5:1)
pub fn meets_contrast(foreground: Color, background: Color) -> bool {
    contrast_ratio(foreground, background) >= 4.5
}

/// The color slots a menu theme fills
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeColors {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub surface: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

/// Font families offered to theme authors
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    SystemSans,
    SystemSerif,
    Inter,
    Lora,
    Custom(String),
}

/// Corner rounding applied to cards and buttons
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CornerRadius {
    None,
    Small,
    Medium,
    Large,
}

/// A menu presentation theme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub id: ThemeId,
    /// `None` marks a platform preset available to every organization
    pub organization_id: Option<OrganizationId>,
    pub name: String,
    pub colors: ThemeColors,
    pub font_family: FontFamily,
    pub corner_radius: CornerRadius,
    pub logo: Option<MediaReference>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Built-in palettes offered before an organization customizes anything
pub fn preset_palettes() -> Vec<(&'static str, ThemeColors)> {
    vec![
        (
            "daylight",
            ThemeColors {
                primary: Color::new(0xb4, 0x53, 0x09),
                secondary: Color::new(0x0e, 0x74, 0x90),
                background: Color::new(0xff, 0xff, 0xff),
                surface: Color::new(0xf8, 0xfa, 0xfc),
                text_primary: Color::new(0x0f, 0x17, 0x2a),
                text_secondary: Color::new(0x47, 0x55, 0x69),
            },
        ),
        (
            "midnight",
            ThemeColors {
                primary: Color::new(0xf5, 0x9e, 0x0b),
                secondary: Color::new(0x38, 0xbd, 0xf8),
                background: Color::new(0x0f, 0x17, 0x2a),
                surface: Color::new(0x1e, 0x29, 0x3b),
                text_primary: Color::new(0xf8, 0xfa, 0xfc),
                text_secondary: Color::new(0xcb, 0xd5, 0xe1),
            },
        ),
        (
            "bistro",
            ThemeColors {
                primary: Color::new(0xb9, 0x1c, 0x1c),
                secondary: Color::new(0x15, 0x80, 0x3d),
                background: Color::new(0xff, 0xfb, 0xeb),
                surface: Color::new(0xfe, 0xf3, 0xc7),
                text_primary: Color::new(0x45, 0x1a, 0x03),
                text_secondary: Color::new(0x92, 0x40, 0x0e),
            },
        ),
    ]
}

/// Input for creating a custom theme
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateThemeInput {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    pub colors: ThemeColors,
    pub font_family: FontFamily,
    pub corner_radius: CornerRadius,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let color = Color::from_hex("#b45309").unwrap();
        assert_eq!(color, Color::new(0xb4, 0x53, 0x09));
        assert_eq!(color.to_hex(), "#b45309");
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Color::from_hex("b45309"), Err(ColorParseError::Format));
        assert_eq!(Color::from_hex("#fff"), Err(ColorParseError::Format));
        assert_eq!(Color::from_hex("#zzzzzz"), Err(ColorParseError::Digit));
        assert_eq!(Color::from_hex("#b4530"), Err(ColorParseError::Format));
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::new(0xaa, 0xbb, 0xcc)).unwrap();
        assert_eq!(json, "\"#aabbcc\"");

        let back: Color = serde_json::from_str("\"#aabbcc\"").unwrap();
        assert_eq!(back, Color::new(0xaa, 0xbb, 0xcc));
        assert!(serde_json::from_str::<Color>("\"oops\"").is_err());
    }

    #[test]
    fn black_on_white_is_maximum_contrast() {
        let ratio = contrast_ratio(Color::new(0, 0, 0), Color::new(255, 255, 255));
        assert!((ratio - 21.0).abs() < 0.05);
        // Order does not matter
        let flipped = contrast_ratio(Color::new(255, 255, 255), Color::new(0, 0, 0));
        assert!((ratio - flipped).abs() < f64::EPSILON);
    }

    #[test]
    fn presets_keep_body_text_readable() {
        for (name, colors) in preset_palettes() {
            assert!(
                meets_contrast(colors.text_primary, colors.background),
                "preset {name} fails AA contrast"
            );
            assert!(
                meets_contrast(colors.text_primary, colors.surface),
                "preset {name} surface fails AA contrast"
            );
        }
    }
}
