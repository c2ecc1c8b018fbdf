//! Colors used to paint the playground chrome
//!
//! Colors are written as `#RRGGBB` (or `#RRGGBBAA`) hex strings in YAML and
//! stored as `0xAARRGGBB` for the softbuffer frame. Any subset of the theme
//! can be overridden from the `theme:` section of `config.yaml`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A color in ARGB format (0xAARRGGBB)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        let digits = hex.trim().trim_start_matches('#');
        let value = u32::from_str_radix(digits, 16)
            .map_err(|e| format!("Invalid color '{}': {}", hex, e))?;

        match digits.len() {
            6 => Ok(Color(0xFF00_0000 | value)),
            8 => {
                let alpha = value & 0xFF;
                Ok(Color((alpha << 24) | (value >> 8)))
            }
            _ => Err(format!(
                "Invalid color '{}': expected #RRGGBB or #RRGGBBAA",
                hex
            )),
        }
    }

    pub fn to_hex(self) -> String {
        let alpha = self.0 >> 24;
        let rgb = self.0 & 0x00FF_FFFF;
        if alpha == 0xFF {
            format!("#{:06X}", rgb)
        } else {
            format!("#{:06X}{:02X}", rgb, alpha)
        }
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
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Chrome colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: Color,
    pub editor_background: Color,
    pub sidebar_background: Color,
    pub sidebar_strip: Color,
    pub sidebar_strip_active: Color,
    pub panel_background: Color,
    pub panel_border: Color,
    pub title_bar: Color,
    pub title_bar_active: Color,
    pub minimize_button: Color,
    pub resize_grip: Color,
    pub canvas: Color,
    pub error: Color,
    pub hint: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x1E, 0x1E, 0x1E),
            editor_background: Color::rgb(0x1E, 0x1E, 0x1E),
            sidebar_background: Color::rgb(0x25, 0x25, 0x26),
            sidebar_strip: Color::rgb(0x3C, 0x3C, 0x3C),
            sidebar_strip_active: Color::rgb(0x00, 0x7A, 0xCC),
            panel_background: Color::rgb(0x2D, 0x2D, 0x30),
            panel_border: Color::rgb(0x45, 0x45, 0x4A),
            title_bar: Color::rgb(0x33, 0x33, 0x37),
            title_bar_active: Color::rgb(0x3F, 0x3F, 0x46),
            minimize_button: Color::rgb(0x5A, 0x5A, 0x60),
            resize_grip: Color::rgb(0x6E, 0x6E, 0x75),
            canvas: Color::rgb(0xFF, 0xFF, 0xFF),
            error: Color::rgb(0xF5, 0x42, 0x42),
            hint: Color::rgb(0x80, 0x80, 0x80),
        }
    }
}
