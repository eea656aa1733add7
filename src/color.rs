//! Named presentation colors
//!
//! Colors only ever travel to the surface; physics never reads them.

use serde::{Deserialize, Serialize};

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const PEACH_PUFF: Color = Color::rgb(255, 218, 185);
    pub const HOT_PINK: Color = Color::rgb(255, 105, 180);
    pub const LIGHT_BLUE: Color = Color::rgb(173, 216, 230);
    pub const LIGHT_GREEN: Color = Color::rgb(144, 238, 144);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Look up a color picker entry. Unknown names fall back to peach puff.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "red" => Color::RED,
            "cyan" => Color::CYAN,
            "hotpink" | "hot-pink" | "hot_pink" => Color::HOT_PINK,
            "lightblue" | "light-blue" | "light_blue" => Color::LIGHT_BLUE,
            "lightgreen" | "light-green" | "light_green" => Color::LIGHT_GREEN,
            _ => Color::PEACH_PUFF,
        }
    }

    /// Packed 0xRRGGBB
    pub fn to_u32(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Color::from_name("Red"), Color::RED);
        assert_eq!(Color::from_name("HotPink"), Color::HOT_PINK);
        assert_eq!(Color::from_name("chartreuse"), Color::PEACH_PUFF);
    }

    #[test]
    fn test_to_u32() {
        assert_eq!(Color::CYAN.to_u32(), 0x00FFFF);
        assert_eq!(Color::HOT_PINK.to_u32(), 0xFF69B4);
    }
}
