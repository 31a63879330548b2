use crate::error::WallpaperError;

/// A colour, expressed as RGB with components from 0.0 to 1.0
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Colour {
    /// Create a new colour. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour { r, g, b }
    }

    /// Create a new colour. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Parse a CSS-style `#rrggbb` hex string (leading `#` optional)
    pub fn from_hex(s: &str) -> Result<Colour, WallpaperError> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(WallpaperError::InvalidColour(s.to_string()));
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        Ok(Colour::new_rgb_bytes(byte(0), byte(2), byte(4)))
    }

    /// The colour as 8-bit components, as stored in the raster surface
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

impl<T: Into<f32>> From<[T; 3]> for Colour {
    fn from(c: [T; 3]) -> Self {
        let [r, g, b] = c;
        Colour {
            r: r.into(),
            g: g.into(),
            b: b.into(),
        }
    }
}

/// A list of pre-defined colour constants, matching the preset swatches of
/// the wallpaper editor
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: Colour = Colour {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };
    /// `#1e3a5f`
    pub const NAVY: Colour = Colour {
        r: 0x1e as f32 / 255.0,
        g: 0x3a as f32 / 255.0,
        b: 0x5f as f32 / 255.0,
    };
    /// `#2d2d2d`
    pub const DARK_GREY: Colour = Colour {
        r: 0x2d as f32 / 255.0,
        g: 0x2d as f32 / 255.0,
        b: 0x2d as f32 / 255.0,
    };
    /// `#1a3c34`
    pub const FOREST: Colour = Colour {
        r: 0x1a as f32 / 255.0,
        g: 0x3c as f32 / 255.0,
        b: 0x34 as f32 / 255.0,
    };
    /// `#4a1c2e`
    pub const WINE: Colour = Colour {
        r: 0x4a as f32 / 255.0,
        g: 0x1c as f32 / 255.0,
        b: 0x2e as f32 / 255.0,
    };
    /// `#475569`
    pub const SLATE: Colour = Colour {
        r: 0x47 as f32 / 255.0,
        g: 0x55 as f32 / 255.0,
        b: 0x69 as f32 / 255.0,
    };
    /// `#f5f5dc`
    pub const CREAM: Colour = Colour {
        r: 0xf5 as f32 / 255.0,
        g: 0xf5 as f32 / 255.0,
        b: 0xdc as f32 / 255.0,
    };
}
