//! The 16-entry indexed palette.
//!
//! A `Palette` is a plain `[Rgb; 16]` indexed by `AnsiColor`. It has no
//! setters: overrides are applied while building a theme, after which the
//! palette is fixed for the lifetime of the terminal instance that owns it.

use std::ops::Index;

use super::{AnsiColor, Rgb};

/// Default ANSI colors (indices 0–15).
const DEFAULT_COLORS: [Rgb; 16] = [
    Rgb { r: 0, g: 0, b: 0 },       // 0  Black
    Rgb { r: 222, g: 56, b: 43 },   // 1  Red
    Rgb { r: 57, g: 181, b: 74 },   // 2  Green
    Rgb { r: 255, g: 199, b: 6 },   // 3  Yellow
    Rgb { r: 0, g: 111, b: 184 },   // 4  Blue
    Rgb { r: 118, g: 38, b: 113 },  // 5  Magenta
    Rgb { r: 44, g: 181, b: 233 },  // 6  Cyan
    Rgb { r: 204, g: 204, b: 204 }, // 7  White
    Rgb { r: 128, g: 128, b: 128 }, // 8  Bright Black
    Rgb { r: 255, g: 0, b: 0 },     // 9  Bright Red
    Rgb { r: 0, g: 255, b: 0 },     // 10 Bright Green
    Rgb { r: 255, g: 255, b: 0 },   // 11 Bright Yellow
    Rgb { r: 0, g: 0, b: 255 },     // 12 Bright Blue
    Rgb { r: 255, g: 0, b: 255 },   // 13 Bright Magenta
    Rgb { r: 0, g: 255, b: 255 },   // 14 Bright Cyan
    Rgb { r: 255, g: 255, b: 255 }, // 15 Bright White
];

/// Fixed 16-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; 16],
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_COLORS)
    }
}

impl Palette {
    /// Build a palette from explicit colors in `AnsiColor` order.
    pub const fn new(colors: [Rgb; 16]) -> Self {
        Self { colors }
    }

    /// Color for a named slot.
    #[inline]
    pub const fn get(&self, color: AnsiColor) -> Rgb {
        self.colors[color as usize]
    }

    /// All 16 entries in index order.
    pub const fn colors(&self) -> &[Rgb; 16] {
        &self.colors
    }

    /// Copy of this palette with one slot replaced.
    #[must_use]
    pub const fn with(mut self, color: AnsiColor, rgb: Rgb) -> Self {
        self.colors[color as usize] = rgb;
        self
    }
}

impl Index<AnsiColor> for Palette {
    type Output = Rgb;

    fn index(&self, color: AnsiColor) -> &Rgb {
        &self.colors[color.index()]
    }
}

/// Parse "#RRGGBB" or "#RGB" to Rgb. The `#` is required.
pub fn parse_hex_color(s: &str) -> Option<Rgb> {
    let hex = s.strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |i: usize| hex.get(i..=i).and_then(|d| u8::from_str_radix(d, 16).ok());
    let pair = |i: usize| hex.get(i..i + 2).and_then(|d| u8::from_str_radix(d, 16).ok());
    match hex.len() {
        6 => Some(Rgb {
            r: pair(0)?,
            g: pair(2)?,
            b: pair(4)?,
        }),
        3 => Some(Rgb {
            r: digit(0)? * 17,
            g: digit(1)? * 17,
            b: digit(2)? * 17,
        }),
        _ => None,
    }
}
