//! SGR color decoding and encoding against a terminal's palette.
//!
//! Decode paths:
//!
//! - 4-bit codes (`30–37`, `40–47`, `90–97`, `100–107`) resolve through the
//!   16-entry palette and never fail; unknown codes fall back to white.
//! - 8-bit indices (`38;5;N`): 0–15 palette, 16–231 6×6×6 cube, 232–255
//!   grayscale ramp.
//! - 24-bit triples (`38;2;R;G;B`) pass through unchanged.
//!
//! The encode path always emits the true-color form with the `2` selector
//! so its output decodes back to the same color.

use std::fmt;

use vte::ansi::{Color, NamedColor};

use super::error::{ColorError, DescriptorFault};
use super::{AnsiColor, Palette, Rgb};

/// Foreground for cells that have not been given a color.
pub const DEFAULT_FG: Rgb = Rgb { r: 0xff, g: 0xff, b: 0xff };
/// Background for cells that have not been given a color.
pub const DEFAULT_BG: Rgb = Rgb { r: 0x00, g: 0x00, b: 0x00 };

/// Channel intensities of the 6×6×6 cube, by level.
const CUBE_STEPS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// First index of the color cube.
const CUBE_START: u8 = 16;
/// First index of the grayscale ramp.
const GRAY_START: u8 = 232;

/// Offset of `NamedColor::DimBlack` from `NamedColor::Black`.
const NAMED_DIM_START: usize = NamedColor::DimBlack as usize;

/// Color semantics for one terminal instance.
///
/// Holds the instance's own palette plus the default foreground/background
/// pair given to fresh cells. Every conversion borrows `self` immutably.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    palette: Palette,
    default_fg: Rgb,
    default_bg: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Palette::default(), DEFAULT_FG, DEFAULT_BG)
    }
}

impl Theme {
    pub const fn new(palette: Palette, default_fg: Rgb, default_bg: Rgb) -> Self {
        Self {
            palette,
            default_fg,
            default_bg,
        }
    }

    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    pub const fn default_fg(&self) -> Rgb {
        self.default_fg
    }

    pub const fn default_bg(&self) -> Rgb {
        self.default_bg
    }

    /// Resolve a 4-bit SGR color code. Unknown codes yield the white entry.
    pub fn decode_sgr_code(&self, code: u16) -> Rgb {
        let color = AnsiColor::from_sgr_code(code).unwrap_or_else(|| {
            log::trace!("unknown 4-bit color code {code}, falling back to white");
            AnsiColor::White
        });
        self.palette.get(color)
    }

    /// Resolve an already-parsed 8-bit color index.
    pub fn indexed(&self, index: u8) -> Rgb {
        match AnsiColor::from_index(index) {
            Some(color) => self.palette.get(color),
            None if index < GRAY_START => cube(index - CUBE_START),
            None => gray(index - GRAY_START),
        }
    }

    /// Decode the index parameter of `38;5;N` / `48;5;N`.
    pub fn decode_indexed(&self, index: &str) -> Result<Rgb, ColorError> {
        parse_channel("index", index).map(|i| self.indexed(i))
    }

    /// Decode the components of `38;2;R;G;B` / `48;2;R;G;B`.
    pub fn decode_rgb(&self, r: &str, g: &str, b: &str) -> Result<Rgb, ColorError> {
        Ok(Rgb {
            r: parse_channel("red", r)?,
            g: parse_channel("green", g)?,
            b: parse_channel("blue", b)?,
        })
    }

    /// Decode the parameters following an SGR 38/48 indicator.
    ///
    /// `["5", N]` is an 8-bit index, `["2", R, G, B]` a true-color triple.
    /// Anything else, including a known selector with surplus or missing
    /// parameters, is an invalid descriptor.
    pub fn decode_extended(&self, descriptor: &[&str]) -> Result<Rgb, ColorError> {
        match descriptor {
            ["5", index] => self.decode_indexed(index),
            ["2", r, g, b] => self.decode_rgb(r, g, b),
            [] => Err(ColorError::descriptor(descriptor, DescriptorFault::Empty)),
            ["5", ..] => Err(ColorError::descriptor(
                descriptor,
                DescriptorFault::Arity {
                    expected: 2,
                    found: descriptor.len(),
                },
            )),
            ["2", ..] => Err(ColorError::descriptor(
                descriptor,
                DescriptorFault::Arity {
                    expected: 4,
                    found: descriptor.len(),
                },
            )),
            _ => Err(ColorError::descriptor(
                descriptor,
                DescriptorFault::UnknownSelector,
            )),
        }
    }

    /// Resolve a `vte` color to a concrete value.
    ///
    /// Semantic named slots map onto the default pair; dim variants use
    /// their base color.
    pub fn resolve(&self, color: Color) -> Rgb {
        match color {
            Color::Spec(rgb) => rgb,
            Color::Indexed(idx) => self.indexed(idx),
            Color::Named(NamedColor::Background) => self.default_bg,
            Color::Named(name) => {
                let idx = name as usize;
                let base = match idx {
                    0..16 => Some(idx),
                    _ if (NAMED_DIM_START..NAMED_DIM_START + 8).contains(&idx) => {
                        Some(idx - NAMED_DIM_START)
                    }
                    _ => None,
                };
                base.and_then(|i| AnsiColor::from_index(i as u8))
                    .map_or(self.default_fg, |c| self.palette.get(c))
            }
        }
    }

    /// Encode a color as a true-color SGR fragment.
    pub fn encode(&self, color: Rgb, is_background: bool) -> String {
        let mut out = String::with_capacity(20);
        // Writing into a String cannot fail.
        let _ = self.write_sgr(&mut out, color, is_background);
        out
    }

    /// Write the true-color SGR fragment for `color` into `w`.
    ///
    /// `ESC[38;2;R;G;Bm` for foreground, `ESC[48;2;R;G;Bm` for background.
    pub fn write_sgr(
        &self,
        w: &mut impl fmt::Write,
        color: Rgb,
        is_background: bool,
    ) -> fmt::Result {
        let indicator = if is_background { 48 } else { 38 };
        write!(w, "\x1b[{indicator};2;{};{};{}m", color.r, color.g, color.b)
    }
}

/// One color from the 6×6×6 cube, `offset` in 0..216.
const fn cube(offset: u8) -> Rgb {
    Rgb {
        r: CUBE_STEPS[(offset / 36) as usize],
        g: CUBE_STEPS[(offset / 6 % 6) as usize],
        b: CUBE_STEPS[(offset % 6) as usize],
    }
}

/// One step of the grayscale ramp, `level` in 0..24. Rounds down.
const fn gray(level: u8) -> Rgb {
    let v = (level as u16 * 255 / 23) as u8;
    Rgb { r: v, g: v, b: v }
}

fn parse_channel(component: &'static str, value: &str) -> Result<u8, ColorError> {
    value
        .parse::<u8>()
        .ok()
        .ok_or_else(|| ColorError::parse(component, value))
}
