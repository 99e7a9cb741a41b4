//! Color types and conversions for cell rendition.
//!
//! Every color is a concrete `Rgb` (re-exported from `vte::ansi`); alpha is
//! implicitly opaque. `AnsiColor` names the 16 palette slots, `Palette` maps
//! them to `Rgb`, and `Theme` converts between SGR parameters and `Rgb`.

pub mod builder;
pub mod error;
pub mod palette;
pub mod theme;

pub use builder::ThemeBuilder;
pub use error::{ColorError, DescriptorFault};
pub use palette::{Palette, parse_hex_color};
pub use theme::Theme;
pub use vte::ansi::Rgb;

use vte::ansi::NamedColor;

/// The 16 named ANSI colors. The discriminant is the palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum AnsiColor {
    Black = 0,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiColor {
    /// All variants in palette order.
    pub const ALL: [Self; 16] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::BrightBlack,
        Self::BrightRed,
        Self::BrightGreen,
        Self::BrightYellow,
        Self::BrightBlue,
        Self::BrightMagenta,
        Self::BrightCyan,
        Self::BrightWhite,
    ];

    /// Palette index (0–15).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color for a palette index, `None` above 15.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 16 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Color selected by a 4-bit SGR code.
    ///
    /// 30–37 / 90–97 select foreground, 40–47 / 100–107 background. Both
    /// groups alias onto the same 16 colors.
    pub const fn from_sgr_code(code: u16) -> Option<Self> {
        let index = match code {
            30..=37 => code - 30,
            40..=47 => code - 40,
            90..=97 => code - 90 + 8,
            100..=107 => code - 100 + 8,
            _ => return None,
        };
        Self::from_index(index as u8)
    }

    /// Snake-case name, as used for palette keys in config.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::BrightBlack => "bright_black",
            Self::BrightRed => "bright_red",
            Self::BrightGreen => "bright_green",
            Self::BrightYellow => "bright_yellow",
            Self::BrightBlue => "bright_blue",
            Self::BrightMagenta => "bright_magenta",
            Self::BrightCyan => "bright_cyan",
            Self::BrightWhite => "bright_white",
        }
    }

    /// Inverse of [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl From<AnsiColor> for NamedColor {
    fn from(color: AnsiColor) -> Self {
        match color {
            AnsiColor::Black => Self::Black,
            AnsiColor::Red => Self::Red,
            AnsiColor::Green => Self::Green,
            AnsiColor::Yellow => Self::Yellow,
            AnsiColor::Blue => Self::Blue,
            AnsiColor::Magenta => Self::Magenta,
            AnsiColor::Cyan => Self::Cyan,
            AnsiColor::White => Self::White,
            AnsiColor::BrightBlack => Self::BrightBlack,
            AnsiColor::BrightRed => Self::BrightRed,
            AnsiColor::BrightGreen => Self::BrightGreen,
            AnsiColor::BrightYellow => Self::BrightYellow,
            AnsiColor::BrightBlue => Self::BrightBlue,
            AnsiColor::BrightMagenta => Self::BrightMagenta,
            AnsiColor::BrightCyan => Self::BrightCyan,
            AnsiColor::BrightWhite => Self::BrightWhite,
        }
    }
}
