//! Terminal cell types.
//!
//! A `Cell` is one character position in the grid: a measured glyph plus
//! its rendition attributes. Cells are small `Copy` values overwritten in
//! place by the grid; they are never shared.

pub mod attributes;

pub use attributes::{CellAttributes, CellFlags};

use crate::color::{Rgb, Theme};

/// A character together with its display width in columns.
///
/// Width is computed by the caller; this crate stores it as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeasuredRune {
    pub ch: char,
    pub width: u8,
}

impl MeasuredRune {
    /// Sentinel left behind by an erase: NUL, zero columns.
    pub const EMPTY: Self = Self::new('\0', 0);

    pub const fn new(ch: char, width: u8) -> Self {
        Self { ch, width }
    }

    /// Whether this is the erase sentinel.
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl Default for MeasuredRune {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// One character position in the terminal grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    /// The glyph stored in this cell.
    pub rune: MeasuredRune,
    /// Colors and style flags.
    pub attrs: CellAttributes,
}

const _: () = assert!(size_of::<Cell>() <= 16);

impl From<Rgb> for Cell {
    /// BCE (Background Color Erase) cell: default cell with a custom background.
    fn from(bg: Rgb) -> Self {
        let mut cell = Self::default();
        cell.attrs.bg = bg;
        cell
    }
}

impl From<&Theme> for Cell {
    /// Blank cell in the theme's default colors.
    fn from(theme: &Theme) -> Self {
        Self::new(CellAttributes::from(theme))
    }
}

impl Cell {
    /// Blank cell with the given attributes.
    pub const fn new(attrs: CellAttributes) -> Self {
        Self {
            rune: MeasuredRune::EMPTY,
            attrs,
        }
    }

    /// Foreground as displayed: the stored background when `INVERSE` is set.
    pub fn effective_fg(&self) -> Rgb {
        if self.attrs.is_inverse() {
            self.attrs.bg
        } else {
            self.attrs.fg
        }
    }

    /// Background as displayed: the stored foreground when `INVERSE` is set.
    pub fn effective_bg(&self) -> Rgb {
        if self.attrs.is_inverse() {
            self.attrs.fg
        } else {
            self.attrs.bg
        }
    }

    /// Erase the glyph and fill the background.
    ///
    /// Only the glyph and background change. Foreground and style flags
    /// survive, which callers rely on.
    pub fn erase(&mut self, fill_bg: Rgb) {
        self.set_rune(MeasuredRune::EMPTY);
        self.attrs.bg = fill_bg;
    }

    /// Replace the glyph. No validation.
    pub fn set_rune(&mut self, rune: MeasuredRune) {
        self.rune = rune;
    }

    /// Whether this cell holds the erase sentinel.
    pub fn is_empty(&self) -> bool {
        self.rune.is_empty()
    }
}
