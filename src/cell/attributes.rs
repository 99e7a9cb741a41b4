//! Per-cell rendition state and the minimal SGR diff between two states.

use std::fmt;

use bitflags::bitflags;

use crate::color::{Rgb, Theme};
use crate::color::theme::{DEFAULT_BG, DEFAULT_FG};

bitflags! {
    /// SGR style flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CellFlags: u8 {
        const BOLD      = 1 << 0;
        const DIM       = 1 << 1;
        const UNDERLINE = 1 << 2;
        const BLINK     = 1 << 3;
        const INVERSE   = 1 << 4;
        const HIDDEN    = 1 << 5;
        /// Both flags cleared by SGR 22.
        const INTENSITY = Self::BOLD.bits() | Self::DIM.bits();
    }
}

impl Default for CellFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// SGR set/reset codes for one flag.
struct FlagCodes {
    flag: CellFlags,
    set: u8,
    reset: u8,
}

/// Emission order for flag fragments.
const FLAG_CODES: [FlagCodes; 6] = [
    FlagCodes { flag: CellFlags::BOLD, set: 1, reset: 22 },
    FlagCodes { flag: CellFlags::DIM, set: 2, reset: 22 },
    FlagCodes { flag: CellFlags::UNDERLINE, set: 4, reset: 24 },
    FlagCodes { flag: CellFlags::BLINK, set: 5, reset: 25 },
    FlagCodes { flag: CellFlags::INVERSE, set: 7, reset: 27 },
    FlagCodes { flag: CellFlags::HIDDEN, set: 8, reset: 28 },
];

/// Colors and style flags of one cell.
///
/// `fg`/`bg` are the stored colors. Inverse video exists twice: the
/// `INVERSE` flag swaps them only when read through `Cell::effective_fg` /
/// `Cell::effective_bg`, while [`toggle_reverse_video`](Self::toggle_reverse_video)
/// swaps the stored values themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellAttributes {
    pub fg: Rgb,
    pub bg: Rgb,
    pub flags: CellFlags,
}

impl Default for CellAttributes {
    fn default() -> Self {
        Self::new(DEFAULT_FG, DEFAULT_BG)
    }
}

impl From<&Theme> for CellAttributes {
    /// Attributes of a fresh cell under `theme`.
    fn from(theme: &Theme) -> Self {
        Self::new(theme.default_fg(), theme.default_bg())
    }
}

impl CellAttributes {
    /// Attributes with the given colors and no style flags.
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            flags: CellFlags::empty(),
        }
    }

    /// SGR 0: theme default colors, no flags.
    pub fn reset(&mut self, theme: &Theme) {
        *self = Self::from(theme);
    }

    /// Swap the stored foreground and background.
    ///
    /// Unlike the `INVERSE` flag this is permanent: it survives any later
    /// change to `INVERSE`, which then swaps on top of the new values.
    pub fn toggle_reverse_video(&mut self) {
        std::mem::swap(&mut self.fg, &mut self.bg);
    }

    pub fn is_bold(&self) -> bool {
        self.flags.contains(CellFlags::BOLD)
    }

    pub fn is_dim(&self) -> bool {
        self.flags.contains(CellFlags::DIM)
    }

    pub fn is_underline(&self) -> bool {
        self.flags.contains(CellFlags::UNDERLINE)
    }

    pub fn is_blink(&self) -> bool {
        self.flags.contains(CellFlags::BLINK)
    }

    pub fn is_inverse(&self) -> bool {
        self.flags.contains(CellFlags::INVERSE)
    }

    pub fn is_hidden(&self) -> bool {
        self.flags.contains(CellFlags::HIDDEN)
    }

    /// Set or clear one or more style flags.
    pub fn set_flag(&mut self, flag: CellFlags, on: bool) {
        self.flags.set(flag, on);
    }

    /// SGR output that turns `prev` into `self`.
    ///
    /// Empty when nothing differs. See [`write_diff`](Self::write_diff).
    pub fn diff(&self, theme: &Theme, prev: &Self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_diff(theme, prev, &mut out);
        out
    }

    /// Write the SGR output that turns `prev` into `self`.
    ///
    /// Order: foreground fragment, background fragment, then one fragment
    /// for style flags. Each part is written only if it changed. Flags that
    /// turned off are reset first; SGR 22 clears bold and dim together, so
    /// whichever of the two is still on is asserted again after it.
    pub fn write_diff(
        &self,
        theme: &Theme,
        prev: &Self,
        w: &mut impl fmt::Write,
    ) -> fmt::Result {
        if self.fg != prev.fg {
            theme.write_sgr(w, self.fg, false)?;
        }
        if self.bg != prev.bg {
            theme.write_sgr(w, self.bg, true)?;
        }
        if self.flags != prev.flags {
            write_flag_diff(w, prev.flags, self.flags)?;
        }
        Ok(())
    }
}

fn write_flag_diff(w: &mut impl fmt::Write, prev: CellFlags, next: CellFlags) -> fmt::Result {
    let removed = prev.difference(next);
    let mut cleared = removed;
    if removed.intersects(CellFlags::INTENSITY) {
        cleared |= CellFlags::INTENSITY;
    }
    let assert = next.intersection(next.difference(prev).union(cleared));

    let mut first = true;
    let mut last_reset = 0;
    for codes in &FLAG_CODES {
        if removed.contains(codes.flag) && codes.reset != last_reset {
            push_param(w, &mut first, codes.reset)?;
            last_reset = codes.reset;
        }
    }
    for codes in &FLAG_CODES {
        if assert.contains(codes.flag) {
            push_param(w, &mut first, codes.set)?;
        }
    }
    if !first {
        w.write_char('m')?;
    }
    Ok(())
}

fn push_param(w: &mut impl fmt::Write, first: &mut bool, code: u8) -> fmt::Result {
    w.write_str(if *first { "\x1b[" } else { ";" })?;
    *first = false;
    write!(w, "{code}")
}

#[cfg(test)]
mod tests;
