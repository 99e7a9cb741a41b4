//! Cell rendition state and SGR color conversion.
//!
//! This crate owns what a terminal knows about how one cell looks: its glyph,
//! foreground/background colors, and style flags. It decodes the SGR color
//! encodings (4-bit, 8-bit, 24-bit) against a per-instance `Theme` and
//! produces the minimal SGR output needed to move from one cell's
//! attributes to another's. Escape-sequence tokenizing, grid storage, and
//! glyph width measurement live elsewhere.

#![deny(unsafe_code)]

pub mod cell;
pub mod color;
pub mod config;

pub use cell::{Cell, CellAttributes, CellFlags, MeasuredRune};
pub use color::{AnsiColor, ColorError, Palette, Rgb, Theme, ThemeBuilder};
pub use config::{ColorConfig, Config, ConfigError};
