//! Per-instance theme construction.

use super::palette::parse_hex_color;
use super::{AnsiColor, Palette, Rgb, Theme};
use crate::config::{ColorConfig, ConfigError};

/// Builds an owned `Theme` for one terminal instance.
///
/// Each `build()` returns a fresh value; no two terminals ever hold the same
/// palette storage, so customizing one cannot leak into another.
#[derive(Debug, Clone, Default)]
pub struct ThemeBuilder {
    theme: Theme,
}

impl ThemeBuilder {
    /// Start from the default palette and default fg/bg pair.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an explicit theme (the terminal's "with theme" option).
    pub const fn from_theme(theme: Theme) -> Self {
        Self { theme }
    }

    /// Replace one palette slot.
    #[must_use]
    pub fn color(mut self, color: AnsiColor, rgb: Rgb) -> Self {
        let palette = self.theme.palette().with(color, rgb);
        self.theme = Theme::new(palette, self.theme.default_fg(), self.theme.default_bg());
        self
    }

    /// Replace the whole palette.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.theme = Theme::new(palette, self.theme.default_fg(), self.theme.default_bg());
        self
    }

    /// Set the default foreground for fresh cells.
    #[must_use]
    pub fn foreground(mut self, rgb: Rgb) -> Self {
        self.theme = Theme::new(*self.theme.palette(), rgb, self.theme.default_bg());
        self
    }

    /// Set the default background for fresh cells.
    #[must_use]
    pub fn background(mut self, rgb: Rgb) -> Self {
        self.theme = Theme::new(*self.theme.palette(), self.theme.default_fg(), rgb);
        self
    }

    /// Apply the overrides from a `[colors]` config section.
    ///
    /// Fails on the first malformed hex value or unknown palette key; the
    /// builder is consumed either way so a half-applied config is never
    /// observable.
    pub fn with_config(mut self, config: &ColorConfig) -> Result<Self, ConfigError> {
        if let Some(hex) = config.foreground.as_deref() {
            self = self.foreground(hex_value("foreground", hex)?);
        }
        if let Some(hex) = config.background.as_deref() {
            self = self.background(hex_value("background", hex)?);
        }
        for (key, hex) in &config.palette {
            let color =
                AnsiColor::from_name(key).ok_or_else(|| ConfigError::UnknownColor(key.clone()))?;
            self = self.color(color, hex_value(key, hex)?);
        }
        Ok(self)
    }

    /// Produce an independent theme value.
    pub fn build(&self) -> Theme {
        log::debug!(
            "theme built: fg={:?} bg={:?}",
            self.theme.default_fg(),
            self.theme.default_bg()
        );
        self.theme
    }
}

fn hex_value(key: &str, hex: &str) -> Result<Rgb, ConfigError> {
    parse_hex_color(hex).ok_or_else(|| ConfigError::InvalidHex {
        key: key.to_owned(),
        value: hex.to_owned(),
    })
}
