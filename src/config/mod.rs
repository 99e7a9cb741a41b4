//! Configuration structures for terminal colors.
//!
//! Parsed from TOML text handed over by the host; this crate does no file
//! I/O. All fields are optional and fall back to the built-in theme.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::{Theme, ThemeBuilder};

/// Errors raised while turning configuration into a theme.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid color for {key}: {value:?} (expected #RRGGBB or #RGB)")]
    InvalidHex { key: String, value: String },

    #[error("unknown palette color: {0}")]
    UnknownColor(String),
}

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub colors: ColorConfig,
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Build the theme this configuration describes.
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Ok(ThemeBuilder::new().with_config(&self.colors)?.build())
    }
}

/// Color overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Override default foreground color ("#RRGGBB" or "#RGB").
    pub foreground: Option<String>,
    /// Override default background color ("#RRGGBB" or "#RGB").
    pub background: Option<String>,
    /// Override palette entries by snake_case name ("red", "bright_cyan").
    /// Only names present are overridden.
    pub palette: BTreeMap<String, String>,
}
