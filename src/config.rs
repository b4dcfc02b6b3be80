//! Configuration module.
//!
//! Handles loading and validating `geostamp.toml`. Config files are sparse:
//! stock defaults are overridden only by the keys a user actually sets.
//! Unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [style]
//! size = 8.0            # Font size in pixels
//! weight = "bold"       # "bold" or "normal"
//! color = "#000000"     # Text color, #RRGGBB or #RRGGBBAA
//! margin = 20           # Pixels off the right and bottom edges
//! spacing = 20          # Vertical gap between the two lines
//!
//! [gallery]
//! dir = "Pictures"      # Where exported JPEGs go
//! ```

use crate::annotate::{FontWeight, TextStyle};
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `geostamp.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Annotation text style.
    pub style: StyleConfig,
    /// Export destination.
    pub gallery: GalleryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    pub size: f32,
    /// `"bold"` or `"normal"`.
    pub weight: String,
    /// Hex color, `#RRGGBB` or `#RRGGBBAA`.
    pub color: String,
    pub margin: u32,
    pub spacing: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            size: 8.0,
            weight: "bold".to_string(),
            color: "#000000".to_string(),
            margin: 20,
            spacing: 20,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    pub dir: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            dir: "Pictures".to_string(),
        }
    }
}

impl Config {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `geostamp.toml` from `dir` if present, otherwise stock defaults.
    pub fn load_or_default(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join("geostamp.toml");
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.style.size.is_finite() || self.style.size <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "style.size must be positive, got {}",
                self.style.size
            )));
        }
        if !matches!(self.style.weight.as_str(), "bold" | "normal") {
            return Err(ConfigError::Validation(format!(
                "style.weight must be \"bold\" or \"normal\", got \"{}\"",
                self.style.weight
            )));
        }
        if parse_hex_color(&self.style.color).is_none() {
            return Err(ConfigError::Validation(format!(
                "style.color must be #RRGGBB or #RRGGBBAA, got \"{}\"",
                self.style.color
            )));
        }
        if self.gallery.dir.is_empty() {
            return Err(ConfigError::Validation(
                "gallery.dir must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the validated style into renderer parameters.
    pub fn text_style(&self) -> TextStyle {
        let weight = match self.style.weight.as_str() {
            "normal" => FontWeight::Normal,
            _ => FontWeight::Bold,
        };
        TextStyle {
            size: self.style.size.max(1.0),
            weight,
            // validate() already proved this parses.
            color: parse_hex_color(&self.style.color).unwrap_or(Rgba([0, 0, 0, 255])),
            margin: self.style.margin,
            spacing: self.style.spacing,
        }
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into an RGBA color.
pub fn parse_hex_color(hex: &str) -> Option<Rgba<u8>> {
    let digits = hex.strip_prefix('#')?;
    if !matches!(digits.len(), 6 | 8) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    let (r, g, b) = (byte(0)?, byte(2)?, byte(4)?);
    let a = if digits.len() == 8 { byte(6)? } else { 255 };
    Some(Rgba([r, g, b, a]))
}

/// A documented stock config, printed by `geostamp gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# geostamp configuration
# All options are optional - these are the defaults.

[style]
# Font size in pixels. The camera-app original used tiny 8px text.
size = 8.0
# "bold" or "normal" (embedded DejaVu Sans faces).
weight = "bold"
# Text color: #RRGGBB or #RRGGBBAA.
color = "#000000"
# Distance from the right and bottom image edges, in pixels.
margin = 20
# Vertical gap between the time and location lines, in pixels.
spacing = 20

[gallery]
# Directory exported JPEGs are written to (created if missing).
dir = "Pictures"
"##
}
