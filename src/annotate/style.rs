//! Style parameters for the annotation renderer.
//!
//! [`TextStyle`] describes *what* the text looks like, not *how* it is
//! rasterized. Defaults mirror the camera-app originals: tiny bold black
//! text, 20px margins.

use image::Rgba;

/// Font weight, selecting between the two embedded DejaVu Sans faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    Normal,
    #[default]
    Bold,
}

/// Style for both annotation lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels. Clamped to at least 1.0 on construction.
    pub size: f32,
    pub weight: FontWeight,
    /// Text color, alpha-blended over the image.
    pub color: Rgba<u8>,
    /// Distance from the right and bottom image edges, in pixels.
    pub margin: u32,
    /// Vertical gap between the two lines, in pixels.
    pub spacing: u32,
}

impl TextStyle {
    pub fn new(size: f32, weight: FontWeight, color: Rgba<u8>) -> Self {
        Self {
            size: size.max(1.0),
            weight,
            color,
            ..Self::default()
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 8.0,
            weight: FontWeight::Bold,
            color: Rgba([0, 0, 0, 255]),
            margin: 20,
            spacing: 20,
        }
    }
}
