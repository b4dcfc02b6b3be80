//! Embedded fonts, text measurement, and glyph rasterization.
//!
//! Both DejaVu Sans faces are compiled into the binary, so rendering never
//! touches the host's font configuration. `fontdue` does the layout and
//! coverage rasterization; the [renderer](super::renderer) only blends the
//! resulting masks.

use super::layout::TextBox;
use super::style::{FontWeight, TextStyle};
use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle as GlyphRun};
use fontdue::{Font, FontSettings};
use std::sync::LazyLock;

const DEJA_VU_SANS: &[u8] = include_bytes!("DejaVuSans.ttf");
const DEJA_VU_SANS_BOLD: &[u8] = include_bytes!("DejaVuSans-Bold.ttf");

static FONTS: LazyLock<FontSet> = LazyLock::new(|| FontSet {
    regular: Font::from_bytes(DEJA_VU_SANS, FontSettings::default())
        .expect("embedded DejaVu Sans parses"),
    bold: Font::from_bytes(DEJA_VU_SANS_BOLD, FontSettings::default())
        .expect("embedded DejaVu Sans Bold parses"),
});

/// The two embedded faces, parsed once per process.
pub(crate) struct FontSet {
    regular: Font,
    bold: Font,
}

impl FontSet {
    pub(crate) fn get() -> &'static FontSet {
        &FONTS
    }

    fn face(&self, weight: FontWeight) -> &Font {
        match weight {
            FontWeight::Normal => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

/// A rasterized glyph positioned relative to its line's top-left corner.
pub(crate) struct PlacedGlyph {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
    /// Row-major coverage mask, one byte per pixel (0 = transparent).
    pub coverage: Vec<u8>,
}

/// A fully rasterized text line: its bounding box plus placed glyphs.
pub(crate) struct RasterizedLine {
    pub text_box: TextBox,
    pub glyphs: Vec<PlacedGlyph>,
}

/// Lay out `text` at the style's size and return glyph positions plus the
/// line height. A fresh `Layout` per call keeps this free of shared state,
/// so concurrent renders need no locking.
fn lay_out(text: &str, style: &TextStyle) -> (Vec<fontdue::layout::GlyphPosition>, f32) {
    let font = FontSet::get().face(style.weight);
    let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings::default());
    layout.append(&[font], &GlyphRun::new(text, style.size, 0));
    (layout.glyphs().clone(), layout.height())
}

/// Measure the pixel bounding box of `text` under `style`.
///
/// Returns `None` when nothing would be drawn: empty strings, or strings
/// whose glyphs all rasterize to zero width (e.g. only whitespace).
pub(crate) fn measure(text: &str, style: &TextStyle) -> Option<TextBox> {
    let (glyphs, height) = lay_out(text, style);
    let width = glyphs
        .iter()
        .filter(|g| g.width > 0)
        .map(|g| g.x + g.width as f32)
        .fold(0.0f32, f32::max);
    if width <= 0.0 {
        return None;
    }
    Some(TextBox {
        width: width.ceil() as u32,
        height: (height.ceil() as u32).max(1),
    })
}

/// Rasterize `text` into coverage masks positioned within its line box.
///
/// Returns `None` exactly when [`measure`] does.
pub(crate) fn rasterize(text: &str, style: &TextStyle) -> Option<RasterizedLine> {
    let text_box = measure(text, style)?;
    let font = FontSet::get().face(style.weight);
    let (glyphs, _) = lay_out(text, style);

    let placed = glyphs
        .iter()
        .filter(|g| g.width > 0 && g.height > 0)
        .map(|g| {
            let (metrics, coverage) = font.rasterize_config(g.key);
            PlacedGlyph {
                x: g.x as i64,
                y: g.y as i64,
                width: metrics.width as u32,
                height: metrics.height as u32,
                coverage,
            }
        })
        .collect();

    Some(RasterizedLine {
        text_box,
        glyphs: placed,
    })
}
