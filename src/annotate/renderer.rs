//! The annotation renderer: composite two text lines onto an image.
//!
//! [`render`] is a pure function. It clones the input, measures both lines,
//! places them via [`layout`](super::layout), and alpha-blends the glyph
//! coverage masks in the style color. The caller's image is never touched,
//! and the output always has the input's dimensions.
//!
//! There is no erase step: rendering onto an already-annotated image draws
//! the text again on top of the existing strokes.

use super::font;
use super::layout::{Anchor, place_lines};
use super::style::TextStyle;
use image::{Rgba, RgbaImage};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnotateError {
    #[error("invalid image dimensions {width}x{height}: both must be positive")]
    InvalidImage { width: u32, height: u32 },
}

/// Draw `location_text` and `time_text` onto a copy of `image`.
///
/// The location line sits in the bottom-right corner, `style.margin` pixels
/// off the right and bottom edges; the time line is stacked above it with a
/// `style.spacing` pixel gap. Empty lines are skipped. Text wider than the
/// image is clipped on the left.
///
/// Strings are opaque to the renderer: missing-data placeholders like
/// `Location: null, null` are the caller's formatting choice and are drawn
/// verbatim.
pub fn render(
    image: &RgbaImage,
    location_text: &str,
    time_text: &str,
    style: &TextStyle,
) -> Result<RgbaImage, AnnotateError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(AnnotateError::InvalidImage { width, height });
    }

    let location = font::rasterize(location_text, style);
    let time = font::rasterize(time_text, style);

    let placement = place_lines(
        (width, height),
        location.as_ref().map(|l| l.text_box),
        time.as_ref().map(|l| l.text_box),
        style.margin,
        style.spacing,
    );

    let mut canvas = image.clone();
    if let (Some(line), Some(anchor)) = (location, placement.location) {
        draw_line(&mut canvas, &line, anchor, style.color);
    }
    if let (Some(line), Some(anchor)) = (time, placement.time) {
        draw_line(&mut canvas, &line, anchor, style.color);
    }
    Ok(canvas)
}

/// Blend one rasterized line into the canvas at its anchor, clipping pixels
/// that fall outside the image.
fn draw_line(canvas: &mut RgbaImage, line: &font::RasterizedLine, anchor: Anchor, color: Rgba<u8>) {
    let (img_w, img_h) = (canvas.width() as i64, canvas.height() as i64);
    for glyph in &line.glyphs {
        for row in 0..glyph.height as i64 {
            let py = anchor.y + glyph.y + row;
            if py < 0 || py >= img_h {
                continue;
            }
            for col in 0..glyph.width as i64 {
                let px = anchor.x + glyph.x + col;
                if px < 0 || px >= img_w {
                    continue;
                }
                let coverage = glyph.coverage[(row * glyph.width as i64 + col) as usize];
                if coverage == 0 {
                    continue;
                }
                let pixel = canvas.get_pixel_mut(px as u32, py as u32);
                blend(pixel, color, coverage);
            }
        }
    }
}

/// Source-over blend of `color` into `dst`, scaled by glyph coverage.
fn blend(dst: &mut Rgba<u8>, color: Rgba<u8>, coverage: u8) {
    let alpha = u32::from(coverage) * u32::from(color[3]) / 255;
    let inv = 255 - alpha;
    for c in 0..3 {
        dst[c] = ((u32::from(color[c]) * alpha + u32::from(dst[c]) * inv) / 255) as u8;
    }
    dst[3] = (alpha + u32::from(dst[3]) * inv / 255) as u8;
}
