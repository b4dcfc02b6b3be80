//! Export collaborator: persist a stamped image as a JPEG.
//!
//! The gallery contract is deliberately narrow: hand over pixels, get back
//! the path they were written to. Quality is pinned at 100 — the camera app
//! this mirrors exposes no compression trade-off — and filenames follow its
//! `IMG_<yyyyMMdd_HHmmss>.jpg` convention, derived from the clock at export
//! time. A failed export is reported and must be re-triggered explicitly;
//! there are no retries.

use chrono::{DateTime, Local};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, RgbaImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// JPEGs are written losslessly-as-possible; no knob is exposed.
const JPEG_QUALITY: u8 = 100;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JPEG encode failed: {0}")]
    Encoding(String),
}

/// Accepts a rendered image and persists it somewhere shared.
pub trait ExportSink {
    /// Write `image`, deriving the filename from `at`, and return the path.
    fn export(&self, image: &RgbaImage, at: DateTime<Local>) -> Result<PathBuf, ExportError>;
}

/// Gallery filename for an export at the given instant.
///
/// # Examples
/// ```
/// # use geostamp::export::export_filename;
/// use chrono::{Local, TimeZone};
/// let at = Local.with_ymd_and_hms(2024, 6, 1, 14, 5, 30).unwrap();
/// assert_eq!(export_filename(at), "IMG_20240601_140530.jpg");
/// ```
pub fn export_filename(at: DateTime<Local>) -> String {
    format!("IMG_{}.jpg", at.format("%Y%m%d_%H%M%S"))
}

/// Encode `image` as a quality-100 JPEG at `path`.
///
/// JPEG has no alpha channel, so the image is flattened to RGB first.
pub fn write_jpeg(image: &RgbaImage, path: &Path) -> Result<(), ExportError> {
    let rgb = DynamicImage::ImageRgba8(image.clone()).into_rgb8();
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    JpegEncoder::new_with_quality(writer, JPEG_QUALITY)
        .write_image(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| ExportError::Encoding(e.to_string()))
}

/// Export sink writing into a gallery directory.
///
/// Creates the directory on first use — the closest filesystem analogue to
/// registering a file with a media index.
pub struct GalleryDir {
    dir: PathBuf,
}

impl GalleryDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for GalleryDir {
    fn export(&self, image: &RgbaImage, at: DateTime<Local>) -> Result<PathBuf, ExportError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(export_filename(at));
        write_jpeg(image, &path)?;
        Ok(path)
    }
}
