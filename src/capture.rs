//! Capture collaborator: turns a camera result into a decoded [`Photo`].
//!
//! The renderer never does I/O; everything it needs — pixels, an optional
//! GPS fix, a timestamp — arrives through [`CaptureSource`]. The production
//! implementation is [`FileCapture`], which decodes the image file a camera
//! app hands over (JPEG, PNG, TIFF, or WebP via the `image` crate's pure
//! Rust decoders).

use chrono::{DateTime, Local};
use image::{ImageReader, RgbaImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
}

/// A GPS fix in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoFix {
    pub lat: f64,
    pub lon: f64,
}

/// A decoded capture result: pixels plus the metadata stamped onto them.
#[derive(Debug, Clone)]
pub struct Photo {
    pub image: RgbaImage,
    /// `None` when no location fix was available at capture time.
    pub fix: Option<GeoFix>,
    pub taken_at: DateTime<Local>,
}

/// Supplies one decoded photo per call.
pub trait CaptureSource {
    fn capture(&self) -> Result<Photo, CaptureError>;
}

/// Capture source backed by an image file on disk.
///
/// The fix is supplied by the caller (the CLI's `--lat`/`--lon`); the
/// timestamp is the wall clock at decode time, matching a camera handing
/// over a freshly taken frame.
pub struct FileCapture {
    path: PathBuf,
    fix: Option<GeoFix>,
}

impl FileCapture {
    pub fn new(path: impl Into<PathBuf>, fix: Option<GeoFix>) -> Self {
        Self {
            path: path.into(),
            fix,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CaptureSource for FileCapture {
    fn capture(&self) -> Result<Photo, CaptureError> {
        let image = ImageReader::open(&self.path)?
            .decode()
            .map_err(|e| CaptureError::Decode {
                path: self.path.clone(),
                reason: e.to_string(),
            })?
            .into_rgba8();
        Ok(Photo {
            image,
            fix: self.fix,
            taken_at: Local::now(),
        })
    }
}
