//! The stamping pipeline: capture → format lines → render → export.
//!
//! This is the shell around the renderer. It owns the two formatting
//! decisions the renderer deliberately does not make:
//!
//! - A missing GPS fix becomes the literal placeholder `Location: null,
//!   null` — the renderer draws whatever it is given.
//! - The time line is the capture timestamp as `Time: HH:mm:ss`.

use crate::annotate::{AnnotateError, TextStyle, render};
use crate::capture::{CaptureError, CaptureSource, GeoFix};
use crate::export::{ExportError, ExportSink};
use chrono::{DateTime, Local};
use image::RgbaImage;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StampError {
    #[error(transparent)]
    Capture(#[from] CaptureError),
    #[error(transparent)]
    Annotate(#[from] AnnotateError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// What a stamping run produced, for CLI reporting.
#[derive(Debug)]
pub struct StampReport {
    pub width: u32,
    pub height: u32,
    pub location_line: String,
    pub time_line: String,
    /// Where the JPEG landed, when an export sink was supplied.
    pub exported: Option<PathBuf>,
}

/// Format the location line, falling back to the `null, null` placeholder
/// when no fix is available. The absence case is a formatting choice here,
/// never a renderer error.
pub fn format_location_line(fix: Option<GeoFix>) -> String {
    match fix {
        Some(f) => format!("Location: {}, {}", f.lat, f.lon),
        None => "Location: null, null".to_string(),
    }
}

/// Format the time line from the capture timestamp.
pub fn format_time_line(at: DateTime<Local>) -> String {
    format!("Time: {}", at.format("%H:%M:%S"))
}

/// Run the full pipeline once.
///
/// Captures a photo, stamps both lines onto a copy, and exports through
/// `sink` if one is given. Returns the stamped image alongside the report
/// so callers can persist it elsewhere (e.g. `--out`).
pub fn stamp_photo(
    source: &dyn CaptureSource,
    sink: Option<&dyn ExportSink>,
    style: &TextStyle,
) -> Result<(StampReport, RgbaImage), StampError> {
    let photo = source.capture()?;
    let location_line = format_location_line(photo.fix);
    let time_line = format_time_line(photo.taken_at);

    let stamped = render(&photo.image, &location_line, &time_line, style)?;

    let exported = match sink {
        // Filename comes from the clock at export time, not capture time.
        Some(sink) => Some(sink.export(&stamped, Local::now())?),
        None => None,
    };

    let (width, height) = stamped.dimensions();
    Ok((
        StampReport {
            width,
            height,
            location_line,
            time_line,
            exported,
        },
        stamped,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::tests::MockCapture;
    use crate::export::tests::{MockSink, matches_gallery_pattern};
    use chrono::TimeZone;

    #[test]
    fn location_line_formats_fix() {
        let line = format_location_line(Some(GeoFix {
            lat: 37.7749,
            lon: -122.4194,
        }));
        assert_eq!(line, "Location: 37.7749, -122.4194");
    }

    #[test]
    fn location_line_placeholder_without_fix() {
        assert_eq!(format_location_line(None), "Location: null, null");
    }

    #[test]
    fn time_line_is_wall_clock() {
        let at = Local.with_ymd_and_hms(2024, 6, 1, 14, 5, 30).unwrap();
        assert_eq!(format_time_line(at), "Time: 14:05:30");
    }

    #[test]
    fn pipeline_preserves_dimensions_and_skips_export() {
        let source = MockCapture::solid(640, 480, None);
        let (report, stamped) = stamp_photo(&source, None, &TextStyle::default()).unwrap();
        assert_eq!((report.width, report.height), (640, 480));
        assert_eq!(stamped.dimensions(), (640, 480));
        assert_eq!(report.exported, None);
    }

    #[test]
    fn pipeline_stamps_placeholder_without_fix() {
        let source = MockCapture::solid(320, 240, None);
        let (report, stamped) = stamp_photo(&source, None, &TextStyle::default()).unwrap();
        assert_eq!(report.location_line, "Location: null, null");
        // The placeholder is drawn like any other text.
        assert_ne!(stamped.as_raw(), source.photo.image.as_raw());
    }

    #[test]
    fn pipeline_exports_through_sink() {
        let source = MockCapture::solid(320, 240, Some(GeoFix { lat: 1.0, lon: 2.0 }));
        let sink = MockSink::new();
        let (report, _) = stamp_photo(&source, Some(&sink), &TextStyle::default()).unwrap();

        let exports = sink.exports.lock().unwrap();
        assert_eq!(exports.len(), 1);
        assert_eq!((exports[0].0, exports[0].1), (320, 240));
        assert!(matches_gallery_pattern(&exports[0].2));
        assert!(report.exported.is_some());
    }

    #[test]
    fn pipeline_propagates_capture_errors() {
        struct FailingCapture;
        impl CaptureSource for FailingCapture {
            fn capture(&self) -> Result<crate::capture::Photo, CaptureError> {
                Err(CaptureError::Io(std::io::Error::other("camera gone")))
            }
        }
        let result = stamp_photo(&FailingCapture, None, &TextStyle::default());
        assert!(matches!(result, Err(StampError::Capture(_))));
    }
}
