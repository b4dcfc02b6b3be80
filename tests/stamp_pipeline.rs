//! End-to-end pipeline tests: decode a real file, stamp it, export it, and
//! decode the exported JPEG again.

use geostamp::annotate::TextStyle;
use geostamp::capture::{CaptureSource, FileCapture, GeoFix};
use geostamp::export::GalleryDir;
use geostamp::stamp::stamp_photo;
use image::ImageEncoder;
use std::path::Path;

/// Write a small valid JPEG with the given dimensions.
fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// `IMG_\d{8}_\d{6}\.jpg`
fn is_gallery_name(name: &str) -> bool {
    let Some(stem) = name
        .strip_prefix("IMG_")
        .and_then(|r| r.strip_suffix(".jpg"))
    else {
        return false;
    };
    let parts: Vec<&str> = stem.split('_').collect();
    parts.len() == 2
        && parts[0].len() == 8
        && parts[1].len() == 6
        && parts.iter().all(|p| p.bytes().all(|b| b.is_ascii_digit()))
}

#[test]
fn stamp_and_export_roundtrip() {
    let tmp = tempfile::TempDir::new().unwrap();
    let shot = tmp.path().join("shot.jpg");
    create_test_jpeg(&shot, 480, 360);

    let source = FileCapture::new(
        &shot,
        Some(GeoFix {
            lat: 37.7749,
            lon: -122.4194,
        }),
    );
    let gallery = GalleryDir::new(tmp.path().join("Pictures"));

    let (report, stamped) = stamp_photo(&source, Some(&gallery), &TextStyle::default()).unwrap();

    assert_eq!((report.width, report.height), (480, 360));
    assert_eq!(stamped.dimensions(), (480, 360));
    assert_eq!(report.location_line, "Location: 37.7749, -122.4194");
    assert!(report.time_line.starts_with("Time: "));

    let exported = report.exported.expect("sink was supplied");
    assert!(exported.starts_with(tmp.path().join("Pictures")));
    assert!(is_gallery_name(
        exported.file_name().unwrap().to_str().unwrap()
    ));

    // The exported JPEG decodes back to the same dimensions.
    let reloaded = image::open(&exported).unwrap();
    assert_eq!((reloaded.width(), reloaded.height()), (480, 360));
}

#[test]
fn stamp_without_fix_uses_placeholder() {
    let tmp = tempfile::TempDir::new().unwrap();
    let shot = tmp.path().join("shot.jpg");
    create_test_jpeg(&shot, 320, 240);

    let source = FileCapture::new(&shot, None);
    let (report, stamped) = stamp_photo(&source, None, &TextStyle::default()).unwrap();

    assert_eq!(report.location_line, "Location: null, null");
    assert_eq!(report.exported, None);

    // Placeholder text is drawn like any other: pixels change.
    let original = source.capture().unwrap().image;
    assert_ne!(stamped.as_raw(), original.as_raw());
}

#[test]
fn stamped_pixels_stay_in_bottom_right_band() {
    let tmp = tempfile::TempDir::new().unwrap();
    let shot = tmp.path().join("shot.jpg");
    create_test_jpeg(&shot, 1080, 1920);

    let source = FileCapture::new(
        &shot,
        Some(GeoFix {
            lat: 37.7749,
            lon: -122.4194,
        }),
    );
    let (_, stamped) = stamp_photo(&source, None, &TextStyle::default()).unwrap();
    let original = source.capture().unwrap().image;

    for (x, y, px) in stamped.enumerate_pixels() {
        if px != original.get_pixel(x, y) {
            // Everything the stamp touched is within 80px of the
            // bottom-right corner for the default 8px style.
            assert!(x < 1080 - 20 + 1, "changed pixel at x={x}");
            assert!(y > 1920 - 80, "changed pixel at y={y}");
        }
    }
}

#[test]
fn exports_accumulate_in_gallery() {
    let tmp = tempfile::TempDir::new().unwrap();
    let shot = tmp.path().join("shot.jpg");
    create_test_jpeg(&shot, 64, 64);

    let source = FileCapture::new(&shot, None);
    let gallery_dir = tmp.path().join("Pictures");
    let gallery = GalleryDir::new(&gallery_dir);

    stamp_photo(&source, Some(&gallery), &TextStyle::default()).unwrap();

    let entries: Vec<_> = std::fs::read_dir(&gallery_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries.len(), 1);
    assert!(is_gallery_name(&entries[0]));
}
