//! Pure anchor math for annotation placement.
//!
//! All functions here are pure and testable without fonts or images. The
//! renderer measures each text line, asks this module where the lines go,
//! then rasterizes at the returned anchors.

/// Measured pixel bounding box of a text line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBox {
    pub width: u32,
    pub height: u32,
}

/// Top-left corner where a text line is drawn.
///
/// Coordinates are signed: a line wider than the image gets a negative `x`
/// and is clipped on the left. That is accepted behavior, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub x: i64,
    pub y: i64,
}

/// Computed anchors for the two annotation lines.
///
/// `None` means the line measured empty and is skipped entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Bottom line (location text).
    pub location: Option<Anchor>,
    /// Line stacked above the location line (time text).
    pub time: Option<Anchor>,
}

/// Place the two annotation lines in the bottom-right corner of an image.
///
/// Both lines are right-aligned `margin` pixels off the right edge. The
/// location line sits `margin` pixels off the bottom edge; the time line is
/// stacked above it with a vertical gap of exactly `spacing` pixels. An
/// empty location line still reserves no height, so the time line drops to
/// `margin + spacing` off the bottom.
///
/// # Examples
/// ```
/// # use geostamp::annotate::layout::{place_lines, Anchor, TextBox};
/// let p = place_lines(
///     (1000, 800),
///     Some(TextBox { width: 200, height: 10 }),
///     Some(TextBox { width: 120, height: 10 }),
///     20,
///     20,
/// );
/// // Location: 20px off right and bottom edges.
/// assert_eq!(p.location, Some(Anchor { x: 780, y: 770 }));
/// // Time: right-aligned independently, 20px above the location line.
/// assert_eq!(p.time, Some(Anchor { x: 860, y: 740 }));
/// ```
pub fn place_lines(
    image: (u32, u32),
    location: Option<TextBox>,
    time: Option<TextBox>,
    margin: u32,
    spacing: u32,
) -> Placement {
    let (img_w, img_h) = (image.0 as i64, image.1 as i64);
    let (margin, spacing) = (margin as i64, spacing as i64);

    let location_anchor = location.map(|b| Anchor {
        x: img_w - margin - b.width as i64,
        y: img_h - margin - b.height as i64,
    });

    let location_height = location.map_or(0, |b| b.height as i64);
    let time_anchor = time.map(|b| Anchor {
        x: img_w - margin - b.width as i64,
        y: img_h - margin - location_height - spacing - b.height as i64,
    });

    Placement {
        location: location_anchor,
        time: time_anchor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOC: TextBox = TextBox {
        width: 200,
        height: 12,
    };
    const TIME: TextBox = TextBox {
        width: 120,
        height: 12,
    };

    #[test]
    fn location_sits_margin_off_bottom_right() {
        let p = place_lines((1000, 800), Some(LOC), Some(TIME), 20, 20);
        assert_eq!(p.location, Some(Anchor { x: 780, y: 768 }));
    }

    #[test]
    fn time_stacks_above_location_with_spacing() {
        let p = place_lines((1000, 800), Some(LOC), Some(TIME), 20, 20);
        let loc = p.location.unwrap();
        let time = p.time.unwrap();
        // Gap between the time line's bottom edge and the location line's
        // top edge is exactly the configured spacing.
        assert_eq!(loc.y - (time.y + TIME.height as i64), 20);
    }

    #[test]
    fn lines_never_overlap() {
        for (img_w, img_h) in [(1080, 1920), (100, 100), (4000, 3000)] {
            for loc_w in [10, 500, 5000] {
                let loc = TextBox {
                    width: loc_w,
                    height: 14,
                };
                let p = place_lines((img_w, img_h), Some(loc), Some(TIME), 20, 20);
                let (l, t) = (p.location.unwrap(), p.time.unwrap());
                assert!(t.y + TIME.height as i64 <= l.y - 20);
            }
        }
    }

    #[test]
    fn lines_right_aligned_independently() {
        let p = place_lines((1000, 800), Some(LOC), Some(TIME), 20, 20);
        assert_eq!(p.location.unwrap().x + LOC.width as i64, 980);
        assert_eq!(p.time.unwrap().x + TIME.width as i64, 980);
    }

    #[test]
    fn oversized_line_goes_negative() {
        // Text wider than the image: anchor goes negative, clipped on the
        // left. Not an error.
        let wide = TextBox {
            width: 600,
            height: 12,
        };
        let p = place_lines((400, 300), Some(wide), None, 20, 20);
        assert_eq!(p.location.unwrap().x, -220);
    }

    #[test]
    fn empty_location_skipped_time_drops_down() {
        let p = place_lines((1000, 800), None, Some(TIME), 20, 20);
        assert_eq!(p.location, None);
        // Time keeps the spacing but reserves no height for the missing
        // location line.
        assert_eq!(p.time, Some(Anchor { x: 860, y: 748 }));
    }

    #[test]
    fn both_empty_places_nothing() {
        let p = place_lines((1000, 800), None, None, 20, 20);
        assert_eq!(p.location, None);
        assert_eq!(p.time, None);
    }

    #[test]
    fn custom_margin_and_spacing() {
        let p = place_lines((1000, 800), Some(LOC), Some(TIME), 50, 10);
        assert_eq!(p.location, Some(Anchor { x: 750, y: 738 }));
        assert_eq!(p.time, Some(Anchor { x: 830, y: 716 }));
    }
}
