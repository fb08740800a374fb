//! Fixed segment layout within one digit cell
//!
//! Coordinates are local to a single digit's display cell with the
//! origin at the top-left corner, x growing right and y growing down.
//! The panel writer applies any global offset and scale.

use crate::segments::Segment;

/// Cell width in local units (dots land on x = 0..=6)
pub const CELL_WIDTH: f32 = 7.0;

/// Cell height in local units (dots land on y = 0..=12)
pub const CELL_HEIGHT: f32 = 13.0;

/// Diameter of one simulated LED dot, in local units
pub const DOT_DIAMETER: f32 = 0.8;

/// Simulated LEDs along each segment
pub const LEDS_PER_SEGMENT: u8 = 5;

/// Upper bound on dots one digit can emit (all seven segments lit)
pub const MAX_DOTS_PER_DIGIT: usize = 7 * LEDS_PER_SEGMENT as usize;

/// A point in digit-cell coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One segment's light strip: a straight run of evenly spaced LEDs
#[derive(Debug, Clone, Copy)]
pub struct SegmentLine {
    /// First LED position
    pub start: Point,
    /// Last LED position
    pub end: Point,
    /// Number of LEDs along the run
    pub leds: u8,
}

impl SegmentLine {
    pub const fn new(start: Point, end: Point, leds: u8) -> Self {
        Self { start, end, leds }
    }

    /// Position of the `i`-th LED on this line
    ///
    /// LEDs are spaced evenly and include both endpoints. A single-LED
    /// line places its one dot at the midpoint.
    #[allow(clippy::cast_lossless)]
    pub fn point_at(&self, i: u8) -> Point {
        if self.leds <= 1 {
            return Point::new(
                (self.start.x + self.end.x) / 2.0,
                (self.start.y + self.end.y) / 2.0,
            );
        }
        let t = i as f32 / (self.leds - 1) as f32;
        Point::new(
            self.start.x + (self.end.x - self.start.x) * t,
            self.start.y + (self.end.y - self.start.y) * t,
        )
    }
}

const fn line(x0: f32, y0: f32, x1: f32, y1: f32) -> SegmentLine {
    SegmentLine::new(Point::new(x0, y0), Point::new(x1, y1), LEDS_PER_SEGMENT)
}

/// Segment light strips, indexed by [`Segment::index`]
///
/// Horizontal bars sit at y = 0, 6 and 12; verticals at x = 0 and 6.
pub const SEGMENT_LINES: [SegmentLine; 7] = [
    line(1.0, 0.0, 5.0, 0.0),   // A
    line(6.0, 1.0, 6.0, 5.0),   // B
    line(6.0, 7.0, 6.0, 11.0),  // C
    line(1.0, 12.0, 5.0, 12.0), // D
    line(0.0, 7.0, 0.0, 11.0),  // E
    line(0.0, 1.0, 0.0, 5.0),   // F
    line(1.0, 6.0, 5.0, 6.0),   // G
];

/// Light strip for one segment
pub const fn segment_line(segment: Segment) -> SegmentLine {
    SEGMENT_LINES[segment.index()]
}
