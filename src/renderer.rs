//! Dot emission for one digit cell
//!
//! Translates a digit's per-segment brightness into concrete light
//! points (position + color intensity) for the simulated panel.

use heapless::Vec;

use crate::color::{Rgb, scale_color};
use crate::digit::MorphDigit;
use crate::geometry::{DOT_DIAMETER, Point, segment_line};
use crate::segments::Segment;

/// One simulated LED dot in digit-cell coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    /// Center position within the digit cell
    pub center: Point,
    /// Dot diameter in cell units
    pub diameter: f32,
    /// Digit color scaled by the segment's brightness
    pub color: Rgb,
}

/// Renders a digit's segment brightness into dots
///
/// Holds only a scratch buffer whose contents are regenerated on every
/// call; nothing is cached across frames.
///
/// `MAX_DOTS` must be at least [`crate::geometry::MAX_DOTS_PER_DIGIT`]
/// to fit an all-segments-lit digit.
#[derive(Debug, Default)]
pub struct DotRenderer<const MAX_DOTS: usize> {
    dots: Vec<Dot, MAX_DOTS>,
}

impl<const MAX_DOTS: usize> DotRenderer<MAX_DOTS> {
    pub const fn new() -> Self {
        Self { dots: Vec::new() }
    }

    /// Emit the illuminated dots for one digit's current morph state
    ///
    /// Every segment with non-zero brightness contributes its full run
    /// of evenly spaced dots, colored with the digit color linearly
    /// dimmed by that segment's brightness. Dark segments emit nothing.
    /// Dots past `MAX_DOTS` are dropped rather than panicking.
    pub fn render(&mut self, digit: &MorphDigit) -> &[Dot] {
        self.dots.clear();

        let color = digit.color();
        for segment in Segment::ALL {
            let brightness = digit.segment_brightness(segment);
            if brightness == 0 {
                continue;
            }

            let dimmed = scale_color(color, brightness);
            let line = segment_line(segment);
            for i in 0..line.leds {
                let dot = Dot {
                    center: line.point_at(i),
                    diameter: DOT_DIAMETER,
                    color: dimmed,
                };
                if self.dots.push(dot).is_err() {
                    return &self.dots;
                }
            }
        }

        &self.dots
    }
}
