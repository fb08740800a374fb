#![no_std]

pub mod color;
pub mod digit;
pub mod face;
pub mod frame_scheduler;
pub mod geometry;
pub mod math8;
pub mod renderer;
pub mod segments;
pub mod transition;

pub use color::{DIGIT_COLORS, Rgb, rgb_from_u32, scale_color};
pub use digit::{DEFAULT_MORPH_DURATION, MorphDigit, MorphError};
pub use face::DigitFace;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use geometry::{
    CELL_HEIGHT, CELL_WIDTH, DOT_DIAMETER, LEDS_PER_SEGMENT, MAX_DOTS_PER_DIGIT, Point,
    SEGMENT_LINES, SegmentLine, segment_line,
};
pub use renderer::{Dot, DotRenderer};
pub use segments::{DIGIT_COUNT, DIGIT_SEGMENTS, Segment, SegmentMask};
pub use transition::ValueTransition;

pub use embassy_time::{Duration, Instant};
pub use math8::ease_in_out_cubic;

/// Abstract dot panel sink trait
///
/// Implement this trait to support different panel backends.
/// Dots arrive in coordinates local to one digit cell; the sink
/// applies any global offset and scale before painting pixels.
pub trait DotSink {
    /// Write one digit slot's dots to the panel
    fn write(&mut self, slot: usize, dots: &[Dot]);
}
