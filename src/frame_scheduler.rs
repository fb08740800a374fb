//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific
//! timers. The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::DotSink;
use crate::color::scale_color;
use crate::digit::MorphError;
use crate::face::DigitFace;
use crate::renderer::{Dot, DotRenderer};
use crate::transition::ValueTransition;

/// Default target frame rate (50 FPS).
pub const DEFAULT_FPS: u32 = 50;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that drives a digit face.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Advances every slot's morph by the measured frame delta
/// - Renders each slot and writes its dots to the sink
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(face, sink);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now))?;
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<S: DotSink, const SLOTS: usize, const MAX_DOTS: usize> {
    sink: S,
    face: DigitFace<SLOTS>,
    renderer: DotRenderer<MAX_DOTS>,
    /// Panel-wide dimmer, faded smoothly (night mode)
    dimmer: ValueTransition<u8>,
    next_frame: Instant,
    last_tick: Instant,
    frame_duration: Duration,
}

impl<S: DotSink, const SLOTS: usize, const MAX_DOTS: usize> FrameScheduler<S, SLOTS, MAX_DOTS> {
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (50 FPS) for frame timing.
    pub fn new(face: DigitFace<SLOTS>, sink: S) -> Self {
        Self::with_frame_duration(face, sink, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(face: DigitFace<SLOTS>, sink: S, frame_duration: Duration) -> Self {
        Self {
            sink,
            face,
            renderer: DotRenderer::new(),
            dimmer: ValueTransition::new_u8(255),
            next_frame: Instant::from_millis(0),
            last_tick: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Fade the panel-wide brightness to a new level.
    pub fn set_brightness(&mut self, brightness: u8, fade: Duration, now: Instant) {
        #[cfg(feature = "esp32-log")]
        println!("[FrameScheduler.set_brightness] fading to {}", brightness);
        self.dimmer.set(brightness, fade, now);
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Advances every slot's morph by the time since the last tick
    /// 3. Renders each slot and writes its dots to the sink
    /// 4. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again. A stalled loop is safe: morphs clamp their
    /// progress and converge within this single call.
    #[allow(clippy::cast_possible_wrap)]
    pub fn tick(&mut self, now: Instant) -> Result<FrameResult, MorphError> {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        // Advance morphs by the measured delta
        let delta_ms = now.as_millis().saturating_sub(self.last_tick.as_millis()) as i64;
        self.last_tick = now;
        self.face.update(delta_ms)?;

        // Render and output, slot by slot
        self.dimmer.tick(now);
        let dimmer = self.dimmer.current();
        for slot in 0..SLOTS {
            let dots = self.renderer.render(self.face.digit(slot));
            if dimmer == 255 {
                self.sink.write(slot, dots);
            } else {
                let mut dimmed: heapless::Vec<Dot, MAX_DOTS> = heapless::Vec::new();
                for dot in dots {
                    let mut dot = *dot;
                    dot.color = scale_color(dot.color, dimmer);
                    // Capacity matches the renderer's, push cannot fail
                    let _ = dimmed.push(dot);
                }
                self.sink.write(slot, &dimmed);
            }
        }

        // Calculate next frame deadline
        self.next_frame += self.frame_duration;

        // Calculate sleep duration (may be zero if we're behind)
        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        Ok(FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        })
    }

    /// Get a reference to the digit face.
    pub fn face(&self) -> &DigitFace<SLOTS> {
        &self.face
    }

    /// Get a mutable reference to the digit face.
    pub fn face_mut(&mut self) -> &mut DigitFace<SLOTS> {
        &mut self.face
    }

    /// Get a reference to the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the scheduler, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
