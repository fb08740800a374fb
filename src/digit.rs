//! Morphing digit state machine
//!
//! Tracks one display slot's transition from a current numeral to a
//! target numeral and exposes per-segment brightness as a pure function
//! of that state. Segments shared by both numerals stay at full
//! intensity for the whole morph; only the set difference fades.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{DIGIT_COLORS, Rgb};
use crate::math8::eased_intensity;
use crate::segments::{DIGIT_COUNT, DIGIT_SEGMENTS, Segment};

/// Default morph duration: sixteen render steps at the default 20 ms frame
pub const DEFAULT_MORPH_DURATION: Duration = Duration::from_millis(800);

/// Error returned for calls that would leave the digit state invalid
///
/// Rejected calls never mutate state; the caller may simply re-issue
/// a corrected call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphError {
    /// Numeral outside 0-9
    InvalidDigit(u8),
    /// Negative frame delta
    InvalidDuration(i64),
}

#[allow(clippy::cast_lossless)]
pub(crate) const fn check_digit(digit: u8) -> Result<(), MorphError> {
    if (digit as usize) < DIGIT_COUNT {
        Ok(())
    } else {
        Err(MorphError::InvalidDigit(digit))
    }
}

/// One digit slot with morphing transition state
#[derive(Debug, Clone)]
pub struct MorphDigit {
    /// Numeral currently (fully or partially) shown
    current: u8,
    /// Numeral being morphed toward
    target: u8,
    /// Total morph duration
    duration: Duration,
    /// Time elapsed since the morph started
    elapsed: Duration,
    /// True while a transition is in flight
    morphing: bool,
}

impl MorphDigit {
    /// Create a new digit slot showing `0`, not morphing
    pub const fn new(morph_duration: Duration) -> Self {
        Self {
            current: 0,
            target: 0,
            duration: morph_duration,
            elapsed: Duration::from_millis(0),
            morphing: false,
        }
    }

    /// Numeral currently shown (authoritative when not morphing)
    pub const fn current(&self) -> u8 {
        self.current
    }

    /// Numeral being morphed toward
    pub const fn target(&self) -> u8 {
        self.target
    }

    /// Check if a transition is in flight
    pub const fn is_morphing(&self) -> bool {
        self.morphing
    }

    /// Raw (pre-easing) morph progress in [0.0, 1.0]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f32 {
        if !self.morphing {
            return 0.0;
        }
        let duration_ms = self.duration.as_millis();
        if duration_ms == 0 || self.elapsed.as_millis() >= duration_ms {
            return 1.0;
        }
        self.elapsed.as_millis() as f32 / duration_ms as f32
    }

    /// Start morphing toward a new numeral
    ///
    /// A no-op when `digit` is already fully shown. Retargeting
    /// mid-flight is allowed: the new target replaces the old one and
    /// the timer restarts, while `current` stays unchanged until the
    /// morph completes.
    pub fn set_target(&mut self, digit: u8) -> Result<(), MorphError> {
        check_digit(digit)?;
        if digit == self.current && !self.morphing {
            return Ok(());
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[MorphDigit.set_target] morphing {} -> {}",
            self.current, digit
        );

        self.target = digit;
        self.elapsed = Duration::from_millis(0);
        self.morphing = true;
        Ok(())
    }

    /// Force a numeral immediately, cancelling any in-flight morph
    ///
    /// Used for initialization and hard resets such as display blanking.
    pub fn set_current(&mut self, digit: u8) -> Result<(), MorphError> {
        check_digit(digit)?;
        self.current = digit;
        self.target = digit;
        self.elapsed = Duration::from_millis(0);
        self.morphing = false;
        Ok(())
    }

    /// Advance the morph by a frame delta in milliseconds
    ///
    /// A zero delta is a valid no-op; a negative delta is rejected
    /// without mutating state. A stalled render loop delivering one very
    /// large delta converges in this single call: progress clamps to 1.0
    /// and the morph completes.
    #[allow(clippy::cast_sign_loss)]
    pub fn update(&mut self, delta_ms: i64) -> Result<(), MorphError> {
        if delta_ms < 0 {
            return Err(MorphError::InvalidDuration(delta_ms));
        }
        if !self.morphing {
            return Ok(());
        }

        self.elapsed += Duration::from_millis(delta_ms as u64);
        if self.elapsed.as_millis() >= self.duration.as_millis() {
            self.current = self.target;
            self.elapsed = Duration::from_millis(0);
            self.morphing = false;
        }
        Ok(())
    }

    /// Brightness (0-255) of one segment for the present morph state
    ///
    /// Pure query. Segments lit in both the current and target numeral
    /// hold full brightness; segments leaving fade out with the eased
    /// progress, segments arriving fade in with it, and segments in
    /// neither mask stay dark.
    pub fn segment_brightness(&self, segment: Segment) -> u8 {
        let in_current = DIGIT_SEGMENTS[usize::from(self.current)].contains(segment);
        if !self.morphing {
            return if in_current { 255 } else { 0 };
        }

        let in_target = DIGIT_SEGMENTS[usize::from(self.target)].contains(segment);
        match (in_current, in_target) {
            (true, true) => 255,
            (true, false) => 255 - eased_intensity(self.progress()),
            (false, true) => eased_intensity(self.progress()),
            (false, false) => 0,
        }
    }

    /// Fixed color of the currently shown numeral
    #[allow(clippy::cast_lossless)]
    pub const fn color(&self) -> Rgb {
        DIGIT_COLORS[self.current as usize]
    }
}

impl Default for MorphDigit {
    fn default() -> Self {
        Self::new(DEFAULT_MORPH_DURATION)
    }
}
