//! Multi-slot digit face
//!
//! A clock face is a row of independent digit cells (e.g. six slots for
//! HH:MM:SS). The face fans caller-supplied numerals and frame deltas
//! out to each slot; slot placement on the panel is the sink's concern.

use embassy_time::Duration;

use crate::digit::{MorphDigit, MorphError, check_digit};

/// Fixed row of morphing digit slots
#[derive(Debug, Clone)]
pub struct DigitFace<const SLOTS: usize> {
    digits: [MorphDigit; SLOTS],
}

impl<const SLOTS: usize> DigitFace<SLOTS> {
    /// Create a face with every slot showing `0`
    pub fn new(morph_duration: Duration) -> Self {
        Self {
            digits: core::array::from_fn(|_| MorphDigit::new(morph_duration)),
        }
    }

    /// Morph each slot toward the given numerals
    ///
    /// Slots already showing their numeral are left untouched. All
    /// values are validated before any slot is mutated, so a rejected
    /// call leaves the whole face unchanged.
    pub fn set_value(&mut self, value: &[u8; SLOTS]) -> Result<(), MorphError> {
        for &digit in value {
            check_digit(digit)?;
        }
        for (slot, &digit) in self.digits.iter_mut().zip(value) {
            slot.set_target(digit)?;
        }
        Ok(())
    }

    /// Force each slot to a numeral immediately, cancelling morphs
    ///
    /// Hard reset path (startup, display blanking). Validates all
    /// values before mutating any slot.
    pub fn force(&mut self, value: &[u8; SLOTS]) -> Result<(), MorphError> {
        for &digit in value {
            check_digit(digit)?;
        }
        for (slot, &digit) in self.digits.iter_mut().zip(value) {
            slot.set_current(digit)?;
        }
        Ok(())
    }

    /// Advance every slot's morph by a frame delta in milliseconds
    pub fn update(&mut self, delta_ms: i64) -> Result<(), MorphError> {
        if delta_ms < 0 {
            return Err(MorphError::InvalidDuration(delta_ms));
        }
        for slot in &mut self.digits {
            slot.update(delta_ms)?;
        }
        Ok(())
    }

    /// Check if any slot is mid-morph
    pub fn is_morphing(&self) -> bool {
        self.digits.iter().any(MorphDigit::is_morphing)
    }

    /// Number of slots
    pub const fn slots(&self) -> usize {
        SLOTS
    }

    /// One slot's digit
    pub fn digit(&self, slot: usize) -> &MorphDigit {
        &self.digits[slot]
    }

    /// One slot's digit, mutable
    pub fn digit_mut(&mut self, slot: usize) -> &mut MorphDigit {
        &mut self.digits[slot]
    }
}
