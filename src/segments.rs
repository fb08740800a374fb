//! Seven-segment naming and per-digit segment tables
//!
//! Segments follow the conventional labeling:
//!
//! ```txt
//!     +- A -+
//!     F     B
//!     +- G -+
//!     E     C
//!     +- D -+
//! ```

/// Number of renderable numerals
pub const DIGIT_COUNT: usize = 10;

/// One of the seven strokes composing a digit glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Segment {
    /// Top bar
    A = 0,
    /// Upper-right vertical
    B = 1,
    /// Lower-right vertical
    C = 2,
    /// Bottom bar
    D = 3,
    /// Lower-left vertical
    E = 4,
    /// Upper-left vertical
    F = 5,
    /// Middle bar
    G = 6,
}

impl Segment {
    /// All seven segments in table order
    pub const ALL: [Self; 7] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
    ];

    /// Index into the geometry and mask tables
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Set of lit segments for one numeral, one bit per segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentMask(u8);

impl SegmentMask {
    /// Build a mask from raw bits (bit 0 = A .. bit 6 = G)
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0x7F)
    }

    /// Check if a segment is lit in this mask
    pub const fn contains(self, segment: Segment) -> bool {
        self.0 & (1 << segment.index()) != 0
    }

    /// Raw bit representation
    pub const fn bits(self) -> u8 {
        self.0
    }
}

const fn mask(bits: u8) -> SegmentMask {
    SegmentMask::from_bits(bits)
}

/// Lit segments per numeral 0-9
///
/// Bit order: `0b_GFEDCBA`.
pub const DIGIT_SEGMENTS: [SegmentMask; DIGIT_COUNT] = [
    mask(0b0111111), // '0' ABCDEF
    mask(0b0000110), // '1' BC
    mask(0b1011011), // '2' ABDEG
    mask(0b1001111), // '3' ABCDG
    mask(0b1100110), // '4' BCFG
    mask(0b1101101), // '5' ACDFG
    mask(0b1111101), // '6' ACDEFG
    mask(0b0000111), // '7' ABC
    mask(0b1111111), // '8' ABCDEFG
    mask(0b1101111), // '9' ABCDFG
];
