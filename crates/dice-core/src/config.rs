//! Polarity configuration — three independent active-level flags decoded
//! from one 3-bit value, latched once at reset.

/// Active-level configuration for buttons, segment lines and digit enables.
///
/// Decoded from the 3-bit strap value sampled at reset:
/// bit 0 = buttons active high, bit 1 = segments active high,
/// bit 2 = digit enables active high. A clear bit means active low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PolarityConfig {
    /// A high electrical level on a button input means "pressed".
    pub buttons_active_high: bool,
    /// A high electrical level on a segment line lights the segment.
    pub segments_active_high: bool,
    /// A high electrical level on a digit-enable line selects the digit.
    pub digit_enable_active_high: bool,
}

impl PolarityConfig {
    /// Strap bit selecting active-high buttons.
    pub const BUTTONS_ACTIVE_HIGH: u8 = 1 << 0;
    /// Strap bit selecting active-high segment outputs.
    pub const SEGMENTS_ACTIVE_HIGH: u8 = 1 << 1;
    /// Strap bit selecting active-high digit-enable outputs.
    pub const DIGIT_ENABLE_ACTIVE_HIGH: u8 = 1 << 2;

    /// Decode the 3-bit strap value. Bits above bit 2 are ignored.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            buttons_active_high: bits & Self::BUTTONS_ACTIVE_HIGH != 0,
            segments_active_high: bits & Self::SEGMENTS_ACTIVE_HIGH != 0,
            digit_enable_active_high: bits & Self::DIGIT_ENABLE_ACTIVE_HIGH != 0,
        }
    }

    /// Electrical level that drives a segment in the given logical state.
    #[must_use]
    pub const fn segment_level(self, lit: bool) -> bool {
        lit == self.segments_active_high
    }

    /// Electrical level that drives a digit enable in the given logical state.
    #[must_use]
    pub const fn enable_level(self, active: bool) -> bool {
        active == self.digit_enable_active_high
    }
}
