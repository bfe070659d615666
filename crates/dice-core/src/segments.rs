//! 7-segment patterns — the legal output alphabet for the shared segment
//! bus: the encodings of digits 0–9 plus the blank pattern, nothing else.

/// Lit-segment pattern for one digit position, pre-polarity.
///
/// Bit layout, bit 0..=6 = segment a..=g:
///
/// ```text
///      +- a -+
///      f     b
///      +- g -+
///      e     c
///      +- d -+
/// ```
///
/// A set bit means "segment lit"; the electrical level per line comes from
/// [`PolarityConfig::segment_level`](crate::PolarityConfig::segment_level).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct SegmentPattern(u8);

impl SegmentPattern {
    /// No segment lit.
    pub const BLANK: SegmentPattern = SegmentPattern(0);

    /// The pattern for a decimal digit. Anything above 9 maps to blank;
    /// the counter's BCD fields cannot produce such a value.
    #[must_use]
    pub const fn for_digit(digit: u8) -> SegmentPattern {
        SegmentPattern(match digit {
            0 => 0b011_1111,
            1 => 0b000_0110,
            2 => 0b101_1011,
            3 => 0b100_1111,
            4 => 0b110_0110,
            5 => 0b110_1101,
            6 => 0b111_1101,
            7 => 0b000_0111,
            8 => 0b111_1111,
            9 => 0b110_1111,
            _ => 0,
        })
    }

    /// Wrap raw lit bits. Used by the multiplexer to normalize a frame's
    /// electrical levels back into a pattern; bits above the seven segment
    /// lines are masked.
    pub(crate) const fn from_lit_bits(bits: u8) -> SegmentPattern {
        SegmentPattern(bits & 0x7f)
    }

    /// The raw lit-segment bits (bit 0..=6 = a..=g).
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Reverse lookup: which digit this pattern encodes, if any.
    #[must_use]
    pub fn digit(self) -> Option<u8> {
        (0..=9).find(|d| SegmentPattern::for_digit(*d) == self)
    }

    /// True if the pattern belongs to the legal alphabet (a digit or blank).
    #[must_use]
    pub fn is_valid(self) -> bool {
        self == SegmentPattern::BLANK || self.digit().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::SegmentPattern;

    #[test]
    fn test_digit_patterns_are_distinct() {
        for a in 0..=9u8 {
            for b in 0..=9u8 {
                if a != b {
                    assert_ne!(
                        SegmentPattern::for_digit(a),
                        SegmentPattern::for_digit(b),
                        "patterns for {a} and {b} collide"
                    );
                }
            }
        }
    }

    #[test]
    fn test_no_digit_pattern_is_blank() {
        for d in 0..=9u8 {
            assert_ne!(SegmentPattern::for_digit(d), SegmentPattern::BLANK);
        }
    }

    #[test]
    fn test_reverse_lookup_round_trips() {
        for d in 0..=9u8 {
            assert_eq!(SegmentPattern::for_digit(d).digit(), Some(d));
        }
        assert_eq!(SegmentPattern::BLANK.digit(), None);
    }

    #[test]
    fn test_alphabet_membership() {
        assert!(SegmentPattern::BLANK.is_valid());
        for d in 0..=9u8 {
            assert!(SegmentPattern::for_digit(d).is_valid());
        }
        // An arbitrary junk pattern is outside the alphabet.
        assert!(!SegmentPattern(0b010_1010).is_valid());
    }

    #[test]
    fn test_out_of_range_digit_maps_to_blank() {
        assert_eq!(SegmentPattern::for_digit(14), SegmentPattern::BLANK);
        assert_eq!(SegmentPattern::for_digit(255), SegmentPattern::BLANK);
    }
}
