//! Display multiplexer — time-shares one set of segment lines between the
//! tens and units digits, one phase per fast clock cycle.
//!
//! The rotation is `Units → gap → Tens → gap`. The gap phases guarantee
//! break-before-make on the digit enables: the previous digit's enable is
//! deasserted for a full fast cycle before the next asserts, so no
//! intermediate digit/enable combination ever appears on the lines. The
//! phase counter keeps advancing while blanked so the display resumes
//! immediately.

use crate::config::PolarityConfig;
use crate::counter::BcdPair;
use crate::segments::SegmentPattern;

/// One fast cycle's output: segment bus and digit enables, all lines
/// already transformed to electrical levels by the polarity configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayFrame {
    /// Electrical levels of the seven segment lines (bit 0..=6 = a..=g).
    pub segments: u8,
    /// Electrical level of the tens digit-enable line.
    pub tens_enable: bool,
    /// Electrical level of the units digit-enable line.
    pub units_enable: bool,
}

impl DisplayFrame {
    /// A fully blanked frame under the given polarity.
    #[must_use]
    pub const fn blank(cfg: PolarityConfig) -> Self {
        Self {
            segments: segment_levels(SegmentPattern::BLANK, cfg),
            tens_enable: cfg.enable_level(false),
            units_enable: cfg.enable_level(false),
        }
    }

    /// True if the tens digit is logically selected.
    #[must_use]
    pub const fn tens_active(self, cfg: PolarityConfig) -> bool {
        self.tens_enable == cfg.enable_level(true)
    }

    /// True if the units digit is logically selected.
    #[must_use]
    pub const fn units_active(self, cfg: PolarityConfig) -> bool {
        self.units_enable == cfg.enable_level(true)
    }

    /// True if neither digit is selected.
    #[must_use]
    pub const fn is_blank(self, cfg: PolarityConfig) -> bool {
        !self.tens_active(cfg) && !self.units_active(cfg)
    }

    /// The lit-segment pattern, normalized back from electrical levels.
    #[must_use]
    pub const fn lit_segments(self, cfg: PolarityConfig) -> SegmentPattern {
        if cfg.segments_active_high {
            SegmentPattern::from_lit_bits(self.segments)
        } else {
            SegmentPattern::from_lit_bits(!self.segments & 0x7f)
        }
    }
}

/// Segment electrical levels for a lit pattern under the given polarity.
const fn segment_levels(pattern: SegmentPattern, cfg: PolarityConfig) -> u8 {
    if cfg.segments_active_high {
        pattern.bits()
    } else {
        !pattern.bits() & 0x7f
    }
}

/// Rotation phase, one per fast cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Phase {
    Units,
    GapBeforeTens,
    Tens,
    GapBeforeUnits,
}

impl Phase {
    const fn next(self) -> Phase {
        match self {
            Phase::Units => Phase::GapBeforeTens,
            Phase::GapBeforeTens => Phase::Tens,
            Phase::Tens => Phase::GapBeforeUnits,
            Phase::GapBeforeUnits => Phase::Units,
        }
    }
}

/// Time-shares the segment bus between the two digits.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayMultiplexer {
    phase: Phase,
}

impl DisplayMultiplexer {
    /// Reset state: rotation starts at the units digit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: Phase::Units,
        }
    }

    /// Produce one fast cycle's frame and advance the rotation.
    ///
    /// `blank` is the full-blank override (raw button pressed, or the
    /// inactivity timeout expired); it forces both enables inactive but the
    /// rotation still advances underneath. During the tens phase a zero
    /// tens digit drives no enable (leading-zero blanking) while the
    /// rotation keeps clocking.
    pub fn step(&mut self, blank: bool, value: BcdPair, cfg: PolarityConfig) -> DisplayFrame {
        let phase = self.phase;
        self.phase = phase.next();

        if blank {
            return DisplayFrame::blank(cfg);
        }

        match phase {
            Phase::Units => DisplayFrame {
                segments: segment_levels(SegmentPattern::for_digit(value.units()), cfg),
                tens_enable: cfg.enable_level(false),
                units_enable: cfg.enable_level(true),
            },
            Phase::Tens if value.tens() != 0 => DisplayFrame {
                segments: segment_levels(SegmentPattern::for_digit(value.tens()), cfg),
                tens_enable: cfg.enable_level(true),
                units_enable: cfg.enable_level(false),
            },
            Phase::Tens | Phase::GapBeforeTens | Phase::GapBeforeUnits => {
                DisplayFrame::blank(cfg)
            }
        }
    }
}

impl Default for DisplayMultiplexer {
    fn default() -> Self {
        Self::new()
    }
}
