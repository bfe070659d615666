//! Button inputs — the seven die-select buttons, their raw electrical
//! levels, and the polarity-normalized pressed set.

use crate::config::PolarityConfig;

/// Mask covering the seven button bit positions.
const BUTTON_MASK: u8 = 0x7f;

/// The seven dice selectable from the front panel.
///
/// The declaration order fixes each button's bit position in
/// [`ButtonLevels`] and [`PressedSet`], and is also the priority order when
/// more than one button reads pressed (lowest wins, see
/// [`PressedSet::active_die`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DieSize {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Hundred-sided (percentile) die.
    D100,
}

impl DieSize {
    /// All dice in bit/priority order.
    pub const ALL: [DieSize; 7] = [
        DieSize::D4,
        DieSize::D6,
        DieSize::D8,
        DieSize::D10,
        DieSize::D12,
        DieSize::D20,
        DieSize::D100,
    ];

    /// Number of faces, i.e. the roll period in slow ticks.
    #[must_use]
    pub const fn faces(self) -> u8 {
        match self {
            DieSize::D4 => 4,
            DieSize::D6 => 6,
            DieSize::D8 => 8,
            DieSize::D10 => 10,
            DieSize::D12 => 12,
            DieSize::D20 => 20,
            DieSize::D100 => 100,
        }
    }

    /// Look up a die by its face count.
    #[must_use]
    pub fn from_faces(faces: u8) -> Option<DieSize> {
        DieSize::ALL.iter().copied().find(|d| d.faces() == faces)
    }

    /// Bit position of this die's button in the level/pressed sets.
    pub(crate) const fn bit(self) -> u8 {
        match self {
            DieSize::D4 => 1 << 0,
            DieSize::D6 => 1 << 1,
            DieSize::D8 => 1 << 2,
            DieSize::D10 => 1 << 3,
            DieSize::D12 => 1 << 4,
            DieSize::D20 => 1 << 5,
            DieSize::D100 => 1 << 6,
        }
    }
}

/// Raw electrical levels of the seven button inputs, one bit per button.
///
/// A set bit is a high level; whether that means "pressed" depends on
/// [`PolarityConfig::buttons_active_high`]. This is the per-cycle input to
/// [`DiceController::clock`](crate::DiceController::clock).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonLevels(u8);

impl ButtonLevels {
    /// Build from a raw bit pattern. Bits above the seven buttons are masked.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & BUTTON_MASK)
    }

    /// The raw bit pattern.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Copy with one button's level replaced.
    #[must_use]
    pub const fn with_level(self, die: DieSize, high: bool) -> Self {
        if high {
            Self(self.0 | die.bit())
        } else {
            Self(self.0 & !die.bit())
        }
    }

    /// Electrical level currently on one button input.
    #[must_use]
    pub const fn level(self, die: DieSize) -> bool {
        self.0 & die.bit() != 0
    }
}

/// The set of logically pressed buttons, polarity already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressedSet(u8);

impl PressedSet {
    /// The empty set: no button pressed.
    pub const NONE: PressedSet = PressedSet(0);

    /// Normalize raw levels against the configured button polarity.
    #[must_use]
    pub const fn from_levels(levels: ButtonLevels, cfg: PolarityConfig) -> Self {
        if cfg.buttons_active_high {
            Self(levels.bits())
        } else {
            Self(!levels.bits() & BUTTON_MASK)
        }
    }

    /// True if any button is pressed.
    #[must_use]
    pub const fn any(self) -> bool {
        self.0 != 0
    }

    /// True if this specific button is pressed.
    #[must_use]
    pub const fn contains(self, die: DieSize) -> bool {
        self.0 & die.bit() != 0
    }

    /// The die whose button is pressed.
    ///
    /// When several buttons read pressed at once the lowest-indexed one wins
    /// (D4 before D6 before … D100) — a deterministic tie-break; the
    /// hardware this models leaves simultaneous presses unspecified.
    #[must_use]
    pub fn active_die(self) -> Option<DieSize> {
        DieSize::ALL.iter().copied().find(|d| self.contains(*d))
    }

    /// The active roll period: the pressed die's face count, or 1 when no
    /// button is pressed.
    #[must_use]
    pub fn active_period(self) -> u8 {
        self.active_die().map_or(1, DieSize::faces)
    }
}
