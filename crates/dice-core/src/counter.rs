//! The roll counter — a wrap-around BCD down-counter holding the displayed
//! value as two independent decimal digit fields.
//!
//! Values 1..=100 are encoded in two 4-bit-style fields; 100 itself is the
//! pair `(0, 0)`, which makes the digit arithmetic uniform: a borrow
//! decrement of `(0, 0)` lands on `(9, 9)` = 99, exactly the step the d100
//! countdown needs.

use crate::buttons::DieSize;

/// Error returned when a value is out of the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRangeError {
    /// The value that was out of range.
    pub value: u32,
    /// The inclusive minimum allowed value.
    pub min: u32,
    /// The inclusive maximum allowed value.
    pub max: u32,
}

/// A two-digit BCD value encoding an integer in 1..=100.
///
/// Both fields hold a decimal digit 0..=9. The pair `(0, 1)` is the value 1;
/// `(9, 9)` is 99; `(0, 0)` encodes 100 so that the full d100 sequence
/// `100, 99, …, 1` stays representable in two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BcdPair {
    tens: u8,
    units: u8,
}

impl BcdPair {
    /// The value 1, i.e. the reset value of the roll counter.
    pub const ONE: BcdPair = BcdPair { tens: 0, units: 1 };

    /// Encode an integer in 1..=100.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] for 0 or anything above 100.
    pub fn from_value(value: u8) -> Result<Self, OutOfRangeError> {
        if value == 0 || value > 100 {
            return Err(OutOfRangeError {
                value: u32::from(value),
                min: 1,
                max: 100,
            });
        }
        if value == 100 {
            return Ok(BcdPair { tens: 0, units: 0 });
        }
        // value is 1..=99 here, so both digits stay in 0..=9.
        #[allow(clippy::arithmetic_side_effects)]
        let pair = BcdPair {
            tens: value / 10,
            units: value % 10,
        };
        Ok(pair)
    }

    /// The full-period pair for a die: its face count, 100 as `(0, 0)`.
    pub(crate) fn for_die(die: DieSize) -> Self {
        // faces() is always 1..=100, so the range check cannot fail.
        Self::from_value(die.faces()).unwrap_or(Self::ONE)
    }

    /// The tens digit, 0..=9.
    #[must_use]
    pub const fn tens(self) -> u8 {
        self.tens
    }

    /// The units digit, 0..=9.
    #[must_use]
    pub const fn units(self) -> u8 {
        self.units
    }

    /// Decode back to an integer in 1..=100.
    // Digits are 0..=9, so the sum is at most 99.
    #[allow(clippy::arithmetic_side_effects)]
    #[must_use]
    pub const fn value(self) -> u8 {
        if self.tens == 0 && self.units == 0 {
            100
        } else {
            self.tens * 10 + self.units
        }
    }

    /// Digit-wise decrement with borrow; both digits wrap 0 → 9.
    ///
    /// `(0, 0)` (= 100) becomes `(9, 9)` (= 99), which is precisely the
    /// countdown step; the counter never decrements through `(0, 1)` because
    /// the wrap-load to the active period happens there instead.
    pub(crate) fn decremented(self) -> Self {
        match self.units.checked_sub(1) {
            Some(units) => BcdPair {
                tens: self.tens,
                units,
            },
            None => BcdPair {
                tens: self.tens.checked_sub(1).unwrap_or(9),
                units: 9,
            },
        }
    }
}

/// The free-running wrap-around down-counter.
///
/// Two logical states: *Rolling* (a debounced button is held; the value
/// steps down once per slow tick, wrapping 1 → period) and *Idle* (the value
/// holds indefinitely). The caller feeds in the debounced state from the
/// previous tick, which is what produces the one-tick coast after release.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RollCounter {
    value: BcdPair,
}

impl RollCounter {
    /// Reset state: value 1, regardless of button state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: BcdPair::ONE,
        }
    }

    /// Advance one slow tick.
    ///
    /// `active` is the debounced die selection as of the previous tick.
    /// While a die is active the value decrements, reloading the die's full
    /// period when it would drop below 1. With no die active the value
    /// holds.
    pub fn step(&mut self, active: Option<DieSize>) {
        let Some(die) = active else {
            return;
        };
        self.value = if self.value == BcdPair::ONE {
            BcdPair::for_die(die)
        } else {
            self.value.decremented()
        };
    }

    /// The current BCD value.
    #[must_use]
    pub const fn value(&self) -> BcdPair {
        self.value
    }
}

impl Default for RollCounter {
    fn default() -> Self {
        Self::new()
    }
}
