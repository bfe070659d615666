//! Verification bench for the dice controller.
//!
//! Drives a [`DiceController`] clock cycle by clock cycle the way the
//! hardware bench drives the netlist: raw electrical button levels in,
//! display frames out, with every emitted frame checked against the output
//! invariants (legal segment alphabet, never both digits enabled, enabled
//! digit matches its BCD register).
//!
//! # Quick start
//!
//! ```
//! use dice_testbench::TestBench;
//! use dice_core::DieSize;
//!
//! let mut bench = TestBench::new(0b001); // buttons active high
//! bench.press(DieSize::D20);
//! bench.run_ticks(10);
//! bench.release_all();
//! bench.run_ticks(3);
//! assert!((1..=20).contains(&bench.value()));
//! ```

// Bench crate — assertion panics are the failure channel, like any test code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
// Cycle/tick bookkeeping is u64/u32 over test-sized horizons.
#![allow(clippy::arithmetic_side_effects)]
#![warn(clippy::all)]
#![warn(missing_docs)]

use dice_core::{
    ButtonLevels, DiceController, DieSize, DisplayFrame, PolarityConfig, SegmentPattern,
};

/// Fast cycles per multiplexer rotation (units, gap, tens, gap).
pub const ROTATION_CYCLES: u32 = 4;

/// Clocks a [`DiceController`] and checks every frame it emits.
pub struct TestBench {
    dice: DiceController,
    levels: ButtonLevels,
    cycles: u64,
}

impl TestBench {
    /// Bring a controller out of reset with the given configuration strap
    /// value. All button lines start at their released level.
    #[must_use]
    pub fn new(cfg_bits: u8) -> Self {
        let cfg = PolarityConfig::from_bits(cfg_bits);
        let released = if cfg.buttons_active_high { 0x00 } else { 0x7f };
        Self {
            dice: DiceController::new(cfg_bits),
            levels: ButtonLevels::from_bits(released),
            cycles: 0,
        }
    }

    /// The latched polarity configuration.
    #[must_use]
    pub fn config(&self) -> PolarityConfig {
        self.dice.config()
    }

    /// Total fast cycles clocked so far.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Drive one button to its pressed electrical level.
    pub fn press(&mut self, die: DieSize) {
        self.levels = self
            .levels
            .with_level(die, self.config().buttons_active_high);
    }

    /// Return every button line to its released level.
    pub fn release_all(&mut self) {
        let released = if self.config().buttons_active_high {
            0x00
        } else {
            0x7f
        };
        self.levels = ButtonLevels::from_bits(released);
    }

    /// True if any button line is currently at its pressed level.
    #[must_use]
    pub fn any_pressed(&self) -> bool {
        let bits = self.levels.bits();
        if self.config().buttons_active_high {
            bits != 0
        } else {
            bits != 0x7f
        }
    }

    /// Advance one fast clock cycle, checking the emitted frame.
    pub fn clock(&mut self) -> DisplayFrame {
        let frame = self.dice.clock(self.levels);
        self.cycles += 1;
        self.check_frame(frame);
        frame
    }

    /// Advance to just past the next slow-tick boundary.
    pub fn step_tick(&mut self) {
        loop {
            self.clock();
            if self.dice.ticked() {
                return;
            }
        }
    }

    /// Advance `n` slow ticks.
    pub fn run_ticks(&mut self, n: u32) {
        for _ in 0..n {
            self.step_tick();
        }
    }

    /// The internal BCD digit registers as `(tens, units)`.
    #[must_use]
    pub fn digits(&self) -> (u8, u8) {
        let pair = self.dice.digits();
        (pair.tens(), pair.units())
    }

    /// The displayed value decoded to 1..=100.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.dice.value()
    }

    /// True if some digit enable goes active within the next `cycles` fast
    /// cycles. Consumes cycles up to and including the first lit one.
    pub fn digit_shown_within(&mut self, cycles: u32) -> bool {
        let cfg = self.config();
        (0..cycles).any(|_| !self.clock().is_blank(cfg))
    }

    /// Assert that every frame over the next `cycles` fast cycles is fully
    /// blanked.
    pub fn expect_blank_for(&mut self, cycles: u32) {
        let cfg = self.config();
        for i in 0..cycles {
            let frame = self.clock();
            assert!(
                frame.is_blank(cfg),
                "frame {i} of {cycles} should be blanked (cycle {})",
                self.cycles
            );
        }
    }

    /// Output invariants checked on every emitted frame:
    /// never both digit enables at once, segment pattern inside the legal
    /// alphabet, and an enabled digit's pattern equal to its BCD register.
    fn check_frame(&self, frame: DisplayFrame) {
        let cfg = self.config();
        let (tens, units) = self.digits();
        let lit = frame.lit_segments(cfg);

        assert!(
            !(frame.tens_active(cfg) && frame.units_active(cfg)),
            "both digit enables active at cycle {}",
            self.cycles
        );
        assert!(
            lit.is_valid(),
            "segment pattern {:#09b} outside the digit/blank alphabet at cycle {}",
            lit.bits(),
            self.cycles
        );
        if frame.units_active(cfg) {
            assert_eq!(
                lit,
                SegmentPattern::for_digit(units),
                "units slot shows wrong pattern at cycle {}",
                self.cycles
            );
        } else if frame.tens_active(cfg) {
            assert_eq!(
                lit,
                SegmentPattern::for_digit(tens),
                "tens slot shows wrong pattern at cycle {}",
                self.cycles
            );
        }
    }

    /// Run the reference roll scenario against one die (or no die at all:
    /// the counter must then sit on its held value with period 1).
    ///
    /// Mirrors the hardware bench sequence: two deglitch ticks, re-align on
    /// value 1, two exact periods of countdown, three more periods landing
    /// back on 1, then (for a real die) release, wrap, one coast decrement,
    /// and an 8-tick freeze check.
    pub fn verify_roll_cycle(&mut self, die: Option<DieSize>) {
        if let Some(die) = die {
            self.press(die);
        }
        let period = die.map_or(1, DieSize::faces);

        // Synchronizer + debounce stage.
        self.run_ticks(2);

        // The counter starts rolling on the next tick; wait for it to come
        // around to 1 so the countdown checks start phase-aligned.
        if self.value() != 1 {
            for _ in 0..period {
                self.step_tick();
                if self.value() == 1 {
                    break;
                }
            }
        }
        assert_eq!(self.value(), 1, "counter failed to reach 1 for {die:?}");

        // Two exact periods.
        for _ in 0..2 {
            for expected in (1..=period).rev() {
                self.step_tick();
                assert_eq!(self.value(), expected, "countdown mismatch for {die:?}");
            }
        }

        // Any whole number of further periods lands back on 1.
        self.run_ticks(3 * u32::from(period));
        assert_eq!(self.value(), 1, "period drift for {die:?}");

        if period != 1 {
            self.release_all();
            self.step_tick();
            assert_eq!(self.value(), period, "release tick should wrap for {die:?}");
            self.step_tick();
            assert_eq!(self.value(), period - 1, "coast tick missing for {die:?}");
            self.step_tick();
            assert_eq!(self.value(), period - 1, "counter failed to freeze for {die:?}");
            for _ in 0..8 {
                self.step_tick();
                assert_eq!(self.value(), period - 1, "frozen value drifted for {die:?}");
            }
        }
    }
}
