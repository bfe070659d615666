//! The controller — one synchronous process tying the prescaler, debouncer,
//! roll counter, inactivity timer and display multiplexer together.
//!
//! One call to [`DiceController::clock`] is one fast clock cycle. A modulo
//! prescaler derives the slow tick; on a tick cycle the stateful updates run
//! in a fixed order before the multiplexer samples:
//!
//! 1. roll counter, fed the debounced state from the *previous* tick,
//! 2. inactivity timer,
//! 3. debouncer (shifts in this tick's raw sample).
//!
//! Feeding the counter the previous tick's debounced state is what produces
//! the synchronizer delay on a press and the one-tick coast after a
//! release. The multiplexer always reads the settled value, never a
//! mid-update one.

use crate::buttons::{ButtonLevels, PressedSet};
use crate::config::PolarityConfig;
use crate::counter::{BcdPair, RollCounter};
use crate::debounce::Debouncer;
use crate::mux::{DisplayFrame, DisplayMultiplexer};
use crate::timeout::InactivityTimer;

/// Nominal fast clock rate the timing constants are calibrated against.
pub const CLOCK_HZ: u32 = 32_768;

/// Fast cycles per slow tick. 256 gives a 128 Hz tick at the nominal
/// clock — comfortably longer than mechanical contact bounce.
pub const TICK_DIVIDER: u16 = 256;

/// The complete dice controller.
///
/// Construction is reset: the configuration strap value is latched once,
/// the displayed value starts at 1 regardless of button state, and no idle
/// time is accumulated.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DiceController {
    cfg: PolarityConfig,
    prescaler: u16,
    ticked: bool,
    debounce: Debouncer,
    counter: RollCounter,
    timer: InactivityTimer,
    mux: DisplayMultiplexer,
}

impl DiceController {
    /// Come out of reset with the given 3-bit configuration strap value.
    #[must_use]
    pub const fn new(cfg_bits: u8) -> Self {
        Self {
            cfg: PolarityConfig::from_bits(cfg_bits),
            prescaler: 0,
            ticked: false,
            debounce: Debouncer::new(),
            counter: RollCounter::new(),
            timer: InactivityTimer::new(),
            mux: DisplayMultiplexer::new(),
        }
    }

    /// Advance one fast clock cycle and produce the display output.
    ///
    /// `levels` are the raw electrical button levels sampled this cycle.
    /// The full-blank override (any raw button pressed) acts immediately,
    /// every fast cycle; everything else updates on slow-tick boundaries.
    pub fn clock(&mut self, levels: ButtonLevels) -> DisplayFrame {
        let raw = PressedSet::from_levels(levels, self.cfg);

        self.ticked = self.advance_prescaler();
        if self.ticked {
            let active = self.debounce.active_die();
            self.counter.step(active);
            self.timer.step(active.is_some());
            self.debounce.sample(raw);
        }

        let blank = raw.any() || self.timer.expired();
        self.mux.step(blank, self.counter.value(), self.cfg)
    }

    /// True if the cycle most recently clocked was a slow-tick cycle.
    #[must_use]
    pub const fn ticked(&self) -> bool {
        self.ticked
    }

    /// The latched polarity configuration.
    #[must_use]
    pub const fn config(&self) -> PolarityConfig {
        self.cfg
    }

    /// The internal BCD digit registers, for verification only.
    #[must_use]
    pub const fn digits(&self) -> BcdPair {
        self.counter.value()
    }

    /// The displayed value decoded to 1..=100, for verification only.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.counter.value().value()
    }

    fn advance_prescaler(&mut self) -> bool {
        self.prescaler = self.prescaler.wrapping_add(1);
        if self.prescaler >= TICK_DIVIDER {
            self.prescaler = 0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DiceController, TICK_DIVIDER};
    use crate::buttons::{ButtonLevels, DieSize};

    const CFG_BITS: u8 = 0b001; // buttons active high, outputs active low

    fn idle() -> ButtonLevels {
        ButtonLevels::default()
    }

    fn held(die: DieSize) -> ButtonLevels {
        ButtonLevels::default().with_level(die, true)
    }

    /// Clock through exactly one slow tick boundary.
    fn step_tick(dice: &mut DiceController, levels: ButtonLevels) {
        loop {
            dice.clock(levels);
            if dice.ticked() {
                return;
            }
        }
    }

    #[test]
    fn test_reset_value_is_one_before_any_clock() {
        let dice = DiceController::new(CFG_BITS);
        assert_eq!(dice.value(), 1);
        assert_eq!((dice.digits().tens(), dice.digits().units()), (0, 1));
    }

    #[test]
    fn test_tick_fires_every_divider_cycles() {
        let mut dice = DiceController::new(CFG_BITS);
        let mut ticks = 0;
        for _ in 0..u32::from(TICK_DIVIDER) * 5 {
            dice.clock(idle());
            if dice.ticked() {
                ticks += 1;
            }
        }
        assert_eq!(ticks, 5);
    }

    #[test]
    fn test_idle_value_never_moves() {
        let mut dice = DiceController::new(CFG_BITS);
        for _ in 0..20 {
            step_tick(&mut dice, idle());
            assert_eq!(dice.value(), 1);
        }
    }

    #[test]
    fn test_rolling_starts_two_ticks_after_press() {
        let mut dice = DiceController::new(CFG_BITS);
        step_tick(&mut dice, idle()); // prime the debouncer

        let levels = held(DieSize::D6);
        step_tick(&mut dice, levels); // sample enters the synchronizer
        assert_eq!(dice.value(), 1);
        step_tick(&mut dice, levels); // debounced, counter still idle this tick
        assert_eq!(dice.value(), 1);
        step_tick(&mut dice, levels); // first rolling tick: 1 wraps to 6
        assert_eq!(dice.value(), 6);
        step_tick(&mut dice, levels);
        assert_eq!(dice.value(), 5);
    }

    #[test]
    fn test_release_coasts_one_tick_then_freezes() {
        let mut dice = DiceController::new(CFG_BITS);
        step_tick(&mut dice, idle());
        let levels = held(DieSize::D4);
        // Roll until the value comes back around to 1.
        for _ in 0..3 {
            step_tick(&mut dice, levels);
        }
        while dice.value() != 1 {
            step_tick(&mut dice, levels);
        }

        step_tick(&mut dice, idle()); // release in flight: wraps to 4
        assert_eq!(dice.value(), 4);
        step_tick(&mut dice, idle()); // coast tick
        assert_eq!(dice.value(), 3);
        for _ in 0..8 {
            step_tick(&mut dice, idle());
            assert_eq!(dice.value(), 3);
        }
    }

    #[test]
    fn test_raw_press_blanks_every_fast_cycle() {
        let mut dice = DiceController::new(CFG_BITS);
        let cfg = dice.config();
        let levels = held(DieSize::D100);
        for _ in 0..u32::from(TICK_DIVIDER) * 3 {
            let frame = dice.clock(levels);
            assert!(frame.is_blank(cfg));
        }
    }

    #[test]
    fn test_display_lights_within_a_rotation_when_idle() {
        let mut dice = DiceController::new(CFG_BITS);
        let cfg = dice.config();
        let mut lit = false;
        for _ in 0..4 {
            if !dice.clock(idle()).is_blank(cfg) {
                lit = true;
            }
        }
        assert!(lit, "value 1 should light its units digit within a rotation");
    }
}
