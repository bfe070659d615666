//! Blanking behavior: the display goes dark the instant any raw button is
//! touched (every fast cycle, not just at tick boundaries), lights again
//! promptly on release, and leading-zero-blanks the tens slot.

use dice_core::{DieSize, TICK_DIVIDER};
use dice_testbench::{TestBench, ROTATION_CYCLES};

const CFG: u8 = 0b111; // everything active high

#[test]
fn test_raw_press_blanks_continuously() {
    let mut bench = TestBench::new(CFG);
    bench.press(DieSize::D8);
    // Three slow ticks' worth of fast cycles, all dark — including the
    // sub-tick cycles where the debouncer hasn't even seen the press yet.
    bench.expect_blank_for(u32::from(TICK_DIVIDER) * 3);
}

#[test]
fn test_mid_cycle_press_blanks_immediately() {
    let mut bench = TestBench::new(CFG);
    // Sit somewhere between tick boundaries.
    for _ in 0..7 {
        bench.clock();
    }
    bench.press(DieSize::D4);
    bench.expect_blank_for(u32::from(TICK_DIVIDER));
}

#[test]
fn test_display_returns_after_release() {
    let mut bench = TestBench::new(CFG);
    bench.press(DieSize::D12);
    bench.run_ticks(20);
    bench.release_all();
    // The very next frames may still be mid-rotation gaps; a digit must
    // appear within one full rotation.
    assert!(bench.digit_shown_within(ROTATION_CYCLES));
}

#[test]
fn test_idle_display_lights_every_rotation() {
    let mut bench = TestBench::new(CFG);
    // Value 1: tens slot leading-zero-blanked, units lit once per rotation.
    for _ in 0..32 {
        let mut lit = 0;
        for _ in 0..ROTATION_CYCLES {
            if !bench.clock().is_blank(bench.config()) {
                lit += 1;
            }
        }
        assert_eq!(lit, 1, "single-digit value should light exactly once per rotation");
    }
}

#[test]
fn test_two_digit_value_lights_twice_per_rotation() {
    let mut bench = TestBench::new(CFG);
    bench.press(DieSize::D100);
    bench.run_ticks(2);
    while bench.value() != 42 {
        bench.step_tick();
    }
    bench.release_all();
    bench.run_ticks(3); // 42 -> 40, frozen
    assert_eq!(bench.value(), 40);

    // Align to the start of a rotation, then count lit phases per rotation.
    while !bench.clock().units_active(bench.config()) {}
    bench.clock(); // gap before tens
    let mut lit = 0;
    for _ in 0..ROTATION_CYCLES * 8 {
        if !bench.clock().is_blank(bench.config()) {
            lit += 1;
        }
    }
    assert_eq!(lit, 8 * 2, "tens and units each lit once per rotation");
}

#[test]
fn test_tens_slot_dark_for_single_digit_values() {
    let mut bench = TestBench::new(CFG);
    bench.press(DieSize::D6);
    bench.run_ticks(12);
    bench.release_all();
    bench.run_ticks(3);
    assert!(bench.value() <= 9, "d6 result should be single-digit");

    let cfg = bench.config();
    for _ in 0..ROTATION_CYCLES * 16 {
        let frame = bench.clock();
        assert!(!frame.tens_active(cfg), "tens enable must stay inactive");
    }
}
