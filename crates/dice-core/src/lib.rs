//! Control logic for an electronic dice roller.
//!
//! While a player holds one of seven buttons (d4, d6, d8, d10, d12, d20,
//! d100) a two-digit multiplexed display whirls from the die maximum down to
//! 1; releasing the button freezes a pseudo-random result after one coast
//! tick. The whole device is a single synchronous process: every call to
//! [`DiceController::clock`] is one fast clock cycle, and a modulo prescaler
//! derives the slow tick that gates debouncing, counting and the inactivity
//! timeout.
//!
//! # Architecture Layers
//!
//! ```text
//! raw button levels ──► Debouncer ──► RollCounter ──► DisplayMultiplexer
//!        (per cycle)     (per tick)    (per tick)       (per cycle)
//!                                          │
//!                                   InactivityTimer ──► blanking
//! ```
//!
//! Shared state (the BCD value) is written only by the roll counter and read
//! by the multiplexer after the tick updates settle, so every cycle's output
//! is a pure function of the current state and inputs.
//!
//! # Features
//!
//! - `defmt`: derive `defmt::Format` on public types for embedded logging.
//!
//! # Example
//!
//! ```
//! use dice_core::{ButtonLevels, DiceController, DieSize};
//!
//! // cfg bit0 set: buttons active high; outputs active low.
//! let mut dice = DiceController::new(1);
//! let held = ButtonLevels::default().with_level(DieSize::D20, true);
//! for _ in 0..10_000 {
//!     let frame = dice.clock(held);
//!     // Both digit enables idle while the button is held.
//!     assert!(!frame.tens_active(dice.config()));
//!     assert!(!frame.units_active(dice.config()));
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod buttons;
pub mod config;
pub mod controller;
pub mod counter;
pub mod debounce;
pub mod mux;
pub mod segments;
pub mod timeout;

pub use buttons::{ButtonLevels, DieSize, PressedSet};
pub use config::PolarityConfig;
pub use controller::{DiceController, CLOCK_HZ, TICK_DIVIDER};
pub use counter::{BcdPair, OutOfRangeError, RollCounter};
pub use debounce::Debouncer;
pub use mux::{DisplayFrame, DisplayMultiplexer};
pub use segments::SegmentPattern;
pub use timeout::{InactivityTimer, BLANK_TIMEOUT_TICKS};
