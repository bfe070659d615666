//! Tick-boundary debouncer — a two-stage sampler taking one snapshot of the
//! raw button inputs per slow tick.
//!
//! The slow-tick period is the sole deglitching interval: a contact bounce
//! shorter than one tick is simply never sampled twice. Two register stages
//! (input synchronizer + stable state) mean a raw edge takes effect two
//! ticks after it occurs, which is also what gives the roll counter its
//! one-tick coast after release.

use crate::buttons::{DieSize, PressedSet};

/// Per-button debounced state, updated exactly once per slow tick.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    /// Synchronizer stage: the raw sample taken at the previous tick.
    sync: PressedSet,
    /// Stable stage: the debounced output.
    stable: PressedSet,
    /// False until the first tick after reset has seeded both stages.
    primed: bool,
}

impl Debouncer {
    /// Reset state: nothing pressed, stages unseeded.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sync: PressedSet::NONE,
            stable: PressedSet::NONE,
            primed: false,
        }
    }

    /// Shift in one tick-boundary sample of the normalized raw inputs.
    ///
    /// On the first tick after reset both stages adopt the sample directly,
    /// so the debounced state equals the raw inputs observed at that tick.
    pub fn sample(&mut self, raw: PressedSet) {
        if self.primed {
            self.stable = self.sync;
            self.sync = raw;
        } else {
            self.stable = raw;
            self.sync = raw;
            self.primed = true;
        }
    }

    /// The debounced pressed set.
    #[must_use]
    pub const fn stable(&self) -> PressedSet {
        self.stable
    }

    /// The die selected by the debounced state, if any button is held.
    #[must_use]
    pub fn active_die(&self) -> Option<DieSize> {
        self.stable.active_die()
    }

    /// The active roll period: faces of the held die, else 1.
    #[must_use]
    pub fn active_period(&self) -> u8 {
        self.stable.active_period()
    }
}

#[cfg(test)]
mod tests {
    use super::Debouncer;
    use crate::buttons::{ButtonLevels, DieSize, PressedSet};
    use crate::config::PolarityConfig;

    const CFG: PolarityConfig = PolarityConfig::from_bits(PolarityConfig::BUTTONS_ACTIVE_HIGH);

    fn pressed(die: DieSize) -> PressedSet {
        PressedSet::from_levels(ButtonLevels::default().with_level(die, true), CFG)
    }

    #[test]
    fn test_first_sample_seeds_both_stages() {
        let mut db = Debouncer::new();
        db.sample(pressed(DieSize::D12));
        // No two-tick latency on the very first sample after reset.
        assert_eq!(db.active_die(), Some(DieSize::D12));
    }

    #[test]
    fn test_press_takes_two_ticks_once_primed() {
        let mut db = Debouncer::new();
        db.sample(PressedSet::NONE);
        assert_eq!(db.active_die(), None);

        db.sample(pressed(DieSize::D8));
        // Edge sits in the synchronizer; stable still shows released.
        assert_eq!(db.active_die(), None);

        db.sample(pressed(DieSize::D8));
        assert_eq!(db.active_die(), Some(DieSize::D8));
    }

    #[test]
    fn test_release_takes_two_ticks() {
        let mut db = Debouncer::new();
        db.sample(pressed(DieSize::D20));
        assert_eq!(db.active_die(), Some(DieSize::D20));

        db.sample(PressedSet::NONE);
        assert_eq!(db.active_die(), Some(DieSize::D20));

        db.sample(PressedSet::NONE);
        assert_eq!(db.active_die(), None);
    }

    #[test]
    fn test_sub_tick_glitch_never_surfaces() {
        let mut db = Debouncer::new();
        db.sample(PressedSet::NONE);
        // A bounce that has settled back before the next sample: the
        // debouncer only ever sees the tick-boundary snapshots.
        db.sample(PressedSet::NONE);
        db.sample(PressedSet::NONE);
        assert_eq!(db.active_die(), None);
    }

    #[test]
    fn test_active_period_defaults_to_one() {
        let mut db = Debouncer::new();
        db.sample(PressedSet::NONE);
        assert_eq!(db.active_period(), 1);
        db.sample(pressed(DieSize::D100));
        db.sample(pressed(DieSize::D100));
        assert_eq!(db.active_period(), 100);
    }
}
