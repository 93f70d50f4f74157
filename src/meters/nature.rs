//! Bounded player meters.

use serde::{Deserialize, Serialize};

/// Which meter a player carries. Only nature exists today.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeterKind {
    /// Depletes as the player builds; empty means the player loses.
    Nature,
}

/// A per-player resource meter.
pub trait MeterStrategy: std::fmt::Debug + Send {
    /// Current value.
    fn value(&self) -> i32;

    /// True once the meter has run out.
    fn is_depleted(&self) -> bool;

    /// Add `delta` (may be negative), clamping to the meter's bounds.
    fn adjust(&mut self, delta: i32);

    /// Raise by one.
    fn increase(&mut self) {
        self.adjust(1);
    }

    /// Lower by one.
    fn decrease(&mut self) {
        self.adjust(-1);
    }
}

/// Integer meter clamped to `[min, max]`, starting full.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatureMeter {
    min: i32,
    max: i32,
    value: i32,
}

impl NatureMeter {
    /// A full meter.
    #[must_use]
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max, value: max }
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> i32 {
        self.max
    }
}

impl MeterStrategy for NatureMeter {
    fn value(&self) -> i32 {
        self.value
    }

    fn is_depleted(&self) -> bool {
        self.value <= 0
    }

    fn adjust(&mut self, delta: i32) {
        self.value = self.value.saturating_add(delta).clamp(self.min, self.max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_full() {
        let meter = NatureMeter::new(0, 100);
        assert_eq!(meter.value(), 100);
        assert!(!meter.is_depleted());
    }

    #[test]
    fn test_increase_decrease() {
        let mut meter = NatureMeter::new(0, 100);
        meter.decrease();
        meter.decrease();
        meter.increase();
        assert_eq!(meter.value(), 99);
        meter.increase();
        meter.increase();
        assert_eq!(meter.value(), 100);
    }

    #[test]
    fn test_dome_costs_deplete_after_five() {
        let mut meter = NatureMeter::new(0, 100);
        for _ in 0..4 {
            meter.adjust(-20);
        }
        assert_eq!(meter.value(), 20);
        meter.adjust(-20);
        assert_eq!(meter.value(), 0);
        assert!(meter.is_depleted());
    }

    proptest! {
        #[test]
        fn prop_meter_stays_clamped(deltas in proptest::collection::vec(any::<i32>(), 0..30)) {
            let mut meter = NatureMeter::new(0, 100);
            for delta in deltas {
                meter.adjust(delta);
                prop_assert!((0..=100).contains(&meter.value()));
                prop_assert_eq!(meter.is_depleted(), meter.value() == 0);
            }
        }
    }
}
