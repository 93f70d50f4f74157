//! Global block supply shared by both players.

use serde::{Deserialize, Serialize};

use super::impact::ImpactLevel;
use crate::core::{BuildCaps, CapacityExceeded};

/// Blocks currently on the board per tier, checked against the caps.
///
/// Lives on the session, never in static state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildCounters {
    caps: BuildCaps,
    counts: [u32; 4],
}

impl BuildCounters {
    /// Empty counters with the given caps.
    #[must_use]
    pub fn new(caps: BuildCaps) -> Self {
        Self { caps, counts: [0; 4] }
    }

    /// Blocks of `level` currently counted.
    #[must_use]
    pub fn count(&self, level: ImpactLevel) -> u32 {
        self.counts[level.index()]
    }

    /// The configured caps.
    #[must_use]
    pub fn caps(&self) -> &BuildCaps {
        &self.caps
    }

    /// Count a placed block. Past the cap the increment is undone and the
    /// caller must revert the placement.
    ///
    /// ```
    /// use santorini_rules::core::BuildCaps;
    /// use santorini_rules::meters::{BuildCounters, ImpactLevel};
    ///
    /// let mut counters = BuildCounters::new(BuildCaps { dome: 1, ..BuildCaps::default() });
    /// assert!(counters.record_build(ImpactLevel::Dome).is_ok());
    /// assert!(counters.record_build(ImpactLevel::Dome).is_err());
    /// assert_eq!(counters.count(ImpactLevel::Dome), 1);
    /// ```
    pub fn record_build(&mut self, level: ImpactLevel) -> Result<(), CapacityExceeded> {
        let cap = self.caps.cap_for(level);
        let slot = &mut self.counts[level.index()];
        *slot += 1;
        if *slot > cap {
            *slot -= 1;
            return Err(CapacityExceeded { level, cap });
        }
        Ok(())
    }

    /// A removed block goes back to the supply.
    pub fn record_removal(&mut self, level: ImpactLevel) {
        let slot = &mut self.counts[level.index()];
        *slot = slot.saturating_sub(1);
    }
}
