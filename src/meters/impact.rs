//! Ecological impact tiers of blocks.

use serde::{Deserialize, Serialize};

use crate::board::MAX_HEIGHT;

/// Tier of a block, by the height it sits at. Drives both the nature-meter
/// cost and which global supply counter a block draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ImpactLevel {
    /// Ground-floor block.
    Level1,
    /// Second-floor block.
    Level2,
    /// Third-floor block.
    Level3,
    /// Dome (the fourth block, or an explicit dome piece).
    Dome,
}

impl ImpactLevel {
    /// Every tier, bottom first.
    pub const ALL: [ImpactLevel; 4] = [
        ImpactLevel::Level1,
        ImpactLevel::Level2,
        ImpactLevel::Level3,
        ImpactLevel::Dome,
    ];

    /// Meter cost of building, and refund of removing, a block of this tier.
    #[must_use]
    pub const fn impact(self) -> i32 {
        match self {
            ImpactLevel::Level1 => 5,
            ImpactLevel::Level2 => 10,
            ImpactLevel::Level3 => 15,
            ImpactLevel::Dome => 20,
        }
    }

    /// Tier of the block that makes a building `height` tall.
    ///
    /// ```
    /// use santorini_rules::meters::ImpactLevel;
    ///
    /// assert_eq!(ImpactLevel::from_height(1), Some(ImpactLevel::Level1));
    /// assert_eq!(ImpactLevel::from_height(4), Some(ImpactLevel::Dome));
    /// assert_eq!(ImpactLevel::from_height(0), None);
    /// ```
    #[must_use]
    pub const fn from_height(height: u8) -> Option<Self> {
        match height {
            1 => Some(ImpactLevel::Level1),
            2 => Some(ImpactLevel::Level2),
            3 => Some(ImpactLevel::Level3),
            MAX_HEIGHT => Some(ImpactLevel::Dome),
            _ => None,
        }
    }

    /// Slot in per-tier arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Plural name of the block supply, for messages.
    #[must_use]
    pub const fn supply_name(self) -> &'static str {
        match self {
            ImpactLevel::Level1 => "first-floor blocks",
            ImpactLevel::Level2 => "second-floor blocks",
            ImpactLevel::Level3 => "third-floor blocks",
            ImpactLevel::Dome => "domes",
        }
    }
}
