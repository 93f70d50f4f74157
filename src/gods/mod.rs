//! God cards and their special powers.
//!
//! Each player holds one god card for the whole game. A card is a name, a
//! description and a [`SpecialPower`]; the powers are stateless and shared.
//!
//! ## Pool
//!
//! The standard pool is {Artemis, Demeter, Zeus, Gaia}. Cards are dealt by
//! shuffling the pool and handing out distinct cards, one per player.

mod pool;
mod power;
mod powers;

pub use pool::GodCardPool;
pub use power::SpecialPower;
pub use powers::{ArtemisPower, DemeterPower, GaiaPower, ZeusPower};

use serde::{Deserialize, Serialize};
use std::fmt;

/// A god card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum God {
    Artemis,
    Demeter,
    Zeus,
    Gaia,
}

impl God {
    /// Every god in the standard pool.
    pub const ALL: [God; 4] = [God::Artemis, God::Demeter, God::Zeus, God::Gaia];

    /// Card name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            God::Artemis => "Artemis",
            God::Demeter => "Demeter",
            God::Zeus => "Zeus",
            God::Gaia => "Gaia",
        }
    }

    /// Rules text shown on the card.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            God::Artemis => {
                "Your Worker may move one additional time, but not back to its initial space."
            }
            God::Demeter => "Your Worker may build one additional time, but not on the same space.",
            God::Zeus => "Your Worker may build a block under itself.",
            God::Gaia => "Your Worker may remove an existing block.",
        }
    }

    /// The card's power.
    #[must_use]
    pub fn power(self) -> &'static dyn SpecialPower {
        match self {
            God::Artemis => &ArtemisPower,
            God::Demeter => &DemeterPower,
            God::Zeus => &ZeusPower,
            God::Gaia => &GaiaPower,
        }
    }
}

impl fmt::Display for God {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_demeter_builds_twice() {
        let doubles: Vec<_> = God::ALL
            .into_iter()
            .filter(|g| g.power().allows_second_build())
            .collect();
        assert_eq!(doubles, vec![God::Demeter]);
    }

    #[test]
    fn test_only_gaia_removes() {
        let removers: Vec<_> = God::ALL
            .into_iter()
            .filter(|g| g.power().allows_remove())
            .collect();
        assert_eq!(removers, vec![God::Gaia]);
    }

    #[test]
    fn test_display_is_name() {
        assert_eq!(God::Zeus.to_string(), "Zeus");
        assert!(God::Artemis.description().contains("not back"));
    }
}
