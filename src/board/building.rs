//! Buildings: a stack of levels with an optional dome.
//!
//! A building is at most four blocks tall. The fourth block is the dome
//! tier: the game treats a height-4 building as domed, so nothing more can
//! be built on it and no worker can stand on it. An explicit `Dome` piece
//! only appears through the build fallback on a full stack.
//!
//! All mutators are no-ops at their boundary instead of failing, so callers
//! only ever need the owning action's legality check.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Tallest possible stack of levels.
pub const MAX_HEIGHT: u8 = 4;

/// One block of a building. `tier` is 1 for the ground-floor block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Level {
    /// 1-based position in the stack.
    pub tier: u8,
}

/// The cap piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dome;

/// A building on one cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Building {
    levels: SmallVec<[Level; 4]>,
    dome: Option<Dome>,
}

impl Building {
    /// An empty building (height 0, no dome).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A building with `height` levels, clamped to [`MAX_HEIGHT`].
    #[must_use]
    pub fn with_height(height: u8) -> Self {
        let mut building = Self::new();
        for _ in 0..height.min(MAX_HEIGHT) {
            building.add_level();
        }
        building
    }

    /// Number of levels.
    #[must_use]
    pub fn height(&self) -> u8 {
        self.levels.len() as u8
    }

    /// True if an explicit dome piece sits on top.
    #[must_use]
    pub fn has_dome(&self) -> bool {
        self.dome.is_some()
    }

    /// True if nothing more can be built here: a dome piece or a full stack.
    #[must_use]
    pub fn is_domed(&self) -> bool {
        self.has_dome() || self.height() >= MAX_HEIGHT
    }

    /// True if there is nothing to remove.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty() && self.dome.is_none()
    }

    /// The levels, bottom first.
    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Add a level. No-op at full height or under a dome; returns whether it changed.
    ///
    /// ```
    /// use santorini_rules::board::Building;
    ///
    /// let mut b = Building::with_height(3);
    /// assert!(b.add_level());
    /// assert!(!b.add_level());
    /// assert_eq!(b.height(), 4);
    /// assert!(b.is_domed());
    /// ```
    pub fn add_level(&mut self) -> bool {
        if self.height() >= MAX_HEIGHT || self.dome.is_some() {
            return false;
        }
        let tier = self.height() + 1;
        self.levels.push(Level { tier });
        true
    }

    /// Cap the building. No-op if a dome piece is already there.
    pub fn add_dome(&mut self) -> bool {
        if self.dome.is_some() {
            return false;
        }
        self.dome = Some(Dome);
        true
    }

    /// Remove the top level. No-op on an empty stack.
    pub fn remove_level(&mut self) -> Option<Level> {
        self.levels.pop()
    }

    /// Remove the dome piece. No-op without one.
    pub fn remove_dome(&mut self) -> Option<Dome> {
        self.dome.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_levels_are_numbered_bottom_up() {
        let b = Building::with_height(3);
        let tiers: Vec<_> = b.levels().iter().map(|l| l.tier).collect();
        assert_eq!(tiers, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_level_stops_at_max() {
        let mut b = Building::with_height(9);
        assert_eq!(b.height(), MAX_HEIGHT);
        assert!(!b.add_level());
        assert_eq!(b.height(), MAX_HEIGHT);
    }

    #[test]
    fn test_dome_blocks_levels() {
        let mut b = Building::with_height(2);
        assert!(b.add_dome());
        assert!(!b.add_dome());
        assert!(!b.add_level());
        assert_eq!(b.height(), 2);
        assert!(b.is_domed());
    }

    #[test]
    fn test_removal_on_empty_is_noop() {
        let mut b = Building::new();
        assert_eq!(b.remove_level(), None);
        assert_eq!(b.remove_dome(), None);
        assert_eq!(b.height(), 0);
        assert!(b.is_empty());
    }

    #[test]
    fn test_remove_dome_reopens_building() {
        let mut b = Building::with_height(1);
        b.add_dome();
        assert_eq!(b.remove_dome(), Some(Dome));
        assert!(!b.is_domed());
        assert!(b.add_level());
    }

    #[derive(Clone, Copy, Debug)]
    enum Op {
        AddLevel,
        AddDome,
        RemoveLevel,
        RemoveDome,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::AddLevel),
            Just(Op::AddDome),
            Just(Op::RemoveLevel),
            Just(Op::RemoveDome),
        ]
    }

    fn apply(b: &mut Building, op: Op) {
        match op {
            Op::AddLevel => {
                b.add_level();
            }
            Op::AddDome => {
                b.add_dome();
            }
            Op::RemoveLevel => {
                b.remove_level();
            }
            Op::RemoveDome => {
                b.remove_dome();
            }
        }
    }

    proptest! {
        #[test]
        fn prop_height_stays_in_bounds(ops in proptest::collection::vec(op(), 0..40)) {
            let mut b = Building::new();
            for op in ops {
                apply(&mut b, op);
                prop_assert!(b.height() <= MAX_HEIGHT);
            }
        }

        #[test]
        fn prop_add_then_remove_level_is_inverse(ops in proptest::collection::vec(op(), 0..40)) {
            let mut b = Building::new();
            for op in ops {
                apply(&mut b, op);
            }
            let before = b.height();
            let added = b.add_level();
            if added {
                b.remove_level();
                prop_assert_eq!(b.height(), before);
            } else {
                prop_assert!(before == MAX_HEIGHT || b.has_dome());
                prop_assert_eq!(b.height(), before);
            }
        }
    }
}
