//! Removing a block.

use serde::{Deserialize, Serialize};

use super::Effect;
use crate::core::{Coord, GameState, IllegalAction};
use crate::meters::ImpactLevel;
use crate::roster::WorkerId;

/// Remove the top block (dome first) from a cell next to or under the worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveBuildAction {
    worker: WorkerId,
    target: Coord,
}

impl RemoveBuildAction {
    /// Remove from `target` with `worker`.
    #[must_use]
    pub fn new(worker: WorkerId, target: Coord) -> Self {
        Self { worker, target }
    }

    /// The acting worker.
    #[must_use]
    pub fn worker(&self) -> WorkerId {
        self.worker
    }

    /// Target cell.
    #[must_use]
    pub fn target(&self) -> Coord {
        self.target
    }

    /// Legal iff the target is adjacent to or equal to the worker's cell and
    /// holds at least one level or a dome.
    pub fn check(&self, state: &GameState) -> Result<(), IllegalAction> {
        let from = state.worker_position(self.worker)?;
        let cell = state
            .board()
            .cell(self.target)
            .ok_or(IllegalAction::OutOfBounds(self.target))?;
        if self.target != from && !from.is_adjacent(self.target) {
            return Err(IllegalAction::NotAdjacentOrCurrent(self.target));
        }
        if cell.building().is_empty() {
            return Err(IllegalAction::NothingToRemove(self.target));
        }
        Ok(())
    }

    pub(super) fn apply(self, state: &mut GameState) -> Result<Effect, IllegalAction> {
        self.check(state)?;
        let building = state
            .board_mut()
            .cell_mut(self.target)
            .ok_or(IllegalAction::OutOfBounds(self.target))?
            .building_mut();

        let level = if building.remove_dome().is_some() {
            ImpactLevel::Dome
        } else {
            let level = ImpactLevel::from_height(building.height())
                .ok_or(IllegalAction::NothingToRemove(self.target))?;
            building.remove_level();
            level
        };

        Ok(Effect::Removed {
            at: self.target,
            level,
        })
    }
}
