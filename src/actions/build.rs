//! Building a level (or, on a full stack, a dome).

use serde::{Deserialize, Serialize};

use super::{Effect, Placement};
use crate::board::MAX_HEIGHT;
use crate::core::{Coord, GameState, IllegalAction};
use crate::meters::ImpactLevel;
use crate::roster::WorkerId;

/// Build on a cell next to the worker, or under it when the owner's god allows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildAction {
    worker: WorkerId,
    target: Coord,
}

impl BuildAction {
    /// Build on `target` with `worker`.
    #[must_use]
    pub fn new(worker: WorkerId, target: Coord) -> Self {
        Self { worker, target }
    }

    /// The building worker.
    #[must_use]
    pub fn worker(&self) -> WorkerId {
        self.worker
    }

    /// Target cell.
    #[must_use]
    pub fn target(&self) -> Coord {
        self.target
    }

    /// Legal iff the target is adjacent to or equal to the worker's cell,
    /// unoccupied unless the owner's god permits building there, and not domed.
    pub fn check(&self, state: &GameState) -> Result<(), IllegalAction> {
        let from = state.worker_position(self.worker)?;
        let cell = state
            .board()
            .cell(self.target)
            .ok_or(IllegalAction::OutOfBounds(self.target))?;
        if self.target != from && !from.is_adjacent(self.target) {
            return Err(IllegalAction::NotAdjacentOrCurrent(self.target));
        }
        if cell.is_occupied()
            && !state
                .power_of(self.worker)
                .can_build_on_occupied_cell(state, self.target, self.worker)
        {
            return Err(IllegalAction::Occupied(self.target));
        }
        if cell.is_domed() {
            return Err(IllegalAction::Domed(self.target));
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

        // The dome branch only runs on a full stack, which `check` rejects;
        // it stays for powers that relax the height rule.
        let (placed, level) = if building.height() < MAX_HEIGHT {
            building.add_level();
            let level = ImpactLevel::from_height(building.height()).unwrap_or(ImpactLevel::Dome);
            (Placement::Level, level)
        } else if !building.has_dome() {
            building.add_dome();
            (Placement::Dome, ImpactLevel::Dome)
        } else {
            return Err(IllegalAction::Domed(self.target));
        };

        Ok(Effect::Built {
            at: self.target,
            level,
            placed,
        })
    }
}

/// Cells `worker` may be offered to build on: neighbours that are
/// unoccupied and not domed, plus whatever the owner's god power adds.
#[must_use]
pub fn buildable_cells(state: &GameState, worker: WorkerId) -> Vec<Coord> {
    let Ok(from) = state.worker_position(worker) else {
        return Vec::new();
    };
    let board = state.board();
    let mut cells: Vec<Coord> = board
        .neighbours(from)
        .into_iter()
        .filter(|&c| board.cell(c).is_some_and(|cell| !cell.is_occupied() && !cell.is_domed()))
        .collect();
    for extra in state.power_of(worker).additional_build_cells(state, worker) {
        if !cells.contains(&extra) {
            cells.push(extra);
        }
    }
    cells
}
