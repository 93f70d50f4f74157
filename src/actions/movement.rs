//! Worker moves.

use serde::{Deserialize, Serialize};

use super::Effect;
use crate::core::{Coord, GameState, IllegalAction};
use crate::roster::{Climb, WorkerId};

/// Move a worker to a neighbouring cell.
///
/// The source cell is captured at construction, so legality and climb
/// heights are judged against the state the action was built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveAction {
    worker: WorkerId,
    source: Option<Coord>,
    dest: Coord,
}

impl MoveAction {
    /// Build a move of `worker` from its current cell to `dest`.
    #[must_use]
    pub fn new(state: &GameState, worker: WorkerId, dest: Coord) -> Self {
        Self {
            worker,
            source: state.worker(worker).and_then(|w| w.current()),
            dest,
        }
    }

    /// The moving worker.
    #[must_use]
    pub fn worker(&self) -> WorkerId {
        self.worker
    }

    /// Cell the worker stood on when the action was built.
    #[must_use]
    pub fn source(&self) -> Option<Coord> {
        self.source
    }

    /// Destination cell.
    #[must_use]
    pub fn dest(&self) -> Coord {
        self.dest
    }

    /// Legal iff the destination is adjacent, unoccupied, dome-free, and at
    /// most one level above the source. Descending is unrestricted.
    pub fn check(&self, state: &GameState) -> Result<(), IllegalAction> {
        let source = self.source.ok_or(IllegalAction::WorkerNotPlaced(self.worker))?;
        if state.worker_position(self.worker)? != source {
            return Err(IllegalAction::StaleSource(source));
        }
        let dest = state
            .board()
            .cell(self.dest)
            .ok_or(IllegalAction::OutOfBounds(self.dest))?;
        if !source.is_adjacent(self.dest) {
            return Err(IllegalAction::NotAdjacent(self.dest));
        }
        if dest.is_occupied() {
            return Err(IllegalAction::Occupied(self.dest));
        }
        if dest.is_domed() {
            return Err(IllegalAction::Domed(self.dest));
        }
        let from = state.board().height(source);
        let to = dest.height();
        if to > from + 1 {
            return Err(IllegalAction::TooHigh { from, to });
        }
        Ok(())
    }

    pub(super) fn apply(self, state: &mut GameState) -> Result<Effect, IllegalAction> {
        self.check(state)?;
        let source = self.source.ok_or(IllegalAction::WorkerNotPlaced(self.worker))?;
        let climb = Climb {
            from_height: state.board().height(source),
            to_height: state.board().height(self.dest),
        };

        let board = state.board_mut();
        if let Some(cell) = board.cell_mut(source) {
            cell.set_worker(None);
        }
        if let Some(cell) = board.cell_mut(self.dest) {
            cell.set_worker(Some(self.worker));
        }
        if let Some(worker) = state.worker_mut(self.worker) {
            worker.step(self.dest, climb);
        }

        Ok(Effect::Moved {
            from: source,
            to: self.dest,
            climb,
        })
    }
}

/// Cells `worker` may legally move to.
#[must_use]
pub fn movable_cells(state: &GameState, worker: WorkerId) -> Vec<Coord> {
    let Ok(from) = state.worker_position(worker) else {
        return Vec::new();
    };
    state
        .board()
        .neighbours(from)
        .into_iter()
        .filter(|&to| MoveAction::new(state, worker, to).check(state).is_ok())
        .collect()
}

