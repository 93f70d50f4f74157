//! The four god powers in the pool.

use super::power::SpecialPower;
use crate::actions::{Action, BuildAction, Effect, Executed, MoveAction, RemoveBuildAction};
use crate::core::{Coord, GameState};
use crate::roster::WorkerId;

/// Zeus may build under himself only while his cell is below this height.
const ZEUS_MAX_OWN_HEIGHT: u8 = 3;

/// Artemis: one extra move, not back to the starting cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArtemisPower;

impl SpecialPower for ArtemisPower {
    fn modify(&self, executed: &Executed, state: &GameState) -> Vec<Action> {
        let Effect::Moved { from, to, .. } = executed.effect else {
            return Vec::new();
        };
        let worker = executed.action.worker();
        state
            .board()
            .neighbours(to)
            .into_iter()
            .filter(|&c| c != from)
            .map(|c| MoveAction::new(state, worker, c))
            .filter(|m| m.check(state).is_ok())
            .map(Action::from)
            .collect()
    }
}

/// Demeter: one extra build, not on the first build's cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemeterPower;

impl SpecialPower for DemeterPower {
    fn modify(&self, executed: &Executed, state: &GameState) -> Vec<Action> {
        let Effect::Built { at: first, .. } = executed.effect else {
            return Vec::new();
        };
        let worker = executed.action.worker();
        let Ok(here) = state.worker_position(worker) else {
            return Vec::new();
        };
        state
            .board()
            .neighbours(here)
            .into_iter()
            .filter(|&c| c != first)
            .map(|c| BuildAction::new(worker, c))
            .filter(|b| b.check(state).is_ok())
            .map(Action::from)
            .collect()
    }

    fn allows_second_build(&self) -> bool {
        true
    }
}

/// Zeus: may build under his own worker.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeusPower;

impl ZeusPower {
    fn own_cell(state: &GameState, worker: WorkerId) -> Option<Coord> {
        let here = state.worker_position(worker).ok()?;
        let cell = state.board().cell(here)?;
        (!cell.is_domed() && cell.height() < ZEUS_MAX_OWN_HEIGHT).then_some(here)
    }
}

impl SpecialPower for ZeusPower {
    fn modify(&self, executed: &Executed, state: &GameState) -> Vec<Action> {
        if !matches!(executed.effect, Effect::Built { .. }) {
            return Vec::new();
        }
        let worker = executed.action.worker();
        Self::own_cell(state, worker)
            .map(|here| Action::from(BuildAction::new(worker, here)))
            .into_iter()
            .collect()
    }

    fn additional_build_cells(&self, state: &GameState, worker: WorkerId) -> Vec<Coord> {
        Self::own_cell(state, worker).into_iter().collect()
    }

    fn can_build_on_occupied_cell(&self, state: &GameState, cell: Coord, worker: WorkerId) -> bool {
        Self::own_cell(state, worker) == Some(cell)
    }
}

/// Gaia: may remove a block from a neighbouring cell or her own.
#[derive(Clone, Copy, Debug, Default)]
pub struct GaiaPower;

impl GaiaPower {
    fn removals(state: &GameState, worker: WorkerId, include_own: bool) -> Vec<Action> {
        let Ok(here) = state.worker_position(worker) else {
            return Vec::new();
        };
        let mut targets: Vec<Coord> = state.board().neighbours(here).into_iter().collect();
        if include_own {
            targets.push(here);
        }
        targets
            .into_iter()
            .map(|c| RemoveBuildAction::new(worker, c))
            .filter(|r| r.check(state).is_ok())
            .map(Action::from)
            .collect()
    }
}

impl SpecialPower for GaiaPower {
    fn modify(&self, executed: &Executed, state: &GameState) -> Vec<Action> {
        if !matches!(executed.effect, Effect::Removed { .. }) {
            return Vec::new();
        }
        Self::removals(state, executed.action.worker(), false)
    }

    fn allows_remove(&self) -> bool {
        true
    }

    fn remove_options(&self, state: &GameState, worker: WorkerId) -> Vec<Action> {
        Self::removals(state, worker, true)
    }
}
