//! One-shot, legality-checked game actions.
//!
//! An action is built fresh for each attempted transition, asked whether it
//! is legal any number of times (`check` has no side effects), then
//! consumed by `execute`. A failed `execute` returns the reason and leaves
//! the state untouched; a retry needs a new action built from the new state.
//!
//! ## Variants
//!
//! - [`MoveAction`]: step to a neighbouring cell, climbing at most one level.
//! - [`BuildAction`]: add a level next to (or, for Zeus, under) the worker.
//! - [`RemoveBuildAction`]: take the top block off a neighbouring or own cell.

mod build;
mod movement;
mod remove;

pub use build::{buildable_cells, BuildAction};
pub use movement::{movable_cells, MoveAction};
pub use remove::RemoveBuildAction;

use serde::{Deserialize, Serialize};

use crate::core::{Coord, GameState, IllegalAction};
use crate::meters::ImpactLevel;
use crate::roster::{Climb, WorkerId};

/// Discriminant of an [`Action`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Move,
    Build,
    RemoveBuild,
}

/// A move, build or removal bound to one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Move(MoveAction),
    Build(BuildAction),
    RemoveBuild(RemoveBuildAction),
}

impl Action {
    /// Which kind of action this is.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Move(_) => ActionKind::Move,
            Action::Build(_) => ActionKind::Build,
            Action::RemoveBuild(_) => ActionKind::RemoveBuild,
        }
    }

    /// The acting worker.
    #[must_use]
    pub fn worker(&self) -> WorkerId {
        match self {
            Action::Move(a) => a.worker(),
            Action::Build(a) => a.worker(),
            Action::RemoveBuild(a) => a.worker(),
        }
    }

    /// The cell the action targets (the destination, for moves).
    #[must_use]
    pub fn target(&self) -> Coord {
        match self {
            Action::Move(a) => a.dest(),
            Action::Build(a) => a.target(),
            Action::RemoveBuild(a) => a.target(),
        }
    }

    /// The cell a move started from. `None` for builds and removals.
    #[must_use]
    pub fn source(&self) -> Option<Coord> {
        match self {
            Action::Move(a) => a.source(),
            _ => None,
        }
    }

    /// Why the action would be rejected against `state`, if it would be.
    pub fn check(&self, state: &GameState) -> Result<(), IllegalAction> {
        match self {
            Action::Move(a) => a.check(state),
            Action::Build(a) => a.check(state),
            Action::RemoveBuild(a) => a.check(state),
        }
    }

    /// True if the action may be executed against `state`.
    #[must_use]
    pub fn is_legal(&self, state: &GameState) -> bool {
        self.check(state).is_ok()
    }

    /// Apply the action. On error nothing has changed.
    pub fn execute(self, state: &mut GameState) -> Result<Executed, IllegalAction> {
        let effect = match self {
            Action::Move(a) => a.apply(state)?,
            Action::Build(a) => a.apply(state)?,
            Action::RemoveBuild(a) => a.apply(state)?,
        };
        Ok(Executed { action: self, effect })
    }
}

impl From<MoveAction> for Action {
    fn from(action: MoveAction) -> Self {
        Action::Move(action)
    }
}

impl From<BuildAction> for Action {
    fn from(action: BuildAction) -> Self {
        Action::Build(action)
    }
}

impl From<RemoveBuildAction> for Action {
    fn from(action: RemoveBuildAction) -> Self {
        Action::RemoveBuild(action)
    }
}

/// What a build placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    Level,
    Dome,
}

/// The board change an action made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// A worker stepped from one cell to another.
    Moved { from: Coord, to: Coord, climb: Climb },
    /// A block of `level` was placed on `at`.
    Built { at: Coord, level: ImpactLevel, placed: Placement },
    /// A block of `level` was taken off `at`.
    Removed { at: Coord, level: ImpactLevel },
}

/// A successfully executed action and its effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Executed {
    pub action: Action,
    pub effect: Effect,
}

impl Executed {
    /// Impact tier of a build or removal. `None` for moves.
    #[must_use]
    pub fn impact(&self) -> Option<ImpactLevel> {
        match self.effect {
            Effect::Built { level, .. } | Effect::Removed { level, .. } => Some(level),
            Effect::Moved { .. } => None,
        }
    }

    /// Undo a build in place by taking off the block it placed.
    ///
    /// Returns false (and changes nothing) for moves and removals.
    pub fn rollback_build(&self, state: &mut GameState) -> bool {
        let Effect::Built { at, placed, .. } = self.effect else {
            return false;
        };
        let Some(cell) = state.board_mut().cell_mut(at) else {
            return false;
        };
        let building = cell.building_mut();
        match placed {
            Placement::Level => building.remove_level().is_some(),
            Placement::Dome => building.remove_dome().is_some(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::board::{Board, Building};
    use crate::core::{PlayerId, PlayerMap};
    use crate::gods::God;
    use crate::meters::{MeterKind, NatureMeter};
    use crate::roster::{Player, WorkerColour};
    use proptest::prelude::*;

    pub(crate) const P0: PlayerId = PlayerId::new(0);
    pub(crate) const P1: PlayerId = PlayerId::new(1);
    pub(crate) const W00: WorkerId = WorkerId::new(P0, 0);
    pub(crate) const W01: WorkerId = WorkerId::new(P0, 1);
    pub(crate) const W10: WorkerId = WorkerId::new(P1, 0);
    pub(crate) const W11: WorkerId = WorkerId::new(P1, 1);

    /// 5x5 state with the given gods, full nature meters, and workers on
    /// the given cells.
    pub(crate) fn state_with(gods: [God; 2], cells: [(u8, u8); 4]) -> GameState {
        let meter = || Box::new(NatureMeter::new(0, 100));
        let players = PlayerMap::from_vec(vec![
            Player::new(P0, "Ann", gods[0], WorkerColour::Blue, 2)
                .with_meter(MeterKind::Nature, meter()),
            Player::new(P1, "Bob", gods[1], WorkerColour::Red, 2)
                .with_meter(MeterKind::Nature, meter()),
        ]);
        let mut state = GameState::new(Board::new(5, 5), players);
        for (id, cell) in [W00, W01, W10, W11].into_iter().zip(cells) {
            state.place_worker(id, cell.into()).unwrap();
        }
        state
    }

    pub(crate) fn set_height(state: &mut GameState, at: (u8, u8), height: u8) {
        *state.board_mut().cell_mut(at.into()).unwrap().building_mut() =
            Building::with_height(height);
    }

    fn default_state() -> GameState {
        state_with([God::Artemis, God::Demeter], [(2, 2), (0, 0), (4, 4), (4, 0)])
    }

    #[test]
    fn test_move_climbs_one_level() {
        let mut state = default_state();
        set_height(&mut state, (2, 3), 1);
        set_height(&mut state, (1, 2), 2);

        let up_two = Action::from(MoveAction::new(&state, W00, Coord::new(1, 2)));
        assert_eq!(
            up_two.check(&state),
            Err(IllegalAction::TooHigh { from: 0, to: 2 })
        );

        let up_one = Action::from(MoveAction::new(&state, W00, Coord::new(2, 3)));
        let done = up_one.execute(&mut state).unwrap();
        assert_eq!(
            done.effect,
            Effect::Moved {
                from: Coord::new(2, 2),
                to: Coord::new(2, 3),
                climb: Climb { from_height: 0, to_height: 1 },
            }
        );
        assert_eq!(state.worker_at(Coord::new(2, 3)), Some(W00));
        assert_eq!(state.worker_at(Coord::new(2, 2)), None);
        assert_eq!(state.worker(W00).unwrap().previous(), Some(Coord::new(2, 2)));
    }

    #[test]
    fn test_move_rejections() {
        let mut state = default_state();
        set_height(&mut state, (3, 3), 4);

        let far = MoveAction::new(&state, W00, Coord::new(4, 2));
        assert_eq!(far.check(&state), Err(IllegalAction::NotAdjacent(Coord::new(4, 2))));

        let domed = MoveAction::new(&state, W00, Coord::new(3, 3));
        assert_eq!(domed.check(&state), Err(IllegalAction::Domed(Coord::new(3, 3))));

        let blocked = MoveAction::new(&state, W10, Coord::new(3, 3));
        assert_eq!(blocked.check(&state), Err(IllegalAction::Domed(Coord::new(3, 3))));

        let crowded = state_with([God::Artemis, God::Demeter], [(2, 2), (2, 3), (4, 4), (4, 0)]);
        let onto_friend = MoveAction::new(&crowded, W00, Coord::new(2, 3));
        assert_eq!(onto_friend.check(&crowded), Err(IllegalAction::Occupied(Coord::new(2, 3))));
    }

    #[test]
    fn test_stale_move_is_rejected() {
        let mut state = default_state();
        let first = MoveAction::new(&state, W00, Coord::new(2, 3));
        let stale = MoveAction::new(&state, W00, Coord::new(1, 1));
        Action::from(first).execute(&mut state).unwrap();

        let err = Action::from(stale).execute(&mut state).unwrap_err();
        assert_eq!(err, IllegalAction::StaleSource(Coord::new(2, 2)));
    }

    #[test]
    fn test_descending_is_free() {
        let mut state = default_state();
        set_height(&mut state, (2, 2), 3);
        let down = MoveAction::new(&state, W00, Coord::new(3, 2));
        assert!(down.check(&state).is_ok());
    }

    #[test]
    fn test_build_and_rollback() {
        let mut state = default_state();
        let done = Action::from(BuildAction::new(W00, Coord::new(1, 1)))
            .execute(&mut state)
            .unwrap();
        assert_eq!(done.impact(), Some(ImpactLevel::Level1));
        assert_eq!(state.board().height(Coord::new(1, 1)), 1);

        assert!(done.rollback_build(&mut state));
        assert_eq!(state.board().height(Coord::new(1, 1)), 0);
    }

    #[test]
    fn test_build_on_own_cell_needs_power() {
        let state = default_state();
        let under = BuildAction::new(W00, Coord::new(2, 2));
        assert_eq!(under.check(&state), Err(IllegalAction::Occupied(Coord::new(2, 2))));
    }

    #[test]
    fn test_build_fourth_level_then_domed() {
        let mut state = default_state();
        set_height(&mut state, (1, 1), 3);
        let done = Action::from(BuildAction::new(W00, Coord::new(1, 1)))
            .execute(&mut state)
            .unwrap();
        assert_eq!(done.impact(), Some(ImpactLevel::Dome));
        assert!(matches!(done.effect, Effect::Built { placed: Placement::Level, .. }));

        let again = BuildAction::new(W00, Coord::new(1, 1));
        assert_eq!(again.check(&state), Err(IllegalAction::Domed(Coord::new(1, 1))));
    }

    #[test]
    fn test_remove_uses_pre_removal_height() {
        let mut state = default_state();
        set_height(&mut state, (1, 2), 2);
        let done = Action::from(RemoveBuildAction::new(W00, Coord::new(1, 2)))
            .execute(&mut state)
            .unwrap();
        assert_eq!(done.effect, Effect::Removed { at: Coord::new(1, 2), level: ImpactLevel::Level2 });
        assert_eq!(state.board().height(Coord::new(1, 2)), 1);

        let empty = RemoveBuildAction::new(W00, Coord::new(3, 3));
        assert_eq!(empty.check(&state), Err(IllegalAction::NothingToRemove(Coord::new(3, 3))));
    }

    #[test]
    fn test_remove_takes_dome_first() {
        let mut state = default_state();
        let cell = state.board_mut().cell_mut(Coord::new(2, 1)).unwrap();
        cell.building_mut().add_level();
        cell.building_mut().add_dome();

        let done = Action::from(RemoveBuildAction::new(W00, Coord::new(2, 1)))
            .execute(&mut state)
            .unwrap();
        assert_eq!(done.impact(), Some(ImpactLevel::Dome));
        assert_eq!(state.board().height(Coord::new(2, 1)), 1);
        assert!(!state.board().cell(Coord::new(2, 1)).unwrap().is_domed());
    }

    #[test]
    fn test_buildable_cells_exclude_occupied_and_domed() {
        let mut state = default_state();
        set_height(&mut state, (1, 1), 4);
        let cells = buildable_cells(&state, W01);
        assert!(!cells.contains(&Coord::new(1, 1)));
        assert!(cells.contains(&Coord::new(0, 1)));
        assert!(cells.contains(&Coord::new(1, 0)));
        assert_eq!(cells.len(), 2);
    }

    proptest! {
        #[test]
        fn prop_move_legality_matches_height_rule(from in 0u8..4, to in 0u8..5) {
            let mut state = default_state();
            set_height(&mut state, (2, 2), from);
            set_height(&mut state, (2, 3), to);
            let action = MoveAction::new(&state, W00, Coord::new(2, 3));
            let expected = to < 4 && i16::from(to) - i16::from(from) <= 1;
            prop_assert_eq!(action.check(&state).is_ok(), expected);
        }
    }
}
