//! Property tests over random legal play.

use proptest::prelude::*;
use santorini_rules::actions::{
    buildable_cells, movable_cells, Action, BuildAction, Effect, MoveAction, Placement,
};
use santorini_rules::board::MAX_HEIGHT;
use santorini_rules::core::{GameConfig, GameState, PlayerId};
use santorini_rules::game::GameBuilder;
use santorini_rules::roster::WorkerId;

fn fresh(seed: u64) -> GameState {
    GameBuilder::new(GameConfig::default().with_seed(seed))
        .build_state()
        .unwrap()
}

proptest! {
    /// Moving then building never places an explicit dome piece, and
    /// heights never pass the maximum.
    #[test]
    fn prop_move_build_never_places_dome_piece(
        seed in any::<u64>(),
        picks in proptest::collection::vec((0usize..2, any::<usize>(), any::<usize>()), 1..60),
    ) {
        let mut state = fresh(seed);
        for (turn, (slot, move_pick, build_pick)) in picks.into_iter().enumerate() {
            let player = PlayerId::new((turn % 2) as u8);
            let worker = WorkerId::new(player, slot as u8);
            let moves = movable_cells(&state, worker);
            if moves.is_empty() {
                continue;
            }
            let to = moves[move_pick % moves.len()];
            let moved = Action::from(MoveAction::new(&state, worker, to)).execute(&mut state);
            prop_assert!(moved.is_ok());

            let builds = buildable_cells(&state, worker);
            if builds.is_empty() {
                continue;
            }
            let at = builds[build_pick % builds.len()];
            let built = Action::from(BuildAction::new(worker, at)).execute(&mut state).unwrap();
            match built.effect {
                Effect::Built { placed, .. } => prop_assert_eq!(placed, Placement::Level),
                other => prop_assert!(false, "unexpected effect {:?}", other),
            }
            prop_assert!(state.board().cells().all(|c| c.height() <= MAX_HEIGHT));
        }
    }

    /// Offered moves never climb more than one level or land on a worker.
    #[test]
    fn prop_offered_moves_are_legal(seed in any::<u64>(), slot in 0u8..2) {
        let state = fresh(seed);
        let worker = WorkerId::new(PlayerId::new(0), slot);
        let here = state.worker_position(worker).unwrap();
        for to in movable_cells(&state, worker) {
            prop_assert!(here.is_adjacent(to));
            prop_assert!(state.worker_at(to).is_none());
            prop_assert!(state.board().height(to) <= state.board().height(here) + 1);
        }
    }
}
