//! The capability surface every god power answers.

use crate::actions::{Action, Executed};
use crate::core::{Coord, GameState};
use crate::roster::WorkerId;

/// Per-god rule extension hooks.
///
/// The orchestrator queries these after a base action succeeds. Powers
/// only produce data (candidate actions, cells, flags); they never drive
/// the turn themselves.
///
/// ## Implementation Notes
///
/// - `modify`: return candidate extension actions for what just happened,
///   already bound to the acting worker. Empty means no extension.
/// - `can_build_on_occupied_cell`: the only way around the
///   "cannot build on an occupied cell" rule.
/// - Every method defaults to "no capability".
pub trait SpecialPower: std::fmt::Debug + Send + Sync {
    /// Extension actions offered after `executed`.
    fn modify(&self, _executed: &Executed, _state: &GameState) -> Vec<Action> {
        Vec::new()
    }

    /// Cells offered for building beyond the default neighbours.
    fn additional_build_cells(&self, _state: &GameState, _worker: WorkerId) -> Vec<Coord> {
        Vec::new()
    }

    /// Whether `worker` may build on `cell` although a worker stands there.
    fn can_build_on_occupied_cell(&self, _state: &GameState, _cell: Coord, _worker: WorkerId) -> bool {
        false
    }

    /// Whether an extension build may be offered after the first build.
    fn allows_second_build(&self) -> bool {
        false
    }

    /// Whether the remove phase is open to this power.
    fn allows_remove(&self) -> bool {
        false
    }

    /// Legal removals for `worker`.
    fn remove_options(&self, _state: &GameState, _worker: WorkerId) -> Vec<Action> {
        Vec::new()
    }
}
