//! Win and lose conditions, and how a game ends.
//!
//! Conditions are pure predicates over a [`GameState`] and a seat. The
//! orchestrator decides when to evaluate them: the win condition right
//! after a move, lose conditions at turn start, after every build and
//! removal, and at turn end.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::actions::movable_cells;
use crate::core::{GameState, PlayerId};
use crate::meters::MeterKind;
use crate::roster::Climb;

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOverReason {
    /// A worker climbed onto the third level.
    WinAchieved,
    /// A player's clock ran out.
    Timeout,
    /// A player's nature meter ran dry.
    ResourceDepleted,
    /// A player could not move or could not build.
    Stalemate,
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameOverReason::WinAchieved => "climbed to the third level",
            GameOverReason::Timeout => "ran out of time",
            GameOverReason::ResourceDepleted => "depleted nature",
            GameOverReason::Stalemate => "has no legal moves",
        })
    }
}

/// Final result of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub reason: GameOverReason,
}

/// Decides whether a player has won.
pub trait WinCondition: fmt::Debug + Send {
    /// True if `player` has met the condition.
    fn is_met(&self, state: &GameState, player: PlayerId) -> bool;
}

/// Decides whether a player has lost.
pub trait LoseCondition: fmt::Debug + Send {
    /// True if `player` has met the condition.
    fn is_met(&self, state: &GameState, player: PlayerId) -> bool;

    /// Reason reported when the condition fires.
    fn reason(&self) -> GameOverReason;
}

/// Climbing from level 2 onto level 3 wins.
///
/// Uses the heights recorded when the worker moved, so a later build
/// under or next to the worker cannot turn an old move into a win.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicWinCondition;

const WINNING_CLIMB: Climb = Climb { from_height: 2, to_height: 3 };

impl WinCondition for BasicWinCondition {
    fn is_met(&self, state: &GameState, player: PlayerId) -> bool {
        state
            .player(player)
            .workers()
            .iter()
            .any(|w| w.last_climb() == Some(WINNING_CLIMB))
    }
}

/// No worker of the player has anywhere to move.
#[derive(Clone, Copy, Debug, Default)]
pub struct StuckLoseCondition;

impl LoseCondition for StuckLoseCondition {
    fn is_met(&self, state: &GameState, player: PlayerId) -> bool {
        state
            .player(player)
            .worker_ids()
            .all(|w| movable_cells(state, w).is_empty())
    }

    fn reason(&self) -> GameOverReason {
        GameOverReason::Stalemate
    }
}

/// The player's nature meter is empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct NatureMeterDepletedLoseCondition;

impl LoseCondition for NatureMeterDepletedLoseCondition {
    fn is_met(&self, state: &GameState, player: PlayerId) -> bool {
        state
            .player(player)
            .meter(MeterKind::Nature)
            .is_some_and(|m| m.is_depleted())
    }

    fn reason(&self) -> GameOverReason {
        GameOverReason::ResourceDepleted
    }
}

/// The lose conditions every session checks, in evaluation order.
#[must_use]
pub fn default_lose_conditions() -> Vec<Box<dyn LoseCondition>> {
    vec![
        Box::new(StuckLoseCondition),
        Box::new(NatureMeterDepletedLoseCondition),
    ]
}
