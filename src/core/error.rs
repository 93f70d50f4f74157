//! Error types.
//!
//! Recoverable errors (`IllegalAction`, `CapacityExceeded`, `InputError`)
//! send the orchestrator back into the phase it was in. Game-ending
//! conditions are not errors; see `turn::GameOutcome`.

use thiserror::Error;

use super::coord::Coord;
use crate::gods::God;
use crate::meters::ImpactLevel;
use crate::roster::WorkerId;

/// Why an action was rejected. The Display text is the reason shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalAction {
    /// The acting worker does not exist.
    #[error("unknown worker {0}")]
    UnknownWorker(WorkerId),

    /// The acting worker has not been placed.
    #[error("worker {0} is not on the board")]
    WorkerNotPlaced(WorkerId),

    /// The target coordinate is outside the board.
    #[error("cell {0} is off the board")]
    OutOfBounds(Coord),

    /// The worker left the cell the action was built from.
    #[error("worker is no longer on {0}")]
    StaleSource(Coord),

    /// Moves must go to one of the 8 neighbouring cells.
    #[error("cell {0} is too far away")]
    NotAdjacent(Coord),

    /// Builds and removals must target a neighbour or the worker's own cell.
    #[error("cell {0} is not adjacent or current")]
    NotAdjacentOrCurrent(Coord),

    /// Another worker stands on the target.
    #[error("cell {0} is occupied")]
    Occupied(Coord),

    /// The target is capped by a dome.
    #[error("cell {0} has a dome")]
    Domed(Coord),

    /// Workers climb at most one level per move.
    #[error("cannot climb from height {from} to height {to}")]
    TooHigh {
        /// Height of the source cell.
        from: u8,
        /// Height of the destination cell.
        to: u8,
    },

    /// Removal needs at least one level or a dome.
    #[error("cell {0} has nothing to remove")]
    NothingToRemove(Coord),
}

/// The shared block supply for a tier ran out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("limit of {cap} {} reached", .level.supply_name())]
pub struct CapacityExceeded {
    /// Tier whose supply ran out.
    pub level: ImpactLevel,
    /// The configured cap.
    pub cap: u32,
}

/// Rejected input from the presentation layer. The pending selection stays open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    /// Nothing is waiting for a click.
    #[error("no selection is pending")]
    NoPendingSelection,

    /// A yes/no prompt must be answered first.
    #[error("answer the god power prompt first")]
    PromptPending,

    /// No prompt is open.
    #[error("no prompt is pending")]
    NoPendingPrompt,

    /// The click did not hit one of the current player's workers.
    #[error("select one of your own workers, {0} is not")]
    NotYourWorker(Coord),

    /// The click was not on an offered cell.
    #[error("invalid selection {0}: please click a highlighted cell")]
    NotHighlighted(Coord),

    /// The click was outside the board.
    #[error("cell {0} is off the board")]
    OutOfBounds(Coord),

    /// The session has ended.
    #[error("the game is over")]
    GameOver,
}

/// Invalid configuration or setup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML could not be parsed into a config.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The game needs two players.
    #[error("need at least 2 players, got {0}")]
    TooFewPlayers(usize),

    /// Zero rows or columns.
    #[error("board must have at least one row and one column")]
    EmptyBoard,

    /// Not enough cells for every worker.
    #[error("board has {cells} cells but {workers} workers must be placed")]
    BoardTooSmall {
        /// Cells on the board.
        cells: usize,
        /// Workers to place.
        workers: usize,
    },

    /// Every player has exactly two workers.
    #[error("each player needs exactly 2 workers, got {0}")]
    WorkerCount(u8),

    /// Meter min must be below max.
    #[error("meter bounds {min}..={max} are empty")]
    InvalidMeterBounds {
        /// Configured minimum.
        min: i32,
        /// Configured maximum.
        max: i32,
    },

    /// Clock budget and tick interval must be non-zero.
    #[error("clock budget and tick interval must be non-zero")]
    ZeroClock,

    /// The god pool cannot give every player a distinct card.
    #[error("god pool has {available} cards for {players} players")]
    NotEnoughGods {
        /// Cards in the pool.
        available: usize,
        /// Players to deal to.
        players: usize,
    },

    /// Two seats were given the same god card.
    #[error("god {0} is pinned to more than one player")]
    DuplicateGod(God),

    /// Explicit worker placement was unusable.
    #[error("invalid worker placement: {0}")]
    InvalidPlacement(String),
}
