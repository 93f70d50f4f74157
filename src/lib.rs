//! # santorini-rules
//!
//! Rules engine for a two-player Santorini variant with god powers, a
//! nature meter, a shared block supply and per-player clocks.
//!
//! ## Design Principles
//!
//! 1. **Actions are one-shot values**: a move, build or removal is built
//!    against the current state, checked, then consumed by `execute`.
//!
//! 2. **God powers are data**: powers answer capability queries and return
//!    candidate actions; they never drive the turn themselves.
//!
//! 3. **One rule thread**: every input, clock ticks included, goes through
//!    `TurnManager::handle` in order. No locks.
//!
//! ## Modules
//!
//! - `core`: Coordinates, seats, state, RNG, configuration, errors
//! - `board`: Buildings, cells, the grid
//! - `roster`: Workers, players, initial placement
//! - `actions`: Move, Build and RemoveBuild
//! - `gods`: Special powers and the god card pool
//! - `conditions`: Win and lose conditions, game outcomes
//! - `meters`: Nature meter, impact tiers, build observers, block supply
//! - `timing`: Player clocks and the background ticker
//! - `turn`: The turn orchestrator, its inputs and notifications
//! - `game`: Building a session from a config

pub mod core;
pub mod board;
pub mod roster;
pub mod actions;
pub mod gods;
pub mod conditions;
pub mod meters;
pub mod timing;
pub mod turn;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Coord, PlayerId, PlayerMap,
    GameRng, GameConfig, BuildCaps, ClockConfig, MeterBounds,
    CapacityExceeded, ConfigError, IllegalAction, InputError,
    GameState,
};

pub use crate::board::{Board, Building, Cell};

pub use crate::roster::{
    FixedPlacement, Player, RandomPlacement, Worker, WorkerColour, WorkerId, WorkerPlacement,
};

pub use crate::actions::{Action, ActionKind, BuildAction, Effect, Executed, MoveAction, RemoveBuildAction};

pub use crate::gods::{God, GodCardPool, SpecialPower};

pub use crate::conditions::{GameOutcome, GameOverReason, LoseCondition, WinCondition};

pub use crate::meters::{BuildCounters, ImpactLevel, MeterKind, MeterStrategy, NatureMeter};

pub use crate::timing::{PlayerClock, Ticker};

pub use crate::turn::{run_session, GameInput, Notification, Phase, TurnManager};

pub use crate::game::GameBuilder;
