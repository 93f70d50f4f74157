//! Core engine types: coordinates, seats, state, RNG, configuration, errors.
//!
//! Nothing here knows about turn order or god powers; those live in
//! `turn` and `gods` and operate on the `GameState` defined here.

pub mod coord;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use coord::Coord;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{BuildCaps, ClockConfig, GameConfig, MeterBounds, WORKERS_PER_PLAYER};
pub use error::{CapacityExceeded, ConfigError, IllegalAction, InputError};
pub use state::GameState;
