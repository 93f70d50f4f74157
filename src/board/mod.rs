//! Board model: grid topology, cells, and buildings.

mod building;
mod cell;
mod grid;

pub use building::{Building, Dome, Level, MAX_HEIGHT};
pub use cell::Cell;
pub use grid::{Board, Neighbours};
