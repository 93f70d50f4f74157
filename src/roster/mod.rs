//! Players, their workers, and initial placement.

mod placement;
mod player;
mod worker;

pub use placement::{FixedPlacement, RandomPlacement, WorkerPlacement};
pub use player::{Player, WorkerColour};
pub use worker::{Climb, Worker, WorkerId};
