//! Initial worker placement strategies.

use tracing::debug;

use super::worker::WorkerId;
use crate::core::{ConfigError, Coord, GameRng, GameState};

/// Puts every worker of every player on a distinct cell.
pub trait WorkerPlacement {
    /// Place all workers in `state`.
    fn place_workers(&mut self, state: &mut GameState) -> Result<(), ConfigError>;
}

fn all_workers(state: &GameState) -> Vec<WorkerId> {
    state
        .players()
        .iter()
        .flat_map(|(_, p)| p.worker_ids())
        .collect()
}

/// Shuffles every cell and deals them out in seat order.
#[derive(Clone, Debug)]
pub struct RandomPlacement {
    rng: GameRng,
}

impl RandomPlacement {
    /// Use `rng` for the shuffle.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl WorkerPlacement for RandomPlacement {
    fn place_workers(&mut self, state: &mut GameState) -> Result<(), ConfigError> {
        let mut cells: Vec<Coord> = state.board().coords().collect();
        self.rng.shuffle(&mut cells);

        let workers = all_workers(state);
        if workers.len() > cells.len() {
            return Err(ConfigError::BoardTooSmall {
                cells: cells.len(),
                workers: workers.len(),
            });
        }
        for (worker, at) in workers.into_iter().zip(cells) {
            debug!(%worker, %at, "placing worker");
            state
                .place_worker(worker, at)
                .map_err(|e| ConfigError::InvalidPlacement(e.to_string()))?;
        }
        Ok(())
    }
}

/// Places workers on explicit cells: seat order, then slot order.
#[derive(Clone, Debug, Default)]
pub struct FixedPlacement {
    cells: Vec<Coord>,
}

impl FixedPlacement {
    /// One coordinate per worker, seat 0 slot 0 first.
    #[must_use]
    pub fn new(cells: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }
}

impl WorkerPlacement for FixedPlacement {
    fn place_workers(&mut self, state: &mut GameState) -> Result<(), ConfigError> {
        let workers = all_workers(state);
        if workers.len() != self.cells.len() {
            return Err(ConfigError::InvalidPlacement(format!(
                "{} workers but {} cells given",
                workers.len(),
                self.cells.len()
            )));
        }
        for (worker, &at) in workers.into_iter().zip(&self.cells) {
            state
                .place_worker(worker, at)
                .map_err(|e| ConfigError::InvalidPlacement(e.to_string()))?;
        }
        Ok(())
    }
}
