//! Game state: the board plus the players and their workers.
//!
//! `GameState` is what actions read and mutate. It holds no turn order, no
//! counters and no clocks; the orchestrator owns those for one session.

use super::coord::Coord;
use super::error::IllegalAction;
use super::player::{PlayerId, PlayerMap};
use crate::board::Board;
use crate::gods::SpecialPower;
use crate::roster::{Player, Worker, WorkerId};

/// Board and players of one game.
#[derive(Debug)]
pub struct GameState {
    board: Board,
    players: PlayerMap<Player>,
}

impl GameState {
    /// Assemble a state. Worker positions must already be mirrored on the board.
    #[must_use]
    pub fn new(board: Board, players: PlayerMap<Player>) -> Self {
        Self { board, players }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// All players by seat.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// A player by seat.
    ///
    /// # Panics
    ///
    /// Panics on an unknown seat; seats come from the same state.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Mutable player access.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// Look up a worker.
    #[must_use]
    pub fn worker(&self, id: WorkerId) -> Option<&Worker> {
        self.players.get(id.owner)?.worker(id)
    }

    /// Mutable worker lookup.
    pub fn worker_mut(&mut self, id: WorkerId) -> Option<&mut Worker> {
        self.players.get_mut(id.owner)?.worker_mut(id)
    }

    /// Current cell of a placed worker.
    pub fn worker_position(&self, id: WorkerId) -> Result<Coord, IllegalAction> {
        self.worker(id)
            .ok_or(IllegalAction::UnknownWorker(id))?
            .current()
            .ok_or(IllegalAction::WorkerNotPlaced(id))
    }

    /// Worker standing on a cell, if any.
    #[must_use]
    pub fn worker_at(&self, coord: Coord) -> Option<WorkerId> {
        self.board.cell(coord)?.worker()
    }

    /// The special power of the worker's owner.
    #[must_use]
    pub fn power_of(&self, worker: WorkerId) -> &'static dyn SpecialPower {
        self.player(worker.owner).god().power()
    }

    /// Put a worker on a cell, keeping board and worker in sync.
    ///
    /// Used during setup; in play, workers only change cells through a move.
    pub fn place_worker(&mut self, id: WorkerId, at: Coord) -> Result<(), IllegalAction> {
        let cell = self.board.cell(at).ok_or(IllegalAction::OutOfBounds(at))?;
        if cell.is_occupied() {
            return Err(IllegalAction::Occupied(at));
        }
        let worker = self.worker_mut(id).ok_or(IllegalAction::UnknownWorker(id))?;
        let old = worker.current();
        worker.place(at);
        if let Some(old) = old {
            if let Some(cell) = self.board.cell_mut(old) {
                cell.set_worker(None);
            }
        }
        if let Some(cell) = self.board.cell_mut(at) {
            cell.set_worker(Some(id));
        }
        Ok(())
    }
}
