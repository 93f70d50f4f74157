//! Players: identity, workers, god card, colour, and meters.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::worker::{Worker, WorkerId};
use crate::core::PlayerId;
use crate::gods::God;
use crate::meters::{MeterKind, MeterStrategy};

/// Colour tag of a player's workers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkerColour {
    /// Blue workers.
    Blue,
    /// Red workers.
    Red,
}

impl WorkerColour {
    /// Every colour, in the order they are shuffled at setup.
    pub const ALL: [WorkerColour; 2] = [WorkerColour::Blue, WorkerColour::Red];
}

/// One seat at the table.
#[derive(Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    workers: SmallVec<[Worker; 2]>,
    god: God,
    colour: WorkerColour,
    meters: FxHashMap<MeterKind, Box<dyn MeterStrategy>>,
}

impl Player {
    /// Create a player with `worker_count` unplaced workers and no meters.
    #[must_use]
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        god: God,
        colour: WorkerColour,
        worker_count: u8,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            workers: (0..worker_count)
                .map(|slot| Worker::new(WorkerId::new(id, slot)))
                .collect(),
            god,
            colour,
            meters: FxHashMap::default(),
        }
    }

    /// Attach a meter, replacing any meter of the same kind.
    #[must_use]
    pub fn with_meter(mut self, kind: MeterKind, meter: Box<dyn MeterStrategy>) -> Self {
        self.meters.insert(kind, meter);
        self
    }

    /// Seat id.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// God card, fixed for the game.
    #[must_use]
    pub fn god(&self) -> God {
        self.god
    }

    /// Worker colour tag.
    #[must_use]
    pub fn colour(&self) -> WorkerColour {
        self.colour
    }

    /// All workers.
    #[must_use]
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// Ids of all workers.
    pub fn worker_ids(&self) -> impl Iterator<Item = WorkerId> + '_ {
        self.workers.iter().map(Worker::id)
    }

    /// A worker of this player.
    #[must_use]
    pub fn worker(&self, id: WorkerId) -> Option<&Worker> {
        if id.owner != self.id {
            return None;
        }
        self.workers.get(usize::from(id.slot))
    }

    pub(crate) fn worker_mut(&mut self, id: WorkerId) -> Option<&mut Worker> {
        if id.owner != self.id {
            return None;
        }
        self.workers.get_mut(usize::from(id.slot))
    }

    /// A meter by kind.
    #[must_use]
    pub fn meter(&self, kind: MeterKind) -> Option<&dyn MeterStrategy> {
        self.meters.get(&kind).map(Box::as_ref)
    }

    /// Mutable meter access.
    pub fn meter_mut(&mut self, kind: MeterKind) -> Option<&mut (dyn MeterStrategy + 'static)> {
        self.meters.get_mut(&kind).map(Box::as_mut)
    }
}
