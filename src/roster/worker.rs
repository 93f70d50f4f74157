//! Workers: the two pieces each player moves and builds with.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, PlayerId};

/// Identifies a worker by owner and slot (0 or 1 in a standard game).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkerId {
    /// Owning player.
    pub owner: PlayerId,
    /// Index among the owner's workers.
    pub slot: u8,
}

impl WorkerId {
    /// Create a worker id.
    #[must_use]
    pub const fn new(owner: PlayerId, slot: u8) -> Self {
        Self { owner, slot }
    }
}

impl std::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.slot)
    }
}

/// Heights on both ends of a worker's latest move.
///
/// Captured when the move happens; later builds or removals on either cell
/// do not rewrite it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Climb {
    /// Height of the cell moved from.
    pub from_height: u8,
    /// Height of the cell moved to.
    pub to_height: u8,
}

/// A worker piece. Remembers only its immediately previous cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    id: WorkerId,
    current: Option<Coord>,
    previous: Option<Coord>,
    last_climb: Option<Climb>,
}

impl Worker {
    /// An unplaced worker.
    #[must_use]
    pub fn new(id: WorkerId) -> Self {
        Self {
            id,
            current: None,
            previous: None,
            last_climb: None,
        }
    }

    /// This worker's id.
    #[must_use]
    pub fn id(&self) -> WorkerId {
        self.id
    }

    /// Owning player.
    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.id.owner
    }

    /// Current cell, `None` before placement.
    #[must_use]
    pub fn current(&self) -> Option<Coord> {
        self.current
    }

    /// Cell occupied before the latest move.
    #[must_use]
    pub fn previous(&self) -> Option<Coord> {
        self.previous
    }

    /// Heights of the latest move.
    #[must_use]
    pub fn last_climb(&self) -> Option<Climb> {
        self.last_climb
    }

    /// Setup placement. Not a move: no previous cell, no climb.
    pub(crate) fn place(&mut self, at: Coord) {
        self.current = Some(at);
        self.previous = None;
        self.last_climb = None;
    }

    /// Record a move. The caller keeps the board in sync.
    pub(crate) fn step(&mut self, to: Coord, climb: Climb) {
        self.previous = self.current;
        self.current = Some(to);
        self.last_climb = Some(climb);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_remembers_only_previous_cell() {
        let mut w = Worker::new(WorkerId::new(PlayerId::new(0), 1));
        w.place(Coord::new(0, 0));
        assert_eq!(w.previous(), None);

        w.step(Coord::new(0, 1), Climb { from_height: 0, to_height: 1 });
        w.step(Coord::new(1, 1), Climb { from_height: 1, to_height: 1 });

        assert_eq!(w.current(), Some(Coord::new(1, 1)));
        assert_eq!(w.previous(), Some(Coord::new(0, 1)));
        assert_eq!(w.last_climb(), Some(Climb { from_height: 1, to_height: 1 }));
    }
}
