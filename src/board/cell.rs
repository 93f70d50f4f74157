//! A single board cell.

use serde::{Deserialize, Serialize};

use super::building::Building;
use crate::core::Coord;
use crate::roster::WorkerId;

/// One square of the board: a building, at most one worker, and a
/// highlight flag for the presentation layer.
///
/// The highlight flag has no gameplay meaning; rule code never reads it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coord: Coord,
    worker: Option<WorkerId>,
    building: Building,
    highlighted: bool,
}

impl Cell {
    /// An empty cell at `coord`.
    #[must_use]
    pub fn new(coord: Coord) -> Self {
        Self {
            coord,
            worker: None,
            building: Building::new(),
            highlighted: false,
        }
    }

    /// Position of this cell.
    #[must_use]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Worker standing here.
    #[must_use]
    pub fn worker(&self) -> Option<WorkerId> {
        self.worker
    }

    /// True if a worker stands here.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.worker.is_some()
    }

    pub(crate) fn set_worker(&mut self, worker: Option<WorkerId>) {
        self.worker = worker;
    }

    /// The building on this cell.
    #[must_use]
    pub fn building(&self) -> &Building {
        &self.building
    }

    /// Mutable building access.
    pub fn building_mut(&mut self) -> &mut Building {
        &mut self.building
    }

    /// Shorthand for `building().height()`.
    #[must_use]
    pub fn height(&self) -> u8 {
        self.building.height()
    }

    /// Shorthand for `building().is_domed()`.
    #[must_use]
    pub fn is_domed(&self) -> bool {
        self.building.is_domed()
    }

    /// Highlight flag for the presentation layer.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub(crate) fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }
}
