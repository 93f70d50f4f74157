//! Shared helpers for integration tests.

#![allow(dead_code)]

use santorini_rules::board::Building;
use santorini_rules::core::{BuildCaps, ClockConfig, Coord, GameConfig, InputError, MeterBounds};
use santorini_rules::game::GameBuilder;
use santorini_rules::gods::God;
use santorini_rules::roster::FixedPlacement;
use santorini_rules::turn::{Notification, Phase, TurnManager};
use tracing_subscriber::EnvFilter;

/// Install a test subscriber once. Set `RUST_LOG` to see engine logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A hand-built starting position.
pub struct Scenario {
    config: GameConfig,
    gods: [God; 2],
    workers: [(u8, u8); 4],
    heights: Vec<((u8, u8), u8)>,
}

impl Scenario {
    /// Default 5x5 game; seat 0 workers on (2,2) and (0,0), seat 1 on (4,4) and (4,0).
    pub fn new(gods: [God; 2]) -> Self {
        Self {
            config: GameConfig::default(),
            gods,
            workers: [(2, 2), (0, 0), (4, 4), (4, 0)],
            heights: Vec::new(),
        }
    }

    /// Worker cells: seat 0 slot 0, seat 0 slot 1, seat 1 slot 0, seat 1 slot 1.
    pub fn workers(mut self, cells: [(u8, u8); 4]) -> Self {
        self.workers = cells;
        self
    }

    /// Pre-build `height` levels on a cell.
    pub fn height(mut self, at: (u8, u8), height: u8) -> Self {
        self.heights.push((at, height));
        self
    }

    pub fn caps(mut self, caps: BuildCaps) -> Self {
        self.config = self.config.with_build_caps(caps);
        self
    }

    pub fn clock(mut self, clock: ClockConfig) -> Self {
        self.config = self.config.with_clock(clock);
        self
    }

    pub fn meter(mut self, bounds: MeterBounds) -> Self {
        self.config = self.config.with_nature_meter(bounds);
        self
    }

    /// A started session.
    pub fn start(self) -> TurnManager {
        init_tracing();
        let mut builder = GameBuilder::new(self.config.clone())
            .with_gods(self.gods)
            .with_placement(FixedPlacement::new(self.workers.map(Coord::from)));
        let mut state = builder.build_state().unwrap();
        for (at, height) in self.heights {
            *state.board_mut().cell_mut(at.into()).unwrap().building_mut() =
                Building::with_height(height);
        }
        let mut manager = TurnManager::new(state, self.config.build_caps, self.config.clock);
        manager.start();
        manager
    }
}

pub fn click(manager: &mut TurnManager, at: (u8, u8)) -> Result<(), InputError> {
    manager.handle_click(at.into())
}

/// Select a worker, move it, build, and say no to any god power prompt.
pub fn plain_turn(manager: &mut TurnManager, worker: (u8, u8), to: (u8, u8), build: (u8, u8)) {
    click(manager, worker).unwrap();
    click(manager, to).unwrap();
    decline(manager);
    click(manager, build).unwrap();
    decline(manager);
}

/// Answer "no" while a prompt is open.
pub fn decline(manager: &mut TurnManager) {
    while matches!(manager.phase(), Phase::Prompt(_)) {
        manager.answer_prompt(false).unwrap();
    }
}

pub fn height(manager: &TurnManager, at: (u8, u8)) -> u8 {
    manager.state().board().height(at.into())
}

pub fn has<F: Fn(&Notification) -> bool>(notifications: &[Notification], pred: F) -> bool {
    notifications.iter().any(pred)
}
