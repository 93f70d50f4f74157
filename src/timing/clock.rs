//! Per-player chess clocks.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Remaining thinking time of one player.
///
/// Only a running clock loses time. Ticks are fed by the orchestrator, so
/// the clock itself never touches a timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerClock {
    remaining: Duration,
    running: bool,
}

impl PlayerClock {
    /// A paused clock holding the whole budget.
    #[must_use]
    pub fn new(budget: Duration) -> Self {
        Self { remaining: budget, running: false }
    }

    /// Time left.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// True while the clock is counting down.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True once no time is left.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Start counting down.
    pub fn resume(&mut self) {
        self.running = true;
    }

    /// Stop counting down.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Deduct `elapsed` if running. Returns true if this tick used up the
    /// last of the budget.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.running || self.is_expired() {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(elapsed);
        self.is_expired()
    }
}
