//! Channel-driven session loop.

use std::sync::mpsc::{Receiver, Sender};

use tracing::{debug, info};

use super::event::{GameInput, Notification};
use super::manager::TurnManager;
use crate::conditions::GameOutcome;

/// Run `manager` on the calling thread, applying inputs in arrival order.
///
/// Clicks, prompt answers and clock ticks all come through `inputs`, so
/// they are serialized with each other. Notifications are forwarded to
/// `outputs` after every input. Returns the outcome when the game ends, or
/// `None` if every input sender (or the output receiver) hung up first.
pub fn run_session(
    manager: &mut TurnManager,
    inputs: Receiver<GameInput>,
    outputs: &Sender<Notification>,
) -> Option<GameOutcome> {
    manager.start();
    loop {
        if !forward(manager, outputs) {
            debug!("notification receiver gone");
            return manager.outcome();
        }
        if let Some(outcome) = manager.outcome() {
            info!(winner = %outcome.winner, reason = ?outcome.reason, "session finished");
            return Some(outcome);
        }
        let Ok(input) = inputs.recv() else {
            debug!("input channel closed");
            return None;
        };
        if let Err(err) = manager.handle(input) {
            debug!(%err, ?input, "input rejected");
        }
    }
}

fn forward(manager: &mut TurnManager, outputs: &Sender<Notification>) -> bool {
    manager
        .take_notifications()
        .into_iter()
        .all(|n| outputs.send(n).is_ok())
}
