//! What goes into the orchestrator and what comes out of it.
//!
//! The presentation layer sends [`GameInput`]s and renders the
//! [`Notification`]s it gets back. Neither side sees the other's internals.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::conditions::GameOverReason;
use crate::core::{Coord, PlayerId};
use crate::meters::{ImpactLevel, MeterKind};
use crate::roster::WorkerId;

/// One input event for the rule thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameInput {
    /// The user clicked a cell.
    Click(Coord),
    /// The user answered the open yes/no prompt.
    PromptAnswer(bool),
    /// Wall-clock time passed.
    ClockTick(Duration),
}

/// Which optional god power step a prompt is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromptKind {
    ExtraMove,
    ExtraBuild,
    Remove,
}

impl PromptKind {
    /// Question shown to the player.
    #[must_use]
    pub fn question(self) -> &'static str {
        match self {
            PromptKind::ExtraMove => "Use god power to move again?",
            PromptKind::ExtraBuild => "Use god power to build again?",
            PromptKind::Remove => "Use god power to remove a block?",
        }
    }
}

/// Category of a transient message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoticeKind {
    /// An action was rejected; the phase repeats.
    IllegalAction,
    /// A build hit the shared block supply and was undone.
    CapacityExceeded,
    /// The selected worker cannot move.
    NoLegalMoves,
    /// The click did not hit an offered cell or worker.
    InvalidSelection,
}

/// Where in the turn the orchestrator is waiting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The session has not started.
    NotStarted,
    /// Waiting for one of the current player's workers.
    SelectWorker,
    /// Waiting for a move destination.
    Move,
    /// Waiting for an extension move destination.
    ExtraMove,
    /// Waiting for a build target.
    Build,
    /// Waiting for an extension build target.
    ExtraBuild,
    /// Waiting for a removal target.
    Remove,
    /// Waiting for a yes/no answer.
    Prompt(PromptKind),
    /// The game has ended.
    GameOver,
}

/// Output for the presentation layer, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    TurnStarted {
        player: PlayerId,
        name: String,
    },
    PhaseChanged {
        player: PlayerId,
        phase: Phase,
    },
    Highlight {
        cells: Vec<Coord>,
    },
    ClearHighlights,
    /// Ask a yes/no question; no answer within `timeout` counts as "no".
    Prompt {
        kind: PromptKind,
        message: String,
        timeout: Duration,
    },
    Notice {
        kind: NoticeKind,
        text: String,
    },
    WorkerMoved {
        worker: WorkerId,
        from: Coord,
        to: Coord,
    },
    Built {
        worker: WorkerId,
        at: Coord,
        level: ImpactLevel,
    },
    /// A build was undone because its tier's supply ran out.
    BuildReverted {
        at: Coord,
        level: ImpactLevel,
    },
    Removed {
        worker: WorkerId,
        at: Coord,
        level: ImpactLevel,
    },
    MeterChanged {
        player: PlayerId,
        kind: MeterKind,
        value: i32,
    },
    ClockUpdate {
        player: PlayerId,
        remaining: Duration,
    },
    GameOver {
        winner: PlayerId,
        winner_name: String,
        loser: PlayerId,
        reason: GameOverReason,
    },
}
