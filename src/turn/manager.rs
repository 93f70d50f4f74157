//! The turn orchestrator.
//!
//! `TurnManager` owns one game session: the state, the turn rotation, the
//! global block counters, the player clocks, the build observers and the
//! win/lose conditions. It is a state machine that sits in exactly one
//! pending selection at a time and advances only when an input resolves it.
//!
//! ## Turn shape
//!
//! ```text
//! TurnStart -> SelectWorker -> Move -> [ExtraMove] -> Build -> [ExtraBuild]
//!           -> [Remove] -> TurnEnd -> (rotate) -> TurnStart
//! ```
//!
//! Bracketed steps are god-power extensions, each behind a yes/no prompt.
//! All inputs, clock ticks included, arrive through [`TurnManager::handle`]
//! on one thread.

use std::collections::VecDeque;
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use super::event::{GameInput, NoticeKind, Notification, Phase, PromptKind};
use crate::actions::{
    buildable_cells, movable_cells, Action, BuildAction, Effect, Executed, MoveAction,
};
use crate::conditions::{
    default_lose_conditions, BasicWinCondition, GameOutcome, GameOverReason, LoseCondition,
    WinCondition,
};
use crate::core::{BuildCaps, ClockConfig, Coord, GameState, InputError, PlayerId, PlayerMap};
use crate::meters::{BuildCounters, BuildObserver, ImpactLevel, MeterKind, MeterManager};
use crate::roster::WorkerId;
use crate::timing::PlayerClock;

/// What a yes/no prompt leads to.
#[derive(Clone, Copy, Debug)]
enum Offer {
    ExtraMove,
    ExtraBuild { first: Executed },
    Remove,
}

impl Offer {
    fn kind(self) -> PromptKind {
        match self {
            Offer::ExtraMove => PromptKind::ExtraMove,
            Offer::ExtraBuild { .. } => PromptKind::ExtraBuild,
            Offer::Remove => PromptKind::Remove,
        }
    }
}

/// The single open request for input.
#[derive(Clone, Debug)]
enum Pending {
    NotStarted,
    Worker,
    MoveTo { worker: WorkerId, cells: Vec<Coord> },
    ExtraMoveTo { worker: WorkerId, options: Vec<Action> },
    BuildAt { worker: WorkerId, cells: Vec<Coord> },
    ExtraBuildAt { worker: WorkerId, first: Executed, options: Vec<Action> },
    RemoveAt { worker: WorkerId, options: Vec<Action> },
    Prompt { offer: Offer, worker: WorkerId, options: Vec<Action>, waited: Duration },
    Over,
}

impl Pending {
    fn phase(&self) -> Phase {
        match self {
            Pending::NotStarted => Phase::NotStarted,
            Pending::Worker => Phase::SelectWorker,
            Pending::MoveTo { .. } => Phase::Move,
            Pending::ExtraMoveTo { .. } => Phase::ExtraMove,
            Pending::BuildAt { .. } => Phase::Build,
            Pending::ExtraBuildAt { .. } => Phase::ExtraBuild,
            Pending::RemoveAt { .. } => Phase::Remove,
            Pending::Prompt { offer, .. } => Phase::Prompt(offer.kind()),
            Pending::Over => Phase::GameOver,
        }
    }
}

/// Result of the bookkeeping after a build.
enum Settled {
    Kept,
    Reverted,
    Ended,
}

fn targets(options: &[Action]) -> Vec<Coord> {
    options.iter().map(Action::target).collect()
}

/// Sequences turns for one game session.
#[derive(Debug)]
pub struct TurnManager {
    state: GameState,
    rotation: VecDeque<PlayerId>,
    counters: BuildCounters,
    clocks: PlayerMap<PlayerClock>,
    prompt_timeout: Duration,
    observers: Vec<Box<dyn BuildObserver>>,
    win: Box<dyn WinCondition>,
    lose: Vec<Box<dyn LoseCondition>>,
    pending: Pending,
    outcome: Option<GameOutcome>,
    outbox: Vec<Notification>,
}

impl TurnManager {
    /// A session over `state` with the standard observers and conditions.
    /// Nothing happens until [`start`](Self::start).
    #[must_use]
    pub fn new(state: GameState, caps: BuildCaps, clock: ClockConfig) -> Self {
        let rotation = state.players().player_ids().collect();
        let clocks = PlayerMap::new(state.player_count(), |_| PlayerClock::new(clock.budget()));
        Self {
            state,
            rotation,
            counters: BuildCounters::new(caps),
            clocks,
            prompt_timeout: clock.prompt_timeout(),
            observers: vec![Box::new(MeterManager::new(MeterKind::Nature))],
            win: Box::new(BasicWinCondition),
            lose: default_lose_conditions(),
            pending: Pending::NotStarted,
            outcome: None,
            outbox: Vec::new(),
        }
    }

    /// Add a build observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Box<dyn BuildObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Replace the win condition.
    #[must_use]
    pub fn with_win_condition(mut self, win: Box<dyn WinCondition>) -> Self {
        self.win = win;
        self
    }

    /// Replace the lose conditions.
    #[must_use]
    pub fn with_lose_conditions(mut self, lose: Vec<Box<dyn LoseCondition>>) -> Self {
        self.lose = lose;
        self
    }

    /// Begin the first turn. Later calls do nothing.
    pub fn start(&mut self) {
        if matches!(self.pending, Pending::NotStarted) {
            info!(players = self.rotation.len(), "session started");
            self.begin_turn();
        }
    }

    /// The game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.rotation[0]
    }

    /// Seats in turn order, current first.
    pub fn rotation(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.rotation.iter().copied()
    }

    /// What the session is waiting for.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.pending.phase()
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// True once the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Blocks on the board per tier.
    #[must_use]
    pub fn counters(&self) -> &BuildCounters {
        &self.counters
    }

    /// A player's clock.
    #[must_use]
    pub fn clock(&self, player: PlayerId) -> Option<&PlayerClock> {
        self.clocks.get(player)
    }

    /// Cells currently offered for a click.
    #[must_use]
    pub fn highlighted(&self) -> Vec<Coord> {
        self.state.board().highlighted()
    }

    /// Drain notifications produced since the last call.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.outbox)
    }

    /// Seat whose lose conditions are checked: always the head of the
    /// rotation, whoever just acted.
    #[must_use]
    pub fn lose_check_subject(&self) -> PlayerId {
        self.rotation[0]
    }

    /// Dispatch one input.
    pub fn handle(&mut self, input: GameInput) -> Result<(), InputError> {
        match input {
            GameInput::Click(at) => self.handle_click(at),
            GameInput::PromptAnswer(yes) => self.answer_prompt(yes),
            GameInput::ClockTick(elapsed) => self.tick(elapsed),
        }
    }

    /// Resolve the pending worker or cell selection with a click.
    ///
    /// A rejected click leaves the selection open.
    #[instrument(skip(self), fields(player = %self.current()))]
    pub fn handle_click(&mut self, at: Coord) -> Result<(), InputError> {
        if self.outcome.is_some() {
            return Err(InputError::GameOver);
        }
        if !self.state.board().contains(at) {
            return Err(self.reject(InputError::OutOfBounds(at)));
        }
        match self.pending.clone() {
            Pending::NotStarted => Err(InputError::NoPendingSelection),
            Pending::Over => Err(InputError::GameOver),
            Pending::Prompt { .. } => Err(self.reject(InputError::PromptPending)),
            Pending::Worker => self.select_worker(at),
            Pending::MoveTo { worker, cells } => {
                self.ensure_offered(&cells, at)?;
                self.base_move(worker, at);
                Ok(())
            }
            Pending::ExtraMoveTo { worker, options } => {
                self.ensure_offered(&targets(&options), at)?;
                self.extra_move(worker, &options, at);
                Ok(())
            }
            Pending::BuildAt { worker, cells } => {
                self.ensure_offered(&cells, at)?;
                self.base_build(worker, at);
                Ok(())
            }
            Pending::ExtraBuildAt { worker, first, options } => {
                self.ensure_offered(&targets(&options), at)?;
                self.extra_build(worker, first, &options, at);
                Ok(())
            }
            Pending::RemoveAt { worker, options } => {
                self.ensure_offered(&targets(&options), at)?;
                self.remove(worker, &options, at);
                Ok(())
            }
        }
    }

    /// Answer the open god-power prompt.
    #[instrument(skip(self), fields(player = %self.current()))]
    pub fn answer_prompt(&mut self, yes: bool) -> Result<(), InputError> {
        if self.outcome.is_some() {
            return Err(InputError::GameOver);
        }
        let Pending::Prompt { offer, worker, options, .. } = self.pending.clone() else {
            return Err(self.reject(InputError::NoPendingPrompt));
        };
        debug!(kind = ?offer.kind(), yes, "prompt answered");
        if yes {
            let cells = targets(&options);
            let pending = match offer {
                Offer::ExtraMove => Pending::ExtraMoveTo { worker, options },
                Offer::ExtraBuild { first } => Pending::ExtraBuildAt { worker, first, options },
                Offer::Remove => Pending::RemoveAt { worker, options },
            };
            self.await_input(pending, cells);
            return Ok(());
        }
        match offer {
            Offer::ExtraMove => self.enter_build(worker),
            Offer::ExtraBuild { .. } => self.after_builds(worker),
            Offer::Remove => self.end_turn(),
        }
        Ok(())
    }

    /// Advance the current player's clock and any open prompt by `elapsed`.
    #[instrument(skip(self))]
    pub fn tick(&mut self, elapsed: Duration) -> Result<(), InputError> {
        if self.outcome.is_some() {
            return Err(InputError::GameOver);
        }
        let player = self.current();
        let expired = self.clocks.get_mut(player).is_some_and(|c| c.tick(elapsed));
        let updates: Vec<_> = self.clocks.iter().map(|(p, c)| (p, c.remaining())).collect();
        for (player, remaining) in updates {
            self.emit(Notification::ClockUpdate { player, remaining });
        }
        if expired {
            warn!(%player, "clock ran out");
            self.finish(self.opponent_of(player), player, GameOverReason::Timeout);
            return Ok(());
        }

        let mut timed_out = false;
        if let Pending::Prompt { waited, .. } = &mut self.pending {
            *waited += elapsed;
            timed_out = *waited >= self.prompt_timeout;
        }
        if timed_out {
            debug!("prompt timed out, answering no");
            return self.answer_prompt(false);
        }
        Ok(())
    }

    fn begin_turn(&mut self) {
        self.clear_highlights();
        if self.check_lose() {
            return;
        }
        let player = self.current();
        if let Some(clock) = self.clocks.get_mut(player) {
            clock.resume();
        }
        let name = self.state.player(player).name().to_string();
        info!(%player, %name, "turn started");
        self.emit(Notification::TurnStarted { player, name });

        let cells = self
            .state
            .player(player)
            .workers()
            .iter()
            .filter_map(|w| w.current())
            .collect();
        self.await_input(Pending::Worker, cells);
    }

    fn select_worker(&mut self, at: Coord) -> Result<(), InputError> {
        let current = self.current();
        let Some(worker) = self.state.worker_at(at).filter(|w| w.owner == current) else {
            return Err(self.reject(InputError::NotYourWorker(at)));
        };
        let cells = movable_cells(&self.state, worker);
        if cells.is_empty() {
            self.notice(
                NoticeKind::NoLegalMoves,
                "This worker has no valid moves. Please select a different worker.".to_string(),
            );
            self.begin_turn();
            return Ok(());
        }
        self.await_input(Pending::MoveTo { worker, cells: cells.clone() }, cells);
        Ok(())
    }

    fn base_move(&mut self, worker: WorkerId, at: Coord) {
        let action = Action::from(MoveAction::new(&self.state, worker, at));
        let executed = match action.execute(&mut self.state) {
            Ok(executed) => executed,
            Err(err) => {
                self.notice(NoticeKind::IllegalAction, format!("Invalid move: {err}"));
                let cells = movable_cells(&self.state, worker);
                self.await_input(Pending::MoveTo { worker, cells: cells.clone() }, cells);
                return;
            }
        };
        self.announce_move(&executed);
        if self.has_won() {
            return;
        }
        let options = self.state.power_of(worker).modify(&executed, &self.state);
        if options.is_empty() {
            self.enter_build(worker);
        } else {
            self.offer(Offer::ExtraMove, worker, options);
        }
    }

    fn extra_move(&mut self, worker: WorkerId, options: &[Action], at: Coord) {
        if let Some(action) = options.iter().copied().find(|a| a.target() == at) {
            match action.execute(&mut self.state) {
                Ok(executed) => {
                    self.announce_move(&executed);
                    if self.has_won() {
                        return;
                    }
                }
                Err(err) => debug!(%err, "extension move skipped"),
            }
        }
        self.enter_build(worker);
    }

    fn announce_move(&mut self, executed: &Executed) {
        if let Effect::Moved { from, to, .. } = executed.effect {
            let worker = executed.action.worker();
            debug!(%worker, %from, %to, "worker moved");
            self.emit(Notification::WorkerMoved { worker, from, to });
        }
    }

    fn has_won(&mut self) -> bool {
        let player = self.current();
        if !self.win.is_met(&self.state, player) {
            return false;
        }
        self.finish(player, self.opponent_of(player), GameOverReason::WinAchieved);
        true
    }

    fn enter_build(&mut self, worker: WorkerId) {
        let cells = buildable_cells(&self.state, worker);
        if cells.is_empty() {
            let loser = self.current();
            warn!(%worker, "no cell to build on");
            self.finish(self.opponent_of(loser), loser, GameOverReason::Stalemate);
            return;
        }
        self.await_input(Pending::BuildAt { worker, cells: cells.clone() }, cells);
    }

    fn base_build(&mut self, worker: WorkerId, at: Coord) {
        let executed = match Action::from(BuildAction::new(worker, at)).execute(&mut self.state) {
            Ok(executed) => executed,
            Err(err) => {
                self.notice(NoticeKind::IllegalAction, format!("Invalid build: {err}"));
                self.enter_build(worker);
                return;
            }
        };
        match self.settle_build(&executed) {
            Settled::Ended => {}
            Settled::Reverted => self.enter_build(worker),
            Settled::Kept => {
                let power = self.state.power_of(worker);
                let options = if power.allows_second_build() {
                    power.modify(&executed, &self.state)
                } else {
                    Vec::new()
                };
                if options.is_empty() {
                    self.after_builds(worker);
                } else {
                    self.offer(Offer::ExtraBuild { first: executed }, worker, options);
                }
            }
        }
    }

    fn extra_build(&mut self, worker: WorkerId, first: Executed, options: &[Action], at: Coord) {
        let Some(action) = options.iter().copied().find(|a| a.target() == at) else {
            self.after_builds(worker);
            return;
        };
        let executed = match action.execute(&mut self.state) {
            Ok(executed) => executed,
            Err(err) => {
                debug!(%err, "extension build skipped");
                self.after_builds(worker);
                return;
            }
        };
        match self.settle_build(&executed) {
            Settled::Ended => {}
            Settled::Kept => self.after_builds(worker),
            Settled::Reverted => {
                let options = self.state.power_of(worker).modify(&first, &self.state);
                if options.is_empty() {
                    self.after_builds(worker);
                } else {
                    self.offer(Offer::ExtraBuild { first }, worker, options);
                }
            }
        }
    }

    /// Charge the builder, check lose conditions, then count the block
    /// against its tier's supply, undoing the build when the supply is out.
    /// A reverted build keeps its meter charge.
    fn settle_build(&mut self, executed: &Executed) -> Settled {
        let Effect::Built { at, level, .. } = executed.effect else {
            return Settled::Kept;
        };
        let worker = executed.action.worker();
        debug!(%worker, %at, ?level, "built");
        self.emit(Notification::Built { worker, at, level });
        self.notify_observers(worker.owner, level, true);
        if self.check_lose() {
            return Settled::Ended;
        }
        if let Err(full) = self.counters.record_build(level) {
            executed.rollback_build(&mut self.state);
            warn!(%at, %full, "build reverted");
            self.emit(Notification::BuildReverted { at, level });
            self.notice(NoticeKind::CapacityExceeded, full.to_string());
            return Settled::Reverted;
        }
        Settled::Kept
    }

    fn after_builds(&mut self, worker: WorkerId) {
        if self.check_lose() {
            return;
        }
        self.enter_remove(worker);
    }

    fn enter_remove(&mut self, worker: WorkerId) {
        let power = self.state.power_of(worker);
        if !power.allows_remove() {
            self.end_turn();
            return;
        }
        let options = power.remove_options(&self.state, worker);
        if options.is_empty() {
            self.end_turn();
            return;
        }
        self.offer(Offer::Remove, worker, options);
    }

    fn remove(&mut self, worker: WorkerId, options: &[Action], at: Coord) {
        if let Some(action) = options.iter().copied().find(|a| a.target() == at) {
            match action.execute(&mut self.state) {
                Ok(Executed { effect: Effect::Removed { at, level }, .. }) => {
                    debug!(%worker, %at, ?level, "removed");
                    self.emit(Notification::Removed { worker, at, level });
                    self.counters.record_removal(level);
                    self.notify_observers(worker.owner, level, false);
                    if self.check_lose() {
                        return;
                    }
                }
                Ok(_) => {}
                Err(err) => debug!(%err, "removal skipped"),
            }
        }
        self.end_turn();
    }

    fn end_turn(&mut self) {
        let player = self.current();
        if let Some(clock) = self.clocks.get_mut(player) {
            clock.pause();
        }
        self.clear_highlights();
        if self.check_lose() {
            return;
        }
        self.rotation.rotate_left(1);
        self.begin_turn();
    }

    fn offer(&mut self, offer: Offer, worker: WorkerId, options: Vec<Action>) {
        let kind = offer.kind();
        self.await_input(
            Pending::Prompt { offer, worker, options, waited: Duration::ZERO },
            Vec::new(),
        );
        self.emit(Notification::Prompt {
            kind,
            message: kind.question().to_string(),
            timeout: self.prompt_timeout,
        });
    }

    fn notify_observers(&mut self, player: PlayerId, level: ImpactLevel, built: bool) {
        let owner = self.state.player_mut(player);
        for observer in &mut self.observers {
            if built {
                observer.on_build(owner, level);
            } else {
                observer.on_remove(owner, level);
            }
        }
        if let Some(value) = self.state.player(player).meter(MeterKind::Nature).map(|m| m.value()) {
            self.emit(Notification::MeterChanged {
                player,
                kind: MeterKind::Nature,
                value,
            });
        }
    }

    /// Evaluate lose conditions for [`lose_check_subject`](Self::lose_check_subject)
    /// and end the game if one holds.
    fn check_lose(&mut self) -> bool {
        let subject = self.lose_check_subject();
        let Some(reason) = self
            .lose
            .iter()
            .find(|c| c.is_met(&self.state, subject))
            .map(|c| c.reason())
        else {
            return false;
        };
        self.finish(self.opponent_of(subject), subject, reason);
        true
    }

    fn opponent_of(&self, player: PlayerId) -> PlayerId {
        self.rotation
            .iter()
            .copied()
            .find(|&p| p != player)
            .unwrap_or(player)
    }

    fn finish(&mut self, winner: PlayerId, loser: PlayerId, reason: GameOverReason) {
        for (_, clock) in self.clocks.iter_mut() {
            clock.pause();
        }
        self.clear_highlights();
        self.pending = Pending::Over;
        self.outcome = Some(GameOutcome { winner, loser, reason });
        let winner_name = self.state.player(winner).name().to_string();
        info!(%winner, %winner_name, %loser, ?reason, "game over");
        self.emit(Notification::GameOver {
            winner,
            winner_name,
            loser,
            reason,
        });
    }

    fn await_input(&mut self, pending: Pending, cells: Vec<Coord>) {
        let board = self.state.board_mut();
        board.clear_highlights();
        for &cell in &cells {
            board.highlight_cell(cell);
        }
        self.pending = pending;
        let phase = self.pending.phase();
        debug!(?phase, offered = cells.len(), "awaiting input");
        self.emit(Notification::PhaseChanged {
            player: self.current(),
            phase,
        });
        self.emit(Notification::ClearHighlights);
        if !cells.is_empty() {
            self.emit(Notification::Highlight { cells });
        }
    }

    fn clear_highlights(&mut self) {
        self.state.board_mut().clear_highlights();
        self.emit(Notification::ClearHighlights);
    }

    fn ensure_offered(&mut self, cells: &[Coord], at: Coord) -> Result<(), InputError> {
        if cells.contains(&at) {
            Ok(())
        } else {
            Err(self.reject(InputError::NotHighlighted(at)))
        }
    }

    fn reject(&mut self, err: InputError) -> InputError {
        debug!(%err, "input rejected");
        self.notice(NoticeKind::InvalidSelection, err.to_string());
        err
    }

    fn notice(&mut self, kind: NoticeKind, text: String) {
        self.emit(Notification::Notice { kind, text });
    }

    fn emit(&mut self, notification: Notification) {
        self.outbox.push(notification);
    }
}
