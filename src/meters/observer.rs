//! Build observers: react to every successful build and removal.

use tracing::trace;

use super::impact::ImpactLevel;
use super::nature::MeterKind;
use crate::roster::Player;

/// Notified after each successful build or removal by the acting player.
pub trait BuildObserver: std::fmt::Debug + Send {
    /// A block of `level` was placed by `player`.
    fn on_build(&mut self, player: &mut Player, level: ImpactLevel);

    /// A block of `level` was removed by `player`.
    fn on_remove(&mut self, player: &mut Player, level: ImpactLevel);
}

/// Charges the acting player's meter on builds and refunds it on removals.
#[derive(Clone, Copy, Debug)]
pub struct MeterManager {
    kind: MeterKind,
}

impl MeterManager {
    /// Manage meters of `kind`.
    #[must_use]
    pub fn new(kind: MeterKind) -> Self {
        Self { kind }
    }
}

impl BuildObserver for MeterManager {
    fn on_build(&mut self, player: &mut Player, level: ImpactLevel) {
        if let Some(meter) = player.meter_mut(self.kind) {
            meter.adjust(-level.impact());
            trace!(player = %player.name(), ?level, "meter charged");
        }
    }

    fn on_remove(&mut self, player: &mut Player, level: ImpactLevel) {
        if let Some(meter) = player.meter_mut(self.kind) {
            meter.adjust(level.impact());
            trace!(player = %player.name(), ?level, "meter refunded");
        }
    }
}
