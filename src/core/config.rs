//! Game configuration.
//!
//! Board size, meter bounds, block supply and clock budget live here so
//! sessions and tests can vary them.
//! Configs deserialize from TOML with per-field defaults:
//!
//! ```
//! use santorini_rules::core::GameConfig;
//!
//! let config = GameConfig::from_toml_str(r#"
//!     seed = 9
//!     [build_caps]
//!     dome = 2
//! "#).unwrap();
//!
//! assert_eq!(config.seed, 9);
//! assert_eq!(config.build_caps.dome, 2);
//! assert_eq!(config.build_caps.first_floor, 22);
//! assert_eq!(config.rows, 5);
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::ConfigError;
use crate::meters::ImpactLevel;

/// Workers each player moves and builds with.
pub const WORKERS_PER_PLAYER: u8 = 2;

/// Inclusive bounds of a player meter. Meters start full.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeterBounds {
    /// Lowest value the meter clamps to.
    pub min: i32,
    /// Highest value, and the starting value.
    pub max: i32,
}

impl Default for MeterBounds {
    fn default() -> Self {
        Self { min: 0, max: 100 }
    }
}

/// Global block supply shared by both players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildCaps {
    /// First-floor blocks.
    pub first_floor: u32,
    /// Second-floor blocks.
    pub second_floor: u32,
    /// Third-floor blocks.
    pub third_floor: u32,
    /// Domes.
    pub dome: u32,
}

impl Default for BuildCaps {
    fn default() -> Self {
        Self {
            first_floor: 22,
            second_floor: 18,
            third_floor: 14,
            dome: 18,
        }
    }
}

impl BuildCaps {
    /// The cap for a block tier.
    #[must_use]
    pub fn cap_for(&self, level: ImpactLevel) -> u32 {
        match level {
            ImpactLevel::Level1 => self.first_floor,
            ImpactLevel::Level2 => self.second_floor,
            ImpactLevel::Level3 => self.third_floor,
            ImpactLevel::Dome => self.dome,
        }
    }
}

/// Clock settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Time budget per player, in seconds.
    pub budget_secs: u64,
    /// A god-power prompt resolves to "no" after this many seconds.
    pub prompt_timeout_secs: u64,
    /// Interval between clock ticks, in milliseconds.
    pub tick_millis: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            budget_secs: 5 * 60,
            prompt_timeout_secs: 10,
            tick_millis: 1000,
        }
    }
}

impl ClockConfig {
    /// Per-player budget.
    #[must_use]
    pub fn budget(&self) -> Duration {
        Duration::from_secs(self.budget_secs)
    }

    /// Prompt auto-decline delay.
    #[must_use]
    pub fn prompt_timeout(&self) -> Duration {
        Duration::from_secs(self.prompt_timeout_secs)
    }

    /// Ticker interval.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}

/// Complete configuration of one game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board rows.
    pub rows: u8,
    /// Board columns.
    pub cols: u8,
    /// Workers placed for each player.
    pub workers_per_player: u8,
    /// Display names, one per seat. The length is the player count.
    pub player_names: Vec<String>,
    /// Nature meter bounds.
    pub nature_meter: MeterBounds,
    /// Global block supply.
    pub build_caps: BuildCaps,
    /// Clock settings.
    pub clock: ClockConfig,
    /// Seed for all setup randomness.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            workers_per_player: WORKERS_PER_PLAYER,
            player_names: vec!["Player 1".to_string(), "Player 2".to_string()],
            nature_meter: MeterBounds::default(),
            build_caps: BuildCaps::default(),
            clock: ClockConfig::default(),
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document. Missing fields take defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the board size.
    #[must_use]
    pub fn with_board(mut self, rows: u8, cols: u8) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Replace the global block supply.
    #[must_use]
    pub fn with_build_caps(mut self, caps: BuildCaps) -> Self {
        self.build_caps = caps;
        self
    }

    /// Replace the clock settings.
    #[must_use]
    pub fn with_clock(mut self, clock: ClockConfig) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the nature meter bounds.
    #[must_use]
    pub fn with_nature_meter(mut self, bounds: MeterBounds) -> Self {
        self.nature_meter = bounds;
        self
    }

    /// Check the config describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count() < 2 {
            return Err(ConfigError::TooFewPlayers(self.player_count()));
        }
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.workers_per_player != WORKERS_PER_PLAYER {
            return Err(ConfigError::WorkerCount(self.workers_per_player));
        }
        let cells = usize::from(self.rows) * usize::from(self.cols);
        let workers = self.player_count() * usize::from(self.workers_per_player);
        if workers > cells {
            return Err(ConfigError::BoardTooSmall { cells, workers });
        }
        if self.nature_meter.min >= self.nature_meter.max {
            return Err(ConfigError::InvalidMeterBounds {
                min: self.nature_meter.min,
                max: self.nature_meter.max,
            });
        }
        if self.clock.budget_secs == 0 || self.clock.tick_millis == 0 {
            return Err(ConfigError::ZeroClock);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_standard_rules() {
        let config = GameConfig::default();
        assert_eq!((config.rows, config.cols), (5, 5));
        assert_eq!(config.player_count(), 2);
        assert_eq!(config.nature_meter, MeterBounds { min: 0, max: 100 });
        assert_eq!(config.build_caps.cap_for(ImpactLevel::Level1), 22);
        assert_eq!(config.build_caps.cap_for(ImpactLevel::Level2), 18);
        assert_eq!(config.build_caps.cap_for(ImpactLevel::Level3), 14);
        assert_eq!(config.build_caps.cap_for(ImpactLevel::Dome), 18);
        assert_eq!(config.clock.budget(), Duration::from_secs(300));
        assert_eq!(config.clock.prompt_timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_partial_override() {
        let config = GameConfig::from_toml_str(
            r#"
            rows = 4
            cols = 6
            [clock]
            budget_secs = 60
            "#,
        )
        .unwrap();
        assert_eq!((config.rows, config.cols), (4, 6));
        assert_eq!(config.clock.budget_secs, 60);
        assert_eq!(config.clock.prompt_timeout_secs, 10);
    }

    #[test]
    fn test_toml_rejects_invalid() {
        let err = GameConfig::from_toml_str("player_names = [\"solo\"]").unwrap_err();
        assert!(matches!(err, ConfigError::TooFewPlayers(1)));

        let err = GameConfig::from_toml_str("rows = \"five\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_board_too_small() {
        let config = GameConfig::default().with_board(1, 3);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BoardTooSmall { cells: 3, workers: 4 })
        ));
    }

    #[test]
    fn test_worker_count_must_be_two() {
        for count in [0, 1, 3] {
            let config = GameConfig { workers_per_player: count, ..GameConfig::default() };
            assert!(matches!(config.validate(), Err(ConfigError::WorkerCount(c)) if c == count));
        }
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_meter_bounds_validation() {
        let config = GameConfig::default().with_nature_meter(MeterBounds { min: 10, max: 10 });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMeterBounds { .. })
        ));
    }
}
