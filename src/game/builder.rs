//! Assembling a ready-to-play session from a [`GameConfig`].

use tracing::{debug, info};

use crate::board::Board;
use crate::core::rng::{COLOUR_CONTEXT, DEAL_CONTEXT, PLACEMENT_CONTEXT};
use crate::core::{ConfigError, GameConfig, GameRng, GameState, PlayerId, PlayerMap};
use crate::gods::{God, GodCardPool};
use crate::meters::{BuildObserver, MeterKind, NatureMeter};
use crate::roster::{Player, RandomPlacement, WorkerColour, WorkerPlacement};
use crate::turn::TurnManager;

/// Builder for a [`TurnManager`].
///
/// By default gods are dealt from the standard pool, colours are shuffled
/// and workers are placed on random distinct cells, all from the config's
/// seed.
pub struct GameBuilder {
    config: GameConfig,
    pool: GodCardPool,
    gods: Option<Vec<God>>,
    placement: Option<Box<dyn WorkerPlacement>>,
    observers: Vec<Box<dyn BuildObserver>>,
}

impl GameBuilder {
    /// Start from `config`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            pool: GodCardPool::default(),
            gods: None,
            placement: None,
            observers: Vec::new(),
        }
    }

    /// Deal from a different pool.
    #[must_use]
    pub fn with_pool(mut self, pool: GodCardPool) -> Self {
        self.pool = pool;
        self
    }

    /// Skip the deal and give seat `i` the `i`th god.
    #[must_use]
    pub fn with_gods(mut self, gods: impl IntoIterator<Item = God>) -> Self {
        self.gods = Some(gods.into_iter().collect());
        self
    }

    /// Place workers with `placement` instead of at random.
    #[must_use]
    pub fn with_placement(mut self, placement: impl WorkerPlacement + 'static) -> Self {
        self.placement = Some(Box::new(placement));
        self
    }

    /// Add a build observer next to the meter manager.
    #[must_use]
    pub fn with_observer(mut self, observer: Box<dyn BuildObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Set up the board and players without starting a session.
    pub fn build_state(&mut self) -> Result<GameState, ConfigError> {
        self.config.validate()?;
        let players = self.config.player_count();
        let rng = GameRng::new(self.config.seed);

        let gods = match &self.gods {
            Some(gods) if gods.len() >= players => {
                let seated = &gods[..players];
                if let Some((i, &god)) = seated
                    .iter()
                    .enumerate()
                    .find(|(i, god)| seated[..*i].contains(*god))
                {
                    debug!(seat = i, %god, "god pinned twice");
                    return Err(ConfigError::DuplicateGod(god));
                }
                seated.to_vec()
            }
            Some(gods) => {
                return Err(ConfigError::NotEnoughGods {
                    available: gods.len(),
                    players,
                })
            }
            None => self.pool.deal(&mut rng.for_context(DEAL_CONTEXT), players)?,
        };

        let mut colours = WorkerColour::ALL.to_vec();
        rng.for_context(COLOUR_CONTEXT).shuffle(&mut colours);

        let bounds = self.config.nature_meter;
        let seats: Vec<Player> = PlayerId::all(players)
            .zip(&self.config.player_names)
            .map(|(id, name)| {
                Player::new(
                    id,
                    name.clone(),
                    gods[id.index()],
                    colours[id.index() % colours.len()],
                    self.config.workers_per_player,
                )
                .with_meter(MeterKind::Nature, Box::new(NatureMeter::new(bounds.min, bounds.max)))
            })
            .collect();

        let mut state = GameState::new(
            Board::new(self.config.rows, self.config.cols),
            PlayerMap::from_vec(seats),
        );
        match self.placement.as_mut() {
            Some(placement) => placement.place_workers(&mut state)?,
            None => RandomPlacement::new(rng.for_context(PLACEMENT_CONTEXT))
                .place_workers(&mut state)?,
        }
        Ok(state)
    }

    /// Set up the game and start the first turn.
    pub fn build(mut self) -> Result<TurnManager, ConfigError> {
        let state = self.build_state()?;
        for (id, player) in state.players().iter() {
            info!(seat = %id, name = %player.name(), god = %player.god(), colour = ?player.colour(), "seated");
        }
        let mut manager = TurnManager::new(state, self.config.build_caps, self.config.clock);
        for observer in self.observers {
            manager = manager.with_observer(observer);
        }
        manager.start();
        Ok(manager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;
    use crate::roster::FixedPlacement;
    use crate::turn::Phase;

    #[test]
    fn test_default_build_deals_distinct_gods() {
        let manager = GameBuilder::new(GameConfig::default().with_seed(9)).build().unwrap();
        let state = manager.state();
        let a = state.player(PlayerId::new(0));
        let b = state.player(PlayerId::new(1));
        assert_ne!(a.god(), b.god());
        assert_ne!(a.colour(), b.colour());
        assert_eq!(a.meter(MeterKind::Nature).unwrap().value(), 100);
        assert_eq!(manager.phase(), Phase::SelectWorker);
    }

    #[test]
    fn test_same_seed_same_setup() {
        let a = GameBuilder::new(GameConfig::default().with_seed(5)).build().unwrap();
        let b = GameBuilder::new(GameConfig::default().with_seed(5)).build().unwrap();
        for seat in PlayerId::all(2) {
            let (pa, pb) = (a.state().player(seat), b.state().player(seat));
            assert_eq!(pa.god(), pb.god());
            let cells = |p: &Player| p.workers().iter().map(|w| w.current()).collect::<Vec<_>>();
            assert_eq!(cells(pa), cells(pb));
        }
    }

    #[test]
    fn test_pinned_gods_and_fixed_cells() {
        let manager = GameBuilder::new(GameConfig::default())
            .with_gods([God::Zeus, God::Gaia])
            .with_placement(FixedPlacement::new(
                [(0, 0), (0, 1), (4, 4), (4, 3)].map(Coord::from),
            ))
            .build()
            .unwrap();
        let state = manager.state();
        assert_eq!(state.player(PlayerId::new(0)).god(), God::Zeus);
        assert_eq!(state.player(PlayerId::new(1)).god(), God::Gaia);
        assert!(state.worker_at(Coord::new(4, 3)).is_some());
    }

    #[test]
    fn test_too_few_pinned_gods() {
        let err = GameBuilder::new(GameConfig::default())
            .with_gods([God::Zeus])
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotEnoughGods { available: 1, players: 2 }));
    }

    #[test]
    fn test_duplicate_pinned_gods_rejected() {
        let err = GameBuilder::new(GameConfig::default())
            .with_gods([God::Zeus, God::Zeus])
            .with_placement(FixedPlacement::new(
                [(0, 0), (0, 1), (4, 4), (4, 3)].map(Coord::from),
            ))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateGod(God::Zeus)));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = GameBuilder::new(GameConfig::default().with_board(0, 5))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyBoard));
    }
}
