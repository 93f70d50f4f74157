//! Dealing god cards.

use tracing::debug;

use super::God;
use crate::core::{ConfigError, GameRng};

/// The cards available to deal from. Duplicates are dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GodCardPool {
    cards: Vec<God>,
}

impl GodCardPool {
    /// A pool of the given cards.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = God>) -> Self {
        let mut unique = Vec::new();
        for god in cards {
            if !unique.contains(&god) {
                unique.push(god);
            }
        }
        Self { cards: unique }
    }

    /// The cards in the pool.
    #[must_use]
    pub fn cards(&self) -> &[God] {
        &self.cards
    }

    /// Shuffle the pool and give one distinct card to each of `players` seats.
    ///
    /// ```
    /// use santorini_rules::core::GameRng;
    /// use santorini_rules::gods::GodCardPool;
    ///
    /// let mut rng = GameRng::new(3);
    /// let dealt = GodCardPool::default().deal(&mut rng, 2).unwrap();
    /// assert_eq!(dealt.len(), 2);
    /// assert_ne!(dealt[0], dealt[1]);
    /// ```
    pub fn deal(&self, rng: &mut GameRng, players: usize) -> Result<Vec<God>, ConfigError> {
        if self.cards.len() < players {
            return Err(ConfigError::NotEnoughGods {
                available: self.cards.len(),
                players,
            });
        }
        let mut deck = self.cards.clone();
        rng.shuffle(&mut deck);
        deck.truncate(players);
        debug!(dealt = ?deck, "god cards dealt");
        Ok(deck)
    }
}

impl Default for GodCardPool {
    fn default() -> Self {
        Self::new(God::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_is_seeded() {
        let pool = GodCardPool::default();
        let a = pool.deal(&mut GameRng::new(11), 2).unwrap();
        let b = pool.deal(&mut GameRng::new(11), 2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_deal_never_repeats() {
        let pool = GodCardPool::default();
        for seed in 0..50 {
            let dealt = pool.deal(&mut GameRng::new(seed), 4).unwrap();
            let mut sorted = dealt.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), 4);
        }
    }

    #[test]
    fn test_small_pool_is_an_error() {
        let pool = GodCardPool::new([God::Zeus, God::Zeus]);
        assert_eq!(pool.cards(), &[God::Zeus]);
        let err = pool.deal(&mut GameRng::new(0), 2).unwrap_err();
        assert!(matches!(err, ConfigError::NotEnoughGods { available: 1, players: 2 }));
    }
}
