use std::fmt;

use log::debug;
use rand::Rng;
use rand::seq::index;

use crate::game::constants::{HAND_SIZE, LARGE_CARDS, MAX_TARGET, MIN_TARGET, SMALL_CARDS};
use crate::game::errors::DrawError;

/// How a random game is drawn
#[derive(Debug, Clone, PartialEq)]
pub struct DrawConfig {
    /// Each pool with the number of cards taken from it, without replacement
    pub pools: Vec<(Vec<u64>, usize)>,
    pub min_target: u64,
    pub max_target: u64,
}

impl Default for DrawConfig {
    /// Six cards from the combined large and small pools
    fn default() -> Self {
        let pool = LARGE_CARDS.iter().chain(SMALL_CARDS.iter()).copied().collect();
        Self::from_pool(pool, HAND_SIZE)
    }
}

impl DrawConfig {
    pub fn from_pool(pool: Vec<u64>, hand_size: usize) -> Self {
        Self {
            pools: vec![(pool, hand_size)],
            min_target: MIN_TARGET,
            max_target: MAX_TARGET,
        }
    }

    /// Exactly `large` cards from the large pool, the rest of the hand from
    /// the small pool.
    ///
    /// # Errors
    ///
    /// Returns an error if more large cards are requested than exist.
    pub fn with_large(large: usize) -> Result<Self, DrawError> {
        if large > LARGE_CARDS.len() {
            return Err(DrawError::TooManyLarge {
                requested: large,
                available: LARGE_CARDS.len(),
            });
        }
        Ok(Self {
            pools: vec![
                (LARGE_CARDS.to_vec(), large),
                (SMALL_CARDS.to_vec(), HAND_SIZE.saturating_sub(large)),
            ],
            min_target: MIN_TARGET,
            max_target: MAX_TARGET,
        })
    }

    #[must_use]
    pub fn with_target_range(mut self, min_target: u64, max_target: u64) -> Self {
        self.min_target = min_target;
        self.max_target = max_target;
        self
    }

    pub fn hand_size(&self) -> usize {
        self.pools.iter().map(|(_, count)| count).sum()
    }

    /// # Errors
    ///
    /// Returns an error if any pool is smaller than its share of the hand
    /// or the target range is empty.
    pub fn validate(&self) -> Result<(), DrawError> {
        if let Some((pool, count)) = self.pools.iter().find(|(pool, count)| *count > pool.len()) {
            return Err(DrawError::PoolTooSmall {
                pool: pool.len(),
                hand: *count,
            });
        }
        if self.min_target > self.max_target {
            return Err(DrawError::EmptyTargetRange {
                min: self.min_target,
                max: self.max_target,
            });
        }
        Ok(())
    }
}

/// A target and the hand to reach it with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub target: u64,
    pub cards: Vec<u64>,
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cards: Vec<String> = self.cards.iter().map(u64::to_string).collect();
        write!(f, "Target {} from {}", self.target, cards.join(" "))
    }
}

/// Draw a hand by pool position without replacement, then a uniform target.
///
/// # Errors
///
/// Returns an error if `config` fails validation.
pub fn draw<R: Rng + ?Sized>(config: &DrawConfig, rng: &mut R) -> Result<Draw, DrawError> {
    config.validate()?;

    let mut cards = Vec::with_capacity(config.hand_size());
    for (pool, count) in &config.pools {
        cards.extend(
            index::sample(&mut *rng, pool.len(), *count)
                .into_iter()
                .filter_map(|i| pool.get(i).copied()),
        );
    }
    let target = rng.random_range(config.min_target..=config.max_target);

    let drawn = Draw { target, cards };
    debug!("Drew {}", drawn);
    Ok(drawn)
}
