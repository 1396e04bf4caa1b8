use log::info;
use rand::Rng;
use rayon::prelude::*;

use crate::game::draw::{Draw, DrawConfig, draw};
use crate::game::errors::GameError;
use crate::solver::ExpressionSolver;

/// Outcome counts over repeated random games
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrialStats {
    pub trials: usize,
    pub exact: usize,
    pub within_five: usize,
    pub within_ten: usize,
    pub total_distance: u64,
}

impl TrialStats {
    pub fn record(&mut self, distance: u64) {
        self.trials += 1;
        self.total_distance = self.total_distance.saturating_add(distance);
        if distance == 0 {
            self.exact += 1;
        }
        if distance <= 5 {
            self.within_five += 1;
        }
        if distance <= 10 {
            self.within_ten += 1;
        }
    }

    /// Fraction of trials solved exactly, 0 when nothing was run
    pub fn success_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.exact as f64 / self.trials as f64
        }
    }

    pub fn mean_distance(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total_distance as f64 / self.trials as f64
        }
    }
}

/// Draw `trials` games from `config` and solve each one.
///
/// All draws are taken from `rng` up front, so a seeded RNG reproduces the
/// same statistics; the games themselves are solved in parallel.
///
/// # Errors
///
/// Returns an error if a draw or a search fails.
pub fn run_trials<R: Rng + ?Sized>(
    solver: &ExpressionSolver,
    config: &DrawConfig,
    trials: usize,
    rng: &mut R,
) -> Result<TrialStats, GameError> {
    let draws = (0..trials)
        .map(|_| draw(config, &mut *rng))
        .collect::<Result<Vec<Draw>, _>>()?;

    let distances = draws
        .par_iter()
        .map(|game| {
            solver
                .search(game.target, &game.cards)
                .map(|solution| solution.distance(game.target))
        })
        .collect::<Result<Vec<u64>, _>>()?;

    let stats = distances
        .into_iter()
        .fold(TrialStats::default(), |mut stats, distance| {
            stats.record(distance);
            stats
        });

    info!(
        "{} of {} games solved exactly ({:.1}%)",
        stats.exact,
        stats.trials,
        stats.success_rate() * 100.0
    );
    Ok(stats)
}
