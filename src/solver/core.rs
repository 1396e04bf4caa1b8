use log::{debug, info};
use rayon::prelude::*;

use crate::expression::{OperatorSet, Solution, Step};
use crate::iterator::{Combinations, binomial};
use crate::solver::closest::Closest;
use crate::solver::constants::{DEFAULT_MAX_CARDS, DEFAULT_PARALLEL};
use crate::solver::errors::SolverError;
use crate::solver::reducer::{branches, reduce};
use crate::utils::{CardsError, validate_cards};

/// Configuration for the search
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub operators: OperatorSet,
    /// Spread each subset size over the rayon pool. Results are identical
    /// to the sequential search.
    pub parallel: bool,
    pub max_cards: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            operators: OperatorSet::all(),
            parallel: DEFAULT_PARALLEL,
            max_cards: DEFAULT_MAX_CARDS,
        }
    }
}

/// Finds the value closest to a target using as few cards as possible
#[derive(Debug, Clone, Default)]
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Search every subset of `cards`, smallest first.
    ///
    /// Returns the first exact solution found, which therefore uses the
    /// fewest cards, or else the closest value overall with ties going to
    /// the smaller subset. Subsets of one size are taken in lexicographic
    /// order of card positions, so equal face values at different positions
    /// are distinct subsets.
    ///
    /// # Errors
    ///
    /// Returns an error if `cards` fails validation.
    pub fn search(&self, target: u64, cards: &[u64]) -> Result<Solution, SolverError> {
        validate_cards(cards, self.config.max_cards)?;
        info!(
            "Searching for {} with cards {:?} and operators {}",
            target, cards, self.config.operators
        );

        let mut best = Closest::new(target);
        for size in 1..=cards.len() {
            debug!(
                "Trying {} subsets of {} cards",
                binomial(cards.len(), size),
                size
            );

            let exact = if self.config.parallel && size > 1 {
                self.search_size_parallel(target, cards, size, &mut best)
            } else {
                self.search_size(target, cards, size, &mut best)
            };

            if exact {
                info!("Exact match with {} cards", size);
                break;
            }
        }

        let solution = best.into_solution().ok_or(CardsError::EmptyHand)?;
        info!(
            "Best value {} is {} away from {}",
            solution.value(),
            solution.distance(target),
            target
        );
        Ok(solution)
    }

    /// Reduce all of `cards` to one value, without trying smaller subsets.
    ///
    /// Returns `Ok(None)` when no legal reduction exists with the configured
    /// operators.
    ///
    /// # Errors
    ///
    /// Returns an error if `cards` fails validation.
    pub fn reduce(&self, target: u64, cards: &[u64]) -> Result<Option<Solution>, SolverError> {
        validate_cards(cards, self.config.max_cards)?;
        Ok(reduce(target, cards, self.config.operators))
    }

    fn search_size(&self, target: u64, cards: &[u64], size: usize, best: &mut Closest) -> bool {
        for positions in Combinations::new(cards.len(), size) {
            let subset = pick(cards, &positions);
            if let Some(candidate) = reduce(target, &subset, self.config.operators) {
                debug!("Subset {:?} reaches {}", subset, candidate.value());
                if best.offer(candidate) {
                    return true;
                }
            }
        }
        false
    }

    /// Works through the first reduction of every subset of one size in
    /// parallel, then folds the outcomes in enumeration order so the result
    /// matches [`search_size`](Self::search_size).
    ///
    /// Every subset of the size is reduced before the fold, so an exact
    /// match does not stop its sibling subsets the way it does in the
    /// sequential loop. It still stops the search before the next size.
    fn search_size_parallel(
        &self,
        target: u64,
        cards: &[u64],
        size: usize,
        best: &mut Closest,
    ) -> bool {
        let operators = self.config.operators;
        let subsets: Vec<Vec<u64>> = Combinations::new(cards.len(), size)
            .map(|positions| pick(cards, &positions))
            .collect();

        let units: Vec<(usize, Step, Vec<u64>)> = subsets
            .iter()
            .enumerate()
            .flat_map(|(index, subset)| {
                branches(subset, operators).map(move |(step, rest)| (index, step, rest))
            })
            .collect();

        let outcomes: Vec<(usize, Step, Option<Solution>)> = units
            .into_par_iter()
            .map(|(index, step, rest)| (index, step, reduce(target, &rest, operators)))
            .collect();

        let mut per_subset: Vec<Closest> = subsets.iter().map(|_| Closest::new(target)).collect();
        for (index, step, sub) in outcomes {
            if let Some(sub) = sub
                && let Some(closest) = per_subset.get_mut(index)
                && !closest.is_exact()
            {
                closest.offer_after(step, sub);
            }
        }

        for (subset, closest) in subsets.iter().zip(per_subset) {
            if let Some(candidate) = closest.into_solution() {
                debug!("Subset {:?} reaches {}", subset, candidate.value());
                if best.offer(candidate) {
                    return true;
                }
            }
        }
        false
    }
}

fn pick(cards: &[u64], positions: &[usize]) -> Vec<u64> {
    positions
        .iter()
        .filter_map(|&pos| cards.get(pos).copied())
        .collect()
}
