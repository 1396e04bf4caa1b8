//! numbers-round - Reach a target number from a hand of cards
//!
//! Cards combine pairwise with `+`, `-`, `*` and `/`. Every intermediate
//! value must stay a non-negative integer, so subtraction never goes below
//! zero and division must be exact. The solver reports the value closest
//! to the target and, among exact answers, one that uses the fewest cards.

pub mod expression;
pub mod game;
pub mod iterator;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator, OperatorSet, Solution, Step};
pub use game::{Draw, DrawConfig, DrawError, GameError, TrialStats, draw, run_trials};
pub use solver::{ExpressionSolver, SolverConfig, SolverError};
pub use utils::{CardsError, parse_cards, validate_cards};

/// Find the value closest to `target` reachable from `cards` with all four
/// operators.
///
/// This is a convenience function that searches with the default solver
/// configuration.
///
/// # Errors
///
/// This function will return an error if:
/// * `cards` is empty
/// * any card is zero
/// * there are more cards than the default limit
///
/// # Examples
///
/// ```
/// use numbers_round::find_solution;
///
/// let solution = find_solution(383, &[1, 3, 7, 7, 9, 25]).unwrap();
/// assert_eq!(solution.value(), 383);
/// println!("{}", solution.to_expression());
/// ```
pub fn find_solution(target: u64, cards: &[u64]) -> Result<Solution, SolverError> {
    ExpressionSolver::default().search(target, cards)
}

/// Like [`find_solution`], restricted to the operators spelled out in
/// `operators`, e.g. `"+*"`.
///
/// # Errors
///
/// Returns an error for an unknown operator symbol or invalid cards.
pub fn find_solution_with(
    target: u64,
    cards: &[u64],
    operators: &str,
) -> Result<Solution, SolverError> {
    let operators: OperatorSet = operators.parse()?;
    ExpressionSolver::new(SolverConfig {
        operators,
        ..SolverConfig::default()
    })
    .search(target, cards)
}
