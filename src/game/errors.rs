use thiserror::Error;

use crate::solver::SolverError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrawError {
    #[error("Cannot draw {hand} cards from a pool of {pool}")]
    PoolTooSmall { pool: usize, hand: usize },
    #[error("Target range {min}..={max} is empty")]
    EmptyTargetRange { min: u64, max: u64 },
    #[error("At most {available} large cards can be drawn, {requested} requested")]
    TooManyLarge { requested: usize, available: usize },
}

/// Errors from running repeated random games
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("Draw error: {0}")]
    DrawError(#[from] DrawError),
    #[error("Solver error: {0}")]
    SolverError(#[from] SolverError),
}
