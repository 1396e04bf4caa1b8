use thiserror::Error;

use crate::expression::ExpressionError;
use crate::utils::CardsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Expression error: {0}")]
    ExpressionError(#[from] ExpressionError),
    #[error("Invalid cards: {0}")]
    CardsError(#[from] CardsError),
}
