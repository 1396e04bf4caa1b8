use thiserror::Error;

/// Errors raised for a hand of cards that cannot be searched
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CardsError {
    #[error("At least one card is required")]
    EmptyHand,
    #[error("Card at position {index} is zero; cards must be positive")]
    ZeroCard { index: usize },
    #[error("{count} cards given, at most {max} can be searched")]
    TooManyCards { count: usize, max: usize },
    #[error("Not a positive integer: '{0}'")]
    InvalidNumber(String),
}
