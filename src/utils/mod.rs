//! Card input helpers

mod errors;
mod parse;
mod validation;

pub use errors::CardsError;
pub use parse::parse_cards;
pub use validation::validate_cards;

#[cfg(test)]
mod tests;
