use log::debug;

use crate::utils::errors::CardsError;

/// Parse cards separated by commas and/or whitespace, e.g. `"1, 3 7"`.
///
/// # Errors
///
/// Returns an error for any token that is not a non-negative integer.
/// Zero is accepted here and rejected by [`validate_cards`](super::validate_cards).
pub fn parse_cards(input: &str) -> Result<Vec<u64>, CardsError> {
    let cards = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u64>()
                .map_err(|_| CardsError::InvalidNumber(token.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Parsed '{}' into {:?}", input, cards);
    Ok(cards)
}
