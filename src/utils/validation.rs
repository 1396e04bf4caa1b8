use log::{debug, warn};

use crate::utils::errors::CardsError;

/// # Errors
///
/// Returns an error if the hand is empty, holds more than `max_cards`
/// cards, or contains a zero.
pub fn validate_cards(cards: &[u64], max_cards: usize) -> Result<(), CardsError> {
    debug!("Validating cards: {:?}", cards);

    if cards.is_empty() {
        warn!("No cards given");
        return Err(CardsError::EmptyHand);
    }

    if cards.len() > max_cards {
        warn!("Hand of {} cards exceeds limit {}", cards.len(), max_cards);
        return Err(CardsError::TooManyCards {
            count: cards.len(),
            max: max_cards,
        });
    }

    if let Some(index) = cards.iter().position(|&c| c == 0) {
        warn!("Card at position {} is zero", index);
        return Err(CardsError::ZeroCard { index });
    }

    debug!("Card validation successful");
    Ok(())
}
