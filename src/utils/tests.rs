use crate::utils::{CardsError, parse_cards, validate_cards};

#[test]
fn test_validate_cards() {
    assert!(validate_cards(&[1, 3, 7, 7, 9, 25], 8).is_ok());
    assert_eq!(validate_cards(&[], 8), Err(CardsError::EmptyHand));
    assert_eq!(
        validate_cards(&[4, 0, 2], 8),
        Err(CardsError::ZeroCard { index: 1 })
    );
    assert_eq!(
        validate_cards(&[1, 2, 3], 2),
        Err(CardsError::TooManyCards { count: 3, max: 2 })
    );
}

#[test]
fn test_parse_cards_separators() {
    assert_eq!(parse_cards("1,3,7"), Ok(vec![1, 3, 7]));
    assert_eq!(parse_cards(" 25, 50  75 "), Ok(vec![25, 50, 75]));
    assert_eq!(parse_cards(""), Ok(vec![]));
}

#[test]
fn test_parse_cards_rejects_garbage() {
    assert_eq!(
        parse_cards("1,two,3"),
        Err(CardsError::InvalidNumber("two".to_string()))
    );
    assert_eq!(
        parse_cards("-4"),
        Err(CardsError::InvalidNumber("-4".to_string()))
    );
}
