//! Tests for temperature/dew point group decoding

use super::tokens;
use crate::Error;
use crate::app::services::metar_decoder::temperature::decode_temperature;

#[test]
fn test_positive_pair() {
    let (temp, dewpt) = decode_temperature(&tokens("KGFK 262353Z 20/03")).unwrap();
    assert_eq!(temp, 20);
    assert_eq!(dewpt, 3);
}

#[test]
fn test_negative_pair() {
    let (temp, dewpt) = decode_temperature(&tokens("KGFK M05/M10")).unwrap();
    assert_eq!(temp, -5);
    assert_eq!(dewpt, -10);
}

#[test]
fn test_mixed_signs() {
    let (temp, dewpt) = decode_temperature(&tokens("KGFK 02/M01")).unwrap();
    assert_eq!(temp, 2);
    assert_eq!(dewpt, -1);
}

#[test]
fn test_missing_group() {
    let result = decode_temperature(&tokens("KGFK 262353Z 24011KT"));
    assert!(matches!(result, Err(Error::MissingField { group }) if group == "temperature"));
}

#[test]
fn test_anchored_grammar_rejects_longer_tokens() {
    // A remark-style 8-digit group must not be mistaken for temperature
    let result = decode_temperature(&tokens("KGFK 20/030 T02000033"));
    assert!(matches!(result, Err(Error::MissingField { .. })));
}

#[test]
fn test_visibility_fraction_is_not_temperature() {
    let result = decode_temperature(&tokens("KGFK 1/2SM"));
    assert!(matches!(result, Err(Error::MissingField { .. })));
}
