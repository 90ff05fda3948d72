//! Tests for decoder orchestration and configuration

use super::{decode, decode_with_pinned_config, reference_time};
use crate::Error;
use crate::app::services::metar_decoder::MetarDecoder;

const REPORT: &str = "KGFK 262353Z 24011KT 10SM BKN100 20/03 A2945 RMK AO2";

#[test]
fn test_pinned_config_matches_explicit_reference() {
    let explicit = decode(REPORT).unwrap();
    let pinned = decode_with_pinned_config(REPORT).unwrap();

    assert_eq!(explicit, pinned);
}

#[test]
fn test_decoding_is_deterministic() {
    let first = decode(REPORT).unwrap();
    let second = decode(REPORT).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_altimeter_group_decoded() {
    let obs = decode(REPORT).unwrap();
    assert_eq!(obs.altimeter_in_hg, Some(29.45));
}

#[test]
fn test_altimeter_group_absent() {
    let obs = decode("KGFK 262353Z 24011KT 10SM BKN100 20/03").unwrap();
    assert_eq!(obs.altimeter_in_hg, None);
}

#[test]
fn test_empty_report_is_missing_station() {
    let result = decode("");
    assert!(matches!(result, Err(Error::MissingField { group }) if group == "station"));
}

#[test]
fn test_short_station_id_fails_validation() {
    let result = decode("KG 262353Z 24011KT 10SM 20/03");
    assert!(matches!(result, Err(Error::MalformedField { group, .. }) if group == "station"));
}

#[test]
fn test_decoder_is_shareable_across_threads() {
    let decoder = MetarDecoder::new();
    let reference = reference_time();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let obs = decoder.parse_at(REPORT, reference).unwrap();
                assert_eq!(obs.station_id, "KGFK");
            });
        }
    });
}
