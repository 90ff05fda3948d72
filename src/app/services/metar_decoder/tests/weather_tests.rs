//! Tests for weather group location and rendering over full reports

use super::tokens;
use crate::app::services::metar_decoder::codes::Phenomenon;
use crate::app::services::metar_decoder::weather::{decode_weather, find_weather_group};
use crate::constants::NO_WEATHER_PRESENT;

#[test]
fn test_no_weather_group_yields_sentinel() {
    let rendered = decode_weather(&tokens("KGFK 262353Z 24011KT 10SM BKN100 20/03 A2945"));
    assert_eq!(rendered, NO_WEATHER_PRESENT);
}

#[test]
fn test_simple_intensity_group() {
    let rendered = decode_weather(&tokens("KGFK 262353Z 24011KT 2SM -RA BKN008 18/16"));
    assert_eq!(rendered, "slight rain");
}

#[test]
fn test_heavy_thunderstorm_chain() {
    let rendered = decode_weather(&tokens("KGFK 262353Z 24011KT 1SM +TSRA OVC005 18/16"));
    assert_eq!(rendered, "heavy thunderstorm rain");
}

#[test]
fn test_vicinity_renders_after_phenomena() {
    let rendered = decode_weather(&tokens("KGFK 262353Z 24011KT 5SM VCSH SCT040 18/16"));
    assert_eq!(rendered, "shower in vicinity");
}

#[test]
fn test_shallow_fog() {
    let rendered = decode_weather(&tokens("KGFK 262353Z 00000KT 1/4SM MIFG 02/01"));
    assert_eq!(rendered, "shallow fog");
}

#[test]
fn test_only_first_qualifying_token_is_decoded() {
    let rendered = decode_weather(&tokens("KGFK 262353Z 24011KT 2SM -RA BR BKN008"));
    assert_eq!(rendered, "slight rain");
}

#[test]
fn test_weather_in_remarks_is_ignored() {
    let rendered = decode_weather(&tokens("KGFK 262353Z 24011KT 10SM 20/03 RMK RETS"));
    assert_eq!(rendered, NO_WEATHER_PRESENT);
}

#[test]
fn test_station_id_never_matches() {
    // Station identifiers sharing letters with codes must not qualify
    let group = find_weather_group(&tokens("KBRA 262353Z 24011KT 10SM 20/03"));
    assert!(group.is_none());
}

#[test]
fn test_recent_thunderstorm_in_body() {
    let group = find_weather_group(&tokens("KGFK 262353Z 24011KT 10SM RETS 20/03")).unwrap();
    assert_eq!(group.phenomena, vec![Phenomenon::Thunderstorm]);
    assert_eq!(group.render(), "recent thunderstorm");
}
