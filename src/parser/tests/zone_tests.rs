//! Tests for zone segmentation and offshore record assembly

use super::*;
use crate::models::{ProductForecast, WarningLevel, ZoneForecast};
use crate::parser::TraceStage;
use crate::parser::zones::ZoneSegmenter;

fn zones(records: ProductForecast) -> Vec<ZoneForecast> {
    match records {
        ProductForecast::Zones(zones) => zones,
        ProductForecast::Areas(_) => panic!("expected zone records"),
    }
}

#[test]
fn test_round_trip_bulletin() {
    let parser = default_parser();
    let product = offshore_product(&["ANZ800"]);
    let outcome = parser.parse_offshore(&product, ROUND_TRIP_BULLETIN, &fixed_options());
    let zones = zones(outcome.records);

    assert_eq!(zones.len(), 1);
    let zone = &zones[0];
    assert_eq!(zone.zone_id, "ANZ800");
    assert_eq!(zone.warning, WarningLevel::GaleWarning);
    assert_eq!(zone.issue_time, FIXED_TIME);
    assert_eq!(zone.periods.len(), 2);

    assert_eq!(zone.periods[0].day, "Today");
    assert_eq!(zone.periods[0].winds, "N winds 15 to 20 kt");
    assert_eq!(zone.periods[0].seas, "Seas 4 to 6 ft");
    assert_eq!(zone.periods[1].day, "Tonight");
    assert_eq!(zone.periods[1].winds, "Variable winds");
    assert_eq!(zone.periods[1].seas, "Seas 3 to 5 ft");
}

#[test]
fn test_empty_input_yields_no_zones() {
    let parser = default_parser();
    for text in ["", "   \n\t  "] {
        let outcome = parser.parse_product("NT1", text, &fixed_options()).unwrap();
        assert!(outcome.records.is_empty());
    }
}

#[test]
fn test_missing_zones_get_placeholder_periods() {
    let parser = default_parser();
    let outcome = parser
        .parse_product("NT1", OFFSHORE_BULLETIN, &fixed_options())
        .unwrap();
    let zones = zones(outcome.records);

    let ids: Vec<&str> = zones.iter().map(|z| z.zone_id.as_str()).collect();
    assert_eq!(ids, vec!["ANZ800", "ANZ805", "ANZ900", "ANZ810", "ANZ815"]);

    for zone in &zones {
        assert!(!zone.periods.is_empty());
    }
    assert!(zones[2].is_placeholder());
    assert_eq!(zones[2].warning, WarningLevel::None);
    assert_eq!(zones[2].periods[0].winds, "Data unavailable");
    assert!(zones[4].is_placeholder());
    assert!(!zones[0].is_placeholder());
}

#[test]
fn test_bulletin_fields_per_zone() {
    let parser = default_parser();
    let outcome = parser
        .parse_product("NT1", OFFSHORE_BULLETIN, &fixed_options())
        .unwrap();
    let zones = zones(outcome.records);

    let anz800 = &zones[0];
    assert_eq!(anz800.display_name, "East of Great South Channel and south of Georges Bank");
    assert_eq!(anz800.issue_time, "1015 AM EST MON JAN 15 2024");
    assert_eq!(anz800.warning, WarningLevel::GaleWarning);
    let days: Vec<&str> = anz800.periods.iter().map(|p| p.day.as_str()).collect();
    assert_eq!(days, vec!["Today", "Tonight", "Tue"]);
    assert_eq!(anz800.periods[1].weather, "Scattered snow showers");

    let anz805 = &zones[1];
    assert_eq!(anz805.warning, WarningLevel::None);
    assert_eq!(anz805.periods[0].weather, "Fog");
    assert_eq!(anz805.periods[1].seas, "Seas 3 to 3 ft");

    // Storm warning outranks the gale force phrase in the same zone
    assert_eq!(zones[3].warning, WarningLevel::StormWarning);
}

#[test]
fn test_segment_does_not_contain_other_zone_headers() {
    let ids = ["ANZ800", "ANZ805", "ANZ810"];
    let prefixes = vec!["ANZ".to_string(), "PZZ".to_string()];
    let segmenter = ZoneSegmenter::new(&ids, &prefixes);

    for id in ids {
        let segment = segmenter.find(OFFSHORE_BULLETIN, id).unwrap();
        assert!(segment.text.starts_with(id));
        for other in ids.iter().filter(|other| **other != id) {
            assert!(!segment.text.contains(other), "{} section contains {}", id, other);
        }
    }
}

#[test]
fn test_adjacent_zones_without_terminator() {
    let text = "ANZ800...\n.TODAY...N WINDS 10 KT.\nANZ805...\n.TODAY...S WINDS 20 KT.";
    let parser = default_parser();
    let product = offshore_product(&["ANZ800", "ANZ805"]);
    let zones = zones(parser.parse_offshore(&product, text, &fixed_options()).records);

    assert_eq!(zones[0].periods[0].winds, "N winds 10 kt");
    assert_eq!(zones[1].periods[0].winds, "S winds 20 kt");
}

#[test]
fn test_generic_prefix_ends_a_section() {
    // PZZ900 is not in the zone list but still closes the section
    let text = "PZZ800...\n.TODAY...SEAS 4 FT.\nPZZ900...\n.TODAY...SEAS 12 FT.";
    let parser = default_parser();
    let product = offshore_product(&["PZZ800"]);
    let zones = zones(parser.parse_offshore(&product, text, &fixed_options()).records);

    assert_eq!(zones[0].periods.len(), 1);
    assert_eq!(zones[0].periods[0].seas, "Seas 4 to 4 ft");
}

#[test]
fn test_zone_id_inside_prose_is_not_a_header() {
    let text = "SYNOPSIS...LOW PRESSURE NEAR ANZ800 MOVES EAST.\n.TODAY...N WINDS 10 KT.\n$$";
    let parser = default_parser();
    let product = offshore_product(&["ANZ800"]);
    let zones = zones(parser.parse_offshore(&product, text, &fixed_options()).records);

    assert!(zones[0].is_placeholder());
}

#[test]
fn test_zone_without_periods_gets_placeholder() {
    let text = "ANZ800...\nNO FORECAST AVAILABLE. GALE WARNING.\n$$";
    let parser = default_parser();
    let product = offshore_product(&["ANZ800"]);
    let zones = zones(parser.parse_offshore(&product, text, &fixed_options()).records);

    assert!(zones[0].is_placeholder());
    assert_eq!(zones[0].warning, WarningLevel::GaleWarning);
}

#[test]
fn test_debug_trace_reports_segments_and_missing_zones() {
    let parser = default_parser();
    let options = fixed_options().with_debug();
    let outcome = parser.parse_product("NT1", OFFSHORE_BULLETIN, &options).unwrap();

    let trace = &outcome.trace;
    assert!(trace.is_enabled());
    let missing: Vec<_> = trace
        .warnings()
        .filter(|event| event.stage == TraceStage::ZoneSegment)
        .filter_map(|event| event.zone.as_deref())
        .collect();
    assert_eq!(missing, vec!["ANZ900", "ANZ815"]);

    let period_counts = trace
        .events()
        .iter()
        .filter(|event| event.stage == TraceStage::PeriodSegment)
        .count();
    assert_eq!(period_counts, 3);
}

#[test]
fn test_trace_empty_without_debug() {
    let parser = default_parser();
    let outcome = parser
        .parse_product("NT1", OFFSHORE_BULLETIN, &fixed_options())
        .unwrap();
    assert!(outcome.trace.is_empty());
}

#[test]
fn test_unknown_product_is_an_error() {
    let parser = default_parser();
    assert!(parser.parse_product("NOPE", "ANZ800...", &fixed_options()).is_err());
}
