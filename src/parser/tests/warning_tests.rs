//! Tests for the warning priority order

use crate::models::WarningLevel;
use crate::parser::classify_warning;

#[test]
fn test_priority_ignores_position() {
    let gale_first = "...GALE WARNING... LATER ...STORM WARNING...";
    let storm_first = "...STORM WARNING... LATER ...GALE WARNING...";
    assert_eq!(classify_warning(gale_first), WarningLevel::StormWarning);
    assert_eq!(classify_warning(storm_first), WarningLevel::StormWarning);
}

#[test]
fn test_classification_is_idempotent() {
    let text = "HURRICANE FORCE WIND WARNING IN EFFECT. HURRICANE WARNING.";
    let first = classify_warning(text);
    assert_eq!(first, WarningLevel::HurricaneForceWindWarning);
    assert_eq!(classify_warning(text), first);
}

#[test]
fn test_every_level_by_its_phrase() {
    let cases = [
        ("HURRICANE FORCE WIND WARNING", WarningLevel::HurricaneForceWindWarning),
        ("HURRICANE WARNING", WarningLevel::HurricaneWarning),
        ("STORM WARNING", WarningLevel::StormWarning),
        ("GALE WARNING", WarningLevel::GaleWarning),
        ("GALE FORCE GUSTS", WarningLevel::GaleForcePossible),
        ("STORM FORCE WINDS", WarningLevel::StormForcePossible),
        (
            "TROPICAL STORM CONDITIONS POSSIBLE",
            WarningLevel::TropicalStormConditionsPossible,
        ),
        ("SEAS 4 FT", WarningLevel::None),
    ];

    for (text, expected) in cases {
        assert_eq!(classify_warning(text), expected, "{}", text);
    }
}

#[test]
fn test_tropical_storm_warning_reads_as_storm_warning() {
    // STORM WARNING is a substring and ranks first
    assert_eq!(
        classify_warning("TROPICAL STORM WARNING"),
        WarningLevel::StormWarning
    );
}

#[test]
fn test_full_warning_outranks_possible_level() {
    assert_eq!(
        classify_warning("GALE FORCE WINDS LIKELY. GALE WARNING ISSUED."),
        WarningLevel::GaleWarning
    );
}
