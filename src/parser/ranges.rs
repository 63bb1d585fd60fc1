//! Numeric range extraction
//!
//! Pulls `(low, high)` pairs out of wind and seas phrases, together with the
//! compass token that precedes them and an optional gust. When a phrase only
//! carries one number the high end equals the low end.

use crate::constants::{NO_DIRECTION, NO_TIMESTAMP};
use crate::models::TimeSample;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `N WINDS 15 TO 20 KT`, `NE TO E 25 KT`
static WIND_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b([NSEW]{1,2}(?:\s+TO\s+[NSEW]{1,2})?)\s+(?:WINDS?\s+)?(\d+)\s*(?:TO\s*)?(\d+)?\s*KT")
        .expect("wind phrase pattern is valid")
});

/// `SEAS 4 TO 6 FT`, `COMBINED SEAS 8 FT`
static SEAS_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:COMBINED\s+)?SEAS?\s+(\d+)\s*(?:TO\s*)?(\d+)?\s*FT")
        .expect("seas phrase pattern is valid")
});

/// Bare `4 TO 6 FT`
static BARE_FEET_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s+TO\s+(\d+)\s*FT").expect("bare range pattern is valid")
});

static ANY_KNOTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:TO\s*)?(\d+)?\s*(?:KT|KNOTS)").expect("knots pattern is valid")
});

static ANY_FEET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:TO\s*)?(\d+)?\s*FT").expect("feet pattern is valid")
});

/// `04/00Z: SOUTHWEST 15 TO 20G25`
static TIMESTAMPED_SAMPLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d{2}/\d{2}Z):\s*([A-Z-]+)\s+(\d+)\s+TO\s+(\d+)(?:G(\d+))?")
        .expect("timestamped sample pattern is valid")
});

/// A numeric range with optional direction and gust
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericRange {
    pub direction: Option<String>,
    pub low: u32,
    pub high: u32,
    pub gust: Option<u32>,
}

impl NumericRange {
    /// Larger end of the range
    pub fn peak(&self) -> u32 {
        self.low.max(self.high)
    }
}

/// A range together with the phrase it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeMatch {
    pub phrase: String,
    pub range: NumericRange,
}

fn number(caps: &Captures<'_>, index: usize) -> Option<u32> {
    caps.get(index).and_then(|m| m.as_str().parse().ok())
}

/// Low from `low_index`, high from `high_index` or the low value
fn range_from(caps: &Captures<'_>, low_index: usize, high_index: usize) -> Option<(u32, u32)> {
    let low = number(caps, low_index)?;
    let high = number(caps, high_index).unwrap_or(low);
    Some((low, high))
}

/// First directional wind phrase in the text
///
/// The direction must come first: `N WINDS 15 KT` keeps the whole phrase,
/// while `WINDS N 15 KT` matches only from the direction (`N 15 KT`).
pub fn wind_range(text: &str) -> Option<RangeMatch> {
    let caps = WIND_PHRASE.captures(text)?;
    let (low, high) = range_from(&caps, 2, 3)?;

    Some(RangeMatch {
        phrase: caps.get(0)?.as_str().trim().to_string(),
        range: NumericRange {
            direction: caps.get(1).map(|m| m.as_str().to_string()),
            low,
            high,
            gust: None,
        },
    })
}

/// First seas phrase, falling back to a bare `<a> TO <b> FT` range
pub fn seas_range(text: &str) -> Option<RangeMatch> {
    let caps = SEAS_PHRASE
        .captures(text)
        .or_else(|| BARE_FEET_RANGE.captures(text))?;
    let (low, high) = range_from(&caps, 1, 2)?;

    Some(RangeMatch {
        phrase: caps.get(0)?.as_str().trim().to_string(),
        range: NumericRange {
            direction: None,
            low,
            high,
            gust: None,
        },
    })
}

fn all_ranges(pattern: &Regex, text: &str) -> Vec<NumericRange> {
    pattern
        .captures_iter(text)
        .filter_map(|caps| {
            let (low, high) = range_from(&caps, 1, 2)?;
            Some(NumericRange {
                direction: None,
                low,
                high,
                gust: None,
            })
        })
        .collect()
}

/// Highest wind speed in knots mentioned anywhere in the text, 0 when none
pub fn peak_wind_kt(text: &str) -> u32 {
    all_ranges(&ANY_KNOTS, text)
        .iter()
        .map(NumericRange::peak)
        .max()
        .unwrap_or(0)
}

/// Highest wave height in feet mentioned anywhere in the text, 0 when none
pub fn peak_seas_ft(text: &str) -> u32 {
    all_ranges(&ANY_FEET, text)
        .iter()
        .map(NumericRange::peak)
        .max()
        .unwrap_or(0)
}

/// Every `DD/HHZ: DIRECTION LOW TO HIGH[G<gust>]` sample, in text order
pub fn timestamped_samples(text: &str, allow_gust: bool) -> Vec<TimeSample> {
    TIMESTAMPED_SAMPLE
        .captures_iter(text)
        .filter_map(|caps| {
            Some(TimeSample {
                time: caps.get(1)?.as_str().to_uppercase(),
                direction: caps.get(2)?.as_str().to_string(),
                low: number(&caps, 3)?,
                high: number(&caps, 4)?,
                gust: if allow_gust { number(&caps, 5) } else { None },
            })
        })
        .collect()
}

/// Sample without a timestamp
pub fn untimed_sample(direction: Option<&str>, low: u32, high: u32) -> TimeSample {
    TimeSample {
        time: NO_TIMESTAMP.to_string(),
        direction: direction.unwrap_or(NO_DIRECTION).to_string(),
        low,
        high,
        gust: None,
    }
}

/// Abbreviate a spelled-out compass direction; unknown tokens pass through
pub fn abbreviate_direction(direction: &str) -> String {
    let upper = direction.trim().to_uppercase();
    let abbreviation = match upper.as_str() {
        "" | NO_DIRECTION => NO_DIRECTION,
        "NORTH" => "N",
        "SOUTH" => "S",
        "EAST" => "E",
        "WEST" => "W",
        "NORTHEAST" => "NE",
        "NORTHWEST" => "NW",
        "SOUTHEAST" => "SE",
        "SOUTHWEST" => "SW",
        "NORTH-NORTHEAST" => "NNE",
        "NORTH-NORTHWEST" => "NNW",
        "SOUTH-SOUTHEAST" => "SSE",
        "SOUTH-SOUTHWEST" => "SSW",
        "EAST-NORTHEAST" => "ENE",
        "EAST-SOUTHEAST" => "ESE",
        "WEST-NORTHWEST" => "WNW",
        "WEST-SOUTHWEST" => "WSW",
        _ => return direction.trim().to_string(),
    };
    abbreviation.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wind_range_with_direction() {
        let found = wind_range("N WINDS 15 TO 20 KT. SEAS 4 TO 6 FT.").unwrap();
        assert_eq!(found.phrase, "N WINDS 15 TO 20 KT");
        assert_eq!(found.range.direction.as_deref(), Some("N"));
        assert_eq!((found.range.low, found.range.high), (15, 20));
    }

    #[test]
    fn test_wind_range_two_directions_single_value() {
        let found = wind_range("NE TO E 25 KT, diminishing").unwrap();
        assert_eq!(found.range.direction.as_deref(), Some("NE TO E"));
        assert_eq!((found.range.low, found.range.high), (25, 25));
    }

    #[test]
    fn test_wind_range_leading_winds_word_is_not_captured() {
        let found = wind_range("WINDS N 15 KT").unwrap();
        assert_eq!(found.phrase, "N 15 KT");
        assert_eq!((found.range.low, found.range.high), (15, 15));
    }

    #[test]
    fn test_wind_range_ignores_letters_inside_words() {
        // The S at the end of WINDS is not a direction
        assert_eq!(wind_range("VARIABLE WINDS 10 KT"), None);
    }

    #[test]
    fn test_seas_range_and_fallback() {
        let seas = seas_range("COMBINED SEAS 8 TO 12 FT").unwrap();
        assert_eq!((seas.range.low, seas.range.high), (8, 12));

        let single = seas_range("SEAS 6 FT").unwrap();
        assert_eq!((single.range.low, single.range.high), (6, 6));

        let bare = seas_range("WAVES BUILDING 5 TO 7 FT").unwrap();
        assert_eq!((bare.range.low, bare.range.high), (5, 7));

        assert_eq!(seas_range("SEAS SUBSIDING"), None);
    }

    #[test]
    fn test_peak_values() {
        let text = "N TO NW 20 TO 30 KT, BECOMING 35 KT. SEAS 8 TO 12 FT, BUILDING TO 14 FT.";
        assert_eq!(peak_wind_kt(text), 35);
        assert_eq!(peak_seas_ft(text), 14);
        assert_eq!(peak_wind_kt("CALM"), 0);
        assert_eq!(peak_seas_ft(""), 0);
    }

    #[test]
    fn test_timestamped_samples_with_gusts() {
        let text = "04/00Z: SOUTHWEST 15 TO 20G25,\n04/06Z: WEST-SOUTHWEST 10 TO 15,";
        let samples = timestamped_samples(text, true);
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].time, "04/00Z");
        assert_eq!(samples[0].direction, "SOUTHWEST");
        assert_eq!(samples[0].gust, Some(25));
        assert_eq!(samples[1].direction, "WEST-SOUTHWEST");
        assert_eq!(samples[1].gust, None);

        let without = timestamped_samples(text, false);
        assert_eq!(without[0].gust, None);
    }

    #[test]
    fn test_untimed_sample_without_direction() {
        let sample = untimed_sample(None, 5, 7);
        assert_eq!(sample.time, NO_TIMESTAMP);
        assert_eq!(sample.direction, NO_DIRECTION);
        assert_eq!(abbreviate_direction(&sample.direction), NO_DIRECTION);
        assert_eq!(untimed_sample(Some("WEST"), 5, 7).direction, "WEST");
    }

    #[test]
    fn test_abbreviate_direction() {
        assert_eq!(abbreviate_direction("southwest"), "SW");
        assert_eq!(abbreviate_direction("WEST-SOUTHWEST"), "WSW");
        assert_eq!(abbreviate_direction("VARIABLE"), "VARIABLE");
        assert_eq!(abbreviate_direction("-"), "-");
    }
}
