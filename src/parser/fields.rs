//! Wind, seas and weather field extractors
//!
//! Each extractor runs over the whole whitespace-normalized period body and
//! is independent of the others; overlapping matches are fine. A field that
//! cannot be found falls back to its documented default string.

use super::ranges::{seas_range, wind_range};
use crate::constants::{DEFAULT_SEAS, DEFAULT_WEATHER, DEFAULT_WINDS, WEATHER_PHRASES, WEATHER_QUALIFIERS};
use crate::models::ForecastPeriod;
use once_cell::sync::Lazy;
use regex::Regex;

/// One capture pattern per weather phrase, in scan order
static WEATHER_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    let qualifiers = WEATHER_QUALIFIERS
        .iter()
        .map(|q| format!("{}\\s+", q.split_whitespace().collect::<Vec<_>>().join("\\s+")))
        .collect::<Vec<_>>()
        .join("|");

    WEATHER_PHRASES
        .iter()
        .map(|phrase| {
            let pattern = format!(
                r"(?i)\b((?:{})?{}[^.]*)",
                qualifiers,
                regex::escape(phrase)
            );
            let regex = Regex::new(&pattern).expect("weather pattern is valid");
            (*phrase, regex)
        })
        .collect()
});

/// Lower-case everything, then capitalise the first character
pub fn sentence_case(text: &str) -> String {
    let lower = text.trim().to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Winds display string, e.g. `N winds 15 to 20 kt`
pub fn extract_winds(body: &str) -> String {
    wind_range(body)
        .map(|found| sentence_case(&found.phrase))
        .unwrap_or_else(|| DEFAULT_WINDS.to_string())
}

/// Seas display string, e.g. `Seas 4 to 6 ft`
pub fn extract_seas(body: &str) -> String {
    seas_range(body)
        .map(|found| format!("Seas {} to {} ft", found.range.low, found.range.high))
        .unwrap_or_else(|| DEFAULT_SEAS.to_string())
}

/// Weather display string from the first phenomenon in scan order
pub fn extract_weather(body: &str) -> String {
    let lower = body.to_lowercase();

    WEATHER_PATTERNS
        .iter()
        .filter(|(phrase, _)| lower.contains(phrase))
        .find_map(|(_, pattern)| pattern.captures(body))
        .and_then(|caps| caps.get(1))
        .map(|m| sentence_case(m.as_str()))
        .unwrap_or_else(|| DEFAULT_WEATHER.to_string())
}

/// Build a period from its display label and normalized body
pub fn period_from_body(day: impl Into<String>, body: &str) -> ForecastPeriod {
    ForecastPeriod {
        day: day.into(),
        winds: extract_winds(body),
        seas: extract_seas(body),
        weather: extract_weather(body),
    }
}
