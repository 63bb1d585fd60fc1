//! Bulletin-wide header extraction.
//!
//! Issue time and synopsis are properties of the whole bulletin rather than
//! of any single zone or area, so they are extracted once per parse.

use crate::constants::{FALLBACK_TIME_FORMAT, SYNOPSIS_UNAVAILABLE};
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// `1015 AM EST MON JAN 15 2024`
static ISSUE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d{3,4}\s*(?:AM|PM)\s*\w+\s+\w+\s+\w+\s+\d+\s+\d{4}")
        .expect("issue time pattern is valid")
});

static SYNOPSIS_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d+\.\s*(METEOROLOGICAL SITUATION)").expect("synopsis pattern is valid")
});

/// Start of the next numbered header line
static NUMBERED_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\n\s*\d+\.\s*[A-Z]").expect("numbered header pattern is valid")
});

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// First issue-time phrase in the bulletin
pub fn extract_issue_time(text: &str) -> Option<String> {
    let found = ISSUE_TIME
        .find(text)
        .map(|m| m.as_str().trim().to_string());

    if found.is_none() {
        debug!("No issue time phrase found in bulletin");
    }
    found
}

/// Wall-clock issue time used when a zone bulletin carries none
pub fn wall_clock_issue_time() -> String {
    Utc::now().format(FALLBACK_TIME_FORMAT).to_string()
}

/// Text of the numbered `METEOROLOGICAL SITUATION` header up to the next
/// numbered header, whitespace collapsed
pub fn extract_synopsis(text: &str) -> Option<String> {
    let start = SYNOPSIS_START.captures(text)?.get(1)?;
    let rest = &text[start.start()..];
    let end = NUMBERED_HEADER.find(rest)?.start();

    Some(collapse_whitespace(&rest[..end]))
}

/// Synopsis or the unavailable marker
pub fn synopsis_or_default(text: &str) -> String {
    extract_synopsis(text).unwrap_or_else(|| SYNOPSIS_UNAVAILABLE.to_string())
}

/// Replace every run of whitespace with one space and trim
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAVY_HEADER: &str = "\
FLEET WEATHER CENTER NORFOLK VA
0300 AM EST TUE JAN 16 2024

1. METEOROLOGICAL SITUATION AT 16/00Z: LOW PRESSURE
   OVER THE GULF OF MAINE MOVES EAST.
2. BOSTON OPAREA:
   A. HAZARDS: NONE.
";

    #[test]
    fn test_extract_issue_time() {
        assert_eq!(
            extract_issue_time(NAVY_HEADER).as_deref(),
            Some("0300 AM EST TUE JAN 16 2024")
        );
        assert_eq!(
            extract_issue_time("1015 am est mon jan 15 2024\nANZ800").as_deref(),
            Some("1015 am est mon jan 15 2024")
        );
        assert_eq!(extract_issue_time("no time here"), None);
    }

    #[test]
    fn test_extract_synopsis() {
        assert_eq!(
            extract_synopsis(NAVY_HEADER).as_deref(),
            Some("METEOROLOGICAL SITUATION AT 16/00Z: LOW PRESSURE OVER THE GULF OF MAINE MOVES EAST.")
        );
    }

    #[test]
    fn test_synopsis_requires_following_header() {
        let text = "1. METEOROLOGICAL SITUATION: HIGH PRESSURE DOMINATES.";
        assert_eq!(extract_synopsis(text), None);
        assert_eq!(synopsis_or_default(text), "Synopsis unavailable");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  N WINDS\n 15   TO 20 KT "), "N WINDS 15 TO 20 KT");
    }
}
