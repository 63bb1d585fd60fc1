//! Period segmentation of a zone section
//!
//! A period header is a single dot, an upper-case label of letters and
//! spaces, and three dots (`.TONIGHT...`). Every header ends the previous
//! body, but only labels with an accepted day prefix become periods; the
//! rest is prose that happens to look like a header.

use crate::constants::is_accepted_period_label;
use crate::header::collapse_whitespace;
use once_cell::sync::Lazy;
use regex::Regex;

static PERIOD_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.([A-Z][A-Z\s]*?)\.\.\.").expect("period header pattern is valid")
});

/// A labelled period body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSegment {
    /// Label as written, e.g. `THU NIGHT`
    pub label: String,
    /// Body with whitespace runs collapsed
    pub body: String,
}

impl PeriodSegment {
    /// Display form of the label, e.g. `Thu Night`
    pub fn day(&self) -> String {
        title_case_label(&self.label)
    }
}

/// Split zone text into accepted periods, in order of appearance
pub fn segment_periods(text: &str) -> Vec<PeriodSegment> {
    let headers: Vec<_> = PERIOD_HEADER.captures_iter(text).collect();

    headers
        .iter()
        .enumerate()
        .filter_map(|(index, caps)| {
            let whole = caps.get(0)?;
            let label = collapse_whitespace(caps.get(1)?.as_str());
            if !is_accepted_period_label(&label) {
                return None;
            }

            let body_end = headers
                .get(index + 1)
                .and_then(|next| next.get(0))
                .map_or(text.len(), |next| next.start());

            Some(PeriodSegment {
                label,
                body: collapse_whitespace(&text[whole.end()..body_end]),
            })
        })
        .collect()
}

/// Lower-case the label and capitalise each word
pub fn title_case_label(label: &str) -> String {
    label
        .split_whitespace()
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
