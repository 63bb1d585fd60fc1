//! Zone segmentation of an offshore bulletin
//!
//! A zone section starts at a line beginning with the zone id (optionally
//! followed by its UGC expiry code) and ends at whichever comes first:
//! another configured zone id, the `$$` product terminator, any id carrying a
//! known region prefix, or end of text. An id mentioned inside prose is never
//! treated as a section header.

use crate::constants::PRODUCT_TERMINATOR;
use regex::Regex;
use tracing::warn;

/// Byte range and text of one zone's section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneSegment<'a> {
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
}

#[derive(Debug)]
struct ZonePatterns {
    zone_id: String,
    header: Regex,
    boundary: Regex,
}

/// Precompiled header and boundary patterns for one product's zone list
#[derive(Debug)]
pub struct ZoneSegmenter {
    patterns: Vec<ZonePatterns>,
}

impl ZoneSegmenter {
    /// Build patterns for every zone. A zone whose pattern cannot be built is
    /// left out and will never be found.
    pub fn new(zone_ids: &[&str], zone_prefixes: &[String]) -> Self {
        let patterns = zone_ids
            .iter()
            .filter_map(|zone_id| match build_patterns(zone_id, zone_ids, zone_prefixes) {
                Ok(patterns) => Some(patterns),
                Err(e) => {
                    warn!("Could not build section pattern for zone {}: {}", zone_id, e);
                    None
                }
            })
            .collect();

        Self { patterns }
    }

    /// Locate the section of `zone_id` in `text`
    pub fn find<'a>(&self, text: &'a str, zone_id: &str) -> Option<ZoneSegment<'a>> {
        let patterns = self
            .patterns
            .iter()
            .find(|p| p.zone_id.eq_ignore_ascii_case(zone_id))?;

        let header = patterns.header.find(text)?;
        let start = header.start() + leading_blank_len(header.as_str());
        let end = patterns
            .boundary
            .find(&text[header.end()..])
            .map_or(text.len(), |m| header.end() + m.start());

        Some(ZoneSegment {
            start,
            end,
            text: &text[start..end],
        })
    }
}

fn leading_blank_len(text: &str) -> usize {
    text.len() - text.trim_start_matches([' ', '\t']).len()
}

fn build_patterns(
    zone_id: &str,
    zone_ids: &[&str],
    zone_prefixes: &[String],
) -> Result<ZonePatterns, regex::Error> {
    let header = Regex::new(&format!(
        r"(?im)^[ \t]*{}\b[-\d]*",
        regex::escape(zone_id)
    ))?;

    let mut alternatives: Vec<String> = zone_ids
        .iter()
        .filter(|other| !other.eq_ignore_ascii_case(zone_id))
        .map(|other| regex::escape(other))
        .collect();
    alternatives.push(regex::escape(PRODUCT_TERMINATOR));

    let prefixes: Vec<String> = zone_prefixes
        .iter()
        .filter(|prefix| !prefix.is_empty())
        .map(|prefix| regex::escape(prefix))
        .collect();
    if !prefixes.is_empty() {
        alternatives.push(format!(r"\b(?:{})\d", prefixes.join("|")));
    }

    let boundary = Regex::new(&format!("(?i)(?:{})", alternatives.join("|")))?;

    Ok(ZonePatterns {
        zone_id: zone_id.to_string(),
        header,
        boundary,
    })
}
