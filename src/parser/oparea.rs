//! OPAREA area block location
//!
//! Navy bulletins list several operating areas one after another. Each area
//! is configured with the marker that opens its block and the marker that
//! opens whatever follows it.

use once_cell::sync::Lazy;
use regex::Regex;

/// `4. AREA A:` style header that marks the Pacific layout
static PACIFIC_AREA_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\d+\.\s*AREA\s+[A-Z]:").expect("area header pattern is valid")
});

static NUMBERED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\d+\.").expect("numbered line pattern is valid"));

/// Section layout of an area block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaFormat {
    /// Lettered `A.` through `I.` sections with timestamped samples
    Atlantic,
    /// Numbered `N. AREA X:` blocks with looser prose
    Pacific,
}

/// Detect the layout from the start of a block or marker
pub fn detect_format(text: &str) -> AreaFormat {
    if PACIFIC_AREA_HEADER.is_match(text.trim_start()) {
        AreaFormat::Pacific
    } else {
        AreaFormat::Atlantic
    }
}

/// Locate one area's block of text, trimmed
pub fn locate_area<'a>(text: &'a str, start_marker: &str, end_marker: &str) -> Option<&'a str> {
    match detect_format(start_marker) {
        AreaFormat::Pacific => locate_pacific(text, start_marker, end_marker),
        AreaFormat::Atlantic => locate_atlantic(text, start_marker, end_marker),
    }
}

fn case_insensitive(pattern: &str) -> Option<Regex> {
    Regex::new(&format!("(?i){}", pattern)).ok()
}

/// Marker at the start of a line, so `8.` never matches inside `18.`
fn line_start(marker: &str) -> Option<Regex> {
    case_insensitive(&format!(r"(?m)^[ \t]*{}", regex::escape(marker)))
}

/// From the start marker line to the end marker line or end of text
fn locate_pacific<'a>(text: &'a str, start_marker: &str, end_marker: &str) -> Option<&'a str> {
    let start = line_start(start_marker)?.find(text)?;
    let rest = &text[start.end()..];
    let end = line_start(end_marker)?
        .find(rest)
        .map_or(rest.len(), |m| m.start());

    let block = text[start.start()..start.end() + end].trim();
    (!block.is_empty()).then_some(block)
}

/// From `<n>. <START>` to the line opening `<n>. <END>` or end of text, with
/// a fallback for blocks that carry no number
fn locate_atlantic<'a>(text: &'a str, start_marker: &str, end_marker: &str) -> Option<&'a str> {
    let start_pattern = regex::escape(start_marker);

    if let Some(start) = case_insensitive(&format!(r"\d+\.\s*{}", start_pattern))?.find(text) {
        let rest = &text[start.end()..];
        let end = case_insensitive(&format!(r"\n\s*\d+\.\s*{}", regex::escape(end_marker)))?
            .find(rest)
            .map_or(rest.len(), |m| m.start());
        let block = text[start.start()..start.end() + end].trim();
        return (!block.is_empty()).then_some(block);
    }

    let start = case_insensitive(&start_pattern)?.find(text)?;
    let end = NUMBERED_LINE.find(&text[start.end()..])?;
    let block = text[start.start()..start.end() + end.start()].trim();
    (!block.is_empty()).then_some(block)
}
