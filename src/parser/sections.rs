//! Structured sections of an OPAREA block
//!
//! Atlantic blocks carry lettered sections `A.` (hazards) through `I.`
//! (comments), each running to the next letter. Pacific blocks are looser
//! prose, so wind, seas and sky are read with fallback patterns and usually
//! carry no timestamps.

use super::oparea::{AreaFormat, detect_format};
use super::ranges::{abbreviate_direction, timestamped_samples, untimed_sample};
use crate::constants::{NO_DIRECTION, NO_TIMESTAMP};
use crate::models::{
    SectionKey, SectionValue, StructuredSections, TimeSample, TimedValue, TimelineRow,
};
use once_cell::sync::Lazy;
use regex::Regex;

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("section pattern is valid")
}

// =============================================================================
// Atlantic Section Headers
// =============================================================================

/// Lettered sections of an Atlantic block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lettered {
    Hazards,
    Sky,
    Visibility,
    Wind,
    Seas,
    Temps,
    Sst,
    Outlook,
    Comments,
}

/// Header pattern of each lettered section and the letter that ends it
static ATLANTIC_SECTIONS: Lazy<Vec<(Lettered, Regex, Option<Regex>)>> = Lazy::new(|| {
    let next = |letter: char| Some(pattern(&format!(r"(?i)\s*\b{}\.\s", letter)));
    vec![
        (
            Lettered::Hazards,
            pattern(r"(?i)A\.\s*(?:NATIONAL WEATHER SERVICE\s*)?HAZARDS?[^:]*:"),
            next('B'),
        ),
        (Lettered::Sky, pattern(r"(?i)B\.\s*SKY[^:]*:"), next('C')),
        (
            Lettered::Visibility,
            pattern(r"(?i)C\.\s*V[SI][SB][BY][^:]*:"),
            next('D'),
        ),
        (Lettered::Wind, pattern(r"(?i)D\.\s*SURFACE WIND[^:]*:"), next('E')),
        (Lettered::Seas, pattern(r"(?i)E\.\s*COMBINED SEAS[^:]*:"), next('F')),
        (Lettered::Temps, pattern(r"(?i)F\.\s*MAX/MIN TEMPS[^:]*:"), next('G')),
        (Lettered::Sst, pattern(r"(?i)G\.\s*SST[^:]*:"), next('H')),
        (Lettered::Outlook, pattern(r"(?i)H\.\s*OUTLOOK[^:]*:"), next('I')),
        (Lettered::Comments, pattern(r"(?i)I\.\s*OTHER COMMENTS[^:]*:"), None),
    ]
});

static OUTLOOK_WINDS: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)\(1\)\s*WINDS[^:]*:"));
static OUTLOOK_WINDS_END: Lazy<Regex> = Lazy::new(|| pattern(r"\s*\(2\)"));
static OUTLOOK_SEAS: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)\(2\)\s*COMBINED SEAS[^:]*:"));
static OUTLOOK_SEAS_END: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)\s*\(\d\)|\bI\.\s"));

static TIMED_VALUE: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)(\d{2}/\d{2}Z):\s*([^,\n]+)"));
static TEMPS_VALUE: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)\d{2}/\d{2}Z:\s*(\d+)/(\d+)"));
static SST_VALUE: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)\d{2}/\d{2}Z:\s*(\d+)"));
static ENUMERATOR: Lazy<Regex> = Lazy::new(|| pattern(r"\(\d+\)"));

// =============================================================================
// Pacific Patterns
// =============================================================================

static PACIFIC_WIND: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?i)WINDS?(?:\.{3})?[^.]*?(?:\b([A-Z-]+)\s+)?(\d+)\s+TO\s+(\d+)\s*(?:KT|KNOTS)?")
});
static PACIFIC_COMBINED_SEAS: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?i)COMBINED\s+SEAS(?:\.{3})?[^.]*?(?:\b([A-Z-]+)\s+)?(\d+)\s+TO\s+(\d+)\s*(?:FT|FEET)?")
});
static PACIFIC_TIMED_SEAS: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?i)(\d{2}/\d{2}Z):[^,\n]*?(\d+)\s+TO\s+(\d+)\s*(?:FT|FEET)")
});
static PACIFIC_SEAS: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?i)SEAS(?:\.{3})?[^.]*?(\d+)\s+TO\s+(\d+)\s*(?:FT|FEET)?")
});
static PACIFIC_SKY: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?i)SKY/(?:WX|WEATHER)[^.]*?\.\.\.([^.]+)"));

/// Parse a block with the layout it declares
pub fn parse_sections(text: &str) -> StructuredSections {
    match detect_format(text) {
        AreaFormat::Pacific => parse_pacific_sections(text),
        AreaFormat::Atlantic => parse_atlantic_sections(text),
    }
}

/// Body of a section: after its header, up to the terminator or end of text
fn section_body<'a>(text: &'a str, header: &Regex, terminator: Option<&Regex>) -> Option<&'a str> {
    let found = header.find(text)?;
    let rest = &text[found.end()..];
    let end = terminator
        .and_then(|t| t.find(rest))
        .map_or(rest.len(), |m| m.start());
    Some(&rest[..end])
}

fn sorted(mut samples: Vec<TimeSample>) -> Vec<TimeSample> {
    samples.sort_by(|a, b| a.time.cmp(&b.time));
    samples
}

fn timed_values(body: &str) -> Vec<TimedValue> {
    TIMED_VALUE
        .captures_iter(body)
        .filter_map(|caps| {
            let value = caps.get(2)?.as_str().trim();
            Some(TimedValue {
                time: caps.get(1)?.as_str().to_uppercase(),
                value: value
                    .strip_suffix([',', '.'])
                    .unwrap_or(value)
                    .to_string(),
            })
        })
        .collect()
}

fn insert_samples(sections: &mut StructuredSections, key: SectionKey, samples: Vec<TimeSample>) {
    if !samples.is_empty() {
        sections.insert(key, SectionValue::Samples(sorted(samples)));
    }
}

fn insert_values(sections: &mut StructuredSections, key: SectionKey, values: Vec<TimedValue>) {
    if !values.is_empty() {
        sections.insert(key, SectionValue::Values(values));
    }
}

fn insert_text(sections: &mut StructuredSections, key: SectionKey, text: String) {
    if !text.is_empty() {
        sections.insert(key, SectionValue::Text(text));
    }
}

/// Lettered `A.` through `I.` sections
pub fn parse_atlantic_sections(text: &str) -> StructuredSections {
    let mut sections = StructuredSections::new();

    for (section, header, terminator) in ATLANTIC_SECTIONS.iter() {
        let Some(body) = section_body(text, header, terminator.as_ref()) else {
            continue;
        };

        match section {
            Lettered::Hazards => {
                let hazards = body.replace("...", "").trim().to_string();
                insert_text(&mut sections, SectionKey::Hazards, hazards);
            }
            Lettered::Sky => insert_values(&mut sections, SectionKey::Sky, timed_values(body)),
            Lettered::Visibility => {
                insert_values(&mut sections, SectionKey::Visibility, timed_values(body))
            }
            Lettered::Wind => {
                insert_samples(&mut sections, SectionKey::Wind, timestamped_samples(body, true))
            }
            Lettered::Seas => {
                insert_samples(&mut sections, SectionKey::Seas, timestamped_samples(body, false))
            }
            Lettered::Temps => {
                if let Some(caps) = TEMPS_VALUE.captures(body) {
                    let temps = format!("Max: {}°F, Min: {}°F", &caps[1], &caps[2]);
                    insert_text(&mut sections, SectionKey::Temps, temps);
                }
            }
            Lettered::Sst => {
                if let Some(caps) = SST_VALUE.captures(body) {
                    insert_text(&mut sections, SectionKey::Sst, format!("{}°F", &caps[1]));
                }
            }
            Lettered::Outlook => parse_outlook(&mut sections, body),
            Lettered::Comments => {
                let comments = ENUMERATOR.replace_all(body, "•").trim().to_string();
                insert_text(&mut sections, SectionKey::Comments, comments);
            }
        }
    }

    sections
}

/// `(1) WINDS` and `(2) COMBINED SEAS` inside the outlook section
fn parse_outlook(sections: &mut StructuredSections, outlook: &str) {
    if let Some(body) = section_body(outlook, &OUTLOOK_WINDS, Some(&*OUTLOOK_WINDS_END)) {
        insert_samples(sections, SectionKey::OutlookWind, timestamped_samples(body, true));
    }
    if let Some(body) = section_body(outlook, &OUTLOOK_SEAS, Some(&*OUTLOOK_SEAS_END)) {
        insert_samples(sections, SectionKey::OutlookSeas, timestamped_samples(body, false));
    }
}

fn number(caps: &regex::Captures<'_>, index: usize) -> Option<u32> {
    caps.get(index)?.as_str().parse().ok()
}

/// Loose wind, seas and sky patterns of Pacific area blocks
pub fn parse_pacific_sections(text: &str) -> StructuredSections {
    let mut sections = StructuredSections::new();

    let mut wind = timestamped_samples(text, true);
    if wind.is_empty() {
        wind = PACIFIC_WIND
            .captures_iter(text)
            .filter_map(|caps| {
                Some(untimed_sample(
                    caps.get(1).map(|m| m.as_str()),
                    number(&caps, 2)?,
                    number(&caps, 3)?,
                ))
            })
            .collect();
    }
    insert_samples(&mut sections, SectionKey::Wind, wind);

    insert_samples(&mut sections, SectionKey::Seas, pacific_seas(text));

    let sky: Vec<TimedValue> = PACIFIC_SKY
        .captures_iter(text)
        .filter_map(|caps| {
            Some(TimedValue {
                time: NO_TIMESTAMP.to_string(),
                value: caps.get(1)?.as_str().trim().to_string(),
            })
        })
        .collect();
    insert_values(&mut sections, SectionKey::Sky, sky);

    sections
}

fn pacific_seas(text: &str) -> Vec<TimeSample> {
    let combined: Vec<TimeSample> = PACIFIC_COMBINED_SEAS
        .captures_iter(text)
        .filter_map(|caps| {
            Some(untimed_sample(
                caps.get(1).map(|m| m.as_str()),
                number(&caps, 2)?,
                number(&caps, 3)?,
            ))
        })
        .collect();
    if !combined.is_empty() {
        return combined;
    }

    let timed: Vec<TimeSample> = PACIFIC_TIMED_SEAS
        .captures_iter(text)
        .filter_map(|caps| {
            let mut sample = untimed_sample(None, number(&caps, 2)?, number(&caps, 3)?);
            sample.time = caps.get(1)?.as_str().to_uppercase();
            Some(sample)
        })
        .collect();
    if !timed.is_empty() {
        return timed;
    }

    PACIFIC_SEAS
        .captures_iter(text)
        .filter_map(|caps| Some(untimed_sample(None, number(&caps, 1)?, number(&caps, 2)?)))
        .collect()
}

// =============================================================================
// Timelines
// =============================================================================

fn range_text(sample: Option<&TimeSample>) -> String {
    sample.map_or_else(
        || NO_TIMESTAMP.to_string(),
        |s| format!("{}-{}", s.low, s.high),
    )
}

fn row(time: &str, sky: &str, wind: Option<&TimeSample>, seas: Option<&TimeSample>) -> TimelineRow {
    TimelineRow {
        time: time.to_string(),
        sky: sky.to_string(),
        wind_dir: abbreviate_direction(wind.map_or(NO_DIRECTION, |w| w.direction.as_str())),
        wind: range_text(wind),
        gust: wind
            .and_then(|w| w.gust)
            .map_or_else(|| NO_TIMESTAMP.to_string(), |g| g.to_string()),
        wave_dir: abbreviate_direction(seas.map_or(NO_DIRECTION, |s| s.direction.as_str())),
        waves: range_text(seas),
    }
}

/// Distinct times in first-seen order, then sorted with `-` first
fn merged_times<'a>(groups: &[&'a [String]]) -> Vec<&'a str> {
    let mut times: Vec<&str> = Vec::new();
    for time in groups.iter().flat_map(|group| group.iter()) {
        if !times.contains(&time.as_str()) {
            times.push(time.as_str());
        }
    }
    times.sort_by(|a, b| match (*a == NO_TIMESTAMP, *b == NO_TIMESTAMP) {
        (true, false) => std::cmp::Ordering::Less,
        (false, true) => std::cmp::Ordering::Greater,
        _ => a.cmp(b),
    });
    times
}

/// Forecast timeline pairing sky, wind and seas per time
pub fn timeline(sections: &StructuredSections) -> Vec<TimelineRow> {
    let wind = sections.samples(SectionKey::Wind);
    let seas = sections.samples(SectionKey::Seas);
    let sky = sections.values(SectionKey::Sky);

    let wind_times: Vec<String> = wind.iter().map(|w| w.time.clone()).collect();
    let seas_times: Vec<String> = seas.iter().map(|s| s.time.clone()).collect();
    let sky_times: Vec<String> = sky.iter().map(|s| s.time.clone()).collect();
    let times = merged_times(&[
        wind_times.as_slice(),
        seas_times.as_slice(),
        sky_times.as_slice(),
    ]);

    // Untimed blocks pair readings by position; a general sky goes on the first row
    if times == [NO_TIMESTAMP] {
        let general_sky = sky.first().map_or(NO_TIMESTAMP, |s| s.value.as_str());
        return (0..wind.len().max(seas.len()))
            .map(|index| {
                let sky = if index == 0 { general_sky } else { NO_TIMESTAMP };
                row(NO_TIMESTAMP, sky, wind.get(index), seas.get(index))
            })
            .collect();
    }

    times
        .into_iter()
        .map(|time| {
            let sky = sky
                .iter()
                .find(|s| s.time == time)
                .map_or(NO_TIMESTAMP, |s| s.value.as_str());
            row(
                time,
                sky,
                wind.iter().find(|w| w.time == time),
                seas.iter().find(|s| s.time == time),
            )
        })
        .collect()
}

/// 48-hour outlook timeline pairing outlook wind and seas per time
pub fn outlook_timeline(sections: &StructuredSections) -> Vec<TimelineRow> {
    let wind = sections.samples(SectionKey::OutlookWind);
    let seas = sections.samples(SectionKey::OutlookSeas);

    let wind_times: Vec<String> = wind.iter().map(|w| w.time.clone()).collect();
    let seas_times: Vec<String> = seas.iter().map(|s| s.time.clone()).collect();

    merged_times(&[wind_times.as_slice(), seas_times.as_slice()])
        .into_iter()
        .map(|time| {
            row(
                time,
                NO_TIMESTAMP,
                wind.iter().find(|w| w.time == time),
                seas.iter().find(|s| s.time == time),
            )
        })
        .collect()
}
