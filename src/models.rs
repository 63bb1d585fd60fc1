//! Core data structures and types for bulletin processing.
//!
//! Defines the warning severity scale, the zone-style forecast records,
//! the OPAREA section records, and batch processing statistics.

use crate::constants::{DATA_UNAVAILABLE, DEFAULT_WEATHER, PLACEHOLDER_DAY};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Warning severity levels, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarningLevel {
    #[serde(rename = "HURRICANE FORCE WIND WARNING")]
    HurricaneForceWindWarning,
    #[serde(rename = "HURRICANE WARNING")]
    HurricaneWarning,
    #[serde(rename = "STORM WARNING")]
    StormWarning,
    #[serde(rename = "TROPICAL STORM WARNING")]
    TropicalStormWarning,
    #[serde(rename = "GALE WARNING")]
    GaleWarning,
    #[serde(rename = "GALE FORCE POSSIBLE")]
    GaleForcePossible,
    #[serde(rename = "STORM FORCE POSSIBLE")]
    StormForcePossible,
    #[serde(rename = "TROPICAL STORM CONDITIONS POSSIBLE")]
    TropicalStormConditionsPossible,
    #[serde(rename = "NONE")]
    None,
}

impl WarningLevel {
    /// Classification order. The first level whose trigger phrase occurs wins.
    pub const BY_PRIORITY: [WarningLevel; 8] = [
        WarningLevel::HurricaneForceWindWarning,
        WarningLevel::HurricaneWarning,
        WarningLevel::StormWarning,
        WarningLevel::TropicalStormWarning,
        WarningLevel::GaleWarning,
        WarningLevel::GaleForcePossible,
        WarningLevel::StormForcePossible,
        WarningLevel::TropicalStormConditionsPossible,
    ];

    /// Label as it appears in output records
    pub fn label(&self) -> &'static str {
        match self {
            WarningLevel::HurricaneForceWindWarning => "HURRICANE FORCE WIND WARNING",
            WarningLevel::HurricaneWarning => "HURRICANE WARNING",
            WarningLevel::StormWarning => "STORM WARNING",
            WarningLevel::TropicalStormWarning => "TROPICAL STORM WARNING",
            WarningLevel::GaleWarning => "GALE WARNING",
            WarningLevel::GaleForcePossible => "GALE FORCE POSSIBLE",
            WarningLevel::StormForcePossible => "STORM FORCE POSSIBLE",
            WarningLevel::TropicalStormConditionsPossible => "TROPICAL STORM CONDITIONS POSSIBLE",
            WarningLevel::None => "NONE",
        }
    }

    /// Upper-case phrase whose presence in bulletin text triggers this level
    pub fn trigger_phrase(&self) -> Option<&'static str> {
        match self {
            WarningLevel::GaleForcePossible => Some("GALE FORCE"),
            WarningLevel::StormForcePossible => Some("STORM FORCE"),
            WarningLevel::TropicalStormConditionsPossible => Some("TROPICAL STORM CONDITIONS"),
            WarningLevel::None => None,
            other => Some(other.label()),
        }
    }

    /// Map fill colour used by the viewer for this level
    pub fn color(&self) -> &'static str {
        match self {
            WarningLevel::HurricaneForceWindWarning | WarningLevel::HurricaneWarning => "#ff0000",
            WarningLevel::StormWarning | WarningLevel::TropicalStormWarning => "#ffa500",
            WarningLevel::GaleWarning => "#ffff00",
            WarningLevel::GaleForcePossible => "#ffc0cb",
            WarningLevel::StormForcePossible | WarningLevel::TropicalStormConditionsPossible => {
                "#800080"
            }
            WarningLevel::None => "#808080",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, WarningLevel::None)
    }
}

impl fmt::Display for WarningLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One day or day-part of a zone forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    #[serde(rename = "Day")]
    pub day: String,
    #[serde(rename = "Winds")]
    pub winds: String,
    #[serde(rename = "Seas")]
    pub seas: String,
    #[serde(rename = "Weather")]
    pub weather: String,
}

impl ForecastPeriod {
    /// Period emitted when nothing could be extracted for a zone
    pub fn placeholder() -> Self {
        Self {
            day: PLACEHOLDER_DAY.to_string(),
            winds: DATA_UNAVAILABLE.to_string(),
            seas: DATA_UNAVAILABLE.to_string(),
            weather: DEFAULT_WEATHER.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.winds == DATA_UNAVAILABLE && self.seas == DATA_UNAVAILABLE
    }
}

/// Structured forecast for one offshore zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ZoneForecastRecord")]
pub struct ZoneForecast {
    #[serde(rename = "zone")]
    pub zone_id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "time")]
    pub issue_time: String,
    pub warning: WarningLevel,
    /// Never empty
    #[serde(rename = "forecast")]
    pub periods: Vec<ForecastPeriod>,
}

impl ZoneForecast {
    /// Build a zone record, inserting the placeholder period when `periods` is empty
    pub fn new(
        zone_id: impl Into<String>,
        display_name: impl Into<String>,
        issue_time: impl Into<String>,
        warning: WarningLevel,
        mut periods: Vec<ForecastPeriod>,
    ) -> Self {
        if periods.is_empty() {
            periods.push(ForecastPeriod::placeholder());
        }

        Self {
            zone_id: zone_id.into(),
            display_name: display_name.into(),
            issue_time: issue_time.into(),
            warning,
            periods,
        }
    }

    /// True when the record carries only the placeholder period
    pub fn is_placeholder(&self) -> bool {
        self.periods.len() == 1 && self.periods[0].is_placeholder()
    }
}

/// Wire form of a zone record; every decoded record goes through `ZoneForecast::new`
#[derive(Deserialize)]
struct ZoneForecastRecord {
    zone: String,
    name: String,
    time: String,
    warning: WarningLevel,
    #[serde(default)]
    forecast: Vec<ForecastPeriod>,
}

impl From<ZoneForecastRecord> for ZoneForecast {
    fn from(record: ZoneForecastRecord) -> Self {
        ZoneForecast::new(
            record.zone,
            record.name,
            record.time,
            record.warning,
            record.forecast,
        )
    }
}

/// Ocean basin of an OPAREA, which selects the section format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Basin {
    Atlantic,
    Pacific,
}

/// Wind or seas reading at one forecast time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSample {
    /// `DD/HHZ` token, or `-` when the bulletin carries no timestamp
    pub time: String,
    /// Compass token as written, or `-`
    pub direction: String,
    pub low: u32,
    pub high: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gust: Option<u32>,
}

/// Free-text value at one forecast time (sky, visibility)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedValue {
    pub time: String,
    pub value: String,
}

/// Keys of the structured OPAREA sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    Hazards,
    Sky,
    Visibility,
    Wind,
    Seas,
    Temps,
    Sst,
    OutlookWind,
    OutlookSeas,
    Comments,
}

/// Content of one structured section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionValue {
    Text(String),
    Samples(Vec<TimeSample>),
    Values(Vec<TimedValue>),
}

/// Section key to content mapping of an OPAREA forecast
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructuredSections(BTreeMap<SectionKey, SectionValue>);

impl StructuredSections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: SectionKey, value: SectionValue) {
        self.0.insert(key, value);
    }

    pub fn get(&self, key: SectionKey) -> Option<&SectionValue> {
        self.0.get(&key)
    }

    /// Text content of a section, if it is a text section
    pub fn text(&self, key: SectionKey) -> Option<&str> {
        match self.0.get(&key) {
            Some(SectionValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Samples of a wind/seas section; empty when absent
    pub fn samples(&self, key: SectionKey) -> &[TimeSample] {
        match self.0.get(&key) {
            Some(SectionValue::Samples(samples)) => samples,
            _ => &[],
        }
    }

    /// Timed values of a sky/visibility section; empty when absent
    pub fn values(&self, key: SectionKey) -> &[TimedValue] {
        match self.0.get(&key) {
            Some(SectionValue::Values(values)) => values,
            _ => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Forecast for one Navy operating area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpareaForecast {
    #[serde(rename = "zone")]
    pub zone_id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    pub basin: Basin,
    pub synopsis: String,
    pub warning: WarningLevel,
    #[serde(rename = "time")]
    pub issue_time: String,
    /// Raw text of the area block
    #[serde(rename = "forecast")]
    pub raw_section_text: String,
    pub sections: StructuredSections,
}

impl OpareaForecast {
    /// Record emitted when an area's block cannot be located
    pub fn unavailable(
        zone_id: impl Into<String>,
        display_name: impl Into<String>,
        basin: Basin,
        synopsis: impl Into<String>,
        issue_time: impl Into<String>,
    ) -> Self {
        Self {
            zone_id: zone_id.into(),
            display_name: display_name.into(),
            basin,
            synopsis: synopsis.into(),
            warning: WarningLevel::None,
            issue_time: issue_time.into(),
            raw_section_text: DATA_UNAVAILABLE.to_string(),
            sections: StructuredSections::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.raw_section_text == DATA_UNAVAILABLE && self.sections.is_empty()
    }
}

/// One row of a merged OPAREA timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineRow {
    pub time: String,
    pub sky: String,
    pub wind_dir: String,
    pub wind: String,
    pub gust: String,
    pub wave_dir: String,
    pub waves: String,
}

/// Parsed records of one product, serialized as a plain JSON array
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProductForecast {
    Zones(Vec<ZoneForecast>),
    Areas(Vec<OpareaForecast>),
}

impl ProductForecast {
    pub fn len(&self) -> usize {
        match self {
            ProductForecast::Zones(zones) => zones.len(),
            ProductForecast::Areas(areas) => areas.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Batch processing statistics
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub products_processed: usize,
    pub products_missing: usize,
    pub zones_parsed: usize,
    pub placeholder_zones: usize,
    pub areas_parsed: usize,
    pub placeholder_areas: usize,
    pub output_paths: Vec<PathBuf>,
    pub processing_time_ms: u128,
}
