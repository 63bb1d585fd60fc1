//! Debug trace returned alongside parse results
//!
//! When debug mode is enabled each stage appends events describing what it
//! found: segment boundaries per zone, period counts, and zones or areas that
//! could not be located. The trace is an ordinary value owned by the caller.

use serde::Serialize;
use tracing::{debug, warn};

/// Stage of the parsing pipeline that produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceStage {
    Header,
    ZoneSegment,
    PeriodSegment,
    AreaSegment,
    Sections,
    Assemble,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceLevel {
    Info,
    Warning,
}

/// One observation made while parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceEvent {
    pub stage: TraceStage,
    pub level: TraceLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Ordered trace of one parse call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParseTrace {
    #[serde(skip)]
    enabled: bool,
    events: Vec<TraceEvent>,
}

impl ParseTrace {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            events: Vec::new(),
        }
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn info(&mut self, stage: TraceStage, zone: Option<&str>, message: impl Into<String>) {
        let message = message.into();
        debug!(?stage, zone, "{}", message);
        self.push(stage, TraceLevel::Info, zone, message, None);
    }

    pub fn warning(&mut self, stage: TraceStage, zone: Option<&str>, message: impl Into<String>) {
        let message = message.into();
        warn!(?stage, zone, "{}", message);
        self.push(stage, TraceLevel::Warning, zone, message, None);
    }

    /// Info event carrying a snippet of the text it refers to
    pub fn info_with_detail(
        &mut self,
        stage: TraceStage,
        zone: Option<&str>,
        message: impl Into<String>,
        detail: &str,
    ) {
        let message = message.into();
        debug!(?stage, zone, "{}", message);
        self.push(stage, TraceLevel::Info, zone, message, Some(preview(detail)));
    }

    fn push(
        &mut self,
        stage: TraceStage,
        level: TraceLevel,
        zone: Option<&str>,
        message: String,
        detail: Option<String>,
    ) {
        if !self.enabled {
            return;
        }
        self.events.push(TraceEvent {
            stage,
            level,
            message,
            zone: zone.map(str::to_string),
            detail,
        });
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn warnings(&self) -> impl Iterator<Item = &TraceEvent> {
        self.events
            .iter()
            .filter(|event| event.level == TraceLevel::Warning)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Append another trace's events, e.g. when merging per-product traces
    pub fn extend(&mut self, other: ParseTrace) {
        if self.enabled {
            self.events.extend(other.events);
        }
    }
}

const PREVIEW_CHARS: usize = 150;

fn preview(text: &str) -> String {
    let mut snippet: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().count() > PREVIEW_CHARS {
        snippet.push_str("...");
    }
    snippet
}
