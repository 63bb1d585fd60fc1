//! Bulletin parser orchestration
//!
//! Selects the segmentation strategy of a product, drives segment location
//! and field extraction, and assembles the final record list. Nothing here
//! fails on bulletin content: a zone or area that cannot be located becomes a
//! placeholder record, and an empty bulletin yields no records at all.

use std::sync::Arc;
use tracing::{debug, info};

use super::fields::period_from_body;
use super::oparea::locate_area;
use super::periods::segment_periods;
use super::sections::parse_sections;
use super::trace::{ParseTrace, TraceStage};
use super::warning::classify_warning;
use super::zones::ZoneSegmenter;
use crate::config::{ParseOptions, ProductCatalog, ProductConfig, ProductKind};
use crate::constants::TIME_UNAVAILABLE;
use crate::header::{extract_issue_time, synopsis_or_default, wall_clock_issue_time};
use crate::models::{OpareaForecast, ProductForecast, WarningLevel, ZoneForecast};
use crate::Result;

/// Records of one parse call together with its debug trace
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub records: ProductForecast,
    /// Empty unless debug mode was requested
    pub trace: ParseTrace,
}

/// Parser for offshore and OPAREA bulletins
///
/// The parser holds only the product catalog; every call is independent, so
/// one instance can be shared between concurrent tasks.
#[derive(Debug, Clone)]
pub struct BulletinParser {
    catalog: Arc<ProductCatalog>,
}

impl BulletinParser {
    /// Create a parser over a product catalog
    pub fn new(catalog: Arc<ProductCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Parse the bulletin of a catalog product
    ///
    /// Only an unknown product id is an error.
    pub fn parse_product(
        &self,
        product_id: &str,
        text: &str,
        options: &ParseOptions,
    ) -> Result<ParseOutcome> {
        let product = self.catalog.product(product_id)?;
        Ok(self.parse(product, text, options))
    }

    /// Parse a bulletin with the strategy of its product
    pub fn parse(&self, product: &ProductConfig, text: &str, options: &ParseOptions) -> ParseOutcome {
        match product.kind {
            ProductKind::Offshore => self.parse_offshore(product, text, options),
            ProductKind::Oparea => self.parse_oparea(product, text, options),
        }
    }

    /// Zone-delimited bulletin into one record per configured zone
    pub fn parse_offshore(
        &self,
        product: &ProductConfig,
        text: &str,
        options: &ParseOptions,
    ) -> ParseOutcome {
        let mut trace = ParseTrace::new(options.debug);

        if text.trim().is_empty() {
            trace.warning(TraceStage::Header, None, format!("{} bulletin is empty", product.id));
            return ParseOutcome {
                records: ProductForecast::Zones(Vec::new()),
                trace,
            };
        }

        let issue_time = match extract_issue_time(text) {
            Some(time) => {
                trace.info(TraceStage::Header, None, format!("issue time {}", time));
                time
            }
            None => {
                let fallback = options
                    .fallback_time
                    .clone()
                    .unwrap_or_else(wall_clock_issue_time);
                trace.warning(
                    TraceStage::Header,
                    None,
                    format!("no issue time found, using {}", fallback),
                );
                fallback
            }
        };

        let segmenter = ZoneSegmenter::new(&product.zone_ids(), &self.catalog.zone_prefixes);
        let mut zones = Vec::with_capacity(product.zones.len());

        for zone in &product.zones {
            let Some(segment) = segmenter.find(text, &zone.id) else {
                trace.warning(TraceStage::ZoneSegment, Some(zone.id.as_str()), "no section found");
                zones.push(ZoneForecast::new(
                    &zone.id,
                    zone.display_name(),
                    &issue_time,
                    WarningLevel::None,
                    Vec::new(),
                ));
                continue;
            };

            trace.info_with_detail(
                TraceStage::ZoneSegment,
                Some(zone.id.as_str()),
                format!("section at {}..{}", segment.start, segment.end),
                segment.text,
            );

            let periods: Vec<_> = segment_periods(segment.text)
                .iter()
                .map(|period| period_from_body(period.day(), &period.body))
                .collect();
            trace.info(
                TraceStage::PeriodSegment,
                Some(zone.id.as_str()),
                format!("{} periods", periods.len()),
            );

            zones.push(ZoneForecast::new(
                &zone.id,
                zone.display_name(),
                &issue_time,
                classify_warning(segment.text),
                periods,
            ));
        }

        let placeholders = zones.iter().filter(|z| z.is_placeholder()).count();
        trace.info(
            TraceStage::Assemble,
            None,
            format!("{} zones, {} placeholders", zones.len(), placeholders),
        );
        info!(
            "Parsed {} zones from {} ({} placeholders)",
            zones.len(),
            product.id,
            placeholders
        );

        ParseOutcome {
            records: ProductForecast::Zones(zones),
            trace,
        }
    }

    /// Navy bulletin into one record per configured operating area
    pub fn parse_oparea(
        &self,
        product: &ProductConfig,
        text: &str,
        options: &ParseOptions,
    ) -> ParseOutcome {
        let mut trace = ParseTrace::new(options.debug);

        if text.trim().is_empty() {
            trace.warning(TraceStage::Header, None, format!("{} bulletin is empty", product.id));
            return ParseOutcome {
                records: ProductForecast::Areas(Vec::new()),
                trace,
            };
        }

        let issue_time = extract_issue_time(text).unwrap_or_else(|| TIME_UNAVAILABLE.to_string());
        let synopsis = synopsis_or_default(text);
        trace.info(TraceStage::Header, None, format!("issue time {}", issue_time));

        let mut areas = Vec::with_capacity(product.areas.len());

        for area in &product.areas {
            let Some(block) = locate_area(text, &area.start_marker, &area.end_marker) else {
                trace.warning(
                    TraceStage::AreaSegment,
                    Some(area.id.as_str()),
                    format!("no block found for {}", area.start_marker),
                );
                areas.push(OpareaForecast::unavailable(
                    &area.id,
                    &area.name,
                    area.basin,
                    &synopsis,
                    &issue_time,
                ));
                continue;
            };

            trace.info_with_detail(
                TraceStage::AreaSegment,
                Some(area.id.as_str()),
                format!("block of {} bytes", block.len()),
                block,
            );

            let sections = parse_sections(block);
            trace.info(
                TraceStage::Sections,
                Some(area.id.as_str()),
                format!("{} sections", sections.len()),
            );
            debug!("Area {} has {} sections", area.id, sections.len());

            areas.push(OpareaForecast {
                zone_id: area.id.clone(),
                display_name: area.name.clone(),
                basin: area.basin,
                synopsis: synopsis.clone(),
                warning: classify_warning(block),
                issue_time: issue_time.clone(),
                raw_section_text: block.to_string(),
                sections,
            });
        }

        info!("Parsed {} areas from {}", areas.len(), product.id);

        ParseOutcome {
            records: ProductForecast::Areas(areas),
            trace,
        }
    }
}
