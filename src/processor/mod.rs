//! Batch processing engine.
//!
//! Fetches the bulletins of many products concurrently from a
//! [`BulletinSource`], parses each one independently, and writes the
//! combined zone-style and OPAREA records to JSON files. A product that
//! cannot be fetched contributes zero records and never aborts the batch.

pub mod source;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use self::source::{BulletinSource, DirectorySource, MemorySource};
pub use self::writer::{JsonWriter, render_json};

use crate::config::{ProcessorConfig, ProductCatalog, ProductKind};
use crate::constants::{OFFSHORE_OUTPUT_FILENAME, OPAREA_OUTPUT_FILENAME};
use crate::error::Result;
use crate::models::{OpareaForecast, ProcessingStats, ProductForecast, ZoneForecast};
use crate::parser::{BulletinParser, ParseOutcome, ParseTrace};

use colored::*;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Parse result of one product in a batch
#[derive(Debug, Clone)]
pub struct ProductResult {
    pub product_id: String,
    pub kind: ProductKind,
    /// `None` when the source had no bulletin for the product
    pub outcome: Option<ParseOutcome>,
}

impl ProductResult {
    pub fn is_missing(&self) -> bool {
        self.outcome.is_none()
    }
}

/// Combined records of a batch, in product order
#[derive(Debug, Default)]
pub struct BatchOutput {
    pub zones: Vec<ZoneForecast>,
    pub areas: Vec<OpareaForecast>,
    pub trace: ParseTrace,
    pub has_offshore: bool,
    pub has_oparea: bool,
}

impl BatchOutput {
    /// Merge product results, keeping their order
    pub fn collect(results: Vec<ProductResult>, debug: bool) -> Self {
        let mut output = BatchOutput {
            trace: ParseTrace::new(debug),
            ..Default::default()
        };

        for result in results {
            match result.kind {
                ProductKind::Offshore => output.has_offshore = true,
                ProductKind::Oparea => output.has_oparea = true,
            }

            let Some(outcome) = result.outcome else {
                continue;
            };
            output.trace.extend(outcome.trace);
            match outcome.records {
                ProductForecast::Zones(zones) => output.zones.extend(zones),
                ProductForecast::Areas(areas) => output.areas.extend(areas),
            }
        }

        output
    }
}

/// Main processor for bulletin batches
#[derive(Debug)]
pub struct BulletinProcessor<S> {
    source: S,
    parser: Arc<BulletinParser>,
    writer: JsonWriter,
    config: ProcessorConfig,
}

impl<S: BulletinSource> BulletinProcessor<S> {
    /// Create a new processor writing into `output_dir`
    pub fn new(source: S, catalog: Arc<ProductCatalog>, output_dir: PathBuf) -> Self {
        Self {
            source,
            parser: Arc::new(BulletinParser::new(catalog)),
            writer: JsonWriter::new(output_dir),
            config: ProcessorConfig::default(),
        }
    }

    /// Configure the processor
    pub fn with_config(mut self, config: ProcessorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    pub fn output_dir(&self) -> &Path {
        self.writer.output_dir()
    }

    /// Product ids of the batch, checked against the catalog
    pub fn product_ids(&self) -> Result<Vec<String>> {
        let catalog = self.parser.catalog();
        match &self.config.products {
            Some(products) => products
                .iter()
                .map(|id| catalog.product(id).map(|product| product.id.clone()))
                .collect(),
            None => Ok(catalog.product_ids().into_iter().map(str::to_string).collect()),
        }
    }

    /// Fetch and parse every product without writing anything
    pub async fn run(&self) -> Result<Vec<ProductResult>> {
        let product_ids = self.product_ids()?;
        let progress = self.progress_bar(product_ids.len());
        let concurrent_limit = self.config.max_concurrent.min(product_ids.len()).max(1);

        debug!(
            "Processing {} products with concurrency {}",
            product_ids.len(),
            concurrent_limit
        );

        let mut results: Vec<(usize, ProductResult)> = stream::iter(product_ids.into_iter().enumerate())
            .map(|(index, product_id)| {
                let pb = progress.clone();
                async move {
                    pb.set_message(format!("Fetching: {}", product_id));
                    let result = self.process_product(&product_id).await;
                    pb.inc(1);
                    result.map(|result| (index, result))
                }
            })
            .buffer_unordered(concurrent_limit)
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect::<Result<Vec<_>>>()?;

        progress.finish_and_clear();
        results.sort_by_key(|(index, _)| *index);
        Ok(results.into_iter().map(|(_, result)| result).collect())
    }

    /// Fetch and parse one product; fetch failures count as missing
    async fn process_product(&self, product_id: &str) -> Result<ProductResult> {
        let product = self.parser.catalog().product(product_id)?;

        let text = match self.source.fetch(product_id).await {
            Ok(Some(text)) => Some(text),
            Ok(None) => {
                warn!("No bulletin available for {}", product_id);
                None
            }
            Err(e) => {
                error!("Failed to fetch {}: {:#}", product_id, e);
                None
            }
        };

        let outcome = text.map(|text| {
            let outcome = self.parser.parse(product, &text, &self.config.parse);
            debug!("Parsed {} records from {}", outcome.records.len(), product_id);
            outcome
        });

        Ok(ProductResult {
            product_id: product.id.clone(),
            kind: product.kind,
            outcome,
        })
    }

    /// Main processing entry point: fetch, parse and write output files
    pub async fn process(&self) -> Result<ProcessingStats> {
        let start_time = Instant::now();
        if self.config.show_progress {
            println!("{}", "Starting bulletin processing".bright_green().bold());
            println!(
                "  {} {}",
                "Output:".bright_cyan(),
                self.output_dir().display()
            );
        }

        let results = self.run().await?;
        let mut stats = ProcessingStats::default();
        for result in &results {
            if result.is_missing() {
                stats.products_missing += 1;
            } else {
                stats.products_processed += 1;
            }
        }

        let output = BatchOutput::collect(results, self.config.parse.debug);
        stats.zones_parsed = output.zones.len();
        stats.placeholder_zones = output.zones.iter().filter(|z| z.is_placeholder()).count();
        stats.areas_parsed = output.areas.len();
        stats.placeholder_areas = output.areas.iter().filter(|a| a.is_placeholder()).count();

        let trace = output.trace.is_enabled().then_some(&output.trace);
        if output.has_offshore {
            let path = self
                .writer
                .write(OFFSHORE_OUTPUT_FILENAME, &output.zones, trace)
                .await?;
            stats.output_paths.push(path);
        }
        if output.has_oparea {
            let path = self
                .writer
                .write(OPAREA_OUTPUT_FILENAME, &output.areas, trace)
                .await?;
            stats.output_paths.push(path);
        }

        stats.processing_time_ms = start_time.elapsed().as_millis();
        info!(
            "Processed {} products ({} missing) in {}ms",
            stats.products_processed, stats.products_missing, stats.processing_time_ms
        );

        if self.config.show_progress {
            print_summary(&stats);
        }

        Ok(stats)
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::default_bar().template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
        ) {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }
}

/// Print the colored batch summary
pub fn print_summary(stats: &ProcessingStats) {
    println!("\n{}", "Processing Summary".bright_green().bold());
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time_ms.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Products processed:".bright_cyan(),
        stats.products_processed.to_string().bright_white()
    );
    if stats.products_missing > 0 {
        println!(
            "  {} {}",
            "Products missing:".bright_red(),
            stats.products_missing.to_string().bright_red().bold()
        );
    }
    println!(
        "  {} {} ({} placeholders)",
        "Zones:".bright_cyan(),
        stats.zones_parsed.to_string().bright_white().bold(),
        stats.placeholder_zones
    );
    println!(
        "  {} {} ({} placeholders)",
        "Areas:".bright_cyan(),
        stats.areas_parsed.to_string().bright_white().bold(),
        stats.placeholder_areas
    );
    for path in &stats.output_paths {
        println!("  {} {}", "Wrote".bright_green(), path.display());
    }
}
