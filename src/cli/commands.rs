//! Command implementations for the bulletin processor CLI
//!
//! This module contains the command execution logic, logging setup and the
//! human-readable reports.

use crate::cli::args::{
    Args, Commands, ParseArgs, ProcessArgs, ProductsArgs, SampleArgs, SampleKind, SummaryArgs,
};
use crate::config::{ParseOptions, ProcessorConfig, ProductCatalog, ProductKind};
use crate::fixtures::SampleGenerator;
use crate::models::{
    OpareaForecast, ProcessingStats, ProductForecast, SectionKey, WarningLevel, ZoneForecast,
};
use crate::parser::{BulletinParser, ParseOutcome, peak_seas_ft, peak_wind_kt};
use crate::processor::{BulletinProcessor, DirectorySource, render_json};

use anyhow::{Context, Result};
use colored::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info};

/// Main entry point for CLI execution
pub async fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    let Some(command) = args.command else {
        return Ok(());
    };

    match command {
        Commands::Parse(parse) => run_parse(&parse).await,
        Commands::Process(process) => run_process(&process, !args.quiet).await.map(|_| ()),
        Commands::Summary(summary) => run_summary(&summary).await,
        Commands::Sample(sample) => run_sample(&sample).await,
        Commands::Products(products) => run_products(&products),
    }
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bulletin_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Built-in catalog, or the one loaded from `path`
pub fn load_catalog(path: Option<&Path>) -> Result<Arc<ProductCatalog>> {
    let catalog = match path {
        Some(path) => ProductCatalog::load(path)
            .with_context(|| format!("Failed to load product catalog {}", path.display()))?,
        None => ProductCatalog::default(),
    };
    Ok(Arc::new(catalog))
}

async fn read_bulletin(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read bulletin {}", path.display()))
}

/// Write to a file when given, stdout otherwise
async fn emit(content: &str, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).await?;
            }
            fs::write(path, content)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

/// Parse one bulletin of a catalog product
pub async fn parse_file(
    catalog: Arc<ProductCatalog>,
    file: &Path,
    product: &str,
    options: &ParseOptions,
) -> Result<ParseOutcome> {
    let text = read_bulletin(file).await?;
    let parser = BulletinParser::new(catalog);
    parser
        .parse_product(product, &text, options)
        .with_context(|| format!("Cannot parse {} as {}", file.display(), product))
}

/// Parse one bulletin and print or write its JSON records
pub async fn run_parse(args: &ParseArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;

    let mut options = ParseOptions::default();
    if args.debug {
        options = options.with_debug();
    }
    if let Some(time) = &args.fallback_time {
        options = options.with_fallback_time(time.clone());
    }

    let outcome = parse_file(catalog, &args.file, &args.product, &options).await?;
    info!(
        "Parsed {} records from {}",
        outcome.records.len(),
        args.file.display()
    );

    let trace = args.debug.then_some(&outcome.trace);
    let json = render_json(&outcome.records, trace)?;
    emit(&json, args.output.as_ref()).await
}

/// Batch run over an input directory
pub async fn run_process(args: &ProcessArgs, show_progress: bool) -> Result<ProcessingStats> {
    args.validate()?;

    let catalog = load_catalog(args.catalog.as_deref())?;
    let source = DirectorySource::new(&args.input)
        .with_context(|| format!("Cannot read bulletins from {}", args.input.display()))?;
    info!(
        "Found {} bulletin files under {}",
        source.len(),
        args.input.display()
    );

    let mut config = ProcessorConfig::default();
    if let Some(concurrency) = args.concurrency {
        config = config.with_max_concurrent(concurrency);
    }
    if let Some(list) = &args.products {
        config = config.with_products(list.products.clone());
    }
    if args.debug {
        config = config.with_debug();
    }
    if show_progress {
        config = config.with_progress();
    }

    let processor = BulletinProcessor::new(source, catalog, args.output.clone()).with_config(config);
    processor
        .process()
        .await
        .context("Bulletin processing failed")
}

/// One line of the summary table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub zone: String,
    pub warning: WarningLevel,
    pub periods: usize,
    pub peak_wind_kt: u32,
    pub peak_seas_ft: u32,
    pub placeholder: bool,
}

impl SummaryRow {
    pub fn from_zone(zone: &ZoneForecast) -> Self {
        let winds: Vec<&str> = zone.periods.iter().map(|p| p.winds.as_str()).collect();
        let seas: Vec<&str> = zone.periods.iter().map(|p| p.seas.as_str()).collect();

        Self {
            zone: zone.zone_id.clone(),
            warning: zone.warning,
            periods: zone.periods.len(),
            peak_wind_kt: peak_wind_kt(&winds.join(" ")),
            peak_seas_ft: peak_seas_ft(&seas.join(" ")),
            placeholder: zone.is_placeholder(),
        }
    }

    /// Peaks come from the structured samples when present, the raw text otherwise
    pub fn from_area(area: &OpareaForecast) -> Self {
        let sample_peak = |key: SectionKey| {
            area.sections
                .samples(key)
                .iter()
                .map(|s| s.high.max(s.gust.unwrap_or(0)))
                .max()
        };

        Self {
            zone: area.zone_id.clone(),
            warning: area.warning,
            periods: area.sections.len(),
            peak_wind_kt: sample_peak(SectionKey::Wind)
                .unwrap_or_else(|| peak_wind_kt(&area.raw_section_text)),
            peak_seas_ft: sample_peak(SectionKey::Seas)
                .unwrap_or_else(|| peak_seas_ft(&area.raw_section_text)),
            placeholder: area.is_placeholder(),
        }
    }
}

/// Summary rows of parsed records
pub fn summary_rows(records: &ProductForecast) -> Vec<SummaryRow> {
    match records {
        ProductForecast::Zones(zones) => zones.iter().map(SummaryRow::from_zone).collect(),
        ProductForecast::Areas(areas) => areas.iter().map(SummaryRow::from_area).collect(),
    }
}

fn colored_warning(warning: WarningLevel) -> ColoredString {
    let label = format!("{:<34}", warning.label());
    match warning {
        WarningLevel::HurricaneForceWindWarning | WarningLevel::HurricaneWarning => {
            label.bright_red().bold()
        }
        WarningLevel::StormWarning | WarningLevel::TropicalStormWarning => label.red(),
        WarningLevel::GaleWarning => label.bright_yellow(),
        WarningLevel::GaleForcePossible => label.magenta(),
        WarningLevel::StormForcePossible | WarningLevel::TropicalStormConditionsPossible => {
            label.purple()
        }
        WarningLevel::None => label.dimmed(),
    }
}

/// Print the warning and peak table of one bulletin
pub async fn run_summary(args: &SummaryArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let outcome = parse_file(catalog, &args.file, &args.product, &ParseOptions::default()).await?;
    let rows = summary_rows(&outcome.records);

    let section_label = match outcome.records {
        ProductForecast::Zones(_) => "Periods",
        ProductForecast::Areas(_) => "Sections",
    };

    println!(
        "{}",
        format!("{} summary", args.product.to_ascii_uppercase())
            .bright_green()
            .bold()
    );
    if rows.is_empty() {
        println!("  {}", "Bulletin is empty".bright_red());
        return Ok(());
    }

    println!(
        "  {}",
        format!(
            "{:<16} {:<34} {:>8} {:>10} {:>10}",
            "Zone", "Warning", section_label, "Wind (kt)", "Seas (ft)"
        )
        .bright_cyan()
    );
    for row in &rows {
        let zone = if row.placeholder {
            format!("{:<16}", row.zone).dimmed()
        } else {
            format!("{:<16}", row.zone).bright_white()
        };
        println!(
            "  {} {} {:>8} {:>10} {:>10}",
            zone,
            colored_warning(row.warning),
            row.periods,
            row.peak_wind_kt,
            row.peak_seas_ft
        );
    }

    let placeholders = rows.iter().filter(|row| row.placeholder).count();
    if placeholders > 0 {
        println!(
            "  {} {}",
            "Not found in bulletin:".bright_red(),
            placeholders.to_string().bright_red().bold()
        );
    }
    Ok(())
}

/// Generate deterministic demo records
pub async fn run_sample(args: &SampleArgs) -> Result<()> {
    let mut generator = SampleGenerator::new(args.seed);
    let records = match args.kind {
        SampleKind::Offshore => {
            let catalog = load_catalog(args.catalog.as_deref())?;
            generator.offshore_sample(&catalog)
        }
        SampleKind::Navtex => generator.navtex(),
        SampleKind::Vobra => generator.vobra(),
    };
    debug!("Generated {} {:?} sample records", records.len(), args.kind);

    let json = render_json(&records, None)?;
    emit(&json, args.output.as_ref()).await
}

/// List the catalog products
pub fn run_products(args: &ProductsArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;

    println!("{}", "Products".bright_green().bold());
    for product in &catalog.products {
        let (kind, members): (&str, Vec<&str>) = match product.kind {
            ProductKind::Offshore => ("offshore", product.zone_ids()),
            ProductKind::Oparea => (
                "oparea",
                product.areas.iter().map(|area| area.id.as_str()).collect(),
            ),
        };
        println!(
            "  {:<10} {:<9} {}",
            product.id.bright_white().bold(),
            kind.bright_cyan(),
            members.join(", ")
        );
    }
    Ok(())
}
