//! Command-line argument definitions for the bulletin processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::error::{BulletinError, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the marine bulletin processor
///
/// Parses NWS/OPC offshore forecasts and U.S. Navy OPAREA forecasts into
/// structured per-zone records for map viewers.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bulletin_processor",
    version,
    about = "Parse marine forecast bulletins into structured per-zone JSON records",
    long_about = "Converts fixed-format NWS/OPC offshore forecasts and U.S. Navy OPAREA \
                  forecasts into structured records: warning level, day-by-day winds, seas \
                  and weather per zone, and lettered sections per operating area."
)]
pub struct Args {
    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Only show warnings and errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except warnings and errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "warn";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse one bulletin file and print its records as JSON
    Parse(ParseArgs),
    /// Parse every product found in an input directory and write JSON files
    Process(ProcessArgs),
    /// Print a warning and peak wind/seas table for one bulletin
    Summary(SummaryArgs),
    /// Generate deterministic demo records
    Sample(SampleArgs),
    /// List the products of the catalog
    Products(ProductsArgs),
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Raw bulletin text file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Product id of the bulletin, e.g. NT1 or WRKFWNX02
    #[arg(short = 'p', long = "product", value_name = "ID")]
    pub product: String,

    /// Product catalog replacing the built-in one
    #[arg(short = 'c', long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Wrap the records together with the parse trace
    #[arg(long = "debug")]
    pub debug: bool,

    /// Issue time used when the bulletin carries none (defaults to the wall clock)
    #[arg(long = "fallback-time", value_name = "TEXT")]
    pub fallback_time: Option<String>,

    /// Write JSON to this file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the process command
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Directory searched recursively for `<PRODUCT>.txt` bulletin files
    #[arg(short = 'i', long = "input", value_name = "DIR")]
    pub input: PathBuf,

    /// Directory receiving offshore.json and oparea.json
    #[arg(short = 'o', long = "output", value_name = "DIR", default_value = "output")]
    pub output: PathBuf,

    /// Comma-separated product ids; all catalog products when omitted
    #[arg(long = "products", value_name = "LIST")]
    pub products: Option<ProductList>,

    /// Product catalog replacing the built-in one
    #[arg(short = 'c', long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Wrap the records together with the parse trace
    #[arg(long = "debug")]
    pub debug: bool,

    /// Maximum number of products fetched at once
    #[arg(short = 'j', long = "concurrency", value_name = "COUNT")]
    pub concurrency: Option<usize>,
}

impl ProcessArgs {
    pub fn validate(&self) -> Result<()> {
        if self.concurrency == Some(0) {
            return Err(BulletinError::configuration(
                "concurrency must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Arguments for the summary command
#[derive(Debug, Clone, Parser)]
pub struct SummaryArgs {
    /// Raw bulletin text file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Product id of the bulletin
    #[arg(short = 'p', long = "product", value_name = "ID")]
    pub product: String,

    /// Product catalog replacing the built-in one
    #[arg(short = 'c', long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,
}

/// Arguments for the sample command
#[derive(Debug, Clone, Parser)]
pub struct SampleArgs {
    /// Which demo data set to generate
    #[arg(short = 'k', long = "kind", value_enum, default_value = "offshore")]
    pub kind: SampleKind,

    /// Random seed; the same seed always yields the same records
    #[arg(short = 's', long = "seed", default_value_t = 42)]
    pub seed: u64,

    /// Product catalog providing the offshore zones
    #[arg(short = 'c', long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Write JSON to this file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the products command
#[derive(Debug, Clone, Parser)]
pub struct ProductsArgs {
    /// Product catalog replacing the built-in one
    #[arg(short = 'c', long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,
}

/// Demo data sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleKind {
    /// Every offshore zone of the catalog, seven days
    Offshore,
    /// NAVTEX zones, five days
    Navtex,
    /// VOBRA zones, three days
    Vobra,
}

/// Wrapper for parsing comma-separated product lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductList {
    pub products: Vec<String>,
}

impl FromStr for ProductList {
    type Err = BulletinError;

    fn from_str(s: &str) -> Result<Self> {
        let products: Vec<String> = s
            .split(',')
            .map(|s| s.trim().to_ascii_uppercase())
            .filter(|s| !s.is_empty())
            .collect();

        if products.is_empty() {
            return Err(BulletinError::configuration("product list is empty"));
        }

        Ok(ProductList { products })
    }
}
