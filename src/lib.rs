//! Marine Bulletin Processor Library
//!
//! A Rust library for converting fixed-format marine forecast bulletins into
//! structured per-zone forecast records for map viewers.
//!
//! This library provides tools for:
//! - Locating zone sections in NWS/OPC offshore forecasts and splitting them
//!   into day-by-day periods
//! - Extracting winds, seas and weather phrases with documented defaults
//! - Classifying the active warning of a zone by a fixed severity order
//! - Parsing U.S. Navy OPAREA forecasts in their Atlantic lettered-section and
//!   Pacific numbered-area formats
//! - Batch processing many products concurrently into JSON output files
//! - Generating deterministic sample data and synthetic bulletins

pub mod config;
pub mod constants;
pub mod error;
pub mod fixtures;
pub mod header;
pub mod models;
pub mod parser;
pub mod processor;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::{ParseOptions, ProcessorConfig, ProductCatalog};
pub use error::{BulletinError, Result};
pub use models::{ForecastPeriod, OpareaForecast, ProductForecast, WarningLevel, ZoneForecast};
pub use parser::{BulletinParser, ParseOutcome};
