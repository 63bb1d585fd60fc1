//! Bulletin parsing engine
//!
//! Turns raw marine bulletin text into structured forecast records. Parsing
//! is pure and synchronous: one text in, one record list (and an optional
//! debug trace) out.
//!
//! ## Architecture
//!
//! - [`parser`] - Orchestration per product format
//! - [`zones`] - Zone section location in offshore bulletins
//! - [`periods`] - `.DAY...` period segmentation
//! - [`fields`] - Wind, seas and weather display strings
//! - [`ranges`] - Numeric range capture and peak helpers
//! - [`warning`] - Warning severity classification
//! - [`oparea`] - OPAREA area block location
//! - [`sections`] - Lettered/numbered OPAREA sections and timelines
//! - [`trace`] - Debug trace returned with each parse
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use bulletin_processor::config::{ParseOptions, ProductCatalog};
//! use bulletin_processor::parser::BulletinParser;
//!
//! # fn example(text: &str) -> bulletin_processor::Result<()> {
//! let parser = BulletinParser::new(Arc::new(ProductCatalog::default()));
//! let outcome = parser.parse_product("NT1", text, &ParseOptions::default())?;
//!
//! println!("Parsed {} zones", outcome.records.len());
//! # Ok(())
//! # }
//! ```

pub mod fields;
pub mod oparea;
#[allow(clippy::module_inception)]
pub mod parser;
pub mod periods;
pub mod ranges;
pub mod sections;
pub mod trace;
pub mod warning;
pub mod zones;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use oparea::AreaFormat;
pub use parser::{BulletinParser, ParseOutcome};
pub use ranges::{NumericRange, peak_seas_ft, peak_wind_kt};
pub use sections::{outlook_timeline, timeline};
pub use trace::{ParseTrace, TraceEvent, TraceLevel, TraceStage};
pub use warning::classify_warning;
