//! Test utilities and sample bulletins for parser testing
//!
//! This module provides the bulletin texts and helpers shared by the
//! per-component test modules.

use std::sync::Arc;

use crate::config::{ParseOptions, ProductCatalog, ProductConfig, ZoneConfig};
use crate::parser::BulletinParser;

mod warning_tests;
mod zone_tests;

/// Issue time used instead of the wall clock
pub const FIXED_TIME: &str = "12:00 PM UTC Mon Jan 15 2024";

/// Minimal one-zone bulletin
pub const ROUND_TRIP_BULLETIN: &str = "ANZ800...\n.TODAY...N WINDS 15 TO 20 KT. SEAS 4 TO 6 FT.\n.TONIGHT...VARIABLE WINDS. SEAS 3 TO 5 FT. GALE WARNING.\n$$";

/// Three-zone offshore bulletin in the usual layout
pub const OFFSHORE_BULLETIN: &str = "\
OFFNT1

OFFSHORE FORECAST FOR THE NEW ENGLAND WATERS
NWS OCEAN PREDICTION CENTER WASHINGTON DC
1015 AM EST MON JAN 15 2024

SYNOPSIS FOR NEW ENGLAND CONTINENTAL SHELF AND SLOPE WATERS

ANZ800-152215-
EAST OF GREAT SOUTH CHANNEL AND SOUTH OF GEORGES BANK
1015 AM EST MON JAN 15 2024

...GALE WARNING...

.TODAY...NW WINDS 25 TO 35 KT. SEAS 8 TO 12 FT.
.TONIGHT...NW WINDS 20 TO 30 KT. SEAS 7 TO 10 FT. SCATTERED
SNOW SHOWERS.
.TUE...W WINDS 15 TO 20 KT. SEAS 5 TO 7 FT.
.FORECASTER NOTES...SEE THE HIGH SEAS FORECAST.

$$

ANZ805-152215-
GEORGES BANK BETWEEN CAPE COD AND 68W NORTH OF 1000 FM
1015 AM EST MON JAN 15 2024

.TODAY...N WINDS 10 TO 15 KT. SEAS 3 TO 5 FT. PATCHY FOG.
.TONIGHT...NE WINDS 10 KT. SEAS 3 FT.

$$

ANZ810-152215-
SOUTH OF GEORGES BANK BETWEEN 68W AND 65W
1015 AM EST MON JAN 15 2024

...STORM WARNING...

.TODAY...W WINDS 35 TO 45 KT. GALE FORCE GUSTS. SEAS 14 TO 20 FT.

$$
";

/// Parser over the built-in catalog
pub fn default_parser() -> BulletinParser {
    BulletinParser::new(Arc::new(ProductCatalog::default()))
}

/// Parse options that never consult the wall clock
pub fn fixed_options() -> ParseOptions {
    ParseOptions::default().with_fallback_time(FIXED_TIME)
}

/// Offshore product over the given zone ids
pub fn offshore_product(zone_ids: &[&str]) -> ProductConfig {
    ProductConfig::offshore("TEST", zone_ids.iter().map(|id| ZoneConfig::new(*id)).collect())
}
