//! Tests for the batch processor
//!
//! Exercises sources, concurrent fetching and JSON output using in-memory
//! bulletins and temporary directories.

pub mod batch_processing;

use crate::error::{BulletinError, Result};
use crate::processor::BulletinSource;
use async_trait::async_trait;

/// Short Pacific bulletin for the FWCSD product
pub const FWCSD_BULLETIN: &str = "\
FLEET WEATHER CENTER SAN DIEGO CA
0800 AM PST TUE JAN 16 2024

1. METEOROLOGICAL SITUATION: A 1030MB HIGH WEST OF SAN FRANCISCO.
4. AREA A: SKY/WX...PARTLY CLOUDY. WINDS...NORTHWEST 10 TO 15 KT.
   COMBINED SEAS...WEST 4 TO 6 FT.
5. AREA B: WINDS...NORTHWEST 20 TO 25 KT. SEAS 6 TO 9 FT.
8. FORECASTER: SMITH
";

/// One populated zone of the PZ5 product
pub const PZ5_BULLETIN: &str = "\
1000 AM PST MON JAN 15 2024

PZZ800-152300-
.TODAY...NW WINDS 15 TO 20 KT. SEAS 6 TO 8 FT.
.TONIGHT...NW WINDS 10 TO 15 KT. SEAS 5 TO 7 FT.
$$
";

/// Source whose every fetch fails
#[derive(Debug, Default)]
pub struct FailingSource;

#[async_trait]
impl BulletinSource for FailingSource {
    async fn fetch(&self, product_id: &str) -> Result<Option<String>> {
        Err(BulletinError::processing_interrupted(format!(
            "connection reset while fetching {}",
            product_id
        )))
    }
}
