//! Warning severity classification
//!
//! Scans text for the trigger phrase of each severity level in priority order
//! and returns the first level found. The order is a fixed total order: a
//! text containing both `GALE WARNING` and `STORM WARNING` is a storm warning
//! regardless of which phrase comes first.

use crate::models::WarningLevel;

/// Classify any text span into a single warning level
pub fn classify_warning(text: &str) -> WarningLevel {
    let upper = text.to_uppercase();

    WarningLevel::BY_PRIORITY
        .into_iter()
        .find(|level| {
            level
                .trigger_phrase()
                .is_some_and(|phrase| upper.contains(phrase))
        })
        .unwrap_or(WarningLevel::None)
}
