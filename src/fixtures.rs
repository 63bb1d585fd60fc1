//! Deterministic sample data and synthetic bulletins.
//!
//! Used for demo output when no live bulletins are available, and by tests
//! and benchmarks that need realistic input. Nothing in the parsing path
//! depends on this module. The same seed always produces the same output.

use crate::config::ProductCatalog;
use crate::constants::{COMPASS_POINTS, NAVTEX_ZONES, VOBRA_ZONES};
use crate::models::{ForecastPeriod, WarningLevel, ZoneForecast};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Issue time stamped on generated records
pub const SAMPLE_ISSUE_TIME: &str = "12:00 PM UTC Mon Jan 15 2024";

const OFFSHORE_DAYS: &[&str] = &[
    "Today",
    "Tonight",
    "Tomorrow",
    "Tomorrow Night",
    "Day 3",
    "Day 4",
    "Day 5",
];

/// Weighted draw: most zones carry no warning
const OFFSHORE_WARNINGS: &[WarningLevel] = &[
    WarningLevel::None,
    WarningLevel::None,
    WarningLevel::None,
    WarningLevel::GaleWarning,
    WarningLevel::None,
    WarningLevel::StormWarning,
    WarningLevel::None,
    WarningLevel::None,
];

/// Assigned by zone index
const NAVTEX_WARNINGS: &[WarningLevel] = &[
    WarningLevel::None,
    WarningLevel::None,
    WarningLevel::GaleWarning,
    WarningLevel::None,
    WarningLevel::StormWarning,
    WarningLevel::None,
    WarningLevel::None,
    WarningLevel::GaleForcePossible,
    WarningLevel::None,
    WarningLevel::None,
    WarningLevel::None,
    WarningLevel::None,
    WarningLevel::None,
    WarningLevel::None,
];

const VOBRA_WARNINGS: &[WarningLevel] = &[
    WarningLevel::None,
    WarningLevel::GaleWarning,
    WarningLevel::None,
    WarningLevel::None,
];

const SHORT_DAYS: &[&str] = &["Today", "Tonight", "Tomorrow", "Tomorrow Night", "Day 3"];

/// Period headers of synthetic bulletins, in order
const BULLETIN_PERIODS: &[&str] = &[
    "TODAY",
    "TONIGHT",
    "TUE",
    "TUE NIGHT",
    "WED",
    "WED NIGHT",
    "THU",
    "THU NIGHT",
    "FRI",
    "FRI NIGHT",
    "SAT",
    "SUN",
];

const BULLETIN_WEATHER: &[&str] = &[
    "",
    "",
    " SCATTERED SHOWERS.",
    " PATCHY FOG.",
    " CHANCE OF RAIN.",
    " ISOLATED TSTMS.",
];

/// Value ranges of one generated period
#[derive(Debug, Clone, Copy)]
struct Ranges {
    wind_base: (u32, u32),
    wind_spread: (u32, u32),
    seas_base: (u32, u32),
    seas_spread: (u32, u32),
}

const OFFSHORE_RANGES: Ranges = Ranges {
    wind_base: (10, 35),
    wind_spread: (5, 15),
    seas_base: (4, 10),
    seas_spread: (2, 8),
};

const NAVTEX_RANGES: Ranges = Ranges {
    wind_base: (10, 30),
    wind_spread: (5, 15),
    seas_base: (3, 8),
    seas_spread: (2, 6),
};

const VOBRA_RANGES: Ranges = Ranges {
    wind_base: (12, 28),
    wind_spread: (5, 12),
    seas_base: (3, 7),
    seas_spread: (2, 5),
};

/// Seeded generator of sample records and bulletins
#[derive(Debug, Clone)]
pub struct SampleGenerator {
    rng: StdRng,
    issue_time: String,
}

impl SampleGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            issue_time: SAMPLE_ISSUE_TIME.to_string(),
        }
    }

    pub fn with_issue_time(mut self, issue_time: impl Into<String>) -> Self {
        self.issue_time = issue_time.into();
        self
    }

    /// Seven-day records for every offshore zone in the catalog
    pub fn offshore_sample(&mut self, catalog: &ProductCatalog) -> Vec<ZoneForecast> {
        let zones: Vec<(String, String)> = catalog
            .products
            .iter()
            .flat_map(|product| product.zones.iter())
            .map(|zone| (zone.id.clone(), zone.display_name()))
            .collect();

        zones
            .into_iter()
            .map(|(id, name)| {
                let warning = self.pick(OFFSHORE_WARNINGS);
                let periods = OFFSHORE_DAYS
                    .iter()
                    .map(|day| {
                        let weather = if self.rng.gen_bool(0.3) {
                            "Scattered showers"
                        } else {
                            "N/A"
                        };
                        self.period(day, OFFSHORE_RANGES, weather)
                    })
                    .collect();
                ZoneForecast::new(id, name, self.issue_time.clone(), warning, periods)
            })
            .collect()
    }

    /// Five-day records for the NAVTEX zones
    pub fn navtex(&mut self) -> Vec<ZoneForecast> {
        self.rotating(NAVTEX_ZONES, NAVTEX_WARNINGS, SHORT_DAYS, NAVTEX_RANGES)
    }

    /// Three-day records for the VOBRA zones
    pub fn vobra(&mut self) -> Vec<ZoneForecast> {
        self.rotating(VOBRA_ZONES, VOBRA_WARNINGS, &SHORT_DAYS[..3], VOBRA_RANGES)
    }

    /// Well-formed offshore bulletin text covering `zone_ids`
    ///
    /// Each zone gets `periods` period headers (capped at the available
    /// labels) and, now and then, a warning headline.
    pub fn synthetic_bulletin(&mut self, zone_ids: &[&str], periods: usize) -> String {
        let mut text = String::from(
            "OFFSHORE FORECAST\nNWS OCEAN PREDICTION CENTER WASHINGTON DC\n1015 AM EST MON JAN 15 2024\n\n",
        );

        for zone_id in zone_ids {
            text.push_str(&format!("{}-152215-\n1015 AM EST MON JAN 15 2024\n\n", zone_id));

            let warning = self.pick(OFFSHORE_WARNINGS);
            if !warning.is_none() {
                text.push_str(&format!("...{}...\n\n", warning.label()));
            }

            for label in BULLETIN_PERIODS.iter().take(periods) {
                let (wind_low, wind_high) = self.range(OFFSHORE_RANGES.wind_base, (0, 10));
                let (seas_low, seas_high) = self.range(OFFSHORE_RANGES.seas_base, (1, 4));
                let direction = self.pick(COMPASS_POINTS);
                let weather = self.pick(BULLETIN_WEATHER);
                text.push_str(&format!(
                    ".{}...{} WINDS {} TO {} KT. SEAS {} TO {} FT.{}\n",
                    label, direction, wind_low, wind_high, seas_low, seas_high, weather
                ));
            }
            text.push_str("\n$$\n\n");
        }

        text
    }

    fn rotating(
        &mut self,
        zones: &[(&str, &str)],
        warnings: &[WarningLevel],
        days: &[&str],
        ranges: Ranges,
    ) -> Vec<ZoneForecast> {
        zones
            .iter()
            .enumerate()
            .map(|(index, (id, name))| {
                let warning = warnings[index % warnings.len()];
                let periods = days
                    .iter()
                    .map(|day| self.period(day, ranges, "N/A"))
                    .collect();
                ZoneForecast::new(*id, *name, self.issue_time.clone(), warning, periods)
            })
            .collect()
    }

    fn period(&mut self, day: &str, ranges: Ranges, weather: &str) -> ForecastPeriod {
        let (wind_low, wind_high) = self.range(ranges.wind_base, ranges.wind_spread);
        let (seas_low, seas_high) = self.range(ranges.seas_base, ranges.seas_spread);
        let from = self.pick(COMPASS_POINTS);
        let to = self.pick(COMPASS_POINTS);

        ForecastPeriod {
            day: day.to_string(),
            winds: format!("{} to {} {} to {} kt", from, to, wind_low, wind_high),
            seas: format!("Seas {} to {} ft", seas_low, seas_high),
            weather: weather.to_string(),
        }
    }

    /// `(low, low + spread)` with both bounds drawn inclusively
    fn range(&mut self, base: (u32, u32), spread: (u32, u32)) -> (u32, u32) {
        let low = self.rng.gen_range(base.0..=base.1);
        (low, low + self.rng.gen_range(spread.0..=spread.1))
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.gen_range(0..items.len())]
    }
}
