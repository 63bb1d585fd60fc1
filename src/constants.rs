//! Application constants for the bulletin processor
//!
//! This module contains the fixed vocabulary of the bulletin formats, the
//! display defaults used when a field cannot be extracted, and the built-in
//! product catalog data.

// =============================================================================
// Bulletin Vocabulary
// =============================================================================

/// Accepted period label prefixes, matched case-insensitively against the
/// start of a `.LABEL...` header. Anything else is prose that happens to look
/// like a header.
pub const PERIOD_PREFIXES: &[&str] = &[
    "TODAY", "TONIGHT", "MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN", "REST",
];

/// Weather phenomena scanned in order; the first one present wins. Entries
/// are singular stems so `TSTM` and `TSTMS` both match.
pub const WEATHER_PHRASES: &[&str] = &[
    "freezing spray",
    "rain",
    "snow",
    "fog",
    "tstm",
    "thunderstorm",
    "shower",
    "drizzle",
];

/// Qualifiers captured in front of a weather phrase when present
pub const WEATHER_QUALIFIERS: &[&str] = &["chance of", "isolated", "scattered"];

/// Product terminator token
pub const PRODUCT_TERMINATOR: &str = "$$";

/// Region prefixes of marine zone identifiers used as generic zone boundaries
pub const DEFAULT_ZONE_PREFIXES: &[&str] = &["ANZ", "PZZ"];

// =============================================================================
// Display Defaults
// =============================================================================

/// Winds value when no wind phrase is present
pub const DEFAULT_WINDS: &str = "Variable winds";

/// Seas value when no seas phrase is present
pub const DEFAULT_SEAS: &str = "Seas variable";

/// Weather value when no phenomenon is mentioned
pub const DEFAULT_WEATHER: &str = "N/A";

/// Marker used by placeholder periods and areas
pub const DATA_UNAVAILABLE: &str = "Data unavailable";

/// Day label of the placeholder period
pub const PLACEHOLDER_DAY: &str = "Today";

/// Issue time shown for OPAREA records when the bulletin carries none
pub const TIME_UNAVAILABLE: &str = "Time unavailable";

/// Synopsis shown when the meteorological situation cannot be located
pub const SYNOPSIS_UNAVAILABLE: &str = "Synopsis unavailable";

/// Time token used by samples that carry no timestamp
pub const NO_TIMESTAMP: &str = "-";

/// Direction token used by samples and timeline rows that carry no compass direction
pub const NO_DIRECTION: &str = "-";

/// Wall-clock format used when a zone bulletin carries no issue time
pub const FALLBACK_TIME_FORMAT: &str = "%-I:%M %p UTC %a %b %-d %Y";

// =============================================================================
// Output Files
// =============================================================================

/// Batch output file for zone-style records
pub const OFFSHORE_OUTPUT_FILENAME: &str = "offshore.json";

/// Batch output file for OPAREA records
pub const OPAREA_OUTPUT_FILENAME: &str = "oparea.json";

/// Extension of raw bulletin files in an input directory
pub const BULLETIN_FILE_EXTENSION: &str = "txt";

// =============================================================================
// Built-in Product Catalog
// =============================================================================

/// Offshore products and the zones each one covers, in bulletin order
pub const OFFSHORE_PRODUCTS: &[(&str, &[&str])] = &[
    ("NT1", &["ANZ800", "ANZ805", "ANZ900", "ANZ810", "ANZ815"]),
    (
        "NT2",
        &[
            "ANZ820", "ANZ915", "ANZ920", "ANZ905", "ANZ910", "ANZ825", "ANZ828", "ANZ925",
            "ANZ830", "ANZ833", "ANZ930", "ANZ835", "ANZ935",
        ],
    ),
    (
        "PZ5",
        &[
            "PZZ800", "PZZ900", "PZZ805", "PZZ905", "PZZ810", "PZZ910", "PZZ815", "PZZ915",
        ],
    ),
    (
        "PZ6",
        &[
            "PZZ820", "PZZ920", "PZZ825", "PZZ925", "PZZ830", "PZZ930", "PZZ835", "PZZ935",
            "PZZ840", "PZZ940", "PZZ945",
        ],
    ),
];

/// Display names of offshore zones
pub const ZONE_NAMES: &[(&str, &str)] = &[
    ("ANZ800", "East of Great South Channel and south of Georges Bank"),
    ("ANZ805", "Georges Bank between Cape Cod and 68W north of 1000 FM"),
    ("ANZ810", "South of Georges Bank between 68W and 65W"),
    ("ANZ815", "Gulf of Maine to Georges Bank"),
    ("ANZ820", "South of New England between 69W and 71W"),
    ("ANZ825", "East of New Jersey to 1000 Fathoms"),
    ("ANZ828", "Delaware Bay to Virginia"),
    ("ANZ830", "Virginia to NC Offshore"),
    ("ANZ833", "Cape Hatteras Area"),
    ("ANZ835", "South of Cape Hatteras"),
    ("ANZ900", "Georges Bank - Outer Continental Shelf"),
    ("ANZ905", "East of 69W between 39N and 1000 Fathoms"),
    ("ANZ910", "East of 69W and south of 39N to 250 NM offshore"),
    ("ANZ915", "South of New England - Outer waters"),
    ("ANZ920", "East of 69W - Southern section"),
    ("ANZ925", "Virginia Coast - Offshore"),
    ("ANZ930", "Cape Hatteras - Offshore"),
    ("ANZ935", "South Atlantic - Offshore"),
    ("PZZ800", "Point St. George to Cape Mendocino out to 60 NM"),
    ("PZZ805", "Cape Mendocino to Point Arena out to 60 NM"),
    ("PZZ810", "Point Arena to Pigeon Point out to 60 NM"),
    ("PZZ815", "Pigeon Point to Point Piedras Blancas out to 60 NM"),
    ("PZZ820", "Point Piedras Blancas to Point Conception out to 60 NM"),
    ("PZZ825", "Point Conception to Santa Cruz Island out to 60 NM"),
    ("PZZ830", "Santa Cruz Island to San Clemente Island out to 60 NM"),
    ("PZZ835", "San Clemente Island to Mexican Border out to 60 NM"),
    ("PZZ840", "Point St. George to Oregon Border out to 60 NM"),
    ("PZZ900", "Point St. George to Cape Mendocino 60 to 150 NM offshore"),
    ("PZZ905", "Cape Mendocino to Point Arena 60 to 150 NM offshore"),
    ("PZZ910", "Point Arena to Pigeon Point 60 to 150 NM offshore"),
    ("PZZ915", "Pigeon Point to Point Piedras Blancas 60 to 150 NM offshore"),
    ("PZZ920", "Point Piedras Blancas to Point Conception 60 to 150 NM offshore"),
    ("PZZ925", "Point Conception to Santa Cruz Island 60 to 150 NM offshore"),
    ("PZZ930", "Santa Cruz Island to San Clemente Island 60 to 150 NM offshore"),
    ("PZZ935", "San Clemente Island to Mexican Border 60 to 150 NM offshore"),
    ("PZZ940", "Oregon Border to WA coast 60 to 150 NM offshore"),
    ("PZZ945", "WA Coast 60 to 150 NM offshore"),
];

/// OPAREA definitions: (area id, display name, product, start marker, end marker)
pub mod opareas {
    pub const ATLANTIC: &[(&str, &str, &str, &str, &str)] = &[
        ("boston", "Boston", "WRKFWNX02", "BOSTON OPAREA:", "NARRAGANSETT BAY"),
        (
            "narrabay",
            "Narragansett Bay",
            "WRKFWNX02",
            "NARRAGANSETT BAY OPAREA:",
            "FORECASTER",
        ),
        ("vacapes", "VACAPES", "WRKFWNX01", "VACAPES OPAREA:", "CHERRY POINT"),
        (
            "cherry_point",
            "Cherry Point",
            "WRKFWNX01",
            "CHERRY POINT OPAREA:",
            "CHARLESTON",
        ),
        ("charleston", "Charleston", "WRKFWNX01", "CHARLESTON OPAREA:", "JAX"),
        (
            "jacksonville",
            "Jacksonville",
            "WRKFWNX01",
            "JAX OPAREA:",
            "PORT CANAVERAL",
        ),
        (
            "port_canaveral",
            "Port Canaveral",
            "WRKFWNX01",
            "PORT CANAVERAL OPAREA:",
            "TONGUE",
        ),
        (
            "toto",
            "Tongue of the Ocean",
            "WRKFWNX01",
            "TONGUE OF THE OCEAN OPAREA:",
            "FORECASTER",
        ),
    ];

    pub const PACIFIC: &[(&str, &str, &str, &str, &str)] = &[
        ("area_a", "Area A", "FWCSD", "4. AREA A:", "5. AREA B:"),
        ("area_b", "Area B", "FWCSD", "5. AREA B:", "6. AREA C:"),
        ("area_c", "Area C", "FWCSD", "6. AREA C:", "7. AREA D:"),
        ("area_d", "Area D", "FWCSD", "7. AREA D:", "8."),
    ];
}

// =============================================================================
// Demo Data Zones
// =============================================================================

/// NAVTEX demo zones: (zone id, area name)
pub const NAVTEX_ZONES: &[(&str, &str)] = &[
    ("OFFN09_NW", "Canadian Border to 45N"),
    ("OFFN09_SW", "45N to Point Saint George"),
    ("OFFN08_NW", "Point Saint George to Point Arena"),
    ("OFFN08_SW", "Point Arena to Point Piedras Blancas"),
    ("OFFN07_NW", "Point Piedras Blancas to Point Conception"),
    ("OFFN07_SW", "Point Conception to Mexican Border"),
    ("OFFN01_NE", "Eastport Maine to Cape Cod"),
    ("OFFN01_SE", "Cape Cod to Nantucket Shoals and Georges Bank"),
    ("OFFN01_SW", "South of New England"),
    ("OFFN02_NE", "Sandy Hook to Wallops Island"),
    ("OFFN02_E", "Wallops Island to Cape Hatteras"),
    ("OFFN02_SE", "Cape Hatteras to Murrells Inlet"),
    ("OFFN03_NE", "Murrells Inlet to 31N"),
    ("OFFN03_SE", "South of 31N"),
];

/// VOBRA demo zones: (zone id, area name)
pub const VOBRA_ZONES: &[(&str, &str)] = &[
    ("VOBRA_1", "Offshore Waters - Atlantic"),
    ("VOBRA_2", "Offshore Waters - Pacific"),
    ("VOBRA_3", "Coastal Waters - East"),
    ("VOBRA_4", "Coastal Waters - West"),
];

/// Compass directions used by demo data
pub const COMPASS_POINTS: &[&str] = &["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

// =============================================================================
// Helper Functions
// =============================================================================

/// Look up the built-in display name for a zone
pub fn zone_display_name(zone_id: &str) -> Option<&'static str> {
    ZONE_NAMES
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(zone_id))
        .map(|(_, name)| *name)
}

/// Check whether a period label starts with an accepted prefix
pub fn is_accepted_period_label(label: &str) -> bool {
    let upper = label.trim().to_ascii_uppercase();
    PERIOD_PREFIXES
        .iter()
        .any(|prefix| upper.starts_with(prefix))
}
