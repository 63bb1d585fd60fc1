//! Configuration management and validation.
//!
//! Provides the product catalog (which products exist, which format each one
//! uses, and the zones or operating areas it covers), parse options and the
//! batch processor configuration.

use crate::constants::{self, DEFAULT_ZONE_PREFIXES, OFFSHORE_PRODUCTS, opareas};
use crate::error::{BulletinError, Result};
use crate::models::Basin;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Segmentation strategy of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    /// Zone-delimited offshore forecast with `.DAY...` periods
    Offshore,
    /// Navy operating area forecast with numbered/lettered sections
    Oparea,
}

/// A zone covered by an offshore product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneConfig {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ZoneConfig {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    /// Configured name, then built-in name, then the id itself
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| constants::zone_display_name(&self.id).map(str::to_string))
            .unwrap_or_else(|| self.id.clone())
    }
}

/// An operating area covered by an OPAREA product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpareaAreaConfig {
    pub id: String,
    pub name: String,
    pub basin: Basin,
    /// Text that opens the area block, e.g. `BOSTON OPAREA:` or `4. AREA A:`
    pub start_marker: String,
    /// Text that opens whatever follows the area block
    pub end_marker: String,
}

/// One product in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductConfig {
    pub id: String,
    pub kind: ProductKind,
    #[serde(default)]
    pub zones: Vec<ZoneConfig>,
    #[serde(default)]
    pub areas: Vec<OpareaAreaConfig>,
}

impl ProductConfig {
    pub fn offshore(id: impl Into<String>, zones: Vec<ZoneConfig>) -> Self {
        Self {
            id: id.into(),
            kind: ProductKind::Offshore,
            zones,
            areas: Vec::new(),
        }
    }

    pub fn oparea(id: impl Into<String>, areas: Vec<OpareaAreaConfig>) -> Self {
        Self {
            id: id.into(),
            kind: ProductKind::Oparea,
            zones: Vec::new(),
            areas,
        }
    }

    /// Zone ids in bulletin order
    pub fn zone_ids(&self) -> Vec<&str> {
        self.zones.iter().map(|zone| zone.id.as_str()).collect()
    }
}

/// Product-to-zone mapping and display names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCatalog {
    /// Zone id prefixes treated as generic zone boundaries
    #[serde(default = "default_zone_prefixes")]
    pub zone_prefixes: Vec<String>,
    #[serde(default)]
    pub products: Vec<ProductConfig>,
}

fn default_zone_prefixes() -> Vec<String> {
    DEFAULT_ZONE_PREFIXES.iter().map(|p| p.to_string()).collect()
}

impl Default for ProductCatalog {
    fn default() -> Self {
        let mut products: Vec<ProductConfig> = OFFSHORE_PRODUCTS
            .iter()
            .map(|(id, zones)| {
                ProductConfig::offshore(*id, zones.iter().map(|z| ZoneConfig::new(*z)).collect())
            })
            .collect();

        let areas = opareas::ATLANTIC
            .iter()
            .map(|area| (area, Basin::Atlantic))
            .chain(opareas::PACIFIC.iter().map(|area| (area, Basin::Pacific)));

        for ((id, name, product, start, end), basin) in areas {
            let area = OpareaAreaConfig {
                id: id.to_string(),
                name: name.to_string(),
                basin,
                start_marker: start.to_string(),
                end_marker: end.to_string(),
            };

            match products.iter_mut().find(|p| p.id == *product) {
                Some(existing) => existing.areas.push(area),
                None => products.push(ProductConfig::oparea(*product, vec![area])),
            }
        }

        Self {
            zone_prefixes: default_zone_prefixes(),
            products,
        }
    }
}

impl ProductCatalog {
    /// Parse a catalog from TOML text
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        let catalog: ProductCatalog =
            toml::from_str(content).map_err(|source| BulletinError::CatalogParse {
                path: origin.to_path_buf(),
                source,
            })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file, replacing the built-in catalog entirely
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BulletinError::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content, path)?;
        debug!(
            "Loaded product catalog from {} with {} products",
            path.display(),
            catalog.products.len()
        );
        Ok(catalog)
    }

    /// Check that every product is usable by its format
    pub fn validate(&self) -> Result<()> {
        for product in &self.products {
            match product.kind {
                ProductKind::Offshore if product.zones.is_empty() => {
                    return Err(BulletinError::configuration(format!(
                        "offshore product {} lists no zones",
                        product.id
                    )));
                }
                ProductKind::Oparea if product.areas.is_empty() => {
                    return Err(BulletinError::configuration(format!(
                        "OPAREA product {} lists no areas",
                        product.id
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Find a product by id (case-insensitive)
    pub fn product(&self, product_id: &str) -> Result<&ProductConfig> {
        self.products
            .iter()
            .find(|p| p.id.eq_ignore_ascii_case(product_id))
            .ok_or_else(|| BulletinError::unknown_product(product_id))
    }

    pub fn product_ids(&self) -> Vec<&str> {
        self.products.iter().map(|p| p.id.as_str()).collect()
    }
}

/// Options of a single parse call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Record a trace of segment boundaries and extraction counts
    pub debug: bool,
    /// Issue time used when a zone bulletin carries none; wall clock when unset
    pub fallback_time: Option<String>,
}

impl ParseOptions {
    pub fn with_debug(mut self) -> Self {
        self.debug = true;
        self
    }

    pub fn with_fallback_time(mut self, time: impl Into<String>) -> Self {
        self.fallback_time = Some(time.into());
        self
    }
}

/// Configuration of a batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// Maximum products fetched at once
    pub max_concurrent: usize,
    /// Products to process; all catalog products when unset
    pub products: Option<Vec<String>>,
    /// Parse options applied to every product
    pub parse: ParseOptions,
    /// Draw a progress bar while processing
    pub show_progress: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            max_concurrent: num_cpus::get().max(1),
            products: None,
            parse: ParseOptions::default(),
            show_progress: false,
        }
    }
}

impl ProcessorConfig {
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    pub fn with_products(mut self, products: Vec<String>) -> Self {
        self.products = Some(products);
        self
    }

    pub fn with_debug(mut self) -> Self {
        self.parse.debug = true;
        self
    }

    pub fn with_fallback_time(mut self, time: impl Into<String>) -> Self {
        self.parse.fallback_time = Some(time.into());
        self
    }

    pub fn with_progress(mut self) -> Self {
        self.show_progress = true;
        self
    }
}
