//! Bulletin sources for batch processing
//!
//! A source supplies the raw text of a product by id. The processor does not
//! care whether the text comes from disk, memory or the network; it only
//! distinguishes "here is the text" from "this product is not available".

use crate::constants::BULLETIN_FILE_EXTENSION;
use crate::error::{BulletinError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use walkdir::WalkDir;

/// Supplier of raw bulletin text keyed by product id
#[async_trait]
pub trait BulletinSource: Send + Sync {
    /// Fetch the bulletin of a product; `Ok(None)` when it is not available
    async fn fetch(&self, product_id: &str) -> Result<Option<String>>;
}

/// Bulletins stored as `<PRODUCT>.txt` files anywhere under a directory
///
/// ```text
/// input/
///   offshore/
///     NT1.txt
///     pz5.txt
///   navy/
///     WRKFWNX02.txt
/// ```
///
/// File stems are matched case-insensitively. When two files share a stem
/// the first one in file-name order wins.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    files: HashMap<String, PathBuf>,
}

impl DirectorySource {
    /// Index the bulletin files under `root`
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(BulletinError::InputNotFound { path: root });
        }

        let mut files = HashMap::new();
        for entry in WalkDir::new(&root).sort_by_file_name() {
            let entry = entry.map_err(|source| BulletinError::DirectoryTraversal {
                path: root.clone(),
                source,
            })?;

            let path = entry.path();
            if !entry.file_type().is_file() || !is_bulletin_file(path) {
                continue;
            }

            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                files
                    .entry(stem.to_ascii_uppercase())
                    .or_insert_with(|| path.to_path_buf());
            }
        }

        debug!(
            "Indexed {} bulletin files under {}",
            files.len(),
            root.display()
        );

        Ok(Self { root, files })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a product's bulletin file, if one was indexed
    pub fn path_for(&self, product_id: &str) -> Option<&Path> {
        self.files
            .get(&product_id.to_ascii_uppercase())
            .map(PathBuf::as_path)
    }

    /// Number of indexed bulletin files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[async_trait]
impl BulletinSource for DirectorySource {
    async fn fetch(&self, product_id: &str) -> Result<Option<String>> {
        match self.path_for(product_id) {
            Some(path) => {
                debug!("Reading {} from {}", product_id, path.display());
                Ok(Some(fs::read_to_string(path).await?))
            }
            None => Ok(None),
        }
    }
}

/// In-memory bulletins, keyed case-insensitively by product id
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    bulletins: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bulletin(mut self, product_id: &str, text: impl Into<String>) -> Self {
        self.insert(product_id, text);
        self
    }

    pub fn insert(&mut self, product_id: &str, text: impl Into<String>) {
        self.bulletins
            .insert(product_id.to_ascii_uppercase(), text.into());
    }
}

#[async_trait]
impl BulletinSource for MemorySource {
    async fn fetch(&self, product_id: &str) -> Result<Option<String>> {
        Ok(self
            .bulletins
            .get(&product_id.to_ascii_uppercase())
            .cloned())
    }
}

/// Check if a path has the bulletin file extension
fn is_bulletin_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(BULLETIN_FILE_EXTENSION))
        .unwrap_or(false)
}
