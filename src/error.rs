//! Error handling for bulletin processing operations.
//!
//! The parsing engine itself never fails: missing zones and missing fields
//! degrade to placeholders. These errors cover the surfaces around it:
//! reading bulletins, loading the product catalog and writing output.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BulletinError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid product catalog in {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unknown product id: {product}")]
    UnknownProduct { product: String },

    #[error("Bulletin input not found at path: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Directory traversal failed under {path}: {source}")]
    DirectoryTraversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl BulletinError {
    /// Create an unknown product error
    pub fn unknown_product(product: impl Into<String>) -> Self {
        Self::UnknownProduct {
            product: product.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BulletinError>;
