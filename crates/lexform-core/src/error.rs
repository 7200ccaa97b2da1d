//! Error types for the lexform-core library.
//!
//! Extraction and schema generation are total and never fail; errors only
//! come from loading configuration and catalog files.

use thiserror::Error;

use crate::models::catalog::TemplateFamily;

/// Main error type for the lexform library.
#[derive(Error, Debug)]
pub enum LexformError {
    /// Catalog validation error.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while validating a document template catalog.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog carries no version tag.
    #[error("catalog version is empty")]
    EmptyVersion,

    /// A template has an empty identifier.
    #[error("template with empty value in {0}")]
    EmptyValue(TemplateFamily),

    /// Two templates of the same family share an identifier.
    #[error("duplicate template value {value:?} in {family}")]
    DuplicateValue { family: TemplateFamily, value: String },

    /// A template declares no fields.
    #[error("template {value:?} in {family} has no fields")]
    NoFields { family: TemplateFamily, value: String },
}

/// Result type for the lexform library.
pub type Result<T> = std::result::Result<T, LexformError>;
