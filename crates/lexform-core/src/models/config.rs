//! Configuration structures for extraction and schema generation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::catalog::Catalog;

/// Main configuration for lexform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexformConfig {
    /// OCR text extraction configuration.
    pub extraction: ExtractionConfig,

    /// Schema generation configuration.
    pub schema: SchemaConfig,

    /// Template catalog configuration.
    pub catalog: CatalogConfig,
}

/// OCR text extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// A legal text title is the first line longer than this (in characters).
    pub min_title_length: usize,

    /// A procedure name is the first line longer than this (in characters).
    pub min_procedure_name_length: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_title_length: 10,
            min_procedure_name_length: 5,
        }
    }
}

/// Schema generation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Lines longer than this become textarea fields in text-to-schema.
    pub textarea_line_length: usize,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            textarea_line_length: 50,
        }
    }
}

/// Template catalog location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog file. The built-in catalog is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl LexformConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load the configured catalog, or a copy of the built-in one.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog.path {
            Some(path) => Catalog::from_file(path),
            None => Ok(Catalog::builtin().clone()),
        }
    }
}
