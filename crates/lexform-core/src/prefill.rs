//! Prefilling form values from extraction results.
//!
//! Extracted values are laid over the current form values: keys the
//! extraction populated are overwritten, every other value is kept.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::legal_text::LegalTextData;
use crate::models::procedure::ProcedureData;

/// Key receiving the raw OCR text when no structure was extracted.
pub const RAW_TEXT_KEY: &str = "content";

/// Current values of a form, keyed by form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text fallback, the whole text goes to `content`.
    pub fn with_raw_text(text: &str) -> Self {
        let mut values = Self::new();
        values.set(RAW_TEXT_KEY, text);
        values
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay legal text extraction results.
    pub fn apply_legal_text(&mut self, data: &LegalTextData) {
        self.set_opt("title", data.title.as_deref());
        self.set_opt("type", data.text_type.map(|t| t.label()));
        self.set_opt("reference", data.reference.as_deref());
        self.set_opt(
            "publicationDate",
            data.publication_date.map(|d| d.format("%Y-%m-%d").to_string()).as_deref(),
        );
        self.set_opt("authority", data.authority.map(|a| a.label()));
        self.set("description", data.description.as_str());
        self.set("language", data.language.code());
    }

    /// Overlay procedure extraction results.
    pub fn apply_procedure(&mut self, data: &ProcedureData) {
        self.set_opt("name", data.name.as_deref());
        self.set_opt("type", data.procedure_type.map(|t| t.label()));
        self.set_opt("sector", data.sector.map(|s| s.label()));
        self.set("description", data.description.as_str());
    }

    fn set_opt(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }
}
