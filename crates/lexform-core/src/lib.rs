//! Core library for the legal texts and administrative procedures admin.
//!
//! This crate provides:
//! - OCR text field extraction for legal texts (type, reference, date,
//!   authority, title, language) and administrative procedures
//! - Form schema generation from the document template catalog
//! - Ad hoc form schema generation from raw OCR text
//! - Field editing and form prefill helpers used by the admin forms

pub mod error;
pub mod models;
pub mod extraction;
pub mod schema;
pub mod prefill;

pub use error::{CatalogError, LexformError, Result};
pub use models::catalog::{Catalog, DocumentTemplate, TemplateFamily};
pub use models::config::LexformConfig;
pub use models::field::{FieldDescriptor, FieldKind, FieldUpdate};
pub use models::legal_text::{Authority, Language, LegalTextData, LegalTextType};
pub use models::procedure::{ProcedureData, ProcedureType, Sector};
pub use extraction::{
    extract_legal_text_data, extract_procedure_data, DocumentExtractor, LegalTextExtractor,
    ProcedureExtractor,
};
pub use schema::{generate_fields, parse_text_to_form_fields, FieldEditor, MoveDirection};
pub use prefill::FormValues;
