//! OCR text field extraction.
//!
//! Both extractors are total: any input, including an empty string, yields a
//! record. Fields whose pattern does not match are left unset, and the full
//! trimmed text always lands in `description`.

mod legal;
mod procedure;
pub mod rules;

pub use legal::{extract_legal_text_data, LegalTextExtractor};
pub use procedure::{extract_procedure_data, ProcedureExtractor};

/// Trait for document-level extractors.
pub trait DocumentExtractor {
    /// The record produced.
    type Output;

    /// Extract a record from raw OCR text.
    fn extract(&self, text: &str) -> Self::Output;
}
