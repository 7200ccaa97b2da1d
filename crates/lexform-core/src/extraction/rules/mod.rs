//! Rule-based field extractors for legal texts and procedures.

pub mod dates;
pub mod decision;
pub mod language;
pub mod lines;
pub mod patterns;
pub mod reference;

pub use dates::{parse_dmy_date, DateExtractor};
pub use decision::DecisionList;
pub use language::detect_language;
pub use lines::first_line_longer_than;
pub use reference::ReferenceExtractor;

/// Trait for single-field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field, in document order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// An extracted value with the text it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte range in the source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
