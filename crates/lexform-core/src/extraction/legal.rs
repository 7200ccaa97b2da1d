//! Legal text extraction.

use tracing::{debug, trace};

use crate::models::legal_text::{Authority, LegalTextData, LegalTextType};

use super::rules::patterns::{AUTHORITY, LEGAL_TEXT_TYPE};
use super::rules::{
    detect_language, first_line_longer_than, DateExtractor, DecisionList, FieldExtractor,
    ReferenceExtractor,
};
use super::DocumentExtractor;

static TEXT_TYPES: DecisionList<LegalTextType> = DecisionList::new(&[
    ("loi", LegalTextType::Loi),
    ("décret", LegalTextType::DecretExecutif),
    ("ordonnance", LegalTextType::Ordonnance),
    ("arrêté", LegalTextType::ArreteMinisteriel),
]);

// "ministre" and "ministère" both land on the Justice ministry.
static AUTHORITIES: DecisionList<Authority> = DecisionList::new(&[
    ("président", Authority::Presidence),
    ("gouvernement", Authority::Gouvernement),
    ("ministre", Authority::MinistereJustice),
    ("ministère", Authority::MinistereJustice),
]);

/// Extractor for legal texts (lois, décrets, ordonnances, arrêtés).
#[derive(Debug, Clone)]
pub struct LegalTextExtractor {
    min_title_length: usize,
}

impl LegalTextExtractor {
    pub fn new() -> Self {
        Self { min_title_length: 10 }
    }

    /// Set the length a line must exceed to be taken as the title.
    pub fn with_min_title_length(mut self, len: usize) -> Self {
        self.min_title_length = len;
        self
    }
}

impl Default for LegalTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractor for LegalTextExtractor {
    type Output = LegalTextData;

    fn extract(&self, text: &str) -> LegalTextData {
        let reference = ReferenceExtractor::new().extract(text);
        let date = DateExtractor::new().extract(text);
        if let Some(m) = &reference {
            trace!("Reference {:?} from {:?} at {:?}", m.value, m.source, m.position);
        }
        if let Some(m) = &date {
            trace!("Publication date {} from {:?} at {:?}", m.value, m.source, m.position);
        }

        let data = LegalTextData {
            text_type: TEXT_TYPES.classify(&LEGAL_TEXT_TYPE, text),
            reference: reference.map(|m| m.value),
            publication_date: date.map(|m| m.value),
            authority: AUTHORITIES.classify(&AUTHORITY, text),
            title: first_line_longer_than(text, self.min_title_length),
            description: text.trim().to_string(),
            language: detect_language(text),
        };

        debug!(
            "Legal text extraction: type={:?} reference={:?} date={:?} authority={:?} language={}",
            data.text_type, data.reference, data.publication_date, data.authority, data.language
        );

        data
    }
}

/// Extract legal text fields with the default settings.
pub fn extract_legal_text_data(text: &str) -> LegalTextData {
    LegalTextExtractor::new().extract(text)
}
