//! Legal text extraction record.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of legal text recognised in OCR output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegalTextType {
    #[serde(rename = "Loi")]
    Loi,
    #[serde(rename = "Décret exécutif")]
    DecretExecutif,
    #[serde(rename = "Ordonnance")]
    Ordonnance,
    #[serde(rename = "Arrêté ministériel")]
    ArreteMinisteriel,
}

impl LegalTextType {
    /// Canonical display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Loi => "Loi",
            Self::DecretExecutif => "Décret exécutif",
            Self::Ordonnance => "Ordonnance",
            Self::ArreteMinisteriel => "Arrêté ministériel",
        }
    }
}

impl fmt::Display for LegalTextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Issuing authority.
///
/// Any mention of a minister or ministry maps to [`Authority::MinistereJustice`];
/// the classifier does not tell ministries apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Authority {
    #[serde(rename = "Présidence de la République")]
    Presidence,
    #[serde(rename = "Gouvernement")]
    Gouvernement,
    #[serde(rename = "Ministère de la Justice")]
    MinistereJustice,
}

impl Authority {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Presidence => "Présidence de la République",
            Self::Gouvernement => "Gouvernement",
            Self::MinistereJustice => "Ministère de la Justice",
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Language of the document text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ar")]
    Arabic,
    #[default]
    #[serde(rename = "fr")]
    French,
    /// Bilingual Arabic/French document.
    #[serde(rename = "ar-fr")]
    ArabicFrench,
}

impl Language {
    /// Language code as stored in the form.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::French => "fr",
            Self::ArabicFrench => "ar-fr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Data extracted from the OCR text of a legal text.
///
/// Only `description` and `language` are always set; every other field is
/// best effort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalTextData {
    /// Type of text (Loi, Décret exécutif, ...).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub text_type: Option<LegalTextType>,

    /// Reference number, e.g. `21-123`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Publication date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<NaiveDate>,

    /// Issuing authority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<Authority>,

    /// First significant line of the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Full trimmed OCR text.
    pub description: String,

    /// Detected language.
    pub language: Language,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialize_uses_form_keys() {
        let data = LegalTextData {
            text_type: Some(LegalTextType::DecretExecutif),
            reference: Some("21-123".to_string()),
            publication_date: NaiveDate::from_ymd_opt(2021, 3, 15),
            authority: Some(Authority::MinistereJustice),
            title: None,
            description: "texte".to_string(),
            language: Language::ArabicFrench,
        };

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "Décret exécutif",
                "reference": "21-123",
                "publicationDate": "2021-03-15",
                "authority": "Ministère de la Justice",
                "description": "texte",
                "language": "ar-fr"
            })
        );
    }

    #[test]
    fn test_default_language_is_french() {
        assert_eq!(Language::default(), Language::French);
        assert_eq!(Language::default().to_string(), "fr");
    }
}
