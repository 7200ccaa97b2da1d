//! Administrative procedure extraction.

use tracing::debug;

use crate::models::procedure::{ProcedureData, ProcedureType, Sector};

use super::rules::patterns::{PROCEDURE_TYPE, SECTOR};
use super::rules::{first_line_longer_than, DecisionList};
use super::DocumentExtractor;

static PROCEDURE_TYPES: DecisionList<ProcedureType> = DecisionList::new(&[
    ("demande", ProcedureType::Demande),
    ("autorisation", ProcedureType::Autorisation),
    ("licence", ProcedureType::Licence),
    ("permis", ProcedureType::Permis),
    ("certificat", ProcedureType::Certificat),
    ("déclaration", ProcedureType::Declaration),
]);

static SECTORS: DecisionList<Sector> = DecisionList::new(&[
    ("commerce", Sector::Commerce),
    ("industrie", Sector::Industrie),
    ("agriculture", Sector::Agriculture),
    ("transport", Sector::Transport),
    ("urbanisme", Sector::Urbanisme),
    ("éducation", Sector::Education),
]);

/// Extractor for administrative procedure documents.
#[derive(Debug, Clone)]
pub struct ProcedureExtractor {
    min_name_length: usize,
}

impl ProcedureExtractor {
    pub fn new() -> Self {
        Self { min_name_length: 5 }
    }

    /// Set the length a line must exceed to be taken as the procedure name.
    pub fn with_min_name_length(mut self, len: usize) -> Self {
        self.min_name_length = len;
        self
    }
}

impl Default for ProcedureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractor for ProcedureExtractor {
    type Output = ProcedureData;

    fn extract(&self, text: &str) -> ProcedureData {
        let data = ProcedureData {
            procedure_type: PROCEDURE_TYPES.classify(&PROCEDURE_TYPE, text),
            sector: SECTORS.classify(&SECTOR, text),
            name: first_line_longer_than(text, self.min_name_length),
            description: text.trim().to_string(),
        };

        debug!(
            "Procedure extraction: type={:?} sector={:?} name={:?}",
            data.procedure_type, data.sector, data.name
        );

        data
    }
}

/// Extract procedure fields with the default settings.
pub fn extract_procedure_data(text: &str) -> ProcedureData {
    ProcedureExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_permis_transport() {
        let text = "Demande de permis de conduire — secteur Transport";
        let data = extract_procedure_data(text);

        assert_eq!(
            data,
            ProcedureData {
                procedure_type: Some(ProcedureType::Demande),
                sector: Some(Sector::Transport),
                name: Some(text.to_string()),
                description: text.to_string(),
            }
        );
    }

    #[test]
    fn test_sector_labels() {
        let data = extract_procedure_data("Certificat de conformité\nDirection de l'urbanisme");
        assert_eq!(data.procedure_type, Some(ProcedureType::Certificat));
        assert_eq!(data.sector, Some(Sector::Urbanisme));
        assert_eq!(data.sector.map(|s| s.label()), Some("Urbanisme et Construction"));
        assert_eq!(data.name.as_deref(), Some("Certificat de conformité"));
    }

    #[test]
    fn test_accented_keywords() {
        let data = extract_procedure_data("DÉCLARATION d'existence - ÉDUCATION");
        assert_eq!(data.procedure_type, Some(ProcedureType::Declaration));
        assert_eq!(data.sector, Some(Sector::Education));
    }

    #[test]
    fn test_sector_matches_inside_words() {
        let data = extract_procedure_data("Registre du commerce électronique");
        assert_eq!(data.sector, Some(Sector::Commerce));
        assert_eq!(data.procedure_type, None);
    }

    #[test]
    fn test_short_lines_have_no_name() {
        let data = extract_procedure_data("Acte\nDépôt\n");
        assert_eq!(data.name, None);
        assert_eq!(data.description, "Acte\nDépôt");
    }

    #[test]
    fn test_no_reference_or_date_fields() {
        let json = serde_json::to_value(extract_procedure_data("Dossier n° 12-34 du 01/02/2020")).unwrap();
        assert!(json.get("reference").is_none());
        assert!(json.get("publicationDate").is_none());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "Licence d'exploitation agricole\nSecteur agriculture";
        assert_eq!(extract_procedure_data(text), extract_procedure_data(text));
    }
}
