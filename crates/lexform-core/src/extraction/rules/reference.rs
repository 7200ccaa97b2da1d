//! Reference number extraction (`n° 21-123`).

use super::patterns::REFERENCE;
use super::{ExtractionMatch, FieldExtractor};

/// Reference number extractor. The value is the `digits-digits` part only.
pub struct ReferenceExtractor;

impl ReferenceExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReferenceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ReferenceExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        REFERENCE
            .captures_iter(text)
            .filter_map(|caps| {
                let full_match = caps.get(0)?;
                let number = caps.get(1)?;
                Some(
                    ExtractionMatch::new(number.as_str().to_string(), full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_reference() {
        let extractor = ReferenceExtractor::new();

        let result = extractor.extract("Décret exécutif n° 21-123 du 15/03/2021").unwrap();
        assert_eq!(result.value, "21-123");
        assert_eq!(result.source, "n° 21-123");
    }

    #[test]
    fn test_reference_variants() {
        let extractor = ReferenceExtractor::new();

        assert_eq!(extractor.extract("Loi n°05/12").unwrap().value, "05/12");
        assert_eq!(extractor.extract("N° 8-4").unwrap().value, "8-4");
        assert_eq!(extractor.extract("n 90-11").unwrap().value, "90-11");
        assert!(extractor.extract("Loi 90-11").is_none());
    }

    #[test]
    fn test_upper_case_marker_is_accepted() {
        let extractor = ReferenceExtractor::new();

        let result = extractor.extract("Arrêté N 12-3 portant organisation").unwrap();
        assert_eq!(result.value, "12-3");
        assert_eq!(result.source, "N 12-3");
        assert_eq!(result.position, Some((9, 15)));
    }

    #[test]
    fn test_first_reference_in_document_order() {
        let all = ReferenceExtractor::new().extract_all("n° 20-01 modifiant la loi n° 90-11");
        let values: Vec<_> = all.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, ["20-01", "90-11"]);
    }
}
