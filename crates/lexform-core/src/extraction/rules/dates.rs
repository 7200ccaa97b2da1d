//! Publication date extraction.

use chrono::NaiveDate;
use tracing::debug;

use super::patterns::{DATE_DMY, DATE_SEPARATOR};
use super::{ExtractionMatch, FieldExtractor};

/// Day/month/year date extractor.
///
/// [`FieldExtractor::extract`] only looks at the first date-shaped match: if
/// that one does not parse, no date is returned.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<NaiveDate>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let m = DATE_DMY.find(text)?;
        match parse_dmy_date(m.as_str()) {
            Some(date) => Some(ExtractionMatch::new(date, m.as_str()).with_position(m.start(), m.end())),
            None => {
                debug!("Date parsing failed: {:?}", m.as_str());
                None
            }
        }
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        DATE_DMY
            .find_iter(text)
            .filter_map(|m| {
                parse_dmy_date(m.as_str())
                    .map(|date| ExtractionMatch::new(date, m.as_str()).with_position(m.start(), m.end()))
            })
            .collect()
    }
}

/// Parse a `day<sep>month<sep>year` string, `sep` being a space, slash or hyphen.
pub fn parse_dmy_date(s: &str) -> Option<NaiveDate> {
    let normalized = DATE_SEPARATOR.replace_all(s.trim(), "-");
    NaiveDate::parse_from_str(&normalized, "%d-%m-%Y").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_date_separators() {
        let extractor = DateExtractor::new();
        let expected = NaiveDate::from_ymd_opt(2021, 3, 15).unwrap();

        for text in ["du 15/03/2021", "du 15-03-2021", "du 15 03 2021", "le 15/3/2021"] {
            assert_eq!(extractor.extract(text).map(|m| m.value), Some(expected), "{text}");
        }
    }

    #[test]
    fn test_two_digit_year_is_not_a_date() {
        assert!(DateExtractor::new().extract("15/03/21").is_none());
    }

    #[test]
    fn test_invalid_first_date_is_dropped() {
        let extractor = DateExtractor::new();
        let text = "du 31/02/2021 modifié le 01/04/2021";

        assert!(extractor.extract(text).is_none());

        let all = extractor.extract_all(text);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].value, NaiveDate::from_ymd_opt(2021, 4, 1).unwrap());
        assert_eq!(all[0].source, "01/04/2021");
    }

    #[test]
    fn test_parse_dmy_date() {
        assert_eq!(parse_dmy_date("05-07-1990"), NaiveDate::from_ymd_opt(1990, 7, 5));
        assert_eq!(parse_dmy_date("13/13/2020"), None);
    }
}
