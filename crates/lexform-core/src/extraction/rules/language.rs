//! Document language detection.

use crate::models::legal_text::Language;

use super::patterns::{ARABIC_CHARS, FRENCH_ACCENTED_CHARS};

/// Detect the document language from its script.
///
/// Arabic and accented French characters are tested independently. French is
/// the fallback when neither is present.
pub fn detect_language(text: &str) -> Language {
    let arabic = ARABIC_CHARS.is_match(text);
    let french = FRENCH_ACCENTED_CHARS.is_match(text);

    match (arabic, french) {
        (true, true) => Language::ArabicFrench,
        (true, false) => Language::Arabic,
        _ => Language::French,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_language() {
        assert_eq!(detect_language("قانون رقم"), Language::Arabic);
        assert_eq!(detect_language("arrêté"), Language::French);
        assert_eq!(detect_language("قانون - arrêté"), Language::ArabicFrench);
        assert_eq!(detect_language("Loi 90-11"), Language::French);
        assert_eq!(detect_language(""), Language::French);
    }

    #[test]
    fn test_supplement_block_is_arabic() {
        // U+0750..U+077F (Arabic Supplement)
        assert_eq!(detect_language("\u{0750}"), Language::Arabic);
    }
}
