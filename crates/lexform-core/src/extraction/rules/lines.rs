//! Line helpers.

/// First line whose trimmed length (in characters) is greater than `min_len`,
/// trimmed.
pub fn first_line_longer_than(text: &str, min_len: usize) -> Option<String> {
    text.split('\n')
        .map(str::trim)
        .find(|line| line.chars().count() > min_len)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_significant_line() {
        let text = "JORA\n   \n  Loi relative à la santé  \nArticle 1";
        assert_eq!(
            first_line_longer_than(text, 10),
            Some("Loi relative à la santé".to_string())
        );
    }

    #[test]
    fn test_length_is_strict_and_counts_chars() {
        assert_eq!(first_line_longer_than("0123456789", 10), None);
        assert_eq!(first_line_longer_than("01234567890", 10), Some("01234567890".to_string()));
        // 6 characters, 12 bytes
        assert_eq!(first_line_longer_than("قانونق", 6), None);
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(first_line_longer_than("Demande\r\n", 5), Some("Demande".to_string()));
    }
}
