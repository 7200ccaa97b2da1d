//! Ad hoc schema generation from raw OCR text, one field per non-blank line.

use tracing::debug;

use crate::models::field::{FieldDescriptor, FieldKind};

/// Builds a field list out of the lines of a scanned form.
#[derive(Debug, Clone)]
pub struct TextSchemaParser {
    textarea_line_length: usize,
}

impl TextSchemaParser {
    pub fn new() -> Self {
        Self {
            textarea_line_length: 50,
        }
    }

    /// Set the length above which a plain line becomes a textarea.
    pub fn with_textarea_line_length(mut self, len: usize) -> Self {
        self.textarea_line_length = len;
        self
    }

    pub fn parse(&self, text: &str) -> Vec<FieldDescriptor> {
        let fields: Vec<_> = text
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(index, line)| {
                let lower = line.to_lowercase();
                FieldDescriptor {
                    id: format!("ocr_field_{index}"),
                    name: field_name(&lower),
                    label: line.to_string(),
                    kind: self.line_kind(line, &lower),
                    required: false,
                    placeholder: format!("Saisir {lower}"),
                    description: format!("Champ généré à partir du texte: \"{line}\""),
                    options: None,
                }
            })
            .collect();

        debug!("Generated {} fields from OCR text", fields.len());
        fields
    }

    fn line_kind(&self, line: &str, lower: &str) -> FieldKind {
        if lower.contains("date") {
            FieldKind::Date
        } else if lower.contains("email") {
            FieldKind::Email
        } else if lower.contains("téléphone") || lower.contains("tel") {
            FieldKind::Tel
        } else if lower.contains("nombre") || line.chars().any(|c| c.is_ascii_digit()) {
            FieldKind::Number
        } else if line.chars().count() > self.textarea_line_length {
            FieldKind::Textarea
        } else {
            FieldKind::Text
        }
    }
}

impl Default for TextSchemaParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate one field per non-blank line of `text`, with the default settings.
pub fn parse_text_to_form_fields(text: &str) -> Vec<FieldDescriptor> {
    TextSchemaParser::new().parse(text)
}

// Everything outside ASCII `[a-z0-9]` becomes `_`.
fn field_name(lower: &str) -> String {
    lower
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blank_input_has_no_fields() {
        assert!(parse_text_to_form_fields("").is_empty());
        assert!(parse_text_to_form_fields("  \n\t\n   ").is_empty());
    }

    #[test]
    fn test_line_to_field() {
        let fields = parse_text_to_form_fields("\n  Nom du demandeur  \n");

        assert_eq!(
            fields,
            vec![FieldDescriptor {
                id: "ocr_field_0".to_string(),
                name: "nom_du_demandeur".to_string(),
                label: "Nom du demandeur".to_string(),
                kind: FieldKind::Text,
                required: false,
                placeholder: "Saisir nom du demandeur".to_string(),
                description: "Champ généré à partir du texte: \"Nom du demandeur\"".to_string(),
                options: None,
            }]
        );
    }

    #[test]
    fn test_kinds_from_line_content() {
        let text = "Date de naissance\nAdresse email\nTéléphone portable\nNombre d'enfants\nCode postal 16000\nObservations générales sur la situation du demandeur et remarques\nPrénom";
        let kinds: Vec<_> = parse_text_to_form_fields(text).iter().map(|f| f.kind).collect();

        assert_eq!(
            kinds,
            [
                FieldKind::Date,
                FieldKind::Email,
                FieldKind::Tel,
                FieldKind::Number,
                FieldKind::Number,
                FieldKind::Textarea,
                FieldKind::Text,
            ]
        );
    }

    #[test]
    fn test_ids_follow_non_blank_lines() {
        let fields = parse_text_to_form_fields("A\n\n\nB");
        let ids: Vec<_> = fields.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["ocr_field_0", "ocr_field_1"]);
    }

    #[test]
    fn test_accented_name_characters() {
        let fields = parse_text_to_form_fields("Numéro d'État");
        assert_eq!(fields[0].name, "num_ro_d__tat");
        assert!(fields.iter().all(|f| !f.required));
    }

    #[test]
    fn test_custom_textarea_length() {
        let parser = TextSchemaParser::new().with_textarea_line_length(5);
        assert_eq!(parser.parse("Adresse")[0].kind, FieldKind::Textarea);
    }
}
