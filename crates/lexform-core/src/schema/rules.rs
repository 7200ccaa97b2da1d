//! Field derivation policies applied to logical field names.

use crate::models::field::FieldKind;

/// Substrings marking a required field.
const REQUIRED_MARKERS: [&str; 4] = ["titre", "nom_procedure", "numero", "date"];

/// Input kind of a field, from substrings of its name.
pub fn field_kind(name: &str) -> FieldKind {
    let has = |needles: &[&str]| needles.iter().any(|n| name.contains(n));

    if has(&["date"]) {
        FieldKind::Date
    } else if has(&["numero", "cout", "capital"]) {
        FieldKind::Number
    } else if has(&["contenu", "description", "observations"]) {
        FieldKind::Textarea
    } else if has(&["email"]) {
        FieldKind::Email
    } else if has(&["tel", "phone"]) {
        FieldKind::Tel
    } else if has(&["url", "site"]) {
        FieldKind::Url
    } else if name == "organisation" || has(&["ministere", "ministeres"]) {
        FieldKind::Select
    } else {
        FieldKind::Text
    }
}

pub fn is_required_field(name: &str) -> bool {
    REQUIRED_MARKERS.iter().any(|marker| name.contains(marker))
}

/// `date_signature` -> `Date Signature`.
pub fn field_label(name: &str) -> String {
    name.replace('_', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn field_placeholder(name: &str, kind: FieldKind) -> String {
    let text = name.replace('_', " ").to_lowercase();
    match kind {
        FieldKind::Select => format!("Sélectionner {text}"),
        _ => format!("Saisir {text}"),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
