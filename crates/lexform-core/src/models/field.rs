//! Form field descriptors produced by the schema generator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Input kind of a form field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Textarea,
    Number,
    Date,
    Email,
    Tel,
    Url,
    Select,
    Checkbox,
    File,
}

impl FieldKind {
    /// All kinds, in the order the field editor offers them.
    pub const ALL: [FieldKind; 10] = [
        Self::Text,
        Self::Textarea,
        Self::Number,
        Self::Date,
        Self::Email,
        Self::Tel,
        Self::Url,
        Self::Select,
        Self::Checkbox,
        Self::File,
    ];

    /// Identifier used by the rendering layer (`input type`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Date => "date",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::File => "file",
        }
    }

    /// Display label shown in the field editor.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Texte",
            Self::Textarea => "Zone de texte",
            Self::Number => "Nombre",
            Self::Date => "Date",
            Self::Email => "Email",
            Self::Tel => "Téléphone",
            Self::Url => "URL",
            Self::Select => "Liste déroulante",
            Self::Checkbox => "Case à cocher",
            Self::File => "Fichier",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of one form input.
///
/// Descriptors are value objects: edits go through [`FieldDescriptor::with_update`]
/// which returns a new descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Identifier, unique within a generated set.
    pub id: String,

    /// Logical key (snake_case).
    pub name: String,

    /// Human readable label.
    pub label: String,

    /// Input kind.
    #[serde(rename = "type")]
    pub kind: FieldKind,

    /// Whether the field must be filled.
    pub required: bool,

    /// Placeholder text.
    pub placeholder: String,

    /// Help text.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,

    /// Allowed values, only for [`FieldKind::Select`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl FieldDescriptor {
    /// Copy this descriptor with the given changes applied.
    ///
    /// Options are dropped when the resulting kind is not `select`.
    pub fn with_update(&self, update: &FieldUpdate) -> Self {
        let mut field = self.clone();

        if let Some(name) = &update.name {
            field.name = name.clone();
        }
        if let Some(label) = &update.label {
            field.label = label.clone();
        }
        if let Some(kind) = update.kind {
            field.kind = kind;
        }
        if let Some(required) = update.required {
            field.required = required;
        }
        if let Some(placeholder) = &update.placeholder {
            field.placeholder = placeholder.clone();
        }
        if let Some(description) = &update.description {
            field.description = description.clone();
        }
        if let Some(options) = &update.options {
            field.options = Some(options.clone());
        }
        if field.kind != FieldKind::Select {
            field.options = None;
        }

        field
    }
}

/// Partial change to a [`FieldDescriptor`]. Unset members are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldUpdate {
    pub name: Option<String>,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<FieldKind>,
    pub required: Option<bool>,
    pub placeholder: Option<String>,
    pub description: Option<String>,
    pub options: Option<Vec<String>>,
}

impl FieldUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn options(mut self, options: Vec<String>) -> Self {
        self.options = Some(options);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FieldDescriptor {
        FieldDescriptor {
            id: "field_0".to_string(),
            name: "organisation".to_string(),
            label: "Organisation".to_string(),
            kind: FieldKind::Select,
            required: false,
            placeholder: "Sélectionner organisation".to_string(),
            description: String::new(),
            options: Some(vec!["Cour Suprême".to_string()]),
        }
    }

    #[test]
    fn test_with_update_leaves_original_untouched() {
        let field = sample();
        let updated = field.with_update(&FieldUpdate::new().label("Organisme").required(true));

        assert_eq!(updated.label, "Organisme");
        assert!(updated.required);
        assert_eq!(field.label, "Organisation");
        assert!(!field.required);
        assert_eq!(updated.id, field.id);
    }

    #[test]
    fn test_changing_kind_drops_options() {
        let updated = sample().with_update(&FieldUpdate::new().kind(FieldKind::Text));
        assert_eq!(updated.kind, FieldKind::Text);
        assert!(updated.options.is_none());
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "select");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(FieldKind::ALL.len(), 10);
        assert_eq!(FieldKind::Select.label(), "Liste déroulante");
        assert_eq!(FieldKind::Tel.as_str(), "tel");
    }
}
