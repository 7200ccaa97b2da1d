//! Form schema generation.
//!
//! Field lists are built fresh on every call, either from a catalog template
//! ([`generate_fields`]) or from raw OCR text ([`parse_text_to_form_fields`]).

pub mod descriptions;
mod editor;
pub mod rules;
mod text;

pub use descriptions::field_description;
pub use editor::{FieldEditor, MoveDirection};
pub use rules::{field_kind, field_label, field_placeholder, is_required_field};
pub use text::{parse_text_to_form_fields, TextSchemaParser};

use tracing::{trace, warn};

use crate::models::catalog::{Catalog, TemplateFamily};
use crate::models::field::{FieldDescriptor, FieldKind};

/// Build the field list of the template `value` in `family`.
///
/// An unknown template yields an empty list.
pub fn generate_fields(family: TemplateFamily, value: &str, catalog: &Catalog) -> Vec<FieldDescriptor> {
    let Some(template) = catalog.find(family, value) else {
        warn!("Unknown template {:?} in {}", value, family);
        return Vec::new();
    };

    template
        .fields
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let kind = field_kind(name);
            trace!("Field {} -> {}", name, kind);
            FieldDescriptor {
                id: format!("field_{index}"),
                name: name.clone(),
                label: field_label(name),
                kind,
                required: is_required_field(name),
                placeholder: field_placeholder(name, kind),
                description: field_description(name),
                options: field_options(name, kind, catalog),
            }
        })
        .collect()
}

fn field_options(name: &str, kind: FieldKind, catalog: &Catalog) -> Option<Vec<String>> {
    if kind != FieldKind::Select {
        return None;
    }
    match name {
        "organisation" => Some(catalog.organizations.clone()),
        "ministere" | "ministeres" => Some(catalog.ministries()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generate_loi_fields() {
        let catalog = Catalog::builtin();
        let fields = generate_fields(TemplateFamily::TextesJuridiques, "loi", catalog);

        let template = catalog.find(TemplateFamily::TextesJuridiques, "loi").unwrap();
        let names: Vec<_> = fields.iter().map(|f| f.name.clone()).collect();
        assert_eq!(names, template.fields);

        let organisation = fields.iter().find(|f| f.name == "organisation").unwrap();
        assert_eq!(organisation.kind, FieldKind::Select);
        assert_eq!(organisation.options.as_ref(), Some(&catalog.organizations));
        assert_eq!(organisation.placeholder, "Sélectionner organisation");
        assert!(!organisation.required);
    }

    #[test]
    fn test_loi_field_details() {
        let fields = generate_fields(TemplateFamily::TextesJuridiques, "loi", Catalog::builtin());

        let titre = &fields[0];
        assert_eq!(titre.id, "field_0");
        assert_eq!(titre.label, "Titre");
        assert_eq!(titre.kind, FieldKind::Text);
        assert!(titre.required);
        assert_eq!(titre.placeholder, "Saisir titre");
        assert_eq!(titre.description, "Titre officiel du document");
        assert!(titre.options.is_none());

        let date = &fields[2];
        assert_eq!(date.name, "date_promulgation");
        assert_eq!(date.label, "Date Promulgation");
        assert_eq!(date.kind, FieldKind::Date);
        assert!(date.required);

        let journal = &fields[3];
        assert_eq!(journal.kind, FieldKind::Text);
        assert_eq!(journal.placeholder, "Saisir journal officiel");
        assert!(!journal.required);

        assert_eq!(fields[4].kind, FieldKind::Textarea);
        assert_eq!(fields[1].kind, FieldKind::Number);
    }

    #[test]
    fn test_ministere_options_are_ministries() {
        let catalog = Catalog::builtin();
        let fields = generate_fields(TemplateFamily::TextesJuridiques, "arrete_interministerielle", catalog);

        let ministeres = fields.iter().find(|f| f.name == "ministeres").unwrap();
        assert_eq!(ministeres.kind, FieldKind::Select);
        assert_eq!(ministeres.options, Some(catalog.ministries()));
        assert_eq!(ministeres.description, "Ministères concernés (si plusieurs)");
    }

    #[test]
    fn test_procedure_template() {
        let fields = generate_fields(
            TemplateFamily::ProceduresAdministratives,
            "etat_civil",
            Catalog::builtin(),
        );

        assert_eq!(fields.len(), 9);
        assert!(fields[0].required);
        assert_eq!(fields[0].label, "Nom Procedure");
        assert_eq!(fields[3].name, "cout");
        assert_eq!(fields[3].kind, FieldKind::Number);
        assert_eq!(fields[7].kind, FieldKind::Textarea);
        assert_eq!(fields[4].description, "Lieu de dépôt de la demande");
    }

    #[test]
    fn test_unknown_template_is_empty() {
        let catalog = Catalog::builtin();
        assert!(generate_fields(TemplateFamily::TextesJuridiques, "inconnu", catalog).is_empty());
        assert!(generate_fields(TemplateFamily::ProceduresAdministratives, "loi", catalog).is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let fields = generate_fields(TemplateFamily::ProceduresAdministratives, "transport", Catalog::builtin());
        let ids: std::collections::HashSet<_> = fields.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), fields.len());
    }
}
