//! Help texts for known logical field names.

use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    static ref DESCRIPTIONS: HashMap<&'static str, &'static str> = HashMap::from([
        ("titre", "Titre officiel du document"),
        ("numero", "Numéro d'identification unique"),
        ("date_promulgation", "Date de promulgation officielle"),
        ("date_signature", "Date de signature du document"),
        ("journal_officiel", "Référence du Journal Officiel"),
        ("contenu", "Contenu complet du texte"),
        ("domaine_juridique", "Domaine juridique concerné"),
        ("organisation", "Organisation responsable (selon l'onglet Organisation)"),
        ("signataire", "Personne ou autorité signataire"),
        ("ministere", "Ministère concerné"),
        ("ministeres", "Ministères concernés (si plusieurs)"),
        ("autorite", "Autorité responsable"),
        ("nom_procedure", "Nom de la procédure administrative"),
        ("documents_requis", "Liste des documents nécessaires"),
        ("delai_traitement", "Délai de traitement estimé"),
        ("cout", "Coût de la procédure en DA"),
        ("lieu_depot", "Lieu de dépôt de la demande"),
        ("conditions", "Conditions requises pour la procédure"),
        ("pieces_jointes", "Pièces jointes nécessaires"),
        ("observations", "Observations et remarques importantes"),
        ("type_permis", "Type de permis demandé"),
        ("surface", "Surface concernée"),
        ("localisation", "Localisation du projet"),
        ("documents_techniques", "Documents techniques requis"),
        ("frais", "Frais de la procédure"),
        ("commission", "Commission d'examen"),
        ("zone", "Zone géographique concernée"),
        ("contraintes", "Contraintes et restrictions"),
    ]);
}

/// Help text of a field, with a generic fallback for unlisted names.
pub fn field_description(name: &str) -> String {
    match DESCRIPTIONS.get(name) {
        Some(description) => description.to_string(),
        None => format!("Information relative à {}", name.replace('_', " ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_fallback() {
        assert_eq!(field_description("cout"), "Coût de la procédure en DA");
        assert_eq!(field_description("capital_social"), "Information relative à capital social");
        assert_eq!(DESCRIPTIONS.len(), 28);
    }
}
