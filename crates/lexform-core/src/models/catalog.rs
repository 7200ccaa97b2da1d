//! Document template catalog: legal text types, procedure categories and
//! the organization list.
//!
//! The catalog is reference data. It is built or loaded once and then only
//! read, so it is passed around as `&Catalog`.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CatalogError, LexformError, Result};

/// Version tag of the built-in catalog.
pub const BUILTIN_CATALOG_VERSION: &str = "2024.1";

/// Template family a document type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateFamily {
    /// Legal texts (textes juridiques).
    TextesJuridiques,
    /// Administrative procedures (procédures administratives).
    ProceduresAdministratives,
}

impl TemplateFamily {
    pub const ALL: [TemplateFamily; 2] = [Self::TextesJuridiques, Self::ProceduresAdministratives];

    /// Stable key of the family.
    pub fn key(&self) -> &'static str {
        match self {
            Self::TextesJuridiques => "textes_juridiques",
            Self::ProceduresAdministratives => "procedures_administratives",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::TextesJuridiques => "Textes Juridiques",
            Self::ProceduresAdministratives => "Procédures Administratives",
        }
    }
}

impl fmt::Display for TemplateFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TemplateFamily {
    type Err = LexformError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "textes_juridiques" | "legal" => Ok(Self::TextesJuridiques),
            "procedures_administratives" | "procedure" => Ok(Self::ProceduresAdministratives),
            other => Err(LexformError::Config(format!("unknown template family: {other}"))),
        }
    }
}

/// One catalog entry describing the fields of a document type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTemplate {
    /// Stable identifier, e.g. `loi`.
    pub value: String,
    /// Display name.
    pub label: String,
    /// Short code, e.g. `LOI`.
    pub code: String,
    /// Ordered logical field names.
    pub fields: Vec<String>,
}

impl DocumentTemplate {
    pub fn new(value: &str, label: &str, code: &str, fields: &[&str]) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            code: code.to_string(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Versioned reference data consumed by the schema generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Version tag of the reference data.
    pub version: String,

    /// Legal text types.
    #[serde(rename = "textes_juridiques")]
    pub legal_texts: Vec<DocumentTemplate>,

    /// Procedure categories.
    #[serde(rename = "procedures_administratives")]
    pub procedures: Vec<DocumentTemplate>,

    /// Organizations offered by `organisation` fields.
    pub organizations: Vec<String>,
}

lazy_static! {
    static ref BUILTIN: Catalog = build_builtin();
}

impl Catalog {
    /// The built-in catalog shipped with the admin.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        debug!(
            "Loaded catalog {} from {}: {} legal texts, {} procedures",
            catalog.version,
            path.display(),
            catalog.legal_texts.len(),
            catalog.procedures.len()
        );
        Ok(catalog)
    }

    /// Save the catalog as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Templates of one family, in catalog order.
    pub fn templates(&self, family: TemplateFamily) -> &[DocumentTemplate] {
        match family {
            TemplateFamily::TextesJuridiques => &self.legal_texts,
            TemplateFamily::ProceduresAdministratives => &self.procedures,
        }
    }

    /// Look up a template by its value.
    pub fn find(&self, family: TemplateFamily, value: &str) -> Option<&DocumentTemplate> {
        self.templates(family).iter().find(|t| t.value == value)
    }

    /// Organizations whose name mentions a ministry.
    pub fn ministries(&self) -> Vec<String> {
        self.organizations
            .iter()
            .filter(|org| org.contains("Ministère"))
            .cloned()
            .collect()
    }

    /// Check the catalog invariants.
    pub fn validate(&self) -> std::result::Result<(), CatalogError> {
        if self.version.trim().is_empty() {
            return Err(CatalogError::EmptyVersion);
        }

        for family in TemplateFamily::ALL {
            let mut seen = HashSet::new();
            for template in self.templates(family) {
                if template.value.is_empty() {
                    return Err(CatalogError::EmptyValue(family));
                }
                if !seen.insert(template.value.as_str()) {
                    return Err(CatalogError::DuplicateValue {
                        family,
                        value: template.value.clone(),
                    });
                }
                if template.fields.is_empty() {
                    return Err(CatalogError::NoFields {
                        family,
                        value: template.value.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

fn build_builtin() -> Catalog {
    use DocumentTemplate as T;

    let legal_texts = vec![
        T::new("constitution", "Constitution", "CON", &["titre", "numero", "date_promulgation", "journal_officiel", "contenu", "domaine_juridique", "status", "auteur", "organisation"]),
        T::new("accord_international", "Accord International", "ACI", &["titre", "numero", "date_signature", "parties", "contenu", "domaine", "ratification", "organisation"]),
        T::new("convention_internationale", "Convention Internationale", "CVI", &["titre", "numero", "date_signature", "parties", "contenu", "domaine", "ratification", "organisation"]),
        T::new("code", "Code", "COD", &["titre", "type_code", "derniere_modification", "livre", "titre_livre", "chapitre", "section", "article", "organisation"]),
        T::new("loi_organique", "Loi Organique", "LOR", &["titre", "numero", "date_promulgation", "journal_officiel", "contenu", "domaine_juridique", "organisation"]),
        T::new("loi", "Loi", "LOI", &["titre", "numero", "date_promulgation", "journal_officiel", "contenu", "domaine_juridique", "status", "auteur", "organisation"]),
        T::new("ordonnance", "Ordonnance", "ORD", &["titre", "numero", "date_signature", "president", "contexte", "domaine", "ratification", "effet", "organisation"]),
        T::new("decret_legislatif", "Décret Législatif", "DLG", &["titre", "numero", "date_signature", "signataire", "contenu", "texte_reference", "organisation"]),
        T::new("decret_presidentiel", "Décret Présidentiel", "DPR", &["titre", "numero", "date_signature", "signataire", "contenu", "texte_reference", "organisation"]),
        T::new("decret_executif", "Décret Exécutif", "DEC", &["titre", "numero", "date_signature", "signataire", "contenu", "texte_reference", "ministere", "application", "organisation"]),
        T::new("arrete", "Arrêté", "ARR", &["titre", "numero", "ministere", "date_signature", "objet", "application", "abrogation", "publication", "organisation"]),
        T::new("arrete_interministerielle", "Arrêté interministérielle", "AIM", &["titre", "numero", "ministeres", "date_signature", "objet", "application", "organisation"]),
        T::new("arrete_ministerielle", "Arrêté ministérielle", "ARM", &["titre", "numero", "ministere", "date_signature", "objet", "application", "organisation"]),
        T::new("decision", "Décision", "DEC", &["titre", "numero", "autorite", "date_signature", "objet", "beneficiaire", "organisation"]),
        T::new("decision_interministerielle", "Décision interministérielle", "DIM", &["titre", "numero", "ministeres", "date_signature", "objet", "organisation"]),
    ];

    let procedures = vec![
        T::new("etat_civil", "État Civil", "ETI", &["nom_procedure", "documents_requis", "delai_traitement", "cout", "lieu_depot", "conditions", "pieces_jointes", "observations", "organisation"]),
        T::new("urbanisme", "Urbanisme", "URB", &["type_permis", "surface", "localisation", "documents_techniques", "frais", "commission", "zone", "contraintes", "organisation"]),
        T::new("commerce", "Commerce", "COM", &["forme_juridique", "capital_social", "activite", "associes", "siege_social", "duree", "immatriculation", "taxes", "organisation"]),
        T::new("emploi", "Emploi", "EMP", &["type_demande", "qualifications", "experience", "formation", "salaire_souhaite", "disponibilite", "organisation"]),
        T::new("sante", "Santé", "SAN", &["type_service", "carte_assurance", "medecin_traitant", "specialite", "urgence", "rendez_vous", "organisation"]),
        T::new("education", "Éducation", "EDU", &["niveau_etude", "etablissement", "diplome", "notes", "inscription", "annee_scolaire", "organisation"]),
        T::new("transport", "Transport", "TRA", &["type_permis", "categorie_vehicule", "examen_medical", "formation", "cout_total", "validite", "restrictions", "renouvellement", "organisation"]),
        T::new("fiscalite", "Fiscalité", "FIS", &["type_declaration", "periode_fiscale", "revenus", "charges", "impots", "penalites", "organisation"]),
    ];

    let organizations = [
        "Ministère de la santé et de la population",
        "Assemblée Populaire Nationale",
        "Autorité Nationale Indépendante des Elections",
        "Banque d'Algérie",
        "Conseil Constitutionnel",
        "Conseil d'État",
        "Cour Suprême",
        "Ministère de l'intérieur et des collectivités locales",
        "Ministère de l'Education Nationale",
        "Ministère de l'Enseignement Supérieur et de la Recherche Scientifique",
        "Ministère de la Justice",
        "Ministère des Finances",
        "Ministère du Commerce",
        "Ministère du Travail, de l'Emploi et de la Sécurité Sociale",
        "Ministère de l'Agriculture et du développement rural",
        "Ministère de l'Habitat et de l'Urbanisme",
        "Ministère des Transports",
        "Ministère de la Défense Nationale",
        "Ministère des Affaires Etrangères",
        "Présidence de la république",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    Catalog {
        version: BUILTIN_CATALOG_VERSION.to_string(),
        legal_texts,
        procedures,
        organizations,
    }
}
