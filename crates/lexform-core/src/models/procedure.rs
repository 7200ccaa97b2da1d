//! Administrative procedure extraction record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of administrative procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcedureType {
    Demande,
    Autorisation,
    Licence,
    Permis,
    Certificat,
    #[serde(rename = "Déclaration")]
    Declaration,
}

impl ProcedureType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Demande => "Demande",
            Self::Autorisation => "Autorisation",
            Self::Licence => "Licence",
            Self::Permis => "Permis",
            Self::Certificat => "Certificat",
            Self::Declaration => "Déclaration",
        }
    }
}

impl fmt::Display for ProcedureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Economic or administrative sector of a procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    Commerce,
    Industrie,
    Agriculture,
    Transport,
    #[serde(rename = "Urbanisme et Construction")]
    Urbanisme,
    #[serde(rename = "Éducation")]
    Education,
}

impl Sector {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Commerce => "Commerce",
            Self::Industrie => "Industrie",
            Self::Agriculture => "Agriculture",
            Self::Transport => "Transport",
            Self::Urbanisme => "Urbanisme et Construction",
            Self::Education => "Éducation",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Data extracted from the OCR text of a procedure document.
///
/// No reference or date is extracted for procedures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureData {
    /// Procedure type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub procedure_type: Option<ProcedureType>,

    /// Sector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<Sector>,

    /// First significant line of the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Full trimmed OCR text.
    pub description: String,
}
