//! Common regex patterns for legal text and procedure extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Legal text kinds
    pub static ref LEGAL_TEXT_TYPE: Regex = Regex::new(
        r"(?i)\b(Loi|Décret|Ordonnance|Arrêté)\b"
    ).unwrap();

    // Reference number: "n° 21-123", "N 05/12"
    pub static ref REFERENCE: Regex = Regex::new(
        r"[nN]°?\s*([0-9]{1,3}[-/][0-9]{1,3})"
    ).unwrap();

    // Day month year: 15/03/2021, 15-03-2021, 15 03 2021
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b([0-9]{1,2}[\s/\-][0-9]{1,2}[\s/\-][0-9]{4})\b"
    ).unwrap();

    pub static ref DATE_SEPARATOR: Regex = Regex::new(
        r"[\s/]"
    ).unwrap();

    // Issuing authorities
    pub static ref AUTHORITY: Regex = Regex::new(
        r"(?i)(Président|Gouvernement|Ministre|Ministère)"
    ).unwrap();

    // Procedure kinds
    pub static ref PROCEDURE_TYPE: Regex = Regex::new(
        r"(?i)\b(demande|autorisation|licence|permis|certificat|déclaration)\b"
    ).unwrap();

    // Procedure sectors
    pub static ref SECTOR: Regex = Regex::new(
        r"(?i)(commerce|industrie|agriculture|transport|urbanisme|éducation)"
    ).unwrap();

    // Script detection
    pub static ref ARABIC_CHARS: Regex = Regex::new(
        r"[\u{0600}-\u{06FF}\u{0750}-\u{077F}]"
    ).unwrap();

    pub static ref FRENCH_ACCENTED_CHARS: Regex = Regex::new(
        r"[àâäéèêëïîôöùûüÿçÀÂÄÉÈÊËÏÎÔÖÙÛÜŸÇ]"
    ).unwrap();
}
