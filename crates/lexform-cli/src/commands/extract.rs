//! Extract command - structured data from the OCR text of one document.

use std::fmt::Display;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use tracing::info;

use lexform_core::models::config::LexformConfig;
use lexform_core::{
    DocumentExtractor, FormValues, LegalTextData, LegalTextExtractor, ProcedureData,
    ProcedureExtractor,
};

use super::{read_input, write_output};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Kind of document
    #[arg(value_enum)]
    pub kind: DocumentKind,

    /// Input text file (default: stdin)
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Print the resulting form values instead of the extraction record
    #[arg(long)]
    pub prefill: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DocumentKind {
    /// Legal text (loi, décret, ordonnance, arrêté)
    Legal,
    /// Administrative procedure
    Procedure,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

/// Result of extracting one document.
pub enum Extracted {
    Legal(LegalTextData),
    Procedure(ProcedureData),
}

impl Extracted {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(match self {
            Self::Legal(data) => serde_json::to_string_pretty(data)?,
            Self::Procedure(data) => serde_json::to_string_pretty(data)?,
        })
    }

    pub fn form_values(&self) -> FormValues {
        let mut values = FormValues::new();
        match self {
            Self::Legal(data) => values.apply_legal_text(data),
            Self::Procedure(data) => values.apply_procedure(data),
        }
        values
    }
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::config::load_config(config_path)?;
    let text = read_input(args.input.as_deref())?;

    info!("Extracting {:?} data from {} bytes of text", args.kind, text.len());
    let extracted = extract_text(args.kind, &text, &config);

    let output = if args.prefill {
        match args.format {
            OutputFormat::Json => serde_json::to_string_pretty(&extracted.form_values())?,
            OutputFormat::Text => format_values(&extracted.form_values()),
        }
    } else {
        match args.format {
            OutputFormat::Json => extracted.to_json()?,
            OutputFormat::Text => format_text(&extracted),
        }
    };

    write_output(&output, args.output.as_deref())
}

pub fn extract_text(kind: DocumentKind, text: &str, config: &LexformConfig) -> Extracted {
    match kind {
        DocumentKind::Legal => Extracted::Legal(
            LegalTextExtractor::new()
                .with_min_title_length(config.extraction.min_title_length)
                .extract(text),
        ),
        DocumentKind::Procedure => Extracted::Procedure(
            ProcedureExtractor::new()
                .with_min_name_length(config.extraction.min_procedure_name_length)
                .extract(text),
        ),
    }
}

fn format_text(extracted: &Extracted) -> String {
    let rows: Vec<(&str, String)> = match extracted {
        Extracted::Legal(data) => vec![
            ("Type", or_missing(data.text_type)),
            ("Reference", or_missing(data.reference.as_ref())),
            ("Date", or_missing(data.publication_date)),
            ("Authority", or_missing(data.authority)),
            ("Title", or_missing(data.title.as_ref())),
            ("Language", data.language.to_string()),
        ],
        Extracted::Procedure(data) => vec![
            ("Type", or_missing(data.procedure_type)),
            ("Sector", or_missing(data.sector)),
            ("Name", or_missing(data.name.as_ref())),
        ],
    };

    rows.iter()
        .map(|(label, value)| format!("{:<13}{}", format!("{label}:"), value))
        .collect::<Vec<_>>()
        .join("\n")
}

fn or_missing<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn format_values(values: &FormValues) -> String {
    values
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_text_legal() {
        let config = LexformConfig::default();
        let extracted = extract_text(DocumentKind::Legal, "Loi n° 90-11 du 21/04/1990", &config);

        assert_eq!(
            format_text(&extracted),
            "Type:        Loi\n\
             Reference:   90-11\n\
             Date:        1990-04-21\n\
             Authority:   -\n\
             Title:       Loi n° 90-11 du 21/04/1990\n\
             Language:    fr"
        );
    }

    #[test]
    fn test_format_text_procedure_missing_fields() {
        let config = LexformConfig::default();
        let extracted = extract_text(DocumentKind::Procedure, "Acte", &config);

        assert_eq!(format_text(&extracted), "Type:        -\nSector:      -\nName:        -");
    }
}
