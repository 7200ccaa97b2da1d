//! Schema command - form field list from a catalog template or from OCR text.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use console::style;

use lexform_core::schema::TextSchemaParser;
use lexform_core::{generate_fields, FieldDescriptor};

use super::{read_input, write_output, FamilyArg};

/// Arguments for the schema command.
#[derive(Args)]
pub struct SchemaArgs {
    /// Template family
    #[arg(short = 'F', long, value_enum, requires = "template")]
    family: Option<FamilyArg>,

    /// Template value, e.g. "loi" or "urbanisme"
    #[arg(short, long, requires = "family")]
    template: Option<String>,

    /// Build the schema from an OCR text file instead ("-" for stdin)
    #[arg(long, conflicts_with_all = ["family", "template"])]
    from_text: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: SchemaFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SchemaFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

pub fn run(args: SchemaArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::config::load_config(config_path)?;

    let fields = match (&args.from_text, args.family, &args.template) {
        (Some(path), _, _) => {
            let text = read_input(Some(path.as_path()))?;
            TextSchemaParser::new()
                .with_textarea_line_length(config.schema.textarea_line_length)
                .parse(&text)
        }
        (None, Some(family), Some(template)) => {
            let catalog = config.load_catalog()?;
            let fields = generate_fields(family.into(), template, &catalog);
            if fields.is_empty() {
                eprintln!(
                    "{} No template {:?} in {}",
                    style("!").yellow(),
                    template,
                    lexform_core::TemplateFamily::from(family).label()
                );
            }
            fields
        }
        _ => anyhow::bail!("Either --family and --template, or --from-text is required"),
    };

    let output = match args.format {
        SchemaFormat::Json => serde_json::to_string_pretty(&fields)?,
        SchemaFormat::Csv => format_csv(&fields)?,
    };

    write_output(&output, args.output.as_deref())
}

fn format_csv(fields: &[FieldDescriptor]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["id", "name", "label", "type", "required", "placeholder", "description", "options"])?;

    for field in fields {
        let options = field.options.as_ref().map(|o| o.join("|")).unwrap_or_default();
        wtr.write_record([
            field.id.as_str(),
            field.name.as_str(),
            field.label.as_str(),
            field.kind.as_str(),
            if field.required { "true" } else { "false" },
            field.placeholder.as_str(),
            field.description.as_str(),
            options.as_str(),
        ])?;
    }

    let data = wtr.into_inner()?;
    Ok(String::from_utf8(data)?.trim_end().to_string())
}
