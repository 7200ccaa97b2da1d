//! CLI subcommands.

pub mod batch;
pub mod catalog;
pub mod config;
pub mod extract;
pub mod schema;

use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use lexform_core::TemplateFamily;

/// Template family as given on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FamilyArg {
    /// Legal texts (textes juridiques)
    Legal,
    /// Administrative procedures (procédures administratives)
    Procedure,
}

impl From<FamilyArg> for TemplateFamily {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::Legal => TemplateFamily::TextesJuridiques,
            FamilyArg::Procedure => TemplateFamily::ProceduresAdministratives,
        }
    }
}

/// Read OCR text from a file, or from stdin when no path is given or the path is `-`.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Write to a file, or print to stdout.
pub fn write_output(output: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, output)?;
            eprintln!(
                "{} Output written to {}",
                console::style("✓").green(),
                path.display()
            );
        }
        None => println!("{}", output),
    }
    Ok(())
}
