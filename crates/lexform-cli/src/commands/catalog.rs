//! Catalog command - list document templates.

use clap::Args;
use console::style;

use lexform_core::TemplateFamily;

use super::FamilyArg;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only list this family
    #[arg(short = 'F', long, value_enum)]
    family: Option<FamilyArg>,

    /// Print the whole catalog as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: CatalogArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::config::load_config(config_path)?;
    let catalog = config.load_catalog()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    let families: Vec<TemplateFamily> = match args.family {
        Some(family) => vec![family.into()],
        None => TemplateFamily::ALL.to_vec(),
    };

    println!("{} Catalog version {}", style("ℹ").blue(), catalog.version);
    for family in families {
        println!();
        println!("{} ({})", style(family.label()).bold(), family.key());
        for template in catalog.templates(family) {
            println!(
                "  {:<28} {:<4} {:<30} {} fields",
                template.value,
                template.code,
                template.label,
                template.fields.len()
            );
        }
    }

    Ok(())
}
