//! CLI for legal text and administrative procedure forms.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, catalog, config, extract, schema};

/// Extract form data from OCR text and generate form schemas
#[derive(Parser)]
#[command(name = "lexform")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract structured data from OCR text
    Extract(extract::ExtractArgs),

    /// Extract structured data from several OCR text files
    Batch(batch::BatchArgs),

    /// Generate a form schema from a template or from OCR text
    Schema(schema::SchemaArgs),

    /// List the document templates of the catalog
    Catalog(catalog::CatalogArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Extract(args) => extract::run(args, config_path),
        Commands::Batch(args) => batch::run(args, config_path),
        Commands::Schema(args) => schema::run(args, config_path),
        Commands::Catalog(args) => catalog::run(args, config_path),
        Commands::Config(args) => config::run(args, config_path),
    }
}
