//! Batch command - extract data from several OCR text files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use tracing::{debug, error, warn};

use super::extract::{extract_text, DocumentKind};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Kind of document
    #[arg(value_enum)]
    kind: DocumentKind,

    /// Glob pattern of text files
    #[arg(required = true)]
    input: String,

    /// Output directory (default: next to each input)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::config::load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping unreadable path {}: {}", e.path().display(), e.error());
                None
            }
        })
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No files matching pattern: {}", args.input);
    }

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
    }

    let mut succeeded = 0usize;
    let mut failed = 0usize;

    for path in &files {
        let result = (|| -> anyhow::Result<PathBuf> {
            let text = fs::read_to_string(path)?;
            let extracted = extract_text(args.kind, &text, &config);

            let file_name = path
                .file_stem()
                .map(|s| format!("{}.json", s.to_string_lossy()))
                .unwrap_or_else(|| "output.json".to_string());
            let target = match &args.output_dir {
                Some(dir) => dir.join(file_name),
                None => path.with_file_name(file_name),
            };

            fs::write(&target, extracted.to_json()?)?;
            Ok(target)
        })();

        match result {
            Ok(target) => {
                debug!("{} -> {}", path.display(), target.display());
                succeeded += 1;
            }
            Err(e) if args.continue_on_error => {
                warn!("Failed to process {}: {}", path.display(), e);
                failed += 1;
            }
            Err(e) => {
                error!("Failed to process {}: {}", path.display(), e);
                return Err(e);
            }
        }
    }

    eprintln!(
        "{} Processed {} files ({} failed) in {:?}",
        style("✓").green(),
        succeeded,
        failed,
        start.elapsed()
    );

    Ok(())
}
