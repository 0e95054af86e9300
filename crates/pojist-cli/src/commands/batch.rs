//! Batch command - ingest many PDFs into the table.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::error;

use crate::ingest::{is_pdf, ArchiveDirs, Ingestor, Outcome};
use crate::table::CsvTable;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern of input PDFs
    #[arg(required = true)]
    input: String,

    /// CSV table to append to (default: output.csv_path from config)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Move files into the sorted/error folders like the watcher does
    #[arg(long)]
    archive: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| is_pdf(p))
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let table = CsvTable::new(args.csv.unwrap_or(config.output.csv_path));
    let mut ingestor = Ingestor::new(table);
    if args.archive {
        ingestor = ingestor.with_archive(ArchiveDirs {
            sorted: config.watch.sorted_folder,
            error: config.watch.error_folder,
        });
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut recorded = 0usize;
    let mut failed: Vec<(PathBuf, String)> = Vec::new();

    for path in files {
        match ingestor.ingest(&path) {
            Outcome::Recorded(_) => recorded += 1,
            Outcome::Rejected(reason) => {
                if !args.continue_on_error {
                    pb.abandon();
                    error!("Failed to process {}: {}", path.display(), reason);
                    anyhow::bail!("Processing failed: {}", reason);
                }
                failed.push((path, reason));
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        recorded + failed.len(),
        start.elapsed()
    );
    println!(
        "   {} recorded to {}, {} failed",
        style(recorded).green(),
        ingestor.table().path().display(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for (path, reason) in &failed {
            println!("  - {}: {}", path.display(), reason);
        }
    }

    Ok(())
}
