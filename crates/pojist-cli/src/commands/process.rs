//! Process command - extract fields from a single PDF.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use pojist_core::{DocumentPipeline, Field, FieldRecord};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON object keyed by column name
    Json,
    /// Header and one CSV row
    Csv,
    /// Plain text listing of filled fields
    Text,
}

pub async fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);

    pb.set_message("Extracting fields...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    let record = DocumentPipeline::new().process_path(&args.input)?;

    pb.finish_and_clear();

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!(
        "Filled {} of {} fields in {:?}",
        record.filled_count(),
        Field::COUNT,
        start.elapsed()
    );

    Ok(())
}

fn format_record(record: &FieldRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_csv(record: &FieldRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(Field::header())?;
    wtr.write_record(record.values())?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &FieldRecord) -> String {
    let width = Field::ALL
        .iter()
        .map(|f| f.column().chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for (field, value) in record.iter().filter(|(_, v)| !v.is_empty()) {
        let pad = width - field.column().chars().count();
        output.push_str(&format!("{}:{} {}\n", field.column(), " ".repeat(pad), value));
    }
    output
}
