use anyhow::{Context, Result, bail};
use clap::Args;

use super::OutputFormat;
use crate::batch::{Batch, BatchReport};
use crate::cli::Output;
use crate::config::{CliOverrides, FilterConfig, OnError};

#[derive(Args)]
pub struct RunArgs {
    /// Source names to process (defaults to the configured list)
    #[arg(value_name = "SOURCE")]
    pub sources: Vec<String>,

    /// Directory holding the `<source>.txt` listings
    #[arg(long, value_name = "DIR")]
    pub input_dir: Option<String>,

    /// Continue with the remaining sources when one fails
    #[arg(long)]
    pub keep_going: bool,

    /// Classify and summarize without writing reports
    #[arg(long)]
    pub dry_run: bool,

    /// Summary format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn execute(args: RunArgs, config_path: Option<&str>, output: &Output) -> Result<()> {
    let overrides = CliOverrides {
        input_dir: args.input_dir.clone(),
        on_error: args.keep_going.then_some(OnError::Skip),
        sources: args.sources.clone(),
    };
    let config = FilterConfig::load(config_path, Some(&overrides))?;

    let batch = Batch::new(config).dry_run(args.dry_run);
    output.verbose(&format!(
        "Processing {} source(s) from '{}'",
        batch.config().sources.len(),
        batch.config().input_dir
    ));

    let report = batch.run().context("Batch aborted")?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_summary(&report, args.dry_run, output),
    }

    if !report.is_success() {
        bail!("{} source(s) failed", report.failed.len());
    }
    Ok(())
}

fn print_summary(report: &BatchReport, dry_run: bool, output: &Output) {
    output.header(if dry_run { "Dry run" } else { "Filter results" });

    for source in &report.processed {
        output.count("❯", &source.source, source.lines);
        output.breakdown("recognized", source.recognized);
        output.breakdown("unknown", source.unrecognized);
        output.breakdown("malformed", source.malformed);
        if source.written {
            output.key_value("report", &source.output.display().to_string());
        }
    }

    for failure in &report.failed {
        output.error(&format!("{}: {}", failure.source, failure.error));
    }

    if dry_run {
        output.info("Dry run: no reports were written");
    }
    if report.is_success() {
        output.success(&format!("{} source(s) processed", report.processed.len()));
    }
}
