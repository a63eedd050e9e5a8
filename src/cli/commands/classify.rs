use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::OutputFormat;
use crate::batch::classify_file;
use crate::cli::Output;
use crate::config::FilterConfig;
use crate::report;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Listing to classify, one filename per line
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write the report here instead of printing it
    #[arg(short, long, value_name = "OUT")]
    pub output: Option<PathBuf>,

    /// Output format when printing to stdout
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn execute(args: ClassifyArgs, config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = FilterConfig::load(config_path, None)?;
    let buckets = classify_file(&args.file, &config.extension_set())
        .with_context(|| format!("Failed to classify {}", args.file.display()))?;

    if let Some(out) = &args.output {
        report::write_report(out, &buckets)?;
        output.success(&format!(
            "{} entries written to {}",
            buckets.total(),
            out.display()
        ));
        return Ok(());
    }

    match args.format {
        OutputFormat::Text => print!("{}", report::render(&buckets)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&buckets)?),
    }
    Ok(())
}
