//! Sequential processing of every configured source

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::classifier::{self, Buckets, ExtensionSet};
use crate::config::{FilterConfig, OnError};
use crate::error::FilterResult;
use crate::report;

/// Outcome of filtering one source
#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    pub source: String,
    pub input: PathBuf,
    pub output: PathBuf,
    pub lines: usize,
    pub recognized: usize,
    pub unrecognized: usize,
    pub malformed: usize,
    /// False for dry runs
    pub written: bool,
}

impl SourceReport {
    fn new(source: &str, input: PathBuf, output: PathBuf, lines: usize, buckets: &Buckets) -> Self {
        Self {
            source: source.to_string(),
            input,
            output,
            lines,
            recognized: buckets.recognized.len(),
            unrecognized: buckets.unrecognized.len(),
            malformed: buckets.malformed.len(),
            written: false,
        }
    }
}

/// A source that failed while the batch was told to keep going
#[derive(Debug, Clone, Serialize)]
pub struct SourceFailure {
    pub source: String,
    pub error: String,
}

/// Aggregate outcome of a batch run
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub processed: Vec<SourceReport>,
    pub failed: Vec<SourceFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs the classifier over listings addressed by source name
pub struct Batch {
    config: FilterConfig,
    extensions: ExtensionSet,
    dry_run: bool,
}

impl Batch {
    pub fn new(config: FilterConfig) -> Self {
        let extensions = config.extension_set();
        Self {
            config,
            extensions,
            dry_run: false,
        }
    }

    /// Classify without writing any report
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Process every configured source in order
    pub fn run(&self) -> FilterResult<BatchReport> {
        self.run_sources(&self.config.sources)
    }

    /// Process `sources` in order, applying the configured failure policy
    pub fn run_sources(&self, sources: &[String]) -> FilterResult<BatchReport> {
        let mut report = BatchReport::default();

        for source in sources {
            match self.process_source(source) {
                Ok(source_report) => report.processed.push(source_report),
                Err(err) => match self.config.on_error {
                    OnError::Abort => return Err(err),
                    OnError::Skip => {
                        tracing::warn!(source = %source, "skipping source: {err}");
                        report.failed.push(SourceFailure {
                            source: source.clone(),
                            error: err.to_string(),
                        });
                    }
                },
            }
        }

        Ok(report)
    }

    /// Read, classify and write the report for one source.
    ///
    /// The report is only opened once all buckets are computed.
    pub fn process_source(&self, source: &str) -> FilterResult<SourceReport> {
        let input = self.config.input_path(source);
        let output = self.config.output_path(source);
        tracing::debug!(source, input = %input.display(), "processing source");

        let lines = report::read_listing(&input)?;
        let line_count = lines.len();
        let buckets = classifier::filter(lines, &self.extensions);
        let mut source_report = SourceReport::new(source, input, output, line_count, &buckets);

        if !self.dry_run {
            report::write_report(&source_report.output, &buckets)?;
            source_report.written = true;
            tracing::info!(
                source,
                output = %source_report.output.display(),
                recognized = source_report.recognized,
                unrecognized = source_report.unrecognized,
                malformed = source_report.malformed,
                "report written"
            );
        }

        Ok(source_report)
    }
}

/// Classify a single listing at an arbitrary path
pub fn classify_file(path: &Path, extensions: &ExtensionSet) -> FilterResult<Buckets> {
    let lines = report::read_listing(path)?;
    Ok(classifier::filter(lines, extensions))
}
