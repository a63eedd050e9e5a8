//! Reading listings and writing `.filter.txt` reports

use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::classifier::{Bucket, Buckets};
use crate::error::{FilterError, FilterResult};

lazy_static! {
    static ref LINE_BREAK: Regex = Regex::new(r"\r\n|\r|\n").unwrap();
}

/// Separator written between the recognized and unrecognized sections
pub const UNKNOWN_SEPARATOR: &str = "\n##############UNKNOW##############\n";

/// Separator written between the unrecognized and malformed sections
pub const ERROR_SEPARATOR: &str = "\n##############ERROR##############\n";

/// Read a listing as strict UTF-8, one entry per line.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn read_listing(path: &Path) -> FilterResult<Vec<String>> {
    let bytes = fs::read(path).map_err(|source| FilterError::MissingInput {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|source| FilterError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(split_lines(&content))
}

fn split_lines(content: &str) -> Vec<String> {
    let mut lines: Vec<String> = LINE_BREAK.split(content).map(str::to_string).collect();
    // A terminator at end of file does not start another line
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Render buckets in report order: recognized, unknown, error
pub fn render(buckets: &Buckets) -> String {
    let mut out = String::new();
    out.extend(buckets.lines(Bucket::Recognized));
    out.push_str(UNKNOWN_SEPARATOR);
    out.extend(buckets.lines(Bucket::Unrecognized));
    out.push_str(ERROR_SEPARATOR);
    out.extend(buckets.lines(Bucket::Malformed));
    out
}

/// Render and write a report, truncating any previous one
pub fn write_report(path: &Path, buckets: &Buckets) -> FilterResult<()> {
    fs::write(path, render(buckets)).map_err(|source| FilterError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
