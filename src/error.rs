//! Error types for listing classification runs

use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a single source from being filtered
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Failed to read input listing {path}: {source}")]
    MissingInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Input listing {path} is not valid UTF-8: {source}")]
    Encoding {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    #[error("Failed to write report {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type FilterResult<T> = std::result::Result<T, FilterError>;
