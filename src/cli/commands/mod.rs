//! Command implementations for the extfilter CLI

pub mod classify;
pub mod config;
pub mod run;

/// Report formats shared by `run` and `classify`
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON format
    Json,
}
