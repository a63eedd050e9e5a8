//! # extfilter
//!
//! Sorts line-oriented filename listings into three buckets: entries whose
//! extension matches a known canonical extension, entries with an unknown
//! extension, and malformed entries that do not split into exactly one
//! basename and one extension.
//!
//! ```bash
//! # Filter output/<source>.txt into output/<source>.filter.txt for every
//! # configured source
//! extfilter run
//!
//! # Classify one listing and print the report
//! extfilter classify listing.txt
//! ```

pub mod batch;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;

pub use batch::{Batch, BatchReport, SourceReport};
pub use classifier::{Bucket, Buckets, ExtensionSet, classify, filter, prefilter};
pub use cli::{Cli, Output};
pub use config::FilterConfig;
pub use error::{FilterError, FilterResult};
