//! Filename classification
//!
//! Raw listing lines go through two stages:
//!
//! 1. [`prefilter`] sorts the lines, drops duplicates and keeps only those that
//!    end with an extension-like suffix (`.` followed by 2 to 10 word
//!    characters).
//! 2. [`classify`] splits every candidate on `.` and routes it into one of the
//!    three [`Buckets`]: recognized, unrecognized or malformed.

pub mod extensions;
pub mod ordered;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

pub use extensions::{DEFAULT_EXTENSIONS, ExtensionSet};
pub use ordered::OrderedSet;

lazy_static! {
    static ref EXTENSION_SUFFIX: Regex = Regex::new(r"\.\w{2,10}$").unwrap();
}

/// Which bucket an entry was routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Recognized,
    Unrecognized,
    Malformed,
}

/// Result of classifying a single candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub bucket: Bucket,
    /// `basename.extension` for well-formed entries, the trimmed entry otherwise
    pub entry: String,
}

/// The three deduplicated output collections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Buckets {
    pub recognized: OrderedSet,
    pub unrecognized: OrderedSet,
    pub malformed: OrderedSet,
}

impl Buckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a classified entry, returning `false` if the bucket already had it
    pub fn push(&mut self, classification: Classification) -> bool {
        self.bucket_mut(classification.bucket)
            .insert(classification.entry)
    }

    pub fn get(&self, bucket: Bucket) -> &OrderedSet {
        match bucket {
            Bucket::Recognized => &self.recognized,
            Bucket::Unrecognized => &self.unrecognized,
            Bucket::Malformed => &self.malformed,
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut OrderedSet {
        match bucket {
            Bucket::Recognized => &mut self.recognized,
            Bucket::Unrecognized => &mut self.unrecognized,
            Bucket::Malformed => &mut self.malformed,
        }
    }

    /// Entries of `bucket`, each terminated with `\n`
    pub fn lines(&self, bucket: Bucket) -> impl Iterator<Item = String> + '_ {
        self.get(bucket).iter().map(|entry| format!("{entry}\n"))
    }

    pub fn total(&self) -> usize {
        self.recognized.len() + self.unrecognized.len() + self.malformed.len()
    }
}

/// Whether `line` ends with a plausible extension suffix
pub fn has_extension_suffix(line: &str) -> bool {
    EXTENSION_SUFFIX.is_match(line)
}

/// Sort, dedup and shape-check raw lines.
///
/// Because sorting happens before the dedup, the surviving order is
/// lexicographic rather than input order.
pub fn prefilter<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut sorted: Vec<String> = lines.into_iter().map(Into::into).collect();
    sorted.sort();

    sorted
        .into_iter()
        .collect::<OrderedSet>()
        .into_vec()
        .into_iter()
        .filter(|line| has_extension_suffix(line))
        .collect()
}

/// Classify one candidate against the canonical extensions
pub fn classify_entry(candidate: &str, extensions: &ExtensionSet) -> Classification {
    let candidate = candidate.trim();
    let parts: Vec<&str> = candidate.split('.').collect();

    let [basename, raw_extension] = parts.as_slice() else {
        return Classification {
            bucket: Bucket::Malformed,
            entry: parts.join("."),
        };
    };

    match extensions.normalize(raw_extension) {
        Some(canonical) => Classification {
            bucket: Bucket::Recognized,
            entry: format!("{basename}.{canonical}"),
        },
        None => Classification {
            bucket: Bucket::Unrecognized,
            entry: format!("{basename}.{raw_extension}"),
        },
    }
}

/// Route every candidate into exactly one bucket
pub fn classify<I, S>(candidates: I, extensions: &ExtensionSet) -> Buckets
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut buckets = Buckets::new();
    for candidate in candidates {
        let classification = classify_entry(candidate.as_ref(), extensions);
        if !buckets.push(classification.clone()) {
            tracing::trace!(
                entry = %classification.entry,
                bucket = ?classification.bucket,
                "duplicate entry skipped"
            );
        }
    }
    buckets
}

/// [`prefilter`] followed by [`classify`]
pub fn filter<I, S>(lines: I, extensions: &ExtensionSet) -> Buckets
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let candidates = prefilter(lines);
    tracing::debug!(candidates = candidates.len(), "prefilter complete");
    classify(&candidates, extensions)
}
