//! Configuration for extfilter
//!
//! [`FilterConfig`] is the explicit structure handed to the batch runner: which
//! sources to process, where their listings live and which canonical
//! extensions are recognized. It is assembled by [`FilterConfig::load`] from
//! embedded defaults, optional config files, `EXTFILTER_*` environment
//! variables and CLI overrides.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

use crate::classifier::{DEFAULT_EXTENSIONS, ExtensionSet, extensions::is_valid_token};
use crate::error::{FilterError, FilterResult};

mod loader;
pub mod overrides;
pub mod smart_load;

pub use loader::ConfigFormat;
pub use overrides::CliOverrides;

/// Source names processed when no configuration overrides them
pub const DEFAULT_SOURCES: &[&str] = &[
    "character",
    "fx",
    "helper",
    "interface",
    "map",
    "object",
    "setting",
    "tile",
    "gacshell",
];

/// What the batch does when a source cannot be read or written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OnError {
    /// Stop at the first failing source
    #[default]
    Abort,
    /// Log the failure and continue with the next source
    Skip,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Directory holding the listings; empty means the working directory
    #[serde(deserialize_with = "scalar_string")]
    pub input_dir: String,

    /// Appended to a source name to form its listing filename
    #[serde(deserialize_with = "scalar_string")]
    pub input_suffix: String,

    /// Appended to a source name to form its report filename
    #[serde(deserialize_with = "scalar_string")]
    pub output_suffix: String,

    pub on_error: OnError,

    /// Logical source names, processed in order
    #[serde(deserialize_with = "scalar_strings")]
    pub sources: Vec<String>,

    /// Canonical extensions; order decides ties (last match wins)
    #[serde(deserialize_with = "scalar_strings")]
    pub extensions: Vec<String>,
}

/// A config value that is meant as text. Environment values such as
/// `EXTFILTER_INPUT_DIR=2024` arrive typed, so numbers and booleans are
/// accepted and turned back into strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(text) => text,
            Scalar::Unsigned(n) => n.to_string(),
            Scalar::Signed(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Scalar::deserialize(deserializer).map(String::from)
}

fn scalar_strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let values = Vec::<Scalar>::deserialize(deserializer)?;
    Ok(values.into_iter().map(String::from).collect())
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            input_dir: "output".to_string(),
            input_suffix: ".txt".to_string(),
            output_suffix: ".filter.txt".to_string(),
            on_error: OnError::Abort,
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FilterConfig {
    /// Validate and normalize the configuration.
    ///
    /// Extension tokens must be word characters and are lowercased. Source
    /// names cannot be blank.
    pub fn validate(mut self) -> FilterResult<Self> {
        if self.extensions.is_empty() {
            return Err(FilterError::Config(
                "at least one canonical extension must be configured".to_string(),
            ));
        }

        for extension in &mut self.extensions {
            if !is_valid_token(extension) {
                return Err(FilterError::Config(format!(
                    "extension '{extension}' must be a non-empty run of word characters"
                )));
            }
            *extension = extension.to_lowercase();
        }

        if let Some(source) = self.sources.iter().find(|s| s.trim().is_empty()) {
            return Err(FilterError::Config(format!(
                "source names cannot be blank (got '{source}')"
            )));
        }

        if self.input_suffix == self.output_suffix {
            return Err(FilterError::Config(
                "input_suffix and output_suffix must differ".to_string(),
            ));
        }

        Ok(self)
    }

    pub fn extension_set(&self) -> ExtensionSet {
        ExtensionSet::new(&self.extensions)
    }

    /// Path of the listing for `source`
    pub fn input_path(&self, source: &str) -> PathBuf {
        self.base_dir().join(format!("{source}{}", self.input_suffix))
    }

    /// Path of the report for `source`
    pub fn output_path(&self, source: &str) -> PathBuf {
        self.base_dir().join(format!("{source}{}", self.output_suffix))
    }

    fn base_dir(&self) -> PathBuf {
        if self.input_dir.is_empty() {
            PathBuf::new()
        } else {
            PathBuf::from(&self.input_dir)
        }
    }
}
