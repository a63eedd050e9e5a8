//! Canonical extension matching
//!
//! A raw extension is recognized when its lowercase form starts with the
//! lowercase form of a canonical extension. Every canonical extension is
//! tried in list order and a later match replaces an earlier one, so with
//! `["tex", "texas"]` the raw token `texasfile` normalizes to `texas`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD_TOKEN: Regex = Regex::new(r"^\w+$").unwrap();
}

/// Extensions recognized when no configuration overrides them
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "wav", "tex", "arp", "msh", "rs", "ara", "are", "aras", "py", "ars", "mp3", "xml", "txt",
    "auf", "alg", "ark", "tga",
];

/// Ordered list of canonical extension tokens, stored lowercase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    tokens: Vec<String>,
}

impl ExtensionSet {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(|token| token.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Return the canonical extension `raw` normalizes to, if any.
    ///
    /// The scan never stops early: the last canonical extension that
    /// prefix-matches wins.
    pub fn normalize(&self, raw: &str) -> Option<&str> {
        let raw = raw.to_lowercase();
        let mut matched = None;
        for token in &self.tokens {
            if raw.starts_with(token.as_str()) {
                matched = Some(token.as_str());
            }
        }
        matched
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}

/// Whether `token` can be used as a canonical extension.
///
/// Uses the same Unicode `\w` class as the listing shape check.
pub fn is_valid_token(token: &str) -> bool {
    WORD_TOKEN.is_match(token)
}
