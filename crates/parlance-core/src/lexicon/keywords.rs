//! Keyword index and the `key=value` keyword source format.
//!
//! A keyword source has one entry per line. Blank lines and lines starting
//! with `#` are ignored; lines without exactly one `=` are reported as
//! malformed and skipped.
//!
//! ```text
//! # animals
//! cat=Animal
//! dog=Animal
//! ```

use std::collections::BTreeMap;
use std::fmt;

use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::plural::pluralize;
use crate::error::{LexiconError, LexiconResult};

/// Word to category/value mapping, including generated plurals and aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordIndex {
    entries: BTreeMap<String, String>,
}

impl KeywordIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `word` and its plural, both mapped to `value`.
    pub fn insert_with_plural(&mut self, word: &str, value: &str) {
        if let Some(plural) = pluralize(word) {
            self.entries.insert(plural, value.to_string());
        }
        self.entries.insert(word.to_string(), value.to_string());
    }

    /// Value registered for `word`.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    /// Whether `word` has a value.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Iterate over entries in word order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of words in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One parsed `key=value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    /// Lowercased keyword.
    pub word: String,
    /// Category/value string, trimmed.
    pub value: String,
    /// Line number (1-indexed) in the source.
    pub line: usize,
}

/// A recoverable problem met while loading a keyword source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadWarning {
    /// The source could not be opened or read.
    SourceUnavailable {
        /// Name or path of the source.
        source: String,
        /// Why it could not be read.
        reason: String,
    },
    /// A line did not have the `key=value` shape.
    MalformedLine {
        /// Line number (1-indexed).
        line: usize,
        /// The offending line.
        content: String,
    },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceUnavailable { source, reason } => {
                write!(f, "keyword source {source} unavailable: {reason}")
            }
            Self::MalformedLine { line, content } => {
                write!(f, "line {line}: malformed keyword entry {content:?}")
            }
        }
    }
}

/// Outcome of loading one keyword source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LoadReport {
    /// Name or path of the source.
    pub source: String,
    /// Number of entries parsed successfully.
    pub entries: usize,
    /// Problems that were skipped over.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<LoadWarning>,
}

impl LoadReport {
    /// Whether the source loaded without any warning.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Whether the source itself could not be read.
    pub fn source_unavailable(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, LoadWarning::SourceUnavailable { .. }))
    }
}

/// Parse a keyword source into entries, collecting warnings for bad lines.
pub fn parse_keywords(source: &str) -> (Vec<KeywordEntry>, Vec<LoadWarning>) {
    let mut entries = Vec::new();
    let mut warnings = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = trimmed.split('=').collect();
        let (word, value) = match parts.as_slice() {
            [key, value] => (key.trim().to_lowercase(), value.trim()),
            _ => {
                warnings.push(LoadWarning::MalformedLine {
                    line,
                    content: trimmed.to_string(),
                });
                continue;
            }
        };

        if word.is_empty() || value.is_empty() {
            warnings.push(LoadWarning::MalformedLine {
                line,
                content: trimmed.to_string(),
            });
            continue;
        }

        entries.push(KeywordEntry {
            word,
            value: value.to_string(),
            line,
        });
    }

    (entries, warnings)
}

/// Read a keyword source file into memory.
pub fn read_keyword_source(path: &Utf8Path) -> LexiconResult<String> {
    std::fs::read_to_string(path.as_std_path()).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })
}
