//! Core library for parlance.
//!
//! This crate provides the rule-based sentence classifier used by the
//! `parlance` CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`lexicon`] - Word tables, alias registry, keyword loading, plurals
//! - [`analysis`] - Sentence tagging and classification
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use parlance_core::{LexiconBuilder, Mood, SentenceType};
//!
//! let mut builder = LexiconBuilder::new();
//! builder.load_keywords_str("inline", "cat=Animal\n");
//! let lexicon = builder.build();
//!
//! let analysis = lexicon.analyze("he like cats");
//! assert!(analysis.is_sentence);
//! assert_eq!(analysis.subjects, ["him"]);
//! assert_eq!(analysis.main_object.as_deref(), Some("Animal"));
//! assert_eq!(analysis.sentence_type, SentenceType::Declarative);
//! assert_eq!(analysis.mood, Mood::Neutral);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod text;
pub mod word_lists;

pub use analysis::{Mood, Outcome, SentenceAnalysis, SentenceType, analyze_sentence};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, LexiconError, LexiconResult};
pub use lexicon::{Lexicon, LexiconBuilder, LoadReport, LoadWarning, pluralize};

/// Default maximum input size in bytes (1 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;
