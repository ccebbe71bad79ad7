//! Error types for parlance-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors from loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while reading lexicon sources.
///
/// The [`LexiconBuilder`](crate::lexicon::LexiconBuilder) never lets these
/// escape: they are downgraded to [`LoadWarning`](crate::lexicon::LoadWarning)
/// entries so startup always completes.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// The keyword source could not be read.
    #[error("failed to read keyword source {path}: {source}")]
    Io {
        /// Path of the keyword source.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using [`LexiconError`].
pub type LexiconResult<T> = Result<T, LexiconError>;
