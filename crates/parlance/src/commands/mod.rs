//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use parlance_core::config::{Config, ConfigSources};
use parlance_core::lexicon::{Lexicon, LexiconBuilder, LoadReport};

pub mod analyze;
pub mod info;
pub mod lookup;
pub mod plural;
pub mod schema;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Build the lexicon from configuration.
///
/// A missing or partly malformed keyword source is not an error. Each
/// problem is logged at `warn` and listed in the returned [`LoadReport`].
#[tracing::instrument(skip_all, fields(cwd = %cwd))]
pub fn load_lexicon(
    config: &Config,
    sources: &ConfigSources,
    cwd: &Utf8Path,
) -> (Lexicon, LoadReport) {
    let keywords_path = config.keywords_path(sources, cwd);
    let mut builder = LexiconBuilder::new();
    builder.apply_config(config);
    let report = builder.load_keywords_file(&keywords_path);
    for warning in &report.warnings {
        tracing::warn!(%warning, "keyword source problem");
    }
    (builder.build(), report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn read_input_file_enforces_limit() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("input.txt")).unwrap();
        std::fs::write(&path, "he like cats\n").unwrap();

        assert!(read_input_file(&path, Some(1024)).is_ok());
        let err = read_input_file(&path, Some(4)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn load_lexicon_uses_keywords_next_to_cwd() {
        let tmp = tempfile::TempDir::new().unwrap();
        let cwd = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        std::fs::write(cwd.join("keywords.txt"), "cat=Animal\n").unwrap();

        let (lexicon, report) = load_lexicon(&Config::default(), &ConfigSources::default(), &cwd);
        assert!(report.is_clean());
        assert_eq!(lexicon.keyword("kittens"), Some("Animal"));
    }

    #[test]
    fn load_lexicon_survives_missing_keywords() {
        let tmp = tempfile::TempDir::new().unwrap();
        let cwd = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();

        let (lexicon, report) = load_lexicon(&Config::default(), &ConfigSources::default(), &cwd);
        assert!(report.source_unavailable());
        assert!(lexicon.keywords().is_empty());
    }
}
