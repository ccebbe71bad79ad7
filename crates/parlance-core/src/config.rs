//! Layered configuration.
//!
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. `config.<ext>` in the user config directory
//! 3. project files in the nearest directory, walking up from the search
//!    root, that has any: `.parlance.<ext>` then `parlance.<ext>`. The walk
//!    ends at a repository root (a directory holding `.git`).
//! 4. files given with [`ConfigLoader::with_file`], in order
//! 5. `PARLANCE_*` environment variables
//!
//! `<ext>` is `toml`, `yaml`, `yml` or `json`. Every file found is merged, so
//! a later file only overrides the keys it sets.
//!
//! ```no_run
//! use camino::Utf8PathBuf;
//! use parlance_core::config::ConfigLoader;
//!
//! let cwd = Utf8PathBuf::try_from(std::env::current_dir().unwrap()).unwrap();
//! let (config, sources) = ConfigLoader::new().with_project_search(&cwd).load().unwrap();
//! let keywords = config.keywords_path(&sources, &cwd);
//! ```

use std::collections::BTreeMap;

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;

/// Keyword source used when none is configured, relative to the working
/// directory.
pub const DEFAULT_KEYWORDS_FILE: &str = "keywords.txt";

const APP_NAME: &str = "parlance";
const ENV_PREFIX: &str = "PARLANCE_";
const EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];
const REPO_MARKER: &str = ".git";

/// Settings for the lexicon, input handling and logging.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Default stderr log level when neither `-q`/`-v` nor `RUST_LOG` is given.
    pub log_level: LogLevel,
    /// Directory for JSONL log files. No log file is written when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Path to the `key=value` keyword source.
    ///
    /// Relative paths resolve against the directory of the config file that
    /// was loaded, or the working directory when no file was loaded.
    pub keywords_file: Option<Utf8PathBuf>,
    /// Extra alias groups (base word → synonyms), merged with the built-in ones.
    pub aliases: Option<BTreeMap<String, Vec<String>>>,
    /// Extra words to treat as action verbs.
    pub extra_verbs: Option<Vec<String>>,
    /// Largest input `analyze` accepts, in bytes. Defaults to 1 MiB.
    pub max_input_bytes: Option<usize>,
    /// Accept input of any size; `max_input_bytes` is ignored.
    pub disable_input_limit: bool,
}

impl Config {
    /// Resolve the keyword source path.
    ///
    /// A configured relative path is taken relative to the primary config
    /// file's directory; without a configured path, `keywords.txt` in `cwd`.
    pub fn keywords_path(&self, sources: &ConfigSources, cwd: &Utf8Path) -> Utf8PathBuf {
        let Some(ref configured) = self.keywords_file else {
            return cwd.join(DEFAULT_KEYWORDS_FILE);
        };
        if configured.is_absolute() {
            return configured.clone();
        }
        let base = sources
            .primary_file()
            .and_then(Utf8Path::parent)
            .unwrap_or(cwd);
        base.join(configured)
    }

    /// Byte limit for `analyze` input, or `None` when the limit is disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            return None;
        }
        Some(self.max_input_bytes.unwrap_or(crate::DEFAULT_MAX_INPUT_BYTES))
    }
}

/// Default log level.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Builder and analyzer detail.
    Debug,
    /// Startup summary.
    #[default]
    Info,
    /// Unreadable keyword sources and skipped lines.
    Warn,
    /// Fatal errors only.
    Error,
}

impl LogLevel {
    /// The level as an `EnvFilter` directive.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// The files a [`Config`] was merged from.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// User config file, if one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Project files from the nearest directory that has any, dotfiles first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// Files given explicitly, in the order given.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Every file, lowest precedence first.
    pub fn files(&self) -> impl Iterator<Item = &Utf8Path> {
        self.user_file
            .iter()
            .chain(&self.project_files)
            .chain(&self.explicit_files)
            .map(Utf8PathBuf::as_path)
    }

    /// The file that won: the last one merged.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.files().last()
    }
}

/// Collects config sources and merges them into a [`Config`].
#[derive(Debug)]
pub struct ConfigLoader {
    search_root: Option<Utf8PathBuf>,
    user_config: bool,
    files: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// A loader that reads the user config and nothing else until told to.
    pub const fn new() -> Self {
        Self {
            search_root: None,
            user_config: true,
            files: Vec::new(),
        }
    }

    /// Look for project files starting at `dir`.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, dir: P) -> Self {
        self.search_root = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Whether to read the user config file.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.user_config = include;
        self
    }

    /// Merge `path` after every discovered file.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.files.push(path.as_ref().to_path_buf());
        self
    }

    /// Merge all sources.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Deserialize`](crate::error::ConfigError::Deserialize)
    /// when a file cannot be parsed or a value has the wrong type.
    #[tracing::instrument(skip(self), fields(search_root = ?self.search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = ConfigSources {
            user_file: if self.user_config {
                find_user_config()
            } else {
                None
            },
            project_files: self
                .search_root
                .as_deref()
                .map(discover_project_files)
                .unwrap_or_default(),
            explicit_files: self.files,
        };

        let figment = sources
            .files()
            .fold(
                Figment::from(Serialized::defaults(Config::default())),
                |figment, path| FileFormat::of(path).merge(figment, path),
            )
            .merge(Env::prefixed(ENV_PREFIX));

        let config: Config = figment.extract().map_err(Box::new)?;
        tracing::debug!(
            files = sources.files().count(),
            primary = ?sources.primary_file(),
            keywords_file = ?config.keywords_file,
            "configuration loaded"
        );
        Ok((config, sources))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    /// Anything unrecognized is read as TOML.
    fn of(path: &Utf8Path) -> Self {
        match path.extension() {
            Some("yaml" | "yml") => Self::Yaml,
            Some("json") => Self::Json,
            _ => Self::Toml,
        }
    }

    fn merge(self, figment: Figment, path: &Utf8Path) -> Figment {
        match self {
            Self::Toml => figment.merge(Toml::file_exact(path.as_str())),
            Self::Yaml => figment.merge(Yaml::file_exact(path.as_str())),
            Self::Json => figment.merge(Json::file_exact(path.as_str())),
        }
    }
}

fn config_files_in(dir: &Utf8Path) -> Vec<Utf8PathBuf> {
    let dotfiles = EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!(".{APP_NAME}.{ext}")));
    let regular = EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{APP_NAME}.{ext}")));
    dotfiles.chain(regular).filter(|p| p.is_file()).collect()
}

fn discover_project_files(start: &Utf8Path) -> Vec<Utf8PathBuf> {
    for dir in start.ancestors() {
        let found = config_files_in(dir);
        if !found.is_empty() {
            return found;
        }
        if dir.join(REPO_MARKER).exists() {
            tracing::trace!(%dir, "stopped config search at repository root");
            break;
        }
    }
    Vec::new()
}

fn find_user_config() -> Option<Utf8PathBuf> {
    let dir = user_config_dir()?;
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

/// `~/.config/parlance` on Linux, the platform equivalent elsewhere.
fn user_config_dir() -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()
}
