//! Info command implementation

use clap::Args;
use parlance_core::config::{Config, ConfigSources};
use parlance_core::lexicon::{Lexicon, LoadReport, LoadWarning};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::paint;

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            max_input_bytes: config.input_limit(),
        }
    }
}

#[derive(Serialize)]
struct LexiconInfo {
    keywords_file: String,
    keyword_count: usize,
    alias_groups: usize,
    verbs: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<LoadWarning>,
}

impl LexiconInfo {
    fn new(lexicon: &Lexicon, report: &LoadReport) -> Self {
        let sets = lexicon.sets();
        Self {
            keywords_file: report.source.clone(),
            keyword_count: lexicon.keywords().len(),
            alias_groups: lexicon.aliases().len(),
            verbs: sets.verbs.len() + sets.auxiliary_verbs.len(),
            warnings: report.warnings.clone(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
    lexicon: LexiconInfo,
}

/// Print package, configuration and lexicon information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
/// * `lexicon` - Lexicon built from `config`, with its keyword load report
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
    lexicon: (&Lexicon, &LoadReport),
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
        lexicon: LexiconInfo::new(lexicon.0, lexicon.1),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    println!(
        "{} {}",
        paint::strong(full_info.package.name),
        paint::good(full_info.package.version)
    );
    if !full_info.package.description.is_empty() {
        println!("{}", full_info.package.description);
    }
    if !full_info.package.license.is_empty() {
        println!("{}: {}", paint::dim("License"), full_info.package.license);
    }
    if !full_info.package.repository.is_empty() {
        println!(
            "{}: {}",
            paint::dim("Repository"),
            paint::link(full_info.package.repository)
        );
    }

    println!();
    println!("{}", paint::heading("Configuration"));
    if let Some(ref path) = full_info.config.config_file {
        println!("{}: {}", paint::dim("Config file"), paint::link(path));
    } else {
        println!("{}: {}", paint::dim("Config file"), paint::caution("none loaded"));
    }
    println!("{}: {}", paint::dim("Log level"), full_info.config.log_level);
    if let Some(ref dir) = full_info.config.log_dir {
        println!("{}: {}", paint::dim("Log directory"), dir);
    }
    match full_info.config.max_input_bytes {
        Some(max) => println!("{}: {max} bytes", paint::dim("Input limit")),
        None => println!("{}: {}", paint::dim("Input limit"), paint::caution("disabled")),
    }

    let lex = &full_info.lexicon;
    println!();
    println!("{}", paint::heading("Lexicon"));
    println!("{}: {}", paint::dim("Keywords file"), paint::link(&lex.keywords_file));
    println!("{}: {}", paint::dim("Keywords"), lex.keyword_count);
    println!("{}: {}", paint::dim("Alias groups"), lex.alias_groups);
    println!("{}: {}", paint::dim("Verbs"), lex.verbs);
    for warning in &lex.warnings {
        println!("  {} {warning}", paint::caution("warning:"));
    }

    Ok(())
}
