//! parlance CLI
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use parlance::{Cli, Commands, commands};
use parlance_core::config::{Config, ConfigLoader, ConfigSources};
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // clap prints help when neither a subcommand nor --version-only is given
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("cannot enter {}", dir.display()))?;
    }
    let cwd = utf8_path(std::env::current_dir()?, "working directory")?;

    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(path) = cli.config.clone() {
        loader = loader.with_file(utf8_path(path, "--config path")?);
    }
    let (config, sources) = loader.load().context("failed to load configuration")?;

    let log_dir = config.log_dir.as_ref().map(|dir| dir.as_std_path().to_path_buf());
    let _guard = observability::init_observability(
        &observability::ObservabilityConfig::from_env_with_overrides(log_dir),
        observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str()),
    )
    .context("failed to initialize logging")?;

    debug!(
        cwd = %cwd,
        config_file = ?sources.primary_file(),
        verbose = cli.verbose,
        quiet = cli.quiet,
        color = ?cli.color,
        "starting"
    );

    let result = run(command, cli.json, &config, &sources, &cwd);
    if let Err(ref err) = result {
        tracing::error!(error = %err, "command failed");
    }
    result
}

fn run(
    command: Commands,
    json: bool,
    config: &Config,
    sources: &ConfigSources,
    cwd: &Utf8Path,
) -> anyhow::Result<()> {
    match command {
        Commands::Plural(args) => commands::plural::cmd_plural(args, json),
        Commands::Schema(args) => commands::schema::cmd_schema(args),
        Commands::Analyze(args) => {
            let (lexicon, _) = commands::load_lexicon(config, sources, cwd);
            commands::analyze::cmd_analyze(args, json, &lexicon, config.input_limit())
        }
        Commands::Lookup(args) => {
            let (lexicon, _) = commands::load_lexicon(config, sources, cwd);
            commands::lookup::cmd_lookup(args, json, &lexicon)
        }
        Commands::Info(args) => {
            let (lexicon, report) = commands::load_lexicon(config, sources, cwd);
            commands::info::cmd_info(args, json, config, sources, (&lexicon, &report))
        }
    }
}

fn utf8_path(path: PathBuf, what: &str) -> anyhow::Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path)
        .map_err(|path| anyhow::anyhow!("{what} is not valid UTF-8: {}", path.display()))
}
