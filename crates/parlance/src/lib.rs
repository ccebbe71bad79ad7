//! Argument parsing and subcommands for the `parlance` binary.
//!
//! `main.rs` loads configuration and the lexicon, then hands each
//! [`Commands`] variant to its module under [`commands`]. Output styling goes
//! through [`paint`], which honors `--color`.

pub mod commands;
pub mod paint;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// When to style terminal output.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Style stdout only when it is a color-capable terminal.
    #[default]
    Auto,
    /// Style even when piped.
    Always,
    /// Plain text.
    Never,
}

impl ColorChoice {
    /// Set the process-wide override read by [`paint`].
    pub fn apply(self) {
        match self {
            Self::Auto => owo_colors::unset_override(),
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                  Log filter (e.g., debug, parlance=trace)
    PARLANCE_LOG_PATH         Explicit log file path
    PARLANCE_LOG_DIR          Log directory
    PARLANCE_KEYWORDS_FILE    Keyword source (default: keywords.txt)
    PARLANCE_LOG_LEVEL        Default log level when RUST_LOG is unset
";

/// Global flags and the chosen subcommand.
#[derive(Parser)]
#[command(name = "parlance")]
#[command(about = "Rule-based sentence analysis for short English input", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// Subcommand; `None` only with `--version-only`.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print the bare version number and exit
    #[arg(long)]
    pub version_only: bool,

    /// Extra config file, applied over discovered ones
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Change to DIR before discovering config and keywords
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Log errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// When to style output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

/// parlance subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Find subjects, verbs and objects and classify the sentence
    Analyze(commands::analyze::AnalyzeArgs),

    /// Show what the lexicon knows about a word
    Lookup(commands::lookup::LookupArgs),

    /// Print the generated plural of each word
    Plural(commands::plural::PluralArgs),

    /// Print the JSON schema of `analyze --json` output
    Schema(commands::schema::SchemaArgs),

    /// Show package, configuration and lexicon information
    Info(commands::info::InfoArgs),
}

/// The clap command tree, for man pages and shell completions.
pub fn command() -> clap::Command {
    Cli::command()
}
